use async_trait::async_trait;
use gateway_dns_application::ports::AddressRegistry;
use gateway_dns_application::services::{ResolutionEngine, ResourceRegistry};
use gateway_dns_application::use_cases::HandleGatewayQueryUseCase;
use gateway_dns_domain::{Fallthrough, ResourceKind, SoaParams, Zone, ZoneMatcher, names};
use gateway_dns_infrastructure::dns::GatewayRequestHandler;
use gateway_dns_infrastructure::registry::{IndexedRegistry, RegistryStore, SnapshotLoader};
use gateway_dns_infrastructure::system::{ConfiguredSelfAddress, SyncFlag};
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::{Name, RecordType};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{
    Request, RequestHandler, ResponseHandler, ResponseInfo, ServerFuture,
};
use std::io::Write;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::NamedTempFile;
use tokio::net::UdpSocket;

pub const FIXTURE_SNAPSHOT: &str = r#"
[[resources]]
kind = "Service"
hostnames = ["svc1.ns1"]
addresses = ["192.0.1.1", "fd12:3456:789a:1::"]

[[resources]]
kind = "Service"
hostnames = ["svc2.ns1"]
addresses = ["192.0.1.2"]

[[resources]]
kind = "Service"
hostnames = ["svc3.ns1"]
addresses = []

[[resources]]
kind = "Service"
hostnames = ["dns1.kube-system"]
addresses = ["192.0.1.53"]

[[resources]]
kind = "Ingress"
hostnames = ["domain.example.com"]
addresses = ["192.0.0.1"]

[[resources]]
kind = "Ingress"
hostnames = ["svc2.ns1.example.com"]
addresses = ["192.0.0.2"]

[[resources]]
kind = "Ingress"
hostnames = ["example.com"]
addresses = ["192.0.0.3"]

[[resources]]
kind = "Ingress"
hostnames = ["shadow.example.com"]
addresses = ["192.0.0.4"]

[[resources]]
kind = "HTTPRoute"
hostnames = ["domain.gw.example.com"]
addresses = ["192.0.2.1"]

[[resources]]
kind = "TLSRoute"
hostnames = ["shadow.example.com"]
addresses = ["192.0.2.4"]

[[resources]]
kind = "DNSEndpoint"
hostnames = ["endpoint.example.com"]
addresses = ["192.0.4.4"]
"#;

pub const SERIAL: u32 = 1499347823;

pub fn example_zone() -> Zone {
    Zone::new(
        "example.com.",
        60,
        60,
        SoaParams {
            mname: Arc::from(names::join("dns1.kube-system", "example.com.")),
            rname: Arc::from(names::join("hostmaster", "example.com.")),
            serial: SERIAL,
            refresh: 7200,
            retry: 1800,
            expire: 86400,
            minimum: 5,
        },
    )
}

pub fn write_snapshot(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Registry store for every kind, the loader feeding it and the readiness flag.
pub struct Store {
    pub registries: Arc<RegistryStore>,
    pub loader: SnapshotLoader,
    pub sync: Arc<SyncFlag>,
}

impl Store {
    pub fn new(path: Option<PathBuf>) -> Self {
        let registries = Arc::new(RegistryStore::new());
        let sync = Arc::new(SyncFlag::new());
        let loader = SnapshotLoader::new(
            path,
            Arc::clone(&registries),
            ResourceKind::ALL.to_vec(),
            Arc::clone(&sync),
        );
        Self {
            registries,
            loader,
            sync,
        }
    }

    pub fn registry(&self, kind: ResourceKind) -> Arc<IndexedRegistry> {
        Arc::new(self.registries.registry(kind))
    }

    pub fn use_case(&self, fallthrough: Fallthrough) -> HandleGatewayQueryUseCase {
        let zones = Arc::new(ZoneMatcher::new(vec![example_zone()]));
        let names = ResourceKind::supported_names();
        let registry = ResourceRegistry::from_enabled(names.as_slice(), |kind| {
            self.registry(kind) as Arc<dyn AddressRegistry>
        })
        .unwrap();
        let engine = Arc::new(ResolutionEngine::new(
            Arc::new(registry),
            Arc::clone(&zones),
            Arc::new(ConfiguredSelfAddress::new(["dns1.kube-system"])),
            Duration::from_secs(2),
        ));
        HandleGatewayQueryUseCase::new(zones, engine, self.sync.clone(), fallthrough)
    }
}

// ============================================================================
// Downstream marker
// ============================================================================

/// Answers every query with REFUSED so delegation is visible on the wire.
pub struct RefusingHandler;

#[async_trait]
impl RequestHandler for RefusingHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let message = MessageResponseBuilder::from_message_request(request)
            .error_msg(request.header(), ResponseCode::Refused);
        response_handle.send_response(message).await.unwrap()
    }
}

// ============================================================================
// Wire-level server and client
// ============================================================================

pub async fn start_server<T: RequestHandler>(handler: T) -> SocketAddr {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = socket.local_addr().unwrap();

    let mut server = ServerFuture::new(handler);
    server.register_socket(socket);

    tokio::spawn(async move {
        let _ = server.block_until_done().await;
    });

    addr
}

pub async fn start_gateway(store: &Store, fallthrough: Fallthrough) -> SocketAddr {
    let handler =
        GatewayRequestHandler::new(Arc::new(store.use_case(fallthrough)), RefusingHandler);
    start_server(handler).await
}

pub async fn query(server: SocketAddr, name: &str, record_type: RecordType) -> Message {
    let mut request = Message::new();
    request
        .set_id(4242)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .add_query(Query::query(Name::from_ascii(name).unwrap(), record_type));
    send(server, &request).await
}

pub async fn send(server: SocketAddr, request: &Message) -> Message {
    let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    client
        .send_to(&request.to_vec().unwrap(), server)
        .await
        .unwrap();

    let mut buf = vec![0u8; 4096];
    let (len, _) = tokio::time::timeout(Duration::from_secs(5), client.recv_from(&mut buf))
        .await
        .expect("no response from server")
        .unwrap();

    Message::from_vec(&buf[..len]).unwrap()
}
