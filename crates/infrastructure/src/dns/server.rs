use async_trait::async_trait;
use gateway_dns_application::use_cases::{HandleGatewayQueryUseCase, QueryDisposition};
use gateway_dns_domain::DnsQuery;
use hickory_proto::op::{Header, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::Record;
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use std::sync::Arc;
use tracing::{debug, error, warn};

use super::{GatewayResponse, RecordTypeMapper, ResponseBuilder};

/// hickory-server entry point.
///
/// In-zone queries are answered authoritatively. Out-of-zone queries and
/// unknown names covered by fallthrough are handed, untouched, to `next`.
pub struct GatewayRequestHandler<N> {
    use_case: Arc<HandleGatewayQueryUseCase>,
    next: N,
}

impl<N: RequestHandler> GatewayRequestHandler<N> {
    pub fn new(use_case: Arc<HandleGatewayQueryUseCase>, next: N) -> Self {
        Self { use_case, next }
    }

    async fn answer<R: ResponseHandler>(
        &self,
        request: &Request,
        response: GatewayResponse,
        mut response_handle: R,
    ) -> ResponseInfo {
        let mut header = Header::response_from_request(request.header());
        header.set_authoritative(true);
        header.set_recursion_available(false);
        header.set_response_code(response.rcode);

        let message = MessageResponseBuilder::from_message_request(request).build(
            header,
            response.answers.iter(),
            std::iter::empty::<&Record>(),
            response.authority.iter(),
            response.additionals.iter(),
        );

        match response_handle.send_response(message).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to send DNS response");
                failure_info(request)
            }
        }
    }
}

#[async_trait]
impl<N: RequestHandler> RequestHandler for GatewayRequestHandler<N> {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        response_handle: R,
    ) -> ResponseInfo {
        if request.message_type() != MessageType::Query {
            warn!(id = request.id(), "Response received as request");
            return send_error(request, ResponseCode::FormErr, response_handle).await;
        }

        if request.op_code() != OpCode::Query {
            debug!(op_code = ?request.op_code(), "Unsupported op code");
            return send_error(request, ResponseCode::NotImp, response_handle).await;
        }

        let Some(query) = request.queries().first() else {
            return send_error(request, ResponseCode::FormErr, response_handle).await;
        };

        let owner = query.original().name().clone();
        let record_type = RecordTypeMapper::from_hickory(query.query_type());
        let dns_query = DnsQuery::new(owner.to_string(), record_type);

        match self.use_case.execute(&dns_query).await {
            QueryDisposition::Respond(resolution) => {
                match ResponseBuilder::build(&resolution, &owner) {
                    Ok(response) => self.answer(request, response, response_handle).await,
                    Err(e) => {
                        error!(error = %e, domain = %owner, "Failed to build response");
                        send_error(request, ResponseCode::ServFail, response_handle).await
                    }
                }
            }
            QueryDisposition::Delegate(reason) => {
                debug!(domain = %owner, reason = ?reason, "Delegating to next handler");
                self.next.handle_request(request, response_handle).await
            }
            QueryDisposition::NotReady => {
                send_error(request, ResponseCode::ServFail, response_handle).await
            }
        }
    }
}

/// Terminal downstream handler: there is nothing after the gateway, so every
/// delegated query fails with SERVFAIL.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDownstream;

#[async_trait]
impl RequestHandler for NoDownstream {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        response_handle: R,
    ) -> ResponseInfo {
        debug!(id = request.id(), "No next handler for delegated query");
        send_error(request, ResponseCode::ServFail, response_handle).await
    }
}

async fn send_error<R: ResponseHandler>(
    request: &Request,
    code: ResponseCode,
    mut response_handle: R,
) -> ResponseInfo {
    let message =
        MessageResponseBuilder::from_message_request(request).error_msg(request.header(), code);

    match response_handle.send_response(message).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send DNS error response");
            failure_info(request)
        }
    }
}

fn failure_info(request: &Request) -> ResponseInfo {
    let mut header = Header::response_from_request(request.header());
    header.set_response_code(ResponseCode::ServFail);
    header.into()
}
