use gateway_dns_domain::{AnswerResult, DnsQuery, Fallthrough, RecordType, Zone, ZoneMatcher};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::ReadinessProbe;
use crate::services::ResolutionEngine;

/// Why a query was handed to the downstream handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelegateReason {
    OutOfZone,
    Fallthrough,
}

/// An authoritative answer ready for the response builder.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub zone: Arc<Zone>,
    /// Query name as the client sent it.
    pub qname: Arc<str>,
    pub record_type: RecordType,
    pub result: AnswerResult,
}

#[derive(Debug, Clone)]
pub enum QueryDisposition {
    Respond(Resolution),
    Delegate(DelegateReason),
    NotReady,
}

pub struct HandleGatewayQueryUseCase {
    zones: Arc<ZoneMatcher>,
    engine: Arc<ResolutionEngine>,
    readiness: Arc<dyn ReadinessProbe>,
    fallthrough: Fallthrough,
}

impl HandleGatewayQueryUseCase {
    pub fn new(
        zones: Arc<ZoneMatcher>,
        engine: Arc<ResolutionEngine>,
        readiness: Arc<dyn ReadinessProbe>,
        fallthrough: Fallthrough,
    ) -> Self {
        Self {
            zones,
            engine,
            readiness,
            fallthrough,
        }
    }

    #[instrument(skip(self, query), fields(domain = %query.name, record_type = %query.record_type))]
    pub async fn execute(&self, query: &DnsQuery) -> QueryDisposition {
        let Some(matched) = self.zones.matches(&query.name) else {
            debug!("Query outside configured zones, delegating");
            return QueryDisposition::Delegate(DelegateReason::OutOfZone);
        };

        if !self.readiness.has_synced() {
            debug!(zone = matched.zone.origin(), "Registries not synchronized yet");
            return QueryDisposition::NotReady;
        }

        let result = self.engine.resolve(&matched, query.record_type).await;

        if result.is_name_error() && self.fallthrough.through(&query.name) {
            debug!("Name unknown, falling through to next handler");
            return QueryDisposition::Delegate(DelegateReason::Fallthrough);
        }

        debug!(zone = matched.zone.origin(), result = result.label(), "Query resolved");

        QueryDisposition::Respond(Resolution {
            zone: matched.zone,
            qname: Arc::clone(&query.name),
            record_type: query.record_type,
            result,
        })
    }
}
