use gateway_dns_domain::{
    AddressFamily, AnswerResult, KeyDeriver, LookupOutcome, RecordType, ZoneMatch, ZoneMatcher,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use super::{ApexSynthesizer, ResourceRegistry};
use crate::ports::SelfAddressProvider;

/// Resolves an in-zone name against the precedence-ordered registries.
pub struct ResolutionEngine {
    registry: Arc<ResourceRegistry>,
    zones: Arc<ZoneMatcher>,
    self_address: Arc<dyn SelfAddressProvider>,
    lookup_timeout: Duration,
}

impl ResolutionEngine {
    pub fn new(
        registry: Arc<ResourceRegistry>,
        zones: Arc<ZoneMatcher>,
        self_address: Arc<dyn SelfAddressProvider>,
        lookup_timeout: Duration,
    ) -> Self {
        Self {
            registry,
            zones,
            self_address,
            lookup_timeout,
        }
    }

    pub fn zones(&self) -> &ZoneMatcher {
        &self.zones
    }

    /// Classify `qtype` for a matched name.
    ///
    /// SOA queries short-circuit to the zone SOA and NS at the apex is
    /// synthesized from the self address. Everything else goes through the
    /// registries.
    pub async fn resolve(&self, matched: &ZoneMatch, qtype: RecordType) -> AnswerResult {
        if qtype == RecordType::SOA {
            return AnswerResult::ZoneSoa;
        }

        if qtype == RecordType::NS && matched.is_apex() {
            return ApexSynthesizer::new(self.self_address.as_ref())
                .synthesize(self, &matched.zone)
                .await;
        }

        self.answer(matched, qtype).await
    }

    /// Registry-backed classification, without the SOA and apex special cases.
    async fn answer(&self, matched: &ZoneMatch, qtype: RecordType) -> AnswerResult {
        match self.lookup(matched).await {
            LookupOutcome::NotFound => AnswerResult::NameError,
            LookupOutcome::Found(addresses) => {
                let filtered = AddressFamily::for_record_type(qtype)
                    .map(|family| family.filter(&addresses))
                    .unwrap_or_default();
                if filtered.is_empty() {
                    AnswerResult::NoData
                } else {
                    AnswerResult::Answer(filtered)
                }
            }
        }
    }

    /// First source, in precedence order, that recognizes the derived key.
    pub async fn lookup(&self, matched: &ZoneMatch) -> LookupOutcome {
        for source in self.registry.sources() {
            let Some(key) = KeyDeriver::derive(source.kind, matched) else {
                continue;
            };

            let outcome =
                match tokio::time::timeout(self.lookup_timeout, source.registry.lookup(&key)).await
                {
                    Ok(found) => LookupOutcome::from(found),
                    Err(_) => {
                        warn!(
                            kind = source.kind.as_str(),
                            key = %key,
                            timeout_ms = self.lookup_timeout.as_millis() as u64,
                            "Registry lookup stalled, treating key as unknown"
                        );
                        LookupOutcome::NotFound
                    }
                };

            if outcome.is_found() {
                debug!(kind = source.kind.as_str(), key = %key, "Key recognized");
                return outcome;
            }
        }

        LookupOutcome::NotFound
    }
}
