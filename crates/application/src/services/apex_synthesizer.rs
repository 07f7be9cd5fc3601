use gateway_dns_domain::{AddressFamily, AnswerResult, Glue, LookupOutcome, Zone};
use std::sync::Arc;
use tracing::debug;

use super::ResolutionEngine;
use crate::ports::SelfAddressProvider;

/// Builds the NS answer at a zone apex, with glue for each authoritative host.
pub struct ApexSynthesizer<'a> {
    self_address: &'a dyn SelfAddressProvider,
}

impl<'a> ApexSynthesizer<'a> {
    pub fn new(self_address: &'a dyn SelfAddressProvider) -> Self {
        Self { self_address }
    }

    pub async fn synthesize(&self, engine: &ResolutionEngine, zone: &Zone) -> AnswerResult {
        let hosts = self.self_address.authority_hosts(zone);
        let mut glue = Vec::new();

        for host in &hosts {
            let Some(matched) = engine.zones().matches(host) else {
                debug!(host = %host, "Authoritative host outside configured zones, no glue");
                continue;
            };

            // one registry walk per host, A glue ahead of AAAA
            if let LookupOutcome::Found(addresses) = engine.lookup(&matched).await {
                for family in [AddressFamily::V4, AddressFamily::V6] {
                    glue.extend(family.filter(&addresses).into_iter().map(|address| Glue {
                        host: Arc::clone(host),
                        address,
                    }));
                }
            }
        }

        AnswerResult::ApexNs { hosts, glue }
    }
}
