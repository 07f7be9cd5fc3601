use gateway_dns_application::ports::SelfAddressProvider;
use gateway_dns_domain::{names, Zone};
use std::sync::Arc;

/// Authoritative hostnames built from configured labels joined to each zone,
/// e.g. `dns1.kube-system` + `example.com.`.
#[derive(Debug, Clone)]
pub struct ConfiguredSelfAddress {
    labels: Vec<String>,
}

impl ConfiguredSelfAddress {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }
}

impl SelfAddressProvider for ConfiguredSelfAddress {
    fn authority_hosts(&self, zone: &Zone) -> Vec<Arc<str>> {
        self.labels
            .iter()
            .map(|label| Arc::from(names::join(label, zone.origin())))
            .collect()
    }
}
