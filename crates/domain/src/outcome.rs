use std::net::IpAddr;
use std::sync::Arc;

/// Result of asking one or more registries about a key.
///
/// `Found` with an empty list is a recognized key with nothing published,
/// which is not the same as `NotFound`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    NotFound,
    Found(Vec<IpAddr>),
}

impl LookupOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupOutcome::Found(_))
    }
}

impl From<Option<Vec<IpAddr>>> for LookupOutcome {
    fn from(value: Option<Vec<IpAddr>>) -> Self {
        match value {
            Some(addresses) => LookupOutcome::Found(addresses),
            None => LookupOutcome::NotFound,
        }
    }
}

/// One glue address for an authoritative host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glue {
    pub host: Arc<str>,
    pub address: IpAddr,
}

/// What the engine decided for a query inside one of our zones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerResult {
    /// No registry recognized the name.
    NameError,
    /// The name exists but has nothing of the requested type.
    NoData,
    /// Addresses of the requested family.
    Answer(Vec<IpAddr>),
    /// NS set for the zone apex plus whatever glue could be found.
    ApexNs { hosts: Vec<Arc<str>>, glue: Vec<Glue> },
    /// The zone's SOA record as an answer.
    ZoneSoa,
}

impl AnswerResult {
    pub fn is_name_error(&self) -> bool {
        matches!(self, AnswerResult::NameError)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnswerResult::NameError => "name_error",
            AnswerResult::NoData => "no_data",
            AnswerResult::Answer(_) => "answer",
            AnswerResult::ApexNs { .. } => "apex_ns",
            AnswerResult::ZoneSoa => "zone_soa",
        }
    }
}
