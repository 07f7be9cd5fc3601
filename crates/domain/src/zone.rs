use crate::names;
use std::sync::Arc;

/// SOA fields published for a zone.
///
/// Refresh, retry and expire are signed to match the wire library's SOA type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoaParams {
    /// Primary authoritative host (MNAME), fully qualified.
    pub mname: Arc<str>,
    /// Responsible mailbox (RNAME), fully qualified.
    pub rname: Arc<str>,
    pub serial: u32,
    pub refresh: i32,
    pub retry: i32,
    pub expire: i32,
    pub minimum: u32,
}

/// A domain suffix this server is authoritative for.
///
/// `origin` keeps the configured casing and is used for SOA/NS owner names;
/// `folded` is the lowercase form used for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    origin: Arc<str>,
    folded: Arc<str>,
    /// TTL of A/AAAA answers.
    pub ttl: u32,
    /// TTL of SOA, NS and glue records.
    pub soa_ttl: u32,
    pub soa: SoaParams,
}

impl Zone {
    pub fn new(origin: &str, ttl: u32, soa_ttl: u32, soa: SoaParams) -> Self {
        Self {
            origin: Arc::from(names::fqdn(origin)),
            folded: Arc::from(names::fold(origin)),
            ttl,
            soa_ttl,
            soa,
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn folded(&self) -> &str {
        &self.folded
    }

    /// Lookup key for the apex itself: the folded origin without the root dot.
    pub fn apex_key(&self) -> &str {
        names::trim_root(&self.folded)
    }
}

/// A query name that fell inside one of the configured zones.
#[derive(Debug, Clone)]
pub struct ZoneMatch {
    pub zone: Arc<Zone>,
    /// Folded query name (lowercase, fully qualified).
    pub qname: String,
    /// Folded labels below the zone origin, in query order.
    pub remainder: Vec<String>,
}

impl ZoneMatch {
    pub fn is_apex(&self) -> bool {
        self.remainder.is_empty()
    }
}

/// Picks the longest configured zone suffix covering a query name.
#[derive(Debug, Clone, Default)]
pub struct ZoneMatcher {
    zones: Vec<Arc<Zone>>,
}

impl ZoneMatcher {
    pub fn new(zones: Vec<Zone>) -> Self {
        Self {
            zones: zones.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn zones(&self) -> &[Arc<Zone>] {
        &self.zones
    }

    /// Match `qname` against every zone; `None` means outside our authority.
    pub fn matches(&self, qname: &str) -> Option<ZoneMatch> {
        let folded = names::fold(qname);

        let zone = self
            .zones
            .iter()
            .filter(|zone| names::is_within(&folded, zone.folded()))
            .max_by_key(|zone| zone.folded().len())?;

        let remainder = if folded == zone.folded() {
            Vec::new()
        } else if zone.folded() == "." {
            names::trim_root(&folded)
                .split('.')
                .map(str::to_string)
                .collect()
        } else {
            folded[..folded.len() - zone.folded().len() - 1]
                .split('.')
                .map(str::to_string)
                .collect()
        };

        Some(ZoneMatch {
            zone: Arc::clone(zone),
            qname: folded,
            remainder,
        })
    }
}
