use crate::names;
use crate::{ResourceKind, ZoneMatch};
use std::fmt;
use std::sync::Arc;

/// Case-folded key handed to a registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LookupKey(Arc<str>);

impl LookupKey {
    /// Build a key from arbitrary text; folds case and drops the root dot.
    pub fn new(raw: &str) -> Self {
        Self(Arc::from(names::trim_root(raw.trim()).to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LookupKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Derives the key shape each registry kind is indexed by.
pub struct KeyDeriver;

impl KeyDeriver {
    /// `None` means the kind does not apply to this name and is skipped.
    ///
    /// - `Service`: the first two labels below the zone (`name.namespace`).
    /// - everything else: the full folded query name, or the zone apex.
    pub fn derive(kind: ResourceKind, matched: &ZoneMatch) -> Option<LookupKey> {
        match kind {
            ResourceKind::Service => {
                if matched.remainder.len() < 2 {
                    return None;
                }
                Some(LookupKey::new(&format!(
                    "{}.{}",
                    matched.remainder[0], matched.remainder[1]
                )))
            }
            ResourceKind::Ingress
            | ResourceKind::HttpRoute
            | ResourceKind::TlsRoute
            | ResourceKind::GrpcRoute
            | ResourceKind::DnsEndpoint => {
                if matched.is_apex() {
                    Some(LookupKey::new(matched.zone.apex_key()))
                } else {
                    Some(LookupKey::new(&matched.qname))
                }
            }
        }
    }
}
