use crate::names;
use std::sync::Arc;

/// Set of zones for which an unknown name is handed to the next handler
/// instead of being answered with NXDOMAIN.
///
/// An empty set never falls through. The root zone `"."` covers every name.
#[derive(Debug, Clone, Default)]
pub struct Fallthrough {
    zones: Vec<Arc<str>>,
}

impl Fallthrough {
    pub fn new<I, S>(zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            zones: zones
                .into_iter()
                .map(|z| Arc::from(names::fold(z.as_ref())))
                .collect(),
        }
    }

    /// Fall through for everything.
    pub fn root() -> Self {
        Self::new(["."])
    }

    pub fn is_enabled(&self) -> bool {
        !self.zones.is_empty()
    }

    /// Whether `qname` is covered by one of the fallthrough zones.
    pub fn through(&self, qname: &str) -> bool {
        let folded = names::fold(qname);
        self.zones.iter().any(|zone| names::is_within(&folded, zone))
    }
}
