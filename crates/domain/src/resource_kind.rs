use crate::DomainError;
use std::fmt;
use std::str::FromStr;

/// The closed set of registry kinds the gateway can resolve against.
///
/// Anything else named in configuration is rejected when the registry is
/// built; there is no catch-all variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    HttpRoute,
    TlsRoute,
    GrpcRoute,
    Ingress,
    Service,
    DnsEndpoint,
}

impl ResourceKind {
    /// All supported kinds in their declared order.
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::HttpRoute,
        ResourceKind::TlsRoute,
        ResourceKind::GrpcRoute,
        ResourceKind::Ingress,
        ResourceKind::Service,
        ResourceKind::DnsEndpoint,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::HttpRoute => "HTTPRoute",
            ResourceKind::TlsRoute => "TLSRoute",
            ResourceKind::GrpcRoute => "GRPCRoute",
            ResourceKind::Ingress => "Ingress",
            ResourceKind::Service => "Service",
            ResourceKind::DnsEndpoint => "DNSEndpoint",
        }
    }

    /// Precedence tier, lower wins.
    ///
    /// Routes > Ingress > Service > DNSEndpoint. The three route kinds share a
    /// tier and are ordered among themselves by [`ResourceKind::rank`].
    pub fn precedence_tier(&self) -> u8 {
        match self {
            ResourceKind::HttpRoute | ResourceKind::TlsRoute | ResourceKind::GrpcRoute => 0,
            ResourceKind::Ingress => 1,
            ResourceKind::Service => 2,
            ResourceKind::DnsEndpoint => 3,
        }
    }

    /// Fixed lookup position: tier first, then HTTPRoute, TLSRoute, GRPCRoute.
    pub fn rank(&self) -> (u8, usize) {
        let position = Self::ALL
            .iter()
            .position(|kind| kind == self)
            .unwrap_or(Self::ALL.len());
        (self.precedence_tier(), position)
    }

    /// Names of every supported kind, for error messages and defaults.
    pub fn supported_names() -> Vec<String> {
        Self::ALL.iter().map(|k| k.as_str().to_string()).collect()
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::UnsupportedResource(s.to_string()))
    }
}
