//! Gateway DNS Domain Layer
pub mod address;
pub mod config;
pub mod dns_query;
pub mod errors;
pub mod fallthrough;
pub mod lookup_key;
pub mod names;
pub mod outcome;
pub mod record_type;
pub mod resource_kind;
pub mod validators;
pub mod zone;

pub use address::AddressFamily;
pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::DnsQuery;
pub use errors::DomainError;
pub use fallthrough::Fallthrough;
pub use lookup_key::{KeyDeriver, LookupKey};
pub use outcome::{AnswerResult, Glue, LookupOutcome};
pub use record_type::RecordType;
pub use resource_kind::ResourceKind;
pub use zone::{SoaParams, Zone, ZoneMatch, ZoneMatcher};
