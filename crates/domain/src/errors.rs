use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Unsupported resource kind: {0}")]
    UnsupportedResource(String),

    #[error("Invalid zone: {0}")]
    InvalidZone(String),

    #[error("Registry snapshot error: {0}")]
    RegistrySnapshot(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
