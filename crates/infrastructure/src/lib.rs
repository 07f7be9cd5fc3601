//! Gateway DNS Infrastructure Layer
//!
//! Adapters behind the application ports plus the hickory-server request
//! handler that turns resolutions into DNS messages.
pub mod dns;
pub mod registry;
pub mod system;
