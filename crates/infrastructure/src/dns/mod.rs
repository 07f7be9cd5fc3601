pub mod record_type_map;
pub mod response_builder;
pub mod server;

pub use record_type_map::RecordTypeMapper;
pub use response_builder::{GatewayResponse, ResponseBuilder};
pub use server::{GatewayRequestHandler, NoDownstream};
