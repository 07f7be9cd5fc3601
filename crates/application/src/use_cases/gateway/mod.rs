mod handle_query;

pub use handle_query::{DelegateReason, HandleGatewayQueryUseCase, QueryDisposition, Resolution};
