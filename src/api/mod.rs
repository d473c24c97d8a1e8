//! The HTTP service boundary: request/response types, error mapping,
//! router, and server lifecycle. Handlers are stateless; conversation
//! phase lives with the caller and advances only on a successful reply.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use error::ApiError;
pub use router::app_router;
pub use server::{start_server, ServerHandle};
pub use types::AppState;
