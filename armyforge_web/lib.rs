pub mod handlers;
mod error;
mod http;

pub use error::ApiError;
pub use http::*;
