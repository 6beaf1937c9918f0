pub mod data;
mod error;
pub mod routes;
pub mod serve;

pub use error::{Error, WebResult};
pub use serve::serve;

pub const REQUEST_ID_HEADER: &str = "x-request-id";
