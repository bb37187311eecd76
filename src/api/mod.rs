pub mod client;
pub mod error;
pub mod types;

pub use client::CountingClient;
pub use error::ApiError;
pub use types::{VisitRequest, VisitResponse};
