pub mod client;
pub mod status;

pub use client::{ApiClient, ApiError};
pub use status::StatusSource;
