//! Wordfreq Network Layer
//!
//! Fetches the page whose words get counted.

mod client;
mod error;
mod response;

pub use client::{ClientConfig, HttpClient, DEFAULT_TIMEOUT_SECS};
pub use error::{NetError, NetResult};
pub use response::Response;
