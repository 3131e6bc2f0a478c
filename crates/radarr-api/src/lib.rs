// radarr-api: Async Rust client for the Radarr v3 REST API

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::RadarrClient;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
