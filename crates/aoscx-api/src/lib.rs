// aoscx-api: Async Rust client for the Aruba AOS-CX REST API

pub mod auth;
pub mod client;
pub mod configs;
pub mod error;
pub mod interfaces;
pub mod models;
pub mod system;
pub mod transport;
pub mod vlans;

pub use client::Client;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
