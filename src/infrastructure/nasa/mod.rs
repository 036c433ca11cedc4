//! NASA API client implementation.

mod client;

pub use client::NasaClient;
