//! Infrastructure layer for external integrations.
//!
//! Implements interfaces defined by the domain layer; currently that is the
//! one outbound concern this service has:
//!
//! - [`nasa`] - reqwest-based client for the proxied NASA APIs

pub mod nasa;
