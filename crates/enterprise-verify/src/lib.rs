//! Company verification: a reputation-based risk engine plus the registry and HTTP
//! plumbing that exposes it.

pub mod companies;
pub mod config;
pub mod error;
pub mod telemetry;
pub mod verification;
