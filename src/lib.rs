//! Client address restriction for HTTP services.
//!
//! Resolves the caller's address from the peer address and the
//! `X-Forwarded-For` / `X-Real-Ip` headers, and only lets a single
//! configured address through to the protected handler.

pub mod cli;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod security;

pub use config::RestrictConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use security::{remote_ip, resolve_remote_ip, restrict, AllowedIp, Decision};
