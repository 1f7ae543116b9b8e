//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection (peer address captured as ConnectInfo)
//!     → server.rs (timeout, request ID, trace span)
//!     → security::access_control (gate)
//!     → protected service handler
//! ```

pub mod server;

pub use server::{HttpServer, ServerError, SERVICE_RESPONSE};
