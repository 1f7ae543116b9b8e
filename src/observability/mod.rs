//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! security::access_control → one event per gated request
//! tower_http::trace        → one span per request (with x-request-id)
//!     → logging.rs (fmt subscriber, stdout)
//! ```

pub mod logging;

pub use logging::init_logging;
