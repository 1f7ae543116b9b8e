//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → client_ip.rs (resolve remote address from peer + forwarding headers)
//!     → access_control.rs (compare with allowed IP)
//!     → Permit: protected handler | Deny: 401
//! ```
//!
//! # Design Decisions
//! - Fail closed: an unresolvable address is denied
//! - X-Forwarded-For / X-Real-Ip are trusted from any caller

pub mod access_control;
pub mod client_ip;

pub use access_control::{client_restrict_middleware, restrict, AllowedIp, Decision};
pub use client_ip::{remote_ip, resolve_remote_ip};
