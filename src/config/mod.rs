//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → CLI / env overrides (main.rs)
//!     → validation.rs (semantic checks)
//!     → RestrictConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{read_config, ConfigError};
pub use schema::{AccessConfig, ListenerConfig, ObservabilityConfig, RestrictConfig, TimeoutConfig};
pub use validation::{validate_config, ValidationError};
