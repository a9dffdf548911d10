//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML) and/or CLI flags
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → StubConfig (validated)
//!     → StubConfig::responder() builds the StubResponder
//!     → ServerConfig drives the StubServer
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{HeaderConfig, MirrorConfig, ResponseConfig, ServerConfig, StubConfig};
pub use validation::{validate_config, ValidationError};
