//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     StubServer::shutdown / drop → trigger → axum graceful shutdown → task exits
//!
//! Signals (signals.rs):
//!     Ctrl+C → binary stops its StubServer
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
