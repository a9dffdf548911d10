//! HTTP integration subsystem.
//!
//! # Data Flow
//! ```text
//! inbound request (any server, any http_body::Body)
//!     → service.rs (tower Service / axum Router around Arc<StubResponder>)
//!     → StubResponder::respond
//!     → response back to the hosting server
//!
//! server.rs wires the router to a local TcpListener for tests:
//!     bind → axum::serve (trace + timeout layers) → graceful shutdown on drop
//! ```

pub mod server;
pub mod service;

pub use server::StubServer;
pub use service::StubService;
