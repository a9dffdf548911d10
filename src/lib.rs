//! Configurable stub HTTP responder for test suites.
//!
//! A [`StubResponder`] holds a canned response (status, headers, body) and
//! optional mirroring of request headers and body. It plugs into any tower
//! or axum stack via [`StubResponder::into_service`] and
//! [`StubResponder::into_router`], or runs on a local port with
//! [`StubServer`].
//!
//! ```no_run
//! # async fn demo() -> std::io::Result<()> {
//! let server = stub_responder::StubServer::start(
//!     stub_responder::body(r#"[{"slug":"gonzales"}]"#),
//! )
//! .await?;
//! println!("stub listening on {}", server.url());
//! server.shutdown().await
//! # }
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod responder;

pub use config::StubConfig;
pub use http::{StubServer, StubService};
pub use lifecycle::Shutdown;
pub use responder::{
    body, content_type, header, json, mirror_all_headers, mirror_body, mirror_headers, status,
    StubResponder, JSON_CONTENT_TYPE,
};
