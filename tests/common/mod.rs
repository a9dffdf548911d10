//! Shared utilities for integration tests.

use std::sync::Once;

use stub_responder::{StubResponder, StubServer};

static LOGGING: Once = Once::new();

/// Install a test subscriber once per test binary. `RUST_LOG` controls output.
pub fn init_logging() {
    LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Start a stub server on an ephemeral port.
#[allow(dead_code)]
pub async fn start(responder: StubResponder) -> StubServer {
    init_logging();
    StubServer::start(responder)
        .await
        .expect("stub server failed to start")
}

/// A client that never pools connections, so each test sees fresh sockets.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
