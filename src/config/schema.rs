//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::responder::StubResponder;

/// Root configuration for a stub server.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct StubConfig {
    /// Listener settings.
    pub server: ServerConfig,

    /// Canned response.
    pub response: ResponseConfig,

    /// Request mirroring.
    pub mirror: MirrorConfig,
}

impl StubConfig {
    /// Build the responder described by this configuration.
    ///
    /// Run [`validate_config`](crate::config::validate_config) first: invalid
    /// entries are skipped here, not reported.
    pub fn responder(&self) -> StubResponder {
        let mut responder = StubResponder::new().status(self.response.status);

        for header in &self.response.headers {
            responder = responder.header(&header.name, &header.value);
        }

        if let Some(json) = &self.response.json {
            responder = responder.json(json.clone());
        } else if let Some(body) = &self.response.body {
            responder = responder.body(body.clone());
        }

        if let Some(content_type) = &self.response.content_type {
            responder = responder.content_type(content_type);
        }

        if self.mirror.all_headers {
            responder = responder.mirror_all_headers();
        }
        if !self.mirror.headers.is_empty() {
            responder = responder.mirror_headers(&self.mirror.headers);
        }
        if self.mirror.body {
            responder = responder.mirror_body();
        }

        responder
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8000").
    pub bind_address: String,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Loopback address with an OS-assigned port.
    pub fn ephemeral() -> Self {
        Self {
            bind_address: "127.0.0.1:0".to_string(),
            ..Self::default()
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8000".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// The canned part of the response.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ResponseConfig {
    /// Status code, 0 for the default (200).
    pub status: u16,

    /// Literal body.
    pub body: Option<String>,

    /// Body encoded as JSON; sets `Content-Type: application/json`.
    pub json: Option<serde_json::Value>,

    /// Content-Type override.
    pub content_type: Option<String>,

    /// Headers added to every response, in order.
    pub headers: Vec<HeaderConfig>,
}

/// A single response header.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct HeaderConfig {
    pub name: String,
    pub value: String,
}

/// Which parts of the request are echoed back.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct MirrorConfig {
    /// Echo every request header.
    pub all_headers: bool,

    /// Echo these request headers (case-insensitive).
    pub headers: Vec<String>,

    /// Echo the request body.
    pub body: bool,
}
