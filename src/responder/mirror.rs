//! Request header mirroring.
//!
//! # Responsibilities
//! - Decide which request headers are echoed into the response
//! - Copy every value of a selected header, preserving multiplicity and order
//! - Keep connection framing headers out of the response
//!
//! # Design Decisions
//! - Names are normalized to lowercase on insertion (`HeaderName` is lowercase too)
//! - Mirrored values are appended, never inserted, so later static headers stack after them

use std::collections::HashSet;

use axum::http::header::{HeaderMap, HeaderName};

/// Headers describing the inbound message transport. Copying them would
/// corrupt the framing of the outbound response.
const FRAMING_HEADERS: &[&str] = &[
    "connection",
    "content-length",
    "host",
    "keep-alive",
    "proxy-connection",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

/// Which request headers get copied into the response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MirrorRule {
    all: bool,
    names: HashSet<HeaderName>,
}

impl MirrorRule {
    /// Mirror every request header.
    pub fn enable_all(&mut self) {
        self.all = true;
    }

    /// Add a header name to the mirrored set.
    ///
    /// Returns `false` if the name is not a valid HTTP header name.
    pub fn add_name(&mut self, name: &str) -> bool {
        match HeaderName::from_bytes(name.to_lowercase().as_bytes()) {
            Ok(name) => {
                self.names.insert(name);
                true
            }
            Err(_) => false,
        }
    }

    /// Whether every request header is mirrored.
    pub fn mirrors_all(&self) -> bool {
        self.all
    }

    /// Whether no request header can ever be mirrored.
    pub fn is_empty(&self) -> bool {
        !self.all && self.names.is_empty()
    }

    /// Returns true if a request header with this name should be echoed.
    pub fn matches(&self, name: &HeaderName) -> bool {
        if is_framing_header(name) {
            return false;
        }
        self.all || self.names.contains(name)
    }

    /// Append the selected request headers to `out`. Returns how many values were copied.
    pub fn copy_into(&self, request_headers: &HeaderMap, out: &mut HeaderMap) -> usize {
        if self.is_empty() {
            return 0;
        }

        let mut copied = 0;
        for (name, value) in request_headers.iter() {
            if self.matches(name) {
                out.append(name.clone(), value.clone());
                copied += 1;
            }
        }
        copied
    }
}

fn is_framing_header(name: &HeaderName) -> bool {
    FRAMING_HEADERS.contains(&name.as_str())
}
