//! Stub responder subsystem.
//!
//! # Data Flow
//! ```text
//! builder chain (header, status, body, json, mirror_*)
//!     → StubResponder (configured once, shared read-only)
//!     → respond(request) for every inbound request:
//!         mirror.rs (copy selected request headers)
//!         → static headers appended
//!         → Content-Type override
//!         → status (default 200)
//!         → body (request body when mirroring, configured body otherwise)
//! ```
//!
//! # Design Decisions
//! - Owned builder: every setter consumes and returns the responder
//! - Configuration is best-effort: invalid input is logged and ignored, never surfaced
//! - Handling never mutates the responder, so it can be shared via `Arc` without locks

pub mod json;
pub mod mirror;

use axum::body::{Body, Bytes, HttpBody};
use axum::http::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use axum::http::{Request, Response, StatusCode};
use axum::BoxError;
use serde::Serialize;

use self::mirror::MirrorRule;

/// Content type set by the JSON helpers.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A canned HTTP response with optional request mirroring.
///
/// ```no_run
/// use stub_responder::StubResponder;
///
/// let stub = StubResponder::new()
///     .status(404)
///     .header("Foo", "Bar")
///     .body("Not found")
///     .mirror_headers(["X-Trace"]);
/// # drop(stub);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StubResponder {
    body: Bytes,
    headers: HeaderMap,
    status: Option<StatusCode>,
    content_type: Option<HeaderValue>,
    mirror: MirrorRule,
    mirror_body: bool,
}

impl StubResponder {
    /// Create a responder that answers `200 OK` with no headers and an empty body.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a response header. Repeated names keep every value.
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        let (name, value) = (name.as_ref(), value.as_ref());
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                self.headers.append(name, value);
            }
            _ => {
                tracing::warn!(header = %name, value = %value, "Ignoring invalid stub header");
            }
        }
        self
    }

    /// Override the `Content-Type` of every response. An empty value clears the override.
    pub fn content_type(mut self, content_type: impl AsRef<str>) -> Self {
        let content_type = content_type.as_ref();
        if content_type.is_empty() {
            self.content_type = None;
            return self;
        }
        match HeaderValue::from_str(content_type) {
            Ok(value) => self.content_type = Some(value),
            Err(_) => {
                tracing::warn!(content_type = %content_type, "Ignoring invalid stub content type");
            }
        }
        self
    }

    /// Set the response body.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Set the body to the JSON encoding of `value` and the content type to
    /// `application/json`.
    ///
    /// `String`/`&str` and byte buffers are used verbatim; everything else,
    /// including string-like values such as `char` or unit enum variants, is
    /// encoded. If `value` cannot be encoded the responder is returned unchanged.
    pub fn json<T: Serialize + 'static>(self, value: T) -> Self {
        match json::encode_body(value) {
            Ok(body) => self.body(body).content_type(JSON_CONTENT_TYPE),
            Err(e) => {
                tracing::debug!(error = %e, "Discarding stub JSON body");
                self
            }
        }
    }

    /// Use already-encoded JSON bytes as the body and set the content type to
    /// `application/json`.
    pub fn json_bytes(self, body: impl Into<Bytes>) -> Self {
        self.body(body).content_type(JSON_CONTENT_TYPE)
    }

    /// Set the response status. `0` leaves the status unset (`200 OK`).
    pub fn status(mut self, code: u16) -> Self {
        if code == 0 {
            self.status = None;
            return self;
        }
        match StatusCode::from_u16(code) {
            Ok(status) => self.status = Some(status),
            Err(_) => {
                tracing::warn!(status = code, "Ignoring invalid stub status");
            }
        }
        self
    }

    /// Echo every request header back in the response.
    ///
    /// Transport headers (`Host`, `Content-Length`, `Transfer-Encoding`,
    /// `Connection`, `Keep-Alive`, `Proxy-Connection`, `TE`, `Trailer`,
    /// `Upgrade`) are never mirrored.
    pub fn mirror_all_headers(mut self) -> Self {
        self.mirror.enable_all();
        self
    }

    /// Echo the named request headers back in the response.
    ///
    /// Names are matched case-insensitively and accumulate across calls.
    pub fn mirror_headers<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref();
            if !self.mirror.add_name(name) {
                tracing::warn!(header = %name, "Ignoring invalid mirrored header name");
            }
        }
        self
    }

    /// Echo the request body as the response body, in place of any configured body.
    pub fn mirror_body(mut self) -> Self {
        self.mirror_body = true;
        self
    }

    /// Build the response for `request`.
    pub async fn respond<B>(&self, request: Request<B>) -> Response<Body>
    where
        B: HttpBody<Data = Bytes> + Send + 'static,
        B::Error: Into<BoxError>,
    {
        let (parts, request_body) = request.into_parts();

        let mut headers = HeaderMap::new();
        let mirrored = self.mirror.copy_into(&parts.headers, &mut headers);
        for (name, value) in self.headers.iter() {
            headers.append(name.clone(), value.clone());
        }
        if let Some(content_type) = &self.content_type {
            headers.insert(CONTENT_TYPE, content_type.clone());
        }

        let status = self.status.unwrap_or(StatusCode::OK);

        let body = if self.mirror_body {
            read_body(request_body).await
        } else {
            self.body.clone()
        };

        tracing::debug!(
            method = %parts.method,
            path = %parts.uri.path(),
            status = %status,
            mirror_all = self.mirror.mirrors_all(),
            mirrored_headers = mirrored,
            body_len = body.len(),
            "Serving stub response"
        );

        let mut response = Response::new(Body::from(body));
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        response
    }
}

/// Collect a request body. Read failures yield an empty body.
async fn read_body<B>(body: B) -> Bytes
where
    B: HttpBody<Data = Bytes> + Send + 'static,
    B::Error: Into<BoxError>,
{
    match axum::body::to_bytes(Body::new(body), usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!(error = %e, "Failed to read request body for mirroring");
            Bytes::new()
        }
    }
}

/// Create a responder with one response header.
pub fn header(name: impl AsRef<str>, value: impl AsRef<str>) -> StubResponder {
    StubResponder::new().header(name, value)
}

/// Create a responder with a `Content-Type` override.
pub fn content_type(content_type: impl AsRef<str>) -> StubResponder {
    StubResponder::new().content_type(content_type)
}

/// Create a responder with a body.
pub fn body(body: impl Into<Bytes>) -> StubResponder {
    StubResponder::new().body(body)
}

/// Create a responder with a JSON body.
pub fn json<T: Serialize + 'static>(value: T) -> StubResponder {
    StubResponder::new().json(value)
}

/// Create a responder with a status code.
pub fn status(code: u16) -> StubResponder {
    StubResponder::new().status(code)
}

/// Create a responder that echoes every request header.
pub fn mirror_all_headers() -> StubResponder {
    StubResponder::new().mirror_all_headers()
}

/// Create a responder that echoes the named request headers.
pub fn mirror_headers<I, S>(names: I) -> StubResponder
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    StubResponder::new().mirror_headers(names)
}

/// Create a responder that echoes the request body.
pub fn mirror_body() -> StubResponder {
    StubResponder::new().mirror_body()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn prepare_request() -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri("/")
            .body(Body::empty())
            .unwrap()
    }

    fn request_with_headers(headers: &[(&str, &str)]) -> Request<Body> {
        let mut builder = Request::builder().method("GET").uri("/");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn body_of(response: Response<Body>) -> Bytes {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
    }

    fn header_values<'a>(response: &'a Response<Body>, name: &str) -> Vec<&'a str> {
        response
            .headers()
            .get_all(name)
            .iter()
            .map(|v| v.to_str().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_header() {
        let response = header("Foo", "Bar").respond(prepare_request()).await;
        assert_eq!(response.headers().get("Foo").unwrap(), "Bar");
    }

    #[tokio::test]
    async fn test_header_keeps_every_value() {
        let stub = StubResponder::new()
            .header("Set-Cookie", "a=1")
            .header("set-cookie", "b=2");
        let response = stub.respond(prepare_request()).await;
        assert_eq!(header_values(&response, "set-cookie"), vec!["a=1", "b=2"]);
    }

    #[test]
    fn test_invalid_header_is_ignored() {
        let stub = StubResponder::new()
            .header("bad header", "x")
            .header("Foo", "line\nbreak");
        assert_eq!(stub, StubResponder::new());
    }

    #[tokio::test]
    async fn test_content_type() {
        let response = content_type("application/json")
            .respond(prepare_request())
            .await;
        assert_eq!(
            response.headers().get("Content-Type").unwrap(),
            "application/json"
        );
    }

    #[tokio::test]
    async fn test_content_type_replaces_mirrored_and_static_values() {
        let stub = mirror_all_headers()
            .header("Content-Type", "text/plain")
            .content_type("text/html");
        let request = request_with_headers(&[("content-type", "application/xml")]);

        let response = stub.respond(request).await;
        assert_eq!(header_values(&response, "content-type"), vec!["text/html"]);
    }

    #[tokio::test]
    async fn test_empty_content_type_clears_override() {
        let stub = content_type("text/html").content_type("");
        let response = stub.respond(prepare_request()).await;
        assert!(response.headers().get("content-type").is_none());
    }

    #[tokio::test]
    async fn test_status() {
        let response = status(404).respond(prepare_request()).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unset_status_defaults_to_ok() {
        let response = StubResponder::new().respond(prepare_request()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = status(503).status(0).respond(prepare_request()).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_out_of_range_status_is_ignored() {
        let stub = status(418).status(42);
        let response = stub.respond(prepare_request()).await;
        assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
    }

    #[tokio::test]
    async fn test_body() {
        let response = body("Hello").respond(prepare_request()).await;
        assert_eq!(body_of(response).await, "Hello");
    }

    #[tokio::test]
    async fn test_binary_body_is_byte_exact() {
        let payload = vec![0u8, 159, 146, 150, 255];
        let response = body(payload.clone()).respond(prepare_request()).await;
        assert_eq!(body_of(response).await.to_vec(), payload);
    }

    #[tokio::test]
    async fn test_json() {
        let response = json(serde_json::json!({ "slug": "gonzales" }))
            .respond(prepare_request())
            .await;
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            JSON_CONTENT_TYPE
        );

        let value: serde_json::Value = serde_json::from_slice(&body_of(response).await).unwrap();
        assert_eq!(value, serde_json::json!({ "slug": "gonzales" }));
    }

    #[tokio::test]
    async fn test_json_quotes_string_like_values() {
        #[derive(Serialize)]
        enum State {
            Active,
        }

        for stub in [json(State::Active), json(serde_json::json!("hello"))] {
            let response = stub.respond(prepare_request()).await;
            let body = body_of(response).await;
            let value: Result<serde_json::Value, _> = serde_json::from_slice(&body);
            assert!(value.is_ok(), "body {body:?} is not JSON");
        }
    }

    #[tokio::test]
    async fn test_json_bytes() {
        let response = StubResponder::new()
            .json_bytes(&b"[1,2,3]"[..])
            .respond(prepare_request())
            .await;
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            JSON_CONTENT_TYPE
        );
        assert_eq!(body_of(response).await, "[1,2,3]");
    }

    #[tokio::test]
    async fn test_json_failure_is_silent() {
        let mut invalid = HashMap::new();
        invalid.insert((1u8, 2u8), "pair");

        let stub = body("previous").json(invalid);
        assert_eq!(stub, body("previous"));

        let response = stub.respond(prepare_request()).await;
        assert!(response.headers().get("content-type").is_none());
        assert_eq!(body_of(response).await, "previous");
    }

    #[tokio::test]
    async fn test_mirror_all_headers() {
        let request = request_with_headers(&[("Foo", "Bar"), ("Bar", "Foo")]);
        let response = mirror_all_headers().respond(request).await;

        let mut expected = HeaderMap::new();
        expected.append("foo", HeaderValue::from_static("Bar"));
        expected.append("bar", HeaderValue::from_static("Foo"));
        assert_eq!(response.headers(), &expected);
    }

    #[tokio::test]
    async fn test_mirror_all_headers_is_idempotent() {
        let stub = mirror_all_headers().mirror_all_headers().mirror_all_headers();
        assert_eq!(stub, mirror_all_headers());

        let request = request_with_headers(&[("A", "1"), ("B", "2")]);
        let response = stub.respond(request).await;
        assert_eq!(header_values(&response, "a"), vec!["1"]);
        assert_eq!(header_values(&response, "b"), vec!["2"]);
    }

    #[tokio::test]
    async fn test_mirror_headers() {
        let request =
            request_with_headers(&[("Foo", "Bar"), ("Bar", "Foo"), ("FooBar", "FooBar")]);
        let response = mirror_headers(["Foo", "Bar"]).respond(request).await;

        let mut expected = HeaderMap::new();
        expected.append("foo", HeaderValue::from_static("Bar"));
        expected.append("bar", HeaderValue::from_static("Foo"));
        assert_eq!(response.headers(), &expected);
    }

    #[tokio::test]
    async fn test_mirror_headers_is_case_insensitive() {
        let stub = mirror_headers(["Foo"]);
        for sent in ["foo", "FOO", "Foo"] {
            let request = request_with_headers(&[(sent, "value")]);
            let response = stub.respond(request).await;
            assert_eq!(header_values(&response, "foo"), vec!["value"], "sent as {sent}");
        }
    }

    #[tokio::test]
    async fn test_mirror_headers_accumulate() {
        let stub = mirror_headers(["Foo"]).mirror_headers(["Bar"]);
        let request = request_with_headers(&[("Foo", "1"), ("Bar", "2"), ("Baz", "3")]);

        let response = stub.respond(request).await;
        assert_eq!(header_values(&response, "foo"), vec!["1"]);
        assert_eq!(header_values(&response, "bar"), vec!["2"]);
        assert!(response.headers().get("baz").is_none());
    }

    #[tokio::test]
    async fn test_mirrored_values_precede_static_values() {
        let stub = mirror_headers(["Foo"]).header("Foo", "static");
        let request = request_with_headers(&[("Foo", "mirrored-1"), ("Foo", "mirrored-2")]);

        let response = stub.respond(request).await;
        assert_eq!(
            header_values(&response, "foo"),
            vec!["mirrored-1", "mirrored-2", "static"]
        );
    }

    #[tokio::test]
    async fn test_mirror_body() {
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(vec![1u8, 2, 3]))
            .unwrap();

        let response = mirror_body().body("ignored").respond(request).await;
        assert_eq!(body_of(response).await.to_vec(), vec![1u8, 2, 3]);
    }

    #[tokio::test]
    async fn test_mirror_body_without_request_body() {
        let response = mirror_body().respond(prepare_request()).await;
        assert!(body_of(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_mirror_body_read_failure_yields_empty_body() {
        let chunks = vec![
            Ok(Bytes::from_static(b"partial")),
            Err(std::io::Error::other("connection reset")),
        ];
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from_stream(futures_util::stream::iter(chunks)))
            .unwrap();

        let response = mirror_body().respond(request).await;
        assert!(body_of(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_chaining() {
        let chained = StubResponder::new()
            .body("Hello")
            .status(404)
            .header("Foo", "Bar");

        let separate = StubResponder::new();
        let separate = separate.body("Hello");
        let separate = separate.status(404);
        let separate = separate.header("Foo", "Bar");
        assert_eq!(chained, separate);

        let response = chained.respond(prepare_request()).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers().get("Foo").unwrap(), "Bar");
        assert_eq!(body_of(response).await, "Hello");
    }

    #[tokio::test]
    async fn test_respond_does_not_mutate() {
        let stub = mirror_all_headers().body("Hello");
        let before = stub.clone();

        let request = request_with_headers(&[("Foo", "Bar")]);
        let _ = stub.respond(request).await;
        assert_eq!(stub, before);
    }
}
