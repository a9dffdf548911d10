//! Tower and axum adapters for [`StubResponder`].
//!
//! # Design Decisions
//! - The responder is shared through an `Arc`; cloning the service is cheap
//! - Generic over the request body so it plugs into axum (`Body`) and bare hyper (`Incoming`)
//! - Never fails and is always ready: every request gets the stub response

use std::convert::Infallible;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::{Body, Bytes, HttpBody};
use axum::http::{Request, Response};
use axum::{BoxError, Router};
use futures_util::future::BoxFuture;
use tower::Service;

use crate::responder::StubResponder;

/// A [`tower::Service`] answering every request with a shared [`StubResponder`].
#[derive(Debug, Clone)]
pub struct StubService {
    responder: Arc<StubResponder>,
}

impl StubService {
    /// Wrap a responder.
    pub fn new(responder: StubResponder) -> Self {
        Self {
            responder: Arc::new(responder),
        }
    }
}

impl From<StubResponder> for StubService {
    fn from(responder: StubResponder) -> Self {
        Self::new(responder)
    }
}

impl<B> Service<Request<B>> for StubService
where
    B: HttpBody<Data = Bytes> + Send + 'static,
    B::Error: Into<BoxError>,
{
    type Response = Response<Body>;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request<B>) -> Self::Future {
        let responder = self.responder.clone();
        Box::pin(async move { Ok(responder.respond(request).await) })
    }
}

impl StubResponder {
    /// Turn the responder into a [`StubService`].
    pub fn into_service(self) -> StubService {
        StubService::new(self)
    }

    /// Turn the responder into an axum [`Router`] that answers every method and path.
    pub fn into_router(self) -> Router {
        Router::new().fallback_service(self.into_service())
    }
}
