use std::future::Future;
use std::sync::Arc;

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue, header},
    middleware::Next,
    response::Response,
};

tokio::task_local! {
    static INBOUND: Arc<InboundContext>;
}

/// Snapshot of the inbound request a task is serving.
#[derive(Debug, Clone, Default)]
pub struct InboundContext {
    headers: HeaderMap,
}

impl InboundContext {
    pub fn new(headers: HeaderMap) -> Self {
        Self { headers }
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn authorization(&self) -> Option<&HeaderValue> {
        self.headers.get(header::AUTHORIZATION)
    }
}

/// Context of the inbound request the current task is serving, if any.
///
/// Task-local: a future handed to `tokio::spawn` starts without one unless it
/// is wrapped in [`scope`].
pub fn current() -> Option<Arc<InboundContext>> {
    INBOUND.try_with(Arc::clone).ok()
}

/// Run `fut` with `ctx` as its inbound context.
pub async fn scope<F: Future>(ctx: InboundContext, fut: F) -> F::Output {
    INBOUND.scope(Arc::new(ctx), fut).await
}

/// Axum middleware: makes each inbound request's headers visible to outbound
/// calls made while handling it.
///
/// ```ignore
/// Router::new()
///     .route("/appointments", post(book))
///     .layer(axum::middleware::from_fn(capture_inbound))
/// ```
pub async fn capture_inbound(req: Request, next: Next) -> Response {
    let ctx = InboundContext::new(req.headers().clone());
    scope(ctx, next.run(req)).await
}
