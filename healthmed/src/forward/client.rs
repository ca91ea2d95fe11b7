use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Body, IntoUrl, Method, Request, RequestBuilder, Response};

use super::{BearerForwarding, OutboundInterceptor, context};
use crate::config::ServiceConfig;

/// HTTP client for service-to-service calls.
///
/// Wraps a [`reqwest::Client`]; every request sent through it runs the
/// interceptor chain first, in registration order. Cloning is cheap and
/// clones share the chain.
#[derive(Clone)]
pub struct ForwardingClient {
    http: reqwest::Client,
    interceptors: Arc<Vec<Arc<dyn OutboundInterceptor>>>,
}

impl ForwardingClient {
    /// Client with [`BearerForwarding`] installed.
    pub fn new(http: reqwest::Client) -> Self {
        Self::without_interceptors(http).with_interceptor(BearerForwarding)
    }

    pub fn without_interceptors(http: reqwest::Client) -> Self {
        Self {
            http,
            interceptors: Arc::new(Vec::new()),
        }
    }

    /// Build the underlying client from config and install [`BearerForwarding`].
    pub fn from_config(config: &ServiceConfig) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.downstream_timeout)
            .build()?;
        Ok(Self::new(http))
    }

    pub fn with_interceptor(mut self, interceptor: impl OutboundInterceptor + 'static) -> Self {
        Arc::make_mut(&mut self.interceptors).push(Arc::new(interceptor));
        self
    }

    pub fn request(&self, method: Method, url: impl IntoUrl) -> ForwardRequest {
        ForwardRequest {
            client: self.clone(),
            inner: self.http.request(method, url),
        }
    }

    pub fn get(&self, url: impl IntoUrl) -> ForwardRequest {
        self.request(Method::GET, url)
    }

    pub fn post(&self, url: impl IntoUrl) -> ForwardRequest {
        self.request(Method::POST, url)
    }

    /// Run the interceptor chain against the current task's inbound context.
    pub async fn prepare(&self, req: &mut Request) {
        let inbound = context::current();
        for interceptor in self.interceptors.iter() {
            interceptor.intercept(inbound.as_deref(), req).await;
        }
    }

    /// Intercept, then send. Transport errors come back unchanged.
    pub async fn execute(&self, mut req: Request) -> reqwest::Result<Response> {
        self.prepare(&mut req).await;
        self.http.execute(req).await
    }

    pub async fn send(&self, req: ForwardRequest) -> reqwest::Result<Response> {
        req.send().await
    }
}

/// Request builder bound to a [`ForwardingClient`].
///
/// Mirrors the parts of [`reqwest::RequestBuilder`] callers need; `send`
/// goes through [`ForwardingClient::execute`] so the interceptor chain
/// always runs.
pub struct ForwardRequest {
    client: ForwardingClient,
    inner: RequestBuilder,
}

impl ForwardRequest {
    pub fn header<K, V>(self, key: K, value: V) -> Self
    where
        HeaderName: TryFrom<K>,
        <HeaderName as TryFrom<K>>::Error: Into<axum::http::Error>,
        HeaderValue: TryFrom<V>,
        <HeaderValue as TryFrom<V>>::Error: Into<axum::http::Error>,
    {
        Self {
            inner: self.inner.header(key, value),
            ..self
        }
    }

    pub fn headers(self, headers: HeaderMap) -> Self {
        Self {
            inner: self.inner.headers(headers),
            ..self
        }
    }

    pub fn body(self, body: impl Into<Body>) -> Self {
        Self {
            inner: self.inner.body(body),
            ..self
        }
    }

    pub fn timeout(self, timeout: Duration) -> Self {
        Self {
            inner: self.inner.timeout(timeout),
            ..self
        }
    }

    /// Build without intercepting; [`ForwardingClient::prepare`] has not run.
    pub fn build(self) -> reqwest::Result<Request> {
        self.inner.build()
    }

    pub async fn send(self) -> reqwest::Result<Response> {
        let req = self.inner.build()?;
        self.client.execute(req).await
    }
}
