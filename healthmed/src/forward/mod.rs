//! Outbound request interception.
//!
//! Calls made through [`ForwardingClient`] pass through a chain of
//! [`OutboundInterceptor`]s before they hit the network. Each interceptor sees
//! the inbound request the current task is serving (if any) and may mutate the
//! outbound request. [`BearerForwarding`] uses this to carry the caller's
//! bearer token on to downstream services.

use async_trait::async_trait;

pub mod bearer;
pub mod client;
pub mod context;

pub use bearer::BearerForwarding;
pub use client::{ForwardRequest, ForwardingClient};
pub use context::{InboundContext, capture_inbound, current, scope};

#[async_trait]
pub trait OutboundInterceptor: Send + Sync {
    /// Adjust `outbound` before it is sent.
    ///
    /// `inbound` is `None` when the call is not made on behalf of an inbound
    /// request (startup tasks, spawned work that was not re-scoped). That is
    /// a normal case, not an error.
    async fn intercept(&self, inbound: Option<&InboundContext>, outbound: &mut reqwest::Request);
}
