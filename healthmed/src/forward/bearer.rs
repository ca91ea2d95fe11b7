use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderValue};

use super::{InboundContext, OutboundInterceptor};

/// Copies the inbound bearer token onto outbound requests as
/// `Authorization: bearer <token>`.
///
/// The token is passed through as-is: no decoding, signature or expiry check.
/// An inbound `Authorization` that is not a bearer credential is not
/// forwarded, and the outbound request goes out unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct BearerForwarding;

/// Outbound scheme spelling. Downstream services match it case-insensitively.
const OUTBOUND_SCHEME: &str = "bearer";

/// Extract the token from a `<scheme> <token>` credential whose scheme is
/// `Bearer` in any casing. Empty tokens and tokens with inner whitespace are
/// malformed.
pub fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim_start();
    if token.is_empty() || token.contains(char::is_whitespace) {
        return None;
    }
    Some(token)
}

#[async_trait]
impl OutboundInterceptor for BearerForwarding {
    async fn intercept(&self, inbound: Option<&InboundContext>, outbound: &mut reqwest::Request) {
        let Some(raw) = inbound.and_then(InboundContext::authorization) else {
            return;
        };

        let Some(token) = raw.to_str().ok().and_then(bearer_token) else {
            tracing::warn!(
                url = %outbound.url(),
                "inbound Authorization is not a bearer credential; not forwarding"
            );
            return;
        };

        match HeaderValue::from_str(&format!("{OUTBOUND_SCHEME} {token}")) {
            Ok(mut value) => {
                value.set_sensitive(true);
                outbound.headers_mut().insert(AUTHORIZATION, value);
                tracing::debug!(url = %outbound.url(), "forwarding bearer token");
            }
            Err(e) => {
                tracing::warn!(error = %e, "bearer token not representable as a header");
            }
        }
    }
}
