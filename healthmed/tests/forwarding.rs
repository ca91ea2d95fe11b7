//! End-to-end token forwarding: an inbound axum router with `capture_inbound`
//! calls a local downstream service through `ForwardingClient`. The downstream
//! echoes back whatever `Authorization` header it received.

use std::net::SocketAddr;

use axum::{
    Router,
    body::{Body, to_bytes},
    extract::State,
    http::{HeaderMap, Request, StatusCode, header::AUTHORIZATION},
    middleware,
    routing::get,
};
use healthmed::forward::{ForwardingClient, InboundContext, capture_inbound, scope};
use tokio::net::TcpListener;
use tower::ServiceExt;

const NO_AUTH: &str = "<none>";

async fn spawn_downstream() -> SocketAddr {
    let app = Router::new().route(
        "/echo-auth",
        get(|headers: HeaderMap| async move {
            headers
                .get(AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .unwrap_or(NO_AUTH)
                .to_string()
        }),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[derive(Clone)]
struct Relay {
    client: ForwardingClient,
    url: String,
}

async fn relay(State(relay): State<Relay>) -> Result<String, StatusCode> {
    let resp = relay
        .client
        .send(relay.client.get(relay.url.as_str()))
        .await
        .map_err(|_| StatusCode::BAD_GATEWAY)?;
    resp.text().await.map_err(|_| StatusCode::BAD_GATEWAY)
}

fn inbound_router(downstream: SocketAddr) -> Router {
    Router::new()
        .route("/relay", get(relay))
        .layer(middleware::from_fn(capture_inbound))
        .with_state(Relay {
            client: ForwardingClient::new(reqwest::Client::new()),
            url: format!("http://{downstream}/echo-auth"),
        })
}

async fn call(router: Router, authorization: Option<&str>) -> String {
    let mut req = Request::builder().uri("/relay");
    if let Some(value) = authorization {
        req = req.header(AUTHORIZATION, value);
    }
    let res = router
        .oneshot(req.body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

#[tokio::test]
async fn bearer_token_reaches_downstream() {
    let router = inbound_router(spawn_downstream().await);
    assert_eq!(call(router, Some("Bearer abc123")).await, "bearer abc123");
}

#[tokio::test]
async fn missing_authorization_is_not_invented() {
    let router = inbound_router(spawn_downstream().await);
    assert_eq!(call(router, None).await, NO_AUTH);
}

#[tokio::test]
async fn non_bearer_credential_is_not_forwarded() {
    let router = inbound_router(spawn_downstream().await);
    assert_eq!(call(router, Some("Basic dXNlcjpwYXNz")).await, NO_AUTH);
}

#[tokio::test]
async fn concurrent_requests_keep_their_own_tokens() {
    let router = inbound_router(spawn_downstream().await);

    let (a, b) = tokio::join!(
        call(router.clone(), Some("Bearer token-a")),
        call(router.clone(), Some("Bearer token-b")),
    );

    assert_eq!(a, "bearer token-a");
    assert_eq!(b, "bearer token-b");
}

#[tokio::test]
async fn call_outside_inbound_request_passes_through() {
    let addr = spawn_downstream().await;
    let client = ForwardingClient::new(reqwest::Client::new());

    let body = client
        .send(client.get(format!("http://{addr}/echo-auth")))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert_eq!(body, NO_AUTH);
}

#[tokio::test]
async fn builder_send_runs_interceptors() {
    let addr = spawn_downstream().await;
    let client = ForwardingClient::new(reqwest::Client::new());
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, "Bearer abc123".parse().unwrap());

    let resp = scope(
        InboundContext::new(headers),
        client
            .get(format!("http://{addr}/echo-auth"))
            .header("x-request-id", "r-1")
            .send(),
    )
    .await
    .unwrap();

    assert_eq!(resp.text().await.unwrap(), "bearer abc123");
}

#[tokio::test]
async fn downstream_failure_propagates() {
    // Grab a free port, then close it so nothing is listening.
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let client = ForwardingClient::new(reqwest::Client::new());

    let err = client
        .send(client.get(format!("http://{addr}/echo-auth")))
        .await
        .unwrap_err();

    assert!(err.is_connect(), "expected connect error, got {err}");
}
