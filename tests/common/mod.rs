use std::sync::Once;

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

static INIT: Once = Once::new();

/// Pin the auth environment before the config singleton is first touched.
/// Must be called at the top of every test.
pub fn init() {
    INIT.call_once(|| {
        std::env::set_var("JWT_SECRET", "integration-test-secret");
    });
}

pub fn app() -> axum::Router {
    init();
    todo_api_rust::app()
}

/// Issue a bearer token the way the login handler does
pub fn token_for(user_id: Uuid, email: &str) -> String {
    init();
    let claims = todo_api_rust::auth::Claims::new(user_id, email.to_string());
    todo_api_rust::auth::generate_jwt(&claims).expect("failed to sign test token")
}

/// Drive one request through the router and decode the JSON body
pub async fn send(
    app: axum::Router,
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.oneshot(request).await.expect("infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    // Axum's built-in rejections (bad path params, malformed JSON) are plain
    // text; surface those as Null rather than failing the decode
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    Ok((status, value))
}
