use axum::{routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config;
use crate::middleware::jwt_auth_middleware;

/// Assemble the full application router
pub fn app() -> Router {
    let mut app = Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Public auth routes (token acquisition)
        .merge(auth_public_routes())
        // Protected API
        .merge(auth_routes())
        .merge(todo_routes())
        // Global middleware
        .layer(CorsLayer::permissive());

    if config::config().api.enable_request_logging {
        app = app.layer(TraceLayer::new_for_http());
    }

    app
}

fn auth_public_routes() -> Router {
    use axum::routing::post;
    use crate::handlers::auth;

    Router::new()
        .route("/auth/register", post(auth::register::post))
        .route("/auth/login", post(auth::login::post))
}

fn auth_routes() -> Router {
    use crate::handlers::auth;

    Router::new()
        .route("/api/auth/whoami", get(auth::whoami::get))
        .layer(axum::middleware::from_fn(jwt_auth_middleware))
}

fn todo_routes() -> Router {
    use axum::routing::patch;
    use crate::handlers::todos::{collection, record};

    Router::new()
        // Collection operations
        .route("/api/todos", get(collection::get).post(collection::post))
        // Record operations (individual)
        .route(
            "/api/todos/:id",
            get(record::get).put(record::put).delete(record::delete),
        )
        // Completion toggle
        .route("/api/todos/:id/complete", patch(record::complete))
        // Everything above requires a valid bearer token
        .layer(axum::middleware::from_fn(jwt_auth_middleware))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Todo API (Rust)",
            "version": version,
            "description": "Per-user todo list REST API built with Rust (Axum)",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "auth": "/auth/register, /auth/login (public - token acquisition)",
                "whoami": "/api/auth/whoami (protected)",
                "todos": "/api/todos[/:id], /api/todos/:id/complete (protected)",
            }
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match crate::database::DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "message": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
