use todo_api_rust::{config, database::DatabaseManager};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!("Starting Todo API in {:?} mode", config.environment);

    // Apply schema migrations. The pool is lazy, so a missing database only
    // degrades /health instead of preventing startup.
    if let Err(e) = DatabaseManager::migrate().await {
        tracing::warn!("Skipping migrations: {}", e);
    }

    let app = todo_api_rust::app();

    // Allow tests or deployments to override port via env
    let port = std::env::var("TODO_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Todo API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
