mod cors;
mod routes;

use std::net::SocketAddr;

use axum::{Router, routing::get};
use cors::middleware::cors_middleware;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cors_gate=debug")),
        )
        .init();

    let app_state = cors::build_state().expect("valid CORS configuration");

    let app = Router::new()
        .route("/greet", get(routes::greet))
        .layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            cors_middleware,
        ))
        .with_state(app_state);

    let addr: SocketAddr = "127.0.0.1:5001".parse().unwrap();
    tracing::info!("Axum example running on http://{addr}");

    axum::serve(tokio::net::TcpListener::bind(addr).await.unwrap(), app)
        .await
        .unwrap();
}
