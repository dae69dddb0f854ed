use std::sync::Arc;

use cors_gate::config::{self, ConfigError, CorsOverrides};
use cors_gate::{AllowedOrigins, Cors, CorsOptions};

pub type SharedCors = Arc<Cors>;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedCors,
    pub greeting: &'static str,
}

pub fn build_state() -> Result<AppState, ConfigError> {
    config::install_defaults(CorsOptions {
        max_age: 600,
        diagnostics: true,
        ..CorsOptions::default()
    })?;

    let overrides = CorsOverrides::new()
        .origins(AllowedOrigins::list([
            "http://localhost:3000",
            "*.example.com",
        ]))
        .methods(["GET", "POST", "OPTIONS"])
        .allowed_headers(["X-Example-Trace"])
        .exposed_headers(["X-Example-Trace"])
        .credentials(true);

    let cors = Arc::new(Cors::from_overrides(overrides)?);

    Ok(AppState {
        cors,
        greeting: "Welcome to the Axum CORS example!",
    })
}

pub mod middleware;
