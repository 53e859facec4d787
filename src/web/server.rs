use axum::{
    http::{header, Method},
    Router,
};
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::web::api::{create_router, AppState};

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub enable_cors: bool,
    pub max_sessions: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3005,
            enable_cors: true,
            max_sessions: 1000,
        }
    }
}

/// Build the application router with its state and middleware
pub fn build_app(config: &ServerConfig) -> Router {
    let app_state = AppState::new(config.max_sessions);

    let mut app = Router::new().merge(create_router()).with_state(app_state);

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

        app = app.layer(ServiceBuilder::new().layer(cors).into_inner());
    }

    app
}

/// Start the web server
pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(&config);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    log::info!("shortest path server listening on http://{}", addr);
    log::info!("health check at http://{}/api/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
