//! Axum router and server setup.
//! Used by: main.

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::config::Config;
use crate::handlers;
use crate::state::AppState;

/// Demo applications served at `/<name>` out of the demos directory.
pub const DEMO_APPS: [&str; 13] = [
    "bandwidthconstraints",
    "codecpreferences",
    "dominantspeaker",
    "localvideofilter",
    "localvideosnapshot",
    "mediadevices",
    "networkquality",
    "reconnection",
    "screenshare",
    "localmediacontrols",
    "remotereconnection",
    "datatracks",
    "renderhint",
];

pub fn build_router(state: AppState, config: &Config) -> Router {
    let mut router = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/metrics", get(handlers::metrics::metrics))
        .route("/token", get(handlers::token::token))
        .route("/getToken", get(handlers::get_token::get_token));

    for name in DEMO_APPS {
        let dir = config.demos_dir.join(name).join("public");
        router = router.nest_service(&format!("/{name}"), ServeDir::new(dir));
    }

    router
        .nest_service("/demos", ServeDir::new(&config.demos_dir))
        .fallback_service(ServeDir::new(&config.public_dir))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run(state: AppState, config: &Config) -> std::io::Result<()> {
    let addr = format!("0.0.0.0:{}", config.port);
    let router = build_router(state, config);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", addr);
    axum::serve(listener, router).await
}
