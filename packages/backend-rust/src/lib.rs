pub mod config;
pub mod logging;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;

use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::{Config, ConfigError};
use crate::state::AppState;

pub fn create_app(config: Config) -> Result<axum::Router, ConfigError> {
    let engine = config.build_engine()?;
    let state = AppState::new(engine, config);

    Ok(routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()))
}
