pub mod delay;
pub mod error;
pub mod handlers;
pub mod summary;

use axum::routing::{get, post};
use axum::Router;

pub use delay::Delay;
pub use router_client::wire;

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub delay: Delay,
}

impl AppState {
    pub fn new(delay: Delay) -> Self {
        Self { delay }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/test", get(handlers::test))
        .route("/webhook", post(handlers::webhook))
        .route("/multiply", post(handlers::multiply))
        .route("/chatstate", post(handlers::chatstate))
        .with_state(state)
}

/// Local wall-clock time as shown in responses.
pub fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
