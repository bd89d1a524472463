pub mod error;
pub mod messages;
pub mod state;

pub use state::{AppState, AppStateInner};

use axum::{Router, routing::get};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/messages",
            get(messages::list_messages).post(messages::create_message),
        )
        .with_state(state)
}
