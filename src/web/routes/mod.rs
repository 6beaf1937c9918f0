//! Contains all the routes that this application can handle.

mod add_email;
mod emails;
mod home;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};

use crate::AppState;

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// All the routes of the server
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home))
        .route("/add-email", post(add_email::add_email))
        .route("/emails", get(emails::list_emails))
        .route("/health-check", get(health_check))
        .with_state(app_state)
}
