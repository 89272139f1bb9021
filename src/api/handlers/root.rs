use axum::{http::StatusCode, response::IntoResponse};

/// Service banner for the index route.
pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, crate::APP_USER_AGENT)
}
