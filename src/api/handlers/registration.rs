//! Registration hook: the trust-boundary transport for the gate.
//!
//! The identity provider posts the registration event here before persisting
//! an account. The handler only translates the gate outcome to HTTP; the
//! classification itself lives in [`crate::gate`]. Every rejection is
//! terminal for that attempt.

use crate::gate::{self, AllowList, DenialKind, RegistrationEvent};
use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct Decision {
    decision: String,
    email: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct Rejection {
    kind: String,
    message: String,
}

#[utoipa::path(
    post,
    path= "/v1/hooks/registration",
    request_body = RegistrationEvent,
    responses (
        (status = 200, description = "Registration allowed", body = Decision, content_type = "application/json"),
        (status = 400, description = "Malformed registration event", body = Rejection),
        (status = 403, description = "Registrant is not on the invite list", body = Rejection),
    ),
    tag = "gate",
)]
#[instrument(skip(allowlist))]
pub async fn registration(
    Extension(allowlist): Extension<Arc<AllowList>>,
    payload: Option<Json<RegistrationEvent>>,
) -> impl IntoResponse {
    // A missing or undecodable body carries no user data, so it flows through
    // the same classification as an empty event.
    let event = match payload {
        Some(Json(event)) => event,
        None => RegistrationEvent { user: None },
    };

    match gate::evaluate(&event, &allowlist) {
        Ok(admitted) => (
            StatusCode::OK,
            Json(Decision {
                decision: "allowed".to_string(),
                email: admitted.email,
            }),
        )
            .into_response(),
        Err(denial) => {
            let status = match denial.kind {
                DenialKind::InvalidArgument => StatusCode::BAD_REQUEST,
                DenialKind::PermissionDenied => StatusCode::FORBIDDEN,
            };

            (
                status,
                Json(Rejection {
                    kind: denial.kind.as_str().to_string(),
                    message: denial.message.to_string(),
                }),
            )
                .into_response()
        }
    }
}
