use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// The fields of the registration draft the server acts on. The client
/// sends the whole draft (`confirmPassword`, `address`, `termsAccepted`,
/// ...); everything we don't act on is accepted and ignored. Matching
/// the password pair is the client's job.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Req {
    /// Full name.
    name: String,

    /// Contact email.
    email: String,

    /// The handle the user wants. Must be unique.
    user_id: String,

    /// Plaintext password.
    password: String,
}

/// What a successful creation reports back.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Resp {
    /// The user id that was registered.
    user_id: String,
}

#[tracing::instrument(skip(state, req))]
pub async fn handler(
    State(state): State<AppState>,
    Json(req): Json<Req>,
) -> Result<(StatusCode, Json<Resp>), Error> {
    let mut errors = Vec::new();

    if req.name.trim().is_empty() {
        errors.push("Name is required".to_string());
    }

    if req.email.trim().is_empty() {
        errors.push("Email is required".to_string());
    } else if !req.email.contains('@') {
        errors.push("Email must contain '@'".to_string());
    }

    if req.user_id.trim().is_empty() {
        errors.push("UserId is required".to_string());
    }

    if req.password.is_empty() {
        errors.push("Password is required".to_string());
    }

    if !errors.is_empty() {
        return Err(Error::Invalid(errors));
    }

    if !state.claim_user_id(&req.user_id) {
        return Err(Error::AlreadyRegistered);
    }

    tracing::info!(user_id = %req.user_id, "created account");

    Ok((
        StatusCode::CREATED,
        Json(Resp {
            user_id: req.user_id,
        }),
    ))
}

/// Why a creation request was turned down.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// The draft failed validation; one message per problem found.
    Invalid(Vec<String>),

    /// The requested user id is taken.
    AlreadyRegistered,
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, errors) = match self {
            Self::Invalid(errors) => (StatusCode::UNPROCESSABLE_ENTITY, errors),
            Self::AlreadyRegistered => (
                StatusCode::CONFLICT,
                vec!["An account with this UserId already exists".to_string()],
            ),
        };

        let body = Json(json!({
            "errors": errors,
        }));

        (status, body).into_response()
    }
}
