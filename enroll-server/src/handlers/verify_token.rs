use crate::state::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

/// The body of a token check.
#[derive(Debug, Deserialize)]
pub struct Req {
    /// The opaque token from the invite link.
    token: String,
}

/// The answer. An unknown token is a regular `false`, never an error
/// status.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Resp {
    /// Whether the token is in the configured set.
    is_valid: bool,
}

#[tracing::instrument(skip(state))]
pub async fn handler(State(state): State<AppState>, Json(req): Json<Req>) -> Json<Resp> {
    let is_valid = state.token_is_valid(&req.token);

    if !is_valid {
        tracing::info!("turned away an unknown invite token");
    }

    Json(Resp { is_valid })
}

#[cfg(test)]
mod test {
    use super::*;

    fn state() -> AppState {
        AppState::new(vec!["abc123".to_string()])
    }

    #[test_log::test(tokio::test)]
    async fn test_known_token() {
        let req = Req {
            token: "abc123".to_string(),
        };

        let Json(resp) = handler(State(state()), Json(req)).await;

        assert_eq!(resp, Resp { is_valid: true });
    }

    #[test_log::test(tokio::test)]
    async fn test_unknown_token() {
        let req = Req {
            token: "xyz789".to_string(),
        };

        let Json(resp) = handler(State(state()), Json(req)).await;

        assert_eq!(resp, Resp { is_valid: false });
    }

    #[test_log::test(tokio::test)]
    async fn test_empty_token() {
        let req = Req {
            token: String::new(),
        };

        let Json(resp) = handler(State(state()), Json(req)).await;

        assert_eq!(resp, Resp { is_valid: false });
    }
}
