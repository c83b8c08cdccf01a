use super::{endpoint, error::Result, Error};
use crate::Draft;
use reqwest::StatusCode;
use serde::Deserialize;

/// The body the server sends back when it turns a registration down.
#[derive(Debug, Deserialize)]
struct Rejection {
    /// Human-readable reasons, one per problem found.
    errors: Vec<String>,
}

/// Where the account creation endpoint lives.
pub const PATH: &str = "/api/userCreation";

/// Ask the server to create the account described by `draft`. The
/// request body is the full draft, terms flag included; the server may
/// ignore the flag. Success is status 201 and nothing else — we don't
/// interpret the success body.
///
/// ## Errors
///
/// - `Error::Rejected` if the server said no and listed reasons
/// - `Error::Status` if the server said no without reasons
/// - `Error::Http` / `Error::UrlParse` for transport-level problems
pub async fn create(client: &reqwest::Client, server: &str, draft: &Draft) -> Result<()> {
    let url = endpoint(server, PATH)?;

    let resp = client.post(url).json(draft).send().await?;

    let status = resp.status();
    if status == StatusCode::CREATED {
        return Ok(());
    }

    match resp.json::<Rejection>().await {
        Ok(rejection) if !rejection.errors.is_empty() => Err(Error::Rejected(rejection.errors)),
        _ => Err(Error::Status(status)),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejected_joins_reasons_for_display() {
        let err = Error::Rejected(vec!["A".to_string(), "B".to_string()]);

        assert_eq!(err.to_string(), "A, B");
    }

    #[test]
    fn rejection_body_parses() {
        let rejection: Rejection = serde_json::from_str(r#"{"errors":["bad email"]}"#).unwrap();

        assert_eq!(rejection.errors, vec!["bad email".to_string()]);
    }
}
