use super::{endpoint, error::Result, handle_response};
use serde::{Deserialize, Serialize};

/// The request to check an invite token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Req {
    /// The opaque token from the invite link.
    pub token: String,
}

/// Result of checking an invite token.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Resp {
    /// Whether the server recognizes the token.
    pub is_valid: bool,
}

/// Where the token verification endpoint lives.
pub const PATH: &str = "/verify-token";

/// Check an invite token with the server.
///
/// ## Errors
///
/// Errors are the same as `handle_response`.
pub async fn verify(client: &reqwest::Client, server: &str, req: &Req) -> Result<Resp> {
    let url = endpoint(server, PATH)?;

    handle_response(client.post(url).json(req)).await
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn resp_reads_wire_name() {
        let resp: Resp = serde_json::from_str(r#"{"isValid":true}"#).unwrap();

        assert!(resp.is_valid);
    }

    #[test]
    fn req_writes_token() {
        let req = Req {
            token: "abc123".to_string(),
        };

        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"token":"abc123"}"#
        );
    }
}
