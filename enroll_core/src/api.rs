/// Things that can go wrong in the API
pub mod error;
pub use error::Error;

/// Check an invite token with the server
pub mod verify_token;

/// Ask the server to create the account
pub mod user_creation;

use serde::de::DeserializeOwned;
use url::Url;

/// Client for the registration API. Owns the HTTP connection pool; the
/// app holds exactly one of these for its whole life.
#[derive(Debug, Clone)]
pub struct Client {
    /// The server to connect to. Should only be the protocol and domain,
    /// e.g. `https://enroll.your-domain.com`.
    pub server: String,

    /// The underlying HTTP client.
    http: reqwest::Client,
}

impl Client {
    /// Construct a new client
    #[must_use]
    pub fn new(server: String) -> Self {
        Self {
            server,
            http: reqwest::Client::new(),
        }
    }

    /// Check an invite token.
    ///
    /// ## Errors
    ///
    /// Errors are the same as `handle_response`.
    pub async fn verify_token(&self, req: &verify_token::Req) -> error::Result<verify_token::Resp> {
        verify_token::verify(&self.http, &self.server, req).await
    }

    /// Ask the server to create the account described by `draft`.
    ///
    /// ## Errors
    ///
    /// Errors are the same as `user_creation::create`.
    pub async fn create_user(&self, draft: &crate::Draft) -> error::Result<()> {
        user_creation::create(&self.http, &self.server, draft).await
    }
}

/// Convert an HTTP response into a result, interpreting errors in a
/// standard way.
///
/// ## Errors
///
/// - `Ok(..)` if the server returned a success (2xx)
/// - `Error::Status` for any other status (this API reports failures
///   through response bodies that the endpoint modules interpret
///   themselves; see `user_creation::create`)
async fn handle_response<T>(resp: reqwest::RequestBuilder) -> error::Result<T>
where
    T: DeserializeOwned,
{
    let resp = resp.send().await?;

    let status = resp.status();

    if status.is_success() {
        Ok(resp.json().await?)
    } else {
        Err(Error::Status(status))
    }
}

/// Join an endpoint path onto the configured server.
fn endpoint(server: &str, path: &str) -> error::Result<Url> {
    Ok(Url::parse(server)?.join(path)?)
}
