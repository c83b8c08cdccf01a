use clap::Parser;
use std::path::PathBuf;

/// A TUI for registering an account with an invite link
#[derive(Debug, Parser)]
#[clap(version)]
pub struct Config {
    /// Base URL of the registration server
    #[clap(long, default_value = "http://127.0.0.1:3000")]
    server: String,

    /// The invite link you received. The invite token is read from its
    /// `token` query parameter.
    #[clap(long)]
    invite: Option<String>,

    /// Where should we write logs?
    #[clap(long)]
    log_dir: Option<PathBuf>,
}

impl Config {
    /// The server to register with.
    pub fn server(&self) -> &str {
        &self.server
    }

    /// The invite token, extracted exactly once at startup. Empty when
    /// the link is missing, unparseable, or carries no token; we leave it
    /// to the server to turn an empty token away.
    pub fn invite_token(&self) -> String {
        let token = self
            .invite
            .as_deref()
            .and_then(enroll_core::invite::token_from_url)
            .unwrap_or_default();

        if token.is_empty() {
            tracing::warn!("no invite token found; registration will not be permitted");
        }

        token
    }

    /// Get either the configured or a default log directory. If no
    /// default can be found (e.g. because `$HOME` is unset) we will use
    /// the current directory.
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .or_else(|| {
                directories::ProjectDirs::from("dev", "enroll", "enroll")
                    .map(|dirs| dirs.data_local_dir().to_owned())
            })
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn config(invite: Option<&str>) -> Config {
        Config {
            server: "http://127.0.0.1:3000".to_string(),
            invite: invite.map(str::to_string),
            log_dir: None,
        }
    }

    #[test]
    fn token_comes_from_the_invite_link() {
        let config = config(Some("https://enroll.example.com/register?token=abc123"));

        assert_eq!(config.invite_token(), "abc123");
    }

    #[test]
    fn missing_invite_means_empty_token() {
        assert_eq!(config(None).invite_token(), "");
    }

    #[test]
    fn tokenless_invite_means_empty_token() {
        let config = config(Some("https://enroll.example.com/register"));

        assert_eq!(config.invite_token(), "");
    }
}
