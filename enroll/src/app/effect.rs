use super::Action;
use crate::config::Config;
use enroll_core::{api, workflow, Draft};

/// Connections to external services that effects use. We keep these
/// around to have some level of connection sharing for the app as a
/// whole.
pub struct EffectContext {
    /// The API client (owns the HTTP connection pool)
    gateway: api::Client,
}

impl EffectContext {
    /// Get a new `EffectContext`
    pub fn new(config: &Config) -> Self {
        Self {
            gateway: api::Client::new(config.server().to_owned()),
        }
    }
}

/// Things that can happen as a result of user input. Side effects!
#[derive(Debug)]
pub enum Effect {
    /// Run one submit attempt against the server
    Submit {
        /// The invite token from the invite link
        token: String,

        /// A copy of the draft as it stood when the user hit enter
        draft: Draft,
    },
}

impl Effect {
    /// Perform the side-effectful portions of this effect, returning the
    /// next `Action` the application needs to handle. The submission
    /// workflow converts every failure into a user-visible outcome, so
    /// nothing escapes this boundary as an error.
    pub async fn run(self, ctx: &EffectContext) -> Option<Action> {
        match self {
            Self::Submit { token, draft } => {
                tracing::info!("submitting registration");

                let outcome = workflow::submit(&ctx.gateway, &token, &draft).await;

                Some(Action::SubmitCompleted(outcome))
            }
        }
    }
}
