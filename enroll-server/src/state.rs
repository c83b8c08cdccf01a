use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

/// Shared state needed by requests. Everything lives in memory: the
/// token set is fixed at startup, and registered user ids last until the
/// process exits.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Invite tokens the server will accept.
    invite_tokens: Arc<HashSet<String>>,

    /// User ids that have already registered.
    users: Arc<Mutex<HashSet<String>>>,
}

impl AppState {
    /// Create a new state accepting the given invite tokens.
    pub fn new(invite_tokens: Vec<String>) -> Self {
        Self {
            invite_tokens: Arc::new(invite_tokens.into_iter().collect()),
            users: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Whether we recognize this invite token.
    pub fn token_is_valid(&self, token: &str) -> bool {
        self.invite_tokens.contains(token)
    }

    /// Claim a user id. Returns false when it's already taken.
    pub fn claim_user_id(&self, user_id: &str) -> bool {
        self.users
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(user_id.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn recognizes_configured_tokens() {
        let state = AppState::new(vec!["abc123".to_string()]);

        assert!(state.token_is_valid("abc123"));
        assert!(!state.token_is_valid("xyz789"));
    }

    #[test]
    fn user_ids_can_only_be_claimed_once() {
        let state = AppState::new(vec![]);

        assert!(state.claim_user_id("tester"));
        assert!(!state.claim_user_id("tester"));
    }
}
