/// Liveness probe
pub mod health;

/// Check an invite token
pub mod verify_token;

/// Create an account
pub mod user_creation;
