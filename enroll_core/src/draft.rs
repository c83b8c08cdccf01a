use serde::{Deserialize, Serialize};

/// Everything the user has typed into the registration form so far. This
/// is a plain value: the form owns one, hands a copy to the submission
/// workflow, and resets it to `Default` after a successful registration.
///
/// No field is ever optional. An untouched field is the empty string, and
/// the terms flag starts out unchecked.
///
/// Serializes with the field names the server expects (`userId`,
/// `confirmPassword`, `termsAccepted`, ...), so a `Draft` is also the
/// request body for account creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    /// Full name.
    pub name: String,

    /// Contact email, also used to log in later.
    pub email: String,

    /// The handle the user wants. Must be unique server-side.
    pub user_id: String,

    /// Street address.
    pub address: String,

    /// City.
    pub city: String,

    /// Phone number.
    pub phone: String,

    /// Plaintext password.
    pub password: String,

    /// Must equal `password` before we talk to the server at all.
    pub confirm_password: String,

    /// Whether the user ticked the terms checkbox. Sent along with the
    /// rest of the draft; the server is free to ignore it.
    pub terms_accepted: bool,
}
