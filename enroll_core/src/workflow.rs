use crate::api::{self, verify_token};
use crate::{Draft, Outcome};
use thiserror::Error;

/// The transport seam of the submission workflow. `api::Client` is the
/// real implementation; tests script a fake.
#[expect(async_fn_in_trait)]
pub trait Gateway {
    /// Check an invite token with the server.
    async fn verify_token(&self, token: &str) -> api::error::Result<verify_token::Resp>;

    /// Ask the server to create the account described by `draft`.
    async fn create_user(&self, draft: &Draft) -> api::error::Result<()>;
}

impl Gateway for api::Client {
    async fn verify_token(&self, token: &str) -> api::error::Result<verify_token::Resp> {
        let req = verify_token::Req {
            token: token.to_string(),
        };

        self.verify_token(&req).await
    }

    async fn create_user(&self, draft: &Draft) -> api::error::Result<()> {
        self.create_user(draft).await
    }
}

/// Why a submit attempt failed. `Display` is the exact message the user
/// sees beneath the form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// The two password fields disagree.
    #[error("Passwords do not match.")]
    PasswordMismatch,

    /// The terms checkbox is unchecked.
    #[error("You must agree to the terms.")]
    TermsNotAccepted,

    /// The server didn't recognize the invite token, or we couldn't
    /// reach it to ask.
    #[error("Token verification failed. Please try registering again.")]
    TokenVerification,

    /// The server turned the registration down and said why.
    #[error("{}", .0.join(", "))]
    Rejected(Vec<String>),

    /// The registration didn't go through and we have nothing more
    /// specific to say.
    #[error("Registration failed. Try again.")]
    Registration,
}

/// Check the draft before any network traffic happens. Pure: same draft,
/// same answer. Password equality is checked before terms acceptance, so
/// a draft failing both reports the mismatch.
///
/// ## Errors
///
/// - `SubmitError::PasswordMismatch` if the password fields disagree
/// - `SubmitError::TermsNotAccepted` if the terms box is unchecked
pub fn validate(draft: &Draft) -> Result<(), SubmitError> {
    if draft.password != draft.confirm_password {
        return Err(SubmitError::PasswordMismatch);
    }

    if !draft.terms_accepted {
        return Err(SubmitError::TermsNotAccepted);
    }

    Ok(())
}

/// Run one submit attempt: local validation, then token verification,
/// then account creation. The steps are strictly sequential and
/// short-circuit — the two network calls never overlap, and a later step
/// never runs once an earlier one has failed. Every failure is terminal
/// for the attempt; a fresh call starts over from the top.
///
/// Transport-level trouble while verifying the token is deliberately
/// swallowed: the user sees the same message as for a rejected token,
/// and the distinction lives in the logs (warn with the source error for
/// unreachable, info for an affirmative rejection).
pub async fn submit<G: Gateway>(gateway: &G, token: &str, draft: &Draft) -> Outcome {
    match submit_inner(gateway, token, draft).await {
        Ok(()) => Outcome::Success("Registration successful!".to_string()),
        Err(err) => Outcome::Error(err.to_string()),
    }
}

/// The actual implementation of `submit`, but with a `Result` wrapper to
/// make it more ergonomic to write.
async fn submit_inner<G: Gateway>(
    gateway: &G,
    token: &str,
    draft: &Draft,
) -> Result<(), SubmitError> {
    validate(draft)?;

    let is_valid = match gateway.verify_token(token).await {
        Ok(resp) => {
            if !resp.is_valid {
                tracing::info!("invite token rejected by server");
            }

            resp.is_valid
        }
        Err(err) => {
            tracing::warn!(%err, "could not reach token verification; treating token as invalid");

            false
        }
    };

    if !is_valid {
        return Err(SubmitError::TokenVerification);
    }

    match gateway.create_user(draft).await {
        Ok(()) => Ok(()),
        Err(api::Error::Rejected(errors)) => Err(SubmitError::Rejected(errors)),
        Err(err) => {
            tracing::warn!(%err, "registration did not go through");

            Err(SubmitError::Registration)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;
    use reqwest::StatusCode;
    use std::cell::{Cell, RefCell};

    /// A scripted gateway. Each call consumes its scripted response and
    /// bumps a counter; an unscripted call panics, which is exactly what
    /// we want for the "no network traffic" properties.
    #[derive(Default)]
    struct Fake {
        verify: RefCell<Option<api::error::Result<verify_token::Resp>>>,
        create: RefCell<Option<api::error::Result<()>>>,
        verify_calls: Cell<usize>,
        create_calls: Cell<usize>,
    }

    impl Fake {
        fn verifying(self, result: api::error::Result<verify_token::Resp>) -> Self {
            *self.verify.borrow_mut() = Some(result);
            self
        }

        fn creating(self, result: api::error::Result<()>) -> Self {
            *self.create.borrow_mut() = Some(result);
            self
        }
    }

    impl Gateway for Fake {
        async fn verify_token(&self, _token: &str) -> api::error::Result<verify_token::Resp> {
            self.verify_calls.set(self.verify_calls.get() + 1);
            self.verify
                .borrow_mut()
                .take()
                .expect("unscripted verify_token call")
        }

        async fn create_user(&self, _draft: &Draft) -> api::error::Result<()> {
            self.create_calls.set(self.create_calls.get() + 1);
            self.create
                .borrow_mut()
                .take()
                .expect("unscripted create_user call")
        }
    }

    fn submittable_draft() -> Draft {
        Draft {
            name: "Test Person".to_string(),
            email: "test@example.com".to_string(),
            user_id: "tester".to_string(),
            password: "hunter2".to_string(),
            confirm_password: "hunter2".to_string(),
            terms_accepted: true,
            ..Draft::default()
        }
    }

    /// Stands in for "the network is unreachable" in tests, since a
    /// `reqwest::Error` can't be constructed by hand.
    fn transport_failure<T>() -> api::error::Result<T> {
        Err(api::Error::Status(StatusCode::BAD_GATEWAY))
    }

    #[tokio::test]
    async fn password_mismatch_makes_no_calls() {
        let gateway = Fake::default();
        let draft = Draft {
            confirm_password: "hunter3".to_string(),
            ..submittable_draft()
        };

        let outcome = submit(&gateway, "abc123", &draft).await;

        assert_eq!(outcome, Outcome::Error("Passwords do not match.".to_string()));
        assert_eq!(gateway.verify_calls.get(), 0);
        assert_eq!(gateway.create_calls.get(), 0);
    }

    #[tokio::test]
    async fn unaccepted_terms_make_no_calls() {
        let gateway = Fake::default();
        let draft = Draft {
            terms_accepted: false,
            ..submittable_draft()
        };

        let outcome = submit(&gateway, "abc123", &draft).await;

        assert_eq!(
            outcome,
            Outcome::Error("You must agree to the terms.".to_string())
        );
        assert_eq!(gateway.verify_calls.get(), 0);
        assert_eq!(gateway.create_calls.get(), 0);
    }

    #[tokio::test]
    async fn rejected_token_stops_before_registration() {
        let gateway = Fake::default().verifying(Ok(verify_token::Resp { is_valid: false }));

        let outcome = submit(&gateway, "abc123", &submittable_draft()).await;

        assert_eq!(
            outcome,
            Outcome::Error("Token verification failed. Please try registering again.".to_string())
        );
        assert_eq!(gateway.verify_calls.get(), 1);
        assert_eq!(gateway.create_calls.get(), 0);
    }

    #[tokio::test]
    async fn unreachable_verification_behaves_like_a_rejected_token() {
        let gateway = Fake::default().verifying(transport_failure());

        let outcome = submit(&gateway, "abc123", &submittable_draft()).await;

        assert_eq!(
            outcome,
            Outcome::Error("Token verification failed. Please try registering again.".to_string())
        );
        assert_eq!(gateway.create_calls.get(), 0);
    }

    #[tokio::test]
    async fn valid_token_and_created_account_succeed() {
        let gateway = Fake::default()
            .verifying(Ok(verify_token::Resp { is_valid: true }))
            .creating(Ok(()));

        let outcome = submit(&gateway, "abc123", &submittable_draft()).await;

        assert_eq!(
            outcome,
            Outcome::Success("Registration successful!".to_string())
        );
        assert_eq!(gateway.verify_calls.get(), 1);
        assert_eq!(gateway.create_calls.get(), 1);
    }

    #[tokio::test]
    async fn rejection_reasons_are_joined() {
        let gateway = Fake::default()
            .verifying(Ok(verify_token::Resp { is_valid: true }))
            .creating(Err(api::Error::Rejected(vec![
                "A".to_string(),
                "B".to_string(),
            ])));

        let outcome = submit(&gateway, "abc123", &submittable_draft()).await;

        assert_eq!(outcome, Outcome::Error("A, B".to_string()));
    }

    #[tokio::test]
    async fn rejection_without_reasons_is_generic() {
        let gateway = Fake::default()
            .verifying(Ok(verify_token::Resp { is_valid: true }))
            .creating(transport_failure());

        let outcome = submit(&gateway, "abc123", &submittable_draft()).await;

        assert_eq!(
            outcome,
            Outcome::Error("Registration failed. Try again.".to_string())
        );
    }

    proptest! {
        #[test]
        fn any_password_mismatch_fails_validation(password in ".*", confirm in ".*") {
            prop_assume!(password != confirm);

            let draft = Draft {
                password,
                confirm_password: confirm,
                terms_accepted: true,
                ..Draft::default()
            };

            prop_assert_eq!(validate(&draft), Err(SubmitError::PasswordMismatch));
        }

        #[test]
        fn any_unaccepted_terms_fail_validation(password in ".*") {
            let draft = Draft {
                password: password.clone(),
                confirm_password: password,
                terms_accepted: false,
                ..Draft::default()
            };

            prop_assert_eq!(validate(&draft), Err(SubmitError::TermsNotAccepted));
        }

        #[test]
        fn matching_passwords_and_accepted_terms_validate(password in ".*") {
            let draft = Draft {
                password: password.clone(),
                confirm_password: password,
                terms_accepted: true,
                ..Draft::default()
            };

            prop_assert_eq!(validate(&draft), Ok(()));
        }
    }
}
