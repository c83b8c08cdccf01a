//! Common code for the enroll clients: the registration draft, local
//! validation, the API endpoints, and the submission workflow.

/// Talk to the registration server.
pub mod api;

/// The in-progress registration form values.
pub mod draft;
pub use draft::Draft;

/// Extract invite tokens from invite links.
pub mod invite;

/// The status shown to the user after a submit attempt.
pub mod outcome;
pub use outcome::Outcome;

/// The submission workflow.
pub mod workflow;
