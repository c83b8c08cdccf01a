use crossterm::event::KeyEvent;
use enroll_core::Outcome;

/// Things that can happen to this app
#[derive(Debug)]
pub enum Action {
    /// The user did something on the keyboard
    Key(KeyEvent),

    /// A submit attempt reached a terminal state
    SubmitCompleted(Outcome),

    /// Something bad happened; display it to the user
    Problem(String),
}
