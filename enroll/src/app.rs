/// Things that can happen to this app
pub mod action;
pub use action::Action;

/// Side effects and the context they run against
pub mod effect;
pub use effect::{Effect, EffectContext};

/// The registration form itself
pub mod registration_form;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use enroll_core::Outcome;
use ratatui::{
    layout::{Constraint, Flex, Layout},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};
use registration_form::RegistrationForm;
use std::process::ExitCode;

/// The "functional core" of the app.
pub struct App {
    /// The invite token, extracted from the invite link once at startup
    /// and immutable from then on.
    token: String,

    /// Status to display (visible at the bottom of the screen)
    status_line: Option<String>,

    /// Where the app is in its lifecycle
    screen: Screen,
}

impl App {
    /// Create a new instance of the app
    pub fn new(token: String) -> Self {
        Self {
            token,
            status_line: None,
            screen: Screen::Register(Register::default()),
        }
    }

    /// Render the app's UI to the screen
    pub fn render(&self, frame: &mut Frame) {
        let vertical = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]);
        let [body_area, status_area] = vertical.areas(frame.area());

        match &self.screen {
            Screen::Register(register) => {
                let horiz = Layout::horizontal([Constraint::Percentage(60)]).flex(Flex::Center);
                let [column] = horiz.areas(body_area);

                let [title_area, form_area, message_area] = Layout::vertical([
                    Constraint::Length(1),
                    Constraint::Min(0),
                    Constraint::Length(1),
                ])
                .areas(column);

                frame.render_widget(Paragraph::new("USER DETAILS").centered(), title_area);

                register.form.render(frame, form_area);

                // Exactly one message shows beneath the form.
                if register.in_flight {
                    frame.render_widget(Paragraph::new("Submitting…"), message_area);
                } else if let Some(message) = register.outcome.message() {
                    let color = if register.outcome.is_success() {
                        Color::Green
                    } else {
                        Color::Red
                    };

                    frame.render_widget(
                        Paragraph::new(message).style(Style::default().fg(color)),
                        message_area,
                    );
                }
            }
            Screen::Login { message } => {
                let lines = vec![
                    Line::styled(message.clone(), Style::default().fg(Color::Green)),
                    Line::raw(""),
                    Line::raw("You can now log in with your new account."),
                    Line::raw("Press q to quit."),
                ];

                frame.render_widget(Paragraph::new(lines).centered(), body_area);
            }
            Screen::Exiting(_) => frame.render_widget(Paragraph::new("Exiting…"), body_area),
        }

        let status = Paragraph::new(match &self.status_line {
            Some(line) => line.as_str(),
            None => "Tab: next field · Space: toggle terms · Enter: submit · Esc: quit",
        });

        frame.render_widget(status, status_area);
    }

    /// Handle an `Action`, updating the app's state and producing some
    /// side effect(s)
    pub fn handle(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::Key(key) => self.handle_key(key),
            Action::SubmitCompleted(outcome) => self.handle_submit_completed(outcome),
            Action::Problem(problem) => {
                self.status_line = Some(problem);

                vec![]
            }
        }
    }

    /// Key dispatch for whichever screen is up.
    fn handle_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        if key.kind != KeyEventKind::Press {
            return vec![];
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.screen = Screen::Exiting(ExitCode::SUCCESS);

            return vec![];
        }

        match &mut self.screen {
            Screen::Register(register) => match key.code {
                KeyCode::Esc => {
                    self.screen = Screen::Exiting(ExitCode::SUCCESS);

                    vec![]
                }
                KeyCode::Enter => {
                    // At most one submission runs at a time. Until the
                    // current attempt reaches a terminal state, enter does
                    // nothing.
                    if register.in_flight {
                        tracing::debug!("submit ignored; an attempt is already in flight");

                        return vec![];
                    }

                    register.outcome = Outcome::Idle;
                    register.in_flight = true;

                    vec![Effect::Submit {
                        token: self.token.clone(),
                        draft: register.form.finish(),
                    }]
                }
                _ => {
                    register.form.handle_event(key);

                    vec![]
                }
            },
            Screen::Login { .. } => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.screen = Screen::Exiting(ExitCode::SUCCESS);

                    vec![]
                }
                _ => vec![],
            },
            Screen::Exiting(_) => vec![],
        }
    }

    /// A submit attempt finished: release the guard, then either show the
    /// failure beneath the form or reset the draft and move on to login.
    fn handle_submit_completed(&mut self, outcome: Outcome) -> Vec<Effect> {
        let Screen::Register(register) = &mut self.screen else {
            return vec![];
        };

        register.in_flight = false;

        if outcome.is_success() {
            register.form.reset();

            let message = outcome.message().unwrap_or_default().to_string();
            self.status_line = Some(message.clone());
            self.screen = Screen::Login { message };
        } else {
            register.outcome = outcome;
        }

        vec![]
    }

    /// Let the TUI manager know whether we're all wrapped up and can
    /// exit.
    pub fn should_exit(&self) -> Option<ExitCode> {
        if let Screen::Exiting(code) = &self.screen {
            Some(*code)
        } else {
            None
        }
    }
}

/// App lifecycle
#[derive(Debug)]
enum Screen {
    /// Filling in the registration form
    Register(Register),

    /// Registration went through. Terminal: logging in is its own tool.
    Login {
        /// The success message carried over from the register screen
        message: String,
    },

    /// We're done and want the following exit code after final effects
    Exiting(ExitCode),
}

/// State while the registration form is up
#[derive(Debug, Default)]
struct Register {
    /// The form fields
    form: RegistrationForm,

    /// What happened on the last submit attempt
    outcome: Outcome,

    /// Whether a submit attempt is currently awaiting the server
    in_flight: bool,
}
