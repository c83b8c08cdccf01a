use crate::form_fields;
use crossterm::event::{Event, KeyCode, KeyEvent};
use enroll_core::Draft;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_input::{backend::crossterm::EventHandler, Input};

form_fields! {
    Field {
        Name => "NAME",
        Email => "EMAIL ID",
        UserId => "UserId",
        Address => "Address",
        City => "City",
        Phone => "ph-No",
        Password => "Password",
        ConfirmPassword => "Confirm Password",
        Terms => "By confirming you agree to our terms",
    }
}

/// A form for entering registration information. Holds text only — no
/// validation happens here; the submission workflow decides what's
/// acceptable.
#[derive(Debug)]
pub struct RegistrationForm {
    /// Which field we're editing
    active: Field,

    /// Full name
    name: Input,

    /// Contact email
    email: Input,

    /// The handle the user wants
    user_id: Input,

    /// Street address
    address: Input,

    /// City
    city: Input,

    /// Phone number
    phone: Input,

    /// Password (will be masked)
    password: Input,

    /// Password again (will be masked)
    confirm_password: Input,

    /// Whether the terms checkbox is ticked
    terms_accepted: bool,
}

impl RegistrationForm {
    /// The input backing a text field. `None` for the checkbox.
    fn input(&self, field: Field) -> Option<&Input> {
        match field {
            Field::Name => Some(&self.name),
            Field::Email => Some(&self.email),
            Field::UserId => Some(&self.user_id),
            Field::Address => Some(&self.address),
            Field::City => Some(&self.city),
            Field::Phone => Some(&self.phone),
            Field::Password => Some(&self.password),
            Field::ConfirmPassword => Some(&self.confirm_password),
            Field::Terms => None,
        }
    }

    /// Mutable access to the input backing a text field.
    fn input_mut(&mut self, field: Field) -> Option<&mut Input> {
        match field {
            Field::Name => Some(&mut self.name),
            Field::Email => Some(&mut self.email),
            Field::UserId => Some(&mut self.user_id),
            Field::Address => Some(&mut self.address),
            Field::City => Some(&mut self.city),
            Field::Phone => Some(&mut self.phone),
            Field::Password => Some(&mut self.password),
            Field::ConfirmPassword => Some(&mut self.confirm_password),
            Field::Terms => None,
        }
    }

    /// Whether a field's value should render masked.
    fn masked(field: Field) -> bool {
        matches!(field, Field::Password | Field::ConfirmPassword)
    }

    /// Render every field, top to bottom, with the checkbox last.
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let mut constraints = vec![Constraint::Length(3); Field::FIELDS.len() - 1];
        constraints.push(Constraint::Length(1));

        let areas = Layout::vertical(constraints).split(area);

        for (field, field_area) in Field::FIELDS.iter().copied().zip(areas.iter().copied()) {
            match self.input(field) {
                Some(input) => self.render_text_field(frame, field_area, field, input),
                None => self.render_checkbox(frame, field_area, field),
            }
        }
    }

    /// Draw one labeled text control: a bordered paragraph titled with
    /// the field's label, bound to the input's value, with the cursor
    /// placed when the control is active.
    #[expect(clippy::cast_possible_truncation)]
    fn render_text_field(&self, frame: &mut Frame<'_>, area: Rect, field: Field, input: &Input) {
        let width = area.width.saturating_sub(3); // -2 for the border, -1 for the cursor
        let scroll = input.visual_scroll(width as usize);

        let value = if Self::masked(field) {
            "*".repeat(input.value().len())
        } else {
            input.value().to_string()
        };

        let border_style = if self.active == field {
            Style::default().fg(Color::Blue)
        } else {
            Style::default()
        };

        let control = Paragraph::new(value).scroll((0, scroll as u16)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(field.label())
                .border_style(border_style),
        );

        frame.render_widget(control, area);

        if self.active == field {
            frame.set_cursor_position((
                area.x
                    + (input.visual_cursor().max(scroll) - scroll) as u16 // current end of text
                    + 1, // just past the end of the text
                area.y + 1, // +1 row for the border/title
            ));
        }
    }

    /// Draw the terms checkbox.
    fn render_checkbox(&self, frame: &mut Frame<'_>, area: Rect, field: Field) {
        let mark = if self.terms_accepted { "x" } else { " " };

        let style = if self.active == field {
            Style::default().fg(Color::Blue)
        } else {
            Style::default()
        };

        frame.render_widget(
            Paragraph::new(format!("[{mark}] {}", field.label())).style(style),
            area,
        );
    }

    /// Route a key press: tab/shift-tab rotate fields, space toggles the
    /// checkbox when it's active, everything else edits the active input.
    pub fn handle_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => {
                self.active = self.active.next();
            }
            KeyCode::BackTab => {
                self.active = self.active.prev();
            }
            KeyCode::Char(' ') if self.active == Field::Terms => {
                self.terms_accepted = !self.terms_accepted;
            }
            _ => {
                let event = Event::Key(key);
                let active = self.active;

                if let Some(input) = self.input_mut(active) {
                    input.handle_event(&event);
                }
            }
        }
    }

    /// Snapshot the form as a draft for the submission workflow.
    pub fn finish(&self) -> Draft {
        Draft {
            name: self.name.to_string(),
            email: self.email.to_string(),
            user_id: self.user_id.to_string(),
            address: self.address.to_string(),
            city: self.city.to_string(),
            phone: self.phone.to_string(),
            password: self.password.to_string(),
            confirm_password: self.confirm_password.to_string(),
            terms_accepted: self.terms_accepted,
        }
    }

    /// Put every field back to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            active: Field::Name,
            name: Input::default(),
            email: Input::default(),
            user_id: Input::default(),
            address: Input::default(),
            city: Input::default(),
            phone: Input::default(),
            password: Input::default(),
            confirm_password: Input::default(),
            terms_accepted: false,
        }
    }
}
