//! Contact form interaction state.
//!
//! The core only knows the renderable snapshot ([`ContactFormView`]); the
//! typing, focus cycling, validation and the simulated submission delay
//! live here. `tick` takes the current instant so tests drive time
//! explicitly.

use std::time::{Duration, Instant};

use termfolio_core::model::{ContactFormView, FieldView, SubmitStatus};

/// Simulated network delay before a submission "succeeds".
const SEND_DELAY: Duration = Duration::from_secs(2);
/// How long the success status stays up before the form resets.
const SUCCESS_HOLD: Duration = Duration::from_secs(3);

const LABELS: [&str; 3] = ["Name", "Email", "Message"];
const NAME: usize = 0;
const EMAIL: usize = 1;
const MESSAGE: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Field(usize),
    Submit,
}

#[derive(Debug, Clone, Copy)]
enum Status {
    Idle,
    Sending { since: Instant },
    Success { until: Instant },
}

pub struct ContactForm {
    values: [String; 3],
    errors: [Option<String>; 3],
    focus: Focus,
    status: Status,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            values: Default::default(),
            errors: Default::default(),
            focus: Focus::Field(NAME),
            status: Status::Idle,
        }
    }

    pub fn focus_first(&mut self) {
        self.focus = Focus::Field(NAME);
    }

    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            Focus::Field(MESSAGE) => Focus::Submit,
            Focus::Field(i) => Focus::Field(i + 1),
            Focus::Submit => Focus::Field(NAME),
        };
    }

    pub fn prev_field(&mut self) {
        self.focus = match self.focus {
            Focus::Field(NAME) => Focus::Submit,
            Focus::Field(i) => Focus::Field(i - 1),
            Focus::Submit => Focus::Field(MESSAGE),
        };
    }

    pub fn input_char(&mut self, c: char) {
        if self.sending() {
            return;
        }
        if let Focus::Field(i) = self.focus {
            self.values[i].push(c);
            self.errors[i] = None;
        }
    }

    pub fn backspace(&mut self) {
        if self.sending() {
            return;
        }
        if let Focus::Field(i) = self.focus {
            self.values[i].pop();
        }
    }

    /// Enter: advance from a field, submit from the button. Returns `true`
    /// when a submission actually started.
    pub fn activate(&mut self, now: Instant) -> bool {
        match self.focus {
            Focus::Field(_) => {
                self.next_field();
                false
            }
            Focus::Submit => self.submit(now),
        }
    }

    fn submit(&mut self, now: Instant) -> bool {
        if self.sending() {
            return false;
        }
        if !self.validate() {
            return false;
        }
        self.status = Status::Sending { since: now };
        tracing::info!("contact form submitted");
        true
    }

    fn validate(&mut self) -> bool {
        self.errors = Default::default();
        if self.values[NAME].trim().is_empty() {
            self.errors[NAME] = Some("Name is required".into());
        }
        let email = self.values[EMAIL].trim();
        if email.is_empty() {
            self.errors[EMAIL] = Some("Email is required".into());
        } else if !plausible_email(email) {
            self.errors[EMAIL] = Some("Enter a valid email address".into());
        }
        if self.values[MESSAGE].trim().is_empty() {
            self.errors[MESSAGE] = Some("Message is required".into());
        }
        self.errors.iter().all(Option::is_none)
    }

    /// Advance the submission lifecycle against the given clock.
    pub fn tick(&mut self, now: Instant) {
        match self.status {
            Status::Sending { since } if now.duration_since(since) >= SEND_DELAY => {
                self.status = Status::Success {
                    until: now + SUCCESS_HOLD,
                };
            }
            Status::Success { until } if now >= until => {
                self.status = Status::Idle;
                self.values = Default::default();
                self.focus = Focus::Field(NAME);
            }
            _ => {}
        }
    }

    pub fn sending(&self) -> bool {
        matches!(self.status, Status::Sending { .. })
    }

    /// Renderable snapshot. When the form is not focused (`active` false)
    /// no field shows a cursor.
    pub fn view(&self, active: bool) -> ContactFormView {
        ContactFormView {
            fields: LABELS
                .iter()
                .enumerate()
                .map(|(i, label)| FieldView {
                    label: (*label).to_string(),
                    value: self.values[i].clone(),
                    focused: active && self.focus == Focus::Field(i),
                    error: self.errors[i].clone(),
                })
                .collect(),
            submit_focused: active && self.focus == Focus::Submit,
            status: match self.status {
                Status::Idle => SubmitStatus::Idle,
                Status::Sending { .. } => SubmitStatus::Sending,
                Status::Success { .. } => SubmitStatus::Success,
            },
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

fn plausible_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        for c in "Ada".chars() {
            form.input_char(c);
        }
        form.next_field();
        for c in "ada@example.org".chars() {
            form.input_char(c);
        }
        form.next_field();
        for c in "Hello!".chars() {
            form.input_char(c);
        }
        form.next_field(); // focus lands on Submit
        form
    }

    #[test]
    fn focus_cycles_through_fields_and_submit() {
        let mut form = ContactForm::new();
        form.next_field();
        form.next_field();
        form.next_field();
        assert!(form.view(true).submit_focused);
        form.next_field();
        assert!(form.view(true).fields[0].focused);
        form.prev_field();
        assert!(form.view(true).submit_focused);
    }

    #[test]
    fn empty_form_fails_validation() {
        let mut form = ContactForm::new();
        form.focus = Focus::Submit;
        let started = form.activate(Instant::now());
        assert!(!started);
        let view = form.view(true);
        assert!(view.fields.iter().all(|f| f.error.is_some()));
        assert_eq!(view.status, SubmitStatus::Idle);
    }

    #[test]
    fn bad_email_is_rejected() {
        let mut form = filled();
        form.values[EMAIL] = "not-an-email".into();
        assert!(!form.activate(Instant::now()));
        assert!(form.view(true).fields[EMAIL].error.is_some());
    }

    #[test]
    fn submission_walks_the_lifecycle() {
        let mut form = filled();
        let t0 = Instant::now();
        assert!(form.activate(t0));
        assert_eq!(form.view(true).status, SubmitStatus::Sending);

        // Still sending just before the delay elapses.
        form.tick(t0 + Duration::from_millis(1900));
        assert_eq!(form.view(true).status, SubmitStatus::Sending);

        form.tick(t0 + Duration::from_millis(2100));
        assert_eq!(form.view(true).status, SubmitStatus::Success);

        // Success holds for three seconds, then the form resets.
        let t_success = t0 + Duration::from_millis(2100);
        form.tick(t_success + Duration::from_millis(3100));
        let view = form.view(true);
        assert_eq!(view.status, SubmitStatus::Idle);
        assert!(view.fields.iter().all(|f| f.value.is_empty()));
    }

    #[test]
    fn typing_is_ignored_while_sending() {
        let mut form = filled();
        let t0 = Instant::now();
        assert!(form.activate(t0));
        form.focus_first();
        form.input_char('x');
        assert_eq!(form.view(true).fields[NAME].value, "Ada");
    }

    #[test]
    fn email_plausibility() {
        assert!(plausible_email("a@b.co"));
        assert!(!plausible_email("a@b"));
        assert!(!plausible_email("@b.co"));
        assert!(!plausible_email("a@.co"));
        assert!(!plausible_email("plain"));
    }
}
