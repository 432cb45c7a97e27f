use serde::{Deserialize, Serialize};

/// Submission lifecycle of the contact form.
///
/// The transitions (idle → sending → success → idle) are driven by the
/// frontend's clock; this is just the renderable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitStatus {
    Idle,
    Sending,
    Success,
}

/// Renderable snapshot of one form field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldView {
    pub label: String,
    pub value: String,
    pub focused: bool,
    /// Validation message shown under the field, if any.
    pub error: Option<String>,
}

/// Renderable snapshot of the contact form. The interactive state machine
/// lives in the frontend; the contact view only consumes this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactFormView {
    pub fields: Vec<FieldView>,
    pub submit_focused: bool,
    pub status: SubmitStatus,
}

impl ContactFormView {
    /// An empty, unfocused form: what the section shows before the user
    /// interacts with it.
    pub fn resting(labels: &[&str]) -> Self {
        Self {
            fields: labels
                .iter()
                .map(|label| FieldView {
                    label: (*label).to_string(),
                    value: String::new(),
                    focused: false,
                    error: None,
                })
                .collect(),
            submit_focused: false,
            status: SubmitStatus::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resting_form_is_idle_and_blank() {
        let form = ContactFormView::resting(&["Name", "Email", "Message"]);
        assert_eq!(form.status, SubmitStatus::Idle);
        assert_eq!(form.fields.len(), 3);
        assert!(form.fields.iter().all(|f| f.value.is_empty() && !f.focused));
    }
}
