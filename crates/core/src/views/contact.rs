use termfolio_protocol::{
    Point, Rect, RenderCommand, TextAlign, TextEmphasis, ThemeToken, Viewport,
};

use crate::model::{ContactFormView, Portfolio, SubmitStatus};

use super::{fade_emphasis, heading, slide, stagger, HEADING_ROWS, MARGIN_X};

const FIELD_MAX_WIDTH: f64 = 48.0;

/// Rows per field block: label, input, reserved error row. The error row
/// is always reserved so the section extent is independent of validation
/// state.
const FIELD_ROWS: f64 = 3.0;

fn field_width(viewport: &Viewport) -> f64 {
    (viewport.width - 2.0 * (MARGIN_X + 2.0))
        .min(FIELD_MAX_WIDTH)
        .max(16.0)
}

fn info_rows(content: &Portfolio) -> f64 {
    let mut rows = 1.0; // email
    if content.contact.location.is_some() {
        rows += 1.0;
    }
    if !content.contact.socials.is_empty() {
        rows += 1.0;
    }
    rows
}

pub fn extent(content: &Portfolio, _viewport: &Viewport) -> f64 {
    // heading + info + spacer + three fields + submit + status
    HEADING_ROWS + info_rows(content) + 1.0 + 3.0 * FIELD_ROWS + 2.0 + 2.0
}

pub fn render(
    content: &Portfolio,
    viewport: &Viewport,
    reveal: f64,
    form: &ContactFormView,
) -> Vec<RenderCommand> {
    let mut out = Vec::with_capacity(48);
    out.push(RenderCommand::BeginGroup {
        id: "contact".into(),
    });
    heading(&mut out, "Get In", "Touch", 1.0, viewport.width, reveal);

    let mut y = HEADING_ROWS;
    let info_local = stagger(reveal, 0, 3);
    let dy = slide(info_local);

    out.push(RenderCommand::DrawText {
        position: Point::new(MARGIN_X, y + dy),
        text: format!("✉ {}", content.contact.email).into(),
        color: ThemeToken::Accent,
        align: TextAlign::Left,
        emphasis: fade_emphasis(info_local),
    });
    y += 1.0;

    if let Some(location) = &content.contact.location {
        out.push(RenderCommand::DrawText {
            position: Point::new(MARGIN_X, y + dy),
            text: format!("⌖ {location}").into(),
            color: ThemeToken::TextSecondary,
            align: TextAlign::Left,
            emphasis: fade_emphasis(info_local),
        });
        y += 1.0;
    }

    if !content.contact.socials.is_empty() {
        let joined = content
            .contact
            .socials
            .iter()
            .map(|s| format!("{} {}", s.name, s.url))
            .collect::<Vec<_>>()
            .join(" · ");
        out.push(RenderCommand::DrawText {
            position: Point::new(MARGIN_X, y + dy),
            text: joined.into(),
            color: ThemeToken::TextMuted,
            align: TextAlign::Left,
            emphasis: TextEmphasis::Dim,
        });
        y += 1.0;
    }
    y += 1.0;

    let form_local = stagger(reveal, 1, 3);
    let form_dy = slide(form_local);
    let fw = field_width(viewport);
    let fx = MARGIN_X + 2.0;

    for field in &form.fields {
        out.push(RenderCommand::DrawText {
            position: Point::new(fx, y + form_dy),
            text: field.label.clone().into(),
            color: if field.focused {
                ThemeToken::FieldFocused
            } else {
                ThemeToken::TextSecondary
            },
            align: TextAlign::Left,
            emphasis: if field.focused {
                TextEmphasis::Bold
            } else {
                fade_emphasis(form_local)
            },
        });

        out.push(RenderCommand::DrawRect {
            rect: Rect::new(fx, y + 1.0 + form_dy, fw, 1.0),
            color: ThemeToken::FieldBackground,
            border_color: Some(if field.focused {
                ThemeToken::FieldFocused
            } else {
                ThemeToken::FieldBorder
            }),
        });
        let mut shown = field.value.clone();
        if field.focused {
            shown.push('▏');
        }
        // Keep the tail visible when the value outgrows the field.
        let visible: String = {
            let max = (fw as usize).saturating_sub(3);
            let chars: Vec<char> = shown.chars().collect();
            if chars.len() > max {
                chars[chars.len() - max..].iter().collect()
            } else {
                shown
            }
        };
        out.push(RenderCommand::DrawText {
            position: Point::new(fx + 1.0, y + 1.0 + form_dy),
            text: visible.into(),
            color: ThemeToken::TextPrimary,
            align: TextAlign::Left,
            emphasis: TextEmphasis::Normal,
        });

        if let Some(error) = &field.error {
            out.push(RenderCommand::DrawText {
                position: Point::new(fx, y + 2.0 + form_dy),
                text: format!("✗ {error}").into(),
                color: ThemeToken::FieldError,
                align: TextAlign::Left,
                emphasis: TextEmphasis::Normal,
            });
        }
        y += FIELD_ROWS;
    }

    out.push(RenderCommand::DrawText {
        position: Point::new(fx, y + form_dy),
        text: "[ Send Message ]".into(),
        color: if form.submit_focused {
            ThemeToken::FieldFocused
        } else {
            ThemeToken::Accent
        },
        align: TextAlign::Left,
        emphasis: TextEmphasis::Bold,
    });
    y += 2.0;

    let (status_text, status_color) = match form.status {
        SubmitStatus::Idle => (
            "Enter focuses the form · Tab moves · Esc leaves".to_string(),
            ThemeToken::TextMuted,
        ),
        SubmitStatus::Sending => ("Sending…".to_string(), ThemeToken::StatusSending),
        SubmitStatus::Success => (
            "✓ Message sent — thank you!".to_string(),
            ThemeToken::StatusSuccess,
        ),
    };
    out.push(RenderCommand::DrawText {
        position: Point::new(fx, y + form_dy),
        text: status_text.into(),
        color: status_color,
        align: TextAlign::Left,
        emphasis: if form.status == SubmitStatus::Idle {
            TextEmphasis::Dim
        } else {
            TextEmphasis::Bold
        },
    });

    out.push(RenderCommand::EndGroup);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContactFormView;

    #[test]
    fn extent_is_independent_of_validation_state() {
        let content = Portfolio::sample();
        let vp = Viewport::new(0.0, 100.0, 40.0);
        let resting = ContactFormView::resting(&["Name", "Email", "Message"]);
        let mut errored = resting.clone();
        errored.fields[0].error = Some("Name is required".into());

        let a = render(&content, &vp, 1.0, &resting).len();
        let b = render(&content, &vp, 1.0, &errored).len();
        assert_eq!(b, a + 1, "error adds one command, not one row");
        assert_eq!(extent(&content, &vp), extent(&content, &vp));
    }

    #[test]
    fn status_line_reflects_submission() {
        let content = Portfolio::sample();
        let vp = Viewport::new(0.0, 100.0, 40.0);
        let mut form = ContactFormView::resting(&["Name", "Email", "Message"]);
        form.status = SubmitStatus::Success;
        let cmds = render(&content, &vp, 1.0, &form);
        let found = cmds.iter().any(|c| match c {
            RenderCommand::DrawText { text, color, .. } => {
                text.contains("Message sent") && *color == ThemeToken::StatusSuccess
            }
            _ => false,
        });
        assert!(found);
    }
}
