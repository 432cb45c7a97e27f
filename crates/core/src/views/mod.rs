//! Per-section views: pure functions from content + viewport + reveal
//! progress to render commands.
//!
//! Section views emit commands in section-local coordinates (y = 0 is the
//! section's top edge); the renderer translates by the section's document
//! offset and clips to its interval. `reveal` is the eased 0–1 entrance
//! progress: at 0 the section is in its resting state, at 1 fully
//! settled.

pub mod about;
pub mod articles;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod nav;
pub mod particles;
pub mod projects;
pub mod skills;
pub mod splash;

use termfolio_protocol::{Point, RenderCommand, TextAlign, TextEmphasis, ThemeToken, Viewport};

use crate::model::{Portfolio, SectionId};

/// Horizontal content margin, in cells.
pub(crate) const MARGIN_X: f64 = 4.0;

/// How far elements sit below their settled position at reveal start.
pub(crate) const SLIDE_ROWS: f64 = 3.0;

/// Rows taken by a section heading block (title, accent rule, spacer).
pub(crate) const HEADING_ROWS: f64 = 4.0;

/// Paragraph text never wraps wider than this, however wide the terminal.
pub(crate) const MAX_TEXT_WIDTH: usize = 74;

/// Extent of the given section at the current viewport, in rows.
pub fn section_extent(id: SectionId, content: &Portfolio, viewport: &Viewport) -> f64 {
    match id {
        SectionId::Hero => hero::extent(content, viewport),
        SectionId::About => about::extent(content, viewport),
        SectionId::Skills => skills::extent(content, viewport),
        SectionId::Projects => projects::extent(content, viewport),
        SectionId::Articles => articles::extent(content, viewport),
        SectionId::Contact => contact::extent(content, viewport),
    }
}

/// Standard entrance easing: fast start, soft settle.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Vertical offset applied to an element at the given progress.
pub(crate) fn slide(progress: f64) -> f64 {
    (1.0 - progress.clamp(0.0, 1.0)) * SLIDE_ROWS
}

/// Per-element progress when a list of `count` elements staggers its
/// entrance: element 0 starts immediately, the last starts at 60% of the
/// section's progress.
pub(crate) fn stagger(progress: f64, index: usize, count: usize) -> f64 {
    let count = count.max(1);
    let start = 0.6 * index as f64 / count as f64;
    ((progress - start) / (1.0 - start)).clamp(0.0, 1.0)
}

/// Usable text column count at this viewport width.
pub(crate) fn text_width(viewport: &Viewport) -> usize {
    let usable = (viewport.width - 2.0 * MARGIN_X).max(16.0) as usize;
    usable.min(MAX_TEXT_WIDTH)
}

/// Greedy word wrap. Words longer than the width get their own line and
/// are left to the renderer's clipping.
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Emit a centered two-tone section heading with its accent rule.
pub(crate) fn heading(
    out: &mut Vec<RenderCommand>,
    plain: &str,
    accent: &str,
    y: f64,
    width: f64,
    progress: f64,
) {
    let total = plain.chars().count() + 1 + accent.chars().count();
    let x0 = ((width - total as f64) / 2.0).max(0.0).floor();
    let y = y + slide(progress);
    let emphasis = if progress < 0.35 {
        TextEmphasis::Dim
    } else {
        TextEmphasis::Bold
    };
    out.push(RenderCommand::DrawText {
        position: Point::new(x0, y),
        text: plain.into(),
        color: ThemeToken::TextPrimary,
        align: TextAlign::Left,
        emphasis,
    });
    out.push(RenderCommand::DrawText {
        position: Point::new(x0 + plain.chars().count() as f64 + 1.0, y),
        text: accent.into(),
        color: ThemeToken::Accent,
        align: TextAlign::Left,
        emphasis,
    });

    let rule_w = 16.0_f64.min(width - 2.0);
    let rule_x = ((width - rule_w) / 2.0).max(0.0).floor();
    out.push(RenderCommand::DrawLine {
        from: Point::new(rule_x, y + 1.0),
        to: Point::new(rule_x + rule_w, y + 1.0),
        color: ThemeToken::Accent,
    });
}

/// Body emphasis while an element is still fading in.
pub(crate) fn fade_emphasis(progress: f64) -> TextEmphasis {
    if progress < 0.5 {
        TextEmphasis::Dim
    } else {
        TextEmphasis::Normal
    }
}
