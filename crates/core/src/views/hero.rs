use termfolio_protocol::{Point, RenderCommand, TextAlign, TextEmphasis, ThemeToken, Viewport};

use crate::model::Portfolio;

use super::{fade_emphasis, slide, stagger, wrap_text, MARGIN_X};

const MIN_EXTENT: f64 = 16.0;
const TAGLINE_WIDTH: usize = 44;

/// The landing section fills the window, like the original full-height
/// viewport section.
pub fn extent(_content: &Portfolio, viewport: &Viewport) -> f64 {
    viewport.height.max(MIN_EXTENT)
}

pub fn render(content: &Portfolio, viewport: &Viewport, reveal: f64) -> Vec<RenderCommand> {
    let height = extent(content, viewport);
    let mut out = Vec::with_capacity(24);
    out.push(RenderCommand::BeginGroup { id: "hero".into() });

    let x = MARGIN_X + 2.0;
    let tagline = wrap_text(&content.tagline, TAGLINE_WIDTH);
    let block_rows = 5 + tagline.len();
    let top = ((height - block_rows as f64) / 2.0 - 1.0).max(1.0).floor();

    let mut line = 0usize;
    let count = block_rows + 1;
    let put = |out: &mut Vec<RenderCommand>,
                   text: String,
                   color: ThemeToken,
                   bold: bool,
                   row: &mut usize| {
        let local = stagger(reveal, *row, count);
        let emphasis = if bold && local >= 0.5 {
            TextEmphasis::Bold
        } else {
            fade_emphasis(local)
        };
        out.push(RenderCommand::DrawText {
            position: Point::new(x, top + *row as f64 + slide(local)),
            text: text.into(),
            color,
            align: TextAlign::Left,
            emphasis,
        });
        *row += 1;
    };

    put(&mut out, "Hi, I'm".into(), ThemeToken::TextSecondary, false, &mut line);
    put(&mut out, content.name.clone(), ThemeToken::Accent, true, &mut line);
    put(
        &mut out,
        content.roles.join("  ·  "),
        ThemeToken::AccentAlt,
        false,
        &mut line,
    );
    line += 1; // spacer
    for wrapped in &tagline {
        put(
            &mut out,
            wrapped.clone(),
            ThemeToken::TextSecondary,
            false,
            &mut line,
        );
    }
    line += 1; // spacer
    put(
        &mut out,
        "[1-6] jump · j/k scroll · Enter contact form · q quit".into(),
        ThemeToken::TextMuted,
        false,
        &mut line,
    );

    if viewport.width >= 76.0 {
        orb(&mut out, viewport, height, reveal);
    }

    out.push(RenderCommand::EndGroup);
    out
}

/// Decorative character orb on the right half of the landing section.
fn orb(out: &mut Vec<RenderCommand>, viewport: &Viewport, height: f64, reveal: f64) {
    if reveal < 0.4 {
        return;
    }
    let radius = 7.0_f64.min(height / 2.0 - 2.0);
    if radius < 3.0 {
        return;
    }
    let cx = (viewport.width * 0.74).floor();
    let cy = (height / 2.0 - 1.0).floor();
    let rows = (radius / 2.0).floor() as i32;

    for dy in -rows..=rows {
        let ny = dy as f64 / (radius / 2.0);
        let half_width = radius * (1.0 - ny * ny).max(0.0).sqrt();
        let cols = half_width.floor() as i32;
        let mut text = String::new();
        for dx in -cols..=cols {
            let edge = half_width - dx.unsigned_abs() as f64;
            let ch = if edge < 1.2 {
                '●'
            } else if (dx + dy * 3) % 4 == 0 {
                '∙'
            } else {
                ' '
            };
            text.push(ch);
        }
        out.push(RenderCommand::DrawText {
            position: Point::new(cx - cols as f64, cy + dy as f64),
            text: text.into(),
            color: ThemeToken::AccentAlt,
            align: TextAlign::Left,
            emphasis: if reveal < 1.0 {
                TextEmphasis::Dim
            } else {
                TextEmphasis::Normal
            },
        });
    }
}
