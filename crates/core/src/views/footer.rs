use termfolio_protocol::{Point, RenderCommand, TextAlign, TextEmphasis, ThemeToken, Viewport};

use crate::model::Portfolio;

use super::MARGIN_X;

/// The footer trails the last section; it is not part of the section
/// registry and never becomes "active".
pub const EXTENT: f64 = 3.0;

pub fn render(content: &Portfolio, viewport: &Viewport) -> Vec<RenderCommand> {
    let mut out = Vec::with_capacity(3);
    out.push(RenderCommand::BeginGroup {
        id: "footer".into(),
    });
    out.push(RenderCommand::DrawLine {
        from: Point::new(MARGIN_X, 0.0),
        to: Point::new(viewport.width - MARGIN_X, 0.0),
        color: ThemeToken::Border,
    });
    out.push(RenderCommand::DrawText {
        position: Point::new(viewport.width / 2.0, 1.0),
        text: format!("© {} — rendered in your terminal", content.name).into(),
        color: ThemeToken::TextMuted,
        align: TextAlign::Center,
        emphasis: TextEmphasis::Dim,
    });
    out.push(RenderCommand::EndGroup);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_the_owner_name() {
        let content = Portfolio::sample();
        let vp = Viewport::new(0.0, 100.0, 40.0);
        let cmds = render(&content, &vp);
        assert!(cmds.iter().any(|c| match c {
            RenderCommand::DrawText { text, .. } => text.contains(&content.name),
            _ => false,
        }));
    }
}
