use termfolio_protocol::{Point, RenderCommand, TextAlign, TextEmphasis, ThemeToken, Viewport};

use crate::model::Portfolio;

use super::{
    fade_emphasis, heading, slide, stagger, text_width, wrap_text, HEADING_ROWS, MARGIN_X,
};

pub fn extent(content: &Portfolio, viewport: &Viewport) -> f64 {
    let tw = text_width(viewport);
    let mut rows = HEADING_ROWS;
    for paragraph in &content.about.paragraphs {
        rows += wrap_text(paragraph, tw).len() as f64 + 1.0;
    }
    if !content.about.stats.is_empty() {
        rows += 3.0; // numbers row, labels row, spacer
    }
    for feature in &content.about.features {
        rows += 1.0 + wrap_text(&feature.description, tw.saturating_sub(2)).len() as f64 + 1.0;
    }
    rows + 2.0
}

pub fn render(content: &Portfolio, viewport: &Viewport, reveal: f64) -> Vec<RenderCommand> {
    let tw = text_width(viewport);
    let mut out = Vec::with_capacity(48);
    out.push(RenderCommand::BeginGroup { id: "about".into() });
    heading(&mut out, "About", "Me", 1.0, viewport.width, reveal);

    let mut y = HEADING_ROWS;
    let paragraph_count = content.about.paragraphs.len();

    for (i, paragraph) in content.about.paragraphs.iter().enumerate() {
        let local = stagger(reveal, i, paragraph_count + 2);
        for line in wrap_text(paragraph, tw) {
            out.push(RenderCommand::DrawText {
                position: Point::new(MARGIN_X, y + slide(local)),
                text: line.into(),
                color: ThemeToken::TextSecondary,
                align: TextAlign::Left,
                emphasis: fade_emphasis(local),
            });
            y += 1.0;
        }
        y += 1.0;
    }

    if !content.about.stats.is_empty() {
        let local = stagger(reveal, paragraph_count, paragraph_count + 2);
        let columns = content.about.stats.len() as f64;
        let column_width = (viewport.width - 2.0 * MARGIN_X) / columns;
        for (i, stat) in content.about.stats.iter().enumerate() {
            let center = MARGIN_X + column_width * (i as f64 + 0.5);
            out.push(RenderCommand::DrawText {
                position: Point::new(center, y + slide(local)),
                text: stat.number.clone().into(),
                color: ThemeToken::Accent,
                align: TextAlign::Center,
                emphasis: TextEmphasis::Bold,
            });
            out.push(RenderCommand::DrawText {
                position: Point::new(center, y + 1.0 + slide(local)),
                text: stat.label.clone().into(),
                color: ThemeToken::TextMuted,
                align: TextAlign::Center,
                emphasis: fade_emphasis(local),
            });
        }
        y += 3.0;
    }

    let feature_base = paragraph_count + 1;
    for (i, feature) in content.about.features.iter().enumerate() {
        let local = stagger(
            reveal,
            feature_base + i,
            feature_base + content.about.features.len(),
        );
        out.push(RenderCommand::DrawText {
            position: Point::new(MARGIN_X, y + slide(local)),
            text: format!("▸ {}", feature.title).into(),
            color: ThemeToken::TextPrimary,
            align: TextAlign::Left,
            emphasis: TextEmphasis::Bold,
        });
        y += 1.0;
        for line in wrap_text(&feature.description, tw.saturating_sub(2)) {
            out.push(RenderCommand::DrawText {
                position: Point::new(MARGIN_X + 2.0, y + slide(local)),
                text: line.into(),
                color: ThemeToken::TextSecondary,
                align: TextAlign::Left,
                emphasis: fade_emphasis(local),
            });
            y += 1.0;
        }
        y += 1.0;
    }

    out.push(RenderCommand::EndGroup);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_grows_with_content() {
        let vp = Viewport::new(0.0, 100.0, 40.0);
        let mut content = Portfolio::sample();
        let base = extent(&content, &vp);
        content
            .about
            .paragraphs
            .push("An extra paragraph long enough to wrap at least once at any sane width, \
                   because the extent must track the rendered rows exactly."
                .into());
        assert!(extent(&content, &vp) > base);
    }

    #[test]
    fn renders_all_stats() {
        let content = Portfolio::sample();
        let vp = Viewport::new(0.0, 100.0, 40.0);
        let cmds = render(&content, &vp, 1.0);
        let texts: Vec<String> = cmds
            .iter()
            .filter_map(|c| match c {
                RenderCommand::DrawText { text, .. } => Some(text.to_string()),
                _ => None,
            })
            .collect();
        for stat in &content.about.stats {
            assert!(texts.iter().any(|t| t == &stat.number));
            assert!(texts.iter().any(|t| t == &stat.label));
        }
    }
}
