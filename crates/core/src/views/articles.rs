use termfolio_protocol::{Point, RenderCommand, TextAlign, TextEmphasis, ThemeToken, Viewport};

use crate::model::Portfolio;

use super::{fade_emphasis, heading, slide, stagger, text_width, wrap_text, HEADING_ROWS, MARGIN_X};

pub fn extent(content: &Portfolio, viewport: &Viewport) -> f64 {
    let tw = text_width(viewport);
    let mut rows = HEADING_ROWS;
    for article in &content.articles {
        rows += 1.0 + wrap_text(&article.excerpt, tw.saturating_sub(2)).len() as f64 + 2.0;
    }
    rows + 2.0
}

pub fn render(content: &Portfolio, viewport: &Viewport, reveal: f64) -> Vec<RenderCommand> {
    let tw = text_width(viewport);
    let mut out = Vec::with_capacity(32);
    out.push(RenderCommand::BeginGroup {
        id: "articles".into(),
    });
    heading(&mut out, "Latest", "Articles", 1.0, viewport.width, reveal);

    let mut y = HEADING_ROWS;
    let count = content.articles.len();

    for (i, article) in content.articles.iter().enumerate() {
        let local = stagger(reveal, i, count);
        let dy = slide(local);

        let category = format!("[{}]", article.category);
        out.push(RenderCommand::DrawText {
            position: Point::new(MARGIN_X, y + dy),
            text: category.clone().into(),
            color: ThemeToken::TagText,
            align: TextAlign::Left,
            emphasis: fade_emphasis(local),
        });
        out.push(RenderCommand::DrawText {
            position: Point::new(MARGIN_X + category.chars().count() as f64 + 1.0, y + dy),
            text: article.title.clone().into(),
            color: ThemeToken::TextPrimary,
            align: TextAlign::Left,
            emphasis: TextEmphasis::Bold,
        });
        y += 1.0;

        for line in wrap_text(&article.excerpt, tw.saturating_sub(2)) {
            out.push(RenderCommand::DrawText {
                position: Point::new(MARGIN_X + 2.0, y + dy),
                text: line.into(),
                color: ThemeToken::TextSecondary,
                align: TextAlign::Left,
                emphasis: fade_emphasis(local),
            });
            y += 1.0;
        }

        out.push(RenderCommand::DrawText {
            position: Point::new(MARGIN_X + 2.0, y + dy),
            text: format!("{} · {}", article.date, article.read_time).into(),
            color: ThemeToken::TextMuted,
            align: TextAlign::Left,
            emphasis: TextEmphasis::Dim,
        });
        y += 2.0;
    }

    out.push(RenderCommand::EndGroup);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_article_gets_title_and_meta() {
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
        for article in &content.articles {
            assert!(texts.iter().any(|t| t == &article.title));
            assert!(texts.iter().any(|t| t.contains(&article.read_time)));
        }
    }
}
