use termfolio_protocol::{
    Point, Rect, RenderCommand, TextAlign, TextEmphasis, ThemeToken, Viewport,
};

use crate::model::{Portfolio, Project};

use super::{fade_emphasis, heading, slide, stagger, HEADING_ROWS, MARGIN_X};

const CARD_MAX_WIDTH: f64 = 80.0;

fn card_width(viewport: &Viewport) -> f64 {
    (viewport.width - 2.0 * MARGIN_X).min(CARD_MAX_WIDTH).max(20.0)
}

fn card_rows(project: &Project, card_w: f64) -> f64 {
    let inner = (card_w - 4.0).max(8.0) as usize;
    let description = super::wrap_text(&project.description, inner).len() as f64;
    let links = if project.repo_url.is_some() || project.demo_url.is_some() {
        1.0
    } else {
        0.0
    };
    // border, title, description, tags, links, border
    2.0 + 1.0 + description + 1.0 + links
}

pub fn extent(content: &Portfolio, viewport: &Viewport) -> f64 {
    let card_w = card_width(viewport);
    let mut rows = HEADING_ROWS;
    for project in &content.projects {
        rows += card_rows(project, card_w) + 1.0;
    }
    rows + 2.0
}

pub fn render(content: &Portfolio, viewport: &Viewport, reveal: f64) -> Vec<RenderCommand> {
    let card_w = card_width(viewport);
    let card_x = MARGIN_X;
    let inner = (card_w - 4.0).max(8.0) as usize;

    let mut out = Vec::with_capacity(64);
    out.push(RenderCommand::BeginGroup {
        id: "projects".into(),
    });
    heading(&mut out, "Featured", "Projects", 1.0, viewport.width, reveal);

    let mut y = HEADING_ROWS;
    let count = content.projects.len();

    for (i, project) in content.projects.iter().enumerate() {
        let local = stagger(reveal, i, count);
        let dy = slide(local);
        let rows = card_rows(project, card_w);

        out.push(RenderCommand::DrawRect {
            rect: Rect::new(card_x, y + dy, card_w, rows),
            color: ThemeToken::CardBackground,
            border_color: Some(ThemeToken::CardBorder),
        });

        let text_x = card_x + 2.0;
        let mut row = y + 1.0;
        out.push(RenderCommand::DrawText {
            position: Point::new(text_x, row + dy),
            text: project.title.clone().into(),
            color: ThemeToken::CardTitle,
            align: TextAlign::Left,
            emphasis: TextEmphasis::Bold,
        });
        row += 1.0;

        for line in super::wrap_text(&project.description, inner) {
            out.push(RenderCommand::DrawText {
                position: Point::new(text_x, row + dy),
                text: line.into(),
                color: ThemeToken::TextSecondary,
                align: TextAlign::Left,
                emphasis: fade_emphasis(local),
            });
            row += 1.0;
        }

        let tags = project
            .tech
            .iter()
            .map(|t| format!("[{t}]"))
            .collect::<Vec<_>>()
            .join(" ");
        out.push(RenderCommand::DrawText {
            position: Point::new(text_x, row + dy),
            text: tags.into(),
            color: ThemeToken::TagText,
            align: TextAlign::Left,
            emphasis: fade_emphasis(local),
        });
        row += 1.0;

        let mut links = Vec::new();
        if let Some(url) = &project.repo_url {
            links.push(format!("↗ {url}"));
        }
        if let Some(url) = &project.demo_url {
            links.push(format!("↗ {url}"));
        }
        if !links.is_empty() {
            out.push(RenderCommand::DrawText {
                position: Point::new(text_x, row + dy),
                text: links.join("   ").into(),
                color: ThemeToken::TextMuted,
                align: TextAlign::Left,
                emphasis: TextEmphasis::Dim,
            });
        }

        y += rows + 1.0;
    }

    out.push(RenderCommand::EndGroup);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_card_per_project() {
        let content = Portfolio::sample();
        let vp = Viewport::new(0.0, 100.0, 40.0);
        let cmds = render(&content, &vp, 1.0);
        let cards = cmds
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    RenderCommand::DrawRect {
                        color: ThemeToken::CardBackground,
                        ..
                    }
                )
            })
            .count();
        assert_eq!(cards, content.projects.len());
    }

    #[test]
    fn extent_matches_card_stack() {
        let content = Portfolio::sample();
        let vp = Viewport::new(0.0, 100.0, 40.0);
        let card_w = card_width(&vp);
        let expected: f64 = HEADING_ROWS
            + content
                .projects
                .iter()
                .map(|p| card_rows(p, card_w) + 1.0)
                .sum::<f64>()
            + 2.0;
        assert_eq!(extent(&content, &vp), expected);
    }

    #[test]
    fn narrow_terminal_wraps_more() {
        let content = Portfolio::sample();
        let wide = Viewport::new(0.0, 120.0, 40.0);
        let narrow = Viewport::new(0.0, 48.0, 40.0);
        assert!(extent(&content, &narrow) >= extent(&content, &wide));
    }
}
