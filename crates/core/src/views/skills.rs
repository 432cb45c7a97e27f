use termfolio_protocol::{
    Point, Rect, RenderCommand, TextAlign, TextEmphasis, ThemeToken, Viewport,
};

use crate::model::Portfolio;

use super::{fade_emphasis, heading, slide, stagger, HEADING_ROWS, MARGIN_X};

const NAME_COLUMN: f64 = 18.0;
const GAUGE_MAX: f64 = 24.0;

fn gauge_width(viewport: &Viewport) -> f64 {
    (viewport.width - 2.0 * MARGIN_X - NAME_COLUMN - 8.0).clamp(8.0, GAUGE_MAX)
}

pub fn extent(content: &Portfolio, _viewport: &Viewport) -> f64 {
    let mut rows = HEADING_ROWS;
    for category in &content.skills {
        rows += 1.0 + category.skills.len() as f64 + 1.0;
    }
    if !content.coding_profiles.is_empty() {
        rows += 2.0;
    }
    rows + 2.0
}

pub fn render(content: &Portfolio, viewport: &Viewport, reveal: f64) -> Vec<RenderCommand> {
    let gauge_w = gauge_width(viewport);
    let mut out = Vec::with_capacity(64);
    out.push(RenderCommand::BeginGroup { id: "skills".into() });
    heading(&mut out, "My", "Skills", 1.0, viewport.width, reveal);

    let mut y = HEADING_ROWS;
    let category_count = content.skills.len();

    for (ci, category) in content.skills.iter().enumerate() {
        let local = stagger(reveal, ci, category_count + 1);
        let dy = slide(local);

        out.push(RenderCommand::DrawText {
            position: Point::new(MARGIN_X, y + dy),
            text: category.title.clone().into(),
            color: ThemeToken::AccentAlt,
            align: TextAlign::Left,
            emphasis: TextEmphasis::Bold,
        });
        y += 1.0;

        for skill in &category.skills {
            out.push(RenderCommand::DrawText {
                position: Point::new(MARGIN_X + 2.0, y + dy),
                text: skill.name.clone().into(),
                color: ThemeToken::TextPrimary,
                align: TextAlign::Left,
                emphasis: fade_emphasis(local),
            });

            let gauge_x = MARGIN_X + 2.0 + NAME_COLUMN;
            out.push(RenderCommand::DrawRect {
                rect: Rect::new(gauge_x, y + dy, gauge_w, 1.0),
                color: ThemeToken::GaugeTrack,
                border_color: None,
            });
            // The fill grows with the reveal, settling at the skill level.
            let fill = gauge_w * f64::from(skill.level) / 100.0 * local;
            if fill >= 1.0 {
                out.push(RenderCommand::DrawRect {
                    rect: Rect::new(gauge_x, y + dy, fill.floor(), 1.0),
                    color: ThemeToken::GaugeFill,
                    border_color: None,
                });
            }
            out.push(RenderCommand::DrawText {
                position: Point::new(gauge_x + gauge_w + 2.0, y + dy),
                text: format!("{:>3}%", skill.level).into(),
                color: ThemeToken::TextMuted,
                align: TextAlign::Left,
                emphasis: fade_emphasis(local),
            });
            y += 1.0;
        }
        y += 1.0;
    }

    if !content.coding_profiles.is_empty() {
        let local = stagger(reveal, category_count, category_count + 1);
        let joined = content
            .coding_profiles
            .iter()
            .map(|p| format!("{} @{}", p.name, p.username))
            .collect::<Vec<_>>()
            .join(" · ");
        out.push(RenderCommand::DrawText {
            position: Point::new(MARGIN_X, y + slide(local)),
            text: format!("Find me on  {joined}").into(),
            color: ThemeToken::TextMuted,
            align: TextAlign::Left,
            emphasis: fade_emphasis(local),
        });
    }

    out.push(RenderCommand::EndGroup);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_track_per_skill() {
        let content = Portfolio::sample();
        let vp = Viewport::new(0.0, 100.0, 40.0);
        let cmds = render(&content, &vp, 1.0);
        let rects = cmds
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    RenderCommand::DrawRect {
                        color: ThemeToken::GaugeTrack,
                        ..
                    }
                )
            })
            .count();
        let skills: usize = content.skills.iter().map(|c| c.skills.len()).sum();
        assert_eq!(rects, skills);
    }

    #[test]
    fn fills_absent_at_reveal_start() {
        let content = Portfolio::sample();
        let vp = Viewport::new(0.0, 100.0, 40.0);
        let cmds = render(&content, &vp, 0.0);
        let fills = cmds
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    RenderCommand::DrawRect {
                        color: ThemeToken::GaugeFill,
                        ..
                    }
                )
            })
            .count();
        assert_eq!(fills, 0);
    }

    #[test]
    fn gauge_narrows_with_the_terminal() {
        let wide = Viewport::new(0.0, 120.0, 40.0);
        let narrow = Viewport::new(0.0, 56.0, 40.0);
        assert!(gauge_width(&narrow) < gauge_width(&wide));
        assert!(gauge_width(&narrow) >= 8.0);
    }
}
