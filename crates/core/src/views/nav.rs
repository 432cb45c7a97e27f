use termfolio_protocol::{
    Point, Rect, RenderCommand, TextAlign, TextEmphasis, ThemeToken, Viewport,
};

use crate::model::SectionId;

/// Rows the fixed navigation bar occupies at the top of the screen.
/// Content scrolls underneath it.
pub const NAV_HEIGHT: f64 = 2.0;

/// Render the navigation bar in screen coordinates. The bar is the
/// read-only consumer of the active-section cell: the active item gets the
/// highlight color and the indicator line underneath.
pub fn render(brand: &str, viewport: &Viewport, active: SectionId) -> Vec<RenderCommand> {
    let width = viewport.width;
    let mut out = Vec::with_capacity(16);
    out.push(RenderCommand::BeginGroup { id: "nav".into() });
    out.push(RenderCommand::DrawRect {
        rect: Rect::new(0.0, 0.0, width, NAV_HEIGHT),
        color: ThemeToken::NavBackground,
        border_color: None,
    });

    let items: Vec<&str> = SectionId::ALL.iter().map(|id| id.nav_label()).collect();
    let items_width: f64 = items.iter().map(|l| l.chars().count() as f64 + 3.0).sum();
    let brand_width = brand.chars().count() as f64 + 2.0;

    let show_brand = width >= items_width + brand_width + 2.0;
    if show_brand {
        out.push(RenderCommand::DrawText {
            position: Point::new(1.0, 0.0),
            text: brand.into(),
            color: ThemeToken::NavBrand,
            align: TextAlign::Left,
            emphasis: TextEmphasis::Bold,
        });
    }

    let mut x = (width - items_width - 1.0).max(if show_brand { brand_width } else { 1.0 });
    for (id, label) in SectionId::ALL.iter().zip(&items) {
        let is_active = *id == active;
        out.push(RenderCommand::DrawText {
            position: Point::new(x, 0.0),
            text: (*label).into(),
            color: if is_active {
                ThemeToken::NavActive
            } else {
                ThemeToken::NavInactive
            },
            align: TextAlign::Left,
            emphasis: if is_active {
                TextEmphasis::Bold
            } else {
                TextEmphasis::Normal
            },
        });
        if is_active {
            out.push(RenderCommand::DrawLine {
                from: Point::new(x, 1.0),
                to: Point::new(x + label.chars().count() as f64, 1.0),
                color: ThemeToken::NavIndicator,
            });
        }
        x += label.chars().count() as f64 + 3.0;
    }

    out.push(RenderCommand::EndGroup);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_labels(cmds: &[RenderCommand]) -> Vec<String> {
        cmds.iter()
            .filter_map(|c| match c {
                RenderCommand::DrawText {
                    text,
                    color: ThemeToken::NavActive,
                    ..
                } => Some(text.to_string()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn exactly_one_item_highlighted() {
        let vp = Viewport::new(0.0, 100.0, 40.0);
        let cmds = render("Sam Okafor", &vp, SectionId::Projects);
        assert_eq!(active_labels(&cmds), vec!["Projects".to_string()]);
    }

    #[test]
    fn indicator_tracks_the_active_item() {
        let vp = Viewport::new(0.0, 100.0, 40.0);
        let cmds = render("Sam Okafor", &vp, SectionId::About);
        let indicators = cmds
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    RenderCommand::DrawLine {
                        color: ThemeToken::NavIndicator,
                        ..
                    }
                )
            })
            .count();
        assert_eq!(indicators, 1);
    }

    #[test]
    fn narrow_bar_drops_the_brand() {
        let vp = Viewport::new(0.0, 52.0, 40.0);
        let cmds = render("Sam Okafor", &vp, SectionId::Hero);
        let has_brand = cmds.iter().any(|c| match c {
            RenderCommand::DrawText { text, .. } => text.contains("Sam Okafor"),
            _ => false,
        });
        assert!(!has_brand);
    }
}
