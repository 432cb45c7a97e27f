use termfolio_protocol::{Point, RenderCommand, TextAlign, TextEmphasis, ThemeToken, Viewport};

/// Upper bound on the particle population however large the document gets.
const MAX_PARTICLES: usize = 140;

/// One particle per this many document cells.
const DENSITY: f64 = 420.0;

/// A drifting background particle field, in document coordinates.
///
/// Positions are derived from a seeded generator so the field is
/// deterministic: the same document size and clock always draw the same
/// frame. Only particles inside the visible window are emitted.
pub fn render(doc_height: f64, viewport: &Viewport, t: f64) -> Vec<RenderCommand> {
    if doc_height <= 0.0 || viewport.width <= 0.0 {
        return Vec::new();
    }
    let count = ((viewport.width * doc_height / DENSITY) as usize).min(MAX_PARTICLES);
    let (top, bottom) = viewport.visible_range();

    let mut out = Vec::with_capacity(count / 2);
    for i in 0..count {
        let mut state = (i as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        let x = (next(&mut state) as f64 / u64::MAX as f64) * viewport.width;
        let base_y = (next(&mut state) as f64 / u64::MAX as f64) * doc_height;
        let speed = 1.0 + (next(&mut state) as f64 / u64::MAX as f64) * 3.0;

        // Drift upward, wrapping around the document.
        let y = (base_y - t * speed).rem_euclid(doc_height);
        if y < top || y >= bottom {
            continue;
        }

        let bright = i % 9 == 0;
        out.push(RenderCommand::DrawText {
            position: Point::new(x.floor(), y.floor()),
            text: if bright { "✦" } else { "·" }.into(),
            color: if bright {
                ThemeToken::ParticleBright
            } else {
                ThemeToken::ParticleDim
            },
            align: TextAlign::Left,
            emphasis: TextEmphasis::Dim,
        });
    }
    out
}

fn next(state: &mut u64) -> u64 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    *state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_for_fixed_inputs() {
        let vp = Viewport::new(100.0, 120.0, 40.0);
        let a = render(500.0, &vp, 12.5);
        let b = render(500.0, &vp, 12.5);
        assert_eq!(a.len(), b.len());
    }

    #[test]
    fn emits_only_visible_particles() {
        let vp = Viewport::new(100.0, 120.0, 40.0);
        for cmd in render(500.0, &vp, 3.0) {
            if let RenderCommand::DrawText { position, .. } = cmd {
                assert!(position.y >= 100.0 && position.y < 140.0);
            }
        }
    }

    #[test]
    fn empty_document_has_no_particles() {
        let vp = Viewport::new(0.0, 120.0, 40.0);
        assert!(render(0.0, &vp, 1.0).is_empty());
    }
}
