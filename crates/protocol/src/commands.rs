use serde::{Deserialize, Serialize};

use crate::shared_str::SharedStr;
use crate::theme::ThemeToken;
use crate::types::{Point, Rect};

/// A single, stateless render instruction.
///
/// The core emits a `Vec<RenderCommand>` per section in section-local
/// coordinates (one unit = one terminal cell). The renderer translates by
/// the section's document offset, culls what falls outside the window, and
/// paints sequentially; each command carries all the data it needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Fill a rectangle with a background color, optionally bordered.
    DrawRect {
        rect: Rect,
        color: ThemeToken,
        border_color: Option<ThemeToken>,
    },

    /// Draw a text string at a position.
    DrawText {
        position: Point,
        text: SharedStr,
        color: ThemeToken,
        align: TextAlign,
        emphasis: TextEmphasis,
    },

    /// Draw a horizontal or vertical line segment.
    DrawLine {
        from: Point,
        to: Point,
        color: ThemeToken,
    },

    /// Begin a logical group (e.g. one section). Renderers may use this
    /// for batching or debugging; painting semantics are unaffected.
    BeginGroup { id: SharedStr },

    /// End the current group.
    EndGroup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Terminal text weight. Cells have a single glyph size, so emphasis is the
/// styling axis instead of font size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextEmphasis {
    Normal,
    Bold,
    Dim,
}
