use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Bottom edge (exclusive).
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }
}

/// The visible window onto the document, in terminal cell units.
///
/// `scroll_y` is the distance from the document origin to the top of the
/// window. Width and height are the content area of the terminal, excluding
/// the fixed navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub scroll_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(scroll_y: f64, width: f64, height: f64) -> Self {
        Self {
            scroll_y,
            width,
            height,
        }
    }

    /// The single vertical coordinate used to decide which section is
    /// active: the document-space position of the window's center line.
    pub fn probe_point(&self) -> f64 {
        self.scroll_y + self.height / 2.0
    }

    /// Document-space interval currently visible: `[top, bottom)`.
    pub fn visible_range(&self) -> (f64, f64) {
        (self.scroll_y, self.scroll_y + self.height)
    }
}
