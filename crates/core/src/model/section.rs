use serde::{Deserialize, Serialize};

/// One named content region of the page.
///
/// The set of sections is fixed at composition time; `ALL` is both the
/// document order and the navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Hero,
    About,
    Skills,
    Projects,
    Articles,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Articles,
        SectionId::Contact,
    ];

    /// Stable string identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Articles => "articles",
            SectionId::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar.
    pub fn nav_label(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Articles => "Articles",
            SectionId::Contact => "Contact",
        }
    }

    /// Position in document order.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Live layout geometry of one section, in terminal rows from the document
/// origin. Recomputed on demand from the current layout, never stored
/// across frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionMetrics {
    /// Top edge distance from the document origin.
    pub offset: f64,
    /// Rendered height.
    pub extent: f64,
}

impl SectionMetrics {
    pub fn new(offset: f64, extent: f64) -> Self {
        Self { offset, extent }
    }

    /// Bottom edge (exclusive).
    pub fn end(&self) -> f64 {
        self.offset + self.extent
    }

    /// Whether the half-open interval `[offset, offset + extent)` contains
    /// the given document coordinate.
    pub fn contains(&self, point: f64) -> bool {
        point >= self.offset && point < self.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_document_order() {
        assert_eq!(SectionId::ALL[0], SectionId::Hero);
        assert_eq!(SectionId::ALL[5], SectionId::Contact);
        for (i, id) in SectionId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn serde_uses_lowercase_ids() {
        let json = serde_json::to_string(&SectionId::Projects).unwrap_or_default();
        assert_eq!(json, "\"projects\"");
    }

    #[test]
    fn interval_is_half_open() {
        let m = SectionMetrics::new(800.0, 800.0);
        assert!(m.contains(800.0));
        assert!(m.contains(1599.9));
        assert!(!m.contains(1600.0));
        assert!(!m.contains(799.9));
    }

    #[test]
    fn zero_extent_contains_nothing() {
        let m = SectionMetrics::new(100.0, 0.0);
        assert!(!m.contains(100.0));
    }
}
