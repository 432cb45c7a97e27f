//! Document layout: stacks the sections in document order and answers the
//! tracker's geometry queries.
//!
//! Layout is a pure function of content and viewport, recomputed whenever
//! either changes and never cached across frames. That keeps every consumer
//! (tracker, reveal ratios, renderer translation) reading the same fresh
//! geometry.

use termfolio_protocol::Viewport;

use crate::model::{Portfolio, SectionId, SectionMetrics};
use crate::tracker::SectionGeometry;
use crate::views;

#[derive(Debug, Clone)]
pub struct Layout {
    entries: Vec<(SectionId, SectionMetrics)>,
    footer_offset: f64,
    height: f64,
}

impl Layout {
    pub fn compute(content: &Portfolio, viewport: &Viewport) -> Self {
        let mut entries = Vec::with_capacity(SectionId::ALL.len());
        let mut y = 0.0;
        for id in SectionId::ALL {
            let extent = views::section_extent(id, content, viewport);
            entries.push((id, SectionMetrics::new(y, extent)));
            y += extent;
        }
        Self {
            entries,
            footer_offset: y,
            height: y + views::footer::EXTENT,
        }
    }

    /// Sections with their metrics, in document order.
    pub fn entries(&self) -> &[(SectionId, SectionMetrics)] {
        &self.entries
    }

    /// Document offset of the trailing footer block.
    pub fn footer_offset(&self) -> f64 {
        self.footer_offset
    }

    /// Total document height including the footer.
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl SectionGeometry for Layout {
    fn metrics(&self, id: SectionId) -> Option<SectionMetrics> {
        self.entries
            .iter()
            .find(|(sid, _)| *sid == id)
            .map(|(_, m)| *m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(0.0, 100.0, 40.0)
    }

    #[test]
    fn sections_stack_contiguously_in_document_order() {
        let layout = Layout::compute(&Portfolio::sample(), &viewport());
        let entries = layout.entries();
        assert_eq!(entries.len(), SectionId::ALL.len());

        let mut expected_offset = 0.0;
        for ((id, metrics), expected_id) in entries.iter().zip(SectionId::ALL) {
            assert_eq!(*id, expected_id);
            assert!((metrics.offset - expected_offset).abs() < f64::EPSILON);
            assert!(metrics.extent > 0.0);
            expected_offset += metrics.extent;
        }
        assert!((layout.footer_offset() - expected_offset).abs() < f64::EPSILON);
        assert!(layout.height() > layout.footer_offset());
    }

    #[test]
    fn geometry_lookup_by_id() {
        let layout = Layout::compute(&Portfolio::sample(), &viewport());
        let hero = layout.metrics(SectionId::Hero);
        assert!(hero.is_some_and(|m| m.offset == 0.0));
        assert!(layout.metrics(SectionId::Contact).is_some());
    }

    #[test]
    fn hero_fills_the_window() {
        let vp = viewport();
        let layout = Layout::compute(&Portfolio::sample(), &vp);
        let hero = layout.metrics(SectionId::Hero).map(|m| m.extent);
        assert_eq!(hero, Some(vp.height));
    }

    #[test]
    fn wider_viewport_never_grows_the_document() {
        let content = Portfolio::sample();
        let narrow = Layout::compute(&content, &Viewport::new(0.0, 50.0, 40.0));
        let wide = Layout::compute(&content, &Viewport::new(0.0, 120.0, 40.0));
        assert!(wide.height() <= narrow.height());
    }
}
