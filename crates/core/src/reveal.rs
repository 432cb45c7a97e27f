//! Once-only reveal detection.
//!
//! Each visual block owns a [`RevealTrigger`]. The frontend feeds it the
//! block's current viewport-intersection ratio; the first notification at
//! or above the threshold latches the trigger permanently. Animation
//! authors read the latched flag (and the time since the latch) to
//! interpolate between the resting and settled visual states. The
//! interpolation itself is not this module's concern.

use termfolio_protocol::Viewport;

use crate::model::SectionMetrics;

/// Default fraction of a block that must be visible before it reveals;
/// near-edge visibility is enough.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy)]
pub struct RevealOptions {
    /// Minimum intersection ratio that triggers the reveal.
    pub threshold: f64,
    /// When true (the page's only mode), the trigger disengages forever
    /// after the first positive detection.
    pub trigger_once: bool,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            trigger_once: true,
        }
    }
}

/// Two-valued reveal state. `Revealed` is terminal under `trigger_once`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Revealed,
}

#[derive(Debug, Clone)]
pub struct RevealTrigger {
    options: RevealOptions,
    state: RevealState,
}

impl RevealTrigger {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            options,
            state: RevealState::Pending,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    /// Process one visibility notification.
    ///
    /// Returns `true` exactly when this call latched the trigger, which is
    /// the caller's cue to start the entrance animation. Once latched with
    /// `trigger_once`, all further notifications (including ratio 0) are
    /// ignored.
    pub fn notify(&mut self, ratio: f64) -> bool {
        match self.state {
            RevealState::Pending => {
                if ratio >= self.options.threshold {
                    self.state = RevealState::Revealed;
                    tracing::debug!(ratio, "block revealed");
                    true
                } else {
                    false
                }
            }
            RevealState::Revealed => {
                if !self.options.trigger_once && ratio < self.options.threshold {
                    self.state = RevealState::Pending;
                }
                false
            }
        }
    }
}

impl Default for RevealTrigger {
    fn default() -> Self {
        Self::new(RevealOptions::default())
    }
}

/// Fraction of a block's vertical interval currently inside the viewport,
/// clamped to `[0, 1]`. Zero-extent blocks yield `0.0`.
///
/// This is the stand-in for the browser's visibility-observer notification
/// stream: the frontend computes it per block per frame and passes it to
/// that block's trigger.
pub fn intersection_ratio(metrics: &SectionMetrics, viewport: &Viewport) -> f64 {
    if metrics.extent <= 0.0 {
        return 0.0;
    }
    let (top, bottom) = viewport.visible_range();
    let overlap = (metrics.end().min(bottom) - metrics.offset.max(top)).max(0.0);
    (overlap / metrics.extent).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_threshold_never_triggers() {
        let mut trigger = RevealTrigger::default();
        assert!(!trigger.notify(0.0));
        assert!(!trigger.notify(0.05));
        assert!(!trigger.notify(0.0999));
        assert!(!trigger.revealed());
    }

    #[test]
    fn latches_exactly_once_at_threshold() {
        let mut trigger = RevealTrigger::default();
        let ratios = [0.0, 0.05, 0.12, 0.5];
        let latched: Vec<bool> = ratios.iter().map(|&r| trigger.notify(r)).collect();
        assert_eq!(latched, vec![false, false, true, false]);
        assert!(trigger.revealed());
    }

    #[test]
    fn latch_is_terminal() {
        let mut trigger = RevealTrigger::default();
        trigger.notify(1.0);
        assert!(trigger.revealed());
        for ratio in [0.0, 0.05, 1.0, 0.0] {
            assert!(!trigger.notify(ratio));
            assert!(trigger.revealed());
        }
    }

    #[test]
    fn exact_threshold_triggers() {
        let mut trigger = RevealTrigger::new(RevealOptions {
            threshold: 0.25,
            trigger_once: true,
        });
        assert!(!trigger.notify(0.2499));
        assert!(trigger.notify(0.25));
    }

    #[test]
    fn follow_mode_unlatches_below_threshold() {
        let mut trigger = RevealTrigger::new(RevealOptions {
            threshold: 0.5,
            trigger_once: false,
        });
        assert!(trigger.notify(0.6));
        assert!(trigger.revealed());
        assert!(!trigger.notify(0.1));
        assert!(!trigger.revealed());
        // And it can latch again.
        assert!(trigger.notify(0.7));
    }

    #[test]
    fn ratio_of_fully_visible_block() {
        let vp = Viewport::new(0.0, 80.0, 40.0);
        let m = SectionMetrics::new(10.0, 20.0);
        assert!((intersection_ratio(&m, &vp) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ratio_of_half_visible_block() {
        let vp = Viewport::new(0.0, 80.0, 40.0);
        let m = SectionMetrics::new(30.0, 20.0);
        assert!((intersection_ratio(&m, &vp) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn ratio_of_offscreen_block_is_zero() {
        let vp = Viewport::new(0.0, 80.0, 40.0);
        let m = SectionMetrics::new(100.0, 20.0);
        assert_eq!(intersection_ratio(&m, &vp), 0.0);
    }

    #[test]
    fn ratio_of_zero_extent_block_is_zero() {
        let vp = Viewport::new(0.0, 80.0, 40.0);
        let m = SectionMetrics::new(10.0, 0.0);
        assert_eq!(intersection_ratio(&m, &vp), 0.0);
    }

    #[test]
    fn ratio_caps_at_one_for_blocks_taller_than_viewport() {
        let vp = Viewport::new(10.0, 80.0, 40.0);
        let m = SectionMetrics::new(0.0, 200.0);
        let ratio = intersection_ratio(&m, &vp);
        assert!(ratio > 0.0 && ratio <= 1.0);
        assert!((ratio - 0.2).abs() < 1e-9);
    }
}
