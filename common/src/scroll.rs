use tracing::trace;

// scroll progress
//
// the page samples window.scrollY, documentElement.scrollHeight and window.innerHeight into a
// ScrollState on every animation frame it has scheduled; progress is derived, never stored
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: u32,
    pub document_height: i64,
    pub viewport_height: i64,
}

impl ScrollState {
    pub fn new(offset: u32, document_height: i64, viewport_height: i64) -> Self {
        ScrollState {
            offset,
            document_height,
            viewport_height,
        }
    }

    // percentage of the scrollable distance traversed, always within [0, 100]
    //
    // a page that fits on screen has nothing to scroll and reports 0.  offsets past the end
    // (overscroll, a resize racing the sample) clamp to 100
    pub fn progress(&self) -> f64 {
        let scrollable = self.document_height - self.viewport_height;
        if scrollable <= 0 {
            return 0.0;
        }

        let progress = f64::from(self.offset) / scrollable as f64 * 100.0;
        progress.clamp(0.0, 100.0)
    }
}

// frame coalescing
//
// scroll events can arrive many times per frame.  the gate admits the first one, after which the
// caller schedules a single animation frame; everything until that frame runs is absorbed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    // true if the caller should schedule a frame
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn complete(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[derive(Clone, Debug, Default)]
pub struct ScrollTracker {
    gate: FrameGate,
    progress: f64,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    // called for every scroll event; returns true when an animation frame must be scheduled
    pub fn on_scroll(&mut self) -> bool {
        self.gate.request()
    }

    // called from the animation frame (and once on mount with no frame pending)
    //
    // returns the width to put on the progress bar
    pub fn on_frame(&mut self, state: ScrollState) -> String {
        self.gate.complete();
        self.progress = state.progress();

        trace!(progress = self.progress, "scroll progress updated");
        bar_width(self.progress)
    }

    // the component is going away and the scheduled frame has been cancelled
    pub fn cancel(&mut self) {
        self.gate.complete();
    }

    pub fn frame_pending(&self) -> bool {
        self.gate.is_pending()
    }
}

pub fn bar_width(progress: f64) -> String {
    format!("{progress}%")
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn top_middle_and_bottom() {
        assert_eq!(ScrollState::new(0, 2000, 1000).progress(), 0.0);
        assert_eq!(ScrollState::new(500, 2000, 1000).progress(), 50.0);
        assert_eq!(ScrollState::new(1000, 2000, 1000).progress(), 100.0);
    }

    #[test]
    fn unscrollable_page_is_zero() {
        assert_eq!(ScrollState::new(0, 800, 1000).progress(), 0.0);
        assert_eq!(ScrollState::new(300, 1000, 1000).progress(), 0.0);
        assert_eq!(ScrollState::new(0, 0, 0).progress(), 0.0);
    }

    #[test]
    fn overscroll_clamps() {
        assert_eq!(ScrollState::new(5000, 2000, 1000).progress(), 100.0);
    }

    #[test]
    fn many_scroll_events_schedule_one_frame() {
        let mut tracker = ScrollTracker::new();

        assert!(tracker.on_scroll());
        for _ in 0..50 {
            assert!(!tracker.on_scroll());
        }
        assert!(tracker.frame_pending());

        let width = tracker.on_frame(ScrollState::new(250, 2000, 1000));
        assert_eq!(width, "25%");
        assert_eq!(tracker.progress(), 25.0);
        assert!(!tracker.frame_pending());

        // the next event after the frame is admitted again
        assert!(tracker.on_scroll());
    }

    #[test]
    fn cancel_releases_the_gate() {
        let mut tracker = ScrollTracker::new();

        assert!(tracker.on_scroll());
        tracker.cancel();
        assert!(tracker.on_scroll());
    }

    proptest! {
        #[test]
        fn matches_formula_when_scrollable(
            viewport in 1i64..5000,
            extra in 1i64..50_000,
            offset in 0u32..100_000,
        ) {
            let doc = viewport + extra;
            let expected = (f64::from(offset) / extra as f64 * 100.0).clamp(0.0, 100.0);

            let progress = ScrollState::new(offset, doc, viewport).progress();
            prop_assert!((progress - expected).abs() < 1e-9);
            prop_assert!((0.0..=100.0).contains(&progress));
        }

        #[test]
        fn zero_when_not_scrollable(
            doc in 0i64..5000,
            slack in 0i64..5000,
            offset in any::<u32>(),
        ) {
            let progress = ScrollState::new(offset, doc, doc + slack).progress();
            prop_assert_eq!(progress, 0.0);
        }

        #[test]
        fn monotonic_in_offset(
            doc in 0i64..20_000,
            viewport in 0i64..5000,
            a in 0u32..30_000,
            b in 0u32..30_000,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let p_lo = ScrollState::new(lo, doc, viewport).progress();
            let p_hi = ScrollState::new(hi, doc, viewport).progress();
            prop_assert!(p_lo <= p_hi);
        }
    }
}
