use std::collections::HashSet;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

// scroll-reveal animations
//
// one intersection observer drives every "fade in when scrolled into view" element on the page.
// the bookkeeping of which elements are still observed lives here; the observer itself is in
// the webapp
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct RevealConfig {
    // fraction of the element that must be visible, 0.0 - 1.0
    pub threshold: f64,
    // css margin around the viewport
    pub root_margin: String,
    // stop observing an element after its first reveal
    pub once: bool,
    // delay between siblings in a staggered group
    pub stagger_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        RevealConfig {
            threshold: 0.1,
            root_margin: String::from("0px 0px -50px 0px"),
            once: true,
            stagger_ms: 100,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Animation {
    FadeIn,
    SlideUp,
}

impl Animation {
    // classes added to the element when it is revealed
    pub fn classes(animation: Option<Self>) -> &'static str {
        match animation {
            Some(Self::FadeIn) => "visible",
            Some(Self::SlideUp) => "slide-up visible",
            None => "visible",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealStep {
    pub index: usize,
    pub delay_ms: u32,
    // None: reduced motion, just make it visible
    pub animation: Option<Animation>,
}

// delays for revealing the children of a container one after another
pub fn reveal_plan(
    count: usize,
    stagger_ms: u32,
    animation: Animation,
    reduced_motion: bool,
) -> Vec<RevealStep> {
    (0..count)
        .map(|index| {
            if reduced_motion {
                RevealStep {
                    index,
                    delay_ms: 0,
                    animation: None,
                }
            } else {
                let step = u32::try_from(index).unwrap_or(u32::MAX);
                RevealStep {
                    index,
                    delay_ms: step.saturating_mul(stagger_ms),
                    animation: Some(animation),
                }
            }
        })
        .collect()
}

#[derive(Clone, Debug)]
pub struct RevealManager<K> {
    once: bool,
    observed: HashSet<K>,
}

impl<K: Eq + Hash + Clone> RevealManager<K> {
    pub fn new(config: &RevealConfig) -> Self {
        RevealManager {
            once: config.once,
            observed: HashSet::new(),
        }
    }

    pub fn observe(&mut self, key: K) {
        self.observed.insert(key);
    }

    pub fn unobserve(&mut self, key: &K) -> bool {
        self.observed.remove(key)
    }

    pub fn is_observed(&self, key: &K) -> bool {
        self.observed.contains(key)
    }

    // returns (reveal, unobserve): whether to run the reveal callback and whether the observer
    // should stop watching the element
    pub fn on_intersect(&mut self, key: &K, intersecting: bool) -> (bool, bool) {
        if !intersecting || !self.observed.contains(key) {
            return (false, false);
        }

        if self.once {
            self.observed.remove(key);
            (true, true)
        } else {
            (true, false)
        }
    }

    pub fn disconnect(&mut self) {
        self.observed.clear();
    }

    pub fn len(&self) -> usize {
        self.observed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn once_reveals_a_single_time() {
        let mut mgr = RevealManager::new(&RevealConfig::default());
        mgr.observe("card-1");

        assert_eq!(mgr.on_intersect(&"card-1", false), (false, false));
        assert_eq!(mgr.on_intersect(&"card-1", true), (true, true));
        assert!(!mgr.is_observed(&"card-1"));
        assert_eq!(mgr.on_intersect(&"card-1", true), (false, false));
    }

    #[test]
    fn repeat_mode_keeps_observing() {
        let config = RevealConfig {
            once: false,
            ..RevealConfig::default()
        };
        let mut mgr = RevealManager::new(&config);
        mgr.observe(3u32);

        assert_eq!(mgr.on_intersect(&3, true), (true, false));
        assert_eq!(mgr.on_intersect(&3, true), (true, false));
        assert_eq!(mgr.len(), 1);
    }

    #[test]
    fn disconnect_forgets_everything() {
        let mut mgr = RevealManager::new(&RevealConfig::default());
        mgr.observe(1);
        mgr.observe(2);
        mgr.disconnect();

        assert!(mgr.is_empty());
        assert_eq!(mgr.on_intersect(&1, true), (false, false));
    }

    #[test]
    fn staggered_delays() {
        let plan = reveal_plan(3, 100, Animation::SlideUp, false);
        let delays: Vec<_> = plan.iter().map(|s| s.delay_ms).collect();

        assert_eq!(delays, vec![0, 100, 200]);
        assert!(plan.iter().all(|s| s.animation == Some(Animation::SlideUp)));
    }

    #[test]
    fn reduced_motion_skips_animation() {
        let plan = reveal_plan(4, 100, Animation::FadeIn, true);

        assert!(plan.iter().all(|s| s.delay_ms == 0 && s.animation.is_none()));
        assert_eq!(Animation::classes(None), "visible");
    }

    #[test]
    fn defaults() {
        let config = RevealConfig::default();
        assert_eq!(config.threshold, 0.1);
        assert_eq!(config.root_margin, "0px 0px -50px 0px");
        assert!(config.once);
    }
}
