use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use tracing::{debug, error};

use common::section::SectionHighlighter;

use crate::common::{SITE_CONFIG, analytics::track, dom::IntersectionWatcher};

// a section counts as in view while it crosses a band just below the header
const SECTION_THRESHOLD: f64 = 0.0;
const SECTION_ROOT_MARGIN: &str = "-30% 0px -60% 0px";

// the navigation bar reads link classes from here; the home page feeds it
pub static SECTIONS: GlobalSignal<SectionHighlighter> =
    Signal::global(|| SectionHighlighter::new(SITE_CONFIG.section_ids()));

// watch the configured sections once they are on the page
//
// call with ready = true after the sections have rendered.  missing sections are skipped, and
// leaving the page clears the highlight
pub fn use_section_highlighter(ready: impl Fn() -> bool + 'static) {
    let watcher: Rc<RefCell<Option<IntersectionWatcher>>> = use_hook(|| Rc::new(RefCell::new(None)));

    use_effect({
        let watcher = watcher.clone();
        move || {
            if !ready() || watcher.borrow().is_some() {
                return;
            }

            let created = IntersectionWatcher::new(
                SECTION_THRESHOLD,
                SECTION_ROOT_MARGIN,
                |entries, _| {
                    let reports: Vec<(String, bool)> =
                        entries.iter().map(|(el, hit)| (el.id(), *hit)).collect();

                    let transition = SECTIONS.with_mut(|sections| {
                        sections.observe_batch(reports.iter().map(|(id, hit)| (id.as_str(), *hit)))
                    });

                    if let Some(to) = transition.and_then(|t| t.to) {
                        track(|a| a.track_section_view(&to, SITE_CONFIG.section_label(&to)));
                    }
                },
            );

            match created {
                Ok(created) => {
                    let found = created.observe_ids(SITE_CONFIG.section_ids());
                    debug!(found, "observing page sections");
                    *watcher.borrow_mut() = Some(created);
                }
                Err(err) => error!("failed to observe sections: {err}"),
            }
        }
    });

    use_drop(move || {
        watcher.borrow_mut().take();
        SECTIONS.with_mut(|sections| sections.reset());
    });
}
