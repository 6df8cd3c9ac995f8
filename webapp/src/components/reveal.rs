use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use gloo_timers::callback::Timeout;
use tracing::{debug, error};
use web_sys::Element;

use common::reveal::{Animation, RevealManager, reveal_plan};

use crate::common::{
    SITE_CONFIG,
    dom::{IntersectionWatcher, add_classes, prefers_reduced_motion, query_within},
};

// markup contract: an element with data-reveal="<unique key>" fades in when scrolled into view;
// if it has .reveal-item children, they slide up one after another instead
pub const REVEAL_ATTRIBUTE: &str = "data-reveal";
const REVEAL_SELECTOR: &str = "[data-reveal]";
const REVEAL_ITEM_SELECTOR: &str = ".reveal-item";

fn reveal_element(element: &Element, reduced_motion: bool, stagger_ms: u32) {
    let animation = (!reduced_motion).then_some(Animation::FadeIn);
    add_classes(element, Animation::classes(animation));

    let children = query_within(element, REVEAL_ITEM_SELECTOR);

    for step in reveal_plan(children.len(), stagger_ms, Animation::SlideUp, reduced_motion) {
        let child = children[step.index].clone();
        let classes = Animation::classes(step.animation);

        if step.delay_ms == 0 {
            add_classes(&child, classes);
        } else {
            Timeout::new(step.delay_ms, move || add_classes(&child, classes)).forget();
        }
    }
}

// reveal-on-scroll for everything on the page carrying data-reveal
//
// call with ready = true once the content has rendered
pub fn use_reveal(ready: impl Fn() -> bool + 'static) {
    let watcher: Rc<RefCell<Option<IntersectionWatcher>>> = use_hook(|| Rc::new(RefCell::new(None)));
    let manager = use_hook(|| Rc::new(RefCell::new(RevealManager::<String>::new(&SITE_CONFIG.reveal))));

    use_effect({
        let watcher = watcher.clone();
        let manager = manager.clone();

        move || {
            if !ready() || watcher.borrow().is_some() {
                return;
            }

            let reduced_motion = prefers_reduced_motion();
            let stagger_ms = SITE_CONFIG.reveal.stagger_ms;

            let created = IntersectionWatcher::new(
                SITE_CONFIG.reveal.threshold,
                &SITE_CONFIG.reveal.root_margin,
                {
                    let manager = manager.clone();
                    move |entries, observer| {
                        for (element, intersecting) in entries {
                            let Some(key) = element.get_attribute(REVEAL_ATTRIBUTE) else {
                                continue;
                            };

                            let (reveal, unobserve) =
                                manager.borrow_mut().on_intersect(&key, intersecting);

                            if reveal {
                                reveal_element(&element, reduced_motion, stagger_ms);
                            }
                            if unobserve {
                                observer.unobserve(&element);
                            }
                        }
                    }
                },
            );

            match created {
                Ok(created) => {
                    let mut manager = manager.borrow_mut();
                    for element in created.observe_selector(REVEAL_SELECTOR) {
                        if let Some(key) = element.get_attribute(REVEAL_ATTRIBUTE) {
                            manager.observe(key);
                        }
                    }
                    debug!(count = manager.len(), "observing reveal targets");
                    *watcher.borrow_mut() = Some(created);
                }
                Err(err) => error!("failed to observe reveal targets: {err}"),
            }
        }
    });

    use_drop(move || {
        watcher.borrow_mut().take();
        manager.borrow_mut().disconnect();
    });
}
