use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use tracing::error;

use common::scroll::{ScrollTracker, bar_width};

use crate::common::dom::{AnimationFrame, Listener, scroll_state};

// the scroll listener and the frame it schedules, alive while the bar is mounted
struct ScrollBinding {
    _listener: Listener,
    frame: Rc<AnimationFrame>,
}

// ScrollProgress
//
// thin bar pinned to the top of the viewport.  scroll events only ask for an animation frame;
// the page metrics are sampled once per frame, however many events arrived in between
#[component]
pub fn ScrollProgress() -> Element {
    let mut width = use_signal(|| bar_width(0.0));

    let tracker = use_hook(|| Rc::new(RefCell::new(ScrollTracker::new())));
    let binding: Rc<RefCell<Option<ScrollBinding>>> = use_hook(|| Rc::new(RefCell::new(None)));

    use_effect({
        let tracker = tracker.clone();
        let binding = binding.clone();

        move || {
            if binding.borrow().is_some() {
                return;
            }

            let frame = Rc::new(AnimationFrame::new({
                let tracker = tracker.clone();
                move || match scroll_state() {
                    Some(state) => width.set(tracker.borrow_mut().on_frame(state)),
                    None => tracker.borrow_mut().cancel(),
                }
            }));

            // the page may be restored mid-scroll, so sample once without waiting for an event
            if let Some(state) = scroll_state() {
                width.set(tracker.borrow_mut().on_frame(state));
            }

            let listener = Listener::on_window("scroll", true, {
                let tracker = tracker.clone();
                let frame = frame.clone();
                move |_| {
                    if !tracker.borrow_mut().on_scroll() {
                        return;
                    }

                    if let Err(err) = frame.request() {
                        error!("failed to schedule scroll frame: {err}");
                        tracker.borrow_mut().cancel();
                    }
                }
            });

            match listener {
                Ok(listener) => {
                    *binding.borrow_mut() = Some(ScrollBinding {
                        _listener: listener,
                        frame,
                    });
                }
                Err(err) => error!("failed to attach scroll listener: {err}"),
            }
        }
    });

    use_drop({
        let tracker = tracker.clone();
        move || {
            if let Some(binding) = binding.borrow_mut().take() {
                binding.frame.cancel();
                tracker.borrow_mut().cancel();
            }
        }
    });

    let progress = tracker.borrow().progress().round();

    rsx! {
        div {
            class: "scroll-progress",
            role: "progressbar",
            aria_label: "Reading progress",
            aria_valuemin: "0",
            aria_valuemax: "100",
            aria_valuenow: "{progress}",
            style: "width: {width}",
        }
    }
}
