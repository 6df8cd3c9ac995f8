use std::{cell::Cell, rc::Rc};

use anyhow::Result;
use tracing::{error, warn};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, NodeList, Window,
};

use common::{
    scroll::ScrollState,
    theme::{Theme, ThemeTarget},
};

// thin bindings between the common state machines and the browser
//
// everything that attaches to the page is an owned value whose Drop detaches it again, so a
// component can hold the binding in a hook and release it in use_drop()

pub const THEME_ATTRIBUTE: &str = "data-theme";

pub fn js_error(err: JsValue) -> anyhow::Error {
    anyhow::Error::msg(format!("{err:?}"))
}

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| anyhow::Error::msg("no global window exists"))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| anyhow::Error::msg("window has no document"))
}

// event listener, removed on drop
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        passive: bool,
        callback: impl FnMut(Event) + 'static,
    ) -> Result<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(callback);

        let options = AddEventListenerOptions::new();
        options.set_passive(passive);

        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(js_error)?;

        Ok(Listener {
            target: target.clone(),
            event,
            callback,
        })
    }

    pub fn on_window(
        event: &'static str,
        passive: bool,
        callback: impl FnMut(Event) + 'static,
    ) -> Result<Self> {
        Self::new(window()?.as_ref(), event, passive, callback)
    }

    pub fn on_document(event: &'static str, callback: impl FnMut(Event) + 'static) -> Result<Self> {
        Self::new(document()?.as_ref(), event, false, callback)
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            error!("failed to remove {} listener: {err:?}", self.event);
        }
    }
}

// a reusable requestAnimationFrame callback; a pending frame is cancelled on drop
pub struct AnimationFrame {
    callback: Closure<dyn FnMut()>,
    id: Rc<Cell<Option<i32>>>,
}

impl AnimationFrame {
    pub fn new(mut on_frame: impl FnMut() + 'static) -> Self {
        let id = Rc::new(Cell::new(None));
        let pending = Rc::clone(&id);

        let callback = Closure::<dyn FnMut()>::new(move || {
            pending.set(None);
            on_frame();
        });

        AnimationFrame { callback, id }
    }

    pub fn request(&self) -> Result<()> {
        let id = window()?
            .request_animation_frame(self.callback.as_ref().unchecked_ref())
            .map_err(js_error)?;

        self.id.set(Some(id));
        Ok(())
    }

    pub fn cancel(&self) {
        if let Some(id) = self.id.take() {
            if let Ok(window) = window() {
                if let Err(err) = window.cancel_animation_frame(id) {
                    error!("failed to cancel animation frame: {err:?}");
                }
            }
        }
    }
}

impl Drop for AnimationFrame {
    fn drop(&mut self) {
        self.cancel();
    }
}

// one intersection observer; disconnected on drop
pub struct IntersectionWatcher {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl IntersectionWatcher {
    pub fn new(
        threshold: f64,
        root_margin: &str,
        mut on_entries: impl FnMut(Vec<(Element, bool)>, &IntersectionObserver) + 'static,
    ) -> Result<Self> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let entries = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| (entry.target(), entry.is_intersecting()))
                    .collect();

                on_entries(entries, &observer);
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(js_error)?;

        Ok(IntersectionWatcher {
            observer,
            _callback: callback,
        })
    }

    // elements missing from the page are skipped; returns how many were found
    pub fn observe_ids<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> usize {
        let Ok(document) = document() else {
            return 0;
        };

        let mut found = 0;
        for id in ids {
            match document.get_element_by_id(id) {
                Some(element) => {
                    self.observer.observe(&element);
                    found += 1;
                }
                None => warn!(id, "no element to observe"),
            }
        }
        found
    }

    // observe every element matching the selector, returning them in document order
    pub fn observe_selector(&self, selector: &str) -> Vec<Element> {
        let elements = query_all(selector);
        for element in elements.iter() {
            self.observer.observe(element);
        }
        elements
    }
}

impl Drop for IntersectionWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

// current scroll metrics, None outside a browser
pub fn scroll_state() -> Option<ScrollState> {
    let window = web_sys::window()?;
    let root = window.document()?.document_element()?;

    let offset = window.scroll_y().ok()?.max(0.0).round() as u32;
    let viewport = window.inner_height().ok()?.as_f64()? as i64;

    Some(ScrollState::new(
        offset,
        i64::from(root.scroll_height()),
        viewport,
    ))
}

pub fn viewport_width() -> Option<u32> {
    let width = web_sys::window()?.inner_width().ok()?.as_f64()?;
    Some(width.max(0.0) as u32)
}

pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .is_some_and(|mql| mql.matches())
}

// the <html> element carries the theme for the stylesheets
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentTheme;

impl ThemeTarget for DocumentTheme {
    fn apply(&mut self, theme: Theme) {
        let Some(root) = document().ok().and_then(|d| d.document_element()) else {
            warn!("no document element to apply theme to");
            return;
        };

        let result = match theme.attribute() {
            Some(value) => root.set_attribute(THEME_ATTRIBUTE, value),
            None => root.remove_attribute(THEME_ATTRIBUTE),
        };

        if let Err(err) = result {
            error!("failed to apply theme {theme}: {err:?}");
        }
    }
}

pub fn set_body_style(style: &str) {
    let Some(body) = document().ok().and_then(|d| d.body()) else {
        return;
    };

    let result = if style.is_empty() {
        body.remove_attribute("style")
    } else {
        body.set_attribute("style", style)
    };

    if let Err(err) = result {
        error!("failed to set body style: {err:?}");
    }
}

pub fn add_classes(element: &Element, classes: &str) {
    for class in classes.split_whitespace() {
        if let Err(err) = element.class_list().add_1(class) {
            error!("failed to add class {class}: {err:?}");
        }
    }
}

pub fn focus_id(id: &str) {
    if let Some(element) = document()
        .ok()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    {
        if let Err(err) = element.focus() {
            error!("failed to focus {id}: {err:?}");
        }
    }
}

pub fn query_all(selector: &str) -> Vec<Element> {
    match document() {
        Ok(document) => collect_nodes(document.query_selector_all(selector), selector),
        Err(_) => Vec::new(),
    }
}

pub fn query_within(parent: &Element, selector: &str) -> Vec<Element> {
    collect_nodes(parent.query_selector_all(selector), selector)
}

fn collect_nodes(list: Result<NodeList, JsValue>, selector: &str) -> Vec<Element> {
    match list {
        Ok(list) => (0..list.length())
            .filter_map(|idx| list.item(idx))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect(),
        Err(err) => {
            error!("bad selector {selector}: {err:?}");
            Vec::new()
        }
    }
}

// focusable elements matching the selector, and the index of the one holding focus
pub fn focusable(selector: &str) -> (Vec<HtmlElement>, Option<usize>) {
    let Ok(document) = document() else {
        return (Vec::new(), None);
    };

    let elements: Vec<HtmlElement> = query_all(selector)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect();

    let active = document.active_element().map(JsValue::from);
    let current = elements
        .iter()
        .position(|el| Some(JsValue::from(el.clone())) == active);

    (elements, current)
}

pub fn print_page() {
    match window() {
        Ok(window) => {
            if let Err(err) = window.print() {
                error!("failed to open print dialog: {err:?}");
            }
        }
        Err(err) => error!("{err}"),
    }
}
