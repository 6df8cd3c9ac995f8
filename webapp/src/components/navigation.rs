use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::error;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use common::{
    menu::{MenuAction, MobileMenu},
    section::{LINK_CLASS, fragment_id},
};

use crate::{
    Route,
    common::{
        SITE_CONFIG,
        analytics::{ANALYTICS, set_opt_out, track},
        dom::{Listener, document, focus_id, focusable, set_body_style, viewport_width},
    },
    components::{ScrollProgress, ThemeToggle, sections::SECTIONS},
};

const MENU_TOGGLE_ID: &str = "nav-toggle";
const MENU_ID: &str = "nav-menu";
const MENU_FOCUSABLE: &str = "#nav-toggle, #nav-menu a";

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    href: String,
    label: String,
    menu: Signal<MobileMenu>,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let mut menu = props.menu;
    // links are matched to sections by their #fragment
    let class = match fragment_id(&props.href) {
        Some(id) => SECTIONS.read().link_class(id),
        None => LINK_CLASS,
    };

    rsx! {
        a {
            class,
            href: "{props.href}",
            onclick: move |_| {
                menu.with_mut(|m| m.on_link_click());
            },
            "{props.label}"
        }
    }
}

// keyboard and resize listeners for the mobile menu, alive while the nav bar is mounted
struct MenuBinding {
    _keydown: Listener,
    _resize: Listener,
}

fn bind_menu(mut menu: Signal<MobileMenu>) -> anyhow::Result<MenuBinding> {
    let keydown = Listener::on_document("keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };

        match event.key().as_str() {
            "Escape" => {
                if menu.with_mut(|m| m.on_escape()) == MenuAction::ClosedRefocus {
                    focus_id(MENU_TOGGLE_ID);
                }
            }
            "Tab" => {
                // the desktop links are not a menu, nothing to trap
                if !viewport_width().is_some_and(|w| menu.peek().is_mobile(w)) {
                    return;
                }

                let (elements, current) = focusable(MENU_FOCUSABLE);
                let Some(current) = current else {
                    return;
                };

                let next = menu
                    .peek()
                    .focus_trap(current, elements.len(), event.shift_key());

                if let Some(next) = next {
                    event.prevent_default();
                    if let Err(err) = elements[next].focus() {
                        error!("failed to move focus: {err:?}");
                    }
                }
            }
            _ => {}
        }
    })?;

    let resize = Listener::on_window("resize", true, move |_| {
        if let Some(width) = viewport_width() {
            if menu.peek().is_open() {
                menu.with_mut(|m| m.on_resize(width));
            }
        }
    })?;

    Ok(MenuBinding {
        _keydown: keydown,
        _resize: resize,
    })
}

#[component]
fn NavBarInner() -> Element {
    let mut menu = use_signal(|| MobileMenu::new(SITE_CONFIG.mobile_breakpoint_px));
    let binding: Rc<RefCell<Option<MenuBinding>>> = use_hook(|| Rc::new(RefCell::new(None)));

    use_effect({
        let binding = binding.clone();
        move || {
            if binding.borrow().is_some() {
                return;
            }
            match bind_menu(menu) {
                Ok(bound) => *binding.borrow_mut() = Some(bound),
                Err(err) => error!("failed to attach menu listeners: {err}"),
            }
        }
    });

    // lock page scrolling behind the open menu
    use_effect(move || set_body_style(menu.read().body_lock_style()));

    use_drop(move || {
        binding.borrow_mut().take();
        set_body_style("");
    });

    let state = menu();

    rsx! {
        header { class: "app-header",
            ScrollProgress {}

            div { class: "nav-container",
                Link { to: Route::Home {}, class: "logo", "Portfolio" }

                div { class: "nav-actions",
                    button {
                        id: MENU_TOGGLE_ID,
                        class: state.class("hamburger"),
                        r#type: "button",
                        aria_label: "Toggle navigation menu",
                        aria_controls: MENU_ID,
                        aria_expanded: state.aria_expanded(),
                        onclick: move |_| {
                            menu.with_mut(|m| m.toggle());
                        },
                        span {}
                        span {}
                        span {}
                    }

                    nav { id: MENU_ID, class: state.class("nav-links"),
                        for section in SITE_CONFIG.sections.iter() {
                            NavBarButton {
                                key: "{section.id}",
                                href: format!("/#{}", section.id),
                                label: section.label.clone(),
                                menu,
                            }
                        }
                        Link {
                            to: Route::ResumePage {},
                            class: "nav-link",
                            onclick: move |_| {
                                menu.with_mut(|m| m.on_link_click());
                            },
                            "Resume"
                        }
                    }

                    ThemeToggle {}
                }
            }

            div {
                class: state.class("nav-overlay"),
                onclick: move |_| {
                    menu.with_mut(|m| m.on_click_outside());
                },
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    let tracking = ANALYTICS.read().config().tracking_id.is_some();
    let opted_out = ANALYTICS.read().opted_out();

    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                p { "Built with Rust and WebAssembly" }
                if tracking {
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            set_opt_out(!opted_out);
                        },
                        if opted_out {
                            "Allow analytics"
                        } else {
                            "Opt out of analytics"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    let route: Route = use_route();

    use_effect(use_reactive((&route,), |(route,)| {
        let path = route.to_string();
        let title = document().map(|d| d.title()).unwrap_or_default();
        track(|a| a.track_page_view(&path, &title));
    }));

    rsx! {
        NavBarInner {}
        main { Outlet::<Route> {} }
        Footer {}
    }
}
