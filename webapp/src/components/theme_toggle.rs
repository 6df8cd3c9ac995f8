use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;

use common::theme::{Theme, ThemePreference};

use crate::common::{SITE_CONFIG, analytics::track, dom::DocumentTheme, storage::BrowserStorage};

type PagePreference = ThemePreference<BrowserStorage, DocumentTheme>;

// the stored theme is applied before the hook is attached, so loading never counts as a toggle
fn load_preference() -> Rc<RefCell<PagePreference>> {
    let mut preference = ThemePreference::new(
        SITE_CONFIG.theme_storage_key.clone(),
        BrowserStorage,
        DocumentTheme,
    );
    preference.load();

    let preference =
        preference.with_hook(|theme: Theme| track(|a| a.track_theme_toggle(theme.as_str())));

    Rc::new(RefCell::new(preference))
}

#[component]
pub fn ThemeToggle() -> Element {
    let preference = use_hook(load_preference);
    let mut current = use_signal(|| preference.borrow().current());

    let theme = current();
    let (icon, label) = match theme {
        Theme::Dark => ("☀", "Switch to light theme"),
        Theme::Light => ("☾", "Switch to dark theme"),
    };

    rsx! {
        button {
            class: "theme-toggle",
            r#type: "button",
            aria_label: label,
            aria_pressed: "{theme.pressed()}",
            title: label,
            onclick: move |_| {
                let next = preference.borrow_mut().toggle();
                current.set(next);
            },
            "{icon}"
        }
    }
}
