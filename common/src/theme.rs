use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::{error, instrument, warn};

use crate::storage::KeyValueStore;

// theme preference
//
// exactly two themes exist.  the choice is persisted as "dark" / "light" and anything else found
// in storage is treated as if nothing were stored
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    // value of the document-level data-theme attribute; dark is the stylesheet default and is
    // expressed by removing the attribute
    pub fn attribute(self) -> Option<&'static str> {
        match self {
            Self::Dark => None,
            Self::Light => Some("light"),
        }
    }

    // aria-pressed on the toggle button
    pub fn pressed(self) -> bool {
        self == Self::Light
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidTheme(pub String);

impl fmt::Display for InvalidTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid theme: {}", self.0)
    }
}

impl std::error::Error for InvalidTheme {}

impl FromStr for Theme {
    type Err = InvalidTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(InvalidTheme(other.to_owned())),
        }
    }
}

// whatever renders the theme, the <html> element in the browser
pub trait ThemeTarget {
    fn apply(&mut self, theme: Theme);
}

type ThemeHook = Box<dyn FnMut(Theme)>;

// single owner of the page's theme
//
// storage and the render target are injected, so the same controller runs in the browser and
// in tests
pub struct ThemePreference<S, T> {
    key: String,
    store: S,
    target: T,
    current: Theme,
    on_change: Option<ThemeHook>,
}

impl<S: KeyValueStore, T: ThemeTarget> ThemePreference<S, T> {
    pub fn new(key: impl Into<String>, store: S, target: T) -> Self {
        ThemePreference {
            key: key.into(),
            store,
            target,
            current: Theme::default(),
            on_change: None,
        }
    }

    // called after every accepted set(), e.g. to report theme_toggle to analytics
    pub fn with_hook(mut self, hook: impl FnMut(Theme) + 'static) -> Self {
        self.on_change = Some(Box::new(hook));
        self
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // read the persisted preference and apply it, falling back to dark
    #[instrument(level = "debug", skip(self), fields(key = %self.key))]
    pub fn load(&mut self) -> Theme {
        let theme = match self.store.get(&self.key) {
            Ok(Some(value)) => value.parse::<Theme>().unwrap_or_else(|err| {
                warn!("ignoring stored {err}");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(err) => {
                error!("failed to load theme preference: {err}");
                Theme::default()
            }
        };

        self.set(theme);
        theme
    }

    // a failed write is logged; the page still switches theme
    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        self.target.apply(theme);

        if let Err(err) = self.store.set(&self.key, theme.as_str()) {
            error!("failed to save theme preference: {err}");
        }

        if let Some(hook) = self.on_change.as_mut() {
            hook(theme);
        }
    }

    // string entry point for untyped callers; unknown names change nothing
    pub fn set_named(&mut self, name: &str) -> bool {
        match name.parse::<Theme>() {
            Ok(theme) => {
                self.set(theme);
                true
            }
            Err(err) => {
                warn!("rejecting {err}");
                false
            }
        }
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.set(next);
        next
    }
}

impl<S, T> fmt::Debug for ThemePreference<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemePreference")
            .field("key", &self.key)
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use proptest::prelude::*;

    use super::*;
    use crate::storage::MemoryStore;

    const KEY: &str = "theme-preference";

    // records what the document attribute would be after each apply
    #[derive(Debug, Default)]
    struct FakeDocument {
        attribute: Option<&'static str>,
        applied: usize,
    }

    impl ThemeTarget for FakeDocument {
        fn apply(&mut self, theme: Theme) {
            self.attribute = theme.attribute();
            self.applied += 1;
        }
    }

    fn preference(store: MemoryStore) -> ThemePreference<MemoryStore, FakeDocument> {
        ThemePreference::new(KEY, store, FakeDocument::default())
    }

    #[test]
    fn defaults_to_dark_when_nothing_stored() {
        let mut pref = preference(MemoryStore::new());

        assert_eq!(pref.load(), Theme::Dark);
        assert_eq!(pref.target().attribute, None);
    }

    #[test]
    fn invalid_stored_value_is_treated_as_absent() {
        let mut store = MemoryStore::new();
        store.set(KEY, "purple").unwrap();

        let mut pref = preference(store);
        assert_eq!(pref.load(), Theme::Dark);
        assert_eq!(pref.store().peek(KEY), Some("dark"));
    }

    #[test]
    fn light_survives_reload() {
        let mut pref = preference(MemoryStore::new());
        pref.load();
        assert!(pref.set_named("light"));

        let mut reloaded = preference(pref.store().clone());
        assert_eq!(reloaded.load(), Theme::Light);
        assert_eq!(reloaded.target().attribute, Some("light"));
    }

    #[test]
    fn unknown_name_is_rejected_without_side_effects() {
        let mut pref = preference(MemoryStore::new());
        let applied = pref.target().applied;

        assert!(!pref.set_named("purple"));
        assert_eq!(pref.current(), Theme::Dark);
        assert_eq!(pref.target().applied, applied);
        assert_eq!(pref.store().peek(KEY), None);
    }

    #[test]
    fn names_are_case_sensitive() {
        assert!("Light".parse::<Theme>().is_err());
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
    }

    #[test]
    fn storage_failure_still_changes_theme() {
        let mut pref = preference(MemoryStore::failing());

        assert_eq!(pref.load(), Theme::Dark);
        assert_eq!(pref.toggle(), Theme::Light);
        assert_eq!(pref.current(), Theme::Light);
        assert_eq!(pref.target().attribute, Some("light"));
    }

    #[test]
    fn hook_sees_every_accepted_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut pref = preference(MemoryStore::new()).with_hook(move |t| sink.borrow_mut().push(t));
        pref.toggle();
        pref.set_named("nope");
        pref.toggle();

        assert_eq!(*seen.borrow(), vec![Theme::Light, Theme::Dark]);
    }

    #[test]
    fn pressed_tracks_light() {
        assert!(Theme::Light.pressed());
        assert!(!Theme::Dark.pressed());
    }

    proptest! {
        #[test]
        fn toggle_is_an_involution(light in any::<bool>()) {
            let start = if light { Theme::Light } else { Theme::Dark };
            prop_assert_eq!(start.toggled().toggled(), start);

            let mut pref = preference(MemoryStore::new());
            pref.set(start);
            pref.toggle();
            pref.toggle();
            prop_assert_eq!(pref.current(), start);
        }
    }
}
