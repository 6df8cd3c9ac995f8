use tracing::debug;

// mobile navigation menu
//
// open/closed plus the keyboard rules: escape closes and hands focus back to the hamburger, tab
// wraps inside the open menu, and growing past the breakpoint closes it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
    breakpoint: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    // nothing to do
    None,
    // the menu closed
    Closed,
    // the menu closed and focus should return to the hamburger button
    ClosedRefocus,
}

impl MobileMenu {
    pub fn new(breakpoint: u32) -> Self {
        MobileMenu {
            open: false,
            breakpoint,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) -> MenuAction {
        if !self.open {
            return MenuAction::None;
        }
        self.open = false;
        MenuAction::Closed
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn on_escape(&mut self) -> MenuAction {
        match self.close() {
            MenuAction::Closed => MenuAction::ClosedRefocus,
            other => other,
        }
    }

    pub fn on_link_click(&mut self) -> MenuAction {
        self.close()
    }

    pub fn on_click_outside(&mut self) -> MenuAction {
        self.close()
    }

    pub fn on_resize(&mut self, width: u32) -> MenuAction {
        if width >= self.breakpoint {
            debug!(width, "viewport past mobile breakpoint");
            return self.close();
        }
        MenuAction::None
    }

    // the hamburger is only shown below the breakpoint
    pub fn is_mobile(&self, width: u32) -> bool {
        width < self.breakpoint
    }

    // where focus should move on tab, if the default needs overriding
    //
    // only the ends wrap: tab on the last item goes to the first, shift+tab on the first goes
    // to the last
    pub fn focus_trap(&self, current: usize, len: usize, shift: bool) -> Option<usize> {
        if !self.open || len == 0 {
            return None;
        }

        let last = len - 1;
        match (shift, current) {
            (true, 0) => Some(last),
            (false, c) if c == last => Some(0),
            _ => None,
        }
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    // body style while the menu is open
    pub fn body_lock_style(&self) -> &'static str {
        if self.open {
            "overflow: hidden; position: fixed; width: 100%;"
        } else {
            ""
        }
    }

    pub fn class(&self, base: &str) -> String {
        if self.open {
            format!("{base} open")
        } else {
            base.to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_and_close() {
        let mut menu = MobileMenu::new(768);

        assert!(menu.toggle());
        assert_eq!(menu.aria_expanded(), "true");
        assert_eq!(menu.class("mobile-nav"), "mobile-nav open");

        assert!(!menu.toggle());
        assert_eq!(menu.close(), MenuAction::None);
        assert_eq!(menu.body_lock_style(), "");
    }

    #[test]
    fn escape_closes_and_refocuses() {
        let mut menu = MobileMenu::new(768);
        assert_eq!(menu.on_escape(), MenuAction::None);

        menu.open();
        assert_eq!(menu.on_escape(), MenuAction::ClosedRefocus);
        assert!(!menu.is_open());
    }

    #[test]
    fn resize_past_breakpoint_closes() {
        let mut menu = MobileMenu::new(768);
        menu.open();

        assert_eq!(menu.on_resize(500), MenuAction::None);
        assert!(menu.is_open());
        assert_eq!(menu.on_resize(768), MenuAction::Closed);
        assert!(!menu.is_mobile(1024));
        assert!(menu.is_mobile(767));
    }

    #[test]
    fn link_and_outside_clicks_close() {
        let mut menu = MobileMenu::new(768);
        menu.open();
        assert_eq!(menu.on_link_click(), MenuAction::Closed);

        menu.open();
        assert_eq!(menu.on_click_outside(), MenuAction::Closed);
    }

    #[test]
    fn focus_wraps_only_at_the_ends() {
        let mut menu = MobileMenu::new(768);
        assert_eq!(menu.focus_trap(5, 6, false), None);

        menu.open();
        assert_eq!(menu.focus_trap(5, 6, false), Some(0));
        assert_eq!(menu.focus_trap(0, 6, true), Some(5));
        assert_eq!(menu.focus_trap(2, 6, false), None);
        assert_eq!(menu.focus_trap(2, 6, true), None);
        assert_eq!(menu.focus_trap(0, 0, true), None);
    }
}
