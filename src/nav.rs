/// Scroll offset in px past which the header turns solid.
pub const SCROLL_THRESHOLD: f64 = 20.0;

/// Header chrome state: mobile menu open/closed crossed with at-top/scrolled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub menu_open: bool,
    pub scrolled: bool,
    route: String,
}

impl HeaderState {
    /// Folds in the current location and scroll offset. Landing on a different route
    /// closes the menu.
    pub fn sync(&mut self, pathname: &str, scroll_y: f64) {
        if self.route != pathname {
            self.route = pathname.to_string();
            self.on_route_change();
        }
        self.on_scroll(scroll_y);
    }

    pub fn synced(mut self, pathname: &str, scroll_y: f64) -> Self {
        self.sync(pathname, scroll_y);
        self
    }

    pub fn on_scroll(&mut self, y: f64) {
        self.scrolled = y > SCROLL_THRESHOLD;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// The overlay never outlives a navigation.
    pub fn on_route_change(&mut self) {
        self.menu_open = false;
    }

    /// Whether the bar draws its blurred background.
    pub fn is_solid(&self) -> bool {
        self.scrolled || self.menu_open
    }
}

pub fn is_active(pathname: &str, href: &str) -> bool {
    let trimmed = pathname.trim_end_matches('/');
    let trimmed = if trimmed.is_empty() { "/" } else { trimmed };
    trimmed == href
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::NAV_LINKS;

    #[test]
    fn test_scroll_threshold() {
        let mut state = HeaderState::default();
        state.on_scroll(20.0);
        assert!(!state.scrolled);
        state.on_scroll(20.5);
        assert!(state.scrolled);
        assert!(state.is_solid());
        state.on_scroll(0.0);
        assert!(!state.scrolled);
        assert!(!state.is_solid());
    }

    #[test]
    fn test_menu_toggle() {
        let mut state = HeaderState::default();
        state.toggle_menu();
        assert!(state.menu_open);
        assert!(state.is_solid());
        state.toggle_menu();
        assert!(!state.menu_open);
    }

    #[test]
    fn test_navigation_closes_menu() {
        let mut state = HeaderState::default();
        state.on_scroll(300.0);
        state.toggle_menu();
        assert!(state.menu_open);
        state.on_route_change();
        assert!(!state.menu_open);
        // scroll half is untouched
        assert!(state.scrolled);

        let mut closed = HeaderState::default();
        closed.on_route_change();
        assert!(!closed.menu_open);
    }

    #[test]
    fn test_sync_closes_only_on_new_route() {
        let mut state = HeaderState::default().synced("/about", 0.0);
        state.toggle_menu();

        state.sync("/about", 64.0);
        assert!(state.menu_open);
        assert!(state.scrolled);

        state.sync("/skills", 64.0);
        assert!(!state.menu_open);
        assert!(state.scrolled);

        state.toggle_menu();
        state.sync("/skills", 0.0);
        assert!(state.menu_open);
        assert!(state.is_solid());
    }

    #[test]
    fn test_is_active() {
        assert!(is_active("/about", "/about"));
        assert!(is_active("/about/", "/about"));
        assert!(!is_active("/about", "/skills"));
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/about"));
        for link in NAV_LINKS {
            assert!(is_active(link.href, link.href));
            assert!(!is_active("/", link.href));
        }
    }
}
