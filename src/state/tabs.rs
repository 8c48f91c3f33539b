// Tab controller for the two-panel layout.
// Each panel decides its own visibility by comparing its id against the active one.

/// Identifier for one of the mutually exclusive panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Search,
    Upload,
}

impl Panel {
    pub fn title(&self) -> &'static str {
        match self {
            Panel::Search => "Search Article",
            Panel::Upload => "Upload PDF",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Panel::Search => Panel::Upload,
            Panel::Upload => Panel::Search,
        }
    }

    pub fn prev(&self) -> Self {
        // Two panels, so prev and next coincide.
        self.next()
    }

    /// All panels, in tab-bar order.
    pub fn all() -> [Panel; 2] {
        [Panel::Search, Panel::Upload]
    }
}

/// Tracks which panel is visible. Constructed once and shared by reference
/// with everything that queries or mutates the active panel; the controller
/// does not know which panels exist.
#[derive(Debug)]
pub struct TabController {
    active: Panel,
}

impl TabController {
    /// Create a controller starting at the given panel.
    pub fn new(default: Panel) -> Self {
        Self { active: default }
    }

    /// Make `panel` the active one. Re-activating the current panel is a no-op.
    pub fn activate(&mut self, panel: Panel) {
        self.active = panel;
    }

    pub fn is_active(&self, panel: Panel) -> bool {
        self.active == panel
    }

    pub fn active(&self) -> Panel {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_panel_is_search() {
        let tabs = TabController::new(Panel::default());
        assert!(tabs.is_active(Panel::Search));
        assert!(!tabs.is_active(Panel::Upload));
    }

    #[test]
    fn test_activate_switches_exclusively() {
        let mut tabs = TabController::new(Panel::Search);
        tabs.activate(Panel::Upload);

        assert!(tabs.is_active(Panel::Upload));
        assert!(!tabs.is_active(Panel::Search));

        // Exactly one panel is ever active.
        for panel in Panel::all() {
            assert_eq!(tabs.is_active(panel), panel == tabs.active());
        }
    }

    #[test]
    fn test_reactivating_active_panel_is_noop() {
        let mut tabs = TabController::new(Panel::Upload);
        tabs.activate(Panel::Upload);
        assert!(tabs.is_active(Panel::Upload));
    }

    #[test]
    fn test_next_prev_cycle() {
        assert_eq!(Panel::Search.next(), Panel::Upload);
        assert_eq!(Panel::Upload.next(), Panel::Search);
        assert_eq!(Panel::Search.prev(), Panel::Upload);
    }
}
