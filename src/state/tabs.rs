#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabKey {
    #[default]
    About,
    Experience,
    Education,
    Feedback,
}

impl TabKey {
    /// Display order of the tab strip.
    pub const ALL: [TabKey; 4] = [
        TabKey::About,
        TabKey::Experience,
        TabKey::Education,
        TabKey::Feedback,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::About => "About Me",
            Self::Experience => "Work Experience",
            Self::Education => "Education",
            Self::Feedback => "Feedback",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Feedback => "feedback",
        }
    }

    pub fn panel_id(self) -> String {
        format!("panel-{}", self.slug())
    }

    pub fn tab_id(self) -> String {
        format!("tab-{}", self.slug())
    }
}

/// Holds the one active tab.
#[derive(Debug, Clone, Default)]
pub struct TabController {
    active: TabKey,
}

impl TabController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> TabKey {
        self.active
    }

    pub fn is_active(&self, key: TabKey) -> bool {
        self.active == key
    }

    /// Returns true if the active tab changed.
    pub fn select(&mut self, key: TabKey) -> bool {
        if self.active == key {
            return false;
        }
        log::debug!("tab {} -> {}", self.active.slug(), key.slug());
        self.active = key;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_first_key() {
        let tabs = TabController::new();
        assert_eq!(tabs.active(), TabKey::ALL[0]);
        assert_eq!(tabs.active(), TabKey::About);
    }

    #[test]
    fn test_select_then_read() {
        let mut tabs = TabController::new();
        for key in TabKey::ALL {
            tabs.select(key);
            assert_eq!(tabs.active(), key);
        }
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut tabs = TabController::new();
        assert!(tabs.select(TabKey::Education));
        assert!(!tabs.select(TabKey::Education));
        assert_eq!(tabs.active(), TabKey::Education);
    }

    #[test]
    fn test_exactly_one_active() {
        let mut tabs = TabController::new();
        tabs.select(TabKey::ALL[2]);
        let active = TabKey::ALL
            .iter()
            .filter(|k| tabs.is_active(**k))
            .collect::<Vec<_>>();
        assert_eq!(active, vec![&TabKey::Education]);
    }

    #[test]
    fn test_ids() {
        assert_eq!(TabKey::Feedback.panel_id(), "panel-feedback");
        assert_eq!(TabKey::About.tab_id(), "tab-about");
        assert_eq!(TabKey::Experience.label(), "Work Experience");
    }
}
