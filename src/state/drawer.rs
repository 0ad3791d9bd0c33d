use super::Key;

/// Small-viewport navigation menu.
///
/// Opening records a focus request for the drawer root; the view takes it
/// once the panel is mounted so Escape and Tab land inside the drawer.
#[derive(Debug, Clone, Default)]
pub struct Drawer {
    open: bool,
    focus_pending: bool,
}

impl Drawer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        if !self.open {
            log::debug!("drawer opened");
        }
        self.open = true;
        self.focus_pending = true;
    }

    pub fn close(&mut self) {
        if self.open {
            log::debug!("drawer closed");
        }
        self.open = false;
        self.focus_pending = false;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn focus_requested(&self) -> bool {
        self.focus_pending
    }

    /// Clears the focus request, returning whether one was pending.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_pending)
    }

    /// Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::Escape if self.open => {
                self.close();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let drawer = Drawer::new();
        assert!(!drawer.is_open());
        assert!(!drawer.focus_requested());
    }

    #[test]
    fn test_open_requests_focus_then_escape_closes() {
        let mut drawer = Drawer::new();
        drawer.open();
        assert!(drawer.is_open());
        assert!(drawer.take_focus_request());
        assert!(!drawer.take_focus_request());

        assert!(drawer.handle_key(Key::Escape));
        assert!(!drawer.is_open());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut drawer = Drawer::new();
        drawer.close();
        assert!(!drawer.is_open());
        drawer.open();
        drawer.close();
        drawer.close();
        assert!(!drawer.is_open());
        assert!(!drawer.focus_requested());
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        let mut drawer = Drawer::new();
        assert!(!drawer.handle_key(Key::Escape));
        drawer.open();
        assert!(!drawer.handle_key(Key::ArrowLeft));
        assert!(!drawer.handle_key(Key::Other));
        assert!(drawer.is_open());
    }

    #[test]
    fn test_toggle() {
        let mut drawer = Drawer::new();
        drawer.toggle();
        assert!(drawer.is_open());
        assert!(drawer.focus_requested());
        drawer.toggle();
        assert!(!drawer.is_open());
    }
}
