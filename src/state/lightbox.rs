use thiserror::Error;

use super::Key;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxError {
    #[error("lightbox needs at least one image")]
    Empty,
    #[error("image index {index} out of range for {len} images")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxState {
    Closed,
    Open(usize),
}

/// Image viewer over a fixed, non-empty sequence of `len` images.
///
/// The index wraps in both directions and is kept while closed, so
/// [`Lightbox::reopen`] resumes on the last image shown.
#[derive(Debug, Clone)]
pub struct Lightbox {
    len: usize,
    index: usize,
    open: bool,
}

impl Lightbox {
    pub fn new(len: usize) -> Result<Self, LightboxError> {
        if len == 0 {
            return Err(LightboxError::Empty);
        }
        Ok(Self {
            len,
            index: 0,
            open: false,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; [`Lightbox::new`] rejects an empty sequence.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Current index. Retained while closed.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn state(&self) -> LightboxState {
        if self.open {
            LightboxState::Open(self.index)
        } else {
            LightboxState::Closed
        }
    }

    pub fn open(&mut self, at: usize) -> Result<(), LightboxError> {
        if at >= self.len {
            return Err(LightboxError::OutOfRange {
                index: at,
                len: self.len,
            });
        }
        log::debug!("lightbox opened at {at}");
        self.index = at;
        self.open = true;
        Ok(())
    }

    pub fn reopen(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        if self.open {
            log::debug!("lightbox closed at {}", self.index);
        }
        self.open = false;
    }

    pub fn next(&mut self) {
        if self.open {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.open {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if !self.open {
            return false;
        }
        match key {
            Key::Escape => self.close(),
            Key::ArrowRight => self.next(),
            Key::ArrowLeft => self.previous(),
            Key::Other => return false,
        }
        true
    }

    /// One-based position, e.g. `3 / 12`.
    pub fn counter(&self) -> String {
        format!("{} / {}", self.index + 1, self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rejected() {
        assert_eq!(Lightbox::new(0).unwrap_err(), LightboxError::Empty);
    }

    #[test]
    fn test_starts_closed_at_zero() {
        let lb = Lightbox::new(3).unwrap();
        assert_eq!(lb.state(), LightboxState::Closed);
        assert_eq!(lb.index(), 0);
        assert_eq!(lb.len(), 3);
        assert!(!lb.is_empty());
    }

    #[test]
    fn test_open_out_of_range() {
        let mut lb = Lightbox::new(4).unwrap();
        assert_eq!(
            lb.open(4),
            Err(LightboxError::OutOfRange { index: 4, len: 4 })
        );
        assert_eq!(lb.state(), LightboxState::Closed);
        assert!(lb.open(3).is_ok());
        assert_eq!(lb.state(), LightboxState::Open(3));
    }

    #[test]
    fn test_next_cycle_closes() {
        for n in 1..=13 {
            for start in 0..n {
                let mut lb = Lightbox::new(n).unwrap();
                lb.open(start).unwrap();
                for _ in 0..n {
                    lb.next();
                    assert!(lb.index() < n);
                }
                assert_eq!(lb.index(), start, "n = {n}, start = {start}");
            }
        }
    }

    #[test]
    fn test_previous_cycle_closes() {
        for n in 1..=13 {
            for start in 0..n {
                let mut lb = Lightbox::new(n).unwrap();
                lb.open(start).unwrap();
                for _ in 0..n {
                    lb.previous();
                    assert!(lb.index() < n);
                }
                assert_eq!(lb.index(), start, "n = {n}, start = {start}");
            }
        }
    }

    #[test]
    fn test_wraps_at_both_ends() {
        let mut lb = Lightbox::new(5).unwrap();
        lb.open(0).unwrap();
        lb.previous();
        assert_eq!(lb.index(), 4);
        lb.next();
        assert_eq!(lb.index(), 0);

        let mut single = Lightbox::new(1).unwrap();
        single.open(0).unwrap();
        single.previous();
        assert_eq!(single.index(), 0);
        single.next();
        assert_eq!(single.index(), 0);
    }

    #[test]
    fn test_close_retains_index() {
        let mut lb = Lightbox::new(6).unwrap();
        lb.open(4).unwrap();
        lb.close();
        assert_eq!(lb.state(), LightboxState::Closed);
        assert_eq!(lb.index(), 4);
        lb.reopen();
        assert_eq!(lb.state(), LightboxState::Open(4));
    }

    #[test]
    fn test_navigation_ignored_while_closed() {
        let mut lb = Lightbox::new(6).unwrap();
        lb.open(2).unwrap();
        lb.close();
        lb.next();
        lb.previous();
        lb.previous();
        assert!(!lb.handle_key(Key::ArrowRight));
        assert_eq!(lb.index(), 2);
    }

    #[test]
    fn test_keyboard_scenario_twelve_images() {
        let mut lb = Lightbox::new(12).unwrap();
        lb.open(0).unwrap();
        assert!(lb.handle_key(Key::ArrowLeft));
        assert_eq!(lb.index(), 11);
        lb.handle_key(Key::ArrowRight);
        lb.handle_key(Key::ArrowRight);
        assert_eq!(lb.index(), 1);
        assert!(lb.handle_key(Key::Escape));
        assert_eq!(lb.state(), LightboxState::Closed);
    }

    #[test]
    fn test_other_keys_not_consumed() {
        let mut lb = Lightbox::new(2).unwrap();
        lb.open(1).unwrap();
        assert!(!lb.handle_key(Key::Other));
        assert_eq!(lb.state(), LightboxState::Open(1));
    }

    #[test]
    fn test_counter() {
        let mut lb = Lightbox::new(12).unwrap();
        lb.open(2).unwrap();
        assert_eq!(lb.counter(), "3 / 12");
    }
}
