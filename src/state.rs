//! Local UI state behind the interactive parts of the profile page.
//!
//! Each controller is a plain owned value. Views hold one inside an
//! `RwSignal` and mutate it from event handlers.

mod drawer;
mod keys;
mod lightbox;
mod tabs;

pub use drawer::Drawer;
pub use keys::Key;
pub use lightbox::{Lightbox, LightboxError, LightboxState};
pub use tabs::{TabController, TabKey};
