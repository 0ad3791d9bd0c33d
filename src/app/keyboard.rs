use leptos::ev;
use leptos_use::{use_event_listener, use_window};

use crate::state::Key;

/// Listens for window keydowns until the calling component's owner is
/// disposed. Mount the caller only while its overlay is open so the
/// listener is held exactly as long as the overlay.
///
/// `handler` returns whether it consumed the key; consumed keys have their
/// default action prevented.
pub fn use_scoped_keys<F>(handler: F)
where
    F: Fn(Key) -> bool + 'static,
{
    let _ = use_event_listener(use_window(), ev::keydown, move |ev| {
        if handler(Key::from(ev.key().as_str())) {
            ev.prevent_default();
        }
    });
}
