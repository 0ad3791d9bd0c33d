/// Keys the page reacts to, parsed from `KeyboardEvent.key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        match value {
            "Escape" | "Esc" => Self::Escape,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            _ => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from("Escape"), Key::Escape);
        assert_eq!(Key::from("Esc"), Key::Escape);
        assert_eq!(Key::from("ArrowLeft"), Key::ArrowLeft);
        assert_eq!(Key::from("ArrowRight"), Key::ArrowRight);
    }

    #[test]
    fn test_unknown_keys() {
        assert_eq!(Key::from("Enter"), Key::Other);
        assert_eq!(Key::from("escape"), Key::Other);
        assert_eq!(Key::from(""), Key::Other);
    }
}
