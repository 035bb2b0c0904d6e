use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

pub const LIGHT: &str = "light";
pub const DARK: &str = "dark";

/// A view element carrying a single CSS-like class.
///
/// Clones share the same element, so a callback can hold one while the
/// caller inspects another.
#[derive(Debug, Clone, Default)]
pub struct RoomView {
    class: Arc<Mutex<Option<String>>>,
}

impl RoomView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_class(&self, class: impl Into<String>) {
        let class = class.into();
        debug!(class = %class, "Room class changed");
        *self.class.lock().unwrap_or_else(PoisonError::into_inner) = Some(class);
    }

    pub fn class(&self) -> Option<String> {
        self.class
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class().as_deref() == Some(class)
    }

    pub fn lighten(&self) {
        self.set_class(LIGHT);
    }

    pub fn darken(&self) {
        self.set_class(DARK);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_room_has_no_class() {
        let room = RoomView::new();
        assert_eq!(room.class(), None);
        assert!(!room.has_class(LIGHT));
    }

    #[test]
    fn test_clones_share_element() {
        let room = RoomView::new();
        let handle = room.clone();

        handle.lighten();
        assert!(room.has_class(LIGHT));

        handle.darken();
        assert_eq!(room.class().as_deref(), Some(DARK));
    }
}
