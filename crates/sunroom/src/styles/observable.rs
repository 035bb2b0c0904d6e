//! The room observes a property on the sun.

use std::sync::{Arc, Mutex, PoisonError};
use tracing::trace;

use crate::room::RoomView;

type Observer<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// A value that notifies its observers whenever it changes.
pub struct Observable<T> {
    value: Mutex<T>,
    observers: Mutex<Vec<Observer<T>>>,
}

impl<T: Clone + PartialEq> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Mutex::new(value),
            observers: Mutex::new(Vec::new()),
        }
    }

    pub fn get(&self) -> T {
        self.value
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Store `value` and notify observers if it differs from the current one
    pub fn set(&self, value: T) {
        {
            let mut current = self.value.lock().unwrap_or_else(PoisonError::into_inner);
            if *current == value {
                trace!("Observable set to its current value, not notifying");
                return;
            }
            *current = value.clone();
        }

        let observers = self
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for observer in observers {
            observer(&value);
        }
    }

    pub fn observe<F>(&self, observer: F)
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(observer));
    }
}

pub struct Sun {
    /// `None` until someone decides whether the sun is shining
    pub shining: Observable<Option<bool>>,
}

impl Sun {
    pub fn new() -> Self {
        Self {
            shining: Observable::new(None),
        }
    }
}

impl Default for Sun {
    fn default() -> Self {
        Self::new()
    }
}

/// Keep `room` light while the sun shines and dark otherwise
pub fn connect(sun: &Sun, room: &RoomView) {
    let room = room.clone();
    sun.shining.observe(move |shining| {
        if shining.unwrap_or(false) {
            room.lighten();
        } else {
            room.darken();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::{DARK, LIGHT};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_room_becomes_light_when_sun_shines() {
        let sun = Sun::new();
        let room = RoomView::new();
        connect(&sun, &room);

        sun.shining.set(Some(true));
        assert!(room.has_class(LIGHT));
    }

    #[test]
    fn test_room_becomes_dark_when_sun_stops() {
        let sun = Sun::new();
        let room = RoomView::new();
        connect(&sun, &room);

        sun.shining.set(Some(true));
        sun.shining.set(Some(false));
        assert!(room.has_class(DARK));
    }

    #[test]
    fn test_unchanged_value_does_not_notify() {
        let observable = Observable::new(1);
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        observable.observe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        observable.set(1);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        observable.set(2);
        observable.set(2);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(observable.get(), 2);
    }
}
