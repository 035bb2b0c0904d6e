//! Named-event registry with synchronous fan-out

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, trace, warn};

use crate::config::{DispatchPolicy, HubConfig};
use crate::error::{CallbackFailure, HubError, Result};
use crate::name::EventName;

/// A registered subscriber callback
pub type Callback = Arc<dyn Fn() -> anyhow::Result<()> + Send + Sync>;

/// Registry mapping event names to their subscribers.
///
/// Clones share the same registry. Callbacks for one event run in
/// registration order on the thread that calls [`EventsHub::dispatch`].
#[derive(Clone)]
pub struct EventsHub {
    subscribers: Arc<RwLock<HashMap<EventName, Vec<Callback>>>>,
    config: HubConfig,
    /// Number of dispatch calls (for monitoring)
    dispatch_count: Arc<AtomicUsize>,
}

impl EventsHub {
    /// Create an empty hub with default settings
    pub fn new() -> Self {
        Self::with_config(HubConfig::default())
    }

    pub fn with_config(config: HubConfig) -> Self {
        Self {
            subscribers: Arc::new(RwLock::new(HashMap::new())),
            config,
            dispatch_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn config(&self) -> &HubConfig {
        &self.config
    }

    /// Register a callback for an event.
    ///
    /// Registering the same callback twice stores it twice; it then runs
    /// twice per dispatch.
    pub fn subscribe<F>(&self, event: &str, callback: F) -> Result<()>
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.try_subscribe(event, move || {
            callback();
            Ok(())
        })
    }

    /// Register a callback that may fail.
    ///
    /// What a failure does to the rest of the dispatch depends on the hub's
    /// [`DispatchPolicy`].
    pub fn try_subscribe<F>(&self, event: &str, callback: F) -> Result<()>
    where
        F: Fn() -> anyhow::Result<()> + Send + Sync + 'static,
    {
        let name = self.event_name(event)?;
        let mut subscribers = self.write();
        let entry = subscribers.entry(name).or_default();
        entry.push(Arc::new(callback));
        debug!(event = %event, subscribers = entry.len(), "Subscribed to event");
        Ok(())
    }

    /// Invoke every callback registered for `event`, in registration order.
    ///
    /// Returns the number of callbacks that ran. Dispatching an event with no
    /// subscribers is a no-op. Callbacks registered while this dispatch is
    /// running are first invoked by the next dispatch.
    pub fn dispatch(&self, event: &str) -> Result<usize> {
        if self.config.validate_names {
            EventName::new(event)?;
        }
        self.dispatch_count.fetch_add(1, Ordering::Relaxed);

        // Snapshot so callbacks can use the hub without deadlocking
        let callbacks = match self.read().get(event) {
            Some(callbacks) => callbacks.clone(),
            None => {
                trace!(event = %event, "No subscribers for event");
                return Ok(0);
            }
        };

        debug!(event = %event, subscribers = callbacks.len(), "Dispatching event");

        match self.config.policy {
            DispatchPolicy::Propagate => {
                for (index, callback) in callbacks.iter().enumerate() {
                    if let Err(source) = callback() {
                        warn!(event = %event, index, error = %source, "Callback failed, aborting dispatch");
                        return Err(HubError::CallbackFailed {
                            event: event.to_string(),
                            index,
                            source,
                        });
                    }
                }
                Ok(callbacks.len())
            }
            DispatchPolicy::Isolate => {
                let failures: Vec<CallbackFailure> = callbacks
                    .iter()
                    .enumerate()
                    .filter_map(|(index, callback)| {
                        callback().err().map(|e| {
                            warn!(event = %event, index, error = %e, "Callback failed, continuing");
                            CallbackFailure {
                                index,
                                message: format!("{:#}", e),
                            }
                        })
                    })
                    .collect();

                if failures.is_empty() {
                    Ok(callbacks.len())
                } else {
                    Err(HubError::DispatchFailed {
                        event: event.to_string(),
                        failures,
                    })
                }
            }
        }
    }

    /// Number of callbacks registered for an event
    pub fn subscriber_count(&self, event: &str) -> usize {
        self.read().get(event).map_or(0, Vec::len)
    }

    /// Names with at least one subscriber, sorted
    pub fn event_names(&self) -> Vec<EventName> {
        let mut names: Vec<EventName> = self.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Total number of dispatch calls made on this hub and its clones
    pub fn dispatch_count(&self) -> usize {
        self.dispatch_count.load(Ordering::Relaxed)
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn event_name(&self, event: &str) -> Result<EventName> {
        if self.config.validate_names {
            EventName::new(event)
        } else {
            Ok(EventName::unchecked(event))
        }
    }

    // Callbacks never run under the lock, so a poisoned map is still consistent
    fn read(&self) -> RwLockReadGuard<'_, HashMap<EventName, Vec<Callback>>> {
        self.subscribers.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<EventName, Vec<Callback>>> {
        self.subscribers.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for EventsHub {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventsHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventsHub")
            .field("events", &self.event_names())
            .field("policy", &self.config.policy)
            .field("dispatch_count", &self.dispatch_count())
            .finish()
    }
}
