//! Named-event hub
//!
//! This crate provides a small publish/subscribe registry: collaborators
//! subscribe zero-argument callbacks to an event name and anyone holding the
//! hub can dispatch that name to run them synchronously.

mod config;
mod error;
mod hub;
mod name;

pub use config::{DispatchPolicy, HubConfig};
pub use error::{CallbackFailure, HubError, Result};
pub use hub::{Callback, EventsHub};
pub use name::{EventName, MAX_NAME_LEN};
