//! Sun and room only share an event name on an [`EventsHub`].

use events::{EventsHub, HubError};

use crate::room::RoomView;

pub const SUN_SHINE: &str = "SUN.SHINE";

pub struct Sun {
    hub: EventsHub,
}

impl Sun {
    pub fn new(hub: EventsHub) -> Self {
        Self { hub }
    }

    pub fn shine(&self) -> Result<(), HubError> {
        self.hub.dispatch(SUN_SHINE).map(|_| ())
    }
}

/// Make `room` light up whenever the sun shines on `hub`
pub fn connect(hub: &EventsHub, room: &RoomView) -> Result<(), HubError> {
    let room = room.clone();
    hub.subscribe(SUN_SHINE, move || room.lighten())
}
