//! The sun holds the room and lights it itself.

use crate::room::RoomView;

pub struct Sun {
    room: RoomView,
}

impl Sun {
    pub fn new(room: RoomView) -> Self {
        Self { room }
    }

    pub fn shine(&self) {
        self.room.lighten();
    }
}
