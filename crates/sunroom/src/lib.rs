//! A sun and a room view, wired four different ways.
//!
//! Every style ends the same way: when the sun shines, the room turns
//! `light`. They differ in who knows about whom.

pub mod room;
pub mod styles;

pub use room::RoomView;
pub use styles::{run, Style};
