pub mod direct;
pub mod hub;
pub mod observable;
pub mod promise;

use anyhow::Context;
use clap::ValueEnum;
use events::{EventsHub, HubConfig};
use tracing::info;

use crate::room::RoomView;

/// How the sun tells the room that it is shining
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Style {
    /// The sun calls the room directly
    Direct,
    /// The sun dispatches a named event on a shared hub
    Hub,
    /// The room observes a property of the sun
    Observable,
    /// The room waits on a promise the sun resolves
    Promise,
}

impl Style {
    pub const ALL: [Style; 4] = [Style::Direct, Style::Hub, Style::Observable, Style::Promise];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Hub => "hub",
            Self::Observable => "observable",
            Self::Promise => "promise",
        }
    }
}

/// Wire a fresh sun and room with `style`, make the sun shine and return the room.
///
/// `hub_config` only affects [`Style::Hub`].
pub async fn run(style: Style, hub_config: &HubConfig) -> anyhow::Result<RoomView> {
    let room = RoomView::new();

    match style {
        Style::Direct => {
            let sun = direct::Sun::new(room.clone());
            sun.shine();
        }
        Style::Hub => {
            let shared = EventsHub::with_config(hub_config.clone());
            hub::connect(&shared, &room).context("Failed to subscribe room to the sun")?;
            let sun = hub::Sun::new(shared);
            sun.shine().context("Sun failed to shine")?;
        }
        Style::Observable => {
            let sun = observable::Sun::new();
            observable::connect(&sun, &room);
            sun.shining.set(Some(true));
        }
        Style::Promise => {
            let sun = promise::Sun::new();
            let lit = promise::connect(&sun, &room);
            sun.shine();
            lit.await.context("Room task panicked")??;
        }
    }

    info!(style = style.as_str(), class = ?room.class(), "Sun has shone");
    Ok(room)
}
