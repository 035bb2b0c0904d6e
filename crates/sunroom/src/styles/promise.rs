//! The room waits on a one-shot promise that the sun resolves.

use std::future::Future;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::room::RoomView;

pub struct Sun {
    shone: watch::Sender<bool>,
}

impl Sun {
    pub fn new() -> Self {
        let (shone, _) = watch::channel(false);
        Self { shone }
    }

    /// Resolves once the sun has shone, immediately if it already has.
    ///
    /// Fails if the sun is dropped without ever shining.
    pub fn when_shine(&self) -> impl Future<Output = anyhow::Result<()>> + Send + 'static {
        let mut rx = self.shone.subscribe();
        async move {
            rx.wait_for(|shone| *shone)
                .await
                .map_err(|_| anyhow::anyhow!("sun went away without shining"))?;
            Ok(())
        }
    }

    /// Resolve the promise. Later calls have no further effect.
    pub fn shine(&self) {
        if !self.shone.send_replace(true) {
            debug!("Sun promise resolved");
        }
    }
}

impl Default for Sun {
    fn default() -> Self {
        Self::new()
    }
}

/// Light `room` once the sun shines. Must be called inside a tokio runtime.
pub fn connect(sun: &Sun, room: &RoomView) -> JoinHandle<anyhow::Result<()>> {
    let shine = sun.when_shine();
    let room = room.clone();
    tokio::spawn(async move {
        shine.await?;
        room.lighten();
        Ok(())
    })
}
