//! Background color timer.
//!
//! [`ColorTimer`] runs on its own thread, independent of the frame loop, and
//! writes a random color into a [`SharedDrawColor`] on every tick. The
//! schedule comes from `crossbeam_channel::tick`; stopping disconnects the
//! stop channel and joins the thread, so no fire is observed after `stop`
//! returns.

use crate::resources::drawcolor::SharedDrawColor;
use crossbeam_channel::{Sender, bounded, select, tick};
use log::{debug, trace};
use std::thread::JoinHandle;
use std::time::Duration;

/// Handle to the running timer thread.
pub struct ColorTimer {
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl ColorTimer {
    pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

    /// Spawn the timer. The first fire happens one `interval` from now.
    ///
    /// Intervals shorter than [`ColorTimer::MIN_INTERVAL`] are raised to it.
    pub fn start(color: SharedDrawColor, interval: Duration) -> Self {
        let interval = interval.max(Self::MIN_INTERVAL);
        let (stop_tx, stop_rx) = bounded::<()>(1);
        let handle = std::thread::spawn(move || {
            debug!("[color-timer] started, interval={:?}", interval);
            let ticker = tick(interval);
            loop {
                select! {
                    recv(ticker) -> _ => {
                        let c = color.randomize();
                        trace!("[color-timer] fire -> {:?}", c);
                    }
                    recv(stop_rx) -> _ => break,
                }
            }
            debug!("[color-timer] stopped");
        });
        Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Stop the schedule and wait for the thread. Idempotent.
    pub fn stop(&mut self) {
        // dropping the sender disconnects `stop_rx`
        self.stop_tx.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for ColorTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
