use std::sync::Arc;
use std::time::Duration;
use log::{debug, error, info, warn};
use tokio::sync::watch;
use tokio::time::{Instant, MissedTickBehavior};
use crate::keepalive::structs::keepalive_loop::KeepaliveLoop;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::tracker::MIN_TICK;
use crate::tracker::traits::tracker_sender::TrackerSender;

impl KeepaliveLoop {
    pub fn new(sender: Arc<dyn TrackerSender>, interval: Duration, stats: Arc<StatsAtomics>) -> KeepaliveLoop
    {
        KeepaliveLoop {
            sender,
            interval: interval.max(MIN_TICK),
            stats,
        }
    }

    /// Sends `pulse` with `override=false` once per interval until shutdown.
    ///
    /// Returns the error that ended the loop early, if any.
    #[tracing::instrument(skip(self, shutdown), level = "debug")]
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) -> Result<(), TrackerError>
    {
        info!("[KEEPALIVE] Pulsing the tracker every {:?}", self.interval);
        let mut ticker = tokio::time::interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            if *shutdown.borrow_and_update() {
                break;
            }

            tokio::select! {
                biased;
                changed = shutdown.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
                _ = ticker.tick() => {
                    match self.sender.send_pulse(false).await {
                        Ok(()) => {
                            debug!("[KEEPALIVE] Pulse sent");
                            self.stats.update_stats(StatsEvent::PulsesSent, 1);
                        }
                        Err(error) if error.is_fatal() => {
                            error!("[KEEPALIVE] Stopping, registration lost: {error}");
                            return Err(error);
                        }
                        Err(error) => {
                            warn!("[KEEPALIVE] Pulse failed, retrying next tick: {error}");
                            self.stats.update_stats(StatsEvent::PulseFailures, 1);
                        }
                    }
                }
            }
        }

        info!("[KEEPALIVE] Stopped");
        Ok(())
    }
}
