use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;
use log::{debug, info, warn};
use parking_lot::RwLock;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use crate::config::structs::negotiator_config::NegotiatorConfig;
use crate::negotiator::enums::abandon_reason::AbandonReason;
use crate::negotiator::enums::negotiation_error::NegotiationError;
use crate::negotiator::enums::negotiator_state::NegotiatorState;
use crate::negotiator::structs::connect_negotiator::ConnectNegotiator;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::resolved_peer_address::ResolvedPeerAddress;
use crate::tracker::structs::share_id::ShareId;
use crate::tracker::tracker::MIN_TICK;
use crate::tracker::traits::tracker_sender::TrackerSender;
use crate::tracker::types::{PushReceiver, SharedPendingRequests};

impl ConnectNegotiator {
    pub fn new(
        sender: Arc<dyn TrackerSender>,
        pending: SharedPendingRequests,
        stats: Arc<StatsAtomics>,
        retry_interval: Duration,
        budget: Duration,
        max_attempts: Option<u32>,
    ) -> ConnectNegotiator
    {
        ConnectNegotiator {
            sender,
            pending,
            stats,
            retry_interval,
            budget,
            max_attempts,
            state: RwLock::new(NegotiatorState::Idle),
            attempts: AtomicU32::new(0),
        }
    }

    pub fn from_config(
        sender: Arc<dyn TrackerSender>,
        pending: SharedPendingRequests,
        stats: Arc<StatsAtomics>,
        config: &NegotiatorConfig,
    ) -> ConnectNegotiator
    {
        ConnectNegotiator::new(
            sender,
            pending,
            stats,
            Duration::from_secs(config.retry_interval),
            Duration::from_secs(config.resolve_timeout),
            config.max_attempts,
        )
    }

    /// Number of pushes this negotiator may send: every retry window that fits in the
    /// budget, at least one, at most `max_attempts`.
    pub fn attempt_budget(&self) -> u32
    {
        let by_budget = if self.retry_interval.is_zero() {
            1
        } else {
            u32::try_from(self.budget.as_nanos() / self.retry_interval.as_nanos()).unwrap_or(u32::MAX).max(1)
        };
        match self.max_attempts {
            Some(cap) => by_budget.min(cap.max(1)),
            None => by_budget,
        }
    }

    pub fn state(&self) -> NegotiatorState
    {
        *self.state.read()
    }

    pub fn attempts(&self) -> u32
    {
        self.attempts.load(Ordering::SeqCst)
    }

    /// Resolves `target` into the address the tracker has for it.
    ///
    /// Setting `cancel` to true abandons the negotiation. Dropping its sender does not.
    #[tracing::instrument(skip(self, cancel), level = "debug")]
    pub async fn negotiate(&self, target: ShareId, mut cancel: watch::Receiver<bool>) -> Result<ResolvedPeerAddress, NegotiationError>
    {
        {
            let mut state = self.state.write();
            if *state != NegotiatorState::Idle {
                return Err(NegotiationError::AlreadyStarted);
            }
            *state = NegotiatorState::Requesting;
        }

        let registered = self.pending.lock().register_push(target.clone());
        let receiver = match registered {
            Ok(receiver) => receiver,
            Err(_) => {
                *self.state.write() = NegotiatorState::Abandoned;
                return Err(NegotiationError::RequestInFlight);
            }
        };

        info!("[NEGOTIATOR] Resolving {target}, up to {} push(es) within {:?}", self.attempt_budget(), self.budget);
        let result = self.drive(&target, receiver, &mut cancel).await;

        match &result {
            Ok(address) => {
                info!("[NEGOTIATOR] {target} resolved to {address} after {} push(es)", self.attempts());
                *self.state.write() = NegotiatorState::Resolved;
                self.stats.update_stats(StatsEvent::PushesResolved, 1);
            }
            Err(error) => {
                warn!("[NEGOTIATOR] {error}");
                self.release_slot(&target);
                *self.state.write() = NegotiatorState::Abandoned;
                self.stats.update_stats(StatsEvent::PushesAbandoned, 1);
            }
        }
        result
    }

    async fn drive(
        &self,
        target: &ShareId,
        mut receiver: PushReceiver,
        cancel: &mut watch::Receiver<bool>,
    ) -> Result<ResolvedPeerAddress, NegotiationError>
    {
        let max_attempts = self.attempt_budget();
        let deadline = tokio::time::sleep(self.budget);
        tokio::pin!(deadline);

        let mut retry = tokio::time::interval(self.retry_interval.max(MIN_TICK));
        retry.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut cancel_open = true;
        if *cancel.borrow_and_update() {
            return Err(self.abandon(target, AbandonReason::Cancelled));
        }

        loop {
            tokio::select! {
                biased;
                resolved = &mut receiver => {
                    return match resolved {
                        Ok(address) => Ok(address),
                        Err(_) => Err(self.abandon(target, AbandonReason::SessionClosed)),
                    };
                }
                changed = cancel.changed(), if cancel_open => {
                    match changed {
                        Ok(()) if *cancel.borrow_and_update() => {
                            return Err(self.abandon(target, AbandonReason::Cancelled));
                        }
                        Ok(()) => {}
                        Err(_) => { cancel_open = false; }
                    }
                }
                _ = &mut deadline => {
                    return Err(self.abandon(target, AbandonReason::BudgetExhausted));
                }
                _ = retry.tick(), if self.attempts() < max_attempts => {
                    let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
                    match self.sender.send_push(target).await {
                        Ok(()) => {
                            debug!("[NEGOTIATOR] Push {attempt}/{max_attempts} for {target} sent");
                            self.stats.update_stats(StatsEvent::PushesSent, 1);
                        }
                        Err(error) if error.is_fatal() => {
                            debug!("[NEGOTIATOR] Push {attempt}/{max_attempts} failed for good: {error}");
                            return Err(self.abandon(target, AbandonReason::SessionClosed));
                        }
                        Err(error) => {
                            warn!("[NEGOTIATOR] Push {attempt}/{max_attempts} for {target} failed: {error}");
                        }
                    }
                }
            }
        }
    }

    fn abandon(&self, target: &ShareId, reason: AbandonReason) -> NegotiationError
    {
        NegotiationError::PeerNotResolved {
            target: target.clone(),
            attempts: self.attempts(),
            reason,
        }
    }

    fn release_slot(&self, target: &ShareId)
    {
        let mut pending = self.pending.lock();
        if pending.pending_push_target().as_ref() == Some(target) {
            pending.cancel_push();
        }
    }
}
