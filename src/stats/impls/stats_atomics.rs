use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl StatsAtomics {
    pub fn new() -> StatsAtomics
    {
        let stats = StatsAtomics::default();
        stats.started.store(chrono::Utc::now().timestamp(), Ordering::SeqCst);
        stats
    }

    pub fn shared() -> Arc<StatsAtomics>
    {
        Arc::new(StatsAtomics::new())
    }

    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.started.load(Ordering::SeqCst),
            datagrams_received: self.datagrams_received.load(Ordering::SeqCst),
            malformed_dropped: self.malformed_dropped.load(Ordering::SeqCst),
            unsolicited_dropped: self.unsolicited_dropped.load(Ordering::SeqCst),
            late_responses_dropped: self.late_responses_dropped.load(Ordering::SeqCst),
            announces_sent: self.announces_sent.load(Ordering::SeqCst),
            pulses_sent: self.pulses_sent.load(Ordering::SeqCst),
            pulse_failures: self.pulse_failures.load(Ordering::SeqCst),
            pushes_sent: self.pushes_sent.load(Ordering::SeqCst),
            pushes_resolved: self.pushes_resolved.load(Ordering::SeqCst),
            pushes_abandoned: self.pushes_abandoned.load(Ordering::SeqCst),
            incoming_notices: self.incoming_notices.load(Ordering::SeqCst),
            protocol_errors: self.protocol_errors.load(Ordering::SeqCst),
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        let counter = self.counter(event);
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
        self.get_stats()
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        self.counter(event).store(value, Ordering::SeqCst);
        self.get_stats()
    }

    fn counter(&self, event: StatsEvent) -> &AtomicI64
    {
        match event {
            StatsEvent::Started => &self.started,
            StatsEvent::DatagramsReceived => &self.datagrams_received,
            StatsEvent::MalformedDropped => &self.malformed_dropped,
            StatsEvent::UnsolicitedDropped => &self.unsolicited_dropped,
            StatsEvent::LateResponsesDropped => &self.late_responses_dropped,
            StatsEvent::AnnouncesSent => &self.announces_sent,
            StatsEvent::PulsesSent => &self.pulses_sent,
            StatsEvent::PulseFailures => &self.pulse_failures,
            StatsEvent::PushesSent => &self.pushes_sent,
            StatsEvent::PushesResolved => &self.pushes_resolved,
            StatsEvent::PushesAbandoned => &self.pushes_abandoned,
            StatsEvent::IncomingNotices => &self.incoming_notices,
            StatsEvent::ProtocolErrors => &self.protocol_errors,
        }
    }
}
