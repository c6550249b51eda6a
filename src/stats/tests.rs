#[cfg(test)]
mod stats_tests {
    use std::sync::Arc;
    use crate::stats::enums::stats_event::StatsEvent;
    use crate::stats::structs::stats_atomics::StatsAtomics;

    #[test]
    fn test_new_stats_start_at_zero() {
        let stats = StatsAtomics::new();
        let snapshot = stats.get_stats();
        assert!(snapshot.started > 0);
        assert_eq!(snapshot.datagrams_received, 0);
        assert_eq!(snapshot.pushes_sent, 0);
        assert_eq!(snapshot.pulse_failures, 0);
    }

    #[test]
    fn test_update_stats_increments_and_decrements() {
        let stats = StatsAtomics::new();
        stats.update_stats(StatsEvent::PulsesSent, 3);
        let snapshot = stats.update_stats(StatsEvent::PulsesSent, -1);
        assert_eq!(snapshot.pulses_sent, 2);
        assert_eq!(snapshot.pushes_sent, 0);
    }

    #[test]
    fn test_update_stats_zero_is_noop() {
        let stats = StatsAtomics::new();
        stats.update_stats(StatsEvent::MalformedDropped, 5);
        let snapshot = stats.update_stats(StatsEvent::MalformedDropped, 0);
        assert_eq!(snapshot.malformed_dropped, 5);
    }

    #[test]
    fn test_set_stats_overwrites() {
        let stats = StatsAtomics::new();
        stats.update_stats(StatsEvent::IncomingNotices, 7);
        let snapshot = stats.set_stats(StatsEvent::IncomingNotices, 1);
        assert_eq!(snapshot.incoming_notices, 1);
    }

    #[test]
    fn test_each_event_moves_its_own_counter() {
        let stats = StatsAtomics::new();
        stats.update_stats(StatsEvent::DatagramsReceived, 1);
        stats.update_stats(StatsEvent::UnsolicitedDropped, 2);
        stats.update_stats(StatsEvent::LateResponsesDropped, 3);
        stats.update_stats(StatsEvent::AnnouncesSent, 4);
        stats.update_stats(StatsEvent::PushesResolved, 5);
        stats.update_stats(StatsEvent::PushesAbandoned, 6);
        stats.update_stats(StatsEvent::ProtocolErrors, 7);
        let snapshot = stats.get_stats();
        assert_eq!(snapshot.datagrams_received, 1);
        assert_eq!(snapshot.unsolicited_dropped, 2);
        assert_eq!(snapshot.late_responses_dropped, 3);
        assert_eq!(snapshot.announces_sent, 4);
        assert_eq!(snapshot.pushes_resolved, 5);
        assert_eq!(snapshot.pushes_abandoned, 6);
        assert_eq!(snapshot.protocol_errors, 7);
    }

    #[test]
    fn test_concurrent_updates() {
        let stats = Arc::new(StatsAtomics::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let stats = stats.clone();
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        stats.update_stats(StatsEvent::DatagramsReceived, 1);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(stats.get_stats().datagrams_received, 8000);
    }

    #[test]
    fn test_snapshot_serializes() {
        let stats = StatsAtomics::new();
        stats.update_stats(StatsEvent::PushesSent, 2);
        let json = serde_json::to_value(stats.get_stats()).unwrap();
        assert_eq!(json["pushes_sent"], 2);
    }
}
