#[cfg(test)]
mod listener_tests {
    use std::net::SocketAddr;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::net::UdpSocket;
    use tokio::sync::{mpsc, watch};
    use crate::listener::enums::dispatch_outcome::DispatchOutcome;
    use crate::listener::structs::response_listener::ResponseListener;
    use crate::peers::enums::peer_origin::PeerOrigin;
    use crate::peers::structs::peer_book::PeerBook;
    use crate::session::enums::session_event::SessionEvent;
    use crate::stats::structs::stats_atomics::StatsAtomics;
    use crate::tracker::enums::request_kind::RequestKind;
    use crate::tracker::structs::pending_requests::PendingRequests;
    use crate::tracker::structs::share_id::ShareId;
    use crate::tracker::types::SharedPendingRequests;

    struct Harness {
        listener: ResponseListener,
        pending: SharedPendingRequests,
        stats: Arc<StatsAtomics>,
        peers: Arc<PeerBook>,
        events: mpsc::UnboundedReceiver<SessionEvent>,
        tracker_address: SocketAddr,
    }

    async fn harness() -> Harness {
        let socket = Arc::new(UdpSocket::bind("127.0.0.1:0").await.unwrap());
        let tracker_address: SocketAddr = "127.0.0.1:3000".parse().unwrap();
        let pending = PendingRequests::shared();
        let stats = StatsAtomics::shared();
        let peers = PeerBook::shared();
        let (events_tx, events) = mpsc::unbounded_channel();
        let listener = ResponseListener::new(socket, tracker_address, pending.clone(), stats.clone(), peers.clone(), events_tx);
        Harness { listener, pending, stats, peers, events, tracker_address }
    }

    #[tokio::test]
    async fn test_announce_ack_completes_waiter() {
        let h = harness().await;
        let receiver = h.pending.lock().register_announce().unwrap();
        let outcome = h.listener.handle_datagram(br#"{"action":"announceReceived","data":{"shareId":"73756b69"}}"#, h.tracker_address);
        assert_eq!(outcome, DispatchOutcome::Completed(RequestKind::Announce));
        assert_eq!(receiver.await.unwrap(), ShareId::from("73756b69"));
    }

    #[tokio::test]
    async fn test_announce_ack_without_share_id_keeps_waiter() {
        let h = harness().await;
        let receiver = h.pending.lock().register_announce().unwrap();

        let empty: [&[u8]; 2] = [
            br#"{"action":"announceReceived","data":{"shareId":""}}"#,
            br#"{"action":"announceReceived","data":{}}"#,
        ];
        for payload in empty {
            assert_eq!(h.listener.dispatch(payload), DispatchOutcome::ProtocolError);
        }
        assert!(h.pending.lock().has_pending(RequestKind::Announce));
        assert_eq!(h.stats.get_stats().protocol_errors, 2);

        let outcome = h.listener.dispatch(br#"{"action":"announceReceived","data":{"shareId":"73756b69"}}"#);
        assert_eq!(outcome, DispatchOutcome::Completed(RequestKind::Announce));
        assert_eq!(receiver.await.unwrap(), ShareId::from("73756b69"));
    }

    #[tokio::test]
    async fn test_duplicate_ack_is_late() {
        let h = harness().await;
        let _receiver = h.pending.lock().register_announce().unwrap();
        let ack = br#"{"action":"announceReceived","data":{"shareId":"a"}}"#;
        assert_eq!(h.listener.dispatch(ack), DispatchOutcome::Completed(RequestKind::Announce));
        assert_eq!(h.listener.dispatch(ack), DispatchOutcome::Late);
        assert_eq!(h.stats.get_stats().late_responses_dropped, 1);
    }

    #[tokio::test]
    async fn test_malformed_datagrams_complete_nothing() {
        let h = harness().await;
        let _announce = h.pending.lock().register_announce().unwrap();
        let _push = h.pending.lock().register_push(ShareId::from("t")).unwrap();

        let garbage: [&[u8]; 4] = [b"\x00\x01\x02", b"{\"action\":", b"null", br#"{"data":{"shareId":"x"}}"#];
        for payload in garbage {
            assert_eq!(h.listener.handle_datagram(payload, h.tracker_address), DispatchOutcome::Malformed);
        }

        let pending = h.pending.lock();
        assert!(pending.has_pending(RequestKind::Announce));
        assert!(pending.has_pending(RequestKind::Push));
        assert_eq!(h.stats.get_stats().malformed_dropped, 4);
        assert_eq!(h.stats.get_stats().datagrams_received, 4);
    }

    #[tokio::test]
    async fn test_foreign_source_is_dropped() {
        let h = harness().await;
        let _receiver = h.pending.lock().register_announce().unwrap();
        let stranger: SocketAddr = "127.0.0.1:4000".parse().unwrap();
        let outcome = h.listener.handle_datagram(br#"{"action":"announceReceived","data":{"shareId":"a"}}"#, stranger);
        assert_eq!(outcome, DispatchOutcome::Unsolicited);
        assert!(h.pending.lock().has_pending(RequestKind::Announce));
        assert_eq!(h.stats.get_stats().unsolicited_dropped, 1);
    }

    #[tokio::test]
    async fn test_unknown_and_request_actions_are_unsolicited() {
        let h = harness().await;
        assert_eq!(h.listener.dispatch(br#"{"action":"knock"}"#), DispatchOutcome::Unsolicited);
        assert_eq!(h.listener.dispatch(br#"{"action":"pulse","shareId":"a"}"#), DispatchOutcome::Unsolicited);
    }

    #[tokio::test]
    async fn test_push_ack_resolves_target() {
        let h = harness().await;
        let receiver = h.pending.lock().register_push(ShareId::from("remote")).unwrap();
        let outcome = h.listener.dispatch(br#"{"action":"pushReceived","data":{"ip":"10.1.1.1","port":"4000","multiaddr":"/ip4/10.1.1.1/tcp/4000"}}"#);
        assert_eq!(outcome, DispatchOutcome::Completed(RequestKind::Push));
        assert_eq!(receiver.await.unwrap().as_str(), "10.1.1.1:4000");
    }

    #[tokio::test]
    async fn test_push_ack_for_other_peer_is_stale() {
        let h = harness().await;
        let _receiver = h.pending.lock().register_push(ShareId::from("remote")).unwrap();
        let outcome = h.listener.dispatch(br#"{"action":"pushReceived","data":{"peerShareId":"older","peeraddr":"10.1.1.1:4000"}}"#);
        assert_eq!(outcome, DispatchOutcome::Late);
        assert!(h.pending.lock().has_pending(RequestKind::Push));
    }

    #[tokio::test]
    async fn test_push_ack_without_address_keeps_push_pending() {
        let h = harness().await;
        let _receiver = h.pending.lock().register_push(ShareId::from("remote")).unwrap();
        let outcome = h.listener.dispatch(br#"{"action":"pushReceived","data":{"ip":"10.1.1.1"}}"#);
        assert_eq!(outcome, DispatchOutcome::ProtocolError);
        assert!(h.pending.lock().has_pending(RequestKind::Push));
    }

    #[tokio::test]
    async fn test_push_ack_without_waiter_is_late() {
        let h = harness().await;
        let outcome = h.listener.dispatch(br#"{"action":"pushReceived","data":{"ip":"10.1.1.1","port":"1"}}"#);
        assert_eq!(outcome, DispatchOutcome::Late);
    }

    #[tokio::test]
    async fn test_income_records_peer_and_emits_event() {
        let mut h = harness().await;
        let outcome = h.listener.dispatch(br#"{"action":"income","data":{"peerShareId":"caller","peeraddr":"10.2.2.2:5000"}}"#);
        assert_eq!(outcome, DispatchOutcome::Notified);

        let peer = h.peers.find_by_share_id(&ShareId::from("caller")).unwrap();
        assert_eq!(peer.origin, PeerOrigin::Incoming);
        assert_eq!(peer.address.as_str(), "10.2.2.2:5000");
        match h.events.try_recv().unwrap() {
            SessionEvent::IncomingPeer { share_id, address } => {
                assert_eq!(share_id.as_str(), "caller");
                assert_eq!(address.as_str(), "10.2.2.2:5000");
            }
            other => panic!("unexpected event {other:?}"),
        }
        assert_eq!(h.stats.get_stats().incoming_notices, 1);
    }

    #[tokio::test]
    async fn test_income_without_identity_is_protocol_error() {
        let h = harness().await;
        let outcome = h.listener.dispatch(br#"{"action":"income","data":{"peeraddr":"10.2.2.2:5000"}}"#);
        assert_eq!(outcome, DispatchOutcome::ProtocolError);
        assert!(h.peers.is_empty());
    }

    #[tokio::test]
    async fn test_run_routes_real_datagrams_and_stops() {
        let tracker = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let socket = Arc::new(UdpSocket::bind("127.0.0.1:0").await.unwrap());
        let local = socket.local_addr().unwrap();
        let pending = PendingRequests::shared();
        let (events_tx, _events) = mpsc::unbounded_channel();
        let listener = ResponseListener::new(
            socket,
            tracker.local_addr().unwrap(),
            pending.clone(),
            StatsAtomics::shared(),
            PeerBook::shared(),
            events_tx,
        );
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let receiver = pending.lock().register_announce().unwrap();
        let task = tokio::spawn(listener.run(shutdown_rx));

        tracker.send_to(b"garbage", local).await.unwrap();
        tracker.send_to(br#"{"action":"announceReceived","data":{"shareId":"live"}}"#, local).await.unwrap();
        let share_id = tokio::time::timeout(Duration::from_secs(2), receiver).await.unwrap().unwrap();
        assert_eq!(share_id.as_str(), "live");

        shutdown_tx.send(true).unwrap();
        tokio::time::timeout(Duration::from_secs(1), task).await.unwrap().unwrap();
    }
}
