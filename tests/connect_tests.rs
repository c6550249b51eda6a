mod common;

use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use common::{create_test_config, FakeTracker};
use sobani::chat::chat::{format_remote_line, relay, PROMPT};
use sobani::chat::enums::relay_end::RelayEnd;
use sobani::session::enums::session_error::SessionError;
use sobani::session::structs::session::Session;
use sobani::tracker::structs::share_id::ShareId;
use sobani::transport::structs::tcp_stream_transport::TcpStreamTransport;
use sobani::transport::traits::stream_transport::StreamTransport;

#[tokio::test]
async fn test_connect_and_chat_over_tcp() {
    let tracker = FakeTracker::start().await;
    let (alice, _alice_events) = Session::start(create_test_config(tracker.address)).await.unwrap();
    let (bob, _bob_events) = Session::start(create_test_config(tracker.address)).await.unwrap();

    let alice_transport = TcpStreamTransport::new(alice.local_address());
    let (streams_tx, mut streams_rx) = mpsc::channel(1);
    let accept_shutdown = alice.subscribe_shutdown();
    let accept_task = tokio::spawn(async move { alice_transport.on_incoming_stream(streams_tx, accept_shutdown).await });
    tokio::time::sleep(Duration::from_millis(100)).await;

    let bob_transport = TcpStreamTransport::new(bob.local_address());
    let mut outgoing = bob.connect(alice.share_id().unwrap(), &bob_transport).await.unwrap();
    let (incoming, remote) = tokio::time::timeout(Duration::from_secs(2), streams_rx.recv()).await.unwrap().unwrap();
    assert_eq!(remote.ip(), bob.local_address().ip());

    outgoing.write_all(b"hi alice\n").await.unwrap();
    outgoing.shutdown().await.unwrap();

    let (_keyboard, keyboard_reader) = tokio::io::duplex(64);
    let mut screen = Vec::new();
    let end = relay(incoming, BufReader::new(keyboard_reader), &mut screen).await.unwrap();

    assert_eq!(end, RelayEnd::RemoteClosed);
    assert_eq!(String::from_utf8(screen).unwrap(), format!("{PROMPT}{}", format_remote_line("hi alice")));

    alice.close().await;
    bob.close().await;
    tokio::time::timeout(Duration::from_secs(1), accept_task).await.unwrap().unwrap().unwrap();
}

#[tokio::test]
async fn test_typed_lines_reach_the_peer() {
    let tracker = FakeTracker::start().await;
    let (alice, _alice_events) = Session::start(create_test_config(tracker.address)).await.unwrap();
    let (bob, _bob_events) = Session::start(create_test_config(tracker.address)).await.unwrap();

    let alice_transport = TcpStreamTransport::new(alice.local_address());
    let listener = alice_transport.bind_listener().await.unwrap();

    let bob_transport = TcpStreamTransport::new(bob.local_address());
    let outgoing = bob.connect(alice.share_id().unwrap(), &bob_transport).await.unwrap();
    let (incoming, _) = listener.accept().await.unwrap();

    let typed: &[u8] = b"one\ntwo\n";
    let mut screen = Vec::new();
    let end = relay(outgoing, BufReader::new(typed), &mut screen).await.unwrap();
    assert_eq!(end, RelayEnd::LocalClosed);

    let mut lines = BufReader::new(incoming).lines();
    assert_eq!(lines.next_line().await.unwrap().as_deref(), Some("one"));
    assert_eq!(lines.next_line().await.unwrap().as_deref(), Some("two"));
    assert_eq!(lines.next_line().await.unwrap(), None);

    alice.close().await;
    bob.close().await;
}

#[tokio::test]
async fn test_connect_to_unknown_peer_opens_nothing() {
    let tracker = FakeTracker::start().await;
    let (bob, _events) = Session::start(create_test_config(tracker.address)).await.unwrap();
    let transport = TcpStreamTransport::new(bob.local_address());

    let result = bob.connect(ShareId::from("ghost"), &transport).await;

    assert!(matches!(result, Err(SessionError::Negotiation(_))));
    assert!(bob.peers().is_empty());
    bob.close().await;
}
