use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use futures_util::future::join_all;
use log::{error, info, warn};
use tokio::io::{AsyncBufRead, AsyncRead, AsyncWrite, BufReader};
use tokio::runtime::Builder;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_shutdown::Shutdown;
use sobani::chat::chat::relay;
use sobani::chat::enums::relay_end::RelayEnd;
use sobani::config::structs::configuration::Configuration;
use sobani::logging::setup_logging;
use sobani::session::enums::session_event::SessionEvent;
use sobani::session::structs::session::Session;
use sobani::structs::Cli;
use sobani::tracker::structs::share_id::ShareId;
use sobani::transport::structs::tcp_stream_transport::TcpStreamTransport;
use sobani::transport::traits::stream_transport::StreamTransport;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    if args.create_config {
        let present = Configuration::load_file(&args.config).is_ok();
        match Configuration::load_from_file(&args.config, true) {
            Ok(_) if present => eprintln!("{} already exists, left untouched.", args.config),
            Ok(_) => eprintln!("Please edit {} and start again, exiting now...", args.config),
            Err(_) => exit(101),
        }
        exit(0);
    }

    let mut config = match Configuration::load_from_file(&args.config, false) {
        Ok(config) => config,
        Err(_) => exit(101)
    };
    config.apply_cli(&args);

    println!("[VALIDATE] Validating configuration...");
    if let Err(error) = config.validate() {
        eprintln!("[VALIDATE CONFIG] {error}");
        exit(101);
    }

    let target = match args.connect.as_deref().map(ShareId::parse).transpose() {
        Ok(target) => target,
        Err(error) => {
            eprintln!("[ERROR] --connect: {error}");
            exit(101);
        }
    };

    let config = Arc::new(config);
    if let Err(error) = setup_logging(&config) {
        eprintln!("Failed to initialize logging: {error}");
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let code = runtime.block_on(run(config, target));
    runtime.shutdown_timeout(Duration::from_secs(1));
    exit(code);
}

async fn run(config: Arc<Configuration>, target: Option<ShareId>) -> i32
{
    let tokio_shutdown = match Shutdown::new() {
        Ok(shutdown) => shutdown,
        Err(error) => {
            error!("[BOOT] Could not install the shutdown handler: {error:?}");
            return 1;
        }
    };

    info!("[BOOT] Announcing to tracker {}...", config.tracker.address);
    let (session, mut events) = match Session::start(config.clone()).await {
        Ok(started) => started,
        Err(error) => {
            error!("[BOOT] {error}");
            return 1;
        }
    };
    let session = Arc::new(session);

    if let Some(share_id) = session.share_id() {
        println!("Your share id: {share_id}");
    }

    let console_task = spawn_stats_console(session.clone(), config.log_console_interval, tokio_shutdown.clone());
    let local = session.local_address();
    let transport = TcpStreamTransport::new(SocketAddr::new(local.ip(), local.port()));

    let code = match target {
        Some(target) => run_connect(&session, &transport, target, &tokio_shutdown, &mut events).await,
        None => run_accept(&session, transport, &tokio_shutdown, &mut events).await,
    };

    session.close().await;
    join_all(vec![console_task]).await;
    code
}

async fn run_connect(
    session: &Session,
    transport: &TcpStreamTransport,
    target: ShareId,
    tokio_shutdown: &Shutdown,
    events: &mut mpsc::UnboundedReceiver<SessionEvent>,
) -> i32
{
    info!("[BOOT] Connecting to {target}...");
    let connected = tokio::select! {
        connected = session.connect(target, transport) => connected,
        _ = tokio_shutdown.handle() => {
            info!("Shutdown request received, shutting down...");
            return 0;
        }
        code = watch_fatal(events) => return code,
    };

    match connected {
        Ok(stream) => {
            let mut keyboard = BufReader::new(tokio::io::stdin());
            chat_until_done(stream, &mut keyboard, tokio_shutdown, events).await.unwrap_or(0)
        }
        Err(error) if error.is_fatal() => {
            error!("[SESSION] {error}");
            1
        }
        Err(error) => {
            warn!("[SESSION] {error}");
            0
        }
    }
}

async fn run_accept(
    session: &Session,
    transport: TcpStreamTransport,
    tokio_shutdown: &Shutdown,
    events: &mut mpsc::UnboundedReceiver<SessionEvent>,
) -> i32
{
    let (streams_tx, mut streams_rx) = mpsc::channel(4);
    let accept_shutdown = session.subscribe_shutdown();
    let accept_task = tokio::spawn(async move { transport.on_incoming_stream(streams_tx, accept_shutdown).await });

    info!("[BOOT] Waiting for peers, hand them your share id");
    let mut keyboard = BufReader::new(tokio::io::stdin());
    loop {
        tokio::select! {
            incoming = streams_rx.recv() => {
                match incoming {
                    Some((stream, remote)) => {
                        info!("[CHAT] Peer connected from {remote}");
                        if let Some(code) = chat_until_done(stream, &mut keyboard, tokio_shutdown, events).await {
                            return code;
                        }
                        info!("[CHAT] Peer left, waiting for the next one");
                    }
                    None => {
                        match accept_task.await {
                            Ok(Err(error)) => error!("[TRANSPORT] {error}"),
                            Ok(Ok(())) => error!("[TRANSPORT] Accept loop ended"),
                            Err(error) => error!("[TRANSPORT] Accept task failed: {error}"),
                        }
                        return 1;
                    }
                }
            }
            _ = tokio_shutdown.handle() => {
                info!("Shutdown request received, shutting down...");
                return 0;
            }
            code = watch_fatal(events) => return code,
        }
    }
}

/// Relays the terminal over `stream`. `None` means the peer went away and another one
/// may follow, `Some(code)` means the process should exit with `code`.
///
/// The keyboard reader outlives a single relay so typed input is never dropped between peers.
async fn chat_until_done<S, K>(
    stream: S,
    keyboard: &mut K,
    tokio_shutdown: &Shutdown,
    events: &mut mpsc::UnboundedReceiver<SessionEvent>,
) -> Option<i32>
where
    S: AsyncRead + AsyncWrite + Unpin,
    K: AsyncBufRead + Unpin,
{
    tokio::select! {
        ended = relay(stream, keyboard, tokio::io::stdout()) => {
            match ended {
                Ok(RelayEnd::LocalClosed) => {
                    info!("[CHAT] Local input closed, nothing left to send");
                    Some(0)
                }
                Ok(end) => {
                    info!("[CHAT] Relay ended: {end:?}");
                    None
                }
                Err(error) => {
                    warn!("[CHAT] Relay failed: {error}");
                    None
                }
            }
        }
        _ = tokio_shutdown.handle() => {
            info!("Shutdown request received, shutting down...");
            Some(0)
        }
        code = watch_fatal(events) => Some(code),
    }
}

/// Logs session events until a fatal one arrives, then yields the exit code.
async fn watch_fatal(events: &mut mpsc::UnboundedReceiver<SessionEvent>) -> i32
{
    loop {
        match events.recv().await {
            Some(SessionEvent::Fatal(reason)) => {
                error!("[SESSION] {reason}");
                return 1;
            }
            Some(SessionEvent::IncomingPeer { share_id, address }) => {
                info!("[SESSION] Peer {share_id} at {address} wants to talk to us");
            }
            Some(SessionEvent::Announced(share_id)) => {
                info!("[SESSION] Registered as {share_id}");
            }
            None => std::future::pending::<()>().await,
        }
    }
}

fn spawn_stats_console(session: Arc<Session>, console_interval: u64, stats_handler: Shutdown) -> JoinHandle<()>
{
    tokio::spawn(async move {
        if console_interval == 0 {
            return;
        }
        info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");

        let period = Duration::from_secs(console_interval);
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        let mut session_shutdown = session.subscribe_shutdown();
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    let stats = session.stats();
                    info!(
                        "[STATS] Datagrams: {} - Malformed: {} - Protocol Errors: {} - Unsolicited: {} - Late: {} | \
                        Announces: {} - Pulses: {} - Pulse Failures: {} | \
                        Pushes: {} - Resolved: {} - Abandoned: {} | Incoming: {} - Peers: {}",
                        stats.datagrams_received, stats.malformed_dropped, stats.protocol_errors, stats.unsolicited_dropped,
                        stats.late_responses_dropped, stats.announces_sent, stats.pulses_sent, stats.pulse_failures,
                        stats.pushes_sent, stats.pushes_resolved, stats.pushes_abandoned, stats.incoming_notices,
                        session.peers().len()
                    );
                }
                _ = stats_handler.handle() => {
                    info!("[BOOT] Shutting down thread for console updates...");
                    return;
                }
                _ = session_shutdown.changed() => {
                    return;
                }
            }
        }
    })
}
