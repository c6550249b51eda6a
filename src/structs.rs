use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// ShareID of the peer to connect to. Without it, wait for incoming peers.
    #[arg(long)]
    pub connect: Option<String>,
    /// Tracker address as host:port, overrides the config file.
    #[arg(long)]
    pub tracker: Option<String>,
    /// Local UDP/TCP port, overrides the config file (0 = ephemeral).
    #[arg(long)]
    pub port: Option<u16>,
    /// Force debug logging.
    #[arg(long)]
    pub debug: bool,
    /// Path of the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Write the default configuration file and exit.
    #[arg(long)]
    pub create_config: bool,
}
