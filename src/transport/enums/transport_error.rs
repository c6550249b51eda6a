use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("'{0}' is not a usable stream endpoint")]
    InvalidAddress(String),

    #[error("could not connect to {address}: {source}")]
    Connect { address: String, source: std::io::Error },

    #[error("connecting to {0} timed out")]
    ConnectTimeout(String),

    #[error("could not listen on {address}: {source}")]
    Bind { address: String, source: std::io::Error },
}
