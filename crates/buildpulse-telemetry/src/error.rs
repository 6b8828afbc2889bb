use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Client unavailable: {0}")]
    Unavailable(String),

    #[error("Send failed: {0}")]
    SendFailed(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum HostnameError {
    #[error("Hostname lookup failed: {0}")]
    Lookup(#[from] std::io::Error),

    #[error("Invalid hostname: {0}")]
    Invalid(String),
}

/// Error raised while forwarding a single security notification.
///
/// Never leaves the forwarder; it is logged and dropped.
#[derive(Debug, Error)]
pub enum ForwardError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Client panicked: {0}")]
    Panicked(String),
}
