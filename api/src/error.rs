use thiserror::Error;

/// Everything that can go wrong while talking to the inventory sheet.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The request could not complete.
    #[error("network: {0}")]
    Network(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    /// The endpoint answered `success: false`.
    #[error("{}", .0.as_deref().unwrap_or("Unknown error"))]
    Rejected(Option<String>),

    /// The response body was not what the sheet script returns.
    #[error("decode: {0}")]
    Decode(String),

    #[error("invalid endpoint url: {0}")]
    InvalidEndpoint(String),
}

impl StoreError {
    /// The message the server itself reported, if the failure came from the
    /// sheet script rather than the transport.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected(message) => Some(message.as_deref().unwrap_or("Unknown error")),
            _ => None,
        }
    }
}
