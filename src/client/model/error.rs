/// Transport outcome for API calls.
///
/// Every failure an API call can produce falls into exactly one of these
/// variants, so callers can match exhaustively instead of probing a status
/// field that may or may not be meaningful.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    Http { status: u16, message: String },
    /// The request never produced an HTTP response (DNS, connect, timeout).
    Network(String),
    /// The response body could not be deserialized into the expected type.
    Decode(String),
}

impl ApiError {
    /// HTTP status of the error, if the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http { status, message } => write!(f, "HTTP {status}: {message}"),
            Self::Network(message) => write!(f, "Network error: {message}"),
            Self::Decode(message) => write!(f, "Decode error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}
