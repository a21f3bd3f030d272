use isahc::Error as rError;
use isahc::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Isahc Error: {0}")]
    Isahc(#[from] rError),
    #[error("provider responded with {0}")]
    Status(StatusCode),
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),
    #[error("{0}")]
    IOError(#[from] std::io::Error),
}

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::Isahc(_) => "http_client_error",
            Error::Status(status) if *status == StatusCode::TOO_MANY_REQUESTS => "rate_limited",
            Error::Status(_) => "http_status_error",
            Error::Decode(_) | Error::NotAnObject(_) => "decode_error",
            Error::IOError(_) => "io_error",
        }
    }
}

/// A lookup that did not produce a result, tagged with the address it was for.
#[derive(Debug, thiserror::Error)]
#[error("failed to look up {ip}: {cause}")]
pub struct LookupFailure {
    pub ip: String,
    #[source]
    pub cause: Error,
}

impl LookupFailure {
    pub fn new(ip: impl Into<String>, cause: impl Into<Error>) -> Self {
        Self {
            ip: ip.into(),
            cause: cause.into(),
        }
    }
}
