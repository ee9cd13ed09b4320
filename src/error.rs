// Error type for the shortening client. Two kinds only: the service
// answered with something other than 200, or the request never produced a
// usable response.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShortenError {
    /// The service responded, but not with HTTP 200.
    #[error("Error shortening URL: service returned HTTP {status}")]
    Service { status: u16 },

    /// Timeout, connection refusal, DNS failure or a body that could not be
    /// read. The `reqwest` error is kept as-is.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl ShortenError {
    /// Status code for `Service` errors, `None` for transport failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ShortenError::Service { status } => Some(*status),
            ShortenError::Transport(_) => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ShortenError::Transport(e) if e.is_timeout())
    }
}
