//! Error type for the I/O shell: wraps the decoder's error taxonomy and
//! filesystem failures behind one type callers can `?`-propagate.

use asterix_core::DecodeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoShellError {
    #[error("failed to read datagram file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode ASTERIX stream: {0}")]
    Decode(#[from] DecodeError),

    #[error("failed to serialize decoded output: {0}")]
    Serialize(#[from] serde_json::Error),
}
