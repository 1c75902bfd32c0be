//! Error types for the stream I/O layer.

use midiprobe_core::EncodeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Stream is closed")]
    StreamClosed,
}

impl<T> From<crossbeam_channel::TrySendError<T>> for Error {
    fn from(e: crossbeam_channel::TrySendError<T>) -> Self {
        Error::Transport(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
