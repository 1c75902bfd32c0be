//! Centralized error type for the midiprobe umbrella crate.
//!
//! Wraps all subsystem errors so `?` propagates naturally across crate boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Decode: {0}")]
    Decode(#[from] midiprobe_core::DecodeError),

    #[error("Encode: {0}")]
    Encode(#[from] midiprobe_core::EncodeError),

    #[cfg(feature = "io")]
    #[error("Stream: {0}")]
    Io(#[from] midiprobe_io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
