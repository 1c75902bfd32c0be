//! Error types for the decoder and encoder.

use serde::Serialize;
use thiserror::Error;

/// Anomalies found while decoding a byte stream.
///
/// None of these stop the decoder; each is reported and decoding continues
/// from the next byte.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DecodeError {
    #[error("data byte 0x{0:02X} with no running status")]
    OrphanDataByte(u8),

    #[error("EOX (0xF7) outside of System Exclusive")]
    UnmatchedEox,

    #[error("System Exclusive terminated by status 0x{status:02X} instead of EOX")]
    ImplicitSysExTermination { status: u8 },

    #[error("System Exclusive payload exceeds {limit} bytes")]
    SysExTooLarge { limit: usize },

    #[error("status 0x{status:02X} interrupted after {received} of {expected} data bytes")]
    IncompleteMessage { status: u8, expected: u8, received: u8 },

    #[error("undefined status byte 0x{0:02X}")]
    UndefinedStatus(u8),
}

/// How loudly a decode anomaly should be surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Severity {
    Warning,
    Error,
}

impl DecodeError {
    pub fn severity(&self) -> Severity {
        match self {
            DecodeError::UnmatchedEox => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    #[error("{field} out of range: {value} (max {max})")]
    ValueOutOfRange {
        field: &'static str,
        value: u32,
        max: u32,
    },

    #[error("invalid System Exclusive manufacturer ID")]
    InvalidManufacturerId,
}

pub type Result<T> = std::result::Result<T, EncodeError>;
