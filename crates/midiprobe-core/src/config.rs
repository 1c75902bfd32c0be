//! Decoder and classifier configuration.
//!
//! The core only reads these values. Persisting them is up to the caller,
//! which is why the struct derives `Serialize`/`Deserialize`.

use serde::{Deserialize, Serialize};

/// Default System Exclusive payload cap (1 MiB).
pub const DEFAULT_SYSEX_MAX_PAYLOAD: usize = 1024 * 1024;

/// What to do with an EOX byte that arrives outside System Exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EoxPolicy {
    /// Report [`DecodeError::UnmatchedEox`](crate::DecodeError::UnmatchedEox) only.
    #[default]
    Report,
    /// Report the error, then also emit an empty terminated System Exclusive.
    EmptySysEx,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Label Note On with velocity 0 as Note Off.
    pub velocity_zero_is_note_off: bool,
    /// Use the RP-023 names for CC 91 and CC 93.
    pub cc91_93_renamed: bool,
    pub sysex_max_payload_bytes: usize,
    pub unmatched_eox: EoxPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            velocity_zero_is_note_off: true,
            cc91_93_renamed: false,
            sysex_max_payload_bytes: DEFAULT_SYSEX_MAX_PAYLOAD,
            unmatched_eox: EoxPolicy::Report,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn velocity_zero_is_note_off(mut self, enabled: bool) -> Self {
        self.velocity_zero_is_note_off = enabled;
        self
    }

    pub fn cc91_93_renamed(mut self, enabled: bool) -> Self {
        self.cc91_93_renamed = enabled;
        self
    }

    pub fn sysex_max_payload_bytes(mut self, limit: usize) -> Self {
        self.sysex_max_payload_bytes = limit;
        self
    }

    pub fn unmatched_eox(mut self, policy: EoxPolicy) -> Self {
        self.unmatched_eox = policy;
        self
    }
}
