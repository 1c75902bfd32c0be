//! Events delivered to probe consumers.

use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use midiprobe_core::{AnnotatedMessage, DecodeError, TimestampedMessage};

/// Identifies an input stream for the lifetime of its [`Probe`](crate::Probe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct StreamId(pub(crate) u64);

impl StreamId {
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for StreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ProbeEventKind {
    Message(TimestampedMessage<AnnotatedMessage>),
    Error {
        error: DecodeError,
        system_time: Duration,
        hardware_time: Option<Duration>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeEvent {
    pub stream: StreamId,
    /// Name the stream was opened with.
    pub source: Arc<str>,
    pub kind: ProbeEventKind,
}

impl ProbeEvent {
    pub fn message(&self) -> Option<&TimestampedMessage<AnnotatedMessage>> {
        match &self.kind {
            ProbeEventKind::Message(msg) => Some(msg),
            ProbeEventKind::Error { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&DecodeError> {
        match &self.kind {
            ProbeEventKind::Error { error, .. } => Some(error),
            ProbeEventKind::Message(_) => None,
        }
    }

    pub fn system_time(&self) -> Duration {
        match &self.kind {
            ProbeEventKind::Message(msg) => msg.system_time,
            ProbeEventKind::Error { system_time, .. } => *system_time,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.kind, ProbeEventKind::Error { .. })
    }
}
