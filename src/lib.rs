//! # midiprobe - MIDI 1.0 stream probe
//!
//! Decodes live, possibly malformed MIDI byte streams into annotated,
//! timestamped messages and encodes structured messages back into bytes.
//!
//! ## Architecture
//!
//! midiprobe is an umbrella crate over:
//! - **midiprobe-core** - Decoder, classifier, encoder and timing
//! - **midiprobe-io** - Per-stream context, event delivery, history, output generator
//!
//! ## Quick Start
//!
//! ```
//! use midiprobe::prelude::*;
//!
//! let probe = Probe::builder().history(1024).build()?;
//! let mut stream = probe.open_stream("Keyboard")?;
//!
//! // Called from the transport's receive callback
//! stream.feed_slice(&[0x90, 60, 100, 60, 0], None)?;
//!
//! let labels: Vec<_> = probe
//!     .drain_events()
//!     .iter()
//!     .filter_map(|e| e.message())
//!     .map(|m| m.message.annotation.label)
//!     .collect();
//! assert_eq!(labels, [MessageKind::NoteOn, MessageKind::NoteOff]);
//! # Ok::<(), midiprobe::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `default` - Core plus the stream layer
//! - `io` - Stream context (`Probe`, `InputStream`, `Generator`)

/// Re-export of midiprobe-core for direct access
pub use midiprobe_core as core;

pub mod error;
pub use error::{Error, Result};

pub use midiprobe_core::{
    encode, encode_into, note_name, AnnotatedMessage, Annotation, Category, ChannelModeKind,
    ChannelVoiceMsg, Classifier, Clock, Config, DataAction, DecodeError, DecodeEvent,
    EncodeError, EoxPolicy, IdGroup, IdRegion, ManualClock, ManufacturerId, Message,
    MessageKind, MonotonicClock, ParameterAnnotation, ParameterKind, Severity, Stamper,
    StreamDecoder, SysEx, SysExAnnotation, SystemCommonMsg, SystemRealtimeMsg,
    TimestampedMessage, UniversalAnnotation,
};

// Stream layer
#[cfg(feature = "io")]
pub use midiprobe_io as io;

#[cfg(feature = "io")]
pub use midiprobe_io::{
    format, ChannelTransport, Generator, History, InputStream, Probe, ProbeBuilder, ProbeEvent,
    ProbeEventKind, StreamId, StreamInfo, Transport,
};

/// Decode a complete buffer with a fresh decoder and classifier.
///
/// Anomalies appear in order among the messages.
pub fn annotate(
    bytes: &[u8],
    config: Config,
) -> Vec<std::result::Result<AnnotatedMessage, DecodeError>> {
    let mut decoder = StreamDecoder::new(config);
    let mut classifier = Classifier::new(config);
    decoder
        .decode(bytes)
        .into_iter()
        .map(|event| match event {
            DecodeEvent::Message(message) => Ok(classifier.classify(&message)),
            DecodeEvent::Error(error) => Err(error),
        })
        .collect()
}

/// Convenience prelude for common imports
pub mod prelude {
    pub use crate::{
        annotate, AnnotatedMessage, Config, DecodeError, DecodeEvent, EoxPolicy, Message,
        MessageKind, StreamDecoder,
    };

    #[cfg(feature = "io")]
    pub use crate::{Generator, InputStream, Probe, ProbeEvent, Transport};
}
