//! MIDI 1.0 wire protocol core.
//!
//! Decodes live, possibly malformed byte streams into structured messages,
//! annotates them, and encodes structured messages back into bytes.
//!
//! - **Decoder**: byte-at-a-time state machine with running status, realtime
//!   interleaving and bounded System Exclusive collection
//! - **Classifier**: per-stream annotation (aliases, controller names,
//!   RPN/NRPN tracking, SysEx manufacturer and Universal sub-IDs)
//! - **Encoder**: range-checked serialization with explicit status bytes
//! - **Timing**: monotonic system stamps plus optional hardware stamps
//!
//! # Example
//!
//! ```
//! use midiprobe_core::{Classifier, Config, DecodeEvent, MessageKind, StreamDecoder};
//!
//! let config = Config::default();
//! let mut decoder = StreamDecoder::new(config);
//! let mut classifier = Classifier::new(config);
//!
//! for event in decoder.decode(&[0x90, 60, 0]) {
//!     if let DecodeEvent::Message(msg) = event {
//!         let annotated = classifier.classify(&msg);
//!         assert_eq!(annotated.annotation.label, MessageKind::NoteOff);
//!         assert_eq!(msg.to_bytes().unwrap().as_slice(), &[0x90, 60, 0]);
//!     }
//! }
//! ```

pub mod classifier;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod message;
pub mod names;
pub mod timing;

pub use classifier::{
    AnnotatedMessage, Annotation, Classifier, DataAction, ParameterAnnotation, ParameterKind,
    SysExAnnotation, UniversalAnnotation,
};
pub use config::{Config, EoxPolicy, DEFAULT_SYSEX_MAX_PAYLOAD};
pub use decoder::{DecodeEvent, Feed, StreamDecoder};
pub use encoder::{encode, encode_into, EncodedBytes};
pub use error::{DecodeError, EncodeError, Severity};
pub use message::{
    Category, ChannelModeKind, ChannelVoiceMsg, ManufacturerId, Message, MessageKind, SysEx,
    SystemCommonMsg, SystemRealtimeMsg,
};
pub use names::{note_name, IdGroup, IdRegion};
pub use timing::{Clock, ManualClock, MonotonicClock, Stamper, TimestampedMessage};
