//! Stream context for the MIDI probe.
//!
//! Attaches any number of byte sources to a shared [`Probe`], which decodes,
//! classifies and timestamps each stream independently and merges the
//! results for consumers.
//!
//! - **Delivery**: pull queue ([`Probe::events`]), push callbacks
//!   ([`Probe::subscribe`]) and optional bounded [`History`]
//! - **Output**: [`Generator`] validates and encodes messages for any [`Transport`]
//! - **Formatting**: hexadecimal, decimal and binary byte renderings
//!
//! Transports are out of scope: a platform MIDI callback or a polling loop
//! both just call [`InputStream::feed`].

pub mod error;
pub use error::{Error, Result};

mod system;
pub use system::{Probe, ProbeBuilder, StreamInfo, SubscriptionId, DEFAULT_QUEUE_CAPACITY};

mod event;
pub use event::{ProbeEvent, ProbeEventKind, StreamId};

mod history;
pub use history::History;

mod stream;
pub use stream::InputStream;

pub mod output;
pub use output::{ChannelTransport, Generator, Transport};

pub mod format;

pub use midiprobe_core::{
    AnnotatedMessage, Annotation, Config, DecodeError, EoxPolicy, Message, MessageKind,
    TimestampedMessage,
};
