//! Input stream handle: decode, classify, stamp, publish.

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace, warn};

use midiprobe_core::{
    Classifier, Clock, Config, DecodeError, DecodeEvent, Message, Stamper, StreamDecoder,
};

use crate::error::{Error, Result};
use crate::event::{ProbeEvent, ProbeEventKind, StreamId};
use crate::system::{ProbeInner, StreamCounters};

/// One byte source attached to a [`Probe`](crate::Probe).
///
/// The handle owns the stream's decoder, classifier and stamper, so a stream
/// is fed from a single thread at a time. Different streams can be fed
/// concurrently; their events meet in the probe's queue.
pub struct InputStream {
    id: StreamId,
    name: Arc<str>,
    probe: Arc<ProbeInner>,
    decoder: StreamDecoder,
    classifier: Classifier,
    stamper: Stamper<Arc<dyn Clock>>,
    /// Clock reading at the first byte of the message being collected.
    started_at: Option<Duration>,
    config: Config,
    counters: Arc<StreamCounters>,
    closed: bool,
}

impl InputStream {
    pub(crate) fn new(
        id: StreamId,
        name: Arc<str>,
        probe: Arc<ProbeInner>,
        counters: Arc<StreamCounters>,
    ) -> Self {
        let config = **probe.config.load();
        let stamper = Stamper::new(Arc::clone(&probe.clock));
        Self {
            id,
            name,
            probe,
            decoder: StreamDecoder::new(config),
            classifier: Classifier::new(config),
            stamper,
            started_at: None,
            config,
            counters,
            closed: false,
        }
    }

    pub fn id(&self) -> StreamId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Consume one byte as it arrived from the transport.
    ///
    /// `hardware_time` is the transport's own timestamp for this byte, if it
    /// has one.
    pub fn feed(&mut self, byte: u8, hardware_time: Option<Duration>) -> Result<()> {
        if self.closed {
            return Err(Error::StreamClosed);
        }
        self.sync_config();

        let now = self.stamper.now();
        let is_status = byte >= 0x80;
        let is_realtime = byte >= 0xF8;
        if !is_status && self.started_at.is_none() {
            self.started_at = Some(now);
        }

        let mut completed = false;
        for event in self.decoder.feed(byte) {
            match event {
                DecodeEvent::Message(message) => {
                    let at = if message.is_realtime() {
                        now
                    } else if !is_status || matches!(message, Message::SystemExclusive(_)) {
                        completed = true;
                        self.started_at.unwrap_or(now)
                    } else {
                        completed = true;
                        now
                    };
                    self.publish_message(message, at, hardware_time);
                }
                DecodeEvent::Error(error) => self.publish_error(error, now, hardware_time),
            }
        }

        if is_realtime {
            return Ok(());
        }
        if is_status && !self.decoder.is_idle() {
            self.started_at = Some(now);
        } else if completed || self.decoder.is_idle() {
            self.started_at = None;
        }
        Ok(())
    }

    /// Consume a chunk, all bytes sharing one hardware timestamp.
    pub fn feed_slice(&mut self, bytes: &[u8], hardware_time: Option<Duration>) -> Result<()> {
        for &byte in bytes {
            self.feed(byte, hardware_time)?;
        }
        Ok(())
    }

    /// Forget partial messages, running status and parameter selections,
    /// e.g. after the transport reconnects.
    pub fn resync(&mut self) {
        self.decoder.reset();
        self.classifier.reset();
        self.stamper.reset();
        self.started_at = None;
        debug!("Resynchronized MIDI input stream {}: {}", self.id, self.name);
    }

    /// Detach from the probe. Further feeds return [`Error::StreamClosed`].
    pub fn close(&mut self) {
        if !self.closed {
            self.closed = true;
            self.probe.unregister(self.id);
        }
    }

    fn sync_config(&mut self) {
        let config = **self.probe.config.load();
        if config != self.config {
            self.decoder.set_config(config);
            self.classifier.set_config(config);
            self.config = config;
        }
    }

    fn publish_message(&mut self, message: Message, at: Duration, hardware_time: Option<Duration>) {
        let annotated = self.classifier.classify(&message);
        trace!("{} {}: {}", self.id, self.name, message);
        let stamped = self.stamper.stamp_at(annotated, at, hardware_time);
        self.counters.messages.fetch_add(1, Ordering::Relaxed);
        self.probe.publish(ProbeEvent {
            stream: self.id,
            source: Arc::clone(&self.name),
            kind: ProbeEventKind::Message(stamped),
        });
    }

    fn publish_error(&mut self, error: DecodeError, at: Duration, hardware_time: Option<Duration>) {
        warn!("{} {}: {}", self.id, self.name, error);
        self.counters.errors.fetch_add(1, Ordering::Relaxed);
        self.probe.publish(ProbeEvent {
            stream: self.id,
            source: Arc::clone(&self.name),
            kind: ProbeEventKind::Error {
                error,
                system_time: at,
                hardware_time,
            },
        });
    }
}

impl Drop for InputStream {
    fn drop(&mut self) {
        self.close();
    }
}
