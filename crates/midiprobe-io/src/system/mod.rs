//! Probe: the shared context that input streams publish into.
//!
//! ## Quick Start
//!
//! ```
//! use midiprobe_io::Probe;
//!
//! let probe = Probe::builder().history(256).build()?;
//! let mut stream = probe.open_stream("Keyboard")?;
//!
//! // Transport callback: hand over bytes as they arrive.
//! stream.feed_slice(&[0x90, 60, 100], None)?;
//!
//! let event = probe.events().try_recv().unwrap();
//! assert_eq!(event.source.as_ref(), "Keyboard");
//! assert!(event.message().is_some());
//! # Ok::<(), midiprobe_io::Error>(())
//! ```

mod builder;

pub use builder::{ProbeBuilder, DEFAULT_QUEUE_CAPACITY};

use arc_swap::ArcSwap;
use crossbeam_channel::{Receiver, Sender, TrySendError};
use dashmap::DashMap;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use midiprobe_core::{Clock, Config};

use crate::error::{Error, Result};
use crate::event::{ProbeEvent, StreamId};
use crate::history::History;
use crate::stream::InputStream;

pub type SubscriptionId = u64;

type Subscriber = Arc<dyn Fn(&ProbeEvent) + Send + Sync>;

/// Per-stream counters, shared between the stream handle and the registry.
#[derive(Debug, Default)]
pub(crate) struct StreamCounters {
    pub(crate) messages: AtomicU64,
    pub(crate) errors: AtomicU64,
}

struct StreamEntry {
    name: Arc<str>,
    opened_at: Duration,
    counters: Arc<StreamCounters>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamInfo {
    pub id: StreamId,
    pub name: String,
    pub opened_at: Duration,
    pub messages: u64,
    pub errors: u64,
}

/// Stream probe context. Clone is cheap (Arc internally).
#[derive(Clone)]
pub struct Probe {
    pub(crate) inner: Arc<ProbeInner>,
}

pub(crate) struct ProbeInner {
    pub(crate) config: ArcSwap<Config>,
    pub(crate) clock: Arc<dyn Clock>,
    streams: DashMap<StreamId, StreamEntry>,
    next_stream_id: AtomicU64,
    sender: Sender<ProbeEvent>,
    receiver: Receiver<ProbeEvent>,
    subscribers: RwLock<Vec<(SubscriptionId, Subscriber)>>,
    next_subscription_id: AtomicU64,
    history: Option<History>,
    dropped_events: AtomicU64,
}

pub(crate) fn validate_config(config: &Config) -> Result<()> {
    if config.sysex_max_payload_bytes == 0 {
        return Err(Error::InvalidConfig(
            "sysex_max_payload_bytes must be at least 1".to_string(),
        ));
    }
    Ok(())
}

impl ProbeInner {
    /// Hand an event to every sink: history, subscribers, then the queue.
    pub(crate) fn publish(&self, event: ProbeEvent) {
        if let Some(history) = &self.history {
            history.push(event.clone());
        }
        // Callbacks run without the lock held so they may subscribe or unsubscribe.
        let subscribers: Vec<Subscriber> = self
            .subscribers
            .read()
            .iter()
            .map(|(_, subscriber)| Arc::clone(subscriber))
            .collect();
        for subscriber in &subscribers {
            subscriber(&event);
        }
        match self.sender.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                self.dropped_events.fetch_add(1, Ordering::Relaxed);
                debug!("Event queue full, dropped event from stream {}", event.stream);
            }
            // The probe owns a receiver, so the channel cannot disconnect.
            Err(TrySendError::Disconnected(_)) => {}
        }
    }

    pub(crate) fn unregister(&self, id: StreamId) {
        if let Some((_, entry)) = self.streams.remove(&id) {
            debug!("Closed MIDI input stream {}: {}", id, entry.name);
        }
    }
}

impl Probe {
    pub fn builder() -> ProbeBuilder {
        ProbeBuilder::default()
    }

    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    // ==================== Configuration ====================

    pub fn config(&self) -> Config {
        **self.inner.config.load()
    }

    /// Replace the configuration. Streams pick it up on their next byte.
    pub fn update_config(&self, config: Config) -> Result<()> {
        validate_config(&config)?;
        self.inner.config.store(Arc::new(config));
        debug!("Updated probe configuration: {:?}", config);
        Ok(())
    }

    /// Time on the probe's clock.
    pub fn now(&self) -> Duration {
        self.inner.clock.now()
    }

    // ==================== Streams ====================

    /// Open a new input stream. The returned handle owns the stream's
    /// decoder state; feed it from one place only.
    pub fn open_stream(&self, name: impl Into<String>) -> Result<InputStream> {
        let name: Arc<str> = Arc::from(name.into());
        let id = StreamId(self.inner.next_stream_id.fetch_add(1, Ordering::Relaxed));
        let counters = Arc::new(StreamCounters::default());
        self.inner.streams.insert(
            id,
            StreamEntry {
                name: Arc::clone(&name),
                opened_at: self.now(),
                counters: Arc::clone(&counters),
            },
        );
        debug!("Created MIDI input stream {}: {}", id, name);
        Ok(InputStream::new(
            id,
            name,
            Arc::clone(&self.inner),
            counters,
        ))
    }

    /// Open streams, ordered by id.
    pub fn streams(&self) -> Vec<StreamInfo> {
        let mut streams: Vec<StreamInfo> = self
            .inner
            .streams
            .iter()
            .map(|entry| StreamInfo {
                id: *entry.key(),
                name: entry.value().name.to_string(),
                opened_at: entry.value().opened_at,
                messages: entry.value().counters.messages.load(Ordering::Relaxed),
                errors: entry.value().counters.errors.load(Ordering::Relaxed),
            })
            .collect();
        streams.sort_by_key(|info| info.id);
        streams
    }

    pub fn stream_info(&self, id: StreamId) -> Option<StreamInfo> {
        self.inner.streams.get(&id).map(|entry| StreamInfo {
            id,
            name: entry.name.to_string(),
            opened_at: entry.opened_at,
            messages: entry.counters.messages.load(Ordering::Relaxed),
            errors: entry.counters.errors.load(Ordering::Relaxed),
        })
    }

    // ==================== Event Delivery ====================

    /// Merged queue of every stream's events.
    pub fn events(&self) -> Receiver<ProbeEvent> {
        self.inner.receiver.clone()
    }

    /// Everything currently queued.
    pub fn drain_events(&self) -> Vec<ProbeEvent> {
        self.inner.receiver.try_iter().collect()
    }

    /// Call `callback` for every event, on the feeding thread.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&ProbeEvent) + Send + Sync + 'static,
    {
        let id = self
            .inner
            .next_subscription_id
            .fetch_add(1, Ordering::Relaxed);
        self.inner.subscribers.write().push((id, Arc::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.inner.subscribers.write();
        let before = subscribers.len();
        subscribers.retain(|(sub_id, _)| *sub_id != id);
        subscribers.len() != before
    }

    pub fn history(&self) -> Option<&History> {
        self.inner.history.as_ref()
    }

    /// Events dropped because the queue was full.
    pub fn dropped_events(&self) -> u64 {
        self.inner.dropped_events.load(Ordering::Relaxed)
    }
}
