//! Probe builder.

use arc_swap::ArcSwap;
use crossbeam_channel::bounded;
use dashmap::DashMap;
use parking_lot::RwLock;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;

use midiprobe_core::{Clock, Config, MonotonicClock};

use crate::error::{Error, Result};
use crate::history::History;

use super::{validate_config, Probe, ProbeInner};

pub const DEFAULT_QUEUE_CAPACITY: usize = 4096;

pub struct ProbeBuilder {
    pub(super) config: Config,
    pub(super) history_capacity: Option<usize>,
    pub(super) queue_capacity: usize,
    pub(super) clock: Option<Arc<dyn Clock>>,
}

impl Default for ProbeBuilder {
    fn default() -> Self {
        Self {
            config: Config::default(),
            history_capacity: None,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            clock: None,
        }
    }
}

impl ProbeBuilder {
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Keep the last `capacity` events.
    pub fn history(mut self, capacity: usize) -> Self {
        self.history_capacity = Some(capacity);
        self
    }

    /// Bound of the merged event queue. Events that do not fit are dropped.
    pub fn queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    /// Time source shared by every stream. Defaults to a [`MonotonicClock`]
    /// started at build time.
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    pub fn build(self) -> Result<Probe> {
        validate_config(&self.config)?;
        if self.queue_capacity == 0 {
            return Err(Error::InvalidConfig(
                "queue capacity must be at least 1".to_string(),
            ));
        }
        let history = match self.history_capacity {
            Some(0) => {
                return Err(Error::InvalidConfig(
                    "history capacity must be at least 1".to_string(),
                ))
            }
            Some(capacity) => Some(History::new(capacity)),
            None => None,
        };

        let clock = self
            .clock
            .unwrap_or_else(|| Arc::new(MonotonicClock::new()));
        let (sender, receiver) = bounded(self.queue_capacity);

        Ok(Probe {
            inner: Arc::new(ProbeInner {
                config: ArcSwap::from_pointee(self.config),
                clock,
                streams: DashMap::new(),
                next_stream_id: AtomicU64::new(1),
                sender,
                receiver,
                subscribers: RwLock::new(Vec::new()),
                next_subscription_id: AtomicU64::new(1),
                history,
                dropped_events: AtomicU64::new(0),
            }),
        })
    }
}
