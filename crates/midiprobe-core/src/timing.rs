//! Timestamp capture.
//!
//! System time is read from a monotonic [`Clock`] and measured from the
//! clock's own epoch. Hardware timestamps supplied by a transport are kept
//! verbatim; no drift correction is attempted.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::message::Message;

/// Monotonic time source.
pub trait Clock: Send + Sync {
    /// Time elapsed since the clock's epoch.
    fn now(&self) -> Duration;
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    #[inline]
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// [`Instant`]-backed clock whose epoch is its creation.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn origin(&self) -> Instant {
        self.origin
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    #[inline]
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    nanos: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, time: Duration) {
        self.nanos.store(time.as_nanos() as u64, Ordering::Release);
    }

    pub fn advance(&self, by: Duration) {
        self.nanos.fetch_add(by.as_nanos() as u64, Ordering::AcqRel);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_nanos(self.nanos.load(Ordering::Acquire))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampedMessage<T = Message> {
    pub message: T,
    /// Since the stamper's clock epoch.
    pub system_time: Duration,
    /// Transport-supplied timestamp, if any.
    pub hardware_time: Option<Duration>,
    /// Since the previous message stamped by the same stamper.
    pub delta: Duration,
}

impl<T> TimestampedMessage<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> TimestampedMessage<U> {
        TimestampedMessage {
            message: f(self.message),
            system_time: self.system_time,
            hardware_time: self.hardware_time,
            delta: self.delta,
        }
    }
}

/// Stamps the messages of one stream.
#[derive(Debug, Clone)]
pub struct Stamper<C: Clock = MonotonicClock> {
    clock: C,
    previous: Option<(Duration, Option<Duration>)>,
}

impl Default for Stamper<MonotonicClock> {
    fn default() -> Self {
        Self::new(MonotonicClock::new())
    }
}

impl<C: Clock> Stamper<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            previous: None,
        }
    }

    #[inline]
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Stamp with the current clock reading.
    pub fn stamp<T>(&mut self, message: T, hardware_time: Option<Duration>) -> TimestampedMessage<T> {
        let system_time = self.clock.now();
        self.stamp_at(message, system_time, hardware_time)
    }

    /// Stamp with a reading taken earlier, e.g. when the message's first byte
    /// arrived.
    pub fn stamp_at<T>(
        &mut self,
        message: T,
        system_time: Duration,
        hardware_time: Option<Duration>,
    ) -> TimestampedMessage<T> {
        let delta = match (self.previous, hardware_time) {
            (Some((_, Some(prev_hw))), Some(hw)) => hw.saturating_sub(prev_hw),
            (Some((prev_sys, _)), _) => system_time.saturating_sub(prev_sys),
            (None, _) => Duration::ZERO,
        };
        self.previous = Some((system_time, hardware_time));
        TimestampedMessage {
            message,
            system_time,
            hardware_time,
            delta,
        }
    }

    /// Next message gets a zero delta.
    pub fn reset(&mut self) {
        self.previous = None;
    }
}
