//! Test helpers and fixtures for midiprobe integration tests

#![allow(dead_code)]

#[cfg(feature = "io")]
use midiprobe::{ManualClock, MessageKind, Probe, ProbeEvent};

/// Install a test-writer subscriber once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

/// Probe on a manual clock, with history.
#[cfg(feature = "io")]
pub fn test_probe() -> (Probe, ManualClock) {
    let clock = ManualClock::new();
    let probe = Probe::builder()
        .clock(clock.clone())
        .history(256)
        .build()
        .expect("Failed to create test probe");
    (probe, clock)
}

#[cfg(feature = "io")]
pub fn labels(events: &[ProbeEvent]) -> Vec<MessageKind> {
    events
        .iter()
        .filter_map(|e| e.message())
        .map(|m| m.message.annotation.label)
        .collect()
}

/// A short realistic capture: a chord with running status, a clock tick in
/// the middle of a note, a bank select with program change, a GM System On.
pub const CAPTURE: &[u8] = &[
    0x90, 60, 100, 64, 100, 67, 100, // chord
    0xB0, 0x00, 0x00, 0x20, 0x01, // bank select MSB/LSB
    0xC0, 0x05, // program
    0x90, 72, 0xF8, 80, // note with clock tick inside
    0x80, 60, 0, 64, 0, 67, 0, // release
    0xF0, 0x7E, 0x7F, 0x09, 0x01, 0xF7, // GM System On
];
