//! Streaming byte decoder.
//!
//! [`StreamDecoder`] consumes one byte at a time and keeps enough state to
//! handle running status, realtime bytes interleaved anywhere (including in
//! the middle of a message or a System Exclusive dump), unbounded SysEx
//! payloads and malformed input. It never loses sync: every anomaly is
//! reported as a [`DecodeError`] and decoding carries on from the next byte.
//!
//! ```
//! use midiprobe_core::{DecodeEvent, Message, StreamDecoder};
//!
//! let mut decoder = StreamDecoder::default();
//! // Note On, then a second one using running status.
//! let events = decoder.decode(&[0x90, 60, 100, 62, 100]);
//! assert_eq!(
//!     events,
//!     vec![
//!         DecodeEvent::Message(Message::note_on(0, 60, 100)),
//!         DecodeEvent::Message(Message::note_on(0, 62, 100)),
//!     ]
//! );
//! ```

use smallvec::SmallVec;
use tracing::debug;

use crate::config::{Config, EoxPolicy};
use crate::error::DecodeError;
use crate::message::{
    channel_data_len, combine_14bit, system_common_data_len, ChannelModeKind, ChannelVoiceMsg,
    Message, SysEx, SystemCommonMsg, SystemRealtimeMsg, CHANNEL_PRESSURE, CONTROL_CHANGE, EOX,
    NOTE_OFF, NOTE_ON, PITCH_BEND, POLY_PRESSURE, PROGRAM_CHANGE, SONG_POSITION_POINTER,
    SYSEX_START, TIME_CODE_QUARTER_FRAME,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeEvent {
    Message(Message),
    Error(DecodeError),
}

impl DecodeEvent {
    pub fn message(&self) -> Option<&Message> {
        match self {
            DecodeEvent::Message(msg) => Some(msg),
            DecodeEvent::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&DecodeError> {
        match self {
            DecodeEvent::Error(err) => Some(err),
            DecodeEvent::Message(_) => None,
        }
    }
}

/// Output of a single [`StreamDecoder::feed`] call, in order.
pub type Feed = SmallVec<[DecodeEvent; 2]>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Idle,
    AwaitingData {
        status: u8,
        needed: u8,
        data: [u8; 2],
        collected: u8,
    },
    /// Every data byte since `0xF0`, manufacturer ID included.
    InSysEx { raw: Vec<u8> },
    DiscardingSysEx,
}

#[derive(Debug, Clone)]
pub struct StreamDecoder {
    config: Config,
    state: State,
    running_status: Option<u8>,
}

impl Default for StreamDecoder {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl StreamDecoder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: State::Idle,
            running_status: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Takes effect from the next byte. A SysEx already being collected is
    /// checked against the new limit.
    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    /// `true` when no message is partially collected.
    pub fn is_idle(&self) -> bool {
        self.state == State::Idle
    }

    pub fn running_status(&self) -> Option<u8> {
        self.running_status
    }

    /// Drop any partial message and the running status.
    pub fn reset(&mut self) {
        self.state = State::Idle;
        self.running_status = None;
    }

    /// Decode a whole chunk.
    pub fn decode(&mut self, bytes: &[u8]) -> Vec<DecodeEvent> {
        let mut events = Vec::with_capacity(bytes.len() / 2 + 1);
        for &byte in bytes {
            events.extend(self.feed(byte));
        }
        events
    }

    /// Consume one byte.
    pub fn feed(&mut self, byte: u8) -> Feed {
        let mut out = Feed::new();
        match byte {
            0xF8..=0xFF => self.feed_realtime(byte, &mut out),
            0x80..=0xF7 => self.feed_status(byte, &mut out),
            _ => self.feed_data(byte, &mut out),
        }
        out
    }

    fn feed_realtime(&mut self, byte: u8, out: &mut Feed) {
        match SystemRealtimeMsg::from_status(byte) {
            Some(msg) => out.push(DecodeEvent::Message(Message::SystemRealtime(msg))),
            None => out.push(DecodeEvent::Error(DecodeError::UndefinedStatus(byte))),
        }
    }

    fn feed_status(&mut self, status: u8, out: &mut Feed) {
        match std::mem::replace(&mut self.state, State::Idle) {
            State::DiscardingSysEx if status == EOX => return,
            State::Idle | State::DiscardingSysEx => {}
            State::InSysEx { raw } => {
                if status == EOX {
                    out.push(DecodeEvent::Message(Message::SystemExclusive(
                        SysEx::from_raw(&raw, true),
                    )));
                    return;
                }
                out.push(DecodeEvent::Error(DecodeError::ImplicitSysExTermination {
                    status,
                }));
                out.push(DecodeEvent::Message(Message::SystemExclusive(
                    SysEx::from_raw(&raw, false),
                )));
            }
            State::AwaitingData {
                status: pending,
                needed,
                collected,
                ..
            } => {
                out.push(DecodeEvent::Error(DecodeError::IncompleteMessage {
                    status: pending,
                    expected: needed,
                    received: collected,
                }));
            }
        }

        match status {
            SYSEX_START => {
                self.running_status = None;
                self.state = State::InSysEx { raw: Vec::new() };
            }
            EOX => {
                self.running_status = None;
                out.push(DecodeEvent::Error(DecodeError::UnmatchedEox));
                if self.config.unmatched_eox == EoxPolicy::EmptySysEx {
                    out.push(DecodeEvent::Message(Message::SystemExclusive(SysEx {
                        manufacturer_id: None,
                        payload: Vec::new(),
                        terminated: true,
                    })));
                }
            }
            0xF1..=0xF6 => {
                self.running_status = None;
                match system_common_data_len(status) {
                    Some(0) => out.push(DecodeEvent::Message(Message::SystemCommon(
                        SystemCommonMsg::TuneRequest,
                    ))),
                    Some(needed) => self.await_data(status, needed),
                    None => out.push(DecodeEvent::Error(DecodeError::UndefinedStatus(status))),
                }
            }
            _ => {
                self.running_status = Some(status);
                self.await_data(status, channel_data_len(status));
            }
        }
    }

    fn await_data(&mut self, status: u8, needed: u8) {
        self.state = State::AwaitingData {
            status,
            needed,
            data: [0; 2],
            collected: 0,
        };
    }

    fn feed_data(&mut self, byte: u8, out: &mut Feed) {
        match &mut self.state {
            State::InSysEx { raw } => {
                raw.push(byte);
                let limit = self.config.sysex_max_payload_bytes;
                if sysex_payload_len(raw) > limit {
                    debug!("SysEx payload over {} bytes, discarding until EOX", limit);
                    self.state = State::DiscardingSysEx;
                    out.push(DecodeEvent::Error(DecodeError::SysExTooLarge { limit }));
                }
            }
            State::DiscardingSysEx => {}
            State::AwaitingData {
                status,
                needed,
                data,
                collected,
            } => {
                data[usize::from(*collected)] = byte;
                *collected += 1;
                if *collected == *needed {
                    let msg = assemble(*status, *data);
                    self.state = State::Idle;
                    out.push(DecodeEvent::Message(msg));
                }
            }
            State::Idle => match self.running_status {
                Some(status) if channel_data_len(status) == 1 => {
                    out.push(DecodeEvent::Message(assemble(status, [byte, 0])));
                }
                Some(status) => {
                    self.state = State::AwaitingData {
                        status,
                        needed: 2,
                        data: [byte, 0],
                        collected: 1,
                    };
                }
                None => out.push(DecodeEvent::Error(DecodeError::OrphanDataByte(byte))),
            },
        }
    }
}

/// Payload length of a partial SysEx, manufacturer ID excluded.
fn sysex_payload_len(raw: &[u8]) -> usize {
    let id_len = match raw.first() {
        Some(0x00) => 3,
        Some(_) => 1,
        None => 0,
    };
    raw.len().saturating_sub(id_len)
}

/// Build a message from a status byte and its complete data.
fn assemble(status: u8, data: [u8; 2]) -> Message {
    let [d0, d1] = data;
    let channel = status & 0x0F;
    let msg = match status & 0xF0 {
        NOTE_OFF => ChannelVoiceMsg::NoteOff {
            note: d0,
            velocity: d1,
        },
        NOTE_ON => ChannelVoiceMsg::NoteOn {
            note: d0,
            velocity: d1,
        },
        POLY_PRESSURE => ChannelVoiceMsg::PolyPressure {
            note: d0,
            pressure: d1,
        },
        CONTROL_CHANGE => match ChannelModeKind::from_controller(d0) {
            Some(kind) => {
                return Message::ChannelMode {
                    channel,
                    kind,
                    value: d1,
                }
            }
            None => ChannelVoiceMsg::ControlChange {
                controller: d0,
                value: d1,
            },
        },
        PROGRAM_CHANGE => ChannelVoiceMsg::ProgramChange { program: d0 },
        CHANNEL_PRESSURE => ChannelVoiceMsg::ChannelPressure { pressure: d0 },
        PITCH_BEND => ChannelVoiceMsg::PitchBend {
            value: combine_14bit(d0, d1),
        },
        _ => {
            return Message::SystemCommon(match status {
                TIME_CODE_QUARTER_FRAME => SystemCommonMsg::TimeCodeQuarterFrame {
                    message_type: (d0 >> 4) & 0x07,
                    value: d0 & 0x0F,
                },
                SONG_POSITION_POINTER => SystemCommonMsg::SongPositionPointer {
                    position: combine_14bit(d0, d1),
                },
                // F3
                _ => SystemCommonMsg::SongSelect { song: d0 },
            })
        }
    };
    Message::ChannelVoice { channel, msg }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode;
    use crate::message::ManufacturerId;

    fn messages(events: &[DecodeEvent]) -> Vec<Message> {
        events.iter().filter_map(|e| e.message().cloned()).collect()
    }

    fn errors(events: &[DecodeEvent]) -> Vec<DecodeError> {
        events.iter().filter_map(|e| e.error().copied()).collect()
    }

    #[test]
    fn test_parse_note_on() {
        let mut decoder = StreamDecoder::default();
        assert!(decoder.feed(0x93).is_empty());
        assert!(decoder.feed(60).is_empty());
        assert!(!decoder.is_idle());
        let out = decoder.feed(100);
        assert_eq!(out.as_slice(), &[DecodeEvent::Message(Message::note_on(3, 60, 100))]);
        assert!(decoder.is_idle());
        assert_eq!(decoder.running_status(), Some(0x93));
    }

    #[test]
    fn test_running_status() {
        let mut decoder = StreamDecoder::default();
        let events = decoder.decode(&[0x90, 60, 100, 62, 100, 64, 0]);
        assert_eq!(
            messages(&events),
            vec![
                Message::note_on(0, 60, 100),
                Message::note_on(0, 62, 100),
                Message::note_on(0, 64, 0),
            ]
        );
    }

    #[test]
    fn test_running_status_single_data_byte() {
        let mut decoder = StreamDecoder::default();
        let events = decoder.decode(&[0xC2, 5, 6, 7]);
        assert_eq!(
            messages(&events),
            vec![
                Message::program_change(2, 5),
                Message::program_change(2, 6),
                Message::program_change(2, 7),
            ]
        );
        assert!(decoder.is_idle());
    }

    #[test]
    fn test_realtime_interleaving() {
        let mut decoder = StreamDecoder::default();
        let events = decoder.decode(&[0x90, 0xF8, 60, 0xF8, 100]);
        assert_eq!(
            messages(&events),
            vec![
                Message::realtime(SystemRealtimeMsg::Clock),
                Message::realtime(SystemRealtimeMsg::Clock),
                Message::note_on(0, 60, 100),
            ]
        );
        assert!(errors(&events).is_empty());
    }

    #[test]
    fn test_realtime_inside_sysex() {
        let mut decoder = StreamDecoder::default();
        let events = decoder.decode(&[0xF0, 0x43, 0x01, 0xFE, 0x02, 0xF7]);
        assert_eq!(
            messages(&events),
            vec![
                Message::realtime(SystemRealtimeMsg::ActiveSensing),
                Message::sysex(ManufacturerId::Short(0x43), vec![0x01, 0x02]),
            ]
        );
    }

    #[test]
    fn test_realtime_keeps_running_status() {
        let mut decoder = StreamDecoder::default();
        decoder.decode(&[0xB0, 7, 100]);
        decoder.feed(0xFA);
        assert_eq!(decoder.running_status(), Some(0xB0));
        let out = decoder.decode(&[7, 50]);
        assert_eq!(messages(&out), vec![Message::control_change(0, 7, 50)]);
    }

    #[test]
    fn test_undefined_realtime() {
        let mut decoder = StreamDecoder::default();
        decoder.decode(&[0x90, 60]);
        let out = decoder.feed(0xF9);
        assert_eq!(out.as_slice(), &[DecodeEvent::Error(DecodeError::UndefinedStatus(0xF9))]);
        // State untouched.
        let out = decoder.feed(100);
        assert_eq!(messages(&out), vec![Message::note_on(0, 60, 100)]);
    }

    #[test]
    fn test_sysex_terminated() {
        let mut decoder = StreamDecoder::default();
        let events = decoder.decode(&[0xF0, 0x7E, 0x7F, 0x06, 0x01, 0xF7]);
        assert_eq!(
            events,
            vec![DecodeEvent::Message(Message::sysex(
                ManufacturerId::UNIVERSAL_NON_REALTIME,
                vec![0x7F, 0x06, 0x01]
            ))]
        );
    }

    #[test]
    fn test_sysex_extended_id() {
        let mut decoder = StreamDecoder::default();
        let events = decoder.decode(&[0xF0, 0x00, 0x20, 0x29, 0x02, 0xF7]);
        assert_eq!(
            messages(&events),
            vec![Message::sysex(ManufacturerId::Extended(0x20, 0x29), vec![0x02])]
        );
    }

    #[test]
    fn test_sysex_implicit_termination() {
        let mut decoder = StreamDecoder::default();
        let events = decoder.decode(&[0xF0, 0x43, 0x01, 0x02, 0x90, 60, 100]);
        assert_eq!(
            events,
            vec![
                DecodeEvent::Error(DecodeError::ImplicitSysExTermination { status: 0x90 }),
                DecodeEvent::Message(Message::SystemExclusive(SysEx {
                    manufacturer_id: Some(ManufacturerId::Short(0x43)),
                    payload: vec![0x01, 0x02],
                    terminated: false,
                })),
                DecodeEvent::Message(Message::note_on(0, 60, 100)),
            ]
        );
    }

    #[test]
    fn test_sysex_terminated_by_tune_request() {
        let mut decoder = StreamDecoder::default();
        decoder.decode(&[0xF0, 0x41]);
        let out = decoder.feed(0xF6);
        assert_eq!(
            out.as_slice(),
            &[
                DecodeEvent::Error(DecodeError::ImplicitSysExTermination { status: 0xF6 }),
                DecodeEvent::Message(Message::SystemExclusive(SysEx::from_raw(&[0x41], false))),
                DecodeEvent::Message(Message::SystemCommon(SystemCommonMsg::TuneRequest)),
            ]
        );
        assert_eq!(out.iter().filter(|e| e.message().is_some()).count(), 2);
    }

    #[test]
    fn test_sysex_truncated_id() {
        let mut decoder = StreamDecoder::default();
        let events = decoder.decode(&[0xF0, 0x00, 0x20, 0xF7]);
        assert_eq!(
            messages(&events),
            vec![Message::SystemExclusive(SysEx {
                manufacturer_id: None,
                payload: vec![0x00, 0x20],
                terminated: true,
            })]
        );
    }

    #[test]
    fn test_sysex_clears_running_status() {
        let mut decoder = StreamDecoder::default();
        decoder.decode(&[0x90, 60, 100, 0xF0, 0x43, 0xF7]);
        assert_eq!(decoder.running_status(), None);
        let out = decoder.feed(60);
        assert_eq!(out.as_slice(), &[DecodeEvent::Error(DecodeError::OrphanDataByte(60))]);
    }

    #[test]
    fn test_orphan_data_byte() {
        let mut decoder = StreamDecoder::default();
        let events = decoder.decode(&[0x3C, 0x90, 60, 100]);
        assert_eq!(
            events,
            vec![
                DecodeEvent::Error(DecodeError::OrphanDataByte(0x3C)),
                DecodeEvent::Message(Message::note_on(0, 60, 100)),
            ]
        );
    }

    #[test]
    fn test_unmatched_eox_report() {
        let mut decoder = StreamDecoder::default();
        let events = decoder.decode(&[0xF7]);
        assert_eq!(events, vec![DecodeEvent::Error(DecodeError::UnmatchedEox)]);
        assert_eq!(DecodeError::UnmatchedEox.severity(), crate::Severity::Warning);
    }

    #[test]
    fn test_unmatched_eox_empty_sysex() {
        let config = Config::default().unmatched_eox(EoxPolicy::EmptySysEx);
        let mut decoder = StreamDecoder::new(config);
        let events = decoder.decode(&[0x90, 60, 100, 0xF7, 62]);
        assert_eq!(
            events,
            vec![
                DecodeEvent::Message(Message::note_on(0, 60, 100)),
                DecodeEvent::Error(DecodeError::UnmatchedEox),
                DecodeEvent::Message(Message::SystemExclusive(SysEx {
                    manufacturer_id: None,
                    payload: vec![],
                    terminated: true,
                })),
                DecodeEvent::Error(DecodeError::OrphanDataByte(62)),
            ]
        );
    }

    #[test]
    fn test_incomplete_message() {
        let mut decoder = StreamDecoder::default();
        let events = decoder.decode(&[0x90, 60, 0x80, 60, 0]);
        assert_eq!(
            events,
            vec![
                DecodeEvent::Error(DecodeError::IncompleteMessage {
                    status: 0x90,
                    expected: 2,
                    received: 1,
                }),
                DecodeEvent::Message(Message::note_off(0, 60, 0)),
            ]
        );
    }

    #[test]
    fn test_undefined_system_common() {
        let mut decoder = StreamDecoder::default();
        decoder.decode(&[0x90, 60, 100]);
        let out = decoder.feed(0xF4);
        assert_eq!(out.as_slice(), &[DecodeEvent::Error(DecodeError::UndefinedStatus(0xF4))]);
        assert_eq!(decoder.running_status(), None);
        assert!(decoder.is_idle());
    }

    #[test]
    fn test_system_common() {
        let mut decoder = StreamDecoder::default();
        let events = decoder.decode(&[0xF1, 0x35, 0xF2, 0x10, 0x02, 0xF3, 0x07]);
        assert_eq!(
            messages(&events),
            vec![
                Message::SystemCommon(SystemCommonMsg::TimeCodeQuarterFrame {
                    message_type: 3,
                    value: 5,
                }),
                Message::SystemCommon(SystemCommonMsg::SongPositionPointer { position: 0x110 }),
                Message::SystemCommon(SystemCommonMsg::SongSelect { song: 7 }),
            ]
        );
    }

    #[test]
    fn test_system_common_clears_running_status() {
        let mut decoder = StreamDecoder::default();
        decoder.decode(&[0x90, 60, 100, 0xF3, 1]);
        assert_eq!(decoder.running_status(), None);
    }

    #[test]
    fn test_channel_mode_decoding() {
        let mut decoder = StreamDecoder::default();
        let events = decoder.decode(&[0xB5, 123, 0, 7, 90]);
        assert_eq!(
            messages(&events),
            vec![
                Message::ChannelMode {
                    channel: 5,
                    kind: ChannelModeKind::AllNotesOff,
                    value: 0,
                },
                Message::control_change(5, 7, 90),
            ]
        );
    }

    #[test]
    fn test_pitch_bend_decoding() {
        let mut decoder = StreamDecoder::default();
        let events = decoder.decode(&[0xE0, 0x00, 0x40, 0x7F, 0x7F]);
        assert_eq!(
            messages(&events),
            vec![Message::pitch_bend(0, 8192), Message::pitch_bend(0, 16383)]
        );
    }

    #[test]
    fn test_sysex_cap() {
        let config = Config::default().sysex_max_payload_bytes(4);
        let mut decoder = StreamDecoder::new(config);

        let events = decoder.decode(&[0xF0, 0x43, 1, 2, 3, 4, 0xF7]);
        assert_eq!(
            messages(&events),
            vec![Message::sysex(ManufacturerId::Short(0x43), vec![1, 2, 3, 4])]
        );

        let events = decoder.decode(&[0xF0, 0x43, 1, 2, 3, 4, 5, 6, 7, 0xF7, 0x90, 60, 100]);
        assert_eq!(
            events,
            vec![
                DecodeEvent::Error(DecodeError::SysExTooLarge { limit: 4 }),
                DecodeEvent::Message(Message::note_on(0, 60, 100)),
            ]
        );
        assert!(decoder.is_idle());
    }

    #[test]
    fn test_sysex_cap_extended_id() {
        let config = Config::default().sysex_max_payload_bytes(2);
        let mut decoder = StreamDecoder::new(config);
        let events = decoder.decode(&[0xF0, 0x00, 0x20, 0x29, 1, 2, 0xF7]);
        assert_eq!(
            messages(&events),
            vec![Message::sysex(ManufacturerId::Extended(0x20, 0x29), vec![1, 2])]
        );
    }

    #[test]
    fn test_malformed_sysex_resync() {
        let mut decoder = StreamDecoder::default();
        let events = decoder.decode(&[0xF0, 0x43, 0x12, 0xF0, 0x41, 0x10, 0xF7, 0xC0, 3]);
        assert_eq!(
            messages(&events),
            vec![
                Message::SystemExclusive(SysEx::from_raw(&[0x43, 0x12], false)),
                Message::sysex(ManufacturerId::Short(0x41), vec![0x10]),
                Message::program_change(0, 3),
            ]
        );
        assert_eq!(
            errors(&events),
            vec![DecodeError::ImplicitSysExTermination { status: 0xF0 }]
        );
    }

    #[test]
    fn test_reset() {
        let mut decoder = StreamDecoder::default();
        decoder.decode(&[0x90, 60]);
        decoder.reset();
        assert!(decoder.is_idle());
        assert_eq!(decoder.running_status(), None);
        assert_eq!(
            decoder.feed(100).as_slice(),
            &[DecodeEvent::Error(DecodeError::OrphanDataByte(100))]
        );
    }

    #[test]
    fn test_roundtrip_through_encoder() {
        let originals = vec![
            Message::note_off(1, 10, 20),
            Message::note_on(2, 60, 0),
            Message::poly_pressure(3, 61, 44),
            Message::control_change(4, 64, 127),
            Message::control_change(4, 121, 0),
            Message::program_change(5, 99),
            Message::channel_pressure(6, 12),
            Message::pitch_bend(15, 1234),
            Message::SystemCommon(SystemCommonMsg::SongSelect { song: 3 }),
            Message::SystemCommon(SystemCommonMsg::TuneRequest),
            Message::realtime(SystemRealtimeMsg::Stop),
            Message::sysex(ManufacturerId::Extended(0x00, 0x66), vec![0x01, 0x02, 0x03]),
        ];
        let mut bytes = Vec::new();
        for msg in &originals {
            crate::encoder::encode_into(msg, &mut bytes).unwrap();
        }
        let mut decoder = StreamDecoder::default();
        let events = decoder.decode(&bytes);
        assert!(errors(&events).is_empty());
        assert_eq!(messages(&events), originals);

        for msg in &originals {
            let encoded = encode(msg).unwrap();
            let redecoded = StreamDecoder::default().decode(&encoded);
            assert_eq!(redecoded, vec![DecodeEvent::Message(msg.clone())]);
        }
    }
}
