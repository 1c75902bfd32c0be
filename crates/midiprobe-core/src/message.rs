//! MIDI 1.0 message model.
//!
//! Every message category is a variant of the closed [`Message`] enum, so the
//! decoder, classifier and encoder all match exhaustively over the same set.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::encoder::{self, EncodedBytes};
use crate::error::EncodeError;

pub const NOTE_OFF: u8 = 0x80;
pub const NOTE_ON: u8 = 0x90;
pub const POLY_PRESSURE: u8 = 0xA0;
pub const CONTROL_CHANGE: u8 = 0xB0;
pub const PROGRAM_CHANGE: u8 = 0xC0;
pub const CHANNEL_PRESSURE: u8 = 0xD0;
pub const PITCH_BEND: u8 = 0xE0;

pub const SYSEX_START: u8 = 0xF0;
pub const TIME_CODE_QUARTER_FRAME: u8 = 0xF1;
pub const SONG_POSITION_POINTER: u8 = 0xF2;
pub const SONG_SELECT: u8 = 0xF3;
pub const TUNE_REQUEST: u8 = 0xF6;
pub const EOX: u8 = 0xF7;

/// Largest 7-bit data value.
pub const DATA_MAX: u8 = 0x7F;
/// Largest 14-bit value (Pitch Bend, Song Position Pointer).
pub const VALUE_14BIT_MAX: u16 = 0x3FFF;
/// Pitch Bend value meaning "no bend".
pub const PITCH_BEND_CENTER: u16 = 0x2000;
pub const CHANNEL_MAX: u8 = 0x0F;

/// Number of data bytes following a channel voice/mode status byte.
#[inline]
pub const fn channel_data_len(status: u8) -> u8 {
    match status & 0xF0 {
        PROGRAM_CHANGE | CHANNEL_PRESSURE => 1,
        _ => 2,
    }
}

/// Number of data bytes following a System Common status byte.
///
/// `None` for the undefined `0xF4`/`0xF5` and for bytes that are not System
/// Common at all.
#[inline]
pub const fn system_common_data_len(status: u8) -> Option<u8> {
    match status {
        TIME_CODE_QUARTER_FRAME | SONG_SELECT => Some(1),
        SONG_POSITION_POINTER => Some(2),
        TUNE_REQUEST => Some(0),
        _ => None,
    }
}

/// Combine two 7-bit data bytes into a 14-bit value.
#[inline]
pub fn combine_14bit(lsb: u8, msb: u8) -> u16 {
    u16::from(lsb & DATA_MAX) | (u16::from(msb & DATA_MAX) << 7)
}

/// Split a 14-bit value into `(lsb, msb)`.
#[inline]
pub fn split_14bit(value: u16) -> (u8, u8) {
    ((value & 0x7F) as u8, ((value >> 7) & 0x7F) as u8)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelVoiceMsg {
    NoteOff { note: u8, velocity: u8 },
    NoteOn { note: u8, velocity: u8 },
    PolyPressure { note: u8, pressure: u8 },
    /// Controllers 0-119. 120-127 are [`Message::ChannelMode`].
    ControlChange { controller: u8, value: u8 },
    ProgramChange { program: u8 },
    ChannelPressure { pressure: u8 },
    /// 14-bit, `0x2000` is center.
    PitchBend { value: u16 },
}

impl ChannelVoiceMsg {
    #[inline]
    pub const fn status_nibble(&self) -> u8 {
        match self {
            ChannelVoiceMsg::NoteOff { .. } => NOTE_OFF,
            ChannelVoiceMsg::NoteOn { .. } => NOTE_ON,
            ChannelVoiceMsg::PolyPressure { .. } => POLY_PRESSURE,
            ChannelVoiceMsg::ControlChange { .. } => CONTROL_CHANGE,
            ChannelVoiceMsg::ProgramChange { .. } => PROGRAM_CHANGE,
            ChannelVoiceMsg::ChannelPressure { .. } => CHANNEL_PRESSURE,
            ChannelVoiceMsg::PitchBend { .. } => PITCH_BEND,
        }
    }

    #[inline]
    pub fn note(&self) -> Option<u8> {
        match *self {
            ChannelVoiceMsg::NoteOn { note, .. }
            | ChannelVoiceMsg::NoteOff { note, .. }
            | ChannelVoiceMsg::PolyPressure { note, .. } => Some(note),
            _ => None,
        }
    }

    #[inline]
    pub fn velocity(&self) -> Option<u8> {
        match *self {
            ChannelVoiceMsg::NoteOn { velocity, .. } | ChannelVoiceMsg::NoteOff { velocity, .. } => {
                Some(velocity)
            }
            _ => None,
        }
    }

    /// Signed Pitch Bend offset from center (-8192..=8191 when in range).
    #[inline]
    pub fn bend_offset(&self) -> Option<i32> {
        match *self {
            ChannelVoiceMsg::PitchBend { value } => {
                Some(i32::from(value) - i32::from(PITCH_BEND_CENTER))
            }
            _ => None,
        }
    }
}

/// Channel Mode messages, i.e. Control Change 120-127.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ChannelModeKind {
    AllSoundOff = 120,
    ResetAllControllers = 121,
    LocalControl = 122,
    AllNotesOff = 123,
    OmniOff = 124,
    OmniOn = 125,
    MonoOn = 126,
    PolyOn = 127,
}

impl ChannelModeKind {
    pub const fn from_controller(controller: u8) -> Option<Self> {
        Some(match controller {
            120 => ChannelModeKind::AllSoundOff,
            121 => ChannelModeKind::ResetAllControllers,
            122 => ChannelModeKind::LocalControl,
            123 => ChannelModeKind::AllNotesOff,
            124 => ChannelModeKind::OmniOff,
            125 => ChannelModeKind::OmniOn,
            126 => ChannelModeKind::MonoOn,
            127 => ChannelModeKind::PolyOn,
            _ => return None,
        })
    }

    #[inline]
    pub const fn controller(self) -> u8 {
        self as u8
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemCommonMsg {
    /// MTC quarter frame: `0nnndddd`, `message_type` is `nnn`, `value` is `dddd`.
    TimeCodeQuarterFrame { message_type: u8, value: u8 },
    /// 14-bit count of MIDI beats (sixteenth notes) since song start.
    SongPositionPointer { position: u16 },
    SongSelect { song: u8 },
    TuneRequest,
}

impl SystemCommonMsg {
    #[inline]
    pub const fn status(&self) -> u8 {
        match self {
            SystemCommonMsg::TimeCodeQuarterFrame { .. } => TIME_CODE_QUARTER_FRAME,
            SystemCommonMsg::SongPositionPointer { .. } => SONG_POSITION_POINTER,
            SystemCommonMsg::SongSelect { .. } => SONG_SELECT,
            SystemCommonMsg::TuneRequest => TUNE_REQUEST,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemRealtimeMsg {
    Clock,
    Start,
    Continue,
    Stop,
    ActiveSensing,
    Reset,
}

impl SystemRealtimeMsg {
    /// `None` for the undefined `0xF9`/`0xFD` and non-realtime bytes.
    pub const fn from_status(status: u8) -> Option<Self> {
        Some(match status {
            0xF8 => SystemRealtimeMsg::Clock,
            0xFA => SystemRealtimeMsg::Start,
            0xFB => SystemRealtimeMsg::Continue,
            0xFC => SystemRealtimeMsg::Stop,
            0xFE => SystemRealtimeMsg::ActiveSensing,
            0xFF => SystemRealtimeMsg::Reset,
            _ => return None,
        })
    }

    #[inline]
    pub const fn status(&self) -> u8 {
        match self {
            SystemRealtimeMsg::Clock => 0xF8,
            SystemRealtimeMsg::Start => 0xFA,
            SystemRealtimeMsg::Continue => 0xFB,
            SystemRealtimeMsg::Stop => 0xFC,
            SystemRealtimeMsg::ActiveSensing => 0xFE,
            SystemRealtimeMsg::Reset => 0xFF,
        }
    }
}

/// System Exclusive manufacturer ID.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ManufacturerId {
    /// One-byte ID, `0x01..=0x7F`.
    Short(u8),
    /// Three-byte ID `00 b1 b2`.
    Extended(u8, u8),
}

impl ManufacturerId {
    /// Non-Real Time Universal SysEx.
    pub const UNIVERSAL_NON_REALTIME: ManufacturerId = ManufacturerId::Short(0x7E);
    /// Real Time Universal SysEx.
    pub const UNIVERSAL_REALTIME: ManufacturerId = ManufacturerId::Short(0x7F);
    pub const NON_COMMERCIAL: ManufacturerId = ManufacturerId::Short(0x7D);

    #[inline]
    pub const fn len(&self) -> usize {
        match self {
            ManufacturerId::Short(_) => 1,
            ManufacturerId::Extended(..) => 3,
        }
    }

    /// Raw bytes as they appear after `0xF0`.
    pub fn bytes(&self) -> EncodedBytes {
        match *self {
            ManufacturerId::Short(id) => EncodedBytes::from_slice(&[id]),
            ManufacturerId::Extended(b1, b2) => EncodedBytes::from_slice(&[0x00, b1, b2]),
        }
    }

    #[inline]
    pub fn is_universal(&self) -> bool {
        *self == Self::UNIVERSAL_NON_REALTIME || *self == Self::UNIVERSAL_REALTIME
    }

    /// Split the data bytes following `0xF0` into an ID and the remaining payload.
    ///
    /// Returns `None` for the ID when the bytes end before a complete ID.
    pub fn split(raw: &[u8]) -> (Option<ManufacturerId>, &[u8]) {
        match raw {
            [0x00, b1, b2, rest @ ..] => (Some(ManufacturerId::Extended(*b1, *b2)), rest),
            [0x00, ..] | [] => (None, raw),
            [id, rest @ ..] => (Some(ManufacturerId::Short(*id)), rest),
        }
    }
}

/// A System Exclusive message.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SysEx {
    pub manufacturer_id: Option<ManufacturerId>,
    /// Data bytes after the manufacturer ID, EOX excluded.
    pub payload: Vec<u8>,
    /// `false` when the message ended on a status byte other than EOX.
    pub terminated: bool,
}

impl SysEx {
    pub fn new(manufacturer_id: ManufacturerId, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            manufacturer_id: Some(manufacturer_id),
            payload: payload.into(),
            terminated: true,
        }
    }

    /// Build from every data byte seen between `0xF0` and the end of the message.
    pub fn from_raw(raw: &[u8], terminated: bool) -> Self {
        let (manufacturer_id, payload) = ManufacturerId::split(raw);
        Self {
            manufacturer_id,
            payload: payload.to_vec(),
            terminated,
        }
    }

    #[inline]
    pub fn is_universal(&self) -> bool {
        self.manufacturer_id
            .is_some_and(|id| id.is_universal())
    }

    /// First payload byte, which is the device ID for Universal and most
    /// manufacturer messages.
    #[inline]
    pub fn device_id(&self) -> Option<u8> {
        self.payload.first().copied()
    }
}

/// Broad message category, determined by the status byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    ChannelVoice,
    ChannelMode,
    SystemCommon,
    SystemRealtime,
    SystemExclusive,
}

/// Fieldless message kind, used for labels and filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKind {
    NoteOff,
    NoteOn,
    PolyPressure,
    ControlChange,
    ProgramChange,
    ChannelPressure,
    PitchBend,
    ChannelMode,
    TimeCodeQuarterFrame,
    SongPositionPointer,
    SongSelect,
    TuneRequest,
    Clock,
    Start,
    Continue,
    Stop,
    ActiveSensing,
    Reset,
    SystemExclusive,
}

impl MessageKind {
    pub const fn name(self) -> &'static str {
        match self {
            MessageKind::NoteOff => "Note Off",
            MessageKind::NoteOn => "Note On",
            MessageKind::PolyPressure => "Polyphonic Key Pressure (Aftertouch)",
            MessageKind::ControlChange => "Control Change",
            MessageKind::ProgramChange => "Program Change",
            MessageKind::ChannelPressure => "Channel Pressure (Aftertouch)",
            MessageKind::PitchBend => "Pitch Bend Change",
            MessageKind::ChannelMode => "Channel Mode",
            MessageKind::TimeCodeQuarterFrame => "MIDI Time Code Quarter Frame",
            MessageKind::SongPositionPointer => "Song Position Pointer",
            MessageKind::SongSelect => "Song Select",
            MessageKind::TuneRequest => "Tune Request",
            MessageKind::Clock => "Timing Clock",
            MessageKind::Start => "Start",
            MessageKind::Continue => "Continue",
            MessageKind::Stop => "Stop",
            MessageKind::ActiveSensing => "Active Sensing",
            MessageKind::Reset => "System Reset",
            MessageKind::SystemExclusive => "System Exclusive",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A complete MIDI 1.0 message.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Message {
    ChannelVoice { channel: u8, msg: ChannelVoiceMsg },
    ChannelMode {
        channel: u8,
        kind: ChannelModeKind,
        value: u8,
    },
    SystemCommon(SystemCommonMsg),
    SystemRealtime(SystemRealtimeMsg),
    SystemExclusive(SysEx),
}

impl Message {
    #[inline]
    pub fn note_on(channel: u8, note: u8, velocity: u8) -> Self {
        Message::ChannelVoice {
            channel,
            msg: ChannelVoiceMsg::NoteOn { note, velocity },
        }
    }

    #[inline]
    pub fn note_off(channel: u8, note: u8, velocity: u8) -> Self {
        Message::ChannelVoice {
            channel,
            msg: ChannelVoiceMsg::NoteOff { note, velocity },
        }
    }

    #[inline]
    pub fn poly_pressure(channel: u8, note: u8, pressure: u8) -> Self {
        Message::ChannelVoice {
            channel,
            msg: ChannelVoiceMsg::PolyPressure { note, pressure },
        }
    }

    /// Controllers 120-127 produce [`Message::ChannelMode`], the same as the decoder.
    pub fn control_change(channel: u8, controller: u8, value: u8) -> Self {
        match ChannelModeKind::from_controller(controller) {
            Some(kind) => Message::ChannelMode {
                channel,
                kind,
                value,
            },
            None => Message::ChannelVoice {
                channel,
                msg: ChannelVoiceMsg::ControlChange { controller, value },
            },
        }
    }

    #[inline]
    pub fn program_change(channel: u8, program: u8) -> Self {
        Message::ChannelVoice {
            channel,
            msg: ChannelVoiceMsg::ProgramChange { program },
        }
    }

    #[inline]
    pub fn channel_pressure(channel: u8, pressure: u8) -> Self {
        Message::ChannelVoice {
            channel,
            msg: ChannelVoiceMsg::ChannelPressure { pressure },
        }
    }

    /// `value`: unsigned 14-bit (0..=16383, 8192 = center).
    #[inline]
    pub fn pitch_bend(channel: u8, value: u16) -> Self {
        Message::ChannelVoice {
            channel,
            msg: ChannelVoiceMsg::PitchBend { value },
        }
    }

    #[inline]
    pub fn realtime(msg: SystemRealtimeMsg) -> Self {
        Message::SystemRealtime(msg)
    }

    #[inline]
    pub fn sysex(manufacturer_id: ManufacturerId, payload: impl Into<Vec<u8>>) -> Self {
        Message::SystemExclusive(SysEx::new(manufacturer_id, payload))
    }

    pub fn category(&self) -> Category {
        match self {
            Message::ChannelVoice { .. } => Category::ChannelVoice,
            Message::ChannelMode { .. } => Category::ChannelMode,
            Message::SystemCommon(_) => Category::SystemCommon,
            Message::SystemRealtime(_) => Category::SystemRealtime,
            Message::SystemExclusive(_) => Category::SystemExclusive,
        }
    }

    pub fn kind(&self) -> MessageKind {
        match self {
            Message::ChannelVoice { msg, .. } => match msg {
                ChannelVoiceMsg::NoteOff { .. } => MessageKind::NoteOff,
                ChannelVoiceMsg::NoteOn { .. } => MessageKind::NoteOn,
                ChannelVoiceMsg::PolyPressure { .. } => MessageKind::PolyPressure,
                ChannelVoiceMsg::ControlChange { .. } => MessageKind::ControlChange,
                ChannelVoiceMsg::ProgramChange { .. } => MessageKind::ProgramChange,
                ChannelVoiceMsg::ChannelPressure { .. } => MessageKind::ChannelPressure,
                ChannelVoiceMsg::PitchBend { .. } => MessageKind::PitchBend,
            },
            Message::ChannelMode { .. } => MessageKind::ChannelMode,
            Message::SystemCommon(msg) => match msg {
                SystemCommonMsg::TimeCodeQuarterFrame { .. } => MessageKind::TimeCodeQuarterFrame,
                SystemCommonMsg::SongPositionPointer { .. } => MessageKind::SongPositionPointer,
                SystemCommonMsg::SongSelect { .. } => MessageKind::SongSelect,
                SystemCommonMsg::TuneRequest => MessageKind::TuneRequest,
            },
            Message::SystemRealtime(msg) => match msg {
                SystemRealtimeMsg::Clock => MessageKind::Clock,
                SystemRealtimeMsg::Start => MessageKind::Start,
                SystemRealtimeMsg::Continue => MessageKind::Continue,
                SystemRealtimeMsg::Stop => MessageKind::Stop,
                SystemRealtimeMsg::ActiveSensing => MessageKind::ActiveSensing,
                SystemRealtimeMsg::Reset => MessageKind::Reset,
            },
            Message::SystemExclusive(_) => MessageKind::SystemExclusive,
        }
    }

    /// Status byte this message is transmitted with (channel included).
    pub fn status_byte(&self) -> u8 {
        match self {
            Message::ChannelVoice { channel, msg } => msg.status_nibble() | (channel & CHANNEL_MAX),
            Message::ChannelMode { channel, .. } => CONTROL_CHANGE | (channel & CHANNEL_MAX),
            Message::SystemCommon(msg) => msg.status(),
            Message::SystemRealtime(msg) => msg.status(),
            Message::SystemExclusive(_) => SYSEX_START,
        }
    }

    #[inline]
    pub fn channel(&self) -> Option<u8> {
        match self {
            Message::ChannelVoice { channel, .. } | Message::ChannelMode { channel, .. } => {
                Some(*channel)
            }
            _ => None,
        }
    }

    #[inline]
    pub fn is_realtime(&self) -> bool {
        matches!(self, Message::SystemRealtime(_))
    }

    /// Note On with velocity 0, which most receivers treat as Note Off.
    #[inline]
    pub fn is_zero_velocity_note_on(&self) -> bool {
        matches!(
            self,
            Message::ChannelVoice {
                msg: ChannelVoiceMsg::NoteOn { velocity: 0, .. },
                ..
            }
        )
    }

    /// Check every field against its wire range.
    pub fn validate(&self) -> Result<(), EncodeError> {
        encoder::validate(self)
    }

    /// Canonical bytes with an explicit status byte.
    #[inline]
    pub fn to_bytes(&self) -> Result<EncodedBytes, EncodeError> {
        encoder::encode(self)
    }
}

impl From<SysEx> for Message {
    fn from(sysex: SysEx) -> Self {
        Message::SystemExclusive(sysex)
    }
}

impl From<SystemRealtimeMsg> for Message {
    fn from(msg: SystemRealtimeMsg) -> Self {
        Message::SystemRealtime(msg)
    }
}

impl From<SystemCommonMsg> for Message {
    fn from(msg: SystemCommonMsg) -> Self {
        Message::SystemCommon(msg)
    }
}

/// Compact one-line rendering, channels shown 1-based.
impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::ChannelVoice { channel, msg } => {
                write!(f, "ch{} ", u16::from(*channel) + 1)?;
                match *msg {
                    ChannelVoiceMsg::NoteOff { note, velocity } => {
                        write!(f, "NoteOff note={note} vel={velocity}")
                    }
                    ChannelVoiceMsg::NoteOn { note, velocity } => {
                        write!(f, "NoteOn note={note} vel={velocity}")
                    }
                    ChannelVoiceMsg::PolyPressure { note, pressure } => {
                        write!(f, "PolyPressure note={note} pressure={pressure}")
                    }
                    ChannelVoiceMsg::ControlChange { controller, value } => {
                        write!(f, "CC {controller}={value}")
                    }
                    ChannelVoiceMsg::ProgramChange { program } => {
                        write!(f, "ProgramChange {program}")
                    }
                    ChannelVoiceMsg::ChannelPressure { pressure } => {
                        write!(f, "ChannelPressure {pressure}")
                    }
                    ChannelVoiceMsg::PitchBend { value } => {
                        write!(f, "PitchBend {:+}", value as i32 - PITCH_BEND_CENTER as i32)
                    }
                }
            }
            Message::ChannelMode {
                channel,
                kind,
                value,
            } => write!(f, "ch{} {:?} {value}", u16::from(*channel) + 1, kind),
            Message::SystemCommon(msg) => match *msg {
                SystemCommonMsg::TimeCodeQuarterFrame {
                    message_type,
                    value,
                } => write!(f, "QuarterFrame type={message_type} value={value}"),
                SystemCommonMsg::SongPositionPointer { position } => {
                    write!(f, "SongPosition {position}")
                }
                SystemCommonMsg::SongSelect { song } => write!(f, "SongSelect {song}"),
                SystemCommonMsg::TuneRequest => f.write_str("TuneRequest"),
            },
            Message::SystemRealtime(msg) => write!(f, "{msg:?}"),
            Message::SystemExclusive(sysex) => {
                f.write_str("SysEx")?;
                match sysex.manufacturer_id {
                    Some(ManufacturerId::Short(id)) => write!(f, " id={id:02X}")?,
                    Some(ManufacturerId::Extended(b1, b2)) => {
                        write!(f, " id=00{b1:02X}{b2:02X}")?
                    }
                    None => {}
                }
                write!(f, " len={}", sysex.payload.len())?;
                if !sysex.terminated {
                    f.write_str(" (unterminated)")?;
                }
                Ok(())
            }
        }
    }
}
