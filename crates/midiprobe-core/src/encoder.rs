//! Message → wire bytes.
//!
//! Output always carries an explicit status byte (no running status), and
//! System Exclusive is always framed `F0 … F7`. A message with any field
//! outside its wire range is rejected before anything is written.

use smallvec::SmallVec;

use crate::error::{EncodeError, Result};
use crate::message::{
    split_14bit, ChannelVoiceMsg, ManufacturerId, Message, SysEx, SystemCommonMsg, CHANNEL_MAX,
    DATA_MAX, EOX, SYSEX_START, VALUE_14BIT_MAX,
};

/// Encoded message. Short messages stay inline.
pub type EncodedBytes = SmallVec<[u8; 3]>;

/// Largest controller number carried by a plain Control Change.
pub const CONTROLLER_MAX: u8 = 119;

#[inline]
fn check(field: &'static str, value: u32, max: u32) -> Result<()> {
    if value > max {
        return Err(EncodeError::ValueOutOfRange { field, value, max });
    }
    Ok(())
}

#[inline]
fn check_7bit(field: &'static str, value: u8) -> Result<()> {
    check(field, value.into(), DATA_MAX.into())
}

#[inline]
fn check_channel(channel: u8) -> Result<()> {
    check("channel", channel.into(), CHANNEL_MAX.into())
}

fn validate_sysex(sysex: &SysEx) -> Result<()> {
    match sysex.manufacturer_id {
        Some(ManufacturerId::Short(0)) => return Err(EncodeError::InvalidManufacturerId),
        Some(ManufacturerId::Short(id)) if id > DATA_MAX => {
            return Err(EncodeError::InvalidManufacturerId)
        }
        Some(ManufacturerId::Short(_)) => {}
        Some(ManufacturerId::Extended(b1, b2)) => {
            check_7bit("manufacturer_id", b1)?;
            check_7bit("manufacturer_id", b2)?;
        }
        None => {
            // Without an ID the payload must not read back as one.
            let reads_as_id = match sysex.payload.as_slice() {
                [] => false,
                [0x00, ..] => sysex.payload.len() >= 3,
                _ => true,
            };
            if reads_as_id {
                return Err(EncodeError::InvalidManufacturerId);
            }
        }
    }
    for &byte in &sysex.payload {
        check_7bit("sysex payload", byte)?;
    }
    Ok(())
}

/// Check every field of `msg` against its wire range.
pub fn validate(msg: &Message) -> Result<()> {
    match msg {
        Message::ChannelVoice { channel, msg } => {
            check_channel(*channel)?;
            match *msg {
                ChannelVoiceMsg::NoteOff { note, velocity }
                | ChannelVoiceMsg::NoteOn { note, velocity } => {
                    check_7bit("note", note)?;
                    check_7bit("velocity", velocity)
                }
                ChannelVoiceMsg::PolyPressure { note, pressure } => {
                    check_7bit("note", note)?;
                    check_7bit("pressure", pressure)
                }
                ChannelVoiceMsg::ControlChange { controller, value } => {
                    check("controller", controller.into(), CONTROLLER_MAX.into())?;
                    check_7bit("value", value)
                }
                ChannelVoiceMsg::ProgramChange { program } => check_7bit("program", program),
                ChannelVoiceMsg::ChannelPressure { pressure } => check_7bit("pressure", pressure),
                ChannelVoiceMsg::PitchBend { value } => {
                    check("pitch bend", value.into(), VALUE_14BIT_MAX.into())
                }
            }
        }
        Message::ChannelMode { channel, value, .. } => {
            check_channel(*channel)?;
            check_7bit("value", *value)
        }
        Message::SystemCommon(msg) => match *msg {
            SystemCommonMsg::TimeCodeQuarterFrame {
                message_type,
                value,
            } => {
                check("message type", message_type.into(), 7)?;
                check("quarter frame value", value.into(), 0x0F)
            }
            SystemCommonMsg::SongPositionPointer { position } => {
                check("song position", position.into(), VALUE_14BIT_MAX.into())
            }
            SystemCommonMsg::SongSelect { song } => check_7bit("song", song),
            SystemCommonMsg::TuneRequest => Ok(()),
        },
        Message::SystemRealtime(_) => Ok(()),
        Message::SystemExclusive(sysex) => validate_sysex(sysex),
    }
}

fn write_unchecked(msg: &Message, out: &mut impl Extend<u8>) {
    let status = msg.status_byte();
    match msg {
        Message::ChannelVoice { msg, .. } => match *msg {
            ChannelVoiceMsg::NoteOff { note, velocity }
            | ChannelVoiceMsg::NoteOn { note, velocity } => out.extend([status, note, velocity]),
            ChannelVoiceMsg::PolyPressure { note, pressure } => {
                out.extend([status, note, pressure])
            }
            ChannelVoiceMsg::ControlChange { controller, value } => {
                out.extend([status, controller, value])
            }
            ChannelVoiceMsg::ProgramChange { program } => out.extend([status, program]),
            ChannelVoiceMsg::ChannelPressure { pressure } => out.extend([status, pressure]),
            ChannelVoiceMsg::PitchBend { value } => {
                let (lsb, msb) = split_14bit(value);
                out.extend([status, lsb, msb])
            }
        },
        Message::ChannelMode { kind, value, .. } => {
            out.extend([status, kind.controller(), *value])
        }
        Message::SystemCommon(msg) => match *msg {
            SystemCommonMsg::TimeCodeQuarterFrame {
                message_type,
                value,
            } => out.extend([status, (message_type << 4) | value]),
            SystemCommonMsg::SongPositionPointer { position } => {
                let (lsb, msb) = split_14bit(position);
                out.extend([status, lsb, msb])
            }
            SystemCommonMsg::SongSelect { song } => out.extend([status, song]),
            SystemCommonMsg::TuneRequest => out.extend([status]),
        },
        Message::SystemRealtime(_) => out.extend([status]),
        Message::SystemExclusive(sysex) => {
            out.extend([SYSEX_START]);
            if let Some(id) = sysex.manufacturer_id {
                out.extend(id.bytes());
            }
            out.extend(sysex.payload.iter().copied());
            out.extend([EOX]);
        }
    }
}

/// Encode `msg` into a fresh buffer.
pub fn encode(msg: &Message) -> Result<EncodedBytes> {
    validate(msg)?;
    let mut out = EncodedBytes::new();
    write_unchecked(msg, &mut out);
    Ok(out)
}

/// Append the encoding of `msg` to `out`. Nothing is appended on error.
pub fn encode_into(msg: &Message, out: &mut Vec<u8>) -> Result<()> {
    validate(msg)?;
    write_unchecked(msg, out);
    Ok(())
}
