//! Outbound messages: validate, encode, hand to a transport.

use crossbeam_channel::Sender;
use tracing::trace;

use midiprobe_core::{encode_into, ManufacturerId, Message, SystemRealtimeMsg};

use crate::error::Result;

/// Destination for encoded bytes, e.g. an OS MIDI port or a socket.
pub trait Transport {
    fn send(&mut self, bytes: &[u8]) -> Result<()>;
}

impl Transport for Vec<u8> {
    fn send(&mut self, bytes: &[u8]) -> Result<()> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn send(&mut self, bytes: &[u8]) -> Result<()> {
        (**self).send(bytes)
    }
}

/// Forwards each encoded message to a dedicated output thread.
///
/// Never blocks: a full channel fails the send.
#[derive(Debug, Clone)]
pub struct ChannelTransport {
    sender: Sender<Vec<u8>>,
}

impl ChannelTransport {
    pub fn new(sender: Sender<Vec<u8>>) -> Self {
        Self { sender }
    }
}

impl Transport for ChannelTransport {
    fn send(&mut self, bytes: &[u8]) -> Result<()> {
        self.sender.try_send(bytes.to_vec())?;
        Ok(())
    }
}

/// Message generator bound to one transport.
pub struct Generator<T: Transport> {
    transport: T,
    scratch: Vec<u8>,
}

impl<T: Transport> Generator<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            scratch: Vec::with_capacity(3),
        }
    }

    /// Encode and send `message`. Returns the number of bytes written.
    ///
    /// Out-of-range fields fail before anything reaches the transport.
    pub fn send(&mut self, message: &Message) -> Result<usize> {
        self.scratch.clear();
        encode_into(message, &mut self.scratch)?;
        self.transport.send(&self.scratch)?;
        trace!("Sent {}: {:02X?}", message, self.scratch);
        Ok(self.scratch.len())
    }

    pub fn note_on(&mut self, channel: u8, note: u8, velocity: u8) -> Result<usize> {
        self.send(&Message::note_on(channel, note, velocity))
    }

    pub fn note_off(&mut self, channel: u8, note: u8, velocity: u8) -> Result<usize> {
        self.send(&Message::note_off(channel, note, velocity))
    }

    /// Controllers 120-127 go out as channel mode messages.
    pub fn control_change(&mut self, channel: u8, controller: u8, value: u8) -> Result<usize> {
        self.send(&Message::control_change(channel, controller, value))
    }

    pub fn program_change(&mut self, channel: u8, program: u8) -> Result<usize> {
        self.send(&Message::program_change(channel, program))
    }

    /// `value`: 0..=16383, 8192 = center.
    pub fn pitch_bend(&mut self, channel: u8, value: u16) -> Result<usize> {
        self.send(&Message::pitch_bend(channel, value))
    }

    pub fn sysex(&mut self, manufacturer_id: ManufacturerId, payload: &[u8]) -> Result<usize> {
        self.send(&Message::sysex(manufacturer_id, payload))
    }

    pub fn realtime(&mut self, msg: SystemRealtimeMsg) -> Result<usize> {
        self.send(&Message::realtime(msg))
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_inner(self) -> T {
        self.transport
    }
}
