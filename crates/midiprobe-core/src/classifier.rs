//! Semantic annotation of decoded messages.
//!
//! The [`Classifier`] is stateful: it follows RPN/NRPN selection per channel
//! so that Data Entry, Data Increment and Data Decrement can be tied to the
//! parameter they modify. Everything else is a pure lookup.

use serde::Serialize;
use tracing::trace;

use crate::config::Config;
use crate::message::{
    ChannelModeKind, ChannelVoiceMsg, Message, MessageKind, SysEx, SystemRealtimeMsg,
};
use crate::names::{self, IdGroup, IdRegion};

const CHANNELS: usize = 16;
const NULL_SELECTOR: u8 = 0x7F;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ParameterKind {
    Registered,
    NonRegistered,
}

/// What a data controller does to the selected parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DataAction {
    EntryMsb,
    EntryLsb,
    Increment,
    Decrement,
}

impl DataAction {
    fn from_controller(controller: u8) -> Option<Self> {
        Some(match controller {
            names::CC_DATA_ENTRY_MSB => DataAction::EntryMsb,
            names::CC_DATA_ENTRY_LSB => DataAction::EntryLsb,
            names::CC_DATA_INCREMENT => DataAction::Increment,
            names::CC_DATA_DECREMENT => DataAction::Decrement,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterAnnotation {
    pub kind: ParameterKind,
    pub msb: u8,
    pub lsb: u8,
    /// Known for registered parameters only.
    pub name: Option<&'static str>,
    pub action: DataAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UniversalAnnotation {
    /// `true` for `0x7F` (Real Time), `false` for `0x7E` (Non-Real Time).
    pub realtime: bool,
    pub sub_id1: Option<u8>,
    pub sub_id1_name: Option<&'static str>,
    pub sub_id2: Option<u8>,
    pub sub_id2_name: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SysExAnnotation {
    pub group: Option<IdGroup>,
    pub region: Option<IdRegion>,
    pub manufacturer: Option<&'static str>,
    pub device_id: Option<u8>,
    pub universal: Option<UniversalAnnotation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    /// Display kind. Differs from the message's own kind only when `aliased`.
    pub label: MessageKind,
    /// Note On with velocity 0 shown as Note Off.
    pub aliased: bool,
    /// Controller or channel mode name.
    pub controller: Option<&'static str>,
    pub parameter: Option<ParameterAnnotation>,
    pub sysex: Option<SysExAnnotation>,
}

impl Annotation {
    fn plain(label: MessageKind) -> Self {
        Self {
            label,
            aliased: false,
            controller: None,
            parameter: None,
            sysex: None,
        }
    }
}

/// A message together with its annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedMessage {
    pub message: Message,
    pub annotation: Annotation,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Selector {
    msb: Option<u8>,
    lsb: Option<u8>,
}

impl Selector {
    fn complete(&self) -> Option<(u8, u8)> {
        Some((self.msb?, self.lsb?))
    }

    fn is_null(&self) -> bool {
        self.complete() == Some((NULL_SELECTOR, NULL_SELECTOR))
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct ChannelParameters {
    rpn: Selector,
    nrpn: Selector,
    /// Pair written most recently.
    last: Option<ParameterKind>,
}

impl ChannelParameters {
    fn write(&mut self, kind: ParameterKind, msb: Option<u8>, lsb: Option<u8>) {
        let selector = match kind {
            ParameterKind::Registered => &mut self.rpn,
            ParameterKind::NonRegistered => &mut self.nrpn,
        };
        if let Some(msb) = msb {
            selector.msb = Some(msb);
        }
        if let Some(lsb) = lsb {
            selector.lsb = Some(lsb);
        }
        if selector.is_null() {
            *selector = Selector::default();
            if self.last == Some(kind) {
                self.last = None;
            }
        } else {
            self.last = Some(kind);
        }
    }

    fn selected(&self) -> Option<(ParameterKind, u8, u8)> {
        let kind = self.last?;
        let selector = match kind {
            ParameterKind::Registered => self.rpn,
            ParameterKind::NonRegistered => self.nrpn,
        };
        let (msb, lsb) = selector.complete()?;
        Some((kind, msb, lsb))
    }
}

/// Per-stream classifier. Feed it every decoded message of one stream, in
/// order.
#[derive(Debug, Clone)]
pub struct Classifier {
    config: Config,
    channels: [ChannelParameters; CHANNELS],
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Classifier {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            channels: [ChannelParameters::default(); CHANNELS],
        }
    }

    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    /// Forget all parameter selections.
    pub fn reset(&mut self) {
        self.channels = [ChannelParameters::default(); CHANNELS];
    }

    pub fn classify(&mut self, message: &Message) -> AnnotatedMessage {
        let annotation = match message {
            Message::ChannelVoice { channel, msg } => self.channel_voice(*channel, msg),
            Message::ChannelMode { channel, kind, .. } => {
                if *kind == ChannelModeKind::ResetAllControllers {
                    if let Some(params) = self.channels.get_mut(usize::from(*channel)) {
                        *params = ChannelParameters::default();
                        trace!("Cleared parameter selection on channel {}", channel + 1);
                    }
                }
                Annotation {
                    controller: Some(names::controller_name(kind.controller(), false)),
                    ..Annotation::plain(MessageKind::ChannelMode)
                }
            }
            Message::SystemRealtime(msg) => {
                if *msg == SystemRealtimeMsg::Reset {
                    self.reset();
                    trace!("System Reset cleared all parameter selections");
                }
                Annotation::plain(message.kind())
            }
            Message::SystemCommon(_) => Annotation::plain(message.kind()),
            Message::SystemExclusive(sysex) => Annotation {
                sysex: Some(sysex_annotation(sysex)),
                ..Annotation::plain(MessageKind::SystemExclusive)
            },
        };
        AnnotatedMessage {
            message: message.clone(),
            annotation,
        }
    }

    fn channel_voice(&mut self, channel: u8, msg: &ChannelVoiceMsg) -> Annotation {
        match *msg {
            ChannelVoiceMsg::NoteOn { velocity: 0, .. } if self.config.velocity_zero_is_note_off => {
                Annotation {
                    aliased: true,
                    ..Annotation::plain(MessageKind::NoteOff)
                }
            }
            ChannelVoiceMsg::ControlChange { controller, value } => {
                let parameter = match self.channels.get_mut(usize::from(channel)) {
                    Some(params) => track_parameter(params, controller, value),
                    None => None,
                };
                Annotation {
                    controller: Some(names::controller_name(
                        controller,
                        self.config.cc91_93_renamed,
                    )),
                    parameter,
                    ..Annotation::plain(MessageKind::ControlChange)
                }
            }
            _ => Annotation::plain(
                Message::ChannelVoice { channel, msg: *msg }.kind(),
            ),
        }
    }
}

fn track_parameter(
    params: &mut ChannelParameters,
    controller: u8,
    value: u8,
) -> Option<ParameterAnnotation> {
    match controller {
        names::CC_RPN_MSB => params.write(ParameterKind::Registered, Some(value), None),
        names::CC_RPN_LSB => params.write(ParameterKind::Registered, None, Some(value)),
        names::CC_NRPN_MSB => params.write(ParameterKind::NonRegistered, Some(value), None),
        names::CC_NRPN_LSB => params.write(ParameterKind::NonRegistered, None, Some(value)),
        _ => {
            let action = DataAction::from_controller(controller)?;
            let (kind, msb, lsb) = params.selected()?;
            let name = match kind {
                ParameterKind::Registered => names::registered_parameter_name(msb, lsb),
                ParameterKind::NonRegistered => None,
            };
            return Some(ParameterAnnotation {
                kind,
                msb,
                lsb,
                name,
                action,
            });
        }
    }
    None
}

fn sysex_annotation(sysex: &SysEx) -> SysExAnnotation {
    let Some(id) = sysex.manufacturer_id else {
        return SysExAnnotation {
            group: None,
            region: None,
            manufacturer: None,
            device_id: None,
            universal: None,
        };
    };

    let universal = id.is_universal().then(|| {
        let realtime = id == crate::message::ManufacturerId::UNIVERSAL_REALTIME;
        let sub_id1 = sysex.payload.get(1).copied();
        let sub_id1_name = sub_id1.and_then(|sub| {
            if realtime {
                names::realtime_sub_id1_name(sub)
            } else {
                names::non_realtime_sub_id1_name(sub)
            }
        });
        let sub_id2 = sub_id1.and_then(|sub| {
            let has_sub_id2 = if realtime {
                names::realtime_has_sub_id2(sub)
            } else {
                names::non_realtime_has_sub_id2(sub)
            };
            if has_sub_id2 {
                sysex.payload.get(2).copied()
            } else {
                None
            }
        });
        let sub_id2_name = sub_id1.zip(sub_id2).and_then(|(sub1, sub2)| {
            if realtime {
                names::realtime_sub_id2_name(sub1, sub2)
            } else {
                names::non_realtime_sub_id2_name(sub1, sub2)
            }
        });
        UniversalAnnotation {
            realtime,
            sub_id1,
            sub_id1_name,
            sub_id2,
            sub_id2_name,
        }
    });

    SysExAnnotation {
        group: Some(id.group()),
        region: Some(id.region()),
        manufacturer: id.name(),
        device_id: sysex.device_id(),
        universal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::ManufacturerId;

    fn cc(classifier: &mut Classifier, controller: u8, value: u8) -> Annotation {
        classifier
            .classify(&Message::control_change(0, controller, value))
            .annotation
    }

    #[test]
    fn test_velocity_zero_alias() {
        let mut classifier = Classifier::default();
        let msg = Message::note_on(0, 60, 0);
        let annotated = classifier.classify(&msg);
        assert_eq!(annotated.annotation.label, MessageKind::NoteOff);
        assert!(annotated.annotation.aliased);
        // The message itself is untouched and re-encodes bit-exact.
        assert_eq!(annotated.message, msg);
        assert_eq!(annotated.message.to_bytes().unwrap().as_slice(), &[0x90, 60, 0]);
    }

    #[test]
    fn test_velocity_zero_alias_disabled() {
        let mut classifier = Classifier::new(Config::default().velocity_zero_is_note_off(false));
        let annotated = classifier.classify(&Message::note_on(0, 60, 0));
        assert_eq!(annotated.annotation.label, MessageKind::NoteOn);
        assert!(!annotated.annotation.aliased);
    }

    #[test]
    fn test_cc91_93_naming() {
        let mut classifier = Classifier::default();
        assert_eq!(cc(&mut classifier, 91, 40).controller, Some("Effects 1 Depth"));
        assert_eq!(cc(&mut classifier, 93, 40).controller, Some("Effects 3 Depth"));

        classifier.set_config(Config::default().cc91_93_renamed(true));
        assert_eq!(cc(&mut classifier, 91, 40).controller, Some("Reverb Send Level"));
        assert_eq!(cc(&mut classifier, 93, 40).controller, Some("Chorus Send Level"));
    }

    #[test]
    fn test_channel_mode_name() {
        let mut classifier = Classifier::default();
        let annotated = classifier.classify(&Message::control_change(0, 123, 0));
        assert_eq!(annotated.annotation.label, MessageKind::ChannelMode);
        assert_eq!(annotated.annotation.controller, Some("All Notes Off"));
    }

    #[test]
    fn test_rpn_data_entry() {
        let mut classifier = Classifier::default();
        assert_eq!(cc(&mut classifier, 101, 0).parameter, None);
        assert_eq!(cc(&mut classifier, 100, 0).parameter, None);

        let annotation = cc(&mut classifier, 6, 12);
        assert_eq!(
            annotation.parameter,
            Some(ParameterAnnotation {
                kind: ParameterKind::Registered,
                msb: 0,
                lsb: 0,
                name: Some("Pitch Bend Sensitivity"),
                action: DataAction::EntryMsb,
            })
        );

        let annotation = cc(&mut classifier, 38, 0);
        assert_eq!(annotation.parameter.map(|p| p.action), Some(DataAction::EntryLsb));
        let annotation = cc(&mut classifier, 96, 0);
        assert_eq!(annotation.parameter.map(|p| p.action), Some(DataAction::Increment));
    }

    #[test]
    fn test_data_entry_without_selection() {
        let mut classifier = Classifier::default();
        assert_eq!(cc(&mut classifier, 6, 64).parameter, None);
        // Half a selector is not a selection.
        cc(&mut classifier, 101, 0);
        assert_eq!(cc(&mut classifier, 6, 64).parameter, None);
    }

    #[test]
    fn test_nrpn_last_write_wins() {
        let mut classifier = Classifier::default();
        cc(&mut classifier, 101, 0);
        cc(&mut classifier, 100, 2);
        cc(&mut classifier, 99, 0x12);
        cc(&mut classifier, 98, 0x34);

        let param = cc(&mut classifier, 6, 1).parameter.unwrap();
        assert_eq!(param.kind, ParameterKind::NonRegistered);
        assert_eq!((param.msb, param.lsb), (0x12, 0x34));
        assert_eq!(param.name, None);

        // Rewriting the RPN LSB makes RPN the active pair again.
        cc(&mut classifier, 100, 2);
        let param = cc(&mut classifier, 6, 1).parameter.unwrap();
        assert_eq!(param.kind, ParameterKind::Registered);
        assert_eq!(param.name, Some("Coarse Tuning"));
    }

    #[test]
    fn test_null_selector_clears() {
        let mut classifier = Classifier::default();
        cc(&mut classifier, 101, 0);
        cc(&mut classifier, 100, 1);
        assert!(cc(&mut classifier, 6, 64).parameter.is_some());

        cc(&mut classifier, 101, 127);
        cc(&mut classifier, 100, 127);
        assert_eq!(cc(&mut classifier, 6, 64).parameter, None);
    }

    #[test]
    fn test_reset_all_controllers_clears_channel() {
        let mut classifier = Classifier::default();
        for channel in [0, 1] {
            classifier.classify(&Message::control_change(channel, 101, 0));
            classifier.classify(&Message::control_change(channel, 100, 0));
        }
        classifier.classify(&Message::control_change(0, 121, 0));

        let ch0 = classifier.classify(&Message::control_change(0, 6, 2));
        assert_eq!(ch0.annotation.parameter, None);
        let ch1 = classifier.classify(&Message::control_change(1, 6, 2));
        assert!(ch1.annotation.parameter.is_some());
    }

    #[test]
    fn test_system_reset_clears_all_channels() {
        let mut classifier = Classifier::default();
        for channel in 0..16 {
            classifier.classify(&Message::control_change(channel, 99, 1));
            classifier.classify(&Message::control_change(channel, 98, 1));
        }
        classifier.classify(&Message::realtime(SystemRealtimeMsg::Reset));
        for channel in 0..16 {
            let annotated = classifier.classify(&Message::control_change(channel, 6, 0));
            assert_eq!(annotated.annotation.parameter, None);
        }
    }

    #[test]
    fn test_manufacturer_sysex() {
        let mut classifier = Classifier::default();
        let annotated =
            classifier.classify(&Message::sysex(ManufacturerId::Short(0x41), vec![0x10, 0x42]));
        let sysex = annotated.annotation.sysex.unwrap();
        assert_eq!(sysex.group, Some(IdGroup::Manufacturer));
        assert_eq!(sysex.region, Some(IdRegion::Japanese));
        assert_eq!(sysex.manufacturer, Some("Roland"));
        assert_eq!(sysex.device_id, Some(0x10));
        assert_eq!(sysex.universal, None);
    }

    #[test]
    fn test_universal_identity_request() {
        let mut classifier = Classifier::default();
        let msg = Message::sysex(ManufacturerId::UNIVERSAL_NON_REALTIME, vec![0x7F, 0x06, 0x01]);
        let sysex = classifier.classify(&msg).annotation.sysex.unwrap();
        assert_eq!(sysex.group, Some(IdGroup::Universal));
        assert_eq!(sysex.manufacturer, Some("Non-Real Time"));
        assert_eq!(sysex.device_id, Some(0x7F));
        assert_eq!(
            sysex.universal,
            Some(UniversalAnnotation {
                realtime: false,
                sub_id1: Some(0x06),
                sub_id1_name: Some("General Information"),
                sub_id2: Some(0x01),
                sub_id2_name: Some("Identity Request"),
            })
        );
    }

    #[test]
    fn test_universal_realtime_mmc() {
        let mut classifier = Classifier::default();
        let msg = Message::sysex(ManufacturerId::UNIVERSAL_REALTIME, vec![0x7F, 0x06, 0x02]);
        let universal = classifier.classify(&msg).annotation.sysex.unwrap().universal.unwrap();
        assert!(universal.realtime);
        assert_eq!(universal.sub_id1_name, Some("MIDI Machine Control Commands"));
        assert_eq!(universal.sub_id2_name, Some("PLAY"));
    }

    #[test]
    fn test_universal_without_sub_id2() {
        let mut classifier = Classifier::default();
        let msg = Message::sysex(ManufacturerId::UNIVERSAL_NON_REALTIME, vec![0x00, 0x7C, 0x05]);
        let universal = classifier.classify(&msg).annotation.sysex.unwrap().universal.unwrap();
        assert_eq!(universal.sub_id1_name, Some("Wait"));
        assert_eq!(universal.sub_id2, None);
    }

    #[test]
    fn test_short_universal_payload() {
        let mut classifier = Classifier::default();
        let msg = Message::sysex(ManufacturerId::UNIVERSAL_REALTIME, vec![0x7F]);
        let universal = classifier.classify(&msg).annotation.sysex.unwrap().universal.unwrap();
        assert_eq!(universal.sub_id1, None);
        assert_eq!(universal.sub_id2, None);
    }

    #[test]
    fn test_deterministic() {
        let history = [
            Message::control_change(3, 101, 0),
            Message::control_change(3, 100, 0),
            Message::control_change(3, 6, 2),
            Message::note_on(3, 60, 0),
            Message::sysex(ManufacturerId::Short(0x43), vec![0x10]),
        ];
        let mut a = Classifier::default();
        let mut b = Classifier::default();
        for msg in &history {
            assert_eq!(a.classify(msg), b.classify(msg));
        }
    }

    #[test]
    fn test_annotation_serializes() {
        let mut classifier = Classifier::default();
        let annotated = classifier.classify(&Message::note_on(0, 60, 0));
        let bytes = bincode::serialize(&annotated).unwrap();
        assert!(!bytes.is_empty());
    }
}
