//! Symbolic names from the MIDI 1.0 tables.

use serde::Serialize;

use crate::message::ManufacturerId;

const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Scientific pitch name, middle C (60) is `C4`.
pub fn note_name(note: u8) -> String {
    let octave = i32::from(note / 12) - 1;
    format!("{}{}", NOTE_NAMES[usize::from(note % 12)], octave)
}

const CONTROLLER_NAMES: [&str; 128] = [
    "Bank Select",
    "Modulation wheel or lever",
    "Breath controller",
    "Undefined",
    "Foot controller",
    "Portamento time",
    "Data entry MSB",
    "Channel Volume",
    "Balance",
    "Undefined",
    "Pan",
    "Expression Controller",
    "Effect Control 1",
    "Effect Control 2",
    "Undefined",
    "Undefined",
    "General Purpose Controller 1",
    "General Purpose Controller 2",
    "General Purpose Controller 3",
    "General Purpose Controller 4",
    "Undefined",
    "Undefined",
    "Undefined",
    "Undefined",
    "Undefined",
    "Undefined",
    "Undefined",
    "Undefined",
    "Undefined",
    "Undefined",
    "Undefined",
    "Undefined",
    // 32-63: LSB for 0-31
    "Bank Select LSB",
    "Modulation wheel or lever LSB",
    "Breath controller LSB",
    "Undefined LSB (3)",
    "Foot controller LSB",
    "Portamento time LSB",
    "Data entry LSB",
    "Channel Volume LSB",
    "Balance LSB",
    "Undefined LSB (9)",
    "Pan LSB",
    "Expression Controller LSB",
    "Effect Control 1 LSB",
    "Effect Control 2 LSB",
    "Undefined LSB (14)",
    "Undefined LSB (15)",
    "General Purpose Controller 1 LSB",
    "General Purpose Controller 2 LSB",
    "General Purpose Controller 3 LSB",
    "General Purpose Controller 4 LSB",
    "Undefined LSB (20)",
    "Undefined LSB (21)",
    "Undefined LSB (22)",
    "Undefined LSB (23)",
    "Undefined LSB (24)",
    "Undefined LSB (25)",
    "Undefined LSB (26)",
    "Undefined LSB (27)",
    "Undefined LSB (28)",
    "Undefined LSB (29)",
    "Undefined LSB (30)",
    "Undefined LSB (31)",
    "Damper pedal (sustain)",
    "Portamento On/Off",
    "Sostenuto",
    "Soft pedal",
    "Legato Footswitch",
    "Hold 2",
    "Sound Controller 1",
    "Sound Controller 2",
    "Sound Controller 3",
    "Sound Controller 4",
    "Sound Controller 5",
    "Sound Controller 6",
    "Sound Controller 7",
    "Sound Controller 8",
    "Sound Controller 9",
    "Sound Controller 10",
    "General Purpose Controller 5",
    "General Purpose Controller 6",
    "General Purpose Controller 7",
    "General Purpose Controller 8",
    "Portamento Control",
    "Undefined",
    "Undefined",
    "Undefined",
    "Undefined",
    "Undefined",
    "Undefined",
    "Effects 1 Depth",
    "Effects 2 Depth",
    "Effects 3 Depth",
    "Effects 4 Depth",
    "Effects 5 Depth",
    "Data increment",
    "Data decrement",
    "Non-Registered Parameter Number LSB",
    "Non-Registered Parameter Number MSB",
    "Registered Parameter Number LSB",
    "Registered Parameter Number MSB",
    "Undefined",
    "Undefined",
    "Undefined",
    "Undefined",
    "Undefined",
    "Undefined",
    "Undefined",
    "Undefined",
    "Undefined",
    "Undefined",
    "Undefined",
    "Undefined",
    "Undefined",
    "Undefined",
    "Undefined",
    "Undefined",
    "Undefined",
    "Undefined",
    // 120-127
    "All Sound Off",
    "Reset All Controllers",
    "Local Control",
    "All Notes Off",
    "Omni Mode Off (All Notes Off)",
    "Omni Mode On (All Notes Off)",
    "Mono Mode On (Poly Mode Off) (All Notes Off)",
    "Poly Mode On (Mono Mode Off) (All Notes Off)",
];

pub const CC_DATA_ENTRY_MSB: u8 = 6;
pub const CC_DATA_ENTRY_LSB: u8 = 38;
pub const CC_EFFECTS_1_DEPTH: u8 = 91;
pub const CC_EFFECTS_3_DEPTH: u8 = 93;
pub const CC_DATA_INCREMENT: u8 = 96;
pub const CC_DATA_DECREMENT: u8 = 97;
pub const CC_NRPN_LSB: u8 = 98;
pub const CC_NRPN_MSB: u8 = 99;
pub const CC_RPN_LSB: u8 = 100;
pub const CC_RPN_MSB: u8 = 101;

/// Controller name. 120-127 resolve to the channel mode names.
///
/// With `rp023` set, CC 91 and CC 93 use their RP-023 names.
pub fn controller_name(controller: u8, rp023: bool) -> &'static str {
    match controller {
        CC_EFFECTS_1_DEPTH if rp023 => "Reverb Send Level",
        CC_EFFECTS_3_DEPTH if rp023 => "Chorus Send Level",
        _ => CONTROLLER_NAMES[usize::from(controller & 0x7F)],
    }
}

/// Registered parameter name for `(msb, lsb)`.
pub fn registered_parameter_name(msb: u8, lsb: u8) -> Option<&'static str> {
    match (msb, lsb) {
        (0x00, 0x00) => Some("Pitch Bend Sensitivity"),
        (0x00, 0x01) => Some("Fine Tuning"),
        (0x00, 0x02) => Some("Coarse Tuning"),
        (0x00, 0x03) => Some("Tuning Program Select"),
        (0x00, 0x04) => Some("Tuning Bank Select"),
        (0x00, 0x05) => Some("Modulation Depth Range"),
        _ => None,
    }
}

/// Name of a status byte, `None` for data bytes.
pub fn status_name(status: u8) -> Option<&'static str> {
    Some(match status {
        0x00..=0x7F => return None,
        0x80..=0x8F => "Note Off",
        0x90..=0x9F => "Note On",
        0xA0..=0xAF => "Polyphonic Key Pressure (Aftertouch)",
        0xB0..=0xBF => "Control Change",
        0xC0..=0xCF => "Program Change",
        0xD0..=0xDF => "Channel Pressure (Aftertouch)",
        0xE0..=0xEF => "Pitch Bend Change",
        0xF0 => "Start of System Exclusive",
        0xF1 => "MIDI Time Code Quarter Frame",
        0xF2 => "Song Position Pointer",
        0xF3 => "Song Select",
        0xF6 => "Tune Request",
        0xF7 => "End of System Exclusive",
        0xF8 => "Timing Clock",
        0xFA => "Start",
        0xFB => "Continue",
        0xFC => "Stop",
        0xFE => "Active Sensing",
        0xFF => "System Reset",
        0xF4 | 0xF5 | 0xF9 | 0xFD => "Undefined",
    })
}

/// Which field a Time Code Quarter Frame carries.
pub fn quarter_frame_piece(message_type: u8) -> Option<&'static str> {
    Some(match message_type {
        0 => "Frame count LS nibble",
        1 => "Frame count MS nibble",
        2 => "Seconds count LS nibble",
        3 => "Seconds count MS nibble",
        4 => "Minutes count LS nibble",
        5 => "Minutes count MS nibble",
        6 => "Hours count LS nibble",
        7 => "Hours count MS nibble and SMPTE Type",
        _ => return None,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IdGroup {
    Manufacturer,
    Reserved,
    Universal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IdRegion {
    American,
    European,
    Japanese,
    Other,
    Special,
}

impl ManufacturerId {
    pub fn group(&self) -> IdGroup {
        match *self {
            ManufacturerId::Short(0x7D) => IdGroup::Reserved,
            ManufacturerId::Short(0x7E..) => IdGroup::Universal,
            _ => IdGroup::Manufacturer,
        }
    }

    /// Region is read from the first byte of a short ID and the second byte
    /// of an extended one.
    pub fn region(&self) -> IdRegion {
        let byte = match *self {
            ManufacturerId::Short(id) => id,
            ManufacturerId::Extended(b1, _) => b1,
        };
        match byte {
            0x00..=0x1F => IdRegion::American,
            0x20..=0x3F => IdRegion::European,
            0x40..=0x5F => IdRegion::Japanese,
            0x60..=0x7C => IdRegion::Other,
            _ if matches!(self, ManufacturerId::Short(_)) => IdRegion::Special,
            _ => IdRegion::Other,
        }
    }

    pub fn name(&self) -> Option<&'static str> {
        match *self {
            ManufacturerId::Short(id) => short_manufacturer_name(id),
            ManufacturerId::Extended(b1, b2) => extended_manufacturer_name(b1, b2),
        }
    }
}

fn short_manufacturer_name(id: u8) -> Option<&'static str> {
    Some(match id {
        0x01 => "Sequential",
        0x02 => "IDP",
        0x03 => "Voyetra/Octave-Plateau",
        0x04 => "Moog",
        0x05 => "Passport Designs",
        0x06 => "Lexicon",
        0x07 => "Kurzweil",
        0x08 => "Fender",
        0x09 => "Gulbransen",
        0x0A => "AKG Acoustics",
        0x0B => "Voyce Music",
        0x0C => "Waveframe Corp",
        0x0D => "ADA Signal Processors",
        0x0E => "Garfield Electronics",
        0x0F => "Ensoniq",
        0x10 => "Oberheim",
        0x11 => "Apple Computer",
        0x12 => "Grey Matter Response",
        0x13 => "Digidesign",
        0x14 => "Palm Tree Instruments",
        0x15 => "JLCooper Electronics",
        0x16 => "Lowrey",
        0x17 => "Adams-Smith",
        0x18 => "Emu Systems",
        0x19 => "Harmony Systems",
        0x1A => "ART",
        0x1B => "Baldwin",
        0x1C => "Eventide",
        0x1D => "Inventronics",
        0x1F => "Clarity",
        0x20 => "Passac",
        0x21 => "SIEL",
        0x22 => "Synthaxe",
        0x24 => "Hohner",
        0x25 => "Twister",
        0x26 => "Solton",
        0x27 => "Jellinghaus MS",
        0x28 => "Southworth Music Systems",
        0x29 => "PPG",
        0x2A => "JEN",
        0x2B => "SSL Limited",
        0x2C => "Audio Veritrieb",
        0x2F => "Elka",
        0x30 => "Dynacord",
        0x31 => "Viscount",
        0x33 => "Clavia Digital Instruments",
        0x34 => "Audio Architecture",
        0x35 => "General Music Corp.",
        0x39 => "Soundcraft Electronics",
        0x3B => "Wersi",
        0x3C => "Avab Electronik Ab",
        0x3D => "Digigram",
        0x3E => "Waldorf Electronics",
        0x3F => "Quasimidi",
        0x40 => "Kawai",
        0x41 => "Roland",
        0x42 => "Korg",
        0x43 => "Yamaha",
        0x44 => "Casio",
        0x46 => "Kamiya Studio",
        0x47 => "Akai",
        0x48 => "Japan Victor",
        0x49 => "Mesosha",
        0x4A => "Hoshino Gakki",
        0x4B => "Fujitsu Elect",
        0x4C => "Sony",
        0x4D => "Nisshin Onpa",
        0x4E => "TEAC",
        0x50 => "Matsushita Electric",
        0x51 => "Fostex",
        0x52 => "Zoom",
        0x53 => "Midori Electronics",
        0x54 => "Matsushita Communication Industrial",
        0x55 => "Suzuki Musical Inst. Mfg.",
        0x56 => "Fuji Onkyo Co., Ltd.",
        0x57 => "Onkyo Research Institute Co., Ltd.",
        0x5A => "Internet Co., Ltd.",
        0x5C => "Seekers Co., Ltd.",
        0x5F => "SD Card Association",
        0x7D => "Non Commercial",
        0x7E => "Non-Real Time",
        0x7F => "Real Time",
        _ => return None,
    })
}

fn extended_manufacturer_name(b1: u8, b2: u8) -> Option<&'static str> {
    Some(match (b1, b2) {
        (0x00, 0x01) => "Time Warner Interactive",
        (0x00, 0x07) => "Digital Music Corp.",
        (0x00, 0x08) => "IOTA Systems",
        (0x00, 0x09) => "New England Digital",
        (0x00, 0x0A) => "Artisyn",
        (0x00, 0x0B) => "IVL Technologies",
        (0x00, 0x0C) => "Southern Music Systems",
        (0x00, 0x0D) => "Lake Butler Sound Company",
        (0x00, 0x0E) => "Alesis",
        (0x00, 0x10) => "DOD Electronics",
        (0x00, 0x11) => "Studer-Editech",
        (0x00, 0x14) => "Perfect Fretworks",
        (0x00, 0x15) => "KAT",
        (0x00, 0x16) => "Opcode",
        (0x00, 0x17) => "Rane Corp.",
        (0x00, 0x18) => "Anadi Inc.",
        (0x00, 0x19) => "KMX",
        (0x00, 0x1A) => "Allen & Heath Brenell",
        (0x00, 0x1B) => "Peavey Electronics",
        (0x00, 0x1C) => "360 Systems",
        (0x00, 0x1D) => "Spectrum Design and Development",
        (0x00, 0x1E) => "Marquis Music",
        (0x00, 0x1F) => "Zeta Systems",
        (0x00, 0x20) => "Axxes",
        (0x00, 0x21) => "Orban",
        (0x00, 0x24) => "KTI",
        (0x00, 0x25) => "Breakaway Technologies",
        (0x00, 0x26) => "CAE",
        (0x00, 0x29) => "Rocktron Corp.",
        (0x00, 0x2A) => "PianoDisc",
        (0x00, 0x2B) => "Cannon Research Group",
        (0x00, 0x2D) => "Regors Instrument Corp.",
        (0x00, 0x2E) => "Blue Sky Logic",
        (0x00, 0x2F) => "Encore Electronics",
        (0x00, 0x30) => "Uptown",
        (0x00, 0x31) => "Voce",
        (0x00, 0x32) => "CTI Audio, Inc. (Music. Intel Dev.)",
        (0x00, 0x33) => "S&S Research",
        (0x00, 0x34) => "Broderbund Software, Inc.",
        (0x00, 0x35) => "Allen Organ Co.",
        (0x00, 0x37) => "Music Quest",
        (0x00, 0x38) => "APHEX",
        (0x00, 0x39) => "Gallien Krueger",
        (0x00, 0x3A) => "IBM",
        (0x00, 0x3C) => "Hotz Instruments Technologies",
        (0x00, 0x3D) => "ETA Lighting",
        (0x00, 0x3E) => "NSI Corporation",
        (0x00, 0x3F) => "Ad Lib, Inc.",
        (0x00, 0x40) => "Richmond Sound Design",
        (0x00, 0x41) => "Microsoft",
        (0x00, 0x42) => "The Software Toolworks",
        (0x00, 0x43) => "Niche/RJMG",
        (0x00, 0x44) => "Intone",
        (0x00, 0x47) => "GT Electronics/Groove Tubes",
        (0x00, 0x49) => "Timeline Vista",
        (0x00, 0x4A) => "Mesa Boogie",
        (0x00, 0x4C) => "Sequoia Development",
        (0x00, 0x4D) => "Studio Electronics",
        (0x00, 0x4E) => "Euphonix",
        (0x00, 0x4F) => "InterMIDI",
        (0x00, 0x50) => "MIDI Solutions",
        (0x00, 0x51) => "3DO Company",
        (0x00, 0x52) => "Lightwave Research",
        (0x00, 0x53) => "Micro-W",
        (0x00, 0x54) => "Spectral Synthesis",
        (0x00, 0x55) => "Lone Wolf",
        (0x00, 0x56) => "Studio Technologies",
        (0x00, 0x57) => "Peterson EMP",
        (0x00, 0x58) => "Atari",
        (0x00, 0x59) => "Marion Systems",
        (0x00, 0x5A) => "Design Event",
        (0x00, 0x5B) => "Winjammer Software",
        (0x00, 0x5C) => "AT&T Bell Labs",
        (0x00, 0x5E) => "Symetrix",
        (0x00, 0x5F) => "MIDI the world",
        (0x00, 0x60) => "Desper Products",
        (0x00, 0x61) => "Micros 'N MIDI",
        (0x00, 0x62) => "Accordians Intl",
        (0x00, 0x63) => "EuPhonics",
        (0x00, 0x64) => "Musonix",
        (0x00, 0x65) => "Turtle Beach Systems",
        (0x00, 0x66) => "Mackie Designs",
        (0x00, 0x67) => "Compuserve",
        (0x00, 0x68) => "BES Technologies",
        (0x00, 0x69) => "QRS Music Rolls",
        (0x00, 0x6A) => "P G Music",
        (0x00, 0x6B) => "Sierra Semiconductor",
        (0x00, 0x6C) => "EpiGraf Audio Visual",
        (0x00, 0x6D) => "Electronics Diversified",
        (0x00, 0x6E) => "Tune 1000",
        (0x00, 0x6F) => "Advanced Micro Devices",
        (0x00, 0x70) => "Mediamation",
        (0x00, 0x71) => "Sabine Music",
        (0x00, 0x72) => "Woog Labs",
        (0x00, 0x73) => "Micropolis",
        (0x00, 0x74) => "Ta Horng Musical Inst.",
        (0x00, 0x75) => "eTek (formerly Forte)",
        (0x00, 0x76) => "Electrovoice",
        (0x00, 0x77) => "Midisoft",
        (0x00, 0x78) => "Q-Sound Labs",
        (0x00, 0x79) => "Westrex",
        (0x00, 0x7A) => "NVidia",
        (0x00, 0x7B) => "ESS Technology",
        (0x00, 0x7C) => "MediaTrix Peripherals",
        (0x00, 0x7D) => "Brooktree",
        (0x00, 0x7E) => "Otari",
        (0x00, 0x7F) => "Key Electronics",
        (0x20, 0x00) => "Dream",
        (0x20, 0x01) => "Strand Lighting",
        (0x20, 0x02) => "Amek Systems",
        (0x20, 0x04) => "Böhm Electronic",
        (0x20, 0x06) => "Trident Audio",
        (0x20, 0x07) => "Real World Studio",
        (0x20, 0x09) => "Yes Technology",
        (0x20, 0x0A) => "Automatica",
        (0x20, 0x0B) => "Bontempi/Farfisa",
        (0x20, 0x0C) => "F.B.T. Elettronica",
        (0x20, 0x0D) => "MidiTemp",
        (0x20, 0x0E) => "LA Audio (Larking Audio)",
        (0x20, 0x0F) => "Zero 88 Lighting Limited",
        (0x20, 0x10) => "Micon Audio Electronics GmbH",
        (0x20, 0x11) => "Forefront Technology",
        (0x20, 0x13) => "Kenton Electronics",
        (0x20, 0x15) => "ADB",
        (0x20, 0x16) => "Marshall Products",
        (0x20, 0x17) => "DDA",
        (0x20, 0x18) => "BSS",
        (0x20, 0x19) => "MA Lighting Technology",
        (0x20, 0x1A) => "Fatar",
        (0x20, 0x1B) => "QSC Audio",
        (0x20, 0x1C) => "Artisan Classic Organ",
        (0x20, 0x1D) => "Orla Spa",
        (0x20, 0x1E) => "Pinnacle Audio",
        (0x20, 0x1F) => "TC Electronics",
        (0x20, 0x20) => "Doepfer Musikelektronik",
        (0x20, 0x21) => "Creative Technology Pte",
        (0x20, 0x22) => "Minami/Seiyddo",
        (0x20, 0x23) => "Goldstar",
        (0x20, 0x24) => "Midisoft s.a.s. di M. Cima",
        (0x20, 0x25) => "Samick",
        (0x20, 0x26) => "Penny and Giles",
        (0x20, 0x27) => "Acorn Computer",
        (0x20, 0x28) => "LSC Electronics",
        (0x20, 0x29) => "Novation EMS",
        (0x20, 0x2A) => "Samkyung Mechatronics",
        (0x20, 0x2B) => "Medeli Electronics",
        (0x20, 0x2C) => "Charlie Lab",
        (0x20, 0x2D) => "Blue Chip Music Tech",
        (0x20, 0x2E) => "BBE OH Corp",
        (0x40, 0x00) => "Crimson Technology Inc.",
        (0x40, 0x01) => "Vodafone Co., Ltd.",
        (0x40, 0x03) => "D & M Holdings Co., Ltd.",
        (0x40, 0x04) => "XING Inc.",
        (0x40, 0x05) => "AlphaTheta Corporation",
        (0x40, 0x06) => "Pioneer Corporation",
        (0x40, 0x07) => "Slick Co., Ltd.",
        (0x48, 0x00) => "sigboost Co., Ltd.",
        (0x48, 0x01) => "Lost Technology",
        (0x48, 0x02) => "Uchiwa Fujin",
        (0x48, 0x03) => "Tsukuba Science Co., Ltd.",
        (0x48, 0x04) => "Sonicware Co., Ltd.",
        (0x48, 0x05) => "Poppy only workshop",
        (0x48, 0x06) => "BLACK CORPORATION GK",
        (0x48, 0x07) => "G-TONE Giken Co., Ltd.",
        _ => return None,
    })
}

/// Sub-ID#1 name of a Non-Real Time (`0x7E`) Universal message.
pub fn non_realtime_sub_id1_name(sub_id1: u8) -> Option<&'static str> {
    Some(match sub_id1 {
        0x00 => "Unused",
        0x01 => "Sample Dump Header",
        0x02 => "Sample Data Packet",
        0x03 => "Sample Dump Request",
        0x04 => "MIDI Time Code",
        0x05 => "Sample Dump Extensions",
        0x06 => "General Information",
        0x07 => "File Dump",
        0x08 => "MIDI Tuning Standard",
        0x09 => "General MIDI",
        0x7B => "End of File",
        0x7C => "Wait",
        0x7D => "Cancel",
        0x7E => "NAK",
        0x7F => "ACK",
        _ => return None,
    })
}

/// Sub-ID#1 name of a Real Time (`0x7F`) Universal message.
pub fn realtime_sub_id1_name(sub_id1: u8) -> Option<&'static str> {
    Some(match sub_id1 {
        0x00 => "Unused",
        0x01 => "MIDI Time Code",
        0x02 => "MIDI Show Control",
        0x03 => "Notation Information",
        0x04 => "Device Control",
        0x05 => "Real Time MTC Cueing",
        0x06 => "MIDI Machine Control Commands",
        0x07 => "MIDI Machine Control Responses",
        0x08 => "MIDI Tuning Standard",
        _ => return None,
    })
}

/// Whether a Non-Real Time Sub-ID#1 is followed by a Sub-ID#2 byte.
pub fn non_realtime_has_sub_id2(sub_id1: u8) -> bool {
    matches!(sub_id1, 0x04..=0x09)
}

/// Whether a Real Time Sub-ID#1 is followed by a Sub-ID#2 byte.
pub fn realtime_has_sub_id2(sub_id1: u8) -> bool {
    matches!(sub_id1, 0x01..=0x08)
}

pub fn non_realtime_sub_id2_name(sub_id1: u8, sub_id2: u8) -> Option<&'static str> {
    Some(match (sub_id1, sub_id2) {
        (0x04, _) => return mtc_cueing_name(sub_id2, false),
        (0x05, 0x01) => "Multiple Loop Points",
        (0x05, 0x02) => "Loop Points Request",
        (0x06, 0x01) => "Identity Request",
        (0x06, 0x02) => "Identity Reply",
        (0x07, 0x01) => "Header",
        (0x07, 0x02) => "Data Packet",
        (0x07, 0x03) => "Request",
        (0x08, 0x00) => "Bulk Dump Request",
        (0x08, 0x01) => "Bulk Dump Reply",
        (0x09, 0x01) => "General MIDI System On",
        (0x09, 0x02) => "General MIDI System Off",
        _ => return None,
    })
}

pub fn realtime_sub_id2_name(sub_id1: u8, sub_id2: u8) -> Option<&'static str> {
    Some(match (sub_id1, sub_id2) {
        (0x01, 0x01) => "Full Message",
        (0x01, 0x02) => "User Bits",
        (0x02, _) => return show_control_category(sub_id2),
        (0x03, 0x01) => "Bar Number",
        (0x03, 0x02) => "Time Signature (Immediate)",
        (0x03, 0x03) => "Time Signature (Delayed)",
        (0x04, 0x01) => "Master Volume",
        (0x04, 0x02) => "Master Balance",
        (0x05, _) => return mtc_cueing_name(sub_id2, true),
        (0x06, _) => return machine_control_command(sub_id2),
        (0x07, _) => return machine_control_response(sub_id2),
        (0x08, 0x02) => "Note Change",
        _ => return None,
    })
}

// Real time cueing leaves the delete variants reserved.
fn mtc_cueing_name(sub_id2: u8, realtime: bool) -> Option<&'static str> {
    Some(match sub_id2 {
        0x00 => "Special",
        0x01 => "Punch In Points",
        0x02 => "Punch Out Points",
        0x03 | 0x04 | 0x09 | 0x0A | 0x0D if realtime => "(Reserved)",
        0x03 => "Delete Punch In Points",
        0x04 => "Delete Punch Out Points",
        0x05 => "Event Start Point",
        0x06 => "Event Stop Point",
        0x07 => "Event Start Points with additional info.",
        0x08 => "Event Stop Points with additional info.",
        0x09 => "Delete Event Start Point",
        0x0A => "Delete Event Stop Point",
        0x0B => "Cue Points",
        0x0C => "Cue Points with additional info.",
        0x0D => "Delete Cue Point",
        0x0E => "Event Name in additional info.",
        _ => return None,
    })
}

fn show_control_category(sub_id2: u8) -> Option<&'static str> {
    Some(match sub_id2 {
        0x00 => "(Reserved)",
        0x01 => "Lighting (General Category)",
        0x02 => "Moving Lights",
        0x03 => "Color Changers",
        0x04 => "Strobes",
        0x05 => "Lasers",
        0x06 => "Chasers",
        0x10 => "Sound (General Category)",
        0x11 => "Music",
        0x12 => "CD Players",
        0x13 => "EPROM Playback",
        0x14 => "Audio Tape Machines",
        0x15 => "Intercoms",
        0x16 => "Amplifiers",
        0x17 => "Audio Effects Devices",
        0x18 => "Equalizers",
        0x20 => "Machinery (General Category)",
        0x21 => "Rigging",
        0x22 => "Flys",
        0x23 => "Lifts",
        0x24 => "Turntables",
        0x25 => "Trusses",
        0x26 => "Robots",
        0x27 => "Animation",
        0x28 => "Floats",
        0x29 => "Breakaways",
        0x2A => "Barges",
        0x30 => "Video (General Category)",
        0x31 => "Video Tape Machines",
        0x32 => "Video Cassette Machines",
        0x33 => "Video Disc Players",
        0x34 => "Video Switchers",
        0x35 => "Video Effects",
        0x36 => "Video Character Generators",
        0x37 => "Video Still Stores",
        0x38 => "Video Monitors",
        0x40 => "Projection (General Category)",
        0x41 => "Film Projectors",
        0x42 => "Slide Projectors",
        0x43 => "Video Projectors",
        0x44 => "Dissolvers",
        0x45 => "Shutter Controls",
        0x50 => "Process Control (General Category)",
        0x51 => "Hydraulic Oil",
        0x52 => "H2O",
        0x53 => "CO2",
        0x54 => "Compressed Air",
        0x55 => "Natural Gas",
        0x56 => "Fog",
        0x57 => "Smoke",
        0x58 => "Cracked Haze",
        0x60 => "Pyro (General Category)",
        0x61 => "Fireworks",
        0x62 => "Explosions",
        0x63 => "Flame",
        0x64 => "Smoke pots",
        0x7F => "All-types",
        _ => return None,
    })
}

fn machine_control_command(sub_id2: u8) -> Option<&'static str> {
    Some(match sub_id2 {
        0x00 => "(Reserved)",
        0x01 => "STOP",
        0x02 => "PLAY",
        0x03 => "DEFERRED PLAY",
        0x04 => "FAST FORWARD",
        0x05 => "REWIND",
        0x06 => "RECORD STROBE",
        0x07 => "RECORD EXIT",
        0x08 => "RECORD PAUSE",
        0x09 => "PAUSE",
        0x0A => "EJECT",
        0x0B => "CHASE",
        0x0C => "COMMAND ERROR RESET",
        0x0D => "MMC RESET",
        0x40 => "WRITE",
        0x41 => "MASKED WRITE",
        0x42 => "READ",
        0x43 => "UPDATE",
        0x44 => "LOCATE",
        0x45 => "VARIABLE PLAY",
        0x46 => "SEARCH",
        0x47 => "SHUTTLE",
        0x48 => "STEP",
        0x49 => "ASSIGN SYSTEM MASTER",
        0x4A => "GENERATOR COMMAND",
        0x4B => "MIDI TIME CODE COMMAND",
        0x4C => "MOVE",
        0x4D => "ADD",
        0x4E => "SUBTRACT",
        0x4F => "DROP FRAME ADJUST",
        0x50 => "PROCEDURE",
        0x51 => "EVENT",
        0x52 => "GROUP",
        0x53 => "COMMAND SEGMENT",
        0x54 => "DEFERRED VARIABLE PLAY",
        0x55 => "RECORD STROBE VARIABLE",
        0x7C => "WAIT",
        0x7F => "RESUME",
        _ => return None,
    })
}

fn machine_control_response(sub_id2: u8) -> Option<&'static str> {
    Some(match sub_id2 {
        0x00 | 0x20 => "(Reserved)",
        0x01 => "SELECTED TIME CODE",
        0x02 => "SELECTED MASTER CODE",
        0x03 => "REQUESTED OFFSET",
        0x04 => "ACTUAL OFFSET",
        0x05 => "LOCK DEVIATION",
        0x06 => "GENERATOR TIME CODE",
        0x07 => "MIDI TIME CODE INPUT",
        0x08 => "GP0 / LOCATE POINT",
        0x09 => "GP1",
        0x0A => "GP2",
        0x0B => "GP3",
        0x0C => "GP4",
        0x0D => "GP5",
        0x0E => "GP6",
        0x0F => "GP7",
        0x21 => "Short SELECTED TIME CODE",
        0x22 => "Short SELECTED MASTER CODE",
        0x23 => "Short REQUESTED OFFSET",
        0x24 => "Short ACTUAL OFFSET",
        0x25 => "Short LOCK DEVIATION",
        0x26 => "Short GENERATOR TIME CODE",
        0x27 => "Short MIDI TIME CODE INPUT",
        0x28 => "Short GP0 / LOCATE POINT",
        0x29 => "Short GP1",
        0x2A => "Short GP2",
        0x2B => "Short GP3",
        0x2C => "Short GP4",
        0x2D => "Short GP5",
        0x2E => "Short GP6",
        0x2F => "Short GP7",
        0x40 => "SIGNATURE",
        0x41 => "UPDATE RATE",
        0x42 => "RESPONSE ERROR",
        0x43 => "COMMAND ERROR",
        0x44 => "COMMAND ERROR LEVEL",
        0x45 => "TIME STANDARD",
        0x46 => "SELECTED TIME CODE SOURCE",
        0x47 => "SELECTED TIME CODE USERBITS",
        0x48 => "MOTION CONTROL TALLY",
        0x49 => "VELOCITY TALLY",
        0x4A => "STOP MODE",
        0x4B => "FAST MODE",
        0x4C => "RECORD MODE",
        0x4D => "RECORD STATUS",
        0x4E => "TRACK RECORD STATUS",
        0x4F => "TRACK RECORD READY",
        0x50 => "GLOBAL MONITOR",
        0x51 => "RECORD MONITOR",
        0x52 => "TRACK SYNC MONITOR",
        0x53 => "TRACK INPUT MONITOR",
        0x54 => "STEP LENGTH",
        0x55 => "PLAY SPEED REFERENCE",
        0x56 => "FIXED SPEED",
        0x57 => "LIFTER DEFEAT",
        0x58 => "CONTROL DISABLE",
        0x59 => "RESOLVED PLAY MODE",
        0x5A => "CHASE MODE",
        0x5B => "GENERATOR COMMAND TALLY",
        0x5C => "GENERATOR SET UP",
        0x5D => "GENERATOR USERBITS",
        0x5E => "MIDI TIME CODE COMMAND TALLY",
        0x5F => "MIDI TIME CODE SET UP",
        0x60 => "PROCEDURE RESPONSE",
        0x61 => "EVENT RESPONSE",
        0x62 => "TRACK MUTE",
        0x63 => "VITC INSERT ENABLE",
        0x64 => "RESPONSE SEGMENT",
        0x65 => "FAILURE",
        0x7C => "WAIT",
        0x7F => "RESUME",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_names() {
        assert_eq!(note_name(0), "C-1");
        assert_eq!(note_name(60), "C4");
        assert_eq!(note_name(61), "C#4");
        assert_eq!(note_name(69), "A4");
        assert_eq!(note_name(127), "G9");
    }

    #[test]
    fn test_controller_names() {
        assert_eq!(controller_name(7, false), "Channel Volume");
        assert_eq!(controller_name(64, false), "Damper pedal (sustain)");
        assert_eq!(controller_name(91, false), "Effects 1 Depth");
        assert_eq!(controller_name(91, true), "Reverb Send Level");
        assert_eq!(controller_name(93, false), "Effects 3 Depth");
        assert_eq!(controller_name(93, true), "Chorus Send Level");
        assert_eq!(controller_name(92, true), "Effects 2 Depth");
        assert_eq!(controller_name(101, false), "Registered Parameter Number MSB");
        assert_eq!(controller_name(123, false), "All Notes Off");
    }

    #[test]
    fn test_status_names() {
        assert_eq!(status_name(0x40), None);
        assert_eq!(status_name(0x93), Some("Note On"));
        assert_eq!(status_name(0xF1), Some("MIDI Time Code Quarter Frame"));
        assert_eq!(status_name(0xF8), Some("Timing Clock"));
        assert_eq!(status_name(0xFD), Some("Undefined"));
    }

    #[test]
    fn test_manufacturer_lookup() {
        assert_eq!(ManufacturerId::Short(0x43).name(), Some("Yamaha"));
        assert_eq!(ManufacturerId::Short(0x41).region(), IdRegion::Japanese);
        assert_eq!(ManufacturerId::Short(0x43).group(), IdGroup::Manufacturer);
        assert_eq!(ManufacturerId::Extended(0x00, 0x66).name(), Some("Mackie Designs"));
        assert_eq!(ManufacturerId::Extended(0x00, 0x66).region(), IdRegion::American);
        assert_eq!(ManufacturerId::Extended(0x20, 0x29).name(), Some("Novation EMS"));
        assert_eq!(ManufacturerId::Extended(0x20, 0x29).region(), IdRegion::European);
        assert_eq!(ManufacturerId::Extended(0x6A, 0x01).name(), None);
    }

    #[test]
    fn test_special_ids() {
        assert_eq!(ManufacturerId::Short(0x7D).group(), IdGroup::Reserved);
        assert_eq!(ManufacturerId::Short(0x7E).group(), IdGroup::Universal);
        assert_eq!(ManufacturerId::Short(0x7F).group(), IdGroup::Universal);
        assert_eq!(ManufacturerId::Short(0x7E).region(), IdRegion::Special);
        assert_eq!(ManufacturerId::Short(0x7E).name(), Some("Non-Real Time"));
    }

    #[test]
    fn test_universal_tables() {
        assert_eq!(non_realtime_sub_id1_name(0x06), Some("General Information"));
        assert_eq!(non_realtime_sub_id2_name(0x06, 0x01), Some("Identity Request"));
        assert_eq!(non_realtime_sub_id2_name(0x04, 0x03), Some("Delete Punch In Points"));
        assert!(!non_realtime_has_sub_id2(0x01));
        assert_eq!(realtime_sub_id1_name(0x06), Some("MIDI Machine Control Commands"));
        assert_eq!(realtime_sub_id2_name(0x06, 0x02), Some("PLAY"));
        assert_eq!(realtime_sub_id2_name(0x05, 0x03), Some("(Reserved)"));
        assert_eq!(realtime_sub_id2_name(0x04, 0x01), Some("Master Volume"));
        assert!(realtime_has_sub_id2(0x01));
        assert!(!realtime_has_sub_id2(0x09));
    }

    #[test]
    fn test_registered_parameters() {
        assert_eq!(registered_parameter_name(0, 0), Some("Pitch Bend Sensitivity"));
        assert_eq!(registered_parameter_name(0, 5), Some("Modulation Depth Range"));
        assert_eq!(registered_parameter_name(1, 0), None);
    }

    #[test]
    fn test_quarter_frame_pieces() {
        assert_eq!(quarter_frame_piece(0), Some("Frame count LS nibble"));
        assert_eq!(quarter_frame_piece(7), Some("Hours count MS nibble and SMPTE Type"));
        assert_eq!(quarter_frame_piece(8), None);
    }
}
