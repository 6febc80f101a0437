// SPDX-License-Identifier: Apache-2.0 or BSD-3-Clause

//! SCSI sense data: classification, decoding of the standard (SASI), fixed and
//! descriptor formats, and their textual rendering.

mod asc;

use std::fmt::Write;

use log::debug;
use num_enum::{FromPrimitive, IntoPrimitive};

pub use self::asc::describe;
use crate::{
    field::{be16, be24, be32, be64, bits, flag, put_be24, put_be32},
    require_len, DecodeError, Result,
};

/// The layout a sense buffer uses, as told by its first byte and length.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SenseType {
    /// Pre-SCSI-2 four byte sense.
    StandardSense,
    ExtendedSenseFixedCurrent,
    ExtendedSenseFixedPast,
    ExtendedSenseDescriptorCurrent,
    ExtendedSenseDescriptorPast,
    Invalid,
    Unknown,
}

pub fn classify(sense: &[u8]) -> SenseType {
    if sense.len() < 4 {
        return SenseType::Invalid;
    }
    if sense[0] & 0x70 != 0x70 {
        return if sense.len() == 4 {
            SenseType::StandardSense
        } else {
            SenseType::Invalid
        };
    }
    match sense[0] & 0x0f {
        0 => SenseType::ExtendedSenseFixedCurrent,
        1 => SenseType::ExtendedSenseFixedPast,
        2 => SenseType::ExtendedSenseDescriptorCurrent,
        3 => SenseType::ExtendedSenseDescriptorPast,
        _ => SenseType::Unknown,
    }
}

/// The sense key nibble. Conversions from raw bytes mask off the upper four
/// bits first.
#[derive(Debug, PartialEq, Eq, Clone, Copy, FromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum SenseKey {
    NoSense = 0x0,
    RecoveredError = 0x1,
    NotReady = 0x2,
    MediumError = 0x3,
    HardwareError = 0x4,
    IllegalRequest = 0x5,
    UnitAttention = 0x6,
    DataProtect = 0x7,
    BlankCheck = 0x8,
    VendorSpecific = 0x9,
    CopyAborted = 0xa,
    AbortedCommand = 0xb,
    Equal = 0xc,
    VolumeOverflow = 0xd,
    Miscompare = 0xe,
    #[num_enum(default)]
    Completed = 0xf,
}

impl SenseKey {
    pub const fn description(self) -> &'static str {
        match self {
            Self::NoSense => "No sense",
            Self::RecoveredError => "Recovered error",
            Self::NotReady => "Not ready",
            Self::MediumError => "Medium error",
            Self::HardwareError => "Hardware error",
            Self::IllegalRequest => "Illegal request",
            Self::UnitAttention => "Unit attention",
            Self::DataProtect => "Data protect",
            Self::BlankCheck => "Blank check",
            Self::VendorSpecific => "Vendor specific",
            Self::CopyAborted => "Copy aborted",
            Self::AbortedCommand => "Aborted command",
            Self::Equal => "Equal comparison satisfied",
            Self::VolumeOverflow => "Volume overflow",
            Self::Miscompare => "Miscompare",
            Self::Completed => "Completed",
        }
    }
}

/// Sense key, ASC and ASCQ; enough to build a minimal fixed sense buffer.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub struct SenseTriple(pub SenseKey, pub u8, pub u8);

impl SenseTriple {
    pub fn to_fixed_sense(self) -> Vec<u8> {
        vec![
            0x70,         // response code (fixed, current); valid bit (0)
            0x0,          // obsolete
            u8::from(self.0), // sk; various upper bits 0
            0x0, 0x0, 0x0, 0x0, // information
            0xa, // add'l sense length
            0x0, 0x0, 0x0, 0x0,    // cmd-specific information
            self.1, // asc
            self.2, // ascq
            0x0,    // field-replacable unit code
            0x0, 0x0, 0x0, // sense-key-specific information
        ]
    }
}

pub const NO_ADDITIONAL_SENSE_INFORMATION: SenseTriple = SenseTriple(SenseKey::NoSense, 0, 0);
pub const INVALID_COMMAND_OPERATION_CODE: SenseTriple =
    SenseTriple(SenseKey::IllegalRequest, 0x20, 0x0);
pub const LOGICAL_BLOCK_ADDRESS_OUT_OF_RANGE: SenseTriple =
    SenseTriple(SenseKey::IllegalRequest, 0x21, 0x0);
pub const INVALID_FIELD_IN_CDB: SenseTriple = SenseTriple(SenseKey::IllegalRequest, 0x24, 0x0);
pub const MEDIUM_NOT_PRESENT: SenseTriple = SenseTriple(SenseKey::NotReady, 0x3a, 0x0);
pub const UNRECOVERED_READ_ERROR: SenseTriple = SenseTriple(SenseKey::MediumError, 0x11, 0x0);

/// Four byte sense from SASI / SCSI-1 devices.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct StandardSense {
    pub address_valid: bool,
    pub error_class: u8,
    pub error_type: u8,
    pub lba: u32,
}

impl StandardSense {
    pub fn decode(sense: &[u8]) -> Result<Self> {
        require_len(sense, 4)?;
        if classify(sense) != SenseType::StandardSense {
            debug!("Rejecting standard sense with first byte {:#04x}", sense[0]);
            return Err(DecodeError::UnexpectedFormat(sense[0]));
        }
        Ok(Self {
            address_valid: flag(sense, 0, 0x80),
            error_class: bits(sense, 0, 0x70, 4),
            error_type: bits(sense, 0, 0x0f, 0),
            lba: (u32::from(sense[1] & 0x1f) << 16) | u32::from(be16(sense, 2)),
        })
    }

    pub fn prettify(&self) -> String {
        if self.address_valid {
            format!(
                "Error class {} type {} happened on block {}\n",
                self.error_class, self.error_type, self.lba
            )
        } else {
            format!(
                "Error class {} type {}\n",
                self.error_class, self.error_type
            )
        }
    }
}

/// Fixed format sense data (response codes 70h and 71h).
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct FixedSense {
    pub information_valid: bool,
    /// Response code 71h: the sense describes a deferred error.
    pub deferred: bool,
    pub segment_number: u8,
    pub filemark: bool,
    pub eom: bool,
    pub ili: bool,
    pub sense_key: SenseKey,
    pub information: u32,
    pub additional_length: u8,
    pub command_specific: Option<u32>,
    pub asc: Option<u8>,
    pub ascq: Option<u8>,
    pub field_replaceable_unit: Option<u8>,
    /// Sense key specific bytes, including the SKSV bit (bit 23).
    pub sense_key_specific: Option<u32>,
    /// Bytes after the last field decoded: the additional sense bytes, or
    /// the partial field or padding of a buffer that stops short of them.
    pub additional_sense: Vec<u8>,
}

impl FixedSense {
    /// Decode fixed format sense.
    ///
    /// The fields after byte 7 are only filled in when the buffer is exactly
    /// as long as the ADDITIONAL SENSE LENGTH says; a buffer that was cut
    /// short or padded only yields the first eight bytes. Bytes that fill no
    /// field are kept in `additional_sense`.
    pub fn decode(sense: &[u8]) -> Result<Self> {
        require_len(sense, 8)?;
        let response_code = sense[0] & 0x7f;
        if response_code != 0x70 && response_code != 0x71 {
            debug!("Rejecting fixed sense with response code {response_code:#04x}");
            return Err(DecodeError::UnexpectedFormat(sense[0]));
        }

        let mut decoded = Self {
            information_valid: flag(sense, 0, 0x80),
            deferred: response_code == 0x71,
            segment_number: sense[1],
            filemark: flag(sense, 2, 0x80),
            eom: flag(sense, 2, 0x40),
            ili: flag(sense, 2, 0x20),
            sense_key: SenseKey::from(sense[2] & 0x0f),
            information: be32(sense, 3),
            additional_length: sense[7],
            command_specific: None,
            asc: None,
            ascq: None,
            field_replaceable_unit: None,
            sense_key_specific: None,
            additional_sense: Vec::new(),
        };

        let len = sense.len();
        let mut tail = 8;
        if len == usize::from(decoded.additional_length) + 8 {
            if len >= 12 {
                decoded.command_specific = Some(be32(sense, 8));
                tail = 12;
            }
            if len >= 14 {
                decoded.asc = Some(sense[12]);
                decoded.ascq = Some(sense[13]);
                tail = 14;
            }
            if len >= 15 {
                decoded.field_replaceable_unit = Some(sense[14]);
                tail = 15;
            }
            if len >= 18 {
                decoded.sense_key_specific = Some(be24(sense, 15));
                tail = 18;
            }
        } else {
            debug!(
                "Fixed sense is {len} bytes but declares {}, keeping only the header",
                usize::from(decoded.additional_length) + 8
            );
        }
        decoded.additional_sense = sense[tail..].to_vec();

        Ok(decoded)
    }

    pub const fn sense_key_specific_valid(&self) -> bool {
        matches!(self.sense_key_specific, Some(sks) if sks & 0x80_0000 != 0)
    }

    /// Byte image of this record. Fields that were absent when decoding stay
    /// absent, so the buffer a record was decoded from is reproduced exactly.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = vec![0; 8];
        out[0] = if self.deferred { 0x71 } else { 0x70 };
        if self.information_valid {
            out[0] |= 0x80;
        }
        out[1] = self.segment_number;
        out[2] = u8::from(self.sense_key)
            | if self.filemark { 0x80 } else { 0 }
            | if self.eom { 0x40 } else { 0 }
            | if self.ili { 0x20 } else { 0 };
        put_be32(&mut out, 3, self.information);
        out[7] = self.additional_length;

        if let Some(cmd) = self.command_specific {
            out.extend_from_slice(&cmd.to_be_bytes());
        }
        if let (Some(asc), Some(ascq)) = (self.asc, self.ascq) {
            out.extend_from_slice(&[asc, ascq]);
        }
        if let Some(fru) = self.field_replaceable_unit {
            out.push(fru);
        }
        if let Some(sks) = self.sense_key_specific {
            let at = out.len();
            out.extend_from_slice(&[0; 3]);
            put_be24(&mut out, at, sks);
        }
        out.extend_from_slice(&self.additional_sense);
        out
    }

    pub fn prettify(&self) -> String {
        let mut sb = format!("SCSI SENSE: {}\n", self.sense_key.description());
        if self.deferred {
            sb.push_str("Deferred error\n");
        }
        if self.segment_number > 0 {
            let _ = writeln!(sb, "On segment {}", self.segment_number);
        }
        if self.filemark {
            sb.push_str("Filemark or setmark found\n");
        }
        if self.eom {
            sb.push_str("End-of-medium/partition found\n");
        }
        if self.ili {
            sb.push_str("Incorrect length indicator\n");
        }
        if self.information_valid {
            let _ = writeln!(sb, "On logical block {}", self.information);
        }
        if let (Some(asc), Some(ascq)) = (self.asc, self.ascq) {
            let _ = writeln!(sb, "{}", describe(asc, ascq));
        }
        if let Some(fru) = self.field_replaceable_unit.filter(|&fru| fru != 0) {
            let _ = writeln!(sb, "Field replaceable unit code {fru:#04x}");
        }
        if let Some(sks) = self.sense_key_specific.filter(|_| self.sense_key_specific_valid()) {
            if let Some(text) = sense_key_specific_description(self.sense_key, sks) {
                let _ = writeln!(sb, "{text}");
            }
        }
        sb
    }
}

impl From<SenseTriple> for FixedSense {
    fn from(triple: SenseTriple) -> Self {
        Self {
            information_valid: false,
            deferred: false,
            segment_number: 0,
            filemark: false,
            eom: false,
            ili: false,
            sense_key: triple.0,
            information: 0,
            additional_length: 0xa,
            command_specific: Some(0),
            asc: Some(triple.1),
            ascq: Some(triple.2),
            field_replaceable_unit: Some(0),
            sense_key_specific: Some(0),
            additional_sense: Vec::new(),
        }
    }
}

/// Interpretation of the 24-bit sense key specific field, when the sense key
/// gives it a meaning.
pub fn sense_key_specific_description(key: SenseKey, sks: u32) -> Option<String> {
    match key {
        SenseKey::IllegalRequest => {
            let place = if sks & 0x40_0000 != 0 {
                "CDB"
            } else {
                "data parameters"
            };
            let field = sks & 0xffff;
            Some(if sks & 0x08_0000 != 0 {
                format!(
                    "Invalid value in bit {} in field {field} of {place}",
                    (sks & 0x07_0000) >> 16
                )
            } else {
                format!("Invalid value in field {field} of {place}")
            })
        }
        SenseKey::NotReady => Some(format!(
            "Format progress {:.2}%",
            f64::from(sks & 0xffff) * 100.0 / 65536.0
        )),
        SenseKey::RecoveredError | SenseKey::HardwareError | SenseKey::MediumError => {
            Some(format!("Actual retry count is {}", sks & 0xffff))
        }
        _ => None,
    }
}

/// One entry of the descriptor list in descriptor format sense.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum SenseDescriptor {
    Information { valid: bool, information: u64 },
    CommandSpecific(u64),
    /// Sense key specific bytes, SKSV bit included.
    SenseKeySpecific(u32),
    FieldReplaceableUnit(u8),
    StreamCommands { filemark: bool, eom: bool, ili: bool },
    BlockCommands { ili: bool },
    AtaStatusReturn {
        extend: bool,
        error: u8,
        count: u16,
        lba: u64,
        device: u8,
        status: u8,
    },
    ProgressIndication {
        sense_key: SenseKey,
        asc: u8,
        ascq: u8,
        progress: u16,
    },
    Other { descriptor_type: u8, data: Vec<u8> },
}

impl SenseDescriptor {
    /// Decode one descriptor; `desc` spans its two-byte header and payload.
    fn decode(desc: &[u8]) -> Self {
        let descriptor_type = desc[0];
        let len = desc[1];
        match (descriptor_type, len) {
            (0x00, 0x0a) => Self::Information {
                valid: flag(desc, 2, 0x80),
                information: be64(desc, 4),
            },
            (0x01, 0x0a) => Self::CommandSpecific(be64(desc, 4)),
            (0x02, 0x06) => Self::SenseKeySpecific(be24(desc, 4)),
            (0x03, 0x02) => Self::FieldReplaceableUnit(desc[3]),
            (0x04, 0x02) => Self::StreamCommands {
                filemark: flag(desc, 3, 0x80),
                eom: flag(desc, 3, 0x40),
                ili: flag(desc, 3, 0x20),
            },
            (0x05, 0x02) => Self::BlockCommands {
                ili: flag(desc, 3, 0x20),
            },
            (0x09, 0x0c) => Self::AtaStatusReturn {
                extend: flag(desc, 2, 0x01),
                error: desc[3],
                count: be16(desc, 4),
                // the LBA bytes alternate between the high and low halves
                lba: u64::from(desc[7])
                    | u64::from(desc[9]) << 8
                    | u64::from(desc[11]) << 16
                    | u64::from(desc[6]) << 24
                    | u64::from(desc[8]) << 32
                    | u64::from(desc[10]) << 40,
                device: desc[12],
                status: desc[13],
            },
            (0x0a, 0x06) => Self::ProgressIndication {
                sense_key: SenseKey::from(desc[2] & 0x0f),
                asc: desc[3],
                ascq: desc[4],
                progress: be16(desc, 6),
            },
            _ => Self::Other {
                descriptor_type,
                data: desc[2..].to_vec(),
            },
        }
    }

    fn prettify(&self, key: SenseKey) -> String {
        match self {
            Self::Information { valid, information } => {
                if *valid {
                    format!("Information: {information}")
                } else {
                    format!("Information (not valid): {information}")
                }
            }
            Self::CommandSpecific(info) => format!("Command specific information: {info:#x}"),
            Self::SenseKeySpecific(sks) => {
                if sks & 0x80_0000 == 0 {
                    "Sense key specific information not valid".to_owned()
                } else {
                    sense_key_specific_description(key, *sks)
                        .unwrap_or_else(|| format!("Sense key specific information {sks:#08x}"))
                }
            }
            Self::FieldReplaceableUnit(fru) => format!("Field replaceable unit code {fru:#04x}"),
            Self::StreamCommands { filemark, eom, ili } => {
                let mut sb = String::new();
                if *filemark {
                    sb.push_str("Filemark or setmark found\n");
                }
                if *eom {
                    sb.push_str("End-of-medium/partition found\n");
                }
                if *ili {
                    sb.push_str("Incorrect length indicator\n");
                }
                sb.trim_end().to_owned()
            }
            Self::BlockCommands { ili } => {
                if *ili {
                    "Incorrect length indicator".to_owned()
                } else {
                    "Block commands descriptor".to_owned()
                }
            }
            Self::AtaStatusReturn {
                extend,
                error,
                count,
                lba,
                device,
                status,
            } => format!(
                "ATA status return: error {error:#04x}, status {status:#04x}, device {device:#04x}, count {count}, LBA {lba}{}",
                if *extend { " (48-bit)" } else { "" }
            ),
            Self::ProgressIndication {
                sense_key,
                asc,
                ascq,
                progress,
            } => format!(
                "{} ({}) is {:.2}% complete",
                describe(*asc, *ascq),
                sense_key.description(),
                f64::from(*progress) * 100.0 / 65536.0
            ),
            Self::Other {
                descriptor_type,
                data,
            } => format!(
                "Descriptor type {descriptor_type:#04x} with {} bytes of data",
                data.len()
            ),
        }
    }
}

/// Descriptor format sense data (response codes 72h and 73h).
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DescriptorSense {
    pub deferred: bool,
    pub sense_key: SenseKey,
    pub asc: u8,
    pub ascq: u8,
    /// SDAT_OVFL: the sense data was truncated by the device.
    pub overflow: bool,
    pub additional_length: u8,
    pub descriptors: Vec<SenseDescriptor>,
}

impl DescriptorSense {
    pub fn decode(sense: &[u8]) -> Result<Self> {
        require_len(sense, 8)?;
        let response_code = sense[0] & 0x7f;
        if response_code != 0x72 && response_code != 0x73 {
            debug!("Rejecting descriptor sense with response code {response_code:#04x}");
            return Err(DecodeError::UnexpectedFormat(sense[0]));
        }
        let end = usize::from(sense[7]) + 8;
        if end > sense.len() {
            debug!(
                "Descriptor sense declares {end} bytes but only {} are available",
                sense.len()
            );
            return Err(DecodeError::LengthMismatch {
                declared: end,
                actual: sense.len(),
            });
        }

        let mut descriptors = Vec::new();
        let mut position = 8;
        while position < end {
            if position + 2 > end || position + 2 + usize::from(sense[position + 1]) > end {
                debug!("Sense descriptor at {position} overruns the descriptor list");
                return Err(DecodeError::DescriptorOverrun { offset: position });
            }
            let next = position + 2 + usize::from(sense[position + 1]);
            descriptors.push(SenseDescriptor::decode(&sense[position..next]));
            position = next;
        }

        Ok(Self {
            deferred: response_code == 0x73,
            sense_key: SenseKey::from(sense[1] & 0x0f),
            asc: sense[2],
            ascq: sense[3],
            overflow: flag(sense, 4, 0x80),
            additional_length: sense[7],
            descriptors,
        })
    }

    pub fn prettify(&self) -> String {
        let mut sb = format!("SCSI SENSE: {}\n", self.sense_key.description());
        if self.deferred {
            sb.push_str("Deferred error\n");
        }
        let _ = writeln!(sb, "{}", describe(self.asc, self.ascq));
        if self.overflow {
            sb.push_str("Sense data overflowed\n");
        }
        for descriptor in &self.descriptors {
            let text = descriptor.prettify(self.sense_key);
            if !text.is_empty() {
                let _ = writeln!(sb, "{text}");
            }
        }
        sb
    }
}

/// Classify `sense` and render it with the matching decoder.
pub fn prettify_sense(sense: &[u8]) -> Result<String> {
    match classify(sense) {
        SenseType::StandardSense => Ok(StandardSense::decode(sense)?.prettify()),
        SenseType::ExtendedSenseFixedCurrent | SenseType::ExtendedSenseFixedPast => {
            Ok(FixedSense::decode(sense)?.prettify())
        }
        SenseType::ExtendedSenseDescriptorCurrent | SenseType::ExtendedSenseDescriptorPast => {
            Ok(DescriptorSense::decode(sense)?.prettify())
        }
        SenseType::Invalid if sense.len() < 4 => Err(DecodeError::TooShort {
            minimum: 4,
            actual: sense.len(),
        }),
        SenseType::Invalid | SenseType::Unknown => Err(DecodeError::UnexpectedFormat(sense[0])),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify(&[]), SenseType::Invalid);
        assert_eq!(classify(&[0x70, 0, 0]), SenseType::Invalid);
        assert_eq!(classify(&[0x01, 0, 0, 0]), SenseType::StandardSense);
        assert_eq!(classify(&[0x01, 0, 0, 0, 0]), SenseType::Invalid);
        assert_eq!(classify(&[0x70, 0, 0, 0]), SenseType::ExtendedSenseFixedCurrent);
        assert_eq!(classify(&[0xf1, 0, 0, 0]), SenseType::ExtendedSenseFixedPast);
        assert_eq!(
            classify(&[0x72, 0, 0, 0, 0, 0, 0, 0]),
            SenseType::ExtendedSenseDescriptorCurrent
        );
        assert_eq!(classify(&[0x73, 0, 0, 0]), SenseType::ExtendedSenseDescriptorPast);
        for nibble in 4..=0xf {
            assert_eq!(classify(&[0x70 | nibble, 0, 0, 0]), SenseType::Unknown);
        }
    }

    #[test]
    fn test_standard_sense() {
        let sense = StandardSense::decode(&[0x84, 0x01, 0x02, 0x03]).unwrap();
        assert!(sense.address_valid);
        assert_eq!(sense.error_class, 0);
        assert_eq!(sense.error_type, 4);
        assert_eq!(sense.lba, 0x01_0203);
        assert_eq!(
            sense.prettify(),
            "Error class 0 type 4 happened on block 66051\n"
        );

        assert_matches!(
            StandardSense::decode(&[0x70, 0, 0, 0]),
            Err(DecodeError::UnexpectedFormat(0x70))
        );
        assert_matches!(
            StandardSense::decode(&[0x04, 0, 0]),
            Err(DecodeError::TooShort { minimum: 4, .. })
        );
    }

    #[test]
    fn test_fixed_sense_full() {
        let buf = INVALID_FIELD_IN_CDB.to_fixed_sense();
        let sense = FixedSense::decode(&buf).unwrap();
        assert_eq!(sense.sense_key, SenseKey::IllegalRequest);
        assert_eq!(sense.asc, Some(0x24));
        assert_eq!(sense.ascq, Some(0));
        assert_eq!(sense.command_specific, Some(0));
        assert_eq!(sense.field_replaceable_unit, Some(0));
        assert_eq!(sense.sense_key_specific, Some(0));
        assert!(sense.additional_sense.is_empty());
        assert_eq!(sense.encode(), buf);
        assert_eq!(FixedSense::from(INVALID_FIELD_IN_CDB), sense);
    }

    #[test]
    fn test_fixed_sense_flags() {
        let mut buf = UNRECOVERED_READ_ERROR.to_fixed_sense();
        buf[0] |= 0x80;
        buf[2] |= 0xe0;
        buf[3..7].copy_from_slice(&0x1234_u32.to_be_bytes());
        buf[7] = 0x0c;
        buf.extend_from_slice(&[0xaa, 0xbb]);

        let sense = FixedSense::decode(&buf).unwrap();
        assert!(sense.information_valid);
        assert!(sense.filemark && sense.eom && sense.ili);
        assert_eq!(sense.sense_key, SenseKey::MediumError);
        assert_eq!(sense.information, 0x1234);
        assert_eq!(sense.additional_sense, vec![0xaa, 0xbb]);
        assert_eq!(sense.encode(), buf);

        let text = sense.prettify();
        assert!(text.starts_with("SCSI SENSE: Medium error\n"));
        assert!(text.contains("Filemark or setmark found\n"));
        assert!(text.contains("On logical block 4660\n"));
        assert!(text.contains("UNRECOVERED READ ERROR\n"));
    }

    #[test]
    fn test_fixed_sense_truncated() {
        let sense =
            FixedSense::decode(&[0x70, 0x00, 0x05, 0x00, 0, 0, 0, 0, 0x0a]).unwrap();
        assert_eq!(sense.sense_key, SenseKey::IllegalRequest);
        assert_eq!(sense.additional_length, 0);
        assert_eq!(sense.command_specific, None);
        assert_eq!(sense.asc, None);
        assert_eq!(sense.sense_key_specific, None);
        // the byte past the declared length is kept for re-encoding
        assert_eq!(sense.additional_sense, vec![0x0a]);
        assert_eq!(
            sense.encode(),
            vec![0x70, 0x00, 0x05, 0x00, 0, 0, 0, 0, 0x0a]
        );
    }

    #[test]
    fn test_fixed_sense_partial_fields_round_trip() {
        let full = [
            0xf0, 0x01, 0x05, 0x11, 0x22, 0x33, 0x44, 0x0a, // header
            0x55, 0x66, 0x77, 0x88, // command specific
            0x24, 0x00, 0x9a, // ASC, ASCQ, FRU
            0xc0, 0x01, 0x02, // sense key specific
        ];
        for len in 8..=full.len() {
            let mut buf = full[..len].to_vec();
            buf[7] = (len - 8) as u8;
            let sense = FixedSense::decode(&buf).unwrap();
            assert_eq!(sense.encode(), buf, "{len} byte fixed sense");
        }

        let mut buf = full[..13].to_vec();
        buf[7] = 5;
        let sense = FixedSense::decode(&buf).unwrap();
        assert_eq!(sense.command_specific, Some(0x5566_7788));
        assert_eq!(sense.asc, None);
        assert_eq!(sense.additional_sense, vec![0x24]);

        let mut buf = full[..17].to_vec();
        buf[7] = 9;
        let sense = FixedSense::decode(&buf).unwrap();
        assert_eq!(sense.field_replaceable_unit, Some(0x9a));
        assert_eq!(sense.sense_key_specific, None);
        assert_eq!(sense.additional_sense, vec![0xc0, 0x01]);
    }

    #[test]
    fn test_fixed_sense_rejects() {
        assert_matches!(
            FixedSense::decode(&[0x70, 0, 0, 0, 0, 0, 0]),
            Err(DecodeError::TooShort { minimum: 8, actual: 7 })
        );
        assert_matches!(
            FixedSense::decode(&[0x72, 0, 0, 0, 0, 0, 0, 0]),
            Err(DecodeError::UnexpectedFormat(0x72))
        );
    }

    #[test]
    fn test_sense_key_specific() {
        let mut buf = INVALID_FIELD_IN_CDB.to_fixed_sense();
        // SKSV, C/D, BPV, bit 3, field 2
        buf[15] = 0x80 | 0x40 | 0x08 | 0x03;
        buf[16] = 0;
        buf[17] = 2;
        let text = FixedSense::decode(&buf).unwrap().prettify();
        assert!(text.contains("Invalid value in bit 3 in field 2 of CDB\n"));

        assert_eq!(
            sense_key_specific_description(SenseKey::NotReady, 0x80_8000).unwrap(),
            "Format progress 50.00%"
        );
        assert_eq!(
            sense_key_specific_description(SenseKey::MediumError, 0x80_0007).unwrap(),
            "Actual retry count is 7"
        );
        assert_eq!(sense_key_specific_description(SenseKey::UnitAttention, 0), None);
    }

    #[test]
    fn test_descriptor_sense() {
        let buf = [
            0x72, 0x03, 0x11, 0x00, 0x00, 0x00, 0x00, 0x14, // header, 20 bytes of descriptors
            0x00, 0x0a, 0x80, 0x00, 0, 0, 0, 0, 0, 0, 0x10, 0x00, // information: 0x1000
            0x05, 0x02, 0x00, 0x20, // block commands, ILI
            0x03, 0x02, 0x00, 0x07, // FRU 7
        ];
        let sense = DescriptorSense::decode(&buf).unwrap();
        assert_eq!(sense.sense_key, SenseKey::MediumError);
        assert_eq!(sense.asc, 0x11);
        assert_eq!(
            sense.descriptors,
            vec![
                SenseDescriptor::Information {
                    valid: true,
                    information: 0x1000
                },
                SenseDescriptor::BlockCommands { ili: true },
                SenseDescriptor::FieldReplaceableUnit(7),
            ]
        );
        let text = sense.prettify();
        assert!(text.contains("UNRECOVERED READ ERROR\n"));
        assert!(text.contains("Information: 4096\n"));
    }

    #[test]
    fn test_descriptor_sense_ata_return() {
        let buf = [
            0x72, 0x01, 0x00, 0x1d, 0, 0, 0, 0x0e, // ATA PASS THROUGH INFORMATION AVAILABLE
            0x09, 0x0c, 0x01, 0x00, 0x00, 0x01, 0x00, 0x78, 0x00, 0x56, 0x00, 0x34, 0xa0, 0x50,
        ];
        let sense = DescriptorSense::decode(&buf).unwrap();
        assert_eq!(
            sense.descriptors,
            vec![SenseDescriptor::AtaStatusReturn {
                extend: true,
                error: 0,
                count: 1,
                lba: 0x34_5678,
                device: 0xa0,
                status: 0x50,
            }]
        );
    }

    #[test]
    fn test_descriptor_sense_overrun() {
        let buf = [0x72, 0x05, 0x24, 0x00, 0, 0, 0, 0x04, 0x02, 0x06, 0x80, 0x00];
        assert_matches!(
            DescriptorSense::decode(&buf),
            Err(DecodeError::DescriptorOverrun { offset: 8 })
        );
        assert_matches!(
            DescriptorSense::decode(&[0x72, 0x05, 0x24, 0x00, 0, 0, 0, 0x04]),
            Err(DecodeError::LengthMismatch { declared: 12, actual: 8 })
        );
    }

    #[test]
    fn test_prettify_sense_dispatch() {
        assert!(prettify_sense(&MEDIUM_NOT_PRESENT.to_fixed_sense())
            .unwrap()
            .contains("MEDIUM NOT PRESENT"));
        assert!(prettify_sense(&[0x04, 0, 0, 1]).unwrap().starts_with("Error class 0 type 4"));
        assert_matches!(prettify_sense(&[0x7f, 0, 0, 0]), Err(DecodeError::UnexpectedFormat(0x7f)));
        assert_matches!(prettify_sense(&[0x70]), Err(DecodeError::TooShort { .. }));
    }
}
