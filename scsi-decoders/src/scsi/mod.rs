// SPDX-License-Identifier: Apache-2.0 or BSD-3-Clause

pub mod evpd;
pub mod inquiry;
pub mod modes;
pub mod sense;
mod tests;

use std::borrow::Cow;

use num_enum::TryFromPrimitive;

/// Peripheral device type, the low 5 bits of byte 0 of INQUIRY and VPD data.
#[derive(PartialEq, Eq, TryFromPrimitive, Debug, Copy, Clone)]
#[repr(u8)]
pub enum PeripheralDeviceType {
    DirectAccess = 0x00,
    SequentialAccess = 0x01,
    Printer = 0x02,
    Processor = 0x03,
    WriteOnce = 0x04,
    MultiMedia = 0x05,
    Scanner = 0x06,
    Optical = 0x07,
    MediumChanger = 0x08,
    Communications = 0x09,
    PrePressA = 0x0a,
    PrePressB = 0x0b,
    ArrayController = 0x0c,
    EnclosureServices = 0x0d,
    SimplifiedDirectAccess = 0x0e,
    OpticalCard = 0x0f,
    BridgingExpander = 0x10,
    ObjectDevice = 0x11,
    Adc = 0x12,
    SecurityManager = 0x13,
    HostManagedZoned = 0x14,
    WellKnownLogicalUnit = 0x1e,
    Unknown = 0x1f,
}

impl PeripheralDeviceType {
    pub const fn description(self) -> &'static str {
        match self {
            Self::DirectAccess => "direct-access device",
            Self::SequentialAccess => "sequential-access device",
            Self::Printer => "printer device",
            Self::Processor => "processor device",
            Self::WriteOnce => "write-once device",
            Self::MultiMedia => "CD-ROM/DVD/etc device",
            Self::Scanner => "scanner device",
            Self::Optical => "optical memory device",
            Self::MediumChanger => "medium change device",
            Self::Communications => "communications device",
            Self::PrePressA | Self::PrePressB => "graphics arts pre-press device (defined in ASC IT8)",
            Self::ArrayController => "array controller device",
            Self::EnclosureServices => "enclosure services device",
            Self::SimplifiedDirectAccess => "simplified direct-access device",
            Self::OpticalCard => "optical card reader/writer device",
            Self::BridgingExpander => "bridging expander",
            Self::ObjectDevice => "object storage device",
            Self::Adc => "automation/drive interface",
            Self::SecurityManager => "security manager device",
            Self::HostManagedZoned => "host managed zoned block device",
            Self::WellKnownLogicalUnit => "well known logical unit",
            Self::Unknown => "unknown or no device type",
        }
    }
}

/// Description of a raw 5-bit peripheral device type, including the reserved
/// ones.
pub fn device_type_description(raw: u8) -> Cow<'static, str> {
    PeripheralDeviceType::try_from(raw).map_or_else(
        |_| Cow::Owned(format!("unknown device type field value 0x{raw:02X}")),
        |ty| Cow::Borrowed(ty.description()),
    )
}

/// Description of the 3-bit peripheral qualifier.
pub fn qualifier_description(raw: u8) -> Cow<'static, str> {
    match raw {
        0b000 => "Device is connected and supported.".into(),
        0b001 => "Device is supported but not connected.".into(),
        0b010 => "Reserved value set in peripheral qualifier field.".into(),
        0b011 => "Device is connected but unsupported.".into(),
        _ => format!("Vendor value {raw} set in peripheral qualifier field.").into(),
    }
}

/// Name of a SCSI transport protocol identifier (SPC-4 7.6.1).
pub fn protocol_identifier(raw: u8) -> Cow<'static, str> {
    match raw {
        0x0 => "Fibre Channel".into(),
        0x1 => "Parallel SCSI".into(),
        0x2 => "SSA".into(),
        0x3 => "IEEE 1394".into(),
        0x4 => "SCSI Remote Direct Memory Access Protocol".into(),
        0x5 => "Internet SCSI".into(),
        0x6 => "Serial Attached SCSI".into(),
        0x7 => "Automation/Drive Interface".into(),
        0x8 => "AT Attachment Interface (ATA/ATAPI)".into(),
        0x9 => "USB Attached SCSI".into(),
        0xa => "SCSI over PCI Express".into(),
        0xb => "PCI Express".into(),
        0xf => "no specific protocol".into(),
        _ => format!("unknown protocol identifier 0x{raw:X}").into(),
    }
}
