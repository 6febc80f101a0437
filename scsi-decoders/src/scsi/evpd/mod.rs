// SPDX-License-Identifier: Apache-2.0 or BSD-3-Clause

//! Vital product data pages returned by INQUIRY with EVPD set (SPC-4 7.8).
//!
//! All pages share a four byte header: peripheral qualifier and device type
//! in byte 0, the page code in byte 1 and a big-endian page length in bytes
//! 2-3 that counts the bytes after the header.

mod ata_info;
mod basic;
mod block;
mod extended;
mod identification;
mod network;
mod vendor;

use std::fmt::Write;

use log::debug;

pub use self::{
    ata_info::AtaInformation,
    basic::{AsciiInformation, OperatingDefinitions, SupportedPages, UnitSerialNumber},
    block::{BlockDeviceCharacteristics, BlockLimits, LogicalBlockProvisioning},
    extended::{ExtendedInquiry, ModePagePolicy, ModePagePolicyDescriptor},
    identification::{
        DeviceIdentification, IdentificationDescriptor, ScsiPortDescriptor, ScsiPorts,
    },
    network::{ManagementNetworkAddresses, NetworkDescriptor, SoftwareInterfaces},
    vendor::{QuantumFirmwareBuild, SeagateFirmwareNumbers},
};
use crate::{
    field::{be16, bits},
    scsi::{device_type_description, qualifier_description},
    strings::to_hex_string,
    DecodeError, Result,
};

pub const HEADER_LEN: usize = 4;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum VpdPage {
    SupportedVpdPages,
    Ascii(u8),
    UnitSerialNumber,
    ImplementedOperatingDefinitions,
    AsciiImplementedOperatingDefinition,
    DeviceIdentification,
    SoftwareInterfaceIdentification,
    ManagementNetworkAddresses,
    ExtendedInquiry,
    ModePagePolicy,
    ScsiPorts,
    Ata,
    PowerCondition,
    DeviceConstituents,
    CfaProfile,
    PowerConsumption,
    ThirdPartyCopy,
    ProtocolSpecificLogicalUnit,
    ProtocolSpecificPort,
    ScsiFeatureSets,
    BlockLimits,
    BlockDeviceCharacteristics,
    LogicalBlockProvisioning,
    Referrals,
    BlockDeviceCharacteristicsExt,
    ZonedBlockDeviceCharacteristics,
    BlockLimitsExt,
    FormatPresets,
    /// Pages 0xC0 to 0xFF.
    VendorSpecific(u8),
}

impl TryFrom<u8> for VpdPage {
    type Error = ();

    fn try_from(val: u8) -> std::result::Result<Self, ()> {
        match val {
            0x00 => Ok(Self::SupportedVpdPages),
            0x1..=0x7f => Ok(Self::Ascii(val)),
            0x80 => Ok(Self::UnitSerialNumber),
            0x81 => Ok(Self::ImplementedOperatingDefinitions),
            0x82 => Ok(Self::AsciiImplementedOperatingDefinition),
            0x83 => Ok(Self::DeviceIdentification),
            0x84 => Ok(Self::SoftwareInterfaceIdentification),
            0x85 => Ok(Self::ManagementNetworkAddresses),
            0x86 => Ok(Self::ExtendedInquiry),
            0x87 => Ok(Self::ModePagePolicy),
            0x88 => Ok(Self::ScsiPorts),
            0x89 => Ok(Self::Ata),
            0x8a => Ok(Self::PowerCondition),
            0x8b => Ok(Self::DeviceConstituents),
            0x8c => Ok(Self::CfaProfile),
            0x8d => Ok(Self::PowerConsumption),
            0x8f => Ok(Self::ThirdPartyCopy),
            0x90 => Ok(Self::ProtocolSpecificLogicalUnit),
            0x91 => Ok(Self::ProtocolSpecificPort),
            0x92 => Ok(Self::ScsiFeatureSets),
            0xb0 => Ok(Self::BlockLimits),
            0xb1 => Ok(Self::BlockDeviceCharacteristics),
            0xb2 => Ok(Self::LogicalBlockProvisioning),
            0xb3 => Ok(Self::Referrals),
            0xb5 => Ok(Self::BlockDeviceCharacteristicsExt),
            0xb6 => Ok(Self::ZonedBlockDeviceCharacteristics),
            0xb7 => Ok(Self::BlockLimitsExt),
            0xb8 => Ok(Self::FormatPresets),
            0xc0..=0xff => Ok(Self::VendorSpecific(val)),
            _ => Err(()),
        }
    }
}

impl From<VpdPage> for u8 {
    fn from(pc: VpdPage) -> Self {
        match pc {
            VpdPage::SupportedVpdPages => 0x00,
            VpdPage::Ascii(val) | VpdPage::VendorSpecific(val) => val,
            VpdPage::UnitSerialNumber => 0x80,
            VpdPage::ImplementedOperatingDefinitions => 0x81,
            VpdPage::AsciiImplementedOperatingDefinition => 0x82,
            VpdPage::DeviceIdentification => 0x83,
            VpdPage::SoftwareInterfaceIdentification => 0x84,
            VpdPage::ManagementNetworkAddresses => 0x85,
            VpdPage::ExtendedInquiry => 0x86,
            VpdPage::ModePagePolicy => 0x87,
            VpdPage::ScsiPorts => 0x88,
            VpdPage::Ata => 0x89,
            VpdPage::PowerCondition => 0x8a,
            VpdPage::DeviceConstituents => 0x8b,
            VpdPage::CfaProfile => 0x8c,
            VpdPage::PowerConsumption => 0x8d,
            VpdPage::ThirdPartyCopy => 0x8f,
            VpdPage::ProtocolSpecificLogicalUnit => 0x90,
            VpdPage::ProtocolSpecificPort => 0x91,
            VpdPage::ScsiFeatureSets => 0x92,
            VpdPage::BlockLimits => 0xb0,
            VpdPage::BlockDeviceCharacteristics => 0xb1,
            VpdPage::LogicalBlockProvisioning => 0xb2,
            VpdPage::Referrals => 0xb3,
            VpdPage::BlockDeviceCharacteristicsExt => 0xb5,
            VpdPage::ZonedBlockDeviceCharacteristics => 0xb6,
            VpdPage::BlockLimitsExt => 0xb7,
            VpdPage::FormatPresets => 0xb8,
        }
    }
}

impl VpdPage {
    pub const fn name(self) -> &'static str {
        match self {
            Self::SupportedVpdPages => "Supported VPD pages",
            Self::Ascii(_) => "ASCII information",
            Self::UnitSerialNumber => "Unit serial number",
            Self::ImplementedOperatingDefinitions => "Implemented operating definitions",
            Self::AsciiImplementedOperatingDefinition => "ASCII implemented operating definition",
            Self::DeviceIdentification => "Device identification",
            Self::SoftwareInterfaceIdentification => "Software interface identification",
            Self::ManagementNetworkAddresses => "Management network addresses",
            Self::ExtendedInquiry => "Extended INQUIRY data",
            Self::ModePagePolicy => "Mode page policy",
            Self::ScsiPorts => "SCSI ports",
            Self::Ata => "ATA information",
            Self::PowerCondition => "Power condition",
            Self::DeviceConstituents => "Device constituents",
            Self::CfaProfile => "CFA profile information",
            Self::PowerConsumption => "Power consumption",
            Self::ThirdPartyCopy => "Third-party copy",
            Self::ProtocolSpecificLogicalUnit => "Protocol specific logical unit information",
            Self::ProtocolSpecificPort => "Protocol specific port information",
            Self::ScsiFeatureSets => "SCSI feature sets",
            Self::BlockLimits => "Block limits",
            Self::BlockDeviceCharacteristics => "Block device characteristics",
            Self::LogicalBlockProvisioning => "Logical block provisioning",
            Self::Referrals => "Referrals",
            Self::BlockDeviceCharacteristicsExt => "Block device characteristics extension",
            Self::ZonedBlockDeviceCharacteristics => "Zoned block device characteristics",
            Self::BlockLimitsExt => "Block limits extension",
            Self::FormatPresets => "Format presets",
            Self::VendorSpecific(_) => "Vendor specific",
        }
    }
}

/// Vendor whose 0xC0 page layout should be assumed.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Vendor {
    Quantum,
    Seagate,
}

/// Peripheral fields of byte 0, common to every page.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PageHeader {
    pub peripheral_qualifier: u8,
    pub peripheral_device_type: u8,
    pub page_code: u8,
}

impl PageHeader {
    /// Validate the header of `buf` against `page_code`.
    ///
    /// Fails unless byte 1 is `page_code` and the declared page length
    /// covers exactly the rest of the buffer.
    pub fn decode(buf: &[u8], page_code: u8) -> Result<Self> {
        let header = Self::decode_any(buf)?;
        if header.page_code != page_code {
            debug!(
                "expected VPD page 0x{page_code:02X}, got 0x{:02X}",
                header.page_code
            );
            return Err(DecodeError::UnexpectedPageCode {
                expected: page_code,
                found: header.page_code,
            });
        }
        Ok(header)
    }

    /// Like [`PageHeader::decode`], accepting any page code.
    pub fn decode_any(buf: &[u8]) -> Result<Self> {
        crate::require_len(buf, HEADER_LEN)?;
        let declared = usize::from(be16(buf, 2)) + HEADER_LEN;
        if declared != buf.len() {
            debug!(
                "VPD page 0x{:02X} declares {declared} bytes, buffer has {}",
                buf[1],
                buf.len()
            );
            return Err(DecodeError::LengthMismatch {
                declared,
                actual: buf.len(),
            });
        }
        Ok(Self {
            peripheral_qualifier: bits(buf, 0, 0xe0, 5),
            peripheral_device_type: bits(buf, 0, 0x1f, 0),
            page_code: buf[1],
        })
    }

    fn prettify_into(self, sb: &mut String) {
        if self.peripheral_qualifier != 0 {
            let _ = writeln!(sb, "{}", qualifier_description(self.peripheral_qualifier));
        }
        if self.peripheral_device_type != 0 {
            let _ = writeln!(
                sb,
                "Device type: {}",
                device_type_description(self.peripheral_device_type)
            );
        }
    }
}

/// Decode the page in `buf`, selected by its page code, and prettify it.
///
/// Page 0xC0 is decoded only when `vendor` says whose layout it has. Pages
/// with no decoder are rendered as a hex dump.
pub fn prettify_page(buf: &[u8], vendor: Option<Vendor>) -> Result<String> {
    crate::require_len(buf, HEADER_LEN)?;
    let page = VpdPage::try_from(buf[1]);
    match page {
        Ok(VpdPage::SupportedVpdPages) => SupportedPages::decode(buf).map(|p| p.prettify()),
        Ok(VpdPage::Ascii(_)) => AsciiInformation::decode(buf).map(|p| p.prettify()),
        Ok(VpdPage::UnitSerialNumber) => UnitSerialNumber::decode(buf).map(|p| p.prettify()),
        Ok(VpdPage::ImplementedOperatingDefinitions) => {
            OperatingDefinitions::decode(buf).map(|p| p.prettify())
        }
        Ok(VpdPage::AsciiImplementedOperatingDefinition) => {
            AsciiInformation::decode_operating_definition(buf).map(|p| p.prettify())
        }
        Ok(VpdPage::DeviceIdentification) => {
            DeviceIdentification::decode(buf).map(|p| p.prettify())
        }
        Ok(VpdPage::SoftwareInterfaceIdentification) => {
            SoftwareInterfaces::decode(buf).map(|p| p.prettify())
        }
        Ok(VpdPage::ManagementNetworkAddresses) => {
            ManagementNetworkAddresses::decode(buf).map(|p| p.prettify())
        }
        Ok(VpdPage::ExtendedInquiry) => ExtendedInquiry::decode(buf).map(|p| p.prettify()),
        Ok(VpdPage::ModePagePolicy) => ModePagePolicy::decode(buf).map(|p| p.prettify()),
        Ok(VpdPage::ScsiPorts) => ScsiPorts::decode(buf).map(|p| p.prettify()),
        Ok(VpdPage::Ata) => AtaInformation::decode(buf).map(|p| p.prettify()),
        Ok(VpdPage::BlockLimits) => BlockLimits::decode(buf).map(|p| p.prettify()),
        Ok(VpdPage::BlockDeviceCharacteristics) => {
            BlockDeviceCharacteristics::decode(buf).map(|p| p.prettify())
        }
        Ok(VpdPage::LogicalBlockProvisioning) => {
            LogicalBlockProvisioning::decode(buf).map(|p| p.prettify())
        }
        Ok(VpdPage::VendorSpecific(0xc0)) if vendor == Some(Vendor::Quantum) => {
            QuantumFirmwareBuild::decode(buf).map(|p| p.prettify())
        }
        Ok(VpdPage::VendorSpecific(0xc0)) if vendor == Some(Vendor::Seagate) => {
            SeagateFirmwareNumbers::decode(buf).map(|p| p.prettify())
        }
        _ => prettify_raw(buf),
    }
}

/// Hex dump of a page no decoder understands.
pub fn prettify_raw(buf: &[u8]) -> Result<String> {
    let header = PageHeader::decode_any(buf)?;
    let mut sb = String::new();
    match VpdPage::try_from(header.page_code) {
        Ok(page) => {
            let _ = writeln!(sb, "{} page (0x{:02X}):", page.name(), header.page_code);
        }
        Err(()) => {
            let _ = writeln!(sb, "Unknown page 0x{:02X}:", header.page_code);
        }
    }
    header.prettify_into(&mut sb);
    sb.push_str(&to_hex_string(&buf[HEADER_LEN..], 80));
    Ok(sb)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_vpd_page_codes() {
        for code in 0..=u8::MAX {
            if let Ok(page) = VpdPage::try_from(code) {
                assert_eq!(u8::from(page), code);
            }
        }
        assert_eq!(VpdPage::try_from(0x8e), Err(()));
        assert_eq!(VpdPage::try_from(0x42), Ok(VpdPage::Ascii(0x42)));
    }

    #[test]
    fn test_header_checks() {
        assert_matches!(
            PageHeader::decode(&[0, 0x80, 0, 1, b'A'], 0x83),
            Err(DecodeError::UnexpectedPageCode {
                expected: 0x83,
                found: 0x80
            })
        );
        assert_matches!(
            PageHeader::decode(&[0, 0x80, 0, 2, b'A'], 0x80),
            Err(DecodeError::LengthMismatch {
                declared: 6,
                actual: 5
            })
        );
        assert_matches!(
            PageHeader::decode(&[0, 0x80], 0x80),
            Err(DecodeError::TooShort { .. })
        );
        let header = PageHeader::decode(&[0x25, 0x80, 0, 0], 0x80).unwrap();
        assert_eq!(header.peripheral_qualifier, 1);
        assert_eq!(header.peripheral_device_type, 5);
    }

    #[test]
    fn test_raw_fallback() {
        let text = prettify_page(&[0, 0x8a, 0, 2, 0xde, 0xad], None).unwrap();
        assert!(text.starts_with("Power condition page (0x8A):\n"));
        assert!(text.contains("de ad"));

        let text = prettify_page(&[0, 0xc0, 0, 1, 0x42], None).unwrap();
        assert!(text.starts_with("Vendor specific page (0xC0):\n"));

        let text = prettify_page(&[0, 0x9f, 0, 0], None).unwrap();
        assert!(text.starts_with("Unknown page 0x9F:\n"));
    }
}
