// SPDX-License-Identifier: Apache-2.0 or BSD-3-Clause

//! Pages 0x00 to 0x82: supported pages, ASCII information, unit serial
//! number and operating definitions.

use std::fmt::Write;

use log::debug;

use super::{PageHeader, VpdPage, HEADER_LEN};
use crate::{
    field::{bits, flag},
    strings::{c_to_string, to_hex_string},
    DecodeError, Result,
};

/// Page 0x00.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedPages {
    pub header: PageHeader,
    pub pages: Vec<u8>,
}

impl SupportedPages {
    pub fn decode(buf: &[u8]) -> Result<Self> {
        let header = PageHeader::decode(buf, VpdPage::SupportedVpdPages.into())?;
        Ok(Self {
            header,
            pages: buf[HEADER_LEN..].to_vec(),
        })
    }

    pub fn prettify(&self) -> String {
        let mut sb = String::from("Supported VPD pages:\n");
        self.header.prettify_into(&mut sb);
        for &code in &self.pages {
            let name = VpdPage::try_from(code).map_or("Reserved", VpdPage::name);
            let _ = writeln!(sb, "\tPage 0x{code:02X}: {name}");
        }
        sb
    }
}

/// Pages 0x01 to 0x7F, and the ASCII implemented operating definition page
/// 0x82 which has the same layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiInformation {
    pub header: PageHeader,
    pub ascii: String,
    pub vendor_specific: Vec<u8>,
}

impl AsciiInformation {
    pub fn decode(buf: &[u8]) -> Result<Self> {
        let header = PageHeader::decode_any(buf)?;
        if !(0x01..=0x7f).contains(&header.page_code) {
            debug!("page 0x{:02X} is not an ASCII information page", header.page_code);
            return Err(DecodeError::UnexpectedPageCode {
                expected: 0x01,
                found: header.page_code,
            });
        }
        Self::decode_body(buf, header)
    }

    pub fn decode_operating_definition(buf: &[u8]) -> Result<Self> {
        let header =
            PageHeader::decode(buf, VpdPage::AsciiImplementedOperatingDefinition.into())?;
        Self::decode_body(buf, header)
    }

    fn decode_body(buf: &[u8], header: PageHeader) -> Result<Self> {
        crate::require_len(buf, HEADER_LEN + 1)?;
        let end = HEADER_LEN + 1 + usize::from(buf[4]);
        if end > buf.len() {
            debug!("ASCII field runs to byte {end} of a {} byte page", buf.len());
            return Err(DecodeError::DescriptorOverrun { offset: HEADER_LEN });
        }
        Ok(Self {
            header,
            ascii: c_to_string(&buf[HEADER_LEN + 1..end]),
            vendor_specific: buf[end..].to_vec(),
        })
    }

    pub fn prettify(&self) -> String {
        let mut sb = String::new();
        match VpdPage::try_from(self.header.page_code) {
            Ok(VpdPage::AsciiImplementedOperatingDefinition) => {
                let _ = writeln!(sb, "ASCII implemented operating definition: {}", self.ascii);
            }
            _ => {
                let _ = writeln!(
                    sb,
                    "ASCII information page 0x{:02X}: {}",
                    self.header.page_code, self.ascii
                );
            }
        }
        if !self.vendor_specific.is_empty() {
            sb.push_str("Vendor-specific information:\n");
            sb.push_str(&to_hex_string(&self.vendor_specific, 80));
        }
        sb
    }
}

/// Page 0x80.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitSerialNumber {
    pub header: PageHeader,
    pub serial: String,
}

impl UnitSerialNumber {
    pub fn decode(buf: &[u8]) -> Result<Self> {
        let header = PageHeader::decode(buf, VpdPage::UnitSerialNumber.into())?;
        Ok(Self {
            header,
            serial: c_to_string(&buf[HEADER_LEN..]),
        })
    }

    pub fn prettify(&self) -> String {
        format!("Unit serial number: {}\n", self.serial)
    }
}

/// Page 0x81, from SPC-2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatingDefinitions {
    pub header: PageHeader,
    pub current: u8,
    pub default: u8,
    pub default_savimp: bool,
    /// Supported definitions with their SAVIMP bit.
    pub supported: Vec<(u8, bool)>,
}

fn operating_definition_name(def: u8) -> String {
    match def {
        0x00 => "Use current operating definition".to_owned(),
        0x01 => "SCSI X3.131:1986 operating definition".to_owned(),
        0x02 => "SCSI Common Command Set operating definition".to_owned(),
        0x03 => "SCSI-2 X3.131:1994 operating definition".to_owned(),
        0x04 => "SCSI-3 operating definition".to_owned(),
        _ => format!("Unknown operating definition 0x{def:02X}"),
    }
}

impl OperatingDefinitions {
    pub fn decode(buf: &[u8]) -> Result<Self> {
        let header = PageHeader::decode(buf, VpdPage::ImplementedOperatingDefinitions.into())?;
        crate::require_len(buf, 8)?;
        Ok(Self {
            header,
            current: bits(buf, 4, 0x7f, 0),
            default: bits(buf, 5, 0x7f, 0),
            default_savimp: flag(buf, 5, 0x80),
            supported: buf[8..]
                .iter()
                .map(|&b| (b & 0x7f, b & 0x80 != 0))
                .collect(),
        })
    }

    pub fn prettify(&self) -> String {
        let mut sb = String::new();
        let _ = writeln!(
            sb,
            "Current operating definition: {}",
            operating_definition_name(self.current)
        );
        let _ = writeln!(
            sb,
            "Default operating definition: {}",
            operating_definition_name(self.default)
        );
        if self.default_savimp {
            sb.push_str("Default operating definition can be saved\n");
        }
        if !self.supported.is_empty() {
            sb.push_str("Supported operating definitions:\n");
            for &(def, savimp) in &self.supported {
                let _ = writeln!(
                    sb,
                    "\t{}{}",
                    operating_definition_name(def),
                    if savimp { " (saveable)" } else { "" }
                );
            }
        }
        sb
    }
}
