// SPDX-License-Identifier: Apache-2.0 or BSD-3-Clause

//! ATA information page (0x89) reported by SCSI to ATA translation layers
//! (SAT-3 12.4.2).

use std::fmt::Write;

use super::{PageHeader, VpdPage};
use crate::{
    ata::{identify::IDENTIFY_LEN, IdentifyDevice},
    strings::{c_to_string, to_hex_string},
    Result,
};

const IDENTIFY_OFFSET: usize = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtaInformation {
    pub header: PageHeader,
    pub sat_vendor: String,
    pub sat_product: String,
    pub sat_revision: String,
    /// Register FIS the device returned on reset.
    pub device_signature: [u8; 20],
    pub command_code: u8,
    /// Raw IDENTIFY (PACKET) DEVICE data, when the page carries it.
    pub identify_data: Vec<u8>,
    pub identify: Option<IdentifyDevice>,
}

impl AtaInformation {
    pub fn decode(buf: &[u8]) -> Result<Self> {
        let header = PageHeader::decode(buf, VpdPage::Ata.into())?;
        crate::require_len(buf, IDENTIFY_OFFSET)?;

        let mut device_signature = [0; 20];
        device_signature.copy_from_slice(&buf[36..56]);

        let identify_end = buf.len().min(IDENTIFY_OFFSET + IDENTIFY_LEN);
        let identify_data = buf[IDENTIFY_OFFSET..identify_end].to_vec();
        let identify = IdentifyDevice::decode(&identify_data).ok();

        Ok(Self {
            header,
            sat_vendor: c_to_string(&buf[8..16]),
            sat_product: c_to_string(&buf[16..32]),
            sat_revision: c_to_string(&buf[32..36]),
            device_signature,
            command_code: buf[56],
            identify_data,
            identify,
        })
    }

    pub fn prettify(&self) -> String {
        let mut sb = String::from("ATA information:\n");
        let _ = writeln!(sb, "SCSI to ATA Translation Layer vendor: {}", self.sat_vendor);
        let _ = writeln!(sb, "SCSI to ATA Translation Layer name: {}", self.sat_product);
        let _ = writeln!(
            sb,
            "SCSI to ATA Translation Layer release level: {}",
            self.sat_revision
        );
        sb.push_str("Device signature:\n");
        sb.push_str(&to_hex_string(&self.device_signature, 80));
        match self.command_code {
            0xec => sb.push_str("Device responded to ATA IDENTIFY DEVICE command\n"),
            0xa1 => sb.push_str("Device responded to ATA IDENTIFY PACKET DEVICE command\n"),
            code => {
                let _ = writeln!(sb, "Device responded to ATA command {code:02X}h");
            }
        }
        match &self.identify {
            Some(identify) => sb.push_str(&identify.prettify()),
            None if !self.identify_data.is_empty() => {
                sb.push_str("ATA IDENTIFY information:\n");
                sb.push_str(&to_hex_string(&self.identify_data, 80));
            }
            None => {}
        }
        sb
    }
}
