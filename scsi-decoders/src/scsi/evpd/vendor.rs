// SPDX-License-Identifier: Apache-2.0 or BSD-3-Clause

//! Vendor-specific page 0xC0 layouts.

use std::fmt::Write;

use super::PageHeader;
use crate::{
    field::{be16, be32},
    strings::c_to_string,
    Result,
};

const FIRMWARE_PAGE: u8 = 0xc0;

/// Quantum firmware build information page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantumFirmwareBuild {
    pub header: PageHeader,
    pub servo_firmware_checksum: u16,
    pub servo_eeprom_checksum: u16,
    pub read_write_firmware_checksum: u32,
    pub read_write_firmware_build: String,
}

impl QuantumFirmwareBuild {
    pub const LEN: usize = 36;

    pub fn decode(buf: &[u8]) -> Result<Self> {
        let header = PageHeader::decode(buf, FIRMWARE_PAGE)?;
        crate::require_exact_len(buf, Self::LEN)?;
        Ok(Self {
            header,
            servo_firmware_checksum: be16(buf, 4),
            servo_eeprom_checksum: be16(buf, 6),
            read_write_firmware_checksum: be32(buf, 8),
            read_write_firmware_build: c_to_string(&buf[12..36]),
        })
    }

    pub fn prettify(&self) -> String {
        let mut sb = String::from("Quantum Firmware Build Information page:\n");
        let _ = writeln!(
            sb,
            "\tServo firmware checksum: 0x{:04X}",
            self.servo_firmware_checksum
        );
        let _ = writeln!(
            sb,
            "\tServo EEPROM checksum: 0x{:04X}",
            self.servo_eeprom_checksum
        );
        let _ = writeln!(
            sb,
            "\tRead/write firmware checksum: 0x{:08X}",
            self.read_write_firmware_checksum
        );
        let _ = writeln!(
            sb,
            "\tRead/write firmware build data: {}",
            self.read_write_firmware_build
        );
        sb
    }
}

/// Seagate firmware numbers page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeagateFirmwareNumbers {
    pub header: PageHeader,
    pub controller_firmware: String,
    pub boot_firmware: String,
    pub servo_firmware: String,
}

impl SeagateFirmwareNumbers {
    pub const LEN: usize = 16;

    pub fn decode(buf: &[u8]) -> Result<Self> {
        let header = PageHeader::decode(buf, FIRMWARE_PAGE)?;
        crate::require_exact_len(buf, Self::LEN)?;
        Ok(Self {
            header,
            controller_firmware: c_to_string(&buf[4..8]),
            boot_firmware: c_to_string(&buf[8..12]),
            servo_firmware: c_to_string(&buf[12..16]),
        })
    }

    pub fn prettify(&self) -> String {
        let mut sb = String::from("Seagate Firmware Numbers page:\n");
        let _ = writeln!(
            sb,
            "\tController firmware version: {}",
            self.controller_firmware
        );
        let _ = writeln!(sb, "\tBoot firmware version: {}", self.boot_firmware);
        let _ = writeln!(sb, "\tServo firmware version: {}", self.servo_firmware);
        sb
    }
}
