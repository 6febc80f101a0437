// SPDX-License-Identifier: Apache-2.0 or BSD-3-Clause

//! ATA IDENTIFY DEVICE data (ACS-3 7.12.7).
//!
//! The block is 256 little-endian words. Strings are stored two characters
//! per word with the first character in the high byte.

use std::fmt::Write;

use log::debug;

use crate::{field::le16, strings::c_to_string, DecodeError, Result};

pub const IDENTIFY_LEN: usize = 512;

const INTEGRITY_SIGNATURE: u8 = 0xa5;

/// Word 255 of IDENTIFY data when its signature byte is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Integrity {
    pub checksum: u8,
    /// Whether all 512 bytes sum to zero modulo 256.
    pub valid: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifyDevice {
    pub general_configuration: u16,
    pub serial_number: String,
    pub firmware_revision: String,
    pub model_number: String,
    pub max_sectors_per_drq: u8,
    pub capabilities: u16,
    pub lba_sectors: u32,
    pub queue_depth: u8,
    pub sata_capabilities: u16,
    pub major_version: u16,
    pub minor_version: u16,
    pub command_set: u16,
    pub command_set2: u16,
    pub command_set_enabled: u16,
    pub command_set_enabled2: u16,
    pub udma: u16,
    pub lba48_sectors: u64,
    pub sector_size_info: u16,
    pub logical_sector_words: u32,
    pub wwn: Option<u64>,
    pub rotation_rate: u16,
    pub integrity: Option<Integrity>,
}

/// Read an ATA string spanning `words` and trim it.
fn ata_string(buf: &[u8], words: std::ops::RangeInclusive<usize>) -> String {
    let swapped: Vec<u8> = words
        .flat_map(|w| {
            let word = le16(buf, w * 2);
            word.to_be_bytes()
        })
        .collect();
    c_to_string(&swapped)
}

impl IdentifyDevice {
    pub fn decode(buf: &[u8]) -> Result<Self> {
        if buf.len() != IDENTIFY_LEN {
            debug!("IDENTIFY data must be {IDENTIFY_LEN} bytes, got {}", buf.len());
            return Err(DecodeError::LengthMismatch {
                declared: IDENTIFY_LEN,
                actual: buf.len(),
            });
        }

        let word = |w: usize| le16(buf, w * 2);
        let dword = |w: usize| u32::from(word(w)) | (u32::from(word(w + 1)) << 16);

        let sector_size_info = word(106);
        let wwn = if word(87) & 0xc100 == 0x4100 {
            Some(
                (u64::from(word(108)) << 48)
                    | (u64::from(word(109)) << 32)
                    | (u64::from(word(110)) << 16)
                    | u64::from(word(111)),
            )
        } else {
            None
        };

        let integrity = (buf[510] == INTEGRITY_SIGNATURE).then(|| Integrity {
            checksum: buf[511],
            valid: buf.iter().fold(0u8, |sum, &b| sum.wrapping_add(b)) == 0,
        });

        Ok(Self {
            general_configuration: word(0),
            serial_number: ata_string(buf, 10..=19),
            firmware_revision: ata_string(buf, 23..=26),
            model_number: ata_string(buf, 27..=46),
            max_sectors_per_drq: (word(47) & 0xff) as u8,
            capabilities: word(49),
            lba_sectors: dword(60),
            queue_depth: (word(75) & 0x1f) as u8 + 1,
            sata_capabilities: word(76),
            major_version: word(80),
            minor_version: word(81),
            command_set: word(82),
            command_set2: word(83),
            command_set_enabled: word(85),
            command_set_enabled2: word(86),
            udma: word(88),
            lba48_sectors: u64::from(dword(100)) | (u64::from(dword(102)) << 32),
            sector_size_info,
            logical_sector_words: dword(117),
            wwn,
            rotation_rate: word(217),
            integrity,
        })
    }

    pub const fn is_ata(&self) -> bool {
        self.general_configuration & 0x8000 == 0
    }

    pub const fn removable(&self) -> bool {
        self.general_configuration & 0x0080 != 0
    }

    pub const fn lba_supported(&self) -> bool {
        self.capabilities & 0x0200 != 0
    }

    pub const fn dma_supported(&self) -> bool {
        self.capabilities & 0x0100 != 0
    }

    const fn word_valid(word: u16) -> bool {
        word != 0xffff && word & 0xc000 == 0x4000
    }

    pub const fn smart_supported(&self) -> bool {
        Self::word_valid(self.command_set2) && self.command_set & 0x0001 != 0
    }

    pub const fn security_supported(&self) -> bool {
        Self::word_valid(self.command_set2) && self.command_set & 0x0002 != 0
    }

    pub const fn write_cache_supported(&self) -> bool {
        Self::word_valid(self.command_set2) && self.command_set & 0x0020 != 0
    }

    pub const fn look_ahead_supported(&self) -> bool {
        Self::word_valid(self.command_set2) && self.command_set & 0x0040 != 0
    }

    pub const fn lba48_supported(&self) -> bool {
        Self::word_valid(self.command_set2) && self.command_set2 & 0x0400 != 0
    }

    pub const fn ncq_supported(&self) -> bool {
        self.sata_capabilities != 0xffff && self.sata_capabilities & 0x0100 != 0
    }

    /// Logical sector size in bytes.
    pub const fn logical_sector_size(&self) -> u32 {
        if Self::word_valid(self.sector_size_info) && self.sector_size_info & 0x1000 != 0 {
            self.logical_sector_words.saturating_mul(2)
        } else {
            512
        }
    }

    /// Physical sector size in bytes.
    pub const fn physical_sector_size(&self) -> u32 {
        if Self::word_valid(self.sector_size_info) && self.sector_size_info & 0x2000 != 0 {
            self.logical_sector_size() << (self.sector_size_info & 0x000f)
        } else {
            self.logical_sector_size()
        }
    }

    /// Addressable sectors, preferring the 48-bit count when supported.
    pub const fn sectors(&self) -> u64 {
        if self.lba48_supported() && self.lba48_sectors != 0 {
            self.lba48_sectors
        } else {
            self.lba_sectors as u64
        }
    }

    /// Names of the ATA standards claimed in the major version word.
    pub fn major_versions(&self) -> Vec<&'static str> {
        const NAMES: [&str; 12] = [
            "ATA-1", "ATA-2", "ATA-3", "ATA/ATAPI-4", "ATA/ATAPI-5", "ATA/ATAPI-6", "ATA/ATAPI-7",
            "ATA8-ACS", "ACS-2", "ACS-3", "ACS-4", "ACS-5",
        ];
        if self.major_version == 0 || self.major_version == 0xffff {
            return Vec::new();
        }
        NAMES
            .iter()
            .enumerate()
            .filter(|(bit, _)| self.major_version & (1 << (bit + 1)) != 0)
            .map(|(_, name)| *name)
            .collect()
    }

    pub fn prettify(&self) -> String {
        let mut sb = String::new();

        if !self.is_ata() {
            sb.push_str("Device is not an ATA device\n");
        }
        let _ = writeln!(sb, "Model: {}", self.model_number);
        let _ = writeln!(sb, "Firmware revision: {}", self.firmware_revision);
        let _ = writeln!(sb, "Serial number: {}", self.serial_number);
        if let Some(wwn) = self.wwn {
            let _ = writeln!(sb, "World Wide Name: {wwn:016X}");
        }

        let versions = self.major_versions();
        if !versions.is_empty() {
            let _ = writeln!(sb, "Device supports {}", versions.join(", "));
        }

        if self.removable() {
            sb.push_str("Device uses removable media\n");
        }
        match self.rotation_rate {
            1 => sb.push_str("Device does not rotate\n"),
            0x0401..=0xfffe => {
                let _ = writeln!(sb, "Device rotates at {} rpm", self.rotation_rate);
            }
            _ => {}
        }

        if self.lba_supported() {
            let sectors = self.sectors();
            let _ = writeln!(
                sb,
                "Device has {sectors} addressable sectors of {} bytes",
                self.logical_sector_size()
            );
            let physical = self.physical_sector_size();
            if physical != self.logical_sector_size() {
                let _ = writeln!(sb, "Physical sector size is {physical} bytes");
            }
        }

        let features = [
            (self.lba_supported(), "LBA"),
            (self.lba48_supported(), "48-bit LBA"),
            (self.dma_supported(), "DMA"),
            (self.ncq_supported(), "Native Command Queuing"),
            (self.smart_supported(), "S.M.A.R.T."),
            (self.security_supported(), "Security mode"),
            (self.write_cache_supported(), "write cache"),
            (self.look_ahead_supported(), "read look-ahead"),
        ];
        for (_, name) in features.iter().filter(|(supported, _)| *supported) {
            let _ = writeln!(sb, "Device supports {name}");
        }
        if self.ncq_supported() {
            let _ = writeln!(sb, "Maximum queue depth is {}", self.queue_depth);
        }

        if let Some(integrity) = self.integrity {
            if integrity.valid {
                let _ = writeln!(sb, "Checksum 0x{:02X} is correct", integrity.checksum);
            } else {
                let _ = writeln!(sb, "Checksum 0x{:02X} is incorrect", integrity.checksum);
            }
        }

        sb
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn put_word(buf: &mut [u8], word: usize, value: u16) {
        buf[word * 2..word * 2 + 2].copy_from_slice(&value.to_le_bytes());
    }

    fn put_string(buf: &mut [u8], first_word: usize, text: &str, words: usize) {
        let mut padded = text.as_bytes().to_vec();
        padded.resize(words * 2, b' ');
        for (i, pair) in padded.chunks(2).enumerate() {
            put_word(buf, first_word + i, u16::from_be_bytes([pair[0], pair[1]]));
        }
    }

    /// A plausible 1 TB SATA disk with 4K physical sectors.
    pub(crate) fn sample_identify() -> Vec<u8> {
        let mut buf = vec![0; IDENTIFY_LEN];
        put_word(&mut buf, 0, 0x0040);
        put_string(&mut buf, 10, "WD-WCC4J1234567", 10);
        put_string(&mut buf, 23, "01.01A01", 4);
        put_string(&mut buf, 27, "WDC WD10EZEX-08WN4A0", 20);
        put_word(&mut buf, 47, 0x8010);
        put_word(&mut buf, 49, 0x2f00);
        put_word(&mut buf, 60, 0xffff);
        put_word(&mut buf, 61, 0x0fff);
        put_word(&mut buf, 75, 0x001f);
        put_word(&mut buf, 76, 0x070e);
        put_word(&mut buf, 80, 0x03fc);
        put_word(&mut buf, 82, 0x746b);
        put_word(&mut buf, 83, 0x7501);
        put_word(&mut buf, 85, 0x7469);
        put_word(&mut buf, 86, 0xb401);
        put_word(&mut buf, 87, 0x4163);
        put_word(&mut buf, 100, 0x6db0);
        put_word(&mut buf, 101, 0x7470);
        put_word(&mut buf, 106, 0x6003);
        put_word(&mut buf, 108, 0x5001);
        put_word(&mut buf, 109, 0x4ee0);
        put_word(&mut buf, 110, 0x0af2);
        put_word(&mut buf, 111, 0x1a2b);
        put_word(&mut buf, 217, 7200);
        buf[510] = INTEGRITY_SIGNATURE;
        let sum = buf.iter().fold(0u8, |sum, &b| sum.wrapping_add(b));
        buf[511] = 0u8.wrapping_sub(sum);
        buf
    }

    #[test]
    fn test_decode_strings() {
        let id = IdentifyDevice::decode(&sample_identify()).unwrap();
        assert_eq!(id.serial_number, "WD-WCC4J1234567");
        assert_eq!(id.firmware_revision, "01.01A01");
        assert_eq!(id.model_number, "WDC WD10EZEX-08WN4A0");
    }

    #[test]
    fn test_decode_capacity() {
        let id = IdentifyDevice::decode(&sample_identify()).unwrap();
        assert!(id.is_ata());
        assert!(id.lba_supported());
        assert!(id.lba48_supported());
        assert_eq!(id.lba_sectors, 0x0fff_ffff);
        assert_eq!(id.sectors(), 0x7470_6db0);
        assert_eq!(id.logical_sector_size(), 512);
        assert_eq!(id.physical_sector_size(), 4096);
        assert_eq!(id.queue_depth, 32);
        assert!(id.ncq_supported());
        assert!(id.smart_supported());
        assert_eq!(id.wwn, Some(0x5001_4ee0_0af2_1a2b));
        assert_eq!(
            id.major_versions(),
            vec![
                "ATA-2",
                "ATA-3",
                "ATA/ATAPI-4",
                "ATA/ATAPI-5",
                "ATA/ATAPI-6",
                "ATA/ATAPI-7",
                "ATA8-ACS",
                "ACS-2"
            ]
        );
    }

    #[test]
    fn test_integrity() {
        let mut buf = sample_identify();
        let id = IdentifyDevice::decode(&buf).unwrap();
        assert_matches!(id.integrity, Some(Integrity { valid: true, .. }));

        buf[20] ^= 0x01;
        let id = IdentifyDevice::decode(&buf).unwrap();
        assert_matches!(id.integrity, Some(Integrity { valid: false, .. }));

        buf[510] = 0;
        assert_eq!(IdentifyDevice::decode(&buf).unwrap().integrity, None);
    }

    #[test]
    fn test_wrong_length() {
        assert_matches!(
            IdentifyDevice::decode(&[0; 256]),
            Err(DecodeError::LengthMismatch {
                declared: 512,
                actual: 256
            })
        );
    }

    #[test]
    fn test_prettify() {
        let text = IdentifyDevice::decode(&sample_identify())
            .unwrap()
            .prettify();
        assert!(text.contains("Model: WDC WD10EZEX-08WN4A0\n"));
        assert!(text.contains("Device rotates at 7200 rpm\n"));
        assert!(text.contains("Device has 1953525168 addressable sectors of 512 bytes\n"));
        assert!(text.contains("Physical sector size is 4096 bytes\n"));
        assert!(text.contains("Device supports 48-bit LBA\n"));
        assert!(text.contains("is correct"));
    }
}
