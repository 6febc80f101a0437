// SPDX-License-Identifier: Apache-2.0 or BSD-3-Clause

//! MODE SENSE (6) and MODE SENSE (10) parameter data (SPC-4 7.5).

mod caching;
mod tables;

use std::fmt::Write;

use log::debug;

pub use self::{
    caching::{CachingPage, CACHING_PAGE},
    tables::{density_description, medium_type_description},
};
use super::PeripheralDeviceType;
use crate::{
    field::{be16, be24, be32, be64, bits, flag, put_be16, put_be24, put_be32, put_be64, put_flag},
    strings::to_hex_string,
    DecodeError, Result,
};

const HEADER6_LEN: usize = 4;
const HEADER10_LEN: usize = 8;
const SHORT_DESCRIPTOR_LEN: usize = 8;
const LONG_DESCRIPTOR_LEN: usize = 16;
const MAX_BE24: u64 = 0x00ff_ffff;

/// One mode parameter block descriptor.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BlockDescriptor {
    pub density: u8,
    /// Zero means all remaining blocks.
    pub blocks: u64,
    /// Zero means variable length blocks.
    pub block_length: u32,
}

impl BlockDescriptor {
    fn decode_short(buf: &[u8]) -> Self {
        Self {
            density: buf[0],
            blocks: u64::from(be24(buf, 1)),
            block_length: be24(buf, 5),
        }
    }

    fn decode_long(buf: &[u8]) -> Self {
        Self {
            density: buf[8],
            blocks: be64(buf, 0),
            block_length: be32(buf, 12),
        }
    }

    /// Block counts past 24 bits are reported as 0xFFFFFF, as READ CAPACITY
    /// does for counts its fields cannot hold.
    fn encode_short(&self, buf: &mut [u8]) {
        buf[0] = self.density;
        put_be24(buf, 1, u32::try_from(self.blocks.min(MAX_BE24)).unwrap_or(0x00ff_ffff));
        put_be24(buf, 5, self.block_length.min(0x00ff_ffff));
    }

    fn encode_long(&self, buf: &mut [u8]) {
        put_be64(buf, 0, self.blocks);
        buf[8] = self.density;
        put_be32(buf, 12, self.block_length);
    }

    fn describe(&self) -> String {
        match (self.blocks, self.block_length) {
            (0, 0) => "All remaining blocks have variable length".to_owned(),
            (0, length) => format!("All remaining blocks are {length} bytes each"),
            (blocks, 0) => format!("{blocks} blocks have variable length"),
            (blocks, length) => format!("{blocks} blocks are {length} bytes each"),
        }
    }
}

/// The mode parameter header and its block descriptors.
///
/// The device-specific parameter byte means different things for different
/// device classes; only the fields defined for `device_type` are filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ModeHeader {
    pub device_type: PeripheralDeviceType,
    pub medium_type: u8,
    pub write_protected: bool,
    /// DPO and FUA bits are supported.
    pub dpo_fua: bool,
    pub buffered_mode: u8,
    pub speed: u8,
    /// Enable blank check.
    pub ebc: bool,
    /// Block descriptors use the 16-byte format (MODE SENSE (10) only).
    pub long_lba: bool,
    pub block_descriptors: Vec<BlockDescriptor>,
}

impl ModeHeader {
    pub const fn new(device_type: PeripheralDeviceType) -> Self {
        Self {
            device_type,
            medium_type: 0,
            write_protected: false,
            dpo_fua: false,
            buffered_mode: 0,
            speed: 0,
            ebc: false,
            long_lba: false,
            block_descriptors: Vec::new(),
        }
    }

    /// Decode the header of MODE SENSE (6) parameter data.
    pub fn decode6(buf: &[u8], device_type: PeripheralDeviceType) -> Result<Self> {
        Ok(Self::decode6_with_end(buf, device_type)?.0)
    }

    /// Decode the header of MODE SENSE (10) parameter data.
    pub fn decode10(buf: &[u8], device_type: PeripheralDeviceType) -> Result<Self> {
        Ok(Self::decode10_with_end(buf, device_type)?.0)
    }

    fn decode6_with_end(buf: &[u8], device_type: PeripheralDeviceType) -> Result<(Self, usize)> {
        crate::require_len(buf, HEADER6_LEN)?;
        let descriptors_len = usize::from(buf[3]);
        let end = HEADER6_LEN + descriptors_len;
        if buf.len() < end {
            debug!("mode header declares {descriptors_len} bytes of block descriptors");
            return Err(DecodeError::TooShort {
                minimum: end,
                actual: buf.len(),
            });
        }

        let mut header = Self::new(device_type);
        header.medium_type = buf[1];
        header.set_device_specific(buf[2]);
        header.block_descriptors = buf[HEADER6_LEN..end]
            .chunks_exact(SHORT_DESCRIPTOR_LEN)
            .map(BlockDescriptor::decode_short)
            .collect();
        Ok((header, end))
    }

    fn decode10_with_end(buf: &[u8], device_type: PeripheralDeviceType) -> Result<(Self, usize)> {
        crate::require_len(buf, HEADER10_LEN)?;
        let long_lba = flag(buf, 4, 0x01);
        let descriptors_len = usize::from(be16(buf, 6));
        let end = HEADER10_LEN + descriptors_len;
        if buf.len() < end {
            debug!("mode header declares {descriptors_len} bytes of block descriptors");
            return Err(DecodeError::TooShort {
                minimum: end,
                actual: buf.len(),
            });
        }

        let mut header = Self::new(device_type);
        header.medium_type = buf[2];
        header.set_device_specific(buf[3]);
        header.long_lba = long_lba;
        let descriptors = &buf[HEADER10_LEN..end];
        header.block_descriptors = if long_lba {
            descriptors
                .chunks_exact(LONG_DESCRIPTOR_LEN)
                .map(BlockDescriptor::decode_long)
                .collect()
        } else {
            descriptors
                .chunks_exact(SHORT_DESCRIPTOR_LEN)
                .map(BlockDescriptor::decode_short)
                .collect()
        };
        Ok((header, end))
    }

    fn set_device_specific(&mut self, byte: u8) {
        let buf = [byte];
        match self.device_type {
            PeripheralDeviceType::DirectAccess | PeripheralDeviceType::MultiMedia => {
                self.write_protected = flag(&buf, 0, 0x80);
                self.dpo_fua = flag(&buf, 0, 0x10);
            }
            PeripheralDeviceType::SequentialAccess => {
                self.write_protected = flag(&buf, 0, 0x80);
                self.buffered_mode = bits(&buf, 0, 0x70, 4);
                self.speed = bits(&buf, 0, 0x0f, 0);
            }
            PeripheralDeviceType::Printer => {
                self.buffered_mode = bits(&buf, 0, 0x70, 4);
            }
            PeripheralDeviceType::Optical => {
                self.write_protected = flag(&buf, 0, 0x80);
                self.ebc = flag(&buf, 0, 0x01);
                self.dpo_fua = flag(&buf, 0, 0x10);
            }
            _ => {}
        }
    }

    fn device_specific(&self) -> u8 {
        let mut buf = [0];
        match self.device_type {
            PeripheralDeviceType::DirectAccess | PeripheralDeviceType::MultiMedia => {
                put_flag(&mut buf, 0, 0x80, self.write_protected);
                put_flag(&mut buf, 0, 0x10, self.dpo_fua);
            }
            PeripheralDeviceType::SequentialAccess => {
                put_flag(&mut buf, 0, 0x80, self.write_protected);
                buf[0] |= ((self.buffered_mode & 0x07) << 4) | (self.speed & 0x0f);
            }
            PeripheralDeviceType::Printer => {
                buf[0] |= (self.buffered_mode & 0x07) << 4;
            }
            PeripheralDeviceType::Optical => {
                put_flag(&mut buf, 0, 0x80, self.write_protected);
                put_flag(&mut buf, 0, 0x10, self.dpo_fua);
                put_flag(&mut buf, 0, 0x01, self.ebc);
            }
            _ => {}
        }
        buf[0]
    }

    /// Emit a MODE SENSE (6) header followed by `pages`.
    ///
    /// The one-byte length fields hold at most 31 block descriptors and 255
    /// bytes of mode data; larger values saturate at 0xFF.
    fn encode6_with(&self, pages: &[u8]) -> Vec<u8> {
        let descriptors_len = self.block_descriptors.len() * SHORT_DESCRIPTOR_LEN;
        let data_length = HEADER6_LEN + descriptors_len + pages.len() - 1;
        let mut buf = vec![0; HEADER6_LEN + descriptors_len];
        buf[0] = u8::try_from(data_length).unwrap_or(u8::MAX);
        buf[1] = self.medium_type;
        buf[2] = self.device_specific();
        buf[3] = u8::try_from(descriptors_len).unwrap_or(u8::MAX);
        for (descriptor, chunk) in self
            .block_descriptors
            .iter()
            .zip(buf[HEADER6_LEN..].chunks_exact_mut(SHORT_DESCRIPTOR_LEN))
        {
            descriptor.encode_short(chunk);
        }
        buf.extend_from_slice(pages);
        buf
    }

    /// Emit a MODE SENSE (10) header followed by `pages`.
    ///
    /// Length fields that do not fit in 16 bits saturate at 0xFFFF.
    fn encode10_with(&self, pages: &[u8]) -> Vec<u8> {
        let descriptor_len = if self.long_lba {
            LONG_DESCRIPTOR_LEN
        } else {
            SHORT_DESCRIPTOR_LEN
        };
        let descriptors_len = self.block_descriptors.len() * descriptor_len;
        let data_length = HEADER10_LEN + descriptors_len + pages.len() - 2;
        let mut buf = vec![0; HEADER10_LEN + descriptors_len];
        put_be16(&mut buf, 0, u16::try_from(data_length).unwrap_or(u16::MAX));
        buf[2] = self.medium_type;
        buf[3] = self.device_specific();
        put_flag(&mut buf, 4, 0x01, self.long_lba);
        put_be16(&mut buf, 6, u16::try_from(descriptors_len).unwrap_or(u16::MAX));
        for (descriptor, chunk) in self
            .block_descriptors
            .iter()
            .zip(buf[HEADER10_LEN..].chunks_exact_mut(descriptor_len))
        {
            if self.long_lba {
                descriptor.encode_long(chunk);
            } else {
                descriptor.encode_short(chunk);
            }
        }
        buf.extend_from_slice(pages);
        buf
    }

    pub fn encode6(&self) -> Vec<u8> {
        self.encode6_with(&[])
    }

    pub fn encode10(&self) -> Vec<u8> {
        self.encode10_with(&[])
    }

    pub fn prettify(&self) -> String {
        let mut sb = String::from("SCSI Mode Sense Header:\n");
        if self.medium_type != 0 {
            let _ = writeln!(
                sb,
                "\tMedium is {}",
                medium_type_description(self.device_type, self.medium_type)
            );
        }
        if self.write_protected {
            sb.push_str("\tMedium is write protected\n");
        }
        if self.dpo_fua {
            sb.push_str("\tDrive supports DPO and FUA bits\n");
        }
        match self.device_type {
            PeripheralDeviceType::SequentialAccess | PeripheralDeviceType::Printer => {
                let _ = writeln!(sb, "\t{}", buffered_mode_description(self.buffered_mode));
            }
            _ => {}
        }
        if self.device_type == PeripheralDeviceType::SequentialAccess {
            if self.speed == 0 {
                sb.push_str("\tDevice uses default speed\n");
            } else {
                let _ = writeln!(sb, "\tDevice uses speed {}", self.speed);
            }
        }
        if self.ebc {
            sb.push_str("\tBlank checking during write is enabled\n");
        }
        for descriptor in &self.block_descriptors {
            if descriptor.density == 0 {
                let _ = writeln!(sb, "\t{}", descriptor.describe());
            } else {
                let _ = writeln!(
                    sb,
                    "\tDensity code 0x{:02X} ({}): {}",
                    descriptor.density,
                    density_description(self.device_type, descriptor.density),
                    descriptor.describe()
                );
            }
        }
        sb
    }
}

fn buffered_mode_description(mode: u8) -> String {
    match mode {
        0 => "Device writes directly to media".to_owned(),
        1 => "Device uses a write cache".to_owned(),
        2 => "Device uses a write cache but does not return until cache is flushed".to_owned(),
        _ => format!("Unknown buffered mode code {mode}"),
    }
}

/// A mode page as found after the block descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModePage {
    /// Parameters savable.
    pub ps: bool,
    /// Sub-page format.
    pub spf: bool,
    pub page_code: u8,
    pub subpage_code: u8,
    /// The whole page, including its 2- or 4-byte header.
    pub data: Vec<u8>,
}

impl ModePage {
    pub fn prettify(&self) -> String {
        if self.page_code == CACHING_PAGE && !self.spf {
            if let Ok(caching) = CachingPage::decode(&self.data) {
                return caching.prettify();
            }
        }
        let mut sb = if self.spf {
            format!(
                "Mode page 0x{:02X} subpage 0x{:02X}:\n",
                self.page_code, self.subpage_code
            )
        } else {
            format!("Mode page 0x{:02X}:\n", self.page_code)
        };
        sb.push_str(&to_hex_string(&self.data, 80));
        sb
    }
}

/// Split the mode pages in `buf[start..end]`.
fn split_pages(buf: &[u8], start: usize, end: usize) -> Result<Vec<ModePage>> {
    let mut pages = Vec::new();
    let mut offset = start;
    while offset < end {
        let ps = flag(buf, offset, 0x80);
        let spf = flag(buf, offset, 0x40);
        let page_code = bits(buf, offset, 0x3f, 0);

        let (subpage_code, page_end) = if page_code == 0 && !spf {
            // The vendor-specific page 0 has no page format and runs to the end.
            (0, end)
        } else if spf {
            if offset + 4 > end {
                return Err(DecodeError::DescriptorOverrun { offset });
            }
            (buf[offset + 1], offset + 4 + usize::from(be16(buf, offset + 2)))
        } else {
            if offset + 2 > end {
                return Err(DecodeError::DescriptorOverrun { offset });
            }
            (0, offset + 2 + usize::from(buf[offset + 1]))
        };
        if page_end > end {
            debug!("mode page 0x{page_code:02X} at offset {offset} overruns the parameter data");
            return Err(DecodeError::DescriptorOverrun { offset });
        }

        pages.push(ModePage {
            ps,
            spf,
            page_code,
            subpage_code,
            data: buf[offset..page_end].to_vec(),
        });
        offset = page_end;
    }
    Ok(pages)
}

/// Mode parameter data: the header plus its mode pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeParameters {
    pub header: ModeHeader,
    pub pages: Vec<ModePage>,
}

impl ModeParameters {
    /// Page bytes that can be passed back to `encode6` or `encode10`.
    fn page_bytes(&self) -> Vec<u8> {
        self.pages.iter().flat_map(|p| p.data.iter().copied()).collect()
    }

    pub fn encode6(&self) -> Vec<u8> {
        self.header.encode6_with(&self.page_bytes())
    }

    pub fn encode10(&self) -> Vec<u8> {
        self.header.encode10_with(&self.page_bytes())
    }

    pub fn caching(&self) -> Option<CachingPage> {
        self.pages
            .iter()
            .find(|p| p.page_code == CACHING_PAGE && !p.spf)
            .and_then(|p| CachingPage::decode(&p.data).ok())
    }

    pub fn prettify(&self) -> String {
        let mut sb = self.header.prettify();
        for page in &self.pages {
            sb.push_str(&page.prettify());
        }
        sb
    }
}

/// Decode MODE SENSE (6) parameter data and split its pages.
///
/// Pages are read up to the mode data length or the end of the buffer,
/// whichever comes first.
pub fn decode_mode6(buf: &[u8], device_type: PeripheralDeviceType) -> Result<ModeParameters> {
    let (header, start) = ModeHeader::decode6_with_end(buf, device_type)?;
    let end = buf.len().min(usize::from(buf[0]) + 1).max(start);
    let pages = split_pages(buf, start, end)?;
    Ok(ModeParameters { header, pages })
}

/// Decode MODE SENSE (10) parameter data and split its pages.
pub fn decode_mode10(buf: &[u8], device_type: PeripheralDeviceType) -> Result<ModeParameters> {
    let (header, start) = ModeHeader::decode10_with_end(buf, device_type)?;
    let end = buf.len().min(usize::from(be16(buf, 0)) + 2).max(start);
    let pages = split_pages(buf, start, end)?;
    Ok(ModeParameters { header, pages })
}

pub fn prettify_mode6(buf: &[u8], device_type: PeripheralDeviceType) -> Result<String> {
    decode_mode6(buf, device_type).map(|p| p.prettify())
}

pub fn prettify_mode10(buf: &[u8], device_type: PeripheralDeviceType) -> Result<String> {
    decode_mode10(buf, device_type).map(|p| p.prettify())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn caching_page() -> Vec<u8> {
        let mut page = vec![0x8, 0x12, 0b0000_0100];
        page.extend_from_slice(&[0; 0x11]);
        page
    }

    #[test]
    fn test_header6_disk() {
        let buf = [3, 0, 0b0001_0000, 0];
        let header = ModeHeader::decode6(&buf, PeripheralDeviceType::DirectAccess).unwrap();
        assert!(header.dpo_fua);
        assert!(!header.write_protected);
        assert!(header.block_descriptors.is_empty());
        assert_eq!(header.encode6(), buf);

        let buf = [3, 0, 0b1001_0000, 0];
        let header = ModeHeader::decode6(&buf, PeripheralDeviceType::DirectAccess).unwrap();
        assert!(header.write_protected);
        assert!(header.prettify().contains("\tMedium is write protected\n"));
        assert_eq!(header.encode6(), buf);
    }

    #[test]
    fn test_header6_tape() {
        let buf = [
            11, 0, 0b1001_0011, 8, 0x46, 0, 0, 0, 0, 0, 0, 0,
        ];
        let header = ModeHeader::decode6(&buf, PeripheralDeviceType::SequentialAccess).unwrap();
        assert!(header.write_protected);
        assert_eq!(header.buffered_mode, 1);
        assert_eq!(header.speed, 3);
        assert_eq!(
            header.block_descriptors,
            vec![BlockDescriptor {
                density: 0x46,
                blocks: 0,
                block_length: 0
            }]
        );
        assert_eq!(header.encode6(), buf);
        let text = header.prettify();
        assert!(text.contains("\tDevice uses a write cache\n"));
        assert!(text.contains("\tDevice uses speed 3\n"));
        assert!(text.contains(
            "\tDensity code 0x46 (LTO Ultrium 4): All remaining blocks have variable length\n"
        ));
    }

    #[test]
    fn test_header6_printer_ignores_protection() {
        let header =
            ModeHeader::decode6(&[3, 0, 0b1010_0000, 0], PeripheralDeviceType::Printer).unwrap();
        assert!(!header.write_protected);
        assert_eq!(header.buffered_mode, 2);
    }

    #[test]
    fn test_header6_optical() {
        let buf = [3, 0x02, 0b1001_0001, 0];
        let header = ModeHeader::decode6(&buf, PeripheralDeviceType::Optical).unwrap();
        assert!(header.write_protected);
        assert!(header.dpo_fua);
        assert!(header.ebc);
        assert_eq!(header.encode6(), buf);
        let text = header.prettify();
        assert!(text.contains("\tMedium is Optical write-once medium\n"));
        assert!(text.contains("\tBlank checking during write is enabled\n"));
    }

    #[test]
    fn test_header10_short_descriptors() {
        let buf = [
            0, 22, 0, 0x10, 0, 0, 0, 16, //
            0, 0x01, 0x00, 0x00, 0, 0, 0x02, 0x00, //
            0, 0, 0, 0, 0, 0, 0x10, 0x00,
        ];
        let header = ModeHeader::decode10(&buf, PeripheralDeviceType::DirectAccess).unwrap();
        assert!(!header.long_lba);
        assert_eq!(header.block_descriptors.len(), 2);
        assert_eq!(header.block_descriptors[0].blocks, 0x01_0000);
        assert_eq!(header.block_descriptors[0].block_length, 512);
        assert_eq!(header.encode10(), buf);
        let text = header.prettify();
        assert!(text.contains("\t65536 blocks are 512 bytes each\n"));
        assert!(text.contains("\tAll remaining blocks are 4096 bytes each\n"));
    }

    #[test]
    fn test_header10_long_descriptor() {
        let mut buf = vec![0, 22, 0, 0, 0x01, 0, 0, 16];
        buf.extend_from_slice(&0x1_0000_0000_u64.to_be_bytes());
        buf.extend_from_slice(&[0, 0, 0, 0, 0, 0, 0x10, 0x00]);
        let header = ModeHeader::decode10(&buf, PeripheralDeviceType::DirectAccess).unwrap();
        assert!(header.long_lba);
        assert_eq!(
            header.block_descriptors,
            vec![BlockDescriptor {
                density: 0,
                blocks: 0x1_0000_0000,
                block_length: 4096
            }]
        );
        assert_eq!(header.encode10(), buf);
    }

    #[test]
    fn test_encode_saturates_length_fields() {
        let mut header = ModeHeader::new(PeripheralDeviceType::DirectAccess);
        header.block_descriptors = vec![
            BlockDescriptor {
                density: 0,
                blocks: 1,
                block_length: 512,
            };
            32
        ];
        let buf = header.encode6();
        assert_eq!(buf.len(), 4 + 32 * 8);
        assert_eq!(buf[0], 0xff);
        assert_eq!(buf[3], 0xff);

        let buf = header.encode10();
        assert_eq!(buf.len(), 8 + 32 * 8);
        assert_eq!(&buf[..2], &[0x01, 0x06]);
        assert_eq!(&buf[6..8], &[0x01, 0x00]);

        header.block_descriptors = vec![BlockDescriptor {
            density: 0x42,
            blocks: 0x1_0000_0000,
            block_length: 512,
        }];
        assert_eq!(
            header.encode6(),
            vec![11, 0, 0, 8, 0x42, 0xff, 0xff, 0xff, 0, 0x00, 0x02, 0x00]
        );
        // The long form keeps the full count.
        header.long_lba = true;
        let buf = header.encode10();
        assert_eq!(
            ModeHeader::decode10(&buf, PeripheralDeviceType::DirectAccess).unwrap(),
            header
        );
    }

    #[test]
    fn test_header_rejects_short_buffers() {
        assert_matches!(
            ModeHeader::decode6(&[3, 0, 0], PeripheralDeviceType::DirectAccess),
            Err(DecodeError::TooShort {
                minimum: 4,
                actual: 3
            })
        );
        assert_matches!(
            ModeHeader::decode6(&[11, 0, 0, 8, 0, 0], PeripheralDeviceType::DirectAccess),
            Err(DecodeError::TooShort {
                minimum: 12,
                actual: 6
            })
        );
        assert_matches!(
            ModeHeader::decode10(&[0, 6, 0, 0, 0, 0, 0], PeripheralDeviceType::DirectAccess),
            Err(DecodeError::TooShort { minimum: 8, .. })
        );
        assert_matches!(
            ModeHeader::decode10(&[0, 6, 0, 0, 0, 0, 0, 8], PeripheralDeviceType::DirectAccess),
            Err(DecodeError::TooShort { minimum: 16, .. })
        );
    }

    #[test]
    fn test_decode_mode6_with_caching_page() {
        let mut buf = vec![3 + 20, 0, 0b0001_0000, 0];
        buf.extend_from_slice(&caching_page());
        let params = decode_mode6(&buf, PeripheralDeviceType::DirectAccess).unwrap();
        assert_eq!(params.pages.len(), 1);
        let page = &params.pages[0];
        assert_eq!(page.page_code, 0x08);
        assert!(!page.ps);
        assert!(!page.spf);
        assert_eq!(page.data, caching_page());
        assert!(params.caching().unwrap().wce);
        assert_eq!(params.encode6(), buf);
        assert!(params
            .prettify()
            .contains("\tWrite-back cache is enabled\n"));
    }

    #[test]
    fn test_decode_mode10_subpages() {
        let mut buf = vec![0, 0, 0, 0, 0, 0, 0, 0];
        // Control extension subpage, then a plain page with PS set.
        buf.extend_from_slice(&[0x4a, 0x01, 0x00, 0x02, 0xaa, 0xbb]);
        buf.extend_from_slice(&[0x9c, 0x02, 0x01, 0x02]);
        let total = (buf.len() - 2) as u16;
        buf[..2].copy_from_slice(&total.to_be_bytes());

        let params = decode_mode10(&buf, PeripheralDeviceType::DirectAccess).unwrap();
        assert_eq!(params.pages.len(), 2);
        assert_eq!(
            params.pages[0],
            ModePage {
                ps: false,
                spf: true,
                page_code: 0x0a,
                subpage_code: 0x01,
                data: vec![0x4a, 0x01, 0x00, 0x02, 0xaa, 0xbb],
            }
        );
        assert!(params.pages[1].ps);
        assert_eq!(params.pages[1].page_code, 0x1c);
        assert_eq!(params.encode10(), buf);
        let text = params.prettify();
        assert!(text.contains("Mode page 0x0A subpage 0x01:\n"));
        assert!(text.contains("Mode page 0x1C:\n"));
    }

    #[test]
    fn test_truncated_response_stops_at_buffer_end() {
        // Mode data length claims more than the allocation length returned.
        let mut buf = vec![0x40, 0, 0, 0];
        buf.extend_from_slice(&caching_page());
        let params = decode_mode6(&buf, PeripheralDeviceType::DirectAccess).unwrap();
        assert_eq!(params.pages.len(), 1);
    }

    #[test]
    fn test_page_overrun() {
        let buf = [7, 0, 0, 0, 0x08, 0x12, 0, 0];
        assert_matches!(
            decode_mode6(&buf, PeripheralDeviceType::DirectAccess),
            Err(DecodeError::DescriptorOverrun { offset: 4 })
        );
    }

    #[test]
    fn test_vendor_page_zero_takes_the_rest() {
        let buf = [7, 0, 0, 0, 0x00, 1, 2, 3];
        let params = decode_mode6(&buf, PeripheralDeviceType::DirectAccess).unwrap();
        assert_eq!(params.pages.len(), 1);
        assert_eq!(params.pages[0].data, vec![0, 1, 2, 3]);
    }
}
