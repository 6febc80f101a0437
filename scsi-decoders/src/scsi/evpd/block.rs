// SPDX-License-Identifier: Apache-2.0 or BSD-3-Clause

//! Block device pages from SBC-3: block limits (0xB0), block device
//! characteristics (0xB1) and logical block provisioning (0xB2).

use std::fmt::Write;

use super::{identification, IdentificationDescriptor, PageHeader, VpdPage, HEADER_LEN};
use crate::{
    field::{be16, be32, be64, bits, flag},
    Result,
};

/// Page 0xB0.
///
/// Devices before SBC-3 return only the first 16 bytes; the unmap and
/// WRITE SAME fields are `None` then.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockLimits {
    pub header: PageHeader,
    pub wsnz: bool,
    pub max_compare_and_write_length: u8,
    pub optimal_transfer_length_granularity: u16,
    pub max_transfer_length: u32,
    pub optimal_transfer_length: u32,
    pub max_prefetch_length: u32,
    pub max_unmap_lba_count: Option<u32>,
    pub max_unmap_block_descriptor_count: Option<u32>,
    pub optimal_unmap_granularity: Option<u32>,
    pub unmap_granularity_alignment: Option<u32>,
    pub max_write_same_length: Option<u64>,
}

impl BlockLimits {
    pub fn decode(buf: &[u8]) -> Result<Self> {
        let header = PageHeader::decode(buf, VpdPage::BlockLimits.into())?;
        crate::require_len(buf, 16)?;
        let len = buf.len();
        let unmap = len >= 36;
        Ok(Self {
            header,
            wsnz: flag(buf, 4, 0x01),
            max_compare_and_write_length: buf[5],
            optimal_transfer_length_granularity: be16(buf, 6),
            max_transfer_length: be32(buf, 8),
            optimal_transfer_length: be32(buf, 12),
            max_prefetch_length: if len >= 20 { be32(buf, 16) } else { 0 },
            max_unmap_lba_count: unmap.then(|| be32(buf, 20)),
            max_unmap_block_descriptor_count: unmap.then(|| be32(buf, 24)),
            optimal_unmap_granularity: unmap.then(|| be32(buf, 28)),
            unmap_granularity_alignment: (unmap && flag(buf, 32, 0x80))
                .then(|| be32(buf, 32) & 0x7fff_ffff),
            max_write_same_length: (len >= 44).then(|| be64(buf, 36)),
        })
    }

    pub fn prettify(&self) -> String {
        let mut sb = String::from("Block limits:\n");
        if self.wsnz {
            sb.push_str("\tDevice rejects a WRITE SAME with zero blocks\n");
        }
        let limits = [
            (
                u64::from(self.max_compare_and_write_length),
                "Maximum COMPARE AND WRITE length",
            ),
            (
                u64::from(self.optimal_transfer_length_granularity),
                "Optimal transfer length granularity",
            ),
            (u64::from(self.max_transfer_length), "Maximum transfer length"),
            (u64::from(self.optimal_transfer_length), "Optimal transfer length"),
            (u64::from(self.max_prefetch_length), "Maximum prefetch length"),
        ];
        for (value, name) in limits {
            if value != 0 {
                let _ = writeln!(sb, "\t{name}: {value} blocks");
            }
        }
        if let Some(count) = self.max_unmap_lba_count {
            let _ = writeln!(sb, "\tMaximum unmap LBA count: {count}");
        }
        if let Some(count) = self.max_unmap_block_descriptor_count {
            let _ = writeln!(sb, "\tMaximum unmap block descriptor count: {count}");
        }
        if let Some(granularity) = self.optimal_unmap_granularity {
            let _ = writeln!(sb, "\tOptimal unmap granularity: {granularity} blocks");
        }
        if let Some(alignment) = self.unmap_granularity_alignment {
            let _ = writeln!(sb, "\tUnmap granularity alignment: {alignment}");
        }
        if let Some(length) = self.max_write_same_length.filter(|&l| l != 0) {
            let _ = writeln!(sb, "\tMaximum WRITE SAME length: {length} blocks");
        }
        sb
    }
}

/// Page 0xB1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockDeviceCharacteristics {
    pub header: PageHeader,
    pub medium_rotation_rate: u16,
    pub product_type: u8,
    pub wabereq: u8,
    pub wacereq: u8,
    pub nominal_form_factor: u8,
    pub zoned: u8,
    pub fuab: bool,
    pub vbuls: bool,
}

impl BlockDeviceCharacteristics {
    pub fn decode(buf: &[u8]) -> Result<Self> {
        let header = PageHeader::decode(buf, VpdPage::BlockDeviceCharacteristics.into())?;
        crate::require_len(buf, 8)?;
        let extended = buf.len() > 8;
        Ok(Self {
            header,
            medium_rotation_rate: be16(buf, 4),
            product_type: buf[6],
            wabereq: bits(buf, 7, 0xc0, 6),
            wacereq: bits(buf, 7, 0x30, 4),
            nominal_form_factor: bits(buf, 7, 0x0f, 0),
            zoned: if extended { bits(buf, 8, 0x30, 4) } else { 0 },
            fuab: extended && flag(buf, 8, 0x02),
            vbuls: extended && flag(buf, 8, 0x01),
        })
    }

    pub fn prettify(&self) -> String {
        let mut sb = String::from("Block device characteristics:\n");
        match self.medium_rotation_rate {
            0 => sb.push_str("\tMedium rotation rate is not reported\n"),
            1 => sb.push_str("\tMedium is not rotating\n"),
            0x0401..=0xfffe => {
                let _ = writeln!(sb, "\tMedium rotates at {} rpm", self.medium_rotation_rate);
            }
            rate => {
                let _ = writeln!(sb, "\tReserved medium rotation rate 0x{rate:04X}");
            }
        }
        match self.product_type {
            0 => {}
            1 => sb.push_str("\tProduct is a CFast card\n"),
            2 => sb.push_str("\tProduct is a CompactFlash card\n"),
            3 => sb.push_str("\tProduct is a Memory Stick\n"),
            4 => sb.push_str("\tProduct is a MultiMediaCard\n"),
            5 => sb.push_str("\tProduct is a Secure Digital card\n"),
            6 => sb.push_str("\tProduct is a XQD card\n"),
            7 => sb.push_str("\tProduct is a Universal Flash Storage device\n"),
            ty @ 0xf0..=0xff => {
                let _ = writeln!(sb, "\tVendor specific product type 0x{ty:02X}");
            }
            ty => {
                let _ = writeln!(sb, "\tReserved product type 0x{ty:02X}");
            }
        }
        let form_factor = match self.nominal_form_factor {
            0 => None,
            1 => Some("5.25\""),
            2 => Some("3.5\""),
            3 => Some("2.5\""),
            4 => Some("1.8\""),
            5 => Some("less than 1.8\""),
            _ => Some("reserved"),
        };
        if let Some(form_factor) = form_factor {
            let _ = writeln!(sb, "\tNominal form factor is {form_factor}");
        }
        match self.zoned {
            1 => sb.push_str("\tDevice is host aware zoned\n"),
            2 => sb.push_str("\tDevice is device managed zoned\n"),
            _ => {}
        }
        if self.fuab {
            sb.push_str("\tSYNCHRONIZE CACHE is equivalent to FUA writes\n");
        }
        if self.vbuls {
            sb.push_str("\tVerify byte check unmapped LBA is supported\n");
        }
        sb
    }
}

/// Page 0xB2.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct LogicalBlockProvisioning {
    pub header: PageHeader,
    pub threshold_exponent: u8,
    /// UNMAP supported.
    pub lbpu: bool,
    /// WRITE SAME (16) with UNMAP supported.
    pub lbpws: bool,
    /// WRITE SAME (10) with UNMAP supported.
    pub lbpws10: bool,
    /// Unmapped blocks read as zeros.
    pub lbprz: bool,
    pub anc_sup: bool,
    /// A provisioning group descriptor follows the header.
    pub dp: bool,
    pub provisioning_type: u8,
    pub threshold_percentage: u8,
    pub provisioning_group: Option<IdentificationDescriptor>,
}

impl LogicalBlockProvisioning {
    pub fn decode(buf: &[u8]) -> Result<Self> {
        let header = PageHeader::decode(buf, VpdPage::LogicalBlockProvisioning.into())?;
        crate::require_len(buf, HEADER_LEN + 4)?;
        let dp = flag(buf, 5, 0x01);
        let provisioning_group = if dp && buf.len() > HEADER_LEN + 4 {
            identification::walk_descriptors(buf, HEADER_LEN + 4, buf.len())?
                .into_iter()
                .next()
        } else {
            None
        };
        Ok(Self {
            header,
            threshold_exponent: buf[4],
            lbpu: flag(buf, 5, 0x80),
            lbpws: flag(buf, 5, 0x40),
            lbpws10: flag(buf, 5, 0x20),
            lbprz: flag(buf, 5, 0x04),
            anc_sup: flag(buf, 5, 0x02),
            dp,
            provisioning_type: bits(buf, 6, 0x07, 0),
            threshold_percentage: buf[7],
            provisioning_group,
        })
    }

    pub fn prettify(&self) -> String {
        let mut sb = String::from("Logical block provisioning:\n");
        match self.provisioning_type {
            0 => sb.push_str("\tDevice is fully provisioned\n"),
            1 => sb.push_str("\tDevice is resource provisioned\n"),
            2 => sb.push_str("\tDevice is thin provisioned\n"),
            ty => {
                let _ = writeln!(sb, "\tReserved provisioning type {ty}");
            }
        }
        if self.threshold_exponent != 0 {
            let _ = writeln!(
                sb,
                "\tThreshold sets are 2^{} blocks",
                self.threshold_exponent
            );
        }
        let flags = [
            (self.lbpu, "Device supports UNMAP"),
            (self.lbpws, "Device supports unmapping with WRITE SAME (16)"),
            (self.lbpws10, "Device supports unmapping with WRITE SAME (10)"),
            (self.lbprz, "Unmapped blocks read as zeros"),
            (self.anc_sup, "Device supports anchored blocks"),
        ];
        for (_, line) in flags.iter().filter(|(set, _)| *set) {
            let _ = writeln!(sb, "\t{line}");
        }
        if self.threshold_percentage != 0 {
            let _ = writeln!(
                sb,
                "\tProvisioning threshold is {}%",
                self.threshold_percentage
            );
        }
        if let Some(group) = &self.provisioning_group {
            let _ = writeln!(sb, "\tProvisioning group: {}", group.describe());
        }
        sb
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::DecodeError;

    #[test]
    fn test_block_limits_short() {
        let buf = [
            0, 0xb0, 0, 0x0c, 0, 0, 0, 8, 0, 0, 0x10, 0, 0, 0, 0x01, 0,
        ];
        let page = BlockLimits::decode(&buf).unwrap();
        assert_eq!(page.optimal_transfer_length_granularity, 8);
        assert_eq!(page.max_transfer_length, 4096);
        assert_eq!(page.optimal_transfer_length, 256);
        assert_eq!(page.max_unmap_lba_count, None);
        assert_eq!(page.max_write_same_length, None);
    }

    #[test]
    fn test_block_limits_full() {
        let mut buf = vec![0; 64];
        buf[1] = 0xb0;
        buf[3] = 0x3c;
        buf[4] = 0x01;
        buf[23] = 0x40; // max unmap LBA count
        buf[27] = 0x01;
        buf[31] = 0x08;
        buf[32] = 0x80;
        buf[35] = 0x02;
        buf[42] = 0xff;
        buf[43] = 0xff;
        let page = BlockLimits::decode(&buf).unwrap();
        assert!(page.wsnz);
        assert_eq!(page.max_unmap_lba_count, Some(0x40));
        assert_eq!(page.max_unmap_block_descriptor_count, Some(1));
        assert_eq!(page.optimal_unmap_granularity, Some(8));
        assert_eq!(page.unmap_granularity_alignment, Some(2));
        assert_eq!(page.max_write_same_length, Some(0xffff));

        let text = page.prettify();
        assert!(text.contains("\tOptimal unmap granularity: 8 blocks\n"));
        assert!(text.contains("\tMaximum WRITE SAME length: 65535 blocks\n"));
    }

    #[test]
    fn test_block_device_characteristics() {
        let mut buf = vec![0, 0xb1, 0, 0x3c, 0x00, 0x01];
        buf.extend_from_slice(&[0; 58]);
        buf[7] = 0x03;
        let page = BlockDeviceCharacteristics::decode(&buf).unwrap();
        assert_eq!(page.medium_rotation_rate, 1);
        assert_eq!(page.nominal_form_factor, 3);
        let text = page.prettify();
        assert!(text.contains("\tMedium is not rotating\n"));
        assert!(text.contains("\tNominal form factor is 2.5\"\n"));

        buf[4] = 0x1c;
        buf[5] = 0x20;
        let page = BlockDeviceCharacteristics::decode(&buf).unwrap();
        assert!(page.prettify().contains("\tMedium rotates at 7200 rpm\n"));
    }

    #[test]
    fn test_logical_block_provisioning() {
        let buf = [0, 0xb2, 0, 4, 0, 0b1110_0100, 0b0000_0010, 0];
        let page = LogicalBlockProvisioning::decode(&buf).unwrap();
        assert!(page.lbpu && page.lbpws && page.lbpws10 && page.lbprz);
        assert!(!page.dp);
        assert_eq!(page.provisioning_type, 2);
        let text = page.prettify();
        assert!(text.contains("\tDevice is thin provisioned\n"));
        assert!(text.contains("\tDevice supports UNMAP\n"));
    }

    #[test]
    fn test_provisioning_group() {
        let mut buf = vec![0, 0xb2, 0, 0, 0, 0x01, 0x01, 0];
        buf.extend_from_slice(&[0x01, 0x03, 0x00, 0x08, 0x60, 1, 2, 3, 4, 5, 6, 7]);
        buf[3] = (buf.len() - 4) as u8;
        let page = LogicalBlockProvisioning::decode(&buf).unwrap();
        assert_eq!(
            page.provisioning_group.map(|g| g.describe()),
            Some("NAA IEEE Registered Extended: 6001020304050607".to_owned())
        );

        let truncated = [0, 0xb2, 0, 6, 0, 0x01, 0x01, 0, 0x01, 0x03];
        assert_matches!(
            LogicalBlockProvisioning::decode(&truncated),
            Err(DecodeError::DescriptorOverrun { offset: 8 })
        );
    }
}
