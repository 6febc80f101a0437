// SPDX-License-Identifier: Apache-2.0 or BSD-3-Clause

//! Caching mode page (SBC-3 6.4.5).

use std::fmt::Write;

use log::debug;

use crate::{
    field::{be16, be24, bits, flag, put_be16, put_be24, put_flag},
    DecodeError, Result,
};

pub const CACHING_PAGE: u8 = 0x08;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct CachingPage {
    /// Parameters savable.
    pub ps: bool,
    pub page_length: u8,
    /// Initiator control.
    pub ic: bool,
    /// Abort pre-fetch.
    pub abpf: bool,
    /// Caching analysis permitted.
    pub cap: bool,
    /// Discontinuity.
    pub disc: bool,
    pub size: bool,
    /// Write cache enable.
    pub wce: bool,
    /// Multiplication factor.
    pub mf: bool,
    /// Read cache disable.
    pub rcd: bool,
    pub demand_read_retention_priority: u8,
    pub write_retention_priority: u8,
    pub disable_prefetch_transfer_length: u16,
    pub minimum_prefetch: u16,
    pub maximum_prefetch: u16,
    pub maximum_prefetch_ceiling: u16,
    /// Force sequential write.
    pub fsw: bool,
    /// Logical block cache segment size.
    pub lbcss: bool,
    /// Disable read-ahead.
    pub dra: bool,
    pub nv_dis: bool,
    pub cache_segments: u8,
    pub cache_segment_size: u16,
    pub non_cache_segment_size: u32,
}

impl CachingPage {
    /// Page length of the SBC-2 and later layout.
    pub const PAGE_LENGTH: u8 = 0x12;

    pub fn decode(page: &[u8]) -> Result<Self> {
        crate::require_len(page, 12)?;
        let code = bits(page, 0, 0x3f, 0);
        if code != CACHING_PAGE || flag(page, 0, 0x40) {
            debug!("not a caching mode page: 0x{:02X}", page[0]);
            return Err(DecodeError::UnexpectedPageCode {
                expected: CACHING_PAGE,
                found: page[0] & 0x7f,
            });
        }
        let page_length = page[1];
        let declared = usize::from(page_length) + 2;
        if page.len() < declared {
            return Err(DecodeError::LengthMismatch {
                declared,
                actual: page.len(),
            });
        }
        let extended = declared >= 20;

        Ok(Self {
            ps: flag(page, 0, 0x80),
            page_length,
            ic: flag(page, 2, 0x80),
            abpf: flag(page, 2, 0x40),
            cap: flag(page, 2, 0x20),
            disc: flag(page, 2, 0x10),
            size: flag(page, 2, 0x08),
            wce: flag(page, 2, 0x04),
            mf: flag(page, 2, 0x02),
            rcd: flag(page, 2, 0x01),
            demand_read_retention_priority: bits(page, 3, 0xf0, 4),
            write_retention_priority: bits(page, 3, 0x0f, 0),
            disable_prefetch_transfer_length: be16(page, 4),
            minimum_prefetch: be16(page, 6),
            maximum_prefetch: be16(page, 8),
            maximum_prefetch_ceiling: be16(page, 10),
            fsw: extended && flag(page, 12, 0x80),
            lbcss: extended && flag(page, 12, 0x40),
            dra: extended && flag(page, 12, 0x20),
            nv_dis: extended && flag(page, 12, 0x01),
            cache_segments: if extended { page[13] } else { 0 },
            cache_segment_size: if extended { be16(page, 14) } else { 0 },
            non_cache_segment_size: if extended { be24(page, 17) } else { 0 },
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut page = vec![0; usize::from(self.page_length) + 2];
        page[0] = CACHING_PAGE;
        put_flag(&mut page, 0, 0x80, self.ps);
        page[1] = self.page_length;
        if page.len() < 12 {
            return page;
        }
        for (mask, value) in [
            (0x80, self.ic),
            (0x40, self.abpf),
            (0x20, self.cap),
            (0x10, self.disc),
            (0x08, self.size),
            (0x04, self.wce),
            (0x02, self.mf),
            (0x01, self.rcd),
        ] {
            put_flag(&mut page, 2, mask, value);
        }
        page[3] = (self.demand_read_retention_priority << 4) | (self.write_retention_priority & 0x0f);
        put_be16(&mut page, 4, self.disable_prefetch_transfer_length);
        put_be16(&mut page, 6, self.minimum_prefetch);
        put_be16(&mut page, 8, self.maximum_prefetch);
        put_be16(&mut page, 10, self.maximum_prefetch_ceiling);
        if page.len() >= 20 {
            put_flag(&mut page, 12, 0x80, self.fsw);
            put_flag(&mut page, 12, 0x40, self.lbcss);
            put_flag(&mut page, 12, 0x20, self.dra);
            put_flag(&mut page, 12, 0x01, self.nv_dis);
            page[13] = self.cache_segments;
            put_be16(&mut page, 14, self.cache_segment_size);
            put_be24(&mut page, 17, self.non_cache_segment_size);
        }
        page
    }

    pub fn prettify(&self) -> String {
        let mut sb = String::from("SCSI Caching mode page:\n");
        if self.ps {
            sb.push_str("\tParameters can be saved\n");
        }
        sb.push_str(if self.rcd {
            "\tRead cache is disabled\n"
        } else {
            "\tRead cache is enabled\n"
        });
        sb.push_str(if self.wce {
            "\tWrite-back cache is enabled\n"
        } else {
            "\tWrite-back cache is disabled\n"
        });
        let flags = [
            (self.ic, "Drive uses its own caching algorithm instead of the segment parameters"),
            (self.abpf, "Pre-fetch is aborted on selection"),
            (self.cap, "Caching analysis is permitted"),
            (self.disc, "Pre-fetch can continue across time discontinuities"),
            (self.size, "Cache segment size is used instead of the number of segments"),
            (self.fsw, "Drive writes blocks in the order they are received"),
            (self.lbcss, "Cache segment size is in logical blocks"),
            (self.dra, "Read-ahead is disabled"),
            (self.nv_dis, "Non-volatile cache is disabled"),
        ];
        for (_, line) in flags.iter().filter(|(set, _)| *set) {
            let _ = writeln!(sb, "\t{line}");
        }

        let retention = |priority: u8| match priority {
            0 => "is not distinguished",
            1 => "is replaced after other data",
            0xf => "is replaced before other data",
            _ => "uses a reserved priority",
        };
        let _ = writeln!(
            sb,
            "\tData read on demand {}",
            retention(self.demand_read_retention_priority)
        );
        let _ = writeln!(
            sb,
            "\tData written {}",
            retention(self.write_retention_priority)
        );

        if self.disable_prefetch_transfer_length == 0xffff {
            sb.push_str("\tPre-fetch is never disabled\n");
        } else if self.disable_prefetch_transfer_length == 0 {
            sb.push_str("\tPre-fetch is disabled\n");
        } else {
            let _ = writeln!(
                sb,
                "\tPre-fetch is disabled for transfers longer than {} blocks",
                self.disable_prefetch_transfer_length
            );
        }
        let unit = if self.mf { "times the transfer length" } else { "blocks" };
        let _ = writeln!(sb, "\tMinimum pre-fetch is {} {unit}", self.minimum_prefetch);
        let _ = writeln!(sb, "\tMaximum pre-fetch is {} {unit}", self.maximum_prefetch);
        let _ = writeln!(
            sb,
            "\tMaximum pre-fetch ceiling is {} blocks",
            self.maximum_prefetch_ceiling
        );
        if self.cache_segments != 0 {
            let _ = writeln!(sb, "\tCache has {} segments", self.cache_segments);
        }
        if self.cache_segment_size != 0 {
            let _ = writeln!(sb, "\tCache segments are {} bytes", self.cache_segment_size);
        }
        if self.non_cache_segment_size != 0 {
            let _ = writeln!(
                sb,
                "\tNon-cache segment is {} bytes",
                self.non_cache_segment_size
            );
        }
        sb
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn write_back_page() -> Vec<u8> {
        let mut page = vec![CACHING_PAGE, CachingPage::PAGE_LENGTH, 0b0000_0100];
        page.extend_from_slice(&[0; 0x11]);
        page
    }

    #[test]
    fn test_decode() {
        let page = CachingPage::decode(&write_back_page()).unwrap();
        assert!(page.wce);
        assert!(!page.rcd);
        assert!(!page.ps);
        assert_eq!(page.page_length, 0x12);
        assert_eq!(page.maximum_prefetch, 0);
        assert_eq!(page.encode(), write_back_page());
    }

    #[test]
    fn test_prettify() {
        let text = CachingPage::decode(&write_back_page()).unwrap().prettify();
        assert!(text.contains("\tWrite-back cache is enabled\n"));
        assert!(text.contains("\tRead cache is enabled\n"));
        assert!(text.contains("\tPre-fetch is disabled\n"));
    }

    #[test]
    fn test_scsi2_layout() {
        let page = [
            0x88, 0x0a, 0x01, 0x11, 0xff, 0xff, 0x00, 0x00, 0x00, 0x40, 0x00, 0x80,
        ];
        let decoded = CachingPage::decode(&page).unwrap();
        assert!(decoded.ps);
        assert!(decoded.rcd);
        assert_eq!(decoded.demand_read_retention_priority, 1);
        assert_eq!(decoded.write_retention_priority, 1);
        assert_eq!(decoded.maximum_prefetch, 0x40);
        assert_eq!(decoded.maximum_prefetch_ceiling, 0x80);
        assert_eq!(decoded.cache_segments, 0);
        assert_eq!(decoded.encode(), page);
        assert!(decoded.prettify().contains("\tPre-fetch is never disabled\n"));
    }

    #[test]
    fn test_wrong_page() {
        let mut page = write_back_page();
        page[0] = 0x0a;
        assert_matches!(
            CachingPage::decode(&page),
            Err(DecodeError::UnexpectedPageCode {
                expected: 0x08,
                found: 0x0a
            })
        );
        assert_matches!(
            CachingPage::decode(&write_back_page()[..16]),
            Err(DecodeError::LengthMismatch {
                declared: 20,
                actual: 16
            })
        );
    }
}
