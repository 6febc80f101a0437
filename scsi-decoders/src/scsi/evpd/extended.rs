// SPDX-License-Identifier: Apache-2.0 or BSD-3-Clause

//! Extended INQUIRY data (0x86) and mode page policy (0x87) pages.

use std::fmt::Write;

use log::debug;

use super::{PageHeader, VpdPage, HEADER_LEN};
use crate::{
    field::{be16, bits, flag},
    DecodeError, Result,
};

const EXTENDED_INQUIRY_LEN: usize = 64;

/// Page 0x86 (SPC-4 7.8.7).
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ExtendedInquiry {
    pub header: PageHeader,
    pub activate_microcode: u8,
    /// Supported protection type.
    pub spt: u8,
    pub grd_chk: bool,
    pub app_chk: bool,
    pub ref_chk: bool,
    pub uask_sup: bool,
    pub group_sup: bool,
    pub prior_sup: bool,
    pub headsup: bool,
    pub ordsup: bool,
    pub simpsup: bool,
    pub wu_sup: bool,
    pub crd_sup: bool,
    pub nv_sup: bool,
    pub v_sup: bool,
    /// Protection information checking is disabled.
    pub no_pi_chk: bool,
    pub p_i_i_sup: bool,
    pub luiclr: bool,
    /// Logical unit collection type.
    pub lu_coll_type: u8,
    pub r_sup: bool,
    pub rtd_sup: bool,
    pub hssrelef: bool,
    pub cbcs: bool,
    pub multi_it_nexus_microcode_download: u8,
    /// Minutes.
    pub extended_self_test_completion: u16,
    pub poa_sup: bool,
    pub hra_sup: bool,
    pub vsa_sup: bool,
    pub dms_valid: bool,
    pub max_sense_length: u8,
    pub ibs: bool,
    pub ias: bool,
    pub sac: bool,
    pub nrd1: bool,
    pub nrd0: bool,
    pub max_inquiry_change_logs: u16,
    pub max_mode_page_change_logs: u16,
}

impl ExtendedInquiry {
    pub fn decode(buf: &[u8]) -> Result<Self> {
        let header = PageHeader::decode(buf, VpdPage::ExtendedInquiry.into())?;
        if buf.len() < EXTENDED_INQUIRY_LEN {
            debug!("extended INQUIRY page is only {} bytes", buf.len());
            return Err(DecodeError::TooShort {
                minimum: EXTENDED_INQUIRY_LEN,
                actual: buf.len(),
            });
        }
        Ok(Self {
            header,
            activate_microcode: bits(buf, 4, 0xc0, 6),
            spt: bits(buf, 4, 0x38, 3),
            grd_chk: flag(buf, 4, 0x04),
            app_chk: flag(buf, 4, 0x02),
            ref_chk: flag(buf, 4, 0x01),
            uask_sup: flag(buf, 5, 0x20),
            group_sup: flag(buf, 5, 0x10),
            prior_sup: flag(buf, 5, 0x08),
            headsup: flag(buf, 5, 0x04),
            ordsup: flag(buf, 5, 0x02),
            simpsup: flag(buf, 5, 0x01),
            wu_sup: flag(buf, 6, 0x08),
            crd_sup: flag(buf, 6, 0x04),
            nv_sup: flag(buf, 6, 0x02),
            v_sup: flag(buf, 6, 0x01),
            no_pi_chk: flag(buf, 7, 0x20),
            p_i_i_sup: flag(buf, 7, 0x10),
            luiclr: flag(buf, 7, 0x01),
            lu_coll_type: bits(buf, 8, 0xe0, 5),
            r_sup: flag(buf, 8, 0x10),
            rtd_sup: flag(buf, 8, 0x08),
            hssrelef: flag(buf, 8, 0x02),
            cbcs: flag(buf, 8, 0x01),
            multi_it_nexus_microcode_download: bits(buf, 9, 0x0f, 0),
            extended_self_test_completion: be16(buf, 10),
            poa_sup: flag(buf, 12, 0x80),
            hra_sup: flag(buf, 12, 0x40),
            vsa_sup: flag(buf, 12, 0x20),
            dms_valid: flag(buf, 12, 0x10),
            max_sense_length: buf[13],
            ibs: flag(buf, 14, 0x80),
            ias: flag(buf, 14, 0x40),
            sac: flag(buf, 14, 0x04),
            nrd1: flag(buf, 14, 0x02),
            nrd0: flag(buf, 14, 0x01),
            max_inquiry_change_logs: be16(buf, 15),
            max_mode_page_change_logs: be16(buf, 17),
        })
    }

    pub fn prettify(&self) -> String {
        let mut sb = String::from("Extended INQUIRY data:\n");
        match self.activate_microcode {
            1 => sb.push_str("\tMicrocode is activated before hard reset completes\n"),
            2 => sb.push_str("\tMicrocode is activated after the event that follows the download\n"),
            3 => sb.push_str("\tReserved value in activate microcode field\n"),
            _ => {}
        }
        if self.grd_chk || self.app_chk || self.ref_chk {
            let _ = writeln!(sb, "\tSupported protection type code: {}", self.spt);
        }
        let flags = [
            (self.grd_chk, "Device checks the logical block guard"),
            (self.app_chk, "Device checks the logical block application tag"),
            (self.ref_chk, "Device checks the logical block reference tag"),
            (self.uask_sup, "Device supports unit attention condition sense key specific data"),
            (self.group_sup, "Device supports grouping function"),
            (self.prior_sup, "Device supports priority"),
            (self.headsup, "Device supports HEAD OF QUEUE task attribute"),
            (self.ordsup, "Device supports ORDERED task attribute"),
            (self.simpsup, "Device supports SIMPLE task attribute"),
            (self.wu_sup, "Device supports setting WRITE UNCORRECTABLE bit"),
            (self.crd_sup, "Device supports CORRECTION DISABLED bit"),
            (self.nv_sup, "Device has a non-volatile cache"),
            (self.v_sup, "Device has a volatile cache"),
            (self.no_pi_chk, "Device does not check protection information"),
            (self.p_i_i_sup, "Device supports protection information intervals"),
            (self.luiclr, "Device clears unit attentions per I_T nexus"),
            (self.r_sup, "Device supports referrals"),
            (self.rtd_sup, "Device supports REVERT TO DEFAULTS"),
            (self.hssrelef, "Device supports HISTORY SNAPSHOT RELEASE EFFECTS"),
            (self.cbcs, "Device supports capability-based command security"),
            (self.poa_sup, "Device supports POWER OFF ACTIONS"),
            (self.hra_sup, "Device supports HARD RESET ACTIONS"),
            (self.vsa_sup, "Device supports vendor specific actions"),
            (self.dms_valid, "Download microcode support fields are valid"),
            (self.ibs, "Device supports in-band SCSI commands"),
            (self.ias, "Device supports in-band ATA commands"),
            (self.sac, "Device supports SUPPORTED ATTRIBUTE CHANGES"),
            (self.nrd1, "Device supports the NRD1 no-reset download mode"),
            (self.nrd0, "Device supports the NRD0 no-reset download mode"),
        ];
        for (_, line) in flags.iter().filter(|(set, _)| *set) {
            let _ = writeln!(sb, "\t{line}");
        }
        match self.lu_coll_type {
            0 => {}
            1 => sb.push_str("\tLogical unit is a conglomerate\n"),
            n => {
                let _ = writeln!(sb, "\tReserved logical unit collection type {n}");
            }
        }
        if self.extended_self_test_completion != 0 {
            let _ = writeln!(
                sb,
                "\tExtended self-test takes {} minutes",
                self.extended_self_test_completion
            );
        }
        if self.max_sense_length != 0 {
            let _ = writeln!(
                sb,
                "\tMaximum supported sense data length is {} bytes",
                self.max_sense_length
            );
        }
        if self.max_inquiry_change_logs != 0 {
            let _ = writeln!(
                sb,
                "\tDevice keeps up to {} INQUIRY change logs",
                self.max_inquiry_change_logs
            );
        }
        if self.max_mode_page_change_logs != 0 {
            let _ = writeln!(
                sb,
                "\tDevice keeps up to {} mode page change logs",
                self.max_mode_page_change_logs
            );
        }
        sb
    }
}

/// One entry of page 0x87.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModePagePolicyDescriptor {
    pub page_code: u8,
    pub subpage_code: u8,
    /// Multiple logical units share this mode page.
    pub mlus: bool,
    pub policy: u8,
}

/// Page 0x87.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModePagePolicy {
    pub header: PageHeader,
    pub descriptors: Vec<ModePagePolicyDescriptor>,
}

impl ModePagePolicy {
    pub fn decode(buf: &[u8]) -> Result<Self> {
        let header = PageHeader::decode(buf, VpdPage::ModePagePolicy.into())?;
        let body = &buf[HEADER_LEN..];
        if body.len() % 4 != 0 {
            let offset = HEADER_LEN + body.len() / 4 * 4;
            debug!("mode page policy descriptor at {offset} is truncated");
            return Err(DecodeError::DescriptorOverrun { offset });
        }
        let descriptors = body
            .chunks_exact(4)
            .map(|d| ModePagePolicyDescriptor {
                page_code: bits(d, 0, 0x3f, 0),
                subpage_code: d[1],
                mlus: flag(d, 2, 0x80),
                policy: bits(d, 2, 0x03, 0),
            })
            .collect();
        Ok(Self {
            header,
            descriptors,
        })
    }

    pub fn prettify(&self) -> String {
        let mut sb = String::from("Mode page policy:\n");
        for d in &self.descriptors {
            let policy = match d.policy {
                0 => "Shared",
                1 => "Per target port",
                2 => "Per initiator port",
                _ => "Per I_T nexus",
            };
            if d.page_code == 0x3f && d.subpage_code == 0xff {
                let _ = write!(sb, "\tAll mode pages not otherwise listed: {policy}");
            } else if d.subpage_code == 0 {
                let _ = write!(sb, "\tMode page 0x{:02X}: {policy}", d.page_code);
            } else {
                let _ = write!(
                    sb,
                    "\tMode page 0x{:02X} subpage 0x{:02X}: {policy}",
                    d.page_code, d.subpage_code
                );
            }
            if d.mlus {
                sb.push_str(", shared by multiple logical units");
            }
            sb.push('\n');
        }
        sb
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_extended_inquiry() {
        let mut buf = vec![0; 64];
        buf[1] = 0x86;
        buf[3] = 0x3c;
        buf[4] = 0x0d; // SPT 1, GRD_CHK, REF_CHK
        buf[5] = 0x07;
        buf[6] = 0x01;
        buf[10] = 0x00;
        buf[11] = 0x5a;
        buf[13] = 252;

        let page = ExtendedInquiry::decode(&buf).unwrap();
        assert_eq!(page.spt, 1);
        assert!(page.grd_chk);
        assert!(!page.app_chk);
        assert!(page.ref_chk);
        assert!(page.headsup && page.ordsup && page.simpsup);
        assert!(page.v_sup);
        assert_eq!(page.extended_self_test_completion, 90);
        assert_eq!(page.max_sense_length, 252);

        let text = page.prettify();
        assert!(text.contains("\tSupported protection type code: 1\n"));
        assert!(text.contains("\tDevice has a volatile cache\n"));
        assert!(text.contains("\tExtended self-test takes 90 minutes\n"));
    }

    #[test]
    fn test_extended_inquiry_spc5_fields() {
        let mut buf = vec![0; 64];
        buf[1] = 0x86;
        buf[3] = 0x3c;
        buf[7] = 0x20; // NO_PI_CHK
        buf[8] = 0x20 | 0x08 | 0x02; // LU_COLL_TYPE 1, RTD_SUP, HSSRELEF
        buf[12] = 0x10; // DMS_VALID
        buf[14] = 0x80 | 0x40 | 0x04 | 0x02 | 0x01;
        buf[15..17].copy_from_slice(&300_u16.to_be_bytes());
        buf[17..19].copy_from_slice(&12_u16.to_be_bytes());

        let page = ExtendedInquiry::decode(&buf).unwrap();
        assert!(page.no_pi_chk);
        assert!(!page.p_i_i_sup);
        assert_eq!(page.lu_coll_type, 1);
        assert!(!page.r_sup);
        assert!(page.rtd_sup);
        assert!(page.hssrelef);
        assert!(!page.cbcs);
        assert!(page.dms_valid);
        assert!(!page.vsa_sup);
        assert!(page.ibs && page.ias && page.sac && page.nrd1 && page.nrd0);
        assert_eq!(page.max_inquiry_change_logs, 300);
        assert_eq!(page.max_mode_page_change_logs, 12);

        let text = page.prettify();
        for line in [
            "\tDevice does not check protection information\n",
            "\tLogical unit is a conglomerate\n",
            "\tDevice supports REVERT TO DEFAULTS\n",
            "\tDevice supports HISTORY SNAPSHOT RELEASE EFFECTS\n",
            "\tDownload microcode support fields are valid\n",
            "\tDevice supports in-band SCSI commands\n",
            "\tDevice supports in-band ATA commands\n",
            "\tDevice supports SUPPORTED ATTRIBUTE CHANGES\n",
            "\tDevice supports the NRD1 no-reset download mode\n",
            "\tDevice supports the NRD0 no-reset download mode\n",
            "\tDevice keeps up to 300 INQUIRY change logs\n",
            "\tDevice keeps up to 12 mode page change logs\n",
        ] {
            assert!(text.contains(line), "missing {line:?}");
        }
    }

    #[test]
    fn test_extended_inquiry_short() {
        let buf = [0, 0x86, 0, 4, 0, 0, 0, 0];
        assert_matches!(
            ExtendedInquiry::decode(&buf),
            Err(DecodeError::TooShort {
                minimum: 64,
                actual: 8
            })
        );
    }

    #[test]
    fn test_mode_page_policy() {
        let buf = [0, 0x87, 0, 8, 0x08, 0x00, 0x81, 0x00, 0x3f, 0xff, 0x00, 0x00];
        let page = ModePagePolicy::decode(&buf).unwrap();
        assert_eq!(
            page.descriptors[0],
            ModePagePolicyDescriptor {
                page_code: 0x08,
                subpage_code: 0,
                mlus: true,
                policy: 1
            }
        );
        assert_eq!(
            page.prettify(),
            "Mode page policy:\n\
             \tMode page 0x08: Per target port, shared by multiple logical units\n\
             \tAll mode pages not otherwise listed: Shared\n"
        );

        assert_matches!(
            ModePagePolicy::decode(&buf[..10]),
            Err(DecodeError::LengthMismatch { .. })
        );
        let truncated = [0, 0x87, 0, 6, 0x08, 0x00, 0x81, 0x00, 0x3f, 0xff];
        assert_matches!(
            ModePagePolicy::decode(&truncated),
            Err(DecodeError::DescriptorOverrun { offset: 8 })
        );
    }
}
