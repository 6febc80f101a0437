// SPDX-License-Identifier: Apache-2.0 or BSD-3-Clause

//! Standard INQUIRY data (SPC-4 6.6.2).

pub mod version_descriptors;

use std::fmt::Write;

use log::debug;

use crate::{
    field::{be16, bits, flag, put_be16, put_flag},
    scsi::{device_type_description, qualifier_description},
    strings::{c_to_string, to_hex_string},
    DecodeError, Result,
};

/// Decoded standard INQUIRY data.
///
/// Fields past the end of the buffer keep their default value; the byte
/// regions are `None` (or empty) when the buffer stops before them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct InquiryData {
    pub peripheral_qualifier: u8,
    pub peripheral_device_type: u8,
    pub removable: bool,
    pub device_type_modifier: u8,
    pub iso_version: u8,
    pub ecma_version: u8,
    pub ansi_version: u8,
    pub aerc: bool,
    pub trm_tsk: bool,
    pub norm_aca: bool,
    pub hi_sup: bool,
    pub response_data_format: u8,
    pub additional_length: u8,
    pub sccs: bool,
    pub acc: bool,
    pub tpgs: u8,
    pub three_pc: bool,
    /// Bits 2-1 of byte 5.
    pub reserved5: u8,
    pub protect: bool,
    pub bque: bool,
    pub enc_serv: bool,
    pub vs1: bool,
    pub multi_p: bool,
    pub m_chngr: bool,
    pub ack_req_q: bool,
    pub addr32: bool,
    pub addr16: bool,
    pub rel_addr: bool,
    pub wbus32: bool,
    pub wbus16: bool,
    pub sync: bool,
    pub linked: bool,
    pub tran_dis: bool,
    pub cmd_que: bool,
    pub vs2: bool,
    pub vendor_identification: Option<[u8; 8]>,
    pub product_identification: Option<[u8; 16]>,
    pub product_revision_level: Option<[u8; 4]>,
    /// Bytes 36..56.
    pub vendor_specific: Vec<u8>,
    /// Upper nibble of byte 56.
    pub reserved56: u8,
    pub clocking: u8,
    pub qas: bool,
    pub ius: bool,
    pub reserved57: u8,
    pub version_descriptors: Vec<u16>,
    /// First byte of a version descriptor cut in half by the end of the data.
    pub partial_version_descriptor: Option<u8>,
    /// Bytes 74..96.
    pub reserved74: Vec<u8>,
    /// Bytes 96 and up.
    pub vendor_specific2: Vec<u8>,
}

impl InquiryData {
    pub fn decode(buf: &[u8]) -> Result<Self> {
        let len = buf.len();
        if len < 36 && len != 5 {
            debug!("INQUIRY response too short: {len} bytes");
            return Err(DecodeError::TooShort {
                minimum: 36,
                actual: len,
            });
        }
        let declared = usize::from(buf[4]) + 5;
        if len != declared {
            debug!("INQUIRY response is {len} bytes but declares {declared}");
            return Err(DecodeError::LengthMismatch {
                declared,
                actual: len,
            });
        }

        let mut data = Self {
            peripheral_qualifier: bits(buf, 0, 0xe0, 5),
            peripheral_device_type: bits(buf, 0, 0x1f, 0),
            removable: flag(buf, 1, 0x80),
            device_type_modifier: bits(buf, 1, 0x7f, 0),
            iso_version: bits(buf, 2, 0xc0, 6),
            ecma_version: bits(buf, 2, 0x38, 3),
            ansi_version: bits(buf, 2, 0x07, 0),
            aerc: flag(buf, 3, 0x80),
            trm_tsk: flag(buf, 3, 0x40),
            norm_aca: flag(buf, 3, 0x20),
            hi_sup: flag(buf, 3, 0x10),
            response_data_format: bits(buf, 3, 0x0f, 0),
            additional_length: buf[4],
            ..Self::default()
        };

        if len > 5 {
            data.sccs = flag(buf, 5, 0x80);
            data.acc = flag(buf, 5, 0x40);
            data.tpgs = bits(buf, 5, 0x30, 4);
            data.three_pc = flag(buf, 5, 0x08);
            data.reserved5 = bits(buf, 5, 0x06, 1);
            data.protect = flag(buf, 5, 0x01);

            data.bque = flag(buf, 6, 0x80);
            data.enc_serv = flag(buf, 6, 0x40);
            data.vs1 = flag(buf, 6, 0x20);
            data.multi_p = flag(buf, 6, 0x10);
            data.m_chngr = flag(buf, 6, 0x08);
            data.ack_req_q = flag(buf, 6, 0x04);
            data.addr32 = flag(buf, 6, 0x02);
            data.addr16 = flag(buf, 6, 0x01);

            data.rel_addr = flag(buf, 7, 0x80);
            data.wbus32 = flag(buf, 7, 0x40);
            data.wbus16 = flag(buf, 7, 0x20);
            data.sync = flag(buf, 7, 0x10);
            data.linked = flag(buf, 7, 0x08);
            data.tran_dis = flag(buf, 7, 0x04);
            data.cmd_que = flag(buf, 7, 0x02);
            data.vs2 = flag(buf, 7, 0x01);

            data.vendor_identification = buf[8..16].try_into().ok();
            data.product_identification = buf[16..32].try_into().ok();
            data.product_revision_level = buf[32..36].try_into().ok();
        }

        if len > 36 {
            data.vendor_specific = buf[36..len.min(56)].to_vec();
        }
        if len > 56 {
            data.reserved56 = bits(buf, 56, 0xf0, 4);
            data.clocking = bits(buf, 56, 0x0c, 2);
            data.qas = flag(buf, 56, 0x02);
            data.ius = flag(buf, 56, 0x01);
        }
        if len > 57 {
            data.reserved57 = buf[57];
        }
        if len >= 60 {
            let count = ((len - 58) / 2).min(8);
            data.version_descriptors = (0..count).map(|i| be16(buf, 58 + i * 2)).collect();
        }
        if len > 58 && len < 74 && (len - 58) % 2 == 1 {
            data.partial_version_descriptor = Some(buf[len - 1]);
        }
        if len >= 75 {
            data.reserved74 = buf[74..len.min(96)].to_vec();
        }
        if len > 96 {
            data.vendor_specific2 = buf[96..].to_vec();
        }

        Ok(data)
    }

    /// Produce the byte image of this record, `additional_length + 5` bytes
    /// long.
    pub fn encode(&self) -> Vec<u8> {
        let len = usize::from(self.additional_length) + 5;
        let mut buf = vec![0; len.max(5)];

        buf[0] = (self.peripheral_qualifier << 5) | (self.peripheral_device_type & 0x1f);
        buf[1] = self.device_type_modifier & 0x7f;
        put_flag(&mut buf, 1, 0x80, self.removable);
        buf[2] = (self.iso_version << 6) | ((self.ecma_version & 0x07) << 3) | (self.ansi_version & 0x07);
        buf[3] = self.response_data_format & 0x0f;
        put_flag(&mut buf, 3, 0x80, self.aerc);
        put_flag(&mut buf, 3, 0x40, self.trm_tsk);
        put_flag(&mut buf, 3, 0x20, self.norm_aca);
        put_flag(&mut buf, 3, 0x10, self.hi_sup);
        buf[4] = self.additional_length;

        if len < 36 {
            return buf;
        }

        buf[5] = ((self.tpgs & 0x03) << 4) | ((self.reserved5 & 0x03) << 1);
        put_flag(&mut buf, 5, 0x80, self.sccs);
        put_flag(&mut buf, 5, 0x40, self.acc);
        put_flag(&mut buf, 5, 0x08, self.three_pc);
        put_flag(&mut buf, 5, 0x01, self.protect);

        for (mask, value) in [
            (0x80, self.bque),
            (0x40, self.enc_serv),
            (0x20, self.vs1),
            (0x10, self.multi_p),
            (0x08, self.m_chngr),
            (0x04, self.ack_req_q),
            (0x02, self.addr32),
            (0x01, self.addr16),
        ] {
            put_flag(&mut buf, 6, mask, value);
        }
        for (mask, value) in [
            (0x80, self.rel_addr),
            (0x40, self.wbus32),
            (0x20, self.wbus16),
            (0x10, self.sync),
            (0x08, self.linked),
            (0x04, self.tran_dis),
            (0x02, self.cmd_que),
            (0x01, self.vs2),
        ] {
            put_flag(&mut buf, 7, mask, value);
        }

        if let Some(vendor) = &self.vendor_identification {
            buf[8..16].copy_from_slice(vendor);
        }
        if let Some(product) = &self.product_identification {
            buf[16..32].copy_from_slice(product);
        }
        if let Some(revision) = &self.product_revision_level {
            buf[32..36].copy_from_slice(revision);
        }

        copy_region(&mut buf, 36, 56, &self.vendor_specific);
        if len > 56 {
            buf[56] = (self.reserved56 << 4) | ((self.clocking & 0x03) << 2);
            put_flag(&mut buf, 56, 0x02, self.qas);
            put_flag(&mut buf, 56, 0x01, self.ius);
        }
        if len > 57 {
            buf[57] = self.reserved57;
        }
        for (i, &code) in self.version_descriptors.iter().take(8).enumerate() {
            let offset = 58 + i * 2;
            if offset + 2 <= len {
                put_be16(&mut buf, offset, code);
            }
        }
        if let Some(byte) = self.partial_version_descriptor {
            if len > 58 && len < 74 {
                buf[len - 1] = byte;
            }
        }
        copy_region(&mut buf, 74, 96, &self.reserved74);
        copy_region(&mut buf, 96, len, &self.vendor_specific2);

        buf
    }

    pub fn vendor(&self) -> Option<String> {
        self.vendor_identification.as_ref().map(|v| c_to_string(v))
    }

    pub fn product(&self) -> Option<String> {
        self.product_identification.as_ref().map(|v| c_to_string(v))
    }

    pub fn revision(&self) -> Option<String> {
        self.product_revision_level.as_ref().map(|v| c_to_string(v))
    }

    #[allow(clippy::too_many_lines)]
    pub fn prettify(&self) -> String {
        let mut sb = String::new();

        if let Some(vendor) = self.vendor() {
            let _ = writeln!(sb, "Device vendor: {vendor}");
        }
        if let Some(product) = self.product() {
            let _ = writeln!(sb, "Device name: {product}");
        }
        if let Some(revision) = self.revision() {
            let _ = writeln!(sb, "Device release level: {revision}");
        }

        let _ = writeln!(sb, "{}", qualifier_description(self.peripheral_qualifier));
        let _ = writeln!(
            sb,
            "Device type: {}",
            device_type_description(self.peripheral_device_type)
        );

        let _ = writeln!(sb, "{}", ansi_version_description(self.ansi_version));
        match self.ecma_version {
            0 => {}
            1 => {
                let _ = writeln!(sb, "Device claims to comply with ECMA-111: Small Computer System Interface SCSI");
            }
            v => {
                let _ = writeln!(sb, "Device claims to comply with unknown ECMA version {v}");
            }
        }
        match self.iso_version {
            0 => {}
            1 => {
                let _ = writeln!(sb, "Device claims to comply with ISO/IEC 9316:1995");
            }
            v => {
                let _ = writeln!(sb, "Device claims to comply with unknown ISO/IEC version {v}");
            }
        }

        match self.response_data_format {
            0 => sb.push_str("Response data is in SCSI-1 format\n"),
            1 => sb.push_str("Response data is in CCS format\n"),
            2 => sb.push_str("Response data is in SCSI-2/SPC format\n"),
            f => {
                let _ = writeln!(sb, "Response data is in unknown format {f}");
            }
        }

        if self.removable {
            sb.push_str("Device is removable\n");
        }
        if self.device_type_modifier != 0 {
            let _ = writeln!(
                sb,
                "Vendor's device type modifier value: 0x{:02X}",
                self.device_type_modifier
            );
        }

        let flags = [
            (self.aerc, "Device supports asynchronous event reporting"),
            (self.trm_tsk, "Device supports TERMINATE TASK command"),
            (self.norm_aca, "Device supports setting Normal ACA"),
            (self.hi_sup, "Device supports LUN hierarchical addressing"),
            (self.sccs, "Device contains an embedded storage array controller"),
            (self.acc, "Device contains an Access Control Coordinator"),
            (self.three_pc, "Device supports third-party copy commands"),
            (self.protect, "Device supports protection information"),
            (self.bque, "Device supports basic queueing"),
            (self.enc_serv, "Device contains an embedded enclosure services component"),
            (self.multi_p, "Multi-port device"),
            (self.m_chngr, "Device contains or is attached to a medium changer"),
            (self.ack_req_q, "Device supports request and acknowledge handshakes"),
            (self.addr32, "Device supports 32-bit wide SCSI addresses"),
            (self.addr16, "Device supports 16-bit wide SCSI addresses"),
            (self.rel_addr, "Device supports relative addressing"),
            (self.wbus32, "Device supports 32-bit wide data transfers"),
            (self.wbus16, "Device supports 16-bit wide data transfers"),
            (self.sync, "Device supports synchronous data transfer"),
            (self.linked, "Device supports linked commands"),
            (
                self.tran_dis,
                "Device supports CONTINUE TASK and TARGET TRANSFER DISABLE commands",
            ),
            (self.cmd_que, "Device supports command queueing"),
            (self.qas, "Device supports quick arbitration and selection"),
            (self.ius, "Device supports information unit transfers"),
        ];
        for (_, line) in flags.iter().filter(|(set, _)| *set) {
            sb.push_str(line);
            sb.push('\n');
        }

        match self.tpgs {
            0 => {}
            1 => sb.push_str("Device only supports implicit asymmetric access\n"),
            2 => sb.push_str("Device only supports explicit asymmetric access\n"),
            _ => sb.push_str("Device supports implicit and explicit asymmetric access\n"),
        }

        if usize::from(self.additional_length) + 5 > 56 {
            match self.clocking {
                0 => sb.push_str("Device supports only ST clocking\n"),
                1 => sb.push_str("Device supports only DT clocking\n"),
                2 => sb.push_str("Reserved value 0x02 found in clocking field\n"),
                _ => sb.push_str("Device supports ST and DT clocking\n"),
            }
        }

        let claimed: Vec<_> = self
            .version_descriptors
            .iter()
            .filter(|&&code| code != 0x0000 && code != 0xffff)
            .collect();
        if !claimed.is_empty() {
            sb.push_str("Device claims the following standards:\n");
            for &&code in &claimed {
                let _ = writeln!(sb, "\t{}", version_descriptors::describe(code));
            }
        }

        if !self.vendor_specific.is_empty() && self.vendor_specific.iter().any(|&b| b != 0) {
            sb.push_str("Vendor-specific bytes 36 to 55:\n");
            sb.push_str(&to_hex_string(&self.vendor_specific, 80));
        }
        if !self.vendor_specific2.is_empty() {
            let _ = writeln!(
                sb,
                "Vendor-specific bytes 96 to {}:",
                95 + self.vendor_specific2.len()
            );
            sb.push_str(&to_hex_string(&self.vendor_specific2, 80));
        }

        sb
    }
}

fn copy_region(buf: &mut [u8], start: usize, end: usize, region: &[u8]) {
    let end = end.min(buf.len());
    if start >= end {
        return;
    }
    let n = region.len().min(end - start);
    buf[start..start + n].copy_from_slice(&region[..n]);
}

fn ansi_version_description(version: u8) -> String {
    let standard = match version {
        0 => return "Device does not claim to comply with any SCSI ANSI standard".to_owned(),
        1 => "ANSI X3.131:1986 (SCSI-1)",
        2 => "ANSI X3.131:1994 (SCSI-2)",
        3 => "ANSI X3.301:1997 (SPC-1)",
        4 => "ANSI X3.351:2001 (SPC-2)",
        5 => "ANSI INCITS 408-2005 (SPC-3)",
        6 => "ANSI INCITS 513-2015 (SPC-4)",
        7 => "T10/BSR INCITS 503 (SPC-5)",
        _ => return format!("Device claims to comply with unknown SCSI ANSI standard value 0x{version:02X}"),
    };
    format!("Device claims to comply with {standard}")
}

/// Decode and prettify in one step.
pub fn prettify_inquiry(buf: &[u8]) -> Result<String> {
    InquiryData::decode(buf).map(|data| data.prettify())
}
