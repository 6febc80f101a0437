// SPDX-License-Identifier: Apache-2.0 or BSD-3-Clause

//! READ DISC STRUCTURE capability list (format code 0xFF, MMC-6 6.22.3.39).

use std::{borrow::Cow, fmt::Write};

use log::{debug, warn};

use crate::{
    field::{be16, flag},
    DecodeError, Result,
};

const HEADER_LEN: usize = 4;
const RECORD_LEN: usize = 4;

/// One structure the drive can read or send.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
    pub format_code: u8,
    /// SEND DISC STRUCTURE supports this format.
    pub sds: bool,
    /// READ DISC STRUCTURE supports this format.
    pub rds: bool,
    pub structure_length: u16,
}

/// Decode a capability list.
///
/// The data length in bytes 0-1 must account for the whole buffer. Records
/// are read while a full one remains; a shorter tail is ignored.
pub fn decode(buf: &[u8]) -> Result<Vec<Capability>> {
    crate::require_len(buf, HEADER_LEN)?;
    let declared = usize::from(be16(buf, 0)) + 2;
    if declared != buf.len() {
        debug!("capability list declares {declared} bytes, got {}", buf.len());
        return Err(DecodeError::LengthMismatch {
            declared,
            actual: buf.len(),
        });
    }

    let body = &buf[HEADER_LEN..];
    let tail = body.len() % RECORD_LEN;
    if tail != 0 {
        warn!("ignoring {tail} trailing bytes after the last capability record");
    }
    Ok(body
        .chunks_exact(RECORD_LEN)
        .map(|record| Capability {
            format_code: record[0],
            sds: flag(record, 1, 0x80),
            rds: flag(record, 1, 0x40),
            structure_length: be16(record, 2),
        })
        .collect())
}

/// Name of a READ DISC STRUCTURE format code for DVD and BD media.
pub fn format_description(code: u8) -> Cow<'static, str> {
    Cow::Borrowed(match code {
        0x00 => "Physical format information",
        0x01 => "Copyright information",
        0x02 => "Disc key",
        0x03 => "Burst cutting area",
        0x04 => "Disc manufacturing information",
        0x05 => "Copyright management information",
        0x06 => "Media identifier",
        0x07 => "Media key block",
        0x08 => "DVD-RAM disc definition structure",
        0x09 => "DVD-RAM medium status",
        0x0a => "DVD-RAM spare area information",
        0x0b => "DVD-RAM recording type information",
        0x0c => "RMD in the last border-out",
        0x0d => "Recording management area data",
        0x0e => "Pre-recorded information in lead-in",
        0x0f => "Unique disc identifier",
        0x10 => "Physical format information of the control data zone",
        0x11 => "ADIP information",
        0x12 => "HD DVD copyright protection information",
        0x15 => "HD DVD copyright data section",
        0x19 => "HD DVD-R medium status",
        0x1a => "HD DVD-R last recorded RMD in the latest RMZ",
        0x20 => "DVD+R/-R dual layer, layer 0 capacity",
        0x21 => "DVD-R dual layer middle zone start address",
        0x22 => "DVD-R dual layer jump interval size",
        0x23 => "DVD-R dual layer manual layer jump address",
        0x24 => "DVD-R dual layer remapping address",
        0x30 => "Disc control blocks",
        0x31 => "Read-only medium MTA ECC block",
        0x80 => "AACS volume identifier",
        0x81 => "AACS pre-recorded media serial number",
        0x82 => "AACS media identifier",
        0x83 => "AACS media key block",
        0x84 => "AACS data keys",
        0x85 => "AACS LBA extents",
        0x86 => "AACS media key block of CPRM",
        0x87 => "Recognized AACS layers",
        0xc0 => "Write protection status",
        0xff => "Capability list",
        _ => return Cow::Owned(format!("Unknown disc structure format 0x{code:02X}")),
    })
}

pub fn prettify(capabilities: &[Capability]) -> String {
    let mut sb = String::from("READ DISC STRUCTURE capability list:\n");
    for capability in capabilities {
        let access = match (capability.rds, capability.sds) {
            (true, true) => "can be read and sent",
            (true, false) => "can be read",
            (false, true) => "can be sent",
            (false, false) => "is listed but cannot be read or sent",
        };
        let _ = writeln!(
            sb,
            "\t{} (0x{:02X}) {access}, {} bytes",
            format_description(capability.format_code),
            capability.format_code,
            capability.structure_length
        );
    }
    sb
}

pub fn prettify_capabilities(buf: &[u8]) -> Result<String> {
    decode(buf).map(|capabilities| prettify(&capabilities))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_single_record_with_tail() {
        let buf = [0x00, 0x08, 0, 0, 0x00, 0x80, 0x08, 0x04, 0, 0];
        let capabilities = decode(&buf).unwrap();
        assert_eq!(
            capabilities,
            vec![Capability {
                format_code: 0,
                sds: true,
                rds: false,
                structure_length: 0x0804,
            }]
        );
    }

    #[test]
    fn test_records() {
        let buf = [
            0x00, 0x0e, 0, 0, //
            0x00, 0x40, 0x08, 0x04, //
            0x04, 0x40, 0x08, 0x04, //
            0xff, 0xc0, 0xff, 0xfc,
        ];
        let capabilities = decode(&buf).unwrap();
        assert_eq!(capabilities.len(), 3);
        assert!(capabilities[0].rds);
        assert!(!capabilities[0].sds);
        assert_eq!(capabilities[1].format_code, 0x04);
        assert!(capabilities[2].rds && capabilities[2].sds);
        assert_eq!(capabilities[2].structure_length, 0xfffc);

        let text = prettify(&capabilities);
        assert!(text.contains("\tPhysical format information (0x00) can be read, 2052 bytes\n"));
        assert!(text.contains("\tCapability list (0xFF) can be read and sent, 65532 bytes\n"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(decode(&[0, 2, 0, 0]).unwrap(), vec![]);
    }

    #[test]
    fn test_length_mismatch() {
        assert_matches!(
            decode(&[0x00, 0x08, 0, 0, 0x00, 0xc0, 0x01, 0x00]),
            Err(DecodeError::LengthMismatch {
                declared: 10,
                actual: 8
            })
        );
        assert_matches!(decode(&[0, 0]), Err(DecodeError::TooShort { .. }));
        assert_matches!(
            prettify_capabilities(&[0, 9, 0, 0]),
            Err(DecodeError::LengthMismatch { .. })
        );
    }

    #[test]
    fn test_unknown_format() {
        assert_eq!(
            format_description(0x55),
            "Unknown disc structure format 0x55"
        );
    }
}
