// SPDX-License-Identifier: Apache-2.0 or BSD-3-Clause

//! Device identification (0x83) and SCSI ports (0x88) pages.

use std::fmt::Write;

use itertools::Itertools;
use log::debug;

use super::{PageHeader, VpdPage, HEADER_LEN};
use crate::{
    field::{be16, bits, flag},
    scsi::protocol_identifier,
    strings::c_to_string,
    DecodeError, Result,
};

/// One designation descriptor (SPC-4 7.8.6.1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentificationDescriptor {
    pub protocol_identifier: u8,
    pub code_set: u8,
    /// Protocol identifier valid.
    pub piv: bool,
    pub association: u8,
    pub identifier_type: u8,
    pub identifier: Vec<u8>,
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02X}")).join("")
}

impl IdentificationDescriptor {
    fn association_name(&self) -> &'static str {
        match self.association {
            0 => "addressed logical unit",
            1 => "target port",
            2 => "SCSI target device",
            _ => "reserved association",
        }
    }

    /// Whether the identifier bytes are text.
    const fn is_text(&self) -> bool {
        matches!(self.code_set, 2 | 3)
    }

    fn text(&self) -> String {
        c_to_string(&self.identifier)
    }

    /// Render the identifier according to its type.
    pub fn describe(&self) -> String {
        let id = &self.identifier;
        match self.identifier_type {
            0 if self.is_text() => format!("Vendor-specific: {}", self.text()),
            0 => format!("Vendor-specific: {}", hex(id)),
            1 if self.is_text() && id.len() >= 8 => format!(
                "Vendor ID: {}, vendor-specific identifier: {}",
                c_to_string(&id[..8]),
                c_to_string(&id[8..])
            ),
            1 => format!("T10 vendor identification: {}", hex(id)),
            2 => format!("EUI-64: {}", hex(id)),
            3 if !id.is_empty() => {
                let naa = match id[0] >> 4 {
                    0x2 => "IEEE Extended",
                    0x3 => "Locally Assigned",
                    0x5 => "IEEE Registered",
                    0x6 => "IEEE Registered Extended",
                    _ => "Reserved",
                };
                format!("NAA {naa}: {}", hex(id))
            }
            4 if id.len() >= 4 => format!("Relative target port: {}", be16(id, 2)),
            5 if id.len() >= 4 => format!("Target port group: {}", be16(id, 2)),
            6 if id.len() >= 4 => format!("Logical unit group: {}", be16(id, 2)),
            7 => format!("MD5 logical unit identifier: {}", hex(id)),
            8 => format!("SCSI name string: {}", self.text()),
            9 => format!(
                "Protocol specific port identifier ({}): {}",
                protocol_identifier(self.protocol_identifier),
                hex(id)
            ),
            0xa if id.len() == 18 => {
                let uuid = &id[2..];
                format!(
                    "UUID: {}-{}-{}-{}-{}",
                    hex(&uuid[..4]),
                    hex(&uuid[4..6]),
                    hex(&uuid[6..8]),
                    hex(&uuid[8..10]),
                    hex(&uuid[10..])
                )
            }
            ty if self.is_text() => format!("Identifier type 0x{ty:X}: {}", self.text()),
            ty => format!("Identifier type 0x{ty:X}: {}", hex(id)),
        }
    }
}

/// Walk the designation descriptors in `buf[start..end]`.
///
/// Each descriptor is a four byte header plus the length in its byte 3; the
/// walk must end exactly at `end`.
pub(super) fn walk_descriptors(
    buf: &[u8],
    start: usize,
    end: usize,
) -> Result<Vec<IdentificationDescriptor>> {
    let mut descriptors = Vec::new();
    let mut position = start;
    while position < end {
        if position + 4 > end {
            debug!("designation descriptor header at {position} runs past {end}");
            return Err(DecodeError::DescriptorOverrun { offset: position });
        }
        let next = position + 4 + usize::from(buf[position + 3]);
        if next > end {
            debug!("designation descriptor at {position} runs to {next}, past {end}");
            return Err(DecodeError::DescriptorOverrun { offset: position });
        }
        descriptors.push(IdentificationDescriptor {
            protocol_identifier: bits(buf, position, 0xf0, 4),
            code_set: bits(buf, position, 0x0f, 0),
            piv: flag(buf, position + 1, 0x80),
            association: bits(buf, position + 1, 0x30, 4),
            identifier_type: bits(buf, position + 1, 0x0f, 0),
            identifier: buf[position + 4..next].to_vec(),
        });
        position = next;
    }
    Ok(descriptors)
}

fn prettify_descriptor(sb: &mut String, descriptor: &IdentificationDescriptor, indent: &str) {
    let _ = writeln!(
        sb,
        "{indent}{} ({})",
        descriptor.describe(),
        descriptor.association_name()
    );
    if descriptor.piv && matches!(descriptor.association, 1 | 2) {
        let _ = writeln!(
            sb,
            "{indent}\tProtocol: {}",
            protocol_identifier(descriptor.protocol_identifier)
        );
    }
}

/// Page 0x83.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceIdentification {
    pub header: PageHeader,
    pub descriptors: Vec<IdentificationDescriptor>,
}

impl DeviceIdentification {
    pub fn decode(buf: &[u8]) -> Result<Self> {
        let header = PageHeader::decode(buf, VpdPage::DeviceIdentification.into())?;
        Ok(Self {
            header,
            descriptors: walk_descriptors(buf, HEADER_LEN, buf.len())?,
        })
    }

    pub fn prettify(&self) -> String {
        let mut sb = String::from("Device identification:\n");
        self.header.prettify_into(&mut sb);
        if self.descriptors.is_empty() {
            sb.push_str("\tThere are no identifiers\n");
        }
        for descriptor in &self.descriptors {
            prettify_descriptor(&mut sb, descriptor, "\t");
        }
        sb
    }
}

/// One port of page 0x88.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScsiPortDescriptor {
    pub relative_port: u16,
    pub initiator_transport_id: Vec<u8>,
    pub target_descriptors: Vec<IdentificationDescriptor>,
}

/// Page 0x88.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScsiPorts {
    pub header: PageHeader,
    pub ports: Vec<ScsiPortDescriptor>,
}

impl ScsiPorts {
    pub fn decode(buf: &[u8]) -> Result<Self> {
        let header = PageHeader::decode(buf, VpdPage::ScsiPorts.into())?;
        let end = buf.len();
        let mut ports = Vec::new();
        let mut position = HEADER_LEN;
        while position < end {
            // relative port at 2, transport ID length at 6
            if position + 8 > end {
                return Err(DecodeError::DescriptorOverrun { offset: position });
            }
            let relative_port = be16(buf, position + 2);
            let transport_end = position + 8 + usize::from(be16(buf, position + 6));
            // two reserved bytes, then the target descriptor list length
            if transport_end + 4 > end {
                debug!("SCSI port descriptor at {position} overruns the page");
                return Err(DecodeError::DescriptorOverrun { offset: position });
            }
            let targets_start = transport_end + 4;
            let next = targets_start + usize::from(be16(buf, transport_end + 2));
            if next > end {
                debug!("SCSI port descriptor at {position} overruns the page");
                return Err(DecodeError::DescriptorOverrun { offset: position });
            }
            ports.push(ScsiPortDescriptor {
                relative_port,
                initiator_transport_id: buf[position + 8..transport_end].to_vec(),
                target_descriptors: walk_descriptors(buf, targets_start, next)?,
            });
            position = next;
        }
        Ok(Self { header, ports })
    }

    pub fn prettify(&self) -> String {
        let mut sb = String::from("SCSI ports:\n");
        self.header.prettify_into(&mut sb);
        for port in &self.ports {
            let _ = writeln!(sb, "\tRelative port {}:", port.relative_port);
            if !port.initiator_transport_id.is_empty() {
                let _ = writeln!(
                    sb,
                    "\t\tInitiator port transport ID: {}",
                    hex(&port.initiator_transport_id)
                );
            }
            for descriptor in &port.target_descriptors {
                prettify_descriptor(&mut sb, descriptor, "\t\t");
            }
        }
        sb
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn naa_descriptor() -> Vec<u8> {
        vec![
            0x01, 0x03, 0x00, 0x08, // binary, LU, NAA
            0x50, 0x00, 0xc5, 0x00, 0x12, 0x34, 0x56, 0x78,
        ]
    }

    fn t10_descriptor() -> Vec<u8> {
        let mut desc = vec![0x02, 0x01, 0x00, 0x0c];
        desc.extend_from_slice(b"ATA     WD10");
        desc
    }

    fn page(code: u8, body: &[u8]) -> Vec<u8> {
        let mut buf = vec![0, code];
        buf.extend_from_slice(&(body.len() as u16).to_be_bytes());
        buf.extend_from_slice(body);
        buf
    }

    #[test]
    fn test_device_identification() {
        let mut body = naa_descriptor();
        body.extend(t10_descriptor());
        let page = DeviceIdentification::decode(&page(0x83, &body)).unwrap();
        assert_eq!(page.descriptors.len(), 2);

        let naa = &page.descriptors[0];
        assert_eq!(naa.code_set, 1);
        assert_eq!(naa.association, 0);
        assert_eq!(naa.identifier_type, 3);
        assert_eq!(naa.describe(), "NAA IEEE Registered: 5000C50012345678");

        let t10 = &page.descriptors[1];
        assert_eq!(
            t10.describe(),
            "Vendor ID: ATA, vendor-specific identifier: WD10"
        );

        let text = page.prettify();
        assert!(text.contains("\tNAA IEEE Registered: 5000C50012345678 (addressed logical unit)\n"));
    }

    #[test]
    fn test_descriptor_overrun() {
        let mut body = naa_descriptor();
        body[3] = 0x09;
        assert_matches!(
            DeviceIdentification::decode(&page(0x83, &body)),
            Err(DecodeError::DescriptorOverrun { offset: 4 })
        );

        let mut body = naa_descriptor();
        body.extend_from_slice(&[0x01, 0x03]);
        assert_matches!(
            DeviceIdentification::decode(&page(0x83, &body)),
            Err(DecodeError::DescriptorOverrun { offset: 16 })
        );
    }

    #[test]
    fn test_empty_identification() {
        let page = DeviceIdentification::decode(&[0, 0x83, 0, 0]).unwrap();
        assert!(page.descriptors.is_empty());
        assert!(page.prettify().contains("There are no identifiers"));
    }

    #[test]
    fn test_relative_port_and_uuid() {
        let port = IdentificationDescriptor {
            protocol_identifier: 6,
            code_set: 1,
            piv: true,
            association: 1,
            identifier_type: 4,
            identifier: vec![0, 0, 0, 2],
        };
        assert_eq!(port.describe(), "Relative target port: 2");
        let mut sb = String::new();
        prettify_descriptor(&mut sb, &port, "");
        assert_eq!(
            sb,
            "Relative target port: 2 (target port)\n\tProtocol: Serial Attached SCSI\n"
        );

        let mut identifier = vec![0x10, 0x00];
        identifier.extend(0..16u8);
        let uuid = IdentificationDescriptor {
            identifier_type: 0xa,
            identifier,
            ..port
        };
        assert_eq!(
            uuid.describe(),
            "UUID: 00010203-0405-0607-0809-0A0B0C0D0E0F"
        );
    }

    #[test]
    fn test_scsi_ports() {
        let target = [0x61, 0x94, 0x00, 0x04, 0x00, 0x00, 0x00, 0x01];
        let mut body = vec![0, 0, 0, 1, 0, 0, 0, 0];
        body.extend_from_slice(&[0, 0, 0, target.len() as u8]);
        body.extend_from_slice(&target);
        body.extend_from_slice(&[0, 0, 0, 2, 0, 0, 0, 2, 0xab, 0xcd, 0, 0, 0, 0]);

        let page = ScsiPorts::decode(&page(0x88, &body)).unwrap();
        assert_eq!(page.ports.len(), 2);
        assert_eq!(page.ports[0].relative_port, 1);
        assert!(page.ports[0].initiator_transport_id.is_empty());
        assert_eq!(page.ports[0].target_descriptors.len(), 1);
        assert_eq!(
            page.ports[0].target_descriptors[0].describe(),
            "Relative target port: 1"
        );
        assert_eq!(page.ports[1].relative_port, 2);
        assert_eq!(page.ports[1].initiator_transport_id, vec![0xab, 0xcd]);
        assert!(page.ports[1].target_descriptors.is_empty());

        let text = page.prettify();
        assert!(text.contains("\tRelative port 2:\n\t\tInitiator port transport ID: ABCD\n"));
    }

    #[test]
    fn test_scsi_ports_overrun() {
        let body = [0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 8, 0x61, 0x94, 0, 4];
        assert_matches!(
            ScsiPorts::decode(&page(0x88, &body)),
            Err(DecodeError::DescriptorOverrun { offset: 4 })
        );
    }
}
