// SPDX-License-Identifier: Apache-2.0 or BSD-3-Clause

//! Software interface identification (0x84) and management network
//! addresses (0x85) pages.

use std::fmt::Write;

use log::debug;

use super::{PageHeader, VpdPage, HEADER_LEN};
use crate::{
    field::{be16, be32, bits},
    strings::c_to_string,
    DecodeError, Result,
};

const SOFTWARE_ID_LEN: usize = 6;

/// Page 0x84.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoftwareInterfaces {
    pub header: PageHeader,
    /// 48-bit identifiers; the first 24 bits are an IEEE company ID.
    pub identifiers: Vec<u64>,
}

impl SoftwareInterfaces {
    pub fn decode(buf: &[u8]) -> Result<Self> {
        let header = PageHeader::decode(buf, VpdPage::SoftwareInterfaceIdentification.into())?;
        let body = &buf[HEADER_LEN..];
        if body.len() % SOFTWARE_ID_LEN != 0 {
            let offset = HEADER_LEN + body.len() / SOFTWARE_ID_LEN * SOFTWARE_ID_LEN;
            debug!("software interface identifier at {offset} is truncated");
            return Err(DecodeError::DescriptorOverrun { offset });
        }
        let identifiers = body
            .chunks_exact(SOFTWARE_ID_LEN)
            .map(|id| (u64::from(be16(id, 0)) << 32) | u64::from(be32(id, 2)))
            .collect();
        Ok(Self {
            header,
            identifiers,
        })
    }

    pub fn prettify(&self) -> String {
        let mut sb = String::from("Software interface identifiers:\n");
        for id in &self.identifiers {
            let _ = writeln!(sb, "\t{id:012X}");
        }
        sb
    }
}

/// One entry of page 0x85.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkDescriptor {
    pub association: u8,
    pub service_type: u8,
    pub address: String,
}

impl NetworkDescriptor {
    pub fn service_name(&self) -> String {
        match self.service_type {
            0x00 => "Unspecified".to_owned(),
            0x01 => "Storage configuration service".to_owned(),
            0x02 => "Diagnostics".to_owned(),
            0x03 => "Status".to_owned(),
            0x04 => "Logging".to_owned(),
            0x05 => "Code download".to_owned(),
            0x06 => "Copy service".to_owned(),
            0x07 => "Administrative configuration service".to_owned(),
            ty => format!("Reserved service type 0x{ty:02X}"),
        }
    }
}

/// Page 0x85.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagementNetworkAddresses {
    pub header: PageHeader,
    pub descriptors: Vec<NetworkDescriptor>,
}

impl ManagementNetworkAddresses {
    pub fn decode(buf: &[u8]) -> Result<Self> {
        let header = PageHeader::decode(buf, VpdPage::ManagementNetworkAddresses.into())?;
        let mut descriptors = Vec::new();
        let mut position = HEADER_LEN;
        while position < buf.len() {
            if position + 4 > buf.len() {
                return Err(DecodeError::DescriptorOverrun { offset: position });
            }
            let next = position + 4 + usize::from(be16(buf, position + 2));
            if next > buf.len() {
                debug!("network address descriptor at {position} runs to {next}");
                return Err(DecodeError::DescriptorOverrun { offset: position });
            }
            descriptors.push(NetworkDescriptor {
                association: bits(buf, position, 0x60, 5),
                service_type: bits(buf, position, 0x1f, 0),
                address: c_to_string(&buf[position + 4..next]),
            });
            position = next;
        }
        Ok(Self {
            header,
            descriptors,
        })
    }

    pub fn prettify(&self) -> String {
        let mut sb = String::from("Management network addresses:\n");
        for descriptor in &self.descriptors {
            let owner = match descriptor.association {
                0 => "logical unit",
                1 => "target port",
                2 => "target device",
                _ => "reserved association",
            };
            let _ = writeln!(
                sb,
                "\t{} of {owner}: {}",
                descriptor.service_name(),
                descriptor.address
            );
        }
        sb
    }
}
