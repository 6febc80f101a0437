// SPDX-License-Identifier: Apache-2.0 or BSD-3-Clause

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use scsi_decoders::scsi::evpd::Vendor;

/// Which response the input file holds.
#[derive(ValueEnum, Clone, Copy, Debug, Eq, PartialEq)]
pub enum Kind {
    /// Standard INQUIRY data.
    Inquiry,
    /// Sense data in any format.
    Sense,
    /// A vital product data page; the page code is read from byte 1.
    Evpd,
    /// MODE SENSE (6) parameter data.
    Mode6,
    /// MODE SENSE (10) parameter data.
    Mode10,
    /// READ DISC STRUCTURE capability list.
    Capabilities,
    /// 512 bytes of ATA IDENTIFY DEVICE data.
    AtaIdentify,
}

impl Kind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Inquiry => "INQUIRY",
            Self::Sense => "sense",
            Self::Evpd => "VPD page",
            Self::Mode6 => "MODE SENSE (6)",
            Self::Mode10 => "MODE SENSE (10)",
            Self::Capabilities => "capability list",
            Self::AtaIdentify => "ATA IDENTIFY",
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, Eq, PartialEq)]
pub enum VendorArg {
    Quantum,
    Seagate,
}

impl From<VendorArg> for Vendor {
    fn from(vendor: VendorArg) -> Self {
        match vendor {
            VendorArg::Quantum => Self::Quantum,
            VendorArg::Seagate => Self::Seagate,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
pub struct DecodeArgs {
    /// Read the file as whitespace separated hex bytes instead of raw binary.
    #[arg(long)]
    pub hex: bool,
    /// Peripheral device type the mode data came from.
    ///
    /// The device-specific byte of a mode parameter header and the medium and
    /// density codes mean different things for disks, tapes, printers and
    /// optical drives.
    #[arg(long = "device-type", default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=0x1f))]
    pub device_type: u8,
    /// Vendor whose layout to assume for VPD page 0xC0.
    #[arg(long, value_enum)]
    pub vendor: Option<VendorArg>,
    /// What kind of response the file holds.
    #[arg(value_enum)]
    pub kind: Kind,
    /// File with the response bytes.
    pub file: PathBuf,
}
