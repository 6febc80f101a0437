// SPDX-License-Identifier: Apache-2.0 or BSD-3-Clause

mod args;

use std::{
    fs,
    io,
    path::{Path, PathBuf},
    process::exit,
};

use clap::Parser;
use log::{debug, error};
use scsi_decoders::{
    ata::IdentifyDevice,
    mmc::disc_structure,
    scsi::{evpd, inquiry, modes, sense, PeripheralDeviceType},
    DecodeError,
};
use thiserror::Error as ThisError;

use crate::args::{DecodeArgs, Kind};

#[derive(Debug, ThisError)]
enum Error {
    #[error("Failed to read {}: {source}", .path.display())]
    ReadInput { path: PathBuf, source: io::Error },
    #[error("Invalid hex byte {0:?}")]
    InvalidHex(String),
    #[error("Unknown peripheral device type 0x{0:02X}")]
    UnknownDeviceType(u8),
    #[error("Could not decode {kind} data: {source}")]
    Decode {
        kind: &'static str,
        source: DecodeError,
    },
}

type Result<T> = std::result::Result<T, Error>;

/// Parse whitespace separated hex bytes, with or without a `0x` prefix.
fn parse_hex(text: &str) -> Result<Vec<u8>> {
    text.split_whitespace()
        .map(|token| {
            let digits = token
                .strip_prefix("0x")
                .or_else(|| token.strip_prefix("0X"))
                .unwrap_or(token);
            u8::from_str_radix(digits, 16).map_err(|_| Error::InvalidHex(token.to_owned()))
        })
        .collect()
}

fn read_input(path: &Path, hex: bool) -> Result<Vec<u8>> {
    let read_error = |source: io::Error| Error::ReadInput {
        path: path.to_owned(),
        source,
    };
    if hex {
        parse_hex(&fs::read_to_string(path).map_err(read_error)?)
    } else {
        fs::read(path).map_err(read_error)
    }
}

fn decode(args: &DecodeArgs, buf: &[u8]) -> Result<String> {
    let device_type = PeripheralDeviceType::try_from(args.device_type)
        .map_err(|_| Error::UnknownDeviceType(args.device_type))?;
    debug!("Decoding {} bytes as {}", buf.len(), args.kind.name());

    let text = match args.kind {
        Kind::Inquiry => inquiry::prettify_inquiry(buf),
        Kind::Sense => sense::prettify_sense(buf),
        Kind::Evpd => evpd::prettify_page(buf, args.vendor.map(Into::into)),
        Kind::Mode6 => modes::prettify_mode6(buf, device_type),
        Kind::Mode10 => modes::prettify_mode10(buf, device_type),
        Kind::Capabilities => disc_structure::prettify_capabilities(buf),
        Kind::AtaIdentify => IdentifyDevice::decode(buf).map(|identify| identify.prettify()),
    };
    text.map_err(|source| Error::Decode {
        kind: args.kind.name(),
        source,
    })
}

fn run() -> Result<()> {
    env_logger::init();
    let args = DecodeArgs::parse();
    let buf = read_input(&args.file, args.hex)?;
    print!("{}", decode(&args, &buf)?);

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        error!("{e}");
        exit(1);
    }
}
