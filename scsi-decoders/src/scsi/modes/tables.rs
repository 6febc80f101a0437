// SPDX-License-Identifier: Apache-2.0 or BSD-3-Clause

//! Medium type and density code names, which depend on the device class.

use std::borrow::Cow;

use crate::scsi::PeripheralDeviceType;

const fn direct_access_medium(code: u8) -> Option<&'static str> {
    Some(match code {
        0x00 => "Default medium type",
        0x01 => "Flexible disk, single-sided; unspecified medium",
        0x02 => "Flexible disk, double-sided; unspecified medium",
        0x05 => "200 mm flexible disk, single-sided, single density (ANSI X3.73-1980)",
        0x06 => "200 mm flexible disk, double-sided, single density (ANSI X3B8-140)",
        0x09 => "200 mm flexible disk, single-sided, double density (ANSI X3B8/78-139)",
        0x0a => "200 mm flexible disk, double-sided, double density (ANSI X3.121-1984)",
        0x0d => "130 mm flexible disk, single-sided, single density (ANSI X3.82-1980)",
        0x12 => "130 mm flexible disk, double-sided, single density (ISO 7065)",
        0x16 => "130 mm flexible disk, double-sided, double density (ANSI X3.125-1985)",
        0x1a => "130 mm flexible disk, double-sided, double density, 96 tpi (ANSI X3.126-1986)",
        0x1e => "90 mm flexible disk, double-sided, double density (ANSI X3.137)",
        _ => return None,
    })
}

const fn multimedia_medium(code: u8) -> Option<&'static str> {
    Some(match code {
        0x00 => "Default medium type",
        0x01 => "120 mm CD-ROM, data only",
        0x02 => "120 mm CD-DA, audio only",
        0x03 => "120 mm CD-ROM, data and audio combined",
        0x04 => "120 mm Photo CD",
        0x05 => "80 mm CD-ROM, data only",
        0x06 => "80 mm CD-DA, audio only",
        0x07 => "80 mm CD-ROM, data and audio combined",
        0x08 => "80 mm Photo CD",
        0x10 => "120 mm CD-R, data only",
        0x11 => "120 mm CD-R, audio only",
        0x12 => "120 mm CD-R, data and audio combined",
        0x13 => "120 mm CD-R Photo CD",
        0x14 => "80 mm CD-R, data only",
        0x15 => "80 mm CD-R, audio only",
        0x16 => "80 mm CD-R, data and audio combined",
        0x17 => "80 mm CD-R Photo CD",
        0x20 => "120 mm CD-RW, data only",
        0x21 => "120 mm CD-RW, audio only",
        0x22 => "120 mm CD-RW, data and audio combined",
        0x23 => "120 mm CD-RW Photo CD",
        0x24 => "80 mm CD-RW, data only",
        0x25 => "80 mm CD-RW, audio only",
        0x26 => "80 mm CD-RW, data and audio combined",
        0x27 => "80 mm CD-RW Photo CD",
        0x70 => "Door closed, no disc present",
        0x71 => "Door open or no caddy inserted",
        0x72 => "Door closed, medium format error",
        _ => return None,
    })
}

const fn optical_medium(code: u8) -> Option<&'static str> {
    Some(match code {
        0x00 => "Default medium type",
        0x01 => "Optical read-only medium",
        0x02 => "Optical write-once medium",
        0x03 => "Optical reversible or erasable medium",
        0x04 => "Combination of read-only and write-once optical media",
        0x05 => "Combination of read-only and reversible or erasable optical media",
        0x06 => "Combination of write-once and reversible or erasable optical media",
        _ => return None,
    })
}

/// Name of the medium type code in a mode parameter header.
pub fn medium_type_description(device_type: PeripheralDeviceType, code: u8) -> Cow<'static, str> {
    let known = match device_type {
        PeripheralDeviceType::DirectAccess | PeripheralDeviceType::SimplifiedDirectAccess => {
            direct_access_medium(code)
        }
        PeripheralDeviceType::MultiMedia => multimedia_medium(code),
        PeripheralDeviceType::Optical | PeripheralDeviceType::WriteOnce => optical_medium(code),
        _ if code == 0 => Some("Default medium type"),
        _ => None,
    };
    match known {
        Some(name) => Cow::Borrowed(name),
        None if code >= 0x80 => Cow::Owned(format!("Vendor-specific medium type 0x{code:02X}")),
        None => Cow::Owned(format!("Unknown medium type 0x{code:02X}")),
    }
}

const fn sequential_density(code: u8) -> Option<&'static str> {
    Some(match code {
        0x01 => "12.7 mm 9-track tape, 800 bpi NRZI (ANSI X3.22-1983)",
        0x02 => "12.7 mm 9-track tape, 1600 bpi PE (ANSI X3.39-1986)",
        0x03 => "12.7 mm 9-track tape, 6250 bpi GCR (ANSI X3.54-1986)",
        0x04 => "6.3 mm 4- or 9-track cartridge, 8000 bpi GCR (QIC-11)",
        0x05 => "6.3 mm 4- or 9-track cartridge, 8000 bpi GCR (QIC-24)",
        0x06 => "12.7 mm 9-track tape, 3200 bpi PE (ANSI X3.157-1987)",
        0x07 => "6.3 mm 4-track cartridge, 6400 bpi IMFM (ANSI X3.116-1986)",
        0x08 => "3.81 mm 4-track cassette, 8000 bpi GCR (ANSI X3.158-1987)",
        0x09 => "12.7 mm 18-track cartridge, 37871 bpi GCR (ANSI X3.180)",
        0x0a => "12.7 mm 22-track cartridge, 6667 bpi MFM (ANSI X3B5/86-199)",
        0x0b => "6.3 mm 4-track cartridge, 1600 bpi PE (ANSI X3.56-1986)",
        0x0c => "12.7 mm 24-track cartridge, 12690 bpi GCR (HI-TC1)",
        0x0d => "12.7 mm 24-track cartridge, 25380 bpi GCR (HI-TC2)",
        0x0f => "6.3 mm 15-track cartridge, 10000 bpi GCR (QIC-120)",
        0x10 => "6.3 mm 18-track cartridge, 10000 bpi GCR (QIC-150)",
        0x11 => "6.3 mm 26-track cartridge, 16000 bpi GCR (QIC-320)",
        0x12 => "6.3 mm 30-track cartridge, 51667 bpi RLL (QIC-1350)",
        0x13 => "3.81 mm DDS cassette, 61000 bpi (DAT-DDS)",
        0x14 => "8 mm helical scan cartridge, 43245 bpi RLL (Exabyte 8200)",
        0x15 => "8 mm helical scan cartridge, 45434 bpi RLL (Exabyte 8500)",
        0x16 => "12.7 mm 48-track cartridge, 10000 bpi MFM (ANSI X3.193-1990)",
        0x17 => "12.7 mm 48-track cartridge, 42500 bpi MFM (DLT)",
        0x18 => "12.7 mm 112-track cartridge, 56480 bpi (DLT)",
        0x19 => "12.7 mm 128-track cartridge, 62500 bpi (DLT 10 GB)",
        0x1a => "12.7 mm 128-track cartridge, 81633 bpi (DLT 20 GB)",
        0x1b => "12.7 mm 208-track cartridge, 85937 bpi (DLT 35 GB)",
        0x1c => "6.3 mm 34-track cartridge, 36000 bpi MFM (QIC-385M)",
        0x1d => "6.3 mm 32-track cartridge, 48000 bpi (QIC-410M)",
        0x1e => "6.3 mm 30-track cartridge, 51000 bpi (QIC-1000C)",
        0x1f => "6.3 mm 30-track cartridge, 54000 bpi (QIC-2100C)",
        0x20 => "6.3 mm 144-track cartridge, 50000 bpi (QIC-6GB)",
        0x21 => "6.3 mm 144-track cartridge, 87000 bpi (QIC-20GB)",
        0x22 => "6.3 mm 42-track cartridge, 55000 bpi (QIC-2GB)",
        0x24 => "3.81 mm DDS-2 cassette",
        0x25 => "3.81 mm DDS-3 cassette",
        0x26 => "3.81 mm DDS-4 cassette",
        0x40 => "LTO Ultrium 1",
        0x41 => "DLTtape IV (40 GB)",
        0x42 => "LTO Ultrium 2",
        0x44 => "LTO Ultrium 3",
        0x46 => "LTO Ultrium 4",
        0x48 => "Super DLTtape I (110 GB)",
        0x49 => "Super DLTtape I (160 GB)",
        0x58 => "LTO Ultrium 5",
        0x5a => "LTO Ultrium 6",
        0x5c => "LTO Ultrium 7",
        0x5d => "LTO Ultrium 7 M8",
        0x5e => "LTO Ultrium 8",
        0x60 => "LTO Ultrium 9",
        _ => return None,
    })
}

const fn multimedia_density(code: u8) -> Option<&'static str> {
    Some(match code {
        0x01 => "User data only, 2048 bytes per physical sector",
        0x02 => "User data plus auxiliary data, 2336 bytes per sector",
        0x03 => "4-byte tag field, user data plus auxiliary data, 2340 bytes per sector",
        0x04 => "Audio information only, 1/75th of a second per logical block",
        _ => return None,
    })
}

const fn optical_density(code: u8) -> Option<&'static str> {
    Some(match code {
        0x01 => "86 mm read/write single-sided optical disc, 12500 tracks (ISO/IEC 10090)",
        0x02 => "89 mm read/write double-sided optical disc, 12500 tracks (ANSI X3.212)",
        0x03 => "130 mm read/write double-sided optical disc, 18750 tracks (ISO/IEC 10089A)",
        0x04 => "130 mm read/write double-sided optical disc, 18750 tracks (ISO/IEC 10089B)",
        0x05 => "130 mm write-once double-sided optical disc, 30000 tracks (ANSI X3.211)",
        0x06 => "130 mm write-once double-sided optical disc, 20000 tracks (ANSI X3.191)",
        0x07 => "130 mm write-once double-sided optical disc, 18750 tracks (ISO/IEC 11560)",
        _ => return None,
    })
}

/// Name of the density code in a block descriptor.
pub fn density_description(device_type: PeripheralDeviceType, code: u8) -> Cow<'static, str> {
    if code == 0 {
        return Cow::Borrowed("Default density");
    }
    let known = match device_type {
        PeripheralDeviceType::SequentialAccess => sequential_density(code),
        PeripheralDeviceType::MultiMedia => multimedia_density(code),
        PeripheralDeviceType::Optical | PeripheralDeviceType::WriteOnce => optical_density(code),
        _ => None,
    };
    match known {
        Some(name) => Cow::Borrowed(name),
        None if code >= 0x80 => Cow::Owned(format!("Vendor-specific density code 0x{code:02X}")),
        None => Cow::Owned(format!("Unknown density code 0x{code:02X}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medium_types() {
        assert_eq!(
            medium_type_description(PeripheralDeviceType::MultiMedia, 0x71),
            "Door open or no caddy inserted"
        );
        assert_eq!(
            medium_type_description(PeripheralDeviceType::Optical, 0x02),
            "Optical write-once medium"
        );
        assert_eq!(
            medium_type_description(PeripheralDeviceType::SequentialAccess, 0x85),
            "Vendor-specific medium type 0x85"
        );
        assert_eq!(
            medium_type_description(PeripheralDeviceType::Printer, 0x03),
            "Unknown medium type 0x03"
        );
    }

    #[test]
    fn test_densities() {
        assert_eq!(
            density_description(PeripheralDeviceType::SequentialAccess, 0x46),
            "LTO Ultrium 4"
        );
        assert_eq!(
            density_description(PeripheralDeviceType::MultiMedia, 0x01),
            "User data only, 2048 bytes per physical sector"
        );
        assert_eq!(
            density_description(PeripheralDeviceType::DirectAccess, 0),
            "Default density"
        );
        assert_eq!(
            density_description(PeripheralDeviceType::DirectAccess, 0x21),
            "Unknown density code 0x21"
        );
    }
}
