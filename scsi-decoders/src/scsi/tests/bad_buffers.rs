// SPDX-License-Identifier: Apache-2.0 or BSD-3-Clause

//! Every decoder rejects malformed buffers instead of filling in part of a
//! record.

use assert_matches::assert_matches;

use super::{caching_page, emulated_inquiry, mode_sense6, vpd_page};
use crate::{
    ata::IdentifyDevice,
    mmc::disc_structure,
    scsi::{
        evpd::{
            self, AsciiInformation, AtaInformation, BlockDeviceCharacteristics, BlockLimits,
            DeviceIdentification, ExtendedInquiry, LogicalBlockProvisioning,
            ManagementNetworkAddresses, ModePagePolicy, OperatingDefinitions,
            QuantumFirmwareBuild, ScsiPorts, SeagateFirmwareNumbers, SoftwareInterfaces,
            SupportedPages, UnitSerialNumber, VpdPage,
        },
        inquiry::InquiryData,
        modes,
        sense::{self, DescriptorSense, FixedSense},
        PeripheralDeviceType,
    },
    DecodeError, Result,
};

#[test]
fn test_truncated_inquiry() {
    let buf = emulated_inquiry();
    for len in [0, 1, 4, 6, 35] {
        assert_matches!(
            InquiryData::decode(&buf[..len]),
            Err(DecodeError::TooShort { minimum: 36, .. })
        );
    }
    // Cut at a field boundary, but the additional length still says 96.
    for len in [36, 56, 58, 74, 95] {
        assert_matches!(
            InquiryData::decode(&buf[..len]),
            Err(DecodeError::LengthMismatch {
                declared: 96,
                ..
            })
        );
    }
}

#[test]
fn test_vpd_page_code_and_length() {
    let page = vpd_page(VpdPage::SupportedVpdPages, &[0x00, 0x80, 0x83]);

    let mut wrong_code = page.clone();
    wrong_code[1] = 0x80;
    assert_matches!(
        SupportedPages::decode(&wrong_code),
        Err(DecodeError::UnexpectedPageCode {
            expected: 0x00,
            found: 0x80
        })
    );

    let mut padded = page.clone();
    padded.push(0);
    assert_matches!(
        SupportedPages::decode(&padded),
        Err(DecodeError::LengthMismatch {
            declared: 7,
            actual: 8
        })
    );
    assert_matches!(
        evpd::prettify_page(&page[..6], None),
        Err(DecodeError::LengthMismatch { .. })
    );
}

#[test]
fn test_every_page_decoder_checks_the_page_code() {
    let decoders: [(u8, fn(&[u8]) -> Result<()>); 15] = [
        (0x00, |b| SupportedPages::decode(b).map(drop)),
        (0x80, |b| UnitSerialNumber::decode(b).map(drop)),
        (0x81, |b| OperatingDefinitions::decode(b).map(drop)),
        (0x82, |b| AsciiInformation::decode_operating_definition(b).map(drop)),
        (0x83, |b| DeviceIdentification::decode(b).map(drop)),
        (0x84, |b| SoftwareInterfaces::decode(b).map(drop)),
        (0x85, |b| ManagementNetworkAddresses::decode(b).map(drop)),
        (0x86, |b| ExtendedInquiry::decode(b).map(drop)),
        (0x87, |b| ModePagePolicy::decode(b).map(drop)),
        (0x88, |b| ScsiPorts::decode(b).map(drop)),
        (0x89, |b| AtaInformation::decode(b).map(drop)),
        (0xb0, |b| BlockLimits::decode(b).map(drop)),
        (0xb1, |b| BlockDeviceCharacteristics::decode(b).map(drop)),
        (0xb2, |b| LogicalBlockProvisioning::decode(b).map(drop)),
        (0xc0, |b| SeagateFirmwareNumbers::decode(b).map(drop)),
    ];
    for (expected, decode) in decoders {
        // Right length, page code of the neighbouring page.
        let found = expected ^ 0x01;
        let mut buf = vec![0; 64];
        buf[1] = found;
        buf[2..4].copy_from_slice(&60_u16.to_be_bytes());
        assert_matches!(
            decode(&buf),
            Err(DecodeError::UnexpectedPageCode { expected: e, found: f })
                if e == expected && f == found,
            "page 0x{expected:02X}"
        );
    }

    let mut quantum = vec![0; QuantumFirmwareBuild::LEN];
    quantum[1] = 0xc1;
    quantum[2..4].copy_from_slice(&((QuantumFirmwareBuild::LEN - 4) as u16).to_be_bytes());
    assert_matches!(
        QuantumFirmwareBuild::decode(&quantum),
        Err(DecodeError::UnexpectedPageCode {
            expected: 0xc0,
            found: 0xc1
        })
    );
}

#[test]
fn test_descriptor_lists_stay_inside_the_page() {
    // One descriptor claiming 8 identifier bytes with only 4 present.
    let identification = vpd_page(
        VpdPage::DeviceIdentification,
        &[0x01, 0x03, 0x00, 0x08, 0x60, 0x01, 0x02, 0x03],
    );
    assert_matches!(
        DeviceIdentification::decode(&identification),
        Err(DecodeError::DescriptorOverrun { offset: 4 })
    );

    let interfaces = vpd_page(
        VpdPage::SoftwareInterfaceIdentification,
        &[0, 1, 2, 3, 4, 5, 6, 7],
    );
    assert_matches!(
        SoftwareInterfaces::decode(&interfaces),
        Err(DecodeError::DescriptorOverrun { offset: 10 })
    );
}

#[test]
fn test_bad_sense() {
    assert_matches!(
        sense::prettify_sense(&[0x70, 0, 0]),
        Err(DecodeError::TooShort { minimum: 4, .. })
    );
    assert_matches!(
        sense::prettify_sense(&[0x74, 0, 0, 0]),
        Err(DecodeError::UnexpectedFormat(0x74))
    );
    assert_matches!(
        FixedSense::decode(&[0x72, 0, 0, 0, 0, 0, 0, 0]),
        Err(DecodeError::UnexpectedFormat(0x72))
    );
    assert_matches!(
        DescriptorSense::decode(&sense::INVALID_FIELD_IN_CDB.to_fixed_sense()),
        Err(DecodeError::UnexpectedFormat(0x70))
    );
}

#[test]
fn test_bad_mode_data() {
    let buf = mode_sense6(false, &caching_page());
    // Page cut in half.
    assert_matches!(
        modes::decode_mode6(&buf[..14], PeripheralDeviceType::DirectAccess),
        Err(DecodeError::DescriptorOverrun { offset: 4 })
    );
    // Block descriptor length pointing past the end.
    let mut descriptors = buf.clone();
    descriptors[3] = 32;
    assert_matches!(
        modes::decode_mode6(&descriptors, PeripheralDeviceType::DirectAccess),
        Err(DecodeError::TooShort {
            minimum: 36,
            actual: 24
        })
    );
}

#[test]
fn test_bad_capability_list() {
    assert_matches!(
        disc_structure::decode(&[0x00, 0x08, 0, 0, 0x00, 0xc0, 0x01, 0x00]),
        Err(DecodeError::LengthMismatch {
            declared: 10,
            actual: 8
        })
    );
}

#[test]
fn test_bad_identify() {
    assert_matches!(
        IdentifyDevice::decode(&[0; 511]),
        Err(DecodeError::LengthMismatch {
            declared: 512,
            actual: 511
        })
    );
}
