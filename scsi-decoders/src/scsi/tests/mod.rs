// SPDX-License-Identifier: Apache-2.0 or BSD-3-Clause

//! Whole-response scenarios: what an emulated SCSI disk answers to INQUIRY,
//! REQUEST SENSE and MODE SENSE, decoded end to end.

#![cfg(test)]

mod bad_buffers;

use super::{
    evpd::{self, BlockDeviceCharacteristics, LogicalBlockProvisioning, SupportedPages, VpdPage},
    inquiry::{prettify_inquiry, InquiryData},
    modes::{self, ModeHeader},
    sense::{self, FixedSense, SenseKey, SenseTriple},
    PeripheralDeviceType,
};
use crate::mmc::disc_structure;

/// Standard INQUIRY data of an emulated block device.
fn emulated_inquiry() -> Vec<u8> {
    let mut buf = vec![
        0,    // accessible; direct access block device
        0,    // features
        0x7,  // version
        0x12, // response data format v2, HiSup = 1
        91,   // addl length
        0, 0, 0, // unsupported features
    ];
    buf.extend_from_slice(b"rust-vmm");
    buf.extend_from_slice(b"vhost-user-scsi ");
    buf.extend_from_slice(b"v0  ");
    // reserved/obsolete/vendor specific
    buf.extend_from_slice(&[0; 22]);
    // version descriptors: SAM-6, SPC-5, SBC-4
    buf.extend_from_slice(&[0x0, 0xc0, 0x05, 0xc0, 0x06, 0]);
    buf.extend_from_slice(&[0; 10]);
    // reserved
    buf.extend_from_slice(&[0; 22]);
    buf
}

/// A VPD page as an emulated disk builds it: byte 0, page code, 16-bit length.
fn vpd_page(page: VpdPage, body: &[u8]) -> Vec<u8> {
    let mut buf = vec![0, page.into()];
    buf.extend_from_slice(&(body.len() as u16).to_be_bytes());
    buf.extend_from_slice(body);
    buf
}

/// MODE SENSE (6) data without block descriptors followed by `pages`.
fn mode_sense6(write_protected: bool, pages: &[u8]) -> Vec<u8> {
    let mut buf = vec![
        pages.len() as u8 + 3,
        0, // medium type - 0 for SBC
        if write_protected {
            0b1001_0000 // WP, support DPOFUA
        } else {
            0b0001_0000 // support DPOFUA
        },
        0, // block desc length
    ];
    buf.extend_from_slice(pages);
    buf
}

fn caching_page() -> Vec<u8> {
    let mut page = vec![0x8, 0x12, 0b0000_0100];
    page.extend_from_slice(&[0; 0x11]);
    page
}

#[test]
fn test_emulated_inquiry() {
    let buf = emulated_inquiry();
    assert_eq!(buf.len(), 96);

    let data = InquiryData::decode(&buf).unwrap();
    assert_eq!(data.peripheral_qualifier, 0);
    assert_eq!(data.peripheral_device_type, 0);
    assert_eq!(data.ansi_version, 7);
    assert!(data.hi_sup);
    assert_eq!(data.response_data_format, 2);
    assert_eq!(data.vendor().as_deref(), Some("rust-vmm"));
    assert_eq!(data.product().as_deref(), Some("vhost-user-scsi"));
    assert_eq!(data.revision().as_deref(), Some("v0"));
    assert_eq!(&data.version_descriptors[..3], &[0x00c0, 0x05c0, 0x0600]);
    assert_eq!(data.reserved74, vec![0; 22]);
    assert_eq!(data.encode(), buf);

    let text = prettify_inquiry(&buf).unwrap();
    assert!(text.starts_with("Device vendor: rust-vmm\nDevice name: vhost-user-scsi\n"));
    assert!(text.contains("SBC-4 (no version claimed)"));
}

#[test]
fn test_seagate_inquiry() {
    let mut buf = vec![0, 0, 0x05, 0x02, 31, 0, 0, 0];
    buf.extend_from_slice(b"SEAGATE ");
    buf.extend_from_slice(b"ST1000          ");
    buf.extend_from_slice(b"1.0 ");

    let data = InquiryData::decode(&buf).unwrap();
    assert_eq!(data.peripheral_qualifier, 0);
    assert_eq!(
        PeripheralDeviceType::try_from(data.peripheral_device_type).unwrap(),
        PeripheralDeviceType::DirectAccess
    );
    assert!(!data.removable);
    assert_eq!(data.additional_length, 31);
    assert_eq!(data.vendor().as_deref(), Some("SEAGATE"));
    assert_eq!(data.product().as_deref(), Some("ST1000"));
    assert_eq!(data.revision().as_deref(), Some("1.0"));
}

#[test]
fn test_emulated_vpd_pages() {
    let supported = vpd_page(
        VpdPage::SupportedVpdPages,
        &[
            VpdPage::SupportedVpdPages.into(),
            VpdPage::BlockDeviceCharacteristics.into(),
            VpdPage::LogicalBlockProvisioning.into(),
        ],
    );
    let pages = SupportedPages::decode(&supported).unwrap();
    assert_eq!(pages.pages, vec![0x00, 0xb1, 0xb2]);

    // Every advertised page decodes through the same dispatcher.
    let mut characteristics_body = 1_u16.to_be_bytes().to_vec();
    characteristics_body.extend_from_slice(&[0; 58]);
    let characteristics = vpd_page(VpdPage::BlockDeviceCharacteristics, &characteristics_body);
    let provisioning = vpd_page(
        VpdPage::LogicalBlockProvisioning,
        &[0, 0b1110_0100, 0b0000_0010, 0],
    );

    assert_eq!(
        BlockDeviceCharacteristics::decode(&characteristics)
            .unwrap()
            .medium_rotation_rate,
        1
    );
    assert_eq!(
        LogicalBlockProvisioning::decode(&provisioning)
            .unwrap()
            .provisioning_type,
        2
    );

    for page in [&supported, &characteristics, &provisioning] {
        let text = evpd::prettify_page(page, None).unwrap();
        assert!(!text.is_empty());
    }
    assert!(evpd::prettify_page(&supported, None)
        .unwrap()
        .contains("\tPage 0xB2: Logical block provisioning\n"));
    assert!(evpd::prettify_page(&characteristics, None)
        .unwrap()
        .contains("\tMedium is not rotating\n"));
    assert!(evpd::prettify_page(&provisioning, None)
        .unwrap()
        .contains("\tDevice is thin provisioned\n"));
}

#[test]
fn test_request_sense() {
    let buf = sense::NO_ADDITIONAL_SENSE_INFORMATION.to_fixed_sense();
    let decoded = FixedSense::decode(&buf).unwrap();
    assert_eq!(decoded.sense_key, SenseKey::NoSense);
    assert_eq!(decoded.asc, Some(0));
    assert_eq!(decoded.ascq, Some(0));
    assert_eq!(decoded.encode(), buf);
    assert_eq!(
        sense::prettify_sense(&buf).unwrap(),
        "SCSI SENSE: No sense\nNO ADDITIONAL SENSE INFORMATION\n"
    );
}

#[test]
fn test_check_conditions_round_trip() {
    for triple in [
        sense::INVALID_COMMAND_OPERATION_CODE,
        sense::LOGICAL_BLOCK_ADDRESS_OUT_OF_RANGE,
        sense::INVALID_FIELD_IN_CDB,
        sense::MEDIUM_NOT_PRESENT,
        sense::UNRECOVERED_READ_ERROR,
    ] {
        let SenseTriple(key, asc, ascq) = triple;
        let decoded = FixedSense::decode(&triple.to_fixed_sense()).unwrap();
        assert_eq!(decoded.sense_key, key);
        assert_eq!(decoded.asc, Some(asc));
        assert_eq!(decoded.ascq, Some(ascq));
        assert_eq!(decoded.encode(), triple.to_fixed_sense());
    }
}

#[test]
fn test_truncated_fixed_sense() {
    // Nine bytes, but the additional sense length says none follow byte 7.
    let buf = [0x70, 0x00, 0x05, 0x00, 0, 0, 0, 0, 0x0a];
    let decoded = FixedSense::decode(&buf).unwrap();
    assert_eq!(decoded.sense_key, SenseKey::IllegalRequest);
    assert_eq!(u8::from(decoded.sense_key), 5);
    assert_eq!(decoded.additional_length, 0);
    assert!(!decoded.information_valid);
    assert_eq!(decoded.command_specific, None);
    assert_eq!(decoded.asc, None);
    assert_eq!(decoded.ascq, None);
    assert_eq!(decoded.sense_key_specific, None);
}

#[test]
fn test_emulated_mode_sense() {
    let buf = mode_sense6(false, &caching_page());
    let params = modes::decode_mode6(&buf, PeripheralDeviceType::DirectAccess).unwrap();
    assert!(params.header.dpo_fua);
    assert!(!params.header.write_protected);
    assert!(params.header.block_descriptors.is_empty());
    assert_eq!(params.pages.len(), 1);
    assert!(params.caching().unwrap().wce);
    assert_eq!(params.encode6(), buf);

    let protected = mode_sense6(true, &[]);
    let header = ModeHeader::decode6(&protected, PeripheralDeviceType::DirectAccess).unwrap();
    assert!(header.write_protected);
    assert_eq!(header.encode6(), protected);

    // The same byte read as a printer header has no write protection.
    let header = ModeHeader::decode6(&protected, PeripheralDeviceType::Printer).unwrap();
    assert!(!header.write_protected);
    assert_eq!(header.buffered_mode, 1);
}

#[test]
fn test_capability_list() {
    let buf = [0x00, 0x08, 0, 0, 0x00, 0xc0, 0x01, 0x00, 0, 0];
    let capabilities = disc_structure::decode(&buf).unwrap();
    assert_eq!(capabilities.len(), 1);
    assert_eq!(capabilities[0].format_code, 0);
    assert!(capabilities[0].sds);
    assert!(capabilities[0].rds);
    assert_eq!(capabilities[0].structure_length, 0x0100);
}
