// SPDX-License-Identifier: Apache-2.0 or BSD-3-Clause

//! Names for the version descriptor codes of standard INQUIRY data.

use std::borrow::Cow;

/// Name of the standard a version descriptor claims compliance with.
pub fn describe(code: u16) -> Cow<'static, str> {
    lookup(code).map_or_else(
        || Cow::Owned(format!("unknown standard code 0x{code:04X}")),
        Cow::Borrowed,
    )
}

#[allow(clippy::too_many_lines)]
const fn lookup(code: u16) -> Option<&'static str> {
    Some(match code {
        0x0000 => "Version Descriptor Not Supported or No Standard Identified",
        0x0020 => "SAM (no version claimed)",
        0x003b => "SAM T10/0994-D revision 18",
        0x003c => "SAM ANSI INCITS 270-1996",
        0x0040 => "SAM-2 (no version claimed)",
        0x0054 => "SAM-2 T10/1157-D revision 23",
        0x0055 => "SAM-2 T10/1157-D revision 24",
        0x005c => "SAM-2 ANSI INCITS 366-2003",
        0x005e => "SAM-2 ISO/IEC 14776-412",
        0x0060 => "SAM-3 (no version claimed)",
        0x0062 => "SAM-3 T10/1561-D revision 7",
        0x0075 => "SAM-3 T10/1561-D revision 13",
        0x0076 => "SAM-3 T10/1561-D revision 14",
        0x0077 => "SAM-3 ANSI INCITS 402-2005",
        0x0080 => "SAM-4 (no version claimed)",
        0x0087 => "SAM-4 T10/1683-D revision 13",
        0x008b => "SAM-4 T10/1683-D revision 14",
        0x0090 => "SAM-4 ANSI INCITS 447-2008",
        0x0092 => "SAM-4 ISO/IEC 14776-414",
        0x00a0 => "SAM-5 (no version claimed)",
        0x00a2 => "SAM-5 T10/2104-D revision 4",
        0x00a4 => "SAM-5 T10/2104-D revision 20",
        0x00a6 => "SAM-5 T10/2104-D revision 21",
        0x00c0 => "SAM-6 (no version claimed)",
        0x0120 => "SPC (no version claimed)",
        0x013b => "SPC T10/0995-D revision 11a",
        0x013c => "SPC ANSI INCITS 301-1997",
        0x0140 => "MMC (no version claimed)",
        0x015b => "MMC T10/1048-D revision 10a",
        0x015c => "MMC ANSI INCITS 304-1997",
        0x0160 => "SCC (no version claimed)",
        0x017b => "SCC T10/1047-D revision 06c",
        0x017c => "SCC ANSI INCITS 276-1997",
        0x0180 => "SBC (no version claimed)",
        0x019b => "SBC T10/0996-D revision 08c",
        0x019c => "SBC ANSI INCITS 306-1998",
        0x01a0 => "SMC (no version claimed)",
        0x01bb => "SMC T10/0999-D revision 10a",
        0x01bc => "SMC ANSI INCITS 314-1998",
        0x01be => "SMC ISO/IEC 14776-351",
        0x01c0 => "SES (no version claimed)",
        0x01db => "SES T10/1212-D revision 08b",
        0x01dd => "SES T10/1212 revision 08b w/ Amendment ANSI INCITS.305/AM1:2000",
        0x01de => "SES ANSI INCITS 305-1998",
        0x01df => "SES ANSI INCITS 305-1998 w/ Amendment ANSI INCITS.305/AM1:2000",
        0x01e0 => "SCC-2 (no version claimed)",
        0x01fb => "SCC-2 T10/1125-D revision 04",
        0x01fc => "SCC-2 ANSI INCITS 318-1998",
        0x0200 => "SSC (no version claimed)",
        0x0201 => "SSC T10/0997-D revision 17",
        0x0207 => "SSC T10/0997-D revision 22",
        0x021c => "SSC ANSI INCITS 335-2000",
        0x0220 => "RBC (no version claimed)",
        0x0238 => "RBC T10/1240-D revision 10a",
        0x023c => "RBC ANSI INCITS 330-2000",
        0x023d => "RBC ANSI INCITS 330-2000 with Amendment 1",
        0x0240 => "MMC-2 (no version claimed)",
        0x0255 => "MMC-2 T10/1228-D revision 11",
        0x025b => "MMC-2 T10/1228-D revision 11a",
        0x025c => "MMC-2 ANSI INCITS 333-2000",
        0x0260 => "SPC-2 (no version claimed)",
        0x0267 => "SPC-2 T10/1236-D revision 12",
        0x0269 => "SPC-2 T10/1236-D revision 18",
        0x0275 => "SPC-2 T10/1236-D revision 19",
        0x0276 => "SPC-2 T10/1236-D revision 20",
        0x0277 => "SPC-2 ANSI INCITS 351-2001",
        0x0278 => "SPC-2 ISO/IEC 14776-452",
        0x0280 => "OCRW (no version claimed)",
        0x029e => "OCRW ISO/IEC 14776-381",
        0x02a0 => "MMC-3 (no version claimed)",
        0x02b5 => "MMC-3 T10/1363-D revision 9",
        0x02b6 => "MMC-3 T10/1363-D revision 10g",
        0x02b8 => "MMC-3 ANSI INCITS 360-2002",
        0x02e0 => "SMC-2 (no version claimed)",
        0x02f5 => "SMC-2 T10/1383-D revision 5",
        0x02fc => "SMC-2 T10/1383-D revision 6",
        0x02fd => "SMC-2 T10/1383-D revision 7",
        0x02fe => "SMC-2 ANSI INCITS 382-2004",
        0x0300 => "SPC-3 (no version claimed)",
        0x0301 => "SPC-3 T10/1416-D revision 7",
        0x0307 => "SPC-3 T10/1416-D revision 21",
        0x030f => "SPC-3 T10/1416-D revision 22",
        0x0312 => "SPC-3 T10/1416-D revision 23",
        0x0314 => "SPC-3 ANSI INCITS 408-2005",
        0x0316 => "SPC-3 ISO/IEC 14776-453",
        0x0320 => "SBC-2 (no version claimed)",
        0x0322 => "SBC-2 T10/1417-D revision 5a",
        0x0324 => "SBC-2 T10/1417-D revision 15",
        0x033b => "SBC-2 T10/1417-D revision 16",
        0x033d => "SBC-2 ANSI INCITS 405-2005",
        0x033e => "SBC-2 ISO/IEC 14776-322",
        0x0340 => "OSD (no version claimed)",
        0x0341 => "OSD T10/1355-D revision 0",
        0x0342 => "OSD T10/1355-D revision 7a",
        0x0343 => "OSD T10/1355-D revision 8",
        0x0344 => "OSD T10/1355-D revision 9",
        0x0355 => "OSD T10/1355-D revision 10",
        0x0356 => "OSD ANSI INCITS 400-2004",
        0x0360 => "SSC-2 (no version claimed)",
        0x0374 => "SSC-2 T10/1434-D revision 7",
        0x0375 => "SSC-2 T10/1434-D revision 9",
        0x037d => "SSC-2 ANSI INCITS 380-2003",
        0x0380 => "BCC (no version claimed)",
        0x03a0 => "MMC-4 (no version claimed)",
        0x03b0 => "MMC-4 T10/1545-D revision 5",
        0x03b1 => "MMC-4 T10/1545-D revision 5a",
        0x03bd => "MMC-4 T10/1545-D revision 3",
        0x03be => "MMC-4 T10/1545-D revision 3d",
        0x03bf => "MMC-4 ANSI INCITS 401-2005",
        0x03c0 => "ADC (no version claimed)",
        0x03d5 => "ADC T10/1558-D revision 6",
        0x03d6 => "ADC T10/1558-D revision 7",
        0x03d7 => "ADC ANSI INCITS 403-2005",
        0x03e0 => "SES-2 (no version claimed)",
        0x03e1 => "SES-2 T10/1559-D revision 16",
        0x03e7 => "SES-2 T10/1559-D revision 19",
        0x03eb => "SES-2 T10/1559-D revision 20",
        0x03f0 => "SES-2 ANSI INCITS 448-2008",
        0x03f2 => "SES-2 ISO/IEC 14776-372",
        0x0400 => "SSC-3 (no version claimed)",
        0x0403 => "SSC-3 T10/1611-D revision 04a",
        0x0407 => "SSC-3 T10/1611-D revision 05",
        0x0409 => "SSC-3 ANSI INCITS 467-2011",
        0x040b => "SSC-3 ISO/IEC 14776-333:2013",
        0x0420 => "MMC-5 (no version claimed)",
        0x042f => "MMC-5 T10/1675-D revision 03",
        0x0431 => "MMC-5 T10/1675-D revision 03b",
        0x0432 => "MMC-5 T10/1675-D revision 04",
        0x0434 => "MMC-5 ANSI INCITS 430-2007",
        0x0440 => "OSD-2 (no version claimed)",
        0x0444 => "OSD-2 T10/1729-D revision 4",
        0x0446 => "OSD-2 T10/1729-D revision 5",
        0x0448 => "OSD-2 ANSI INCITS 458-2011",
        0x0460 => "SPC-4 (no version claimed)",
        0x0461 => "SPC-4 T10/BSR INCITS 513 revision 16",
        0x0462 => "SPC-4 T10/BSR INCITS 513 revision 18",
        0x0463 => "SPC-4 T10/BSR INCITS 513 revision 23",
        0x0466 => "SPC-4 T10/BSR INCITS 513 revision 36",
        0x0468 => "SPC-4 T10/BSR INCITS 513 revision 37",
        0x0469 => "SPC-4 T10/BSR INCITS 513 revision 37a",
        0x046c => "SPC-4 ANSI INCITS 513-2015",
        0x0480 => "SMC-3 (no version claimed)",
        0x0482 => "SMC-3 T10/1730-D revision 15",
        0x0484 => "SMC-3 T10/1730-D revision 16",
        0x0486 => "SMC-3 ANSI INCITS 484-2012",
        0x04a0 => "ADC-2 (no version claimed)",
        0x04a7 => "ADC-2 T10/1741-D revision 7",
        0x04aa => "ADC-2 T10/1741-D revision 8",
        0x04ac => "ADC-2 ANSI INCITS 441-2008",
        0x04c0 => "SBC-3 (no version claimed)",
        0x04c3 => "SBC-3 T10/BSR INCITS 514 revision 35",
        0x04c5 => "SBC-3 T10/BSR INCITS 514 revision 36",
        0x04c8 => "SBC-3 ANSI INCITS 514-2014",
        0x04e0 => "MMC-6 (no version claimed)",
        0x04e3 => "MMC-6 T10/1836-D revision 02b",
        0x04e5 => "MMC-6 T10/1836-D revision 02g",
        0x04e6 => "MMC-6 ANSI INCITS 468-2010",
        0x04e7 => "MMC-6 ANSI INCITS 468-2010 + MMC-6/AM1 ANSI INCITS 468-2010/AM 1",
        0x0500 => "ADC-3 (no version claimed)",
        0x0502 => "ADC-3 T10/1895-D revision 04",
        0x0504 => "ADC-3 T10/1895-D revision 05",
        0x0506 => "ADC-3 T10/1895-D revision 05a",
        0x050a => "ADC-3 ANSI INCITS 497-2012",
        0x0520 => "SSC-4 (no version claimed)",
        0x0523 => "SSC-4 T10/BSR INCITS 516 revision 2",
        0x0525 => "SSC-4 T10/BSR INCITS 516 revision 3",
        0x0527 => "SSC-4 ANSI INCITS 516-2013",
        0x0560 => "OSD-3 (no version claimed)",
        0x0580 => "SES-3 (no version claimed)",
        0x05a0 => "SSC-5 (no version claimed)",
        0x05c0 => "SPC-5 (no version claimed)",
        0x05e0 => "SFSC (no version claimed)",
        0x05e3 => "SFSC BSR INCITS 501 revision 01",
        0x05e5 => "SFSC BSR INCITS 501 revision 02",
        0x0600 => "SBC-4 (no version claimed)",
        0x0620 => "ZBC (no version claimed)",
        0x0622 => "ZBC BSR INCITS 536 revision 02",
        0x0624 => "ZBC BSR INCITS 536 revision 05",
        0x0640 => "ADC-4 (no version claimed)",
        0x0660 => "ZBC-2 (no version claimed)",
        0x0680 => "SES-4 (no version claimed)",
        0x0820 => "SSA-TL2 (no version claimed)",
        0x083b => "SSA-TL2 T10.1/1147-D revision 05b",
        0x083c => "SSA-TL2 ANSI INCITS 308-1998",
        0x0840 => "SSA-TL1 (no version claimed)",
        0x085b => "SSA-TL1 T10.1/0989-D revision 10b",
        0x085c => "SSA-TL1 ANSI INCITS 295-1996",
        0x0860 => "SSA-S3P (no version claimed)",
        0x087b => "SSA-S3P T10.1/1051-D revision 05b",
        0x087c => "SSA-S3P ANSI INCITS 309-1998",
        0x0880 => "SSA-S2P (no version claimed)",
        0x089b => "SSA-S2P T10.1/1121-D revision 07b",
        0x089c => "SSA-S2P ANSI INCITS 294-1996",
        0x08a0 => "SIP (no version claimed)",
        0x08bb => "SIP T10/0856-D revision 10",
        0x08bc => "SIP ANSI INCITS 292-1997",
        0x08c0 => "FCP (no version claimed)",
        0x08db => "FCP T10/0993-D revision 12",
        0x08dc => "FCP ANSI INCITS 269-1996",
        0x08e0 => "SBP-2 (no version claimed)",
        0x08fb => "SBP-2 T10/1155-D revision 04",
        0x08fc => "SBP-2 ANSI INCITS 325-1998",
        0x0900 => "FCP-2 (no version claimed)",
        0x0901 => "FCP-2 T10/1144-D revision 4",
        0x0915 => "FCP-2 T10/1144-D revision 7",
        0x0916 => "FCP-2 T10/1144-D revision 7a",
        0x0917 => "FCP-2 ANSI INCITS 350-2003",
        0x0918 => "FCP-2 T10/1144-D revision 8",
        0x0920 => "SST (no version claimed)",
        0x0935 => "SST T10/1380-D revision 8b",
        0x0940 => "SRP (no version claimed)",
        0x0954 => "SRP T10/1415-D revision 10",
        0x0955 => "SRP T10/1415-D revision 16a",
        0x095c => "SRP ANSI INCITS 365-2002",
        0x0960 => "iSCSI (no version claimed)",
        0x0980 => "SBP-3 (no version claimed)",
        0x0982 => "SBP-3 T10/1467-D revision 1f",
        0x0994 => "SBP-3 T10/1467-D revision 3",
        0x099a => "SBP-3 T10/1467-D revision 4",
        0x099b => "SBP-3 T10/1467-D revision 5",
        0x099c => "SBP-3 ANSI INCITS 375-2004",
        0x09c0 => "ADP (no version claimed)",
        0x09e0 => "ADT (no version claimed)",
        0x09f9 => "ADT T10/1557-D revision 11",
        0x09fa => "ADT T10/1557-D revision 14",
        0x09fd => "ADT ANSI INCITS 406-2005",
        0x0a00 => "FCP-3 (no version claimed)",
        0x0a07 => "FCP-3 T10/1560-D revision 3f",
        0x0a0f => "FCP-3 T10/1560-D revision 4",
        0x0a11 => "FCP-3 ANSI INCITS 416-2006",
        0x0a1c => "FCP-3 ISO/IEC 14776-223",
        0x0a20 => "ADT-2 (no version claimed)",
        0x0a22 => "ADT-2 T10/1742-D revision 06",
        0x0a27 => "ADT-2 T10/1742-D revision 08",
        0x0a28 => "ADT-2 T10/1742-D revision 09",
        0x0a2b => "ADT-2 ANSI INCITS 472-2011",
        0x0a40 => "FCP-4 (no version claimed)",
        0x0a42 => "FCP-4 T10/1828-D revision 01",
        0x0a44 => "FCP-4 T10/1828-D revision 02",
        0x0a45 => "FCP-4 T10/1828-D revision 02b",
        0x0a46 => "FCP-4 ANSI INCITS 481-2012",
        0x0a60 => "ADT-3 (no version claimed)",
        0x0aa0 => "SPI (no version claimed)",
        0x0ab9 => "SPI T10/0855-D revision 15a",
        0x0aba => "SPI ANSI INCITS 253-1995",
        0x0abb => "SPI T10/0855-D revision 15a with SPI Amnd revision 3a",
        0x0abc => "SPI ANSI INCITS 253-1995 with SPI Amnd ANSI INCITS 253/AM1:1998",
        0x0ac0 => "Fast-20 (no version claimed)",
        0x0adb => "Fast-20 T10/1071 revision 06",
        0x0adc => "Fast-20 ANSI INCITS 277-1996",
        0x0ae0 => "SPI-2 (no version claimed)",
        0x0afb => "SPI-2 T10/1142-D revision 20b",
        0x0afc => "SPI-2 ANSI INCITS 302-1999",
        0x0b00 => "SPI-3 (no version claimed)",
        0x0b18 => "SPI-3 T10/1302-D revision 10",
        0x0b19 => "SPI-3 T10/1302-D revision 13a",
        0x0b1a => "SPI-3 T10/1302-D revision 14",
        0x0b1c => "SPI-3 ANSI INCITS 336-2000",
        0x0b20 => "EPI (no version claimed)",
        0x0b3b => "EPI T10/1134 revision 16",
        0x0b3c => "EPI ANSI INCITS TR-23 1999",
        0x0b40 => "SPI-4 (no version claimed)",
        0x0b54 => "SPI-4 T10/1365-D revision 7",
        0x0b55 => "SPI-4 T10/1365-D revision 9",
        0x0b56 => "SPI-4 ANSI INCITS 362-2002",
        0x0b59 => "SPI-4 T10/1365-D revision 10",
        0x0b60 => "SPI-5 (no version claimed)",
        0x0b79 => "SPI-5 T10/1525-D revision 3",
        0x0b7a => "SPI-5 T10/1525-D revision 5",
        0x0b7b => "SPI-5 T10/1525-D revision 6",
        0x0b7c => "SPI-5 ANSI INCITS 367-2003",
        0x0be0 => "SAS (no version claimed)",
        0x0be1 => "SAS T10/1562-D revision 01",
        0x0bf5 => "SAS T10/1562-D revision 03",
        0x0bfa => "SAS T10/1562-D revision 04",
        0x0bfb => "SAS T10/1562-D revision 04",
        0x0bfc => "SAS T10/1562-D revision 05",
        0x0bfd => "SAS ANSI INCITS 376-2003",
        0x0c00 => "SAS-1.1 (no version claimed)",
        0x0c07 => "SAS-1.1 T10/1601-D revision 9",
        0x0c0f => "SAS-1.1 T10/1601-D revision 10",
        0x0c11 => "SAS-1.1 ANSI INCITS 417-2006",
        0x0c12 => "SAS-1.1 ISO/IEC 14776-151",
        0x0c20 => "SAS-2 (no version claimed)",
        0x0c23 => "SAS-2 T10/1760-D revision 14",
        0x0c27 => "SAS-2 T10/1760-D revision 15",
        0x0c28 => "SAS-2 T10/1760-D revision 16",
        0x0c2a => "SAS-2 ANSI INCITS 457-2010",
        0x0c40 => "SAS-2.1 (no version claimed)",
        0x0c48 => "SAS-2.1 T10/2125-D revision 04",
        0x0c4a => "SAS-2.1 T10/2125-D revision 06",
        0x0c4b => "SAS-2.1 T10/2125-D revision 07",
        0x0c4e => "SAS-2.1 ANSI INCITS 478-2011",
        0x0c4f => "SAS-2.1 ANSI INCITS 478-2011 w/ Amnd 1 ANSI INCITS 478/AM1-2014",
        0x0c52 => "SAS-2.1 ISO/IEC 14776-153",
        0x0c60 => "SAS-3 (no version claimed)",
        0x0c63 => "SAS-3 T10/BSR INCITS 519 revision 05a",
        0x0c65 => "SAS-3 T10/BSR INCITS 519 revision 06",
        0x0c68 => "SAS-3 ANSI INCITS 519-2014",
        0x0c80 => "SAS-4 (no version claimed)",
        0x0d20 => "FC-PH (no version claimed)",
        0x0d3b => "FC-PH ANSI INCITS 230-1994",
        0x0d3c => "FC-PH ANSI INCITS 230-1994 with Amnd 1 ANSI INCITS 230/AM1:1996",
        0x0d40 => "FC-AL (no version claimed)",
        0x0d5c => "FC-AL ANSI INCITS 272-1996",
        0x0d60 => "FC-AL-2 (no version claimed)",
        0x0d61 => "FC-AL-2 T11/1133-D revision 7.0",
        0x0d63 => "FC-AL-2 ANSI INCITS 332-1999 with AM1-2003 & AM2-2006",
        0x0d64 => "FC-AL-2 ANSI INCITS 332-1999 with Amnd 2 AM2-2006",
        0x0d65 => "FC-AL-2 ISO/IEC 14165-122 with AM1 & AM2",
        0x0d7c => "FC-AL-2 ANSI INCITS 332-1999",
        0x0d7d => "FC-AL-2 ANSI INCITS 332-1999 with Amnd 1 AM1:2002",
        0x0d80 => "FC-PH-3 (no version claimed)",
        0x0d9c => "FC-PH-3 ANSI INCITS 303-1998",
        0x0da0 => "FC-FS (no version claimed)",
        0x0db7 => "FC-FS T11/1331-D revision 1.2",
        0x0db8 => "FC-FS T11/1331-D revision 1.7",
        0x0dbc => "FC-FS ANSI INCITS 373-2003",
        0x0dbd => "FC-FS ISO/IEC 14165-251",
        0x0dc0 => "FC-PI (no version claimed)",
        0x0ddc => "FC-PI ANSI INCITS 352-2002",
        0x0de0 => "FC-PI-2 (no version claimed)",
        0x0de2 => "FC-PI-2 T11/1506-D revision 5.0",
        0x0de4 => "FC-PI-2 ANSI INCITS 404-2006",
        0x0e00 => "FC-FS-2 (no version claimed)",
        0x0e02 => "FC-FS-2 ANSI INCITS 242-2007",
        0x0e03 => "FC-FS-2 ANSI INCITS 242-2007 with AM1 ANSI INCITS 242/AM1-2007",
        0x0e20 => "FC-LS (no version claimed)",
        0x0e21 => "FC-LS T11/1620-D revision 1.62",
        0x0e29 => "FC-LS ANSI INCITS 433-2007",
        0x0e40 => "FC-SP (no version claimed)",
        0x0e42 => "FC-SP T11/1570-D revision 1.6",
        0x0e45 => "FC-SP ANSI INCITS 426-2007",
        0x0e60 => "FC-PI-3 (no version claimed)",
        0x0e62 => "FC-PI-3 T11/1625-D revision 2.0",
        0x0e68 => "FC-PI-3 T11/1625-D revision 2.1",
        0x0e6a => "FC-PI-3 T11/1625-D revision 4.0",
        0x0e6e => "FC-PI-3 ANSI INCITS 460-2011",
        0x0e80 => "FC-PI-4 (no version claimed)",
        0x0e82 => "FC-PI-4 T11/1647-D revision 8.0",
        0x0e88 => "FC-PI-4 ANSI INCITS 450-2009",
        0x0ea0 => "FC 10GFC (no version claimed)",
        0x0ea2 => "FC 10GFC ANSI INCITS 364-2003",
        0x0ea3 => "FC 10GFC ISO/IEC 14165-116",
        0x0ea5 => "FC 10GFC ISO/IEC 14165-116 with AM1",
        0x0ea6 => "FC 10GFC ANSI INCITS 364-2003 with AM1 ANSI INCITS 364/AM1-2007",
        0x0ec0 => "FC-SP-2 (no version claimed)",
        0x0ee0 => "FC-FS-3 (no version claimed)",
        0x0ee2 => "FC-FS-3 T11/1861-D revision 0.9",
        0x0ee7 => "FC-FS-3 T11/1861-D revision 1.0",
        0x0ee9 => "FC-FS-3 T11/1861-D revision 1.10",
        0x0eeb => "FC-FS-3 ANSI INCITS 470-2011",
        0x0f00 => "FC-LS-2 (no version claimed)",
        0x0f03 => "FC-LS-2 T11/2103-D revision 2.11",
        0x0f05 => "FC-LS-2 T11/2103-D revision 2.21",
        0x0f07 => "FC-LS-2 ANSI INCITS 477-2011",
        0x0f20 => "FC-PI-5 (no version claimed)",
        0x0f27 => "FC-PI-5 T11/2118-D revision 2.00",
        0x0f28 => "FC-PI-5 T11/2118-D revision 3.00",
        0x0f2a => "FC-PI-5 T11/2118-D revision 6.00",
        0x0f2b => "FC-PI-5 T11/2118-D revision 6.10",
        0x0f2e => "FC-PI-5 ANSI INCITS 479-2011",
        0x0f40 => "FC-PI-6 (no version claimed)",
        0x0f60 => "FC-FS-4 (no version claimed)",
        0x0f80 => "FC-LS-3 (no version claimed)",
        0x12a0 => "FC-SCM (no version claimed)",
        0x12a3 => "FC-SCM T11/1824DT revision 1.0",
        0x12a5 => "FC-SCM T11/1824DT revision 1.1",
        0x12a7 => "FC-SCM T11/1824DT revision 1.4",
        0x12aa => "FC-SCM INCITS TR-47 2012",
        0x12c0 => "FC-DA-2 (no version claimed)",
        0x12c3 => "FC-DA-2 T11/1870DT revision 1.04",
        0x12c5 => "FC-DA-2 T11/1870DT revision 1.06",
        0x12c9 => "FC-DA-2 INCITS TR-49 2012",
        0x12e0 => "FC-DA (no version claimed)",
        0x12e2 => "FC-DA T11/1513-DT revision 3.1",
        0x12e8 => "FC-DA ANSI INCITS TR-36 2004",
        0x12e9 => "FC-DA ISO/IEC 14165-341",
        0x1300 => "FC-Tape (no version claimed)",
        0x1301 => "FC-Tape T11/1315 revision 1.16",
        0x131b => "FC-Tape T11/1315 revision 1.17",
        0x131c => "FC-Tape ANSI INCITS TR-24 1999",
        0x1320 => "FC-FLA (no version claimed)",
        0x133b => "FC-FLA T11/1235 revision 7",
        0x133c => "FC-FLA ANSI INCITS TR-20 1998",
        0x1340 => "FC-PLDA (no version claimed)",
        0x135b => "FC-PLDA T11/1162 revision 2.1",
        0x135c => "FC-PLDA ANSI INCITS TR-19 1998",
        0x1360 => "SSA-PH2 (no version claimed)",
        0x137b => "SSA-PH2 T10.1/1145-D revision 09c",
        0x137c => "SSA-PH2 ANSI INCITS 293-1996",
        0x1380 => "SSA-PH3 (no version claimed)",
        0x139b => "SSA-PH3 T10.1/1146-D revision 05b",
        0x139c => "SSA-PH3 ANSI INCITS 307-1998",
        0x14a0 => "IEEE 1394 (no version claimed)",
        0x14bd => "ANSI IEEE 1394:1995",
        0x14c0 => "IEEE 1394a (no version claimed)",
        0x14e0 => "IEEE 1394b (no version claimed)",
        0x15e0 => "ATA/ATAPI-6 (no version claimed)",
        0x15fd => "ATA/ATAPI-6 ANSI INCITS 361-2002",
        0x1600 => "ATA/ATAPI-7 (no version claimed)",
        0x1602 => "ATA/ATAPI-7 T13/1532-D revision 3",
        0x161c => "ATA/ATAPI-7 ANSI INCITS 397-2005",
        0x161e => "ATA/ATAPI-7 ISO/IEC 24739",
        0x1620 => "ATA/ATAPI-8 ATA8-AAM Architecture Model (no version claimed)",
        0x1621 => "ATA/ATAPI-8 ATA8-APT Parallel Transport (no version claimed)",
        0x1622 => "ATA/ATAPI-8 ATA8-AST Serial Transport (no version claimed)",
        0x1623 => "ATA/ATAPI-8 ATA8-ACS ATA/ATAPI Command Set (no version claimed)",
        0x1628 => "ATA/ATAPI-8 ATA8-AAM ANSI INCITS 451-2008",
        0x162a => "ATA/ATAPI-8 ATA8-ACS ANSI INCITS 452-2009 w/ Amendment 1",
        0x1728 => "Universal Serial Bus Specification, Revision 1.1",
        0x1729 => "Universal Serial Bus Specification, Revision 2.0",
        0x1730 => "USB Mass Storage Class Bulk-Only Transport, Revision 1.0",
        0x1740 => "UAS (no version claimed)",
        0x1743 => "UAS T10/2095-D revision 02",
        0x1747 => "UAS T10/2095-D revision 04",
        0x1748 => "UAS ANSI INCITS 471-2010",
        0x1749 => "UAS ISO/IEC 14776-251:2014",
        0x1761 => "ACS-2 (no version claimed)",
        0x1762 => "ACS-2 ANSI INCITS 482-2013",
        0x1765 => "ACS-3 (no version claimed)",
        0x1780 => "UAS-2 (no version claimed)",
        0x1ea0 => "SAT (no version claimed)",
        0x1ea7 => "SAT T10/1711-D revision 8",
        0x1eab => "SAT T10/1711-D revision 9",
        0x1ead => "SAT ANSI INCITS 431-2007",
        0x1ec0 => "SAT-2 (no version claimed)",
        0x1ec4 => "SAT-2 T10/1826-D revision 06",
        0x1ec8 => "SAT-2 T10/1826-D revision 09",
        0x1eca => "SAT-2 ANSI INCITS 465-2010",
        0x1ee0 => "SAT-3 (no version claimed)",
        0x1ee2 => "SAT-3 T10/BSR INCITS 517 revision 4",
        0x1ee4 => "SAT-3 T10/BSR INCITS 517 revision 7",
        0x1ee8 => "SAT-3 ANSI INCITS 517-2015",
        0x1f00 => "SAT-4 (no version claimed)",
        0x20a0 => "SPL (no version claimed)",
        0x20a3 => "SPL T10/2124-D revision 6a",
        0x20a5 => "SPL T10/2124-D revision 7",
        0x20a7 => "SPL ANSI INCITS 476-2011",
        0x20a8 => "SPL ANSI INCITS 476-2011 + SPL AM1 INCITS 476/AM1 2012",
        0x20aa => "SPL ISO/IEC 14776-261:2012",
        0x20c0 => "SPL-2 (no version claimed)",
        0x20c2 => "SPL-2 T10/BSR INCITS 505 revision 4",
        0x20c4 => "SPL-2 T10/BSR INCITS 505 revision 5",
        0x20c8 => "SPL-2 ANSI INCITS 505-2013",
        0x20e0 => "SPL-3 (no version claimed)",
        0x20e4 => "SPL-3 T10/BSR INCITS 492 revision 6",
        0x20e6 => "SPL-3 T10/BSR INCITS 492 revision 7",
        0x20e8 => "SPL-3 ANSI INCITS 492-2015",
        0x2100 => "SPL-4 (no version claimed)",
        0x21e0 => "SOP (no version claimed)",
        0x21e4 => "SOP T10/BSR INCITS 489 revision 4",
        0x21e6 => "SOP T10/BSR INCITS 489 revision 5",
        0x21e8 => "SOP ANSI INCITS 489-2014",
        0x2200 => "PQI (no version claimed)",
        0x2204 => "PQI T10/BSR INCITS 490 revision 6",
        0x2206 => "PQI T10/BSR INCITS 490 revision 7",
        0x2208 => "PQI ANSI INCITS 490-2014",
        0x2220 => "SOP-2 (no version claimed)",
        0x2240 => "PQI-2 (no version claimed)",
        0xffc0 => "IEEE 1667 (no version claimed)",
        0xffc1 => "IEEE 1667-2006",
        0xffc2 => "IEEE 1667-2009",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(describe(0x0000), "Version Descriptor Not Supported or No Standard Identified");
        assert_eq!(describe(0x0460), "SPC-4 (no version claimed)");
        assert_eq!(describe(0x05c0), "SPC-5 (no version claimed)");
        assert_eq!(describe(0x0600), "SBC-4 (no version claimed)");
        assert_eq!(describe(0x1ead), "SAT ANSI INCITS 431-2007");
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(describe(0xabcd), "unknown standard code 0xABCD");
    }
}
