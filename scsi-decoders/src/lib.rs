// SPDX-License-Identifier: Apache-2.0 or BSD-3-Clause

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_debug_implementations)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::non_ascii_literal)]

//! Decoders for the raw responses of SCSI and ATA storage devices.
//!
//! Every decoder is a pure function from a byte slice to a typed record. A
//! record is only produced when the buffer passes the length and
//! self-declared-length checks of its format; otherwise a [`DecodeError`] is
//! returned and nothing is partially filled in. Records can be turned into
//! human-readable text with their `prettify` methods.

pub mod ata;
pub mod field;
pub mod mmc;
pub mod scsi;
pub mod strings;

use thiserror::Error as ThisError;

/// Why a buffer could not be decoded.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ThisError)]
pub enum DecodeError {
    #[error("buffer of {actual} bytes is shorter than the {minimum} bytes required")]
    TooShort { minimum: usize, actual: usize },
    #[error("buffer is {actual} bytes long but declares {declared} bytes")]
    LengthMismatch { declared: usize, actual: usize },
    #[error("expected page code {expected:#04x}, found {found:#04x}")]
    UnexpectedPageCode { expected: u8, found: u8 },
    #[error("response code {0:#04x} is not valid for this format")]
    UnexpectedFormat(u8),
    #[error("descriptor at offset {offset} runs past the end of its list")]
    DescriptorOverrun { offset: usize },
}

pub type Result<T> = std::result::Result<T, DecodeError>;

/// Fail with [`DecodeError::TooShort`] unless `buf` holds at least `minimum`
/// bytes.
pub(crate) const fn require_len(buf: &[u8], minimum: usize) -> Result<()> {
    if buf.len() < minimum {
        return Err(DecodeError::TooShort {
            minimum,
            actual: buf.len(),
        });
    }
    Ok(())
}

/// Fail with [`DecodeError::LengthMismatch`] unless `buf` is exactly
/// `declared` bytes long.
pub(crate) const fn require_exact_len(buf: &[u8], declared: usize) -> Result<()> {
    if buf.len() != declared {
        return Err(DecodeError::LengthMismatch {
            declared,
            actual: buf.len(),
        });
    }
    Ok(())
}
