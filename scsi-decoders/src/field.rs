// SPDX-License-Identifier: Apache-2.0 or BSD-3-Clause

//! Field extraction primitives.
//!
//! These helpers don't check bounds beyond what slice indexing does: callers
//! validate the buffer length first, so an out-of-range offset is a bug in the
//! caller and panics.

/// Extract the bits selected by `mask` from `buf[offset]`, shifted down by
/// `shift`.
#[inline]
pub const fn bits(buf: &[u8], offset: usize, mask: u8, shift: u32) -> u8 {
    (buf[offset] & mask) >> shift
}

/// Whether any bit selected by `mask` is set in `buf[offset]`.
#[inline]
pub const fn flag(buf: &[u8], offset: usize, mask: u8) -> bool {
    buf[offset] & mask != 0
}

#[inline]
pub const fn be16(buf: &[u8], offset: usize) -> u16 {
    ((buf[offset] as u16) << 8) | buf[offset + 1] as u16
}

#[inline]
pub const fn be24(buf: &[u8], offset: usize) -> u32 {
    ((buf[offset] as u32) << 16) | ((buf[offset + 1] as u32) << 8) | buf[offset + 2] as u32
}

#[inline]
pub const fn be32(buf: &[u8], offset: usize) -> u32 {
    ((buf[offset] as u32) << 24)
        | ((buf[offset + 1] as u32) << 16)
        | ((buf[offset + 2] as u32) << 8)
        | buf[offset + 3] as u32
}

#[inline]
pub const fn be64(buf: &[u8], offset: usize) -> u64 {
    ((be32(buf, offset) as u64) << 32) | be32(buf, offset + 4) as u64
}

/// Little-endian 16-bit word, as used by ATA IDENTIFY data.
#[inline]
pub const fn le16(buf: &[u8], offset: usize) -> u16 {
    ((buf[offset + 1] as u16) << 8) | buf[offset] as u16
}

pub fn put_be16(buf: &mut [u8], offset: usize, value: u16) {
    buf[offset..offset + 2].copy_from_slice(&value.to_be_bytes());
}

pub fn put_be24(buf: &mut [u8], offset: usize, value: u32) {
    buf[offset..offset + 3].copy_from_slice(&value.to_be_bytes()[1..]);
}

pub fn put_be32(buf: &mut [u8], offset: usize, value: u32) {
    buf[offset..offset + 4].copy_from_slice(&value.to_be_bytes());
}

pub fn put_be64(buf: &mut [u8], offset: usize, value: u64) {
    buf[offset..offset + 8].copy_from_slice(&value.to_be_bytes());
}

/// Set or clear the bits in `mask` at `buf[offset]`.
pub fn put_flag(buf: &mut [u8], offset: usize, mask: u8, value: bool) {
    if value {
        buf[offset] |= mask;
    } else {
        buf[offset] &= !mask;
    }
}
