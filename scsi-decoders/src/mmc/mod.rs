// SPDX-License-Identifier: Apache-2.0 or BSD-3-Clause

//! Multimedia (MMC) response decoders.

pub mod disc_structure;

pub use disc_structure::Capability;
