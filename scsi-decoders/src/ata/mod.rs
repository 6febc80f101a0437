// SPDX-License-Identifier: Apache-2.0 or BSD-3-Clause

pub mod identify;

pub use identify::IdentifyDevice;
