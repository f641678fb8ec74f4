// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Esprt Contributors 2025.

//! Application image descriptor.
//!
//! The ROM bootloader scans a fixed offset in the flashed image for this
//! record and checks the magic word before trusting any of the metadata.
//! Its layout is an external binary contract: 256 bytes with fixed field
//! offsets, regardless of what the compiler would pick on its own. The
//! offsets are asserted at compile time so a layout regression is a
//! build failure.

use core::mem::{offset_of, size_of};

/// Magic word identifying an application descriptor to the bootloader.
pub const APP_DESC_MAGIC_WORD: u32 = 0xABCD_5432;

/// Total size of the descriptor record in bytes.
pub const APP_DESC_SIZE: usize = 256;

#[repr(C)]
pub struct AppDescriptor {
    /// Magic word, always `APP_DESC_MAGIC_WORD`
    pub magic_word: u32,
    /// Secure version, for anti-rollback checks
    pub secure_version: u32,
    /// Reserved bytes
    pub reserv1: [u32; 2],
    /// Application version, NUL-padded
    pub version: [u8; 32],
    /// Project name, NUL-padded
    pub project_name: [u8; 32],
    /// Compile time
    pub time: [u8; 16],
    /// Compile date
    pub date: [u8; 16],
    /// Toolchain / IDF version string
    pub idf_ver: [u8; 32],
    /// sha256 of the elf file. Left zeroed; the image tool fills it in.
    pub app_elf_sha256: [u8; 32],
    /// Reserved bytes
    pub reserv2: [u32; 20],
}

const _: () = assert!(size_of::<AppDescriptor>() == APP_DESC_SIZE);
const _: () = assert!(offset_of!(AppDescriptor, magic_word) == 0);
const _: () = assert!(offset_of!(AppDescriptor, secure_version) == 4);
const _: () = assert!(offset_of!(AppDescriptor, reserv1) == 8);
const _: () = assert!(offset_of!(AppDescriptor, version) == 16);
const _: () = assert!(offset_of!(AppDescriptor, project_name) == 48);
const _: () = assert!(offset_of!(AppDescriptor, time) == 80);
const _: () = assert!(offset_of!(AppDescriptor, date) == 96);
const _: () = assert!(offset_of!(AppDescriptor, idf_ver) == 112);
const _: () = assert!(offset_of!(AppDescriptor, app_elf_sha256) == 144);
const _: () = assert!(offset_of!(AppDescriptor, reserv2) == 176);

impl AppDescriptor {
    /// Build a descriptor at compile time. String arguments longer than
    /// their field are truncated.
    pub const fn new(
        version: &str,
        project_name: &str,
        time: &str,
        date: &str,
        idf_ver: &str,
    ) -> AppDescriptor {
        AppDescriptor {
            magic_word: APP_DESC_MAGIC_WORD,
            secure_version: 0,
            reserv1: [0; 2],
            version: pad_str(version),
            project_name: pad_str(project_name),
            time: pad_str(time),
            date: pad_str(date),
            idf_ver: pad_str(idf_ver),
            app_elf_sha256: [0; 32],
            reserv2: [0; 20],
        }
    }
}

/// NUL-pad `s` into a fixed-size field, truncating if it does not fit.
const fn pad_str<const N: usize>(s: &str) -> [u8; N] {
    let bytes = s.as_bytes();
    let mut out = [0; N];
    let mut i = 0;
    while i < bytes.len() && i < N {
        out[i] = bytes[i];
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magic_word_matches_bootloader_constant() {
        let desc = AppDescriptor::new("1.0.0", "blink", "12:34:56", "Aug  5 2025", "v5.0");
        assert_eq!(desc.magic_word, 0xABCD_5432);
    }

    #[test]
    fn record_is_exactly_256_bytes() {
        assert_eq!(size_of::<AppDescriptor>(), 256);
    }

    #[test]
    fn string_fields_are_nul_padded() {
        let desc = AppDescriptor::new("1.0.0", "blink", "12:34:56", "Aug  5 2025", "v5.0");

        assert_eq!(&desc.version[..5], b"1.0.0");
        assert!(desc.version[5..].iter().all(|&b| b == 0));

        assert_eq!(&desc.project_name[..5], b"blink");
        assert!(desc.project_name[5..].iter().all(|&b| b == 0));
    }

    #[test]
    fn oversized_strings_truncate_to_field_width() {
        let long = "0123456789abcdef0123456789abcdef-overflow";
        let desc = AppDescriptor::new(long, "p", "t", "d", "i");

        assert_eq!(&desc.version[..], &long.as_bytes()[..32]);
    }

    #[test]
    fn digest_and_reserved_fields_start_zeroed() {
        let desc = AppDescriptor::new("1.0.0", "blink", "t", "d", "i");

        assert!(desc.app_elf_sha256.iter().all(|&b| b == 0));
        assert!(desc.reserv1.iter().all(|&w| w == 0));
        assert!(desc.reserv2.iter().all(|&w| w == 0));
        assert_eq!(desc.secure_version, 0);
    }
}
