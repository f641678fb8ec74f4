// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Esprt Contributors 2025.

//! High-level setup and interface for the ESP32-C6.

use crate::rtc_cntl::{self, RtcCntl};
use crate::timg::{self, TimG};

/// The peripherals the boot layer touches, at their hardware base
/// addresses.
pub struct Esp32C6DefaultPeripherals {
    pub timg0: TimG,
    pub timg1: TimG,
    pub rtc_cntl: RtcCntl,
}

impl Esp32C6DefaultPeripherals {
    pub const fn new() -> Self {
        Esp32C6DefaultPeripherals {
            timg0: TimG::new(timg::TIMG0_BASE),
            timg1: TimG::new(timg::TIMG1_BASE),
            rtc_cntl: RtcCntl::new(rtc_cntl::RTC_CNTL_BASE),
        }
    }
}
