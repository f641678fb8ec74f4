// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Esprt Contributors 2025.

//! Timer Group (TIMG) watchdog driver.
//!
//! Each timer group carries a main watchdog (MWDT) that is armed out of
//! reset and will reboot the chip unless it is fed or disabled early in
//! boot. The configuration registers are write-protected; every change
//! must be bracketed by writes to `wdtwprotect`.

use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};
use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

pub const TIMG0_BASE: StaticRef<TimgRegisters> =
    unsafe { StaticRef::new(0x6001_F000 as *const TimgRegisters) };

pub const TIMG1_BASE: StaticRef<TimgRegisters> =
    unsafe { StaticRef::new(0x6002_0000 as *const TimgRegisters) };

/// Write-key for `wdtwprotect`. While the register holds any other
/// value, the hardware ignores writes to the watchdog configuration.
pub const WDT_WRITE_KEY: u32 = 0x50D8_3AA1;

register_structs! {
    pub TimgRegisters {
        (0x000 => _reserved0),
        (0x048 => wdtconfig0: ReadWrite<u32, WDTCONFIG0::Register>),
        (0x04C => wdtconfig1: ReadWrite<u32, WDTCONFIG1::Register>),
        (0x050 => wdtconfig2: ReadWrite<u32>),
        (0x054 => wdtconfig3: ReadWrite<u32>),
        (0x058 => wdtconfig4: ReadWrite<u32>),
        (0x05C => wdtconfig5: ReadWrite<u32>),
        (0x060 => wdtfeed: ReadWrite<u32>),
        (0x064 => wdtwprotect: ReadWrite<u32>),
        (0x068 => @END),
    }
}

register_bitfields![u32,
    WDTCONFIG0 [
        FLASHBOOT_MOD_EN OFFSET(12) NUMBITS(1) [],
        PROCPU_RESET_EN OFFSET(13) NUMBITS(1) [],
        SYS_RESET_LENGTH OFFSET(15) NUMBITS(3) [],
        CPU_RESET_LENGTH OFFSET(18) NUMBITS(3) [],
        USE_XTAL OFFSET(21) NUMBITS(1) [],
        CONF_UPDATE_EN OFFSET(22) NUMBITS(1) [],
        STG3 OFFSET(23) NUMBITS(2) [],
        STG2 OFFSET(25) NUMBITS(2) [],
        STG1 OFFSET(27) NUMBITS(2) [],
        STG0 OFFSET(29) NUMBITS(2) [],
        EN OFFSET(31) NUMBITS(1) [],
    ],
    WDTCONFIG1 [
        DIVCNT_RST OFFSET(0) NUMBITS(1) [],
        CLK_PRESCALE OFFSET(16) NUMBITS(16) [],
    ],
];

pub struct TimG {
    registers: StaticRef<TimgRegisters>,
}

impl TimG {
    pub const fn new(base: StaticRef<TimgRegisters>) -> Self {
        TimG { registers: base }
    }

    /// Enable WDT config writes
    fn enable_wdt_access(&self) {
        self.registers.wdtwprotect.set(WDT_WRITE_KEY);
    }

    /// Disable WDT config writes
    fn disable_wdt_access(&self) {
        self.registers.wdtwprotect.set(0);
    }

    /// Restart the watchdog countdown. Any non-zero write works; the
    /// value itself is ignored by hardware.
    pub fn feed(&self) {
        self.registers.wdtfeed.set(1);
    }

    /// Disable the timer group watchdog.
    ///
    /// The sequence is fixed by hardware: unlock the configuration,
    /// clear exactly the enable and flash-boot bits, feed the counter so
    /// a countdown already in flight cannot expire, then restore write
    /// protection.
    pub fn disable_wdt(&self) {
        self.enable_wdt_access();

        self.registers
            .wdtconfig0
            .modify(WDTCONFIG0::EN::CLEAR + WDTCONFIG0::FLASHBOOT_MOD_EN::CLEAR);

        self.feed();

        self.disable_wdt_access();
    }
}
