// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Esprt Contributors 2025.

//! RTC domain watchdog driver.
//!
//! The RTC block carries its own watchdog (RWDT) plus the analog super
//! watchdog (SWD). Both survive a CPU reset and both must be quieted
//! during bring-up. The RWDT shares the timer-group write-key; the SWD
//! has its own.

use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};
use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;
use crate::timg::WDT_WRITE_KEY;

pub const RTC_CNTL_BASE: StaticRef<RtcCntlRegisters> =
    unsafe { StaticRef::new(0x6000_8000 as *const RtcCntlRegisters) };

/// Write-key for the super watchdog protect register.
pub const SWD_WRITE_KEY: u32 = 0x8F1D_312A;

register_structs! {
    pub RtcCntlRegisters {
        (0x000 => _reserved0),
        (0x01C => swd_conf: ReadWrite<u32, SWD_CONF::Register>),
        (0x020 => swd_wprotect: ReadWrite<u32>),
        (0x024 => _reserved1),
        (0x02C => int_ena: ReadWrite<u32>),
        (0x030 => _reserved2),
        (0x080 => wdtconfig0: ReadWrite<u32, WDTCONFIG0::Register>),
        (0x084 => _reserved3),
        (0x0A4 => wdtwprotect: ReadWrite<u32>),
        (0x0A8 => @END),
    }
}

register_bitfields![u32,
    WDTCONFIG0 [
        CHIP_RESET_EN OFFSET(8) NUMBITS(1) [],
        PAUSE_INSLEEP OFFSET(9) NUMBITS(1) [],
        APPCPU_RESET_EN OFFSET(10) NUMBITS(1) [],
        PROCPU_RESET_EN OFFSET(11) NUMBITS(1) [],
        FLASHBOOT_MOD_EN OFFSET(12) NUMBITS(1) [],
        SYS_RESET_LENGTH OFFSET(13) NUMBITS(3) [],
        CPU_RESET_LENGTH OFFSET(16) NUMBITS(3) [],
        STG3 OFFSET(19) NUMBITS(3) [],
        STG2 OFFSET(22) NUMBITS(3) [],
        STG1 OFFSET(25) NUMBITS(3) [],
        STG0 OFFSET(28) NUMBITS(3) [],
        EN OFFSET(31) NUMBITS(1) [],
    ],
    SWD_CONF [
        AUTO_FEED OFFSET(31) NUMBITS(1) [],
    ],
];

pub struct RtcCntl {
    registers: StaticRef<RtcCntlRegisters>,
}

impl RtcCntl {
    pub const fn new(base: StaticRef<RtcCntlRegisters>) -> RtcCntl {
        RtcCntl { registers: base }
    }

    /// Enable WDT config writes
    fn enable_wdt_access(&self) {
        self.registers.wdtwprotect.set(WDT_WRITE_KEY);
    }

    /// Disable WDT config writes
    fn disable_wdt_access(&self) {
        self.registers.wdtwprotect.set(0);
    }

    /// Disable the RTC watchdog and mask any stage interrupt it may have
    /// left pending.
    pub fn disable_wdt(&self) {
        self.enable_wdt_access();

        self.registers
            .wdtconfig0
            .modify(WDTCONFIG0::EN::CLEAR + WDTCONFIG0::FLASHBOOT_MOD_EN::CLEAR);

        self.disable_wdt_access();

        self.registers.int_ena.set(0);
    }

    /// Enable SW WDT config writes
    fn enable_sw_wdt_access(&self) {
        self.registers.swd_wprotect.set(SWD_WRITE_KEY);
    }

    /// Disable SW WDT config writes
    fn disable_sw_wdt_access(&self) {
        self.registers.swd_wprotect.set(0);
    }

    /// Put the super watchdog into auto-feed mode so it never expires.
    /// The SWD cannot be switched off outright.
    pub fn disable_super_wdt(&self) {
        self.enable_sw_wdt_access();
        self.registers.swd_conf.modify(SWD_CONF::AUTO_FEED::SET);
        self.disable_sw_wdt_access();
    }
}
