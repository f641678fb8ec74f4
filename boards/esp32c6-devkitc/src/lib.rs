// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Esprt Contributors 2025.

//! Board support for the ESP32-C6-DevKitC-1.
//!
//! Owns everything between the architecture `_start` and the
//! application's `main`: RAM image setup, watchdog teardown, the
//! published image descriptor, and the terminal park loop that catches a
//! returning application.

#![cfg_attr(not(test), no_std)]

// Pull in the freestanding runtime stubs the application links against.
use esprt_rt0 as _;

use esp32c6::app_desc::AppDescriptor;
use esp32c6::chip::Esp32C6DefaultPeripherals;

/// The application image descriptor, pinned where the ROM bootloader
/// scans for it. The digest field stays zeroed; the image tool computes
/// it after the link.
#[used]
#[link_section = ".rodata.app_desc"]
static APP_DESC: AppDescriptor = AppDescriptor::new(
    env!("CARGO_PKG_VERSION"),
    "esp32c6-devkitc",
    env!("BUILD_TIME"),
    env!("BUILD_DATE"),
    env!("BUILD_TOOLCHAIN"),
);

/// Base address of the application descriptor record.
pub fn app_desc() -> &'static AppDescriptor {
    &APP_DESC
}

/// Quiet every watchdog that is armed out of reset: both timer-group
/// watchdogs, the RTC watchdog, and the super watchdog. Nothing else
/// may run first; any of the four can still reboot the chip.
pub fn early_init(peripherals: &Esp32C6DefaultPeripherals) {
    peripherals.timg0.disable_wdt();
    peripherals.timg1.disable_wdt();
    peripherals.rtc_cntl.disable_wdt();
    peripherals.rtc_cntl.disable_super_wdt();
}

/// Run the boot sequence, then hand control to the application entry
/// point. The entry runs exactly once; if it returns, so does `boot`,
/// and the caller parks the core.
pub fn boot<F: FnOnce()>(peripherals: &Esp32C6DefaultPeripherals, app_entry: F) {
    early_init(peripherals);
    app_entry();
}

#[cfg(all(target_arch = "riscv32", target_os = "none"))]
extern "C" {
    // The application entry point. Takes no arguments; not expected to
    // return.
    fn main();
}

/// Reset handler, branched to from `_start` once the stack and global
/// pointer are live.
#[cfg(all(target_arch = "riscv32", target_os = "none"))]
#[no_mangle]
pub unsafe extern "C" fn reset_handler() -> ! {
    rv32i::init_memory();

    let peripherals = Esp32C6DefaultPeripherals::new();
    boot(&peripherals, || unsafe { main() });

    // Terminal safety net. Execution must never fall off the end of
    // reset code into undefined memory.
    loop {
        rv32i::support::wfi();
    }
}

/// Panic handler. This layer has no reporting channel; halt in place.
#[cfg(all(target_os = "none", not(test)))]
#[panic_handler]
fn panic_fmt(_pi: &core::panic::PanicInfo) -> ! {
    loop {
        rv32i::support::nop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use esp32c6::rtc_cntl::{RtcCntl, RtcCntlRegisters};
    use esp32c6::timg::{TimG, TimgRegisters};
    use esp32c6::StaticRef;

    use std::cell::Cell;

    const EN: u32 = 1 << 31;
    const FLASHBOOT_MOD_EN: u32 = 1 << 12;
    const AUTO_FEED: u32 = 1 << 31;

    // Word offsets of the registers the boot path touches, as seen by
    // the raw simulated blocks.
    const TIMG_WDTCONFIG0: usize = 0x048 / 4;
    const TIMG_WDTFEED: usize = 0x060 / 4;
    const TIMG_WDTWPROTECT: usize = 0x064 / 4;
    const RTC_SWD_CONF: usize = 0x01C / 4;
    const RTC_WDTCONFIG0: usize = 0x080 / 4;
    const RTC_WDTWPROTECT: usize = 0x0A4 / 4;

    fn leak_block(words: usize) -> *mut u32 {
        Box::into_raw(vec![0u32; words].into_boxed_slice()) as *mut u32
    }

    unsafe fn word(block: *mut u32, idx: usize) -> u32 {
        block.add(idx).read_volatile()
    }

    unsafe fn set_word(block: *mut u32, idx: usize, value: u32) {
        block.add(idx).write_volatile(value);
    }

    struct FakeChip {
        timg0: *mut u32,
        timg1: *mut u32,
        rtc: *mut u32,
        peripherals: Esp32C6DefaultPeripherals,
    }

    // Simulated register blocks with every watchdog armed, the way
    // hardware reset leaves them.
    fn fake_chip() -> FakeChip {
        let timg0 = leak_block(0x68 / 4);
        let timg1 = leak_block(0x68 / 4);
        let rtc = leak_block(0xA8 / 4);

        unsafe {
            set_word(timg0, TIMG_WDTCONFIG0, EN | FLASHBOOT_MOD_EN);
            set_word(timg1, TIMG_WDTCONFIG0, EN | FLASHBOOT_MOD_EN);
            set_word(rtc, RTC_WDTCONFIG0, EN | FLASHBOOT_MOD_EN);
        }

        let peripherals = Esp32C6DefaultPeripherals {
            timg0: TimG::new(unsafe { StaticRef::new(timg0 as *const TimgRegisters) }),
            timg1: TimG::new(unsafe { StaticRef::new(timg1 as *const TimgRegisters) }),
            rtc_cntl: RtcCntl::new(unsafe { StaticRef::new(rtc as *const RtcCntlRegisters) }),
        };

        FakeChip {
            timg0,
            timg1,
            rtc,
            peripherals,
        }
    }

    #[test]
    fn boot_invokes_the_entry_exactly_once() {
        let chip = fake_chip();
        let calls = Cell::new(0);

        boot(&chip.peripherals, || calls.set(calls.get() + 1));

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn every_watchdog_is_quiet_before_the_entry_runs() {
        let chip = fake_chip();
        let timg0 = chip.timg0;
        let timg1 = chip.timg1;
        let rtc = chip.rtc;

        boot(&chip.peripherals, || unsafe {
            assert_eq!(word(timg0, TIMG_WDTCONFIG0), 0);
            assert_eq!(word(timg1, TIMG_WDTCONFIG0), 0);
            assert_eq!(word(rtc, RTC_WDTCONFIG0), 0);
            assert_eq!(word(rtc, RTC_SWD_CONF), AUTO_FEED);
        });
    }

    #[test]
    fn watchdogs_end_fed_and_relocked() {
        let chip = fake_chip();

        boot(&chip.peripherals, || ());

        unsafe {
            for timg in [chip.timg0, chip.timg1] {
                assert_ne!(word(timg, TIMG_WDTFEED), 0);
                assert_eq!(word(timg, TIMG_WDTWPROTECT), 0);
            }
            assert_eq!(word(chip.rtc, RTC_WDTWPROTECT), 0);
        }
    }

    #[test]
    fn descriptor_is_published_with_the_bootloader_magic() {
        let desc = app_desc();

        assert_eq!(desc.magic_word, esp32c6::app_desc::APP_DESC_MAGIC_WORD);
        assert_eq!(&desc.project_name[..15], b"esp32c6-devkitc");
        assert_eq!(desc.project_name[15], 0);
        assert!(desc.app_elf_sha256.iter().all(|&b| b == 0));
    }
}
