// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Esprt Contributors 2025.

//! Boot path support for RV32I-class cores.
//!
//! This crate owns the very first instructions the core executes: the
//! reset vector table, the `_start` entry point, and the RAM image setup
//! that must run before any Rust static is touched. The board crate
//! supplies `reset_handler`, which `_start` branches to once the stack
//! and global pointer are established.

#![no_std]

pub mod support;

#[cfg(all(target_arch = "riscv32", target_os = "none"))]
extern "C" {
    // External function defined by the board crate.
    fn reset_handler();

    // Where the end of the stack region is (and hence where the stack
    // should start). Comes from the linker script.
    static _estack: u32;

    // Boundaries of the .bss section.
    static mut _szero: u32;
    static mut _ezero: u32;

    // Where the .data section is stored in flash.
    static mut _etext: u32;

    // Boundaries of the .data section in RAM.
    static mut _srelocate: u32;
    static mut _erelocate: u32;
}

/// The reset vector table.
///
/// The loader fetches the initial stack pointer from entry 0 and the
/// reset address from entry 1. The remaining entries are unpopulated,
/// but the table length is fixed by the platform, so they are emitted as
/// zeros rather than left off.
#[cfg(all(target_arch = "riscv32", target_os = "none"))]
core::arch::global_asm!(
    r#"
  .section .vectors, "a"
  .globl _vector_table
_vector_table:
  .word _estack
  .word _start
  .rept 30
  .word 0
  .endr
"#
);

/// Entry point of all programs (`_start`).
///
/// Initializes the global pointer, the stack pointer, and the frame
/// pointer (needed for closures to work further down the boot path), and
/// then branches to `reset_handler`.
#[cfg(all(target_arch = "riscv32", target_os = "none"))]
core::arch::global_asm!(
    r#"
  .section .riscv.start, "ax"
  .globl _start
_start:
  .cfi_startproc
  .cfi_undefined ra

  // Set the global pointer register using the variable defined in the
  // linker script. This register is only set once, and lets the linker
  // emit code with gp-relative offsets.
  lui gp, %hi(__global_pointer$)
  addi gp, gp, %lo(__global_pointer$)

  // Initialize the stack pointer register from the linker script. The
  // vector table carries the same value for the hardware fetch path, but
  // boot ROMs differ in whether they actually load it, so it is
  // re-established here.
  lui sp, %hi(_estack)
  addi sp, sp, %lo(_estack)

  // Set s0 (the frame pointer) to the start of the stack.
  add s0, sp, zero

  // With that initial setup out of the way, branch to the boot code in
  // the board crate.
  jal zero, reset_handler

  .cfi_endproc
"#
);

/// Set up the RAM image.
///
/// This moves the data segment from flash to RAM and zeros out the BSS
/// section. Must run before anything reads a static.
#[cfg(all(target_arch = "riscv32", target_os = "none"))]
pub unsafe fn init_memory() {
    use core::ptr::{addr_of, addr_of_mut};

    // Relocate the data segment. Assumes data starts right after the
    // text segment as specified by the linker script.
    let mut pdest = addr_of_mut!(_srelocate);
    let pend = addr_of_mut!(_erelocate) as *const u32;
    let mut psrc = addr_of!(_etext);

    if psrc != pdest.cast_const() {
        while (pdest as *const u32) < pend {
            pdest.write(psrc.read());
            pdest = pdest.offset(1);
            psrc = psrc.offset(1);
        }
    }

    // Clear the zero segment (BSS).
    let pzero = addr_of!(_ezero);
    pdest = addr_of_mut!(_szero);

    while (pdest as *const u32) < pzero {
        // `volatile` to make sure it doesn't get optimized out.
        pdest.write_volatile(0);
        pdest = pdest.offset(1);
    }
}
