// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Esprt Contributors 2025.

//! Core low-level operations.

#[cfg(all(target_arch = "riscv32", target_os = "none"))]
use core::arch::asm;

/// NOP instruction
#[cfg(all(target_arch = "riscv32", target_os = "none"))]
#[inline(always)]
pub fn nop() {
    unsafe {
        asm!("nop", options(nomem, nostack, preserves_flags));
    }
}

/// WFI instruction
#[cfg(all(target_arch = "riscv32", target_os = "none"))]
#[inline(always)]
pub unsafe fn wfi() {
    asm!("wfi", options(nomem, nostack));
}

// Mock implementations for tests on non-RISC-V hosts.

#[cfg(not(all(target_arch = "riscv32", target_os = "none")))]
pub fn nop() {}

#[cfg(not(all(target_arch = "riscv32", target_os = "none")))]
pub unsafe fn wfi() {}
