// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Esprt Contributors 2025.

//! Board build script.
//!
//! Emits the linker configuration for bare-metal builds and captures the
//! build-time stamps baked into the application descriptor.

use std::process::Command;

const LINKER_SCRIPT: &str = "layout.ld";

fn main() {
    // The linker script only applies to the bare-metal image; emitting
    // it for a host build would break `cargo test`. We only add it when
    // we are actually cross-compiling (i.e., the TARGET is not the same
    // as the HOST).
    if std::env::var("HOST") != std::env::var("TARGET") {
        println!("cargo:rustc-link-arg=-L{}", std::env!("CARGO_MANIFEST_DIR"));
        println!("cargo:rustc-link-arg=-T{}", LINKER_SCRIPT);
    }
    println!("cargo:rerun-if-changed={}", LINKER_SCRIPT);

    // The equivalent of the C preprocessor's __TIME__ and __DATE__,
    // captured once per build for the descriptor record.
    println!("cargo:rustc-env=BUILD_TIME={}", stamp("+%H:%M:%S"));
    println!("cargo:rustc-env=BUILD_DATE={}", stamp("+%b %e %Y"));
    println!("cargo:rustc-env=BUILD_TOOLCHAIN={}", toolchain());
}

fn stamp(format: &str) -> String {
    run(Command::new("date").arg(format))
}

fn toolchain() -> String {
    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| String::from("rustc"));
    run(Command::new(rustc).arg("--version"))
}

fn run(command: &mut Command) -> String {
    command
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| String::from("unknown"))
}
