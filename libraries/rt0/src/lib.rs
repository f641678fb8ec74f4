// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Esprt Contributors 2025.

//! Freestanding initial runtime (`rt0`) helper functions.
//!
//! The image links without a host C library, but the compiler and the
//! application's runtime support code still assume the basic `mem*`
//! symbols exist, and its hashing support expects an entropy call to
//! resolve. This crate supplies both: byte-wise memory primitives and a
//! deterministic pseudo-random stub, each usable before any runtime
//! exists.

#![cfg_attr(not(test), no_std)]

pub mod mem;
pub mod rand;
