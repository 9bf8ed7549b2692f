// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Wire format for pvm executable images.
//!
//! This crate defines the contract between a host that produces images
//! (a compiler, a loader reading a file) and the VM that executes them:
//!
//! - The packed image header (version, size, table counts).
//! - The 5-byte `FunctionDescriptor` bitfield.
//! - [`check`], the one pre-execution validation pass.
//!
//! # Design Principles
//!
//! - **No dependencies**: pure wire-format parsing, 100% host-testable.
//! - **Zero-copy**: [`Image`] borrows the input bytes; nothing is copied
//!   or allocated.
//! - **Lazy range checks**: [`check`] only validates the header. Function
//!   addresses, constant indices and code bounds are enforced per-opcode
//!   by the VM, not here.

#![no_std]

#[cfg(test)]
mod function_test;

pub mod function;
pub mod image;

pub use function::FunctionDescriptor;
pub use image::{CheckResult, Image, SUPPORTED_VERSION, check};
