// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! A fixed-capacity stack-based bytecode virtual machine for
//! resource-constrained hosts.
//!
//! `pvm-vm` is the runtime: it wraps a [`pvm_abi::Image`] in a [`Vm`](vm::Vm)
//! and steps it one opcode at a time. It never allocates, never touches
//! a clock, timer interrupt, or built-in function table on its own —
//! those are supplied by the host through the [`host`] traits, as
//! monomorphized generic parameters rather than trait objects, so the
//! core builds and runs with no allocator at all.
//!
//! # Crate layout
//!
//! - [`error`] — [`error::PvmError`], the one error type every fallible
//!   operation returns.
//! - [`host`] — the [`host::Clock`], [`host::Builtins`], and
//!   [`host::Trace`] traits a host implements.
//! - [`vm`] — [`vm::Vm`], the interpreter state and decode/execute loop.
//!
//! Wire-format parsing (the image header, function table, validation)
//! lives in the separate [`pvm_abi`] crate, re-exported here for
//! convenience.
//!
//! The source's `pvm_data_t`/`pvm_const_t` can be narrowed to 16 bits at
//! build time on the tightest hosts; this crate fixes both at `i32` and
//! does not expose a slot-width type parameter. The image's constant
//! table is always 4-byte little-endian per the wire format (see
//! [`pvm_abi::Image::constant`]), so a narrower *constant* slot would
//! change the on-disk layout, not just an in-memory representation; and
//! a data-stack-only narrowing has no counterpart to narrow against
//! once constants stay 32-bit. See `DESIGN.md` for the full rationale.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod error;
pub mod host;
pub mod vm;

pub use error::PvmError;
pub use pvm_abi;
pub use vm::{CallFrame, DefaultVm, Vm};
