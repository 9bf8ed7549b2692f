// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Host-provided capabilities: a clock, a built-ins table, trace hooks.
//!
//! The VM never owns these as `Box<dyn ...>` fields — trait objects are
//! off the table in `no_std` without `alloc` — it takes them as
//! monomorphized generic parameters to [`step`](crate::vm::Vm::step),
//! the same way a `Vm::run<M: MemorySpace>` takes its platform
//! capability as a generic parameter rather than a field.

#[cfg(test)]
mod builtins_test;
#[cfg(test)]
mod clock_test;
#[cfg(test)]
mod trace_test;

mod builtins;
mod clock;
mod trace;

// Test doubles require a heap-backed recorder; only available with std.
#[cfg(any(test, feature = "std"))]
mod mock;

pub use builtins::Builtins;
pub use clock::Clock;
pub use trace::{NullTrace, Trace};

#[cfg(any(test, feature = "std"))]
pub use clock::StdClock;
#[cfg(any(test, feature = "std"))]
pub use mock::{RecordingTrace, TestBuiltins};
