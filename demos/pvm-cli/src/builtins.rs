// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! A small built-ins table mirroring the original source's
//! `samples/builtins.c`: a diagnostic `print` and a `get_tick` clock
//! readout. Everything else in that file (`get_time`, `get_realtime`,
//! `get_date`, `get_weekday`, the shell-integration stubs) is real
//! built-in *content* — out of `pvm-vm`'s scope by spec.md's own
//! framing ("the set of built-in functions themselves ... out of
//! scope") — so this demo keeps only the two a minimal program needs
//! to show `CAL` reaching a host function and reading the clock.

use pvm_vm::host::{Builtins, Clock};
use pvm_vm::vm::{CALL_STACK_CAP, DATA_STACK_CAP, Vm};

/// Built-in index of `print`: writes `argc` stack slots to stdout,
/// space-separated, prefixed with `:` — the non-`PVM_DEBUG` branch of
/// `pvm_builtin_print` in `samples/builtins.c`.
pub const PRINT: u16 = 0;

/// Built-in index of `get_tick`: writes the current monotonic
/// millisecond reading into the single return slot, matching
/// `pvm_get_tick`.
pub const GET_TICK: u16 = 1;

/// The demo's fixed built-ins table, parameterized over the same
/// [`Clock`] the VM's `SLP` handling uses so `get_tick` reports
/// consistent readings.
pub struct DemoBuiltins<'clock, C: Clock> {
    clock: &'clock C,
}

impl<'clock, C: Clock> DemoBuiltins<'clock, C> {
    #[must_use]
    pub const fn new(clock: &'clock C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> Builtins<DATA_STACK_CAP, CALL_STACK_CAP> for DemoBuiltins<'_, C> {
    fn len(&self) -> usize {
        2
    }

    #[allow(clippy::print_stdout, reason = "this is the demo CLI's only output path")]
    fn call(&self, index: u16, vm: &mut Vm<DATA_STACK_CAP, CALL_STACK_CAP>, start: usize, argc: u8) {
        match index {
            PRINT => {
                let argc = usize::from(argc);
                let values = &vm.stack()[start..start + argc];
                print!(":");
                for value in values {
                    print!(" {value}");
                }
                println!();
            }
            GET_TICK => {
                let now = self.clock.now_ms();
                #[allow(
                    clippy::cast_possible_wrap,
                    reason = "matches the original's (int32_t)now_ms() reinterpretation"
                )]
                let value = now as i32;
                if let Some(slot) = vm.stack_mut().get_mut(start) {
                    *slot = value;
                }
            }
            _ => {}
        }
    }
}
