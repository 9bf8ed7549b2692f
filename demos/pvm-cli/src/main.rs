// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! A demo host for `pvm-vm`, grounded directly in the original source's
//! `samples/main.c`: read an image file named on the command line,
//! validate it, reset a VM, and call `step` until it reports a
//! terminal error — printing `"END"` on the normal `MainReturn` path or
//! the error and program counter otherwise.
//!
//! This binary is explicitly supplemental. `pvm-abi`/`pvm-vm` are the
//! in-scope interpreter core; this crate is the loader/driver spec.md
//! calls out as an external collaborator, kept here only as runnable
//! end-to-end material.

mod builtins;

use std::env;
use std::fs;
use std::process::ExitCode;
use std::time::Instant;

use pvm_abi::{CheckResult, Image, check};
use pvm_vm::host::{Clock, NullTrace};
use pvm_vm::vm::DefaultVm;

use builtins::DemoBuiltins;

/// A monotonic millisecond clock rooted at process start, mirroring
/// `now_ms()`'s `clock_gettime(CLOCK_MONOTONIC, ...)` reading.
struct WallClock {
    start: Instant,
}

impl WallClock {
    fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for WallClock {
    fn now_ms(&self) -> u32 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "wraparound after ~49.7 days is the documented, tolerated behavior"
        )]
        let ms = self.start.elapsed().as_millis() as u32;
        ms
    }
}

#[allow(clippy::print_stdout, clippy::print_stderr, reason = "this is the demo CLI's output")]
fn main() -> ExitCode {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "pvm-cli".to_owned());
    let Some(path) = args.next() else {
        eprintln!("Usage: {program} <image-file>");
        return ExitCode::FAILURE;
    };

    let bytes = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("failed to read {path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    match check(&bytes) {
        CheckResult::Ok => {}
        CheckResult::SizeMismatch => {
            eprintln!("invalid image: declared size does not match file length");
            return ExitCode::FAILURE;
        }
        CheckResult::VersionMismatch => {
            eprintln!("invalid image: unsupported vm_version");
            return ExitCode::FAILURE;
        }
    }

    let image = Image::new(&bytes);
    println!(
        "vm_version: {}\nfunctions: {}\nconstants: {}",
        image.vm_version(),
        image.functions_count(),
        image.constants_count()
    );

    let mut vm = DefaultVm::new(&image);
    let clock = WallClock::new();
    let builtins = DemoBuiltins::new(&clock);

    let error = loop {
        match vm.step(&clock, &builtins, &mut NullTrace) {
            Ok(()) => {}
            Err(err) => break err,
        }
    };

    if error == pvm_vm::PvmError::MainReturn {
        println!("END");
        ExitCode::SUCCESS
    } else {
        println!("ERROR: {error} PC={}", vm.pc());
        ExitCode::FAILURE
    }
}
