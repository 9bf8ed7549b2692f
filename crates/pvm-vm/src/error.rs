// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Terminal and non-terminal conditions a [`step`](crate::vm::Vm::step)
//! call can report.

#[cfg(test)]
mod error_test;

/// Every non-success outcome of a single `step`.
///
/// `step` returns `Result<(), PvmError>` rather than the source's flat
/// `pvm_errno` enum with its `PVM_NO_ERROR = 0` sentinel: `Ok(())` is
/// that sentinel, including the "a cooperative sleep is still active"
/// case, which is not itself an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PvmError {
    /// `RET` executed with no caller frame. The normal end-of-program
    /// signal, not a fault.
    MainReturn,
    /// `CAL` into a bytecode function with the call stack already full.
    CallStackOverflow,
    /// `pop` on an empty data stack.
    DataStackUnderflow,
    /// `push` on a full data stack.
    DataStackOverflow,
    /// `CAL` with fewer values on the stack than the effective argument
    /// count requires.
    ArgOutOfStack,
    /// `CAL` would grow the data stack past its capacity for locals.
    VarOutOfStack,
    /// `CAL` would grow the data stack past its capacity for return
    /// values.
    ReturnOutOfStack,
    /// `RET` observed a frame geometry that does not match the
    /// descriptor it was called with.
    DataStackSmashed,
    /// `pc` is at or past the end of `code`.
    PcOverrun,
    /// `CAL` named a function index outside the function table.
    ExeNoFunction,
    /// `CAL` named a built-in index outside the host built-ins table.
    BuiltinNoFunction,
    /// `LDV`/`STV` named a variable index outside the current frame's
    /// locals window.
    NoVariable,
    /// `LDC` named a constant index outside the constant table.
    NoConstant,
    /// A variadic `CAL`'s popped size was negative, or pushed the
    /// effective argument count past 255.
    VariadicSize,
}

impl core::fmt::Display for PvmError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MainReturn => write!(f, "main returned"),
            Self::CallStackOverflow => write!(f, "call stack overflow"),
            Self::DataStackUnderflow => write!(f, "data stack underflow"),
            Self::DataStackOverflow => write!(f, "data stack overflow"),
            Self::ArgOutOfStack => write!(f, "not enough values on stack for call arguments"),
            Self::VarOutOfStack => write!(f, "not enough stack headroom for callee locals"),
            Self::ReturnOutOfStack => write!(f, "not enough stack headroom for callee returns"),
            Self::DataStackSmashed => write!(f, "stack frame geometry corrupted on return"),
            Self::PcOverrun => write!(f, "program counter past end of code"),
            Self::ExeNoFunction => write!(f, "function index out of range"),
            Self::BuiltinNoFunction => write!(f, "built-in index out of range"),
            Self::NoVariable => write!(f, "variable index out of range for current frame"),
            Self::NoConstant => write!(f, "constant index out of range"),
            Self::VariadicSize => write!(f, "invalid variadic argument count"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PvmError {}
