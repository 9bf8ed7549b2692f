// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

use super::*;

#[test]
fn display_is_non_empty_for_every_variant() {
    let variants = [
        PvmError::MainReturn,
        PvmError::CallStackOverflow,
        PvmError::DataStackUnderflow,
        PvmError::DataStackOverflow,
        PvmError::ArgOutOfStack,
        PvmError::VarOutOfStack,
        PvmError::ReturnOutOfStack,
        PvmError::DataStackSmashed,
        PvmError::PcOverrun,
        PvmError::ExeNoFunction,
        PvmError::BuiltinNoFunction,
        PvmError::NoVariable,
        PvmError::NoConstant,
        PvmError::VariadicSize,
    ];
    for variant in variants {
        assert!(!variant.to_string().is_empty());
    }
}

#[test]
fn errors_are_distinguishable() {
    assert_ne!(PvmError::MainReturn, PvmError::PcOverrun);
    assert_eq!(PvmError::NoConstant, PvmError::NoConstant);
}
