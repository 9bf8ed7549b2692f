use super::Builtins;
use crate::vm::{CALL_STACK_CAP, DATA_STACK_CAP, Vm};

struct Empty;

impl Builtins<DATA_STACK_CAP, CALL_STACK_CAP> for Empty {
    fn len(&self) -> usize {
        0
    }

    fn call(
        &self,
        _index: u16,
        _vm: &mut Vm<DATA_STACK_CAP, CALL_STACK_CAP>,
        _start: usize,
        _argc: u8,
    ) {
    }
}

struct Single;

impl Builtins<DATA_STACK_CAP, CALL_STACK_CAP> for Single {
    fn len(&self) -> usize {
        1
    }

    fn call(
        &self,
        _index: u16,
        _vm: &mut Vm<DATA_STACK_CAP, CALL_STACK_CAP>,
        _start: usize,
        _argc: u8,
    ) {
    }
}

#[test]
fn default_is_empty_follows_len_when_zero() {
    assert!(Empty.is_empty());
}

#[test]
fn default_is_empty_is_false_when_len_is_nonzero() {
    assert!(!Single.is_empty());
}
