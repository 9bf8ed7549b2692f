use super::{NullTrace, Trace};

#[test]
fn null_trace_hooks_are_all_no_ops() {
    let mut trace = NullTrace;
    trace.begin(0);
    trace.end(&[1, 2, 3]);
    trace.pc_change(1);
    trace.push(5);
    trace.load("LDV", 0, 5);
    trace.store(0, 5);
    trace.call(-1, 0);
    trace.ret(0, 0, 0);
    trace.pop(1);
    trace.sleep(10);
}

#[test]
fn null_trace_is_default_constructible_and_copy() {
    let a = NullTrace;
    let b = a;
    let _: NullTrace = NullTrace::default();
    let _ = (a, b);
}
