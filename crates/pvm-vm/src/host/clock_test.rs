use super::{Clock, StdClock};

struct FixedClock(u32);

impl Clock for FixedClock {
    fn now_ms(&self) -> u32 {
        self.0
    }
}

#[test]
fn std_clock_is_non_decreasing() {
    let clock = StdClock::new();
    let a = clock.now_ms();
    let b = clock.now_ms();
    assert!(b >= a);
}

#[test]
fn std_clock_default_starts_a_fresh_origin() {
    let clock = StdClock::default();
    assert!(clock.now_ms() < 1000);
}

#[test]
fn a_custom_clock_implementation_reports_its_fixed_value() {
    let clock = FixedClock(12345);
    assert_eq!(clock.now_ms(), 12345);
}
