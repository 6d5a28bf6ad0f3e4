//! Millisecond tick counter and deadlines.
//!
//! The counter is incremented from the SysTick exception and wraps around
//! after 2³² ms (about 49.7 days). Deadlines compare the elapsed time using
//! wrapping arithmetic, so a sleep spanning the wraparound still ends on time
//! as long as it is shorter than 2³¹ ms.

/// SysTick interrupt rate.
pub const TICK_HZ: u32 = 1_000;

/// Number of milliseconds since reset.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Millis(u32);

impl Millis {
    pub const fn new() -> Self {
        Self(0)
    }

    /// Count one tick. Called once per SysTick interrupt.
    pub fn tick(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    pub fn now(&self) -> u32 {
        self.0
    }
}

/// Point in time the main loop waits for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Deadline {
    start: u32,
    delay_ms: u32,
}

impl Deadline {
    /// Deadline `delay_ms` milliseconds after `now`.
    pub fn after(now: u32, delay_ms: u32) -> Self {
        Self {
            start: now,
            delay_ms,
        }
    }

    pub fn is_reached(&self, now: u32) -> bool {
        now.wrapping_sub(self.start) >= self.delay_ms
    }
}

/// SysTick reload value for a [`TICK_HZ`] interrupt rate at the given core
/// clock. The counter runs from the reload value down to zero, hence the -1.
pub fn systick_reload(core_hz: u32) -> u32 {
    core_hz / TICK_HZ - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn test_tick() {
        let mut millis = Millis::new();
        for _ in 0..5 {
            millis.tick();
        }
        assert_eq!(millis.now(), 5);
    }

    #[test]
    fn test_tick_wraps() {
        let mut millis = Millis(u32::MAX);
        millis.tick();
        assert_eq!(millis.now(), 0);
    }

    #[rstest]
    #[case(0, 100, 0, false)]
    #[case(0, 100, 99, false)]
    #[case(0, 100, 100, true)]
    #[case(0, 100, 150, true)]
    #[case(u32::MAX - 10, 100, u32::MAX, false)]
    #[case(u32::MAX - 10, 100, 88, false)]
    #[case(u32::MAX - 10, 100, 89, true)]
    #[case(42, 0, 42, true)]
    fn test_deadline(
        #[case] start: u32,
        #[case] delay: u32,
        #[case] now: u32,
        #[case] expected: bool,
    ) {
        assert_eq!(Deadline::after(start, delay).is_reached(now), expected);
    }

    #[rstest]
    #[case(80_000_000, 79_999)]
    #[case(16_000_000, 15_999)]
    #[case(4_000_000, 3_999)]
    fn test_systick_reload(#[case] core_hz: u32, #[case] expected: u32) {
        assert_eq!(systick_reload(core_hz), expected);
    }
}
