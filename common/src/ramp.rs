//! PWM duty cycle generators.
//!
//! Both PWM demos run the timer with a period of [`PWM_PERIOD`] ticks and
//! channel 1 in PWM mode 2, so the output is active while the counter is at
//! or above the compare value. Larger compare values mean a dimmer LED.

/// Timer period in ticks (`ARR = PWM_PERIOD - 1`).
pub const PWM_PERIOD: u16 = 256;

/// Compare value change per ramp step.
pub const PWM_STEP: u16 = 8;

/// Largest compare value produced by the triangle ramp.
const RAMP_MAX: u16 = PWM_PERIOD - 1;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Direction {
    Rising,
    Falling,
}

/// Triangle wave between 0 and 255.
///
/// The ramp starts at 0 heading down, so the very first step clamps to 0 and
/// turns around: `0, 8, 16, …, 248, 255, 247, …, 15, 7, 0, 8, …`.
#[derive(Debug, Clone)]
pub struct TriangleRamp {
    value: u16,
    direction: Direction,
}

impl TriangleRamp {
    pub fn new() -> Self {
        Self {
            value: 0,
            direction: Direction::Falling,
        }
    }

    /// Advance one step and return the new compare value.
    pub fn next_duty(&mut self) -> u16 {
        match self.direction {
            Direction::Falling => {
                if self.value <= PWM_STEP {
                    self.value = 0;
                    self.direction = Direction::Rising;
                } else {
                    self.value -= PWM_STEP;
                }
            }
            Direction::Rising => {
                if self.value + PWM_STEP >= PWM_PERIOD {
                    self.value = RAMP_MAX;
                    self.direction = Direction::Falling;
                } else {
                    self.value += PWM_STEP;
                }
            }
        }
        self.value
    }
}

impl Default for TriangleRamp {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for TriangleRamp {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        Some(self.next_duty())
    }
}

/// Highest brightness level accepted by [`BrightnessLevel`].
pub const MAX_LEVEL: u8 = 8;

/// Stepped brightness control driven by `+` and `-` on the console.
///
/// In PWM mode 2 a lower level means a brighter LED, so `+` lowers the level
/// and `-` raises it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BrightnessLevel {
    level: u8,
}

impl BrightnessLevel {
    /// Start slightly dimmed.
    pub const fn new() -> Self {
        Self { level: 6 }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// React to a received console byte. Bytes other than `+` and `-` leave
    /// the level unchanged.
    pub fn apply(&mut self, byte: u8) {
        match byte {
            b'+' => self.level = self.level.saturating_sub(1),
            b'-' if self.level < MAX_LEVEL => self.level += 1,
            _ => {}
        }
    }

    /// Compare register value for the current level.
    pub fn compare_value(&self) -> u16 {
        u16::from(self.level) << 5
    }

    /// Console feedback: the level as digit followed by a space.
    pub fn echo(&self) -> [u8; 2] {
        [b'0' + (self.level & 0x0F), b' ']
    }
}

impl Default for BrightnessLevel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn test_ramp_start() {
        let head: Vec<u16> = TriangleRamp::new().take(4).collect();
        assert_eq!(head, vec![0, 8, 16, 24]);
    }

    #[test]
    fn test_ramp_reflects_at_bounds() {
        let values: Vec<u16> = TriangleRamp::new().take(70).collect();
        assert_eq!(&values[30..35], &[240, 248, 255, 247, 239]);
        // 255, 247, …, 7 is 32 values, then the ramp bottoms out
        assert_eq!(values[32 + 31], 7);
        assert_eq!(values[32 + 32], 0);
        assert_eq!(values[32 + 33], 8);
    }

    #[test]
    fn test_ramp_steps_and_range() {
        let values: Vec<u16> = TriangleRamp::new().take(1000).collect();
        for pair in values.windows(2) {
            let (v, next) = (pair[0], pair[1]);
            assert!(next <= RAMP_MAX);
            let delta = if next > v { next - v } else { v - next };
            let reflection = next == 0 || next == RAMP_MAX || v == RAMP_MAX;
            if reflection {
                assert!(delta <= PWM_STEP, "{} -> {}", v, next);
            } else {
                assert_eq!(delta, PWM_STEP, "{} -> {}", v, next);
            }
        }
    }

    #[test]
    fn test_ramp_is_periodic() {
        let values: Vec<u16> = TriangleRamp::new().take(200).collect();
        // One full period: 0 → 255 → 0 takes 64 steps
        assert_eq!(&values[1..65], &values[65..129]);
    }

    #[test]
    fn test_brightness_initial() {
        let level = BrightnessLevel::new();
        assert_eq!(level.level(), 6);
        assert_eq!(level.compare_value(), 192);
        assert_eq!(&level.echo(), b"6 ");
    }

    #[rstest]
    #[case(b"+", 5)]
    #[case(b"-", 7)]
    #[case(b"x", 6)]
    #[case(b"++++++++++", 0)]
    #[case(b"----------", 8)]
    #[case(b"--+", 7)]
    fn test_brightness_apply(#[case] input: &[u8], #[case] expected: u8) {
        let mut level = BrightnessLevel::new();
        for byte in input {
            level.apply(*byte);
        }
        assert_eq!(level.level(), expected);
        assert_eq!(level.compare_value(), u16::from(expected) * 32);
    }

    #[test]
    fn test_brightness_max_compare_value() {
        let mut level = BrightnessLevel::new();
        level.apply(b'-');
        level.apply(b'-');
        assert_eq!(level.compare_value(), PWM_PERIOD);
        assert_eq!(&level.echo(), b"8 ");
    }
}
