//! Controlling the user LED.

use core::convert::Infallible;

use embedded_hal::digital::v2::OutputPin;

use crate::infallible;

/// A single push-pull user LED (LD2 on the L452RE, LD3 on the L031K6).
///
/// The lit state is tracked in software, so toggling does not depend on the
/// HAL implementing `ToggleableOutputPin`.
pub struct StatusLed<P> {
    pin: P,
    lit: bool,
}

impl<P> StatusLed<P>
where
    P: OutputPin<Error = Infallible>,
{
    /// Wrap the pin and switch the LED off.
    pub fn new(pin: P) -> Self {
        let mut led = Self { pin, lit: true };
        led.disable();
        led
    }

    pub fn enable(&mut self) {
        infallible(self.pin.set_high());
        self.lit = true;
    }

    pub fn disable(&mut self) {
        infallible(self.pin.set_low());
        self.lit = false;
    }

    pub fn set(&mut self, lit: bool) {
        if lit {
            self.enable();
        } else {
            self.disable();
        }
    }

    pub fn toggle(&mut self) {
        self.set(!self.lit);
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }

    /// Release the pin.
    pub fn free(self) -> P {
        self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Output pin that records every level written to it.
    #[derive(Default)]
    struct FakePin {
        levels: Vec<bool>,
    }

    impl OutputPin for FakePin {
        type Error = Infallible;

        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.levels.push(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.levels.push(true);
            Ok(())
        }
    }

    #[test]
    fn test_new_switches_off() {
        let led = StatusLed::new(FakePin::default());
        assert!(!led.is_lit());
        assert_eq!(led.free().levels, vec![false]);
    }

    #[test]
    fn test_toggle_alternates() {
        let mut led = StatusLed::new(FakePin::default());
        led.toggle();
        led.toggle();
        led.toggle();
        assert!(led.is_lit());
        assert_eq!(led.free().levels, vec![false, true, false, true]);
    }

    #[test]
    fn test_set() {
        let mut led = StatusLed::new(FakePin::default());
        led.set(true);
        led.set(true);
        led.set(false);
        assert_eq!(led.free().levels, vec![false, true, true, false]);
    }
}
