//! Reading the user button.

use core::convert::Infallible;

use embedded_hal::digital::v2::InputPin;

use crate::infallible;

/// User push button B1.
///
/// The Nucleo-64 button pulls the pin low while pressed and an external
/// pull-up keeps it high otherwise, so the pin is used as floating input.
pub struct Button<P> {
    pin: P,
}

impl<P> Button<P>
where
    P: InputPin<Error = Infallible>,
{
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Return whether the button is currently held down.
    pub fn is_pressed(&self) -> bool {
        infallible(self.pin.is_low())
    }

    /// Return whether the button is currently released.
    pub fn is_released(&self) -> bool {
        !self.is_pressed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use core::cell::Cell;

    struct FakeInput {
        high: Cell<bool>,
    }

    impl InputPin for FakeInput {
        type Error = Infallible;

        fn is_high(&self) -> Result<bool, Self::Error> {
            Ok(self.high.get())
        }

        fn is_low(&self) -> Result<bool, Self::Error> {
            Ok(!self.high.get())
        }
    }

    #[test]
    fn test_active_low() {
        let button = Button::new(FakeInput {
            high: Cell::new(true),
        });
        assert!(button.is_released());
        assert!(!button.is_pressed());

        button.pin.high.set(false);
        assert!(button.is_pressed());
        assert!(!button.is_released());
    }
}
