//! Delay implementation using TIM2 in one-pulse mode.
//!
//! The timer is prescaled to a 1 µs or 1 ms tick, loaded with the delay and
//! started. In one-pulse mode the counter stops at the next update event by
//! clearing the CEN bit, which is what we wait for. SYST stays free.

use core::cmp::max;

use embedded_hal::blocking::delay::{DelayMs, DelayUs};
use stm32l0xx_hal::pac;

use crate::board::CORE_CLOCK_HZ;

/// Prescaler register value for the given timer tick rate.
///
/// The counter clock is `f_core / (PSC + 1)`.
const fn prescaler(tick_hz: u32) -> u16 {
    (CORE_CLOCK_HZ / tick_hz - 1) as u16
}

const PSC_MICROS: u16 = prescaler(1_000_000);
const PSC_MILLIS: u16 = prescaler(1_000);

/// Auto-reload value for a delay of `ticks`. The update event fires on the
/// tick *after* ARR is reached, and ARR = 0 would never fire.
fn auto_reload(ticks: u16) -> u16 {
    max(1, ticks.saturating_sub(1))
}

pub struct Tim2Delay {
    tim2: pac::TIM2,
}

impl Tim2Delay {
    /// Take ownership of TIM2. Must be called before the RCC is frozen.
    pub fn new(tim2: pac::TIM2, rcc: &mut pac::RCC) -> Self {
        // Enable TIM2 in RCC
        rcc.apb1enr.modify(|_, w| w.tim2en().set_bit());

        // Reset timer
        rcc.apb1rstr.modify(|_, w| w.tim2rst().set_bit());
        rcc.apb1rstr.modify(|_, w| w.tim2rst().clear_bit());

        // One-pulse mode
        tim2.cr1.modify(|_, w| w.opm().set_bit());

        Self { tim2 }
    }

    pub fn free(self) -> pac::TIM2 {
        self.tim2
    }

    fn wait(&mut self, prescaler: u16, ticks: u16) {
        self.tim2.psc.write(|w| w.psc().bits(prescaler));
        self.tim2
            .arr
            .write(|w| unsafe { w.arr().bits(auto_reload(ticks)) });

        // Trigger an update event to load PSC and ARR right away
        self.tim2.egr.write(|w| w.ug().set_bit());

        self.tim2.cr1.modify(|_, w| w.cen().set_bit());
        while self.tim2.cr1.read().cen().bit_is_set() { /* wait */ }
    }
}

/// Delays shorter than a few µs are dominated by the register setup.
impl DelayUs<u16> for Tim2Delay {
    fn delay_us(&mut self, us: u16) {
        self.wait(PSC_MICROS, us);
    }
}

impl DelayMs<u16> for Tim2Delay {
    fn delay_ms(&mut self, ms: u16) {
        self.wait(PSC_MILLIS, ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn test_prescalers() {
        assert_eq!(PSC_MICROS, 15);
        assert_eq!(PSC_MILLIS, 15_999);
    }

    #[test]
    fn test_register_values_of_100_ms() {
        let psc: u16 = PSC_MILLIS;
        let arr: u16 = auto_reload(100);
        assert_eq!((psc, arr), (15_999, 99));
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(2, 1)]
    #[case(100, 99)]
    #[case(u16::MAX, u16::MAX - 1)]
    fn test_auto_reload(#[case] ticks: u16, #[case] expected: u16) {
        assert_eq!(auto_reload(ticks), expected);
    }
}
