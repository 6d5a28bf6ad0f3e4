//! LED dimming with TIM2 channel 1.
//!
//! The counter runs up from 0 to 255 on the undivided core clock. Channel 1
//! is in PWM mode 2, so the output is low while the counter is below the
//! compare value and high afterwards. A larger compare value therefore makes
//! LD2 darker.

use stm32l4xx_hal::pac;

use nucleo_common::ramp::PWM_PERIOD;

use crate::board::Ld2Pwm;

/// OC1M field of CCMR1 (output mode). Bit 16 is the fourth mode bit.
const OC1M_MASK: u32 = (0b111 << 4) | (1 << 16);
const OC1M_PWM_MODE_2: u32 = 0b111 << 4;

/// CC1E bit of CCER.
const CC1E: u32 = 1;

/// CCMR1 value with channel 1 switched to PWM mode 2. Other fields are kept.
fn ccmr1_pwm_mode_2(ccmr1: u32) -> u32 {
    (ccmr1 & !OC1M_MASK) | OC1M_PWM_MODE_2
}

/// Limit a compare value to the counter period.
///
/// A compare value of [`PWM_PERIOD`] is above the auto-reload value, so the
/// output never goes active and the LED is off.
fn clamp_compare(value: u16) -> u32 {
    u32::from(value.min(PWM_PERIOD))
}

pub struct Tim2Pwm {
    tim2: pac::TIM2,
    pin: Ld2Pwm,
}

impl Tim2Pwm {
    /// Take ownership of TIM2 and the LED pin and start the counter with the
    /// given compare value.
    pub fn new(tim2: pac::TIM2, pin: Ld2Pwm, compare: u16) -> Self {
        // The HAL owns the RCC after `constrain`, only touch the TIM2 bits
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb1enr1.modify(|_, w| w.tim2en().set_bit());
        rcc.apb1rstr1.modify(|_, w| w.tim2rst().set_bit());
        rcc.apb1rstr1.modify(|_, w| w.tim2rst().clear_bit());

        // Edge aligned, counting up, no clock division, stopped
        tim2.cr1.write(|w| unsafe { w.bits(0) });
        tim2.psc.write(|w| unsafe { w.bits(0) });
        tim2.arr
            .write(|w| unsafe { w.bits(u32::from(PWM_PERIOD - 1)) });

        tim2.ccmr1_output()
            .modify(|r, w| unsafe { w.bits(ccmr1_pwm_mode_2(r.bits())) });
        tim2.ccer.modify(|r, w| unsafe { w.bits(r.bits() | CC1E) });

        let mut pwm = Self { tim2, pin };
        pwm.set_compare(compare);

        // Load PSC and ARR, then start counting
        pwm.tim2.egr.write(|w| w.ug().set_bit());
        pwm.tim2.cr1.modify(|_, w| w.cen().set_bit());

        pwm
    }

    /// Set the compare value of channel 1. Values above 256 are clamped.
    pub fn set_compare(&mut self, value: u16) {
        self.tim2
            .ccr1
            .write(|w| unsafe { w.bits(clamp_compare(value)) });
    }

    pub fn free(self) -> (pac::TIM2, Ld2Pwm) {
        (self.tim2, self.pin)
    }
}
