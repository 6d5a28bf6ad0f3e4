//! Blink the LD3 LED.
//!
//! To flash:
//!
//!     $ cargo embed --release --bin blink

#![no_main]
#![no_std]
#![cfg(target_arch = "arm")]

use cortex_m_rt::entry;
use embedded_hal::blocking::delay::DelayMs;
use panic_persist as _;
use stm32l0xx_hal::pac;
use stm32l0xx_hal::prelude::*;

use nucleo_common::leds::StatusLed;
use nucleo_l031k6::board;
use nucleo_l031k6::delay::Tim2Delay;

/// Half period of the blink.
const BLINK_MS: u16 = 100;

#[entry]
fn main() -> ! {
    let mut dp = pac::Peripherals::take().expect("Device peripherals already taken");

    let mut delay = Tim2Delay::new(dp.TIM2, &mut dp.RCC);
    let mut rcc = board::clock_setup(dp.RCC);

    let gpiob = dp.GPIOB.split(&mut rcc);
    let mut ld3 = StatusLed::new(gpiob.pb3.into_push_pull_output());

    loop {
        ld3.toggle();
        delay.delay_ms(BLINK_MS);
    }
}
