//! Let LD2 fade in and out by sweeping the TIM2 compare value up and down.
//!
//! To flash:
//!
//!     $ cargo embed --release --bin pwm1

#![no_main]
#![no_std]
#![cfg(target_arch = "arm")]

use cortex_m_rt::entry;
use embedded_hal::blocking::delay::DelayMs;
use panic_persist as _;
use stm32l4xx_hal::delay::Delay;
use stm32l4xx_hal::pac;
use stm32l4xx_hal::prelude::*;

use nucleo_common::ramp::TriangleRamp;
use nucleo_l452re::board;
use nucleo_l452re::pwm::Tim2Pwm;

/// Time between two steps of the ramp.
const STEP_MS: u32 = 10;

#[entry]
fn main() -> ! {
    let cp = cortex_m::Peripherals::take().expect("Core peripherals already taken");
    let dp = pac::Peripherals::take().expect("Device peripherals already taken");

    let mut flash = dp.FLASH.constrain();
    let mut rcc = dp.RCC.constrain();
    let mut pwr = dp.PWR.constrain(&mut rcc.apb1r1);
    let clocks = board::clock_setup(rcc.cfgr, &mut flash.acr, &mut pwr, false);

    let mut gpioa = dp.GPIOA.split(&mut rcc.ahb2);
    let ld2 = gpioa
        .pa5
        .into_alternate(&mut gpioa.moder, &mut gpioa.otyper, &mut gpioa.afrl);

    let mut ramp = TriangleRamp::new();
    let mut pwm = Tim2Pwm::new(dp.TIM2, ld2, ramp.next_duty());
    let mut delay = Delay::new(cp.SYST, clocks);

    loop {
        delay.delay_ms(STEP_MS);
        pwm.set_compare(ramp.next_duty());
    }
}
