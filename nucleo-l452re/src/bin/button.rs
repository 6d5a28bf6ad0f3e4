//! Blink LD2. The blink slows down while B1 is released and speeds up while
//! it is held.
//!
//! To flash:
//!
//!     $ cargo embed --release --bin button

#![no_main]
#![no_std]
#![cfg(target_arch = "arm")]

use cortex_m_rt::entry;
use embedded_hal::blocking::delay::DelayMs;
use panic_persist as _;
use stm32l4xx_hal::delay::Delay;
use stm32l4xx_hal::pac;
use stm32l4xx_hal::prelude::*;

use nucleo_common::button::Button;
use nucleo_common::leds::StatusLed;
use nucleo_l452re::board;

/// Delay after every toggle.
const BLINK_MS: u32 = 50;

/// Additional delay while B1 is released.
const RELEASED_EXTRA_MS: u32 = 100;

#[entry]
fn main() -> ! {
    let cp = cortex_m::Peripherals::take().expect("Core peripherals already taken");
    let dp = pac::Peripherals::take().expect("Device peripherals already taken");

    let mut flash = dp.FLASH.constrain();
    let mut rcc = dp.RCC.constrain();
    let mut pwr = dp.PWR.constrain(&mut rcc.apb1r1);
    let clocks = board::clock_setup(rcc.cfgr, &mut flash.acr, &mut pwr, false);

    let mut gpioa = dp.GPIOA.split(&mut rcc.ahb2);
    let mut gpioc = dp.GPIOC.split(&mut rcc.ahb2);

    let mut ld2 = StatusLed::new(
        gpioa
            .pa5
            .into_push_pull_output(&mut gpioa.moder, &mut gpioa.otyper),
    );
    let b1 = Button::new(
        gpioc
            .pc13
            .into_floating_input(&mut gpioc.moder, &mut gpioc.pupdr),
    );

    let mut delay = Delay::new(cp.SYST, clocks);

    loop {
        ld2.toggle();
        if b1.is_released() {
            delay.delay_ms(RELEASED_EXTRA_MS);
        }
        delay.delay_ms(BLINK_MS);
    }
}
