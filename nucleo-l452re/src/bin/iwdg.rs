//! Independent watchdog demo.
//!
//! LD2 blinks 8 times after every reset and ends up lit. From then on the
//! watchdog is only fed while B1 is held, so releasing B1 for longer than
//! the timeout resets the device and the blink sequence starts again.
//!
//! To flash:
//!
//!     $ cargo embed --release --bin iwdg

#![no_main]
#![no_std]
#![cfg(target_arch = "arm")]

use cortex_m_rt::entry;
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::watchdog::{Watchdog, WatchdogEnable};
use fugit::MillisDurationU32;
use panic_persist as _;
use stm32l4xx_hal::delay::Delay;
use stm32l4xx_hal::pac;
use stm32l4xx_hal::prelude::*;
use stm32l4xx_hal::watchdog::IndependentWatchdog;

use nucleo_common::button::Button;
use nucleo_common::leds::StatusLed;
use nucleo_l452re::board;

/// Watchdog timeout.
const WATCHDOG_TIMEOUT_MS: u32 = 4096;

/// Number of LED toggles after reset. Even, so the LED ends up lit.
const RESET_BLINKS: usize = 8;
const RESET_BLINK_MS: u32 = 200;

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

    // Reset indicator
    ld2.enable();
    for _ in 0..RESET_BLINKS {
        delay.delay_ms(RESET_BLINK_MS);
        ld2.toggle();
    }

    let mut watchdog = IndependentWatchdog::new(dp.IWDG);
    watchdog.start(MillisDurationU32::millis(WATCHDOG_TIMEOUT_MS));

    ld2.enable();
    loop {
        if b1.is_pressed() {
            watchdog.feed();
        }
    }
}
