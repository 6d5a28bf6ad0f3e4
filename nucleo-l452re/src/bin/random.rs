//! Show 32-bit random numbers on LD2, one bit at a time, least significant
//! bit first. The LED is lit for a 1 and dark for a 0.
//!
//! To flash:
//!
//!     $ cargo embed --release --bin random

#![no_main]
#![no_std]
#![cfg(target_arch = "arm")]

use cortex_m_rt::entry;
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::rng::Read;
use panic_persist as _;
use stm32l4xx_hal::delay::Delay;
use stm32l4xx_hal::pac;
use stm32l4xx_hal::prelude::*;

use nucleo_common::bits::BitPattern;
use nucleo_common::leds::StatusLed;
use nucleo_l452re::board;

/// Time every bit is shown.
const BIT_MS: u32 = 100;

#[entry]
fn main() -> ! {
    let cp = cortex_m::Peripherals::take().expect("Core peripherals already taken");
    let dp = pac::Peripherals::take().expect("Device peripherals already taken");

    // The RNG kernel clock comes from HSI48
    let mut flash = dp.FLASH.constrain();
    let mut rcc = dp.RCC.constrain();
    let mut pwr = dp.PWR.constrain(&mut rcc.apb1r1);
    let clocks = board::clock_setup(rcc.cfgr, &mut flash.acr, &mut pwr, true);

    let mut gpioa = dp.GPIOA.split(&mut rcc.ahb2);
    let mut ld2 = StatusLed::new(
        gpioa
            .pa5
            .into_push_pull_output(&mut gpioa.moder, &mut gpioa.otyper),
    );

    let mut delay = Delay::new(cp.SYST, clocks);
    let mut rng = dp.RNG.enable(&mut rcc.ahb2, clocks);

    let mut word = [0u8; 4];
    loop {
        // On seed and clock errors the bytes not read keep their previous
        // value
        rng.read(&mut word).ok();

        for bit in BitPattern::new(u32::from_le_bytes(word)) {
            ld2.set(bit);
            delay.delay_ms(BIT_MS);
        }
    }
}
