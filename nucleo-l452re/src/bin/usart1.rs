//! Print `0123456789` over and over to the virtual COM port (115200 8N1),
//! with a line break after every 60 characters. LD2 toggles with every
//! character.
//!
//! To flash:
//!
//!     $ cargo embed --release --bin usart1

#![no_main]
#![no_std]
#![cfg(target_arch = "arm")]

use cortex_m_rt::entry;
use embedded_hal::blocking::delay::DelayMs;
use panic_persist as _;
use stm32l4xx_hal::delay::Delay;
use stm32l4xx_hal::pac;
use stm32l4xx_hal::prelude::*;

use nucleo_common::cycler::CharCycler;
use nucleo_common::leds::StatusLed;
use nucleo_common::serial::{
    send_blocking, send_bytes, write_banner, write_panic_report, LineWriter,
};
use nucleo_l452re::board;

const FIRMWARE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Pause after every character.
const CHAR_PAUSE_MS: u32 = 50;

#[entry]
fn main() -> ! {
    let cp = cortex_m::Peripherals::take().expect("Core peripherals already taken");
    let dp = pac::Peripherals::take().expect("Device peripherals already taken");

    let mut flash = dp.FLASH.constrain();
    let mut rcc = dp.RCC.constrain();
    let mut pwr = dp.PWR.constrain(&mut rcc.apb1r1);
    let clocks = board::clock_setup(rcc.cfgr, &mut flash.acr, &mut pwr, false);

    let mut gpioa = dp.GPIOA.split(&mut rcc.ahb2);

    let mut ld2 = StatusLed::new(
        gpioa
            .pa5
            .into_push_pull_output(&mut gpioa.moder, &mut gpioa.otyper),
    );

    let tx = gpioa
        .pa2
        .into_alternate(&mut gpioa.moder, &mut gpioa.otyper, &mut gpioa.afrl);
    let rx = gpioa
        .pa3
        .into_alternate(&mut gpioa.moder, &mut gpioa.otyper, &mut gpioa.afrl);
    let mut console = board::console(dp.USART2, tx, rx, clocks, &mut rcc.apb1r1);

    if cfg!(feature = "dev") {
        write_banner(
            &mut LineWriter::new(&mut console),
            "usart1",
            board::BOARD_NAME,
            FIRMWARE_VERSION,
        )
        .ok();
    }

    // Check whether we just woke up after a panic
    if let Some(msg) = panic_persist::get_panic_message_utf8() {
        write_panic_report(&mut LineWriter::new(&mut console), msg).ok();
    }

    let mut delay = Delay::new(cp.SYST, clocks);

    let mut cycler = CharCycler::digits();
    loop {
        ld2.toggle();

        let step = cycler.advance();
        send_blocking(&mut console, step.byte).ok();
        if step.line_break {
            send_bytes(&mut console, b"\r\n").ok();
        }

        delay.delay_ms(CHAR_PAUSE_MS);
    }
}
