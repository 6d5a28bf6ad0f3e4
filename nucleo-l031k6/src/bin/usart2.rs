//! Print a repeating sequence of characters to the virtual COM port
//! (115200 8N1) and blink LD3 with every character.
//!
//! The sequence consists of digits. Sending a letter switches it to letters,
//! sending anything else switches it back to digits. A line break is
//! inserted after every 60 characters.

#![no_main]
#![no_std]
#![cfg(target_arch = "arm")]

use cortex_m_rt::entry;
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::serial::Read;
use panic_persist as _;
use stm32l0xx_hal::pac;
use stm32l0xx_hal::prelude::*;

use nucleo_common::cycler::CharCycler;
use nucleo_common::leds::StatusLed;
use nucleo_common::serial::{
    send_blocking, send_bytes, write_banner, write_panic_report, LineWriter,
};
use nucleo_l031k6::board;
use nucleo_l031k6::delay::Tim2Delay;

const FIRMWARE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Pause after every character.
const CHAR_PAUSE_MS: u16 = 100;

#[entry]
fn main() -> ! {
    let mut dp = pac::Peripherals::take().expect("Device peripherals already taken");

    let mut delay = Tim2Delay::new(dp.TIM2, &mut dp.RCC);
    let mut rcc = board::clock_setup(dp.RCC);

    let gpioa = dp.GPIOA.split(&mut rcc);
    let gpiob = dp.GPIOB.split(&mut rcc);

    let mut ld3 = StatusLed::new(gpiob.pb3.into_push_pull_output());

    let mut console = dp
        .USART2
        .usart(gpioa.pa2, gpioa.pa15, board::console_config(), &mut rcc)
        .expect("Invalid console configuration");

    if cfg!(feature = "dev") {
        write_banner(
            &mut LineWriter::new(&mut console),
            "usart2",
            board::BOARD_NAME,
            FIRMWARE_VERSION,
        )
        .ok();
    }

    // Check whether we just woke up after a panic
    if let Some(msg) = panic_persist::get_panic_message_utf8() {
        write_panic_report(&mut LineWriter::new(&mut console), msg).ok();
    }

    let mut cycler = CharCycler::digits();
    loop {
        ld3.toggle();

        // Switch between digits and letters if something was received
        if let Ok(received) = console.read() {
            cycler.observe(received);
        }

        let step = cycler.advance();
        send_blocking(&mut console, step.byte).ok();
        if step.line_break {
            send_bytes(&mut console, b"\r\n").ok();
        }

        delay.delay_ms(CHAR_PAUSE_MS);
    }
}
