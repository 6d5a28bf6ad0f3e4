//! Stream an ever deeper zoom into the Mandelbrot set to the virtual COM
//! port (115200 8N1) as ASCII art. LD2 toggles with every frame.
//!
//! To flash:
//!
//!     $ cargo embed --release --bin mandelbrot

#![no_main]
#![no_std]
#![cfg(target_arch = "arm")]

use cortex_m_rt::entry;
use panic_persist as _;
use stm32l4xx_hal::pac;
use stm32l4xx_hal::prelude::*;

use nucleo_common::leds::StatusLed;
use nucleo_common::mandelbrot::View;
use nucleo_common::serial::{send_blocking, write_banner, write_panic_report, LineWriter};
use nucleo_l452re::board;

const FIRMWARE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry]
fn main() -> ! {
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
            "mandelbrot",
            board::BOARD_NAME,
            FIRMWARE_VERSION,
        )
        .ok();
    }

    // Check whether we just woke up after a panic
    if let Some(msg) = panic_persist::get_panic_message_utf8() {
        write_panic_report(&mut LineWriter::new(&mut console), msg).ok();
    }

    let mut view = View::new();
    loop {
        ld2.toggle();
        for byte in view.frame() {
            send_blocking(&mut console, byte).ok();
        }
        view.advance();
    }
}
