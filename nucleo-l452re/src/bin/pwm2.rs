//! Set the brightness of LD2 from the virtual COM port (115200 8N1).
//!
//! Send `+` for a brighter and `-` for a darker LED. The current level
//! (0 is brightest, 8 is off) is echoed after every received character.
//!
//! To flash:
//!
//!     $ cargo embed --release --bin pwm2

#![no_main]
#![no_std]
#![cfg(target_arch = "arm")]

use cortex_m_rt::entry;
use embedded_hal::serial::Read;
use panic_persist as _;
use stm32l4xx_hal::pac;
use stm32l4xx_hal::prelude::*;

use nucleo_common::ramp::BrightnessLevel;
use nucleo_common::serial::{send_bytes, write_banner, write_panic_report, LineWriter};
use nucleo_l452re::board;
use nucleo_l452re::pwm::Tim2Pwm;

const FIRMWARE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry]
fn main() -> ! {
    let dp = pac::Peripherals::take().expect("Device peripherals already taken");

    let mut flash = dp.FLASH.constrain();
    let mut rcc = dp.RCC.constrain();
    let mut pwr = dp.PWR.constrain(&mut rcc.apb1r1);
    let clocks = board::clock_setup(rcc.cfgr, &mut flash.acr, &mut pwr, false);

    let mut gpioa = dp.GPIOA.split(&mut rcc.ahb2);

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
            "pwm2",
            board::BOARD_NAME,
            FIRMWARE_VERSION,
        )
        .ok();
    }

    // Check whether we just woke up after a panic
    if let Some(msg) = panic_persist::get_panic_message_utf8() {
        write_panic_report(&mut LineWriter::new(&mut console), msg).ok();
    }

    let ld2 = gpioa
        .pa5
        .into_alternate(&mut gpioa.moder, &mut gpioa.otyper, &mut gpioa.afrl);

    let mut brightness = BrightnessLevel::new();
    let mut pwm = Tim2Pwm::new(dp.TIM2, ld2, brightness.compare_value());
    send_bytes(&mut console, &brightness.echo()).ok();

    loop {
        // Overrun and framing errors are dropped
        if let Ok(received) = console.read() {
            brightness.apply(received);
            pwm.set_compare(brightness.compare_value());
            send_bytes(&mut console, &brightness.echo()).ok();
        }
    }
}
