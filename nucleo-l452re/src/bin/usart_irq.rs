//! Interrupt driven echo on the virtual COM port (115200 8N1).
//!
//! Every received character toggles LD2 and is sent back. While B1 is held,
//! letters are echoed with inverted case. Only the latest character is kept,
//! so characters arriving faster than they can be echoed are lost.
//!
//! To flash:
//!
//!     $ cargo embed --release --bin usart_irq

#![no_main]
#![no_std]
#![cfg(target_arch = "arm")]

use panic_persist as _;

#[rtic::app(device = stm32l4xx_hal::pac, peripherals = true)]
mod app {
    use embedded_hal::serial::{Read, Write};
    use stm32l4xx_hal::prelude::*;
    use stm32l4xx_hal::serial::Event;

    use nucleo_common::button::Button;
    use nucleo_common::echo::EchoLatch;
    use nucleo_common::leds::StatusLed;
    use nucleo_common::serial::{write_banner, write_panic_report, LineWriter};
    use nucleo_l452re::board;

    const FIRMWARE_VERSION: &str = env!("CARGO_PKG_VERSION");

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        console: board::Console,
        ld2: StatusLed<board::Ld2>,
        b1: Button<board::B1>,
        latch: EchoLatch,
    }

    #[init]
    fn init(ctx: init::Context) -> (Shared, Local, init::Monotonics) {
        let dp = ctx.device;

        let mut flash = dp.FLASH.constrain();
        let mut rcc = dp.RCC.constrain();
        let mut pwr = dp.PWR.constrain(&mut rcc.apb1r1);
        let clocks = board::clock_setup(rcc.cfgr, &mut flash.acr, &mut pwr, false);

        let mut gpioa = dp.GPIOA.split(&mut rcc.ahb2);
        let mut gpioc = dp.GPIOC.split(&mut rcc.ahb2);

        let ld2 = StatusLed::new(
            gpioa
                .pa5
                .into_push_pull_output(&mut gpioa.moder, &mut gpioa.otyper),
        );
        let b1 = Button::new(
            gpioc
                .pc13
                .into_floating_input(&mut gpioc.moder, &mut gpioc.pupdr),
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
                "usart_irq",
                board::BOARD_NAME,
                FIRMWARE_VERSION,
            )
            .ok();
        }

        // Check whether we just woke up after a panic
        if let Some(msg) = panic_persist::get_panic_message_utf8() {
            write_panic_report(&mut LineWriter::new(&mut console), msg).ok();
        }

        // TXE is only enabled while a character is waiting to be echoed
        console.listen(Event::Rxne);

        (
            Shared {},
            Local {
                console,
                ld2,
                b1,
                latch: EchoLatch::new(),
            },
            init::Monotonics(),
        )
    }

    #[idle]
    fn idle(_: idle::Context) -> ! {
        loop {
            cortex_m::asm::nop();
        }
    }

    #[task(binds = USART2, local = [console, ld2, b1, latch])]
    fn usart2(ctx: usart2::Context) {
        let console = ctx.local.console;
        let latch = ctx.local.latch;

        // Reading clears RXNE, a pending overrun is dropped
        if let Ok(received) = console.read() {
            ctx.local.ld2.toggle();
            latch.receive(received);
            console.listen(Event::Txe);
        }

        if latch.is_armed() && board::console_tx_empty() {
            if let Some(byte) = latch.transmit(ctx.local.b1.is_pressed()) {
                console.write(byte).ok();
            }
            console.unlisten(Event::Txe);
        }
    }
}
