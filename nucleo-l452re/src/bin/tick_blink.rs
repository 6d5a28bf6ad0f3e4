//! Blink LD2 with a 100 ms half period, timed by a 1 kHz SysTick.
//!
//! To flash:
//!
//!     $ cargo embed --release --bin tick_blink

#![no_main]
#![no_std]
#![cfg(target_arch = "arm")]

use panic_persist as _;

#[rtic::app(device = stm32l4xx_hal::pac, peripherals = true)]
mod app {
    use cortex_m::peripheral::syst::SystClkSource;
    use stm32l4xx_hal::prelude::*;

    use nucleo_common::leds::StatusLed;
    use nucleo_common::ticks::{systick_reload, Deadline, Millis};
    use nucleo_l452re::board;

    /// Half period of the blink.
    const BLINK_MS: u32 = 100;

    #[shared]
    struct Shared {
        millis: Millis,
    }

    #[local]
    struct Local {
        ld2: StatusLed<board::Ld2>,
    }

    #[init]
    fn init(ctx: init::Context) -> (Shared, Local, init::Monotonics) {
        let dp = ctx.device;
        let mut syst = ctx.core.SYST;

        let mut flash = dp.FLASH.constrain();
        let mut rcc = dp.RCC.constrain();
        let mut pwr = dp.PWR.constrain(&mut rcc.apb1r1);
        let _clocks = board::clock_setup(rcc.cfgr, &mut flash.acr, &mut pwr, false);

        let mut gpioa = dp.GPIOA.split(&mut rcc.ahb2);
        let ld2 = StatusLed::new(
            gpioa
                .pa5
                .into_push_pull_output(&mut gpioa.moder, &mut gpioa.otyper),
        );

        // 1 ms tick on the core clock
        syst.set_clock_source(SystClkSource::Core);
        syst.set_reload(systick_reload(board::CORE_CLOCK_HZ));
        syst.clear_current();
        syst.enable_counter();
        syst.enable_interrupt();

        (
            Shared {
                millis: Millis::new(),
            },
            Local { ld2 },
            init::Monotonics(),
        )
    }

    #[idle(shared = [millis], local = [ld2])]
    fn idle(mut ctx: idle::Context) -> ! {
        loop {
            ctx.local.ld2.toggle();

            let deadline = Deadline::after(ctx.shared.millis.lock(|m| m.now()), BLINK_MS);
            while !deadline.is_reached(ctx.shared.millis.lock(|m| m.now())) {
                cortex_m::asm::nop();
            }
        }
    }

    #[task(binds = SysTick, shared = [millis])]
    fn systick(mut ctx: systick::Context) {
        ctx.shared.millis.lock(|m| m.tick());
    }
}
