//! Pin map and clock configuration of the NUCLEO-L452RE.
//!
//! ```text
//! LD2        PA5    green user LED (push-pull, active high), TIM2_CH1 on AF1
//! B1         PC13   blue user button (active low, external pull-up)
//! VCP_TX     PA2    USART2_TX on AF7, ST-LINK virtual COM port
//! VCP_RX     PA3    USART2_RX on AF7, ST-LINK virtual COM port
//! ```

use stm32l4xx_hal::flash::ACR;
use stm32l4xx_hal::gpio::{
    gpioa::{PA2, PA3, PA5},
    gpioc::PC13,
    Alternate, Floating, Input, Output, PushPull,
};
use stm32l4xx_hal::prelude::*;
use stm32l4xx_hal::pwr::Pwr;
use stm32l4xx_hal::rcc::{Clocks, APB1R1, CFGR};
use stm32l4xx_hal::serial::{self, Serial};
use stm32l4xx_hal::{pac, time};

use nucleo_common::serial::SerialSettings;

pub const BOARD_NAME: &str = "NUCLEO-L452RE";

/// Core clock after [`clock_setup`].
pub const CORE_CLOCK_HZ: u32 = 80_000_000;

/// User LED LD2 as GPIO.
pub type Ld2 = PA5<Output<PushPull>>;

/// User LED LD2 driven by TIM2_CH1.
pub type Ld2Pwm = PA5<Alternate<PushPull, 1>>;

/// User button B1.
pub type B1 = PC13<Input<Floating>>;

/// USART2 TX and RX pins of the virtual COM port.
pub type ConsoleTx = PA2<Alternate<PushPull, 7>>;
pub type ConsoleRx = PA3<Alternate<PushPull, 7>>;

/// USART2 on the virtual COM port.
pub type Console = Serial<pac::USART2, (ConsoleTx, ConsoleRx)>;

/// Set the core clock to 80 MHz.
///
/// The HSI48 oscillator is only needed as RNG kernel clock.
pub fn clock_setup(cfgr: CFGR, acr: &mut ACR, pwr: &mut Pwr, hsi48: bool) -> Clocks {
    cfgr.hsi48(hsi48)
        .sysclk(CORE_CLOCK_HZ.Hz())
        .pclk1(CORE_CLOCK_HZ.Hz())
        .pclk2(CORE_CLOCK_HZ.Hz())
        .freeze(acr, pwr)
}

/// USART configuration of the virtual COM port. The HAL defaults to 8N1
/// without flow control.
pub fn console_config() -> serial::Config {
    serial::Config::default().baudrate(time::Bps(SerialSettings::CONSOLE.baudrate))
}

/// Set up USART2 as console.
pub fn console(
    usart2: pac::USART2,
    tx: ConsoleTx,
    rx: ConsoleRx,
    clocks: Clocks,
    apb1r1: &mut APB1R1,
) -> Console {
    Serial::usart2(usart2, (tx, rx), console_config(), clocks, apb1r1)
}

/// Whether the console transmit data register can take the next byte.
///
/// Only reads the status register, so it is safe to call while the serial
/// port is owned by someone else.
pub fn console_tx_empty() -> bool {
    let usart2 = unsafe { &*pac::USART2::ptr() };
    usart2.isr.read().txe().bit_is_set()
}
