//! Pin map and clock configuration of the NUCLEO-L031K6.
//!
//! ```text
//! LD3        PB3    green user LED (push-pull, active high)
//! VCP_TX     PA2    USART2_TX, ST-LINK virtual COM port
//! VCP_RX     PA15   USART2_RX, ST-LINK virtual COM port
//! ```

use embedded_time::rate::Baud;
use stm32l0xx_hal::gpio::{gpiob::PB3, Output, PushPull};
use stm32l0xx_hal::prelude::*;
use stm32l0xx_hal::rcc::{self, Rcc};
use stm32l0xx_hal::{pac, serial};

use nucleo_common::serial::SerialSettings;

pub const BOARD_NAME: &str = "NUCLEO-L031K6";

/// Core clock after [`clock_setup`].
pub const CORE_CLOCK_HZ: u32 = 16_000_000;

/// User LED LD3.
pub type Ld3 = PB3<Output<PushPull>>;

/// Clock configuration. Use HSI at 16 MHz.
pub fn clock_setup(rcc: pac::RCC) -> Rcc {
    rcc.freeze(rcc::Config::hsi16())
}

/// USART configuration of the virtual COM port.
pub fn console_config() -> serial::Config {
    let settings = SerialSettings::CONSOLE;
    serial::Config {
        baudrate: Baud(settings.baudrate),
        wordlength: serial::WordLength::DataBits8,
        parity: serial::Parity::ParityNone,
        stopbits: serial::StopBits::STOP1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_config() {
        let config = console_config();
        assert_eq!(config.baudrate, Baud(115_200_u32));
        assert!(matches!(config.wordlength, serial::WordLength::DataBits8));
        assert!(matches!(config.parity, serial::Parity::ParityNone));
        assert!(matches!(config.stopbits, serial::StopBits::STOP1));
    }
}
