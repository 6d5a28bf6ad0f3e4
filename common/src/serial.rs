//! Blocking console output on top of `embedded_hal::serial::Write`.

use core::fmt;

use embedded_hal::serial::Write;
use nb::block;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Line settings of a serial port.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SerialSettings {
    pub baudrate: u32,
    pub data_bits: u8,
    pub parity: Parity,
    pub stop_bits: u8,
}

impl SerialSettings {
    /// ST-LINK virtual COM port settings used by every demo: 115200 8N1, no
    /// flow control.
    pub const CONSOLE: SerialSettings = SerialSettings {
        baudrate: 115_200,
        data_bits: 8,
        parity: Parity::None,
        stop_bits: 1,
    };
}

impl fmt::Display for SerialSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parity = match self.parity {
            Parity::None => 'N',
            Parity::Even => 'E',
            Parity::Odd => 'O',
        };
        write!(
            f,
            "{}/{}{}{}",
            self.baudrate, self.data_bits, parity, self.stop_bits
        )
    }
}

/// Send a single byte, waiting until the transmit register is free.
pub fn send_blocking<W: Write<u8>>(serial: &mut W, byte: u8) -> Result<(), W::Error> {
    block!(serial.write(byte))
}

/// Send raw bytes.
pub fn send_bytes<W: Write<u8>>(serial: &mut W, bytes: &[u8]) -> Result<(), W::Error> {
    for byte in bytes {
        send_blocking(serial, *byte)?;
    }
    Ok(())
}

/// Send text, putting a `'\r'` in front of every `'\n'` so that terminal
/// emulators start the next line at the left margin.
pub fn send_text<W: Write<u8>>(serial: &mut W, text: &str) -> Result<(), W::Error> {
    for byte in text.bytes() {
        if byte == b'\n' {
            send_blocking(serial, b'\r')?;
        }
        send_blocking(serial, byte)?;
    }
    Ok(())
}

/// `core::fmt::Write` adapter with the line ending translation of
/// [`send_text`].
pub struct LineWriter<'a, W> {
    serial: &'a mut W,
}

impl<'a, W: Write<u8>> LineWriter<'a, W> {
    pub fn new(serial: &'a mut W) -> Self {
        Self { serial }
    }
}

impl<'a, W: Write<u8>> fmt::Write for LineWriter<'a, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        send_text(self.serial, s).map_err(|_| fmt::Error)
    }
}

/// Print the boot banner of a demo program.
pub fn write_banner(
    out: &mut impl fmt::Write,
    program: &str,
    board: &str,
    version: &str,
) -> fmt::Result {
    writeln!(
        out,
        "Booting: {} on {} (firmware={}, console={})",
        program,
        board,
        version,
        SerialSettings::CONSOLE
    )
}

/// Print a panic message that survived the last reset.
pub fn write_panic_report(out: &mut impl fmt::Write, msg: &str) -> fmt::Result {
    writeln!(out, "=== FOUND PANIC ===")?;
    writeln!(out, "{}", msg.trim_end())?;
    writeln!(out, "==== END PANIC ====")
}

#[cfg(test)]
mod tests {
    use super::*;

    use core::convert::Infallible;
    use core::fmt::Write as _;

    /// Transmitter that is busy every other call and records what was sent.
    #[derive(Default)]
    struct FakeSerial {
        sent: Vec<u8>,
        busy: bool,
    }

    impl Write<u8> for FakeSerial {
        type Error = Infallible;

        fn write(&mut self, word: u8) -> nb::Result<(), Self::Error> {
            self.busy = !self.busy;
            if self.busy {
                return Err(nb::Error::WouldBlock);
            }
            self.sent.push(word);
            Ok(())
        }

        fn flush(&mut self) -> nb::Result<(), Self::Error> {
            Ok(())
        }
    }

    /// Transmitter that fails on the first byte.
    struct BrokenSerial;

    impl Write<u8> for BrokenSerial {
        type Error = ();

        fn write(&mut self, _word: u8) -> nb::Result<(), Self::Error> {
            Err(nb::Error::Other(()))
        }

        fn flush(&mut self) -> nb::Result<(), Self::Error> {
            Ok(())
        }
    }

    #[test]
    fn test_console_settings() {
        assert_eq!(SerialSettings::CONSOLE.baudrate, 115_200);
        assert_eq!(format!("{}", SerialSettings::CONSOLE), "115200/8N1");
    }

    #[test]
    fn test_send_blocking_waits() {
        let mut serial = FakeSerial::default();
        send_blocking(&mut serial, b'x').unwrap();
        send_bytes(&mut serial, b"yz").unwrap();
        assert_eq!(serial.sent, b"xyz".to_vec());
    }

    #[test]
    fn test_send_text_translates_newlines() {
        let mut serial = FakeSerial::default();
        send_text(&mut serial, "Hello, World!\n").unwrap();
        assert_eq!(serial.sent, b"Hello, World!\r\n".to_vec());
    }

    #[test]
    fn test_send_propagates_errors() {
        assert_eq!(send_bytes(&mut BrokenSerial, b"abc"), Err(()));
        assert_eq!(send_text(&mut BrokenSerial, "\n"), Err(()));
    }

    #[test]
    fn test_line_writer() {
        let mut serial = FakeSerial::default();
        writeln!(LineWriter::new(&mut serial), "level {}", 6).unwrap();
        assert_eq!(serial.sent, b"level 6\r\n".to_vec());

        assert!(write!(LineWriter::new(&mut BrokenSerial), "x").is_err());
    }

    #[test]
    fn test_banner() {
        let mut out = String::new();
        write_banner(&mut out, "usart1", "NUCLEO-L452RE", "0.1.0").unwrap();
        assert_eq!(
            out,
            "Booting: usart1 on NUCLEO-L452RE (firmware=0.1.0, console=115200/8N1)\n"
        );
    }

    #[test]
    fn test_panic_report() {
        let mut out = String::new();
        write_panic_report(&mut out, "panicked at 'boom'\n\n").unwrap();
        assert_eq!(
            out,
            "=== FOUND PANIC ===\npanicked at 'boom'\n==== END PANIC ====\n"
        );
    }
}
