//! One byte echo latch for the interrupt driven USART demo.
//!
//! The receive half of the interrupt handler stores a byte and arms the
//! transmit half. The transmit half fires once, optionally inverting the
//! ASCII case, and disarms. There is no queue: a byte received while the
//! previous one is still pending replaces it.

/// Byte transmitted if the transmit half runs before anything was received.
const INITIAL_BYTE: u8 = b'A';

#[derive(Debug, Clone)]
pub struct EchoLatch {
    pending: u8,
    armed: bool,
}

impl EchoLatch {
    pub const fn new() -> Self {
        Self {
            pending: INITIAL_BYTE,
            armed: false,
        }
    }

    /// Store a received byte and arm the transmit half.
    pub fn receive(&mut self, byte: u8) {
        self.pending = byte;
        self.armed = true;
    }

    /// Whether a byte waits for transmission. Mirrors the TXE interrupt
    /// enable bit.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Take the pending byte for transmission.
    ///
    /// With `invert_case` set, ASCII letters change case before they are
    /// handed out. Returns `None` if the latch is not armed.
    pub fn transmit(&mut self, invert_case: bool) -> Option<u8> {
        if !self.armed {
            return None;
        }
        if invert_case {
            self.pending = toggle_case(self.pending);
        }
        self.armed = false;
        Some(self.pending)
    }
}

impl Default for EchoLatch {
    fn default() -> Self {
        Self::new()
    }
}

/// Swap upper and lower case of an ASCII letter, return other bytes as is.
pub fn toggle_case(byte: u8) -> u8 {
    if byte.is_ascii_uppercase() {
        byte.to_ascii_lowercase()
    } else if byte.is_ascii_lowercase() {
        byte.to_ascii_uppercase()
    } else {
        byte
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(b'a', b'A')]
    #[case(b'Z', b'z')]
    #[case(b'7', b'7')]
    #[case(b'@', b'@')]
    #[case(b'[', b'[')]
    #[case(0xE4, 0xE4)]
    fn test_toggle_case(#[case] input: u8, #[case] expected: u8) {
        assert_eq!(toggle_case(input), expected);
    }

    #[test]
    fn test_idle_latch_does_not_transmit() {
        let mut latch = EchoLatch::new();
        assert!(!latch.is_armed());
        assert_eq!(latch.transmit(false), None);
        assert_eq!(latch.transmit(true), None);
    }

    #[test]
    fn test_echo_once() {
        let mut latch = EchoLatch::new();
        latch.receive(b'x');
        assert!(latch.is_armed());
        assert_eq!(latch.transmit(false), Some(b'x'));
        assert!(!latch.is_armed());
        assert_eq!(latch.transmit(false), None);
    }

    #[test]
    fn test_echo_inverts_case_while_button_held() {
        let mut latch = EchoLatch::new();
        latch.receive(b'x');
        assert_eq!(latch.transmit(true), Some(b'X'));
        latch.receive(b'Q');
        assert_eq!(latch.transmit(true), Some(b'q'));
        latch.receive(b'1');
        assert_eq!(latch.transmit(true), Some(b'1'));
    }

    #[test]
    fn test_second_byte_overwrites_pending() {
        let mut latch = EchoLatch::new();
        latch.receive(b'a');
        latch.receive(b'b');
        assert_eq!(latch.transmit(false), Some(b'b'));
        assert_eq!(latch.transmit(false), None);
    }
}
