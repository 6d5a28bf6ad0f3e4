//! Rolling character stream used by the USART demos.
//!
//! The stream cycles through ten characters starting at a base character
//! (`'0'` for digits, `'A'` for letters) and asks for a line break after
//! every [`LINE_WIDTH`] data characters.

/// Number of data characters per output line.
pub const LINE_WIDTH: u8 = 60;

/// Number of distinct characters in one cycle.
const CYCLE_LEN: u8 = 10;

/// First character of the cycled range.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Base {
    Digits,
    Letters,
}

impl Base {
    fn first(self) -> u8 {
        match self {
            Self::Digits => b'0',
            Self::Letters => b'A',
        }
    }
}

/// One emitted data character.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Step {
    /// The data byte to transmit.
    pub byte: u8,
    /// Whether a CRLF must follow the byte.
    pub line_break: bool,
}

#[derive(Debug, Clone)]
pub struct CharCycler {
    base: Base,
    offset: u8,
    column: u8,
}

impl CharCycler {
    /// Start a digit stream (`0123456789012…`).
    pub fn digits() -> Self {
        Self {
            base: Base::Digits,
            offset: 0,
            column: 0,
        }
    }

    pub fn base(&self) -> Base {
        self.base
    }

    /// Switch the base according to a received byte: letters after an ASCII
    /// letter, digits after anything else.
    ///
    /// Offset and column are kept, the stream just continues in the other
    /// range.
    pub fn observe(&mut self, received: u8) {
        self.base = if received.is_ascii_alphabetic() {
            Base::Letters
        } else {
            Base::Digits
        };
    }

    /// Produce the next data character.
    pub fn advance(&mut self) -> Step {
        let byte = self.base.first() + self.offset;
        self.offset = if self.offset == CYCLE_LEN - 1 {
            0
        } else {
            self.offset + 1
        };

        self.column += 1;
        let line_break = self.column == LINE_WIDTH;
        if line_break {
            self.column = 0;
        }

        Step { byte, line_break }
    }
}

impl Default for CharCycler {
    fn default() -> Self {
        Self::digits()
    }
}
