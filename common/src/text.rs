//! Fixed console messages.

/// Message sent by the greeting demo, selected by the user button.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Greeting {
    Hello,
    Goodbye,
}

impl Greeting {
    /// `Goodbye` while the button is held, `Hello` otherwise.
    pub fn for_button(pressed: bool) -> Self {
        if pressed {
            Self::Goodbye
        } else {
            Self::Hello
        }
    }

    /// Message text with a bare `'\n'` line ending. Use
    /// [`crate::serial::send_text`] to put it on the wire.
    pub fn text(&self) -> &'static str {
        match self {
            Self::Hello => "Hello, World!\n",
            Self::Goodbye => "Goodbye, World!\n",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_button() {
        assert_eq!(Greeting::for_button(false), Greeting::Hello);
        assert_eq!(Greeting::for_button(true), Greeting::Goodbye);
        assert_eq!(Greeting::Hello.text(), "Hello, World!\n");
        assert_eq!(Greeting::Goodbye.text(), "Goodbye, World!\n");
    }
}
