//! Bit-by-bit view of a random word.

/// Iterator over the 32 bits of a word, least significant bit first.
#[derive(Debug, Clone)]
pub struct BitPattern {
    word: u32,
    index: u8,
}

impl BitPattern {
    pub fn new(word: u32) -> Self {
        Self { word, index: 0 }
    }
}

impl Iterator for BitPattern {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if u32::from(self.index) >= u32::BITS {
            return None;
        }
        let bit = self.word & (1 << self.index) != 0;
        self.index += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (u32::BITS - u32::from(self.index)) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BitPattern {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lsb_first() {
        let bits: Vec<bool> = BitPattern::new(0b1101).take(5).collect();
        assert_eq!(bits, vec![true, false, true, true, false]);
    }

    #[test]
    fn test_yields_32_bits() {
        assert_eq!(BitPattern::new(0).len(), 32);
        assert_eq!(BitPattern::new(u32::MAX).filter(|b| *b).count(), 32);
        assert_eq!(BitPattern::new(0x8000_0000).position(|b| b), Some(31));
    }

    #[test]
    fn test_reassemble() {
        let word = 0xDEAD_BEEF;
        let rebuilt = BitPattern::new(word)
            .enumerate()
            .fold(0u32, |acc, (i, bit)| acc | (u32::from(bit) << i));
        assert_eq!(rebuilt, word);
    }
}
