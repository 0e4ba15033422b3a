use crate::error::{HuffmanError, Result};
use crate::symbol::{Symbol, BYTE_ALPHABET};

/// Alphabet and stream-termination settings shared by every facet of the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Number of natural symbols, `0..alphabet_size`.
    pub alphabet_size: usize,
    /// Symbol marking the end of an encoded stream, if any.
    pub end_of_data: Option<Symbol>,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            alphabet_size: BYTE_ALPHABET,
            end_of_data: None,
        }
    }
}

impl CodecConfig {
    /// Byte alphabet, no sentinel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the natural alphabet size; a sentinel at the old boundary moves with it.
    pub fn with_alphabet_size(mut self, alphabet_size: usize) -> Self {
        if let Some(sentinel) = self.end_of_data {
            if sentinel as usize == self.alphabet_size {
                self.end_of_data = Some(alphabet_size as Symbol);
            }
        }
        self.alphabet_size = alphabet_size;
        self
    }

    /// Reserves the sentinel just past the natural alphabet.
    pub fn with_end_of_data(mut self) -> Self {
        self.end_of_data = Some(self.alphabet_size as Symbol);
        self
    }

    /// Drops the sentinel.
    pub fn without_end_of_data(mut self) -> Self {
        self.end_of_data = None;
        self
    }

    /// Number of addressable symbol slots, sentinel included.
    pub fn symbol_space(&self) -> usize {
        match self.end_of_data {
            Some(sentinel) => self.alphabet_size.max(sentinel as usize + 1),
            None => self.alphabet_size,
        }
    }

    pub fn is_end_of_data(&self, symbol: Symbol) -> bool {
        self.end_of_data == Some(symbol)
    }

    pub(crate) fn check_symbol(&self, symbol: Symbol) -> Result<()> {
        if (symbol as usize) < self.symbol_space() {
            Ok(())
        } else {
            Err(HuffmanError::SymbolOutOfRange {
                symbol,
                alphabet_size: self.symbol_space(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_byte_alphabet() {
        let config = CodecConfig::default();
        assert_eq!(config.alphabet_size, 256);
        assert_eq!(config.end_of_data, None);
        assert_eq!(config.symbol_space(), 256);
    }

    #[test]
    fn test_sentinel_sits_outside_alphabet() {
        let config = CodecConfig::new().with_end_of_data();
        assert_eq!(config.end_of_data, Some(256));
        assert_eq!(config.symbol_space(), 257);
        assert!(config.is_end_of_data(256));
        assert!(config.check_symbol(256).is_ok());
        assert!(config.check_symbol(257).is_err());
    }

    #[test]
    fn test_resizing_moves_sentinel() {
        let config = CodecConfig::new().with_end_of_data().with_alphabet_size(4);
        assert_eq!(config.end_of_data, Some(4));
        assert_eq!(config.symbol_space(), 5);
    }

    #[test]
    fn test_out_of_range() {
        let config = CodecConfig::new().with_alphabet_size(3);
        assert!(matches!(
            config.check_symbol(3),
            Err(HuffmanError::SymbolOutOfRange {
                symbol: 3,
                alphabet_size: 3
            })
        ));
    }
}
