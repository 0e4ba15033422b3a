//! Bit-level collaborators of the translator and encoder.
//!
//! Bits are packed least-significant first within each byte.

use crate::error::{HuffmanError, Result};
use crate::symbol::{Bit, Symbol, BYTE_ALPHABET};
use std::collections::VecDeque;
use std::io::{self, BufReader, ErrorKind, Read, Write};

/// A stream of single bits.
pub trait BitSource {
    /// Whether at least one more bit is available. Consumes nothing.
    fn has_next_bit(&mut self) -> Result<bool>;

    /// Consumes the next bit. Fails if none is available.
    fn next_bit(&mut self) -> Result<Bit>;
}

/// A destination for single bits.
pub trait BitSink {
    fn write_bit(&mut self, bit: Bit) -> Result<()>;

    /// Flushes any partially filled unit.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// A destination for decoded symbols.
pub trait SymbolSink {
    fn write_symbol(&mut self, symbol: Symbol) -> Result<()>;

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

fn exhausted() -> HuffmanError {
    HuffmanError::Io(io::Error::new(
        ErrorKind::UnexpectedEof,
        "no more bits available",
    ))
}

/// Reads bits from a byte stream, one byte of lookahead at a time.
pub struct BitReader<R: Read> {
    source: BufReader<R>,
    current: u8,
    remaining: u8,
}

impl<R: Read> BitReader<R> {
    /// Wraps `source` in a buffered reader.
    pub fn new(source: R) -> Self {
        Self {
            source: BufReader::new(source),
            current: 0,
            remaining: 0,
        }
    }

    /// Loads the next byte if the current one is used up.
    fn fill(&mut self) -> Result<bool> {
        if self.remaining > 0 {
            return Ok(true);
        }
        let mut buf = [0u8; 1];
        loop {
            match self.source.read(&mut buf) {
                Ok(0) => return Ok(false),
                Ok(_) => {
                    self.current = buf[0];
                    self.remaining = 8;
                    return Ok(true);
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

impl<R: Read> BitSource for BitReader<R> {
    fn has_next_bit(&mut self) -> Result<bool> {
        self.fill()
    }

    fn next_bit(&mut self) -> Result<Bit> {
        if !self.fill()? {
            return Err(exhausted());
        }
        let bit = (self.current >> (8 - self.remaining)) & 0x01;
        self.remaining -= 1;
        Ok(bit)
    }
}

/// Packs bits into bytes written to `sink`.
pub struct BitWriter<W: Write> {
    sink: W,
    current: u8,
    filled: u8,
}

impl<W: Write> BitWriter<W> {
    /// Starts with an empty pending byte.
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            current: 0,
            filled: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write> BitSink for BitWriter<W> {
    fn write_bit(&mut self, bit: Bit) -> Result<()> {
        if bit != 0 {
            self.current |= 1 << self.filled;
        }
        self.filled += 1;
        if self.filled == 8 {
            self.sink.write_all(&[self.current])?;
            self.current = 0;
            self.filled = 0;
        }
        Ok(())
    }

    /// Pads the last byte with zeros and flushes.
    fn finish(&mut self) -> Result<()> {
        if self.filled > 0 {
            self.sink.write_all(&[self.current])?;
            self.current = 0;
            self.filled = 0;
        }
        self.sink.flush()?;
        Ok(())
    }
}

impl BitSource for VecDeque<Bit> {
    fn has_next_bit(&mut self) -> Result<bool> {
        Ok(!self.is_empty())
    }

    fn next_bit(&mut self) -> Result<Bit> {
        self.pop_front().ok_or_else(exhausted)
    }
}

impl BitSink for Vec<Bit> {
    fn write_bit(&mut self, bit: Bit) -> Result<()> {
        self.push(bit);
        Ok(())
    }
}

impl SymbolSink for Vec<Symbol> {
    fn write_symbol(&mut self, symbol: Symbol) -> Result<()> {
        self.push(symbol);
        Ok(())
    }
}

/// Writes each symbol as one raw byte.
pub struct ByteSink<W: Write> {
    sink: W,
}

impl<W: Write> ByteSink<W> {
    /// Writes decoded symbols to `sink`.
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write> SymbolSink for ByteSink<W> {
    fn write_symbol(&mut self, symbol: Symbol) -> Result<()> {
        let byte = u8::try_from(symbol).map_err(|_| HuffmanError::SymbolOutOfRange {
            symbol,
            alphabet_size: BYTE_ALPHABET,
        })?;
        self.sink.write_all(&[byte])?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.sink.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_read_from_one_byte() {
        let s: [u8; 1] = [0b10101101];
        let mut reader = BitReader::new(&s[..]);

        let bits: Vec<Bit> = (0..8).map(|_| reader.next_bit().unwrap()).collect();
        assert_eq!(bits, vec![1, 0, 1, 1, 0, 1, 0, 1]);
        assert!(!reader.has_next_bit().unwrap());
    }

    #[test]
    fn can_read_from_more_bytes() {
        let s: [u8; 2] = [0b10101101, 0b10101010];
        let mut reader = BitReader::new(&s[..]);

        for _ in 0..8 {
            reader.next_bit().unwrap();
        }

        let bits: Vec<Bit> = (0..8).map(|_| reader.next_bit().unwrap()).collect();
        assert_eq!(bits, vec![0, 1, 0, 1, 0, 1, 0, 1]);
    }

    #[test]
    fn has_next_bit_does_not_consume() {
        let s: [u8; 1] = [0b00000001];
        let mut reader = BitReader::new(&s[..]);

        assert!(reader.has_next_bit().unwrap());
        assert!(reader.has_next_bit().unwrap());
        assert_eq!(reader.next_bit().unwrap(), 1);
    }

    #[test]
    fn read_empty() {
        let s: [u8; 0] = [];
        let mut reader = BitReader::new(&s[..]);
        assert!(!reader.has_next_bit().unwrap());
        assert!(matches!(reader.next_bit(), Err(HuffmanError::Io(_))));
    }

    #[test]
    fn writer_packs_and_pads() {
        let mut writer = BitWriter::new(Vec::new());
        for bit in [1, 0, 1, 1, 0, 1, 0, 1, 1, 1] {
            writer.write_bit(bit).unwrap();
        }
        writer.finish().unwrap();

        assert_eq!(writer.into_inner(), vec![0b10101101, 0b00000011]);
    }

    #[test]
    fn writer_then_reader() {
        let bits = [0, 1, 1, 0, 0, 0, 1, 0, 1];
        let mut writer = BitWriter::new(Vec::new());
        for bit in bits {
            writer.write_bit(bit).unwrap();
        }
        writer.finish().unwrap();
        let bytes = writer.into_inner();

        let mut reader = BitReader::new(&bytes[..]);
        let read: Vec<Bit> = (0..bits.len()).map(|_| reader.next_bit().unwrap()).collect();
        assert_eq!(read, bits);
    }

    #[test]
    fn memory_bits() {
        let mut source: VecDeque<Bit> = VecDeque::from(vec![1, 0]);
        assert!(source.has_next_bit().unwrap());
        assert_eq!(source.next_bit().unwrap(), 1);
        assert_eq!(source.next_bit().unwrap(), 0);
        assert!(!source.has_next_bit().unwrap());
        assert!(source.next_bit().is_err());
    }

    #[test]
    fn byte_sink_rejects_wide_symbols() {
        let mut sink = ByteSink::new(Vec::new());
        sink.write_symbol(104).unwrap();
        sink.write_symbol(105).unwrap();
        assert!(matches!(
            sink.write_symbol(256),
            Err(HuffmanError::SymbolOutOfRange { symbol: 256, .. })
        ));
        assert_eq!(sink.into_inner(), b"hi".to_vec());
    }
}
