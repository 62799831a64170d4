//! Readers and writers that move single bits in and out of byte streams. Bits
//! are packed most-significant-bit first within each byte.

use std::io::{self, ErrorKind, Read, Write};

/// The default number of bytes that a reader pulls from its source at once.
pub const DEFAULT_BLOCK_SIZE: usize = 1024;

/// A source of bits. Returns Ok(None) at the end of the stream.
pub trait BitSource {
    fn read_bit(&mut self) -> io::Result<Option<bool>>;
}

/// A sink for bits. Partial bytes are only written by 'flush'.
pub trait BitSink {
    fn write_bit(&mut self, bit: bool) -> io::Result<()>;

    /// Write out any buffered bits, padded with zeros to a whole byte.
    fn flush(&mut self) -> io::Result<()>;
}

/// A block of bytes that was read from the source, and the position of the
/// next byte to hand out.
#[derive(Debug)]
pub struct ReadCursor {
    buf: Vec<u8>,
    pos: usize,
    len: usize,
}

impl ReadCursor {
    pub fn new(block_size: usize) -> Self {
        Self {
            buf: vec![0; block_size.max(1)],
            pos: 0,
            len: 0,
        }
    }

    /// Returns the next byte, refilling the block from 'input' when it runs
    /// out. Returns None when the input is exhausted.
    pub fn next_byte<R: Read>(
        &mut self,
        input: &mut R,
    ) -> io::Result<Option<u8>> {
        if self.pos >= self.len {
            self.len = loop {
                match input.read(&mut self.buf) {
                    Ok(n) => break n,
                    Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                }
            };
            self.pos = 0;
            if self.len == 0 {
                return Ok(None);
            }
        }

        let byte = self.buf[self.pos];
        self.pos += 1;
        Ok(Some(byte))
    }
}

/// Reads bits from a byte stream.
pub struct BitReader<R: Read> {
    input: R,
    cursor: ReadCursor,
    /// The byte that is being unpacked.
    byte: u8,
    /// The number of bits of 'byte' that were handed out (8 means empty).
    used: u32,
}

impl<R: Read> BitReader<R> {
    pub fn new(input: R) -> Self {
        Self::with_block_size(input, DEFAULT_BLOCK_SIZE)
    }

    pub fn with_block_size(input: R, block_size: usize) -> Self {
        Self {
            input,
            cursor: ReadCursor::new(block_size),
            byte: 0,
            used: 8,
        }
    }
}

impl<R: Read> BitSource for BitReader<R> {
    fn read_bit(&mut self) -> io::Result<Option<bool>> {
        if self.used == 8 {
            match self.cursor.next_byte(&mut self.input)? {
                Some(byte) => self.byte = byte,
                None => return Ok(None),
            }
            self.used = 0;
        }
        let bit = (self.byte >> (7 - self.used)) & 1 == 1;
        self.used += 1;
        Ok(Some(bit))
    }
}

/// Writes bits into a byte stream.
pub struct BitWriter<W: Write> {
    output: W,
    /// The byte that is being filled, from the top bit down.
    byte: u8,
    /// The number of bits in 'byte'.
    len: u32,
}

impl<W: Write> BitWriter<W> {
    pub fn new(output: W) -> Self {
        Self {
            output,
            byte: 0,
            len: 0,
        }
    }

    /// Hand the pending byte to the output. The pending state is cleared even
    /// if the write fails.
    fn write_byte(&mut self) -> io::Result<()> {
        let byte = std::mem::take(&mut self.byte);
        self.len = 0;
        self.output.write_all(&[byte])
    }
}

impl<W: Write> BitSink for BitWriter<W> {
    fn write_bit(&mut self, bit: bool) -> io::Result<()> {
        self.byte |= u8::from(bit) << (7 - self.len);
        self.len += 1;
        if self.len == 8 {
            self.write_byte()?;
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.len > 0 {
            self.write_byte()?;
        }
        self.output.flush()
    }
}

/// Hands out the bits of a slice of bools.
pub struct BitSlice<'a> {
    bits: &'a [bool],
    pos: usize,
}

impl<'a> BitSlice<'a> {
    pub fn new(bits: &'a [bool]) -> Self {
        Self { bits, pos: 0 }
    }
}

impl<'a> BitSource for BitSlice<'a> {
    fn read_bit(&mut self) -> io::Result<Option<bool>> {
        let bit = self.bits.get(self.pos).copied();
        self.pos += usize::from(bit.is_some());
        Ok(bit)
    }
}

impl BitSink for Vec<bool> {
    fn write_bit(&mut self, bit: bool) -> io::Result<()> {
        self.push(bit);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
