pub mod bitstream;
pub mod files;
pub mod history;
pub mod pipeline;
pub mod predictor;
pub mod stats;
pub mod utils;

use bitstream::DEFAULT_BLOCK_SIZE;
use std::io;

/// Stores information about the environment.
#[derive(Copy, Clone, Debug)]
pub struct Context {
    /// Specifies the number of bytes that are read from the input at once.
    block_size: usize,
}

impl Context {
    pub fn new(block_size: usize) -> Self {
        Self {
            block_size: block_size.max(1),
        }
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new(DEFAULT_BLOCK_SIZE)
    }
}

/// A trait that defines the interface for encoding buffers.
pub trait Encoder<'a> {
    /// Creates a new Encoder that reads from 'input' and writes into 'output',
    /// with the encoder context 'ctx'.
    fn new(input: &'a [u8], output: &'a mut Vec<u8>, ctx: Context) -> Self;

    /// Encode the whole input buffer and return the number of bytes that were
    /// written into the output stream.
    fn encode(&mut self) -> io::Result<usize>;
}

/// A trait that defines the interface for decoding buffers.
pub trait Decoder<'a> {
    /// Creates a new Decoder that reads from 'input' and writes into 'output'.
    fn new(input: &'a [u8], output: &'a mut Vec<u8>, ctx: Context) -> Self;

    /// Decode the buffer 'input', and return the number of input bytes that
    /// were consumed followed by the number of bytes written.
    fn decode(&mut self) -> io::Result<(usize, usize)>;
}
