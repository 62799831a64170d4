//! This module runs whole passes over a stream. The first bits of every stream
//! are a header that is copied verbatim and used to fill the window of the
//! predictor. Every bit after the header goes through the predictor.

use crate::bitstream::{BitReader, BitSink, BitSource, BitWriter};
use crate::predictor::FollowerPredictor;
use crate::stats::StreakSnapshot;
use crate::{Context, Decoder, Encoder};
use std::io;

/// The number of bits at the start of the stream that are copied verbatim.
pub const HEADER_BITS: usize = 9;

/// The direction of a pass.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    Forward,
    Reverse,
}

/// The counters that were collected during one pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PassReport {
    /// The number of bits that were written, including the header.
    pub bits: u64,
    /// The original bits.
    pub raw: StreakSnapshot,
    /// The predicted bits. Empty after a reverse pass.
    pub predictions: StreakSnapshot,
    /// The prediction hits. Empty after a reverse pass.
    pub correctness: StreakSnapshot,
}

impl PassReport {
    fn from_predictor(bits: u64, predictor: &FollowerPredictor) -> Self {
        Self {
            bits,
            raw: predictor.raw_stats(),
            predictions: predictor.prediction_stats(),
            correctness: predictor.correct_prediction_stats(),
        }
    }

    /// Returns the fraction of predicted bits that were predicted correctly.
    pub fn accuracy(&self) -> f64 {
        let c = &self.correctness;
        if c.total == 0 {
            return 0.0;
        }
        c.ones() as f64 / c.total as f64
    }
}

/// Run a pass over 'input' in the direction 'dir', writing the result into
/// 'output'. The output is flushed when the input runs out.
pub fn run_pass<S: BitSource, W: BitSink>(
    dir: Direction,
    input: &mut S,
    output: &mut W,
) -> io::Result<PassReport> {
    let mut predictor = FollowerPredictor::new();
    let mut written: u64 = 0;

    // Copy the header. The first bit is not fed into the window; the next eight
    // bits fill it.
    for i in 0..HEADER_BITS {
        let bit = match input.read_bit()? {
            Some(bit) => bit,
            None => {
                output.flush()?;
                log::debug!("Short stream: copied {} bits verbatim", written);
                return Ok(PassReport::from_predictor(written, &predictor));
            }
        };
        output.write_bit(bit)?;
        written += 1;
        if i > 0 {
            predictor.seed(bit);
        }
    }

    while let Some(bit) = input.read_bit()? {
        let out = match dir {
            Direction::Forward => predictor.encode_bit(bit),
            Direction::Reverse => predictor.decode_bit(bit),
        };
        output.write_bit(out)?;
        written += 1;
    }

    output.flush()?;
    log::debug!("{:?} pass over {} bits", dir, written);
    Ok(PassReport::from_predictor(written, &predictor))
}

/// Replace every bit after the header with a flag that says if it was
/// predicted correctly.
pub fn encode_stream<S: BitSource, W: BitSink>(
    input: &mut S,
    output: &mut W,
) -> io::Result<PassReport> {
    run_pass(Direction::Forward, input, output)
}

/// Reconstruct the stream that was transformed by 'encode_stream'.
pub fn decode_stream<S: BitSource, W: BitSink>(
    input: &mut S,
    output: &mut W,
) -> io::Result<PassReport> {
    run_pass(Direction::Reverse, input, output)
}

/// Transforms a byte buffer. The output has the same length as the input.
pub struct FollowerEncoder<'a> {
    /// The original input.
    input: &'a [u8],
    /// The output stream.
    output: &'a mut Vec<u8>,
    ctx: Context,
    /// The counters of the last pass.
    report: PassReport,
}

impl<'a> FollowerEncoder<'a> {
    pub fn report(&self) -> &PassReport {
        &self.report
    }
}

impl<'a> Encoder<'a> for FollowerEncoder<'a> {
    fn new(input: &'a [u8], output: &'a mut Vec<u8>, ctx: Context) -> Self {
        FollowerEncoder {
            input,
            output,
            ctx,
            report: PassReport::default(),
        }
    }

    fn encode(&mut self) -> io::Result<usize> {
        let start = self.output.len();
        let mut reader =
            BitReader::with_block_size(self.input, self.ctx.block_size());
        let mut writer = BitWriter::new(&mut *self.output);
        self.report = encode_stream(&mut reader, &mut writer)?;
        Ok(self.output.len() - start)
    }
}

/// Restores a byte buffer that was transformed by 'FollowerEncoder'.
pub struct FollowerDecoder<'a> {
    /// The transformed input.
    input: &'a [u8],
    /// The output stream.
    output: &'a mut Vec<u8>,
    ctx: Context,
    /// The counters of the last pass.
    report: PassReport,
}

impl<'a> FollowerDecoder<'a> {
    pub fn report(&self) -> &PassReport {
        &self.report
    }
}

impl<'a> Decoder<'a> for FollowerDecoder<'a> {
    fn new(input: &'a [u8], output: &'a mut Vec<u8>, ctx: Context) -> Self {
        FollowerDecoder {
            input,
            output,
            ctx,
            report: PassReport::default(),
        }
    }

    fn decode(&mut self) -> io::Result<(usize, usize)> {
        let start = self.output.len();
        let mut reader =
            BitReader::with_block_size(self.input, self.ctx.block_size());
        let mut writer = BitWriter::new(&mut *self.output);
        self.report = decode_stream(&mut reader, &mut writer)?;
        Ok((self.input.len(), self.output.len() - start))
    }
}
