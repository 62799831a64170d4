//! A collection of utilities for handling bits and file names.

/// The extension of files that were transformed by the forward pass.
pub const FILE_EXTENSION: &str = ".fpt";

/// Conversions between packed bytes and unpacked bits.
pub mod bits {
    /// Unpack 'bytes' into bits, most significant bit first.
    pub fn from_bytes(bytes: &[u8]) -> Vec<bool> {
        let mut bits = Vec::with_capacity(bytes.len() * 8);
        for byte in bytes {
            for i in (0..8).rev() {
                bits.push((byte >> i) & 1 == 1);
            }
        }
        bits
    }

    /// Pack 'bits' into bytes, most significant bit first. The last byte is
    /// padded with zero bits.
    pub fn to_bytes(bits: &[bool]) -> Vec<u8> {
        bits.chunks(8)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .fold(0u8, |acc, (i, &b)| acc | (u8::from(b) << (7 - i)))
            })
            .collect()
    }

    /// Parse a string of '0' and '1' characters. Other characters are ignored,
    /// which allows grouping with spaces or underscores.
    pub fn parse(text: &str) -> Vec<bool> {
        text.chars()
            .filter_map(|c| match c {
                '0' => Some(false),
                '1' => Some(true),
                _ => None,
            })
            .collect()
    }
}
