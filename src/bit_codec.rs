//! Text <-> bitstring conversion, one byte (8 bits, most significant first) per character.
//!
//! Text is restricted to characters that fit in a single byte, i.e. code points `0..=255`.
//! Decoding maps every byte back to the character with the same code point.

use crate::error::EncodingError;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::trace;

/// An ordered sequence of bits.
#[derive(Eq, PartialEq, Clone, Debug, Hash, Default)]
pub struct BitString {
    bits: Vec<bool>
}

impl BitString {
    pub fn new(bits: Vec<bool>) -> Self {
        Self {
            bits
        }
    }

    /// Creates a BitString holding every bit of `bytes`, most significant bit first.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut bits = Vec::with_capacity(bytes.len() * 8);
        for &byte in bytes {
            bits.extend((0..8).rev().map(|shift| (byte >> shift) & 1 == 1));
        }
        Self::new(bits)
    }

    /// Appends a single bit.
    #[inline]
    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit)
    }

    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of zero bits needed to reach the next multiple of 8.
    pub fn padding_len(&self) -> usize {
        (8 - self.len() % 8) % 8
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.bits.iter().map(|&b| if b { '1' } else { '0' }).collect();
        f.write_str(&s)
    }
}

/// Error returned when parsing a BitString from anything other than `0` and `1`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid bit at position {position}")]
pub struct ParseBitStringError {
    pub position: usize,
}

impl FromStr for BitString {
    type Err = ParseBitStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(ParseBitStringError { position }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }
}

/// Converts `text` to its bitstring, 8 bits per character. Fails on the first character whose code
/// point exceeds 255.
pub fn text_to_bits(text: &str) -> Result<BitString, EncodingError> {
    let mut bytes = Vec::with_capacity(text.len());
    for (position, character) in text.chars().enumerate() {
        let code = u32::from(character);
        if code > u32::from(u8::MAX) {
            return Err(EncodingError { character, position });
        }
        bytes.push(code as u8);
    }
    Ok(BitString::from_bytes(&bytes))
}

/// Converts `bits` back to text, one character per 8-bit group.
///
/// A bitstring whose length is not a multiple of 8 is right-padded with zero bits first, so the
/// last group can decode to a character that was never encoded (often NUL). Use
/// [`bits_to_text_with_padding`] to find out whether that happened.
pub fn bits_to_text(bits: &BitString) -> String {
    bits_to_text_with_padding(bits).0
}

/// Like [`bits_to_text`], but also returns how many zero bits were appended before decoding.
pub fn bits_to_text_with_padding(bits: &BitString) -> (String, usize) {
    let padding = bits.padding_len();
    if padding > 0 {
        trace!(bits = bits.len(), padding, "padding bitstring to a whole number of bytes");
    }

    let text = bits.as_slice()
        .chunks(8)
        .map(|group| {
            let byte = group.iter().fold(0_u8, |acc, &bit| (acc << 1) | bit as u8);
            // a short last group is shifted as if it had been padded with zeros
            char::from(byte << (8 - group.len()))
        })
        .collect();

    (text, padding)
}
