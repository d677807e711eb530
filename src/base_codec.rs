//! Bitstring <-> nucleotide conversion, 2 bits per base (A=00, C=01, G=10, T=11).

use crate::base_sequence::{Base, BaseSequence};
use crate::bit_codec::{self, BitString};
use crate::error::{DecodingError, EncodingError};

/// Maps consecutive bit pairs of `bits` to bases.
///
/// `bits` must have even length; text-derived bitstrings always do. A trailing lone bit is ignored.
pub fn bits_to_bases(bits: &BitString) -> BaseSequence {
    debug_assert!(bits.len() % 2 == 0, "bitstring of odd length {}", bits.len());
    bits.as_slice()
        .chunks_exact(2)
        .map(|pair| Base::from_bits(((pair[0] as u8) << 1) | pair[1] as u8))
        .collect::<Vec<_>>()
        .into()
}

/// Maps every base of `seq` to its two bits.
pub fn bases_to_bits(seq: &BaseSequence) -> BitString {
    let mut bits = BitString::new(Vec::with_capacity(seq.len() * 2));
    for base in seq.as_slice() {
        bits.push(base.bits() & 0b10 != 0);
        bits.push(base.bits() & 0b01 != 0);
    }
    bits
}

/// Encodes `text` as a nucleotide sequence, 4 bases per character.
pub fn encode_text_to_sequence(text: &str) -> Result<BaseSequence, EncodingError> {
    bit_codec::text_to_bits(text).map(|bits| bits_to_bases(&bits))
}

/// Decodes a nucleotide sequence given as text back to the text it encodes.
///
/// No normalisation is applied: lowercase symbols, whitespace or IUPAC codes are rejected.
pub fn decode_sequence_to_text(seq: &str) -> Result<String, DecodingError> {
    BaseSequence::parse(seq).map(|seq| decode_bases_to_text(&seq))
}

/// Decodes an already parsed nucleotide sequence back to text.
pub fn decode_bases_to_text(seq: &BaseSequence) -> String {
    bit_codec::bits_to_text(&bases_to_bits(seq))
}
