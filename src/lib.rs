//! Text to DNA encoding with synthesis guideline checks.
//!
//! Text is mapped to bits (one byte per character) and bits to bases (A=00, C=01, G=10, T=11).
//! The resulting sequence can be checked against a vendor's synthesis rules: minimum length, GC
//! content, GC variation across windows, exact repeats and homopolymers.
//!
//! ```
//! use seqsynth::{check_guidelines, decode_sequence_to_text, encode_text_to_sequence};
//!
//! let seq = encode_text_to_sequence("A").unwrap();
//! assert_eq!(seq.to_string(), "CAAC");
//! assert_eq!(decode_sequence_to_text("CAAC").unwrap(), "A");
//! assert_eq!(
//!     check_guidelines(&seq),
//!     vec!["Sequence length (4 bp) is less than the minimum 300 bp required."]
//! );
//! ```

pub mod arg_parser;
pub mod base_codec;
pub mod base_sequence;
pub mod bit_codec;
pub mod dna_rules;
pub mod error;
pub mod logging;
pub mod report;
pub mod rules;
pub mod scanners;

pub use base_codec::{
    bases_to_bits, bits_to_bases, decode_bases_to_text, decode_sequence_to_text,
    encode_text_to_sequence,
};
pub use base_sequence::{gc_content, gc_variation, Base, BaseSequence};
pub use bit_codec::{bits_to_text, bits_to_text_with_padding, text_to_bits, BitString};
pub use dna_rules::{
    check_guidelines, check_guidelines_batch, check_guidelines_with, satisfies_guidelines,
};
pub use error::{DecodingError, EncodingError, Error, Result};
pub use report::{required_text_length, SynthesisReport};
pub use rules::SynthesisRules;
pub use scanners::{
    count_repeats, find_homopolymers, find_repeats, HomopolymerOccurrence, RepeatOccurrence,
};
