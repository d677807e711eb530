use crate::base_sequence::Base::{A, C, G, T};
use crate::error::{DecodingError, Result};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// The Enum that represents a DNA base. The discriminant is the 2-bit code the base stands for.
#[derive(Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Base {
    A = 0b00,
    C = 0b01,
    G = 0b10,
    T = 0b11,
}

impl Base {
    /// All bases, indexed by their 2-bit code.
    pub const ALL: [Base; 4] = [A, C, G, T];

    /// Returns the base encoded by the two lowest bits of `bits`.
    #[inline(always)]
    pub const fn from_bits(bits: u8) -> Self {
        Self::ALL[(bits & 0b_0000_0011) as usize]
    }

    /// Returns the 2-bit code of the base.
    #[inline(always)]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Parses a character into a DNA base. Only the uppercase symbols A, C, G and T are accepted.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(A),
            'C' => Some(C),
            'G' => Some(G),
            'T' => Some(T),
            _ => None
        }
    }

    /// Converts a base to its symbol.
    pub const fn to_char(self) -> char {
        match self {
            A => 'A',
            C => 'C',
            G => 'G',
            T => 'T'
        }
    }

    /// Returns true if the base is a C or a G.
    pub const fn is_c_or_g(&self) -> bool {
        match self {
            C | G => true,
            _ => false
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// The representation for a DNA sequence as a vector of DNA bases.
#[derive(Eq, PartialEq, Clone, Debug, Hash, Default)]
pub struct BaseSequence {
    sequence: Vec<Base>
}

impl BaseSequence {
    pub fn new(sequence: Vec<Base>) -> Self {
        Self {
            sequence
        }
    }

    /// Creates a new empty BaseSequence.
    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Creates a new BaseSequence by copying a slice of DNA bases.
    pub fn from_slice(slice: &[Base]) -> Self {
        Self::new(slice.to_vec())
    }

    /// Creates a new BaseSequence by parsing `str`. Fails on the first symbol outside {A, C, G, T}.
    pub fn parse(str: &str) -> std::result::Result<Self, DecodingError> {
        str.chars()
            .enumerate()
            .map(|(position, symbol)| {
                Base::from_char(symbol).ok_or(DecodingError { symbol, position })
            })
            .collect::<std::result::Result<Vec<_>, _>>()
            .map(Self::new)
    }

    /// Reads a fasta file into a vector of BaseSequence. Header lines (`>`) and empty lines are
    /// skipped.
    pub fn read_fasta(file_path: impl AsRef<Path>) -> Result<Vec<BaseSequence>> {
        let content = fs::read_to_string(file_path)?;
        let mut seqs = vec![];
        let lines = content.lines().map(str::trim).filter(|l| !l.starts_with('>') && !l.is_empty());
        for line in lines {
            seqs.push(BaseSequence::parse(line)?);
        }
        Ok(seqs)
    }

    /// Returns a slice of the current BaseSequence beginning at `start` and ending at `end`.
    #[inline(always)]
    pub fn sub_sequence_slice(&self, start: usize, end: usize) -> &[Base] {
        &self.sequence[start..end]
    }

    /// Returns a slice of the current BaseSequence.
    #[inline]
    pub fn as_slice(&self) -> &[Base] {
        &self.sequence
    }

    /// Returns the k-mers in order of their start position (duplicates are possible).
    /// Returns no k-mers if `len` exceeds the length of the sequence.
    pub fn k_mers(&self, len: usize) -> impl Iterator<Item = &[Base]> + '_ {
        let count = (self.len() + 1).saturating_sub(len);
        (0..count).map(move |i| self.sub_sequence_slice(i, i + len))
    }

    /// Returns the number of DNA bases in the current BaseSequence.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Returns the GC content of `sequence` as a percentage. An empty slice has a GC content of 0.
    #[inline(always)]
    pub fn gc_content_of(sequence: &[Base]) -> f64 {
        if sequence.is_empty() {
            return 0_f64;
        }
        Self::gc_percentage(Self::gc_count_of(sequence), sequence.len())
    }

    /// Returns the GC content of the current BaseSequence as a percentage.
    #[inline(always)]
    pub fn gc_content(&self) -> f64 {
        Self::gc_content_of(self.as_slice())
    }

    /// Returns the difference between the highest and the lowest GC content over all windows of
    /// `window_size` bases (stride 1). Returns 0 if the sequence is shorter than one window.
    pub fn gc_variation(&self, window_size: usize) -> f64 {
        if window_size == 0 || self.len() < window_size {
            return 0_f64;
        }

        let mut gc_count = Self::gc_count_of(self.sub_sequence_slice(0, window_size));
        let mut min = Self::gc_percentage(gc_count, window_size);
        let mut max = min;
        for end in window_size..self.len() {
            // slide by one: drop the base leaving the window, add the one entering it
            if self.sequence[end - window_size].is_c_or_g() {
                gc_count -= 1;
            }
            if self.sequence[end].is_c_or_g() {
                gc_count += 1;
            }
            let gc = Self::gc_percentage(gc_count, window_size);
            min = f64::min(min, gc);
            max = f64::max(max, gc);
        }

        max - min
    }

    #[inline(always)]
    fn gc_count_of(sequence: &[Base]) -> usize {
        sequence.iter().filter(|b| b.is_c_or_g()).count()
    }

    #[inline(always)]
    fn gc_percentage(gc_count: usize, len: usize) -> f64 {
        gc_count as f64 / len as f64 * 100_f64
    }
}

impl fmt::Display for BaseSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.sequence.iter().map(|b| b.to_char()).collect();
        f.write_str(&s)
    }
}

impl FromStr for BaseSequence {
    type Err = DecodingError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Vec<Base>> for BaseSequence {
    fn from(sequence: Vec<Base>) -> Self {
        Self::new(sequence)
    }
}

impl AsRef<[Base]> for BaseSequence {
    fn as_ref(&self) -> &[Base] {
        self.as_slice()
    }
}

/// GC content of `seq` in percent; 0 for an empty sequence.
pub fn gc_content(seq: &BaseSequence) -> f64 {
    seq.gc_content()
}

/// Spread between the highest and lowest GC content over windows of `window_size` bases.
pub fn gc_variation(seq: &BaseSequence, window_size: usize) -> f64 {
    seq.gc_variation(window_size)
}
