//! Homopolymer and exact-repeat scanners.

use crate::base_sequence::{Base, BaseSequence};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// A maximal run of a single base. The run always holds at least one base.
#[derive(Eq, PartialEq, Clone, Debug, Hash)]
pub struct HomopolymerOccurrence {
    run: BaseSequence,
    start: usize,
}

impl HomopolymerOccurrence {
    /// Creates an occurrence of `run` starting at `start`, or `None` if `run` is empty or mixes
    /// bases.
    pub fn new(run: BaseSequence, start: usize) -> Option<Self> {
        let first = *run.as_slice().first()?;
        if run.as_slice().iter().any(|&b| b != first) {
            return None;
        }
        Some(Self { run, start })
    }

    /// The bases of the run.
    pub fn run(&self) -> &BaseSequence {
        &self.run
    }

    /// Position of the first base of the run.
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn base(&self) -> Base {
        self.run.as_slice()[0]
    }

    pub fn len(&self) -> usize {
        self.run.len()
    }

    /// Always false: a run holds at least one base.
    pub fn is_empty(&self) -> bool {
        self.run.is_empty()
    }

    /// Position one past the last base of the run.
    pub fn end(&self) -> usize {
        self.start + self.run.len()
    }
}

impl fmt::Display for HomopolymerOccurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at position {}", self.run, self.start)
    }
}

/// Two start positions `first < second` at which `pattern` occurs.
#[derive(Eq, PartialEq, Clone, Debug, Hash)]
pub struct RepeatOccurrence {
    pub pattern: BaseSequence,
    pub first: usize,
    pub second: usize,
}

/// Finds every maximal run of one base that is at least `min_length` long.
///
/// Runs are grouped by base in the order A, C, G, T and sorted by start position within a base.
/// A `min_length` of 0 is treated as 1.
pub fn find_homopolymers(seq: &BaseSequence, min_length: usize) -> Vec<HomopolymerOccurrence> {
    let min_length = min_length.max(1);
    let runs = maximal_runs(seq.as_slice());

    let mut homopolymers = vec![];
    for base in Base::ALL.iter() {
        // maximal runs are non-empty and hold a single base
        homopolymers.extend(runs.iter()
            .filter(|&&(b, start, end)| b == *base && end - start >= min_length)
            .map(|&(_, start, end)| HomopolymerOccurrence {
                run: BaseSequence::from_slice(seq.sub_sequence_slice(start, end)),
                start,
            }));
    }
    homopolymers
}

/// Returns `(base, start, end)` of every maximal single-base run, in order of position.
fn maximal_runs(seq: &[Base]) -> Vec<(Base, usize, usize)> {
    let mut runs = vec![];
    let mut start = 0;
    for end in 1..=seq.len() {
        if end == seq.len() || seq[end] != seq[start] {
            runs.push((seq[start], start, end));
            start = end;
        }
    }
    runs
}

/// Finds every pair of positions `i < j` where the `min_length`-long substrings are identical.
///
/// Every pair is reported, so a pattern occurring at k positions yields k·(k-1)/2 occurrences,
/// ordered by ascending `first` and then ascending `second`. This is the same output as comparing
/// every window with every later window, computed from a k-mer position index instead.
pub fn find_repeats(seq: &BaseSequence, min_length: usize) -> Vec<RepeatOccurrence> {
    let index = KmerIndex::new(seq, min_length);
    let mut repeats = Vec::with_capacity(index.pair_count());
    index.for_each_pair(|pattern, first, second| {
        repeats.push(RepeatOccurrence {
            pattern: BaseSequence::from_slice(pattern),
            first,
            second,
        })
    });
    debug!(len = seq.len(), min_length, repeats = repeats.len(), "repeat scan finished");
    repeats
}

/// Number of occurrences [`find_repeats`] would return, without materialising them.
pub fn count_repeats(seq: &BaseSequence, min_length: usize) -> usize {
    KmerIndex::new(seq, min_length).pair_count()
}

/// Start positions of every k-mer of a sequence, grouped by k-mer.
struct KmerIndex<'a> {
    kmers: Vec<&'a [Base]>,
    positions: HashMap<&'a [Base], Vec<usize>>,
}

impl<'a> KmerIndex<'a> {
    fn new(seq: &'a BaseSequence, k: usize) -> Self {
        let kmers = seq.k_mers(k).collect::<Vec<_>>();
        let mut positions: HashMap<&[Base], Vec<usize>> = HashMap::with_capacity(kmers.len());
        for (i, kmer) in kmers.iter().enumerate() {
            positions.entry(*kmer).or_default().push(i);
        }
        Self { kmers, positions }
    }

    fn pair_count(&self) -> usize {
        self.positions.values().map(|p| p.len() * (p.len() - 1) / 2).sum()
    }

    /// Calls `f(pattern, i, j)` for every matching pair, `i` ascending then `j` ascending.
    fn for_each_pair(&self, mut f: impl FnMut(&'a [Base], usize, usize)) {
        // how many occurrences of each k-mer have been passed so far
        let mut seen: HashMap<&[Base], usize> = HashMap::with_capacity(self.positions.len());
        for (i, kmer) in self.kmers.iter().enumerate() {
            let rank = seen.entry(*kmer).or_insert(0);
            *rank += 1;
            if let Some(positions) = self.positions.get(kmer) {
                for &j in &positions[*rank..] {
                    f(*kmer, i, j);
                }
            }
        }
    }
}
