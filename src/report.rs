//! Synthesis report for an encoded text, with advice on how to fix a failing sequence.

use crate::base_codec;
use crate::base_sequence::BaseSequence;
use crate::dna_rules;
use crate::error::Result;
use crate::rules::SynthesisRules;
use crate::scanners;
use serde::Serialize;

/// Letters whose encodings are rich in G and C.
pub const GC_RICH_LETTERS: &str = "k, l, m, n, o, w, x, y, z";
/// Letters whose encodings are rich in A and T.
pub const AT_RICH_LETTERS: &str = "a, b, c, d, e, i, j, p, q, r, s, t, u, v";

/// Statistics and guideline issues of one sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SynthesisReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub dna_sequence: String,
    pub length: usize,
    pub gc_content: f64,
    pub gc_variation: f64,
    pub homopolymers_count: usize,
    pub repeats_count: usize,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

impl SynthesisReport {
    /// Encodes `text` and reports on the resulting sequence.
    pub fn from_text(text: &str, rules: &SynthesisRules) -> Result<Self> {
        let seq = base_codec::encode_text_to_sequence(text)?;
        let mut report = Self::build(&seq, rules);
        report.suggestions = suggestions(text.chars().count(), &seq, rules);
        report.text = Some(text.to_string());
        Ok(report)
    }

    /// Reports on a sequence that did not come from text. No suggestions are made.
    pub fn from_sequence(seq: &BaseSequence, rules: &SynthesisRules) -> Self {
        Self::build(seq, rules)
    }

    fn build(seq: &BaseSequence, rules: &SynthesisRules) -> Self {
        Self {
            text: None,
            dna_sequence: seq.to_string(),
            length: seq.len(),
            gc_content: seq.gc_content(),
            gc_variation: seq.gc_variation(rules.gc_window),
            homopolymers_count: scanners::find_homopolymers(seq, rules.homopolymer_length).len(),
            repeats_count: scanners::count_repeats(seq, rules.repeat_length),
            issues: dna_rules::check_guidelines_with(seq, rules),
            suggestions: vec![],
        }
    }

    pub fn passes(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Number of characters of text needed for an encoding of at least `min_bp` bases.
pub fn required_text_length(min_bp: usize) -> usize {
    (min_bp + 3) / 4
}

/// Advice for changing a text of `text_len` characters so that its encoding `seq` meets `rules`.
pub fn suggestions(text_len: usize, seq: &BaseSequence, rules: &SynthesisRules) -> Vec<String> {
    let mut suggestions = vec![];

    if seq.len() < rules.min_length {
        let missing = required_text_length(rules.min_length).saturating_sub(text_len);
        suggestions.push(format!(
            "Add approximately {} more characters to reach the minimum length.",
            missing
        ));
    }

    let gc_content = seq.gc_content();
    if gc_content < rules.min_gc {
        suggestions.push(format!(
            "To increase GC content, try adding more text with letters that encode to G or C. \
             Letters that often encode to G or C include: {}",
            GC_RICH_LETTERS
        ));
    } else if gc_content > rules.max_gc {
        suggestions.push(format!(
            "To decrease GC content, try adding more text with letters that encode to A or T. \
             Letters that often encode to A or T include: {}",
            AT_RICH_LETTERS
        ));
    }

    suggestions
}
