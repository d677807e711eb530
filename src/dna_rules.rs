use crate::base_sequence::BaseSequence;
use crate::rules::SynthesisRules;
use crate::scanners;
use rayon::prelude::*;
use tracing::debug;

/// Checks `seq` against the vendor's default synthesis guidelines. See [`check_guidelines_with`].
pub fn check_guidelines(seq: &BaseSequence) -> Vec<String> {
    check_guidelines_with(seq, &SynthesisRules::default())
}

/// Checks `seq` against `rules` and returns one message per violated rule. An empty list means the
/// sequence passes.
///
/// Every rule is checked, in this order: length, GC content, GC variation, repeats, homopolymers.
/// The homopolymer message is followed by up to `homopolymer_examples` indented example lines and a
/// line counting the ones not listed.
pub fn check_guidelines_with(seq: &BaseSequence, rules: &SynthesisRules) -> Vec<String> {
    let mut issues = vec![];

    if seq.len() < rules.min_length {
        issues.push(format!(
            "Sequence length ({} bp) is less than the minimum {} bp required.",
            seq.len(), rules.min_length
        ));
    }

    let gc_content = seq.gc_content();
    if gc_content < rules.min_gc || gc_content > rules.max_gc {
        issues.push(format!(
            "GC content ({:.1}%) is outside the recommended range ({}-{}%).",
            gc_content, rules.min_gc, rules.max_gc
        ));
    }

    let gc_variation = seq.gc_variation(rules.gc_window);
    if gc_variation > rules.max_gc_variation {
        issues.push(format!(
            "GC content variation ({:.1}%) exceeds the maximum recommended ({}%).",
            gc_variation, rules.max_gc_variation
        ));
    }

    let repeats = scanners::count_repeats(seq, rules.repeat_length);
    if repeats > 0 {
        issues.push(format!(
            "Found {} repeats of {}+ bp. This may cause synthesis issues.",
            repeats, rules.repeat_length
        ));
    }

    let homopolymers = scanners::find_homopolymers(seq, rules.homopolymer_length);
    if !homopolymers.is_empty() {
        issues.push(format!(
            "Found {} homopolymers of {}+ bases. This may cause synthesis issues.",
            homopolymers.len(), rules.homopolymer_length
        ));
        for homopolymer in homopolymers.iter().take(rules.homopolymer_examples) {
            issues.push(format!("  - {}", homopolymer));
        }
        if homopolymers.len() > rules.homopolymer_examples {
            let unlisted = homopolymers.len() - rules.homopolymer_examples;
            issues.push(format!("  - ... and {} more", unlisted));
        }
    }

    debug!(
        len = seq.len(),
        gc_content,
        gc_variation,
        repeats,
        homopolymers = homopolymers.len(),
        issues = issues.len(),
        "checked synthesis guidelines"
    );
    issues
}

/// Checks if a sequence `seq` satisfies every rule in `rules`.
pub fn satisfies_guidelines(seq: &BaseSequence, rules: &SynthesisRules) -> bool {
    check_guidelines_with(seq, rules).is_empty()
}

/// Checks many independent sequences in parallel. The result at index `i` belongs to `seqs[i]`.
pub fn check_guidelines_batch(seqs: &[BaseSequence], rules: &SynthesisRules) -> Vec<Vec<String>> {
    seqs.par_iter().map(|seq| check_guidelines_with(seq, rules)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(s: &str) -> BaseSequence {
        BaseSequence::parse(s).unwrap()
    }

    fn flagged(issues: &[String], prefix: &str) -> bool {
        issues.iter().any(|i| i.starts_with(prefix))
    }

    #[test]
    fn alternating_sequence_only_has_repeats() {
        let issues = check_guidelines(&seq(&"ACGT".repeat(100)));
        assert_eq!(issues, vec!["Found 17955 repeats of 20+ bp. This may cause synthesis issues."]);
    }

    #[test]
    fn short_poly_a_fails_every_applicable_rule() {
        let issues = check_guidelines(&seq(&"A".repeat(28)));
        assert_eq!(issues, vec![
            "Sequence length (28 bp) is less than the minimum 300 bp required.",
            "GC content (0.0%) is outside the recommended range (25-65%).",
            "Found 36 repeats of 20+ bp. This may cause synthesis issues.",
            "Found 1 homopolymers of 5+ bases. This may cause synthesis issues.",
            "  - AAAAAAAAAAAAAAAAAAAAAAAAAAAA at position 0",
        ]);
    }

    #[test]
    fn homopolymer_examples_are_capped() {
        let issues = check_guidelines(&seq("AAAAACCCCCGGGGGTTTTTAAAAA"));
        assert_eq!(issues, vec![
            "Sequence length (25 bp) is less than the minimum 300 bp required.",
            "Found 5 homopolymers of 5+ bases. This may cause synthesis issues.",
            "  - AAAAA at position 0",
            "  - AAAAA at position 20",
            "  - CCCCC at position 5",
            "  - ... and 2 more",
        ]);
    }

    #[test]
    fn exactly_three_homopolymers_has_no_summary_line() {
        let issues = check_guidelines(&seq("AAAAACCCCCGGGGG"));
        assert_eq!(issues.last().unwrap(), "  - GGGGG at position 10");
        assert!(!issues.iter().any(|i| i.contains("more")));
    }

    #[test]
    fn high_gc_and_variation() {
        let s = seq(&format!("{}{}", "GC".repeat(150), "AT".repeat(50)));
        let issues = check_guidelines(&s);
        // 300 G/C followed by 100 A/T: 75% GC, windows range from 100% to 0%
        assert_eq!(issues[0], "GC content (75.0%) is outside the recommended range (25-65%).");
        assert_eq!(
            issues[1],
            "GC content variation (100.0%) exceeds the maximum recommended (52%)."
        );
    }

    #[test]
    fn minimum_length_is_inclusive() {
        let at_minimum = check_guidelines(&seq(&"ACGT".repeat(75)));
        assert_eq!(
            at_minimum,
            vec!["Found 9730 repeats of 20+ bp. This may cause synthesis issues."]
        );

        let one_short = check_guidelines(&seq(&format!("{}ACG", "ACGT".repeat(74))));
        assert_eq!(
            one_short[0],
            "Sequence length (299 bp) is less than the minimum 300 bp required."
        );
    }

    #[test]
    fn gc_content_bounds_are_inclusive() {
        // 100 of 400 bases are G/C
        let at_min = check_guidelines(&seq(&"AAAC".repeat(100)));
        assert!(!flagged(&at_min, "GC content ("));
        let below_min = check_guidelines(&seq(&format!("{}AAAA", "AAAC".repeat(99))));
        assert!(flagged(&below_min, "GC content ("));

        // 130 of 200 bases are G/C
        let at_max = check_guidelines(&seq(&format!("{}{}", "GC".repeat(65), "AT".repeat(35))));
        assert!(!flagged(&at_max, "GC content ("));
        let above_max = check_guidelines(&seq(&format!("{}{}", "GC".repeat(66), "AT".repeat(34))));
        assert!(above_max.contains(
            &"GC content (66.0%) is outside the recommended range (25-65%).".to_string()
        ));
    }

    #[test]
    fn gc_variation_ceiling_is_inclusive() {
        // the all-A/T window against the window holding 26 G/C
        let at_max = check_guidelines(&seq(&format!("{}{}", "AT".repeat(25), "GC".repeat(13))));
        assert!(!flagged(&at_max, "GC content variation"));

        let above_max = check_guidelines(&seq(&format!("{}{}", "AT".repeat(25), "GC".repeat(14))));
        assert!(above_max.contains(
            &"GC content variation (56.0%) exceeds the maximum recommended (52%).".to_string()
        ));
    }

    #[test]
    fn empty_sequence() {
        let issues = check_guidelines(&BaseSequence::empty());
        assert_eq!(issues, vec![
            "Sequence length (0 bp) is less than the minimum 300 bp required.",
            "GC content (0.0%) is outside the recommended range (25-65%).",
        ]);
    }

    #[test]
    fn custom_rules_change_thresholds_and_messages() {
        let rules = SynthesisRules {
            min_length: 10,
            min_gc: 40.0,
            max_gc: 60.0,
            repeat_length: 4,
            homopolymer_length: 3,
            homopolymer_examples: 1,
            ..SynthesisRules::default()
        };
        let issues = check_guidelines_with(&seq("ACGTTTACGT"), &rules);
        assert_eq!(issues, vec![
            "Found 1 repeats of 4+ bp. This may cause synthesis issues.",
            "Found 1 homopolymers of 3+ bases. This may cause synthesis issues.",
            "  - TTT at position 3",
        ]);
        assert!(satisfies_guidelines(&seq("ACGTAGCTTGCA"), &rules));
    }

    #[test]
    fn batch_keeps_input_order() {
        let seqs = vec![seq(&"A".repeat(28)), seq(&"ACGT".repeat(100)), BaseSequence::empty()];
        let rules = SynthesisRules::default();
        let batch = check_guidelines_batch(&seqs, &rules);
        assert_eq!(batch.len(), 3);
        for (seq, issues) in seqs.iter().zip(batch.iter()) {
            assert_eq!(*issues, check_guidelines_with(seq, &rules));
        }
    }
}
