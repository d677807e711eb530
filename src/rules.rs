//! Synthesis rule thresholds, loadable from TOML.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Thresholds a sequence must satisfy to be accepted by the synthesis vendor.
///
/// The default values are the vendor's published guidelines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SynthesisRules {
    /// Minimum sequence length in bases. Default: 300.
    pub min_length: usize,
    /// Lowest accepted GC content, in percent. Default: 25.
    pub min_gc: f64,
    /// Highest accepted GC content, in percent. Default: 65.
    pub max_gc: f64,
    /// Highest accepted spread of windowed GC content, in percent. Default: 52.
    pub max_gc_variation: f64,
    /// Window size for the GC variation. Default: 50.
    pub gc_window: usize,
    /// Length from which an exact repeat is flagged. Default: 20.
    pub repeat_length: usize,
    /// Length from which a homopolymer is flagged. Default: 5.
    pub homopolymer_length: usize,
    /// How many homopolymers are listed in the issue report. Default: 3.
    pub homopolymer_examples: usize,
}

impl Default for SynthesisRules {
    fn default() -> Self {
        Self {
            min_length: 300,
            min_gc: 25.0,
            max_gc: 65.0,
            max_gc_variation: 52.0,
            gc_window: 50,
            repeat_length: 20,
            homopolymer_length: 5,
            homopolymer_examples: 3,
        }
    }
}

impl SynthesisRules {
    /// Parses rules from a TOML string. Missing fields keep their default.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Self::parse(toml_str, "<string>")
    }

    /// Reads rules from a TOML file. Missing fields keep their default.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        Self::parse(&content, &path.display().to_string())
    }

    fn parse(toml_str: &str, source: &str) -> Result<Self> {
        let rules: Self = toml::from_str(toml_str).map_err(|e| Error::ConfigParse {
            path: source.to_string(),
            message: e.to_string(),
        })?;
        rules.validate()?;
        Ok(rules)
    }

    /// Checks that every threshold is within its permitted range.
    pub fn validate(&self) -> Result<()> {
        let percentages = [
            ("min_gc", self.min_gc),
            ("max_gc", self.max_gc),
            ("max_gc_variation", self.max_gc_variation),
        ];
        for (field, value) in percentages.iter() {
            if !(0.0..=100.0).contains(value) {
                return Err(invalid(field, "must be between 0 and 100"));
            }
        }
        if self.min_gc > self.max_gc {
            return Err(invalid("min_gc", "must not exceed max_gc"));
        }
        let lengths = [
            ("gc_window", self.gc_window),
            ("repeat_length", self.repeat_length),
            ("homopolymer_length", self.homopolymer_length),
        ];
        for (field, value) in lengths.iter() {
            if *value == 0 {
                return Err(invalid(field, "must be at least 1"));
            }
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> Error {
    Error::InvalidRule {
        field: field.to_string(),
        message: message.to_string(),
    }
}
