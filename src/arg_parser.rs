use crate::error::{Error, Result};
use std::collections::HashMap;
use std::str::FromStr;

/// Parses command-line arguments of the form `key=value`.
#[derive(Debug, Default)]
pub struct ArgsParser {
    mappings: HashMap<String, String>
}

impl ArgsParser {
    /// Creates an empty ArgsParser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new ArgsParser from the given arguments. Only the first `=` separates key and
    /// value.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut mappings = HashMap::new();
        for arg in args.into_iter() {
            let (key, value) = match arg.split_once('=') {
                Some((key, value)) if !key.is_empty() => (key, value),
                _ => return Err(invalid(&arg, "expected key=value")),
            };
            if let Some(previous) = mappings.get(key) {
                return Err(invalid(&arg, &format!("duplicate of {}={}", key, previous)));
            }
            mappings.insert(key.to_owned(), value.to_owned());
        }
        Ok(ArgsParser {
            mappings
        })
    }

    /// Returns true if the argument `name` was given.
    pub fn contains(&self, name: &str) -> bool {
        self.mappings.contains_key(name)
    }

    /// Parses the argument `name` as T, or returns `default` if it is absent.
    pub fn get_as<T>(&self, name: &str, default: T) -> Result<T> where T: FromStr {
        match self.mappings.get(name) {
            Some(v) => v
                .parse()
                .map_err(|_| invalid(&format!("{}={}", name, v), "cannot parse value")),
            None => Ok(default)
        }
    }

    /// Parses the argument `name` as bool (`1`, `true`, `yes`, `y` are true), or returns `default`
    /// if it is absent.
    pub fn get_as_bool(&self, name: &str, default: bool) -> bool {
        match self.mappings.get(name) {
            Some(v) => ["1", "true", "yes", "y"].iter().any(|t| v.eq_ignore_ascii_case(t)),
            None => default
        }
    }

    /// Returns the argument with key `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.mappings.get(name).map(String::as_str)
    }

    /// Returns the argument with key `name`, or an error naming the missing key.
    pub fn require(&self, name: &str) -> Result<&str> {
        self.get(name).ok_or_else(|| invalid(name, "missing required argument"))
    }
}

fn invalid(argument: &str, reason: &str) -> Error {
    Error::InvalidArgument {
        argument: argument.to_string(),
        reason: reason.to_string(),
    }
}
