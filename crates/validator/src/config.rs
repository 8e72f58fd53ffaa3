//! Validator configuration
//!
//! [`ValidatorConfig`] holds the declaration delimiters and the policy
//! switches. Every field has a default, so a partial JSON document is enough:
//!
//! ```json
//! {
//!   "delimiters": { "rule": "|" },
//!   "strict-unknown-rules": true,
//!   "collection-length": "element-count",
//!   "string-length": "chars"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tokens that split a declaration string.
///
/// With the defaults, `"required;min:3;array-unique:Name,true"` declares
/// three rules, the last one with two restrictions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Delimiters {
    /// Separates rule specs (default `;`).
    pub rule: String,
    /// Separates a rule name from its restriction payload (default `:`).
    pub value: String,
    /// Separates restriction values (default `,`).
    pub values: String,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            rule: ";".to_owned(),
            value: ":".to_owned(),
            values: ",".to_owned(),
        }
    }
}

impl Delimiters {
    /// Checks that every token is non-empty and distinct.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tokens = [
            ("rule", &self.rule),
            ("value", &self.value),
            ("values", &self.values),
        ];

        for (which, token) in tokens {
            if token.is_empty() {
                return Err(ConfigError::EmptyDelimiter { which });
            }
        }

        for (i, &(first, a)) in tokens.iter().enumerate() {
            for &(second, b) in &tokens[i + 1..] {
                if a == b {
                    return Err(ConfigError::ClashingDelimiters {
                        first,
                        second,
                        token: a.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// How `min` / `max` measure slices and maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollectionLength {
    /// Compare the length of the collection's string representation
    /// (`<slice Value>`), not its element count.
    #[default]
    Literal,
    /// Compare the element count.
    ElementCount,
}

/// How `min`, `max` and `len` measure strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StringLength {
    /// UTF-8 byte length.
    #[default]
    Bytes,
    /// Number of `char`s.
    Chars,
}

impl StringLength {
    /// Length of `s` under this measurement.
    pub fn count(self, s: &str) -> usize {
        match self {
            Self::Bytes => s.len(),
            Self::Chars => s.chars().count(),
        }
    }
}

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ValidatorConfig {
    /// Declaration delimiters.
    pub delimiters: Delimiters,
    /// Fail with [`ValidatorError::UnknownRule`](crate::ValidatorError::UnknownRule)
    /// instead of skipping rules missing from the registry.
    pub strict_unknown_rules: bool,
    /// Fail with [`ValidatorError::Restriction`](crate::ValidatorError::Restriction)
    /// instead of reporting malformed restrictions as a violation.
    pub strict_restrictions: bool,
    /// Measurement used by `min` / `max` on slices and maps.
    pub collection_length: CollectionLength,
    /// Measurement used by `min`, `max` and `len` on strings.
    pub string_length: StringLength,
}

impl ValidatorConfig {
    /// Parses and checks a JSON configuration document.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration for internal consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.delimiters.validate()
    }

    /// Replaces the delimiters.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_delimiters(mut self, delimiters: Delimiters) -> Self {
        self.delimiters = delimiters;
        self
    }

    /// Sets the unknown-rule policy.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_strict_unknown_rules(mut self, strict: bool) -> Self {
        self.strict_unknown_rules = strict;
        self
    }

    /// Sets the malformed-restriction policy.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_strict_restrictions(mut self, strict: bool) -> Self {
        self.strict_restrictions = strict;
        self
    }

    /// Sets the collection measurement used by `min` / `max`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_collection_length(mut self, mode: CollectionLength) -> Self {
        self.collection_length = mode;
        self
    }

    /// Sets the string measurement used by `min`, `max` and `len`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_string_length(mut self, mode: StringLength) -> Self {
        self.string_length = mode;
        self
    }
}
