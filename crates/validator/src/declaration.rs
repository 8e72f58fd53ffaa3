//! Declaration parsing
//!
//! Turns a field's raw declaration string into an ordered map of rule name
//! to restriction values, and a record's field table into
//! [`FieldDeclaration`]s.

use indexmap::IndexMap;

use crate::config::Delimiters;
use crate::record::Record;
use crate::reflect::Kind;

/// Rule name to restriction values, in declaration order.
pub type RuleSpecs = IndexMap<String, Vec<String>>;

/// Restriction given to a rule declared without a payload.
pub const IMPLICIT_RESTRICTION: &str = "1";

/// Parses one declaration string.
///
/// - `required` becomes `required => ["1"]`.
/// - `min: 3` becomes `min => ["3"]`; names and values are trimmed.
/// - `array-unique:Name,true` becomes `array-unique => ["Name", "true"]`.
/// - Only the first value delimiter splits, so `a:b:c` has the payload `b:c`.
/// - A rule declared twice keeps its first position and its last payload.
/// - Empty segments are ignored.
pub fn parse_declaration(raw: &str, delimiters: &Delimiters) -> RuleSpecs {
    let mut rules = RuleSpecs::new();

    for segment in raw.split(delimiters.rule.as_str()) {
        let (name, payload) = match segment.split_once(delimiters.value.as_str()) {
            Some((name, payload)) => (name.trim(), Some(payload)),
            None => (segment.trim(), None),
        };

        if name.is_empty() {
            continue;
        }

        let restrictions = match payload {
            Some(payload) => payload
                .trim()
                .split(delimiters.values.as_str())
                .map(|value| value.trim().to_owned())
                .collect(),
            None => vec![IMPLICIT_RESTRICTION.to_owned()],
        };

        rules.insert(name.to_owned(), restrictions);
    }

    rules
}

/// Parsed view of one record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDeclaration {
    /// Field identifier.
    pub name: &'static str,
    /// Position in the record's field table.
    pub index: usize,
    /// Category of the field's type.
    pub kind: Kind,
    /// Whether the field is a recursion candidate.
    pub nested: bool,
    /// Declared rules; empty for undeclared fields.
    pub rules: RuleSpecs,
}

impl FieldDeclaration {
    /// Returns `true` if at least one rule is declared.
    pub fn has_rules(&self) -> bool {
        !self.rules.is_empty()
    }
}

/// Parses every field of `record`, in field order.
///
/// Undeclared fields are included so recursion candidates are still
/// discovered.
pub fn parse_record(record: &dyn Record, delimiters: &Delimiters) -> Vec<FieldDeclaration> {
    record
        .fields()
        .iter()
        .enumerate()
        .map(|(index, field)| FieldDeclaration {
            name: field.name,
            index,
            kind: field.kind,
            nested: field.nested,
            rules: field
                .declaration
                .map(|raw| parse_declaration(raw, delimiters))
                .unwrap_or_default(),
        })
        .collect()
}
