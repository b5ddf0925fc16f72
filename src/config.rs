//! Typed configuration tree for the rule compiler
//!
//! The caller parses the configuration file (and resolves includes) with
//! whatever serde format it uses and hands the result over as a
//! [`RuleConfig`]. The three top-level sections are required keys whose
//! values may be null; [`Section`] keeps the absent-vs-null distinction
//! that a plain `Option` field would lose.

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// A required-but-nullable configuration section
#[derive(Debug, Clone, PartialEq)]
pub enum Section<T> {
    /// Key absent from the configuration
    Missing,
    /// Key present with a null value
    Empty,
    /// Key present with content
    Value(T),
}

impl<T> Section<T> {
    /// Content of the section, if any
    pub fn value(&self) -> Option<&T> {
        match self {
            Section::Value(content) => Some(content),
            _ => None,
        }
    }

    /// True when the key was absent entirely
    pub fn is_missing(&self) -> bool {
        matches!(self, Section::Missing)
    }
}

impl<T> Default for Section<T> {
    fn default() -> Self {
        Section::Missing
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Section<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only called when the key is present; `#[serde(default)]` on the
        // field supplies `Missing` for absent keys.
        Ok(match Option::<T>::deserialize(deserializer)? {
            None => Section::Empty,
            Some(content) => Section::Value(content),
        })
    }
}

/// One rule-text fragment: a literal statement or an included sub-list
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RuleFragment {
    /// A single rule statement
    Text(String),
    /// A nested fragment list left behind by include expansion
    List(Vec<RuleFragment>),
}

/// One block of the `variants` section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VariantBlock {
    /// Variant rule lines, one rule per entry
    #[serde(default)]
    pub words: Option<Vec<String>>,
    /// Block attributes this compiler does not interpret
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Top-level configuration tree
///
/// All three sections must be present as keys; each value may be null.
/// Presence is checked by [`crate::RuleLoader::new`], not here, so trees
/// built programmatically get the same validation as deserialized ones.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuleConfig {
    /// Normalization rule fragments
    #[serde(default)]
    pub normalization: Section<Vec<RuleFragment>>,
    /// Transliteration rule fragments
    #[serde(default)]
    pub transliteration: Section<Vec<RuleFragment>>,
    /// Word variant declarations
    #[serde(default)]
    pub variants: Section<Vec<VariantBlock>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_section_missing_vs_null() {
        let config: RuleConfig = serde_json::from_value(json!({
            "normalization": null,
            "transliteration": [":: Latin ()"],
        }))
        .unwrap();

        assert_eq!(config.normalization, Section::Empty);
        assert!(config.transliteration.value().is_some());
        assert!(config.variants.is_missing());
    }

    #[test]
    fn test_nested_fragment_deserialization() {
        let fragments: Vec<RuleFragment> =
            serde_json::from_value(json!(["a > b", ["x > y", "y > z"]])).unwrap();

        assert_eq!(
            fragments,
            vec![
                RuleFragment::Text("a > b".into()),
                RuleFragment::List(vec![
                    RuleFragment::Text("x > y".into()),
                    RuleFragment::Text("y > z".into()),
                ]),
            ]
        );
    }

    #[test]
    fn test_variant_block_extra_attributes() {
        let block: VariantBlock = serde_json::from_value(json!({
            "words": ["foo -> bar"],
            "language": "de",
        }))
        .unwrap();

        assert_eq!(block.words.as_deref(), Some(&["foo -> bar".to_string()][..]));
        assert_eq!(block.extra["language"], json!("de"));
    }

    #[test]
    fn test_variant_block_null_words() {
        let block: VariantBlock = serde_json::from_value(json!({ "words": null })).unwrap();
        assert!(block.words.is_none());
    }
}
