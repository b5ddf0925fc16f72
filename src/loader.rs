//! Loader façade over a validated rule configuration

use crate::assembler::assemble;
use crate::config::{RuleConfig, Section};
use crate::error::{Result, RuleError};
use crate::variants::{expand, parse, ReplacementPair};
use std::collections::HashSet;

/// Compiled view of one rule configuration
///
/// Construction runs the whole pipeline: section validation, rule program
/// assembly, and variant expansion. The result is immutable; reloading a
/// changed configuration means building a new loader.
#[derive(Debug, Clone)]
pub struct RuleLoader {
    normalization_rules: String,
    transliteration_rules: String,
    search_rules: String,
    replacements: HashSet<ReplacementPair>,
}

impl RuleLoader {
    /// Compile a configuration tree
    ///
    /// Fails when one of the three required section keys is absent or when
    /// a variant rule line violates the rule grammar. Sections that are
    /// present but null are valid and yield empty outputs.
    pub fn new(config: &RuleConfig) -> Result<Self> {
        let normalization = required(&config.normalization, "normalization")?;
        let transliteration = required(&config.transliteration, "transliteration")?;
        let variants = required(&config.variants, "variants")?;

        let normalization_rules = normalization.map(|f| assemble(f)).unwrap_or_default();
        let transliteration_rules = transliteration.map(|f| assemble(f)).unwrap_or_default();
        let search_rules = format!("{normalization_rules}{transliteration_rules}");

        let mut replacements = HashSet::new();
        for block in variants.map(Vec::as_slice).unwrap_or_default() {
            for line in block.words.as_deref().unwrap_or_default() {
                replacements.extend(expand(&parse(line)?));
            }
        }

        Ok(Self {
            normalization_rules,
            transliteration_rules,
            search_rules,
            replacements,
        })
    }

    /// Rule program for normalizing indexed and queried text
    pub fn normalization_rules(&self) -> &str {
        &self.normalization_rules
    }

    /// Rule program for transliterating normalized text
    pub fn transliteration_rules(&self) -> &str {
        &self.transliteration_rules
    }

    /// Combined rule program for the search pipeline: normalization
    /// followed by transliteration
    pub fn search_rules(&self) -> &str {
        &self.search_rules
    }

    /// All replacement pairs declared by the `variants` section, deduplicated
    pub fn replacement_pairs(&self) -> &HashSet<ReplacementPair> {
        &self.replacements
    }
}

fn required<'a, T>(section: &'a Section<T>, name: &'static str) -> Result<Option<&'a T>> {
    match section {
        Section::Missing => Err(RuleError::MissingSection { section: name }),
        Section::Empty => Ok(None),
        Section::Value(content) => Ok(Some(content)),
    }
}
