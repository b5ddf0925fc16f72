//! Parser for the variant rule mini-language
//!
//! A rule line has the shape
//!
//! ```text
//! term[,term...] OP replacement[,replacement...]
//! ```
//!
//! where `OP` is `->` (keep the word and add the replacement) or `=>`
//! (replace the word), optionally prefixed with `|` to disable boundary
//! decomposition. Each term is a word that may carry one marker per edge:
//! a leading `^` (start anchor), a trailing `$` (end anchor), or a `~` on
//! either end (variable boundary). The operator needs no surrounding
//! whitespace, so `hinter~-> h` is a valid line.

use crate::error::{Result, RuleError};

/// What a rule does with matched words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorKind {
    /// Keep the original word and register the replacement alongside it
    Add,
    /// Replace the original word
    Replace,
}

/// Parsed boundary requirement for one edge of a term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeSpec {
    /// Plain word boundary
    Space,
    /// The word must sit at the start of the string (left edge only)
    StartAnchor,
    /// The word must sit at the end of the string (right edge only)
    EndAnchor,
    /// `~` marker: the word may be attached to its neighbor or separate
    Variable {
        /// Choose source and destination boundaries independently
        decompose: bool,
    },
}

/// One left-hand word alternative of a rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantTerm {
    /// The word itself, lowercased, with edge markers stripped
    pub word: String,
    /// Requirement for the left edge
    pub left: EdgeSpec,
    /// Requirement for the right edge
    pub right: EdgeSpec,
}

/// One parsed variant rule line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantRule {
    /// Comma-separated word alternatives, in source order
    pub terms: Vec<VariantTerm>,
    /// Operator kind shared by all terms
    pub op: OperatorKind,
    /// Comma-separated replacement words, lowercased
    pub replacements: Vec<String>,
}

/// Parse one rule line into a [`VariantRule`]
pub fn parse(line: &str) -> Result<VariantRule> {
    let (lhs, op, decompose, rhs) = split_operator(line)?;

    let terms = lhs
        .split(',')
        .map(|term| parse_term(line, term, decompose))
        .collect::<Result<Vec<_>>>()?;

    let replacements = rhs
        .split(',')
        .map(|replacement| parse_replacement(line, replacement))
        .collect::<Result<Vec<_>>>()?;

    Ok(VariantRule {
        terms,
        op,
        replacements,
    })
}

/// Locate the single operator and split the line around it
fn split_operator(line: &str) -> Result<(&str, OperatorKind, bool, &str)> {
    let bytes = line.as_bytes();
    let mut arrow = None;
    let mut count = 0;
    for at in 0..bytes.len().saturating_sub(1) {
        if bytes[at + 1] == b'>' && (bytes[at] == b'-' || bytes[at] == b'=') {
            arrow = Some(at);
            count += 1;
        }
    }

    let at = match (count, arrow) {
        (1, Some(at)) => at,
        _ => {
            return Err(syntax(
                line,
                "expected exactly one '->' or '=>' operator",
            ))
        }
    };

    let op = if bytes[at] == b'-' {
        OperatorKind::Add
    } else {
        OperatorKind::Replace
    };
    let no_decompose = at > 0 && bytes[at - 1] == b'|';
    let lhs_end = if no_decompose { at - 1 } else { at };

    Ok((&line[..lhs_end], op, !no_decompose, &line[at + 2..]))
}

/// Parse one comma-separated left-hand term
fn parse_term(line: &str, raw: &str, decompose: bool) -> Result<VariantTerm> {
    let term = raw.trim();

    let (left_marker, rest) = match term.chars().next() {
        Some(marker @ ('~' | '^')) => (Some(marker), &term[1..]),
        _ => (None, term),
    };
    let (right_marker, word) = match rest.chars().last() {
        Some(marker @ ('~' | '$')) => (Some(marker), &rest[..rest.len() - 1]),
        _ => (None, rest),
    };

    if left_marker == Some('~') && right_marker == Some('~') {
        return Err(syntax(line, "a term may carry at most one '~' marker"));
    }
    if word.is_empty() {
        return Err(syntax(line, "empty word in term"));
    }
    if word
        .chars()
        .any(|ch| matches!(ch, '~' | '^' | '$') || ch.is_whitespace())
    {
        return Err(syntax(
            line,
            "boundary markers are only allowed on term edges",
        ));
    }

    let left = match left_marker {
        Some('~') => EdgeSpec::Variable { decompose },
        Some(_) => EdgeSpec::StartAnchor,
        None => EdgeSpec::Space,
    };
    let right = match right_marker {
        Some('~') => EdgeSpec::Variable { decompose },
        Some(_) => EdgeSpec::EndAnchor,
        None => EdgeSpec::Space,
    };

    Ok(VariantTerm {
        word: word.to_lowercase(),
        left,
        right,
    })
}

/// Parse one comma-separated replacement word
fn parse_replacement(line: &str, raw: &str) -> Result<String> {
    let replacement = raw.trim();
    if replacement.is_empty() {
        return Err(syntax(line, "empty replacement"));
    }
    if replacement.chars().any(|ch| matches!(ch, '~' | '^' | '$')) {
        return Err(syntax(
            line,
            "boundary markers are not allowed in a replacement",
        ));
    }
    Ok(replacement.to_lowercase())
}

fn syntax(line: &str, reason: &str) -> RuleError {
    RuleError::VariantSyntax {
        line: line.trim().to_string(),
        reason: reason.to_string(),
    }
}
