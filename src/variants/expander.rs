//! Expands parsed variant rules into literal replacement pairs

use crate::boundary::{decorate, Boundary};
use crate::variants::parser::{EdgeSpec, OperatorKind, VariantRule};
use smallvec::{smallvec, SmallVec};
use std::collections::HashSet;

/// One literal find/replace entry for the downstream indexing stage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReplacementPair {
    /// Pattern matched against an indexed word, boundary decorations included
    pub source: String,
    /// Text registered as an alternate searchable form
    pub replacement: String,
}

/// (source boundary, destination boundary) choices for one edge of a term
type EdgeChoices = SmallVec<[(Boundary, Boundary); 4]>;

/// Boundary values a `~` edge ranges over
const FREE: [Boundary; 2] = [Boundary::Attached, Boundary::Space];

fn edge_choices(spec: EdgeSpec) -> EdgeChoices {
    match spec {
        EdgeSpec::Space => smallvec![(Boundary::Space, Boundary::Space)],
        EdgeSpec::StartAnchor => smallvec![(Boundary::StartAnchor, Boundary::StartAnchor)],
        EdgeSpec::EndAnchor => smallvec![(Boundary::EndAnchor, Boundary::EndAnchor)],
        // Tied: the destination reuses whatever the source chose
        EdgeSpec::Variable { decompose: false } => FREE.iter().map(|&b| (b, b)).collect(),
        // Crossed: source and destination choices are independent
        EdgeSpec::Variable { decompose: true } => {
            let mut choices = EdgeChoices::new();
            for &src in &FREE {
                for &dst in &FREE {
                    choices.push((src, dst));
                }
            }
            choices
        }
    }
}

/// Expand one parsed rule into its full set of replacement pairs
///
/// Each term expands independently over the cartesian product of its two
/// edge-choice lists. An `Add` rule emits the kept-original family next to
/// the replacement family; a `Replace` rule emits only the latter.
/// Duplicate pairs collapse structurally in the set.
pub fn expand(rule: &VariantRule) -> HashSet<ReplacementPair> {
    let mut pairs = HashSet::new();

    for term in &rule.terms {
        for &(src_left, dst_left) in &edge_choices(term.left) {
            for &(src_right, dst_right) in &edge_choices(term.right) {
                let source = decorate(&term.word, src_left, src_right);

                if rule.op == OperatorKind::Add {
                    pairs.insert(ReplacementPair {
                        source: source.clone(),
                        replacement: decorate(&term.word, dst_left, dst_right),
                    });
                }
                for replacement in &rule.replacements {
                    pairs.insert(ReplacementPair {
                        source: source.clone(),
                        replacement: decorate(replacement, dst_left, dst_right),
                    });
                }
            }
        }
    }

    pairs
}
