//! The variant rule mini-language: parsing and expansion

pub mod expander;
pub mod parser;

pub use expander::{expand, ReplacementPair};
pub use parser::{parse, EdgeSpec, OperatorKind, VariantRule, VariantTerm};
