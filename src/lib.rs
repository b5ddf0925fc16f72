//! Compiles declarative search-normalization configuration into
//! transliteration rule programs and word-variant replacement pairs
//!
//! The input is a small configuration tree with three sections:
//! `normalization` and `transliteration` hold rule-text fragments for an
//! external rule-based transliteration engine; `variants` declares, in a
//! one-line mini-language, how indexed words may be abbreviated, fused
//! with their neighbors, or split (`"Hamburg"` ↔ `"Ham burg"`, `"road"` ↔
//! `"rd"`). Compilation produces three engine-ready rule programs and a
//! deduplicated set of literal [`ReplacementPair`]s for a downstream
//! indexing stage.
//!
//! Reading configuration files and resolving includes is the caller's
//! business; this crate only consumes the resulting tree and performs no
//! I/O.
//!
//! ```
//! use word_variants::{RuleConfig, RuleFragment, RuleLoader, Section};
//!
//! let config = RuleConfig {
//!     normalization: Section::Value(vec![RuleFragment::Text(":: lower ()".into())]),
//!     transliteration: Section::Empty,
//!     variants: Section::Empty,
//! };
//!
//! let loader = RuleLoader::new(&config)?;
//! assert_eq!(loader.normalization_rules(), ":: lower ();");
//! assert_eq!(loader.search_rules(), ":: lower ();");
//! # Ok::<(), word_variants::RuleError>(())
//! ```

#![warn(missing_docs)]

pub mod assembler;
pub mod boundary;
pub mod config;
pub mod error;
pub mod loader;
pub mod variants;

pub use boundary::Boundary;
pub use config::{RuleConfig, RuleFragment, Section, VariantBlock};
pub use error::{Result, RuleError};
pub use loader::RuleLoader;
pub use variants::{ReplacementPair, VariantRule};
