//! Error types for rule compilation

use thiserror::Error;

/// Errors raised while compiling a rule configuration
///
/// Any error aborts compilation as a whole; a malformed rule line usually
/// means a configuration authoring mistake, and skipping it would silently
/// leave the variant data incomplete.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// A required top-level section key is absent from the configuration
    #[error("missing section '{section}' in rule configuration")]
    MissingSection {
        /// Name of the absent section
        section: &'static str,
    },

    /// A variant rule line violates the rule grammar
    #[error("syntax error in variant rule '{line}': {reason}")]
    VariantSyntax {
        /// The offending rule line
        line: String,
        /// What was wrong with it
        reason: String,
    },
}

/// Result type for rule compilation
pub type Result<T> = std::result::Result<T, RuleError>;
