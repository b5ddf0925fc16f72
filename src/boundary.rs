//! Word-boundary decorations for generated patterns
//!
//! Generated patterns carry literal boundary decorations: a space for a
//! word boundary, nothing for an attached edge, and a caret for the string
//! anchors. The consuming engine's rule grammar uses the same caret glyph
//! for both the start and the end anchor, so the exact strings emitted
//! here are part of the output format.

/// Boundary decoration for one side of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// Standalone word boundary
    Space,
    /// No separator; the word fuses with its neighbor
    Attached,
    /// Absolute start of the indexed string (left side only)
    StartAnchor,
    /// Absolute end of the indexed string (right side only)
    EndAnchor,
}

impl Boundary {
    /// Literal decoration emitted into a generated pattern
    pub fn decoration(self) -> &'static str {
        match self {
            Boundary::Space => " ",
            Boundary::Attached => "",
            Boundary::StartAnchor => "^ ",
            Boundary::EndAnchor => " ^",
        }
    }
}

/// Wrap a word with its left and right boundary decorations
pub fn decorate(word: &str, left: Boundary, right: Boundary) -> String {
    let mut pattern = String::with_capacity(word.len() + 4);
    pattern.push_str(left.decoration());
    pattern.push_str(word);
    pattern.push_str(right.decoration());
    pattern
}
