//! Assembles rule programs from configuration fragment lists

use crate::config::RuleFragment;

/// Statement separator of the consuming engine's rule grammar
const SEPARATOR: char = ';';

/// Join rule fragments into a single engine-ready program
///
/// Nested fragment lists (the shape include expansion leaves behind) are
/// flattened depth-first in source order. Every statement, including the
/// last, is terminated with the separator, so two assembled programs can
/// be concatenated directly. An empty list yields an empty program.
pub fn assemble(fragments: &[RuleFragment]) -> String {
    let mut program = String::new();
    push_flattened(fragments, &mut program);
    program
}

fn push_flattened(fragments: &[RuleFragment], program: &mut String) {
    for fragment in fragments {
        match fragment {
            RuleFragment::Text(statement) => {
                program.push_str(statement);
                program.push(SEPARATOR);
            }
            RuleFragment::List(nested) => push_flattened(nested, program),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(statement: &str) -> RuleFragment {
        RuleFragment::Text(statement.into())
    }

    #[test]
    fn test_empty_program() {
        assert_eq!(assemble(&[]), "");
    }

    #[test]
    fn test_flat_program() {
        let program = assemble(&[text(":: lower ()"), text("ß > 'ss'")]);
        assert_eq!(program, ":: lower ();ß > 'ss';");
    }

    #[test]
    fn test_nested_fragments_preserve_order() {
        let program = assemble(&[
            text("a > b"),
            RuleFragment::List(vec![text("c > d"), text("e > f")]),
            text("g > h"),
        ]);
        assert_eq!(program, "a > b;c > d;e > f;g > h;");
    }

    #[test]
    fn test_deeply_nested_fragments() {
        let program = assemble(&[RuleFragment::List(vec![RuleFragment::List(vec![
            text("x > y"),
        ])])]);
        assert_eq!(program, "x > y;");
    }

    #[test]
    fn test_programs_concatenate_cleanly() {
        let first = assemble(&[text("a > b")]);
        let second = assemble(&[text("c > d")]);
        assert_eq!(format!("{first}{second}"), "a > b;c > d;");
    }
}
