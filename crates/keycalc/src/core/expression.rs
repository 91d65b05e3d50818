//! Pre-evaluation normalization of the history string
//!
//! The history is kept in display symbols (`×`, `÷`) and may end in a
//! dangling operator. These passes turn it into something the evaluator can
//! parse without changing what the user sees.

use crate::core::Operation;

/// Replaces display operator symbols with evaluator symbols
#[must_use]
pub fn to_evaluator_syntax(history: &str) -> String {
    history
        .chars()
        .map(|ch| Operation::from_symbol(ch).map_or(ch, |op| op.eval_symbol()))
        .collect()
}

/// Resolves a trailing operator by moving it onto the previous operator
///
/// `"5+3*"` becomes `"5*3"`: the trailing operator overwrites the rightmost
/// operator before it and is itself dropped. Input without a trailing
/// operator, or with no earlier operator to overwrite, is returned unchanged.
#[must_use]
pub fn promote_trailing_operator(expression: &str) -> String {
    let body = expression.trim_end();
    let Some(trailing) = body.chars().last() else {
        return expression.to_string();
    };
    if Operation::from_eval_symbol(trailing).is_none() {
        return expression.to_string();
    }

    let trimmed = &body[..body.len() - trailing.len_utf8()];
    let Some(index) = trimmed.rfind(['+', '-', '*', '/']) else {
        return expression.to_string();
    };

    let mut promoted = String::with_capacity(trimmed.len());
    promoted.push_str(&trimmed[..index]);
    promoted.push(trailing);
    promoted.push_str(&trimmed[index + 1..]);
    promoted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_evaluator_syntax_replaces_all_symbols() {
        assert_eq!(to_evaluator_syntax("1×2÷3×4"), "1*2/3*4");
    }

    #[test]
    fn test_to_evaluator_syntax_keeps_plus_minus() {
        assert_eq!(to_evaluator_syntax("-1+2-3"), "-1+2-3");
    }

    #[test]
    fn test_promote_replaces_previous_operator() {
        assert_eq!(promote_trailing_operator("5+3*"), "5*3");
        assert_eq!(promote_trailing_operator("8-2/"), "8/2");
    }

    #[test]
    fn test_promote_uses_rightmost_operator() {
        assert_eq!(promote_trailing_operator("1+2*3-"), "1+2-3");
    }

    #[test]
    fn test_promote_without_earlier_operator_is_unchanged() {
        assert_eq!(promote_trailing_operator("5*"), "5*");
        assert_eq!(promote_trailing_operator("-"), "-");
    }

    #[test]
    fn test_promote_leading_minus_counts_as_operator() {
        // The leading sign is the only earlier operator, so it is the one replaced
        assert_eq!(promote_trailing_operator("-5+"), "+5");
    }

    #[test]
    fn test_promote_without_trailing_operator_is_unchanged() {
        assert_eq!(promote_trailing_operator("5+3"), "5+3");
        assert_eq!(promote_trailing_operator(""), "");
    }

    #[test]
    fn test_promote_ignores_trailing_whitespace() {
        assert_eq!(promote_trailing_operator("5+3* "), "5*3");
    }
}
