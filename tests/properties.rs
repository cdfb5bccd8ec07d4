//! Property-based tests for the calculation pipeline.

use proptest::prelude::*;
use tiercalc::{
    calculate,
    error::ParseError,
    interpreter::{evaluator::core::evaluate, grouper::group, lexer::tokenize},
};

/// Atoms that are always valid on their own.
fn atom() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["1", "2.5", "-3", "pi", "+", "-", "*", "/", "**", "!", "%", "(", ")"])
}

/// Well-formed expressions: numbers joined by operators, optionally wrapped.
fn expression() -> impl Strategy<Value = String> {
    let number = prop_oneof![(0u32..50).prop_map(|n| n.to_string()),
                             (0u32..50, 1u32..99).prop_map(|(i, f)| format!("{i}.{f}")),
                             Just("e".to_string())].boxed();
    let operator = prop::sample::select(vec!["+", "-", "*", "/", "**", "//", "log", "%"]);

    (number.clone(), prop::collection::vec((operator, number), 0..6)).prop_map(|(first, rest)| {
        let mut src = first;
        for (op, n) in rest {
            src = format!("{src} {op} {n}");
        }
        src
    })
    .prop_recursive(3, 16, 2, |inner| {
        (inner.clone(), prop::sample::select(vec!["+", "*", "-"]), inner)
            .prop_map(|(a, op, b)| format!("( {a} ) {op} ( {b} )"))
    })
}

proptest! {
    #[test]
    fn evaluation_is_deterministic(src in expression()) {
        let first = format!("{:?}", calculate(&src));
        let second = format!("{:?}", calculate(&src));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn grouping_is_transparent_to_evaluation(src in expression()) {
        let tokens = tokenize(&src, None).unwrap();
        let flat = format!("{:?}", evaluate(&tokens));
        let grouped = format!("{:?}", evaluate(&group(&tokens)));
        prop_assert_eq!(flat, grouped);
    }

    #[test]
    fn unbalanced_parentheses_never_tokenize(atoms in prop::collection::vec(atom(), 0..20)) {
        let src = atoms.join(" ");
        let opens = atoms.iter().filter(|a| **a == "(").count();
        let closes = atoms.iter().filter(|a| **a == ")").count();
        prop_assume!(opens != closes);

        let rejected = matches!(tokenize(&src, None), Err(ParseError::UnmatchedParen { .. }));
        prop_assert!(rejected, "{src:?} was not rejected as unbalanced");
    }

    #[test]
    fn higher_tiers_bind_tighter(a in 1u32..20, b in 1u32..20, c in 1u32..5) {
        let (x, y, z) = (f64::from(a), f64::from(b), f64::from(c));

        prop_assert_eq!(calculate(&format!("{a} + {b} * {c}")).unwrap(), x + y * z);
        prop_assert_eq!(calculate(&format!("{a} * {b} ** {c}")).unwrap(), x * y.powf(z));
        prop_assert_eq!(calculate(&format!("{a} - {b} - {c}")).unwrap(), (x - y) - z);
        prop_assert_eq!(calculate(&format!("{a} ** {c} ** 2")).unwrap(), x.powf(z).powf(2.0));
    }
}
