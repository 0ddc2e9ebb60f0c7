//! Properties of the in-place operations over random sparse sequences.

use std::cmp::Ordering;

use proptest::prelude::*;
use sequence::{ArrayLike, Method, Sequence, SequenceError, Value, invoke, ops};

fn sparse() -> impl Strategy<Value = Sequence<i32>> {
    prop::collection::vec(prop::option::weighted(0.8, -50i32..50), 0..40)
        .prop_map(Sequence::from_slots)
}

fn dense() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50i32..50, 0..40)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn pop_undoes_push(mut seq in sparse(), value in any::<i32>()) {
        let before = seq.clone();
        let len = ops::push(&mut seq, [value]);
        prop_assert_eq!(len, before.len() + 1);
        prop_assert_eq!(ops::pop(&mut seq), Some(value));
        prop_assert_eq!(seq, before);
    }

    #[test]
    fn shift_undoes_unshift(values in dense(), value in any::<i32>()) {
        prop_assume!(!values.is_empty());
        let mut seq = Sequence::from(values.clone());
        prop_assert_eq!(ops::unshift(&mut seq, [value]), values.len() + 1);
        prop_assert_eq!(ops::shift(&mut seq), Some(value));
        prop_assert_eq!(seq.to_vec(), Some(values));
    }

    #[test]
    fn splice_preserves_length_arithmetic(
        mut seq in sparse(),
        start in -50i64..50,
        delete in prop::option::of(-5i64..50),
        items in prop::collection::vec(any::<i32>(), 0..8),
    ) {
        let len = seq.len();
        let inserted = items.len();
        let removed = ops::splice(&mut seq, start, delete, items);
        prop_assert_eq!(seq.len(), len - removed.len() + inserted);
    }

    #[test]
    fn splice_agrees_with_vec_splice(
        values in dense(),
        start in -50i64..50,
        delete in 0i64..50,
        items in prop::collection::vec(any::<i32>(), 0..8),
    ) {
        let mut seq = Sequence::from(values.clone());
        let removed = ops::splice(&mut seq, start, Some(delete), items.clone());

        let mut expected = values;
        let from = sequence::index::relative_index(start, expected.len());
        let count = sequence::index::clamp_count(Some(delete), expected.len() - from);
        let expected_removed: Vec<i32> = expected.splice(from..from + count, items).collect();

        prop_assert_eq!(removed.to_vec(), Some(expected_removed));
        prop_assert_eq!(seq.to_vec(), Some(expected));
    }

    #[test]
    fn reverse_twice_restores_values_and_holes(mut seq in sparse()) {
        let before = seq.clone();
        ops::reverse(&mut seq);
        prop_assert_eq!(seq.hole_count(), before.hole_count());
        ops::reverse(&mut seq);
        prop_assert_eq!(seq, before);
    }

    #[test]
    fn sort_orders_adjacent_pairs_and_keeps_holes_last(mut seq in sparse()) {
        let len = seq.len();
        let holes = seq.hole_count();
        ops::sort(&mut seq, i32::cmp);
        prop_assert_eq!(seq.len(), len);
        prop_assert_eq!(seq.hole_count(), holes);

        let present = len - holes;
        prop_assert!(seq.slots()[present..].iter().all(Option::is_none));
        for pair in seq.slots()[..present].windows(2) {
            prop_assert_ne!(pair[0].cmp(&pair[1]), Ordering::Greater);
        }
    }

    #[test]
    fn sort_is_a_permutation(values in dense()) {
        let mut seq = Sequence::from(values.clone());
        ops::sort(&mut seq, |a, b| b.cmp(a));
        let mut expected = values;
        expected.sort_by(|a, b| b.cmp(a));
        prop_assert_eq!(seq.to_vec(), Some(expected));
    }

    #[test]
    fn derivations_do_not_mutate(
        seq in sparse(),
        begin in prop::option::of(-50i64..50),
        end in prop::option::of(-50i64..50),
    ) {
        let before = seq.clone();
        let sliced = ops::slice(&seq, begin, end);
        let _ = ops::concat(&seq, [1, 2]);
        let _ = ops::unique(&seq);
        let _ = ops::join(&seq, Some("-"));
        prop_assert!(sliced.len() <= seq.len());
        prop_assert_eq!(seq, before);
    }

    #[test]
    fn copy_within_keeps_length(
        mut seq in sparse(),
        to in -50i64..50,
        start in -50i64..50,
        end in prop::option::of(-50i64..50),
    ) {
        let len = seq.len();
        ops::copy_within(&mut seq, to, start, end);
        prop_assert_eq!(seq.length(), len);
    }

    #[test]
    fn unique_keeps_first_occurrences(values in dense()) {
        let seq = Sequence::from(values.clone());
        let mut seen = std::collections::HashSet::new();
        let expected: Vec<i32> = values.into_iter().filter(|v| seen.insert(*v)).collect();
        prop_assert_eq!(ops::unique(&seq).to_vec(), Some(expected));
    }

    #[test]
    fn missing_receiver_is_always_an_error(index in 0usize..27) {
        let method = sequence::all_methods()[index];
        let result = invoke::<Sequence<Value>>(None, method, &[]);
        prop_assert!(
            matches!(result, Err(SequenceError::ReceiverMissing { .. })),
            "unexpected result for {}",
            sequence::method_name(method)
        );
    }
}

#[test]
fn rejected_comparator_leaves_receiver_untouched() {
    let mut seq: Sequence<Value> = [3, 1, 2].into_iter().map(Value::from).collect();
    let before = seq.clone();
    let result = invoke(Some(&mut seq), Method::Sort, &[Value::from(1)]);
    assert_eq!(
        result,
        Err(SequenceError::CallbackNotCallable {
            method: "sort",
            found: "number",
        })
    );
    assert_eq!(seq, before);
}
