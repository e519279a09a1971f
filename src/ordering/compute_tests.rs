use super::*;
use proptest::prelude::*;

fn seq(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn test_append_to_empty() {
    assert_eq!(compute_append(&[], "a"), seq(&["a"]));
}

#[test]
fn test_append_goes_last() {
    assert_eq!(compute_append(&seq(&["a", "b"]), "c"), seq(&["a", "b", "c"]));
}

#[test]
fn test_move_clamps_past_end() {
    let next = compute_move(&seq(&["a", "b", "c"]), "a", 10).unwrap();
    assert_eq!(next, seq(&["b", "c", "a"]));
}

#[test]
fn test_move_to_front() {
    let next = compute_move(&seq(&["a", "b", "c"]), "c", 0).unwrap();
    assert_eq!(next, seq(&["c", "a", "b"]));
}

#[test]
fn test_move_preserves_relative_order_of_others() {
    let next = compute_move(&seq(&["a", "b", "c", "d"]), "d", 1).unwrap();
    assert_eq!(next, seq(&["a", "d", "b", "c"]));
}

#[test]
fn test_move_unknown_id_is_not_found() {
    let err = compute_move(&seq(&["a", "b"]), "z", 0).unwrap_err();
    assert_eq!(err, OrderingError::NotFound("z".to_string()));
}

#[test]
fn test_move_on_empty_is_not_found() {
    let err = compute_move(&[], "a", 0).unwrap_err();
    assert_eq!(err, OrderingError::NotFound("a".to_string()));
}

#[test]
fn test_noop_move_returns_sequence_unchanged() {
    let current = seq(&["a", "b", "c"]);
    let next = compute_move(&current, "b", 1).unwrap();
    assert_eq!(next, current);
}

#[test]
fn test_remove_shifts_later_ranks_down() {
    let next = compute_remove(&seq(&["a", "b", "c"]), "a").unwrap();
    assert_eq!(next, seq(&["b", "c"]));

    let assigned: Vec<(&str, u32)> = ranks(&next).collect();
    assert_eq!(assigned, vec![("b", 1), ("c", 2)]);
}

#[test]
fn test_remove_unknown_id_is_not_found() {
    let err = compute_remove(&seq(&["a", "b"]), "z").unwrap_err();
    assert_eq!(err, OrderingError::NotFound("z".to_string()));
}

#[test]
fn test_ranks_are_one_based() {
    let order = seq(&["x", "y"]);
    let assigned: Vec<(&str, u32)> = ranks(&order).collect();
    assert_eq!(assigned, vec![("x", 1), ("y", 2)]);
}

#[test]
fn test_append_then_remove_all_roundtrip() {
    let mut order = Vec::new();
    for i in 0..5 {
        order = compute_append(&order, &format!("id-{i}"));
        assert_dense(&order);
    }

    // Remove in an arbitrary (non-insertion) order
    for id in ["id-2", "id-4", "id-0", "id-3", "id-1"] {
        order = compute_remove(&order, id).unwrap();
        assert_dense(&order);
    }
    assert!(order.is_empty());
}

/// Ranks must be exactly 1..=N with no duplicate ids.
fn assert_dense(order: &[String]) {
    let mut seen = std::collections::HashSet::new();
    for id in order {
        assert!(seen.insert(id.clone()), "duplicate id {id} in ordering");
    }
    let assigned: Vec<u32> = ranks(order).map(|(_, rank)| rank).collect();
    let expected: Vec<u32> = (1..=u32::try_from(order.len()).unwrap()).collect();
    assert_eq!(assigned, expected);
}

#[derive(Debug, Clone)]
enum Op {
    Append,
    Move(usize, usize),
    Remove(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Append),
        (0usize..32, 0usize..48).prop_map(|(item, target)| Op::Move(item, target)),
        (0usize..32).prop_map(Op::Remove),
    ]
}

proptest! {
    /// Any sequence of append/move/remove operations starting from an empty
    /// collection keeps the ordering dense and keeps the id set consistent.
    #[test]
    fn prop_operations_preserve_dense_invariant(ops in prop::collection::vec(op_strategy(), 1..64)) {
        let mut order: Vec<String> = Vec::new();
        let mut created = 0u32;

        for op in ops {
            match op {
                Op::Append => {
                    let id = format!("tile-{created}");
                    created += 1;
                    order = compute_append(&order, &id);
                }
                Op::Move(item, target) => {
                    if order.is_empty() {
                        continue;
                    }
                    let id = order[item % order.len()].clone();
                    let before: std::collections::HashSet<String> =
                        order.iter().cloned().collect();
                    order = compute_move(&order, &id, target).unwrap();
                    let after: std::collections::HashSet<String> =
                        order.iter().cloned().collect();
                    prop_assert_eq!(before, after, "move changed the id set");
                }
                Op::Remove(item) => {
                    if order.is_empty() {
                        continue;
                    }
                    let id = order[item % order.len()].clone();
                    let len_before = order.len();
                    order = compute_remove(&order, &id).unwrap();
                    prop_assert_eq!(order.len(), len_before - 1);
                    prop_assert!(!order.contains(&id));
                }
            }

            assert_dense(&order);
        }
    }

    /// Clamping policy: the moved item always lands at min(desired, len - 1).
    #[test]
    fn prop_move_lands_on_clamped_index(
        len in 1usize..12,
        item in 0usize..12,
        desired in 0usize..24,
    ) {
        let order: Vec<String> = (0..len).map(|i| format!("t{i}")).collect();
        let id = order[item % len].clone();

        let next = compute_move(&order, &id, desired).unwrap();
        let landed = next.iter().position(|x| *x == id).unwrap();
        prop_assert_eq!(landed, desired.min(len - 1));
    }
}
