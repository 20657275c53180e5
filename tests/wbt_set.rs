use std::collections::BTreeSet;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use wbt_set::{FnComparator, Rank, WbtSet};

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 5_000;

/// Generates values in a range that ensures collisions.
fn value_strategy() -> impl Strategy<Value = i64> {
    -2_000i64..2_000i64
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum SetOp {
    Insert(i64),
    Remove(i64),
    Contains(i64),
    RankOf(i64),
    GetByRank(usize),
    RemoveByRank(usize),
    PopFirst,
    PopLast,
}

fn set_op_strategy() -> impl Strategy<Value = SetOp> {
    prop_oneof![
        6 => value_strategy().prop_map(SetOp::Insert),
        3 => value_strategy().prop_map(SetOp::Remove),
        2 => value_strategy().prop_map(SetOp::Contains),
        2 => value_strategy().prop_map(SetOp::RankOf),
        2 => (0usize..2_500).prop_map(SetOp::GetByRank),
        1 => (0usize..2_500).prop_map(SetOp::RemoveByRank),
        1 => Just(SetOp::PopFirst),
        1 => Just(SetOp::PopLast),
    ]
}

/// One-based rank of `value` in a `BTreeSet`.
fn model_rank(model: &BTreeSet<i64>, value: i64) -> Option<usize> {
    model.contains(&value).then(|| model.range(..value).count() + 1)
}

fn model_nth(model: &BTreeSet<i64>, rank: usize) -> Option<i64> {
    rank.checked_sub(1).and_then(|i| model.iter().nth(i).copied())
}

// ─── Core CRUD operations ────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Replays a random sequence of operations on both `WbtSet` and
    /// `BTreeSet` and asserts identical results at every step.
    #[test]
    fn set_ops_match_btreeset(ops in proptest::collection::vec(set_op_strategy(), TEST_SIZE)) {
        let mut set: WbtSet<i64> = WbtSet::new();
        let mut model: BTreeSet<i64> = BTreeSet::new();

        for op in &ops {
            match *op {
                SetOp::Insert(v) => {
                    let expected_rank = model.range(..v).count() + 1;
                    let was_present = !model.insert(v);
                    let (rank, replaced) = set.insert_ranked(v);
                    prop_assert_eq!(replaced.is_some(), was_present, "insert({})", v);
                    prop_assert_eq!(rank, expected_rank, "insert rank({})", v);
                }
                SetOp::Remove(v) => {
                    let expected = model_rank(&model, v).map(|r| (r, v));
                    model.remove(&v);
                    prop_assert_eq!(set.remove_ranked(&v), expected, "remove({})", v);
                }
                SetOp::Contains(v) => {
                    prop_assert_eq!(set.contains(&v), model.contains(&v), "contains({})", v);
                }
                SetOp::RankOf(v) => {
                    prop_assert_eq!(set.rank_of(&v), model_rank(&model, v), "rank_of({})", v);
                }
                SetOp::GetByRank(r) => {
                    prop_assert_eq!(set.get_by_rank(r).copied(), model_nth(&model, r), "get_by_rank({})", r);
                }
                SetOp::RemoveByRank(r) => {
                    let expected = model_nth(&model, r);
                    if let Some(v) = expected {
                        model.remove(&v);
                    }
                    prop_assert_eq!(set.remove_by_rank(r), expected, "remove_by_rank({})", r);
                }
                SetOp::PopFirst => {
                    prop_assert_eq!(set.pop_first(), model.pop_first(), "pop_first()");
                }
                SetOp::PopLast => {
                    prop_assert_eq!(set.pop_last(), model.pop_last(), "pop_last()");
                }
            }
            prop_assert_eq!(set.len(), model.len(), "len mismatch after {:?}", op);
            prop_assert_eq!(set.is_empty(), model.is_empty(), "is_empty mismatch after {:?}", op);
        }

        let items: Vec<_> = set.iter().copied().collect();
        let expected: Vec<_> = model.iter().copied().collect();
        prop_assert_eq!(items, expected);
    }

    /// Iteration, callbacks and the owning iterator all agree with `BTreeSet`.
    #[test]
    fn traversals_match_btreeset(values in proptest::collection::vec(value_strategy(), 0..TEST_SIZE)) {
        let set: WbtSet<i64> = values.iter().copied().collect();
        let model: BTreeSet<i64> = values.iter().copied().collect();
        let sorted: Vec<i64> = model.iter().copied().collect();

        let forward: Vec<_> = set.iter().copied().collect();
        prop_assert_eq!(&forward, &sorted, "iter() mismatch");

        let backward: Vec<_> = set.iter().rev().copied().collect();
        let mut reversed = sorted.clone();
        reversed.reverse();
        prop_assert_eq!(&backward, &reversed, "iter().rev() mismatch");

        let mut walked = Vec::new();
        set.for_each_in_order(|v| walked.push(*v));
        prop_assert_eq!(&walked, &sorted, "for_each_in_order() mismatch");

        let mut walked_back = Vec::new();
        set.for_each_in_reverse(|v| walked_back.push(*v));
        prop_assert_eq!(&walked_back, &reversed, "for_each_in_reverse() mismatch");

        prop_assert_eq!(set.iter().len(), sorted.len());
        prop_assert_eq!(set.first(), model.first());
        prop_assert_eq!(set.last(), model.last());

        let drained: Vec<_> = set.clone().into_iter().collect();
        prop_assert_eq!(&drained, &sorted, "into_iter() mismatch");
    }

    /// For every valid rank, selecting and then ranking the result is the identity.
    #[test]
    fn rank_round_trip(values in proptest::collection::vec(value_strategy(), 1..1_000)) {
        let set: WbtSet<i64> = values.iter().copied().collect();

        for rank in 1..=set.len() {
            let element = *set.get_by_rank(rank).expect("rank is in range");
            prop_assert_eq!(set.rank_of(&element), Some(rank));
            prop_assert_eq!(set[Rank(rank)], element);
        }
        prop_assert_eq!(set.get_by_rank(0), None);
        prop_assert_eq!(set.get_by_rank(set.len() + 1), None);
    }

    /// Any insertion order of the same keys yields the same contents.
    #[test]
    fn permutation_invariance(keys in proptest::collection::btree_set(value_strategy(), 0..500), seed in any::<u64>()) {
        let sorted: Vec<i64> = keys.iter().copied().collect();
        let mut shuffled = sorted.clone();
        shuffled.shuffle(&mut StdRng::seed_from_u64(seed));

        let from_sorted: WbtSet<i64> = sorted.iter().copied().collect();
        let from_shuffled: WbtSet<i64> = shuffled.iter().copied().collect();

        prop_assert_eq!(from_shuffled.iter().copied().collect::<Vec<_>>(), sorted);
        prop_assert_eq!(from_sorted, from_shuffled);
    }

    /// Inserting an element twice does not change the contents.
    #[test]
    fn repeated_insert_is_idempotent(values in proptest::collection::vec(value_strategy(), 0..500)) {
        let mut set: WbtSet<i64> = values.iter().copied().collect();
        let before = set.clone();
        for &v in &values {
            prop_assert_eq!(set.insert(v), Some(v));
        }
        prop_assert_eq!(set, before);
    }

    /// `retain` keeps exactly what `BTreeSet::retain` keeps.
    #[test]
    fn retain_matches_btreeset(values in proptest::collection::vec(value_strategy(), 0..1_000), modulus in 2i64..7) {
        let mut set: WbtSet<i64> = values.iter().copied().collect();
        let mut model: BTreeSet<i64> = values.iter().copied().collect();

        set.retain(|v| v % modulus == 0);
        model.retain(|v| v % modulus == 0);

        prop_assert_eq!(set.iter().copied().collect::<Vec<_>>(), model.into_iter().collect::<Vec<_>>());
    }
}

// ─── The shuffled 1..=100 scenario ───────────────────────────────────────────

const SHUFFLED_1_TO_100: [u64; 100] = [
    5, 8, 22, 46, 19, 93, 80, 6, 64, 97, 71, 63, 85, 11, 44, 43, 41, 59, 68, 91, 87, 72, 15, 30, 77, 100, 83, 61,
    12, 98, 13, 73, 48, 16, 84, 28, 32, 82, 24, 50, 7, 53, 26, 78, 60, 92, 95, 18, 67, 21, 33, 89, 38, 27, 17, 52,
    79, 86, 56, 76, 45, 54, 20, 58, 66, 37, 2, 70, 81, 9, 1, 94, 40, 55, 42, 36, 96, 14, 74, 51, 4, 57, 75, 39, 62,
    90, 29, 69, 3, 49, 31, 47, 34, 65, 25, 10, 23, 99, 88, 35,
];

fn check_hundred(order: &[u64]) {
    let mut set = WbtSet::new();
    for &x in order {
        assert_eq!(set.insert(x), None);
    }
    assert_eq!(set.len(), 100);

    let mut ascending = Vec::new();
    set.for_each_in_order(|x| ascending.push(*x));
    assert_eq!(ascending, (1..=100).collect::<Vec<u64>>());

    assert_eq!(set.get_by_rank(7), Some(&7));
    assert_eq!(set.remove_by_rank(52), Some(52));

    let mut descending = Vec::new();
    set.for_each_in_reverse(|x| descending.push(*x));
    assert_eq!(descending, (1..=100).rev().filter(|&x| x != 52).collect::<Vec<u64>>());

    for i in 0..120u64 {
        assert_eq!(set.contains(&i), (1..=100).contains(&i) && i != 52, "contains({i})");
    }
}

#[test]
fn shuffled_hundred_fixed_order() {
    check_hundred(&SHUFFLED_1_TO_100);
}

#[test]
fn shuffled_hundred_seeded_orders() {
    let mut order: Vec<u64> = (1..=100).collect();
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..32 {
        order.shuffle(&mut rng);
        check_hundred(&order);
    }
}

// ─── Set semantics ───────────────────────────────────────────────────────────

#[test]
fn insert_overwrites_matching_payload() {
    let by_key = FnComparator::new(|a: &(u32, &str), b: &(u32, &str)| a.0 == b.0, |a: &(u32, &str), b: &(u32, &str)| a.0 < b.0);
    let mut set = WbtSet::with_comparator(by_key);

    assert_eq!(set.insert((2, "two")), None);
    assert_eq!(set.insert((1, "one")), None);
    assert_eq!(set.len(), 2);

    assert_eq!(set.insert((2, "TWO")), Some((2, "two")));
    assert_eq!(set.len(), 2);
    assert_eq!(set.get(&(2, "")), Some(&(2, "TWO")));
    assert_eq!(set.get_ranked(&(2, "")), Some((2, &(2, "TWO"))));
    assert_eq!(set.remove(&(1, "")), Some((1, "one")));
    assert_eq!(set.iter().collect::<Vec<_>>(), [&(2, "TWO")]);
}

#[test]
fn remove_absent_is_noop() {
    let mut set = WbtSet::from([1, 2, 3]);
    let before = set.clone();
    assert_eq!(set.remove(&4), None);
    assert_eq!(set.remove_ranked(&0), None);
    assert_eq!(set.remove_by_rank(0), None);
    assert_eq!(set.remove_by_rank(4), None);
    assert_eq!(set, before);
}

#[test]
fn remove_then_contains_is_false() {
    let mut set: WbtSet<i32> = (0..64).collect();
    for x in (0..64).step_by(5) {
        let len = set.len();
        assert_eq!(set.remove(&x), Some(x));
        assert_eq!(set.len(), len - 1);
        assert!(!set.contains(&x));
    }
}

#[test]
fn descending_comparator_reverses_ranks() {
    let descending = FnComparator::new(|a: &i32, b: &i32| a == b, |a: &i32, b: &i32| a > b);
    let mut set: WbtSet<i32, _> = WbtSet::with_comparator(descending);
    set.extend(1..=10);
    assert_eq!(set.get_by_rank(1), Some(&10));
    assert_eq!(set.rank_of(&1), Some(10));
    assert_eq!(set.first(), Some(&10));
    assert_eq!(set.pop_last(), Some(1));
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn index_past_end_panics() {
    let set = WbtSet::from([1, 2, 3]);
    let _ = set[Rank(4)];
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn index_zero_panics() {
    let set = WbtSet::from([1, 2, 3]);
    let _ = set[Rank(0)];
}

#[test]
fn clear_then_reuse() {
    let mut set: WbtSet<i32> = (0..100).collect();
    set.clear();
    assert!(set.is_empty());
    assert_eq!(set.first(), None);
    set.insert(7);
    assert_eq!(set.get_by_rank(1), Some(&7));
}

#[test]
fn extend_from_references() {
    let mut set: WbtSet<i32> = WbtSet::new();
    let values = [3, 1, 2, 3];
    set.extend(values.iter());
    assert_eq!(set.len(), 3);
    assert_eq!(format!("{set:?}"), "{1, 2, 3}");
}

#[test]
fn capacity_and_try_apis() {
    let mut set: WbtSet<u32> = WbtSet::with_capacity(8);
    assert!(set.capacity() >= 8);
    assert_eq!(set.try_insert(4), Ok(None));
    assert_eq!(set.try_insert(4), Ok(Some(4)));
    assert!(set.try_reserve(usize::MAX).is_err());
    assert_eq!(set.len(), 1);
}

#[test]
fn hash_agrees_with_equality() {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(set: &WbtSet<i32>) -> u64 {
        let mut h = DefaultHasher::new();
        set.hash(&mut h);
        h.finish()
    }

    let a = WbtSet::from([5, 1, 9]);
    let b = WbtSet::from([9, 5, 1]);
    assert_eq!(hash_of(&a), hash_of(&b));
}
