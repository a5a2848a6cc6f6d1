use proptest::prelude::*;
use rseq::Seq;

fn small_vec() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-1000i32..1000, 0..40)
}

proptest! {
    #[test]
    fn map_preserves_length_and_order(items in small_vec()) {
        let mapped = Seq::from(items.clone()).map(|x| x * 2 + 1).collect();
        prop_assert_eq!(mapped, items.iter().map(|x| x * 2 + 1).collect::<Vec<_>>());
    }

    #[test]
    fn filter_yields_matching_subsequence(items in small_vec()) {
        let filtered = Seq::from(items.clone()).filter(|x| x % 3 == 0).collect();
        prop_assert_eq!(filtered, items.into_iter().filter(|x| x % 3 == 0).collect::<Vec<_>>());
    }

    #[test]
    fn take_yields_prefix(items in small_vec(), n in 0usize..50) {
        let taken = Seq::from(items.clone()).take(n).collect();
        let expected = n.min(items.len());
        prop_assert_eq!(taken.len(), expected);
        prop_assert_eq!(&taken[..], &items[..expected]);
    }

    #[test]
    fn take_then_skip_reconstructs(items in small_vec(), n in 0usize..50) {
        let mut joined = Seq::from(items.clone()).take(n).collect();
        joined.extend(Seq::from(items.clone()).skip(n).collect());
        prop_assert_eq!(joined, items);
    }

    #[test]
    fn chain_concatenates(a in small_vec(), b in small_vec()) {
        let chained = Seq::from(a.clone()).chain(b.clone()).collect();
        prop_assert_eq!(chained, [a, b].concat());
    }

    #[test]
    fn zip_truncates_to_shorter(a in small_vec(), b in small_vec()) {
        let zipped = Seq::from(a.clone()).zip(Seq::from(b.clone())).collect();
        prop_assert_eq!(zipped.len(), a.len().min(b.len()));
    }

    #[test]
    fn count_matches_collect(items in small_vec()) {
        prop_assert_eq!(Seq::from(items.clone()).count(), Seq::from(items).collect().len());
    }

    #[test]
    fn fold_add_equals_sum(items in small_vec()) {
        let folded = Seq::from(items.clone()).fold(0i64, |acc, x| acc + x as i64);
        prop_assert_eq!(folded, Seq::from(items).map(i64::from).sum());
    }

    #[test]
    fn noop_inspect_is_identity(items in small_vec()) {
        prop_assert_eq!(Seq::from(items.clone()).inspect(|_| {}).collect(), items);
    }

    #[test]
    fn max_min_values_match_std(items in small_vec()) {
        let max = Seq::from(items.clone()).max();
        let min = Seq::from(items.clone()).min();
        prop_assert_eq!(max, items.iter().copied().max());
        prop_assert_eq!(min, items.iter().copied().min());
    }

    #[test]
    fn nth_matches_index(items in small_vec(), n in 0usize..50) {
        prop_assert_eq!(Seq::from(items.clone()).nth(n), items.get(n).copied());
    }
}

#[test]
fn empty_sequence_boundaries() {
    assert_eq!(Seq::<i32>::empty().sum(), 0);
    assert_eq!(Seq::<i32>::empty().product(), 1);
    assert_eq!(Seq::<i32>::empty().max(), None);
    assert_eq!(Seq::<i32>::empty().min(), None);
    assert_eq!(Seq::<i32>::empty().find(|_| true), None);
    assert_eq!(Seq::<i32>::empty().last(), None);
}

#[test]
fn scenarios() {
    let total = Seq::from([1, 2, 3, 4, 5, 6, 7, 8, 9, 10])
        .filter(|x| x % 2 == 0)
        .map(|x| x * 3)
        .filter_map(|x| if x > 20 { Some(x) } else { None })
        .fold(0, |acc, x| acc + x);
    assert_eq!(total, 54);
    assert_eq!(Seq::from([1, 2]).zip(Seq::from(["a", "b", "c"])).collect(), vec![(1, "a"), (2, "b")]);
    assert_eq!(Seq::from(Vec::<i32>::new()).take(3).collect(), Vec::<i32>::new());
    assert_eq!(Seq::from([1, 2, 3]).skip(5).collect(), Vec::<i32>::new());
    assert_eq!(Seq::from([[1, 2], [3, 4], [5, 6]]).flatten().collect(), vec![1, 2, 3, 4, 5, 6]);
}
