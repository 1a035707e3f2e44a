use super::*;

use crate::alphabet;

use proptest::prelude::*;
use proptest_derive::Arbitrary;
use std::collections::BTreeSet;

/// One trie of each encoding, kept concrete so integrity checks stay
/// reachable.
#[derive(Default)]
struct Forest {
    array: ArrayTrie,
    list: ListTrie,
    radix: RadixTrie,
}

impl Forest {
    fn insert(&mut self, key: &str) {
        self.array.insert(key);
        self.list.insert(key);
        self.radix.insert(key);
    }

    fn tries(&self) -> [&dyn Trie; 3] {
        [&self.array, &self.list, &self.radix]
    }

    fn counts(&self) -> [usize; 3] {
        self.tries().map(|t| t.count())
    }
}

fn validate_forest(f: &Forest) {
    assert_eq!(f.array.verify_integrity(), Vec::<String>::new());
    assert_eq!(f.list.verify_integrity(), Vec::<String>::new());
    assert_eq!(f.radix.verify_integrity(), Vec::<String>::new());

    // One node per distinct prefix in both uncompressed encodings.
    assert_eq!(f.array.count(), f.list.count());
    assert!(f.radix.count() <= f.list.count());
}

fn canonical(key: &str) -> String {
    key.chars().map(alphabet::fold).collect()
}

fn key_strategy() -> impl Strategy<Value = String> + Clone {
    // A narrow alphabet so keys share prefixes and edges get split often.
    let symbols = vec!['a', 'b', 'c', 'e', 'A', 'B', '-', '\''];
    prop::collection::vec(prop::sample::select(symbols), 0..=8)
        .prop_map(|chars| chars.into_iter().collect())
}

fn unicode_key_strategy() -> impl Strategy<Value = String> {
    // Mixes one-, two- and three-byte characters with shared lead bytes.
    let symbols = vec!['a', 'b', 'é', 'è', 'É', '日', '本', '曜'];
    prop::collection::vec(prop::sample::select(symbols), 0..=6)
        .prop_map(|chars| chars.into_iter().collect())
}

#[derive(Clone, Debug, Arbitrary)]
enum Op {
    #[proptest(weight = 3)]
    Insert(#[proptest(strategy = "key_strategy()")] String),
    #[proptest(weight = 2)]
    Search(#[proptest(strategy = "key_strategy()")] String),
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 50_000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence(ops in prop::collection::vec(any::<Op>(), 0..=300)) {
        let mut f = Forest::default();
        let mut m: BTreeSet<String> = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(key) => {
                    let before = f.counts();
                    f.insert(&key);
                    let after = f.counts();
                    for (b, a) in before.iter().zip(after.iter()) {
                        prop_assert!(a >= b, "count shrank inserting {:?}", key);
                    }
                    m.insert(canonical(&key));
                }
                Op::Search(key) => {
                    let expected = m.contains(&canonical(&key));
                    for t in f.tries() {
                        prop_assert_eq!(t.search(&key), expected, "{} on {:?}", t.kind(), key);
                    }
                }
            }
        }

        validate_forest(&f);
        for key in &m {
            for t in f.tries() {
                prop_assert!(t.search(key), "{} lost {:?}", t.kind(), key);
            }
            // Proper prefixes are only found if inserted themselves.
            for (i, _) in key.char_indices() {
                let prefix = &key[..i];
                for t in f.tries() {
                    prop_assert_eq!(t.search(prefix), m.contains(prefix));
                }
            }
        }
    }

    #[test]
    fn prop_reinsert_is_noop(keys in prop::collection::vec(key_strategy(), 0..=100)) {
        let mut f = Forest::default();
        for k in &keys {
            f.insert(k);
        }
        let stats = f.tries().map(|t| t.stats());

        for k in keys.iter().rev() {
            f.insert(k);
        }
        prop_assert_eq!(f.tries().map(|t| t.stats()), stats);
    }

    #[test]
    fn prop_shape_is_order_independent(keys in prop::collection::vec(key_strategy(), 0..=60)) {
        let mut forward = Forest::default();
        let mut backward = Forest::default();
        for k in &keys {
            forward.insert(k);
        }
        for k in keys.iter().rev() {
            backward.insert(k);
        }

        prop_assert_eq!(
            forward.tries().map(|t| t.stats()),
            backward.tries().map(|t| t.stats())
        );
    }

    #[test]
    fn prop_linked_variants_agree_on_unicode(
        keys in prop::collection::vec(unicode_key_strategy(), 0..=60),
        probes in prop::collection::vec(unicode_key_strategy(), 0..=60),
    ) {
        let mut list = ListTrie::new();
        let mut radix = RadixTrie::new();
        let mut m: BTreeSet<String> = BTreeSet::new();
        for k in &keys {
            list.insert(k);
            radix.insert(k);
            m.insert(canonical(k));
        }

        prop_assert!(list.verify_integrity().is_empty());
        prop_assert!(radix.verify_integrity().is_empty());
        for p in keys.iter().chain(probes.iter()) {
            let expected = m.contains(&canonical(p));
            prop_assert_eq!(list.search(p), expected, "list on {:?}", p);
            prop_assert_eq!(radix.search(p), expected, "radix on {:?}", p);
        }
    }
}

fn for_each_permutation<T: Clone>(items: &[T], mut f: impl FnMut(Vec<T>)) {
    fn rec<T: Clone>(items: &[T], used: &mut [bool], out: &mut Vec<T>, f: &mut impl FnMut(Vec<T>)) {
        if out.len() == items.len() {
            f(out.clone());
            return;
        }
        for i in 0..items.len() {
            if used[i] {
                continue;
            }
            used[i] = true;
            out.push(items[i].clone());
            rec(items, used, out, f);
            out.pop();
            used[i] = false;
        }
    }

    let mut used = vec![false; items.len()];
    let mut out = Vec::with_capacity(items.len());
    rec(items, &mut used, &mut out, &mut f);
}

#[test]
fn exhaustive_insert_order_small_set() {
    let keys = ["te", "test", "team", "tea", "t", "toast"];
    let mut expected: Option<[TrieStats; 3]> = None;

    for_each_permutation(&keys, |perm| {
        let mut f = Forest::default();
        for k in &perm {
            f.insert(k);
        }

        validate_forest(&f);
        for t in f.tries() {
            for k in keys {
                assert!(t.search(k), "{} lost {k:?} after {perm:?}", t.kind());
            }
            for k in ["", "to", "tes", "teams", "x"] {
                assert!(!t.search(k), "{} found {k:?} after {perm:?}", t.kind());
            }
        }

        let stats = f.tries().map(|t| t.stats());
        match expected {
            Some(e) => assert_eq!(stats, e, "shape depends on order {perm:?}"),
            None => expected = Some(stats),
        }
    });

    // -, t, e, a, m, s, t, o, a, s, t
    let [array, list, radix] = expected.unwrap_or_default();
    assert_eq!(array.nodes, 11);
    assert_eq!(list.nodes, 11);
    // -, t, e, a, m, st, oast
    assert_eq!(radix.nodes, 7);
}
