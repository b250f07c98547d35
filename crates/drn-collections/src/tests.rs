//! Unit tests for drn-collections primitives.

#[cfg(test)]
mod ordered_map {
    use crate::OrderedMap;

    #[test]
    fn insert_get_delete_roundtrip() {
        let mut map = OrderedMap::new();
        assert_eq!(map.insert("a", 1), None);
        assert_eq!(map.insert("b", 2), None);
        assert_eq!(*map.get(&"a").unwrap(), 1);
        assert_eq!(map.insert("a", 10), Some(1));
        assert_eq!(*map.get(&"a").unwrap(), 10);
        assert_eq!(map.delete(&"a").unwrap(), 10);
        assert!(map.get(&"a").is_err());
    }

    #[test]
    fn get_missing_is_key_not_found() {
        let map: OrderedMap<i32, i32> = OrderedMap::new();
        assert!(map.get(&1).is_err());
    }

    #[test]
    fn delete_missing_is_key_not_found() {
        let mut map: OrderedMap<i32, i32> = OrderedMap::new();
        assert!(map.delete(&1).is_err());
    }

    #[test]
    fn grows_past_seventy_percent_load() {
        let mut map = OrderedMap::new();
        assert_eq!(map.capacity(), 8);
        for i in 0..6 {
            map.insert(i, i);
        }
        // 6/8 = 0.75 > 0.70 triggers a grow on the insert that crosses it.
        assert!(map.capacity() > 8);
        assert_eq!(map.size(), 6);
        for i in 0..6 {
            assert_eq!(*map.get(&i).unwrap(), i);
        }
    }

    #[test]
    fn shrinks_but_not_below_floor() {
        let mut map = OrderedMap::new();
        for i in 0..6 {
            map.insert(i, i);
        }
        let grown_capacity = map.capacity();
        for i in 0..5 {
            map.delete(&i).unwrap();
        }
        // size=1 over a capacity that may have grown; load factor well under 0.20.
        assert!(map.capacity() <= grown_capacity);
        assert!(map.capacity() >= 8);
    }

    #[test]
    fn iteration_visits_every_entry() {
        let mut map = OrderedMap::new();
        for i in 0..20 {
            map.insert(i, i * i);
        }
        let mut seen: Vec<i32> = map.values().copied().collect();
        seen.sort_unstable();
        let expected: Vec<i32> = (0..20).map(|i| i * i).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn merge_from_overwrites_on_clash() {
        let mut a = OrderedMap::new();
        a.insert(1, "a-one");
        a.insert(2, "a-two");
        let mut b = OrderedMap::new();
        b.insert(2, "b-two");
        b.insert(3, "b-three");
        a.merge_from(b);
        assert_eq!(*a.get(&1).unwrap(), "a-one");
        assert_eq!(*a.get(&2).unwrap(), "b-two");
        assert_eq!(*a.get(&3).unwrap(), "b-three");
    }
}

#[cfg(test)]
mod union_find {
    use crate::UnionFind;

    #[test]
    fn starts_fully_disjoint() {
        let uf = UnionFind::new(5);
        assert_eq!(uf.set_count(), 5);
    }

    #[test]
    fn union_merges_sets_and_reports_novelty() {
        let mut uf = UnionFind::new(4);
        assert!(uf.union(0, 1));
        assert!(!uf.union(0, 1));
        assert!(uf.connected(0, 1));
        assert!(!uf.connected(0, 2));
        assert_eq!(uf.set_count(), 3);
    }

    #[test]
    fn chained_unions_collapse_to_one_set() {
        let mut uf = UnionFind::new(6);
        uf.union(0, 1);
        uf.union(1, 2);
        uf.union(3, 4);
        uf.union(4, 5);
        uf.union(2, 3);
        assert_eq!(uf.set_count(), 1);
        for i in 1..6 {
            assert!(uf.connected(0, i));
        }
    }

    #[test]
    fn path_compression_keeps_find_consistent() {
        let mut uf = UnionFind::new(100);
        for i in 1..100 {
            uf.union(0, i);
        }
        let root = uf.find(0);
        for i in 0..100 {
            assert_eq!(uf.find(i), root);
        }
    }
}

#[cfg(test)]
mod avl_tree {
    use crate::AvlTree;

    #[test]
    fn insert_lookup_roundtrip() {
        let mut tree = AvlTree::new();
        tree.insert("r1", 100);
        tree.insert("r2", 200);
        assert_eq!(tree.get(&"r1"), Some(&100));
        assert_eq!(tree.get(&"r2"), Some(&200));
        assert_eq!(tree.get(&"r3"), None);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn insert_delete_then_lookup_is_absent() {
        let mut tree = AvlTree::new();
        tree.insert("r1", 1);
        assert_eq!(tree.delete(&"r1"), Some(1));
        assert_eq!(tree.get(&"r1"), None);
        assert_eq!(tree.len(), 0);
    }

    #[test]
    fn delete_absent_key_is_none() {
        let mut tree: AvlTree<i32, i32> = AvlTree::new();
        assert_eq!(tree.delete(&1), None);
    }

    #[test]
    fn stays_balanced_under_ascending_insert() {
        let mut tree = AvlTree::new();
        for k in 0..10 {
            let id = format!("r{:02}", k);
            tree.insert(id, k);
            assert!(tree.is_balanced());
            let bound = (1.44 * ((tree.len() as f64) + 2.0).log2()).ceil() as i64;
            assert!(tree.height() <= bound);
        }
        assert!(tree.height() <= 5);
        let ordered: Vec<&String> = tree.in_order().into_iter().map(|(k, _)| k).collect();
        let mut sorted = ordered.clone();
        sorted.sort();
        assert_eq!(ordered, sorted);
    }

    #[test]
    fn stays_balanced_under_descending_insert_and_delete() {
        let mut tree = AvlTree::new();
        for k in (0..20).rev() {
            tree.insert(k, k);
            assert!(tree.is_balanced());
        }
        for k in 0..10 {
            tree.delete(&k);
            assert!(tree.is_balanced());
        }
        assert_eq!(tree.len(), 10);
    }

    #[test]
    fn insert_or_merge_sums_prior_frequency() {
        let mut tree = AvlTree::new();
        tree.insert_or_merge("r1", 5u64, |old, new| old + new);
        tree.insert_or_merge("r1", 3u64, |old, new| old + new);
        assert_eq!(tree.get(&"r1"), Some(&8));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn in_order_ascending_for_random_insert_sequence() {
        let mut tree = AvlTree::new();
        for k in [5, 1, 9, 3, 7, 0, 8, 2, 6, 4] {
            tree.insert(k, k.to_string());
        }
        let keys: Vec<i32> = tree.in_order().into_iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, (0..10).collect::<Vec<_>>());
    }
}
