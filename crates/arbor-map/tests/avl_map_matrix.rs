use arbor_map::AvlMap;

#[test]
fn avl_map_smoke_matrix() {
    let mut map = AvlMap::<i32, i32>::new();
    map.insert(1, 1);
    map.insert(3, 5);
    map.insert(4, 5);
    map.insert(3, 15);
    map.insert(41, 0);
    map.insert(44, 123);

    assert_eq!(map.get(&44), Some(&123));
    assert_eq!(map.get(&3), Some(&15));

    let mut keys = Vec::new();
    map.for_each(|_i, n| keys.push(n.k));
    assert_eq!(keys, vec![1, 3, 4, 41, 44]);
    map.assert_valid().unwrap();
}

#[test]
fn avl_map_iteration_matrix() {
    let mut map = AvlMap::<String, i32>::new();
    assert_eq!(map.first(), None);

    map.insert("a".to_string(), 1);
    map.insert("b".to_string(), 2);
    map.insert("c".to_string(), 3);

    let mut list = Vec::new();
    let mut entry = map.first();
    while let Some(i) = entry {
        list.push((map.key(i).clone(), *map.value(i)));
        entry = map.next(i);
    }
    assert_eq!(
        list,
        vec![
            ("a".to_string(), 1),
            ("b".to_string(), 2),
            ("c".to_string(), 3)
        ]
    );

    let from_iter: Vec<(String, i32)> = map.iter().map(|(k, v)| (k.clone(), *v)).collect();
    assert_eq!(
        from_iter,
        vec![
            ("a".to_string(), 1),
            ("b".to_string(), 2),
            ("c".to_string(), 3)
        ]
    );

    let mut back = Vec::new();
    let mut entry = map.last();
    while let Some(i) = entry {
        back.push(map.key(i).clone());
        entry = map.prev(i);
    }
    assert_eq!(back, vec!["c", "b", "a"]);

    let keys: Vec<String> = map.keys().cloned().collect();
    assert_eq!(keys, vec!["a", "b", "c"]);
    let values: Vec<i32> = map.values().copied().collect();
    assert_eq!(values, vec![1, 2, 3]);
}

#[test]
fn avl_map_ladder_insert_delete_matrix() {
    let mut map = AvlMap::<i32, i32>::new();

    for i in 0..300 {
        map.insert(i, i);
        map.assert_valid().unwrap();
    }
    assert_eq!(map.len(), 300);

    for i in (0..300).step_by(3) {
        assert_eq!(map.remove(&i), Some(i));
        map.assert_valid().unwrap();
    }

    for i in 0..300 {
        if i % 3 == 0 {
            assert_eq!(map.get(&i), None);
        } else {
            assert_eq!(map.get(&i), Some(&i));
        }
    }
}

#[test]
fn avl_map_descending_and_interleaved_matrix() {
    let mut map = AvlMap::<i32, i32>::new();
    for i in (0..200).rev() {
        map.insert(i, -i);
        map.assert_valid().unwrap();
    }
    for i in 0..100 {
        assert_eq!(map.remove(&(i * 2)), Some(-(i * 2)));
        map.insert(1000 + i, i);
        map.assert_valid().unwrap();
    }
    assert_eq!(map.len(), 200);
}

#[test]
fn avl_map_ascending_chain_stays_logarithmic() {
    // Keys 1..=7 in ascending order; single rotations at each level keep
    // the tree a perfect shape of height 2 instead of a chain.
    let mut map = AvlMap::<i32, i32>::new();
    for i in 1..=7 {
        map.insert(i, i * 10);
    }
    map.assert_valid().unwrap();
    assert_eq!(map.height(), 2);

    let root = map.root_index().unwrap();
    assert_eq!(map.key(root), &4);

    let keys: Vec<i32> = map.keys().copied().collect();
    assert_eq!(keys, vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn avl_map_misc_api_matrix() {
    let mut map = AvlMap::<i32, i32>::new();
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
    assert_eq!(map.height(), -1);
    assert_eq!(map.remove(&10), None);

    map.insert(10, 100);
    let i5 = map.insert(5, 50).is_none();
    map.insert(20, 200);
    assert!(i5);

    assert!(!map.is_empty());
    assert!(map.find(&5).is_some());
    assert_eq!(map.get(&10), Some(&100));
    assert_eq!(map.first().map(|i| *map.key(i)), Some(5));
    assert_eq!(map.last().map(|i| *map.key(i)), Some(20));

    *map.get_mut(&10).unwrap() = 101;
    let i20 = map.find(&20).unwrap();
    *map.value_mut(i20) = 201;
    assert_eq!(map.get(&10), Some(&101));
    assert_eq!(map.get(&20), Some(&201));

    assert!(map.contains_key(&10));
    assert!(map.contains_value(&101));
    assert!(!map.contains_value(&100));

    assert_eq!(map.remove(&10), Some(101));
    assert_eq!(map.remove(&10), None);
    assert_eq!(map.len(), 2);

    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
    assert_eq!(map.first(), None);
    map.assert_valid().unwrap();
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Pair(i32, i32);

#[test]
fn avl_map_custom_comparator_matrix() {
    let cmp = |a: &Pair, b: &Pair| a.0.cmp(&b.0).then(a.1.cmp(&b.1));
    let mut map = AvlMap::<Pair, i32, _>::with_comparator(cmp);
    map.insert(Pair(0, 0), 1);
    map.insert(Pair(0, 1), 2);
    map.insert(Pair(2, 3), 3);
    map.insert(Pair(3, 3), 4);
    assert_eq!(map.len(), 4);
    map.assert_valid().unwrap();

    assert_eq!(map.remove(&Pair(0, 0)), Some(1));
    assert!(!map.contains_key(&Pair(0, 0)));
    assert!(map.contains_key(&Pair(0, 1)));
}
