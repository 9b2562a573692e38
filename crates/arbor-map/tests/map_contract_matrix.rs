//! Contract behavior shared by both balancing strategies: two-children
//! deletion, replace-in-place, and the diagnostic line rendering.

use arbor_map::{AvlMap, RbMap};

#[test]
fn rb_two_child_root_keeps_its_slot_matrix() {
    let mut map = RbMap::<i32, &str>::new();
    map.insert(2, "b");
    map.insert(1, "a");
    map.insert(3, "c");

    let root = map.root_index().unwrap();
    assert_eq!(map.key(root), &2);

    // Deleting the two-child root copies the in-order successor's entry
    // onto the kept node; the successor node is the one detached.
    assert_eq!(map.remove(&2), Some("b"));
    assert_eq!(map.root_index(), Some(root));
    assert_eq!(map.key(root), &3);
    assert_eq!(map.get(&3), Some(&"c"));
    assert_eq!(map.get(&2), None);
    assert_eq!(map.len(), 2);
    map.assert_valid().unwrap();
}

#[test]
fn avl_two_child_root_keeps_its_slot_matrix() {
    let mut map = AvlMap::<i32, &str>::new();
    map.insert(2, "b");
    map.insert(1, "a");
    map.insert(3, "c");

    let root = map.root_index().unwrap();
    assert_eq!(map.key(root), &2);

    assert_eq!(map.remove(&2), Some("b"));
    assert_eq!(map.root_index(), Some(root));
    assert_eq!(map.key(root), &3);
    assert_eq!(map.get(&2), None);
    assert_eq!(map.len(), 2);
    map.assert_valid().unwrap();
}

#[test]
fn insert_on_existing_key_replaces_in_place_matrix() {
    let mut avl = AvlMap::<i32, String>::new();
    assert_eq!(avl.insert(1, "one".to_string()), None);
    let slot = avl.find(&1).unwrap();
    assert_eq!(avl.insert(1, "uno".to_string()), Some("one".to_string()));
    assert_eq!(avl.find(&1), Some(slot));
    assert_eq!(avl.len(), 1);

    let mut rb = RbMap::<i32, String>::new();
    assert_eq!(rb.insert(1, "one".to_string()), None);
    let slot = rb.find(&1).unwrap();
    assert_eq!(rb.insert(1, "uno".to_string()), Some("one".to_string()));
    assert_eq!(rb.find(&1), Some(slot));
    assert_eq!(rb.len(), 1);
}

#[test]
fn remove_absent_key_is_not_an_error_matrix() {
    let mut avl = AvlMap::<i32, i32>::new();
    avl.insert(1, 10);
    assert_eq!(avl.remove(&99), None);
    assert_eq!(avl.len(), 1);

    let mut rb = RbMap::<i32, i32>::new();
    rb.insert(1, 10);
    assert_eq!(rb.remove(&99), None);
    assert_eq!(rb.len(), 1);
}

#[test]
fn print_renders_one_line_per_node_matrix() {
    let mut map = RbMap::<i32, i32>::new();
    map.insert(2, 20);
    map.insert(1, 10);
    map.insert(3, 30);

    let mut lines: Vec<String> = Vec::new();
    map.print(&mut |s: &str| lines.push(s.to_string()));

    assert_eq!(
        lines,
        vec![
            "key=1 parent=2 left=- right=-",
            "key=2 parent=- left=1 right=3",
            "key=3 parent=2 left=- right=-",
        ]
    );
}

#[test]
fn print_on_avl_matches_structure_matrix() {
    let mut map = AvlMap::<i32, i32>::new();
    for i in 1..=3 {
        map.insert(i, i);
    }

    let mut lines: Vec<String> = Vec::new();
    map.print(&mut |s: &str| lines.push(s.to_string()));

    // 1, 2, 3 in ascending order triggers one left rotation: 2 roots the
    // tree with 1 and 3 as leaves.
    assert_eq!(
        lines,
        vec![
            "key=1 parent=2 left=- right=-",
            "key=2 parent=- left=1 right=3",
            "key=3 parent=2 left=- right=-",
        ]
    );
}

#[test]
fn dump_renders_metadata_matrix() {
    let mut avl = AvlMap::<i32, i32>::new();
    avl.insert(1, 10);
    let dump = avl.dump();
    assert!(dump.contains("h=0"));
    assert!(dump.contains("1 = 10"));

    let mut rb = RbMap::<i32, i32>::new();
    rb.insert(1, 10);
    let dump = rb.dump();
    assert!(dump.contains("black"));
    assert!(dump.contains("1 = 10"));
}

#[test]
fn slots_are_reused_after_removal_matrix() {
    let mut map = AvlMap::<i32, i32>::new();
    for i in 0..64 {
        map.insert(i, i);
    }
    for i in 0..64 {
        assert_eq!(map.remove(&i), Some(i));
    }
    assert!(map.is_empty());

    // Refilling an emptied map recycles freed slots instead of growing.
    for i in 0..64 {
        map.insert(i, i);
    }
    assert_eq!(map.len(), 64);
    assert!(map.find(&0).unwrap() < 64);
    map.assert_valid().unwrap();
}
