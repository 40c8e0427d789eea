/*! Iterative key lookup

No side effects, O(log n) time, O(1) auxiliary space: a plain `while` loop over
the `pool` slice, comparing keys with [`core::cmp::Ordering`] at each step.
*/

use crate::node::Node;
use core::cmp::Ordering;

/// Descends from `root` comparing `key` against each visited node's key, going
/// left on `Less`, right on `Greater`, and returning on `Equal`. Returns `None`
/// if `key` is absent or the tree is empty.
pub fn lookup<V>(pool: &[Node<V>], root: Option<usize>, key: u64) -> Option<usize> {
    let mut current = root;
    while let Some(idx) = current {
        match key.cmp(&pool[idx].key) {
            Ordering::Less => current = pool[idx].left,
            Ordering::Greater => current = pool[idx].right,
            Ordering::Equal => return Some(idx),
        }
    }
    None
}

#[test]
fn lookup_in_empty_tree_is_none() {
    let pool: Vec<Node<()>> = Vec::new();
    assert_eq!(lookup(&pool, None, 5), None);
}

#[test]
fn lookup_finds_present_key_and_rejects_absent_one() {
    // root 20, left 10, right 30
    let mut pool = vec![Node::new(20, "root"), Node::new(10, "l"), Node::new(30, "r")];
    pool[0].left = Some(1);
    pool[0].right = Some(2);
    pool[1].parent = Some(0);
    pool[2].parent = Some(0);

    assert_eq!(lookup(&pool, Some(0), 10), Some(1));
    assert_eq!(lookup(&pool, Some(0), 30), Some(2));
    assert_eq!(lookup(&pool, Some(0), 20), Some(0));
    assert_eq!(lookup(&pool, Some(0), 99), None);
}
