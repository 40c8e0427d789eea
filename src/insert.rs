/*! Iterative insertion with bottom-up rebalance

See the distilled spec's `4.3 Insertion` for the algorithm this mirrors line for
line. The loop condition deliberately avoids the redundant compound predicate
the distilled spec calls out as an open question — a plain `while let Some(idx)`
with an early `return` on a duplicate key is sufficient.
*/

use crate::node::{rebalance, recompute_height, Node};
use core::cmp::Ordering;

/// Inserts `new_node` (already present in `pool`, with `key` set and
/// `left`/`right`/`parent` left at their cleared `None` state) into the tree
/// rooted at `root`. Returns the new root.
///
/// A duplicate key is a no-op: `root` is returned unchanged and `new_node`'s
/// links are left as the caller provided them, for the caller to discard or
/// reuse.
pub fn insert<V>(pool: &mut [Node<V>], root: Option<usize>, new_node: usize) -> Option<usize> {
    // Children are None, so this always yields height 1.
    recompute_height(pool, new_node);

    let mut parent = None;
    let mut attach_left = false;
    let mut cursor = root;
    while let Some(idx) = cursor {
        match pool[new_node].key.cmp(&pool[idx].key) {
            Ordering::Less => {
                parent = Some(idx);
                attach_left = true;
                cursor = pool[idx].left;
            }
            Ordering::Greater => {
                parent = Some(idx);
                attach_left = false;
                cursor = pool[idx].right;
            }
            Ordering::Equal => return root,
        }
    }

    pool[new_node].parent = parent;
    if let Some(p) = parent {
        if attach_left {
            pool[p].left = Some(new_node);
        } else {
            pool[p].right = Some(new_node);
        }
    }

    let mut new_root = root;
    let mut current = Some(new_node);
    while let Some(idx) = current {
        let sub_root = rebalance(pool, idx);
        current = pool[sub_root].parent;
        if current.is_none() {
            new_root = Some(sub_root);
        }
    }
    new_root
}

#[test]
fn insert_into_empty_tree_becomes_root() {
    let mut pool = vec![Node::new(42, "only")];
    let root = insert(&mut pool, None, 0);
    assert_eq!(root, Some(0));
    assert_eq!(pool[0].height, 1);
    assert_eq!(pool[0].parent, None);
}

#[test]
fn insert_duplicate_is_a_no_op() {
    let mut pool = vec![Node::new(5, "a"), Node::new(3, "b"), Node::new(8, "c")];
    let mut root = insert(&mut pool, None, 0);
    root = insert(&mut pool, root, 1);
    root = insert(&mut pool, root, 2);

    let before = pool.clone();
    let mut dup = Node::new(5, "dup");
    dup.height = 99; // deliberately garbage, must be ignored
    pool.push(dup);
    let after_root = insert(&mut pool, root, 3);

    assert_eq!(after_root, root);
    assert_eq!(&pool[..3], &before[..3]);
}

#[test]
fn ascending_insertion_stays_balanced_via_left_rotations() {
    let n = 31usize;
    let mut pool: Vec<Node<()>> = (0..n).map(|i| Node::new(i as u64, ())).collect();
    let mut root = None;
    for i in 0..n {
        root = insert(&mut pool, root, i);
    }
    let height = pool[root.unwrap()].height;
    // ceil(1.44 * log2(31)) = 8
    assert!(height as usize <= 8, "height {height} exceeds AVL bound");
}

#[test]
fn descending_insertion_stays_balanced_via_right_rotations() {
    let n = 31usize;
    let mut pool: Vec<Node<()>> = (0..n).map(|i| Node::new((n - 1 - i) as u64, ())).collect();
    let mut root = None;
    for i in 0..n {
        root = insert(&mut pool, root, i);
    }
    let height = pool[root.unwrap()].height;
    assert!(height as usize <= 8, "height {height} exceeds AVL bound");
}
