/*! Iterative deletion by in-order-successor splice with bottom-up rebalance

See the distilled spec's `4.4 Deletion`. The two spec-named cases "two children"
and "right-only child" collapse into one code path below: whenever `target.right`
is non-null, [`find_min`] of it is used as the splice replacement, and that
naturally degenerates to `successor == target.right` when the right subtree has
no left spine — exactly the right-only case, with `successor.parent == target`
selecting the matching rebalance origin.
*/

use crate::lookup::lookup;
use crate::node::{find_min, rebalance, Node};

/// Removes the node keyed `key` from the tree rooted at `root`, if present.
/// Returns the new root. A missing key is a no-op (the original root is
/// returned unchanged).
///
/// The removed node's `left`, `right`, and `parent` fields are cleared to
/// `None` before returning so the caller may safely reuse or release its slot;
/// `key` and `value` are left untouched.
pub fn remove<V>(pool: &mut [Node<V>], root: Option<usize>, key: u64) -> Option<usize> {
    let target = match lookup(pool, root, key) {
        Some(t) => t,
        None => return root,
    };

    let origin: Option<usize>;
    let replacement: Option<usize>;

    if let Some(right) = pool[target].right {
        let successor = find_min(pool, right);
        let succ_parent = pool[successor]
            .parent
            .expect("successor is reached by descending from target, so it has a parent");
        let succ_right = pool[successor].right;

        if succ_parent == target {
            pool[target].right = succ_right;
        } else {
            pool[succ_parent].left = succ_right;
        }
        if let Some(r) = succ_right {
            pool[r].parent = Some(succ_parent);
        }

        origin = Some(if succ_parent == target {
            successor
        } else {
            succ_parent
        });

        let new_left = pool[target].left;
        let new_right = pool[target].right; // possibly updated by the detach above
        pool[successor].left = new_left;
        pool[successor].right = new_right;
        if let Some(l) = new_left {
            pool[l].parent = Some(successor);
        }
        if let Some(r) = new_right {
            pool[r].parent = Some(successor);
        }
        pool[successor].parent = pool[target].parent;

        replacement = Some(successor);
    } else if let Some(left) = pool[target].left {
        pool[left].parent = pool[target].parent;
        origin = Some(left);
        replacement = Some(left);
    } else {
        origin = pool[target].parent;
        replacement = None;
    }

    let target_parent = pool[target].parent;
    if let Some(p) = target_parent {
        if pool[p].left == Some(target) {
            pool[p].left = replacement;
        } else {
            debug_assert_eq!(pool[p].right, Some(target));
            pool[p].right = replacement;
        }
    }
    let mut new_root = if target_parent.is_none() {
        replacement
    } else {
        root
    };

    pool[target].left = None;
    pool[target].right = None;
    pool[target].parent = None;

    let mut current = origin;
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
fn remove_missing_key_is_a_no_op() {
    let mut pool = vec![Node::new(5, "a")];
    let root = crate::insert::insert(&mut pool, None, 0);
    let after = remove(&mut pool, root, 999);
    assert_eq!(after, root);
}

#[test]
fn remove_leaf_empties_single_node_tree() {
    let mut pool = vec![Node::new(5, "a")];
    let root = crate::insert::insert(&mut pool, None, 0);
    let after = remove(&mut pool, root, 5);
    assert_eq!(after, None);
    assert_eq!(pool[0].parent, None);
    assert_eq!(pool[0].left, None);
    assert_eq!(pool[0].right, None);
}

#[test]
fn remove_node_with_two_children_splices_successor() {
    let keys = [20u64, 10, 30, 25, 40];
    let mut pool: Vec<Node<()>> = keys.iter().map(|&k| Node::new(k, ())).collect();
    let mut root = None;
    for i in 0..keys.len() {
        root = crate::insert::insert(&mut pool, root, i);
    }

    // Remove 20, the root, which has two children (10 and 30); successor is 25.
    root = remove(&mut pool, root, 20);
    assert_eq!(root, Some(3)); // index 3 holds key 25
    assert_eq!(pool[3].key, 25);
    assert_eq!(crate::lookup::lookup(&pool, root, 20), None);
    for &k in &[10u64, 25, 30, 40] {
        assert!(crate::lookup::lookup(&pool, root, k).is_some());
    }
}

#[test]
fn remove_right_only_child_uses_child_itself_as_successor() {
    let keys = [10u64, 20];
    let mut pool: Vec<Node<()>> = keys.iter().map(|&k| Node::new(k, ())).collect();
    let mut root = None;
    for i in 0..keys.len() {
        root = crate::insert::insert(&mut pool, root, i);
    }
    // 10 has only a right child, 20.
    let after = remove(&mut pool, root, 10);
    assert_eq!(after, Some(1));
    assert_eq!(pool[1].left, None);
    assert_eq!(pool[1].parent, None);
}
