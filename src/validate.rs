/*! Debug-only structural validator

The distilled spec's error-handling design (`7. ERROR HANDLING DESIGN`) calls for
"an optional validation walk suitable for debug-build sanity checks" rather than
a recoverable error channel on the five core operations. This module is that
walk: it checks P1–P5 (`8. TESTABLE PROPERTIES`) on every reachable node and
reports the first violation found as a [`Defect`], rather than panicking, so
tests can assert on *which* invariant broke.

The walk itself stays true to the crate's no-allocation ethos: instead of an
explicit stack (as the teacher's `InOrderIter` uses), it threads the traversal
through the same parent pointers that drive the rebalance walk, using
[`find_min`] plus a classic parent-pointer in-order successor step. O(1)
auxiliary space, no recursion, same as every other operation in this crate.
*/

use crate::node::{balance_factor, find_min, height, Node};

/// A single invariant violation, with the node index at which it was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Defect {
    /// P1: in-order key sequence was not strictly increasing at `node`.
    OutOfOrder { node: usize },
    /// P2: `node`'s parent does not point back at `node` on either side.
    ParentMismatch { node: usize },
    /// P2: `node` has no parent but is not the tree root.
    NonRootNullParent { node: usize },
    /// P3: `node.height` disagrees with its children's heights.
    HeightMismatch { node: usize, expected: u8, actual: u8 },
    /// P4: `node`'s balance factor fell outside {-1, 0, 1}.
    Unbalanced { node: usize, balance: i16 },
    /// P5: walking `parent` from `node` did not reach the tree root within
    /// `height(root)` steps.
    BrokenParentChain { node: usize },
    /// The traversal visited more nodes than exist in the tree rooted here,
    /// which can only happen if the child/parent graph contains a cycle.
    TraversalDiverged,
}

/// Walks the tree rooted at `root` in sorted-key order and checks P1–P5 on
/// every node. Returns the first [`Defect`] encountered, or `Ok(())` if none.
pub fn validate<V>(pool: &[Node<V>], root: Option<usize>) -> Result<(), Defect> {
    let root = match root {
        Some(r) => r,
        None => return Ok(()),
    };
    let root_height = pool[root].height as usize;
    let visit_limit = pool.len() + 1;

    let mut prev_key: Option<u64> = None;
    let mut visited = 0usize;
    let mut current = Some(find_min(pool, root));

    while let Some(idx) = current {
        visited += 1;
        if visited > visit_limit {
            return Err(Defect::TraversalDiverged);
        }

        if let Some(pk) = prev_key {
            if pool[idx].key <= pk {
                return Err(Defect::OutOfOrder { node: idx });
            }
        }
        prev_key = Some(pool[idx].key);

        match pool[idx].parent {
            None => {
                if idx != root {
                    return Err(Defect::NonRootNullParent { node: idx });
                }
            }
            Some(p) => {
                if pool[p].left != Some(idx) && pool[p].right != Some(idx) {
                    return Err(Defect::ParentMismatch { node: idx });
                }
            }
        }

        let expected_height = 1 + core::cmp::max(height(pool, pool[idx].left), height(pool, pool[idx].right));
        if pool[idx].height != expected_height {
            return Err(Defect::HeightMismatch {
                node: idx,
                expected: expected_height,
                actual: pool[idx].height,
            });
        }

        let balance = balance_factor(pool, idx);
        if !(-1..=1).contains(&balance) {
            return Err(Defect::Unbalanced { node: idx, balance });
        }

        if !parent_chain_reaches(pool, idx, root, root_height) {
            return Err(Defect::BrokenParentChain { node: idx });
        }

        current = inorder_successor(pool, idx);
    }

    Ok(())
}

/// Classic parent-pointer in-order successor: descend into the right subtree's
/// minimum if one exists, otherwise climb `parent` until arriving from a left
/// child. O(1) space.
fn inorder_successor<V>(pool: &[Node<V>], node: usize) -> Option<usize> {
    if let Some(r) = pool[node].right {
        return Some(find_min(pool, r));
    }
    let mut child = node;
    let mut parent = pool[node].parent;
    while let Some(p) = parent {
        if pool[p].left == Some(child) {
            return Some(p);
        }
        child = p;
        parent = pool[p].parent;
    }
    None
}

/// P5: does walking `parent` from `node` reach `root` within `limit` steps?
fn parent_chain_reaches<V>(pool: &[Node<V>], node: usize, root: usize, limit: usize) -> bool {
    let mut current = node;
    let mut steps = 0usize;
    loop {
        if current == root {
            return true;
        }
        match pool[current].parent {
            Some(p) => {
                current = p;
                steps += 1;
                if steps > limit {
                    return false;
                }
            }
            None => return false,
        }
    }
}

#[test]
fn empty_tree_validates() {
    let pool: Vec<Node<()>> = Vec::new();
    assert_eq!(validate(&pool, None), Ok(()));
}

#[test]
fn single_node_tree_validates() {
    let mut pool = vec![Node::new(5, ())];
    let root = crate::insert::insert(&mut pool, None, 0);
    assert_eq!(validate(&pool, root), Ok(()));
}

#[test]
fn detects_height_mismatch() {
    let mut pool = vec![Node::new(5, ())];
    let root = crate::insert::insert(&mut pool, None, 0);
    pool[0].height = 7;
    assert_eq!(
        validate(&pool, root),
        Err(Defect::HeightMismatch {
            node: 0,
            expected: 1,
            actual: 7
        })
    );
}

#[test]
fn detects_out_of_order_key() {
    // Build a tiny 3-node tree, then corrupt the left child's key to violate P1.
    let keys = [20u64, 10, 30];
    let mut pool: Vec<Node<()>> = keys.iter().map(|&k| Node::new(k, ())).collect();
    let mut root = None;
    for i in 0..keys.len() {
        root = crate::insert::insert(&mut pool, root, i);
    }
    pool[1].key = 25; // left child now greater than root
    assert!(matches!(
        validate(&pool, root),
        Err(Defect::OutOfOrder { node: 1 })
    ));
}

#[test]
fn thousand_node_tree_validates_at_every_step() {
    let n = 1000usize;
    let mut pool: Vec<Node<()>> = (0..n).map(|i| Node::new(i as u64, ())).collect();
    let mut root = None;
    for i in 0..n {
        root = crate::insert::insert(&mut pool, root, i);
        assert_eq!(validate(&pool, root), Ok(()));
    }
}
