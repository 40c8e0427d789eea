/*! The tree handle, and a thin ergonomic layer over the free-function core

Per the distilled spec's data model: "Tree handle. Holds a single nullable root
reference." [`Tree`] is exactly that — it owns no storage, allocates nothing,
and exists only to spare callers from threading the root index through every
call site by hand and forgetting to store the returned root back (the spec's
external-interfaces section calls this out explicitly as the one contract
callers must honor).

Node-storage provisioning is out of scope for the engine (§1), but a pool has
to come from *somewhere* for tests, demos, and everyday callers who don't want
to hand-roll their own arena. [`Pool`] is that default shape: a plain, growable
`Vec<Node<V>>` the caller owns and hands to [`Tree`]'s methods alongside the
handle, the same relationship the teacher's own arena-backed `AVLTree<T>` has
to its internal `Vec`, just with ownership moved to the caller so the engine
itself never allocates.
*/

use crate::insert::insert;
use crate::lookup::lookup;
use crate::node::{diagnostic_balance_factor, Node};
use crate::remove::remove;

/// A nullable root reference, updated in place by every mutating call so the
/// caller can never forget to store a returned root back (the one contract the
/// distilled spec's external-interfaces section insists on).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tree {
    root: Option<usize>,
}

impl Tree {
    /// An empty tree.
    pub fn new() -> Self {
        Tree { root: None }
    }

    pub fn root(&self) -> Option<usize> {
        self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Looks up `key`, returning the index of the matching node if present.
    pub fn lookup<V>(&self, pool: &[Node<V>], key: u64) -> Option<usize> {
        lookup(pool, self.root, key)
    }

    /// Inserts `new_node` (already written into `pool` at that index, with
    /// `key` set). A duplicate key is a no-op — check with [`Tree::lookup`]
    /// first, or compare afterwards, if the distinction matters to the caller.
    pub fn insert<V>(&mut self, pool: &mut [Node<V>], new_node: usize) {
        self.root = insert(pool, self.root, new_node);
    }

    /// Removes the node keyed `key`, if present. A missing key is a no-op.
    pub fn remove<V>(&mut self, pool: &mut [Node<V>], key: u64) {
        self.root = remove(pool, self.root, key);
    }

    /// Public passthrough for the diagnostic `balance_factor` operation named
    /// in the distilled spec's external-interfaces table.
    pub fn balance_factor<V>(&self, pool: &[Node<V>], node: usize) -> i16 {
        diagnostic_balance_factor(pool, node)
    }
}

/// A caller-owned `Vec`-backed pool of nodes, provided for convenience: tests,
/// demos, and callers without a pre-existing arena can reach for this instead
/// of writing their own. It is explicitly not part of the five-operation core
/// surface — a caller is always free to use a fixed-size array or an arena of
/// their own instead, as §1 anticipates ("node-storage provisioning... treated
/// as an external collaborator, not specified here").
///
/// Gated behind the `std` feature (on by default): it is the one place in this
/// crate that allocates, so a caller building under genuine `no_std` with no
/// allocator disables default features and brings their own storage instead.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct Pool<V> {
    nodes: Vec<Node<V>>,
}

#[cfg(feature = "std")]
impl<V> Default for Pool<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl<V> Pool<V> {
    pub fn new() -> Self {
        Pool { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Pool {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Appends a fresh node and returns its index, ready to hand to
    /// [`Tree::insert`].
    pub fn push(&mut self, key: u64, value: V) -> usize {
        self.nodes.push(Node::new(key, value));
        self.nodes.len() - 1
    }

    pub fn get(&self, idx: usize) -> &Node<V> {
        &self.nodes[idx]
    }

    pub fn as_slice(&self) -> &[Node<V>] {
        &self.nodes
    }

    pub fn as_mut_slice(&mut self) -> &mut [Node<V>] {
        &mut self.nodes
    }
}

#[test]
fn empty_tree_lookup_and_remove_are_nops() {
    let pool: Vec<Node<()>> = Vec::new();
    let mut tree = Tree::new();
    assert_eq!(tree.lookup(&pool, 1), None);
    tree.remove(&mut [], 1);
    assert_eq!(tree.root(), None);
}

#[test]
fn single_node_insert_then_remove_empties_tree() {
    let mut pool = Pool::new();
    let idx = pool.push(7, "only");
    let mut tree = Tree::new();
    tree.insert(pool.as_mut_slice(), idx);
    assert_eq!(tree.root(), Some(idx));
    assert_eq!(tree.lookup(pool.as_slice(), 99), None);

    tree.remove(pool.as_mut_slice(), 7);
    assert!(tree.is_empty());
}

#[test]
fn duplicate_insert_leaves_shape_and_size_unchanged() {
    let mut pool = Pool::new();
    let mut tree = Tree::new();
    for &k in &[5u64, 3, 8] {
        let idx = pool.push(k, ());
        tree.insert(pool.as_mut_slice(), idx);
    }
    let root_before = tree.root();
    let snapshot: Vec<Node<()>> = pool.as_slice().to_vec();

    let dup_idx = pool.push(5, ());
    tree.insert(pool.as_mut_slice(), dup_idx);

    assert_eq!(tree.root(), root_before);
    assert_eq!(&pool.as_slice()[..snapshot.len()], &snapshot[..]);
}

/// Drives a full insert/lookup/remove cycle over `n` nodes, validating P1-P5
/// after every single mutation, per the distilled spec's end-to-end scenarios.
fn run_end_to_end_scenario(insert_order: &[u64], remove_order: &[u64]) {
    let mut pool = Pool::with_capacity(insert_order.len());
    let mut tree = Tree::new();

    for &k in insert_order {
        let idx = pool.push(k, ());
        tree.insert(pool.as_mut_slice(), idx);
        crate::validate::validate(pool.as_slice(), tree.root())
            .unwrap_or_else(|d| panic!("invariant broken after inserting {k}: {d:?}"));
    }

    for &k in insert_order {
        assert!(
            tree.lookup(pool.as_slice(), k).is_some(),
            "key {k} missing after full insertion"
        );
    }

    for &k in remove_order {
        tree.remove(pool.as_mut_slice(), k);
        crate::validate::validate(pool.as_slice(), tree.root())
            .unwrap_or_else(|d| panic!("invariant broken after removing {k}: {d:?}"));
        assert_eq!(tree.lookup(pool.as_slice(), k), None);
    }

    assert!(tree.is_empty(), "tree should be empty after removing every key");
}

#[test]
fn sequential_insert_sequential_remove() {
    let keys: Vec<u64> = (1..=1024).collect();
    run_end_to_end_scenario(&keys, &keys);
}

#[test]
fn sequential_insert_reverse_remove() {
    let keys: Vec<u64> = (1..=1024).collect();
    let reversed: Vec<u64> = keys.iter().rev().copied().collect();
    run_end_to_end_scenario(&keys, &reversed);
}

#[test]
fn reverse_insert_sequential_remove() {
    let keys: Vec<u64> = (1..=1024).collect();
    let reversed: Vec<u64> = keys.iter().rev().copied().collect();
    run_end_to_end_scenario(&reversed, &keys);
}

#[test]
fn reverse_insert_reverse_remove() {
    let keys: Vec<u64> = (1..=1024).collect();
    let reversed: Vec<u64> = keys.iter().rev().copied().collect();
    run_end_to_end_scenario(&reversed, &reversed);
}

#[test]
fn random_permutation_insert_sequential_remove() {
    use rand::seq::SliceRandom;

    let mut universe: Vec<u64> = (0..10240).collect();
    let mut rng = rand::rng();
    universe.shuffle(&mut rng);
    let draw: Vec<u64> = universe.into_iter().take(1024).collect();

    let mut sorted_for_removal = draw.clone();
    sorted_for_removal.sort_unstable();

    run_end_to_end_scenario(&draw, &sorted_for_removal);
}
