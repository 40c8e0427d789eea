/*! # About
An in-place, iterative, self-balancing ordered dictionary (an AVL tree) for
real-time, safety-critical environments — the kind of control loop where an
allocator call or an unbounded recursion depth is not a performance concern but
a correctness one.

Callers provide all node storage. The crate performs no dynamic allocation,
uses no recursion anywhere in the five core operations, and is deterministic in
worst-case time and stack usage. Keys are 64-bit unsigned integers; values are
whatever the caller embeds in or associates with a node.

`#![no_std]`-capable behind the `std` Cargo feature (on by default): every
field the engine touches lives in caller-provided [`Node`] storage, and every
traversal (lookup, the rebalance walk, even the debug validator) is driven by
plain `usize` indices and parent pointers, never a heap type. A caller
targeting bare metal with no global allocator disables default features and
loses only [`tree::Pool`] (the `Vec`-backed convenience arena); the five core
operations and [`validate`] compile unconditionally under `no_std`. Test code
links `std` as usual and additionally uses `rand` to build the large
randomized fixtures in `8. TESTABLE PROPERTIES`.

# Core
- [`node`]: height accounting, rotations, and local rebalance — the primitives
  every other operation is built from.
- [`lookup`]: iterative key lookup.
- [`insert`]: iterative insertion with a bottom-up rebalance walk.
- [`remove`]: iterative deletion by in-order-successor splice, also with a
  bottom-up rebalance walk.
- [`tree`]: the [`tree::Tree`] handle (a single nullable root reference) and a
  [`tree::Pool`] convenience wrapper for callers without their own arena.
- [`validate`]: an allocation-free debug-build structural validator.

# Example
```rust
use avl_core::tree::{Pool, Tree};

let mut pool = Pool::new();
let mut tree = Tree::new();

for (key, value) in [(39, "root"), (17, "a"), (41, "b"), (13, "c"), (23, "d")] {
    let idx = pool.push(key, value);
    tree.insert(pool.as_mut_slice(), idx);
}

assert_eq!(pool.get(tree.root().unwrap()).key, 39);
assert!(tree.lookup(pool.as_slice(), 41).is_some());

tree.remove(pool.as_mut_slice(), 41);
assert!(tree.lookup(pool.as_slice(), 41).is_none());

avl_core::validate::validate(pool.as_slice(), tree.root()).expect("tree stays balanced");
```
*/

#![cfg_attr(not(feature = "std"), no_std)]

pub mod insert;
pub mod lookup;
pub mod node;
pub mod remove;
pub mod tree;
pub mod validate;

pub use node::Node;
pub use tree::Tree;
