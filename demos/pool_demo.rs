//! A small, runnable illustration of caller-owned node storage.
//!
//! Node-storage provisioning is explicitly out of scope for the library (a
//! static array, a pool, or a caller's own arena are all equally valid). This
//! demo just picks one concrete shape — [`avl_core::tree::Pool`], a thin
//! `Vec`-backed wrapper — and drives it the way a real caller would: push
//! nodes in, hand their index to `Tree::insert`, and keep the `Tree` handle's
//! returned root up to date.

use avl_core::tree::{Pool, Tree};

fn main() {
    let mut pool: Pool<&str> = Pool::new();
    let mut tree = Tree::new();

    let entries = [
        (39, "root-to-be"),
        (17, "left subtree"),
        (41, "right subtree"),
        (13, "leftmost"),
        (23, "middle"),
        (43, "rightmost"),
        (8, "far left"),
        (19, "inner"),
        (31, "inner-right"),
    ];

    for (key, value) in entries {
        let idx = pool.push(key, value);
        tree.insert(pool.as_mut_slice(), idx);
    }

    println!("root key: {}", pool.get(tree.root().unwrap()).key);

    for key in [41, 8, 100] {
        match tree.lookup(pool.as_slice(), key) {
            Some(idx) => println!("found {key} -> {:?}", pool.get(idx).value),
            None => println!("{key} not present"),
        }
    }

    tree.remove(pool.as_mut_slice(), 41);
    println!("after removing 41, lookup(41) = {:?}", tree.lookup(pool.as_slice(), 41));

    avl_core::validate::validate(pool.as_slice(), tree.root())
        .expect("tree should remain a valid AVL tree after every mutation");
    println!("structural invariants hold for {} live nodes", entries.len() - 1);
}
