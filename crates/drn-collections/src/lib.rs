//! `drn-collections` — hand-rolled general-purpose data structures.
//!
//! Everything here is domain-agnostic: none of these types know about
//! vertices, drones, or routes. `drn-graph` and `drn-registry` instantiate
//! them with concrete key/value types.
//!
//! | Module         | Contents                                      |
//! |----------------|------------------------------------------------|
//! | [`ordered_map`] | `OrderedMap<K, V>` — separate-chaining table   |
//! | [`union_find`]  | `UnionFind` — disjoint-set forest              |
//! | [`avl_tree`]    | `AvlTree<K, V>` — self-balancing ordered tree  |

pub mod avl_tree;
pub mod ordered_map;
pub mod union_find;

#[cfg(test)]
mod tests;

pub use avl_tree::AvlTree;
pub use ordered_map::OrderedMap;
pub use union_find::UnionFind;
