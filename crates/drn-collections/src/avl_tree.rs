//! Self-balancing binary search tree (AVL), owned-subtree layout.
//!
//! Each node owns its two children directly (`Box<Node>`); there is no
//! arena. The tree is generic over any `Ord` key — `drn-registry` instantiates
//! it over route ids and wraps it with frequency-tracking conveniences.
//!
//! After every insert or delete, every node on the path back to the root has
//! its height recomputed and its balance factor re-examined; `|balance| == 2`
//! triggers the matching rotation (single right on LL, single left on RR,
//! left-then-right on LR, right-then-left on RL) so that `|balance| <= 1`
//! holds everywhere once the mutation returns.

use std::cmp::Ordering;

struct Node<K, V> {
    key: K,
    value: V,
    height: i64,
    left: Option<Box<Node<K, V>>>,
    right: Option<Box<Node<K, V>>>,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            height: 1,
            left: None,
            right: None,
        }
    }
}

fn height<K, V>(node: &Option<Box<Node<K, V>>>) -> i64 {
    node.as_ref().map_or(0, |n| n.height)
}

fn balance_factor<K, V>(node: &Node<K, V>) -> i64 {
    height(&node.left) - height(&node.right)
}

fn update_height<K, V>(node: &mut Node<K, V>) {
    node.height = 1 + height(&node.left).max(height(&node.right));
}

fn rotate_right<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let mut new_root = node.left.take().expect("rotate_right requires a left child");
    node.left = new_root.right.take();
    update_height(&mut node);
    new_root.right = Some(node);
    update_height(&mut new_root);
    new_root
}

fn rotate_left<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let mut new_root = node.right.take().expect("rotate_left requires a right child");
    node.right = new_root.left.take();
    update_height(&mut node);
    new_root.left = Some(node);
    update_height(&mut new_root);
    new_root
}

/// Rebalances `node` assuming both subtrees are already balanced and only
/// `node`'s own factor may be out of range (the standard AVL invariant after
/// a single insert/delete on one side).
fn rebalance<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    update_height(&mut node);
    let bf = balance_factor(&node);
    if bf > 1 {
        if balance_factor(node.left.as_ref().unwrap()) < 0 {
            node.left = Some(rotate_left(node.left.take().unwrap()));
        }
        rotate_right(node)
    } else if bf < -1 {
        if balance_factor(node.right.as_ref().unwrap()) > 0 {
            node.right = Some(rotate_right(node.right.take().unwrap()));
        }
        rotate_left(node)
    } else {
        node
    }
}

fn insert_node<K: Ord, V>(
    node: Option<Box<Node<K, V>>>,
    key: K,
    value: V,
    on_clash: impl FnOnce(V, V) -> V,
) -> Box<Node<K, V>> {
    match node {
        None => Box::new(Node::new(key, value)),
        Some(n) => {
            let Node {
                key: nkey,
                value: nvalue,
                left,
                right,
                ..
            } = *n;
            let mut rebuilt = match key.cmp(&nkey) {
                Ordering::Less => Box::new(Node {
                    key: nkey,
                    value: nvalue,
                    height: 1,
                    left: Some(insert_node(left, key, value, on_clash)),
                    right,
                }),
                Ordering::Greater => Box::new(Node {
                    key: nkey,
                    value: nvalue,
                    height: 1,
                    left,
                    right: Some(insert_node(right, key, value, on_clash)),
                }),
                Ordering::Equal => Box::new(Node {
                    key: nkey,
                    value: on_clash(nvalue, value),
                    height: 1,
                    left,
                    right,
                }),
            };
            rebalance(rebuilt)
        }
    }
}

fn find_min<K, V>(node: &Node<K, V>) -> &K {
    match &node.left {
        Some(left) => find_min(left),
        None => &node.key,
    }
}

fn remove_node<K: Ord, V>(node: Option<Box<Node<K, V>>>, key: &K) -> (Option<Box<Node<K, V>>>, Option<V>) {
    match node {
        None => (None, None),
        Some(mut n) => match key.cmp(&n.key) {
            Ordering::Less => {
                let (new_left, removed) = remove_node(n.left.take(), key);
                n.left = new_left;
                (Some(rebalance(n)), removed)
            }
            Ordering::Greater => {
                let (new_right, removed) = remove_node(n.right.take(), key);
                n.right = new_right;
                (Some(rebalance(n)), removed)
            }
            Ordering::Equal => {
                let removed = Some(n.value);
                match (n.left.take(), n.right.take()) {
                    (None, None) => (None, removed),
                    (Some(only), None) | (None, Some(only)) => (Some(only), removed),
                    (Some(left), Some(right)) => {
                        // Two children: splice in the in-order successor (min of right subtree).
                        let successor_key_owned = clone_min_key(&right);
                        let (new_right, successor_value) =
                            remove_node(Some(right), &successor_key_owned);
                        let mut replacement = Box::new(Node::new(
                            successor_key_owned,
                            successor_value.expect("successor must exist"),
                        ));
                        replacement.left = Some(left);
                        replacement.right = new_right;
                        (Some(rebalance(replacement)), removed)
                    }
                }
            }
        },
    }
}

fn clone_min_key<K: Clone, V>(node: &Node<K, V>) -> K {
    find_min(node).clone()
}

fn get<'a, K: Ord, V>(node: &'a Option<Box<Node<K, V>>>, key: &K) -> Option<&'a V> {
    let n = node.as_ref()?;
    match key.cmp(&n.key) {
        Ordering::Less => get(&n.left, key),
        Ordering::Greater => get(&n.right, key),
        Ordering::Equal => Some(&n.value),
    }
}

fn get_mut<'a, K: Ord, V>(node: &'a mut Option<Box<Node<K, V>>>, key: &K) -> Option<&'a mut V> {
    let n = node.as_mut()?;
    match key.cmp(&n.key) {
        Ordering::Less => get_mut(&mut n.left, key),
        Ordering::Greater => get_mut(&mut n.right, key),
        Ordering::Equal => Some(&mut n.value),
    }
}

fn in_order<'a, K, V>(node: &'a Option<Box<Node<K, V>>>, out: &mut Vec<(&'a K, &'a V)>) {
    if let Some(n) = node {
        in_order(&n.left, out);
        out.push((&n.key, &n.value));
        in_order(&n.right, out);
    }
}

fn is_balanced_rec<K, V>(node: &Option<Box<Node<K, V>>>) -> bool {
    match node {
        None => true,
        Some(n) => {
            balance_factor(n).abs() <= 1 && is_balanced_rec(&n.left) && is_balanced_rec(&n.right)
        }
    }
}

/// A generic AVL tree keyed by `K`, used as the backing store for the route
/// registry (C9).
pub struct AvlTree<K, V> {
    root: Option<Box<Node<K, V>>>,
    len: usize,
}

impl<K: Ord + Clone, V> AvlTree<K, V> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn height(&self) -> i64 {
        height(&self.root)
    }

    /// Insert `key -> value`. If `key` already exists, `on_clash(old, new)`
    /// produces the value actually stored — callers summing frequencies pass
    /// a closure that merges counters instead of overwriting them.
    pub fn insert_or_merge(&mut self, key: K, value: V, on_clash: impl FnOnce(V, V) -> V) {
        let existed = get(&self.root, &key).is_some();
        self.root = Some(insert_node(self.root.take(), key, value, on_clash));
        if !existed {
            self.len += 1;
        }
    }

    /// Insert `key -> value`, overwriting any existing value.
    pub fn insert(&mut self, key: K, value: V) {
        self.insert_or_merge(key, value, |_old, new| new);
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        get(&self.root, key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        get_mut(&mut self.root, key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Remove `key`, returning its value if present. No-op (returns `None`)
    /// if the key is absent.
    pub fn delete(&mut self, key: &K) -> Option<V> {
        let (new_root, removed) = remove_node(self.root.take(), key);
        self.root = new_root;
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Keys and values in ascending key order.
    pub fn in_order(&self) -> Vec<(&K, &V)> {
        let mut out = Vec::with_capacity(self.len);
        in_order(&self.root, &mut out);
        out
    }

    /// Debug/test invariant check: every node's balance factor is in
    /// `{-1, 0, 1}`.
    pub fn is_balanced(&self) -> bool {
        is_balanced_rec(&self.root)
    }
}

impl<K: Ord + Clone, V> Default for AvlTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
