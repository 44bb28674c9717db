//! Binary tree sort.
//!
//! Every element is inserted, in input order, into an unbalanced binary search tree.
//! An in-order walk then writes the values back into the slice. The tree lives in an
//! arena of nodes addressed by index, so building it costs one allocation and the
//! walk needs no recursion.
//!
//! Elements equal to a node descend into its right subtree, which makes later equals
//! surface after earlier ones in the walk.

use crate::core::{Comparator, Natural, Statistics};
use std::cmp::Ordering;

/// Arena index of a node; `NIL` marks an empty child slot.
type Link = usize;

const NIL: Link = usize::MAX;

struct Node<T> {
    value: T,
    left: Link,
    right: Link,
}

/// Sorts `v` with a binary search tree, ordering by [`Ord`].
///
/// # Examples
///
/// ```
/// use tallysort::prelude::*;
///
/// let mut data: Vec<u32> = (0..100).collect();
/// let mut stats = Statistics::new();
/// binary_tree_sort(&mut data, &mut stats);
///
/// // A sorted input degenerates the tree into a chain.
/// assert_eq!(stats.compare_count(), 4950);
/// ```
pub fn binary_tree_sort<T: Ord + Clone>(v: &mut [T], stats: &mut Statistics) {
    binary_tree_sort_by(v, &Natural, stats);
}

/// Sorts `v` with a binary search tree, ordering by `cmp`.
///
/// Counts one read per element inserted, one comparison per tree level descended,
/// and one write per element emitted by the in-order walk. No swaps are performed.
pub fn binary_tree_sort_by<T, C>(v: &mut [T], cmp: &C, stats: &mut Statistics)
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    let len = v.len();
    if len == 0 {
        return;
    }

    let mut nodes: Vec<Node<T>> = Vec::with_capacity(len);
    for item in v.iter() {
        stats.read();
        insert(&mut nodes, item.clone(), cmp, stats);
    }

    let order = in_order(&nodes);

    let mut values: Vec<Option<T>> = nodes.into_iter().map(|node| Some(node.value)).collect();
    for (slot, index) in v.iter_mut().zip(order) {
        if let Some(value) = values[index].take() {
            *slot = value;
            stats.write();
        }
    }

    log::debug!("binary tree sort of {} elements: {:?}", len, stats);
}

/// Attaches `value` at the first empty child slot on its search path.
fn insert<T, C>(nodes: &mut Vec<Node<T>>, value: T, cmp: &C, stats: &mut Statistics)
where
    C: Comparator<T> + ?Sized,
{
    let index = nodes.len();
    if index == 0 {
        nodes.push(Node {
            value,
            left: NIL,
            right: NIL,
        });
        return;
    }

    let mut current = 0;
    loop {
        stats.compare();
        let node = &mut nodes[current];
        let child = match cmp.compare(&value, &node.value) {
            Ordering::Less => &mut node.left,
            Ordering::Equal | Ordering::Greater => &mut node.right,
        };

        if *child == NIL {
            *child = index;
            break;
        }
        current = *child;
    }

    nodes.push(Node {
        value,
        left: NIL,
        right: NIL,
    });
}

/// Returns node indices in in-order sequence, walking with an explicit stack.
///
/// A skewed tree is as deep as the input is long, so recursion is not an option.
fn in_order<T>(nodes: &[Node<T>]) -> Vec<usize> {
    let mut order = Vec::with_capacity(nodes.len());
    let mut stack = Vec::new();
    let mut current = if nodes.is_empty() { NIL } else { 0 };

    while current != NIL || !stack.is_empty() {
        while current != NIL {
            stack.push(current);
            current = nodes[current].left;
        }
        if let Some(index) = stack.pop() {
            order.push(index);
            current = nodes[index].right;
        }
    }

    order
}
