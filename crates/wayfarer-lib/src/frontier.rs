use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};
use std::rc::Rc;

use crate::graph::State;
use crate::node::Node;

/// Common capability set of the node-holding frontiers.
///
/// The depth-first and breadth-first loops are written against this trait,
/// so the containers are interchangeable: only the removal order differs.
/// The priority frontier is a separate type because its entries are
/// `(priority, state)` pairs rather than search nodes.
pub trait Frontier<S: State> {
    /// Add a node to the frontier.
    fn add(&mut self, node: Rc<Node<S>>);

    /// Remove and return the next node according to this frontier's order.
    ///
    /// # Panics
    ///
    /// Removing from an empty frontier is a precondition violation; callers
    /// must check [`is_empty`](Self::is_empty) first.
    fn remove(&mut self) -> Rc<Node<S>>;

    /// Whether the frontier holds no nodes.
    fn is_empty(&self) -> bool;

    /// Number of nodes currently held.
    fn len(&self) -> usize;

    /// Whether any held node carries the given state. Linear scan.
    fn contains_state(&self, state: &S) -> bool;
}

/// LIFO frontier: the last node added is removed first. Drives depth-first
/// search.
#[derive(Debug, Default)]
pub struct StackFrontier<S: State> {
    nodes: Vec<Rc<Node<S>>>,
}

impl<S: State> StackFrontier<S> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<S: State> Frontier<S> for StackFrontier<S> {
    fn add(&mut self, node: Rc<Node<S>>) {
        self.nodes.push(node);
    }

    fn remove(&mut self) -> Rc<Node<S>> {
        match self.nodes.pop() {
            Some(node) => node,
            None => panic!("remove called on an empty stack frontier"),
        }
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn contains_state(&self, state: &S) -> bool {
        self.nodes.iter().any(|node| node.state() == state)
    }
}

/// FIFO frontier: the earliest node added is removed first. Drives
/// breadth-first search. Backed by a `VecDeque` so removal is O(1)
/// amortized.
#[derive(Debug, Default)]
pub struct QueueFrontier<S: State> {
    nodes: VecDeque<Rc<Node<S>>>,
}

impl<S: State> QueueFrontier<S> {
    pub fn new() -> Self {
        Self {
            nodes: VecDeque::new(),
        }
    }
}

impl<S: State> Frontier<S> for QueueFrontier<S> {
    fn add(&mut self, node: Rc<Node<S>>) {
        self.nodes.push_back(node);
    }

    fn remove(&mut self) -> Rc<Node<S>> {
        match self.nodes.pop_front() {
            Some(node) => node,
            None => panic!("remove called on an empty queue frontier"),
        }
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn contains_state(&self, state: &S) -> bool {
        self.nodes.iter().any(|node| node.state() == state)
    }
}

/// Priority frontier: the entry with the smallest priority key is removed
/// first; equal keys leave in insertion order. Drives best-first search.
///
/// Backed by a binary heap; each entry carries an insertion sequence number
/// so the tie-break is stable. Unlike the stack and queue frontiers,
/// [`remove`](Self::remove) signals emptiness with `None` instead of
/// treating it as a caller error.
#[derive(Debug, Default)]
pub struct PriorityFrontier<S: State> {
    heap: BinaryHeap<PriorityEntry<S>>,
    next_seq: u64,
}

impl<S: State> PriorityFrontier<S> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Add a `(priority, state)` entry.
    pub fn add(&mut self, priority: f64, state: S) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(PriorityEntry {
            priority: FloatOrd(priority),
            seq,
            state,
        });
    }

    /// Remove and return the lowest-priority entry, or `None` when the
    /// frontier is empty.
    pub fn remove(&mut self) -> Option<(f64, S)> {
        self.heap
            .pop()
            .map(|entry| (entry.priority.0, entry.state))
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether any held entry carries the given state. Linear scan.
    pub fn contains_state(&self, state: &S) -> bool {
        self.heap.iter().any(|entry| entry.state == *state)
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Clone, Debug)]
struct PriorityEntry<S: State> {
    priority: FloatOrd,
    seq: u64,
    state: S,
}

impl<S: State> PartialEq for PriorityEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<S: State> Eq for PriorityEntry<S> {}

impl<S: State> Ord for PriorityEntry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by priority,
        // with the earliest insertion winning among equal keys.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<S: State> PartialOrd for PriorityEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(state: &'static str) -> Rc<Node<&'static str>> {
        Rc::new(Node::root(state))
    }

    #[test]
    fn stack_removes_in_lifo_order() {
        let mut frontier = StackFrontier::new();
        for state in ["A", "B", "C"] {
            frontier.add(node(state));
        }
        assert_eq!(*frontier.remove().state(), "C");
        assert_eq!(*frontier.remove().state(), "B");
        assert_eq!(*frontier.remove().state(), "A");
        assert!(frontier.is_empty());
    }

    #[test]
    fn queue_removes_in_fifo_order() {
        let mut frontier = QueueFrontier::new();
        for state in ["A", "B", "C"] {
            frontier.add(node(state));
        }
        assert_eq!(*frontier.remove().state(), "A");
        assert_eq!(*frontier.remove().state(), "B");
        assert_eq!(*frontier.remove().state(), "C");
        assert!(frontier.is_empty());
    }

    #[test]
    fn emptiness_tracks_net_adds_and_removes() {
        let mut frontier = StackFrontier::new();
        assert!(frontier.is_empty());
        frontier.add(node("A"));
        frontier.add(node("B"));
        assert_eq!(frontier.len(), 2);
        frontier.remove();
        assert!(!frontier.is_empty());
        frontier.remove();
        assert!(frontier.is_empty());
    }

    #[test]
    fn contains_state_scans_held_nodes() {
        let mut frontier = QueueFrontier::new();
        frontier.add(node("A"));
        frontier.add(node("B"));
        assert!(frontier.contains_state(&"B"));
        assert!(!frontier.contains_state(&"Z"));
    }

    #[test]
    #[should_panic(expected = "empty stack frontier")]
    fn stack_remove_on_empty_panics() {
        let mut frontier: StackFrontier<&str> = StackFrontier::new();
        frontier.remove();
    }

    #[test]
    #[should_panic(expected = "empty queue frontier")]
    fn queue_remove_on_empty_panics() {
        let mut frontier: QueueFrontier<&str> = QueueFrontier::new();
        frontier.remove();
    }

    #[test]
    fn priority_removes_in_ascending_key_order() {
        let mut frontier = PriorityFrontier::new();
        frontier.add(3.0, "far");
        frontier.add(1.0, "near");
        frontier.add(2.0, "mid");
        assert_eq!(frontier.remove(), Some((1.0, "near")));
        assert_eq!(frontier.remove(), Some((2.0, "mid")));
        assert_eq!(frontier.remove(), Some((3.0, "far")));
        assert_eq!(frontier.remove(), None);
    }

    #[test]
    fn priority_ties_preserve_insertion_order() {
        let mut frontier = PriorityFrontier::new();
        frontier.add(1.0, "first");
        frontier.add(1.0, "second");
        frontier.add(0.5, "ahead");
        frontier.add(1.0, "third");
        assert_eq!(frontier.remove(), Some((0.5, "ahead")));
        assert_eq!(frontier.remove(), Some((1.0, "first")));
        assert_eq!(frontier.remove(), Some((1.0, "second")));
        assert_eq!(frontier.remove(), Some((1.0, "third")));
    }

    #[test]
    fn priority_remove_on_empty_returns_none() {
        let mut frontier: PriorityFrontier<&str> = PriorityFrontier::new();
        assert_eq!(frontier.remove(), None);
        assert!(frontier.is_empty());
    }

    #[test]
    fn priority_contains_state_scans_entries() {
        let mut frontier = PriorityFrontier::new();
        frontier.add(2.0, "A");
        assert!(frontier.contains_state(&"A"));
        assert!(!frontier.contains_state(&"B"));
    }
}
