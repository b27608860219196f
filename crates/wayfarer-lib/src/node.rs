use std::rc::Rc;

use crate::graph::State;

/// A single traversal step: a state plus the chain of steps that reached it.
///
/// Nodes are immutable after construction. Each node holds a shared
/// back-reference to its parent, so several children may extend the same
/// partial path without copying it. Reference cycles are impossible because
/// a parent always predates its children.
#[derive(Debug, Clone)]
pub struct Node<S: State> {
    state: S,
    action: Option<S>,
    parent: Option<Rc<Node<S>>>,
}

impl<S: State> Node<S> {
    /// Create the root node of a search tree. It carries no action and no
    /// parent.
    pub fn root(state: S) -> Self {
        Self {
            state,
            action: None,
            parent: None,
        }
    }

    /// Create a child node reached from `parent` via the transition labeled
    /// `action`.
    pub fn child(state: S, action: S, parent: Rc<Node<S>>) -> Self {
        Self {
            state,
            action: Some(action),
            parent: Some(parent),
        }
    }

    /// The state this node represents.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Label of the transition that produced this node; `None` for the root.
    pub fn action(&self) -> Option<&S> {
        self.action.as_ref()
    }

    /// The predecessor node, or `None` for the root.
    pub fn parent(&self) -> Option<&Rc<Node<S>>> {
        self.parent.as_ref()
    }

    /// Number of edges between this node and the root.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.parent.as_deref();
        while let Some(node) = current {
            depth += 1;
            current = node.parent.as_deref();
        }
        depth
    }

    /// Ordered states from the root to this node, inclusive.
    ///
    /// Walks parent links to the root and reverses, so the result always
    /// ends with [`state`](Self::state) and has length `depth() + 1`.
    pub fn path(&self) -> Vec<S> {
        let mut path = Vec::with_capacity(self.depth() + 1);
        path.push(self.state.clone());
        let mut current = self.parent.as_deref();
        while let Some(node) = current {
            path.push(node.state.clone());
            current = node.parent.as_deref();
        }
        path.reverse();
        path
    }
}
