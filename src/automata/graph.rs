//! A directed multigraph with labelled edges.
//!
//! Nodes live in an arena and are addressed by their position in it.
//! Each node owns its outgoing edges as `(label, target)` pairs, where the target is an arena index.
//! Duplicate edges collapse.

use std::{fmt::Display, hash::Hash};

use indexmap::{IndexMap, IndexSet};

use super::AutomatonError;

type NodeIndex = usize;

#[derive(Debug, Clone)]
struct Node<N, L> {
    id: N,
    edges: IndexSet<(L, NodeIndex)>,
}

#[derive(Debug, Clone)]
pub struct LabeledGraph<N, L> {
    nodes: Vec<Node<N, L>>,
    index: IndexMap<N, NodeIndex>,
}

impl<N, L> Default for LabeledGraph<N, L> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index: IndexMap::new(),
        }
    }
}

impl<N, L> LabeledGraph<N, L>
where
    N: Clone + Eq + Hash + Display,
    L: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node. Adding a node that already exists does nothing.
    pub fn add_node(&mut self, id: N) {
        if self.index.contains_key(&id) {
            return;
        }
        let idx = self.nodes.len();
        self.nodes.push(Node {
            id: id.clone(),
            edges: IndexSet::new(),
        });
        self.index.insert(id, idx);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node_index(&self, id: &N) -> Result<NodeIndex, AutomatonError> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| AutomatonError::UnknownNode(id.to_string()))
    }

    /// Adds an edge from `from` to `to` labelled with `label`.
    /// Both endpoints must have been added before.
    pub fn add_edge(&mut self, from: &N, label: L, to: &N) -> Result<(), AutomatonError> {
        let src = self.node_index(from)?;
        let dst = self.node_index(to)?;
        self.nodes[src].edges.insert((label, dst));
        Ok(())
    }

    fn successors<'a>(
        &'a self,
        idx: NodeIndex,
        label: &'a L,
    ) -> impl Iterator<Item = NodeIndex> + 'a {
        self.nodes[idx]
            .edges
            .iter()
            .filter(move |(l, _)| l == label)
            .map(|(_, dst)| *dst)
    }

    /// Returns the nodes reachable from `from` over exactly one edge labelled with `label`.
    pub fn one_step(&self, from: &N, label: &L) -> Result<IndexSet<N>, AutomatonError> {
        let src = self.node_index(from)?;
        Ok(self
            .successors(src, label)
            .map(|idx| self.nodes[idx].id.clone())
            .collect())
    }

    /// Returns the nodes reachable from `from` over one or more edges that are all labelled with `label`.
    /// The node `from` itself is only contained if it lies on a cycle of such edges.
    pub fn closure(&self, from: &N, label: &L) -> Result<IndexSet<N>, AutomatonError> {
        let src = self.node_index(from)?;
        let mut reached: IndexSet<NodeIndex> = self.successors(src, label).collect();
        // Grow the set until no new node is added; nodes already reached are never expanded twice.
        let mut next = 0;
        while next < reached.len() {
            let idx = reached[next];
            for dst in self.successors(idx, label) {
                reached.insert(dst);
            }
            next += 1;
        }
        Ok(reached
            .into_iter()
            .map(|idx| self.nodes[idx].id.clone())
            .collect())
    }

    /// Iterates over all edges as `(from, label, to)`.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &L, &N)> + '_ {
        self.nodes.iter().flat_map(move |node| {
            node.edges
                .iter()
                .map(move |(label, dst)| (&node.id, label, &self.nodes[*dst].id))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(nodes: &[&str], edges: &[(&str, char, &str)]) -> LabeledGraph<String, char> {
        let mut g = LabeledGraph::new();
        for n in nodes {
            g.add_node(n.to_string());
        }
        for (from, l, to) in edges {
            g.add_edge(&from.to_string(), *l, &to.to_string()).unwrap();
        }
        g
    }

    fn sorted(set: IndexSet<String>) -> Vec<String> {
        let mut v: Vec<String> = set.into_iter().collect();
        v.sort();
        v
    }

    #[test]
    fn test_add_node_is_idempotent() {
        let mut g: LabeledGraph<String, char> = LabeledGraph::new();
        assert!(g.is_empty());
        g.add_node("a".to_string());
        g.add_node("a".to_string());
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn test_add_edge_unknown_node() {
        let mut g = graph(&["a"], &[]);
        let res = g.add_edge(&"a".to_string(), 'x', &"b".to_string());
        assert!(matches!(res, Err(AutomatonError::UnknownNode(n)) if n == "b"));
        let res = g.add_edge(&"c".to_string(), 'x', &"a".to_string());
        assert!(matches!(res, Err(AutomatonError::UnknownNode(n)) if n == "c"));
    }

    #[test]
    fn test_duplicate_edges_collapse() {
        let g = graph(&["a", "b"], &[("a", 'x', "b"), ("a", 'x', "b")]);
        assert_eq!(g.edges().count(), 1);
    }

    #[test]
    fn test_one_step() {
        let g = graph(
            &["a", "b", "c"],
            &[("a", 'x', "b"), ("a", 'x', "c"), ("a", 'y', "c"), ("b", 'x', "c")],
        );
        assert_eq!(
            sorted(g.one_step(&"a".to_string(), &'x').unwrap()),
            vec!["b", "c"]
        );
        assert!(g.one_step(&"c".to_string(), &'x').unwrap().is_empty());
        assert!(g.one_step(&"d".to_string(), &'x').is_err());
    }

    #[test]
    fn test_closure_chain() {
        let g = graph(
            &["a", "b", "c", "d"],
            &[("a", 'e', "b"), ("b", 'e', "c"), ("c", 'x', "d")],
        );
        assert_eq!(
            sorted(g.closure(&"a".to_string(), &'e').unwrap()),
            vec!["b", "c"]
        );
    }

    #[test]
    fn test_closure_terminates_on_cycles() {
        let g = graph(
            &["a", "b", "c"],
            &[("a", 'e', "b"), ("b", 'e', "c"), ("c", 'e', "a")],
        );
        assert_eq!(
            sorted(g.closure(&"a".to_string(), &'e').unwrap()),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn test_closure_self_loop() {
        let g = graph(&["a"], &[("a", 'e', "a")]);
        assert_eq!(sorted(g.closure(&"a".to_string(), &'e').unwrap()), vec!["a"]);
        let g = graph(&["a"], &[]);
        assert!(g.closure(&"a".to_string(), &'e').unwrap().is_empty());
    }
}
