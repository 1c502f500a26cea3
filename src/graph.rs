//! Undirected contact graph
//!
//! Nodes are person ids; an edge means two people know each other. Paths
//! are found with a breadth-first search, so the first path found is one
//! with the fewest hops. Neighbours are visited in id order, which makes
//! tie-breaking between equally short paths deterministic.

use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

use crate::person::PersonId;

/// Adjacency-list graph of person ids
#[derive(Clone, Debug, Default)]
pub struct ContactGraph {
    adjacency: BTreeMap<PersonId, BTreeSet<PersonId>>,
}

impl ContactGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node. Re-adding an existing id keeps its edges.
    pub fn add_node(&mut self, id: PersonId) {
        self.adjacency.entry(id).or_default();
    }

    /// Add a symmetric edge between two existing nodes
    ///
    /// Returns `false` without touching the graph if either endpoint is missing.
    pub fn add_edge(&mut self, a: &PersonId, b: &PersonId) -> bool {
        if !self.contains(a) || !self.contains(b) {
            return false;
        }
        if let Some(neighbors) = self.adjacency.get_mut(a) {
            neighbors.insert(b.clone());
        }
        if let Some(neighbors) = self.adjacency.get_mut(b) {
            neighbors.insert(a.clone());
        }
        true
    }

    /// Check whether a node exists
    pub fn contains(&self, id: &PersonId) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of distinct edges
    pub fn edge_count(&self) -> usize {
        let mut loops = 0;
        let mut ends = 0;
        for (id, neighbors) in &self.adjacency {
            ends += neighbors.len();
            if neighbors.contains(id) {
                loops += 1;
            }
        }
        // Each ordinary edge appears in two neighbour sets, a self-loop in one
        (ends - loops) / 2 + loops
    }

    /// Direct neighbours of a node, in id order
    pub fn neighbors(&self, id: &PersonId) -> impl Iterator<Item = &PersonId> {
        self.adjacency.get(id).into_iter().flatten()
    }

    /// Number of direct neighbours
    pub fn degree(&self, id: &PersonId) -> usize {
        self.adjacency.get(id).map_or(0, BTreeSet::len)
    }

    /// True if any path joins `a` and `b`
    ///
    /// A node is connected to itself. Unknown ids are connected to nothing.
    pub fn are_connected(&self, a: &PersonId, b: &PersonId) -> bool {
        !self.shortest_path(a, b).is_empty()
    }

    /// Fewest-hop path from `a` to `b`, both ends included
    ///
    /// Empty if either id is unknown or no path exists.
    pub fn shortest_path(&self, a: &PersonId, b: &PersonId) -> Vec<PersonId> {
        if !self.contains(a) || !self.contains(b) {
            return Vec::new();
        }
        if a == b {
            return vec![a.clone()];
        }

        let mut parent: HashMap<&PersonId, &PersonId> = HashMap::new();
        let mut queue = VecDeque::new();
        parent.insert(a, a);
        queue.push_back(a);

        while let Some(current) = queue.pop_front() {
            for next in self.neighbors(current) {
                if parent.contains_key(next) {
                    continue;
                }
                parent.insert(next, current);
                if next == b {
                    return Self::unwind(&parent, a, b);
                }
                queue.push_back(next);
            }
        }

        Vec::new()
    }

    fn unwind<'g>(
        parent: &HashMap<&'g PersonId, &'g PersonId>,
        a: &PersonId,
        b: &'g PersonId,
    ) -> Vec<PersonId> {
        let mut path = vec![b.clone()];
        let mut current = b;
        while current != a {
            match parent.get(current) {
                Some(&prev) => {
                    path.push(prev.clone());
                    current = prev;
                }
                None => return Vec::new(),
            }
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> PersonId {
        PersonId::from(s)
    }

    fn graph(nodes: &[&str], edges: &[(&str, &str)]) -> ContactGraph {
        let mut g = ContactGraph::new();
        for n in nodes {
            g.add_node(id(n));
        }
        for (a, b) in edges {
            assert!(g.add_edge(&id(a), &id(b)));
        }
        g
    }

    #[test]
    fn test_path_through_intermediate() {
        let g = graph(
            &["alice", "bob", "charlie"],
            &[("alice", "bob"), ("bob", "charlie")],
        );

        assert!(g.are_connected(&id("alice"), &id("charlie")));
        assert_eq!(
            g.shortest_path(&id("alice"), &id("charlie")),
            vec![id("alice"), id("bob"), id("charlie")]
        );
    }

    #[test]
    fn test_edges_are_symmetric() {
        let g = graph(&["alice", "bob"], &[("alice", "bob")]);

        assert!(g.are_connected(&id("bob"), &id("alice")));
        assert_eq!(g.shortest_path(&id("bob"), &id("alice")), vec![id("bob"), id("alice")]);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_disconnected_components() {
        let g = graph(&["alice", "bob", "carol", "dave"], &[("alice", "bob"), ("carol", "dave")]);

        assert!(!g.are_connected(&id("alice"), &id("dave")));
        assert!(g.shortest_path(&id("alice"), &id("dave")).is_empty());
    }

    #[test]
    fn test_edge_to_unknown_node_ignored() {
        let mut g = graph(&["alice"], &[]);

        assert!(!g.add_edge(&id("alice"), &id("ghost")));
        assert!(!g.contains(&id("ghost")));
        assert_eq!(g.degree(&id("alice")), 0);
    }

    #[test]
    fn test_unknown_ids_not_connected() {
        let g = graph(&["alice"], &[]);

        assert!(!g.are_connected(&id("alice"), &id("ghost")));
        assert!(!g.are_connected(&id("ghost"), &id("ghost")));
    }

    #[test]
    fn test_self_path() {
        let g = graph(&["alice"], &[]);
        assert_eq!(g.shortest_path(&id("alice"), &id("alice")), vec![id("alice")]);
    }

    #[test]
    fn test_self_loop_allowed() {
        let g = graph(&["alice", "bob"], &[("alice", "alice"), ("alice", "bob")]);

        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.shortest_path(&id("alice"), &id("bob")), vec![id("alice"), id("bob")]);
    }

    #[test]
    fn test_shortest_of_several_paths() {
        // a - b - c - d, plus shortcut a - e - d
        let g = graph(
            &["a", "b", "c", "d", "e"],
            &[("a", "b"), ("b", "c"), ("c", "d"), ("a", "e"), ("e", "d")],
        );

        assert_eq!(g.shortest_path(&id("a"), &id("d")), vec![id("a"), id("e"), id("d")]);
    }

    #[test]
    fn test_readding_node_keeps_edges() {
        let mut g = graph(&["alice", "bob"], &[("alice", "bob")]);
        g.add_node(id("alice"));

        assert_eq!(g.node_count(), 2);
        assert!(g.are_connected(&id("alice"), &id("bob")));
    }
}
