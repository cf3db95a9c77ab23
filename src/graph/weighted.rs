//! Mutable weighted directed graph with labeled vertices
//!
//! Vertices are unique labels; edges map an ordered `(source, target)` pair
//! to a positive weight. A weight of zero is the same as no edge.
//!
//! Adjacency is stored twice, forward (`source -> target -> weight`) and
//! reverse (`target -> source -> weight`), so that both [`targets`] and
//! [`sources`] are single lookups. Every vertex owns an entry in both maps.
//! The two maps are only written through `link` and `unlink`, and vertex
//! removal unlinks every incident edge before dropping the entries, so the
//! mirrors cannot drift apart and no edge can outlive one of its endpoints.
//!
//! [`targets`]: WeightedDiGraph::targets
//! [`sources`]: WeightedDiGraph::sources

use crate::errors::{PoetError, Result};
use crate::types::Weight;
use rustc_hash::{FxHashMap, FxHashSet};
use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

/// A mutable directed graph with non-negative integer edge weights
#[derive(Debug, Clone)]
pub struct WeightedDiGraph<L> {
    /// source -> (target -> weight)
    outgoing: FxHashMap<L, FxHashMap<L, Weight>>,
    /// target -> (source -> weight)
    incoming: FxHashMap<L, FxHashMap<L, Weight>>,
}

impl<L> Default for WeightedDiGraph<L> {
    fn default() -> Self {
        Self {
            outgoing: FxHashMap::default(),
            incoming: FxHashMap::default(),
        }
    }
}

impl<L> WeightedDiGraph<L>
where
    L: Eq + Hash + Clone,
{
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with pre-allocated capacity for `vertex_capacity` vertices
    pub fn with_capacity(vertex_capacity: usize) -> Self {
        Self {
            outgoing: FxHashMap::with_capacity_and_hasher(vertex_capacity, Default::default()),
            incoming: FxHashMap::with_capacity_and_hasher(vertex_capacity, Default::default()),
        }
    }

    /// Add a vertex
    ///
    /// Returns `false` (and changes nothing) if the vertex is already present.
    pub fn add(&mut self, vertex: L) -> bool {
        if self.outgoing.contains_key(&vertex) {
            return false;
        }
        self.incoming.insert(vertex.clone(), FxHashMap::default());
        self.outgoing.insert(vertex, FxHashMap::default());
        true
    }

    /// Set the weight of the edge `source -> target`
    ///
    /// Missing endpoints are added. A weight of zero removes the edge and
    /// returns the weight that was removed; any other weight inserts or
    /// overwrites the edge and returns the previous weight. Both return 0
    /// when there was no edge before.
    ///
    /// Fails with [`PoetError::InvalidWeight`] for a negative weight, in which
    /// case the graph is left untouched.
    pub fn set(&mut self, source: L, target: L, weight: Weight) -> Result<Weight> {
        if weight < 0 {
            return Err(PoetError::invalid_weight(weight));
        }

        self.add(source.clone());
        self.add(target.clone());

        if weight == 0 {
            return Ok(self.unlink(&source, &target));
        }
        Ok(self.link(source, target, weight))
    }

    /// Add `by` to the weight of the edge `source -> target`, returning the
    /// new weight
    ///
    /// Missing endpoints are added. The count is unsigned, so the result can
    /// never drop below the current weight.
    pub fn increment(&mut self, source: L, target: L, by: u32) -> Weight {
        self.add(source.clone());
        self.add(target.clone());

        let next = self.weight(&source, &target).saturating_add(Weight::from(by));
        if next > 0 {
            self.link(source, target, next);
        }
        next
    }

    /// Remove a vertex and every edge into or out of it
    ///
    /// Returns `false` (and changes nothing) if the vertex is not present.
    pub fn remove<Q>(&mut self, vertex: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if !self.contains(vertex) {
            return false;
        }

        let targets: Vec<L> = self
            .outgoing
            .get(vertex)
            .map(|edges| edges.keys().cloned().collect())
            .unwrap_or_default();
        let sources: Vec<L> = self
            .incoming
            .get(vertex)
            .map(|edges| edges.keys().cloned().collect())
            .unwrap_or_default();

        for target in &targets {
            self.unlink(vertex, <L as Borrow<Q>>::borrow(target));
        }
        for source in &sources {
            self.unlink(<L as Borrow<Q>>::borrow(source), vertex);
        }

        self.outgoing.remove(vertex);
        self.incoming.remove(vertex);
        true
    }

    /// Snapshot of the current vertex labels
    pub fn vertices(&self) -> FxHashSet<L> {
        self.outgoing.keys().cloned().collect()
    }

    /// All vertices with an edge into `target`, with that edge's weight
    ///
    /// Empty if `target` has no incoming edges or is not in the graph.
    pub fn sources<Q>(&self, target: &Q) -> FxHashMap<L, Weight>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.incoming.get(target).cloned().unwrap_or_default()
    }

    /// All vertices reachable by one edge from `source`, with that edge's weight
    ///
    /// Empty if `source` has no outgoing edges or is not in the graph.
    pub fn targets<Q>(&self, source: &Q) -> FxHashMap<L, Weight>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.outgoing.get(source).cloned().unwrap_or_default()
    }

    /// Check whether a vertex is present
    pub fn contains<Q>(&self, vertex: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.outgoing.contains_key(vertex)
    }

    /// Weight of the edge `source -> target`, 0 if there is none
    pub fn weight<Q>(&self, source: &Q, target: &Q) -> Weight
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.outgoing
            .get(source)
            .and_then(|edges| edges.get(target))
            .copied()
            .unwrap_or(0)
    }

    /// Borrowing iterator over the outgoing edges of `source`
    pub fn out_edges<Q>(&self, source: &Q) -> impl Iterator<Item = (&L, Weight)> + '_
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.outgoing
            .get(source)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(target, &w)| (target, w)))
    }

    /// Borrowing iterator over the incoming edges of `target`
    pub fn in_edges<Q>(&self, target: &Q) -> impl Iterator<Item = (&L, Weight)> + '_
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.incoming
            .get(target)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(source, &w)| (source, w)))
    }

    /// Iterate over every edge as `(source, target, weight)`
    pub fn edges(&self) -> impl Iterator<Item = (&L, &L, Weight)> + '_ {
        self.outgoing.iter().flat_map(|(source, edges)| {
            edges
                .iter()
                .map(move |(target, &weight)| (source, target, weight))
        })
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }

    /// Get the number of edges
    pub fn edge_count(&self) -> usize {
        self.outgoing.values().map(|edges| edges.len()).sum()
    }

    /// Check if the graph has no vertices
    pub fn is_empty(&self) -> bool {
        self.outgoing.is_empty()
    }

    fn link(&mut self, source: L, target: L, weight: Weight) -> Weight {
        debug_assert!(weight > 0);
        if let Some(sources) = self.incoming.get_mut(&target) {
            sources.insert(source.clone(), weight);
        }
        self.outgoing
            .get_mut(&source)
            .and_then(|targets| targets.insert(target, weight))
            .unwrap_or(0)
    }

    fn unlink<Q>(&mut self, source: &Q, target: &Q) -> Weight
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if let Some(sources) = self.incoming.get_mut(target) {
            sources.remove(source);
        }
        self.outgoing
            .get_mut(source)
            .and_then(|targets| targets.remove(target))
            .unwrap_or(0)
    }
}

impl<L> fmt::Display for WeightedDiGraph<L>
where
    L: Eq + Hash + Clone + Ord + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut vertices: Vec<&L> = self.outgoing.keys().collect();
        vertices.sort();

        write!(f, "Vertices:")?;
        for vertex in &vertices {
            write!(f, " {}", vertex)?;
        }
        writeln!(f)?;

        writeln!(f, "Edges:")?;
        for source in vertices {
            let mut edges: Vec<(&L, Weight)> = self.out_edges(source).collect();
            edges.sort();
            for (target, weight) in edges {
                writeln!(f, "{} -> {} ({})", source, target, weight)?;
            }
        }
        Ok(())
    }
}
