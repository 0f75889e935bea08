//! Internal/external connectivity tallies over a membership subset

use std::ops::{Add, AddAssign};

use crate::community::Membership;
use crate::graph::GraphView;

/// Connectivity split into the part landing inside the subset and the part
/// crossing out of it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub internal: u64,
    pub external: u64,
}

impl Tally {
    pub fn new(internal: u64, external: u64) -> Self {
        Self { internal, external }
    }

    /// Strictly more internal than external connectivity; a tie fails
    pub fn dominates(&self) -> bool {
        self.internal > self.external
    }
}

impl Add for Tally {
    type Output = Tally;

    fn add(self, other: Tally) -> Tally {
        Tally {
            internal: self.internal + other.internal,
            external: self.external + other.external,
        }
    }
}

impl AddAssign for Tally {
    fn add_assign(&mut self, other: Tally) {
        self.internal += other.internal;
        self.external += other.external;
    }
}

/// Count the neighbors of `node` inside and outside the subset
pub fn neighbor_tally<G: GraphView>(graph: &G, membership: &Membership, node: usize) -> Tally {
    let mut tally = Tally::default();
    for neighbor in graph.neighbors(node) {
        if membership.contains(neighbor) {
            tally.internal += 1;
        } else {
            tally.external += 1;
        }
    }
    tally
}

/// Sum of [`neighbor_tally`] over every member.
///
/// An internal edge is seen from both of its endpoints and so counts twice;
/// a crossing edge is seen only from its member endpoint.
pub fn aggregate_neighbor_tally<G: GraphView>(graph: &G, membership: &Membership) -> Tally {
    membership
        .members()
        .map(|node| neighbor_tally(graph, membership, node))
        .fold(Tally::default(), |acc, tally| acc + tally)
}

/// Weighted counterpart of [`aggregate_neighbor_tally`] from one pass over
/// the edge list: internal edges add their weight twice, crossing edges once.
pub fn aggregate_weight_tally<G: GraphView>(graph: &G, membership: &Membership) -> Tally {
    let mut tally = Tally::default();
    for edge in graph.edges() {
        let weight = u64::from(edge.weight);
        match (membership.contains(edge.start), membership.contains(edge.end)) {
            (true, true) => tally.internal += 2 * weight,
            (true, false) | (false, true) => tally.external += weight,
            (false, false) => {}
        }
    }
    tally
}

/// Per-node internal and external weighted degree from one pass over the
/// edge list. Only member nodes accumulate anything.
pub fn weighted_degrees<G: GraphView>(graph: &G, membership: &Membership) -> Vec<Tally> {
    let mut degrees = vec![Tally::default(); graph.node_count()];
    for edge in graph.edges() {
        let weight = u64::from(edge.weight);
        match (membership.contains(edge.start), membership.contains(edge.end)) {
            (true, true) => {
                degrees[edge.start].internal += weight;
                degrees[edge.end].internal += weight;
            }
            (true, false) => degrees[edge.start].external += weight,
            (false, true) => degrees[edge.end].external += weight,
            (false, false) => {}
        }
    }
    degrees
}
