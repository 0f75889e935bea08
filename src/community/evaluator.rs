//! Lazily memoized community predicates

use std::cell::OnceCell;
use std::fmt;

use crate::community::metrics::{self, Tally};
use crate::community::{CommunityKind, CommunityReport, Membership};
use crate::config::{size_threshold, validate_lower_bound};
use crate::error::{InvalidInput, Result};
use crate::graph::GraphView;

/// Evaluator for one candidate subset of one graph.
///
/// Each query computes its answer on first call and caches it for the life
/// of the evaluator; later calls return the cached value without touching
/// the graph. Queries are independent, so asking only for
/// [`is_bounded_community`](Self::is_bounded_community) never scans an edge.
///
/// The caches are plain [`OnceCell`]s, which makes the evaluator `!Sync`:
/// use one evaluator per thread.
pub struct Community<'g, G> {
    graph: &'g G,
    membership: Membership,
    lower_bound: f64,
    threshold: usize,

    size: OnceCell<usize>,
    bounded: OnceCell<bool>,
    weak: OnceCell<bool>,
    weak_weighted: OnceCell<bool>,
    strong: OnceCell<bool>,
    strong_weighted: OnceCell<bool>,
}

impl<'g, G: GraphView> Community<'g, G> {
    /// Bind an evaluator to `graph`, a membership snapshot and the minimum
    /// fraction of the graph's nodes a community must contain.
    ///
    /// Fails with `InvalidInput` if the membership length differs from the
    /// node count or `lower_bound` is not a finite value in `[0, 1]`.
    pub fn new(graph: &'g G, membership: impl Into<Membership>, lower_bound: f64) -> Result<Self> {
        let membership = membership.into();
        let node_count = graph.node_count();

        if membership.len() != node_count {
            return Err(InvalidInput::MembershipLength {
                expected: node_count,
                found: membership.len(),
            }
            .into());
        }
        let lower_bound = validate_lower_bound(lower_bound)?;

        Ok(Self {
            graph,
            membership,
            lower_bound,
            threshold: size_threshold(node_count, lower_bound),
            size: OnceCell::new(),
            bounded: OnceCell::new(),
            weak: OnceCell::new(),
            weak_weighted: OnceCell::new(),
            strong: OnceCell::new(),
            strong_weighted: OnceCell::new(),
        })
    }

    pub fn membership(&self) -> &Membership {
        &self.membership
    }

    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    /// Minimum member count, `round(node_count * lower_bound)`
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Number of member nodes
    pub fn size(&self) -> usize {
        *self.size.get_or_init(|| self.membership.count())
    }

    /// The subset meets the size floor
    pub fn is_bounded_community(&self) -> bool {
        *self.bounded.get_or_init(|| self.size() >= self.threshold)
    }

    /// Summed internal neighbor count of all members exceeds their summed
    /// external neighbor count, and the size floor holds.
    pub fn is_weak_community(&self) -> bool {
        *self.weak.get_or_init(|| {
            if !self.is_bounded_community() {
                return false;
            }
            let tally = metrics::aggregate_neighbor_tally(self.graph, &self.membership);
            log::debug!(
                "Weak scan over {} members: internal={} external={}",
                self.size(),
                tally.internal,
                tally.external
            );
            tally.dominates()
        })
    }

    /// Weighted form of [`is_weak_community`](Self::is_weak_community),
    /// computed from a single pass over the edge list.
    pub fn is_weak_weighted_community(&self) -> bool {
        *self.weak_weighted.get_or_init(|| {
            if !self.is_bounded_community() {
                return false;
            }
            let tally = metrics::aggregate_weight_tally(self.graph, &self.membership);
            log::debug!(
                "Weak weighted scan over {} members: internal={} external={}",
                self.size(),
                tally.internal,
                tally.external
            );
            tally.dominates()
        })
    }

    /// Every member has strictly more internal than external neighbors, and
    /// the size floor holds. An empty subset is never a strong community.
    pub fn is_strong_community(&self) -> bool {
        *self.strong.get_or_init(|| {
            if !self.is_bounded_community() || self.size() == 0 {
                return false;
            }
            self.membership.members().all(|node| {
                let tally = metrics::neighbor_tally(self.graph, &self.membership, node);
                self.check_member(node, tally)
            })
        })
    }

    /// Every member has strictly more internal than external weighted degree,
    /// and the size floor holds. An empty subset is never a strong community.
    pub fn is_strong_weighted_community(&self) -> bool {
        *self.strong_weighted.get_or_init(|| {
            if !self.is_bounded_community() || self.size() == 0 {
                return false;
            }
            let degrees = metrics::weighted_degrees(self.graph, &self.membership);
            self.membership
                .members()
                .all(|node| self.check_member(node, degrees[node]))
        })
    }

    /// Answer the query matching `kind`
    pub fn satisfies(&self, kind: CommunityKind) -> bool {
        match kind {
            CommunityKind::Bounded => self.is_bounded_community(),
            CommunityKind::Weak => self.is_weak_community(),
            CommunityKind::WeakWeighted => self.is_weak_weighted_community(),
            CommunityKind::Strong => self.is_strong_community(),
            CommunityKind::StrongWeighted => self.is_strong_weighted_community(),
        }
    }

    /// Run every query and collect the answers
    pub fn report(&self) -> CommunityReport {
        CommunityReport {
            size: self.size(),
            threshold: self.threshold,
            bounded: self.is_bounded_community(),
            weak: self.is_weak_community(),
            weak_weighted: self.is_weak_weighted_community(),
            strong: self.is_strong_community(),
            strong_weighted: self.is_strong_weighted_community(),
        }
    }

    fn check_member(&self, node: usize, tally: Tally) -> bool {
        if !tally.dominates() {
            log::trace!(
                "Member {} fails dominance: internal={} external={}",
                node,
                tally.internal,
                tally.external
            );
        }
        tally.dominates()
    }
}

impl<G> fmt::Debug for Community<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Community")
            .field("node_count", &self.membership.len())
            .field("lower_bound", &self.lower_bound)
            .field("threshold", &self.threshold)
            .field("size", &self.size.get())
            .finish_non_exhaustive()
    }
}
