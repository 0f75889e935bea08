//! Evaluate many candidate subsets of one graph
//!
//! Candidates are spread over the rayon pool; every worker builds its own
//! [`Community`] so evaluators are never shared between threads.

use rayon::prelude::*;

use crate::community::{Community, CommunityKind, CommunityReport, Membership};
use crate::config::validate_lower_bound;
use crate::error::Result;
use crate::graph::GraphView;

/// Full report for every candidate, in input order
pub fn evaluate_candidates<G>(
    graph: &G,
    candidates: &[Membership],
    lower_bound: f64,
) -> Result<Vec<CommunityReport>>
where
    G: GraphView + Sync,
{
    validate_lower_bound(lower_bound)?;
    log::info!("Evaluating {} candidates", candidates.len());

    candidates
        .par_iter()
        .map(|membership| {
            Community::new(graph, membership.clone(), lower_bound).map(|community| community.report())
        })
        .collect()
}

/// Indices of the candidates satisfying `kind`, ascending.
///
/// Only the query for `kind` runs, so candidates failing the size floor are
/// dropped without scanning any edge.
pub fn filter_candidates<G>(
    graph: &G,
    candidates: &[Membership],
    lower_bound: f64,
    kind: CommunityKind,
) -> Result<Vec<usize>>
where
    G: GraphView + Sync,
{
    validate_lower_bound(lower_bound)?;

    let matches: Vec<Option<usize>> = candidates
        .par_iter()
        .enumerate()
        .map(|(index, membership)| -> Result<Option<usize>> {
            let community = Community::new(graph, membership.clone(), lower_bound)?;
            Ok(community.satisfies(kind).then_some(index))
        })
        .collect::<Result<_>>()?;

    let accepted: Vec<usize> = matches.into_iter().flatten().collect();
    log::info!(
        "{} of {} candidates are {} communities",
        accepted.len(),
        candidates.len(),
        kind
    );

    Ok(accepted)
}

/// Reports for the candidates satisfying `kind` (every candidate if `None`),
/// paired with their input index.
///
/// With a kind, [`filter_candidates`] picks the candidates first, so only
/// accepted candidates pay for the remaining queries.
pub fn report_candidates<G>(
    graph: &G,
    candidates: &[Membership],
    lower_bound: f64,
    kind: Option<CommunityKind>,
) -> Result<Vec<(usize, CommunityReport)>>
where
    G: GraphView + Sync,
{
    let indices = match kind {
        Some(kind) => filter_candidates(graph, candidates, lower_bound, kind)?,
        None => (0..candidates.len()).collect(),
    };

    let selected: Vec<Membership> = indices.iter().map(|&index| candidates[index].clone()).collect();
    let reports = evaluate_candidates(graph, &selected, lower_bound)?;

    Ok(indices.into_iter().zip(reports).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidInput;
    use crate::graph::{CompressedGraph, Edge, GraphBuilder};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts every edge-list and neighbor walk
    struct CountingGraph {
        inner: CompressedGraph,
        scans: AtomicUsize,
    }

    impl GraphView for CountingGraph {
        fn node_count(&self) -> usize {
            self.inner.node_count()
        }

        fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
            self.scans.fetch_add(1, Ordering::SeqCst);
            self.inner.edges()
        }

        fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
            self.scans.fetch_add(1, Ordering::SeqCst);
            self.inner.neighbors(node)
        }
    }

    /// Two triangles joined by a single bridge 2-3
    fn barbell() -> CompressedGraph {
        let mut builder = GraphBuilder::with_nodes(6);
        for (start, end) in [(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5), (2, 3)] {
            builder.add_edge(start, end, 1).unwrap();
        }
        builder.build().unwrap()
    }

    fn candidates() -> Vec<Membership> {
        vec![
            Membership::from_members(6, [0, 1, 2]).unwrap(),
            Membership::from_members(6, [2, 3]).unwrap(),
            Membership::from_members(6, [3, 4, 5]).unwrap(),
            Membership::from_members(6, [0]).unwrap(),
        ]
    }

    #[test]
    fn test_reports_keep_input_order() {
        let graph = barbell();
        let reports = evaluate_candidates(&graph, &candidates(), 0.3).unwrap();

        assert_eq!(reports.len(), 4);
        assert_eq!(reports.iter().map(|r| r.size).collect::<Vec<_>>(), vec![3, 2, 3, 1]);
        assert!(reports[0].strong);
        assert!(reports[2].strong);
        assert!(!reports[1].weak);
        assert!(!reports[3].bounded);
    }

    #[test]
    fn test_filter_by_kind() {
        let graph = barbell();
        let strong = filter_candidates(&graph, &candidates(), 0.3, CommunityKind::Strong).unwrap();
        assert_eq!(strong, vec![0, 2]);

        let bounded = filter_candidates(&graph, &candidates(), 0.3, CommunityKind::Bounded).unwrap();
        assert_eq!(bounded, vec![0, 1, 2]);
    }

    #[test]
    fn test_report_candidates_by_kind() {
        let graph = barbell();

        let all = report_candidates(&graph, &candidates(), 0.3, None).unwrap();
        assert_eq!(all.iter().map(|(index, _)| *index).collect::<Vec<_>>(), vec![0, 1, 2, 3]);

        let strong = report_candidates(&graph, &candidates(), 0.3, Some(CommunityKind::Strong)).unwrap();
        assert_eq!(strong.iter().map(|(index, _)| *index).collect::<Vec<_>>(), vec![0, 2]);
        assert!(strong.iter().all(|(_, report)| report.strong && report.size == 3));
    }

    #[test]
    fn test_report_candidates_skips_scans_below_floor() {
        let graph = CountingGraph {
            inner: barbell(),
            scans: AtomicUsize::new(0),
        };

        // round(6 * 0.9) = 5, no candidate is large enough
        let reports = report_candidates(&graph, &candidates(), 0.9, Some(CommunityKind::Weak)).unwrap();
        assert!(reports.is_empty());
        assert_eq!(graph.scans.load(Ordering::SeqCst), 0);

        let reports = report_candidates(&graph, &candidates(), 0.9, None).unwrap();
        assert_eq!(reports.len(), 4);
        assert_eq!(graph.scans.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_mismatched_candidate_fails_the_batch() {
        let graph = barbell();
        let mut batch = candidates();
        batch.push(Membership::from(vec![true; 5]));

        let err = evaluate_candidates(&graph, &batch, 0.3).unwrap_err();
        assert_eq!(
            err.reason(),
            &InvalidInput::MembershipLength { expected: 6, found: 5 }
        );
    }
}
