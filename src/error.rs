//! Error types for community verification

use thiserror::Error;

/// Result alias for `community-verifier`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the graph and community primitives.
///
/// Every failure is detected when a value is constructed, never when a
/// predicate is queried later.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Input rejected before any evaluation took place.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

/// Reasons an input is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    /// Membership vector length differs from the node count.
    #[error("membership vector has {found} entries but the graph has {expected} nodes")]
    MembershipLength {
        /// Node count of the graph.
        expected: usize,
        /// Length of the supplied vector.
        found: usize,
    },

    /// Member id does not name a node.
    #[error("member id {id} is out of range for a graph with {node_count} nodes")]
    MemberOutOfRange {
        /// Offending id.
        id: usize,
        /// Node count of the graph.
        node_count: usize,
    },

    /// Edge endpoint does not name a node.
    #[error("edge ({start}, {end}) has an endpoint outside 0..{node_count}")]
    EdgeOutOfRange {
        /// First endpoint.
        start: usize,
        /// Second endpoint.
        end: usize,
        /// Node count of the graph.
        node_count: usize,
    },

    /// Lower-bound fraction is NaN, infinite or outside `[0, 1]`.
    #[error("lower bound {0} is not a fraction in [0, 1]")]
    LowerBound(f64),

    /// Community kind string is not one of the known kinds.
    #[error("unknown community kind '{0}'")]
    UnknownKind(String),

    /// Node label is not present in the graph.
    #[error("unknown node label '{0}'")]
    UnknownLabel(String),
}

impl Error {
    /// The rejection reason.
    pub fn reason(&self) -> &InvalidInput {
        match self {
            Error::InvalidInput(reason) => reason,
        }
    }
}
