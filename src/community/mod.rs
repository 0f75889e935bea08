//! Community verification module
//!
//! A candidate vertex subset is described by a [`Membership`] snapshot and
//! checked against a graph by a [`Community`] evaluator.

pub mod batch;
pub mod evaluator;
pub mod metrics;

pub use batch::{evaluate_candidates, filter_candidates, report_candidates};
pub use evaluator::Community;

use crate::error::{Error, InvalidInput, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Immutable membership flags, one per node of the graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    flags: Box<[bool]>,
}

impl Membership {
    /// Build a membership vector of length `node_count` from member ids.
    ///
    /// Duplicate ids are harmless; an id `>= node_count` is rejected.
    pub fn from_members<I>(node_count: usize, members: I) -> Result<Self>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut flags = vec![false; node_count];
        for id in members {
            match flags.get_mut(id) {
                Some(flag) => *flag = true,
                None => {
                    return Err(InvalidInput::MemberOutOfRange { id, node_count }.into())
                }
            }
        }
        Ok(Self { flags: flags.into_boxed_slice() })
    }

    /// Number of flags (the node count of the graph it was built for)
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Whether `node` is a member. Panics if `node` is out of range.
    pub fn contains(&self, node: usize) -> bool {
        self.flags[node]
    }

    /// Ids of the member nodes, ascending
    pub fn members(&self) -> impl Iterator<Item = usize> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(node, &member)| member.then_some(node))
    }

    /// Number of members
    pub fn count(&self) -> usize {
        self.flags.iter().filter(|&&member| member).count()
    }
}

impl From<Vec<bool>> for Membership {
    fn from(flags: Vec<bool>) -> Self {
        Self { flags: flags.into_boxed_slice() }
    }
}

impl From<&[bool]> for Membership {
    fn from(flags: &[bool]) -> Self {
        Self { flags: flags.into() }
    }
}

/// The community definitions a candidate can be checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommunityKind {
    /// Size floor only
    Bounded,
    /// Aggregate internal neighbor count beats the external count
    Weak,
    /// Aggregate internal weight beats the external weight
    WeakWeighted,
    /// Every member has more internal than external neighbors
    Strong,
    /// Every member has more internal than external weighted degree
    StrongWeighted,
}

impl CommunityKind {
    pub const ALL: [CommunityKind; 5] = [
        CommunityKind::Bounded,
        CommunityKind::Weak,
        CommunityKind::WeakWeighted,
        CommunityKind::Strong,
        CommunityKind::StrongWeighted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommunityKind::Bounded => "bounded",
            CommunityKind::Weak => "weak",
            CommunityKind::WeakWeighted => "weak-weighted",
            CommunityKind::Strong => "strong",
            CommunityKind::StrongWeighted => "strong-weighted",
        }
    }
}

impl fmt::Display for CommunityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommunityKind {
    type Err = Error;

    /// Validate a user-supplied kind name, ignoring case and accepting `_`
    /// in place of `-`.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        CommunityKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| InvalidInput::UnknownKind(s.to_string()).into())
    }
}

/// Every query of one evaluator, gathered for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityReport {
    /// Number of members
    pub size: usize,

    /// Minimum size required by the lower bound
    pub threshold: usize,

    pub bounded: bool,
    pub weak: bool,
    pub weak_weighted: bool,
    pub strong: bool,
    pub strong_weighted: bool,
}

impl CommunityReport {
    pub fn satisfies(&self, kind: CommunityKind) -> bool {
        match kind {
            CommunityKind::Bounded => self.bounded,
            CommunityKind::Weak => self.weak,
            CommunityKind::WeakWeighted => self.weak_weighted,
            CommunityKind::Strong => self.strong,
            CommunityKind::StrongWeighted => self.strong_weighted,
        }
    }
}
