//! Verification of candidate vertex subsets against several formal
//! definitions of a graph community.
//!
//! A [`Community`] wraps a graph and one candidate [`Membership`] and answers
//! the bounded, weak, weak weighted, strong and strong weighted queries, each
//! computed at most once.

pub mod config;
pub mod community;
pub mod data;
pub mod error;
pub mod graph;
pub mod storage;

pub use community::{Community, CommunityKind, CommunityReport, Membership};
pub use config::Config;
pub use error::{Error, InvalidInput, Result};
pub use graph::{CompressedGraph, Edge, GraphBuilder, GraphView};
