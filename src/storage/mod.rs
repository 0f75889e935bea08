//! Results output module

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::community::{CommunityReport, Membership};
use crate::graph::CompressedGraph;

/// Evaluation result for one candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateReport {
    /// Position of the candidate in the input
    pub index: usize,

    /// Member labels (numeric ids for unlabeled graphs)
    pub members: Vec<String>,

    pub report: CommunityReport,
}

impl CandidateReport {
    pub fn new(graph: &CompressedGraph, index: usize, membership: &Membership, report: CommunityReport) -> Self {
        Self {
            index,
            members: membership.members().map(|node| graph.display_label(node)).collect(),
            report,
        }
    }
}

/// Write reports as pretty-printed JSON
pub fn write_reports<W: Write>(mut writer: W, reports: &[CandidateReport]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, reports)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Save reports to a JSON file, creating parent directories as needed
pub fn save_reports<P: AsRef<Path>>(path: P, reports: &[CandidateReport]) -> Result<()> {
    let path = path.as_ref();
    log::info!("Saving {} reports to {}", reports.len(), path.display());

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    write_reports(BufWriter::new(file), reports)
}
