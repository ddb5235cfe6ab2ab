//! Run reports: the audit record of one world run, as canonical JSON.
//!
//! # Directory layout
//!
//! ```text
//! <dir>/
//!   report.json          canonical JSON of the report
//!   report_digest.txt    "sha256:<hex>" over DOMAIN_RUN_REPORT || report.json
//! ```
//!
//! Reading a directory back is fail-closed: a non-canonical report or a
//! digest that does not match the recomputed one is an error.

use std::path::Path;

use serde_json::{json, Value};
use wayfinder_search::fingerprint::{canonical_hash, ContentHash, DOMAIN_RUN_REPORT};
use wayfinder_search::stats::SearchStats;

use crate::canon::{canonical_json_bytes, CanonError};
use crate::policy::RunMode;

/// Schema tag written into every report.
pub const REPORT_SCHEMA_VERSION: &str = "wayfinder.run_report.v1";

const REPORT_FILENAME: &str = "report.json";
const DIGEST_FILENAME: &str = "report_digest.txt";

/// Outcome of one run, with nodes and costs already rendered by the world.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub world_id: String,
    pub mode: RunMode,
    /// Echo of the run configuration.
    pub policy: Value,
    /// Optimal cost, if a goal was reached.
    pub cost: Option<Value>,
    /// Reported paths, each a JSON array of nodes from start to goal.
    /// Sorted by canonical bytes.
    pub paths: Vec<Value>,
    /// More optimal paths existed than were reported.
    pub paths_truncated: bool,
    /// Goal node that stopped a partial search.
    pub goal: Option<Value>,
    /// `[node, cost]` pairs for reachability modes, sorted by canonical bytes.
    pub reachable: Option<Vec<Value>>,
    pub stats: SearchStats,
}

impl RunReport {
    #[must_use]
    pub fn found(&self) -> bool {
        self.cost.is_some()
    }

    /// The report as a JSON object.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "schema_version": REPORT_SCHEMA_VERSION,
            "world_id": self.world_id,
            "mode": self.mode.as_str(),
            "policy": self.policy,
            "found": self.found(),
            "cost": self.cost,
            "paths": self.paths,
            "paths_truncated": self.paths_truncated,
            "goal": self.goal,
            "reachable": self.reachable,
            "stats": stats_json(&self.stats),
        })
    }

    /// Canonical JSON bytes of [`RunReport::to_json`].
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if a world rendered a float.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json())
    }

    /// Content digest of the canonical bytes.
    ///
    /// # Errors
    ///
    /// See [`RunReport::canonical_bytes`].
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        Ok(canonical_hash(DOMAIN_RUN_REPORT, &self.canonical_bytes()?))
    }
}

/// JSON view of an audit record.
#[must_use]
pub fn stats_json(stats: &SearchStats) -> Value {
    json!({
        "expansions": stats.expansions,
        "stale_discarded": stats.stale_discarded,
        "ceiling_pruned": stats.ceiling_pruned,
        "improvements": stats.improvements,
        "equal_cost_merges": stats.equal_cost_merges,
        "nodes_registered": stats.nodes_registered,
        "frontier_high_water": stats.frontier_high_water,
        "termination_reason": stats.termination_reason.as_str(),
    })
}

/// Error persisting or loading a report directory.
#[derive(Debug)]
pub enum ReportDirError {
    Io { detail: String },
    Canon(CanonError),
    /// `report.json` is not valid JSON.
    Parse { detail: String },
    /// `report.json` is valid JSON but not in canonical form.
    NonCanonical,
    /// `report_digest.txt` is not a `sha256:<hex>` digest.
    InvalidDigest { raw: String },
    DigestMismatch { stored: String, recomputed: String },
}

impl std::fmt::Display for ReportDirError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::Canon(e) => write!(f, "canonical JSON error: {e}"),
            Self::Parse { detail } => write!(f, "report parse error: {detail}"),
            Self::NonCanonical => f.write_str("report is not canonical JSON"),
            Self::InvalidDigest { raw } => write!(f, "invalid digest string: {raw:?}"),
            Self::DigestMismatch { stored, recomputed } => write!(
                f,
                "digest mismatch: stored={stored}, recomputed={recomputed}"
            ),
        }
    }
}

impl std::error::Error for ReportDirError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Canon(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CanonError> for ReportDirError {
    fn from(e: CanonError) -> Self {
        Self::Canon(e)
    }
}

fn io_err(e: &std::io::Error) -> ReportDirError {
    ReportDirError::Io {
        detail: e.to_string(),
    }
}

/// A report read back from disk.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredReport {
    pub json: Value,
    pub digest: ContentHash,
}

/// Write `report` into `dir` (which must exist). Returns the digest.
///
/// # Errors
///
/// Returns [`ReportDirError`] on canonicalization or I/O failure.
pub fn write_report_dir(report: &RunReport, dir: &Path) -> Result<ContentHash, ReportDirError> {
    let bytes = report.canonical_bytes()?;
    let digest = canonical_hash(DOMAIN_RUN_REPORT, &bytes);
    std::fs::write(dir.join(REPORT_FILENAME), &bytes).map_err(|e| io_err(&e))?;
    std::fs::write(dir.join(DIGEST_FILENAME), digest.as_str()).map_err(|e| io_err(&e))?;
    Ok(digest)
}

/// Read and verify a report directory written by [`write_report_dir`].
///
/// # Errors
///
/// Returns [`ReportDirError`] if a file is missing, the report is not
/// canonical, or the stored digest does not match.
pub fn read_report_dir(dir: &Path) -> Result<StoredReport, ReportDirError> {
    let bytes = std::fs::read(dir.join(REPORT_FILENAME)).map_err(|e| io_err(&e))?;
    let raw_digest = std::fs::read_to_string(dir.join(DIGEST_FILENAME)).map_err(|e| io_err(&e))?;
    let stored = ContentHash::parse(raw_digest.trim_end()).ok_or_else(|| {
        ReportDirError::InvalidDigest {
            raw: raw_digest.clone(),
        }
    })?;

    let json: Value = serde_json::from_slice(&bytes).map_err(|e| ReportDirError::Parse {
        detail: e.to_string(),
    })?;
    if canonical_json_bytes(&json)? != bytes {
        return Err(ReportDirError::NonCanonical);
    }

    let recomputed = canonical_hash(DOMAIN_RUN_REPORT, &bytes);
    if recomputed != stored {
        return Err(ReportDirError::DigestMismatch {
            stored: stored.to_string(),
            recomputed: recomputed.to_string(),
        });
    }
    Ok(StoredReport {
        json,
        digest: recomputed,
    })
}
