//! Typed search errors.
//!
//! "No path" is not an error: it is reported as an empty solution with
//! [`crate::stats::TerminationReason::FrontierExhausted`], and a cost
//! ceiling that prunes everything is not an error either. `SearchError`
//! covers path reconstruction on a registry the engine did not build.

/// Failure to rebuild a path from a reachability map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// The target key is not in the map.
    UnknownTarget,
    /// A predecessor pointer names a key that is not in the map.
    MissingPredecessor,
    /// The predecessor chain is longer than the map, so it loops.
    CyclicPredecessors,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownTarget => write!(f, "target key is not in the reachability map"),
            Self::MissingPredecessor => {
                write!(f, "predecessor chain references a key missing from the map")
            }
            Self::CyclicPredecessors => write!(f, "predecessor chain contains a cycle"),
        }
    }
}

impl std::error::Error for PathError {}

/// Typed failure for search execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The winning path could not be rebuilt from the registry.
    Path(PathError),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Path(e) => write!(f, "path reconstruction failed: {e}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Path(e) => Some(e),
        }
    }
}

impl From<PathError> for SearchError {
    fn from(e: PathError) -> Self {
        Self::Path(e)
    }
}
