use std::io;

use thiserror::Error;

/// Failures surfaced by [`crate::folder::fold`].
///
/// Fragments that end up with fewer than 3 vertices are not errors: partial
/// creasing is expected and those fragments are simply dropped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FoldError {
    #[error("crease line {index} has a zero-length or non-finite normal")]
    InvalidGeometry { index: usize },
}

/// Failures while loading or running a [`crate::plan::FoldPlan`].
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("failed to read plan: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse plan: {0}")]
    Json(#[from] serde_json::Error),

    #[error("stage {stage}: axis points coincide")]
    InvalidHandle { stage: usize },

    #[error("sheet needs at least 3 sides, got {sides}")]
    InvalidSheet { sides: usize },

    #[error(transparent)]
    Fold(#[from] FoldError),
}
