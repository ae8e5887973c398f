//! Flat paper folding.
//!
//! A sheet is a list of planar polygons carrying texture coordinates. Folding
//! it along an ordered list of crease lines cuts every polygon into one
//! fragment per strip between creases, mirrors each strip back onto the first
//! one, and returns the fragments stacked top to bottom, ready to be painted
//! in order. See [`fold`].
//!
//! Around the engine sit the pieces an interactive host needs: the shortcut
//! (pleat) handles that produce crease lines, the keep-away constraint that
//! stops those handles from collapsing, and a chain of stages feeding each
//! fold's output into the next.

pub mod crease;
pub mod error;
pub mod face;
pub mod folder;
pub mod forbidden;
pub mod line;
pub mod pattern;
pub mod plan;
pub mod reflection;
pub mod shortcut;
pub mod stage;
pub mod zone;

pub use crate::error::{FoldError, PlanError};
pub use crate::face::{Bounds2, Face, Vertex};
pub use crate::folder::fold;
pub use crate::forbidden::{keep_away, ForbiddenBall};
pub use crate::line::Line;
pub use crate::reflection::{reflection, Motion2};
pub use crate::shortcut::{Shortcut, ShortcutControl};
pub use crate::stage::{Stage, StageChain};
pub use crate::zone::{build_zones, Boundary, Zone};
