use crate::error::PlanError;
use crate::face::Face;
use crate::pattern::{Pattern, Rectangle, RegularPolygon, Square};
use crate::shortcut::{ShortcutControl, DEFAULT_WING_RADIUS};
use crate::stage::StageChain;

use cgmath::Point2;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// The sheet a plan starts from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SheetSpec {
    Square {
        #[serde(default = "unit")]
        size: f64,
    },
    Rectangle {
        width: f64,
        height: f64,
    },
    RegularPolygon {
        sides: usize,
        #[serde(default = "unit")]
        radius: f64,
    },
}

impl Default for SheetSpec {
    fn default() -> SheetSpec {
        SheetSpec::Square { size: 1.0 }
    }
}

impl SheetSpec {
    pub fn faces(&self) -> Result<Vec<Face>, PlanError> {
        Ok(match *self {
            SheetSpec::Square { size } => Square { size }.faces(),
            SheetSpec::Rectangle { width, height } => Rectangle { width, height }.faces(),
            SheetSpec::RegularPolygon { sides, radius } => {
                if sides < 3 {
                    return Err(PlanError::InvalidSheet { sides });
                }
                RegularPolygon { sides, radius }.faces()
            }
        })
    }
}

/// The handles of one fold, in the order they are applied.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StageSpec {
    // The two axis points, as `[x, y]`
    pub axis: [[f64; 2]; 2],

    // Signed wing radius at each axis point
    #[serde(default = "default_wing_radii")]
    pub wing_radii: [f64; 2],
}

impl StageSpec {
    pub fn control(&self) -> Option<ShortcutControl> {
        let [a0, a1] = self.axis;
        ShortcutControl::with_handles(
            [Point2::new(a0[0], a0[1]), Point2::new(a1[0], a1[1])],
            self.wing_radii,
        )
    }
}

/// A sheet and a sequence of folds, loaded from JSON:
///
/// ```json
/// {
///     "title": "double pleat",
///     "sheet": { "kind": "square", "size": 1.0 },
///     "stages": [
///         { "axis": [[0.5, -0.05], [0.5, 1.05]], "wing_radii": [0.1, 0.1] }
///     ]
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FoldPlan {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub sheet: SheetSpec,

    pub stages: Vec<StageSpec>,
}

impl FoldPlan {
    pub fn from_file(path: &Path) -> Result<FoldPlan, PlanError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        contents.parse()
    }

    /// Lays out the sheet, enables one shortcut per stage and folds the
    /// whole chain.
    pub fn build_chain(&self) -> Result<StageChain, PlanError> {
        let mut chain = StageChain::new(self.sheet.faces()?);

        for (i, spec) in self.stages.iter().enumerate() {
            let control = spec.control().ok_or(PlanError::InvalidHandle { stage: i })?;
            chain.enable_shortcut_with(i, control);
        }
        let refolded = chain.refresh()?;

        info!(
            title = self.title.as_str(),
            stages = chain.len(),
            refolded,
            faces = chain.last().faces().len(),
            "built fold plan"
        );
        Ok(chain)
    }
}

impl FromStr for FoldPlan {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<FoldPlan, PlanError> {
        Ok(serde_json::from_str(s)?)
    }
}

fn unit() -> f64 {
    1.0
}

fn default_wing_radii() -> [f64; 2] {
    [DEFAULT_WING_RADIUS, DEFAULT_WING_RADIUS]
}
