use crate::error::FoldError;
use crate::face::{Bounds2, Face};
use crate::folder::fold;
use crate::shortcut::{Shortcut, ShortcutControl};

use cgmath::Point2;
use tracing::debug;

/// One layer of the folding sequence: the faces it shows and, once the user
/// has started folding it, the control for the next fold.
#[derive(Clone, Debug)]
pub struct Stage {
    faces: Vec<Face>,
    control: Option<ShortcutControl>,

    // Set whenever this stage's faces or shortcut change, so its successor
    // knows it has to fold again
    downstream_dirty: bool,
}

impl Stage {
    fn new(faces: Vec<Face>) -> Stage {
        Stage {
            faces,
            control: None,
            downstream_dirty: false,
        }
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn control(&self) -> Option<&ShortcutControl> {
        self.control.as_ref()
    }

    pub fn shortcut(&self) -> Option<Shortcut> {
        self.control.as_ref().map(ShortcutControl::shortcut)
    }

    pub fn bounds(&self) -> Option<Bounds2> {
        Bounds2::from_faces(&self.faces)
    }

    /// Center of the faces' bounding box; hosts translate the stage by its
    /// negation to keep the folded paper centered.
    pub fn center(&self) -> Option<Point2<f64>> {
        self.bounds().map(|bounds| bounds.center())
    }
}

/// A chain of stages, each one showing the previous stage folded along the
/// previous stage's shortcut.
#[derive(Clone, Debug)]
pub struct StageChain {
    stages: Vec<Stage>,
}

impl StageChain {
    pub fn new(faces: Vec<Face>) -> StageChain {
        StageChain {
            stages: vec![Stage::new(faces)],
        }
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn stage(&self, i: usize) -> Option<&Stage> {
        self.stages.get(i)
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn last(&self) -> &Stage {
        &self.stages[self.stages.len() - 1]
    }

    /// Gives stage `i` a shortcut control and appends the stage that shows its
    /// result. Returns the index of the new stage, or `None` if stage `i` does
    /// not exist or already has a control.
    pub fn enable_shortcut(&mut self, i: usize) -> Option<usize> {
        self.enable_shortcut_with(i, ShortcutControl::new())
    }

    /// Like [`StageChain::enable_shortcut`], starting from the given handles.
    pub fn enable_shortcut_with(&mut self, i: usize, control: ShortcutControl) -> Option<usize> {
        let stage = self.stages.get_mut(i)?;
        if stage.control.is_some() {
            return None;
        }
        stage.control = Some(control);
        stage.downstream_dirty = true;

        self.stages.push(Stage::new(vec![]));
        Some(self.stages.len() - 1)
    }

    /// Mutable access to the shortcut of stage `i`. The stage is assumed to
    /// be edited, so its successors will be refolded on the next
    /// [`StageChain::refresh`].
    pub fn control_mut(&mut self, i: usize) -> Option<&mut ShortcutControl> {
        let stage = self.stages.get_mut(i)?;
        let control = stage.control.as_mut()?;
        stage.downstream_dirty = true;
        Some(control)
    }

    /// Refolds every stage whose predecessor changed, front to back, so a
    /// change propagates all the way down the chain. Returns how many stages
    /// were refolded.
    ///
    /// On error the failing stage keeps its previous faces and stays dirty.
    pub fn refresh(&mut self) -> Result<usize, FoldError> {
        let mut refolded = 0;

        for i in 1..self.stages.len() {
            let (done, rest) = self.stages.split_at_mut(i);
            let predecessor = &mut done[i - 1];
            if !predecessor.downstream_dirty {
                continue;
            }
            let stage = &mut rest[0];

            let crease_lines = match predecessor.shortcut() {
                Some(shortcut) => shortcut.crease_lines().to_vec(),
                None => vec![],
            };
            stage.faces = fold(&predecessor.faces, &crease_lines)?;
            predecessor.downstream_dirty = false;
            stage.downstream_dirty = true;
            refolded += 1;

            debug!(stage = i, faces = stage.faces.len(), "refolded stage");
        }

        Ok(refolded)
    }
}
