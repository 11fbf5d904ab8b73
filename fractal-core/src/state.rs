//! Regeneration logic shared by every front end.
//!
//! [`FractalState`] owns the current tree together with everything needed
//! to rebuild it. A front end calls [`FractalState::tick`] once per frame
//! with the slider values, draws [`FractalState::tree`], and finally calls
//! [`FractalState::apply_jitter`].

use crate::{
    config::{Config, Params},
    error::ConfigError,
    segment::Segment,
    style::BranchStyle,
    tree::Tree,
};
use glam::Vec2;
use rand::Rng;

/// Application state: the tree, the controls that produced it and the
/// random source used for randomized branching and jitter.
#[derive(Debug)]
pub struct FractalState<R> {
    tree: Tree,
    params: Params,
    cfg: Config,
    canvas: Vec2,
    rng: R,
}

impl<R: Rng> FractalState<R> {
    /// Validates `cfg` and builds the first tree.
    ///
    /// `params` is clamped before use.
    pub fn new(
        params: Params,
        canvas: Vec2,
        cfg: Config,
        mut rng: R,
    ) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let params = params.clamped();
        let tree = Tree::generate(&params, canvas, &cfg, &mut rng);

        Ok(Self {
            tree,
            params,
            cfg,
            canvas,
            rng,
        })
    }

    /// Per-frame update with the current slider values.
    ///
    /// Rebuilds the tree when the (clamped) angle or depth differs from the
    /// previous tick, or when the canvas was resized. Otherwise the tree,
    /// including any jitter drift, is kept.
    ///
    /// ### Returns
    /// `true` if the tree was rebuilt.
    pub fn tick(&mut self, angle: f32, depth: usize, canvas: Vec2) -> bool {
        let next = Params {
            angle,
            depth,
            ..self.params
        }
        .clamped();

        let unchanged = next.angle == self.params.angle
            && next.depth == self.params.depth
            && canvas == self.canvas;
        if unchanged {
            return false;
        }

        self.params = next;
        self.canvas = canvas;
        self.rebuild();
        true
    }

    /// Flips the randomize toggle and rebuilds.
    pub fn toggle_randomize(&mut self) {
        self.params.randomize = !self.params.randomize;
        tracing::info!(randomness = self.params.randomize, "toggled randomness");
        self.rebuild();
    }

    /// Flips the jitter toggle and rebuilds, which also discards any drift.
    pub fn toggle_jitter(&mut self) {
        self.params.jitter = !self.params.jitter;
        tracing::info!(jitter = self.params.jitter, "toggled jitter");
        self.rebuild();
    }

    /// Replaces the branching constants and rebuilds.
    ///
    /// On error the previous configuration and tree are kept.
    pub fn set_config(&mut self, cfg: Config) -> Result<(), ConfigError> {
        cfg.validate()?;
        self.cfg = cfg;
        self.rebuild();
        Ok(())
    }

    /// Discards the current tree and generates a fresh one.
    pub fn rebuild(&mut self) {
        self.tree = Tree::generate(&self.params, self.canvas, &self.cfg, &mut self.rng);
    }

    /// Drifts segment ends if the jitter toggle is on.
    ///
    /// Called once per frame after drawing.
    pub fn apply_jitter(&mut self) {
        if self.params.jitter {
            self.tree.jitter(self.cfg.jitter_amplitude, &mut self.rng);
        }
    }

    /// Segments in draw order together with their depth-based style.
    pub fn styled_segments(&self) -> impl Iterator<Item = (&Segment, BranchStyle)> + '_ {
        let max_depth = self.params.depth;
        self.tree
            .segments
            .iter()
            .map(move |s| (s, BranchStyle::for_depth(s.depth, max_depth)))
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }
}
