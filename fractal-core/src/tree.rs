use crate::{
    config::{Config, Params},
    segment::Segment,
};
use glam::Vec2;
use rand::Rng;

/// All segments of a fractal tree in breadth-first generation order.
///
/// The root is always at index 0 and every child is stored after its
/// parent. A tree is never pruned; changing a parameter builds a new one.
#[derive(Clone, Debug, PartialEq)]
pub struct Tree {
    pub segments: Vec<Segment>,
}

impl Tree {
    /// Creates a tree holding only the trunk for a canvas of the given size.
    ///
    /// The trunk starts at the bottom center of the canvas and points
    /// straight up; its length is `cfg.trunk_ratio * canvas.y`.
    pub fn trunk(canvas: Vec2, cfg: &Config) -> Self {
        let begin = Vec2::new(canvas.x / 2.0, canvas.y);
        let end = Vec2::new(canvas.x / 2.0, canvas.y - canvas.y * cfg.trunk_ratio);

        Self {
            segments: vec![Segment::new_root(begin, end)],
        }
    }

    /// Builds a complete tree from scratch.
    ///
    /// Starts from [`Tree::trunk`] and runs up to `params.depth` rounds of
    /// [`Tree::expand_round`]. The `jitter` flag is ignored here; drift is
    /// applied per frame by [`Tree::jitter`].
    ///
    /// ### Parameters
    /// - `params` - Angle, depth and randomize flag. Not clamped here, so a
    ///   depth of `0` yields a lone trunk.
    /// - `canvas` - Canvas width and height in pixels.
    /// - `cfg` - Branching constants.
    /// - `rng` - Source of the random offsets when `params.randomize` is set.
    ///
    /// ### Returns
    /// The generated [`Tree`].
    pub fn generate(params: &Params, canvas: Vec2, cfg: &Config, rng: &mut impl Rng) -> Self {
        let mut tree = Self::trunk(canvas, cfg);

        for _ in 0..params.depth {
            // Every segment is a leaf, later rounds would be no-ops.
            if tree.expand_round(params.angle, params.randomize, cfg, rng) == 0 {
                break;
            }
        }

        tracing::debug!(
            segments = tree.segments.len(),
            depth = params.depth,
            angle = params.angle,
            randomize = params.randomize,
            "generated tree"
        );

        tree
    }

    /// Expands every unfinished segment once.
    ///
    /// Each unfinished segment is marked finished and asked for its
    /// children via [`Segment::branch`]. Children are collected first and
    /// appended after the pass, so they are not expanded until the next
    /// round.
    ///
    /// ### Returns
    /// The number of segments appended.
    pub fn expand_round(
        &mut self,
        angle: f32,
        randomize: bool,
        cfg: &Config,
        rng: &mut impl Rng,
    ) -> usize {
        let mut new_segments = Vec::new();

        for (id, seg) in self.segments.iter_mut().enumerate() {
            if seg.finished {
                continue;
            }
            seg.finished = true;

            if let Some(children) = seg.branch(id, angle, randomize, cfg, rng) {
                new_segments.extend(children);
            }
        }

        let added = new_segments.len();
        self.segments.append(&mut new_segments);
        added
    }

    /// Drifts every segment end by up to `amplitude` on each axis.
    ///
    /// A child's `begin` is re-attached to its parent's (already moved)
    /// `end`, so the tree stays connected while it wobbles. The drift
    /// accumulates until the tree is rebuilt.
    pub fn jitter(&mut self, amplitude: f32, rng: &mut impl Rng) {
        for id in 0..self.segments.len() {
            if let Some(parent) = self.segments[id].parent {
                self.segments[id].begin = self.segments[parent].end;
            }
            self.segments[id].jitter(amplitude, rng);
        }
    }

    /// Number of segments that did not (or not yet) produce children.
    pub fn leaf_count(&self) -> usize {
        let mut has_child = vec![false; self.segments.len()];
        for s in &self.segments {
            if let Some(p) = s.parent {
                has_child[p] = true;
            }
        }
        has_child.iter().filter(|&&c| !c).count()
    }

    /// Largest segment depth present in the tree.
    pub fn max_depth(&self) -> usize {
        self.segments.iter().map(|s| s.depth).max().unwrap_or(0)
    }
}
