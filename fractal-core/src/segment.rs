use crate::{config::Config, types::SegmentId};
use glam::Vec2;
use rand::Rng;

/// One straight line element of the tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub begin: Vec2,
    pub end: Vec2,
    /// Number of expansions between the root and this segment.
    pub depth: usize,
    /// Set once the segment has been expanded, whether or not it had children.
    pub finished: bool,
    pub parent: Option<SegmentId>,
}

impl Segment {
    pub fn new_root(begin: Vec2, end: Vec2) -> Self {
        Self {
            begin,
            end,
            depth: 0,
            finished: false,
            parent: None,
        }
    }

    pub fn new_child(begin: Vec2, end: Vec2, depth: usize, parent: SegmentId) -> Self {
        Self {
            begin,
            end,
            depth,
            finished: false,
            parent: Some(parent),
        }
    }

    /// Vector from `begin` to `end`.
    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.end - self.begin
    }

    /// Derives the two children of this segment.
    ///
    /// The direction vector is scaled by `cfg.shrink_factor` and rotated by
    /// `-angle` (left) and `+angle` (right). With `randomize`, each child
    /// draws its own offset in `[-cfg.random_spread, cfg.random_spread]`.
    ///
    /// ### Parameters
    /// - `id` - Index of this segment in its tree, recorded as the children's parent.
    /// - `angle` - Base rotation in radians.
    /// - `randomize` - Whether to add a random offset to each rotation.
    /// - `cfg` - Shrink factor, minimum branch length and random spread.
    /// - `rng` - Source for the random offsets; untouched when `randomize` is `false`.
    ///
    /// ### Returns
    /// `[left, right]`, or `None` if the scaled vector is shorter than
    /// `cfg.min_branch_len`.
    pub fn branch(
        &self,
        id: SegmentId,
        angle: f32,
        randomize: bool,
        cfg: &Config,
        rng: &mut impl Rng,
    ) -> Option<[Segment; 2]> {
        let dir = self.direction() * cfg.shrink_factor;
        if dir.length() < cfg.min_branch_len {
            return None;
        }

        let mut offset = || {
            if randomize {
                rng.random_range(-cfg.random_spread..=cfg.random_spread)
            } else {
                0.0
            }
        };

        let right_dir = Vec2::from_angle(angle + offset()).rotate(dir);
        let left_dir = Vec2::from_angle(-angle + offset()).rotate(dir);

        let depth = self.depth + 1;
        let right = Segment::new_child(self.end, self.end + right_dir, depth, id);
        let left = Segment::new_child(self.end, self.end + left_dir, depth, id);

        Some([left, right])
    }

    /// Moves `end` by a uniform random offset in `[-amplitude, amplitude]` per axis.
    pub fn jitter(&mut self, amplitude: f32, rng: &mut impl Rng) {
        self.end.x += rng.random_range(-amplitude..=amplitude);
        self.end.y += rng.random_range(-amplitude..=amplitude);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use std::f32::consts::FRAC_PI_2;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn branch_rotates_scaled_direction_both_ways() {
        let seg = Segment::new_root(Vec2::new(0.0, 0.0), Vec2::new(0.0, -100.0));
        let cfg = Config::default();
        let mut rng = StdRng::seed_from_u64(1);

        let [left, right] = seg.branch(0, FRAC_PI_2, false, &cfg, &mut rng).unwrap();

        // (0, -67) rotated by +90° is (67, 0) in screen space.
        assert!(approx(right.end, Vec2::new(67.0, -100.0)));
        assert!(approx(left.end, Vec2::new(-67.0, -100.0)));

        for child in [&left, &right] {
            assert_eq!(child.begin, seg.end);
            assert_eq!(child.depth, 1);
            assert_eq!(child.parent, Some(0));
            assert!(!child.finished);
        }
    }

    #[test]
    fn branch_returns_none_for_short_vectors() {
        let cfg = Config::default();
        let mut rng = StdRng::seed_from_u64(1);

        // 1.4 * 0.67 = 0.938 < 1.0
        let seg = Segment::new_root(Vec2::ZERO, Vec2::new(1.4, 0.0));
        assert!(seg.branch(0, 0.5, false, &cfg, &mut rng).is_none());

        let seg = Segment::new_root(Vec2::ONE, Vec2::ONE);
        assert!(seg.branch(0, 0.5, true, &cfg, &mut rng).is_none());

        // 1.5 * 0.67 = 1.005
        let seg = Segment::new_root(Vec2::ZERO, Vec2::new(1.5, 0.0));
        assert!(seg.branch(0, 0.5, false, &cfg, &mut rng).is_some());
    }

    #[test]
    fn randomized_offsets_stay_within_spread() {
        let seg = Segment::new_root(Vec2::ZERO, Vec2::new(0.0, -100.0));
        let cfg = Config::default();
        let mut rng = StdRng::seed_from_u64(7);
        let angle = 0.6;

        for _ in 0..200 {
            let [left, right] = seg.branch(0, angle, true, &cfg, &mut rng).unwrap();
            let r = seg.direction().angle_to(right.direction());
            let l = seg.direction().angle_to(left.direction());
            assert!((r - angle).abs() <= cfg.random_spread + 1e-4, "right {r}");
            assert!((l + angle).abs() <= cfg.random_spread + 1e-4, "left {l}");
            // Rotation never changes length.
            assert!((right.direction().length() - 67.0).abs() < 1e-3);
        }
    }

    #[test]
    fn jitter_moves_end_only_within_amplitude() {
        let mut rng = StdRng::seed_from_u64(3);
        let begin = Vec2::new(5.0, 5.0);
        let end = Vec2::new(10.0, 10.0);
        let mut seg = Segment::new_root(begin, end);

        seg.jitter(1.0, &mut rng);

        assert_eq!(seg.begin, begin);
        assert!((seg.end.x - end.x).abs() <= 1.0);
        assert!((seg.end.y - end.y).abs() <= 1.0);
    }
}
