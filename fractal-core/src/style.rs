//! Depth-based look of a segment: color and stroke width.
//!
//! Stroke width falls from 10 at the trunk to 1 at the deepest level while
//! the hue sweeps once around the wheel, from red back to red, getting more
//! saturated and brighter on the way. Colors are HSB with hue in degrees
//! and saturation/brightness on a 0-255 scale; the renderer converts them
//! to whatever its backend needs.

/// Linearly maps `value` from `[in_lo, in_hi]` to `[out_lo, out_hi]`.
///
/// Values outside the input range extrapolate. A degenerate input range
/// maps everything to `out_lo`.
pub fn map_range(value: f32, in_lo: f32, in_hi: f32, out_lo: f32, out_hi: f32) -> f32 {
    let span = in_hi - in_lo;
    if span == 0.0 {
        return out_lo;
    }
    out_lo + (value - in_lo) / span * (out_hi - out_lo)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BranchStyle {
    /// Degrees, 0 to 360.
    pub hue: f32,
    pub saturation: f32,
    pub brightness: f32,
    pub stroke_width: f32,
}

impl BranchStyle {
    /// Style of a segment at `depth` in a tree whose depth control is `max_depth`.
    pub fn for_depth(depth: usize, max_depth: usize) -> Self {
        let d = depth as f32;
        let max = max_depth as f32;

        Self {
            hue: map_range(d, 0.0, max, 0.0, 360.0),
            saturation: map_range(d, 0.0, max, 100.0, 255.0),
            brightness: map_range(d, 0.0, max, 50.0, 200.0),
            stroke_width: map_range(d, 0.0, max, 10.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_range_interpolates_and_extrapolates() {
        assert_eq!(map_range(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
        assert_eq!(map_range(0.0, 0.0, 10.0, 10.0, 1.0), 10.0);
        assert_eq!(map_range(10.0, 0.0, 10.0, 10.0, 1.0), 1.0);
        assert_eq!(map_range(20.0, 0.0, 10.0, 0.0, 1.0), 2.0);
    }

    #[test]
    fn map_range_with_empty_input_range_returns_start() {
        assert_eq!(map_range(3.0, 2.0, 2.0, 7.0, 9.0), 7.0);
    }

    #[test]
    fn root_and_deepest_segments_hit_range_ends() {
        let root = BranchStyle::for_depth(0, 12);
        assert_eq!(
            root,
            BranchStyle {
                hue: 0.0,
                saturation: 100.0,
                brightness: 50.0,
                stroke_width: 10.0,
            }
        );

        let leaf = BranchStyle::for_depth(12, 12);
        assert_eq!(leaf.hue, 360.0);
        assert_eq!(leaf.saturation, 255.0);
        assert_eq!(leaf.brightness, 200.0);
        assert_eq!(leaf.stroke_width, 1.0);
    }

    #[test]
    fn midpoint_depth_is_halfway() {
        let mid = BranchStyle::for_depth(2, 4);
        assert_eq!(mid.hue, 180.0);
        assert_eq!(mid.saturation, 177.5);
        assert_eq!(mid.brightness, 125.0);
        assert_eq!(mid.stroke_width, 5.5);
    }

    #[test]
    fn zero_max_depth_does_not_divide_by_zero() {
        let s = BranchStyle::for_depth(0, 0);
        assert_eq!(s.hue, 0.0);
        assert_eq!(s.stroke_width, 10.0);
    }
}
