/// Identifier for a segment in a [`crate::tree::Tree`].
///
/// This is an index into `Tree::segments`, and is only meaningful within
/// the lifetime of a given `Tree` instance.
pub type SegmentId = usize;

/// Smallest depth the controls accept.
pub const MIN_DEPTH: usize = 1;

/// Largest depth the controls accept. Depth 12 already yields 8191 segments.
pub const MAX_DEPTH: usize = 12;
