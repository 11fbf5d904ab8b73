//! Core fractal tree generation library.
//!
//! Main components:
//! - [`segment`]: a single branch and how it splits.
//! - [`tree`]: breadth-first generation of the whole tree, plus jitter.
//! - [`style`]: depth-based color and stroke width.
//! - [`state`]: per-frame regeneration logic driven by the controls.
//! - [`config`]: branching constants and the user-facing parameters.
//! - [`error`]: configuration errors.
//! - [`types`]: shared type aliases and limits.

pub mod config;
pub mod error;
pub mod segment;
pub mod state;
pub mod style;
pub mod tree;
pub mod types;
