//! Pure encoding and expansion primitives for the shift-assignment
//! preparation tools.
//!
//! Two independent pieces live here:
//!
//! - the classifiers: stateless functions that map free-text survey
//!   answers (institution names, yes/no preferences, multi-select block
//!   strings) to the fixed integer codes the solver consumes.
//!   Unrecognized answers resolve to documented defaults, they never fail.
//! - the roster expansion: calendar logic that turns target months into
//!   shift records (date, shift kind, points, weekday/weekend flag).
//!
//! All file formats and I/O live in the `shiftprep` command line front-end.

mod classify;
mod roster;

pub use crate::classify::*;
pub use crate::roster::*;
