//! Plot Layout - Positioning math for a single plot within a figure
//!
//! This crate provides:
//! - Rectangle and margin primitives in pixel and normalized units
//! - Mapping plot positions between normalized and pixel space
//! - Insetting the plot area for axis decorations (tight inset)
//! - Shrink and zoom corrections that keep decorations inside the
//!   plot's allotted outer area
//! - A staged layout pass driven by a rendering collaborator
//! - Plot variant capabilities shared by category, XY and polar plots

mod config;
mod error;
mod geometry;
mod pass;
mod plot;
mod units;
mod variant;

pub use config::*;
pub use error::*;
pub use geometry::*;
pub use pass::*;
pub use plot::*;
pub use units::*;
pub use variant::*;
