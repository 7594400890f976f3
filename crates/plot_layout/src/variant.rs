//! Plot kinds and the rendering collaborator seam
//!
//! Concrete plots (category, XY, polar, ...) own a [`PlotLayout`] and
//! implement [`PlotVariant`]. Decoration sizes come from a
//! [`TightInsetSource`], usually backed by text measurement.

use crate::error::{LayoutError, LayoutResult};
use crate::geometry::{Margin, Rect};
use crate::plot::PlotLayout;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinds of plot that share the layout core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotType {
    Category,
    Xy,
    Polar,
}

impl fmt::Display for PlotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlotType::Category => "category",
            PlotType::Xy => "xy",
            PlotType::Polar => "polar",
        };
        f.write_str(name)
    }
}

/// Provides the margin a plot needs around its position area for axis
/// ticks, labels, titles and legends.
///
/// Implementations must be deterministic for a fixed context, rectangle
/// and dataset.
pub trait TightInsetSource<C: ?Sized> {
    fn compute_tight_inset(&self, context: &C, position_area: &Rect) -> Margin;
}

impl<C: ?Sized, F> TightInsetSource<C> for F
where
    F: Fn(&C, &Rect) -> Margin,
{
    fn compute_tight_inset(&self, context: &C, position_area: &Rect) -> Margin {
        self(context, position_area)
    }
}

/// A tight inset that does not depend on the context or the area
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FixedInset(pub Margin);

impl<C: ?Sized> TightInsetSource<C> for FixedInset {
    fn compute_tight_inset(&self, _context: &C, _position_area: &Rect) -> Margin {
        self.0
    }
}

/// Capabilities every concrete plot kind provides.
///
/// Layout geometry lives in the owned [`PlotLayout`]; variants add data,
/// drawing and optional area queries on top of it.
pub trait PlotVariant {
    type Dataset;
    type Context: ?Sized;

    fn plot_type(&self) -> PlotType;

    fn dataset(&self) -> Option<&Self::Dataset>;

    fn set_dataset(&mut self, dataset: Self::Dataset);

    fn layout(&self) -> &PlotLayout;

    fn layout_mut(&mut self) -> &mut PlotLayout;

    /// Render the plot into `area`
    fn draw(&mut self, context: &mut Self::Context, area: &Rect) -> LayoutResult<()>;

    /// Whether [`outer_position_area`](Self::outer_position_area) is available
    fn supports_area_queries(&self) -> bool {
        false
    }

    /// Outer footprint this plot would occupy when drawn into `area`
    fn outer_position_area(&self, _area: &Rect) -> LayoutResult<Rect> {
        Err(LayoutError::UnsupportedOperation(format!(
            "{} plots do not provide outer position area queries",
            self.plot_type()
        )))
    }
}
