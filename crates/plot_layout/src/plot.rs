//! Plot positioning state and its geometric transforms
//!
//! A [`PlotLayout`] holds the user-facing placement of a plot (position and
//! outer position, in [`Units`]) together with the pixel-space rectangles a
//! figure layout pass derives from them. The derived values are recomputed
//! on every pass; only the position, outer position and units are inputs.

use crate::config::PlotLayoutConfig;
use crate::error::{LayoutError, LayoutResult};
use crate::geometry::{Margin, Rect};
use crate::units::Units;
use serde::{Deserialize, Serialize};

/// Lower bound for a zoom factor that came out negative
pub const ZOOM_FLOOR: f64 = 0.2;

/// Map a position into the pixel space of `figure`.
///
/// Normalized positions are fractions of the figure with a bottom-left
/// origin. Pixel positions are offsets from the figure's left edge and from
/// the bottom of a figure of the same height.
pub fn compute_position_area(figure: &Rect, position: &Rect, units: Units) -> Rect {
    match units {
        Units::Normalized => Rect {
            x: figure.width * position.x + figure.x,
            y: figure.height * (1.0 - position.height - position.y) + figure.y,
            width: figure.width * position.width,
            height: figure.height * position.height,
        },
        Units::Pixels => Rect {
            x: figure.x + position.x,
            y: figure.height - position.y - position.height,
            width: position.width,
            height: position.height,
        },
    }
}

fn rect_from_values(values: &[f64], what: &str) -> LayoutResult<Rect> {
    match values {
        [x, y, width, height] => Ok(Rect::new(*x, *y, *width, *height)),
        _ => Err(LayoutError::InvalidConfiguration(format!(
            "{} needs 4 values (x, y, width, height), got {}",
            what,
            values.len()
        ))),
    }
}

/// Positioning state of a single plot within a figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotLayout {
    /// Desired footprint of the plot's graph region
    position: Rect,
    /// Largest footprint the plot may use, decorations included
    outer_position: Rect,
    units: Units,
    /// Outer position materialized in figure pixels
    outer_position_area: Rect,
    /// Pixel rectangle of the graph region, unset until a pass computes it
    position_area: Option<Rect>,
    graph_area: Option<Rect>,
    /// Space reserved around the position area for ticks, labels and titles
    tight_inset: Margin,
    position_area_zoom: f64,
}

impl Default for PlotLayout {
    fn default() -> Self {
        Self {
            position: Rect::default(),
            outer_position: Rect::UNIT,
            units: Units::Normalized,
            outer_position_area: Rect::default(),
            position_area: None,
            graph_area: None,
            tight_inset: Margin::default(),
            position_area_zoom: 1.0,
        }
    }
}

impl PlotLayout {
    /// Create a layout with default placement
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a layout from a configuration block
    pub fn from_config(config: &PlotLayoutConfig) -> LayoutResult<Self> {
        let mut layout = Self {
            units: config.units()?,
            ..Self::default()
        };
        if let Some(values) = &config.position {
            layout.set_position_values(values)?;
        }
        if let Some(values) = &config.outer_position {
            layout.outer_position = rect_from_values(values, "outer position")?;
        }
        Ok(layout)
    }

    /// Set the position
    pub fn with_position(mut self, position: Rect) -> Self {
        self.position = position;
        self
    }

    /// Set the outer position
    pub fn with_outer_position(mut self, outer_position: Rect) -> Self {
        self.outer_position = outer_position;
        self
    }

    /// Set the units
    pub fn with_units(mut self, units: Units) -> Self {
        self.units = units;
        self
    }

    pub fn position(&self) -> Rect {
        self.position
    }

    pub fn set_position(&mut self, position: Rect) {
        self.position = position;
    }

    /// Set the position from `[x, y, width, height]`
    pub fn set_position_values(&mut self, values: &[f64]) -> LayoutResult<()> {
        self.position = rect_from_values(values, "position")?;
        Ok(())
    }

    pub fn outer_position(&self) -> Rect {
        self.outer_position
    }

    pub fn set_outer_position(&mut self, outer_position: Rect) {
        self.outer_position = outer_position;
    }

    /// Set from `[x, y, width, height]`.
    ///
    /// The values are stored as the *position*, not the outer position.
    /// Existing callers depend on this, so it is kept until the intended
    /// target is confirmed.
    pub fn set_outer_position_values(&mut self, values: &[f64]) -> LayoutResult<()> {
        let rect = rect_from_values(values, "outer position")?;
        tracing::warn!(
            target: "plot_layout::position",
            ?rect,
            "outer position values written to position"
        );
        self.position = rect;
        Ok(())
    }

    pub fn units(&self) -> Units {
        self.units
    }

    pub fn set_units(&mut self, units: Units) {
        self.units = units;
    }

    /// Set the units from a case-insensitive name
    pub fn set_units_str(&mut self, units: &str) -> LayoutResult<()> {
        self.units = units.parse()?;
        Ok(())
    }

    pub fn outer_position_area(&self) -> Rect {
        self.outer_position_area
    }

    pub fn set_outer_position_area(&mut self, area: Rect) {
        self.outer_position_area = area;
    }

    pub fn tight_inset(&self) -> Margin {
        self.tight_inset
    }

    pub fn set_tight_inset(&mut self, inset: Margin) {
        self.tight_inset = inset;
    }

    /// The current position area, if a layout pass has produced one
    pub fn position_area(&self) -> Option<Rect> {
        self.position_area
    }

    pub fn set_position_area(&mut self, area: Option<Rect>) {
        self.position_area = area;
    }

    pub fn graph_area(&self) -> Option<Rect> {
        self.graph_area
    }

    pub fn set_graph_area(&mut self, area: Option<Rect>) {
        self.graph_area = area;
    }

    pub fn position_area_zoom(&self) -> f64 {
        self.position_area_zoom
    }

    pub fn set_position_area_zoom(&mut self, zoom: f64) {
        self.position_area_zoom = zoom;
    }

    /// Map the position into the pixel space of `figure`
    pub fn compute_position_area(&self, figure: &Rect) -> Rect {
        compute_position_area(figure, &self.position, self.units)
    }

    /// Map the outer position into the pixel space of `figure`
    pub fn compute_outer_position_area(&self, figure: &Rect) -> Rect {
        compute_position_area(figure, &self.outer_position, self.units)
    }

    /// Re-derive the normalized position from the current position area.
    ///
    /// Does nothing when the position area is unset or the figure is empty.
    pub fn update_position(&mut self, figure: &Rect) {
        let Some(area) = self.position_area else {
            return;
        };
        if figure.is_empty() {
            tracing::debug!(
                target: "plot_layout::position",
                ?figure,
                "skipping position update for empty figure"
            );
            return;
        }

        self.position = Rect {
            x: area.x / figure.width,
            y: 1.0 - (area.y + area.height) / figure.height,
            width: area.width / figure.width,
            height: area.height / figure.height,
        };
    }

    /// Re-derive the position from an outer area rectangle.
    ///
    /// Like [`update_position`](Self::update_position) but measured from
    /// `outer_area`, with y taken relative to the figure's top edge. The
    /// result is written to the position, not the outer position.
    pub fn update_position_from_outer(&mut self, figure: &Rect, outer_area: &Rect) {
        if figure.is_empty() {
            tracing::debug!(
                target: "plot_layout::position",
                ?figure,
                "skipping position update for empty figure"
            );
            return;
        }

        let y = outer_area.y - figure.y;
        self.position = Rect {
            x: outer_area.x / figure.width,
            y: 1.0 - (y + outer_area.height) / figure.height,
            width: outer_area.width / figure.width,
            height: outer_area.height / figure.height,
        };
    }

    /// Inset the outer position area by the tight inset to get the position area.
    ///
    /// Insets are expected to be non-negative. A negative side is applied as
    /// given and grows the area past the outer position area on that side.
    pub fn update_position_area(&mut self) {
        let outer = self.outer_position_area;
        let inset = self.tight_inset;
        if inset.left < 0.0 || inset.right < 0.0 || inset.top < 0.0 || inset.bottom < 0.0 {
            tracing::debug!(
                target: "plot_layout::area",
                ?inset,
                "negative tight inset extends position area beyond outer area"
            );
        }
        let area = Rect {
            x: outer.x + inset.left,
            y: outer.y + inset.top,
            width: (outer.width - inset.left - inset.right).max(0.0),
            height: (outer.height - inset.top - inset.bottom).max(0.0),
        };

        tracing::trace!(
            target: "plot_layout::area",
            ?outer,
            ?inset,
            ?area,
            "position area updated"
        );
        self.position_area = Some(area);
    }

    /// Per-side shrink needed to keep the decorated position area inside
    /// the outer position area.
    ///
    /// A side whose decorations stay inside gets zero. An overflowing side
    /// gets its tight inset plus the gap between the position area edge and
    /// the outer edge.
    pub fn plot_shrink(&self) -> Margin {
        let Some(area) = self.position_area else {
            return Margin::default();
        };
        let outer = self.outer_position_area;
        let inset = self.tight_inset;
        let mut shrink = Margin::default();

        if area.x - inset.left < outer.x {
            shrink.left = inset.left + area.x - outer.x;
        }
        if area.right() + inset.right > outer.right() {
            shrink.right = inset.right + outer.right() - area.right();
        }
        if area.y - inset.top < outer.y {
            shrink.top = inset.top + area.y - outer.y;
        }
        if area.bottom() + inset.bottom > outer.bottom() {
            shrink.bottom = inset.bottom + outer.bottom() - area.bottom();
        }

        tracing::trace!(target: "plot_layout::shrink", ?shrink, "plot shrink computed");
        shrink
    }

    /// Inset the position area by `shrink`. No-op when the area is unset.
    pub fn set_plot_shrink(&mut self, shrink: &Margin) {
        if let Some(area) = self.position_area.as_mut() {
            let width = area.width - shrink.horizontal();
            let height = area.height - shrink.vertical();
            if width < 0.0 || height < 0.0 {
                tracing::debug!(
                    target: "plot_layout::shrink",
                    width,
                    height,
                    "shrink exceeds position area, clamping"
                );
            }
            *area = shrink.area(area);
        }
    }

    /// Uniform zoom that pulls the decorated position area back inside the
    /// outer position area.
    ///
    /// Returns 1.0 when nothing overflows. A negative result is replaced by
    /// [`ZOOM_FLOOR`]. The stored zoom is left untouched.
    pub fn update_position_area_zoom(&self) -> f64 {
        let Some(area) = self.position_area else {
            return 1.0;
        };
        let outer = self.outer_position_area;
        let decorated = self.tight_inset.expand(&area);

        let left = decorated.x - outer.x;
        let right = outer.right() - decorated.right();
        let top = decorated.y - outer.y;
        let bottom = outer.bottom() - decorated.bottom();

        let min_h = left.min(right);
        let min_v = top.min(bottom);
        if min_h.min(min_v) >= 0.0 {
            return 1.0;
        }

        let axis_zoom = |size: f64, overflow: f64| {
            if overflow >= 0.0 {
                1.0
            } else if size <= 0.0 {
                ZOOM_FLOOR
            } else {
                (size - overflow.abs() * 2.0) / size
            }
        };

        let mut zoom = axis_zoom(area.width, min_h).min(axis_zoom(area.height, min_v));
        if zoom < 0.0 {
            zoom = ZOOM_FLOOR;
        }

        tracing::trace!(
            target: "plot_layout::zoom",
            left,
            right,
            top,
            bottom,
            zoom,
            "position area zoom computed"
        );
        zoom
    }

    /// The position area scaled by `zoom` about its center
    pub fn position_area_zoomed(&self, zoom: f64) -> Option<Rect> {
        self.position_area.map(|area| area.scaled_about_center(zoom))
    }
}
