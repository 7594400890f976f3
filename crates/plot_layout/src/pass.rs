//! Layout pass over a single plot
//!
//! A figure driver lays a plot out in a fixed order: materialize the outer
//! position area, obtain the tight inset, then reconcile shrink and zoom.
//! [`LayoutPass`] encodes that order in its type so a step cannot be
//! skipped or reordered.
//!
//! ```ignore
//! let outcome = layout
//!     .begin_pass(PassSettings::default())
//!     .with_figure(&figure)
//!     .with_tight_inset(&measurer, &ctx)
//!     .reconcile(&measurer, &ctx);
//! ```

use crate::config::PassSettings;
use crate::geometry::Rect;
use crate::plot::PlotLayout;
use crate::variant::TightInsetSource;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// Stage: the outer position area has not been set
#[derive(Debug)]
pub struct NeedsOuterArea;

/// Stage: waiting for the tight inset
#[derive(Debug)]
pub struct NeedsTightInset;

/// Stage: position area computed, ready to reconcile
#[derive(Debug)]
pub struct Ready;

/// Result of a completed layout pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutOutcome {
    /// Position area after shrinking
    pub position_area: Rect,
    /// Zoom computed for the final position area
    pub zoom: f64,
    /// Position area scaled by `zoom` about its center
    pub zoomed_area: Rect,
    /// Shrink rounds applied
    pub iterations: usize,
    /// Whether the shrink settled within tolerance
    pub converged: bool,
}

/// An in-progress layout pass borrowing one plot's layout state
#[derive(Debug)]
pub struct LayoutPass<'a, S> {
    layout: &'a mut PlotLayout,
    settings: PassSettings,
    _stage: PhantomData<S>,
}

impl<'a, S> LayoutPass<'a, S> {
    fn advance<T>(self) -> LayoutPass<'a, T> {
        LayoutPass {
            layout: self.layout,
            settings: self.settings,
            _stage: PhantomData,
        }
    }

    /// The layout state as of this stage
    pub fn layout(&self) -> &PlotLayout {
        self.layout
    }
}

impl PlotLayout {
    /// Start a layout pass
    pub fn begin_pass(&mut self, settings: PassSettings) -> LayoutPass<'_, NeedsOuterArea> {
        LayoutPass {
            layout: self,
            settings,
            _stage: PhantomData,
        }
    }
}

impl<'a> LayoutPass<'a, NeedsOuterArea> {
    /// Use an explicit outer position area
    pub fn with_outer_position_area(self, area: Rect) -> LayoutPass<'a, NeedsTightInset> {
        self.layout.set_outer_position_area(area);
        self.advance()
    }

    /// Derive the outer position area from the figure rectangle
    pub fn with_figure(self, figure: &Rect) -> LayoutPass<'a, NeedsTightInset> {
        let area = self.layout.compute_outer_position_area(figure);
        self.with_outer_position_area(area)
    }
}

impl<'a> LayoutPass<'a, NeedsTightInset> {
    /// Measure decorations for the outer area and inset the position area
    pub fn with_tight_inset<C, I>(self, source: &I, context: &C) -> LayoutPass<'a, Ready>
    where
        C: ?Sized,
        I: TightInsetSource<C> + ?Sized,
    {
        let outer = self.layout.outer_position_area();
        let inset = source.compute_tight_inset(context, &outer);
        self.layout.set_tight_inset(inset);
        self.layout.update_position_area();
        self.advance()
    }
}

impl<'a> LayoutPass<'a, Ready> {
    /// Shrink until the decorations fit, then compute the zoom.
    ///
    /// Each round re-measures the tight inset for the current position
    /// area. Stops once every side's shrink is within the tolerance or the
    /// iteration cap is reached.
    pub fn reconcile<C, I>(self, source: &I, context: &C) -> LayoutOutcome
    where
        C: ?Sized,
        I: TightInsetSource<C> + ?Sized,
    {
        let settings = self.settings;
        let layout = self.layout;
        let mut iterations = 0;
        let mut converged = false;

        while let Some(area) = layout.position_area() {
            let inset = source.compute_tight_inset(context, &area);
            layout.set_tight_inset(inset);

            let shrink = layout.plot_shrink();
            if shrink.is_zero(settings.tolerance) {
                converged = true;
                break;
            }
            if iterations >= settings.max_shrink_iterations {
                break;
            }
            layout.set_plot_shrink(&shrink);
            iterations += 1;
        }

        if !converged {
            tracing::warn!(
                target: "plot_layout::pass",
                iterations,
                "plot shrink did not settle, falling back to zoom"
            );
        }

        let zoom = layout.update_position_area_zoom();
        if settings.apply_zoom {
            layout.set_position_area_zoom(zoom);
        }
        let position_area = layout.position_area().unwrap_or_default();

        tracing::debug!(
            target: "plot_layout::pass",
            ?position_area,
            zoom,
            iterations,
            converged,
            "layout pass finished"
        );

        LayoutOutcome {
            position_area,
            zoom,
            zoomed_area: position_area.scaled_about_center(zoom),
            iterations,
            converged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Margin;
    use crate::variant::FixedInset;

    #[test]
    fn test_pass_with_fixed_inset_converges_immediately() {
        let mut layout = PlotLayout::new();
        let source = FixedInset(Margin::new(40.0, 10.0, 20.0, 30.0));
        let outcome = layout
            .begin_pass(PassSettings::default())
            .with_figure(&Rect::new(0.0, 0.0, 400.0, 300.0))
            .with_tight_inset(&source, &())
            .reconcile(&source, &());

        assert!(outcome.converged);
        assert_eq!(outcome.iterations, 0);
        assert_eq!(outcome.zoom, 1.0);
        assert_eq!(outcome.position_area, Rect::new(40.0, 20.0, 350.0, 250.0));
        assert_eq!(outcome.zoomed_area, outcome.position_area);
        assert_eq!(layout.outer_position_area(), Rect::new(0.0, 0.0, 400.0, 300.0));
        assert_eq!(layout.position_area(), Some(outcome.position_area));
    }

    #[test]
    fn test_pass_with_growing_inset_shrinks() {
        let mut layout = PlotLayout::new();
        // Labels need more room once the area is narrow enough to wrap
        let source = |_: &(), area: &Rect| {
            if area.width < 400.0 {
                Margin::new(60.0, 0.0, 0.0, 0.0)
            } else {
                Margin::new(20.0, 0.0, 0.0, 0.0)
            }
        };
        let outcome = layout
            .begin_pass(PassSettings::default())
            .with_outer_position_area(Rect::new(0.0, 0.0, 400.0, 200.0))
            .with_tight_inset(&source, &())
            .reconcile(&source, &());

        assert!(outcome.iterations >= 1);
        assert!(outcome.position_area.x > 20.0);
        assert!(outcome.position_area.width < 380.0);
    }

    #[test]
    fn test_pass_respects_iteration_cap() {
        let mut layout = PlotLayout::new();
        // Needs more room every time it is asked
        let source = |_: &(), area: &Rect| Margin::new(420.0 - area.width, 0.0, 0.0, 0.0);
        let settings = PassSettings {
            max_shrink_iterations: 2,
            ..PassSettings::default()
        };
        let outcome = layout
            .begin_pass(settings)
            .with_outer_position_area(Rect::new(0.0, 0.0, 400.0, 200.0))
            .with_tight_inset(&source, &())
            .reconcile(&source, &());

        assert!(!outcome.converged);
        assert_eq!(outcome.iterations, 2);
        assert!(outcome.zoom >= 0.0 && outcome.zoom <= 1.0);
    }

    #[test]
    fn test_zoom_not_stored_when_disabled() {
        let mut layout = PlotLayout::new();
        layout.set_position_area_zoom(0.5);
        let source = FixedInset(Margin::default());
        let settings = PassSettings {
            apply_zoom: false,
            ..PassSettings::default()
        };
        let outcome = layout
            .begin_pass(settings)
            .with_outer_position_area(Rect::new(0.0, 0.0, 10.0, 10.0))
            .with_tight_inset(&source, &())
            .reconcile(&source, &());

        assert_eq!(outcome.zoom, 1.0);
        assert_eq!(layout.position_area_zoom(), 0.5);
    }
}
