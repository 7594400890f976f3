//! Plot layout configuration
//!
//! Placement and layout-pass settings as they appear in a figure
//! description. Values are loaded with serde; missing fields take their
//! defaults.

use crate::error::LayoutResult;
use crate::units::Units;
use serde::{Deserialize, Serialize};

/// Placement of one plot within its figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotLayoutConfig {
    /// `[x, y, width, height]` of the graph region
    pub position: Option<Vec<f64>>,
    /// `[x, y, width, height]` of the full plot footprint
    pub outer_position: Option<Vec<f64>>,
    /// Units of both positions, matched case-insensitively
    pub units: String,
    /// Settings for the layout pass
    pub pass: PassSettings,
}

impl Default for PlotLayoutConfig {
    fn default() -> Self {
        Self {
            position: None,
            outer_position: None,
            units: Units::Normalized.to_string(),
            pass: PassSettings::default(),
        }
    }
}

impl PlotLayoutConfig {
    /// The configured units
    pub fn units(&self) -> LayoutResult<Units> {
        self.units.parse()
    }

    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> LayoutResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the configuration to pretty JSON
    pub fn to_json(&self) -> LayoutResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Settings controlling how a layout pass reconciles insets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassSettings {
    /// Maximum number of shrink rounds before giving up on convergence
    pub max_shrink_iterations: usize,
    /// Shrink below this many pixels on every side counts as stable
    pub tolerance: f64,
    /// Whether the computed zoom is stored on the layout
    pub apply_zoom: bool,
}

impl Default for PassSettings {
    fn default() -> Self {
        Self {
            max_shrink_iterations: 4,
            tolerance: 0.5,
            apply_zoom: true,
        }
    }
}
