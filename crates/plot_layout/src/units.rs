//! Coordinate units for plot positions

use crate::error::{LayoutError, LayoutResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How position and outer position values are interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Units {
    /// Fractions of the figure, origin at the bottom-left
    #[default]
    Normalized,
    /// Absolute pixel offsets and sizes
    Pixels,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Normalized => "normalized",
            Units::Pixels => "pixels",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Units {
    type Err = LayoutError;

    fn from_str(s: &str) -> LayoutResult<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("normalized") {
            Ok(Units::Normalized)
        } else if trimmed.eq_ignore_ascii_case("pixels") {
            Ok(Units::Pixels)
        } else {
            Err(LayoutError::InvalidConfiguration(format!(
                "unknown units '{}', expected 'normalized' or 'pixels'",
                s
            )))
        }
    }
}

impl TryFrom<String> for Units {
    type Error = LayoutError;

    fn try_from(value: String) -> LayoutResult<Self> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("normalized".parse::<Units>().unwrap(), Units::Normalized);
        assert_eq!("NORMALIZED".parse::<Units>().unwrap(), Units::Normalized);
        assert_eq!("Pixels".parse::<Units>().unwrap(), Units::Pixels);
        assert_eq!(" pixels ".parse::<Units>().unwrap(), Units::Pixels);
    }

    #[test]
    fn test_parse_unknown_units() {
        let err = "inches".parse::<Units>().unwrap_err();
        assert!(matches!(err, LayoutError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_serde_accepts_any_case() {
        let units: Units = serde_json::from_str("\"PiXeLs\"").unwrap();
        assert_eq!(units, Units::Pixels);
        assert_eq!(serde_json::to_string(&Units::Normalized).unwrap(), "\"normalized\"");
        assert!(serde_json::from_str::<Units>("\"points\"").is_err());
    }
}
