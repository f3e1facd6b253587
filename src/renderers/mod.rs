//! Output formats for a composed scene.

pub mod svg;
pub mod text;

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::viewport::Scene;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Svg,
    Json,
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "svg" => Ok(Format::Svg),
            "json" => Ok(Format::Json),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Svg => write!(f, "svg"),
            Format::Json => write!(f, "json"),
        }
    }
}

/// Render `scene` in the given format.
pub fn render(scene: &Scene, format: Format) -> Result<String, Error> {
    match format {
        Format::Svg => Ok(svg::render(scene)),
        Format::Json => Ok(serde_json::to_string_pretty(scene)?),
    }
}
