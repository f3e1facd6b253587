//! Configuration for the layout pipeline.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Node card width in canvas units.
pub const NODE_WIDTH: f64 = 260.0;
/// Node card height in canvas units.
pub const NODE_HEIGHT: f64 = 90.0;
/// Gap between neighbouring nodes of one rank.
pub const NODE_SEP: f64 = 40.0;
/// Gap between consecutive ranks.
pub const RANK_SEP: f64 = 80.0;
/// Padding around the whole diagram.
pub const MARGIN: f64 = 100.0;
/// Sweeps of the median ordering heuristic.
pub const ORDERING_PASSES: usize = 24;

// ─── Direction ───────────────────────────────────────────────────────────────

/// Which way ranks advance on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    /// Ranks advance along x.
    #[default]
    LR,
    /// Ranks advance along y.
    TB,
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "LR" => Ok(Direction::LR),
            "TB" | "TD" => Ok(Direction::TB),
            _ => Err(Error::UnknownDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::LR => f.write_str("LR"),
            Direction::TB => f.write_str("TB"),
        }
    }
}

// ─── LayoutConfig ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    pub direction: Direction,
    /// Every node gets the same box.
    pub node_width: f64,
    pub node_height: f64,
    /// Gap between nodes inside one rank (cross axis).
    pub node_sep: f64,
    /// Gap between ranks (primary axis).
    pub rank_sep: f64,
    pub margin: f64,
    pub ordering_passes: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            direction: Direction::LR,
            node_width: NODE_WIDTH,
            node_height: NODE_HEIGHT,
            node_sep: NODE_SEP,
            rank_sep: RANK_SEP,
            margin: MARGIN,
            ordering_passes: ORDERING_PASSES,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// (primary, cross) extent of a node for the configured direction.
    pub fn node_extents(&self) -> (f64, f64) {
        match self.direction {
            Direction::LR => (self.node_width, self.node_height),
            Direction::TB => (self.node_height, self.node_width),
        }
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_config.rs"]
mod tests;
