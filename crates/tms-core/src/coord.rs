//! Planar coordinates.

use serde::{Deserialize, Serialize};

/// A 2-D position in metres.
///
/// Coordinates are carried through from the input for visualization tools;
/// the motion simulator itself never reads them (distances come from edge
/// lengths, not geometry).
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Easting, metres.
    pub x: f64,
    /// Northing, metres.
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
