//! `tms-core` — foundational types for the `tms` simulation workspace.
//!
//! The interned index types and the coordinate value live here so that
//! `tms-graph`, `tms-service`, and `tms-engine` can share them without
//! depending on one another.  Nothing heavier than `serde` is pulled in.
//!
//! | Module    | Contents                             |
//! |-----------|--------------------------------------|
//! | [`ids`]   | `NodeIdx`, `EdgeIdx`                 |
//! | [`coord`] | `Coordinate` (planar x/y in metres)  |

pub mod coord;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use coord::Coordinate;
pub use ids::{EdgeIdx, NodeIdx};
