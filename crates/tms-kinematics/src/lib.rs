//! `tms-kinematics` — vehicle traction and braking physics.
//!
//! # Crate layout
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`model`]    | `MotionModel` sum type, `Motion` step result      |
//! | [`constant`] | `ConstantAcceleration` (fixed a_acc / a_dcc)      |
//!
//! # Adding a model
//!
//! `MotionModel` is an internally tagged enum keyed by the JSON `"model"`
//! discriminator.  Adding a physics model means adding a variant, deriving
//! its deserializer, and extending the dispatch arms in `model.rs` — the
//! simulation engine itself never changes.

pub mod constant;
pub mod model;


pub use constant::ConstantAcceleration;
pub use model::{Motion, MotionModel};
