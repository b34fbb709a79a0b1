//! Static vehicle parameters.

use serde::{Deserialize, Serialize};

use tms_kinematics::MotionModel;

/// A vehicle type: identity, physical length, and its physics.
///
/// The traction and braking behaviour is owned by the `kinematics` field;
/// its JSON form carries the `"model"` discriminator that selects the
/// concrete [`MotionModel`] variant at parse time.  Adding a physics model
/// never touches this type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub name: String,
    /// Physical length, metres.  Enters the Movement Authority computation:
    /// a follower must stay clear of the leader's length plus its braking
    /// envelope.
    pub length: f64,
    pub kinematics: MotionModel,
}
