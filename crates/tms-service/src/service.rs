//! Service definitions and the `SimService` state machine.
//!
//! # State machine
//!
//! A service is always in exactly one of five states:
//!
//! ```text
//! stationary ──(departure delay elapsed)──▶ accelerating ◀──┐
//!                                              │  ▲          │
//!                                (at limit)    ▼  │ (limit raised by
//!                                           cruising │  lookahead target)
//!                                              │     │
//!                              (brake trigger) ▼     │
//!                                          decelerating
//!                                              │
//!                                 (v = 0 at stop) ▼
//!                                           dwelling ──(dwell expired)──▶ accelerating
//! ```
//!
//! The next-stop pointer is a plain index into the route, advanced modulo
//! the route length on each arrival, so services cycle their routes
//! indefinitely.  A stop's dwell time is consumed on *arrival at* that
//! stop: `start_dwell` loads `t_dwell` from the stop being reached and only
//! then advances the pointer.

use serde::{Deserialize, Serialize};

use tms_core::NodeIdx;
use tms_graph::{Network, Position};

use crate::error::{ServiceError, ServiceResult};
use crate::vehicle::Vehicle;

// ── Input records ─────────────────────────────────────────────────────────────

/// One stop on a service's route, as it appears in the input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteStop {
    pub node_id: String,
    /// Scheduled dwell at this stop, seconds.
    pub t_dwell: f64,
}

/// The static definition of a scheduled service, as it appears in
/// `service_list[]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceData {
    pub service_id: String,
    /// Node id the service starts from.
    pub initial_position: String,
    pub route: Vec<RouteStop>,
    pub vehicle: Vehicle,
    /// Seconds the service waits stationary before beginning to move.
    /// Models staggered timetabled departures; zero = immediate.
    #[serde(default)]
    pub departure_delay: f64,
}

// ── Runtime types ─────────────────────────────────────────────────────────────

/// A route stop with its node id resolved to an interned index.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Stop {
    pub node: NodeIdx,
    /// Seconds.
    pub t_dwell: f64,
}

/// The motion state of a service.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceState {
    Stationary,
    Accelerating,
    Cruising,
    Decelerating,
    Dwelling,
}

/// A service enriched with live simulation state.
///
/// Constructed once per run by [`SimService::new`] and thereafter mutated
/// exclusively by the simulation driver's motion pass.
#[derive(Clone, Debug)]
pub struct SimService {
    pub id: String,
    pub vehicle: Vehicle,
    /// Route with node ids resolved; never empty.
    pub route: Vec<Stop>,
    /// Seconds to hold in `Stationary` before first moving.
    pub departure_delay: f64,

    pub position: Position,
    pub state: ServiceState,
    /// Scalar velocity, m/s, ≥ 0.
    pub velocity: f64,
    /// Seconds of dwell left; only meaningful in `Dwelling`.
    pub remaining_dwell: f64,
    /// The node the service is currently heading for.
    pub next_stop: NodeIdx,
    next_stop_index: usize,
}

impl SimService {
    /// Resolve a static definition against the network and place the
    /// service at its initial node, facing its first stop.
    pub fn new(data: &ServiceData, net: &Network) -> ServiceResult<Self> {
        let wrap = |source| ServiceError::Graph {
            service: data.service_id.clone(),
            source,
        };

        let initial = net.node_idx(&data.initial_position).map_err(wrap)?;
        let route: Vec<Stop> = data
            .route
            .iter()
            .map(|stop| {
                Ok(Stop {
                    node: net.node_idx(&stop.node_id).map_err(wrap)?,
                    t_dwell: stop.t_dwell,
                })
            })
            .collect::<ServiceResult<_>>()?;

        let (next_stop, next_stop_index) = first_stop(&data.service_id, initial, &route)?;
        let position = net
            .path_start_position(initial, next_stop)
            .map_err(wrap)?;

        Ok(Self {
            id: data.service_id.clone(),
            vehicle: data.vehicle.clone(),
            route,
            departure_delay: data.departure_delay,
            position,
            state: ServiceState::Stationary,
            velocity: 0.0,
            remaining_dwell: 0.0,
            next_stop,
            next_stop_index,
        })
    }

    /// Minimum stopping distance from the current velocity.
    pub fn braking_distance(&self) -> f64 {
        self.vehicle.kinematics.braking_distance(self.velocity)
    }

    /// Decrement the remaining dwell by `dt` seconds, entering the dwelling
    /// state first if not already there.  When the dwell is exhausted the
    /// service is released into `Accelerating` from rest.
    pub fn advance_dwell(&mut self, dt: f64) {
        if self.state != ServiceState::Dwelling {
            self.start_dwell();
        }
        self.remaining_dwell -= dt;
        if self.remaining_dwell <= 0.0 {
            self.end_dwell();
        }
    }

    /// Transition into dwelling upon reaching the next stop.
    pub fn arrive_at_stop(&mut self) {
        self.start_dwell();
    }

    fn start_dwell(&mut self) {
        self.state = ServiceState::Dwelling;
        self.velocity = 0.0;
        self.remaining_dwell = self.route[self.next_stop_index].t_dwell;
        self.advance_next_stop();
    }

    fn end_dwell(&mut self) {
        self.state = ServiceState::Accelerating;
        self.velocity = 0.0;
        self.remaining_dwell = 0.0;
    }

    fn advance_next_stop(&mut self) {
        self.next_stop_index = (self.next_stop_index + 1) % self.route.len();
        self.next_stop = self.route[self.next_stop_index].node;
    }
}

/// Select the first target stop for a service starting at `initial`.
///
/// A service that starts *at* its first route stop heads for the second
/// stop instead; a route that offers no stop other than the initial node is
/// rejected.
fn first_stop(
    service_id: &str,
    initial: NodeIdx,
    route: &[Stop],
) -> ServiceResult<(NodeIdx, usize)> {
    let Some(first) = route.first() else {
        return Err(ServiceError::EmptyRoute(service_id.to_owned()));
    };
    if initial == first.node {
        match route.get(1) {
            Some(second) => Ok((second.node, 1)),
            None => Err(ServiceError::SingleStopRoute(service_id.to_owned())),
        }
    } else {
        Ok((first.node, 0))
    }
}
