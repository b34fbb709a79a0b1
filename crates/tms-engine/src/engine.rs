//! The `Tms` driver and its two-pass step.

use tms_graph::{GraphError, Network, Position};
use tms_service::{ServiceState, SimService};

use crate::error::{EngineError, EngineResult};
use crate::io::{PositionLog, ServiceLog, SimulationInput, SimulationLog, SimulationLogRow, SimulationMeta};
use crate::proposal::{constrained_kinematics, propose_movement, SpeedLimitInfo};

/// The simulation driver.
///
/// Owns the network, the service population, and the current time, and
/// advances everything together in fixed steps.  Construct with
/// [`Tms::new`], then call [`Tms::run`] exactly once; a new run builds a
/// fresh driver.
pub struct Tms {
    meta: SimulationMeta,
    network: Network,
    services: Vec<SimService>,
    cur_time: f64,
}

impl Tms {
    /// Build the network, resolve each service's first stop, and place the
    /// services at their initial positions.
    pub fn new(input: SimulationInput) -> EngineResult<Self> {
        if input.simulation_meta.time_step <= 0.0 {
            return Err(EngineError::InvalidTimeStep {
                id: input.simulation_meta.simulation_id,
                got: input.simulation_meta.time_step,
            });
        }

        let network = Network::from_data(input.graph_data)?;
        let services = input
            .service_list
            .iter()
            .map(|data| SimService::new(data, &network))
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!(
            "simulation {:?}: {} services placed",
            input.simulation_meta.simulation_id,
            services.len()
        );

        Ok(Self {
            meta: input.simulation_meta,
            network,
            services,
            cur_time: 0.0,
        })
    }

    /// Execute the full simulation and return the log.
    ///
    /// The loop is inclusive of `run_time`: a run of `T` seconds at step
    /// `Δ` yields `⌊T/Δ⌋ + 1` rows stamped `0, Δ, 2Δ, …`.
    pub fn run(&mut self) -> EngineResult<SimulationLog> {
        log::debug!(
            "running {:?}: run_time={}s, time_step={}s",
            self.meta.simulation_id,
            self.meta.run_time,
            self.meta.time_step
        );

        let mut output = Vec::new();
        while self.cur_time <= self.meta.run_time {
            output.push(self.step()?);
            self.cur_time += self.meta.time_step;
        }

        Ok(SimulationLog {
            simulation_meta: self.meta.clone(),
            output,
        })
    }

    /// Advance the simulation by one timestep and return the resulting row.
    fn step(&mut self) -> EngineResult<SimulationLogRow> {
        let dt = self.meta.time_step;
        log::trace!("step t={}", self.cur_time);

        // ── Pass 1: safety ────────────────────────────────────────────────
        //
        // Freeze every service's braking distance before anything moves.
        // The map is a pure function of step-start state, so the motion
        // pass below trims against a consistent envelope regardless of
        // iteration order.
        let braking: Vec<f64> = self.services.iter().map(|s| s.braking_distance()).collect();

        // ── Pass 2: motion, in input order ────────────────────────────────
        for i in 0..self.services.len() {
            match self.services[i].state {
                ServiceState::Stationary => {
                    // Hold until the departure delay has elapsed, then start
                    // moving (motion itself begins on the next step).
                    if self.cur_time < self.services[i].departure_delay {
                        continue;
                    }
                    self.services[i].state = ServiceState::Accelerating;
                    continue;
                }
                ServiceState::Dwelling => {
                    self.services[i].advance_dwell(dt);
                    continue;
                }
                _ => {}
            }

            let svc = &self.services[i];
            let dist_to_stop = distance_to_next_stop(&self.network, svc)
                .map_err(|e| self.runtime_err(i, e))?;
            let sl = speed_limit_info(&self.network, svc).map_err(|e| self.runtime_err(i, e))?;

            // Kinematic proposal: how far would this service travel in dt
            // with no MA constraint?
            let proposed = propose_movement(svc, dt, dist_to_stop, sl);

            // MA trim: the granted distance must stay clear of every other
            // service's protected zone.  A trimmed grant re-derives velocity
            // from braking through the shorter distance.
            let outcome = match max_allowed_distance(&self.services, i, &braking) {
                Some(max) if max < proposed.distance => constrained_kinematics(svc, max),
                _ => proposed,
            };

            let arrived = advance_position(&self.network, &mut self.services[i], outcome.distance);
            let arrived = arrived.map_err(|e| self.runtime_err(i, e))?;

            // Arrival supersedes the velocity/state update; any unspent
            // distance from this step is discarded.
            if arrived {
                self.services[i].arrive_at_stop();
            } else {
                self.services[i].velocity = outcome.velocity;
                self.services[i].state = outcome.state;
            }
        }

        // ── Snapshot ──────────────────────────────────────────────────────
        let service_logs = self
            .services
            .iter()
            .map(|svc| self.snapshot(svc))
            .collect();
        Ok(SimulationLogRow {
            timestamp: self.cur_time,
            service_logs,
        })
    }

    fn snapshot(&self, svc: &SimService) -> ServiceLog {
        ServiceLog {
            service_id: svc.id.clone(),
            current_position: PositionLog {
                edge: self.network.edge(svc.position.edge).id.clone(),
                distance_along_edge: svc.position.distance_along_edge,
            },
            state: svc.state,
            velocity: svc.velocity,
            remaining_dwell: svc.remaining_dwell,
            next_stop: self.network.node(svc.next_stop).id.clone(),
        }
    }

    fn runtime_err(&self, i: usize, source: GraphError) -> EngineError {
        EngineError::Runtime {
            time: self.cur_time,
            service: self.services[i].id.clone(),
            source,
        }
    }
}

// ── Per-service step queries ──────────────────────────────────────────────────

/// Metres from `svc`'s current position to its next stop node, following
/// the shortest path.
fn distance_to_next_stop(net: &Network, svc: &SimService) -> Result<f64, GraphError> {
    let edge = net.edge(svc.position.edge);
    let remaining_on_edge = edge.length - svc.position.distance_along_edge;

    if edge.v == svc.next_stop {
        return Ok(remaining_on_edge);
    }

    let path = net.shortest_path(edge.v, svc.next_stop)?;
    Ok(remaining_on_edge + path.length)
}

/// The effective speed limits relevant to `svc` at its current position:
/// the cap on the current edge, the distance to where it may change, and
/// the cap on the next edge toward the next stop (for lookahead braking).
fn speed_limit_info(net: &Network, svc: &SimService) -> Result<SpeedLimitInfo, GraphError> {
    let edge = net.edge(svc.position.edge);

    let mut current_max = svc.vehicle.kinematics.v_max();
    if let Some(limit) = edge.speed_limit {
        if limit < current_max {
            current_max = limit;
        }
    }

    let dist_to_change = edge.length - svc.position.distance_along_edge;

    // If the next stop is at the end of this edge, stop braking already
    // handles the approach.
    if edge.v == svc.next_stop {
        return Ok(SpeedLimitInfo {
            current_max,
            dist_to_change,
            next_max: 0.0,
        });
    }

    // Look ahead one edge to anticipate an upcoming speed limit change.
    let mut next_max = svc.vehicle.kinematics.v_max();
    if let Ok(next) = net.next_edge(edge.v, svc.next_stop) {
        if let Some(limit) = net.edge(next).speed_limit {
            if limit < next_max {
                next_max = limit;
            }
        }
    }

    Ok(SpeedLimitInfo {
        current_max,
        dist_to_change,
        next_max,
    })
}

/// The maximum distance service `i` may travel without entering any other
/// service's protected zone (body length plus frozen braking envelope).
///
/// Returns `None` when no other service constrains the subject.
///
/// Only services on the same edge are compared.
/// TODO: resolve conflicts across edge boundaries for full network coverage.
pub(crate) fn max_allowed_distance(
    services: &[SimService],
    i: usize,
    braking: &[f64],
) -> Option<f64> {
    let subject = &services[i];
    let my_pos = subject.position.distance_along_edge;

    let mut max_dist: Option<f64> = None;
    for (j, other) in services.iter().enumerate() {
        if j == i || other.position.edge != subject.position.edge {
            continue;
        }

        let other_pos = other.position.distance_along_edge;
        if other_pos <= my_pos {
            continue; // other is behind or level
        }

        // Other's protected zone begins at its rear (front − length) minus
        // its braking distance; we must not enter it.
        let zone_start = other_pos - other.vehicle.length - braking[j];
        let allowed = zone_start - my_pos;
        max_dist = Some(match max_dist {
            None => allowed,
            Some(cur) => cur.min(allowed),
        });
    }

    max_dist.map(|d| d.max(0.0))
}

/// Move `svc` forward by `dist` metres along the graph, crossing edge
/// boundaries toward its next stop.  Returns `true` if the service reached
/// the next stop (its position is then pinned to the stop node).
fn advance_position(net: &Network, svc: &mut SimService, mut dist: f64) -> Result<bool, GraphError> {
    while dist > 0.0 {
        let edge = net.edge(svc.position.edge);
        let remaining = edge.length - svc.position.distance_along_edge;

        if dist < remaining {
            svc.position.distance_along_edge += dist;
            return Ok(false);
        }

        dist -= remaining;

        if edge.v == svc.next_stop {
            svc.position.distance_along_edge = edge.length;
            return Ok(true);
        }

        let next = net.next_edge(edge.v, svc.next_stop)?;
        svc.position = Position {
            edge: next,
            distance_along_edge: 0.0,
        };
    }
    Ok(false)
}
