//! `tms-service` — service definitions and the per-service state machine.
//!
//! # Crate layout
//!
//! | Module      | Contents                                               |
//! |-------------|--------------------------------------------------------|
//! | [`vehicle`] | `Vehicle` (name, length, motion model)                 |
//! | [`service`] | `ServiceData`, `RouteStop`, `ServiceState`, `SimService` |
//! | [`error`]   | `ServiceError`, `ServiceResult<T>`                     |

pub mod error;
pub mod service;
pub mod vehicle;


pub use error::{ServiceError, ServiceResult};
pub use service::{RouteStop, ServiceData, ServiceState, SimService, Stop};
pub use vehicle::Vehicle;
