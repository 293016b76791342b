//! Shared domain logic for the Agricultural Advisory Platform
//!
//! This crate holds the reference tables and the pure computations behind
//! every advisory feature. It performs no I/O: the backend owns HTTP, files
//! and rendering, and passes an explicit entropy source to the simulator.

pub mod error;
pub mod models;
pub mod reference;
pub mod regional;
pub mod regression;
pub mod tips;
pub mod types;
pub mod validation;
pub mod water_simulation;
pub mod yield_estimator;

pub use error::*;
pub use models::*;
pub use reference::ReferenceData;
pub use types::*;
