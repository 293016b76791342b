//! Domain models for the Agricultural Advisory Platform

mod crop;
mod irrigation;
mod region;
mod tip;

pub use crop::*;
pub use irrigation::*;
pub use region::*;
pub use tip::*;
