//! HTTP handlers for the Agricultural Advisory Platform

pub mod health;
pub mod index;

pub use health::*;
pub use index::*;
