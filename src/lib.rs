//! Unisched library
//!
//! Cached university timetables with a rate-limited refresh pipeline:
//! calendar windows, the refresh quota, the row store and the coordinator
//! that ties them together.

pub mod cli;
pub mod clock;
pub mod coordinator;
pub mod data;
pub mod limiter;
pub mod store;
