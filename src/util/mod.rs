//! Shared utilities: frame-rate sampling and exponential smoothing.

pub mod frame_timing;
pub mod smoothing;
