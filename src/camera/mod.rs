//! Camera system for the skill-map scene.
//!
//! Provides a perspective camera with screen-ray construction and a
//! controller that eases the live camera between overview and focus
//! framings, with manual orbit/zoom override and idle auto-rotation.

/// Selection-driven camera steering, orbit and zoom.
pub mod controller;
/// Core camera struct and screen rays.
pub mod core;
