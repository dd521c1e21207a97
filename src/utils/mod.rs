//! Utility modules for common functionality
//!
//! This module provides logging setup, progress display and waypoint file
//! loading used by the command line tool.

pub mod logger;
pub mod progress;
pub mod waypoint_file;


pub use self::progress::ProgressTracker;
pub use self::waypoint_file::{load_waypoint_file, WaypointFile, WaypointEntry};
