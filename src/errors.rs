//! Custom error types for route building and animation

use std::fmt;
use std::io;

/// Route and animation error types
#[derive(Debug)]
pub enum AnimError {
    /// I/O error
    IoError(io::Error),
    /// Input rejected before anything was started (too few waypoints, bad sample count...)
    InvalidInput(String),
    /// A waypoint has no resolved coordinates
    MissingCoordinates {
        /// Position of the waypoint in the traversal order
        index: usize,
        /// Display label of the waypoint, if any
        label: Option<String>,
    },
    /// Longitude/latitude outside of [-180, 180] x [-90, 90]
    CoordinateOutOfRange { lng: f64, lat: f64 },
    /// The geocoding collaborator failed or returned nothing usable
    ResolutionFailure(String),
    /// Configuration could not be parsed or is invalid
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl AnimError {
    /// Whether this error belongs to the "invalid input" class surfaced by `start`
    ///
    /// UI collaborators subscribe to this class to show a user-visible message.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            AnimError::InvalidInput(_)
                | AnimError::MissingCoordinates { .. }
                | AnimError::CoordinateOutOfRange { .. }
        )
    }
}

impl fmt::Display for AnimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimError::IoError(e) => write!(f, "I/O error: {}", e),
            AnimError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AnimError::MissingCoordinates { index, label } => match label {
                Some(label) => write!(f, "Waypoint #{} ({}) has no coordinates", index, label),
                None => write!(f, "Waypoint #{} has no coordinates", index),
            },
            AnimError::CoordinateOutOfRange { lng, lat } => {
                write!(f, "Coordinate out of range: lng={}, lat={}", lng, lat)
            }
            AnimError::ResolutionFailure(msg) => write!(f, "Location resolution failed: {}", msg),
            AnimError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AnimError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for AnimError {}

impl From<io::Error> for AnimError {
    fn from(error: io::Error) -> Self {
        AnimError::IoError(error)
    }
}

impl From<String> for AnimError {
    fn from(msg: String) -> Self {
        AnimError::GenericError(msg)
    }
}

/// Result type for route and animation operations
pub type AnimResult<T> = Result<T, AnimError>;
