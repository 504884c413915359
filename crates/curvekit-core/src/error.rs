//! Error handling for CurveKit
//!
//! The flattening core is pure numeric code that cannot fail on
//! well-formed input, so there is no internal error propagation. These
//! types cover caller contract violations (non-finite coordinates,
//! non-positive tolerances) caught at the validated entry points.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry contract error type
///
/// Represents violations of the flattening preconditions. Valid finite
/// input never produces one of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A control point coordinate was NaN or infinite
    #[error("Non-finite control point coordinate at ({x}, {y})")]
    NonFiniteCoordinate {
        /// X coordinate of the offending point.
        x: f64,
        /// Y coordinate of the offending point.
        y: f64,
    },

    /// The maximum-error tolerance must be finite and greater than zero
    #[error("Invalid flattening tolerance: {value} (must be finite and > 0)")]
    InvalidTolerance {
        /// The rejected tolerance value.
        value: f64,
    },
}

/// Convenience result type for CurveKit operations
pub type Result<T> = std::result::Result<T, GeometryError>;
