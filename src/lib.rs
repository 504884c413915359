//! # CurveKit
//!
//! Cubic Bezier curve flattening for CAM, DRC, and Gerber-style export
//! pipelines. A caller supplies four control points and a maximum error
//! tolerance; CurveKit returns an ordered polyline approximating the
//! curve within that tolerance, splitting at inflection points and
//! flattening each monotonic-curvature piece with Hain et al.'s
//! parabolic approximation.
//!
//! This crate is a thin façade over the workspace members:
//! - `curvekit-core`: points, units, errors, tolerance constants
//! - `curvekit-geom`: the flattening kernel and polyline output
//!
//! ```
//! use curvekit::{flatten_bezier, Point};
//!
//! let poly = flatten_bezier(
//!     Point::new(0.0, 0.0),
//!     Point::new(0.0, 10.0),
//!     Point::new(10.0, 10.0),
//!     Point::new(10.0, 0.0),
//!     0.1,
//! );
//! assert_eq!(poly.first().unwrap(), Point::new(0.0, 0.0));
//! assert_eq!(poly.last().unwrap(), Point::new(10.0, 0.0));
//! ```

pub use curvekit_core::{constants, GeometryError, Point, Result, Units};

pub use curvekit_geom::{flatten_bezier, CubicBezier, InflectionPoints, Polyline};
