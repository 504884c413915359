//! # CurveKit Geometry
//!
//! Cubic Bezier flattening kernel. Converts a curve given by four control
//! points into an ordered polyline whose deviation from the true curve is
//! bounded by a caller-supplied tolerance, for consumption by rendering,
//! DRC, and Gerber-style export pipelines.
//!
//! All operations are synchronous, stateless, and reentrant: no globals,
//! no I/O, no shared mutable state.

pub mod bezier;
pub mod polyline;

pub use bezier::{flatten_bezier, CubicBezier, InflectionPoints};
pub use polyline::Polyline;
