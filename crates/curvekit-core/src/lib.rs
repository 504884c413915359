//! # CurveKit Core
//!
//! Core types and utilities for CurveKit.
//! Provides the 2D point and unit primitives shared by the geometry
//! crates, the error types for contract validation, and the numeric
//! tolerance constants used by the flattening algorithms.

pub mod constants;
pub mod data;
pub mod error;

pub use data::{Point, Units};

pub use error::{GeometryError, Result};
