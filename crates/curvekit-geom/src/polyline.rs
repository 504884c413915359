//! Flattened curve output.
//!
//! A [`Polyline`] is the ordered vertex list produced by the flattener,
//! plus the handful of helpers an export pipeline needs before emitting
//! the segments as draw commands or apertures.

use curvekit_core::{Point, Units};
use serde::{Deserialize, Serialize};

/// Ordered sequence of vertices approximating a curve.
///
/// The first vertex is the curve start, the last is the curve end, and
/// vertices are ordered along increasing curve parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    /// The vertices, in traversal order.
    pub points: Vec<Point>,
}

impl Polyline {
    /// Creates an empty polyline.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Creates a polyline from an existing vertex list.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the polyline has no vertices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First vertex, if any.
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Last vertex, if any.
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Appends a vertex.
    pub fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    /// Iterates over consecutive vertex pairs as line segments.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Total length of the polyline (sum of segment lengths).
    pub fn length(&self) -> f64 {
        self.segments().map(|(a, b)| a.distance_to(&b)).sum()
    }

    /// Axis-aligned bounding box as (min_x, min_y, max_x, max_y).
    ///
    /// Returns `None` for an empty polyline.
    pub fn bounding_box(&self) -> Option<(f64, f64, f64, f64)> {
        let first = self.first()?;
        let mut bbox = (first.x, first.y, first.x, first.y);
        for p in &self.points {
            bbox.0 = bbox.0.min(p.x);
            bbox.1 = bbox.1.min(p.y);
            bbox.2 = bbox.2.max(p.x);
            bbox.3 = bbox.3.max(p.y);
        }
        Some(bbox)
    }

    /// Returns a copy with every coordinate converted between units.
    pub fn converted(&self, from: Units, to: Units) -> Polyline {
        Polyline {
            points: self
                .points
                .iter()
                .map(|p| {
                    Point::new(
                        Units::convert(p.x, from, to),
                        Units::convert(p.y, from, to),
                    )
                })
                .collect(),
        }
    }
}
