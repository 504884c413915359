//! Cubic Bezier curve evaluation and flattening.
//!
//! The flattener splits a curve at its inflection points, then converts
//! each monotonic-curvature piece into line segments with the parabolic
//! approximation from Hain et al., "Fast, precise flattening of cubic
//! Bezier path and offset curves". Output deviation from the true curve
//! is bounded by the caller-supplied tolerance, expressed in the same
//! linear unit as the control point coordinates.

use curvekit_core::constants::{
    EPS_DISCRIMINANT_REL, EPS_INFLECTION_SEPARATION, EPS_QUAD_COEFF, MAX_SEGMENT_POINTS,
};
use curvekit_core::{GeometryError, Point, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::polyline::Polyline;

/// Inflection parameters of a cubic curve, strictly inside (0, 1).
///
/// Two parameters are always reported in ascending order; numerically
/// indistinguishable pairs collapse into a single parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InflectionPoints {
    /// Curvature never changes sign ("simple" curve, including all
    /// degenerate and collinear configurations).
    None,
    /// Curvature changes sign once.
    One(f64),
    /// Curvature changes sign twice, at ascending parameters.
    Two(f64, f64),
}

impl InflectionPoints {
    /// Number of inflection parameters found.
    pub fn count(&self) -> usize {
        match self {
            InflectionPoints::None => 0,
            InflectionPoints::One(_) => 1,
            InflectionPoints::Two(_, _) => 2,
        }
    }
}

/// Control points of a cubic Bezier curve. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    start: Point,
    ctrl1: Point,
    ctrl2: Point,
    end: Point,
}

impl CubicBezier {
    /// Creates a curve from its four control points P0..P3.
    pub fn new(start: Point, ctrl1: Point, ctrl2: Point, end: Point) -> Self {
        Self {
            start,
            ctrl1,
            ctrl2,
            end,
        }
    }

    /// Creates the cubic equivalent of a quadratic Bezier segment by
    /// degree elevation, so quadratic path data (SVG `Q`/`T`) can reuse
    /// the cubic flattener.
    pub fn from_quadratic(start: Point, ctrl: Point, end: Point) -> Self {
        let two_thirds = 2.0 / 3.0;
        Self {
            start,
            ctrl1: start + (ctrl - start) * two_thirds,
            ctrl2: end + (ctrl - end) * two_thirds,
            end,
        }
    }

    /// Start point P0.
    pub fn start(&self) -> Point {
        self.start
    }

    /// First control point P1.
    pub fn ctrl1(&self) -> Point {
        self.ctrl1
    }

    /// Second control point P2.
    pub fn ctrl2(&self) -> Point {
        self.ctrl2
    }

    /// End point P3.
    pub fn end(&self) -> Point {
        self.end
    }

    /// Evaluates the curve at parameter `t` using the Bernstein basis:
    /// `B(t) = (1-t)^3 P0 + 3(1-t)^2 t P1 + 3(1-t) t^2 P2 + t^3 P3`.
    ///
    /// `point_at(0.0)` returns P0 exactly and `point_at(1.0)` returns P3
    /// exactly. Values outside [0, 1] extrapolate.
    pub fn point_at(&self, t: f64) -> Point {
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        Point {
            x: mt3 * self.start.x
                + 3.0 * mt2 * t * self.ctrl1.x
                + 3.0 * mt * t2 * self.ctrl2.x
                + t3 * self.end.x,
            y: mt3 * self.start.y
                + 3.0 * mt2 * t * self.ctrl1.y
                + 3.0 * mt * t2 * self.ctrl2.y
                + t3 * self.end.y,
        }
    }

    /// True when all four control points coincide (zero-length curve).
    pub fn is_degenerate(&self) -> bool {
        self.start == self.ctrl1 && self.start == self.ctrl2 && self.start == self.end
    }

    /// Splits the curve at parameter `t` using de Casteljau subdivision.
    ///
    /// Returns two cubic curves: the first covering [0, t], the second
    /// [t, 1]. The first curve starts exactly at P0 and the second ends
    /// exactly at P3.
    pub fn split_at(&self, t: f64) -> (CubicBezier, CubicBezier) {
        let p01 = self.start.lerp(self.ctrl1, t);
        let p12 = self.ctrl1.lerp(self.ctrl2, t);
        let p23 = self.ctrl2.lerp(self.end, t);

        let p012 = p01.lerp(p12, t);
        let p123 = p12.lerp(p23, t);

        let split = p012.lerp(p123, t);

        (
            CubicBezier::new(self.start, p01, p012, split),
            CubicBezier::new(split, p123, p23, self.end),
        )
    }

    /// Extracts the portion of the curve between parameters `t0` and `t1`.
    ///
    /// For `t0 >= t1` the result collapses to a point curve at `t0`.
    pub fn subcurve(&self, t0: f64, t1: f64) -> CubicBezier {
        if t0 >= t1 {
            let p = self.point_at(t0);
            return CubicBezier::new(p, p, p, p);
        }

        let (head, _) = self.split_at(t1);
        let (_, piece) = head.split_at(t0 / t1);
        piece
    }

    /// Finds the parameters where the curvature changes sign.
    ///
    /// With the power-basis vectors
    /// `A = -P0 + 3P1 - 3P2 + P3`, `B = 3P0 - 6P1 + 3P2`,
    /// `C = -3P0 + 3P1`, the curvature numerator is proportional to
    /// `3(AxB) t^2 + 3(AxC) t + (BxC)`; the real roots of that quadratic
    /// strictly inside (0, 1) are the inflection parameters.
    pub fn find_inflection_points(&self) -> InflectionPoints {
        let va = -self.start + self.ctrl1 * 3.0 - self.ctrl2 * 3.0 + self.end;
        let vb = self.start * 3.0 - self.ctrl1 * 6.0 + self.ctrl2 * 3.0;
        let vc = -self.start * 3.0 + self.ctrl1 * 3.0;

        let a = 3.0 * va.cross(vb);
        let b = 3.0 * va.cross(vc);
        let c = vb.cross(vc);

        // Degenerate leading coefficient: curvature has at most a linear
        // profile (straight lines and collinear layouts land here too).
        if a.abs() <= EPS_QUAD_COEFF {
            return InflectionPoints::None;
        }

        let disc = b * b - 4.0 * a * c;
        if disc < 0.0 {
            let scale = (b * b).max((4.0 * a * c).abs());
            if disc >= -(EPS_DISCRIMINANT_REL * scale) {
                // Mathematically a double root, numerically just below
                // zero. Classified conservatively as inflection-free.
                trace!(disc, "marginally negative inflection discriminant");
            }
            return InflectionPoints::None;
        }

        // Stable quadratic roots: avoid cancellation between b and the
        // discriminant root.
        let q = -0.5 * (b + b.signum() * disc.sqrt());
        let (mut t1, mut t2) = if q != 0.0 { (q / a, c / q) } else { (0.0, 0.0) };
        if t1 > t2 {
            std::mem::swap(&mut t1, &mut t2);
        }

        let t1_inside = t1 > 0.0 && t1 < 1.0;
        let t2_inside = t2 > 0.0 && t2 < 1.0;

        match (t1_inside, t2_inside) {
            (true, true) => {
                if t2 - t1 < EPS_INFLECTION_SEPARATION {
                    trace!(t1, t2, "merging numerically coincident inflection parameters");
                    InflectionPoints::One(t1)
                } else {
                    InflectionPoints::Two(t1, t2)
                }
            }
            (true, false) => InflectionPoints::One(t1),
            (false, true) => InflectionPoints::One(t2),
            (false, false) => InflectionPoints::None,
        }
    }

    /// Flattens the curve into a polyline whose deviation from the true
    /// curve stays within `max_error`.
    ///
    /// The first vertex is exactly P0 and the last exactly P3; a
    /// zero-length curve (all control points coincident) yields a single
    /// vertex. `max_error` must be finite and positive and all
    /// coordinates finite; violating that is a contract error (see
    /// [`CubicBezier::try_flatten`] for the validated entry point).
    pub fn flatten(&self, max_error: f64) -> Polyline {
        debug_assert!(
            max_error.is_finite() && max_error > 0.0,
            "flattening tolerance must be finite and positive"
        );
        debug_assert!(
            self.start.is_finite()
                && self.ctrl1.is_finite()
                && self.ctrl2.is_finite()
                && self.end.is_finite(),
            "control points must be finite"
        );

        let mut out = Polyline::from_points(vec![self.start]);

        if self.is_degenerate() {
            return out;
        }

        match self.find_inflection_points() {
            InflectionPoints::None => {
                self.flatten_monotonic(max_error, &mut out);
            }
            InflectionPoints::One(t) => {
                let (head, tail) = self.split_at(t);
                head.flatten_monotonic(max_error, &mut out);
                tail.flatten_monotonic(max_error, &mut out);
            }
            InflectionPoints::Two(t1, t2) => {
                let (head, rest) = self.split_at(t1);
                // Remap the second parameter into the remainder's domain.
                let (mid, tail) = rest.split_at((t2 - t1) / (1.0 - t1));
                head.flatten_monotonic(max_error, &mut out);
                mid.flatten_monotonic(max_error, &mut out);
                tail.flatten_monotonic(max_error, &mut out);
            }
        }

        out
    }

    /// Validated flattening entry point.
    ///
    /// Rejects non-finite control points and non-positive tolerances
    /// instead of relying on the caller contract.
    pub fn try_flatten(&self, max_error: f64) -> Result<Polyline> {
        for p in [self.start, self.ctrl1, self.ctrl2, self.end] {
            if !p.is_finite() {
                return Err(GeometryError::NonFiniteCoordinate { x: p.x, y: p.y });
            }
        }
        if !max_error.is_finite() || max_error <= 0.0 {
            return Err(GeometryError::InvalidTolerance { value: max_error });
        }
        Ok(self.flatten(max_error))
    }

    /// Perpendicular deviation of the third control point P2 from the
    /// chord P0-P3. This is the flatness measure driving the parabolic
    /// approximation.
    fn third_control_point_deviation(&self) -> f64 {
        let chord = self.end - self.start;
        let chord_len2 = chord.dot(chord);
        if chord_len2 > 0.0 {
            (chord.cross(self.ctrl2 - self.start)).abs() / chord_len2.sqrt()
        } else {
            // Coincident endpoints (closed loop piece): fall back to the
            // raw control point offset.
            self.ctrl2.distance_to(&self.start)
        }
    }

    /// Flattens one monotonic-curvature piece, appending interior
    /// vertices and the piece's end point to `out`.
    ///
    /// Repeatedly chops the front of the curve at the optimal parabolic
    /// split parameter `t* = 2 sqrt(max_error / (3 d))`; once `t* >= 1`
    /// the remaining piece is a single parabolic arc (or straight line)
    /// within tolerance, and only its end point is emitted.
    fn flatten_monotonic(&self, max_error: f64, out: &mut Polyline) {
        let mut cur = *self;
        let mut emitted = 0usize;

        loop {
            let d = cur.third_control_point_deviation();
            // d == 0 gives t = inf here, which terminates the loop with a
            // straight-line emission.
            let t = 2.0 * (max_error / (3.0 * d)).sqrt();
            if t >= 1.0 {
                break;
            }
            // NaN or zero step (only reachable with a violated input
            // contract): fall back to a midpoint split so the loop still
            // makes progress toward the vertex cap.
            let t = if t > 0.0 { t } else { 0.5 };

            let (head, tail) = cur.split_at(t);
            out.push(head.end);
            cur = tail;

            emitted += 1;
            if emitted >= MAX_SEGMENT_POINTS {
                debug!(
                    emitted,
                    "vertex cap reached; emitting remainder as a straight segment"
                );
                break;
            }
        }

        out.push(cur.end);
    }
}

/// Flattens a cubic Bezier curve given by four control points into a
/// polyline with at most `max_error` deviation from the true curve.
///
/// This is the single operation exposed to collaborating pipelines; see
/// [`CubicBezier::flatten`] for the contract details.
pub fn flatten_bezier(p0: Point, p1: Point, p2: Point, p3: Point, max_error: f64) -> Polyline {
    CubicBezier::new(p0, p1, p2, p3).flatten(max_error)
}
