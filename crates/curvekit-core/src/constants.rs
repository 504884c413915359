//! Numeric tolerance constants shared by the CurveKit geometry crates.

/// Threshold below which the leading coefficient of the inflection
/// quadratic is treated as zero. Curves in this regime have at most a
/// linear curvature profile and are handled as inflection-free.
pub const EPS_QUAD_COEFF: f64 = 1e-12;

/// Two inflection parameters closer than this are merged into one so
/// that subdivision never produces a zero-length middle piece.
pub const EPS_INFLECTION_SEPARATION: f64 = 1e-5;

/// Relative slack used to classify a marginally negative discriminant
/// as a near-degenerate double root rather than a clean "no roots".
pub const EPS_DISCRIMINANT_REL: f64 = 1e-9;

/// Hard cap on vertices emitted while flattening a single
/// monotonic-curvature piece. Valid finite input stays far below this;
/// the cap only bounds pathological callers that bypass validation.
pub const MAX_SEGMENT_POINTS: usize = 8192;
