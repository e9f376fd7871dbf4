//! Parametric curve evaluation over SVG path data
//!
//! A [`Curve`] wraps the segments of a parsed path and exposes a single
//! capability: evaluate the whole path at a parameter t in [0, 1]. The
//! parameter is distributed over the segments by arc length, so t = 0.5
//! lands at the halfway point of the drawn geometry rather than at the
//! halfway segment. Arcs are already lowered to cubic approximations by
//! kurbo's path-data parser.

use kurbo::{BezPath, ParamCurve, ParamCurveArclen, PathSeg, Point};
use thiserror::Error;

/// Accuracy passed to kurbo's arc-length estimation
const ARCLEN_ACCURACY: f64 = 1e-6;

/// Errors produced while building a [`Curve`] from path data
#[derive(Debug, Error)]
pub enum CurveError {
    /// The `d` attribute is not valid SVG path data
    #[error("unparseable path data: {0}")]
    Data(#[from] kurbo::SvgParseError),

    /// The path data parsed but draws nothing (e.g. a bare move)
    #[error("path data contains no drawable segments")]
    Empty,
}

/// A parametric curve assembled from the segments of one SVG path
#[derive(Debug, Clone)]
pub struct Curve {
    segments: Vec<PathSeg>,
    lengths: Vec<f64>,
    total_length: f64,
}

impl Curve {
    /// Parse SVG path data (`d` attribute content) into a curve
    pub fn parse(data: &str) -> Result<Self, CurveError> {
        let path = BezPath::from_svg(data)?;
        let segments: Vec<PathSeg> = path.segments().collect();
        if segments.is_empty() {
            return Err(CurveError::Empty);
        }
        let lengths: Vec<f64> = segments.iter().map(|s| s.arclen(ARCLEN_ACCURACY)).collect();
        let total_length = lengths.iter().sum();
        Ok(Self {
            segments,
            lengths,
            total_length,
        })
    }

    /// Evaluate the curve at t in [0, 1]; t is clamped to that range
    pub fn eval(&self, t: f64) -> Point {
        let t = t.clamp(0.0, 1.0);

        // Single-segment paths evaluate directly, keeping line sampling exact.
        if self.segments.len() == 1 {
            return self.segments[0].eval(t);
        }
        if self.total_length <= 0.0 {
            return self.segments[0].eval(0.0);
        }

        let target = t * self.total_length;
        let mut walked = 0.0;
        for (segment, length) in self.segments.iter().zip(&self.lengths) {
            if *length > 0.0 && walked + length >= target {
                return segment.eval((target - walked) / length);
            }
            walked += length;
        }
        self.segments[self.segments.len() - 1].eval(1.0)
    }

    /// Sample the curve at a fixed parameter step into a polyline.
    ///
    /// With n = floor(1 / precision), the samples sit at t = i * precision
    /// for i = 0..=n. When 1 / precision is an integer both endpoints are
    /// included; otherwise the final sample sits short of t = 1. That is
    /// the sampling contract, not an off-by-one.
    pub fn sample(&self, precision: f64) -> Vec<Point> {
        let steps = (1.0 / precision).floor() as usize;
        (0..=steps)
            .map(|i| self.eval(i as f64 * precision))
            .collect()
    }

    /// Number of drawable segments in the path
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}
