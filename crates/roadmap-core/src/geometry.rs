//! Arc-length parameterized sampling of the roadmap path.

use kurbo::{BezPath, ParamCurve, ParamCurveArclen, ParamCurveDeriv, PathSeg, Point, Vec2};

use crate::constants::ARCLEN_ACCURACY;
use crate::error::{RoadmapError, RoadmapResult};

/// Point on the path with the tangent direction in degrees (SVG rotation
/// convention: clockwise, y down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathSample {
    pub point: Point,
    pub angle_deg: f64,
}

/// Everything one timeline step writes to the path and the marker.
///
/// Computed once per step so the marker and the stroke draw never disagree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathFrame {
    pub progress: f64,
    pub marker: PathSample,
    pub dash_offset: f64,
}

/// Parsed path plus cumulative segment lengths.
#[derive(Clone, Debug)]
pub struct PathGeometry {
    segments: Vec<PathSeg>,
    // cumulative[i] = length of segments[..i]
    cumulative: Vec<f64>,
    total_length: f64,
}

impl PathGeometry {
    pub fn parse(d: &str) -> RoadmapResult<Self> {
        let path = BezPath::from_svg(d).map_err(|e| RoadmapError::invalid_path(e.to_string()))?;
        Self::from_path(&path)
    }

    pub fn from_path(path: &BezPath) -> RoadmapResult<Self> {
        let segments: Vec<PathSeg> = path.segments().collect();
        let mut cumulative = Vec::with_capacity(segments.len() + 1);
        let mut total = 0.0_f64;
        cumulative.push(0.0);
        for seg in &segments {
            total += seg.arclen(ARCLEN_ACCURACY);
            cumulative.push(total);
        }
        if segments.is_empty() || !total.is_finite() || total <= 0.0 {
            return Err(RoadmapError::EmptyPath);
        }
        Ok(Self {
            segments,
            cumulative,
            total_length: total,
        })
    }

    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// Stroke dash offset that leaves `progress` of the path drawn.
    pub fn dash_offset(&self, progress: f64) -> f64 {
        self.total_length * (1.0 - progress.clamp(0.0, 1.0))
    }

    /// Sample at arc-length fraction `progress` in [0, 1].
    pub fn sample(&self, progress: f64) -> PathSample {
        let target = self.total_length * progress.clamp(0.0, 1.0);
        // index of the segment containing `target`
        let idx = match self
            .cumulative
            .binary_search_by(|len| len.total_cmp(&target))
        {
            Ok(i) => i.min(self.segments.len() - 1),
            Err(i) => i.saturating_sub(1).min(self.segments.len() - 1),
        };
        let seg = self.segments[idx];
        let local = (target - self.cumulative[idx]).max(0.0);
        let t = seg.inv_arclen(local, ARCLEN_ACCURACY).clamp(0.0, 1.0);
        let point = seg.eval(t);
        let tangent = segment_tangent(seg, t);
        PathSample {
            point,
            angle_deg: tangent.atan2().to_degrees(),
        }
    }

    pub fn frame(&self, progress: f64) -> PathFrame {
        let progress = progress.clamp(0.0, 1.0);
        PathFrame {
            progress,
            marker: self.sample(progress),
            dash_offset: self.dash_offset(progress),
        }
    }
}

fn segment_tangent(seg: PathSeg, t: f64) -> Vec2 {
    let d = match seg {
        PathSeg::Line(l) => l.p1 - l.p0,
        PathSeg::Quad(q) => q.deriv().eval(t).to_vec2(),
        PathSeg::Cubic(c) => c.deriv().eval(t).to_vec2(),
    };
    if d.hypot2() > 1e-18 {
        return d;
    }
    // degenerate control points at an endpoint: fall back to the chord
    let chord = seg.end() - seg.start();
    if chord.hypot2() > 1e-18 {
        chord
    } else {
        Vec2::new(1.0, 0.0)
    }
}
