use std::f64::consts::PI;

use crate::curve::bezier::CubicBezierCurve;

/// Fraction of the segment a fully eased tangent reaches along the path.
const TANGENT_REACH: f64 = 0.33;

/// Path tangents for the two keyframes of a spatial segment.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpatialTangents {
    /// Outgoing tangent at the earlier keyframe.
    pub out_tangent: Vec<f64>,
    /// Incoming tangent at the later keyframe (points back along the path).
    pub in_tangent: Vec<f64>,
}

/// Heuristic tangents for a path segment from `from` to `to`.
///
/// Length scales with the segment delta and with how far the handles sit from
/// their anchors in x; direction bends with each handle's y offset from 0.5.
/// Only the shared leading dimensions of `from` and `to` are used.
pub fn spatial_tangents(curve: &CubicBezierCurve, from: &[f64], to: &[f64]) -> SpatialTangents {
    let scale = TANGENT_REACH * (curve.x1 + (1.0 - curve.x2)) / 2.0;
    let out_bend = ((curve.y1 - 0.5) * PI).cos();
    let in_bend = ((curve.y2 - 0.5) * PI).cos();

    let deltas = from.iter().zip(to).map(|(a, b)| b - a);
    SpatialTangents {
        out_tangent: deltas.clone().map(|d| d * scale * out_bend).collect(),
        in_tangent: deltas.map(|d| -d * scale * in_bend).collect(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/convert/spatial.rs"]
mod tests;
