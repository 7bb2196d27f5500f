use crate::curve::bezier::CubicBezierCurve;

/// Lower bound for influence; the host rejects a zero influence.
pub const MIN_INFLUENCE: f64 = 0.1;
/// Upper bound for both speed and influence.
pub const MAX_EASE_VALUE: f64 = 100.0;

/// One channel's temporal ease as the host stores it on a keyframe.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct KeyframeEase {
    pub speed: f64,
    pub influence: f64,
}

/// Host ease values derived from a curve.
///
/// Conversion policy:
/// - `outInfluence = clamp(x1 * 100, 0.1, 100)`
/// - `inInfluence  = clamp((1 - x2) * 100, 0.1, 100)`
/// - `outSpeed     = clamp(|y1| * 100, 0, 100)`
/// - `inSpeed      = clamp(|y2| * 100, 0, 100)`
///
/// x components drive influence and y components drive speed. The same
/// formula applies to every curve; there are no per-preset overrides.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EaseParameters {
    pub out_influence: f64,
    pub in_influence: f64,
    pub out_speed: f64,
    pub in_speed: f64,
}

impl EaseParameters {
    pub fn from_curve(curve: &CubicBezierCurve) -> Self {
        Self {
            out_influence: influence(curve.x1),
            in_influence: influence(1.0 - curve.x2),
            out_speed: speed(curve.y1),
            in_speed: speed(curve.y2),
        }
    }

    /// Curve that converts back to these parameters.
    ///
    /// Lossy for curves whose y was negative or whose values were clamped.
    pub fn to_curve(&self) -> CubicBezierCurve {
        CubicBezierCurve::new(
            self.out_influence / MAX_EASE_VALUE,
            self.out_speed / MAX_EASE_VALUE,
            1.0 - self.in_influence / MAX_EASE_VALUE,
            self.in_speed / MAX_EASE_VALUE,
        )
    }

    /// Ease leaving the earlier keyframe of a segment.
    pub fn outgoing(&self) -> KeyframeEase {
        KeyframeEase {
            speed: self.out_speed,
            influence: self.out_influence,
        }
    }

    /// Ease entering the later keyframe of a segment.
    pub fn incoming(&self) -> KeyframeEase {
        KeyframeEase {
            speed: self.in_speed,
            influence: self.in_influence,
        }
    }
}

impl From<&CubicBezierCurve> for EaseParameters {
    fn from(curve: &CubicBezierCurve) -> Self {
        Self::from_curve(curve)
    }
}

fn influence(fraction: f64) -> f64 {
    (fraction * 100.0).clamp(MIN_INFLUENCE, MAX_EASE_VALUE)
}

fn speed(y: f64) -> f64 {
    (y.abs() * 100.0).clamp(0.0, MAX_EASE_VALUE)
}

#[cfg(test)]
#[path = "../../tests/unit/convert/ease.rs"]
mod tests;
