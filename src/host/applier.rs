use crate::{
    convert::{
        ease::{EaseParameters, KeyframeEase},
        spatial::spatial_tangents,
    },
    curve::bezier::CubicBezierCurve,
    foundation::core::ChannelCount,
    foundation::error::{EaseflowError, EaseflowResult},
};

/// Whether a property's keyframes also lie on a motion path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PropertyKind {
    /// Only timing is eased.
    #[default]
    Temporal,
    /// Positional: keyframes also carry path tangents.
    Spatial,
}

/// How the applier should treat one property.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ApplyOptions {
    pub channels: ChannelCount,
    pub kind: PropertyKind,
}

/// An animated property as exposed by the host.
///
/// Keyframe indices are 0-based. Implementations translate to the host's own
/// numbering and report host failures as errors.
pub trait AnimatedProperty {
    fn name(&self) -> &str;
    fn key_count(&self) -> usize;
    /// Value of a keyframe, one entry per dimension.
    fn key_value(&self, index: usize) -> EaseflowResult<Vec<f64>>;
    fn clear_expression(&mut self) -> EaseflowResult<()>;
    /// Switch both sides of a keyframe to bezier interpolation.
    fn set_bezier_interpolation(&mut self, index: usize) -> EaseflowResult<()>;
    fn set_ease_in(&mut self, index: usize, eases: &[KeyframeEase]) -> EaseflowResult<()>;
    fn set_ease_out(&mut self, index: usize, eases: &[KeyframeEase]) -> EaseflowResult<()>;
    fn set_in_tangent(&mut self, index: usize, tangent: &[f64]) -> EaseflowResult<()>;
    fn set_out_tangent(&mut self, index: usize, tangent: &[f64]) -> EaseflowResult<()>;
    /// Stop the host from recomputing path tangents on its own.
    fn disable_auto_bezier(&mut self, index: usize) -> EaseflowResult<()>;
}

/// Outcome of applying a curve to one property.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ApplyReport {
    pub property: String,
    /// Number of keyframe pairs eased. Zero when the property was skipped.
    pub segments: usize,
    pub skipped: bool,
}

/// Ease parameters for each of the `key_count - 1` segments of a property.
///
/// All segments share one curve, so every entry is the same value.
pub fn plan_segments(curve: &CubicBezierCurve, key_count: usize) -> Vec<EaseParameters> {
    let params = EaseParameters::from_curve(curve);
    vec![params; key_count.saturating_sub(1)]
}

/// Writes one curve onto the keyframes of host properties.
#[derive(Clone, Copy, Debug)]
pub struct KeyframeApplier {
    curve: CubicBezierCurve,
    params: EaseParameters,
}

impl KeyframeApplier {
    pub fn new(curve: CubicBezierCurve) -> Self {
        Self {
            curve,
            params: EaseParameters::from_curve(&curve),
        }
    }

    pub fn params(&self) -> EaseParameters {
        self.params
    }

    /// Ease every segment of `property`.
    ///
    /// For segment `k` the outgoing ease goes on key `k` and the incoming ease
    /// on key `k + 1`, repeated once per channel. Spatial properties also get
    /// path tangents on both keys. Properties with fewer than two keys are
    /// skipped, not failed.
    #[tracing::instrument(skip(self, property), fields(name = property.name()))]
    pub fn apply(
        &self,
        property: &mut dyn AnimatedProperty,
        opts: ApplyOptions,
    ) -> EaseflowResult<ApplyReport> {
        let key_count = property.key_count();
        if key_count < 2 {
            tracing::debug!(key_count, "skipping property with fewer than 2 keys");
            return Ok(ApplyReport {
                property: property.name().to_string(),
                segments: 0,
                skipped: true,
            });
        }

        property.clear_expression()?;
        for k in 0..key_count {
            property.set_bezier_interpolation(k)?;
        }

        let n = opts.channels.get();
        let plan = plan_segments(&self.curve, key_count);
        for (k, params) in plan.iter().enumerate() {
            self.apply_segment(property, k, params, n, opts.kind)
                .map_err(|e| segment_error(k, e))?;
        }

        if opts.kind == PropertyKind::Spatial {
            for k in 0..key_count {
                property.disable_auto_bezier(k)?;
            }
        }

        Ok(ApplyReport {
            property: property.name().to_string(),
            segments: plan.len(),
            skipped: false,
        })
    }

    fn apply_segment(
        &self,
        property: &mut dyn AnimatedProperty,
        k: usize,
        params: &EaseParameters,
        channels: usize,
        kind: PropertyKind,
    ) -> EaseflowResult<()> {
        property.set_ease_out(k, &vec![params.outgoing(); channels])?;
        property.set_ease_in(k + 1, &vec![params.incoming(); channels])?;

        if kind == PropertyKind::Spatial {
            let from = property.key_value(k)?;
            let to = property.key_value(k + 1)?;
            let tangents = spatial_tangents(&self.curve, &from, &to);
            property.set_out_tangent(k, &tangents.out_tangent)?;
            property.set_in_tangent(k + 1, &tangents.in_tangent)?;
        }
        Ok(())
    }
}

fn segment_error(k: usize, err: EaseflowError) -> EaseflowError {
    match err {
        EaseflowError::HostApplyFailure(msg) => {
            EaseflowError::host_failure(format!("segment {k}: {msg}"))
        }
        other => EaseflowError::host_failure(format!("segment {k}: {other}")),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/applier.rs"]
mod tests;
