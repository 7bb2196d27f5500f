use crate::{
    convert::ease::KeyframeEase,
    foundation::core::ChannelCount,
    foundation::error::{EaseflowError, EaseflowResult},
    host::applier::{AnimatedProperty, ApplyOptions, PropertyKind},
};

/// Interpolation type on one side of a keyframe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpolation {
    #[default]
    Linear,
    Bezier,
    Hold,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MemoryKey {
    /// Seconds.
    pub time: f64,
    pub value: Vec<f64>,
    #[serde(default)]
    pub interpolation: Interpolation,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ease_in: Vec<KeyframeEase>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ease_out: Vec<KeyframeEase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_tangent: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_tangent: Option<Vec<f64>>,
    #[serde(default = "default_auto_bezier")]
    pub auto_bezier: bool,
}

fn default_auto_bezier() -> bool {
    true
}

impl MemoryKey {
    pub fn new(time: f64, value: Vec<f64>) -> Self {
        Self {
            time,
            value,
            interpolation: Interpolation::default(),
            ease_in: Vec::new(),
            ease_out: Vec::new(),
            in_tangent: None,
            out_tangent: None,
            auto_bezier: default_auto_bezier(),
        }
    }
}

/// A self-contained animated property, used by the CLI and in tests in place
/// of a live host.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MemoryProperty {
    pub name: String,
    #[serde(default)]
    pub channels: ChannelCount,
    #[serde(default)]
    pub kind: PropertyKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    pub keys: Vec<MemoryKey>,
}

impl MemoryProperty {
    pub fn new(name: impl Into<String>, channels: ChannelCount, kind: PropertyKind) -> Self {
        Self {
            name: name.into(),
            channels,
            kind,
            expression: None,
            keys: Vec::new(),
        }
    }

    pub fn with_key(mut self, time: f64, value: Vec<f64>) -> Self {
        self.keys.push(MemoryKey::new(time, value));
        self
    }

    pub fn options(&self) -> ApplyOptions {
        ApplyOptions {
            channels: self.channels,
            kind: self.kind,
        }
    }

    /// Check key order and that every value matches the channel count.
    pub fn validate(&self) -> EaseflowResult<()> {
        if !self.keys.windows(2).all(|w| w[0].time <= w[1].time) {
            return Err(EaseflowError::validation(format!(
                "property '{}': keys must be sorted by time",
                self.name
            )));
        }
        let n = self.channels.get();
        if let Some((i, _)) = self
            .keys
            .iter()
            .enumerate()
            .find(|(_, k)| k.value.len() != n)
        {
            return Err(EaseflowError::validation(format!(
                "property '{}': key {i} has {} values, expected {n}",
                self.name,
                self.keys[i].value.len()
            )));
        }
        Ok(())
    }

    fn key_mut(&mut self, index: usize) -> EaseflowResult<&mut MemoryKey> {
        let name = &self.name;
        let len = self.keys.len();
        self.keys.get_mut(index).ok_or_else(|| {
            EaseflowError::host_failure(format!("{name}: key {index} out of range (len {len})"))
        })
    }
}

impl AnimatedProperty for MemoryProperty {
    fn name(&self) -> &str {
        &self.name
    }

    fn key_count(&self) -> usize {
        self.keys.len()
    }

    fn key_value(&self, index: usize) -> EaseflowResult<Vec<f64>> {
        self.keys
            .get(index)
            .map(|k| k.value.clone())
            .ok_or_else(|| EaseflowError::host_failure(format!("key {index} out of range")))
    }

    fn clear_expression(&mut self) -> EaseflowResult<()> {
        self.expression = None;
        Ok(())
    }

    fn set_bezier_interpolation(&mut self, index: usize) -> EaseflowResult<()> {
        self.key_mut(index)?.interpolation = Interpolation::Bezier;
        Ok(())
    }

    fn set_ease_in(&mut self, index: usize, eases: &[KeyframeEase]) -> EaseflowResult<()> {
        self.key_mut(index)?.ease_in = eases.to_vec();
        Ok(())
    }

    fn set_ease_out(&mut self, index: usize, eases: &[KeyframeEase]) -> EaseflowResult<()> {
        self.key_mut(index)?.ease_out = eases.to_vec();
        Ok(())
    }

    fn set_in_tangent(&mut self, index: usize, tangent: &[f64]) -> EaseflowResult<()> {
        self.key_mut(index)?.in_tangent = Some(tangent.to_vec());
        Ok(())
    }

    fn set_out_tangent(&mut self, index: usize, tangent: &[f64]) -> EaseflowResult<()> {
        self.key_mut(index)?.out_tangent = Some(tangent.to_vec());
        Ok(())
    }

    fn disable_auto_bezier(&mut self, index: usize) -> EaseflowResult<()> {
        self.key_mut(index)?.auto_bezier = false;
        Ok(())
    }
}
