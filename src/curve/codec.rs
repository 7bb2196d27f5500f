//! Text interchange for curves.
//!
//! The canonical form is a bracketed list of four decimals,
//! `[0.250, 0.100, 0.250, 1.000]`, which is also valid JSON. CSS
//! `cubic-bezier(a, b, c, d)` text is accepted on import and can be produced
//! for export.

use crate::{
    curve::bezier::CubicBezierCurve,
    foundation::error::{EaseflowError, EaseflowResult},
};

/// Decimal places used by the copy/export format.
pub const EXPORT_DECIMALS: usize = 3;

/// Range check applied to imported values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportRange {
    /// All four values must lie in `[0, 1]`. Rejects overshoot curves.
    Strict,
    /// `x1`/`x2` must lie in `[0, 1]`; `y1`/`y2` may be any finite value.
    #[default]
    Overshoot,
}

impl ImportRange {
    fn check(self, curve: CubicBezierCurve) -> EaseflowResult<()> {
        let [x1, y1, x2, y2] = curve.to_array();
        let strict = self == Self::Strict;
        for (label, v, bounded) in [
            ("x1", x1, true),
            ("y1", y1, strict),
            ("x2", x2, true),
            ("y2", y2, strict),
        ] {
            if !v.is_finite() {
                return Err(EaseflowError::invalid_format(format!(
                    "{label} must be a finite number"
                )));
            }
            if bounded && !(0.0..=1.0).contains(&v) {
                return Err(EaseflowError::invalid_format(format!(
                    "{label} = {v} is outside [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// `[x1, y1, x2, y2]` with a fixed number of decimals.
pub fn format_curve(curve: &CubicBezierCurve, decimals: usize) -> String {
    let parts: Vec<String> = curve
        .to_array()
        .iter()
        .map(|v| format!("{v:.decimals$}"))
        .collect();
    format!("[{}]", parts.join(", "))
}

/// `cubic-bezier(x1, y1, x2, y2)` using the shortest decimal form of each value.
pub fn format_css(curve: &CubicBezierCurve) -> String {
    let parts: Vec<String> = curve.to_array().iter().map(|v| v.to_string()).collect();
    format!("cubic-bezier({})", parts.join(", "))
}

/// Parse either interchange form and range-check it.
pub fn parse_curve(text: &str, range: ImportRange) -> EaseflowResult<CubicBezierCurve> {
    let text = text.trim();
    if text.is_empty() {
        return Err(EaseflowError::invalid_format("empty input"));
    }

    let values = match strip_css(text) {
        Some(inner) => parse_css_args(inner)?,
        None => parse_json_array(text)?,
    };
    let curve = CubicBezierCurve::from(values);
    range.check(curve)?;
    Ok(curve)
}

fn strip_css(text: &str) -> Option<&str> {
    let rest = text.strip_prefix("cubic-bezier")?.trim_start();
    rest.strip_prefix('(')?.trim_end().strip_suffix(')')
}

fn parse_css_args(inner: &str) -> EaseflowResult<[f64; 4]> {
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        return Err(EaseflowError::invalid_format(format!(
            "cubic-bezier() takes 4 values, got {}",
            parts.len()
        )));
    }
    let mut out = [0.0; 4];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part
            .parse::<f64>()
            .map_err(|_| EaseflowError::invalid_format(format!("'{part}' is not a number")))?;
    }
    Ok(out)
}

fn parse_json_array(text: &str) -> EaseflowResult<[f64; 4]> {
    let value: serde_json::Value = serde_json::from_str(text).map_err(|_| {
        EaseflowError::invalid_format("expected a list like [0.250, 0.100, 0.250, 1.000]")
    })?;
    let Some(items) = value.as_array() else {
        return Err(EaseflowError::invalid_format("expected a list of 4 numbers"));
    };
    if items.len() != 4 {
        return Err(EaseflowError::invalid_format(format!(
            "expected 4 numbers, got {}",
            items.len()
        )));
    }
    let mut out = [0.0; 4];
    for (slot, item) in out.iter_mut().zip(items) {
        *slot = item
            .as_f64()
            .ok_or_else(|| EaseflowError::invalid_format(format!("{item} is not a number")))?;
    }
    Ok(out)
}

impl std::fmt::Display for CubicBezierCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_curve(self, EXPORT_DECIMALS))
    }
}

impl std::str::FromStr for CubicBezierCurve {
    type Err = EaseflowError;

    fn from_str(s: &str) -> EaseflowResult<Self> {
        parse_curve(s, ImportRange::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/codec.rs"]
mod tests;
