//! Text-reply boundary to a scripting host.
//!
//! The host receives a curve name, the curve and its [`EaseParameters`], and answers with
//! a single line of text. Replies starting with `Success` or `Error` are
//! structured; the transport itself reports failure with the literal
//! `EvalScript error.`.

use crate::{
    convert::ease::EaseParameters,
    curve::bezier::CubicBezierCurve,
    foundation::error::{EaseflowError, EaseflowResult},
    host::applier::{AnimatedProperty, KeyframeApplier},
    host::memory::MemoryProperty,
};

/// Marker the transport returns when the host script could not run at all.
pub const TRANSPORT_FAILURE: &str = "EvalScript error.";

/// Request/response channel to a host that applies eases to its selection.
///
/// `params` is always `EaseParameters::from_curve(curve)`. The curve itself is
/// passed along for hosts that also write path tangents, since the parameters
/// drop the sign of y and clamp overshoot.
pub trait HostBridge {
    fn call(
        &mut self,
        curve_name: &str,
        curve: &CubicBezierCurve,
        params: &EaseParameters,
    ) -> EaseflowResult<String>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostReply {
    Success(String),
    Error(String),
    Unavailable,
    /// Anything the host printed that is neither success nor error.
    Diagnostic(String),
}

impl HostReply {
    pub fn parse(reply: &str) -> Self {
        let reply = reply.trim();
        if reply == TRANSPORT_FAILURE {
            Self::Unavailable
        } else if reply.starts_with("Success") {
            Self::Success(reply.to_string())
        } else if let Some(rest) = reply.strip_prefix("Error") {
            let msg = rest.trim_start_matches(':').trim();
            Self::Error(if msg.is_empty() { reply } else { msg }.to_string())
        } else {
            Self::Diagnostic(reply.to_string())
        }
    }

    pub fn into_result(self) -> EaseflowResult<String> {
        match self {
            Self::Success(msg) => Ok(msg),
            Self::Error(msg) => Err(EaseflowError::host_failure(msg)),
            Self::Unavailable => Err(EaseflowError::host_unavailable(
                "host script could not be evaluated",
            )),
            Self::Diagnostic(msg) => Err(EaseflowError::host_failure(format!(
                "unexpected host reply: {msg}"
            ))),
        }
    }
}

/// Convert `curve` and send it to the host under `curve_name`.
///
/// Only a `Success` reply is `Ok`; its text is returned unchanged.
#[tracing::instrument(skip(bridge, curve))]
pub fn apply_via_host(
    bridge: &mut dyn HostBridge,
    curve_name: &str,
    curve: &CubicBezierCurve,
) -> EaseflowResult<String> {
    let params = EaseParameters::from_curve(curve);
    let raw = bridge.call(curve_name, curve, &params)?;
    let reply = HostReply::parse(&raw);
    if let HostReply::Diagnostic(msg) = &reply {
        tracing::warn!(reply = %msg, "unrecognized host reply");
    }
    reply.into_result()
}

/// A host whose selection is a set of in-memory properties.
///
/// Replies in the same text protocol as a live host, so it can stand in for one
/// behind [`apply_via_host`].
#[derive(Clone, Debug, Default)]
pub struct MemoryHost {
    pub selection: Vec<MemoryProperty>,
}

impl MemoryHost {
    pub fn new(selection: Vec<MemoryProperty>) -> Self {
        Self { selection }
    }

    pub fn into_selection(self) -> Vec<MemoryProperty> {
        self.selection
    }
}

impl HostBridge for MemoryHost {
    fn call(
        &mut self,
        curve_name: &str,
        curve: &CubicBezierCurve,
        _params: &EaseParameters,
    ) -> EaseflowResult<String> {
        if self.selection.is_empty() {
            return Ok("Error: No properties selected".to_string());
        }
        // Nothing is touched unless the whole selection is well-formed.
        if let Some(e) = self.selection.iter().find_map(|p| p.validate().err()) {
            return Ok(format!("Error: {e}"));
        }
        let applier = KeyframeApplier::new(*curve);
        let mut applied = 0;
        for property in &mut self.selection {
            let opts = property.options();
            match applier.apply(property, opts) {
                Ok(report) if report.skipped => {}
                Ok(_) => applied += 1,
                Err(e) => return Ok(format!("Error: {}: {e}", property.name())),
            }
        }
        tracing::debug!(curve_name, applied, "memory host applied curve");
        Ok(format!("Success: Applied to {applied} properties"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/bridge.rs"]
mod tests;
