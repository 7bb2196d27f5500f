//! Easeflow turns cubic-bezier easing curves into keyframe ease values.
//!
//! A curve is the CSS-style `cubic-bezier(x1, y1, x2, y2)` tuple with fixed
//! anchors at `(0, 0)` and `(1, 1)`. The crate covers the whole path from a
//! curve to animated keyframes:
//!
//! 1. **Evaluate**: solve `y` for progress `x` ([`CubicBezierCurve::evaluate`]).
//! 2. **Edit**: slider and handle-drag edits with snapping and locks ([`CurveModel`]).
//! 3. **Convert**: map a curve to per-keyframe speed/influence ([`EaseParameters`]).
//! 4. **Apply**: write those values onto a host property's keyframes ([`KeyframeApplier`]).
//!
//! Built-in presets, a named user-curve library with pluggable storage, and
//! closed-form easing functions ([`Ease`]) sit alongside.
#![forbid(unsafe_code)]

mod animation;
mod config;
mod convert;
mod curve;
mod foundation;
mod host;
mod library;

pub use animation::ease::Ease;
pub use config::EaseflowConfig;
pub use convert::ease::{EaseParameters, KeyframeEase, MAX_EASE_VALUE, MIN_INFLUENCE};
pub use convert::spatial::{SpatialTangents, spatial_tangents};
pub use curve::bezier::{CubicBezierCurve, SOLVER_EPSILON, evaluate};
pub use curve::codec::{EXPORT_DECIMALS, ImportRange, format_css, format_curve, parse_curve};
pub use curve::model::{Component, CurveModel, Handle, Modifiers};
pub use curve::presets::{PRESETS, Preset, PresetCategory, find_preset, presets_in};
pub use foundation::core::{ChannelCount, CubicBez, Point, Vec2};
pub use foundation::error::{EaseflowError, EaseflowResult};
pub use host::applier::{
    AnimatedProperty, ApplyOptions, ApplyReport, KeyframeApplier, PropertyKind, plan_segments,
};
pub use host::bridge::{HostBridge, HostReply, MemoryHost, TRANSPORT_FAILURE, apply_via_host};
pub use host::memory::{Interpolation, MemoryKey, MemoryProperty};
pub use library::named::{CurveSource, DEFAULT_CURVES, NamedCurveLibrary};
pub use library::store::{CurveMap, CurveStore, JsonFileStore, MemoryStore, STORAGE_KEY};
