use crate::{
    curve::{bezier::CubicBezierCurve, presets::Preset},
    foundation::core::{Point, Vec2},
};

/// One of the two free control points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Handle {
    /// `(x1, y1)`, hanging off the `(0, 0)` anchor.
    Start,
    /// `(x2, y2)`, hanging off the `(1, 1)` anchor.
    End,
}

impl Handle {
    pub fn anchor(self) -> Point {
        match self {
            Self::Start => Point::ORIGIN,
            Self::End => Point::new(1.0, 1.0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Start => Self::End,
            Self::End => Self::Start,
        }
    }
}

/// A single scalar of the control-point tuple, as edited by a slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Component {
    X1,
    Y1,
    X2,
    Y2,
}

/// Modifier keys held during a drag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    /// Ctrl, or Cmd on macOS.
    pub control: bool,
    pub alt: bool,
}

/// Unit-square edge a snapped handle is held against.
#[derive(Clone, Copy, Debug, PartialEq)]
enum SnapEdge {
    /// `x` pinned to the given value.
    Vertical(f64),
    /// `y` pinned to the given value.
    Horizontal(f64),
}

impl SnapEdge {
    fn nearest(p: Point) -> Self {
        let candidates = [
            (p.x.abs(), Self::Vertical(0.0)),
            ((p.x - 1.0).abs(), Self::Vertical(1.0)),
            ((p.y - 1.0).abs(), Self::Horizontal(1.0)),
            (p.y.abs(), Self::Horizontal(0.0)),
        ];
        let mut best = candidates[0];
        for c in &candidates[1..] {
            if c.0 < best.0 {
                best = *c;
            }
        }
        best.1
    }

    fn constrain(self, p: Point) -> Point {
        match self {
            Self::Vertical(x) => Point::new(x, p.y.clamp(0.0, 1.0)),
            Self::Horizontal(y) => Point::new(p.x.clamp(0.0, 1.0), y),
        }
    }
}

/// Per-drag constraint state, reset by [`CurveModel::begin_drag`].
#[derive(Clone, Copy, Debug)]
struct DragState {
    handle: Handle,
    snap: Option<SnapEdge>,
    locked_length: Option<f64>,
    locked_angle: Option<f64>,
}

/// The editable curve of one editor session.
///
/// All coordinates are in curve space: x is time, y is progress, both
/// normalized so the anchors sit at `(0, 0)` and `(1, 1)`.
#[derive(Clone, Debug, Default)]
pub struct CurveModel {
    curve: CubicBezierCurve,
    drag: Option<DragState>,
}

impl CurveModel {
    pub fn new(curve: CubicBezierCurve) -> Self {
        Self { curve, drag: None }
    }

    /// Current curve, by value.
    pub fn get(&self) -> CubicBezierCurve {
        self.curve
    }

    /// Replace the curve unconditionally. Overshooting y values are kept as-is.
    pub fn set(&mut self, curve: CubicBezierCurve) {
        self.curve = curve;
    }

    pub fn set_values(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.set(CubicBezierCurve::new(x1, y1, x2, y2));
    }

    pub fn set_component(&mut self, component: Component, value: f64) {
        let c = &mut self.curve;
        match component {
            Component::X1 => c.x1 = value,
            Component::Y1 => c.y1 = value,
            Component::X2 => c.x2 = value,
            Component::Y2 => c.y2 = value,
        }
    }

    pub fn apply_preset(&mut self, preset: &Preset) {
        self.set(preset.curve);
    }

    /// Back to CSS `ease`.
    pub fn reset(&mut self) {
        self.set(CubicBezierCurve::default());
    }

    pub fn handle(&self, handle: Handle) -> Point {
        match handle {
            Handle::Start => self.curve.p1(),
            Handle::End => self.curve.p2(),
        }
    }

    /// Move a handle to `(x, y)` with x clamped to `[0, 1]` and y left free.
    pub fn set_handle(&mut self, handle: Handle, p: Point) {
        let p = Point::new(p.x.clamp(0.0, 1.0), p.y);
        self.put(handle, p);
    }

    /// Move `handle` to `p` and point-reflect the other handle through `(0.5, 0.5)`.
    pub fn set_symmetric(&mut self, handle: Handle, p: Point) {
        let p = Point::new(p.x.clamp(0.0, 1.0), p.y);
        self.put(handle, p);
        self.put(handle.opposite(), Point::new(1.0 - p.x, 1.0 - p.y));
    }

    /// Preview samples, see [`CubicBezierCurve::sample`].
    pub fn sample(&self, steps: usize) -> Vec<Point> {
        self.curve.sample(steps)
    }

    pub fn begin_drag(&mut self, handle: Handle) {
        self.drag = Some(DragState {
            handle,
            snap: None,
            locked_length: None,
            locked_angle: None,
        });
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn dragging(&self) -> Option<Handle> {
        self.drag.map(|d| d.handle)
    }

    /// Feed one pointer position of an active drag.
    ///
    /// Control+shift edits symmetrically. Otherwise shift snaps the pointer to
    /// the nearest unit-square edge (kept for the rest of the drag), then
    /// control locks the handle length and alt locks its angle.
    ///
    /// Returns `false` when no drag is active or a locked edit was refused
    /// because it would move x out of `[0, 1]`.
    pub fn drag_to(&mut self, pointer: Point, mods: Modifiers) -> bool {
        let Some(mut drag) = self.drag else {
            return false;
        };
        let handle = drag.handle;

        if mods.control && mods.shift {
            self.set_symmetric(handle, pointer);
            return true;
        }

        let pointer = if mods.shift {
            let edge = *drag.snap.get_or_insert_with(|| SnapEdge::nearest(pointer));
            edge.constrain(pointer)
        } else {
            pointer
        };

        let applied = if mods.control {
            let current = self.anchor_offset(handle);
            let length = *drag.locked_length.get_or_insert_with(|| current.hypot());
            let angle = (pointer - handle.anchor()).atan2();
            self.put_locked(handle, Vec2::from_angle(angle) * length)
        } else if mods.alt {
            let current = self.anchor_offset(handle);
            let angle = *drag.locked_angle.get_or_insert_with(|| current.atan2());
            let length = (pointer - handle.anchor()).hypot();
            self.put_locked(handle, Vec2::from_angle(angle) * length)
        } else {
            self.set_handle(handle, pointer);
            true
        };

        self.drag = Some(drag);
        applied
    }

    /// Handle position relative to its anchor, with x held inside the unit square.
    fn anchor_offset(&self, handle: Handle) -> Vec2 {
        let p = self.handle(handle);
        Point::new(p.x.clamp(0.0, 1.0), p.y) - handle.anchor()
    }

    fn put_locked(&mut self, handle: Handle, offset: Vec2) -> bool {
        let p = handle.anchor() + offset;
        if !(0.0..=1.0).contains(&p.x) {
            return false;
        }
        self.put(handle, p);
        true
    }

    fn put(&mut self, handle: Handle, p: Point) {
        match handle {
            Handle::Start => {
                self.curve.x1 = p.x;
                self.curve.y1 = p.y;
            }
            Handle::End => {
                self.curve.x2 = p.x;
                self.curve.y2 = p.y;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/model.rs"]
mod tests;
