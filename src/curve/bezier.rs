use crate::foundation::core::{CubicBez, Point};

/// Convergence tolerance on `|x(t) - x|`.
pub const SOLVER_EPSILON: f64 = 1e-5;
const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 64;

/// A unit cubic bezier easing curve anchored at `(0, 0)` and `(1, 1)`.
///
/// Only the two free control points are stored. Nothing is validated here:
/// `y1`/`y2` may leave `[0, 1]` for overshoot curves, and `x1`/`x2` are only
/// expected (not required) to lie in `[0, 1]`.
///
/// Serializes as a bare `[x1, y1, x2, y2]` array.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct CubicBezierCurve {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezierCurve {
    /// `cubic-bezier(0, 0, 1, 1)`.
    pub const LINEAR: Self = Self::new(0.0, 0.0, 1.0, 1.0);
    /// CSS `ease`, the initial curve of a fresh editor.
    pub const EASE: Self = Self::new(0.25, 0.1, 0.25, 1.0);

    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    /// First control point (attached to the `(0, 0)` anchor).
    pub fn p1(self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// Second control point (attached to the `(1, 1)` anchor).
    pub fn p2(self) -> Point {
        Point::new(self.x2, self.y2)
    }

    pub fn from_points(p1: Point, p2: Point) -> Self {
        Self::new(p1.x, p1.y, p2.x, p2.y)
    }

    /// Eased progress `y` for input progress `x`.
    ///
    /// `x` is expected in `[0, 1]`; values at or past either end return the anchor exactly.
    pub fn evaluate(self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        let t = self.solve_t(x);
        Coefficients::new(self.y1, self.y2).sample(t)
    }

    /// Curve parameter `t` whose x coordinate is `x` (within [`SOLVER_EPSILON`]).
    pub fn solve_t(self, x: f64) -> f64 {
        let cx = Coefficients::new(self.x1, self.x2);

        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let err = cx.sample(t) - x;
            if err.abs() < SOLVER_EPSILON {
                return t;
            }
            let slope = cx.derivative(t);
            if slope.abs() < SOLVER_EPSILON {
                break;
            }
            t -= err / slope;
        }

        tracing::trace!(x, "newton did not converge, bisecting");
        let (mut lo, mut hi) = (0.0, 1.0);
        let mut t = 0.5;
        for _ in 0..BISECTION_ITERATIONS {
            let v = cx.sample(t);
            if (v - x).abs() < SOLVER_EPSILON {
                break;
            }
            if v < x {
                lo = t;
            } else {
                hi = t;
            }
            t = lo + (hi - lo) / 2.0;
        }
        t
    }

    /// Point on the curve at parameter `t`.
    pub fn point_at(self, t: f64) -> Point {
        Point::new(
            Coefficients::new(self.x1, self.x2).sample(t),
            Coefficients::new(self.y1, self.y2).sample(t),
        )
    }

    /// `steps + 1` points evenly spaced in x, with y solved through [`Self::evaluate`].
    pub fn sample(self, steps: usize) -> Vec<Point> {
        let steps = steps.max(1);
        (0..=steps)
            .map(|i| {
                let x = i as f64 / steps as f64;
                Point::new(x, self.evaluate(x))
            })
            .collect()
    }

    /// Full cubic including the fixed anchors, for renderers.
    pub fn to_cubic_bez(self) -> CubicBez {
        CubicBez::new(Point::ORIGIN, self.p1(), self.p2(), Point::new(1.0, 1.0))
    }
}

impl Default for CubicBezierCurve {
    fn default() -> Self {
        Self::EASE
    }
}

impl From<[f64; 4]> for CubicBezierCurve {
    fn from([x1, y1, x2, y2]: [f64; 4]) -> Self {
        Self::new(x1, y1, x2, y2)
    }
}

impl From<CubicBezierCurve> for [f64; 4] {
    fn from(c: CubicBezierCurve) -> Self {
        c.to_array()
    }
}

/// Evaluate `cubic-bezier(x1, y1, x2, y2)` at `x`.
pub fn evaluate(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    CubicBezierCurve::new(x1, y1, x2, y2).evaluate(x)
}

/// Polynomial form `((a*t + b)*t + c)*t` of one coordinate.
#[derive(Clone, Copy, Debug)]
struct Coefficients {
    a: f64,
    b: f64,
    c: f64,
}

impl Coefficients {
    fn new(p1: f64, p2: f64) -> Self {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        Self { a, b, c }
    }

    fn sample(self, t: f64) -> f64 {
        ((self.a * t + self.b) * t + self.c) * t
    }

    fn derivative(self, t: f64) -> f64 {
        (3.0 * self.a * t + 2.0 * self.b) * t + self.c
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/bezier.rs"]
mod tests;
