/// A time-based interpolation between two pixel offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: i64,
    pub to: i64,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: i64, to: i64, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    /// Samples the tween. Returns `to` exactly once the duration has elapsed.
    pub fn sample(&self, now_ms: u64) -> i64 {
        if self.is_done(now_ms) {
            return self.to;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0);
        let eased = self.easing.sample(t);

        let span = (self.to - self.from) as f32;
        self.from + (span * eased) as i64
    }
}

/// Easing curves, matching the Material motion tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    FastOutSlowIn,
    /// Decelerating curve used for picker scrolls.
    #[default]
    LinearOutSlowIn,
    FastOutLinearIn,
}

impl Easing {
    pub fn sample(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, t),
            Self::LinearOutSlowIn => cubic_bezier(0.0, 0.0, 0.2, 1.0, t),
            Self::FastOutLinearIn => cubic_bezier(0.4, 0.0, 1.0, 1.0, t),
        }
    }
}

const EPSILON: f32 = 1e-6;

fn abs(x: f32) -> f32 {
    if x < 0.0 { -x } else { x }
}

/// Evaluates a CSS-style cubic bezier (control points `(x1, y1)`, `(x2, y2)`) at `fraction`.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    fn curve(a: f32, b: f32, c: f32, t: f32) -> f32 {
        ((a * t + b) * t + c) * t
    }

    fn derivative(a: f32, b: f32, c: f32, t: f32) -> f32 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    // Newton-Raphson on x(t) = fraction, bisection if it fails to converge.
    let mut t = fraction;
    let mut converged = false;
    for _ in 0..8 {
        let x = curve(ax, bx, cx, t) - fraction;
        if abs(x) < EPSILON {
            converged = true;
            break;
        }
        let dx = derivative(ax, bx, cx, t);
        if abs(dx) < EPSILON {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !converged {
        let mut lo = 0.0;
        let mut hi = 1.0;
        t = fraction;
        for _ in 0..16 {
            let delta = curve(ax, bx, cx, t) - fraction;
            if abs(delta) < EPSILON {
                break;
            }
            if delta > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
            t = 0.5 * (lo + hi);
        }
    }

    curve(ay, by, cy, t)
}
