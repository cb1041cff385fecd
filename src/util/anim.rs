// Copyright (c) 2025, Vikas Bala
// SPDX-License-Identifier: BSD-3-Clause

//! Easing curves and fixed-duration animation timelines.
//!
//! All page and widget animations are declarative: a start time, a
//! duration, and an easing curve sampled against `ctx.input(|i| i.time)`.

/// Easing curve applied to a normalized 0..=1 progress value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// Cubic bezier with implicit (0,0) and (1,1) endpoints.
    CubicBezier(f32, f32, f32, f32),
}

/// The site-wide "expo out" curve used for enter/hover reveals.
pub const EASE_OUT: Easing = Easing::CubicBezier(0.22, 1.0, 0.36, 1.0);

/// Symmetric in/out curve used for the page shutter.
pub const EASE_IN_OUT: Easing = Easing::CubicBezier(0.83, 0.0, 0.17, 1.0);

impl Easing {
    /// Evaluate the curve at progress `t` (clamped to 0..=1).
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

/// Sample a CSS-style cubic bezier: solve the x(s) polynomial for the
/// parameter at `x = t`, then evaluate y at that parameter.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let curve = |a: f32, b: f32, s: f32| {
        // One-dimensional bezier with endpoints 0 and 1
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
    };

    // Bisection on the x axis; x(s) is monotonic for valid control points
    let mut lo = 0.0_f32;
    let mut hi = 1.0_f32;
    let mut s = t;
    for _ in 0..24 {
        let x = curve(x1, x2, s);
        if (x - t).abs() < 1e-5 {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }

    curve(y1, y2, s)
}

/// A one-shot animation from `from` to `to` over a fixed duration.
#[derive(Debug, Clone, Copy)]
pub struct Anim {
    start_time: f64,
    duration: f64,
    from: f32,
    to: f32,
    easing: Easing,
}

impl Anim {
    pub fn new(start_time: f64, duration: f64, from: f32, to: f32, easing: Easing) -> Self {
        Self {
            start_time,
            duration,
            from,
            to,
            easing,
        }
    }

    /// Current value at time `now`.
    pub fn value(&self, now: f64) -> f32 {
        let t = self.progress(now);
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    /// Raw progress 0..=1 at time `now`.
    pub fn progress(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (((now - self.start_time) / self.duration) as f32).clamp(0.0, 1.0)
    }

    pub fn finished(&self, now: f64) -> bool {
        now >= self.start_time + self.duration
    }
}

/// A repeating 0 -> 1 -> 0 pulse, for idle affordances like the
/// scroll-down chevron.
pub fn pulse(now: f64, period: f64) -> f32 {
    if period <= 0.0 {
        return 0.0;
    }
    let phase = ((now / period).fract()) as f32;
    if phase < 0.5 {
        phase * 2.0
    } else {
        (1.0 - phase) * 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bezier_endpoints() {
        assert_eq!(EASE_OUT.apply(0.0), 0.0);
        assert_eq!(EASE_OUT.apply(1.0), 1.0);
        assert_eq!(EASE_IN_OUT.apply(0.0), 0.0);
        assert_eq!(EASE_IN_OUT.apply(1.0), 1.0);
    }

    #[test]
    fn test_bezier_monotonic() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = EASE_OUT.apply(i as f32 / 100.0);
            assert!(v >= prev - 1e-4, "curve went backwards at step {}", i);
            prev = v;
        }
    }

    #[test]
    fn test_anim_value_range() {
        let anim = Anim::new(10.0, 2.0, 0.0, 100.0, Easing::Linear);
        assert_eq!(anim.value(9.0), 0.0);
        assert_eq!(anim.value(11.0), 50.0);
        assert_eq!(anim.value(13.0), 100.0);
        assert!(anim.finished(12.0));
        assert!(!anim.finished(11.9));
    }

    #[test]
    fn test_pulse_bounds() {
        for i in 0..50 {
            let v = pulse(i as f64 * 0.13, 2.0);
            assert!((0.0..=1.0).contains(&v));
        }
    }
}
