// tween.rs - Frame-polled interpolation
//
// A tween does nothing on its own. The frame callback calls `update` with
// the current clock and applies the returned value to whatever property the
// tween drives. Stopping leaves that property wherever the last update put it.

use glam::Vec3;

use super::Easing;

/// Values that can be interpolated
pub trait Lerp: Copy {
    fn lerp_to(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp_to(self, to: f32, t: f32) -> f32 {
        // exact at both ends
        self * (1.0 - t) + to * t
    }
}

impl Lerp for Vec3 {
    #[inline]
    fn lerp_to(self, to: Vec3, t: f32) -> Vec3 {
        self.lerp(to, t)
    }
}

/// One polled step of a running tween
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenStep<T> {
    pub value: T,
    /// Set only on the update that reaches the end
    pub finished: bool,
}

#[derive(Debug, Clone)]
pub struct Tween<T> {
    from: T,
    to: T,
    duration_ms: f64,
    easing: Easing,
    started_at: Option<f64>,
}

impl<T: Lerp> Tween<T> {
    /// An idle tween heading for `to`. Nothing moves until `start`.
    pub fn new(to: T, duration_ms: f64, easing: Easing) -> Self {
        Self {
            from: to,
            to,
            duration_ms,
            easing,
            started_at: None,
        }
    }

    pub fn start(&mut self, from: T, now: f64) {
        self.from = from;
        self.started_at = Some(now);
    }

    pub fn stop(&mut self) {
        self.started_at = None;
    }

    pub fn is_active(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn target(&self) -> T {
        self.to
    }

    /// Advance to `now`. Returns None once the tween is idle, so completion
    /// is reported exactly once.
    pub fn update(&mut self, now: f64) -> Option<TweenStep<T>> {
        let started_at = self.started_at?;
        let elapsed = (now - started_at).max(0.0);
        let t = if self.duration_ms <= 0.0 {
            1.0
        } else {
            (elapsed / self.duration_ms).min(1.0)
        };

        let finished = t >= 1.0;
        if finished {
            self.started_at = None;
        }

        Some(TweenStep {
            value: self.from.lerp_to(self.to, self.easing.apply(t as f32)),
            finished,
        })
    }
}
