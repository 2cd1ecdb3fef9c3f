use alloc::collections::VecDeque;

use crate::{ItemGeometry, ScrollPosition};

/// Tuning for the release-of-drag fling.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlingConfig {
    /// Factor applied to the measured release velocity.
    pub velocity_dampening: f32,
    /// Dampened velocities below this (px/s, absolute) snap without travel.
    pub min_velocity: f32,
    /// Dampened velocities are clamped to `-max_velocity..=max_velocity` (px/s).
    pub max_velocity: f32,
    /// Constant deceleration used to project the travel distance (px/s²).
    pub deceleration: f32,
}

impl Default for FlingConfig {
    fn default() -> Self {
        Self {
            velocity_dampening: 0.55,
            min_velocity: 400.0,
            max_velocity: 3000.0,
            deceleration: 4000.0,
        }
    }
}

impl FlingConfig {
    /// Dampens, thresholds and clamps a raw release velocity.
    pub fn adjust_velocity(&self, velocity: f32) -> f32 {
        let v = velocity * self.velocity_dampening;
        if v < self.min_velocity && v > -self.min_velocity {
            return 0.0;
        }
        v.clamp(-self.max_velocity, self.max_velocity)
    }

    /// Distance travelled from `velocity` until rest, signed like the velocity.
    pub fn projected_distance_px(&self, velocity: f32) -> i64 {
        if self.deceleration <= 0.0 {
            return 0;
        }
        let distance = velocity * velocity / (2.0 * self.deceleration);
        if velocity < 0.0 {
            -(distance as i64)
        } else {
            distance as i64
        }
    }

    /// The item a fling from `position` with an adjusted `velocity` settles on.
    ///
    /// Returns `None` for an empty list or a zero item size.
    pub fn snap_target_index(
        &self,
        geometry: &ItemGeometry,
        position: ScrollPosition,
        velocity: f32,
        count: usize,
    ) -> Option<usize> {
        let item = geometry.main_axis_px() as i64;
        if item == 0 || count == 0 {
            return None;
        }
        let projected = position.absolute_px(geometry.main_axis_px())
            + self.projected_distance_px(velocity);
        // Inverse of `ItemGeometry::target_scroll_position_px`, rounded to the nearest item.
        let relative = projected - item + geometry.center_offset_px();
        let index = (relative + item / 2).div_euclid(item);
        Some(index.clamp(0, count as i64 - 1) as usize)
    }
}

const HORIZON_MS: u64 = 100;
const MAX_SAMPLES: usize = 20;

/// Estimates drag velocity from recent position samples with a least-squares line fit.
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    samples: VecDeque<(u64, f32)>,
    position: f32,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.samples.clear();
        self.position = 0.0;
    }

    /// Records a relative movement at `now_ms`.
    ///
    /// A timestamp older than the newest sample starts a fresh sample window.
    pub fn add_delta(&mut self, now_ms: u64, delta_px: f32) {
        if self.samples.back().is_some_and(|&(newest, _)| now_ms < newest) {
            self.samples.clear();
        }
        self.position += delta_px;
        self.samples.push_back((now_ms, self.position));
        while self.samples.len() > MAX_SAMPLES {
            self.samples.pop_front();
        }
    }

    /// Velocity in px/s over the samples within the tracking horizon of the newest one.
    pub fn velocity(&self) -> f32 {
        let Some(&(newest, _)) = self.samples.back() else {
            return 0.0;
        };
        let recent = || {
            self.samples
                .iter()
                .filter(move |(t, _)| newest.saturating_sub(*t) <= HORIZON_MS)
        };
        let n = recent().count();
        if n < 2 {
            return 0.0;
        }

        let n_f = n as f32;
        let mean_t = recent()
            .map(|(t, _)| newest.saturating_sub(*t) as f32)
            .sum::<f32>()
            / n_f;
        let mean_x = recent().map(|(_, x)| *x).sum::<f32>() / n_f;
        let mut num = 0.0;
        let mut den = 0.0;
        for (t, x) in recent() {
            // Age runs backwards in time, hence the sign flip below.
            let dt = newest.saturating_sub(*t) as f32 - mean_t;
            num += dt * (x - mean_x);
            den += dt * dt;
        }
        if den == 0.0 {
            return 0.0;
        }
        -(num / den) * 1000.0
    }
}
