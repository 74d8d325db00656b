//! Recency-weighted estimate of the current duration at one location.
//!
//! The press history is treated as a step function: each press's duration
//! holds from the moment it was recorded until the next (more recent) press,
//! or until now for the newest one. Each step is weighted by how long it held
//! (`gap`) times a quadratic decay in its age that reaches the floor at
//! [`HORIZON_MINUTES`]. The result is the weighted mean of the durations and
//! the square root of their weighted second central moment.

use crate::models::press::Sample;
use crate::utils::time::minutes_between;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Age at which a press stops carrying meaningful weight.
pub const HORIZON_MINUTES: f64 = 30.0;

/// Smallest decay factor any press receives.
pub const DECAY_FLOOR: f64 = 0.0001;

/// How many of a location's most recent presses feed one estimate.
pub const HISTORY_LIMIT: u32 = 100;

/// `mean` and `variance` are NaN when no history was available; NaN
/// serializes to JSON `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Estimate {
    pub mean: f64,
    /// Root of the weighted second central moment, in minutes.
    pub variance: f64,
}

impl Estimate {
    pub const UNAVAILABLE: Estimate = Estimate {
        mean: f64::NAN,
        variance: f64::NAN,
    };

    pub fn is_available(&self) -> bool {
        self.mean.is_finite()
    }
}

/// `(1 - age/30)^2`, clamped to zero past the horizon, then floored.
pub fn decay(age_minutes: f64) -> f64 {
    let remaining = (1.0 - age_minutes / HORIZON_MINUTES).max(0.0);
    (remaining * remaining).max(DECAY_FLOOR)
}

/// Estimate from a newest-first history, evaluated at `now`.
pub fn estimate_at(history: &[Sample], now: DateTime<Utc>) -> Estimate {
    let mut sum_duration = 0.0;
    let mut sum_sq = 0.0;
    let mut sum_weight = 0.0;
    let mut prev_time = now;

    for sample in history {
        let gap = minutes_between(prev_time, sample.recorded_at).max(0.0);
        let age = minutes_between(now, sample.recorded_at);
        let weight = gap * decay(age);

        let duration = f64::from(sample.duration_minutes);
        sum_duration += duration * weight;
        sum_sq += duration * duration * weight;
        sum_weight += weight;

        prev_time = sample.recorded_at;
    }

    if sum_weight <= 0.0 {
        return Estimate::UNAVAILABLE;
    }

    let mean = sum_duration / sum_weight;
    let variance = (sum_sq / sum_weight - mean * mean).max(0.0).sqrt();

    Estimate { mean, variance }
}

/// Estimate evaluated at the current wall-clock time.
pub fn estimate(history: &[Sample]) -> Estimate {
    estimate_at(history, Utc::now())
}
