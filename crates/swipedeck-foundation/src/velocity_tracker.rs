//! Pointer velocity estimation for release decisions.
//!
//! Impulse-strategy tracker: velocity is recovered from the kinetic energy
//! the samples impart, which resists the jitter a two-point difference
//! picks up. Velocities are reported in logical px per millisecond, the
//! unit the swipe thresholds are tuned for.

/// Ring buffer capacity.
const HISTORY_SIZE: usize = 20;

/// Samples older than this relative to the newest are left out.
const HORIZON_MS: i64 = 100;

/// A gap this long with no samples means the pointer stopped moving.
pub const ASSUME_STOPPED_MS: i64 = 40;

/// Cap on the velocity magnitude a release may report, in px/ms.
pub const MAX_PAN_VELOCITY: f32 = 8.0;

#[derive(Clone, Copy, Default)]
struct Sample {
    time_ms: i64,
    position: f32,
}

/// One-axis velocity tracker over absolute positions.
#[derive(Clone)]
pub struct VelocityTracker {
    samples: [Option<Sample>; HISTORY_SIZE],
    index: usize,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            index: 0,
        }
    }

    /// Record the pointer position on this axis at `time_ms`.
    pub fn add_sample(&mut self, time_ms: i64, position: f32) {
        self.index = (self.index + 1) % HISTORY_SIZE;
        self.samples[self.index] = Some(Sample { time_ms, position });
    }

    /// Drop all recorded samples.
    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.index = 0;
    }

    /// Estimate the current velocity in px/ms.
    ///
    /// Returns 0.0 with fewer than two usable samples, or when the pointer
    /// sat still past [`ASSUME_STOPPED_MS`].
    pub fn velocity(&self) -> f32 {
        let mut positions = [0.0f32; HISTORY_SIZE];
        let mut times = [0.0f32; HISTORY_SIZE];
        let mut count = 0;

        let newest = match self.samples[self.index] {
            Some(sample) => sample,
            None => return 0.0,
        };

        let mut current = self.index;
        let mut previous = newest;
        while let Some(sample) = self.samples[current] {
            let age = (newest.time_ms - sample.time_ms) as f32;
            let gap = (sample.time_ms - previous.time_ms).abs() as f32;
            previous = newest;

            if age > HORIZON_MS as f32 || gap > ASSUME_STOPPED_MS as f32 {
                break;
            }

            positions[count] = sample.position;
            times[count] = -age;

            current = if current == 0 {
                HISTORY_SIZE - 1
            } else {
                current - 1
            };
            count += 1;
            if count >= HISTORY_SIZE {
                break;
            }
        }

        if count < 2 {
            return 0.0;
        }
        impulse_velocity(&positions[..count], &times[..count])
    }

    /// Estimate the current velocity, clamped to `max_velocity` px/ms.
    pub fn velocity_clamped(&self, max_velocity: f32) -> f32 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }
        let velocity = self.velocity();
        if velocity.is_nan() {
            return 0.0;
        }
        velocity.clamp(-max_velocity, max_velocity)
    }
}

/// Impulse velocity over samples ordered newest first, times relative to
/// the newest sample (so non-positive, in milliseconds).
fn impulse_velocity(positions: &[f32], times: &[f32]) -> f32 {
    let count = positions.len();
    if count < 2 {
        return 0.0;
    }

    let mut work = 0.0f32;
    let oldest = count - 1;
    let mut next_time = times[oldest];

    for i in (1..=oldest).rev() {
        let current_time = next_time;
        next_time = times[i - 1];
        if current_time == next_time {
            continue;
        }

        let delta = positions[i] - positions[i - 1];
        let segment_velocity = delta / (current_time - next_time);
        let accumulated = energy_to_velocity(work);
        work += (segment_velocity - accumulated) * segment_velocity.abs();
        if i == oldest {
            work *= 0.5;
        }
    }

    energy_to_velocity(work)
}

/// Invert E = v^2 / 2, keeping the sign of the energy.
#[inline]
fn energy_to_velocity(energy: f32) -> f32 {
    energy.signum() * (2.0 * energy.abs()).sqrt()
}
