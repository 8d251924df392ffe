//! Impulse-strategy velocity tracking for fling support.
//!
//! Velocity is derived from the kinetic energy the pointer imparted over
//! the recent samples rather than a least-squares fit; the impulse strategy
//! is far more robust against the jittery final samples touch screens
//! produce right before a release.

use smallvec::SmallVec;

/// Ring buffer capacity; older samples fall off the end.
const WINDOW: usize = 20;

/// Samples older than this never contribute, ms.
const HORIZON_MS: i64 = 100;

/// A gap this long between adjacent samples means the pointer stopped.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy)]
struct Sample {
    time_ms: i64,
    position: f32,
}

/// One-dimensional velocity tracker over absolute pointer positions.
#[derive(Clone, Default)]
pub struct VelocityTracker {
    samples: [Option<Sample>; WINDOW],
    head: usize,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one absolute position at the given host time.
    pub fn add(&mut self, time_ms: i64, position: f32) {
        self.head = (self.head + 1) % WINDOW;
        self.samples[self.head] = Some(Sample { time_ms, position });
    }

    /// Forgets all samples.
    pub fn reset(&mut self) {
        self.samples = [None; WINDOW];
        self.head = 0;
    }

    /// Current velocity in px/s; zero when fewer than two usable samples.
    pub fn velocity(&self) -> f32 {
        let newest = match self.samples[self.head] {
            Some(sample) => sample,
            None => return 0.0,
        };

        // Collect the usable window walking backwards from the newest
        // sample, then flip to chronological order.
        let mut window: SmallVec<[Sample; WINDOW]> = SmallVec::new();
        let mut index = self.head;
        let mut newer_time = newest.time_ms;
        while let Some(sample) = self.samples[index] {
            if newest.time_ms - sample.time_ms > HORIZON_MS {
                break;
            }
            if newer_time - sample.time_ms > ASSUME_STOPPED_MS {
                break;
            }
            newer_time = sample.time_ms;
            window.push(sample);
            if window.len() == WINDOW {
                break;
            }
            index = if index == 0 { WINDOW - 1 } else { index - 1 };
        }
        window.reverse();

        if window.len() < 2 {
            return 0.0;
        }

        let mut work = 0.0f32;
        for i in 1..window.len() {
            let dt = (window[i].time_ms - window[i - 1].time_ms) as f32;
            if dt == 0.0 {
                continue;
            }
            let v_curr = (window[i].position - window[i - 1].position) / dt;
            let v_prev = kinetic_energy_to_velocity(work);
            work += (v_curr - v_prev) * v_curr.abs();
            if i == 1 {
                work *= 0.5;
            }
        }

        // px/ms -> px/s.
        kinetic_energy_to_velocity(work) * 1000.0
    }

    /// Velocity clamped to `±max`; a non-positive or non-finite cap yields
    /// zero.
    pub fn velocity_capped(&self, max: f32) -> f32 {
        if !max.is_finite() || max <= 0.0 {
            return 0.0;
        }
        let velocity = self.velocity();
        if velocity.is_nan() {
            return 0.0;
        }
        velocity.clamp(-max, max)
    }
}

/// E = v^2 / 2 with unit mass, inverted and sign-preserving.
#[inline]
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tracker_reports_zero() {
        assert_eq!(VelocityTracker::new().velocity(), 0.0);
    }

    #[test]
    fn single_sample_reports_zero() {
        let mut tracker = VelocityTracker::new();
        tracker.add(0, 100.0);
        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn constant_motion_reports_its_speed() {
        let mut tracker = VelocityTracker::new();
        // 100 px every 10 ms = 10_000 px/s.
        for step in 0..4i64 {
            tracker.add(step * 10, step as f32 * 100.0);
        }

        let velocity = tracker.velocity();
        assert!(
            (velocity - 10_000.0).abs() < 1_000.0,
            "expected ~10000, got {velocity}"
        );
    }

    #[test]
    fn backwards_motion_is_negative() {
        let mut tracker = VelocityTracker::new();
        tracker.add(0, 300.0);
        tracker.add(10, 200.0);
        tracker.add(20, 100.0);
        assert!(tracker.velocity() < 0.0);
    }

    #[test]
    fn reset_forgets_history() {
        let mut tracker = VelocityTracker::new();
        tracker.add(0, 0.0);
        tracker.add(10, 100.0);
        tracker.reset();
        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn cap_applies_in_both_directions() {
        let mut tracker = VelocityTracker::new();
        tracker.add(0, 0.0);
        tracker.add(1, 10_000.0);
        assert_eq!(tracker.velocity_capped(8_000.0), 8_000.0);

        tracker.reset();
        tracker.add(0, 10_000.0);
        tracker.add(1, 0.0);
        assert_eq!(tracker.velocity_capped(8_000.0), -8_000.0);
    }

    #[test]
    fn samples_past_the_horizon_are_ignored() {
        let mut tracker = VelocityTracker::new();
        tracker.add(0, 0.0);
        tracker.add(150, 100.0);
        tracker.add(160, 200.0);
        tracker.add(170, 300.0);
        assert!(tracker.velocity().abs() > 0.0);
    }

    #[test]
    fn a_pause_longer_than_the_stop_gap_reports_zero() {
        let mut tracker = VelocityTracker::new();
        tracker.add(0, 0.0);
        tracker.add(ASSUME_STOPPED_MS + 1, 100.0);
        assert_eq!(tracker.velocity(), 0.0);
    }
}
