use std::time::Duration;

use iced::time::Instant;

/// Linear interpolation between two values over a fixed duration.
///
/// The duration is fixed at start. Dropping the animation cancels it; the
/// owner decides when to stop sampling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    started_at: Instant,
    duration: Duration,
    from: f32,
    to: f32,
}

impl Animation {
    pub fn start(now: Instant, duration: Duration, from: f32, to: f32) -> Self {
        Self {
            started_at: now,
            duration,
            from,
            to,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Fraction of the duration elapsed at `now`, within `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }

        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn value(&self, now: Instant) -> f32 {
        self.from + (self.to - self.from) * self.progress(now)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_half_elapsed_when_sampled_then_value_is_midpoint() {
        let start = Instant::now();
        let animation =
            Animation::start(start, Duration::from_millis(200), 1.0, 0.0);

        let value = animation.value(start + Duration::from_millis(100));
        assert!((value - 0.5).abs() < 1e-4);
        assert!(!animation.is_finished(start + Duration::from_millis(100)));
    }

    #[test]
    fn given_sample_before_start_when_sampled_then_value_is_origin() {
        let start = Instant::now() + Duration::from_millis(50);
        let animation =
            Animation::start(start, Duration::from_millis(100), 0.0, 1.0);

        assert_eq!(animation.value(start - Duration::from_millis(20)), 0.0);
    }

    #[test]
    fn given_elapsed_past_duration_when_sampled_then_clamped_to_target() {
        let start = Instant::now();
        let animation =
            Animation::start(start, Duration::from_millis(100), 0.0, 1.0);

        let later = start + Duration::from_secs(2);
        assert_eq!(animation.value(later), 1.0);
        assert!(animation.is_finished(later));
    }

    #[test]
    fn given_zero_duration_when_sampled_then_finished_immediately() {
        let start = Instant::now();
        let animation = Animation::start(start, Duration::ZERO, 0.0, 1.0);
        assert!(animation.is_finished(start));
    }
}
