use std::time::Duration;
use tokio::time::Instant;

/// Cubic ease-in-out over `t ∈ [0, 1]`.
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Interpolates a displayed value towards its latest target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    start: Instant,
    duration: Duration,
}

impl Tween {
    /// A tween already resting at `value`.
    pub fn settled(value: f64, now: Instant) -> Self {
        Self {
            from: value,
            to: value,
            start: now,
            duration: Duration::ZERO,
        }
    }

    /// Head for `to`, starting from wherever the value is displayed at `now`.
    pub fn retarget(&mut self, to: f64, now: Instant, duration: Duration) {
        self.from = self.value_at(now);
        self.to = to;
        self.start = now;
        self.duration = duration;
    }

    pub fn value_at(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.start);
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * ease_in_out(t)
    }

    pub fn is_settled(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_endpoints_and_midpoint() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn ease_is_monotonic() {
        let samples: Vec<f64> = (0..=100).map(|i| ease_in_out(i as f64 / 100.0)).collect();
        assert!(samples.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn ease_clamps_out_of_range() {
        assert_eq!(ease_in_out(-1.0), 0.0);
        assert_eq!(ease_in_out(2.0), 1.0);
    }

    #[test]
    fn tween_moves_from_start_to_target() {
        let now = Instant::now();
        let mut tween = Tween::settled(0.0, now);
        tween.retarget(48.0, now, Duration::from_secs(1));

        assert_eq!(tween.value_at(now), 0.0);
        let mid = tween.value_at(now + Duration::from_millis(500));
        assert!((mid - 24.0).abs() < 1e-6);
        assert_eq!(tween.value_at(now + Duration::from_secs(1)), 48.0);
        assert_eq!(tween.value_at(now + Duration::from_secs(5)), 48.0);
        assert!(!tween.is_settled(now + Duration::from_millis(999)));
        assert!(tween.is_settled(now + Duration::from_secs(1)));
    }

    #[test]
    fn retarget_mid_flight_starts_from_displayed_value() {
        let now = Instant::now();
        let mut tween = Tween::settled(0.0, now);
        tween.retarget(100.0, now, Duration::from_secs(1));

        let halfway = now + Duration::from_millis(500);
        tween.retarget(0.0, halfway, Duration::from_secs(1));
        assert!((tween.value_at(halfway) - 50.0).abs() < 1e-6);
        assert_eq!(tween.value_at(halfway + Duration::from_secs(1)), 0.0);
    }
}
