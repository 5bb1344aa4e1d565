pub const DEFAULT_DURATION_MS: f64 = 2000.0;

pub fn ease_out_quart(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(4)
}

/// Count-up from 0 to `target`, timed from the first frame it sees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    duration_ms: f64,
    started_at: Option<f64>,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: u64, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms,
            started_at: None,
            finished: false,
        }
    }

    pub fn progress(&self, timestamp: f64) -> f64 {
        let Some(start) = self.started_at else {
            return 0.0;
        };
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((timestamp - start) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Value to display for an animation-frame timestamp.
    pub fn sample(&mut self, timestamp: f64) -> u64 {
        if self.started_at.is_none() {
            self.started_at = Some(timestamp);
        }
        let progress = self.progress(timestamp);
        if progress >= 1.0 {
            self.finished = true;
            return self.target;
        }
        let value = (ease_out_quart(progress) * self.target as f64).floor() as u64;
        value.min(self.target)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert_eq!(ease_out_quart(0.5), 0.9375);
        assert_eq!(ease_out_quart(-3.0), 0.0);
        assert_eq!(ease_out_quart(7.0), 1.0);
    }

    #[test]
    fn timing_is_relative_to_first_frame() {
        let mut counter = CounterAnimation::new(500, 2000.0);
        assert_eq!(counter.sample(10_000.0), 0);
        assert_eq!(counter.sample(11_000.0), 468); // floor(0.9375 * 500)
        assert!(!counter.is_finished());
        assert_eq!(counter.sample(12_000.0), 500);
        assert!(counter.is_finished());
    }

    #[test]
    fn monotone_and_bounded_for_any_frame_sequence() {
        for target in [0_u64, 1, 10, 40, 95, 500, 1_000_000] {
            let mut counter = CounterAnimation::new(target, 2000.0);
            let mut last = 0;
            let mut t = 3_217.5;
            while !counter.is_finished() {
                let value = counter.sample(t);
                assert!(value >= last, "target {target}: {value} < {last}");
                assert!(value <= target);
                last = value;
                t += 16.7;
            }
            assert_eq!(last, target);
        }
    }

    #[test]
    fn uneven_frames_still_land_on_target() {
        let mut counter = CounterAnimation::new(95, 2000.0);
        for t in [0.0, 3.0, 900.0, 901.0, 1999.0] {
            assert!(counter.sample(t) < 95);
        }
        assert_eq!(counter.sample(4000.0), 95);
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let mut counter = CounterAnimation::new(10, 0.0);
        assert_eq!(counter.sample(5.0), 10);
        assert!(counter.is_finished());
    }
}
