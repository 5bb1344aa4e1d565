//! Timed auto-advance through a fixed list, driven by caller timestamps.

pub const DEFAULT_INTERVAL_MS: f64 = 6000.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotator {
    len: usize,
    index: usize,
    interval_ms: f64,
    /// `None` while paused or when there is nothing to rotate.
    deadline: Option<f64>,
}

impl Rotator {
    pub fn new(len: usize, interval_ms: f64, now: f64) -> Self {
        let mut rotator = Self {
            len,
            index: 0,
            interval_ms,
            deadline: None,
        };
        rotator.arm(now);
        rotator
    }

    fn arm(&mut self, now: f64) {
        self.deadline = (self.len > 1).then_some(now + self.interval_ms);
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_paused(&self) -> bool {
        self.deadline.is_none()
    }

    pub fn deadline(&self) -> Option<f64> {
        self.deadline
    }

    /// Milliseconds until the next advance, if one is scheduled.
    pub fn remaining(&self, now: f64) -> Option<f64> {
        self.deadline.map(|deadline| (deadline - now).max(0.0))
    }

    /// Advances at most once, even if several intervals have elapsed.
    pub fn tick(&mut self, now: f64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.index = (self.index + 1) % self.len;
                self.arm(now);
                true
            }
            _ => false,
        }
    }

    pub fn pause(&mut self) {
        self.deadline = None;
    }

    /// Restarts a full interval; time spent paused is not caught up.
    pub fn resume(&mut self, now: f64) {
        self.arm(now);
    }

    pub fn go_to(&mut self, index: usize, now: f64) {
        if index >= self.len {
            return;
        }
        self.index = index;
        if !self.is_paused() {
            self.arm(now);
        }
    }

    pub fn next(&mut self, now: f64) {
        if self.len == 0 {
            return;
        }
        self.go_to((self.index + 1) % self.len, now);
    }

    pub fn prev(&mut self, now: f64) {
        if self.len == 0 {
            return;
        }
        self.go_to((self.index + self.len - 1) % self.len, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(rotator: &mut Rotator, from: f64, to: f64) -> usize {
        let mut advances = 0;
        let mut t = from;
        while t <= to {
            if rotator.tick(t) {
                advances += 1;
            }
            t += 100.0;
        }
        advances
    }

    #[test]
    fn three_advances_return_to_start() {
        let mut rotator = Rotator::new(3, DEFAULT_INTERVAL_MS, 0.0);
        assert_eq!(run(&mut rotator, 0.0, 18_000.0), 3);
        assert_eq!(rotator.index(), 0);
    }

    #[test]
    fn hover_pauses_completely() {
        let mut rotator = Rotator::new(3, DEFAULT_INTERVAL_MS, 0.0);
        rotator.pause();
        assert_eq!(run(&mut rotator, 0.0, 10_000.0), 0);
        assert_eq!(rotator.index(), 0);

        rotator.resume(10_000.0);
        assert_eq!(rotator.remaining(10_000.0), Some(6_000.0));
        assert!(!rotator.tick(15_900.0));
        assert!(rotator.tick(16_000.0));
        assert_eq!(rotator.index(), 1);
    }

    #[test]
    fn late_tick_advances_once() {
        let mut rotator = Rotator::new(3, DEFAULT_INTERVAL_MS, 0.0);
        assert!(rotator.tick(60_000.0));
        assert_eq!(rotator.index(), 1);
        assert!(!rotator.tick(60_000.0));
    }

    #[test]
    fn manual_navigation_restarts_interval() {
        let mut rotator = Rotator::new(3, DEFAULT_INTERVAL_MS, 0.0);
        rotator.go_to(2, 5_000.0);
        assert!(!rotator.tick(6_000.0));
        assert!(rotator.tick(11_000.0));
        assert_eq!(rotator.index(), 0);
    }

    #[test]
    fn prev_and_next_wrap() {
        let mut rotator = Rotator::new(3, DEFAULT_INTERVAL_MS, 0.0);
        rotator.prev(0.0);
        assert_eq!(rotator.index(), 2);
        rotator.next(0.0);
        rotator.next(0.0);
        assert_eq!(rotator.index(), 1);
        rotator.go_to(7, 0.0);
        assert_eq!(rotator.index(), 1);
    }

    #[test]
    fn manual_navigation_while_paused_stays_paused() {
        let mut rotator = Rotator::new(3, DEFAULT_INTERVAL_MS, 0.0);
        rotator.pause();
        rotator.next(100.0);
        assert!(rotator.is_paused());
        assert_eq!(rotator.index(), 1);
    }

    #[test]
    fn single_or_empty_lists_never_schedule() {
        let mut single = Rotator::new(1, DEFAULT_INTERVAL_MS, 0.0);
        assert!(single.is_paused());
        assert!(!single.tick(100_000.0));
        single.next(0.0);
        assert_eq!(single.index(), 0);

        let mut empty = Rotator::new(0, DEFAULT_INTERVAL_MS, 0.0);
        empty.next(0.0);
        empty.prev(0.0);
        assert_eq!(empty.index(), 0);
        assert_eq!(empty.len(), 0);
    }
}
