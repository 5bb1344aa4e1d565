//! Scroll bookkeeping for the snapping card carousels.
//!
//! The engine never touches the DOM. Components feed it the container's
//! `scrollLeft`, the viewport width and a millisecond timestamp, and apply
//! the [`ScrollRequest`]s it hands back.
//!
//! In [`LoopMode::Infinite`] the strip renders three copies of the items and
//! lives in the middle one. When scrolling settles in the leading or trailing
//! copy the engine asks for an instant jump to the same logical card in the
//! middle copy, which the user cannot see because the copies are identical.

use crate::error::UiError;
use crate::motion::breakpoints::{resolve_item_width, resolve_preview_stride};

pub type WidthFn = fn(f64) -> f64;

/// Minimum horizontal travel for a touch gesture to count as a swipe.
pub const MIN_SWIPE_DISTANCE: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopMode {
    Infinite,
    Bounded,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollMotion {
    Instant,
    Smooth,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRequest {
    pub offset: f64,
    pub motion: ScrollMotion,
}

#[derive(Clone, Copy, Debug)]
pub struct CarouselOptions {
    pub mode: LoopMode,
    pub width: WidthFn,
    pub reduced_motion: bool,
    /// Quiet period after the last scroll event before `settle` runs.
    pub debounce_ms: u32,
    /// How long a programmatic scroll suppresses settling and resizing.
    pub navigation_lock_ms: f64,
    /// How long a seam correction blocks another one.
    pub correction_lock_ms: f64,
}

impl CarouselOptions {
    pub fn solutions() -> Self {
        Self {
            mode: LoopMode::Infinite,
            width: resolve_item_width,
            reduced_motion: false,
            debounce_ms: 200,
            navigation_lock_ms: 600.0,
            correction_lock_ms: 100.0,
        }
    }

    pub fn preview() -> Self {
        Self {
            mode: LoopMode::Bounded,
            width: resolve_preview_stride,
            reduced_motion: false,
            debounce_ms: 100,
            navigation_lock_ms: 600.0,
            correction_lock_ms: 100.0,
        }
    }

    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Lock {
    Idle,
    /// `slot` is where the programmatic scroll is headed.
    Navigating { until: f64, slot: usize },
    Correcting { until: f64 },
}

impl Lock {
    fn live_until(&self, now: f64) -> Option<f64> {
        match *self {
            Lock::Idle => None,
            Lock::Navigating { until, .. } | Lock::Correcting { until } => {
                (now < until).then_some(until)
            }
        }
    }
}

/// Outcome of [`CarouselEngine::settle`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Settle {
    pub active_changed: bool,
    pub correction: Option<ScrollRequest>,
    /// Set when a lock was live; settle again after this many milliseconds.
    pub retry_after_ms: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    Next,
    Prev,
    GoTo(usize),
}

impl NavAction {
    /// Maps a `KeyboardEvent.key` value to a navigation, if it is one.
    pub fn from_key(key: &str, count: usize) -> Option<NavAction> {
        match key {
            "ArrowRight" | "ArrowDown" => Some(NavAction::Next),
            "ArrowLeft" | "ArrowUp" => Some(NavAction::Prev),
            _ => {
                let mut chars = key.chars();
                let digit = chars.next()?.to_digit(10)? as usize;
                if chars.next().is_some() || digit == 0 || digit > count {
                    return None;
                }
                Some(NavAction::GoTo(digit - 1))
            }
        }
    }
}

#[derive(Debug)]
pub struct CarouselEngine {
    count: usize,
    options: CarouselOptions,
    item_width: f64,
    active: usize,
    lock: Lock,
}

impl CarouselEngine {
    pub fn new(count: usize, options: CarouselOptions) -> Result<Self, UiError> {
        if count == 0 {
            return Err(UiError::EmptyCarousel);
        }
        Ok(Self {
            count,
            options,
            item_width: 0.0,
            active: 0,
            lock: Lock::Idle,
        })
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// Number of slots the strip renders.
    pub fn rendered_len(&self) -> usize {
        match self.options.mode {
            LoopMode::Infinite => self.count * 3,
            LoopMode::Bounded => self.count,
        }
    }

    pub fn logical_index(&self, slot: usize) -> usize {
        slot % self.count
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// 1-based position for "2 / 4" style counters.
    pub fn display_position(&self) -> usize {
        self.active + 1
    }

    pub fn item_width(&self) -> f64 {
        self.item_width
    }

    /// Slot the strip snaps to at `scroll_left`, clamped to the rendered range.
    pub fn slot_at(&self, scroll_left: f64) -> Option<usize> {
        self.card_at(scroll_left, self.item_width)
            .map(|card| card.min(self.rendered_len() - 1))
    }

    pub fn is_locked(&self, now: f64) -> bool {
        self.lock.live_until(now).is_some()
    }

    fn is_navigating(&self, now: f64) -> bool {
        self.pending_slot(now).is_some()
    }

    /// Target slot of a navigation still in flight.
    fn pending_slot(&self, now: f64) -> Option<usize> {
        match self.lock {
            Lock::Navigating { until, slot } if now < until => Some(slot),
            _ => None,
        }
    }

    fn middle_start(&self) -> usize {
        match self.options.mode {
            LoopMode::Infinite => self.count,
            LoopMode::Bounded => 0,
        }
    }

    fn motion(&self) -> ScrollMotion {
        if self.options.reduced_motion {
            ScrollMotion::Instant
        } else {
            ScrollMotion::Smooth
        }
    }

    fn card_at(&self, scroll_left: f64, width: f64) -> Option<usize> {
        if width <= 0.0 || !scroll_left.is_finite() {
            return None;
        }
        Some((scroll_left.max(0.0) / width).round() as usize)
    }

    fn logical_from_card(&self, card: usize) -> usize {
        match self.options.mode {
            LoopMode::Infinite => card % self.count,
            LoopMode::Bounded => card.min(self.count - 1),
        }
    }

    fn request(&self, slot: usize, motion: ScrollMotion) -> ScrollRequest {
        ScrollRequest {
            offset: slot as f64 * self.item_width,
            motion,
        }
    }

    /// Where the strip starts once layout is measurable. `None` while the
    /// viewport has no width yet; the caller retries shortly after.
    pub fn initial_scroll(&mut self, viewport_width: f64) -> Option<ScrollRequest> {
        let width = (self.options.width)(viewport_width);
        if width <= 0.0 {
            return None;
        }
        self.item_width = width;
        self.active = 0;
        Some(self.request(self.middle_start(), ScrollMotion::Instant))
    }

    /// Runs once scroll events have been quiet for `debounce_ms`.
    pub fn settle(&mut self, scroll_left: f64, now: f64) -> Settle {
        if let Some(until) = self.lock.live_until(now) {
            return Settle {
                retry_after_ms: Some(until - now),
                ..Settle::default()
            };
        }
        let Some(card) = self.card_at(scroll_left, self.item_width) else {
            return Settle::default();
        };

        let active = self.logical_from_card(card);
        let active_changed = active != self.active;
        self.active = active;

        let in_seam_copy = card >= self.count * 2 || card < self.count;
        let correction = if self.options.mode == LoopMode::Infinite && in_seam_copy {
            self.lock = Lock::Correcting {
                until: now + self.options.correction_lock_ms,
            };
            Some(self.request(self.count + active, ScrollMotion::Instant))
        } else {
            None
        };

        Settle {
            active_changed,
            correction,
            retry_after_ms: None,
        }
    }

    pub fn navigate(&mut self, action: NavAction, scroll_left: f64, now: f64) -> Option<ScrollRequest> {
        match action {
            NavAction::Next => self.next(scroll_left, now),
            NavAction::Prev => self.prev(scroll_left, now),
            NavAction::GoTo(index) => self.go_to(index, now),
        }
    }

    /// Logical index navigation starts from: the pending target while a
    /// programmatic scroll is in flight, otherwise the scroll position.
    fn current_for_navigation(&self, scroll_left: f64, now: f64) -> usize {
        if self.is_navigating(now) {
            return self.active;
        }
        self.card_at(scroll_left, self.item_width)
            .map(|card| self.logical_from_card(card))
            .unwrap_or(self.active)
    }

    fn begin_navigation(&mut self, index: usize, slot: usize, now: f64) -> ScrollRequest {
        self.active = index;
        self.lock = Lock::Navigating {
            until: now + self.options.navigation_lock_ms,
            slot,
        };
        self.request(slot, self.motion())
    }

    pub fn next(&mut self, scroll_left: f64, now: f64) -> Option<ScrollRequest> {
        if self.item_width <= 0.0 {
            return None;
        }
        let current = self.current_for_navigation(scroll_left, now);
        let next = (current + 1) % self.count;
        let in_flight = self.pending_slot(now).map(|slot| slot + 1);
        let slot = match (self.options.mode, in_flight) {
            // keep moving right from the pending target, even across the seam
            (LoopMode::Infinite, Some(slot)) if slot < self.rendered_len() => slot,
            // last -> first continues rightwards into the trailing copy
            (LoopMode::Infinite, _) if current == self.count - 1 => self.count * 2,
            (LoopMode::Infinite, _) => self.count + next,
            (LoopMode::Bounded, _) => next,
        };
        Some(self.begin_navigation(next, slot, now))
    }

    pub fn prev(&mut self, scroll_left: f64, now: f64) -> Option<ScrollRequest> {
        if self.item_width <= 0.0 {
            return None;
        }
        let current = self.current_for_navigation(scroll_left, now);
        let prev = (current + self.count - 1) % self.count;
        let in_flight = self.pending_slot(now).and_then(|slot| slot.checked_sub(1));
        let slot = match (self.options.mode, in_flight) {
            // keep moving left from the pending target, even across the seam
            (LoopMode::Infinite, Some(slot)) => slot,
            // first -> last continues leftwards into the leading copy
            (LoopMode::Infinite, _) if current == 0 => self.count - 1,
            (LoopMode::Infinite, _) => self.count + prev,
            (LoopMode::Bounded, _) => prev,
        };
        Some(self.begin_navigation(prev, slot, now))
    }

    /// Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize, now: f64) -> Option<ScrollRequest> {
        if index >= self.count || self.item_width <= 0.0 {
            return None;
        }
        Some(self.begin_navigation(index, self.middle_start() + index, now))
    }

    /// Keeps the same logical card in view after the viewport changes size.
    pub fn resize(&mut self, viewport_width: f64, scroll_left: f64, now: f64) -> Option<ScrollRequest> {
        let width = (self.options.width)(viewport_width);
        if width <= 0.0 {
            return None;
        }
        let previous = self.item_width;
        self.item_width = width;
        if self.is_locked(now) {
            return None;
        }
        let index = self
            .card_at(scroll_left, previous)
            .map(|card| self.logical_from_card(card))
            .unwrap_or(self.active);
        self.active = index;
        Some(self.request(self.middle_start() + index, ScrollMotion::Instant))
    }
}

/// Tracks a single touch gesture across start/move/end.
#[derive(Clone, Copy, Debug, Default)]
pub struct SwipeTracker {
    start: Option<f64>,
    end: Option<f64>,
}

impl SwipeTracker {
    pub fn start(&mut self, x: f64) {
        self.start = Some(x);
        self.end = None;
    }

    pub fn track(&mut self, x: f64) {
        self.end = Some(x);
    }

    pub fn finish(&mut self) -> Option<NavAction> {
        let (start, end) = (self.start.take()?, self.end.take()?);
        let distance = start - end;
        if distance > MIN_SWIPE_DISTANCE {
            Some(NavAction::Next)
        } else if distance < -MIN_SWIPE_DISTANCE {
            Some(NavAction::Prev)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DESKTOP: f64 = 1200.0; // item width 900

    fn engine(count: usize) -> CarouselEngine {
        let mut engine = CarouselEngine::new(count, CarouselOptions::solutions()).unwrap();
        engine.initial_scroll(DESKTOP).unwrap();
        engine
    }

    #[test]
    fn rejects_empty_item_list() {
        let err = CarouselEngine::new(0, CarouselOptions::solutions()).unwrap_err();
        assert_eq!(err, UiError::EmptyCarousel);
    }

    #[test]
    fn duplicated_slots_map_back_to_base_items() {
        let engine = engine(4);
        assert_eq!(engine.rendered_len(), 12);
        let logical: Vec<usize> = (0..12).map(|slot| engine.logical_index(slot)).collect();
        assert_eq!(logical, vec![0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, 3]);
    }

    #[test]
    fn snapped_slot_follows_scroll_offset() {
        let engine = engine(4);
        assert_eq!(engine.slot_at(5.4 * 900.0), Some(5));
        assert_eq!(engine.slot_at(-20.0), Some(0));
        assert_eq!(engine.slot_at(100.0 * 900.0), Some(11));

        let unmeasured = CarouselEngine::new(4, CarouselOptions::solutions()).unwrap();
        assert_eq!(unmeasured.slot_at(900.0), None);
    }

    #[test]
    fn initial_scroll_waits_for_layout() {
        let mut engine = CarouselEngine::new(4, CarouselOptions::solutions()).unwrap();
        assert_eq!(engine.initial_scroll(0.0), None);
        let request = engine.initial_scroll(DESKTOP).unwrap();
        assert_eq!(request, ScrollRequest { offset: 3600.0, motion: ScrollMotion::Instant });
        assert_eq!(engine.active_index(), 0);
        assert_eq!(engine.display_position(), 1);
    }

    #[test]
    fn navigation_before_layout_is_ignored() {
        let mut engine = CarouselEngine::new(3, CarouselOptions::solutions()).unwrap();
        assert_eq!(engine.next(0.0, 0.0), None);
        assert_eq!(engine.prev(0.0, 0.0), None);
        assert_eq!(engine.go_to(1, 0.0), None);
        assert_eq!(engine.active_index(), 0);
    }

    #[test]
    fn repeated_next_wraps_modulo_count() {
        for count in 1..=6 {
            for start in 0..count {
                for steps in 0..15 {
                    let mut engine = engine(count);
                    engine.go_to(start, 0.0).unwrap();
                    for _ in 0..steps {
                        let request = engine.next(0.0, 10.0).unwrap();
                        assert!(request.offset.is_finite());
                    }
                    assert_eq!(engine.active_index(), (start + steps) % count);
                }
            }
        }
    }

    #[test]
    fn repeated_prev_wraps_modulo_count() {
        for count in 1..=5 {
            let mut engine = engine(count);
            for step in 1..=12 {
                engine.prev(0.0, 10.0).unwrap();
                assert_eq!(engine.active_index(), (count * 12 - step) % count);
            }
        }
    }

    #[test]
    fn next_from_position_uses_scroll_offset() {
        let mut engine = engine(4);
        // settled on slot 5 (logical 1), no lock
        let request = engine.next(5.0 * 900.0, 0.0).unwrap();
        assert_eq!(engine.active_index(), 2);
        assert_eq!(request, ScrollRequest { offset: 6.0 * 900.0, motion: ScrollMotion::Smooth });
    }

    #[test]
    fn boundary_navigation_keeps_visual_direction() {
        let mut engine = engine(4);
        let request = engine.next(7.0 * 900.0, 0.0).unwrap();
        assert_eq!(engine.active_index(), 0);
        assert_eq!(request.offset, 8.0 * 900.0);

        let mut engine = self::engine(4);
        let request = engine.prev(4.0 * 900.0, 0.0).unwrap();
        assert_eq!(engine.active_index(), 3);
        assert_eq!(request.offset, 3.0 * 900.0);
    }

    #[test]
    fn seam_correction_preserves_active_index() {
        let mut engine = engine(4);
        // momentum carried the strip into the trailing copy, slot 9
        let settle = engine.settle(9.0 * 900.0 + 20.0, 1_000.0);
        assert!(settle.active_changed);
        assert_eq!(engine.active_index(), 1);
        let correction = settle.correction.unwrap();
        assert_eq!(correction, ScrollRequest { offset: 5.0 * 900.0, motion: ScrollMotion::Instant });

        let after = engine.settle(correction.offset, 1_300.0);
        assert_eq!(after, Settle::default());
        assert_eq!(engine.active_index(), 1);
    }

    #[test]
    fn leading_copy_is_corrected_too() {
        let mut engine = engine(4);
        let settle = engine.settle(2.0 * 900.0, 0.0);
        assert_eq!(engine.active_index(), 2);
        assert_eq!(settle.correction.map(|c| c.offset), Some(6.0 * 900.0));
    }

    #[test]
    fn middle_copy_needs_no_correction() {
        let mut engine = engine(4);
        let settle = engine.settle(6.0 * 900.0 - 100.0, 0.0);
        assert_eq!(settle.correction, None);
        assert_eq!(engine.active_index(), 2);
        assert!(settle.active_changed);

        let again = engine.settle(6.0 * 900.0, 50.0);
        assert!(!again.active_changed);
    }

    #[test]
    fn corrections_never_overlap() {
        let mut engine = engine(4);
        assert!(engine.settle(10.0 * 900.0, 0.0).correction.is_some());
        let blocked = engine.settle(10.0 * 900.0, 40.0);
        assert_eq!(blocked.correction, None);
        assert_eq!(blocked.retry_after_ms, Some(60.0));
    }

    #[test]
    fn rapid_next_across_seam_keeps_moving_right() {
        let mut engine = engine(4);
        let first = engine.next(7.0 * 900.0, 0.0).unwrap();
        // the smooth scroll is still halfway there
        let second = engine.next(7.5 * 900.0, 150.0).unwrap();
        assert_eq!(first.offset, 8.0 * 900.0);
        assert_eq!(second.offset, 9.0 * 900.0);
        assert_eq!(engine.active_index(), 1);

        let settle = engine.settle(9.0 * 900.0, 800.0);
        assert_eq!(engine.active_index(), 1);
        assert_eq!(settle.correction.map(|c| c.offset), Some(5.0 * 900.0));
    }

    #[test]
    fn rapid_prev_across_seam_keeps_moving_left() {
        let mut engine = engine(4);
        let first = engine.prev(4.0 * 900.0, 0.0).unwrap();
        let second = engine.prev(3.5 * 900.0, 150.0).unwrap();
        assert_eq!(first.offset, 3.0 * 900.0);
        assert_eq!(second.offset, 2.0 * 900.0);
        assert_eq!(engine.active_index(), 2);
    }

    #[test]
    fn in_flight_steps_stay_inside_the_strip() {
        let mut engine = engine(2);
        let mut offsets = Vec::new();
        for step in 0..8 {
            offsets.push(engine.next(0.0, step as f64 * 10.0).unwrap().offset);
        }
        assert!(offsets.iter().all(|offset| *offset < 6.0 * 900.0));
        assert_eq!(engine.active_index(), 0);

        let mut engine = self::engine(2);
        for step in 0..8 {
            let request = engine.prev(0.0, step as f64 * 10.0).unwrap();
            assert!(request.offset >= 0.0);
        }
        assert_eq!(engine.active_index(), 0);
    }

    #[test]
    fn settle_defers_while_navigating() {
        let mut engine = engine(4);
        engine.next(7.0 * 900.0, 0.0).unwrap();
        let settle = engine.settle(8.0 * 900.0, 300.0);
        assert_eq!(settle.correction, None);
        assert_eq!(settle.retry_after_ms, Some(300.0));

        // the lock expires on its own even if no scroll-end ever arrives
        let settle = engine.settle(8.0 * 900.0, 650.0);
        assert_eq!(engine.active_index(), 0);
        assert_eq!(settle.correction.map(|c| c.offset), Some(4.0 * 900.0));
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut engine = engine(4);
        assert_eq!(engine.go_to(4, 0.0), None);
        assert_eq!(engine.go_to(usize::MAX, 0.0), None);
        assert_eq!(engine.active_index(), 0);
        assert_eq!(engine.go_to(3, 0.0).map(|r| r.offset), Some(7.0 * 900.0));
    }

    #[test]
    fn reduced_motion_jumps_instantly() {
        let mut engine = CarouselEngine::new(4, CarouselOptions::solutions().with_reduced_motion(true)).unwrap();
        engine.initial_scroll(DESKTOP);
        assert_eq!(engine.next(3600.0, 0.0).map(|r| r.motion), Some(ScrollMotion::Instant));
    }

    #[test]
    fn resize_keeps_logical_card_in_middle_copy() {
        let mut engine = engine(4);
        // slot 10 (logical 2) at desktop width, shrink to tablet (680)
        let request = engine.resize(800.0, 10.0 * 900.0, 0.0).unwrap();
        assert_eq!(engine.active_index(), 2);
        assert_eq!(engine.item_width(), 680.0);
        assert_eq!(request, ScrollRequest { offset: 6.0 * 680.0, motion: ScrollMotion::Instant });
    }

    #[test]
    fn resize_skipped_while_navigating() {
        let mut engine = engine(4);
        engine.go_to(2, 0.0);
        assert_eq!(engine.resize(800.0, 0.0, 100.0), None);
        assert_eq!(engine.item_width(), 680.0);
        assert_eq!(engine.active_index(), 2);
    }

    #[test]
    fn resize_to_hidden_viewport_is_ignored() {
        let mut engine = engine(4);
        assert_eq!(engine.resize(0.0, 3600.0, 0.0), None);
        assert_eq!(engine.item_width(), 900.0);
    }

    #[test]
    fn single_item_never_leaves_index_zero() {
        let mut engine = engine(1);
        for round in 0..10 {
            let now = round as f64 * 1_000.0;
            let next = engine.next(900.0, now).unwrap();
            assert!(next.offset.is_finite());
            assert_eq!(engine.active_index(), 0);
            let prev = engine.prev(next.offset, now + 700.0).unwrap();
            assert!(prev.offset.is_finite());
            assert_eq!(engine.active_index(), 0);
            engine.settle(prev.offset, now + 900.0);
            assert_eq!(engine.active_index(), 0);
        }
    }

    #[test]
    fn bounded_mode_clamps_and_never_corrects() {
        let mut engine = CarouselEngine::new(4, CarouselOptions::preview()).unwrap();
        assert_eq!(engine.rendered_len(), 4);
        let start = engine.initial_scroll(400.0).unwrap();
        assert_eq!(start.offset, 0.0);

        let stride = 356.0;
        let settle = engine.settle(3.0 * stride + 10.0, 0.0);
        assert_eq!(engine.active_index(), 3);
        assert_eq!(settle.correction, None);

        engine.settle(40.0 * stride, 10.0);
        assert_eq!(engine.active_index(), 3);

        assert_eq!(engine.go_to(2, 20.0).map(|r| r.offset), Some(2.0 * stride));
        assert_eq!(engine.next(0.0, 30.0).map(|r| r.offset), Some(3.0 * stride));
        assert_eq!(engine.next(0.0, 40.0).map(|r| r.offset), Some(0.0));
        assert_eq!(engine.active_index(), 0);
    }

    #[test]
    fn keys_map_to_navigation() {
        assert_eq!(NavAction::from_key("ArrowRight", 4), Some(NavAction::Next));
        assert_eq!(NavAction::from_key("ArrowDown", 4), Some(NavAction::Next));
        assert_eq!(NavAction::from_key("ArrowLeft", 4), Some(NavAction::Prev));
        assert_eq!(NavAction::from_key("ArrowUp", 4), Some(NavAction::Prev));
        assert_eq!(NavAction::from_key("1", 4), Some(NavAction::GoTo(0)));
        assert_eq!(NavAction::from_key("4", 4), Some(NavAction::GoTo(3)));
        assert_eq!(NavAction::from_key("5", 4), None);
        assert_eq!(NavAction::from_key("0", 4), None);
        assert_eq!(NavAction::from_key("12", 20), None);
        assert_eq!(NavAction::from_key("Enter", 4), None);
        assert_eq!(NavAction::from_key("", 4), None);
    }

    #[test]
    fn swipe_needs_minimum_travel() {
        let mut swipe = SwipeTracker::default();
        swipe.start(300.0);
        swipe.track(200.0);
        assert_eq!(swipe.finish(), Some(NavAction::Next));

        swipe.start(100.0);
        swipe.track(180.0);
        assert_eq!(swipe.finish(), Some(NavAction::Prev));

        swipe.start(100.0);
        swipe.track(140.0);
        assert_eq!(swipe.finish(), None);

        // a tap without movement
        swipe.start(100.0);
        assert_eq!(swipe.finish(), None);
    }
}
