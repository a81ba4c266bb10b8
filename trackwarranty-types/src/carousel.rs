/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! The self-advancing product demo: four steps, `1 → 2 → 3 → 4 → 1`.

pub const STEP_COUNT: u8 = 4;
pub const ADVANCE_INTERVAL_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoCarousel {
    active: u8,
}

impl Default for DemoCarousel {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoCarousel {
    pub fn new() -> Self {
        Self { active: 1 }
    }

    /// The visible step, `1..=STEP_COUNT`.
    pub fn active(&self) -> u8 {
        self.active
    }

    pub fn is_active(&self, step: u8) -> bool {
        self.active == step
    }

    /// Periodic advance. Runs on its fixed schedule whether or not the
    /// visitor picked a step in between.
    pub fn tick(&mut self) {
        self.active = if self.active >= STEP_COUNT {
            1
        } else {
            self.active + 1
        };
    }

    /// Jump to `step`. Out-of-range steps are ignored; returns whether the
    /// state changed.
    pub fn select(&mut self, step: u8) -> bool {
        if !(1..=STEP_COUNT).contains(&step) || step == self.active {
            return false;
        }
        self.active = step;
        true
    }

    pub fn steps() -> impl Iterator<Item = u8> {
        1..=STEP_COUNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_step() {
        assert_eq!(DemoCarousel::new().active(), 1);
    }

    #[test]
    fn four_ticks_wrap_back_to_start() {
        let mut carousel = DemoCarousel::new();
        let mut seen = Vec::new();
        for _ in 0..STEP_COUNT {
            carousel.tick();
            seen.push(carousel.active());
        }
        assert_eq!(seen, vec![2, 3, 4, 1]);
        assert_eq!(carousel, DemoCarousel::new());
    }

    #[test]
    fn select_overrides_then_tick_continues_from_selection() {
        let mut carousel = DemoCarousel::new();
        assert!(carousel.select(3));
        assert!(carousel.is_active(3));
        carousel.tick();
        assert_eq!(carousel.active(), 4);
        carousel.tick();
        assert_eq!(carousel.active(), 1);
    }

    #[test]
    fn select_rejects_out_of_range_and_noop() {
        let mut carousel = DemoCarousel::new();
        assert!(!carousel.select(0));
        assert!(!carousel.select(5));
        assert!(!carousel.select(1));
        assert_eq!(carousel.active(), 1);
    }

    #[test]
    fn steps_cover_all_states() {
        assert_eq!(DemoCarousel::steps().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }
}
