use std::time::Duration;

#[cfg(feature = "gui")]
use raylib::prelude::*;

use crate::carousel::CarouselView;
use crate::constants::TRANSITION_DURATION;
use crate::state::{CarouselState, Direction};

/// Something that can display a rendered carousel and drive it frame by frame.
#[cfg(feature = "gui")]
pub trait Engine<'s> {
    fn initialize(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, view: CarouselView<'s>) -> bool;
    fn render_frame(&mut self, dt: f32, rl: &mut RaylibHandle, thread: &RaylibThread) -> bool;
}

/// Autoplay and navigation state over the panels of a carousel.
///
/// Time only moves when the caller feeds frame deltas to [`Autoplay::update`].
#[derive(Debug, Clone)]
pub struct Autoplay {
    // Seconds each panel stays up; `None` never auto-advances
    intervals: Vec<Option<f32>>,
    current: usize,
    state: CarouselState,
    paused: bool,
}

impl Autoplay {
    pub fn new(view: &CarouselView<'_>, default_interval: Duration) -> Self {
        Self::from_intervals(
            view.panels
                .iter()
                .map(|panel| panel.interval.resolve(default_interval))
                .collect(),
        )
    }

    pub fn from_intervals(intervals: Vec<Option<f32>>) -> Self {
        Self {
            intervals,
            current: 0,
            state: CarouselState::Displaying { elapsed: 0.0 },
            paused: false,
        }
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Index of the panel on display, or of the panel being left during a transition.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Freezes the display timer. Running transitions still finish.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Linear progress of the running transition in `0.0..=1.0`.
    pub fn transition_progress(&self) -> Option<f32> {
        match self.state {
            CarouselState::Transitioning { elapsed, .. } => Some((elapsed / TRANSITION_DURATION).min(1.0)),
            CarouselState::Displaying { .. } => None,
        }
    }

    /// Advances the clocks by `dt` seconds. Returns true when a transition completed.
    pub fn update(&mut self, dt: f32) -> bool {
        match self.state {
            CarouselState::Displaying { elapsed } => {
                if self.paused {
                    return false;
                }
                let elapsed = elapsed + dt;
                self.state = CarouselState::Displaying { elapsed };

                if let Some(Some(interval)) = self.intervals.get(self.current) {
                    if elapsed >= *interval {
                        let next = self.wrap(self.current + 1);
                        self.start_transition(next, Direction::Next);
                    }
                }
                false
            }
            CarouselState::Transitioning { from, to, direction, elapsed } => {
                let elapsed = elapsed + dt;
                if elapsed >= TRANSITION_DURATION {
                    self.current = to;
                    self.state = CarouselState::Displaying { elapsed: 0.0 };
                    true
                } else {
                    self.state = CarouselState::Transitioning { from, to, direction, elapsed };
                    false
                }
            }
        }
    }

    pub fn next(&mut self) -> bool {
        let target = self.wrap(self.current + 1);
        self.start_transition(target, Direction::Next)
    }

    pub fn prev(&mut self) -> bool {
        let target = self.wrap(self.current + self.len().saturating_sub(1));
        self.start_transition(target, Direction::Prev)
    }

    /// Jumps to `index`. Ignored while a transition runs, when out of range,
    /// or when `index` is already on display.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.len() {
            return false;
        }
        let direction = if index > self.current { Direction::Next } else { Direction::Prev };
        self.start_transition(index, direction)
    }

    fn start_transition(&mut self, to: usize, direction: Direction) -> bool {
        if matches!(self.state, CarouselState::Transitioning { .. }) || to == self.current || self.len() < 2 {
            return false;
        }
        log::trace!("carousel transition {} -> {}", self.current, to);
        self.state = CarouselState::Transitioning {
            from: self.current,
            to,
            direction,
            elapsed: 0.0,
        };
        true
    }

    fn wrap(&self, index: usize) -> usize {
        if self.is_empty() { 0 } else { index % self.len() }
    }
}
