//! Per-button debounce and auto-repeat state machine.
//!
//! Provides [`ButtonChannel`], which consumes one active/inactive sample per
//! tick and reports when a trigger fires. A channel never touches hardware;
//! the [`ButtonPoller`](crate::ButtonPoller) feeds it samples.

use crate::timing::ButtonTiming;

/// The debounce phase of a single button.
///
/// A held button advances forward through these states. Any inactive
/// sample returns it to `Released` immediately; release edges are not
/// debounced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    /// Button not pressed.
    #[default]
    Released,
    /// Contact went active; waiting for the settle window to pass.
    Filtering,
    /// Press accepted; waiting for the first auto-repeat.
    DelayBeforeRepeat,
    /// Auto-repeating at the repeat interval for as long as the button is held.
    RepeatWait,
}

/// One button's debounce state and sample counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonChannel {
    state: ButtonState,
    sample_count: u16,
}

impl ButtonChannel {
    /// Creates a released channel with a cleared counter.
    pub const fn new() -> Self {
        Self {
            state: ButtonState::Released,
            sample_count: 0,
        }
    }

    /// Feeds one sample into the state machine.
    ///
    /// Returns `true` on the tick a trigger fires: once when the press is
    /// accepted, once after the initial repeat delay, then once per repeat
    /// interval while the button stays held. The counter restarts from zero
    /// after every trigger, so each repeat is timed from the previous one.
    pub fn advance(&mut self, is_active: bool, timing: &ButtonTiming) -> bool {
        if !is_active {
            self.reset();
            return false;
        }

        self.sample_count = self.sample_count.saturating_add(1);

        match self.state {
            ButtonState::Released => {
                self.state = ButtonState::Filtering;
                false
            }
            ButtonState::Filtering => {
                self.fire_at(timing.filter_ticks(), ButtonState::DelayBeforeRepeat)
            }
            ButtonState::DelayBeforeRepeat => {
                self.fire_at(timing.initial_repeat_delay_ticks(), ButtonState::RepeatWait)
            }
            ButtonState::RepeatWait => {
                self.fire_at(timing.repeat_interval_ticks(), ButtonState::RepeatWait)
            }
        }
    }

    fn fire_at(&mut self, threshold: u16, next: ButtonState) -> bool {
        if self.sample_count != threshold {
            return false;
        }

        self.sample_count = 0;
        self.state = next;
        true
    }

    /// Returns the channel to `Released` with a cleared counter.
    pub fn reset(&mut self) {
        self.state = ButtonState::Released;
        self.sample_count = 0;
    }

    /// Returns the current debounce phase.
    #[inline]
    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Returns the number of active samples since the last state entry or trigger.
    #[inline]
    pub fn sample_count(&self) -> u16 {
        self.sample_count
    }

    /// Returns true if no activity is being counted (released, or just triggered).
    #[inline]
    pub fn is_quiescent(&self) -> bool {
        self.sample_count == 0
    }

    /// Returns true while the button is anywhere past `Released`.
    #[inline]
    pub fn is_held(&self) -> bool {
        self.state != ButtonState::Released
    }
}
