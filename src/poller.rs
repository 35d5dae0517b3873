//! Fixed-tick polling loop driving a set of button channels.
//!
//! Provides [`ButtonPoller`], which owns one [`ButtonInput`] and one
//! [`ButtonChannel`] per button and samples them all in lockstep.
//!
//! The scheduling model is single-threaded fixed-tick polling. [`ButtonPoller::step`]
//! performs exactly one tick and never sleeps, so an event-driven host can call
//! it from a periodic timer callback. [`ButtonPoller::poll_all`] wraps it in a
//! blocking loop that sleeps one tick period between samples using an
//! `embedded-hal` delay.

use crate::channel::ButtonChannel;
use crate::input::ButtonInput;
use crate::timing::ButtonTiming;
use crate::triggers::{ChannelId, Triggers};
use embedded_hal::delay::DelayNs;

/// Outcome of a single polling tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollStatus {
    /// At least one channel is counting toward a trigger it has not reached yet.
    /// Sample again after one tick period.
    Pending,

    /// Every channel has either triggered during this call or is quiescent.
    /// The collected triggers can be handed to the application.
    Resolved,
}

/// Debounces a fixed set of buttons sampled at a fixed tick period.
///
/// Channels are numbered by their position in the input array. Every
/// channel shares the same [`ButtonTiming`].
///
/// # Type Parameters
/// * `B` - Input implementation type (must be same for all buttons)
/// * `N` - Number of buttons
pub struct ButtonPoller<B: ButtonInput, const N: usize> {
    inputs: [B; N],
    channels: [ButtonChannel; N],
    timing: ButtonTiming,
}

/// Poller for the two-button deployment.
pub type ButtonPoller2<B> = ButtonPoller<B, 2>;

/// Poller for the three-button deployment.
pub type ButtonPoller3<B> = ButtonPoller<B, 3>;

impl<B: ButtonInput, const N: usize> ButtonPoller<B, N> {
    /// Binds one input per channel and starts every channel released.
    ///
    /// Pins must already be configured as inputs with the pull matching
    /// their [`ButtonInput`] adapter.
    pub fn new(inputs: [B; N], timing: ButtonTiming) -> Self {
        Self {
            inputs,
            channels: [ButtonChannel::new(); N],
            timing,
        }
    }

    /// Creates a poller using [`ButtonTiming::DEFAULT`].
    pub fn with_default_timing(inputs: [B; N]) -> Self {
        Self::new(inputs, ButtonTiming::DEFAULT)
    }

    /// Returns every channel to `Released` with a cleared counter.
    pub fn reset(&mut self) {
        for channel in self.channels.iter_mut() {
            channel.reset();
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("button poller reset, {} channels", N);
    }

    /// Samples every channel once, in channel order.
    ///
    /// Triggers are OR-ed into `triggers`; flags already set are left alone.
    /// Returns [`PollStatus::Resolved`] once every channel has either
    /// triggered in `triggers` or is currently quiescent.
    pub fn step(&mut self, triggers: &mut Triggers<N>) -> PollStatus {
        for (index, (input, channel)) in self
            .inputs
            .iter_mut()
            .zip(self.channels.iter_mut())
            .enumerate()
        {
            let is_active = input.is_active();
            if channel.advance(is_active, &self.timing) {
                triggers.set(ChannelId(index));

                #[cfg(feature = "defmt")]
                defmt::trace!("button {} triggered, now {}", index, channel.state());
            }
        }

        let resolved = self
            .channels
            .iter()
            .enumerate()
            .all(|(index, channel)| triggers.is_triggered(ChannelId(index)) || channel.is_quiescent());

        if resolved {
            PollStatus::Resolved
        } else {
            PollStatus::Pending
        }
    }

    /// Blocks until every channel has triggered or gone quiet, then returns the triggers.
    ///
    /// Samples immediately, then sleeps one tick period before each further
    /// sample. Call this once per main-loop iteration to keep auto-repeat
    /// serviced: a held button keeps producing a trigger every repeat interval.
    pub fn poll_all<D: DelayNs>(&mut self, delay: &mut D) -> Triggers<N> {
        let mut triggers = Triggers::new();

        while self.step(&mut triggers) == PollStatus::Pending {
            delay.delay_us(self.timing.tick_period_us());
        }

        triggers
    }

    /// Returns a channel's state machine, or `None` for an unknown id.
    pub fn channel(&self, id: ChannelId) -> Option<&ButtonChannel> {
        self.channels.get(id.0)
    }

    /// Returns all channel state machines in channel order.
    pub fn channels(&self) -> &[ButtonChannel; N] {
        &self.channels
    }

    /// Returns the shared timing configuration.
    pub fn timing(&self) -> &ButtonTiming {
        &self.timing
    }

    /// Returns the number of channels.
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns true if the poller has no channels.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Consumes the poller and hands back the inputs.
    pub fn release(self) -> [B; N] {
        self.inputs
    }
}
