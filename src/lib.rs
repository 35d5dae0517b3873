#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ButtonChannel`**: Debounce and auto-repeat state machine for one button
//! - **`ButtonState`**: The phase a channel is in (`Released`, `Filtering`, `DelayBeforeRepeat`, `RepeatWait`)
//! - **`ButtonTiming`**: Settle window, initial repeat delay and repeat interval, in ticks
//! - **`ButtonPoller`**: Samples N buttons in lockstep and collects their triggers
//! - **`ButtonInput`**: Trait to implement for your button hardware
//! - **`ActiveLow` / `ActiveHigh`**: `embedded-hal` input pin adapters
//! - **`Triggers`**: One trigger flag per channel, returned from each poll
//!
//! Timing is counted in sample ticks. With the default 1 ms tick, a press is
//! reported after 100 ms of stable contact, repeats first after another second,
//! and then every 200 ms while held.

pub mod channel;
pub mod input;
pub mod poller;
pub mod timing;
pub mod triggers;

pub use channel::{ButtonChannel, ButtonState};
pub use input::{ActiveHigh, ActiveLow, ButtonInput};
pub use poller::{ButtonPoller, ButtonPoller2, ButtonPoller3, PollStatus};
pub use timing::{ButtonTiming, TimingError};
pub use triggers::{ChannelId, Triggers};
