//! Shared test infrastructure for button-repeat integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use core::ops::Range;

use button_repeat::{ButtonInput, ButtonPoller, Triggers};
use embedded_hal::delay::DelayNs;

// ============================================================================
// Mock Clock
// ============================================================================

/// Tick counter shared by scripted inputs and the delay.
///
/// Starts at tick 1 so the n-th sample of a run happens at tick n.
pub struct MockClock {
    tick: Cell<u32>,
}

impl MockClock {
    pub fn new() -> Self {
        Self { tick: Cell::new(1) }
    }

    pub fn now(&self) -> u32 {
        self.tick.get()
    }

    pub fn advance(&self) {
        self.tick.set(self.tick.get() + 1);
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Delay that advances the mock clock by one tick per sleep.
pub struct ClockDelay<'a> {
    clock: &'a MockClock,
    sleeps: u32,
    last_us: u32,
}

impl<'a> ClockDelay<'a> {
    pub fn new(clock: &'a MockClock) -> Self {
        Self {
            clock,
            sleeps: 0,
            last_us: 0,
        }
    }

    pub fn sleeps(&self) -> u32 {
        self.sleeps
    }

    pub fn last_us(&self) -> u32 {
        self.last_us
    }
}

impl DelayNs for ClockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.sleeps += 1;
        self.last_us = ns / 1000;
        self.clock.advance();
    }
}

// ============================================================================
// Scripted Button
// ============================================================================

/// Button that is active during the given tick ranges.
pub struct ScriptedButton<'a> {
    clock: &'a MockClock,
    presses: &'a [Range<u32>],
    reads: u32,
}

impl<'a> ScriptedButton<'a> {
    pub fn new(clock: &'a MockClock, presses: &'a [Range<u32>]) -> Self {
        Self {
            clock,
            presses,
            reads: 0,
        }
    }

    pub fn reads(&self) -> u32 {
        self.reads
    }
}

impl ButtonInput for ScriptedButton<'_> {
    fn is_active(&mut self) -> bool {
        self.reads += 1;
        let now = self.clock.now();
        self.presses.iter().any(|press| press.contains(&now))
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Runs a main loop calling `poll_all` until the clock passes `last_tick`.
///
/// One tick elapses between calls, standing in for the application's own
/// work. Returns the tick each call resolved at, for calls that triggered.
pub fn run_main_loop<B: ButtonInput, const N: usize>(
    poller: &mut ButtonPoller<B, N>,
    clock: &MockClock,
    last_tick: u32,
) -> Vec<(u32, [bool; N])> {
    let mut delay = ClockDelay::new(clock);
    let mut log = Vec::new();

    while clock.now() <= last_tick {
        let triggers = poller.poll_all(&mut delay);
        if triggers.any() {
            log.push((clock.now(), triggers.into_array()));
        }
        clock.advance();
    }

    log
}

/// Drives `step` once per tick with fresh flags, returning the exact ticks
/// at which `channel` fired.
pub fn trigger_ticks<B: ButtonInput, const N: usize>(
    poller: &mut ButtonPoller<B, N>,
    clock: &MockClock,
    channel: usize,
    last_tick: u32,
) -> Vec<u32> {
    let mut fired = Vec::new();

    while clock.now() <= last_tick {
        let mut triggers = Triggers::<N>::new();
        poller.step(&mut triggers);
        if triggers.as_array()[channel] {
            fired.push(clock.now());
        }
        clock.advance();
    }

    fired
}
