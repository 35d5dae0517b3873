//! Integration tests for ButtonChannel

use button_repeat::{ButtonChannel, ButtonState, ButtonTiming};

const TIMING: ButtonTiming = ButtonTiming::DEFAULT;

/// Feeds a level per tick and returns the 1-based ticks that triggered.
fn feed(channel: &mut ButtonChannel, levels: impl IntoIterator<Item = bool>) -> Vec<u32> {
    levels
        .into_iter()
        .zip(1u32..)
        .filter_map(|(level, tick)| channel.advance(level, &TIMING).then_some(tick))
        .collect()
}

fn held(ticks: usize) -> impl Iterator<Item = bool> {
    core::iter::repeat_n(true, ticks)
}

#[test]
fn press_of_exactly_filter_ticks_triggers_once_on_last_tick() {
    let mut channel = ButtonChannel::new();
    let fired = feed(&mut channel, held(100));
    assert_eq!(fired, vec![100]);

    // Nothing more until the initial repeat delay has elapsed
    let fired = feed(&mut channel, held(999));
    assert!(fired.is_empty());
    assert_eq!(channel.state(), ButtonState::DelayBeforeRepeat);
    assert!(channel.advance(true, &TIMING));
    assert_eq!(channel.state(), ButtonState::RepeatWait);
}

#[test]
fn bounce_shorter_than_filter_window_is_suppressed() {
    let mut channel = ButtonChannel::new();

    // Contact chatter: bursts of activity shorter than the settle window
    for burst in [1usize, 5, 37, 99] {
        let fired = feed(&mut channel, held(burst).chain([false]));
        assert!(fired.is_empty(), "burst of {} ticks triggered", burst);
        assert_eq!(channel.state(), ButtonState::Released);
    }
}

#[test]
fn held_button_triggers_at_press_delay_then_every_interval() {
    let mut channel = ButtonChannel::new();
    let fired = feed(&mut channel, held(2500));

    let mut expected: Vec<u32> = vec![100, 1100];
    expected.extend((1300..=2500).step_by(200));
    assert_eq!(fired, expected);
}

#[test]
fn release_resets_from_any_state() {
    let checkpoints = [
        (1, ButtonState::Filtering),
        (99, ButtonState::Filtering),
        (100, ButtonState::DelayBeforeRepeat),
        (500, ButtonState::DelayBeforeRepeat),
        (1100, ButtonState::RepeatWait),
        (1234, ButtonState::RepeatWait),
    ];

    for (ticks, state) in checkpoints {
        let mut channel = ButtonChannel::new();
        feed(&mut channel, held(ticks));
        assert_eq!(channel.state(), state);

        assert!(!channel.advance(false, &TIMING));
        assert_eq!(channel.state(), ButtonState::Released);
        assert_eq!(channel.sample_count(), 0);
    }
}

#[test]
fn hold_then_release_before_second_repeat_gives_two_triggers() {
    let mut channel = ButtonChannel::new();

    // Active for ticks 1..=1299, released on tick 1300
    let fired = feed(&mut channel, held(1299).chain([false]));

    assert_eq!(fired, vec![100, 1100]);
    assert_eq!(channel.state(), ButtonState::Released);
    assert_eq!(channel.sample_count(), 0);
}

#[test]
fn repress_after_release_starts_a_new_press() {
    let mut channel = ButtonChannel::new();
    let fired = feed(&mut channel, held(150).chain([false]).chain(held(100)));
    assert_eq!(fired, vec![100, 251]);
}

#[test]
fn custom_timing_changes_thresholds() {
    let timing = ButtonTiming::new(3, 5, 2, 500).unwrap();
    let mut channel = ButtonChannel::new();

    let fired: Vec<u32> = (1u32..=14)
        .filter(|_| channel.advance(true, &timing))
        .collect();

    // settle 3, first repeat 5 later, then every 2
    assert_eq!(fired, vec![3, 8, 10, 12, 14]);
}
