//! Two-button deployment: up/down counter.
//!
//! Buttons on GPIO6 (up) and GPIO5 (down), wired to ground. Holding a button
//! repeats after one second, then five times per second.

#![no_std]
#![no_main]

use panic_halt as _;
use rp_pico::entry;
use rtt_target::{rprintln, rtt_init_print};

use button_repeat::{ButtonPoller2, ChannelId};
use rp_pico_demos::board;

const UP: ChannelId = ChannelId(0);
const DOWN: ChannelId = ChannelId(1);

#[entry]
fn main() -> ! {
    rtt_init_print!();

    let board::Board { pins, mut timer } = board::init();

    let mut poller = ButtonPoller2::with_default_timing([
        board::button(pins.gpio6),
        board::button(pins.gpio5),
    ]);

    let mut value: i32 = 0;
    rprintln!("two_buttons ready, value = {}", value);

    loop {
        let triggers = poller.poll_all(&mut timer);

        if triggers.is_triggered(UP) {
            value = value.saturating_add(1);
        }
        if triggers.is_triggered(DOWN) {
            value = value.saturating_sub(1);
        }
        if triggers.any() {
            rprintln!("value = {}", value);
        }
    }
}
