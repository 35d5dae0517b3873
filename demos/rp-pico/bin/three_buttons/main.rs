//! Three-button deployment: menu navigation.
//!
//! GPIO6 moves up, GPIO5 moves down, GPIO4 selects. Select auto-repeats like
//! the others; the menu just re-announces the same entry.

#![no_std]
#![no_main]

use embedded_hal::digital::OutputPin;
use panic_halt as _;
use rp_pico::entry;
use rtt_target::{rprintln, rtt_init_print};

use button_repeat::{ButtonPoller3, ChannelId};
use rp_pico_demos::board;

const UP: ChannelId = ChannelId(0);
const DOWN: ChannelId = ChannelId(1);
const SELECT: ChannelId = ChannelId(2);

const MENU: [&str; 4] = ["Brightness", "Volume", "Timer", "Exit"];

#[entry]
fn main() -> ! {
    rtt_init_print!();

    let board::Board { pins, mut timer } = board::init();

    let mut led_pin = pins.led.into_push_pull_output();

    let mut poller = ButtonPoller3::with_default_timing([
        board::button(pins.gpio6),
        board::button(pins.gpio5),
        board::button(pins.gpio4),
    ]);

    let mut cursor = 0usize;
    rprintln!("three_buttons ready, > {}", MENU[cursor]);

    loop {
        let triggers = poller.poll_all(&mut timer);

        if triggers.is_triggered(UP) {
            cursor = (cursor + MENU.len() - 1) % MENU.len();
            rprintln!("> {}", MENU[cursor]);
        }
        if triggers.is_triggered(DOWN) {
            cursor = (cursor + 1) % MENU.len();
            rprintln!("> {}", MENU[cursor]);
        }

        // LED mirrors the select button while it is being reported
        if triggers.is_triggered(SELECT) {
            led_pin.set_high().unwrap();
            rprintln!("selected {}", MENU[cursor]);
        } else {
            led_pin.set_low().unwrap();
        }
    }
}
