//! Pico board bring-up shared by the demo binaries.

use button_repeat::ActiveLow;
use rp_pico::hal::{
    self, Sio, Timer,
    clocks::init_clocks_and_plls,
    gpio::{DynPinId, FunctionSioInput, Pin, PinId, PullUp, ValidFunction},
    pac,
    watchdog::Watchdog,
};

/// A push button wired from a GPIO to ground, read through the internal pull-up.
pub type Button = ActiveLow<Pin<DynPinId, FunctionSioInput, PullUp>>;

/// Peripherals the demos need after bring-up.
pub struct Board {
    pub pins: rp_pico::Pins,
    pub timer: Timer,
}

/// Configures clocks (125 MHz), GPIO banks and the 1 MHz timer.
pub fn init() -> Board {
    let mut pac = pac::Peripherals::take().unwrap();

    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    let clocks = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    let sio = Sio::new(pac.SIO);

    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let timer = hal::Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

    Board { pins, timer }
}

/// Turns any GPIO into a pulled-up, type-erased button input.
pub fn button<I, F, P>(pin: Pin<I, F, P>) -> Button
where
    I: PinId + ValidFunction<FunctionSioInput>,
    F: hal::gpio::Function,
    P: hal::gpio::PullType,
{
    ActiveLow::new(pin.into_pull_up_input().into_dyn_pin())
}
