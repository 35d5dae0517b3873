//! Hardware input abstraction for button contacts.

use embedded_hal::digital::InputPin;

/// Trait for abstracting a button's raw contact.
///
/// Implement this for anything that can tell whether a button's contact is
/// currently active. Implementations handle any hardware errors internally -
/// this method cannot fail.
pub trait ButtonInput {
    /// Returns true if the contact is electrically active right now.
    fn is_active(&mut self) -> bool;
}

impl<T: ButtonInput + ?Sized> ButtonInput for &mut T {
    fn is_active(&mut self) -> bool {
        (**self).is_active()
    }
}

/// Button wired to ground with a pull-up: electrically low means pressed.
///
/// Configure the pin as a pulled-up input through your HAL before wrapping it.
/// A failed read counts as released.
#[derive(Debug)]
pub struct ActiveLow<P> {
    pin: P,
}

impl<P: InputPin> ActiveLow<P> {
    /// Wraps a pulled-up input pin.
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Returns the wrapped pin.
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: InputPin> ButtonInput for ActiveLow<P> {
    fn is_active(&mut self) -> bool {
        self.pin.is_low().unwrap_or(false)
    }
}

/// Button wired to the supply with a pull-down: electrically high means pressed.
///
/// A failed read counts as released.
#[derive(Debug)]
pub struct ActiveHigh<P> {
    pin: P,
}

impl<P: InputPin> ActiveHigh<P> {
    /// Wraps a pulled-down input pin.
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Returns the wrapped pin.
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: InputPin> ButtonInput for ActiveHigh<P> {
    fn is_active(&mut self) -> bool {
        self.pin.is_high().unwrap_or(false)
    }
}
