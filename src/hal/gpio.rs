//! Port setup and pin handles for the flasher board.
//!
//! Wiring:
//!   PC0..PC5  ring LEDs 1..6, active low
//!   PA0, PA5  end LEDs 7 and 8, active low
//!   PA2, PA4  panel switches 0 and 1, active low, internal pull-ups
//!
//! [`configure`] claims the two ports once at reset and hands back zero
//! sized pin handles; all later register access goes through those.

use core::convert::Infallible;

use avr_device::atmega128a::{Peripherals, PORTA, PORTC};
use embedded_hal::digital::v2::InputPin;

use crate::led::{Frame, ENDS_MASK};
use crate::OutputDriver;

// Pull-up bits that every whole-port write to PORTA must keep set.
const SWITCH_PULLUPS: u8 = (1 << 2) | (1 << 4);

// Unused PORTA output pins, parked at the inactive (high) level.
const ENDS_IDLE_HIGH: u8 = !(ENDS_MASK | SWITCH_PULLUPS);

/// Everything [`configure`] hands back.
pub struct Pins {
    pub display: DisplayPins,
    pub switch0: Switch0,
    pub switch1: Switch1,
}

/// One-time reset configuration: comparator and ADC off so the pins stay
/// digital, LED pins driven to the all-off level before their direction
/// flips to output, switch pins left as inputs with pull-ups on.
pub fn configure(dp: &Peripherals) -> Pins {
    // All-high is all LEDs off (active low) and pull-ups on the inputs.
    dp.PORTA.porta.write(|w| unsafe { w.bits(0xff) });
    dp.PORTC.portc.write(|w| unsafe { w.bits(0xff) });
    dp.PORTA.ddra.write(|w| unsafe { w.bits(!SWITCH_PULLUPS) });
    dp.PORTC.ddrc.write(|w| unsafe { w.bits(0xff) });

    // Analog functions off
    dp.AC.acsr.modify(|_, w| w.acd().set_bit());
    dp.ADC.adcsra.modify(|_, w| w.aden().clear_bit());

    Pins {
        display: DisplayPins { _claimed: () },
        switch0: SwitchPin { _claimed: () },
        switch1: SwitchPin { _claimed: () },
    }
}

/// The eight LED pins, written as one frame.
///
/// Both ports are written whole, one store each, so a frame never shows
/// half-applied. The write inverts the frame (bit set = pin low) and
/// re-asserts the pull-up and idle bits PORTA shares with the LEDs.
pub struct DisplayPins {
    _claimed: (),
}

impl OutputDriver for DisplayPins {
    fn write(&mut self, frame: Frame) {
        let ring = !frame.ring;
        let ends = SWITCH_PULLUPS | ENDS_IDLE_HIGH | (ENDS_MASK & !frame.ends);
        unsafe {
            (*PORTC::ptr()).portc.write(|w| w.bits(ring));
            (*PORTA::ptr()).porta.write(|w| w.bits(ends));
        }
    }
}

/// One switch input on PORTA, active low.
pub struct SwitchPin<const P: u8> {
    _claimed: (),
}

pub type Switch0 = SwitchPin<2>;
pub type Switch1 = SwitchPin<4>;

impl<const P: u8> InputPin for SwitchPin<P> {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Self::Error> {
        let bits = unsafe { (*PORTA::ptr()).pina.read().bits() };
        Ok(bits & (1 << P) != 0)
    }

    fn is_low(&self) -> Result<bool, Self::Error> {
        Ok(!self.is_high()?)
    }
}
