//! Flash pattern firmware for an eight-LED, two-switch ATmega128 board.
//!
//! Everything that decides what the LEDs do lives in this library and is
//! platform independent: patterns are static step tables ([`pattern`]),
//! the two shows are fixed scripts over them ([`show`]), and the main loop
//! maps the switch pair to a mode every iteration ([`control`]). The seams
//! to hardware are [`OutputDriver`] for the display and the embedded-hal
//! millisecond delay for time; [`trace`] records both for host tests and
//! the preview binary.
//!
//! The `atmega128` feature pulls in the register-level bindings under
//! [`hal`] for the firmware binary. Without it the crate builds anywhere.

#![no_std]

pub mod config;
pub mod control;
pub mod drivers;
#[cfg(feature = "atmega128")]
pub mod hal;
pub mod led;
pub mod pattern;
pub mod player;
pub mod show;
pub mod trace;

pub use control::{Mode, SwitchReader, SwitchState};
pub use led::{Frame, Led, Port};
pub use pattern::{Hold, Millis, Pattern, Step};
pub use player::Player;

/// Display output seam.
///
/// One call applies a whole frame; implementations must never show a
/// half-written display. Implemented by the port writer in [`hal`] and by
/// the recorder in [`trace`].
pub trait OutputDriver {
    fn write(&mut self, frame: Frame);
}
