//! Switch sampling and main-loop mode dispatch.
//!
//! The loop body is: sample both switches once, map the sample to a mode,
//! run that mode to completion. Nothing preempts a running show, so a
//! switch change takes effect at the next iteration.

use embedded_hal::blocking::delay::DelayMs;

use crate::pattern::{Millis, Pattern};
use crate::player::Player;
use crate::show::{show_one, show_two};
use crate::OutputDriver;

/// One sample of the two panel switches, `true` = pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwitchState {
    pub sw0: bool,
    pub sw1: bool,
}

/// Source of switch samples.
pub trait SwitchReader {
    fn sample(&mut self) -> SwitchState;
}

/// What one loop iteration does, decided solely by the switch sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Neither switch pressed: blank the display.
    Off,
    /// Switch 0 pressed: run the thirty-second show.
    ShowOne,
    /// Switch 1 pressed: run the one-minute show.
    ShowTwo,
    /// Both pressed: leave the display exactly as the last iteration
    /// left it.
    Hold,
}

impl Mode {
    /// Map a switch sample to a mode.
    pub const fn from_switches(switches: SwitchState) -> Mode {
        match (switches.sw0, switches.sw1) {
            (false, false) => Mode::Off,
            (true, false) => Mode::ShowOne,
            (false, true) => Mode::ShowTwo,
            (true, true) => Mode::Hold,
        }
    }

    /// Console name.
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Off => "off",
            Mode::ShowOne => "show-one",
            Mode::ShowTwo => "show-two",
            Mode::Hold => "hold",
        }
    }
}

/// One main-loop iteration: sample, dispatch, report the chosen mode.
pub fn poll_once<P, D, S>(player: &mut Player<P, D>, switches: &mut S) -> Mode
where
    P: OutputDriver,
    D: DelayMs<Millis>,
    S: SwitchReader,
{
    let mode = Mode::from_switches(switches.sample());
    dispatch(player, mode);
    mode
}

/// Run a mode to completion.
///
/// `Off` writes the blank frame every iteration, so it is harmless to
/// repeat. `Hold` writes nothing and holds no delay.
pub fn dispatch<P, D>(player: &mut Player<P, D>, mode: Mode)
where
    P: OutputDriver,
    D: DelayMs<Millis>,
{
    match mode {
        Mode::Off => player.play(Pattern::AllOff, 0),
        Mode::ShowOne => show_one(player),
        Mode::ShowTwo => show_two(player),
        Mode::Hold => {}
    }
}
