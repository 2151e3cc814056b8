use embedded_hal::digital::v2::InputPin;

use crate::control::{SwitchReader, SwitchState};

/// The two panel switches, wired active-low behind pull-ups.
///
/// A pin read error reads as released; the real port pins cannot fail.
pub struct SwitchPair<A, B> {
    sw0: A,
    sw1: B,
}

impl<A, B> SwitchPair<A, B>
where
    A: InputPin,
    B: InputPin,
{
    pub fn new(sw0: A, sw1: B) -> Self {
        Self { sw0, sw1 }
    }
}

impl<A, B> SwitchReader for SwitchPair<A, B>
where
    A: InputPin,
    B: InputPin,
{
    fn sample(&mut self) -> SwitchState {
        SwitchState {
            sw0: self.sw0.is_low().unwrap_or(false),
            sw1: self.sw1.is_low().unwrap_or(false),
        }
    }
}
