//! Plays pattern step tables against the display and delay seams.

use embedded_hal::blocking::delay::DelayMs;

use crate::pattern::{Millis, Pattern};
use crate::OutputDriver;

/// Drives one display through authored patterns, blocking for each hold.
pub struct Player<P, D> {
    port: P,
    delay: D,
}

impl<P, D> Player<P, D>
where
    P: OutputDriver,
    D: DelayMs<Millis>,
{
    pub fn new(port: P, delay: D) -> Player<P, D> {
        Player { port, delay }
    }

    /// Play one primitive start to finish.
    ///
    /// Every step writes its frame first, then blocks for the resolved
    /// hold. Steps that resolve to zero rewrite the display and move
    /// straight on without touching the delay source.
    pub fn play(&mut self, pattern: Pattern, multiplier: u8) {
        for step in pattern.steps() {
            self.port.write(step.frame);
            let ms = step.hold.resolve(multiplier);
            if ms > 0 {
                self.delay.delay_ms(ms);
            }
        }
    }

    /// Plain blocking pause, for breathing room between primitives.
    pub fn pause(&mut self, ms: Millis) {
        if ms > 0 {
            self.delay.delay_ms(ms);
        }
    }
}
