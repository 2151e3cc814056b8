//! The two authored shows.
//!
//! Shows are fixed scripts over the pattern primitives. Several loops feed
//! their own counter through as the speed multiplier, so repeats of the
//! same primitive run visibly faster. The scripts are kept exactly as
//! authored, quirks included.

use embedded_hal::blocking::delay::DelayMs;

use crate::pattern::{Millis, Pattern};
use crate::player::Player;
use crate::OutputDriver;

/// Roughly thirty seconds end to end.
pub fn show_one<P, D>(player: &mut Player<P, D>)
where
    P: OutputDriver,
    D: DelayMs<Millis>,
{
    for i in 0..3 {
        player.play(Pattern::Circle, i);
        for j in 0..3 {
            player.play(Pattern::Circle, j);
            player.play(Pattern::AllOn, 0);
        }
        player.play(Pattern::Swipe, 0);
    }
    player.play(Pattern::FlashAll, 0);
    player.play(Pattern::FlashAlternating, 0);
    player.play(Pattern::EndToEnd, 0);
    player.play(Pattern::DoublePair, 0);
    player.play(Pattern::Swipe, 0);
    player.play(Pattern::EndToEnd, 0);
    player.play(Pattern::RotateDouble, 0);
    player.play(Pattern::Swipe, 0);
    player.play(Pattern::Crash, 0);
    player.play(Pattern::RotateDouble, 0);
}

/// Roughly a minute end to end.
pub fn show_two<P, D>(player: &mut Player<P, D>)
where
    P: OutputDriver,
    D: DelayMs<Millis>,
{
    player.play(Pattern::FlashAll, 0);
    for i in 0..2 {
        player.play(Pattern::Diagonal, i);
        player.play(Pattern::AllOn, 0);
        player.pause(100);
    }
    for i in 0..3 {
        player.play(Pattern::Diagonal, i);
        player.play(Pattern::Swipe, 0);
        player.play(Pattern::DoublePair, 0);
        // The circle repeats run at the outer loop's speed here, unlike
        // the nested loop in show one.
        for _ in 0..3 {
            player.play(Pattern::Circle, i);
        }
        player.play(Pattern::RotateDoubleRev, 0);
    }
    for _ in 0..5 {
        player.play(Pattern::RotateDouble, 0);
    }
    for _ in 0..2 {
        player.play(Pattern::Swipe, 0);
        for j in 0..4 {
            player.play(Pattern::Circle, j);
            player.play(Pattern::AlternateDouble, j);
        }
        player.play(Pattern::Crash, 0);
        player.play(Pattern::FlashAll, 0);
    }
    player.play(Pattern::Diagonal, 0);
    player.play(Pattern::FlashAlternating, 0);
    player.play(Pattern::Circle, 0);
    player.play(Pattern::EndToEnd, 0);
    player.play(Pattern::FlashAll, 0);
}
