//! Flash pattern primitives as static step tables.
//!
//! Each primitive is an ordered list of steps. A step writes its frame to
//! the display and then holds it for the step's dwell time. Hold times are
//! authored content: [`Hold::Scaled`] entries shorten as the caller's speed
//! multiplier rises, [`Hold::Fixed`] entries never change. The tables
//! reproduce the board's original sequences exactly, including zero-hold
//! rewrites of the same frame and steps that leave one port's previous
//! value showing.

use crate::config::MULTIPLIER_STEP_MS;
use crate::led::Led::{Led1, Led2, Led3, Led4, Led5, Led6, Led7, Led8};
use crate::led::{Frame, Led};

/// Milliseconds. All timing in the system is expressed in these.
pub type Millis = u16;

/// Dwell time of one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hold {
    /// Held this long at every speed.
    Fixed(Millis),
    /// Shortened by [`MULTIPLIER_STEP_MS`] per multiplier step, floored
    /// at zero.
    Scaled(Millis),
}

impl Hold {
    /// Resolve to a concrete dwell for the given speed multiplier.
    pub const fn resolve(self, multiplier: u8) -> Millis {
        match self {
            Hold::Fixed(ms) => ms,
            Hold::Scaled(ms) => ms.saturating_sub(MULTIPLIER_STEP_MS * multiplier as Millis),
        }
    }
}

/// One authored step: write `frame`, dwell for `hold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub frame: Frame,
    pub hold: Hold,
}

impl Step {
    /// Step whose dwell ignores the speed multiplier.
    pub const fn fixed(frame: Frame, ms: Millis) -> Step {
        Step {
            frame,
            hold: Hold::Fixed(ms),
        }
    }

    /// Step whose dwell shortens with the speed multiplier.
    pub const fn scaled(frame: Frame, ms: Millis) -> Step {
        Step {
            frame,
            hold: Hold::Scaled(ms),
        }
    }
}

/// The authored pattern primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Light everything, leave it lit.
    AllOn,
    /// Darken everything, leave it dark.
    AllOff,
    /// Single LED around the ring and back, end LEDs untouched.
    Circle,
    /// Horizontal bar wiped across the board and back.
    Swipe,
    /// One lit pair walked end to end and back.
    EndToEnd,
    /// Two complementary four-LED groups, one blink each.
    DoublePair,
    /// Opposite pairs around the ring, then a triple inner rotation.
    RotateDouble,
    /// Short reverse rotation of opposite pairs.
    RotateDoubleRev,
    /// Adjacent ring pair stepped around the ring.
    AlternateDouble,
    /// Diagonal sweep corner to corner and back.
    Diagonal,
    /// All LEDs blinked with shrinking period.
    FlashAll,
    /// Odd ring LEDs, then even ring LEDs.
    FlashAlternating,
    /// End LEDs swell to a full-board flash and fall back, then stutter.
    Crash,
}

impl Pattern {
    /// Every primitive, for table-wide checks.
    pub const ALL: [Pattern; 13] = [
        Pattern::AllOn,
        Pattern::AllOff,
        Pattern::Circle,
        Pattern::Swipe,
        Pattern::EndToEnd,
        Pattern::DoublePair,
        Pattern::RotateDouble,
        Pattern::RotateDoubleRev,
        Pattern::AlternateDouble,
        Pattern::Diagonal,
        Pattern::FlashAll,
        Pattern::FlashAlternating,
        Pattern::Crash,
    ];

    /// The authored step table for this primitive.
    pub fn steps(self) -> &'static [Step] {
        match self {
            Pattern::AllOn => &ALL_ON,
            Pattern::AllOff => &ALL_OFF,
            Pattern::Circle => &CIRCLE,
            Pattern::Swipe => &SWIPE,
            Pattern::EndToEnd => &END_TO_END,
            Pattern::DoublePair => &DOUBLE_PAIR,
            Pattern::RotateDouble => &ROTATE_DOUBLE,
            Pattern::RotateDoubleRev => &ROTATE_DOUBLE_REV,
            Pattern::AlternateDouble => &ALTERNATE_DOUBLE,
            Pattern::Diagonal => &DIAGONAL,
            Pattern::FlashAll => &FLASH_ALL,
            Pattern::FlashAlternating => &FLASH_ALTERNATING,
            Pattern::Crash => &CRASH,
        }
    }

    /// Console name.
    pub const fn name(self) -> &'static str {
        match self {
            Pattern::AllOn => "all-on",
            Pattern::AllOff => "all-off",
            Pattern::Circle => "circle",
            Pattern::Swipe => "swipe",
            Pattern::EndToEnd => "end-to-end",
            Pattern::DoublePair => "double-pair",
            Pattern::RotateDouble => "rotate-double",
            Pattern::RotateDoubleRev => "rotate-double-rev",
            Pattern::AlternateDouble => "alternate-double",
            Pattern::Diagonal => "diagonal",
            Pattern::FlashAll => "flash-all",
            Pattern::FlashAlternating => "flash-alternating",
            Pattern::Crash => "crash",
        }
    }
}

const fn lit(leds: &[Led]) -> Frame {
    Frame::lit(leds)
}

static ALL_ON: [Step; 1] = [Step::fixed(Frame::ALL, 0)];

static ALL_OFF: [Step; 1] = [Step::fixed(Frame::OFF, 0)];

static CIRCLE: [Step; 16] = [
    Step::scaled(Frame::OFF, 100),
    Step::scaled(lit(&[Led1]), 100),
    Step::scaled(lit(&[Led2]), 100),
    Step::scaled(lit(&[Led3]), 100),
    Step::scaled(lit(&[Led4]), 100),
    Step::scaled(lit(&[Led5]), 100),
    Step::scaled(lit(&[Led6]), 100),
    Step::fixed(lit(&[Led1]), 0),
    Step::scaled(Frame::OFF, 100),
    Step::scaled(lit(&[Led1]), 100),
    Step::scaled(lit(&[Led6]), 100),
    Step::scaled(lit(&[Led5]), 100),
    Step::scaled(lit(&[Led4]), 100),
    Step::scaled(lit(&[Led3]), 100),
    Step::scaled(lit(&[Led2]), 100),
    Step::fixed(lit(&[Led1]), 0),
];

static SWIPE: [Step; 8] = [
    Step::fixed(Frame::OFF, 150),
    Step::fixed(lit(&[Led2, Led3]), 150),
    Step::fixed(lit(&[Led1, Led4, Led7, Led8]), 150),
    Step::fixed(lit(&[Led5, Led6]), 150),
    Step::fixed(Frame::OFF, 150),
    Step::fixed(lit(&[Led5, Led6]), 150),
    Step::fixed(lit(&[Led1, Led4, Led7, Led8]), 150),
    Step::fixed(lit(&[Led2, Led3]), 150),
];

// The original walk updates one port at a time, so several steps keep the
// other port's previous value lit. Kept verbatim.
static END_TO_END: [Step; 25] = [
    Step::fixed(lit(&[Led7]), 100),
    Step::fixed(lit(&[Led1, Led7]), 100),
    Step::fixed(lit(&[Led1, Led2]), 100),
    Step::fixed(lit(&[Led2, Led3]), 100),
    Step::fixed(lit(&[Led3, Led4]), 100),
    Step::fixed(lit(&[Led4, Led8]), 100),
    Step::fixed(lit(&[Led8]), 100),
    Step::fixed(lit(&[Led4, Led8]), 100),
    Step::fixed(lit(&[Led4, Led5]), 100),
    Step::fixed(lit(&[Led5, Led6]), 100),
    Step::fixed(lit(&[Led1, Led6]), 100),
    Step::fixed(lit(&[Led1]), 100),
    Step::fixed(lit(&[Led1, Led7]), 100),
    Step::fixed(lit(&[Led1]), 100),
    Step::fixed(lit(&[Led1, Led6]), 100),
    Step::fixed(lit(&[Led5, Led6]), 100),
    Step::fixed(lit(&[Led4, Led5]), 100),
    Step::fixed(lit(&[Led4, Led8]), 100),
    Step::fixed(lit(&[Led8]), 100),
    Step::fixed(lit(&[Led4, Led8]), 100),
    Step::fixed(lit(&[Led3, Led4]), 100),
    Step::fixed(lit(&[Led2, Led3]), 100),
    Step::fixed(lit(&[Led1, Led2]), 100),
    Step::fixed(lit(&[Led1]), 100),
    Step::fixed(lit(&[Led1, Led7]), 100),
];

static DOUBLE_PAIR: [Step; 3] = [
    Step::fixed(Frame::OFF, 150),
    Step::fixed(lit(&[Led1, Led4, Led7, Led8]), 150),
    Step::fixed(lit(&[Led2, Led3, Led5, Led6]), 150),
];

// The opening sweep scales with the multiplier; the triple inner rotation
// that follows is authored at a fixed 100 ms.
static ROTATE_DOUBLE: [Step; 13] = [
    Step::scaled(lit(&[Led1, Led7]), 150),
    Step::scaled(lit(&[Led2, Led3]), 150),
    Step::scaled(lit(&[Led4, Led8]), 150),
    Step::scaled(lit(&[Led5, Led6]), 150),
    Step::fixed(lit(&[Led1, Led4]), 100),
    Step::fixed(lit(&[Led2, Led5]), 100),
    Step::fixed(lit(&[Led3, Led6]), 100),
    Step::fixed(lit(&[Led1, Led4]), 100),
    Step::fixed(lit(&[Led2, Led5]), 100),
    Step::fixed(lit(&[Led3, Led6]), 100),
    Step::fixed(lit(&[Led1, Led4]), 100),
    Step::fixed(lit(&[Led2, Led5]), 100),
    Step::fixed(lit(&[Led3, Led6]), 100),
];

static ROTATE_DOUBLE_REV: [Step; 3] = [
    Step::fixed(lit(&[Led5, Led6]), 150),
    Step::fixed(lit(&[Led1, Led7]), 150),
    Step::fixed(lit(&[Led2, Led3]), 150),
];

static ALTERNATE_DOUBLE: [Step; 7] = [
    Step::scaled(Frame::OFF, 150),
    Step::scaled(lit(&[Led1, Led2]), 150),
    Step::scaled(lit(&[Led2, Led3]), 150),
    Step::scaled(lit(&[Led3, Led4]), 150),
    Step::scaled(lit(&[Led4, Led5]), 150),
    Step::scaled(lit(&[Led5, Led6]), 150),
    Step::scaled(lit(&[Led1, Led6]), 150),
];

static DIAGONAL: [Step; 10] = [
    Step::scaled(Frame::OFF, 100),
    Step::scaled(lit(&[Led7]), 100),
    Step::scaled(lit(&[Led1]), 150),
    Step::scaled(lit(&[Led4]), 150),
    Step::scaled(lit(&[Led8]), 150),
    Step::scaled(Frame::OFF, 100),
    Step::scaled(lit(&[Led8]), 100),
    Step::scaled(lit(&[Led4]), 150),
    Step::scaled(lit(&[Led1]), 150),
    Step::scaled(lit(&[Led7]), 150),
];

// On/off pairs with the period falling from 300 ms to 60 ms.
static FLASH_ALL: [Step; 18] = [
    Step::fixed(Frame::ALL, 300),
    Step::fixed(Frame::OFF, 300),
    Step::fixed(Frame::ALL, 270),
    Step::fixed(Frame::OFF, 270),
    Step::fixed(Frame::ALL, 240),
    Step::fixed(Frame::OFF, 240),
    Step::fixed(Frame::ALL, 210),
    Step::fixed(Frame::OFF, 210),
    Step::fixed(Frame::ALL, 180),
    Step::fixed(Frame::OFF, 180),
    Step::fixed(Frame::ALL, 150),
    Step::fixed(Frame::OFF, 150),
    Step::fixed(Frame::ALL, 120),
    Step::fixed(Frame::OFF, 120),
    Step::fixed(Frame::ALL, 90),
    Step::fixed(Frame::OFF, 90),
    Step::fixed(Frame::ALL, 60),
    Step::fixed(Frame::OFF, 60),
];

static FLASH_ALTERNATING: [Step; 3] = [
    Step::scaled(Frame::OFF, 150),
    Step::scaled(lit(&[Led1, Led3, Led5]), 150),
    Step::scaled(lit(&[Led2, Led4, Led6]), 150),
];

static CRASH: [Step; 12] = [
    Step::fixed(Frame::OFF, 150),
    Step::fixed(lit(&[Led7, Led8]), 130),
    Step::fixed(lit(&[Led1, Led4, Led7, Led8]), 110),
    Step::fixed(Frame::ALL, 100),
    Step::fixed(lit(&[Led1, Led4, Led7, Led8]), 110),
    Step::fixed(lit(&[Led7, Led8]), 130),
    Step::fixed(Frame::OFF, 150),
    Step::fixed(lit(&[Led7, Led8]), 150),
    Step::fixed(Frame::OFF, 150),
    Step::fixed(lit(&[Led7, Led8]), 150),
    Step::fixed(Frame::OFF, 150),
    Step::fixed(lit(&[Led7, Led8]), 150),
];
