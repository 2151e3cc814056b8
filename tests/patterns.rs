//! Pattern table tests: the authored sequences pinned step for step, plus
//! table-wide invariants.

use atmega128_flasher::led::{ENDS_MASK, RING_MASK};
use atmega128_flasher::Led::*;
use atmega128_flasher::{Frame, Hold, Pattern, Step};

fn lit(leds: &[atmega128_flasher::Led]) -> Frame {
    Frame::lit(leds)
}

#[test]
fn all_on_is_one_zero_hold_step() {
    assert_eq!(
        Pattern::AllOn.steps(),
        [Step::fixed(Frame::ALL, 0)].as_slice()
    );
}

#[test]
fn all_off_is_one_zero_hold_step() {
    assert_eq!(
        Pattern::AllOff.steps(),
        [Step::fixed(Frame::OFF, 0)].as_slice()
    );
}

#[test]
fn circle_steps_match_the_authored_table() {
    let expected = [
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
    assert_eq!(Pattern::Circle.steps(), expected.as_slice());
}

#[test]
fn swipe_steps_match_the_authored_table() {
    let expected = [
        Step::fixed(Frame::OFF, 150),
        Step::fixed(lit(&[Led2, Led3]), 150),
        Step::fixed(lit(&[Led1, Led4, Led7, Led8]), 150),
        Step::fixed(lit(&[Led5, Led6]), 150),
        Step::fixed(Frame::OFF, 150),
        Step::fixed(lit(&[Led5, Led6]), 150),
        Step::fixed(lit(&[Led1, Led4, Led7, Led8]), 150),
        Step::fixed(lit(&[Led2, Led3]), 150),
    ];
    assert_eq!(Pattern::Swipe.steps(), expected.as_slice());
}

#[test]
fn end_to_end_keeps_the_residual_port_quirks() {
    // The walk updates one port per step, so the untouched port's last
    // value stays lit. The table must carry those combined frames.
    let expected = [
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
    assert_eq!(Pattern::EndToEnd.steps(), expected.as_slice());
}

#[test]
fn double_pair_steps_match_the_authored_table() {
    let expected = [
        Step::fixed(Frame::OFF, 150),
        Step::fixed(lit(&[Led1, Led4, Led7, Led8]), 150),
        Step::fixed(lit(&[Led2, Led3, Led5, Led6]), 150),
    ];
    assert_eq!(Pattern::DoublePair.steps(), expected.as_slice());
}

#[test]
fn rotate_double_scales_the_sweep_but_not_the_coda() {
    let expected = [
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
    assert_eq!(Pattern::RotateDouble.steps(), expected.as_slice());
}

#[test]
fn rotate_double_rev_steps_match_the_authored_table() {
    let expected = [
        Step::fixed(lit(&[Led5, Led6]), 150),
        Step::fixed(lit(&[Led1, Led7]), 150),
        Step::fixed(lit(&[Led2, Led3]), 150),
    ];
    assert_eq!(Pattern::RotateDoubleRev.steps(), expected.as_slice());
}

#[test]
fn alternate_double_steps_match_the_authored_table() {
    let expected = [
        Step::scaled(Frame::OFF, 150),
        Step::scaled(lit(&[Led1, Led2]), 150),
        Step::scaled(lit(&[Led2, Led3]), 150),
        Step::scaled(lit(&[Led3, Led4]), 150),
        Step::scaled(lit(&[Led4, Led5]), 150),
        Step::scaled(lit(&[Led5, Led6]), 150),
        Step::scaled(lit(&[Led1, Led6]), 150),
    ];
    assert_eq!(Pattern::AlternateDouble.steps(), expected.as_slice());
}

#[test]
fn diagonal_steps_match_the_authored_table() {
    let expected = [
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
    assert_eq!(Pattern::Diagonal.steps(), expected.as_slice());
}

#[test]
fn flash_all_alternates_with_descending_fixed_period() {
    let steps = Pattern::FlashAll.steps();
    assert_eq!(steps.len(), 18);
    let mut period = 300;
    for pair in steps.chunks(2) {
        assert_eq!(pair[0], Step::fixed(Frame::ALL, period));
        assert_eq!(pair[1], Step::fixed(Frame::OFF, period));
        period -= 30;
    }
    assert_eq!(period, 30);
}

#[test]
fn flash_alternating_steps_match_the_authored_table() {
    let expected = [
        Step::scaled(Frame::OFF, 150),
        Step::scaled(lit(&[Led1, Led3, Led5]), 150),
        Step::scaled(lit(&[Led2, Led4, Led6]), 150),
    ];
    assert_eq!(Pattern::FlashAlternating.steps(), expected.as_slice());
}

#[test]
fn crash_steps_match_the_authored_table() {
    let expected = [
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
    assert_eq!(Pattern::Crash.steps(), expected.as_slice());
}

#[test]
fn scaled_holds_shorten_by_thirty_per_step_and_floor_at_zero() {
    assert_eq!(Hold::Scaled(100).resolve(0), 100);
    assert_eq!(Hold::Scaled(100).resolve(1), 70);
    assert_eq!(Hold::Scaled(100).resolve(3), 10);
    assert_eq!(Hold::Scaled(100).resolve(4), 0);
    assert_eq!(Hold::Scaled(150).resolve(5), 0);
    assert_eq!(Hold::Scaled(150).resolve(250), 0);
}

#[test]
fn fixed_holds_ignore_the_multiplier() {
    for multiplier in [0, 1, 4, 250] {
        assert_eq!(Hold::Fixed(100).resolve(multiplier), 100);
        assert_eq!(Hold::Fixed(0).resolve(multiplier), 0);
    }
}

#[test]
fn every_table_resolves_without_underflow() {
    for pattern in Pattern::ALL {
        for multiplier in 0..=250 {
            for step in pattern.steps() {
                let ms = step.hold.resolve(multiplier);
                match step.hold {
                    Hold::Fixed(base) => assert_eq!(ms, base),
                    Hold::Scaled(base) => assert!(ms <= base),
                }
            }
        }
    }
}

#[test]
fn every_frame_stays_within_the_led_bits() {
    for pattern in Pattern::ALL {
        for step in pattern.steps() {
            assert_eq!(step.frame.ring & !RING_MASK, 0, "{}", pattern.name());
            assert_eq!(step.frame.ends & !ENDS_MASK, 0, "{}", pattern.name());
        }
    }
}

#[test]
fn every_pattern_has_steps_and_a_unique_name() {
    let mut names: Vec<&str> = Vec::new();
    for pattern in Pattern::ALL {
        assert!(!pattern.steps().is_empty(), "{}", pattern.name());
        names.push(pattern.name());
    }
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), Pattern::ALL.len());
}
