//! Switch driver tests against mocked input pins.

use atmega128_flasher::control::{Mode, SwitchReader, SwitchState};
use atmega128_flasher::drivers::SwitchPair;
use embedded_hal_mock::pin::{Mock as PinMock, State as PinState, Transaction as PinTransaction};

#[test]
fn low_reads_as_pressed_high_as_released() {
    let mut sw0 = PinMock::new(&[PinTransaction::get(PinState::Low)]);
    let mut sw1 = PinMock::new(&[PinTransaction::get(PinState::High)]);
    let mut switches = SwitchPair::new(sw0.clone(), sw1.clone());

    assert_eq!(
        switches.sample(),
        SwitchState {
            sw0: true,
            sw1: false
        }
    );

    sw0.done();
    sw1.done();
}

#[test]
fn each_sample_reads_both_pins_once() {
    let mut sw0 = PinMock::new(&[
        PinTransaction::get(PinState::High),
        PinTransaction::get(PinState::Low),
    ]);
    let mut sw1 = PinMock::new(&[
        PinTransaction::get(PinState::High),
        PinTransaction::get(PinState::High),
    ]);
    let mut switches = SwitchPair::new(sw0.clone(), sw1.clone());

    assert_eq!(Mode::from_switches(switches.sample()), Mode::Off);
    assert_eq!(Mode::from_switches(switches.sample()), Mode::ShowOne);

    sw0.done();
    sw1.done();
}

#[test]
fn both_low_samples_as_hold() {
    let mut sw0 = PinMock::new(&[PinTransaction::get(PinState::Low)]);
    let mut sw1 = PinMock::new(&[PinTransaction::get(PinState::Low)]);
    let mut switches = SwitchPair::new(sw0.clone(), sw1.clone());

    assert_eq!(Mode::from_switches(switches.sample()), Mode::Hold);

    sw0.done();
    sw1.done();
}
