#![no_std]
#![no_main]

use panic_halt as _;

use avr_device::atmega128a::Peripherals;

use atmega128_flasher::control::{self, Mode};
use atmega128_flasher::drivers::{Console, SwitchPair};
use atmega128_flasher::hal::{self, BusyWait, Uart0};
use atmega128_flasher::player::Player;

#[avr_device::entry]
fn main() -> ! {
    let dp = Peripherals::take().unwrap();

    let pins = hal::configure(&dp);
    let mut console = Console::new(Uart0::new(dp.USART0));

    // Print startup message
    console.write_line("ATmega128 Flasher v0.1.0");
    console.debug("Ticks/ms", hal::delay::TICKS_PER_MS);
    console.write_line("Ready...");

    let mut player = Player::new(pins.display, BusyWait::new());
    let mut switches = SwitchPair::new(pins.switch0, pins.switch1);

    let mut last: Option<Mode> = None;
    loop {
        let mode = control::poll_once(&mut player, &mut switches);
        if last != Some(mode) {
            console.write_line(mode.name());
            last = Some(mode);
        }
    }
}
