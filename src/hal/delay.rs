use avr_device::atmega128a::TC0;
use embedded_hal::blocking::delay::DelayMs;

use crate::config::CPU_FREQ_HZ;
use crate::pattern::Millis;

/// Timer0 ticks per millisecond: 16MHz/64 = 250kHz, 250 ticks = 1ms.
pub const TICKS_PER_MS: u8 = (CPU_FREQ_HZ / 64 / 1_000) as u8;

/// Millisecond busy-wait on Timer0.
///
/// The timer is started for the duration of each call and stopped after,
/// nothing else in the firmware owns it.
pub struct BusyWait {
    _claimed: (),
}

impl BusyWait {
    pub fn new() -> Self {
        Self { _claimed: () }
    }
}

impl Default for BusyWait {
    fn default() -> Self {
        Self::new()
    }
}

impl DelayMs<Millis> for BusyWait {
    fn delay_ms(&mut self, ms: Millis) {
        let tc0 = unsafe { &*TC0::ptr() };

        tc0.tcnt0.write(|w| w.bits(0));
        tc0.tccr0.write(|w| w.cs0().prescale_64());

        for _ in 0..ms {
            while tc0.tcnt0.read().bits() < TICKS_PER_MS {}
            tc0.tcnt0.write(|w| w.bits(0));
        }

        tc0.tccr0.write(|w| w.cs0().no_clock());
    }
}
