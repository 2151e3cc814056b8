use avr_device::atmega128a::USART0;
use ufmt::uWrite;

use crate::config::{CPU_FREQ_HZ, UART_BAUD};

// (16_000_000 / (16 * 9600)) - 1 = 103
const UBRR: u16 = (CPU_FREQ_HZ / (16 * UART_BAUD) - 1) as u16;

/// Transmit-only debug UART on USART0, 8N1.
///
/// Transmission busy-waits on the data register. The console traffic is a
/// line per mode change, so there is nothing worth buffering.
pub struct Uart0 {
    usart: USART0,
}

impl Uart0 {
    pub fn new(usart: USART0) -> Self {
        // Set baud rate, then enable the transmitter only
        usart.ubrr0h.write(|w| w.bits((UBRR >> 8) as u8));
        usart.ubrr0l.write(|w| w.bits(UBRR as u8));
        usart.ucsr0b.write(|w| w.txen0().set_bit());
        Self { usart }
    }

    pub fn write_byte(&mut self, byte: u8) {
        // Wait for the data register to empty
        while self.usart.ucsr0a.read().udre0().bit_is_clear() {}
        self.usart.udr0.write(|w| w.bits(byte));
    }
}

impl uWrite for Uart0 {
    type Error = core::convert::Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        for byte in s.bytes() {
            self.write_byte(byte);
        }
        Ok(())
    }
}
