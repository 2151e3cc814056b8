//! Configuration constants for the flasher firmware

/// CPU frequency in Hz
pub const CPU_FREQ_HZ: u32 = 16_000_000;

/// UART baud rate for the debug console
pub const UART_BAUD: u32 = 9600;

/// Milliseconds removed from a scaled hold per speed-multiplier step
pub const MULTIPLIER_STEP_MS: u16 = 30;
