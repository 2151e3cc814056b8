pub mod delay;
pub mod gpio;
pub mod uart;

// Re-export commonly used types
pub use delay::BusyWait;
pub use gpio::{configure, DisplayPins, Pins, Switch0, Switch1, SwitchPin};
pub use uart::Uart0;
