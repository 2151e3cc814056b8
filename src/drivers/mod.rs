pub mod console;
pub mod switches;

pub use console::Console;
pub use switches::SwitchPair;
