pub mod blink;
#[cfg(target_arch = "avr")]
pub mod serial_console;

pub use blink::{BlinkSignal, BlinkTiming};
#[cfg(target_arch = "avr")]
pub use serial_console::SerialConsole;
