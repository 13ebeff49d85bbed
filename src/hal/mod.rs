//! ATmega128 register-level implementations.

pub mod adc;
pub mod gpio;
pub mod timer;
pub mod uart;

// Re-export commonly used types
pub use adc::Adc;
pub use gpio::{Input, Output, Pin};
pub use timer::Delay;
pub use uart::Uart;
