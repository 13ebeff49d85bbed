//! Configuration constants for the Vcc gauge firmware

use crate::reading::ReferenceVoltage;

/// CPU frequency in Hz (factory fuses: internal RC oscillator at 1MHz)
pub const CPU_FREQ_HZ: u32 = 1_000_000;

/// Internal bandgap reference in tenths of a volt.
///
/// The ATmega128 bandgap is nominally 1.23V; one decimal digit keeps 1.2V.
pub const REFERENCE: ReferenceVoltage = ReferenceVoltage::from_decivolts(12);

/// Time the bandgap needs after being selected before conversions are stable
pub const SETTLING_DELAY_MS: u16 = 1;

/// LED on-time per pulse, long enough to count by eye
pub const BLINK_ON_MS: u16 = 250;

/// LED off-time between pulses
pub const BLINK_OFF_MS: u16 = 250;

/// Pause after the last pulse, separates one reading from the next
pub const CYCLE_PAUSE_MS: u16 = 1000;

/// UART baud rate (4800 keeps UBRR error under 0.2% at 1MHz)
pub const UART_BAUD: u32 = 4800;

/// PORTA bit driving the indicator LED
pub const LED_PIN: u8 = 7;
