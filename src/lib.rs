//! Supply voltage gauge for 8-bit AVR parts.
//!
//! Vcc is never measured directly. The ADC converts the chip's internal
//! bandgap with Vcc as its upper bound, and the rail follows from the ratio:
//! `Vcc = Vref * 1024 / raw`. The result is blinked out on an LED, one pulse
//! per whole volt.

#![cfg_attr(not(test), no_std)]

pub mod application;
pub mod config;
pub mod converter;
pub mod drivers;
#[cfg(target_arch = "avr")]
pub mod hal;
pub mod reading;
pub mod sampler;
pub mod sim;

pub use application::Gauge;
pub use converter::{AdcPrescaler, VccConverter};
pub use reading::{RawSample, ReferenceVoltage, VoltageReading};
pub use sampler::VoltageSampler;
