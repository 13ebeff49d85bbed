//! Application layer: one measure, log and signal cycle per call.

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::OutputPin;
use ufmt::{uWrite, uwriteln};

use crate::converter::VccConverter;
use crate::drivers::BlinkSignal;
use crate::reading::VoltageReading;
use crate::sampler::VoltageSampler;

/// Main application state and logic
pub struct Gauge<C, P> {
    sampler: VoltageSampler<C>,
    signal: BlinkSignal<P>,
    cycles: u32,
}

impl<C: VccConverter, P: OutputPin> Gauge<C, P> {
    pub fn new(sampler: VoltageSampler<C>, signal: BlinkSignal<P>) -> Self {
        Self {
            sampler,
            signal,
            cycles: 0,
        }
    }

    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Samples Vcc, logs it to `log` and blinks it out.
    ///
    /// Log write failures are dropped; only pin errors are returned.
    pub fn run_cycle<D, W>(&mut self, delay: &mut D, log: &mut W) -> Result<VoltageReading, P::Error>
    where
        D: DelayMs<u16>,
        W: uWrite + ?Sized,
    {
        self.cycles = self.cycles.wrapping_add(1);
        let reading = self.sampler.sample(delay);
        let pulses = reading.whole_volts();

        uwriteln!(log, "[VCC] #{} {} pulses={}\r", self.cycles, reading, pulses).ok();
        if reading.is_saturated() {
            uwriteln!(log, "[WRN] reading saturated\r").ok();
        } else if pulses == 0 {
            uwriteln!(log, "[WRN] supply under 1V\r").ok();
        }

        self.signal.show(reading, delay)?;
        Ok(reading)
    }

    pub fn release(self) -> (VoltageSampler<C>, BlinkSignal<P>) {
        (self.sampler, self.signal)
    }
}
