use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::OutputPin;

use crate::config::{BLINK_OFF_MS, BLINK_ON_MS, CYCLE_PAUSE_MS};
use crate::reading::VoltageReading;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkTiming {
    pub on_ms: u16,
    pub off_ms: u16,
    pub pause_ms: u16,
}

impl Default for BlinkTiming {
    fn default() -> Self {
        Self {
            on_ms: BLINK_ON_MS,
            off_ms: BLINK_OFF_MS,
            pause_ms: CYCLE_PAUSE_MS,
        }
    }
}

/// Reports a reading by pulsing an LED once per whole volt.
pub struct BlinkSignal<P> {
    pin: P,
    timing: BlinkTiming,
}

impl<P: OutputPin> BlinkSignal<P> {
    pub fn new(pin: P, timing: BlinkTiming) -> Self {
        Self { pin, timing }
    }

    pub fn timing(&self) -> BlinkTiming {
        self.timing
    }

    /// Pulses `reading.whole_volts()` times, then pauses.
    ///
    /// Returns the number of pulses; zero means the rail is under one volt.
    pub fn show<D: DelayMs<u16>>(&mut self, reading: VoltageReading, delay: &mut D) -> Result<u8, P::Error> {
        let pulses = reading.whole_volts();
        for _ in 0..pulses {
            self.pulse(delay)?;
        }
        delay.delay_ms(self.timing.pause_ms);
        Ok(pulses)
    }

    pub fn pulse<D: DelayMs<u16>>(&mut self, delay: &mut D) -> Result<(), P::Error> {
        self.pin.set_high()?;
        delay.delay_ms(self.timing.on_ms);
        self.pin.set_low()?;
        delay.delay_ms(self.timing.off_ms);
        Ok(())
    }

    pub fn release(self) -> P {
        self.pin
    }
}
