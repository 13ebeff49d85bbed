//! Hardware abstraction for measuring Vcc against an internal reference.

use core::convert::Infallible;

use crate::reading::RawSample;

/// Maximum ADC clock for full 10-bit resolution
pub const ADC_CLOCK_MAX_HZ: u32 = 200_000;

/// Minimum ADC clock for full 10-bit resolution
pub const ADC_CLOCK_MIN_HZ: u32 = 50_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AdcPrescaler {
    Div2 = 1,
    Div4 = 2,
    Div8 = 3,
    Div16 = 4,
    Div32 = 5,
    Div64 = 6,
    Div128 = 7,
}

impl AdcPrescaler {
    const ALL: [Self; 7] = [
        Self::Div2,
        Self::Div4,
        Self::Div8,
        Self::Div16,
        Self::Div32,
        Self::Div64,
        Self::Div128,
    ];

    /// ADPS2:0 field value
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn divisor(self) -> u32 {
        1 << (self as u8)
    }

    /// Smallest divider that keeps the ADC clock at or under 200kHz.
    ///
    /// Clocks too fast for /128 still get /128.
    pub fn for_cpu_clock(cpu_freq_hz: u32) -> Self {
        Self::ALL
            .into_iter()
            .find(|p| cpu_freq_hz / p.divisor() <= ADC_CLOCK_MAX_HZ)
            .unwrap_or(Self::Div128)
    }

    pub const fn adc_clock_hz(self, cpu_freq_hz: u32) -> u32 {
        cpu_freq_hz / self.divisor()
    }
}

/// An ADC that can convert its internal reference with Vcc as the ceiling.
///
/// Implementations own whatever registers they need. Callers must not have
/// two conversions in flight; `&mut self` on every operation enforces that.
pub trait VccConverter {
    /// Internal reference as the input, supply rail as the upper bound.
    fn select_reference_input(&mut self);

    fn set_clock_divider(&mut self, prescaler: AdcPrescaler);

    /// Powers the converter up or down.
    fn set_enabled(&mut self, enabled: bool);

    fn start_conversion(&mut self);

    fn is_conversion_complete(&self) -> bool;

    fn read_raw_sample(&mut self) -> RawSample;

    /// Returns the sample once the conversion in flight has finished.
    fn poll_conversion(&mut self) -> nb::Result<RawSample, Infallible> {
        if self.is_conversion_complete() {
            Ok(self.read_raw_sample())
        } else {
            Err(nb::Error::WouldBlock)
        }
    }

    /// Runs one conversion and blocks until its result is available.
    fn convert(&mut self) -> RawSample {
        self.start_conversion();
        match nb::block!(self.poll_conversion()) {
            Ok(sample) => sample,
            Err(never) => match never {},
        }
    }
}
