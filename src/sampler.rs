//! Supply voltage sampling through the internal reference.
//!
//! Each call powers the ADC up, waits for the reference to settle, throws
//! away the first conversion and keeps the second, then powers the ADC down
//! again. Nothing is kept warm between calls.

use core::num::NonZeroU8;

use embedded_hal::blocking::delay::DelayMs;

use crate::config::SETTLING_DELAY_MS;
use crate::converter::{AdcPrescaler, VccConverter};
use crate::reading::{RawSample, ReferenceVoltage, VoltageReading};

pub struct VoltageSampler<C> {
    converter: C,
    reference: ReferenceVoltage,
    prescaler: AdcPrescaler,
}

impl<C: VccConverter> VoltageSampler<C> {
    /// `cpu_freq_hz` picks the ADC clock divider once, up front.
    pub fn new(converter: C, reference: ReferenceVoltage, cpu_freq_hz: u32) -> Self {
        Self {
            converter,
            reference,
            prescaler: AdcPrescaler::for_cpu_clock(cpu_freq_hz),
        }
    }

    pub fn reference(&self) -> ReferenceVoltage {
        self.reference
    }

    pub fn prescaler(&self) -> AdcPrescaler {
        self.prescaler
    }

    /// Measures Vcc once. Blocks for the settling delay plus two conversions.
    pub fn sample<D: DelayMs<u16>>(&mut self, delay: &mut D) -> VoltageReading {
        self.power_up(delay);

        // First conversion after a reference switch is unreliable
        let _ = self.converter.convert();
        let raw = self.converter.convert();

        let reading = VoltageReading::from_raw(raw, self.reference);
        self.converter.set_enabled(false);
        reading
    }

    /// Measures Vcc from the truncated mean of `count` conversions.
    ///
    /// The converter is powered and settled once for the whole burst.
    pub fn sample_mean<D: DelayMs<u16>>(&mut self, delay: &mut D, count: NonZeroU8) -> VoltageReading {
        self.power_up(delay);

        let _ = self.converter.convert();
        let mut sum: u32 = 0;
        for _ in 0..count.get() {
            sum += u32::from(self.converter.convert().get());
        }
        let mean = RawSample::from_register((sum / u32::from(count.get())) as u16);

        let reading = VoltageReading::from_raw(mean, self.reference);
        self.converter.set_enabled(false);
        reading
    }

    pub fn converter(&self) -> &C {
        &self.converter
    }

    pub fn release(self) -> C {
        self.converter
    }

    fn power_up<D: DelayMs<u16>>(&mut self, delay: &mut D) {
        self.converter.select_reference_input();
        self.converter.set_clock_divider(self.prescaler);
        self.converter.set_enabled(true);
        delay.delay_ms(SETTLING_DELAY_MS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimulatedConverter;
    use embedded_hal_mock::delay::MockNoop;

    const K11: ReferenceVoltage = ReferenceVoltage::from_decivolts(11);

    fn sampler(raw: u16) -> VoltageSampler<SimulatedConverter> {
        let adc = SimulatedConverter::fixed(RawSample::new(raw).unwrap());
        VoltageSampler::new(adc, K11, 1_000_000)
    }

    #[test]
    fn five_volt_rail() {
        let mut sampler = sampler(225);
        assert_eq!(sampler.sample(&mut MockNoop::new()).decivolts(), 50);
    }

    #[test]
    fn two_conversions_per_sample() {
        let mut sampler = sampler(450);
        assert_eq!(sampler.sample(&mut MockNoop::new()).decivolts(), 25);

        let stats = sampler.converter().stats();
        assert_eq!(stats.conversions, 2);
        assert_eq!(stats.reference_selections, 1);
        assert_eq!(stats.invalid_conversions, 0);
        assert_eq!(stats.prescaler, Some(AdcPrescaler::Div8));
    }

    #[test]
    fn converter_powered_down_after_sample() {
        let mut sampler = sampler(563);
        sampler.sample(&mut MockNoop::new());
        sampler.sample(&mut MockNoop::new());

        let adc = sampler.release();
        assert!(!adc.is_enabled());
        assert_eq!(adc.stats().enables, 2);
        assert_eq!(adc.stats().disables, 2);
    }

    #[test]
    fn first_conversion_is_discarded() {
        let adc = SimulatedConverter::fixed(RawSample::new(1023).unwrap())
            .unsettled_first(RawSample::new(0).unwrap());
        let mut sampler = VoltageSampler::new(adc, K11, 1_000_000);
        assert_eq!(sampler.sample(&mut MockNoop::new()).decivolts(), 11);
    }

    #[test]
    fn zero_sample_does_not_panic() {
        let mut sampler = sampler(0);
        assert_eq!(sampler.sample(&mut MockNoop::new()), VoltageReading::SATURATED);
        assert!(!sampler.converter().is_enabled());
    }

    #[test]
    fn slow_conversions_still_complete() {
        let adc = SimulatedConverter::fixed(RawSample::new(225).unwrap()).conversion_polls(25);
        let mut sampler = VoltageSampler::new(adc, K11, 1_000_000);
        assert_eq!(sampler.sample(&mut MockNoop::new()).decivolts(), 50);
    }

    #[test]
    fn mean_settles_once_for_whole_burst() {
        let mut sampler = sampler(225);
        let count = NonZeroU8::new(8).unwrap();
        assert_eq!(sampler.sample_mean(&mut MockNoop::new(), count).decivolts(), 50);

        let stats = sampler.converter().stats();
        assert_eq!(stats.enables, 1);
        assert_eq!(stats.disables, 1);
        assert_eq!(stats.conversions, 9);
    }

    #[test]
    fn mean_over_longest_burst() {
        let adc = SimulatedConverter::fixed(RawSample::new(450).unwrap());
        let mut sampler = VoltageSampler::new(adc, K11, 1_000_000);
        let reading = sampler.sample_mean(&mut MockNoop::new(), NonZeroU8::new(255).unwrap());
        assert_eq!(reading.decivolts(), 25);
    }
}
