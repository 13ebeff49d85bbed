//! Host-side model of the ADC, used to exercise the sampler without hardware.

use crate::converter::{AdcPrescaler, VccConverter};
use crate::reading::{RawSample, FULL_SCALE};

/// Counters describing how the converter was driven.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConverterStats {
    pub reference_selections: u16,
    pub enables: u16,
    pub disables: u16,
    pub conversions: u16,
    /// Conversions started while powered down or before a reference was chosen
    pub invalid_conversions: u16,
    pub prescaler: Option<AdcPrescaler>,
}

pub struct SimulatedConverter {
    settled: RawSample,
    unsettled: Option<RawSample>,
    polls_per_conversion: u8,
    enabled: bool,
    reference_selected: bool,
    first_after_switch: bool,
    polls_left: Option<u8>,
    result: RawSample,
    stats: ConverterStats,
}

impl SimulatedConverter {
    /// Every conversion yields `raw`.
    pub fn fixed(raw: RawSample) -> Self {
        Self {
            settled: raw,
            unsettled: None,
            polls_per_conversion: 0,
            enabled: false,
            reference_selected: false,
            first_after_switch: false,
            polls_left: None,
            result: RawSample::from_register(0),
            stats: ConverterStats::default(),
        }
    }

    /// Models a `vcc_mv` rail measured against a `reference_mv` bandgap.
    ///
    /// A rail at or below the reference reads full scale.
    pub fn with_supply(vcc_mv: u16, reference_mv: u16) -> Self {
        let raw = if vcc_mv == 0 {
            u32::from(RawSample::MAX)
        } else {
            (u32::from(reference_mv) * FULL_SCALE / u32::from(vcc_mv)).min(u32::from(RawSample::MAX))
        };
        Self::fixed(RawSample::from_register(raw as u16))
    }

    /// First conversion after a reference switch returns `raw` instead.
    pub fn unsettled_first(mut self, raw: RawSample) -> Self {
        self.unsettled = Some(raw);
        self
    }

    /// Number of `WouldBlock` polls before each conversion completes.
    pub fn conversion_polls(mut self, polls: u8) -> Self {
        self.polls_per_conversion = polls;
        self
    }

    pub fn set_raw(&mut self, raw: RawSample) {
        self.settled = raw;
    }

    pub fn stats(&self) -> ConverterStats {
        self.stats
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl VccConverter for SimulatedConverter {
    fn select_reference_input(&mut self) {
        self.stats.reference_selections += 1;
        self.reference_selected = true;
        self.first_after_switch = true;
    }

    fn set_clock_divider(&mut self, prescaler: AdcPrescaler) {
        self.stats.prescaler = Some(prescaler);
    }

    fn set_enabled(&mut self, enabled: bool) {
        if enabled {
            self.stats.enables += 1;
        } else {
            self.stats.disables += 1;
            self.polls_left = None;
        }
        self.enabled = enabled;
    }

    fn start_conversion(&mut self) {
        self.stats.conversions += 1;
        if !self.enabled || !self.reference_selected {
            self.stats.invalid_conversions += 1;
        }

        self.result = match (self.first_after_switch, self.unsettled) {
            (true, Some(raw)) => raw,
            _ => self.settled,
        };
        self.first_after_switch = false;
        self.polls_left = Some(self.polls_per_conversion);
    }

    fn is_conversion_complete(&self) -> bool {
        // An idle converter reports complete, like ADSC reading back zero
        matches!(self.polls_left, None | Some(0))
    }

    fn read_raw_sample(&mut self) -> RawSample {
        self.result
    }

    fn poll_conversion(&mut self) -> nb::Result<RawSample, core::convert::Infallible> {
        match self.polls_left {
            Some(0) | None => Ok(self.read_raw_sample()),
            Some(left) => {
                self.polls_left = Some(left - 1);
                Err(nb::Error::WouldBlock)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supply_model_follows_ratio() {
        // 1100mV * 1024 / 5000mV
        let mut adc = SimulatedConverter::with_supply(5000, 1100);
        adc.select_reference_input();
        adc.set_enabled(true);
        assert_eq!(adc.convert().get(), 225);
    }

    #[test]
    fn rail_below_reference_reads_full_scale() {
        let mut adc = SimulatedConverter::with_supply(900, 1100);
        adc.select_reference_input();
        adc.set_enabled(true);
        assert_eq!(adc.convert().get(), RawSample::MAX);
    }

    #[test]
    fn conversion_blocks_for_configured_polls() {
        let mut adc = SimulatedConverter::fixed(RawSample::from_register(300)).conversion_polls(3);
        adc.select_reference_input();
        adc.set_enabled(true);
        adc.start_conversion();
        assert!(!adc.is_conversion_complete());
        assert!(adc.poll_conversion().is_err());
        assert!(adc.poll_conversion().is_err());
        assert!(adc.poll_conversion().is_err());
        assert_eq!(adc.poll_conversion().map(RawSample::get), Ok(300));
    }

    #[test]
    fn unsettled_value_only_on_first_conversion() {
        let mut adc = SimulatedConverter::fixed(RawSample::from_register(225))
            .unsettled_first(RawSample::from_register(0));
        adc.select_reference_input();
        adc.set_enabled(true);
        assert_eq!(adc.convert().get(), 0);
        assert_eq!(adc.convert().get(), 225);
    }

    #[test]
    fn conversion_while_disabled_is_counted() {
        let mut adc = SimulatedConverter::fixed(RawSample::from_register(225));
        adc.convert();
        assert_eq!(adc.stats().invalid_conversions, 1);
    }
}
