use avr_device::atmega128a::ADC;

use crate::converter::{AdcPrescaler, VccConverter};
use crate::reading::RawSample;

// ADMUX: REFS1:0 = 01 (AVCC as reference), MUX4:0 = 11110 (1.23V VBG as input)
const ADMUX_VBG_VS_AVCC: u8 = 0b0101_1110;

const ADEN: u8 = 1 << 7;
const ADSC: u8 = 1 << 6;
const ADPS_MASK: u8 = 0x07;

/// ADC wired to measure the bandgap against AVCC.
pub struct Adc {
    adc: ADC,
}

impl Adc {
    /// Takes the peripheral and leaves it powered down.
    pub fn new(adc: ADC) -> Self {
        let mut this = Self { adc };
        this.set_enabled(false);
        this
    }

    pub fn free(self) -> ADC {
        self.adc
    }
}

impl VccConverter for Adc {
    fn select_reference_input(&mut self) {
        unsafe {
            self.adc.admux.write(|w| w.bits(ADMUX_VBG_VS_AVCC));
        }
    }

    fn set_clock_divider(&mut self, prescaler: AdcPrescaler) {
        unsafe {
            self.adc.adcsra.modify(|r, w| {
                w.bits((r.bits() & !ADPS_MASK) | prescaler.bits())
            });
        }
    }

    fn set_enabled(&mut self, enabled: bool) {
        unsafe {
            self.adc.adcsra.modify(|r, w| {
                if enabled {
                    w.bits(r.bits() | ADEN)
                } else {
                    w.bits(r.bits() & !ADEN)
                }
            });
        }
    }

    fn start_conversion(&mut self) {
        unsafe {
            self.adc.adcsra.modify(|r, w| w.bits(r.bits() | ADSC));
        }
    }

    fn is_conversion_complete(&self) -> bool {
        // ADSC reads back as one while a conversion is in progress
        self.adc.adcsra.read().bits() & ADSC == 0
    }

    fn read_raw_sample(&mut self) -> RawSample {
        // 16-bit access reads ADCL before ADCH
        RawSample::from_register(self.adc.adc.read().bits())
    }
}
