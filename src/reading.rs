//! Fixed-point voltage values produced by the gauge.

use ufmt::{uDisplay, uWrite, uwrite, Formatter};

/// ADC full scale for a 10-bit converter.
pub const FULL_SCALE: u32 = 1024;

/// A 10-bit conversion result, `0..=1023`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RawSample(u16);

impl RawSample {
    pub const MAX: u16 = (FULL_SCALE - 1) as u16;

    /// Rejects anything a 10-bit converter cannot produce.
    pub const fn new(value: u16) -> Option<Self> {
        if value > Self::MAX {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Builds a sample from a data register, keeping the low 10 bits.
    pub const fn from_register(bits: u16) -> Self {
        Self(bits & Self::MAX)
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }
}

/// Reference voltage in tenths of a volt (1.1V is 11).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceVoltage(u8);

impl ReferenceVoltage {
    pub const fn from_decivolts(decivolts: u8) -> Self {
        Self(decivolts)
    }

    #[inline]
    pub const fn decivolts(self) -> u8 {
        self.0
    }
}

/// Supply voltage with one implied decimal digit (50 is 5.0V).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct VoltageReading(u8);

impl VoltageReading {
    /// Returned for a zero sample and for anything above 25.5V.
    pub const SATURATED: Self = Self(u8::MAX);

    pub const fn from_decivolts(decivolts: u8) -> Self {
        Self(decivolts)
    }

    /// `Vcc = Vref * 1024 / raw`, scaled by ten and truncated.
    ///
    /// The bandgap is a larger fraction of a smaller rail, so the reading
    /// falls as `raw` rises.
    pub fn from_raw(raw: RawSample, reference: ReferenceVoltage) -> Self {
        let raw = u32::from(raw.get());
        if raw == 0 {
            return Self::SATURATED;
        }

        let decivolts = (u32::from(reference.decivolts()) * FULL_SCALE) / raw;
        u8::try_from(decivolts).map_or(Self::SATURATED, Self)
    }

    #[inline]
    pub const fn decivolts(self) -> u8 {
        self.0
    }

    /// Whole volts, rounded toward zero (4.9V is 4).
    #[inline]
    pub const fn whole_volts(self) -> u8 {
        self.0 / 10
    }

    #[inline]
    pub const fn tenths(self) -> u8 {
        self.0 % 10
    }

    #[inline]
    pub const fn is_saturated(self) -> bool {
        self.0 == u8::MAX
    }
}

impl uDisplay for VoltageReading {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        uwrite!(f, "{}.{}V", self.whole_volts(), self.tenths())
    }
}
