use avr_device::atmega128a::PORTA;
use core::convert::Infallible;
use core::marker::PhantomData;
use embedded_hal::digital::v2::OutputPin;

pub trait PinMode {}
pub struct Input;
pub struct Output;
impl PinMode for Input {}
impl PinMode for Output {}

/// A PORTA pin in typestate `MODE`.
#[derive(Debug)]
pub struct Pin<const P: u8, MODE> {
    _mode: PhantomData<MODE>,
}

impl<const P: u8> Pin<P, Input> {
    /// Claims PORTA bit `P`. Pins come out of reset as inputs.
    ///
    /// # Safety
    /// The caller must not create a second handle to the same bit.
    pub unsafe fn steal() -> Self {
        Pin { _mode: PhantomData }
    }
}

impl<const P: u8, MODE: PinMode> Pin<P, MODE> {
    /// Drives the pin low, then switches it to output.
    pub fn into_output(self) -> Pin<P, Output> {
        unsafe {
            let port = &*PORTA::ptr();
            port.porta.modify(|r, w| w.bits(r.bits() & !(1 << P)));
            port.ddra.modify(|r, w| w.bits(r.bits() | (1 << P)));
        }
        Pin { _mode: PhantomData }
    }
}

impl<const P: u8> OutputPin for Pin<P, Output> {
    type Error = Infallible;

    #[inline]
    fn set_high(&mut self) -> Result<(), Self::Error> {
        unsafe {
            (*PORTA::ptr()).porta.modify(|r, w| w.bits(r.bits() | (1 << P)));
        }
        Ok(())
    }

    #[inline]
    fn set_low(&mut self) -> Result<(), Self::Error> {
        unsafe {
            (*PORTA::ptr()).porta.modify(|r, w| w.bits(r.bits() & !(1 << P)));
        }
        Ok(())
    }
}

// Board-specific pin definitions
pub mod board {
    use super::*;
    use crate::config::LED_PIN;

    pub type Led = Pin<LED_PIN, Output>;
}
