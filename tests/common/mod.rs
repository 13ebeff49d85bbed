#![allow(dead_code)]

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::OutputPin;
use vcc_gauge::{AdcPrescaler, RawSample, VccConverter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    SelectReference,
    ClockDivider(AdcPrescaler),
    Enabled(bool),
    Start,
    Read(u16),
    Delay(u16),
    PinHigh,
    PinLow,
}

pub type Trace = Rc<RefCell<Vec<Event>>>;

pub fn trace() -> Trace {
    Rc::new(RefCell::new(Vec::new()))
}

/// Converter that records every call and replays `samples` in order.
pub struct TracingConverter {
    trace: Trace,
    samples: Vec<u16>,
    next: usize,
}

impl TracingConverter {
    pub fn new(trace: &Trace, samples: &[u16]) -> Self {
        Self {
            trace: Rc::clone(trace),
            samples: samples.to_vec(),
            next: 0,
        }
    }
}

impl VccConverter for TracingConverter {
    fn select_reference_input(&mut self) {
        self.trace.borrow_mut().push(Event::SelectReference);
    }

    fn set_clock_divider(&mut self, prescaler: AdcPrescaler) {
        self.trace.borrow_mut().push(Event::ClockDivider(prescaler));
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.trace.borrow_mut().push(Event::Enabled(enabled));
    }

    fn start_conversion(&mut self) {
        self.trace.borrow_mut().push(Event::Start);
    }

    fn is_conversion_complete(&self) -> bool {
        true
    }

    fn read_raw_sample(&mut self) -> RawSample {
        let value = self.samples[self.next % self.samples.len()];
        self.next += 1;
        self.trace.borrow_mut().push(Event::Read(value));
        RawSample::new(value).expect("test samples fit ten bits")
    }
}

pub struct TracingDelay {
    trace: Trace,
}

impl TracingDelay {
    pub fn new(trace: &Trace) -> Self {
        Self { trace: Rc::clone(trace) }
    }
}

impl DelayMs<u16> for TracingDelay {
    fn delay_ms(&mut self, ms: u16) {
        self.trace.borrow_mut().push(Event::Delay(ms));
    }
}

pub struct TracingPin {
    trace: Trace,
}

impl TracingPin {
    pub fn new(trace: &Trace) -> Self {
        Self { trace: Rc::clone(trace) }
    }
}

impl OutputPin for TracingPin {
    type Error = Infallible;

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.trace.borrow_mut().push(Event::PinHigh);
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.trace.borrow_mut().push(Event::PinLow);
        Ok(())
    }
}

/// `ufmt` sink collecting log output.
#[derive(Default)]
pub struct LogBuffer(pub String);

impl ufmt::uWrite for LogBuffer {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.0.push_str(s);
        Ok(())
    }
}
