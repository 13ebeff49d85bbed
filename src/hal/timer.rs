use avr_device::atmega128a::TC0;
use embedded_hal::blocking::delay::DelayMs;

use crate::config::CPU_FREQ_HZ;

// CS02:0 = 010, clk/8
const PRESCALER_DIV8: u8 = 0x02;
const PRESCALER_MASK: u8 = 0x07;
const TICKS_PER_MS: u8 = (CPU_FREQ_HZ / 8 / 1000) as u8;

/// Millisecond delay that polls Timer0.
pub struct Delay {
    timer: TC0,
}

impl Delay {
    pub fn new(timer: TC0) -> Self {
        unsafe {
            // Normal mode, stopped
            timer.tccr0.write(|w| w.bits(0));
            timer.tcnt0.write(|w| w.bits(0));
        }
        Self { timer }
    }

    fn start(&mut self) {
        unsafe {
            self.timer.tcnt0.write(|w| w.bits(0));
            self.timer.tccr0.modify(|r, w| {
                w.bits((r.bits() & !PRESCALER_MASK) | PRESCALER_DIV8)
            });
        }
    }

    fn stop(&mut self) {
        unsafe {
            self.timer.tccr0.modify(|r, w| w.bits(r.bits() & !PRESCALER_MASK));
        }
    }
}

impl DelayMs<u16> for Delay {
    fn delay_ms(&mut self, ms: u16) {
        self.start();
        for _ in 0..ms {
            while self.timer.tcnt0.read().bits() < TICKS_PER_MS {}
            unsafe {
                self.timer.tcnt0.write(|w| w.bits(0));
            }
        }
        self.stop();
    }
}

impl DelayMs<u8> for Delay {
    fn delay_ms(&mut self, ms: u8) {
        DelayMs::<u16>::delay_ms(self, u16::from(ms));
    }
}
