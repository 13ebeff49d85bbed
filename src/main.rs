#![cfg_attr(target_arch = "avr", no_std, no_main)]

#[cfg(target_arch = "avr")]
mod firmware {
    use panic_halt as _;

    use avr_device::atmega128a::Peripherals;
    use vcc_gauge::config::{CPU_FREQ_HZ, LED_PIN, REFERENCE};
    use vcc_gauge::drivers::{BlinkSignal, BlinkTiming, SerialConsole};
    use vcc_gauge::hal::gpio::board::Led;
    use vcc_gauge::hal::{Adc, Delay, Pin, Uart};
    use vcc_gauge::{Gauge, VoltageSampler};

    #[avr_device::entry]
    fn main() -> ! {
        let dp = Peripherals::take().unwrap();

        let mut console = SerialConsole::new(Uart::new(dp.USART0));
        let mut delay = Delay::new(dp.TC0);

        // Only handle to PA7 in the program
        let led: Led = unsafe { Pin::<LED_PIN, _>::steal() }.into_output();

        let sampler = VoltageSampler::new(Adc::new(dp.ADC), REFERENCE, CPU_FREQ_HZ);
        let mut gauge = Gauge::new(sampler, BlinkSignal::new(led, BlinkTiming::default()));

        console.write_line("Vcc gauge v0.1.0");

        loop {
            match gauge.run_cycle(&mut delay, &mut console) {
                Ok(_) => {}
                Err(never) => match never {},
            }
        }
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {
    eprintln!("vcc_gauge firmware only runs on AVR targets; see the library tests for host use");
}
