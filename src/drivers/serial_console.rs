use crate::hal::Uart;
use core::convert::Infallible;

/// Log sink for `ufmt::uwriteln!` over USART0.
pub struct SerialConsole {
    uart: Uart,
}

impl SerialConsole {
    pub fn new(uart: Uart) -> Self {
        Self { uart }
    }

    pub fn write_line(&mut self, s: &str) {
        self.uart.write_str(s).ok();
        self.uart.write_str("\r\n").ok();
    }
}

impl ufmt::uWrite for SerialConsole {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.uart.write_str(s)
    }
}
