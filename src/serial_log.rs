//! # Serial Logging
//!
//! Diagnostic output over a 16550 UART. The port is owned by the embedder:
//! nothing is written until [`init_serial`] has been called, which keeps the
//! crate usable in hosted tests where port I/O would fault.

use core::fmt;
use spin::Mutex;

#[cfg(target_arch = "x86_64")]
use uart_16550::SerialPort;

/// Conventional COM1 base port
pub const COM1: u16 = 0x3F8;

#[cfg(target_arch = "x86_64")]
static SERIAL: Mutex<Option<SerialPort>> = Mutex::new(None);

#[cfg(not(target_arch = "x86_64"))]
static SERIAL: Mutex<Option<()>> = Mutex::new(None);

/// Route `gfx_log!` output to the UART at `base`
///
/// # Safety
/// `base` must be the I/O port of a 16550-compatible UART that nothing else
/// is driving.
#[cfg(target_arch = "x86_64")]
pub unsafe fn init_serial(base: u16) {
    let mut port = SerialPort::new(base);
    port.init();
    *SERIAL.lock() = Some(port);
}

/// Stop logging and hand the port back to whoever wants it
pub fn shutdown() {
    SERIAL.lock().take();
}

/// Whether a sink is installed
pub fn enabled() -> bool {
    SERIAL.lock().is_some()
}

#[doc(hidden)]
pub fn _log(args: fmt::Arguments) {
    #[cfg(target_arch = "x86_64")]
    {
        use core::fmt::Write;
        if let Some(serial) = SERIAL.lock().as_mut() {
            let _ = writeln!(serial, "[vgcore] {}", args);
        }
    }
    #[cfg(not(target_arch = "x86_64"))]
    let _ = args;
}

/// Write one line to the serial log, if one is installed
#[macro_export]
macro_rules! gfx_log {
    ($($arg:tt)*) => {{
        $crate::serial_log::_log(format_args!($($arg)*));
    }};
}
