//! # Serial Logging
//!
//! Leveled log macros backed by the COM1 UART.
//!
//! ```ignore
//! deskcore::logging::init();
//! klog_info!("ps2: aux port enabled");
//! ```
//!
//! Lines logged before `init` are dropped. Under the host test harness
//! lines go to stderr instead of the I/O port.

use core::fmt;
use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use spin::Mutex;
use uart_16550::SerialPort;

pub static SERIAL: Mutex<SerialPort> = Mutex::new(unsafe { SerialPort::new(0x3F8) });

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    fn tag(self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }
}

static LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Info as u8);
static SERIAL_READY: AtomicBool = AtomicBool::new(false);

/// Program the UART and start emitting lines.
pub fn init() {
    SERIAL.lock().init();
    SERIAL_READY.store(true, Ordering::Release);
}

pub fn set_level(level: LogLevel) {
    LEVEL.store(level as u8, Ordering::Relaxed);
}

#[inline]
pub fn enabled(level: LogLevel) -> bool {
    level as u8 <= LEVEL.load(Ordering::Relaxed)
}

#[doc(hidden)]
pub fn _log(level: LogLevel, args: fmt::Arguments<'_>) {
    if !enabled(level) {
        return;
    }
    write_line(level, args);
}

#[cfg(not(test))]
fn write_line(level: LogLevel, args: fmt::Arguments<'_>) {
    use core::fmt::Write;
    if !SERIAL_READY.load(Ordering::Acquire) {
        return;
    }
    let mut serial = SERIAL.lock();
    let _ = write!(serial, "[{}] ", level.tag());
    let _ = serial.write_fmt(args);
    let _ = serial.write_str("\n");
}

#[cfg(test)]
fn write_line(level: LogLevel, args: fmt::Arguments<'_>) {
    std::eprintln!("[{}] {}", level.tag(), args);
}

#[macro_export]
macro_rules! klog_error {
    ($($arg:tt)*) => {
        $crate::logging::_log($crate::logging::LogLevel::Error, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! klog_warn {
    ($($arg:tt)*) => {
        $crate::logging::_log($crate::logging::LogLevel::Warn, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! klog_info {
    ($($arg:tt)*) => {
        $crate::logging::_log($crate::logging::LogLevel::Info, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! klog_debug {
    ($($arg:tt)*) => {
        $crate::logging::_log($crate::logging::LogLevel::Debug, format_args!($($arg)*))
    };
}
