//! Logging support.
//!
//! On bare-metal targets the bytes are passed to the `drone_log_is_enabled`
//! and `drone_log_write_bytes` hooks, which are provided by the platform
//! runtime. On hosted targets with the `std` feature the standard output and
//! error ports are the process stdout and stderr. Otherwise logging is
//! disabled.

mod macros;
mod port;

pub use self::port::Port;

use core::{fmt, fmt::Write};

#[cfg(target_os = "none")]
extern "C" {
    fn drone_log_is_enabled(port: u8) -> bool;
    fn drone_log_write_bytes(port: u8, buffer: *const u8, count: usize);
}

/// Port number of the standard output stream.
pub const STDOUT_PORT: u8 = 0;

/// Port number of the standard error stream.
pub const STDERR_PORT: u8 = 1;

/// Number of ports.
pub const PORTS_COUNT: u8 = 32;

/// Returns port for standard output.
#[inline]
pub const fn stdout() -> Port {
    Port::new(STDOUT_PORT)
}

/// Returns port for standard error.
#[inline]
pub const fn stderr() -> Port {
    Port::new(STDERR_PORT)
}

/// Writes `string` to the log port number `port`.
///
/// The port is not checked to be enabled, so it is recommended to use this
/// function together with [`Port::is_enabled`].
///
/// # Examples
///
/// ```
/// use drone_esp32_map::{log, log::Port};
///
/// if Port::new(11).is_enabled() {
///     log::write_str(11, "hello there!\n");
/// }
/// ```
#[inline(never)]
pub fn write_str(port: u8, string: &str) {
    Port::new(port).write_str(string).unwrap_or(());
}

/// Writes `args` to the log port number `port`.
///
/// The port is not checked to be enabled, so it is recommended to use this
/// function together with [`Port::is_enabled`].
#[inline(never)]
pub fn write_fmt(port: u8, args: fmt::Arguments<'_>) {
    Port::new(port).write_fmt(args).unwrap_or(());
}
