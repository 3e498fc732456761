use super::PORTS_COUNT;
use core::{fmt, fmt::Write};

/// Logger port handle.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Port(u8);

impl Port {
    /// Creates a new port handle.
    ///
    /// # Panics
    ///
    /// If `port` is more than or equal to [`PORTS_COUNT`].
    #[inline]
    pub const fn new(port: u8) -> Self {
        assert!(port < PORTS_COUNT);
        Self(port)
    }

    /// Returns the port number.
    #[inline]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Returns `true` if someone is listening to the port.
    #[inline]
    pub fn is_enabled(self) -> bool {
        imp::is_enabled(self.0)
    }

    /// Writes a sequence of bytes to the port.
    #[inline]
    pub fn write_bytes(self, bytes: &[u8]) -> Self {
        imp::write_bytes(self.0, bytes);
        self
    }
}

impl Write for Port {
    #[inline]
    fn write_str(&mut self, string: &str) -> fmt::Result {
        self.write_bytes(string.as_bytes());
        Ok(())
    }
}

#[cfg(target_os = "none")]
mod imp {
    use super::super::{drone_log_is_enabled, drone_log_write_bytes};

    pub fn is_enabled(port: u8) -> bool {
        unsafe { drone_log_is_enabled(port) }
    }

    pub fn write_bytes(port: u8, bytes: &[u8]) {
        unsafe { drone_log_write_bytes(port, bytes.as_ptr(), bytes.len()) };
    }
}

#[cfg(all(not(target_os = "none"), feature = "std"))]
mod imp {
    use crate::log::{STDERR_PORT, STDOUT_PORT};
    use std::io::{self, Write};

    pub fn is_enabled(port: u8) -> bool {
        port == STDOUT_PORT || port == STDERR_PORT
    }

    pub fn write_bytes(port: u8, bytes: &[u8]) {
        // Logging never fails the caller.
        let _ = match port {
            STDOUT_PORT => io::stdout().write_all(bytes),
            STDERR_PORT => io::stderr().write_all(bytes),
            _ => Ok(()),
        };
    }
}

#[cfg(all(not(target_os = "none"), not(feature = "std")))]
mod imp {
    pub fn is_enabled(_port: u8) -> bool {
        false
    }

    pub fn write_bytes(_port: u8, _bytes: &[u8]) {}
}
