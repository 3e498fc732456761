use core::fmt;

/// Register field access mode.
///
/// A combination of the access flags used by the chip reference manuals, for
/// example `R/W/SC/WTC` for a read-write field which is cleared by hardware
/// and can be cleared by writing 1.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Access(u16);

impl Access {
    /// Readable.
    pub const R: Self = Self(1 << 0);
    /// Writable.
    pub const W: Self = Self(1 << 1);
    /// Read-only.
    pub const RO: Self = Self(1 << 2);
    /// Write-only.
    pub const WO: Self = Self(1 << 3);
    /// Write-trigger: writing produces a pulse, reads return nothing useful.
    pub const WT: Self = Self(1 << 4);
    /// Write 1 to clear.
    pub const WTC: Self = Self(1 << 5);
    /// Write 1 to set.
    pub const WTS: Self = Self(1 << 6);
    /// Self-clearing: hardware clears the field.
    pub const SC: Self = Self(1 << 7);
    /// Self-setting: hardware sets the field.
    pub const SS: Self = Self(1 << 8);

    /// Plain read-write.
    pub const RW: Self = Self::R.union(Self::W);

    const FLAGS: [(Self, &'static str); 9] = [
        (Self::R, "R"),
        (Self::W, "W"),
        (Self::RO, "RO"),
        (Self::WO, "WO"),
        (Self::SC, "SC"),
        (Self::SS, "SS"),
        (Self::WT, "WT"),
        (Self::WTC, "WTC"),
        (Self::WTS, "WTS"),
    ];

    /// Returns an access mode with no flags.
    #[inline]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Returns the raw flags.
    #[inline]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Returns the union of two access modes.
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns `true` if all flags of `other` are present.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if no flags are set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if software can read the field.
    #[inline]
    pub const fn is_readable(self) -> bool {
        self.0 & (Self::R.0 | Self::RO.0) != 0
    }

    /// Returns `true` if software can write the field.
    #[inline]
    pub const fn is_writable(self) -> bool {
        self.0 & (Self::W.0 | Self::WO.0 | Self::WT.0 | Self::WTC.0 | Self::WTS.0) != 0
    }

    /// Returns `true` if hardware can change the field on its own.
    #[inline]
    pub const fn is_volatile(self) -> bool {
        self.0 & (Self::SC.0 | Self::SS.0 | Self::RO.0) != 0
    }

    /// Parses a single flag name, such as `"WTC"`.
    pub fn from_flag(flag: &str) -> Option<Self> {
        Self::FLAGS.iter().find(|(_, name)| *name == flag).map(|&(access, _)| access)
    }

    /// Parses the slash-separated notation, such as `"R/W/SC"`.
    pub fn parse(notation: &str) -> Option<Self> {
        let mut access = Self::empty();
        for flag in notation.split('/') {
            access = access.union(Self::from_flag(flag.trim())?);
        }
        if access.is_empty() { None } else { Some(access) }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (flag, name) in Self::FLAGS {
            if self.contains(flag) {
                if !first {
                    f.write_str("/")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!(Access::parse("R/W"), Some(Access::RW));
        assert_eq!(Access::parse("RO"), Some(Access::RO));
        assert_eq!(
            Access::parse("R/W/SC/WTC"),
            Some(Access::R.union(Access::W).union(Access::SC).union(Access::WTC))
        );
        assert_eq!(Access::parse(""), None);
        assert_eq!(Access::parse("R/X"), None);
    }

    #[test]
    fn capabilities() {
        assert!(Access::RO.is_readable());
        assert!(!Access::RO.is_writable());
        assert!(Access::WT.is_writable());
        assert!(!Access::WT.is_readable());
        assert!(!Access::WO.is_readable());
        assert!(Access::RW.is_readable() && Access::RW.is_writable());
        assert!(Access::parse("R/W/SS").unwrap().is_volatile());
        assert!(!Access::RW.is_volatile());
    }

    #[test]
    fn display() {
        assert_eq!(Access::parse("R/W/SC/WTC").unwrap().to_string(), "R/W/SC/WTC");
        assert_eq!(Access::parse("WTC/R").unwrap().to_string(), "R/WTC");
        assert_eq!(Access::WT.to_string(), "WT");
        assert_eq!(Access::empty().to_string(), "");
    }
}
