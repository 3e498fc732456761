use super::{Crt, RegDesc, RegOwned, RegTag, Srt, Urt};
use crate::bitfield::Bitfield;
use core::ptr::{read_volatile, write_volatile};

/// Memory-mapped register token. Types which implement this trait are
/// zero-sized.
pub trait Reg<T: RegTag>: Sized {
    /// Register value type.
    type Val: Bitfield<Bits = u32>;

    /// Unsynchronized register token type.
    type UReg: Reg<Urt, Val = Self::Val>;

    /// Synchronized register token type.
    type SReg: Reg<Srt, Val = Self::Val>;

    /// Copyable register token type.
    type CReg: Reg<Crt, Val = Self::Val>;

    /// Offset from the peripheral base address.
    const OFFSET: usize;

    /// Absolute memory address of the register.
    const ADDRESS: usize;

    /// Register description.
    const DESC: &'static RegDesc;

    /// Creates a new register token.
    ///
    /// # Safety
    ///
    /// Must be called no more than once per register in the whole program,
    /// unless `T` is a shared tag.
    unsafe fn take() -> Self;

    /// Converts the token into an unsynchronized one.
    #[inline]
    fn into_unsync(self) -> Self::UReg
    where
        T: RegOwned,
    {
        unsafe { Self::UReg::take() }
    }

    /// Converts the token into a synchronized one.
    #[inline]
    fn into_sync(self) -> Self::SReg
    where
        T: RegOwned,
    {
        unsafe { Self::SReg::take() }
    }

    /// Converts the token into a copyable one.
    #[inline]
    fn into_copy(self) -> Self::CReg {
        unsafe { Self::CReg::take() }
    }

    /// Returns a raw pointer to the register.
    #[inline]
    fn as_ptr(&self) -> *const u32 {
        Self::ADDRESS as *const u32
    }

    /// Returns a raw mutable pointer to the register.
    #[inline]
    fn as_mut_ptr(&self) -> *mut u32 {
        Self::ADDRESS as *mut u32
    }
}

/// Readable register.
pub trait RReg<T: RegTag>: Reg<T> {
    /// Reads the register value.
    #[inline]
    fn load(&self) -> Self::Val {
        Self::Val::from_bits(self.load_bits())
    }

    /// Reads the raw register value.
    #[inline]
    fn load_bits(&self) -> u32 {
        unsafe { read_volatile(self.as_ptr()) }
    }
}

/// Writable register.
pub trait WReg<T: RegTag>: Reg<T> {
    /// Returns the reset value of the register.
    #[inline]
    fn reset_val(&self) -> Self::Val {
        Self::Val::default_val()
    }

    /// Passes the reset value to `f` and writes the result to the register.
    #[inline]
    fn store<F>(&self, f: F)
    where
        F: FnOnce(&mut Self::Val) -> &mut Self::Val,
    {
        let mut val = self.reset_val();
        self.store_val(*f(&mut val));
    }

    /// Writes `val` to the register.
    #[inline]
    fn store_val(&self, val: Self::Val) {
        self.store_bits(val.bits());
    }

    /// Writes the raw `bits` to the register.
    #[inline]
    fn store_bits(&self, bits: u32) {
        unsafe { write_volatile(self.as_mut_ptr(), bits) };
    }

    /// Writes the reset value to the register.
    #[inline]
    fn reset(&self) {
        self.store_val(self.reset_val());
    }
}

/// Read-only register.
pub trait RoReg<T: RegTag>: RReg<T> {}

/// Write-only register.
///
/// The output and interrupt `W1TS`/`W1TC` companions are write-only, so their
/// bits are set or cleared without a read-modify-write sequence.
pub trait WoReg<T: RegTag>: WReg<T> {}

/// Read-write register token which is the only owner of the register.
pub trait RwRegUnsync: RReg<Urt> + WReg<Urt> {
    /// Reads the register value, passes it to `f`, and writes the result back.
    fn modify<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Self::Val) -> &mut Self::Val;
}

impl<R: RReg<Urt> + WReg<Urt>> RwRegUnsync for R {
    #[inline]
    fn modify<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Self::Val) -> &mut Self::Val,
    {
        let mut val = self.load();
        self.store_val(*f(&mut val));
    }
}
