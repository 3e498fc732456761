//! A packed register value, which fits within a single integer.
//!
//! Every register of a [`reg_map!`](crate::reg::map) block gets a `Val` type
//! implementing [`Bitfield`]. The generated per-field accessors are thin
//! wrappers over the methods of this trait.
//!
//! ```
//! use drone_esp32_map::bitfield::Bitfield;
//!
//! #[derive(Clone, Copy)]
//! struct Packed(u8);
//!
//! impl Bitfield for Packed {
//!     type Bits = u8;
//!
//!     const DEFAULT: u8 = 0b0000_0100;
//!
//!     fn from_bits(bits: u8) -> Self {
//!         Self(bits)
//!     }
//!
//!     fn bits(&self) -> u8 {
//!         self.0
//!     }
//!
//!     fn bits_mut(&mut self) -> &mut u8 {
//!         &mut self.0
//!     }
//! }
//!
//! let mut x = Packed::default_val();
//! assert!(unsafe { x.read_bit(2) });
//! unsafe { x.write_bits(4, 3, 0b101) };
//! assert_eq!(x.bits(), 0b0101_0100);
//! ```

mod bits;

pub use self::bits::Bits;

/// A packed register value, which fits within a single integer.
///
/// See [the module level documentation](self) for more.
pub trait Bitfield: Sized + Send + Sync + Clone + Copy + 'static {
    /// The underlying integer type.
    type Bits: Bits;

    /// The default value, which is the register reset value.
    const DEFAULT: Self::Bits;

    /// Creates a new `Bitfield` from raw bits.
    fn from_bits(bits: Self::Bits) -> Self;

    /// Returns the underlying integer.
    fn bits(&self) -> Self::Bits;

    /// Returns a mutable reference to the underlying integer.
    fn bits_mut(&mut self) -> &mut Self::Bits;

    /// Creates a new `Bitfield` from the default value.
    #[inline]
    fn default_val() -> Self {
        Self::from_bits(Self::DEFAULT)
    }

    /// Reads the state of the bit at `offset`.
    ///
    /// # Safety
    ///
    /// * `offset` must be less than the size of [`Bits`] in bits.
    ///
    /// [`Bits`]: Bitfield::Bits
    #[inline]
    unsafe fn read_bit(&self, offset: Self::Bits) -> bool {
        !(self.bits() & bit_at(offset)).is_zero()
    }

    /// Sets the bit at `offset`.
    ///
    /// # Safety
    ///
    /// * `offset` must be less than the size of [`Bits`] in bits.
    ///
    /// [`Bits`]: Bitfield::Bits
    #[inline]
    unsafe fn set_bit(&mut self, offset: Self::Bits) {
        *self.bits_mut() = self.bits() | bit_at(offset);
    }

    /// Clears the bit at `offset`.
    ///
    /// # Safety
    ///
    /// * `offset` must be less than the size of [`Bits`] in bits.
    ///
    /// [`Bits`]: Bitfield::Bits
    #[inline]
    unsafe fn clear_bit(&mut self, offset: Self::Bits) {
        *self.bits_mut() = self.bits() & !bit_at(offset);
    }

    /// Toggles the bit at `offset`.
    ///
    /// # Safety
    ///
    /// * `offset` must be less than the size of [`Bits`] in bits.
    ///
    /// [`Bits`]: Bitfield::Bits
    #[inline]
    unsafe fn toggle_bit(&mut self, offset: Self::Bits) {
        *self.bits_mut() = self.bits() ^ bit_at(offset);
    }

    /// Reads `width` number of low order bits at the `offset` position.
    ///
    /// # Safety
    ///
    /// * `offset` must be less than the size of [`Bits`] in bits.
    /// * `width + offset` must be less than or equal to the size of [`Bits`] in
    ///   bits.
    ///
    /// [`Bits`]: Bitfield::Bits
    #[inline]
    unsafe fn read_bits(&self, offset: Self::Bits, width: Self::Bits) -> Self::Bits {
        if width == Self::Bits::width() {
            self.bits()
        } else {
            self.bits() >> offset & bit_mask(width)
        }
    }

    /// Copies `width` number of low order bits from `bits` into the same number
    /// of adjacent bits at `offset` position. Bits of `bits` above `width` are
    /// discarded.
    ///
    /// # Safety
    ///
    /// * `offset` must be less than the size of [`Bits`] in bits.
    /// * `width + offset` must be less than or equal to the size of [`Bits`] in
    ///   bits.
    ///
    /// [`Bits`]: Bitfield::Bits
    #[inline]
    unsafe fn write_bits(&mut self, offset: Self::Bits, width: Self::Bits, bits: Self::Bits) {
        *self.bits_mut() = if width == Self::Bits::width() {
            bits
        } else {
            self.bits() & !(bit_mask(width) << offset) | (bits & bit_mask(width)) << offset
        };
    }
}

fn bit_at<T: Bits>(offset: T) -> T {
    T::one() << offset
}

fn bit_mask<T: Bits>(width: T) -> T {
    bit_at(width) - T::one()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy)]
    struct Word(u32);

    impl Bitfield for Word {
        type Bits = u32;

        const DEFAULT: u32 = 0xDEAD_BEEF;

        fn from_bits(bits: u32) -> Self {
            Self(bits)
        }

        fn bits(&self) -> u32 {
            self.0
        }

        fn bits_mut(&mut self) -> &mut u32 {
            &mut self.0
        }
    }

    #[test]
    fn default_val() {
        assert_eq!(Word::default_val().bits(), 0xDEAD_BEEF);
    }

    #[test]
    fn full_width() {
        let mut x = Word(0x1234_5678);
        assert_eq!(unsafe { x.read_bits(0, 32) }, 0x1234_5678);
        unsafe { x.write_bits(0, 32, 0xFFFF_0000) };
        assert_eq!(x.bits(), 0xFFFF_0000);
    }

    #[test]
    fn write_bits_truncates() {
        let mut x = Word(0);
        unsafe { x.write_bits(4, 2, 0b1111) };
        assert_eq!(x.bits(), 0b11_0000);
    }

    #[test]
    fn top_bit() {
        let mut x = Word(0);
        unsafe { x.set_bit(31) };
        assert_eq!(x.bits(), 1 << 31);
        assert!(unsafe { x.read_bit(31) });
        unsafe { x.toggle_bit(31) };
        assert_eq!(x.bits(), 0);
    }
}
