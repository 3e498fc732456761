//! Memory-mapped registers.
//!
//! # Mappings
//!
//! Register blocks are declared with the [`map!`] macro. Each block expands
//! into a module with the base address, one module per register, and the
//! [`BlockDesc`] table describing the whole block.
//!
//! ```
//! use drone_esp32_map::reg::prelude::*;
//!
//! drone_esp32_map::reg::map! {
//!     /// Timer block.
//!     pub mod TIMG; // block name
//!     0x6000_8000; // base address
//!
//!     /// Configuration register.
//!     CONFIG { // register name
//!         0x00; // offset from the base address
//!         /// Counter enable.
//!         EN { 0 1 R/W 0 } // offset, width, access, reset value
//!         /// Clock divider.
//!         DIVIDER { 1 16 R/W 1 }
//!     }
//!
//!     /// Counter value registers, one per channel.
//!     CNTn[0..2] { // `n` is replaced with the index
//!         0x10; // offset of the index 0, next ones are 4 bytes apart
//!         /// Counter value.
//!         VALUE as CNTn_VALUE { 0 32 RO x } // C header name; `x` marks an undefined reset value
//!     }
//! }
//!
//! fn main() {
//!     assert_eq!(timg::config::ADDRESS, 0x6000_8000);
//!     assert_eq!(timg::config::RESET, 0x0000_0002);
//!     assert_eq!(timg::config::divider::MASK, 0x0001_FFFE);
//!     assert_eq!(timg::cnt1::ADDRESS, 0x6000_8014);
//!     assert_eq!(timg::cnt1::value::DESC.header_name, "CNT1_VALUE");
//!     assert_eq!(timg::BLOCK.registers.len(), 3);
//!
//!     let mut val = timg::config::Val::default_val();
//!     val.set_en().write_divider(80);
//!     assert_eq!(val.bits(), 80 << 1 | 1);
//! }
//! ```
//!
//! A field is named in the C headers after its identifier unless it carries an
//! `as` alias. In a register array the first `n` of the alias is replaced with
//! the index, as in the register name.
//!
//! # Tokens
//!
//! Every register module has a zero-sized `Reg<T>` token type. The token
//! implements [`RReg`] if the register has a readable field and [`WReg`] if it
//! has a writable field. The tag `T` tells how the token may be shared:
//!
//! * [`Urt`] (unsynchronized) tokens are unique and allow
//!   [`modify`](RwRegUnsync::modify);
//! * [`Srt`] (synchronized) tokens can be sent between threads;
//! * [`Crt`] (copyable) tokens implement [`Copy`].
//!
//! The `Regs` struct of each block holds unsynchronized tokens for all of its
//! registers.

pub mod prelude;

mod access;
mod desc;
mod marker;
mod tag;

pub use self::{
    access::Access,
    desc::{low_mask, BlockDesc, FieldDesc, RegDesc, REG_SIZE, REG_WIDTH},
    marker::{RReg, Reg, RoReg, RwRegUnsync, WReg, WoReg},
    tag::{Crt, RegOwned, RegShared, RegTag, Srt, Urt},
};

/// Defines a memory-mapped register block.
///
/// See [the module level documentation](self) for details.
#[doc(inline)]
pub use drone_esp32_map_macros::reg_map as map;

mod compile_tests {
    //! ```compile_fail
    //! use drone_esp32_map::reg::prelude::*;
    //! drone_esp32_map::reg::map! {
    //!     pub mod TST; 0x6000_0000;
    //!     RW_REG { 0x00; BIT { 0 1 R/W 0 } }
    //! }
    //! fn assert_rw_reg_unsync<T: RwRegUnsync>() {}
    //! fn main() {
    //!     assert_rw_reg_unsync::<tst::rw_reg::Reg<Srt>>();
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_esp32_map::reg::prelude::*;
    //! drone_esp32_map::reg::map! {
    //!     pub mod TST; 0x6000_0000;
    //!     RO_REG { 0x00; BIT { 0 1 RO 0 } }
    //! }
    //! fn assert_rw_reg_unsync<T: RwRegUnsync>() {}
    //! fn main() {
    //!     assert_rw_reg_unsync::<tst::ro_reg::Reg<Urt>>();
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_esp32_map::reg::prelude::*;
    //! drone_esp32_map::reg::map! {
    //!     pub mod TST; 0x6000_0000;
    //!     W1TS { 0x00; W1TS { 0 26 WT 0 } }
    //! }
    //! fn main() {
    //!     let reg = unsafe { tst::w1ts::Reg::<Urt>::take() };
    //!     let _ = reg.load();
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_esp32_map::reg::prelude::*;
    //! drone_esp32_map::reg::map! {
    //!     pub mod TST; 0x6000_0000;
    //!     RO_REG { 0x00; LEVEL { 0 4 RO 0 } }
    //! }
    //! fn main() {
    //!     let mut val = tst::ro_reg::Val::default_val();
    //!     val.write_level(1);
    //! }
    //! ```
    //!
    //! ```
    //! use drone_esp32_map::reg::prelude::*;
    //! drone_esp32_map::reg::map! {
    //!     pub mod TST; 0x6000_0000;
    //!     RW_REG { 0x00; BIT { 0 1 R/W 0 } }
    //! }
    //! fn assert_rw_reg_unsync<T: RwRegUnsync>() {}
    //! fn main() {
    //!     assert_rw_reg_unsync::<tst::rw_reg::Reg<Urt>>();
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_esp32_map::reg::prelude::*;
    //! drone_esp32_map::reg::map! {
    //!     pub mod TST; 0x6000_0000;
    //!     REG { 0x00; BIT { 0 1 R/W 0 } }
    //! }
    //! fn assert_copy<T: Copy>() {}
    //! fn main() {
    //!     assert_copy::<tst::reg::Reg<Urt>>();
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_esp32_map::reg::prelude::*;
    //! drone_esp32_map::reg::map! {
    //!     pub mod TST; 0x6000_0000;
    //!     REG { 0x00; BIT { 0 1 R/W 0 } }
    //! }
    //! fn assert_clone<T: Clone>() {}
    //! fn main() {
    //!     assert_clone::<tst::reg::Reg<Srt>>();
    //! }
    //! ```
    //!
    //! ```
    //! use drone_esp32_map::reg::prelude::*;
    //! drone_esp32_map::reg::map! {
    //!     pub mod TST; 0x6000_0000;
    //!     REG { 0x00; BIT { 0 1 R/W 0 } }
    //! }
    //! fn assert_copy<T: Copy>() {}
    //! fn main() {
    //!     assert_copy::<tst::reg::Reg<Crt>>();
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! drone_esp32_map::reg::map! {
    //!     pub mod TST; 0x6000_0000;
    //!     REG { 0x00; A { 0 4 R/W 0 } B { 3 2 R/W 0 } }
    //! }
    //! fn main() {}
    //! ```
    //!
    //! ```compile_fail
    //! drone_esp32_map::reg::map! {
    //!     pub mod TST; 0x6000_0000;
    //!     REG { 0x02; A { 0 4 R/W 0 } }
    //! }
    //! fn main() {}
    //! ```
    //!
    //! ```compile_fail
    //! drone_esp32_map::reg::map! {
    //!     pub mod TST; 0x6000_0000;
    //!     REG { 0x00; A { 0 2 R/W 4 } }
    //! }
    //! fn main() {}
    //! ```
    //!
    //! ```compile_fail
    //! drone_esp32_map::reg::map! {
    //!     pub mod TST; 0x6000_0000;
    //!     PIN[0..4] { 0x00; A { 0 2 R/W 0 } }
    //! }
    //! fn main() {}
    //! ```
    //!
    //! ```
    //! drone_esp32_map::reg::map! {
    //!     pub mod TST; 0x6000_0000;
    //!     REG { 0x00; A { 28 4 R/W 0 } }
    //! }
    //! fn main() {}
    //! ```
    //!
    //! ```compile_fail
    //! drone_esp32_map::reg::map! {
    //!     pub mod TST; 0x6000_0000;
    //!     REG { 0x00; A { 30 4 R/W 0 } }
    //! }
    //! fn main() {}
    //! ```
    //!
    //! ```compile_fail
    //! drone_esp32_map::reg::map! {
    //!     pub mod TST; 0x6000_0000;
    //!     REG { 0x00; A { 0 0 R/W 0 } }
    //! }
    //! fn main() {}
    //! ```
    //!
    //! ```
    //! drone_esp32_map::reg::map! {
    //!     pub mod TST; 0x6000_0000;
    //!     PINn[0..2] { 0x00; A { 0 1 R/W 0 } }
    //!     PIN2 { 0x08; A { 0 1 R/W 0 } }
    //! }
    //! fn main() {}
    //! ```
    //!
    //! ```compile_fail
    //! drone_esp32_map::reg::map! {
    //!     pub mod TST; 0x6000_0000;
    //!     PINn[0..2] { 0x00; A { 0 1 R/W 0 } }
    //!     PIN1 { 0x10; A { 0 1 R/W 0 } }
    //! }
    //! fn main() {}
    //! ```
    //!
    //! ```compile_fail
    //! drone_esp32_map::reg::map! {
    //!     pub mod TST; 0x6000_0000;
    //!     REG { 0x00; A { 0 1 R/W 0 } }
    //!     REG { 0x04; A { 0 1 R/W 0 } }
    //! }
    //! fn main() {}
    //! ```
    //!
    //! ```compile_fail
    //! drone_esp32_map::reg::map! {
    //!     pub mod TST; 0x6000_0000;
    //!     A_REG { 0x04; A { 0 1 R/W 0 } }
    //!     B_REG { 0x04; B { 0 1 R/W 0 } }
    //! }
    //! fn main() {}
    //! ```
    //!
    //! ```compile_fail
    //! drone_esp32_map::reg::map! {
    //!     pub mod TST; 0x6000_0000;
    //!     PINn[0..2] { 0x00; A { 0 1 R/W 0 } }
    //!     OTHER { 0x04; A { 0 1 R/W 0 } }
    //! }
    //! fn main() {}
    //! ```
    //!
    //! ```compile_fail
    //! drone_esp32_map::reg::map! {
    //!     pub mod TST; 0x6000_0000;
    //!     Rn[1073741824] { 0x00; A { 0 1 R/W 0 } }
    //! }
    //! fn main() {}
    //! ```
    //!
    //! ```
    //! drone_esp32_map::reg::map! {
    //!     pub mod TST; 0x6000_0000;
    //!     PINn[0..2] { 0x00; A as PINn_A { 0 1 R/W 0 } }
    //!     REG { 0x08; B as REG_B { 0 1 R/W 0 } }
    //! }
    //! fn main() {
    //!     assert_eq!(tst::pin1::a::DESC.header_name, "PIN1_A");
    //!     assert_eq!(tst::reg::b::DESC.header_name, "REG_B");
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! drone_esp32_map::reg::map! {
    //!     pub mod TST; 0x6000_0000;
    //!     REG { 0x00; A as PINn_A { 0 1 R/W 0 } }
    //! }
    //! fn main() {}
    //! ```
}
