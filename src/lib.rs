//! GPIO register mappings for the ESP32 family of chips.
//!
//! The crate describes every register of the GPIO (General Purpose
//! Input/Output) peripheral: its address, reset value and the layout of its
//! bit-fields. For each field the familiar `_S` (shift), `_V` (maximum value)
//! and `_M` (mask) constants of the vendor headers are available as `SHIFT`,
//! `MAX` and `MASK`.
//!
//! Supported chips, each behind a Cargo feature of the same name:
//!
//! * [ESP32-C3](map::esp32c3)
//! * [ESP32-C5](map::esp32c5)
//! * [ESP32-C61](map::esp32c61)
//! * [ESP32-H21](map::esp32h21)
//!
//! # Example
//!
//! ```
//! use drone_esp32_map::{map::esp32c61::gpio, reg::prelude::*};
//!
//! assert_eq!(gpio::BASE, 0x6009_1000);
//! assert_eq!(gpio::func0_out_sel_cfg::ADDRESS, 0x6009_1AD4);
//! assert_eq!(gpio::func0_out_sel_cfg::out_sel::MAX, 0x1FF);
//!
//! let mut pin = gpio::pin4::Val::default_val();
//! pin.write_int_type(drone_esp32_map::map::int_type::ANYEDGE).set_wakeup_enable();
//! assert_eq!(pin.bits(), 3 << 7 | 1 << 10);
//! ```
//!
//! On the target the registers are reached through zero-sized tokens:
//!
//! ```no_run
//! use drone_esp32_map::{map::esp32c3::gpio, reg::prelude::*};
//!
//! let mut regs = unsafe { gpio::Regs::take() };
//! regs.enable_w1ts.store(|r| r.write_enable_w1ts(1 << 5));
//! regs.pin5.modify(|r| r.set_pad_driver());
//! regs.out_w1ts.store(|r| r.write_out_w1ts(1 << 5));
//! ```
//!
//! # Features
//!
//! * `esp32c3`, `esp32c5`, `esp32c61`, `esp32h21` - chip maps, all enabled by
//!   default.
//! * `std` - enables [`std::error::Error`] implementations and sends the
//!   [`log`] output to the process stdout and stderr on hosted targets.

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::precedence,
    clippy::unreadable_literal
)]
#![cfg_attr(not(any(feature = "std", test)), no_std)]

extern crate self as drone_esp32_map;

pub mod bitfield;
pub mod check;
pub mod log;
pub mod map;
pub mod reg;
pub mod render;

pub use self::check::MapError;
