//! GPIO register maps of the ESP32 family.
//!
//! Each chip module is enabled by the Cargo feature of the same name and
//! contains a `gpio` block declared with [`reg::map!`](crate::reg::map).
//! Registers repeated per pad or per signal are numbered the way the reference
//! manuals do: `gpio::pin5`, `gpio::func17_in_sel_cfg`, `gpio::func5_out_sel_cfg`.
//!
//! ```
//! # #[cfg(feature = "esp32c3")] {
//! use drone_esp32_map::map::esp32c3::gpio;
//!
//! assert_eq!(gpio::pin5::ADDRESS, 0x6000_4088);
//! assert_eq!(gpio::pin5::int_type::MASK, 0x380);
//! assert_eq!(gpio::func5_out_sel_cfg::RESET, 0x80);
//! # }
//! ```

#[cfg(feature = "esp32c3")]
pub mod esp32c3;
#[cfg(feature = "esp32c5")]
pub mod esp32c5;
#[cfg(feature = "esp32c61")]
pub mod esp32c61;
#[cfg(feature = "esp32h21")]
pub mod esp32h21;

use crate::reg::BlockDesc;

/// GPIO matrix summary of a chip.
#[derive(Clone, Copy, Debug)]
pub struct Chip {
    /// Chip name, such as `esp32c3`.
    pub name: &'static str,
    /// GPIO register block.
    pub block: &'static BlockDesc,
    /// Number of `PINn` configuration registers.
    pub pin_count: usize,
    /// Upper bound of the input signal indices.
    pub input_signal_count: usize,
    /// `IN_SEL` value for a constant low level.
    pub constant_low_input: u32,
    /// `IN_SEL` value for a constant high level.
    pub constant_high_input: u32,
    /// `OUT_SEL` value for the plain GPIO output.
    pub gpio_output_signal: u32,
}

/// Chips enabled by Cargo features.
pub const CHIPS: &[Chip] = &[
    #[cfg(feature = "esp32c3")]
    esp32c3::CHIP,
    #[cfg(feature = "esp32c5")]
    esp32c5::CHIP,
    #[cfg(feature = "esp32c61")]
    esp32c61::CHIP,
    #[cfg(feature = "esp32h21")]
    esp32h21::CHIP,
];

/// Looks up an enabled chip by name.
pub fn chip(name: &str) -> Option<&'static Chip> {
    CHIPS.iter().find(|chip| chip.name == name)
}

/// Values of the `INT_TYPE` field of the `PINn` registers.
pub mod int_type {
    /// Interrupt disabled.
    pub const DISABLE: u32 = 0;
    /// Trigger at rising edge.
    pub const POSEDGE: u32 = 1;
    /// Trigger at falling edge.
    pub const NEGEDGE: u32 = 2;
    /// Trigger at any edge.
    pub const ANYEDGE: u32 = 3;
    /// Active at low level.
    pub const LOW_LEVEL: u32 = 4;
    /// Active at high level.
    pub const HIGH_LEVEL: u32 = 5;
}

/// Values of the `PAD_DRIVER` field of the `PINn` registers.
pub mod pad_driver {
    /// Push-pull output.
    pub const NORMAL: u32 = 0;
    /// Open-drain output.
    pub const OPEN_DRAIN: u32 = 1;
}

/// Values of the `SYNC1_BYPASS` and `SYNC2_BYPASS` fields of the `PINn`
/// registers.
pub mod sync_bypass {
    /// Synchronization disabled.
    pub const DISABLE: u32 = 0;
    /// Synchronize at falling edge.
    pub const NEGEDGE: u32 = 1;
    /// Synchronize at rising edge.
    pub const POSEDGE: u32 = 2;
}
