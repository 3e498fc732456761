#![no_implicit_prelude]

use ::core::clone::Clone;
use ::core::marker::Copy;
use ::drone_esp32_map::bitfield::Bitfield;
use ::std::assert_eq;

#[derive(Copy, Clone)]
pub struct Byte(u8);

impl Bitfield for Byte {
    type Bits = u8;

    const DEFAULT: u8 = 0b0101_0101;

    fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    fn bits(&self) -> u8 {
        self.0
    }

    fn bits_mut(&mut self) -> &mut u8 {
        &mut self.0
    }
}

#[test]
fn default_val() {
    assert_eq!(Byte::default_val().bits(), 0b0101_0101);
    assert_eq!(Byte::from_bits(0xA5).bits(), 0xA5);
}

#[test]
fn read_bit() {
    let x = Byte(0b1010_1010);
    assert!(!unsafe { x.read_bit(0) });
    assert!(unsafe { x.read_bit(1) });
    assert!(!unsafe { x.read_bit(2) });
    assert!(unsafe { x.read_bit(3) });
    assert!(!unsafe { x.read_bit(4) });
    assert!(unsafe { x.read_bit(5) });
    assert!(!unsafe { x.read_bit(6) });
    assert!(unsafe { x.read_bit(7) });
}

#[test]
fn set_bit() {
    let mut x = Byte(0b1010_1010);
    unsafe {
        x.set_bit(0);
        x.set_bit(7);
        x.set_bit(4);
        x.set_bit(3);
    }
    assert_eq!(x.bits(), 0b1011_1011);
}

#[test]
fn clear_bit() {
    let mut x = Byte(0b1010_1010);
    unsafe {
        x.clear_bit(0);
        x.clear_bit(7);
        x.clear_bit(4);
        x.clear_bit(3);
    }
    assert_eq!(x.bits(), 0b0010_0010);
}

#[test]
fn toggle_bit() {
    let mut x = Byte(0b1010_1010);
    unsafe {
        x.toggle_bit(0);
        x.toggle_bit(7);
        x.toggle_bit(4);
        x.toggle_bit(3);
    }
    assert_eq!(x.bits(), 0b0011_0011);
}

#[test]
fn read_bits() {
    let x = Byte(0b1010_0110);
    assert_eq!(unsafe { x.read_bits(0, 2) }, 0b10);
    assert_eq!(unsafe { x.read_bits(1, 3) }, 0b011);
    assert_eq!(unsafe { x.read_bits(5, 3) }, 0b101);
    assert_eq!(unsafe { x.read_bits(0, 8) }, 0b1010_0110);
}

#[test]
fn write_bits() {
    let mut x = Byte(0b1010_0110);
    unsafe {
        x.write_bits(0, 2, 0b01);
        x.write_bits(5, 3, 0b010);
    }
    assert_eq!(x.bits(), 0b0100_0101);
    unsafe { x.write_bits(2, 2, 0b1111) };
    assert_eq!(x.bits(), 0b0100_1101);
    unsafe { x.write_bits(0, 8, 0xFF) };
    assert_eq!(x.bits(), 0xFF);
}
