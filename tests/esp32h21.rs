#![cfg(feature = "esp32h21")]

use drone_esp32_map::{
    check::check,
    map::{esp32h21, esp32h21::gpio, pad_driver},
    reg::prelude::*,
};

#[test]
fn block_is_consistent() {
    assert_eq!(check(&gpio::BLOCK), Ok(()));
    assert_eq!(gpio::BLOCK.registers.len(), 167);
    assert_eq!(gpio::BLOCK.span(), 0xE00);
}

#[test]
fn addresses() {
    assert_eq!(gpio::BASE, 0x6009_1000);
    assert_eq!(gpio::enable_w1tc::ADDRESS, 0x6009_103C);
    assert_eq!(gpio::procpu_nmi_int::ADDRESS, 0x6009_10A8);
    assert_eq!(gpio::pin0::ADDRESS, 0x6009_10D4);
    assert_eq!(gpio::pin29::ADDRESS, 0x6009_1148);
    assert_eq!(gpio::func0_in_sel_cfg::ADDRESS, 0x6009_12D4);
    assert_eq!(gpio::func124_in_sel_cfg::ADDRESS, 0x6009_14C4);
    assert_eq!(gpio::func29_out_sel_cfg::ADDRESS, 0x6009_1B48);
    assert_eq!(gpio::date::ADDRESS, 0x6009_1DFC);
    assert_eq!(gpio::BLOCK.address_of("CLOCK_GATE"), Some(0x6009_1DF8));
}

#[test]
fn input_select_resets() {
    let mut high = Vec::new();
    for (index, reg) in gpio::BLOCK.family("FUNC", "_IN_SEL_CFG") {
        assert!(index < esp32h21::INPUT_SIGNAL_COUNT as u32);
        match reg.field("IN_SEL").and_then(|field| field.reset) {
            Some(esp32h21::CONSTANT_LOW_INPUT) => {}
            Some(esp32h21::CONSTANT_HIGH_INPUT) => high.push(index),
            reset => panic!("{}: unexpected IN_SEL reset {:?}", reg.name, reset),
        }
    }
    assert_eq!(high, [9, 45, 46, 55, 56, 73]);
    assert_eq!(gpio::func55_in_sel_cfg::in_sel::RESET, 0x20);
    assert_eq!(gpio::func0_in_sel_cfg::in_sel::RESET, 0x30);
}

#[test]
fn pins() {
    assert_eq!(gpio::BLOCK.family("PIN", "").count(), esp32h21::PIN_COUNT);
    assert_eq!(gpio::BLOCK.at_offset(0xD8).map(|reg| reg.name), Some("PIN1"));
    let mut pin = gpio::pin1::Val::default_val();
    pin.set_pad_driver();
    assert_eq!(pin.bits(), gpio::pin0::pad_driver::MASK);
    let field = gpio::pin1::DESC.field("PAD_DRIVER").unwrap();
    assert_eq!(field.extract(pin.bits()), pad_driver::OPEN_DRAIN);
    assert_eq!(gpio::func0_out_sel_cfg::RESET, 0x100);
    assert_eq!(gpio::date::RESET, 0x240_9110);
}

#[test]
fn route_output() {
    assert_eq!(gpio::func0_out_sel_cfg::out_sel::RESET, esp32h21::GPIO_OUTPUT_SIGNAL);
    assert_eq!(gpio::func0_out_sel_cfg::out_sel::MAX, 0x1FF);
    let mut val = gpio::func3_out_sel_cfg::Val::from_bits(0);
    val.write_out_sel(esp32h21::GPIO_OUTPUT_SIGNAL).set_oe_sel();
    assert_eq!(val.out_sel(), 256);
    assert_eq!(val.bits(), 0x500);
    assert_eq!(esp32h21::CHIP.gpio_output_signal, 256);
}
