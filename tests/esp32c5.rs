#![cfg(feature = "esp32c5")]

use drone_esp32_map::{
    check::check,
    map::{esp32c5, esp32c5::gpio},
    reg::prelude::*,
};

#[test]
fn block_is_consistent() {
    assert_eq!(check(&gpio::BLOCK), Ok(()));
    assert_eq!(gpio::BLOCK.registers.len(), 175);
    assert_eq!(gpio::BLOCK.span(), 0x700);
}

#[test]
fn addresses() {
    assert_eq!(gpio::BASE, 0x6009_1000);
    assert_eq!(gpio::sdio_select::ADDRESS, 0x6009_101C);
    assert_eq!(gpio::pcpu_nmi_int::ADDRESS, 0x6009_1060);
    assert_eq!(gpio::pin0::ADDRESS, 0x6009_1074);
    assert_eq!(gpio::pin30::ADDRESS, 0x6009_10EC);
    assert_eq!(gpio::func0_in_sel_cfg::ADDRESS, 0x6009_1154);
    assert_eq!(gpio::func124_in_sel_cfg::ADDRESS, 0x6009_1344);
    assert_eq!(gpio::func30_out_sel_cfg::ADDRESS, 0x6009_15CC);
    assert_eq!(gpio::date::ADDRESS, 0x6009_16FC);
    assert_eq!(gpio::BLOCK.register("FUNC1_IN_SEL_CFG"), None);
}

#[test]
fn matrix_fields() {
    assert_eq!(gpio::func0_in_sel_cfg::in_sel::MASK, 0x3F);
    assert_eq!(gpio::func0_in_sel_cfg::in_inv_sel::MASK, 0x40);
    assert_eq!(gpio::func0_in_sel_cfg::sig_in_sel::MASK, 0x80);
    assert_eq!(gpio::func0_out_sel_cfg::out_sel::MASK, 0xFF);
    assert_eq!(gpio::func0_out_sel_cfg::out_sel::RESET, esp32c5::GPIO_OUTPUT_SIGNAL);
    assert!(gpio::func0_out_sel_cfg::out_sel::DESC.access.contains(Access::SC));
    assert_eq!(gpio::date::RESET, 0x230_1100);
}

#[test]
fn input_select_resets() {
    let mut high = Vec::new();
    for (index, reg) in gpio::BLOCK.family("FUNC", "_IN_SEL_CFG") {
        assert!(index < esp32c5::INPUT_SIGNAL_COUNT as u32);
        match reg.field("IN_SEL").and_then(|field| field.reset) {
            Some(esp32c5::CONSTANT_LOW_INPUT) => {}
            Some(esp32c5::CONSTANT_HIGH_INPUT) => high.push(index),
            reset => panic!("{}: unexpected IN_SEL reset {:?}", reg.name, reset),
        }
    }
    assert_eq!(high, [9, 45, 46, 73, 77]);
    assert_eq!(gpio::func9_in_sel_cfg::RESET, 0x38);
    assert_eq!(gpio::func10_in_sel_cfg::RESET, 0x3C);
}

#[test]
fn families() {
    assert_eq!(gpio::BLOCK.family("PIN", "").count(), esp32c5::PIN_COUNT);
    assert_eq!(gpio::BLOCK.family("FUNC", "_OUT_SEL_CFG").count(), esp32c5::PIN_COUNT);
    assert_eq!(gpio::BLOCK.family("FUNC", "_IN_SEL_CFG").count(), 94);
}
