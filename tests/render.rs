use drone_esp32_map::{reg::BlockDesc, render};
use std::collections::BTreeSet;

fn header(block: &BlockDesc) -> String {
    let mut out = String::new();
    render::c_header(block, &mut out).unwrap();
    out
}

/// Collects `(name, shift)` from every `#define <NAME>_S <N>` line.
fn shifts(text: &str) -> BTreeSet<(String, u32)> {
    text.lines()
        .filter_map(|line| {
            let mut words = line.split_whitespace();
            if words.next() != Some("#define") {
                return None;
            }
            let name = words.next()?;
            if !name.ends_with("_S") {
                return None;
            }
            Some((name.to_string(), words.next()?.parse().ok()?))
        })
        .collect()
}

fn fixture(text: &str) -> BTreeSet<(String, u32)> {
    text.lines()
        .filter(|line| !line.is_empty())
        .map(|line| {
            let (name, shift) = line.split_once(' ').unwrap();
            (name.to_string(), shift.parse().unwrap())
        })
        .collect()
}

fn assert_same_shifts(block: &BlockDesc, vendor: &str) {
    let rendered = shifts(&header(block));
    let vendor = fixture(vendor);
    let missing = vendor.difference(&rendered).take(5).collect::<Vec<_>>();
    let extra = rendered.difference(&vendor).take(5).collect::<Vec<_>>();
    assert!(missing.is_empty() && extra.is_empty(), "missing {missing:?}, extra {extra:?}");
}

#[cfg(feature = "esp32c3")]
mod esp32c3 {
    use super::*;
    use drone_esp32_map::map::esp32c3::gpio;

    #[test]
    fn every_register() {
        let out = header(&gpio::BLOCK);
        assert_eq!(out.matches("_REG register\n").count(), gpio::BLOCK.registers.len());
        assert!(out.contains("#define GPIO_PIN25_REG (DR_REG_GPIO_BASE + 0xd8)\n"));
        assert!(out.contains("#define GPIO_FUNC127_IN_SEL_CFG_REG (DR_REG_GPIO_BASE + 0x350)\n"));
        assert!(out.contains("#define GPIO_DATE_REG (DR_REG_GPIO_BASE + 0x6fc)\n"));
    }

    #[test]
    fn fields() {
        let out = header(&gpio::BLOCK);
        assert!(out.contains("#define GPIO_OUT_W1TS    0x03FFFFFFU\n"));
        assert!(out.contains("#define GPIO_OUT_W1TS_V  0x03FFFFFFU\n"));
        assert!(out.contains("#define GPIO_OUT_DATA_S  0\n"));
        assert!(out.contains("/** GPIO_IN_DATA : RO; bitpos: [25:0]; default: x;\n"));
        assert!(out.contains("#define GPIO_PIN0_INT_TYPE    0x00000380U\n"));
        assert!(out.contains("#define GPIO_PIN0_INT_TYPE_V  0x00000007U\n"));
        assert!(out.contains("#define GPIO_PIN0_INT_TYPE_S  7\n"));
        assert!(out.contains("#define GPIO_PIN0_PAD_DRIVER    (BIT(2))\n"));
        assert!(out.contains("/** GPIO_FUNC0_OUT_SEL : R/W; bitpos: [7:0]; default: 128;\n"));
        assert!(out.contains("#define GPIO_SIG127_IN_SEL_S  6\n"));
        assert!(out.contains("#define GPIO_DATE    0x0FFFFFFFU\n"));
        assert!(!out.contains("_CFG_OUT_SEL"));
    }

    #[test]
    fn single_register() {
        let mut out = String::new();
        render::c_register(&gpio::BLOCK, &gpio::clock_gate::DESC, &mut out).unwrap();
        assert!(out.starts_with("/** GPIO_CLOCK_GATE_REG register\n *  GPIO clock gate register.\n */\n"));
        assert!(out.contains("#define GPIO_CLK_EN    (BIT(0))\n"));
        assert!(out.ends_with("#define GPIO_CLK_EN_S  0\n"));
    }

    #[test]
    fn shift_macros_match_vendor_header() {
        assert_same_shifts(&gpio::BLOCK, include_str!("data/esp32c3_gpio_s.txt"));
    }
}

#[cfg(feature = "esp32c5")]
#[test]
fn esp32c5_shift_macros_match_vendor_header() {
    use drone_esp32_map::map::esp32c5::gpio;
    assert_same_shifts(&gpio::BLOCK, include_str!("data/esp32c5_gpio_s.txt"));
}

#[cfg(feature = "esp32c61")]
mod esp32c61 {
    use super::*;
    use drone_esp32_map::map::esp32c61::gpio;

    #[test]
    fn shift_macros_match_vendor_header() {
        assert_same_shifts(&gpio::BLOCK, include_str!("data/esp32c61_gpio_s.txt"));
    }

    #[test]
    fn second_bank_fields() {
        let out = header(&gpio::BLOCK);
        assert!(out.contains("/** GPIO_OUT1_DATA_ORIG : R/W/SC/WTC; bitpos: [1:0]; default: 0;\n"));
        assert!(out.contains("#define GPIO_IN1_DATA_NEXT_S  0\n"));
        assert!(out.contains("#define GPIO_FUNC33_OE_INV_SEL    (BIT(11))\n"));
        assert!(out.contains("#define GPIO_FUNC0_OUT_SEL    0x000001FFU\n"));
    }
}

#[cfg(feature = "esp32h21")]
#[test]
fn esp32h21_shift_macros_match_vendor_header() {
    use drone_esp32_map::map::esp32h21::gpio;
    assert_same_shifts(&gpio::BLOCK, include_str!("data/esp32h21_gpio_s.txt"));
}
