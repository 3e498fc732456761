//! ESP32-C5 GPIO registers.

use super::Chip;

crate::reg::map! {
    /// General Purpose Input/Output registers.
    pub mod GPIO;
    0x6009_1000;

    /// GPIO bit select register.
    BT_SELECT {
        0x0;
        /// GPIO bit select register.
        BT_SEL { 0 32 R/W 0 }
    }

    /// GPIO output register for GPIO0-30.
    OUT {
        0x4;
        /// GPIO output register for GPIO0-30.
        DATA_ORIG as OUT_DATA_ORIG { 0 31 R/W/SC/WTC 0 }
    }

    /// GPIO output set register for GPIO0-30.
    OUT_W1TS {
        0x8;
        /// GPIO output set register for GPIO0-30.
        OUT_W1TS { 0 31 WT 0 }
    }

    /// GPIO output clear register for GPIO0-30.
    OUT_W1TC {
        0xC;
        /// GPIO output clear register for GPIO0-30.
        OUT_W1TC { 0 31 WT 0 }
    }

    /// GPIO sdio select register.
    SDIO_SELECT {
        0x1C;
        /// GPIO sdio select register.
        SDIO_SEL { 0 8 R/W 0 }
    }

    /// GPIO output enable register for GPIO0-30.
    ENABLE {
        0x20;
        /// GPIO output enable register for GPIO0-30.
        DATA as ENABLE_DATA { 0 31 R/W/WTC 0 }
    }

    /// GPIO output enable set register for GPIO0-30.
    ENABLE_W1TS {
        0x24;
        /// GPIO output enable set register for GPIO0-30.
        ENABLE_W1TS { 0 31 WT 0 }
    }

    /// GPIO output enable clear register for GPIO0-30.
    ENABLE_W1TC {
        0x28;
        /// GPIO output enable clear register for GPIO0-30.
        ENABLE_W1TC { 0 31 WT 0 }
    }

    /// Pad strapping register.
    STRAP {
        0x38;
        /// Pad strapping register.
        STRAPPING { 0 16 RO 0 }
    }

    /// GPIO input register for GPIO0-30.
    IN {
        0x3C;
        /// GPIO input register for GPIO0-30.
        DATA_NEXT as IN_DATA_NEXT { 0 31 RO 0 }
    }

    /// GPIO interrupt status register for GPIO0-30.
    STATUS {
        0x44;
        /// GPIO interrupt status register for GPIO0-30.
        INTERRUPT as STATUS_INTERRUPT { 0 31 R/W/WTC 0 }
    }

    /// GPIO interrupt status set register for GPIO0-30.
    STATUS_W1TS {
        0x48;
        /// GPIO interrupt status set register for GPIO0-30.
        STATUS_W1TS { 0 31 WT 0 }
    }

    /// GPIO interrupt status clear register for GPIO0-30.
    STATUS_W1TC {
        0x4C;
        /// GPIO interrupt status clear register for GPIO0-30.
        STATUS_W1TC { 0 31 WT 0 }
    }

    /// GPIO PRO_CPU interrupt status register for GPIO0-30.
    PCPU_INT {
        0x5C;
        /// GPIO PRO_CPU interrupt status register for GPIO0-30.
        PROCPU_INT { 0 31 RO 0 }
    }

    /// GPIO PRO_CPU(not shielded) interrupt status register for GPIO0-30.
    PCPU_NMI_INT {
        0x60;
        /// GPIO PRO_CPU(not shielded) interrupt status register for GPIO0-30.
        PROCPU_NMI_INT { 0 31 RO 0 }
    }

    /// GPIO CPUSDIO interrupt status register for GPIO0-30.
    CPUSDIO_INT {
        0x64;
        /// GPIO CPUSDIO interrupt status register for GPIO0-30.
        SDIO_INT { 0 31 RO 0 }
    }

    /// GPIO pin configuration register.
    PINn[0..31] {
        0x74;
        /// Set GPIO input_sync2 signal mode. 0:disable. 1:trigger at negedge. 2or3:trigger at
        /// posedge.
        SYNC2_BYPASS as PINn_SYNC2_BYPASS { 0 2 R/W 0 }
        /// Set this bit to select pad driver. 1:open-drain. 0:normal.
        PAD_DRIVER as PINn_PAD_DRIVER { 2 1 R/W 0 }
        /// Set GPIO input_sync1 signal mode. 0:disable. 1:trigger at negedge. 2or3:trigger at
        /// posedge.
        SYNC1_BYPASS as PINn_SYNC1_BYPASS { 3 2 R/W 0 }
        /// Set this value to choose interrupt mode. 0:disable GPIO interrupt. 1:trigger at posedge.
        /// 2:trigger at negedge. 3:trigger at any edge. 4:valid at low level. 5:valid at high
        /// level.
        INT_TYPE as PINn_INT_TYPE { 7 3 R/W 0 }
        /// Set this bit to enable GPIO wakeup.(can only wakeup CPU from Light-sleep Mode)
        WAKEUP_ENABLE as PINn_WAKEUP_ENABLE { 10 1 R/W 0 }
        /// Reserved.
        CONFIG as PINn_CONFIG { 11 2 R/W 0 }
        /// Set bit 13 to enable CPU interrupt. set bit 14 to enable CPU(not shielded) interrupt.
        INT_ENA as PINn_INT_ENA { 13 5 R/W 0 }
    }

    /// GPIO interrupt source register for GPIO0-31.
    STATUS_NEXT {
        0x14C;
        /// GPIO interrupt source register for GPIO0-31.
        STATUS_INTERRUPT_NEXT { 0 31 RO 0 }
    }

    /// GPIO input function configuration register.
    FUNCn_IN_SEL_CFG[0, 6, 7, 8, 10, 11, 12, 13, 14, 15, 16, 17, 19, 21, 22, 23, 24, 28, 29, 30,
        31, 32, 33, 34, 35, 40, 41, 42, 47, 48, 49, 50, 51, 52, 53, 54, 63, 64, 65, 66, 67, 68,
        69, 70, 71, 72, 81, 82, 83, 84, 85, 86, 87, 88, 89, 90, 91, 92, 93, 94, 95, 97, 98, 99,
        100, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 111, 112, 113, 114, 115, 116, 117,
        118, 119, 120, 121, 122, 123, 124] {
        0x154;
        /// Set this value: s=0-34: connect GPIO\[s\] to this port. s=0x38: set this port always
        /// high level. s=0x3C: set this port always low level.
        IN_SEL as FUNCn_IN_SEL { 0 6 R/W 0x3C }
        /// Set this bit to invert input signal. 1:invert. 0:not invert.
        IN_INV_SEL as FUNCn_IN_INV_SEL { 6 1 R/W 0 }
        /// Set this bit to bypass GPIO. 1:do not bypass GPIO. 0:bypass GPIO.
        SIG_IN_SEL as SIGn_IN_SEL { 7 1 R/W 0 }
    }

    /// GPIO input function configuration register.
    FUNCn_IN_SEL_CFG[9, 45, 46, 73, 77] {
        0x154;
        /// Set this value: s=0-34: connect GPIO\[s\] to this port. s=0x38: set this port always
        /// high level. s=0x3C: set this port always low level.
        IN_SEL as FUNCn_IN_SEL { 0 6 R/W 0x38 }
        /// Set this bit to invert input signal. 1:invert. 0:not invert.
        IN_INV_SEL as FUNCn_IN_INV_SEL { 6 1 R/W 0 }
        /// Set this bit to bypass GPIO. 1:do not bypass GPIO. 0:bypass GPIO.
        SIG_IN_SEL as SIGn_IN_SEL { 7 1 R/W 0 }
    }

    /// GPIO output function select register.
    FUNCn_OUT_SEL_CFG[0..31] {
        0x554;
        /// The value of the bits: 0<=s<=256. Set the value to select output signal. s=0-127: output
        /// of GPIO\[n\] equals input of peripheral\[s\]. s=128: output of GPIO\[n\] equals
        /// GPIO_OUT_REG\[n\].
        OUT_SEL as FUNCn_OUT_SEL { 0 8 R/W/SC 0x80 }
        /// Set this bit to invert output signal.1:invert.0:not invert.
        OUT_INV_SEL as FUNCn_OUT_INV_SEL { 8 1 R/W/SC 0 }
        /// Set this bit to select output enable signal.1:use GPIO_ENABLE_REG\[n\] as output enable
        /// signal.0:use peripheral output enable signal.
        OEN_SEL as FUNCn_OEN_SEL { 9 1 R/W 0 }
        /// Set this bit to invert output enable signal.1:invert.0:not invert.
        OEN_INV_SEL as FUNCn_OEN_INV_SEL { 10 1 R/W 0 }
    }

    /// GPIO clock gate register.
    CLOCK_GATE {
        0x62C;
        /// Set this bit to enable GPIO clock gate.
        CLK_EN { 0 1 R/W 1 }
    }

    /// GPIO version register.
    DATE {
        0x6FC;
        /// Version register.
        DATE { 0 28 R/W 0x230_1100 }
    }
}

/// Number of `PINn` configuration registers.
pub const PIN_COUNT: usize = 31;

/// Upper bound of the peripheral input signal indices routed through the GPIO
/// matrix.
pub const INPUT_SIGNAL_COUNT: usize = 125;

/// `IN_SEL` value which feeds a constant low level into the input signal.
pub const CONSTANT_LOW_INPUT: u32 = 0x3C;

/// `IN_SEL` value which feeds a constant high level into the input signal.
pub const CONSTANT_HIGH_INPUT: u32 = 0x38;

/// `OUT_SEL` value which drives the pad from the `OUT` register.
pub const GPIO_OUTPUT_SIGNAL: u32 = 128;

/// Chip summary.
pub const CHIP: Chip = Chip {
    name: "esp32c5",
    block: &gpio::BLOCK,
    pin_count: PIN_COUNT,
    input_signal_count: INPUT_SIGNAL_COUNT,
    constant_low_input: CONSTANT_LOW_INPUT,
    constant_high_input: CONSTANT_HIGH_INPUT,
    gpio_output_signal: GPIO_OUTPUT_SIGNAL,
};
