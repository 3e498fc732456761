//! ESP32-C3 GPIO registers.

use super::Chip;

crate::reg::map! {
    /// General Purpose Input/Output registers.
    pub mod GPIO;
    0x6000_4000;

    /// GPIO bit select register.
    BT_SELECT {
        0x0;
        /// GPIO bit select register.
        BT_SEL { 0 32 R/W 0 }
    }

    /// GPIO output register.
    OUT {
        0x4;
        /// GPIO output register.
        DATA as OUT_DATA { 0 26 R/W 0 }
    }

    /// GPIO output set register.
    OUT_W1TS {
        0x8;
        /// GPIO output set register.
        OUT_W1TS { 0 26 WO 0 }
    }

    /// GPIO output clear register.
    OUT_W1TC {
        0xC;
        /// GPIO output clear register.
        OUT_W1TC { 0 26 WO 0 }
    }

    /// GPIO sdio select register.
    SDIO_SELECT {
        0x1C;
        /// GPIO sdio select register.
        SDIO_SEL { 0 8 R/W 0 }
    }

    /// GPIO output enable register.
    ENABLE {
        0x20;
        /// GPIO output enable register.
        DATA as ENABLE_DATA { 0 26 R/W 0 }
    }

    /// GPIO output enable set register.
    ENABLE_W1TS {
        0x24;
        /// GPIO output enable set register.
        ENABLE_W1TS { 0 26 WO 0 }
    }

    /// GPIO output enable clear register.
    ENABLE_W1TC {
        0x28;
        /// GPIO output enable clear register.
        ENABLE_W1TC { 0 26 WO 0 }
    }

    /// Pad strapping register.
    STRAP {
        0x38;
        /// Pad strapping register.
        STRAPPING { 0 16 RO x }
    }

    /// GPIO input register.
    IN {
        0x3C;
        /// GPIO input register.
        DATA as IN_DATA { 0 26 RO x }
    }

    /// GPIO interrupt status register.
    STATUS {
        0x44;
        /// GPIO interrupt status register.
        INT as STATUS_INT { 0 26 R/W 0 }
    }

    /// GPIO interrupt status set register.
    STATUS_W1TS {
        0x48;
        /// GPIO interrupt status set register.
        STATUS_W1TS { 0 26 WO 0 }
    }

    /// GPIO interrupt status clear register.
    STATUS_W1TC {
        0x4C;
        /// GPIO interrupt status clear register.
        STATUS_W1TC { 0 26 WO 0 }
    }

    /// GPIO PRO_CPU interrupt status register.
    PCPU_INT {
        0x5C;
        /// GPIO PRO_CPU interrupt status register.
        PROCPU_INT { 0 26 RO 0 }
    }

    /// GPIO PRO_CPU(not shielded) interrupt status register.
    PCPU_NMI_INT {
        0x60;
        /// GPIO PRO_CPU(not shielded) interrupt status register.
        PROCPU_NMI_INT { 0 26 RO 0 }
    }

    /// GPIO CPUSDIO interrupt status register.
    CPUSDIO_INT {
        0x64;
        /// GPIO CPUSDIO interrupt status register.
        SDIO_INT { 0 26 RO 0 }
    }

    /// GPIO pin configuration register.
    PINn[0..26] {
        0x74;
        /// Set bit 13 to enable CPU interrupt. set bit 14 to enable CPU(not shielded) interrupt.
        INT_ENA as PINn_INT_ENA { 13 5 R/W 0 }
        /// Pad configuration. Reserved.
        CONFIG as PINn_CONFIG { 11 2 R/W 0 }
        /// Set this bit to enable GPIO wakeup.(can only wakeup CPU from Light-sleep Mode)
        WAKEUP_ENABLE as PINn_WAKEUP_ENABLE { 10 1 R/W 0 }
        /// Set this value to choose interrupt mode. 0:disable GPIO interrupt. 1:trigger at posedge.
        /// 2:trigger at negedge. 3:trigger at any edge. 4:valid at low level. 5:valid at high
        /// level.
        INT_TYPE as PINn_INT_TYPE { 7 3 R/W 0 }
        /// Set GPIO input_sync1 signal mode. 0:disable. 1:trigger at negedge. 2or3:trigger at
        /// posedge.
        SYNC1_BYPASS as PINn_SYNC1_BYPASS { 3 2 R/W 0 }
        /// Set this bit to select pad driver. 1:open-drain. 0:normal.
        PAD_DRIVER as PINn_PAD_DRIVER { 2 1 R/W 0 }
        /// Set GPIO input_sync2 signal mode. 0:disable. 1:trigger at negedge. 2or3:trigger at
        /// posedge.
        SYNC2_BYPASS as PINn_SYNC2_BYPASS { 0 2 R/W 0 }
    }

    /// GPIO interrupt source register.
    STATUS_NEXT {
        0x14C;
        /// GPIO interrupt source register.
        STATUS_INTERRUPT_NEXT { 0 26 RO 0 }
    }

    /// GPIO input function configuration register.
    FUNCn_IN_SEL_CFG[0..128] {
        0x154;
        /// Set this bit to bypass GPIO. 1:do not bypass GPIO. 0:bypass GPIO.
        SIG_IN_SEL as SIGn_IN_SEL { 6 1 R/W 0 }
        /// Set this bit to invert input signal. 1:invert. 0:not invert.
        IN_INV_SEL as FUNCn_IN_INV_SEL { 5 1 R/W 0 }
        /// Set this value: s=0-21: connect GPIO\[s\] to this port. s=0x1E: set this port always
        /// high level. s=0x1F: set this port always low level.
        IN_SEL as FUNCn_IN_SEL { 0 5 R/W 0 }
    }

    /// GPIO output function select register.
    FUNCn_OUT_SEL_CFG[0..26] {
        0x554;
        /// Set this bit to invert output enable signal.1:invert.0:not invert.
        OEN_INV_SEL as FUNCn_OEN_INV_SEL { 10 1 R/W 0 }
        /// Set this bit to select output enable signal.1:use GPIO_ENABLE_REG\[n\] as output enable
        /// signal.0:use peripheral output enable signal.
        OEN_SEL as FUNCn_OEN_SEL { 9 1 R/W 0 }
        /// Set this bit to invert output signal.1:invert.0:not invert.
        OUT_INV_SEL as FUNCn_OUT_INV_SEL { 8 1 R/W 0 }
        /// Set the value to select output signal. s=0-127: output of GPIO\[n\] equals input of
        /// peripheral\[s\]. s=128: output of GPIO\[n\] equals GPIO_OUT_REG\[n\].
        OUT_SEL as FUNCn_OUT_SEL { 0 8 R/W 0x80 }
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
        DATE { 0 28 R/W 0x200_6130 }
    }
}

/// Number of `PINn` configuration registers.
pub const PIN_COUNT: usize = 26;

/// Upper bound of the peripheral input signal indices routed through the GPIO
/// matrix.
pub const INPUT_SIGNAL_COUNT: usize = 128;

/// `IN_SEL` value which feeds a constant low level into the input signal.
pub const CONSTANT_LOW_INPUT: u32 = 0x1F;

/// `IN_SEL` value which feeds a constant high level into the input signal.
pub const CONSTANT_HIGH_INPUT: u32 = 0x1E;

/// `OUT_SEL` value which drives the pad from the `OUT` register.
pub const GPIO_OUTPUT_SIGNAL: u32 = 128;

/// Chip summary.
pub const CHIP: Chip = Chip {
    name: "esp32c3",
    block: &gpio::BLOCK,
    pin_count: PIN_COUNT,
    input_signal_count: INPUT_SIGNAL_COUNT,
    constant_low_input: CONSTANT_LOW_INPUT,
    constant_high_input: CONSTANT_HIGH_INPUT,
    gpio_output_signal: GPIO_OUTPUT_SIGNAL,
};
