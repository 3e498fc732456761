//! ESP32-H21 GPIO registers.

use super::Chip;

crate::reg::map! {
    /// General Purpose Input/Output registers.
    pub mod GPIO;
    0x6009_1000;

    /// Pad strapping register.
    STRAP {
        0x0;
        /// Pad strapping register.
        STRAPPING { 0 16 RO 0 }
    }

    /// GPIO output register for GPIO0-29.
    OUT {
        0x4;
        /// GPIO output register for GPIO0-29.
        DATA_ORIG as OUT_DATA_ORIG { 0 30 R/W/SC/WTC 0 }
    }

    /// GPIO output set register for GPIO0-29.
    OUT_W1TS {
        0x8;
        /// GPIO output set register for GPIO0-29.
        OUT_W1TS { 0 30 WT 0 }
    }

    /// GPIO output clear register for GPIO0-29.
    OUT_W1TC {
        0xC;
        /// GPIO output clear register for GPIO0-29.
        OUT_W1TC { 0 30 WT 0 }
    }

    /// GPIO output enable register for GPIO0-29.
    ENABLE {
        0x34;
        /// GPIO output enable register for GPIO0-29.
        DATA as ENABLE_DATA { 0 30 R/W/WTC 0 }
    }

    /// GPIO output enable set register for GPIO0-29.
    ENABLE_W1TS {
        0x38;
        /// GPIO output enable set register for GPIO0-29.
        ENABLE_W1TS { 0 30 WT 0 }
    }

    /// GPIO output enable clear register for GPIO0-29.
    ENABLE_W1TC {
        0x3C;
        /// GPIO output enable clear register for GPIO0-29.
        ENABLE_W1TC { 0 30 WT 0 }
    }

    /// GPIO input register for GPIO0-29.
    IN {
        0x64;
        /// GPIO input register for GPIO0-29.
        DATA_NEXT as IN_DATA_NEXT { 0 30 RO 0 }
    }

    /// GPIO interrupt status register for GPIO0-29.
    STATUS {
        0x74;
        /// GPIO interrupt status register for GPIO0-29.
        INTERRUPT as STATUS_INTERRUPT { 0 30 R/W/WTC 0 }
    }

    /// GPIO interrupt status set register for GPIO0-29.
    STATUS_W1TS {
        0x78;
        /// GPIO interrupt status set register for GPIO0-29.
        STATUS_W1TS { 0 30 WT 0 }
    }

    /// GPIO interrupt status clear register for GPIO0-29.
    STATUS_W1TC {
        0x7C;
        /// GPIO interrupt status clear register for GPIO0-29.
        STATUS_W1TC { 0 30 WT 0 }
    }

    /// GPIO_PROCPU_INT interrupt status register for GPIO0-29.
    PROCPU_INT {
        0xA4;
        /// GPIO_PROCPU_INT interrupt status register for GPIO0-29.
        PROCPU_INT { 0 30 RO 0 }
    }

    /// GPIO_PROCPU_NMI_INT interrupt status register for GPIO0-29.
    PROCPU_NMI_INT {
        0xA8;
        /// GPIO_PROCPU_NMI_INT interrupt status register for GPIO0-29.
        PROCPU_NMI_INT { 0 30 RO 0 }
    }

    /// GPIO interrupt source register for GPIO0-29.
    STATUS_NEXT {
        0xC4;
        /// GPIO interrupt source register for GPIO0-29.
        STATUS_INTERRUPT_NEXT { 0 30 RO 0 }
    }

    /// GPIO pin configuration register.
    PINn[0..30] {
        0xD4;
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
        /// Set bit 13 to enable gpio_procpu_int. set bit 14 to enable gpio_procpu_nmi_int.
        INT_ENA as PINn_INT_ENA { 13 5 R/W 0 }
    }

    /// GPIO input function configuration register.
    FUNCn_IN_SEL_CFG[0, 6, 7, 8, 10, 11, 12, 13, 14, 15, 16, 17, 19, 28, 29, 30, 31, 32, 33, 34,
        35, 40, 41, 42, 47, 48, 49, 50, 51, 52, 53, 54, 63, 64, 65, 66, 67, 68, 69, 70, 71, 72,
        77, 78, 79, 80, 81, 82, 87, 88, 89, 90, 91, 92, 93, 94, 95, 97, 98, 99, 100, 101, 102,
        103, 104, 105, 106, 107, 108, 109, 110, 111, 112, 113, 114, 115, 116, 117, 118, 119, 120,
        121, 122, 123, 124] {
        0x2D4;
        /// Set this value: s=0-29: connect GPIO\[s\] to this port. s=0x20: set this port always
        /// high level. s=0x30: set this port always low level.
        IN_SEL as FUNCn_IN_SEL { 0 6 R/W 0x30 }
        /// Set this bit to invert input signal. 1:invert. 0:not invert.
        IN_INV_SEL as FUNCn_IN_INV_SEL { 6 1 R/W 0 }
        /// Set this bit to bypass GPIO. 1:do not bypass GPIO. 0:bypass GPIO.
        SIG_IN_SEL as SIGn_IN_SEL { 7 1 R/W 0 }
    }

    /// GPIO input function configuration register.
    FUNCn_IN_SEL_CFG[9, 45, 46, 55, 56, 73] {
        0x2D4;
        /// Set this value: s=0-29: connect GPIO\[s\] to this port. s=0x20: set this port always
        /// high level. s=0x30: set this port always low level.
        IN_SEL as FUNCn_IN_SEL { 0 6 R/W 0x20 }
        /// Set this bit to invert input signal. 1:invert. 0:not invert.
        IN_INV_SEL as FUNCn_IN_INV_SEL { 6 1 R/W 0 }
        /// Set this bit to bypass GPIO. 1:do not bypass GPIO. 0:bypass GPIO.
        SIG_IN_SEL as SIGn_IN_SEL { 7 1 R/W 0 }
    }

    /// GPIO output function select register.
    FUNCn_OUT_SEL_CFG[0..30] {
        0xAD4;
        /// The value of the bits: 0<=s<=256. Set the value to select output signal. s=0-127: output
        /// of GPIO\[n\] equals input of peripheral\[s\]. s=128: output of GPIO\[n\] equals
        /// GPIO_OUT_REG\[n\].
        OUT_SEL as FUNCn_OUT_SEL { 0 9 R/W/SC 0x100 }
        /// Set this bit to invert output signal.1:invert.0:not invert.
        OUT_INV_SEL as FUNCn_OUT_INV_SEL { 9 1 R/W/SC 0 }
        /// Set this bit to select output enable signal.1:use GPIO_ENABLE_REG\[n\] as output enable
        /// signal.0:use peripheral output enable signal.
        OE_SEL as FUNCn_OE_SEL { 10 1 R/W 0 }
        /// Set this bit to invert output enable signal.1:invert.0:not invert.
        OE_INV_SEL as FUNCn_OE_INV_SEL { 11 1 R/W 0 }
    }

    /// GPIO clock gate register.
    CLOCK_GATE {
        0xDF8;
        /// Set this bit to enable GPIO clock gate.
        CLK_EN { 0 1 R/W 1 }
    }

    /// GPIO version register.
    DATE {
        0xDFC;
        /// Version register.
        DATE { 0 28 R/W 0x240_9110 }
    }
}

/// Number of `PINn` configuration registers.
pub const PIN_COUNT: usize = 30;

/// Upper bound of the peripheral input signal indices routed through the GPIO
/// matrix.
pub const INPUT_SIGNAL_COUNT: usize = 125;

/// `IN_SEL` value which feeds a constant low level into the input signal.
pub const CONSTANT_LOW_INPUT: u32 = 0x30;

/// `IN_SEL` value which feeds a constant high level into the input signal.
pub const CONSTANT_HIGH_INPUT: u32 = 0x20;

/// `OUT_SEL` value which drives the pad from the `OUT` register.
///
/// `OUT_SEL` is 9 bits wide on this chip and resets to this value. The field
/// description still names 128, which is a peripheral signal here.
pub const GPIO_OUTPUT_SIGNAL: u32 = 256;

/// Chip summary.
pub const CHIP: Chip = Chip {
    name: "esp32h21",
    block: &gpio::BLOCK,
    pin_count: PIN_COUNT,
    input_signal_count: INPUT_SIGNAL_COUNT,
    constant_low_input: CONSTANT_LOW_INPUT,
    constant_high_input: CONSTANT_HIGH_INPUT,
    gpio_output_signal: GPIO_OUTPUT_SIGNAL,
};
