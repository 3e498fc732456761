//! Rendering of register maps into C headers.
//!
//! The output follows the `#define` layout of the vendor `*_reg.h` headers, so
//! a map can be diffed against them or used from C code.
//!
//! ```
//! use drone_esp32_map::{map::esp32c61::gpio, render};
//!
//! let mut header = String::new();
//! render::c_header(&gpio::BLOCK, &mut header).unwrap();
//! assert!(header.contains("#define GPIO_PIN0_REG (DR_REG_GPIO_BASE + 0xd4)\n"));
//! assert!(header.contains("#define GPIO_PIN0_INT_TYPE_S  7\n"));
//! ```

use crate::reg::{BlockDesc, FieldDesc, RegDesc};
use core::fmt::{self, Write};

/// Renders the whole `block` as a C header.
///
/// # Errors
///
/// Returns an error if writing to `w` fails.
pub fn c_header<W: Write>(block: &BlockDesc, w: &mut W) -> fmt::Result {
    writeln!(w, "#pragma once")?;
    writeln!(w)?;
    writeln!(w, "#include \"soc/soc.h\"")?;
    writeln!(w, "#ifdef __cplusplus")?;
    writeln!(w, "extern \"C\" {{")?;
    writeln!(w, "#endif")?;
    for reg in block.registers {
        writeln!(w)?;
        c_register(block, reg, w)?;
    }
    writeln!(w)?;
    writeln!(w, "#ifdef __cplusplus")?;
    writeln!(w, "}}")?;
    writeln!(w, "#endif")
}

/// Renders a single register of `block` with all of its fields.
///
/// Field macros are named `<BLOCK>_<HEADER NAME>` after
/// [`FieldDesc::header_name`].
///
/// # Errors
///
/// Returns an error if writing to `w` fails.
pub fn c_register<W: Write>(block: &BlockDesc, reg: &RegDesc, w: &mut W) -> fmt::Result {
    let prefix = block.name;
    writeln!(w, "/** {prefix}_{}_REG register", reg.name)?;
    if !reg.description.is_empty() {
        writeln!(w, " *  {}", reg.description)?;
    }
    writeln!(w, " */")?;
    writeln!(w, "#define {prefix}_{}_REG (DR_REG_{prefix}_BASE + {:#x})", reg.name, reg.offset)?;
    for field in reg.fields {
        c_field(prefix, field, w)?;
    }
    Ok(())
}

fn c_field<W: Write>(prefix: &str, field: &FieldDesc, w: &mut W) -> fmt::Result {
    let name = field.header_name;
    write!(w, "/** {prefix}_{name} : {}; bitpos: [", field.access)?;
    if field.is_bit() {
        write!(w, "{}", field.offset)?;
    } else {
        write!(w, "{}:{}", field.msb(), field.offset)?;
    }
    match field.reset {
        Some(reset) => writeln!(w, "]; default: {reset};")?,
        None => writeln!(w, "]; default: x;")?,
    }
    if !field.description.is_empty() {
        writeln!(w, " *  {}", field.description)?;
    }
    writeln!(w, " */")?;
    if field.is_bit() {
        writeln!(w, "#define {prefix}_{name}    (BIT({}))", field.offset)?;
    } else {
        writeln!(w, "#define {prefix}_{name}    {:#010X}U", field.mask())?;
    }
    writeln!(w, "#define {prefix}_{name}_M  ({prefix}_{name}_V << {prefix}_{name}_S)")?;
    writeln!(w, "#define {prefix}_{name}_V  {:#010X}U", field.max())?;
    writeln!(w, "#define {prefix}_{name}_S  {}", field.shift())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::Access;

    const FIELDS: &[FieldDesc] = &[
        FieldDesc {
            name: "OUT_SEL",
            header_name: "FUNC3_OUT_SEL",
            offset: 0,
            width: 9,
            access: Access::R.union(Access::W).union(Access::SC),
            reset: Some(256),
            description: "Output signal select.",
        },
        FieldDesc {
            name: "OE_SEL",
            header_name: "FUNC3_OE_SEL",
            offset: 10,
            width: 1,
            access: Access::RW,
            reset: None,
            description: "",
        },
    ];

    const REG: RegDesc =
        RegDesc { name: "FUNC3_OUT_SEL_CFG", offset: 0xAE0, fields: FIELDS, description: "" };

    const BLOCK: BlockDesc = BlockDesc { name: "GPIO", base: 0x6009_1000, registers: &[REG] };

    #[test]
    fn register() {
        let mut out = String::new();
        c_register(&BLOCK, &REG, &mut out).unwrap();
        assert_eq!(
            out,
            "/** GPIO_FUNC3_OUT_SEL_CFG_REG register\n \
             */\n#define GPIO_FUNC3_OUT_SEL_CFG_REG (DR_REG_GPIO_BASE + 0xae0)\n\
             /** GPIO_FUNC3_OUT_SEL : R/W/SC; bitpos: [8:0]; default: 256;\n \
             *  Output signal select.\n \
             */\n\
             #define GPIO_FUNC3_OUT_SEL    0x000001FFU\n\
             #define GPIO_FUNC3_OUT_SEL_M  (GPIO_FUNC3_OUT_SEL_V << GPIO_FUNC3_OUT_SEL_S)\n\
             #define GPIO_FUNC3_OUT_SEL_V  0x000001FFU\n\
             #define GPIO_FUNC3_OUT_SEL_S  0\n\
             /** GPIO_FUNC3_OE_SEL : R/W; bitpos: [10]; default: x;\n \
             */\n\
             #define GPIO_FUNC3_OE_SEL    (BIT(10))\n\
             #define GPIO_FUNC3_OE_SEL_M  (GPIO_FUNC3_OE_SEL_V << GPIO_FUNC3_OE_SEL_S)\n\
             #define GPIO_FUNC3_OE_SEL_V  0x00000001U\n\
             #define GPIO_FUNC3_OE_SEL_S  10\n"
        );
    }

    #[test]
    fn header_name_differs_from_field() {
        const SIG: &[FieldDesc] = &[FieldDesc {
            name: "SIG_IN_SEL",
            header_name: "SIG7_IN_SEL",
            offset: 8,
            width: 1,
            access: Access::RW,
            reset: Some(0),
            description: "",
        }];
        const REG: RegDesc =
            RegDesc { name: "FUNC7_IN_SEL_CFG", offset: 0x2F0, fields: SIG, description: "" };
        let mut out = String::new();
        c_register(&BLOCK, &REG, &mut out).unwrap();
        assert!(out.contains("#define GPIO_FUNC7_IN_SEL_CFG_REG (DR_REG_GPIO_BASE + 0x2f0)\n"));
        assert!(out.contains("/** GPIO_SIG7_IN_SEL : R/W; bitpos: [8]; default: 0;\n"));
        assert!(out.contains("#define GPIO_SIG7_IN_SEL_S  8\n"));
        assert!(!out.contains("GPIO_FUNC7_IN_SEL_CFG_SIG_IN_SEL"));
    }

    #[test]
    fn header_frame() {
        let mut out = String::new();
        c_header(&BLOCK, &mut out).unwrap();
        assert!(out.starts_with("#pragma once\n\n#include \"soc/soc.h\"\n"));
        assert!(out.ends_with("#ifdef __cplusplus\n}\n#endif\n"));
        assert_eq!(out.matches("_REG register").count(), 1);
    }
}
