//! Consistency checks for register maps.
//!
//! Every block declared with [`reg::map!`](crate::reg::map) is already checked
//! at compile time. The functions here run the same checks over a
//! [`BlockDesc`] at run time, which also covers tables built by hand, and
//! compare the layouts of two blocks.
//!
//! ```
//! use drone_esp32_map::{check, map::esp32c3};
//!
//! assert_eq!(check::check(&esp32c3::gpio::BLOCK), Ok(()));
//! ```

use crate::reg::{BlockDesc, FieldDesc, RegDesc, REG_SIZE, REG_WIDTH};
use core::fmt;

/// Register map violation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MapError {
    /// The block base address is not aligned to the register size.
    UnalignedBase {
        /// Block name.
        block: &'static str,
        /// Base address.
        base: usize,
    },
    /// The register offset is not aligned to the register size.
    UnalignedOffset {
        /// Register name.
        reg: &'static str,
        /// Register offset.
        offset: usize,
    },
    /// Two registers share the same offset.
    DuplicateOffset {
        /// Register name.
        reg: &'static str,
        /// Name of the register declared earlier at the same offset.
        other: &'static str,
        /// Register offset.
        offset: usize,
    },
    /// Two registers share the same name.
    DuplicateName {
        /// Register name.
        reg: &'static str,
    },
    /// The register lies below the preceding one.
    Unordered {
        /// Register name.
        reg: &'static str,
        /// Name of the preceding register.
        prev: &'static str,
    },
    /// The field shift is outside of the register.
    FieldShift {
        /// Register name.
        reg: &'static str,
        /// Field name.
        field: &'static str,
        /// Field shift.
        shift: u32,
    },
    /// The field width is zero or wider than the register.
    FieldWidth {
        /// Register name.
        reg: &'static str,
        /// Field name.
        field: &'static str,
        /// Field width.
        width: u32,
    },
    /// The field mask is not its maximum value shifted into place, because
    /// the field sticks out of the register.
    FieldMask {
        /// Register name.
        reg: &'static str,
        /// Field name.
        field: &'static str,
    },
    /// Two fields share bits.
    FieldOverlap {
        /// Register name.
        reg: &'static str,
        /// Field name.
        field: &'static str,
        /// Name of the field declared earlier.
        other: &'static str,
    },
    /// The reset value doesn't fit in the field.
    ResetOverflow {
        /// Register name.
        reg: &'static str,
        /// Field name.
        field: &'static str,
        /// Reset value.
        reset: u32,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::UnalignedBase { block, base } => {
                write!(f, "{block}: base address {base:#X} is not aligned")
            }
            Self::UnalignedOffset { reg, offset } => {
                write!(f, "{reg}: offset {offset:#X} is not aligned")
            }
            Self::DuplicateOffset { reg, other, offset } => {
                write!(f, "{reg}: offset {offset:#X} is already taken by {other}")
            }
            Self::DuplicateName { reg } => write!(f, "{reg}: duplicate register name"),
            Self::Unordered { reg, prev } => write!(f, "{reg}: placed below {prev}"),
            Self::FieldShift { reg, field, shift } => {
                write!(f, "{reg}.{field}: shift {shift} is out of range")
            }
            Self::FieldWidth { reg, field, width } => {
                write!(f, "{reg}.{field}: width {width} is out of range")
            }
            Self::FieldMask { reg, field } => {
                write!(f, "{reg}.{field}: mask doesn't match the shifted maximum value")
            }
            Self::FieldOverlap { reg, field, other } => {
                write!(f, "{reg}.{field}: overlaps {other}")
            }
            Self::ResetOverflow { reg, field, reset } => {
                write!(f, "{reg}.{field}: reset value {reset:#X} doesn't fit")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MapError {}

/// Checks `block` and returns the first violation.
///
/// # Errors
///
/// Returns the first [`MapError`] found in `block`.
pub fn check(block: &BlockDesc) -> Result<(), MapError> {
    let mut first = None;
    check_each(block, |err| {
        first.get_or_insert(err);
    });
    first.map_or(Ok(()), Err)
}

/// Checks `block` and passes every violation to `f`.
pub fn check_each<F: FnMut(MapError)>(block: &BlockDesc, mut f: F) {
    if block.base % REG_SIZE != 0 {
        f(MapError::UnalignedBase { block: block.name, base: block.base });
    }
    let mut prev: Option<&RegDesc> = None;
    for (i, reg) in block.registers.iter().enumerate() {
        if reg.offset % REG_SIZE != 0 {
            f(MapError::UnalignedOffset { reg: reg.name, offset: reg.offset });
        }
        let earlier = &block.registers[..i];
        if let Some(other) = earlier.iter().find(|other| other.offset == reg.offset) {
            f(MapError::DuplicateOffset { reg: reg.name, other: other.name, offset: reg.offset });
        } else if let Some(prev) = prev.filter(|prev| prev.offset > reg.offset) {
            f(MapError::Unordered { reg: reg.name, prev: prev.name });
        }
        if earlier.iter().any(|other| other.name == reg.name) {
            f(MapError::DuplicateName { reg: reg.name });
        }
        check_reg(reg, &mut f);
        prev = Some(reg);
    }
}

fn check_reg<F: FnMut(MapError)>(reg: &RegDesc, f: &mut F) {
    for (i, field) in reg.fields.iter().enumerate() {
        if field.offset >= REG_WIDTH {
            f(MapError::FieldShift { reg: reg.name, field: field.name, shift: field.offset });
            continue;
        }
        if field.width == 0 || field.width > REG_WIDTH {
            f(MapError::FieldWidth { reg: reg.name, field: field.name, width: field.width });
            continue;
        }
        if field.mask() >> field.shift() != field.max() {
            f(MapError::FieldMask { reg: reg.name, field: field.name });
        }
        if let Some(reset) = field.reset.filter(|&reset| reset & !field.max() != 0) {
            f(MapError::ResetOverflow { reg: reg.name, field: field.name, reset });
        }
        if let Some(other) = reg.fields[..i].iter().find(|other| other.mask() & field.mask() != 0) {
            f(MapError::FieldOverlap { reg: reg.name, field: field.name, other: other.name });
        }
    }
}

/// Logs every violation in `block` to the standard error port and returns
/// their count.
pub fn report(block: &BlockDesc) -> usize {
    let mut count = 0;
    check_each(block, |err| {
        crate::eprintln!("{}: {}", block.name, err);
        count += 1;
    });
    count
}

/// Layout difference between two register blocks.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Divergence {
    /// The register exists only in the left block.
    LeftOnly(&'static RegDesc),
    /// The register exists only in the right block.
    RightOnly(&'static RegDesc),
    /// The register is placed at different offsets.
    Moved {
        /// Register name.
        reg: &'static str,
        /// Offset in the left block.
        left: usize,
        /// Offset in the right block.
        right: usize,
    },
    /// The field is laid out differently, or exists on one side only.
    Relaid {
        /// Register name.
        reg: &'static str,
        /// Field in the left block.
        left: Option<&'static FieldDesc>,
        /// Field in the right block.
        right: Option<&'static FieldDesc>,
    },
}

impl fmt::Display for Divergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::LeftOnly(reg) => write!(f, "{}: only in the left block", reg.name),
            Self::RightOnly(reg) => write!(f, "{}: only in the right block", reg.name),
            Self::Moved { reg, left, right } => write!(f, "{reg}: moved {left:#X} -> {right:#X}"),
            Self::Relaid { reg, left, right } => {
                let name = left.or(right).map_or("", |field| field.name);
                write!(f, "{reg}.{name}: ")?;
                write_layout(f, left)?;
                f.write_str(" -> ")?;
                write_layout(f, right)
            }
        }
    }
}

fn write_layout(f: &mut fmt::Formatter<'_>, field: Option<&FieldDesc>) -> fmt::Result {
    match field {
        Some(field) => {
            write!(f, "[{}:{}] {}", field.msb(), field.offset, field.access)?;
            match field.reset {
                Some(reset) => write!(f, " {reset}"),
                None => f.write_str(" x"),
            }
        }
        None => f.write_str("none"),
    }
}

/// Compares registers of two blocks by name and passes every difference to
/// `f`. Descriptions are not compared.
///
/// Different chip generations are expected to diverge, so the differences are
/// not errors.
pub fn compare<F: FnMut(Divergence)>(left: &BlockDesc, right: &BlockDesc, mut f: F) {
    for reg in left.registers {
        let other = match right.register(reg.name) {
            Some(other) => other,
            None => {
                f(Divergence::LeftOnly(reg));
                continue;
            }
        };
        if reg.offset != other.offset {
            f(Divergence::Moved { reg: reg.name, left: reg.offset, right: other.offset });
        }
        for field in reg.fields {
            match other.field(field.name) {
                Some(other_field) if same_layout(field, other_field) => {}
                other_field => {
                    f(Divergence::Relaid { reg: reg.name, left: Some(field), right: other_field });
                }
            }
        }
        for other_field in other.fields {
            if reg.field(other_field.name).is_none() {
                f(Divergence::Relaid { reg: reg.name, left: None, right: Some(other_field) });
            }
        }
    }
    for other in right.registers {
        if left.register(other.name).is_none() {
            f(Divergence::RightOnly(other));
        }
    }
}

fn same_layout(left: &FieldDesc, right: &FieldDesc) -> bool {
    left.offset == right.offset
        && left.width == right.width
        && left.access == right.access
        && left.reset == right.reset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::Access;

    const fn field(name: &'static str, offset: u32, width: u32, reset: Option<u32>) -> FieldDesc {
        FieldDesc {
            name,
            header_name: name,
            offset,
            width,
            access: Access::RW,
            reset,
            description: "",
        }
    }

    const fn reg(name: &'static str, offset: usize, fields: &'static [FieldDesc]) -> RegDesc {
        RegDesc { name, offset, fields, description: "" }
    }

    const GOOD: &[FieldDesc] = &[field("A", 0, 4, Some(3)), field("B", 4, 28, None)];

    #[test]
    fn clean_block() {
        const REGS: &[RegDesc] = &[reg("X", 0, GOOD), reg("Y", 4, GOOD)];
        let block = BlockDesc { name: "T", base: 0x1000, registers: REGS };
        assert_eq!(check(&block), Ok(()));
        assert_eq!(report(&block), 0);
    }

    #[test]
    fn field_violations() {
        const BAD: &[FieldDesc] = &[
            field("SHIFT", 32, 1, None),
            field("ZERO", 0, 0, None),
            field("WIDE", 30, 4, None),
            field("RESET", 0, 2, Some(4)),
            field("OVERLAP", 1, 2, None),
        ];
        const REGS: &[RegDesc] = &[reg("X", 0, BAD)];
        let block = BlockDesc { name: "T", base: 0, registers: REGS };
        let mut errors = Vec::new();
        check_each(&block, |err| errors.push(err));
        assert_eq!(errors, [
            MapError::FieldShift { reg: "X", field: "SHIFT", shift: 32 },
            MapError::FieldWidth { reg: "X", field: "ZERO", width: 0 },
            MapError::FieldMask { reg: "X", field: "WIDE" },
            MapError::ResetOverflow { reg: "X", field: "RESET", reset: 4 },
            MapError::FieldOverlap { reg: "X", field: "OVERLAP", other: "RESET" },
        ]);
        assert_eq!(check(&block), Err(errors[0]));
    }

    #[test]
    fn register_violations() {
        const REGS: &[RegDesc] =
            &[reg("X", 8, GOOD), reg("Y", 6, GOOD), reg("Z", 8, GOOD), reg("X", 12, GOOD)];
        let block = BlockDesc { name: "T", base: 2, registers: REGS };
        let mut errors = Vec::new();
        check_each(&block, |err| errors.push(err));
        assert_eq!(errors, [
            MapError::UnalignedBase { block: "T", base: 2 },
            MapError::UnalignedOffset { reg: "Y", offset: 6 },
            MapError::Unordered { reg: "Y", prev: "X" },
            MapError::DuplicateOffset { reg: "Z", other: "X", offset: 8 },
            MapError::DuplicateName { reg: "X" },
        ]);
        assert_eq!(report(&block), 5);
    }

    #[test]
    fn display() {
        let err = MapError::FieldOverlap { reg: "PIN0", field: "INT_ENA", other: "INT_TYPE" };
        assert_eq!(err.to_string(), "PIN0.INT_ENA: overlaps INT_TYPE");
        let err = MapError::UnalignedOffset { reg: "DATE", offset: 0x6FE };
        assert_eq!(err.to_string(), "DATE: offset 0x6FE is not aligned");
    }

    #[test]
    fn divergences() {
        const LEFT_FIELDS: &[FieldDesc] = &[field("A", 0, 5, Some(0)), field("B", 5, 1, None)];
        const RIGHT_FIELDS: &[FieldDesc] = &[field("A", 0, 6, Some(0)), field("C", 6, 1, None)];
        const LEFT: &[RegDesc] =
            &[reg("SAME", 0, GOOD), reg("CFG", 4, LEFT_FIELDS), reg("OLD", 8, GOOD)];
        const RIGHT: &[RegDesc] =
            &[reg("SAME", 0, GOOD), reg("CFG", 8, RIGHT_FIELDS), reg("NEW", 12, GOOD)];
        let left = BlockDesc { name: "L", base: 0, registers: LEFT };
        let right = BlockDesc { name: "R", base: 0, registers: RIGHT };
        let mut divergences = Vec::new();
        compare(&left, &right, |divergence| divergences.push(divergence));
        assert_eq!(divergences, [
            Divergence::Moved { reg: "CFG", left: 4, right: 8 },
            Divergence::Relaid { reg: "CFG", left: Some(&LEFT_FIELDS[0]), right: Some(&RIGHT_FIELDS[0]) },
            Divergence::Relaid { reg: "CFG", left: Some(&LEFT_FIELDS[1]), right: None },
            Divergence::Relaid { reg: "CFG", left: None, right: Some(&RIGHT_FIELDS[1]) },
            Divergence::LeftOnly(&LEFT[2]),
            Divergence::RightOnly(&RIGHT[2]),
        ]);
        assert_eq!(divergences[1].to_string(), "CFG.A: [4:0] R/W 0 -> [5:0] R/W 0");
        assert_eq!(divergences[2].to_string(), "CFG.B: [5:5] R/W x -> none");
        compare(&left, &left, |divergence| panic!("unexpected {divergence}"));
    }
}
