use super::Access;

/// Register width in bits.
pub const REG_WIDTH: u32 = 32;

/// Register width in bytes, which is also the address alignment.
pub const REG_SIZE: usize = 4;

/// Description of a register field.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FieldDesc {
    /// Field name as in the reference manual, without the register prefix.
    pub name: &'static str,
    /// Name of the field macros in the C headers, without the block prefix,
    /// such as `PIN5_INT_TYPE` or `SIG5_IN_SEL`.
    pub header_name: &'static str,
    /// Position of the least significant bit.
    pub offset: u32,
    /// Number of bits.
    pub width: u32,
    /// Access mode.
    pub access: Access,
    /// Reset value, `None` if the manual leaves it undefined.
    pub reset: Option<u32>,
    /// Human description.
    pub description: &'static str,
}

/// Description of a 32-bit register.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RegDesc {
    /// Register name as in the reference manual, without the block prefix.
    pub name: &'static str,
    /// Offset from the block base address.
    pub offset: usize,
    /// Fields in declaration order.
    pub fields: &'static [FieldDesc],
    /// Human description.
    pub description: &'static str,
}

/// Description of a peripheral register block.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BlockDesc {
    /// Block name, such as `GPIO`.
    pub name: &'static str,
    /// Base address.
    pub base: usize,
    /// Registers sorted by offset.
    pub registers: &'static [RegDesc],
}

/// Returns a mask of `width` low order bits.
#[inline]
pub const fn low_mask(width: u32) -> u32 {
    if width >= REG_WIDTH { u32::MAX } else { (1 << width) - 1 }
}

impl FieldDesc {
    /// Returns the maximum field value, unshifted. The `_V` macro of the C
    /// headers.
    #[inline]
    pub const fn max(&self) -> u32 {
        low_mask(self.width)
    }

    /// Returns the bit position of the field. The `_S` macro of the C headers.
    #[inline]
    pub const fn shift(&self) -> u32 {
        self.offset
    }

    /// Returns the field mask in place. The `_M` macro and the bare field macro
    /// of the C headers.
    #[inline]
    pub const fn mask(&self) -> u32 {
        if self.offset >= REG_WIDTH { 0 } else { self.max() << self.offset }
    }

    /// Returns the reset value shifted into place, zero if undefined.
    #[inline]
    pub const fn reset_in_place(&self) -> u32 {
        match self.reset {
            Some(reset) if self.offset < REG_WIDTH => (reset & self.max()) << self.offset,
            _ => 0,
        }
    }

    /// Returns `true` if the field is a single bit.
    #[inline]
    pub const fn is_bit(&self) -> bool {
        self.width == 1
    }

    /// Returns the index of the most significant bit.
    #[inline]
    pub const fn msb(&self) -> u32 {
        (self.offset + self.width).saturating_sub(1)
    }

    /// Reads the field value out of a raw register value.
    #[inline]
    pub const fn extract(&self, raw: u32) -> u32 {
        (raw & self.mask()) >> self.offset
    }

    /// Returns `raw` with the field replaced by `value`. High order bits of
    /// `value` which don't fit the field are discarded.
    #[inline]
    pub const fn insert(&self, raw: u32, value: u32) -> u32 {
        raw & !self.mask() | (value & self.max()) << self.offset
    }
}

impl RegDesc {
    /// Returns the reset value composed from the field reset values. Fields
    /// with undefined reset value contribute zeros.
    pub const fn reset(&self) -> u32 {
        let mut reset = 0;
        let mut i = 0;
        while i < self.fields.len() {
            reset |= self.fields[i].reset_in_place();
            i += 1;
        }
        reset
    }

    /// Returns `true` if every field has a defined reset value.
    pub const fn is_reset_defined(&self) -> bool {
        let mut i = 0;
        while i < self.fields.len() {
            if self.fields[i].reset.is_none() {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Returns the union of the field masks.
    pub const fn mask(&self) -> u32 {
        let mut mask = 0;
        let mut i = 0;
        while i < self.fields.len() {
            mask |= self.fields[i].mask();
            i += 1;
        }
        mask
    }

    /// Returns the union of the field access modes.
    pub const fn access(&self) -> Access {
        let mut access = Access::empty();
        let mut i = 0;
        while i < self.fields.len() {
            access = access.union(self.fields[i].access);
            i += 1;
        }
        access
    }

    /// Returns `true` if at least one field is readable.
    pub fn is_readable(&self) -> bool {
        self.fields.iter().any(|field| field.access.is_readable())
    }

    /// Returns `true` if at least one field is writable.
    pub fn is_writable(&self) -> bool {
        self.fields.iter().any(|field| field.access.is_writable())
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&'static FieldDesc> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Returns the absolute address of the register inside `block`.
    #[inline]
    pub const fn address(&self, block: &BlockDesc) -> usize {
        block.base + self.offset
    }
}

impl BlockDesc {
    /// Looks up a register by name.
    pub fn register(&self, name: &str) -> Option<&'static RegDesc> {
        self.registers.iter().find(|reg| reg.name == name)
    }

    /// Looks up a register by its offset from the base address.
    pub fn at_offset(&self, offset: usize) -> Option<&'static RegDesc> {
        self.registers
            .binary_search_by_key(&offset, |reg| reg.offset)
            .ok()
            .map(|index| &self.registers[index])
    }

    /// Returns the absolute address of the register `name`.
    pub fn address_of(&self, name: &str) -> Option<usize> {
        self.register(name).map(|reg| reg.address(self))
    }

    /// Returns the number of bytes spanned by the registers.
    pub fn span(&self) -> usize {
        self.registers.last().map_or(0, |reg| reg.offset + REG_SIZE)
    }

    /// Iterates over the registers whose names start with `prefix` and continue
    /// with a decimal index, such as `PIN0`, `PIN1`, ... for `"PIN"`. The
    /// remainder after the index must be `suffix`.
    pub fn family<'a>(
        &'a self,
        prefix: &'a str,
        suffix: &'a str,
    ) -> impl Iterator<Item = (u32, &'static RegDesc)> + 'a {
        self.registers.iter().filter_map(move |reg| {
            let rest = reg.name.strip_prefix(prefix)?;
            let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
            if digits == 0 || &rest[digits..] != suffix {
                return None;
            }
            rest[..digits].parse().ok().map(|index| (index, reg))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INT_TYPE: FieldDesc = FieldDesc {
        name: "INT_TYPE",
        header_name: "PIN0_INT_TYPE",
        offset: 7,
        width: 3,
        access: Access::RW,
        reset: Some(0b101),
        description: "",
    };

    const DATE: FieldDesc = FieldDesc {
        name: "DATE",
        header_name: "DATE",
        offset: 0,
        width: 32,
        access: Access::RW,
        reset: None,
        description: "",
    };

    const PIN_FIELDS: &[FieldDesc] = &[INT_TYPE, FieldDesc {
        name: "PAD_DRIVER",
        header_name: "PIN0_PAD_DRIVER",
        offset: 2,
        width: 1,
        access: Access::WT,
        reset: Some(1),
        description: "",
    }];

    const REGISTERS: &[RegDesc] = &[
        RegDesc { name: "PIN0", offset: 0x74, fields: PIN_FIELDS, description: "" },
        RegDesc { name: "PIN1", offset: 0x78, fields: PIN_FIELDS, description: "" },
        RegDesc { name: "PIN10_CFG", offset: 0x7C, fields: PIN_FIELDS, description: "" },
        RegDesc { name: "DATE", offset: 0x6FC, fields: &[DATE], description: "" },
    ];

    const BLOCK: BlockDesc = BlockDesc { name: "GPIO", base: 0x6000_4000, registers: REGISTERS };

    #[test]
    fn field_masks() {
        assert_eq!(INT_TYPE.max(), 0x7);
        assert_eq!(INT_TYPE.shift(), 7);
        assert_eq!(INT_TYPE.mask(), 0x380);
        assert_eq!(INT_TYPE.msb(), 9);
        assert_eq!(DATE.max(), u32::MAX);
        assert_eq!(DATE.mask(), u32::MAX);
    }

    #[test]
    fn field_extract_insert() {
        assert_eq!(INT_TYPE.extract(0xFFFF_FFFF), 0x7);
        assert_eq!(INT_TYPE.extract(0b10_1000_0000), 0b101);
        assert_eq!(INT_TYPE.insert(0, 0b011), 0b1_1000_0000);
        assert_eq!(INT_TYPE.insert(u32::MAX, 0), !0x380);
        assert_eq!(INT_TYPE.insert(0, 0xFF), 0x380);
        assert_eq!(DATE.insert(0x1234, 0xABCD_0000), 0xABCD_0000);
    }

    #[test]
    fn reg_composition() {
        let pin = &REGISTERS[0];
        assert_eq!(pin.reset(), 0b101 << 7 | 1 << 2);
        assert_eq!(pin.mask(), 0x384);
        assert_eq!(pin.access(), Access::RW.union(Access::WT));
        assert!(pin.is_readable());
        assert!(pin.is_writable());
        assert!(pin.is_reset_defined());
        assert!(!REGISTERS[3].is_reset_defined());
        assert_eq!(REGISTERS[3].reset(), 0);
        assert_eq!(pin.field("PAD_DRIVER").map(|f| f.offset), Some(2));
        assert!(pin.field("MISSING").is_none());
    }

    #[test]
    fn block_lookup() {
        assert_eq!(BLOCK.address_of("PIN1"), Some(0x6000_4078));
        assert_eq!(BLOCK.at_offset(0x6FC).map(|reg| reg.name), Some("DATE"));
        assert!(BLOCK.at_offset(0x70).is_none());
        assert_eq!(BLOCK.span(), 0x700);
    }

    #[test]
    fn block_family() {
        let mut pins = BLOCK.family("PIN", "");
        assert_eq!(pins.next().map(|(i, reg)| (i, reg.offset)), Some((0, 0x74)));
        assert_eq!(pins.next().map(|(i, reg)| (i, reg.offset)), Some((1, 0x78)));
        assert!(pins.next().is_none());
        let mut cfgs = BLOCK.family("PIN", "_CFG");
        assert_eq!(cfgs.next().map(|(i, _)| i), Some(10));
        assert!(cfgs.next().is_none());
    }
}
