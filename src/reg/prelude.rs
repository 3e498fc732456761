//! Memory-mapped registers prelude.

pub use super::{
    Access, BlockDesc, Crt, FieldDesc, RReg, Reg, RegDesc, RegOwned, RegShared, RegTag, RoReg,
    RwRegUnsync, Srt, Urt, WReg, WoReg,
};
pub use crate::bitfield::Bitfield;
