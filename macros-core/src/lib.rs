//! Procedural macros base for drone-esp32-map.

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod doc;
mod new_mod;
mod unkeywordize;

pub use self::{
    doc::{doc_string, DocAttrs},
    new_mod::NewMod,
    unkeywordize::unkeywordize,
};
