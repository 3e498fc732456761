//! Procedural macros for drone-esp32-map.
//!
//! This crate shouldn't be used directly. See the `drone-esp32-map`
//! documentation for details.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::precedence, clippy::too_many_lines)]
#![recursion_limit = "512"]

extern crate proc_macro;

mod reg_map;

use proc_macro::TokenStream;

#[proc_macro]
pub fn reg_map(input: TokenStream) -> TokenStream {
    reg_map::proc_macro(input)
}
