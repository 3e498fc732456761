use drone_macros_core::{doc_string, unkeywordize, NewMod};
use inflector::Inflector;
use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use std::collections::{HashMap, HashSet};
use syn::{
    braced, bracketed,
    parse::{Parse, ParseStream, Result},
    parse_macro_input,
    token::Bracket,
    Attribute, Error, Ident, LitInt, LitStr, Token,
};

const REG_WIDTH: u32 = 32;
const REG_SIZE: u32 = 4;
const READ_FLAGS: &[&str] = &["R", "RO"];
const WRITE_FLAGS: &[&str] = &["W", "WO", "WT", "WTC", "WTS"];
const STATE_FLAGS: &[&str] = &["SC", "SS"];
const INDEX_PLACEHOLDER: char = 'n';

struct Input {
    block: NewMod,
    base: LitInt,
    regs: Vec<Reg>,
}

struct Reg {
    attrs: Vec<Attribute>,
    ident: Ident,
    indices: Option<Vec<u32>>,
    offset: u32,
    fields: Vec<Field>,
}

struct Field {
    attrs: Vec<Attribute>,
    ident: Ident,
    header: Option<Ident>,
    offset: u32,
    width: u32,
    access: Vec<Ident>,
    reset: Option<u32>,
}

/// A single register after the index expansion.
struct Instance<'a> {
    reg: &'a Reg,
    index: Option<u32>,
    name: String,
    offset: u32,
}

impl Parse for Input {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let block = input.parse()?;
        let base = input.parse::<LitInt>()?;
        if base.base10_parse::<u64>()? % u64::from(REG_SIZE) != 0 {
            return Err(Error::new(base.span(), "base address is not aligned to 4 bytes"));
        }
        input.parse::<Token![;]>()?;
        let mut regs = Vec::new();
        while !input.is_empty() {
            regs.push(input.parse()?);
        }
        let input = Self { block, base, regs };
        let mut names = HashSet::new();
        let mut offsets = HashMap::new();
        for instance in input.instances()? {
            if !names.insert(instance.name.clone()) {
                return Err(Error::new(
                    instance.reg.ident.span(),
                    format!("duplicate register `{}`", instance.name),
                ));
            }
            if let Some(other) = offsets.insert(instance.offset, instance.name.clone()) {
                return Err(Error::new(
                    instance.reg.ident.span(),
                    format!(
                        "register `{}` has the same offset {:#X} as `{}`",
                        instance.name, instance.offset, other
                    ),
                ));
            }
        }
        Ok(input)
    }
}

impl Parse for Reg {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let ident = input.parse::<Ident>()?;
        let indices = if input.peek(Bracket) {
            if !ident.to_string().contains(INDEX_PLACEHOLDER) {
                return Err(Error::new(
                    ident.span(),
                    format!("register array name must contain `{}` placeholder", INDEX_PLACEHOLDER),
                ));
            }
            let content;
            bracketed!(content in input);
            Some(parse_indices(&content)?)
        } else {
            None
        };
        let content;
        braced!(content in input);
        let offset_lit = content.parse::<LitInt>()?;
        let offset = offset_lit.base10_parse::<u32>()?;
        if offset % REG_SIZE != 0 {
            return Err(Error::new(offset_lit.span(), "register offset is not aligned to 4 bytes"));
        }
        content.parse::<Token![;]>()?;
        let mut fields = Vec::<Field>::new();
        while !content.is_empty() {
            let field = content.parse::<Field>()?;
            if indices.is_none() && field.header_template().contains(INDEX_PLACEHOLDER) {
                return Err(Error::new(
                    field.ident.span(),
                    format!("`{}` placeholder in a field of a single register", INDEX_PLACEHOLDER),
                ));
            }
            for other in &fields {
                if other.ident == field.ident {
                    return Err(Error::new(
                        field.ident.span(),
                        format!("duplicate field `{}`", field.ident),
                    ));
                }
                if other.mask() & field.mask() != 0 {
                    return Err(Error::new(
                        field.ident.span(),
                        format!("field `{}` overlaps field `{}`", field.ident, other.ident),
                    ));
                }
            }
            fields.push(field);
        }
        if fields.is_empty() {
            return Err(Error::new(ident.span(), "register has no fields"));
        }
        Ok(Self { attrs, ident, indices, offset, fields })
    }
}

impl Parse for Field {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let ident = input.parse()?;
        let header = if input.peek(Token![as]) {
            input.parse::<Token![as]>()?;
            Some(input.parse()?)
        } else {
            None
        };
        let content;
        braced!(content in input);
        let offset_lit = content.parse::<LitInt>()?;
        let offset = offset_lit.base10_parse::<u32>()?;
        let width_lit = content.parse::<LitInt>()?;
        let width = width_lit.base10_parse::<u32>()?;
        if width == 0 {
            return Err(Error::new(width_lit.span(), "field width is zero"));
        }
        if offset >= REG_WIDTH || width > REG_WIDTH - offset {
            return Err(Error::new(offset_lit.span(), "field doesn't fit in 32 bits"));
        }
        let mut access = vec![parse_flag(&content)?];
        while content.peek(Token![/]) {
            content.parse::<Token![/]>()?;
            access.push(parse_flag(&content)?);
        }
        let reset = if content.peek(LitInt) {
            let reset_lit = content.parse::<LitInt>()?;
            let reset = reset_lit.base10_parse::<u32>()?;
            if reset & !max(width) != 0 {
                return Err(Error::new(reset_lit.span(), "reset value doesn't fit in the field"));
            }
            Some(reset)
        } else {
            let unknown = content.parse::<Ident>()?;
            if unknown != "x" {
                return Err(Error::new(unknown.span(), "expected reset value or `x`"));
            }
            None
        };
        if !content.is_empty() {
            return Err(content.error("unexpected tokens after the reset value"));
        }
        Ok(Self { attrs, ident, header, offset, width, access, reset })
    }
}

fn parse_indices(input: ParseStream<'_>) -> Result<Vec<u32>> {
    let start_lit = input.parse::<LitInt>()?;
    let start = start_lit.base10_parse::<u32>()?;
    if input.peek(Token![..]) {
        input.parse::<Token![..]>()?;
        let end = input.parse::<LitInt>()?.base10_parse::<u32>()?;
        if end <= start {
            return Err(Error::new(start_lit.span(), "empty index range"));
        }
        return Ok((start..end).collect());
    }
    let mut indices = vec![start];
    while !input.is_empty() {
        input.parse::<Token![,]>()?;
        if input.is_empty() {
            break;
        }
        let index_lit = input.parse::<LitInt>()?;
        let index = index_lit.base10_parse::<u32>()?;
        if indices.contains(&index) {
            return Err(Error::new(index_lit.span(), format!("duplicate index {}", index)));
        }
        indices.push(index);
    }
    Ok(indices)
}

fn parse_flag(input: ParseStream<'_>) -> Result<Ident> {
    let flag = input.parse::<Ident>()?;
    let known = READ_FLAGS.iter().chain(WRITE_FLAGS).chain(STATE_FLAGS).any(|known| flag == known);
    if known { Ok(flag) } else { Err(Error::new(flag.span(), format!("unknown access flag `{}`", flag))) }
}

fn max(width: u32) -> u32 {
    if width >= REG_WIDTH { u32::MAX } else { (1 << width) - 1 }
}

impl Input {
    fn instances(&self) -> Result<Vec<Instance<'_>>> {
        let mut instances = Vec::new();
        for reg in &self.regs {
            let name = reg.ident.to_string();
            match &reg.indices {
                Some(indices) => {
                    for &index in indices {
                        let offset = index
                            .checked_mul(REG_SIZE)
                            .and_then(|step| reg.offset.checked_add(step))
                            .ok_or_else(|| {
                                Error::new(
                                    reg.ident.span(),
                                    format!("offset of `{}` index {} overflows", name, index),
                                )
                            })?;
                        instances.push(Instance {
                            reg,
                            index: Some(index),
                            name: name.replacen(INDEX_PLACEHOLDER, &index.to_string(), 1),
                            offset,
                        });
                    }
                }
                None => instances.push(Instance {
                    reg,
                    index: None,
                    name: name.clone(),
                    offset: reg.offset,
                }),
            }
        }
        Ok(instances)
    }
}

impl Reg {
    fn is_readable(&self) -> bool {
        self.fields.iter().any(Field::is_readable)
    }

    fn is_writable(&self) -> bool {
        self.fields.iter().any(Field::is_writable)
    }

    fn reset(&self) -> u32 {
        self.fields.iter().fold(0, |reset, field| reset | field.reset.unwrap_or(0) << field.offset)
    }
}

impl Field {
    fn header_template(&self) -> String {
        self.header.as_ref().unwrap_or(&self.ident).to_string()
    }

    /// Name of the field macros in the C headers, without the block prefix.
    fn header_name(&self, index: Option<u32>) -> String {
        let template = self.header_template();
        match index {
            Some(index) => template.replacen(INDEX_PLACEHOLDER, &index.to_string(), 1),
            None => template,
        }
    }

    fn mask(&self) -> u32 {
        max(self.width) << self.offset
    }

    fn is_readable(&self) -> bool {
        self.access.iter().any(|flag| READ_FLAGS.iter().any(|known| flag == known))
    }

    fn is_writable(&self) -> bool {
        self.access.iter().any(|flag| WRITE_FLAGS.iter().any(|known| flag == known))
    }
}

pub fn proc_macro(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as Input);
    let NewMod { attrs: block_attrs, vis: block_vis, ident: block_ident } = &input.block;
    let base = &input.base;
    let block_name = block_ident.to_string();
    let block_mod = format_ident!("{}", unkeywordize(block_name.to_snake_case()));
    let mut instances = match input.instances() {
        Ok(instances) => instances,
        Err(err) => return err.to_compile_error().into(),
    };
    instances.sort_by_key(|instance| instance.offset);
    let mut reg_tokens = Vec::new();
    let mut reg_mods = Vec::new();
    let mut reg_attrs = Vec::new();
    for instance in &instances {
        let reg_mod = format_ident!("{}", unkeywordize(instance.name.to_lowercase()));
        reg_tokens.push(gen_reg(instance, &reg_mod));
        reg_mods.push(reg_mod);
        reg_attrs.push(&instance.reg.attrs);
    }
    let block_name = LitStr::new(&block_name, Span::call_site());
    quote! {
        #(#block_attrs)*
        #block_vis mod #block_mod {
            /// Base address of the block.
            pub const BASE: usize = #base;

            #(#reg_tokens)*

            /// Register descriptions sorted by offset.
            pub const REGISTERS: &[::drone_esp32_map::reg::RegDesc] = &[#(#reg_mods::DESC),*];

            /// Block description.
            pub const BLOCK: ::drone_esp32_map::reg::BlockDesc = ::drone_esp32_map::reg::BlockDesc {
                name: #block_name,
                base: BASE,
                registers: REGISTERS,
            };

            /// Unsynchronized tokens for all registers of the block.
            pub struct Regs {
                #(
                    #(#reg_attrs)*
                    pub #reg_mods: #reg_mods::Reg<::drone_esp32_map::reg::Urt>,
                )*
            }

            impl Regs {
                /// Creates tokens for all registers of the block.
                ///
                /// # Safety
                ///
                /// Must be called no more than once in the whole program. Tokens
                /// for the same registers must not be created elsewhere.
                #[inline]
                pub unsafe fn take() -> Self {
                    Self {
                        #(
                            #reg_mods: <#reg_mods::Reg<::drone_esp32_map::reg::Urt>
                                as ::drone_esp32_map::reg::Reg<::drone_esp32_map::reg::Urt>>::take(),
                        )*
                    }
                }
            }
        }
    }
    .into()
}

fn gen_reg(instance: &Instance<'_>, reg_mod: &Ident) -> TokenStream2 {
    let Instance { reg, index, name, offset } = instance;
    let attrs = &reg.attrs;
    let rt = quote!(::drone_esp32_map);
    let offset = LitInt::new(&format!("{:#X}", offset), Span::call_site());
    let reset = LitInt::new(&format!("{:#X}", reg.reset()), Span::call_site());
    let name = LitStr::new(name, Span::call_site());
    let description = LitStr::new(&doc_string(attrs), Span::call_site());
    let mut field_tokens = Vec::new();
    let mut field_mods = Vec::new();
    let mut accessors = Vec::new();
    for field in &reg.fields {
        let field_snk = field.ident.to_string().to_lowercase();
        let field_mod = format_ident!("{}", unkeywordize(&field_snk));
        field_tokens.push(gen_field(field, &field_mod, &field.header_name(*index)));
        accessors.push(gen_accessors(field, &field_mod, &field_snk));
        field_mods.push(field_mod);
    }
    let mut impls = Vec::new();
    if reg.is_readable() {
        impls.push(quote! {
            impl<T: #rt::reg::RegTag> #rt::reg::RReg<T> for Reg<T> {}
        });
        if !reg.is_writable() {
            impls.push(quote! {
                impl<T: #rt::reg::RegTag> #rt::reg::RoReg<T> for Reg<T> {}
            });
        }
    }
    if reg.is_writable() {
        impls.push(quote! {
            impl<T: #rt::reg::RegTag> #rt::reg::WReg<T> for Reg<T> {}
        });
        if !reg.is_readable() {
            impls.push(quote! {
                impl<T: #rt::reg::RegTag> #rt::reg::WoReg<T> for Reg<T> {}
            });
        }
    }
    quote! {
        #(#attrs)*
        pub mod #reg_mod {
            /// Offset from the block base address.
            pub const OFFSET: usize = #offset;

            /// Absolute address of the register.
            pub const ADDRESS: usize = super::BASE + OFFSET;

            /// Reset value of the register.
            pub const RESET: u32 = #reset;

            #(#field_tokens)*

            /// Field descriptions in declaration order.
            pub const FIELDS: &[#rt::reg::FieldDesc] = &[#(#field_mods::DESC),*];

            /// Register description.
            pub const DESC: #rt::reg::RegDesc = #rt::reg::RegDesc {
                name: #name,
                offset: OFFSET,
                fields: FIELDS,
                description: #description,
            };

            #(#attrs)*
            pub struct Reg<T: #rt::reg::RegTag>(::core::marker::PhantomData<T>);

            impl<T: #rt::reg::RegTag> #rt::reg::Reg<T> for Reg<T> {
                type Val = Val;
                type UReg = Reg<#rt::reg::Urt>;
                type SReg = Reg<#rt::reg::Srt>;
                type CReg = Reg<#rt::reg::Crt>;

                const OFFSET: usize = self::OFFSET;
                const ADDRESS: usize = self::ADDRESS;
                const DESC: &'static #rt::reg::RegDesc = &self::DESC;

                #[inline]
                unsafe fn take() -> Self {
                    Self(::core::marker::PhantomData)
                }
            }

            #(#impls)*

            impl ::core::clone::Clone for Reg<#rt::reg::Crt> {
                #[inline]
                fn clone(&self) -> Self {
                    *self
                }
            }

            impl ::core::marker::Copy for Reg<#rt::reg::Crt> {}

            #(#attrs)*
            #[derive(Clone, Copy, PartialEq, Eq, Debug)]
            pub struct Val {
                bits: u32,
            }

            impl #rt::bitfield::Bitfield for Val {
                type Bits = u32;

                const DEFAULT: u32 = self::RESET;

                #[inline]
                fn from_bits(bits: u32) -> Self {
                    Self { bits }
                }

                #[inline]
                fn bits(&self) -> u32 {
                    self.bits
                }

                #[inline]
                fn bits_mut(&mut self) -> &mut u32 {
                    &mut self.bits
                }
            }

            impl Val {
                #(#accessors)*
            }
        }
    }
}

fn gen_field(field: &Field, field_mod: &Ident, header_name: &str) -> TokenStream2 {
    let Field { attrs, ident, offset, width, access, reset, .. } = field;
    let rt = quote!(::drone_esp32_map);
    let max = LitInt::new(&format!("{:#X}", max(*width)), Span::call_site());
    let name = LitStr::new(&ident.to_string(), Span::call_site());
    let header_name = LitStr::new(header_name, Span::call_site());
    let description = LitStr::new(&doc_string(attrs), Span::call_site());
    let reset_in_place = reset.unwrap_or(0);
    let reset_desc = match reset {
        Some(reset) => quote!(::core::option::Option::Some(#reset)),
        None => quote!(::core::option::Option::None),
    };
    let access = access.iter().map(|flag| quote!(#rt::reg::Access::#flag));
    quote! {
        #(#attrs)*
        pub mod #field_mod {
            /// Bit position of the field.
            pub const SHIFT: u32 = #offset;

            /// Number of bits.
            pub const WIDTH: u32 = #width;

            /// Maximum value of the field.
            pub const MAX: u32 = #max;

            /// Mask of the field in place.
            pub const MASK: u32 = MAX << SHIFT;

            /// Reset value of the field, zero if undefined.
            pub const RESET: u32 = #reset_in_place;

            /// Field description.
            pub const DESC: #rt::reg::FieldDesc = #rt::reg::FieldDesc {
                name: #name,
                header_name: #header_name,
                offset: SHIFT,
                width: WIDTH,
                access: #rt::reg::Access::empty()#(.union(#access))*,
                reset: #reset_desc,
                description: #description,
            };
        }
    }
}

fn gen_accessors(field: &Field, field_mod: &Ident, field_snk: &str) -> TokenStream2 {
    let attrs = &field.attrs;
    let rt = quote!(::drone_esp32_map);
    let mut tokens = Vec::new();
    if field.width == 1 {
        if field.is_readable() {
            tokens.push(quote! {
                #(#attrs)*
                #[inline]
                pub fn #field_mod(&self) -> bool {
                    unsafe { #rt::bitfield::Bitfield::read_bit(self, #field_mod::SHIFT) }
                }
            });
        }
        if field.is_writable() {
            let set_field = format_ident!("set_{}", field_snk);
            let clear_field = format_ident!("clear_{}", field_snk);
            let toggle_field = format_ident!("toggle_{}", field_snk);
            tokens.push(quote! {
                #(#attrs)*
                #[inline]
                pub fn #set_field(&mut self) -> &mut Self {
                    unsafe { #rt::bitfield::Bitfield::set_bit(self, #field_mod::SHIFT) };
                    self
                }

                #(#attrs)*
                #[inline]
                pub fn #clear_field(&mut self) -> &mut Self {
                    unsafe { #rt::bitfield::Bitfield::clear_bit(self, #field_mod::SHIFT) };
                    self
                }

                #(#attrs)*
                #[inline]
                pub fn #toggle_field(&mut self) -> &mut Self {
                    unsafe { #rt::bitfield::Bitfield::toggle_bit(self, #field_mod::SHIFT) };
                    self
                }
            });
        }
    } else {
        if field.is_readable() {
            tokens.push(quote! {
                #(#attrs)*
                #[inline]
                pub fn #field_mod(&self) -> u32 {
                    unsafe {
                        #rt::bitfield::Bitfield::read_bits(self, #field_mod::SHIFT, #field_mod::WIDTH)
                    }
                }
            });
        }
        if field.is_writable() {
            let write_field = format_ident!("write_{}", field_snk);
            tokens.push(quote! {
                #(#attrs)*
                #[inline]
                pub fn #write_field(&mut self, bits: u32) -> &mut Self {
                    unsafe {
                        #rt::bitfield::Bitfield::write_bits(
                            self,
                            #field_mod::SHIFT,
                            #field_mod::WIDTH,
                            bits,
                        );
                    }
                    self
                }
            });
        }
    }
    quote!(#(#tokens)*)
}
