use syn::{
    parse::{Parse, ParseStream, Result},
    Attribute, Ident, Token, Visibility,
};

/// Module declaration: `pub mod FOO;`.
#[allow(missing_docs)]
pub struct NewMod {
    pub attrs: Vec<Attribute>,
    pub vis: Visibility,
    pub ident: Ident,
}

impl Parse for NewMod {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis = input.parse()?;
        input.parse::<Token![mod]>()?;
        let ident = input.parse()?;
        input.parse::<Token![;]>()?;
        Ok(Self { attrs, vis, ident })
    }
}
