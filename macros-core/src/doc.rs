use syn::{Attribute, Lit, Meta, MetaNameValue};

/// Access to the `#[doc]` attributes of an item.
pub trait DocAttrs {
    /// Returns the contents of the `#[doc]` attributes.
    fn doc_lines(&self) -> Vec<String>;
}

impl DocAttrs for [Attribute] {
    fn doc_lines(&self) -> Vec<String> {
        self.iter()
            .filter(|attr| attr.path.is_ident("doc"))
            .filter_map(|attr| match attr.parse_meta() {
                Ok(Meta::NameValue(MetaNameValue { lit: Lit::Str(lit), .. })) => Some(lit.value()),
                _ => None,
            })
            .collect()
    }
}

/// Joins the `#[doc]` attributes into a single line description.
pub fn doc_string(attrs: &[Attribute]) -> String {
    attrs
        .doc_lines()
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
