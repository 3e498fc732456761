use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

lazy_static! {
    static ref KEYWORDS: Regex = Regex::new(
        r"(?x)
            ^ ( as | break | const | continue | crate | else | enum | extern | false | fn | for |
            if | impl | in | let | loop | match | mod | move | mut | pub | ref | return | Self |
            self | static | struct | super | trait | true | type | unsafe | use | where | while |
            async | await | dyn | abstract | become | box | do | final | macro | override | priv |
            typeof | unsized | virtual | yield | try ) $
        "
    )
    .unwrap();
}

/// Inserts an underscore at the beginning of the string if the string is a
/// reserved keyword.
///
/// ```
/// use drone_macros_core::unkeywordize;
///
/// assert_eq!(unkeywordize("in"), "_in");
/// assert_eq!(unkeywordize("pin0"), "pin0");
/// ```
pub fn unkeywordize<'a, T: Into<Cow<'a, str>>>(ident: T) -> Cow<'a, str> {
    let mut ident = ident.into();
    if KEYWORDS.is_match(&ident) {
        ident.to_mut().insert(0, '_');
    }
    ident
}
