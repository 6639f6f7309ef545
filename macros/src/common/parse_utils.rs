//! Common parsing utilities
//!
//! Shared parsing helpers for `#[accessor(...)]` attributes.

use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Attribute, Ident, Token,
};

// =============================================================================
// Accessor Flags: `#[accessor(get, set)]`
// =============================================================================

/// Parsed contents of one `#[accessor(...)]` attribute.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct AccessorFlags {
    pub get: bool,
    pub set: bool,
}

impl Parse for AccessorFlags {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut flags = AccessorFlags::default();
        for ident in parse_comma_separated::<Ident>(input)? {
            let slot = if ident == "get" {
                &mut flags.get
            } else if ident == "set" {
                &mut flags.set
            } else {
                return Err(syn::Error::new(
                    ident.span(),
                    format!("unknown accessor flag `{}`, expected `get` or `set`", ident),
                ));
            };
            if *slot {
                return Err(syn::Error::new(
                    ident.span(),
                    format!("duplicate accessor flag `{}`", ident),
                ));
            }
            *slot = true;
        }
        if !flags.get && !flags.set {
            return Err(input.error("expected at least one of `get`, `set`"));
        }
        Ok(flags)
    }
}

/// Find and parse the `#[accessor(...)]` attribute among `attrs`.
///
/// Returns `Ok(None)` when the field carries no such attribute.
pub fn find_accessor_flags(attrs: &[Attribute]) -> syn::Result<Option<AccessorFlags>> {
    let mut found = None;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("accessor")) {
        if found.is_some() {
            return Err(syn::Error::new_spanned(attr, "duplicate #[accessor] attribute"));
        }
        found = Some(attr.parse_args::<AccessorFlags>()?);
    }
    Ok(found)
}

// =============================================================================
// Comma-separated List Parsing
// =============================================================================

/// Parse a comma-separated list of items
pub fn parse_comma_separated<T: Parse>(input: ParseStream) -> syn::Result<Vec<T>> {
    let items = Punctuated::<T, Token![,]>::parse_terminated(input)?;
    Ok(items.into_iter().collect())
}
