use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields};

use crate::common::{find_accessor_flags, AccessorFlags};

/// #[derive(Accessors)] expands to one inherent impl block holding the
/// generated methods of every annotated field.
pub fn expand_derive_accessors(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let vis = &input.vis;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "#[derive(Accessors)] requires a struct with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "#[derive(Accessors)] can only be used on structs",
            ));
        }
    };

    let mut methods = Vec::new();
    for field in fields {
        let Some(flags) = find_accessor_flags(&field.attrs)? else {
            continue;
        };
        // Named fields always carry an ident.
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        methods.push(expand_field(vis, ident, &field.ty, flags));
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            #(#methods)*
        }
    })
}

fn expand_field(
    vis: &syn::Visibility,
    ident: &syn::Ident,
    ty: &syn::Type,
    flags: AccessorFlags,
) -> TokenStream2 {
    let setter = format_ident!("set_{}", ident);
    let property = format_ident!("{}_property", ident);

    let get_doc = format!("Returns a clone of `{}`.", ident);
    let set_doc = format!("Overwrites `{}`.", ident);
    let property_doc = format!("Property handle bound to `{}`.", ident);

    let getter_fn = flags.get.then(|| {
        quote! {
            #[doc = #get_doc]
            #[inline]
            #vis fn #ident(&self) -> #ty {
                ::core::clone::Clone::clone(&self.#ident)
            }
        }
    });

    let setter_fn = flags.set.then(|| {
        quote! {
            #[doc = #set_doc]
            #[inline]
            #vis fn #setter(&mut self, value: #ty) {
                self.#ident = value;
            }
        }
    });

    let property_fn = match (flags.get, flags.set) {
        (true, true) => Some(quote! {
            #[doc = #property_doc]
            #vis fn #property(&mut self) -> ::simple_delegation::Property<'_, #ty> {
                ::simple_delegation::Property::member_mut(self, Self::#ident, Self::#setter)
            }
        }),
        (true, false) => Some(quote! {
            #[doc = #property_doc]
            #vis fn #property(&self) -> ::simple_delegation::Property<'_, #ty> {
                ::simple_delegation::Property::member(self, Self::#ident)
            }
        }),
        _ => None,
    };

    quote! {
        #getter_fn
        #setter_fn
        #property_fn
    }
}
