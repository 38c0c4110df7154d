// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `IsZero` implementation generation.
//!
//! A record is zero when every field is zero, tagged or not:
//!
//! ```rust,ignore
//! impl ::tagmap::IsZero for Example {
//!     fn is_zero(&self) -> bool {
//!         ::tagmap::IsZero::is_zero(&self.name) && ::tagmap::IsZero::is_zero(&self.id)
//!     }
//! }
//! ```
//!
//! A record without fields is always zero.

use proc_macro2::TokenStream;
use quote::quote;
use syn::WherePredicate;

use super::parse::RecordDef;
use crate::utils::bounds::with_predicates;

/// Generate the `IsZero` impl, unless `#[tagmap(manual_zero)]` is set.
pub fn generate(record: &RecordDef) -> TokenStream {
    if record.manual_zero {
        return TokenStream::new();
    }

    let krate = record.krate();
    let ident = &record.ident;

    let generics = if record.is_generic() {
        with_predicates(
            &record.generics,
            record.fields.iter().map(|field| -> WherePredicate {
                let ty = field.ty();
                syn::parse_quote!(#ty: #krate::IsZero)
            })
        )
    } else {
        record.generics.clone()
    };
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let body = record
        .fields
        .iter()
        .map(|field| {
            let name = field.name();
            quote! { #krate::IsZero::is_zero(&self.#name) }
        })
        .reduce(|acc, check| quote! { #acc && #check })
        .unwrap_or_else(|| quote! { true });

    quote! {
        #[automatically_derived]
        impl #impl_generics #krate::IsZero for #ident #ty_generics #where_clause {
            fn is_zero(&self) -> bool {
                #body
            }
        }
    }
}
