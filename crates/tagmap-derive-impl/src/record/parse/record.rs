// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Record-level parsing.
//!
//! Container attributes are parsed with darling:
//!
//! | Attribute | Default | Description |
//! |-----------|---------|-------------|
//! | `crate` | `"::tagmap"` | Path to the runtime crate used by generated code |
//! | `manual_zero` | `false` | Do not generate `IsZero`; the user implements it |
//!
//! ```rust,ignore
//! #[derive(TagMap)]
//! #[tagmap(crate = "::tagmap_core", manual_zero)]
//! pub struct Profile { /* ... */ }
//! ```

use darling::FromDeriveInput;
use syn::{DeriveInput, Generics, Ident};

use super::field::FieldDef;

/// Default runtime crate path.
pub fn default_crate_path() -> syn::Path {
    syn::parse_quote!(::tagmap)
}

/// Record-level attributes parsed from `#[tagmap(...)]`.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(tagmap), supports(struct_named))]
pub struct RecordAttrs {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct generics.
    pub generics: Generics,

    /// Runtime crate path.
    #[darling(rename = "crate", default = "default_crate_path")]
    pub krate: syn::Path,

    /// Skip generating the `IsZero` impl.
    #[darling(default)]
    pub manual_zero: bool
}

/// Complete parsed record definition passed to the generators.
#[derive(Debug)]
pub struct RecordDef {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct generics.
    pub generics: Generics,

    /// Runtime crate path.
    pub krate: syn::Path,

    /// Skip generating the `IsZero` impl.
    pub manual_zero: bool,

    /// Fields in declaration order.
    pub fields: Vec<FieldDef>
}

impl RecordDef {
    /// Parse a record definition from derive input.
    ///
    /// # Errors
    ///
    /// - the input is not a struct with named fields
    /// - a container or field attribute is malformed
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = RecordAttrs::from_derive_input(input)?;

        let fields = match &input.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(named) => {
                    let mut errors = darling::Error::accumulator();
                    let fields: Vec<FieldDef> = named
                        .named
                        .iter()
                        .filter_map(|field| errors.handle(FieldDef::from_field(field)))
                        .collect();
                    errors.finish()?;
                    fields
                }
                _ => {
                    return Err(darling::Error::custom("TagMap requires named fields")
                        .with_span(&input.ident));
                }
            },
            _ => {
                return Err(
                    darling::Error::custom("TagMap can only be derived for structs")
                        .with_span(&input.ident)
                );
            }
        };

        Ok(Self {
            ident: attrs.ident,
            generics: attrs.generics,
            krate: attrs.krate,
            manual_zero: attrs.manual_zero,
            fields
        })
    }

    /// Runtime crate path for generated code.
    #[must_use]
    pub fn krate(&self) -> &syn::Path {
        &self.krate
    }

    /// Check if the struct declares type parameters.
    #[must_use]
    pub fn is_generic(&self) -> bool {
        self.generics.type_params().next().is_some()
    }
}
