// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `TagMap` implementation generation.
//!
//! Every field becomes one export directive call, in declaration order, with
//! its annotation table baked in as a static slice:
//!
//! ```rust,ignore
//! impl ::tagmap::TagMap for Example {
//!     fn flatten_into(
//!         &self,
//!         namespace: &str,
//!         entries: &mut ::tagmap::FlatEntries
//!     ) -> Result<(), ::tagmap::Error> {
//!         ::tagmap::export::leaf(entries, &[("custom", "name")], namespace, "name", &self.name)?;
//!         ::tagmap::export::record(entries, &[("custom", "object")], namespace, "obj", &self.obj)?;
//!         ::tagmap::export::record_list(entries, &[("custom", "list")], namespace, "list", &self.list)?;
//!         Ok(())
//!     }
//! }
//! ```
//!
//! The namespace is a parameter of `flatten_into` and is handed down
//! unchanged to nested records. Leaves that no namespace exports get no
//! call, so their types need no `Serialize` bound.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Type, WherePredicate};

use super::parse::{FieldDef, FieldKind, RecordDef};
use crate::utils::bounds::with_predicates;

/// Generate the `TagMap` impl.
pub fn generate(record: &RecordDef) -> TokenStream {
    let krate = record.krate();
    let ident = &record.ident;

    let generics = if record.is_generic() {
        let (_, ty_generics, _) = record.generics.split_for_impl();
        let mut predicates = field_bounds(record);
        predicates.push(syn::parse_quote!(#ident #ty_generics: #krate::IsZero));
        with_predicates(&record.generics, predicates)
    } else {
        record.generics.clone()
    };
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let directives: Vec<TokenStream> = record
        .fields
        .iter()
        .filter(|field| field.is_exported())
        .map(|field| directive(field, krate))
        .collect();
    let unused = directives
        .is_empty()
        .then(|| quote! { let _ = (namespace, entries); });

    quote! {
        #[automatically_derived]
        impl #impl_generics #krate::TagMap for #ident #ty_generics #where_clause {
            fn flatten_into(
                &self,
                namespace: &str,
                entries: &mut #krate::FlatEntries
            ) -> ::core::result::Result<(), #krate::Error> {
                #unused
                #(#directives)*
                ::core::result::Result::Ok(())
            }
        }
    }
}

/// One export call for a field.
fn directive(field: &FieldDef, krate: &syn::Path) -> TokenStream {
    let name = field.name();
    let name_str = field.name_str();
    let namespaces = field.annotations().iter().map(|(ns, _)| ns);
    let annotations = field.annotations().iter().map(|(_, lit)| lit);

    let export = match field.kind() {
        FieldKind::Leaf => quote! { leaf },
        FieldKind::Record => quote! { record },
        FieldKind::RecordList => quote! { record_list }
    };

    quote! {
        #krate::export::#export(
            entries,
            &[#((#namespaces, #annotations)),*],
            namespace,
            #name_str,
            &self.#name
        )?;
    }
}

/// Trait bounds each field type needs in a generic record.
fn field_bounds(record: &RecordDef) -> Vec<WherePredicate> {
    let krate = record.krate();
    record
        .fields
        .iter()
        .filter(|field| field.is_exported())
        .map(|field| match field.kind() {
            FieldKind::Leaf => {
                let ty = field.ty();
                syn::parse_quote!(#ty: #krate::__private::Serialize + #krate::IsZero)
            }
            FieldKind::Record => {
                let ty = field.ty();
                syn::parse_quote!(#ty: #krate::TagMap)
            }
            FieldKind::RecordList => {
                let ty: &Type = field.vec_element().unwrap_or(field.ty());
                syn::parse_quote!(#ty: #krate::TagMap)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use syn::DeriveInput;

    use super::*;

    fn render(input: DeriveInput) -> String {
        generate(&RecordDef::from_derive_input(&input).unwrap()).to_string()
    }

    #[test]
    fn implements_tag_map() {
        let output = render(syn::parse_quote! {
            pub struct Example {
                #[tag(custom = "name")]
                pub name: String,
            }
        });
        assert!(output.contains("impl :: tagmap :: TagMap for Example"));
        assert!(output.contains("fn flatten_into"));
        assert!(output.contains("export :: leaf"));
        assert!(output.contains("(\"custom\" , \"name\")"));
    }

    #[test]
    fn directive_per_kind() {
        let output = render(syn::parse_quote! {
            struct Example {
                #[tag(custom = "name")]
                name: String,
                #[tag(custom = "object", nested)]
                obj: Obj,
                #[tag(nested)]
                obj_two: ObjTwo,
                #[tag(custom = "list", nested)]
                array_obj: Vec<ObjThree>,
            }
        });
        assert!(output.contains("export :: leaf"));
        assert!(output.contains("export :: record ("));
        assert!(output.contains("export :: record_list"));
        assert!(output.contains("\"obj_two\""));
    }

    #[test]
    fn fields_keep_declaration_order() {
        let output = render(syn::parse_quote! {
            struct Example {
                #[tag(custom = "first")]
                a: String,
                #[tag(custom = "second")]
                b: String,
            }
        });
        let first = output.find("\"first\"").unwrap();
        let second = output.find("\"second\"").unwrap();
        assert!(first < second);
    }

    #[test]
    fn untagged_record_gets_empty_table() {
        let output = render(syn::parse_quote! {
            struct Example {
                #[tag(nested)]
                inner: Inner,
            }
        });
        assert!(output.contains("& []"));
    }

    #[test]
    fn unexported_leaves_get_no_directive() {
        let output = render(syn::parse_quote! {
            struct Example {
                #[tag(custom = "id")]
                id: i32,
                pair: (u8, u8),
                #[tag(custom = "-")]
                shared: std::sync::Arc<str>,
            }
        });
        assert!(output.contains("\"id\""));
        assert!(!output.contains("\"pair\""));
        assert!(!output.contains("\"shared\""));
    }

    #[test]
    fn record_without_exports_still_compiles_cleanly() {
        let output = render(syn::parse_quote! {
            struct Example {
                pair: (u8, u8),
            }
        });
        assert!(output.contains("let _ = (namespace , entries) ;"));
        assert!(!output.contains("export ::"));
    }

    #[test]
    fn namespace_is_forwarded() {
        let output = render(syn::parse_quote! {
            struct Example {
                #[tag(custom = "object", nested)]
                obj: Obj,
            }
        });
        assert!(output.contains("namespace ,"));
    }

    #[test]
    fn custom_crate_path() {
        let output = render(syn::parse_quote! {
            #[tagmap(crate = "crate::rt")]
            struct Example {
                #[tag(custom = "name")]
                name: String,
            }
        });
        assert!(output.contains("impl crate :: rt :: TagMap for Example"));
    }

    #[test]
    fn generic_bounds_per_kind() {
        let output = render(syn::parse_quote! {
            struct Page<T, I> {
                #[tag(custom = "value")]
                value: T,
                #[tag(custom = "items", nested)]
                items: Vec<I>,
            }
        });
        assert!(output.contains("T : :: tagmap :: __private :: Serialize + :: tagmap :: IsZero"));
        assert!(output.contains("I : :: tagmap :: TagMap"));
    }

    #[test]
    fn unexported_generic_leaf_gets_no_bound() {
        let output = render(syn::parse_quote! {
            struct Tagged<T, M> {
                #[tag(custom = "value")]
                value: T,
                marker: M,
            }
        });
        assert!(output.contains("T : :: tagmap :: __private :: Serialize"));
        assert!(!output.contains("M : :: tagmap :: __private :: Serialize"));
        assert!(output.contains("Tagged < T , M > : :: tagmap :: IsZero"));
    }
}
