// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[tag(...)]` parsing.
//!
//! A field lists one annotation per namespace, plus an optional `nested`
//! marker:
//!
//! ```rust,ignore
//! #[tag(foo = "dob.year", bar = "details.birthYear")]
//! pub year: i32,
//!
//! #[tag(custom = "object", nested)]
//! pub obj: Obj,
//! ```
//!
//! Several `#[tag]` attributes on one field are combined. Namespaces that
//! collide with Rust keywords use raw identifiers: `r#type = "kind"`.

use syn::{Attribute, LitStr, ext::IdentExt};

/// Marker for record and list-of-record fields.
const NESTED: &str = "nested";

/// Parsed `#[tag(...)]` content of one field.
#[derive(Debug, Default, Clone)]
pub struct TagConfig {
    /// `(namespace, annotation)` pairs in declaration order.
    pub annotations: Vec<(String, LitStr)>,

    /// The field holds a record, or a `Vec` of records.
    pub nested: bool
}

impl TagConfig {
    /// Merge one `#[tag(...)]` attribute into this config.
    ///
    /// # Errors
    ///
    /// - a namespace given twice
    /// - a namespace without a string value
    /// - `nested` given a value
    pub fn parse_attr(&mut self, attr: &Attribute) -> syn::Result<()> {
        attr.parse_nested_meta(|meta| {
            let Some(ident) = meta.path.get_ident() else {
                return Err(meta.error("expected a namespace identifier"));
            };
            let name = ident.unraw().to_string();

            if name == NESTED && !meta.input.peek(syn::Token![=]) {
                self.nested = true;
                return Ok(());
            }

            let annotation: LitStr = meta.value()?.parse()?;
            if self.annotation(&name).is_some() {
                return Err(meta.error(format!("duplicate annotation for namespace `{name}`")));
            }
            self.annotations.push((name, annotation));
            Ok(())
        })
    }

    /// Annotation registered for `namespace`.
    #[must_use]
    pub fn annotation(&self, namespace: &str) -> Option<&LitStr> {
        self.annotations
            .iter()
            .find(|(ns, _)| ns == namespace)
            .map(|(_, lit)| lit)
    }
}
