// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Where-clause extension for generic records.
//!
//! For `struct Wrapper<T> { inner: T }` the generated impls need bounds on
//! the field types (`T: IsZero`, `T: Serialize`, ...). Non-generic records
//! get no extra predicates.

use syn::{Generics, WherePredicate};

/// Clone `generics` and append `predicates` to its where clause.
pub fn with_predicates(
    generics: &Generics,
    predicates: impl IntoIterator<Item = WherePredicate>
) -> Generics {
    let mut generics = generics.clone();
    generics.make_where_clause().predicates.extend(predicates);
    generics
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;

    #[test]
    fn appends_to_existing_where_clause() {
        let generics: Generics = syn::parse_quote!(<T> );
        let generics = with_predicates(
            &generics,
            [syn::parse_quote!(T: Clone), syn::parse_quote!(T: Default)]
        );
        let (_, _, where_clause) = generics.split_for_impl();
        let rendered = quote!(#where_clause).to_string();
        assert!(rendered.contains("T : Clone"));
        assert!(rendered.contains("T : Default"));
    }

    #[test]
    fn no_predicates_keeps_empty_clause() {
        let generics: Generics = syn::parse_quote!(<T>);
        let generics = with_predicates(&generics, []);
        let (_, _, where_clause) = generics.split_for_impl();
        assert!(where_clause.is_none_or(|clause| clause.predicates.is_empty()));
    }
}
