// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level parsing.
//!
//! Each named field becomes a [`FieldDef`] with its per-namespace
//! annotations and an export [`FieldKind`]:
//!
//! | Declaration | Kind |
//! |-------------|------|
//! | `#[tag(ns = "key")] pub name: String` | [`FieldKind::Leaf`] |
//! | `#[tag(ns = "key", nested)] pub obj: Obj` | [`FieldKind::Record`] |
//! | `#[tag(ns = "key", nested)] pub items: Vec<Item>` | [`FieldKind::RecordList`] |
//!
//! `nested` accepts a record, an `Option`, `Box` or reference around one, or
//! a `Vec` of records. Other containers are rejected at the field's type.

mod tags;

use syn::{Field, GenericArgument, Ident, LitStr, PathArguments, Type, ext::IdentExt};
pub use tags::TagConfig;

/// Annotation value excluding a field.
const SKIP: &str = "-";

/// Containers `nested` cannot walk.
const COLLECTIONS: &[&str] = &[
    "VecDeque",
    "LinkedList",
    "BinaryHeap",
    "HashSet",
    "BTreeSet",
    "HashMap",
    "BTreeMap"
];

/// How a field is exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Serialized as a single value.
    Leaf,

    /// Flattened recursively.
    Record,

    /// Each element flattened to its own flat map.
    RecordList
}

/// Field definition with parsed `#[tag]` attributes.
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier.
    pub ident: Ident,

    /// Field type.
    pub ty: Type,

    /// Annotations and the `nested` marker.
    pub tags: TagConfig
}

impl FieldDef {
    /// Parse field definition from syn's `Field`.
    ///
    /// # Errors
    ///
    /// Returns error if the field is unnamed or a `#[tag]` attribute is
    /// malformed. All attribute errors of the field are accumulated.
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("TagMap fields must be named").with_span(field)
        })?;

        let mut errors = darling::Error::accumulator();
        let mut tags = TagConfig::default();
        for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("tag")) {
            errors.handle(tags.parse_attr(attr).map_err(darling::Error::from));
        }
        if tags.nested
            && let Some(shape) = unsupported_nested(&field.ty)
        {
            errors.push(
                darling::Error::custom(format!(
                    "`nested` does not support {shape}; use a record, an `Option` or `Box` \
                     of a record, or a `Vec` of records"
                ))
                .with_span(&field.ty)
            );
        }
        errors.finish()?;

        Ok(Self {
            ident,
            ty: field.ty.clone(),
            tags
        })
    }

    /// Get the field name as an identifier.
    #[must_use]
    pub fn name(&self) -> &Ident {
        &self.ident
    }

    /// Get the field name as a string, without any `r#` prefix.
    #[must_use]
    pub fn name_str(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Get the field type.
    #[must_use]
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// `(namespace, annotation)` pairs.
    #[must_use]
    pub fn annotations(&self) -> &[(String, LitStr)] {
        &self.tags.annotations
    }

    /// Check if any namespace can export this field.
    ///
    /// Leaves without annotations, or excluded under every namespace they
    /// name, produce no export call and need no `Serialize` bound. Records are
    /// always exported since an untagged record is hoisted.
    #[must_use]
    pub fn is_exported(&self) -> bool {
        self.tags.nested || self.annotations().iter().any(|(_, lit)| lit.value() != SKIP)
    }

    /// Export kind of the field.
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        match (self.tags.nested, self.vec_element()) {
            (false, _) => FieldKind::Leaf,
            (true, Some(_)) => FieldKind::RecordList,
            (true, None) => FieldKind::Record
        }
    }

    /// Element type if the field type is `Vec<T>`.
    #[must_use]
    pub fn vec_element(&self) -> Option<&Type> {
        type_argument(&self.ty, "Vec")
    }
}

/// First type argument of `ty` when its last path segment is `wrapper`.
fn type_argument<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    if let Type::Path(type_path) = ty
        && let Some(segment) = type_path.path.segments.last()
        && segment.ident == wrapper
        && let PathArguments::AngleBracketed(args) = &segment.arguments
        && let Some(GenericArgument::Type(inner)) = args.args.first()
    {
        return Some(inner);
    }
    None
}

/// Describe a `nested` field type that cannot be exported.
fn unsupported_nested(ty: &Type) -> Option<&'static str> {
    match ty {
        Type::Array(_) => Some("arrays"),
        Type::Slice(_) => Some("slices"),
        Type::Tuple(_) => Some("tuples"),
        Type::Paren(paren) => unsupported_nested(&paren.elem),
        Type::Reference(reference) => unsupported_nested(&reference.elem),
        Type::Path(type_path) => {
            if let Some(element) = type_argument(ty, "Vec") {
                return match type_argument(element, "Vec") {
                    Some(_) => Some("a `Vec` of `Vec`s"),
                    None => unsupported_nested(element)
                };
            }
            if let Some(inner) = type_argument(ty, "Option").or_else(|| type_argument(ty, "Box")) {
                return match type_argument(inner, "Vec") {
                    Some(_) => Some("a `Vec` inside `Option` or `Box`"),
                    None => unsupported_nested(inner)
                };
            }
            let ident = type_path.path.segments.last()?.ident.to_string();
            COLLECTIONS
                .contains(&ident.as_str())
                .then_some("collections other than `Vec`")
        }
        _ => None
    }
}
