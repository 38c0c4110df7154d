// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! TagMap derive macro implementation.
//!
//! # Architecture
//!
//! ```text
//! record.rs (orchestrator)
//! │
//! ├── parse/      → Attribute parsing (RecordDef, FieldDef)
//! │
//! ├── zero.rs     → IsZero impl (conjunction over all fields)
//! └── export.rs   → TagMap impl (one export directive per field)
//! ```

mod export;
pub mod parse;
mod zero;

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use self::parse::RecordDef;

/// Main entry point for the TagMap derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match RecordDef::from_derive_input(&input) {
        Ok(record) => generate(&record).into(),
        Err(err) => err.write_errors().into()
    }
}

fn generate(record: &RecordDef) -> proc_macro2::TokenStream {
    let zero = zero::generate(record);
    let export = export::generate(record);

    quote! {
        #zero
        #export
    }
}
