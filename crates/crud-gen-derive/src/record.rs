// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Record derive implementation.
//!
//! ```text
//! record.rs (orchestrator)
//! └── parse.rs  - #[record(...)] attributes → RecordInput
//! ```

mod parse;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use self::parse::{FieldInput, RecordInput, Role};

/// Main entry point for the Record derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match RecordInput::from_derive_input(&input) {
        Ok(record) => generate(&record).into(),
        Err(err) => err.write_errors().into()
    }
}

/// Generate the `Record` implementation.
fn generate(record: &RecordInput) -> TokenStream2 {
    let ident = &record.ident;
    let name = &record.name;
    let (impl_generics, ty_generics, where_clause) = record.generics.split_for_impl();
    let fields = record.fields.iter().map(field_def);

    quote! {
        impl #impl_generics ::crud_gen::Record for #ident #ty_generics #where_clause {
            fn record_def() -> ::crud_gen::RecordDef {
                ::crud_gen::RecordDef::new(#name, ::std::vec![#(#fields),*])
            }
        }
    }
}

fn field_def(field: &FieldInput) -> TokenStream2 {
    let name = &field.name;
    let role = match field.role {
        Role::Id => quote! { ::crud_gen::FieldRole::Id },
        Role::Column => quote! { ::crud_gen::FieldRole::Column },
        Role::Skip => quote! { ::crud_gen::FieldRole::Skip }
    };
    quote! { ::crud_gen::FieldDef::new(#name, #role) }
}
