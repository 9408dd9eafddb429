// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[derive(Record)]` for `crud-gen`.
//!
//! Implements `crud_gen::Record` from a named struct's fields, in
//! declaration order. Use the `crud-gen` crate rather than depending on this
//! one directly.
//!
//! ```rust,ignore
//! use crud_gen::Record;
//!
//! #[derive(Record)]
//! #[record(name = "Person")]          // Optional: type name in generated code
//! pub struct PersonModel {
//!     #[record(id)]                   // Primary key, left out of column lists
//!     pub id: u64,
//!     pub first_name: String,
//!     #[record(rename = "surname")]   // Column name override
//!     pub last_name: String,
//!     #[record(skip)]                 // Not persisted
//!     pub cached_age: Option<u8>,
//! }
//! ```

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

mod record;

use proc_macro::TokenStream;

/// Derive `crud_gen::Record` for a struct with named fields.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive(input)
}
