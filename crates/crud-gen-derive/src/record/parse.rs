// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[record(...)]` attribute parsing.
//!
//! # Attributes
//!
//! | Level | Attribute | Effect |
//! |-------|-----------|--------|
//! | struct | `name = "..."` | Type name used in generated code |
//! | field | `id` | Primary key role |
//! | field | `skip` | Not persisted |
//! | field | `rename = "..."` | Declared name override |

use darling::{FromDeriveInput, FromField, ast::Data, util::Ignored};
use syn::{DeriveInput, Generics, Ident, ext::IdentExt};

#[derive(Debug, FromField)]
#[darling(attributes(record))]
struct FieldAttrs {
    ident: Option<Ident>,

    #[darling(default)]
    id: bool,

    #[darling(default)]
    skip: bool,

    #[darling(default)]
    rename: Option<String>
}

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(record), supports(struct_named))]
struct RecordAttrs {
    ident: Ident,

    generics: Generics,

    data: Data<Ignored, FieldAttrs>,

    /// Type name override.
    #[darling(default)]
    name: Option<String>
}

/// Role of a field in the generated descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Id,
    Column,
    Skip
}

/// A parsed field.
#[derive(Debug)]
pub struct FieldInput {
    pub name: String,
    pub role: Role
}

/// A parsed record struct, ready for code generation.
#[derive(Debug)]
pub struct RecordInput {
    /// Struct identifier the impl is written for.
    pub ident:    Ident,
    pub generics: Generics,
    /// Type name handed to the generator.
    pub name:     String,
    /// Fields in declaration order.
    pub fields:   Vec<FieldInput>
}

impl RecordInput {
    /// Parse a derive input.
    ///
    /// # Errors
    ///
    /// Returns errors for non-struct or tuple inputs (reported by darling),
    /// conflicting field attributes, and more than one `#[record(id)]` field.
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = RecordAttrs::from_derive_input(input)?;
        let mut errors = darling::Error::accumulator();

        // `supports(struct_named)` already rejected enums and tuple structs
        let raw_fields = attrs.data.take_struct().map(|s| s.fields).unwrap_or_default();

        let mut fields = Vec::with_capacity(raw_fields.len());
        let mut id_seen = false;

        for (ident, field) in raw_fields
            .into_iter()
            .filter_map(|field| field.ident.clone().map(|ident| (ident, field)))
        {
            let role = match (field.id, field.skip) {
                (true, true) => {
                    errors.push(
                        darling::Error::custom("a field cannot be both `id` and `skip`")
                            .with_span(&ident)
                    );
                    continue;
                }
                (true, false) => Role::Id,
                (false, true) => Role::Skip,
                (false, false) => Role::Column
            };

            if role == Role::Id {
                if id_seen {
                    errors.push(
                        darling::Error::custom("only one field may be marked `#[record(id)]`")
                            .with_span(&ident)
                    );
                    continue;
                }
                id_seen = true;
            }

            let name = field.rename.unwrap_or_else(|| ident.unraw().to_string());
            if name.is_empty() {
                errors.push(darling::Error::custom("`rename` must not be empty").with_span(&ident));
                continue;
            }

            fields.push(FieldInput {
                name,
                role
            });
        }

        let name = attrs.name.unwrap_or_else(|| attrs.ident.unraw().to_string());
        if name.is_empty() {
            errors.push(darling::Error::custom("`name` must not be empty").with_span(&attrs.ident));
        }

        errors.finish()?;

        Ok(Self {
            ident: attrs.ident,
            generics: attrs.generics,
            name,
            fields
        })
    }
}
