// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Column discovery and column list formatting.
//!
//! Turns the fields of a [`RecordDef`] into the `snake_case` column names
//! used in generated SQL, and joins them into the list shapes the templates
//! need:
//!
//! | Method | Shape | Used for |
//! |--------|-------|----------|
//! | [`ColumnList::joined`] | `a, b` | `INSERT` column list |
//! | [`ColumnList::named_params`] | `:a, :b` | `INSERT` values |
//! | [`ColumnList::positional_set`] | `a=?, b=?` | positional `UPDATE` |
//! | [`ColumnList::named_set`] | `a=:a, b=:b` | named `UPDATE` |
//!
//! Every shape is empty when the record has no columns.

use crate::{
    naming::to_snake_case,
    record::{FieldDef, FieldRole, RecordDef}
};

/// Name of the primary key column after case conversion.
pub const ID_COLUMN: &str = "id";

/// Primary key field name used when a record declares none.
pub const DEFAULT_ID_FIELD: &str = "ID";

/// Column names of `record`, in declaration order.
///
/// Fields with role [`FieldRole::Id`] or [`FieldRole::Skip`] are left out,
/// as is any field whose converted name is `id`.
///
/// # Example
///
/// ```
/// use crud_gen_core::{FieldDef, RecordDef, fields::columns};
///
/// let person = RecordDef::new(
///     "Person",
///     vec![FieldDef::column("ID"), FieldDef::column("FirstName"), FieldDef::column("LastName")]
/// );
/// assert_eq!(columns(&person), ["first_name", "last_name"]);
/// ```
#[must_use]
pub fn columns(record: &RecordDef) -> Vec<String> {
    record
        .fields()
        .iter()
        .filter(|f| f.role() == FieldRole::Column)
        .map(|f| to_snake_case(f.name()))
        .filter(|name| name != ID_COLUMN)
        .collect()
}

/// Primary key field of `record`.
///
/// The first field with role [`FieldRole::Id`], otherwise the first column
/// field whose converted name is `id`.
///
/// # Example
///
/// ```
/// use crud_gen_core::{FieldDef, RecordDef, fields::id_field};
///
/// let order = RecordDef::new("Order", vec![FieldDef::id("OrderID"), FieldDef::column("Total")]);
/// assert_eq!(id_field(&order).map(FieldDef::name), Some("OrderID"));
/// ```
#[must_use]
pub fn id_field(record: &RecordDef) -> Option<&FieldDef> {
    let fields = record.fields();
    fields
        .iter()
        .find(|f| f.role() == FieldRole::Id)
        .or_else(|| {
            fields
                .iter()
                .find(|f| f.role() == FieldRole::Column && to_snake_case(f.name()) == ID_COLUMN)
        })
}

/// Ordered column names with the joined forms used by templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnList {
    names: Vec<String>
}

impl ColumnList {
    /// Collect the columns of `record`.
    #[must_use]
    pub fn of(record: &RecordDef) -> Self {
        Self {
            names: columns(record)
        }
    }

    /// Column names in order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the record has no columns besides its id.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// `first_name, last_name`
    #[must_use]
    pub fn joined(&self) -> String {
        self.join_with(|name| name.to_string())
    }

    /// `:first_name, :last_name`
    #[must_use]
    pub fn named_params(&self) -> String {
        self.join_with(|name| format!(":{name}"))
    }

    /// `first_name=?, last_name=?`
    #[must_use]
    pub fn positional_set(&self) -> String {
        self.join_with(|name| format!("{name}=?"))
    }

    /// `first_name=:first_name, last_name=:last_name`
    #[must_use]
    pub fn named_set(&self) -> String {
        self.join_with(|name| format!("{name}=:{name}"))
    }

    fn join_with(&self, item: impl Fn(&str) -> String) -> String {
        self.names
            .iter()
            .map(|name| item(name))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
