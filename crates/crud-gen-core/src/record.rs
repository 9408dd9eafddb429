// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Record descriptors.
//!
//! A [`RecordDef`] is the explicit, ordered description of a model type that
//! the generator works from: the type name plus its fields, each tagged with a
//! [`FieldRole`]. Model types expose their descriptor through the [`Record`]
//! trait, normally via `#[derive(Record)]`.
//!
//! # Example
//!
//! ```
//! use crud_gen_core::{FieldDef, RecordDef};
//!
//! let person = RecordDef::new(
//!     "Person",
//!     vec![
//!         FieldDef::id("ID"),
//!         FieldDef::column("FirstName"),
//!         FieldDef::column("LastName"),
//!     ]
//! );
//! assert_eq!(person.fields().len(), 3);
//! ```

use crate::error::{Error, Result};

/// How a field takes part in generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldRole {
    /// Primary key. Never listed in column lists.
    Id,

    /// Regular persisted column.
    #[default]
    Column,

    /// Not persisted. Ignored by the generator.
    Skip
}

/// A single declared field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    name: String,
    role: FieldRole
}

impl FieldDef {
    /// Create a field with an explicit role.
    pub fn new(name: impl Into<String>, role: FieldRole) -> Self {
        Self {
            name: name.into(),
            role
        }
    }

    /// Create a regular column field.
    pub fn column(name: impl Into<String>) -> Self {
        Self::new(name, FieldRole::Column)
    }

    /// Create a primary key field.
    pub fn id(name: impl Into<String>) -> Self {
        Self::new(name, FieldRole::Id)
    }

    /// Create a field that is not persisted.
    pub fn skip(name: impl Into<String>) -> Self {
        Self::new(name, FieldRole::Skip)
    }

    /// Declared field name, before case conversion.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Role of the field.
    #[must_use]
    pub fn role(&self) -> FieldRole {
        self.role
    }
}

/// Ordered description of a record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDef {
    name:   String,
    fields: Vec<FieldDef>
}

impl RecordDef {
    /// Create a descriptor from a type name and its fields in declaration
    /// order.
    pub fn new(name: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self {
            name: name.into(),
            fields
        }
    }

    /// Type name as declared (e.g., `OrderItem`).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Check that the type and field names can be substituted into source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRecord`] if the type name or any field name is
    /// not a plain identifier.
    pub fn validate(&self) -> Result<()> {
        if let Some(reason) = identifier_problem(&self.name) {
            return Err(Error::invalid_record(&self.name, format!("type name {reason}")));
        }
        for field in &self.fields {
            if let Some(reason) = identifier_problem(&field.name) {
                return Err(Error::invalid_record(
                    &self.name,
                    format!("field `{}` {reason}", field.name)
                ));
            }
        }
        Ok(())
    }
}

/// Describe why `ident` is not a plain identifier, if it is not.
pub(crate) fn identifier_problem(ident: &str) -> Option<&'static str> {
    let mut chars = ident.chars();
    match chars.next() {
        None => Some("is empty"),
        Some(first) if !(first.is_alphabetic() || first == '_') => {
            Some("must start with a letter or underscore")
        }
        _ if !chars.all(|c| c.is_alphanumeric() || c == '_') => {
            Some("may only contain letters, digits and underscores")
        }
        _ => None
    }
}

/// Types that can describe themselves to the generator.
///
/// Implemented by `#[derive(Record)]`; hand-written implementations are fine
/// for types the derive cannot see.
pub trait Record {
    /// Descriptor of this type.
    fn record_def() -> RecordDef;
}

/// Collect the descriptors of several [`Record`] types, in order.
///
/// ```ignore
/// let records = crud_gen::records![Person, Order];
/// ```
#[macro_export]
macro_rules! records {
    ($($ty:ty),* $(,)?) => {
        ::std::vec![$(<$ty as $crate::Record>::record_def()),*]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Person;

    impl Record for Person {
        fn record_def() -> RecordDef {
            RecordDef::new(
                "Person",
                vec![FieldDef::id("ID"), FieldDef::column("FirstName")]
            )
        }
    }

    struct Order;

    impl Record for Order {
        fn record_def() -> RecordDef {
            RecordDef::new("Order", vec![FieldDef::column("Total")])
        }
    }

    #[test]
    fn records_macro_keeps_order() {
        let records = records![Person, Order];
        let names: Vec<&str> = records.iter().map(RecordDef::name).collect();
        assert_eq!(names, ["Person", "Order"]);
    }

    #[test]
    fn records_macro_accepts_empty_list() {
        let records: Vec<RecordDef> = records![];
        assert!(records.is_empty());
    }

    #[test]
    fn default_role_is_column() {
        assert_eq!(FieldRole::default(), FieldRole::Column);
        assert_eq!(FieldDef::column("x").role(), FieldRole::Column);
        assert_eq!(FieldDef::skip("x").role(), FieldRole::Skip);
    }

    #[test]
    fn validate_accepts_identifiers() {
        assert!(Person::record_def().validate().is_ok());
        assert!(RecordDef::new("_Hidden", vec![FieldDef::column("v2")]).validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_type_name() {
        let err = RecordDef::new("", vec![]).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidRecord { .. }));
        assert!(err.to_string().contains("type name is empty"));
    }

    #[test]
    fn validate_rejects_bad_field_name() {
        let record = RecordDef::new("Person", vec![FieldDef::column("first name")]);
        let err = record.validate().unwrap_err();
        assert!(err.to_string().contains("field `first name`"));

        let record = RecordDef::new("Person", vec![FieldDef::column("1st")]);
        assert!(record.validate().is_err());
    }
}
