// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Source templates and slot substitution.
//!
//! Templates are plain text with `${slot}` markers. A [`Template`] is parsed
//! once, so an unknown slot is reported before anything is rendered, and is
//! then rendered against the [`Bindings`] of each record.
//!
//! # Slots
//!
//! | Slot | Value for `Person { ID, FirstName, LastName }` |
//! |------|------------------------------------------------|
//! | `${type}` | `Person` |
//! | `${instance}` | `person` |
//! | `${table}` | `person` |
//! | `${columns}` | `first_name, last_name` |
//! | `${named_params}` | `:first_name, :last_name` |
//! | `${positional_set}` | `first_name=?, last_name=?` |
//! | `${receiver}` | target name, e.g. `user` |
//! | `${named_set}` | `first_name=:first_name, last_name=:last_name` |
//! | `${models}` | `models` |
//! | `${db}` | `Db` |
//! | `${id_column}` | `id` |
//! | `${id_field}` | `ID` |
//!
//! `${id_column}` and `${id_field}` come from the primary key field (see
//! [`id_field`]); records without one use `id` and `ID`.
//!
//! The built-in templates do not use `${positional_set}`; it is available to
//! custom templates targeting drivers without named parameters.

use std::{borrow::Cow, ops::Range};

use crate::{
    config::GeneratorConfig,
    error::{Error, Result},
    fields::{ColumnList, DEFAULT_ID_FIELD, ID_COLUMN, id_field},
    naming::{lower_first, to_snake_case},
    record::RecordDef
};

/// Operations for one record: six functions on the `<receiver>DaoImpl`
/// receiver.
pub const OPERATIONS: &str = r#"// ${type} functions

func (${receiver}DaoImpl) Create${type}(${instance} *${models}.${type}) (err error) {
	res, err := ${db}.NamedExec("INSERT INTO ${table} (${columns}) VALUES (${named_params})", ${instance})
	if err != nil {
		return
	}
	id, err := res.LastInsertId()
	if err != nil {
		return
	}
	${instance}.${id_field} = uint(id)
	return
}

func (${receiver}DaoImpl) Update${type}(${instance} *${models}.${type}) (err error) {
	_, err = ${db}.NamedExec("UPDATE ${table} SET ${named_set} WHERE ${id_column}=:${id_column}", ${instance})
	return
}

func (${receiver}DaoImpl) Delete${type}ByID(id uint) (err error) {
	_, err = ${db}.Exec("DELETE FROM ${table} WHERE ${id_column}=?", id)
	return
}

func (${receiver}DaoImpl) Get${type}ByID(id uint) (${instance} *${models}.${type}, err error) {
	${instance} = &${models}.${type}{}
	err = ${db}.QueryRowx("SELECT * FROM ${table} WHERE ${id_column}=?", id).StructScan(${instance})
	return
}

func (${receiver}DaoImpl) ${type}List() (${instance}List []${models}.${type}, err error) {
	rows, err := ${db}.Queryx("SELECT * FROM ${table}")
	if err != nil {
		return
	}
	defer rows.Close()
	for rows.Next() {
		var ${instance} ${models}.${type}
		if err = rows.StructScan(&${instance}); err != nil {
			return
		}
		${instance}List = append(${instance}List, ${instance})
	}
	err = rows.Err()
	return
}

func (${receiver}DaoImpl) DeleteAll${type}s() (err error) {
	_, err = ${db}.Exec("DELETE FROM ${table}")
	return
}

"#;

/// Contract for one record: the six operation signatures, indented for an
/// interface body.
pub const CONTRACT: &str = "\t// ${type} functions
\tCreate${type}(${instance} *${models}.${type}) (err error)
\tUpdate${type}(${instance} *${models}.${type}) (err error)
\tDelete${type}ByID(id uint) (err error)
\tGet${type}ByID(id uint) (${instance} *${models}.${type}, err error)
\t${type}List() (${instance}List []${models}.${type}, err error)
\tDeleteAll${type}s() (err error)

";

/// A named substitution point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Record type name.
    Type,
    /// Type name with its first letter lowercased.
    Instance,
    /// `snake_case` type name.
    Table,
    /// `a, b`
    Columns,
    /// `:a, :b`
    NamedParams,
    /// `a=?, b=?`
    PositionalSet,
    /// Target name, prefix of the receiver type.
    Receiver,
    /// `a=:a, b=:b`
    NamedSet,
    /// Models package qualifier.
    Models,
    /// Database handle.
    Db,
    /// `snake_case` primary key column.
    IdColumn,
    /// Primary key field as declared.
    IdField
}

impl Slot {
    /// Every slot, in documentation order.
    pub const ALL: [Self; 12] = [
        Self::Type,
        Self::Instance,
        Self::Table,
        Self::Columns,
        Self::NamedParams,
        Self::PositionalSet,
        Self::Receiver,
        Self::NamedSet,
        Self::Models,
        Self::Db,
        Self::IdColumn,
        Self::IdField
    ];

    /// Name used inside `${...}`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Instance => "instance",
            Self::Table => "table",
            Self::Columns => "columns",
            Self::NamedParams => "named_params",
            Self::PositionalSet => "positional_set",
            Self::Receiver => "receiver",
            Self::NamedSet => "named_set",
            Self::Models => "models",
            Self::Db => "db",
            Self::IdColumn => "id_column",
            Self::IdField => "id_field"
        }
    }

    /// Whether the slot expands to a list of columns.
    #[must_use]
    pub const fn is_column_list(self) -> bool {
        matches!(
            self,
            Self::Columns | Self::NamedParams | Self::PositionalSet | Self::NamedSet
        )
    }

    /// Look up a slot by marker name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.name() == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(Range<usize>),
    Slot(Slot)
}

/// Parsed template text.
#[derive(Debug, Clone)]
pub struct Template {
    source:   Cow<'static, str>,
    segments: Vec<Segment>
}

impl Template {
    /// Parse template text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Template`] for an unterminated `${` or an unknown
    /// slot name.
    pub fn parse(source: impl Into<Cow<'static, str>>) -> Result<Self> {
        let source = source.into();
        let mut segments = Vec::new();
        let mut cursor = 0;

        while let Some(found) = source[cursor..].find("${") {
            let open = cursor + found;
            let name_start = open + 2;
            let close = source[name_start..]
                .find('}')
                .map(|i| name_start + i)
                .ok_or_else(|| Error::template(open, "unterminated slot marker"))?;
            let name = &source[name_start..close];
            let slot = Slot::from_name(name)
                .ok_or_else(|| Error::template(open, format!("unknown slot `{name}`")))?;

            if open > cursor {
                segments.push(Segment::Text(cursor..open));
            }
            segments.push(Segment::Slot(slot));
            cursor = close + 1;
        }
        if cursor < source.len() {
            segments.push(Segment::Text(cursor..source.len()));
        }

        Ok(Self {
            source,
            segments
        })
    }

    /// Built-in operations template.
    ///
    /// # Errors
    ///
    /// Never fails for the built-in text; the signature matches
    /// [`Template::parse`].
    pub fn operations() -> Result<Self> {
        Self::parse(OPERATIONS)
    }

    /// Built-in contract template.
    ///
    /// # Errors
    ///
    /// Never fails for the built-in text; the signature matches
    /// [`Template::parse`].
    pub fn contract() -> Result<Self> {
        Self::parse(CONTRACT)
    }

    /// Raw template text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Slots referenced by the template, in order of appearance.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Slot(slot) => Some(*slot),
            Segment::Text(_) => None
        })
    }

    /// Render into a new string.
    #[must_use]
    pub fn render(&self, bindings: &Bindings) -> String {
        let mut out = String::with_capacity(self.source.len() * 2);
        self.render_into(&mut out, bindings);
        out
    }

    /// Render, appending to `out`.
    pub fn render_into(&self, out: &mut String, bindings: &Bindings) {
        for segment in &self.segments {
            match segment {
                Segment::Text(range) => out.push_str(&self.source[range.clone()]),
                Segment::Slot(slot) => out.push_str(bindings.get(*slot))
            }
        }
    }
}

/// Slot values for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bindings {
    type_name:      String,
    instance:       String,
    table:          String,
    columns:        ColumnList,
    joined:         String,
    named_params:   String,
    positional_set: String,
    named_set:      String,
    receiver:       String,
    models:         String,
    db:             String,
    id_column:      String,
    id_field:       String
}

impl Bindings {
    /// Derive every slot value for `record`.
    #[must_use]
    pub fn for_record(record: &RecordDef, receiver: &str, config: &GeneratorConfig) -> Self {
        let columns = ColumnList::of(record);
        let (id_column, id_field) = match id_field(record) {
            Some(field) => (to_snake_case(field.name()), field.name().to_string()),
            None => (ID_COLUMN.to_string(), DEFAULT_ID_FIELD.to_string())
        };
        Self {
            type_name: record.name().to_string(),
            instance: lower_first(record.name()),
            table: to_snake_case(record.name()),
            joined: columns.joined(),
            named_params: columns.named_params(),
            positional_set: columns.positional_set(),
            named_set: columns.named_set(),
            columns,
            receiver: receiver.to_string(),
            models: config.models_package.clone(),
            db: config.db_handle.clone(),
            id_column,
            id_field
        }
    }

    /// Value substituted for `slot`.
    #[must_use]
    pub fn get(&self, slot: Slot) -> &str {
        match slot {
            Slot::Type => &self.type_name,
            Slot::Instance => &self.instance,
            Slot::Table => &self.table,
            Slot::Columns => &self.joined,
            Slot::NamedParams => &self.named_params,
            Slot::PositionalSet => &self.positional_set,
            Slot::Receiver => &self.receiver,
            Slot::NamedSet => &self.named_set,
            Slot::Models => &self.models,
            Slot::Db => &self.db,
            Slot::IdColumn => &self.id_column,
            Slot::IdField => &self.id_field
        }
    }

    /// Table identifier.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Columns the lists were built from.
    #[must_use]
    pub fn columns(&self) -> &ColumnList {
        &self.columns
    }
}
