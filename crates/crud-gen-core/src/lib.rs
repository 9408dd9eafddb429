// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core of `crud-gen`: record descriptors, name conversion, templates and
//! file generation.
//!
//! Most users depend on the `crud-gen` facade, which re-exports this crate
//! together with `#[derive(Record)]`.
//!
//! # Pipeline
//!
//! ```text
//! RecordDef ──► fields::columns ──► template::Bindings ──► Template::render
//!   (record)      (naming)                                       │
//!                                                                ▼
//!                                                 generator::Generator::write
//!                                                   <target>, <target>dao
//! ```
//!
//! # Example
//!
//! ```
//! use crud_gen_core::{FieldDef, Generator, GeneratorConfig, RecordDef};
//!
//! let person = RecordDef::new(
//!     "Person",
//!     vec![FieldDef::id("ID"), FieldDef::column("FirstName"), FieldDef::column("LastName")]
//! );
//! let output = Generator::new(GeneratorConfig::default())?.render("user", &[person])?;
//! assert!(output.operations.contains("INSERT INTO person (first_name, last_name)"));
//! assert!(output.contract.contains("CreatePerson(person *models.Person) (err error)"));
//! # Ok::<(), crud_gen_core::Error>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod fields;
pub mod generator;
pub mod naming;
pub mod record;
pub mod template;

pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use fields::ColumnList;
pub use generator::{Generator, Output, Written, generate_files};
pub use record::{FieldDef, FieldRole, Record, RecordDef};
pub use template::{Bindings, Slot, Template};
