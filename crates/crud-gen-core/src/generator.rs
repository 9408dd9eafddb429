// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Batch generation of the operations and contract files.
//!
//! # Output
//!
//! For target `user` and records `[Person, Order]`:
//!
//! | File | Content |
//! |------|---------|
//! | `<out_dir>/user` | header, `Person` operations, `Order` operations |
//! | `<out_dir>/userdao` | header, `Person` contract, `Order` contract |
//!
//! Existing files are overwritten. Output depends only on the inputs, so
//! running twice yields byte-identical files.

use std::{
    fs::{File, OpenOptions},
    io::Write as _,
    path::{Path, PathBuf}
};

use tracing::{debug, info};

use crate::{
    config::GeneratorConfig,
    error::{Error, Result},
    record::{RecordDef, identifier_problem},
    template::{Bindings, Slot, Template}
};

/// Rendered contents of both files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    /// Operations file content.
    pub operations: String,
    /// Contract file content.
    pub contract:   String
}

/// Paths of the files written by [`Generator::write`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    /// Operations file path.
    pub operations: PathBuf,
    /// Contract file path.
    pub contract:   PathBuf
}

/// Renders records through the operations and contract templates.
#[derive(Debug, Clone)]
pub struct Generator {
    config:     GeneratorConfig,
    operations: Template,
    contract:   Template
}

impl Generator {
    /// Build a generator, parsing any custom templates from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for invalid options and [`Error::Template`]
    /// for malformed custom templates.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let operations = match &config.operations_template {
            Some(source) => Template::parse(source.clone())?,
            None => Template::operations()?
        };
        let contract = match &config.contract_template {
            Some(source) => Template::parse(source.clone())?,
            None => Template::contract()?
        };

        Ok(Self {
            config,
            operations,
            contract
        })
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Paths the two files for `target` are written to.
    #[must_use]
    pub fn paths(&self, target: &str) -> Written {
        Written {
            operations: self.config.out_dir.join(target),
            contract:   self
                .config
                .out_dir
                .join(format!("{target}{}", self.config.contract_suffix))
        }
    }

    /// Render both files in memory, one block per record in input order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTarget`] if `target` is not an identifier and
    /// [`Error::InvalidRecord`] for the first malformed record. A record with
    /// no columns besides its id is malformed when the operations template
    /// expands a column list, since the `INSERT` and `UPDATE` statements
    /// would be empty.
    pub fn render(&self, target: &str, records: &[RecordDef]) -> Result<Output> {
        validate_target(target)?;

        let needs_columns = self.operations.slots().any(Slot::is_column_list);
        let mut operations = self.config.header.clone();
        let mut contract = self.config.header.clone();

        for record in records {
            record.validate()?;
            let bindings = Bindings::for_record(record, target, &self.config);
            if needs_columns && bindings.columns().is_empty() {
                return Err(Error::invalid_record(
                    record.name(),
                    "no columns besides its id; generated INSERT and UPDATE would be empty"
                ));
            }
            debug!(
                record = record.name(),
                table = bindings.table(),
                columns = bindings.columns().len(),
                "rendering record"
            );

            self.operations.render_into(&mut operations, &bindings);
            self.contract.render_into(&mut contract, &bindings);
        }

        Ok(Output {
            operations,
            contract
        })
    }

    /// Render and write both files. The operations file is written first.
    ///
    /// # Errors
    ///
    /// Everything [`Generator::render`] returns, plus [`Error::Write`] when a
    /// file cannot be written. Nothing is written if rendering fails.
    pub fn write(&self, target: &str, records: &[RecordDef]) -> Result<Written> {
        let output = self.render(target, records)?;
        let paths = self.paths(target);

        write_file(&paths.operations, &output.operations)?;
        write_file(&paths.contract, &output.contract)?;

        Ok(paths)
    }
}

/// Generate `./<target>` and `./<target>dao` with the default configuration.
///
/// # Errors
///
/// See [`Generator::write`].
pub fn generate_files(target: &str, records: &[RecordDef]) -> Result<Written> {
    Generator::new(GeneratorConfig::default())?.write(target, records)
}

fn validate_target(target: &str) -> Result<()> {
    match identifier_problem(target) {
        Some(reason) => Err(Error::InvalidTarget {
            target: target.to_string(),
            reason: reason.to_string()
        }),
        None => Ok(())
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    let to_error = |source| Error::Write {
        path: path.to_path_buf(),
        source
    };

    let mut file = open_for_write(path).map_err(to_error)?;
    file.write_all(content.as_bytes()).map_err(to_error)?;
    file.flush().map_err(to_error)?;

    info!(path = %path.display(), bytes = content.len(), "wrote generated file");
    Ok(())
}

#[cfg(unix)]
fn open_for_write(path: &Path) -> std::io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;

    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o644)
        .open(path)
}

#[cfg(not(unix))]
fn open_for_write(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}
