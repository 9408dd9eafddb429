// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use crud_gen::{FieldRole, Record};

#[derive(Record)]
#[record(name = "Person")]
pub struct PersonModel {
    #[record(id)]
    pub key: u64,
    #[record(rename = "Surname")]
    pub last_name: String,
    #[record(skip)]
    pub cached_age: Option<u8>,
    pub r#type: String,
}

fn main() {
    let def = PersonModel::record_def();
    assert_eq!(def.name(), "Person");

    let fields: Vec<(&str, FieldRole)> = def.fields().iter().map(|f| (f.name(), f.role())).collect();
    assert_eq!(
        fields,
        [
            ("key", FieldRole::Id),
            ("Surname", FieldRole::Column),
            ("cached_age", FieldRole::Skip),
            ("type", FieldRole::Column),
        ]
    );
}
