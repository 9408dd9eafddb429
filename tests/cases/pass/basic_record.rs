// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use crud_gen::{FieldRole, Record};

#[derive(Record)]
pub struct Person {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
}

fn main() {
    let def = Person::record_def();
    assert_eq!(def.name(), "Person");
    assert_eq!(def.fields().len(), 3);
    assert!(def.fields().iter().all(|f| f.role() == FieldRole::Column));
}
