// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use crud_gen::Record;

#[derive(Record)]
pub struct Tagged<T>
where
    T: Clone,
{
    pub id: u64,
    pub value: T,
}

fn main() {
    let def = <Tagged<String> as Record>::record_def();
    assert_eq!(def.name(), "Tagged");
    assert_eq!(def.fields()[1].name(), "value");
}
