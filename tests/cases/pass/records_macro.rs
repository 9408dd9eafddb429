// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use crud_gen::{Generator, GeneratorConfig, Record};

#[derive(Record)]
pub struct Person {
    pub id: u64,
    pub first_name: String,
}

#[derive(Record)]
pub struct Order {
    pub id: u64,
    pub total: i64,
}

fn main() {
    let records = crud_gen::records![Person, Order];
    let output = Generator::new(GeneratorConfig::default())
        .unwrap()
        .render("shop", &records)
        .unwrap();
    let person = output.operations.find("// Person functions").unwrap();
    let order = output.operations.find("// Order functions").unwrap();
    assert!(person < order);
}
