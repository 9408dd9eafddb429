// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! End-to-end generation through the facade crate.

use crud_gen::{
    FieldDef, Generator, GeneratorConfig, Record, RecordDef, config::DEFAULT_HEADER,
    fields::columns
};

#[derive(Record)]
pub struct Person {
    pub id: u64,
    pub first_name: String,
    pub last_name: String
}

#[derive(Record)]
pub struct Order {
    #[record(id)]
    pub order_id: u64,
    pub person_id: u64,
    pub total: i64
}

fn generator(dir: &std::path::Path) -> Generator {
    Generator::new(GeneratorConfig::default().with_out_dir(dir)).expect("default config")
}

#[test]
fn derived_and_manual_descriptors_agree() {
    let manual = RecordDef::new(
        "Person",
        vec![
            FieldDef::column("ID"),
            FieldDef::column("FirstName"),
            FieldDef::column("LastName")
        ]
    );
    assert_eq!(columns(&manual), ["first_name", "last_name"]);
    assert_eq!(columns(&Person::record_def()), columns(&manual));
}

#[test]
fn writes_operations_and_contract() {
    let dir = tempfile::tempdir().expect("tempdir");
    let written = generator(dir.path())
        .write("user", &crud_gen::records![Person, Order])
        .expect("write");

    let operations = std::fs::read_to_string(&written.operations).expect("operations file");
    let contract = std::fs::read_to_string(&written.contract).expect("contract file");

    assert!(operations.starts_with(DEFAULT_HEADER));
    assert!(operations.contains("INSERT INTO person (first_name, last_name) VALUES (:first_name, :last_name)"));
    assert!(operations.contains("INSERT INTO order (person_id, total) VALUES (:person_id, :total)"));
    assert!(operations.contains(
        "UPDATE order SET person_id=:person_id, total=:total WHERE order_id=:order_id"
    ));
    assert!(operations.contains("DELETE FROM order WHERE order_id=?"));
    assert!(operations.contains("order.order_id = uint(id)"));
    assert!(operations.contains("UPDATE person SET first_name=:first_name, last_name=:last_name WHERE id=:id"));
    assert!(operations.find("// Person functions") < operations.find("// Order functions"));

    assert!(contract.starts_with(DEFAULT_HEADER));
    assert!(contract.contains("\tCreateOrder(order *models.Order) (err error)\n"));
    assert!(contract.find("// Person functions") < contract.find("// Order functions"));
}

#[test]
fn zero_records_still_write_two_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let written = generator(dir.path()).write("empty", &[]).expect("write");

    assert_eq!(std::fs::read_to_string(written.operations).expect("read"), DEFAULT_HEADER);
    assert_eq!(std::fs::read_to_string(written.contract).expect("read"), DEFAULT_HEADER);
}

#[test]
fn config_file_drives_generation() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join("crud-gen.toml");
    std::fs::write(
        &config_path,
        format!(
            "out_dir = {:?}\ncontract_suffix = \"_iface\"\nmodels_package = \"model\"\nheader = \"\"\n",
            dir.path().display().to_string()
        )
    )
    .expect("write config");

    let config = GeneratorConfig::from_path(&config_path).expect("config");
    let written = Generator::new(config)
        .expect("generator")
        .write("user", &crud_gen::records![Person])
        .expect("write");

    assert_eq!(written.contract, dir.path().join("user_iface"));
    let contract = std::fs::read_to_string(written.contract).expect("read");
    assert!(contract.starts_with("\t// Person functions\n\tCreatePerson(person *model.Person)"));
}
