// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use crud_gen::Record;

/// A record has at most one primary key.
#[derive(Record)]
pub struct Person {
    #[record(id)]
    pub id: u64,
    #[record(id)]
    pub other: u64,
}

fn main() {}
