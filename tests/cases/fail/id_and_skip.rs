// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use crud_gen::Record;

/// A primary key cannot also be skipped.
#[derive(Record)]
pub struct Person {
    #[record(id, skip)]
    pub id: u64,
}

fn main() {}
