// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Identifier case conversion.
//!
//! Bridges model identifiers (`FirstName`, `OrderItem`) and the identifiers
//! used in generated code (`first_name`, `order_item`).
//!
//! # Word Boundaries
//!
//! | Boundary | Example | Result |
//! |----------|---------|--------|
//! | any char, then `Upper` + `lower+` | `HTTPServer` | `http_server` |
//! | `lower`/digit, then `Upper` | `userID` | `user_id` |
//!
//! The first rule runs over the whole identifier before the second, so
//! acronym runs stay together instead of being split letter by letter.

/// Convert a mixed-case identifier to `snake_case`.
///
/// Pure and infallible. Already-snake identifiers are returned unchanged.
///
/// # Example
///
/// ```
/// use crud_gen_core::naming::to_snake_case;
///
/// assert_eq!(to_snake_case("FirstName"), "first_name");
/// assert_eq!(to_snake_case("HTTPServer"), "http_server");
/// assert_eq!(to_snake_case("ID"), "id");
/// ```
#[must_use]
pub fn to_snake_case(ident: &str) -> String {
    let chars: Vec<char> = ident.chars().collect();
    let words = split_before_capitalized(&chars);
    split_after_lower(&words).to_lowercase()
}

/// Lowercase only the first character (`OrderItem` -> `orderItem`).
///
/// Used for the instance name of a record in generated code.
#[must_use]
pub fn lower_first(ident: &str) -> String {
    let mut chars = ident.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new()
    }
}

/// Insert `_` between any character and a following `Upper lower+` run.
fn split_before_capitalized(chars: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(chars.len() + 4);
    let mut i = 0;

    while i < chars.len() {
        let starts_word = i + 2 < chars.len()
            && chars[i] != '\n'
            && chars[i + 1].is_ascii_uppercase()
            && chars[i + 2].is_ascii_lowercase();

        if !starts_word {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        out.push(chars[i]);
        out.push('_');
        out.push(chars[i + 1]);
        i += 2;
        while i < chars.len() && chars[i].is_ascii_lowercase() {
            out.push(chars[i]);
            i += 1;
        }
    }

    out
}

/// Insert `_` between a lowercase letter or digit and a following uppercase.
fn split_after_lower(chars: &[char]) -> String {
    let mut out = String::with_capacity(chars.len() + 4);
    let mut i = 0;

    while i < chars.len() {
        let current = chars[i];
        let boundary = i + 1 < chars.len()
            && (current.is_ascii_lowercase() || current.is_ascii_digit())
            && chars[i + 1].is_ascii_uppercase();

        out.push(current);
        if boundary {
            out.push('_');
            out.push(chars[i + 1]);
            i += 2;
        } else {
            i += 1;
        }
    }

    out
}
