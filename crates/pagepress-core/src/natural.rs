// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Pagepress contributors
//
// Natural ordering for file names. A name is split into alternating
// runs of ASCII digits and non-digits; digit runs compare by numeric
// value, so `2.jpg` sorts before `10.jpg` where plain lexicographic
// order would reverse them.

use std::cmp::Ordering;

/// One run of a file name, in left-to-right order.
///
/// The variant order matters: deriving `Ord` makes every `Number`
/// compare before every `Text`, which fixes how a digit run compares
/// against a non-digit run at the same position.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortToken {
    Number(u128),
    Text(String),
}

/// Splits a name into its comparison tokens.
///
/// Digit runs longer than `u128` can hold fall back to text tokens so
/// the key never fails to build.
pub fn natural_key(name: &str) -> Vec<SortToken> {
    let mut tokens = Vec::new();
    let mut run = String::new();
    let mut run_is_digits = false;

    for ch in name.chars() {
        let is_digit = ch.is_ascii_digit();
        if !run.is_empty() && is_digit != run_is_digits {
            tokens.push(finish_run(run, run_is_digits));
            run = String::new();
        }
        run.push(ch);
        run_is_digits = is_digit;
    }
    if !run.is_empty() {
        tokens.push(finish_run(run, run_is_digits));
    }

    tokens
}

/// Compares two names in natural order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_key(a).cmp(&natural_key(b))
}

fn finish_run(run: String, is_digits: bool) -> SortToken {
    if is_digits {
        match run.parse::<u128>() {
            Ok(value) => SortToken::Number(value),
            Err(_) => SortToken::Text(run),
        }
    } else {
        SortToken::Text(run)
    }
}
