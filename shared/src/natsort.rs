//! Numeric-aware string comparison for page filenames.
//!
//! Scanned pages are named `1.jpg`, `2.jpg`, ... `10.jpg`, so plain
//! lexicographic ordering puts `10.jpg` before `2.jpg`. This comparator
//! treats maximal ASCII digit runs as numbers: runs compare by magnitude,
//! everything else compares character by character.

use std::cmp::Ordering;

/// Compare two strings, treating embedded digit runs by numeric value.
///
/// Magnitude ties between runs (e.g. `"01"` vs `"1"`) go to the run with
/// fewer leading zeros; a final byte-order comparison breaks any remaining
/// tie so the order is total and deterministic.
pub fn compare(a: &str, b: &str) -> Ordering {
    let mut ca = a.chars().peekable();
    let mut cb = b.chars().peekable();

    loop {
        match (ca.peek().copied(), cb.peek().copied()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                if x.is_ascii_digit() && y.is_ascii_digit() {
                    let ra = take_digit_run(&mut ca);
                    let rb = take_digit_run(&mut cb);
                    match compare_runs(&ra, &rb) {
                        Ordering::Equal => continue,
                        other => return other,
                    }
                }
                match x.cmp(&y) {
                    Ordering::Equal => {
                        ca.next();
                        cb.next();
                    }
                    other => return other,
                }
            }
        }
    }
}

fn take_digit_run(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

/// Compare two digit runs by magnitude: strip leading zeros, then longer
/// run wins, then digit order; a magnitude tie goes to fewer leading zeros.
fn compare_runs(a: &str, b: &str) -> Ordering {
    let sa = a.trim_start_matches('0');
    let sb = b.trim_start_matches('0');
    sa.len()
        .cmp(&sb.len())
        .then_with(|| sa.cmp(sb))
        .then_with(|| a.len().cmp(&b.len()))
}
