// src/select/mod.rs

use chrono::NaiveDate;

use crate::feed::RateEntry;

/// Pick the rate in effect as of `as_of`: the entry with the latest
/// effective date not after `as_of`. When several entries share that date,
/// the first one in input order wins. `None` means every entry is in the
/// future, which is a normal outcome rather than an error.
pub fn select_latest(entries: &[RateEntry], as_of: NaiveDate) -> Option<&RateEntry> {
    let mut best: Option<&RateEntry> = None;
    for entry in entries {
        if entry.effective_date > as_of {
            continue;
        }
        match best {
            // first-wins on ties, so only a strictly later date replaces
            Some(b) if entry.effective_date <= b.effective_date => {}
            _ => best = Some(entry),
        }
    }
    best
}
