// src/feed/mod.rs

use chrono::NaiveDate;
use roxmltree::Document;
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;

use crate::error::FeedError;

/// One validated fuel-surcharge rate from the feed. Constructed only by
/// [`parse_rates`]; both fields are guaranteed to have parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateEntry {
    /// Date from which the rate applies until superseded by a later entry.
    pub effective_date: NaiveDate,
    /// Surcharge percentage, exact decimal. Not range-checked.
    pub rate_percent: Decimal,
}

/// Outcome of parsing one feed document: the valid entries in document
/// order, plus one human-readable diagnostic per skipped `rate` element.
#[derive(Debug, Default)]
pub struct ParsedFeed {
    pub entries: Vec<RateEntry>,
    pub diagnostics: Vec<String>,
}

/// Date shapes the feed is allowed to use. Both are year-first, so there is
/// no day/month ambiguity to guess at.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Parse a rate feed document.
///
/// The document must be well-formed XML; anything else fails the whole run
/// with [`FeedError::MalformedFeed`]. Within a well-formed document the
/// policy is lenient: every element tagged `rate`, at any depth, is a
/// candidate, and a candidate missing a field or carrying an unparseable
/// date or rate is dropped with a diagnostic while the rest of the feed
/// keeps processing. Entries come back in document order, never corrected
/// or defaulted.
///
/// This function does not log; the caller decides how to surface the
/// diagnostics.
pub fn parse_rates(raw: &str) -> Result<ParsedFeed, FeedError> {
    let doc = Document::parse(raw)?;
    let mut parsed = ParsedFeed::default();

    for (idx, node) in doc
        .descendants()
        .filter(|n| n.has_tag_name("rate"))
        .enumerate()
    {
        // 1-based position in document order, for locating bad entries.
        let pos = idx + 1;

        let date_text = child_text(&node, "effectiveDate");
        let rate_text = child_text(&node, "ratePercent");
        let (date_text, rate_text) = match (date_text, rate_text) {
            (Some(d), Some(r)) => (d, r),
            _ => {
                parsed
                    .diagnostics
                    .push(format!("rate entry #{pos}: missing required field"));
                continue;
            }
        };

        let effective_date = match parse_feed_date(date_text) {
            Some(d) => d,
            None => {
                parsed.diagnostics.push(format!(
                    "rate entry #{pos}: unrecognized date format: '{date_text}'"
                ));
                continue;
            }
        };

        let rate_percent = match parse_feed_rate(rate_text) {
            Some(r) => r,
            None => {
                parsed.diagnostics.push(format!(
                    "rate entry #{pos}: unrecognized rate format: '{rate_text}'"
                ));
                continue;
            }
        };

        parsed.entries.push(RateEntry {
            effective_date,
            rate_percent,
        });
    }

    Ok(parsed)
}

/// Trimmed text of the first child element named `name`, or `None` when the
/// child is absent or blank.
fn child_text<'a>(node: &roxmltree::Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.children()
        .find(|c| c.has_tag_name(name))
        .and_then(|c| c.text())
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Strict year-first date parse; locale plays no part.
fn parse_feed_date(s: &str) -> Option<NaiveDate> {
    // fixed-width check first, so short years like "1/2/24" cannot sneak
    // through chrono's flexible %Y
    if s.len() != 10 {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Parse a rate like `"5.5"` or `"5.5%"` into an exact decimal. Decimal
/// point is `.` only; comma-decimal locales are rejected, not guessed.
fn parse_feed_rate(s: &str) -> Option<Decimal> {
    let bare = s.strip_suffix('%').map(str::trim).unwrap_or(s);
    Decimal::from_str(bare).ok()
}
