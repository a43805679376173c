//! Figures scraped out of free-text recipe summaries.
//!
//! The remote API describes calories and total time only in prose, e.g.
//! `"... a total of <b>463 calories</b>. ... takes roughly <b>45 minutes</b>."`.
//! Every parser here returns `None` when the pattern is absent; callers pick
//! the default.

use html_escape::decode_html_entities;
use regex::Regex;
use scraper::Html;
use std::sync::OnceLock;

fn calories_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(\d[\d,]*)\s*(?:calories|kcal)\b").unwrap())
}

fn time_anchor_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\b(?:ready in|takes)\b").unwrap())
}

fn duration_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(\d+)\s*(hours?|hrs?|minutes?|mins?)\b").unwrap())
}

/// Remove markup and decode entities, collapsing runs of whitespace
pub fn strip_html(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let text: String = fragment.root_element().text().collect();
    let decoded = decode_html_entities(&text);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First `<n> calories` figure in the summary
pub fn parse_calories(summary: &str) -> Option<u32> {
    let text = strip_html(summary);
    let caps = calories_re().captures(&text)?;
    caps[1].replace(',', "").parse().ok()
}

/// Total minutes from the first `ready in ...` / `takes ...` sentence that
/// names a duration. Figures too large for `u32` count as absent.
pub fn parse_ready_minutes(summary: &str) -> Option<u32> {
    let text = strip_html(summary);
    time_anchor_re().find_iter(&text).find_map(|anchor| {
        let rest = &text[anchor.end()..];
        let sentence = rest.split('.').next().unwrap_or(rest);
        sentence_minutes(sentence)
    })
}

/// `None` when the sentence has no duration or the sum overflows
fn sentence_minutes(sentence: &str) -> Option<u32> {
    let mut total: Option<u32> = None;
    for caps in duration_re().captures_iter(sentence) {
        let value: u32 = caps[1].parse().ok()?;
        let minutes = if caps[2].to_lowercase().starts_with('h') {
            value.checked_mul(60)?
        } else {
            value
        };
        total = Some(total.unwrap_or(0).checked_add(minutes)?);
    }
    total
}
