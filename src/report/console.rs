use std::io::{self, Write};

use chrono::{DateTime, Utc};

use super::format::{
    format_cpc, format_intent, format_score, format_volume, humanize_timestamp_at,
};
use crate::ubersuggest::{KeywordRecord, ResultSet};

/// Keyword on the first line, then one indented line per metric that has
/// something to show, then a blank line.
pub fn render_entry(record: &KeywordRecord, now: DateTime<Utc>) -> String {
    let mut lines = vec![record.keyword_text()];

    let intent = format_intent(record.search_intent.as_ref());
    if !intent.is_empty() {
        lines.push(format!("  Intent: {intent}"));
    }
    let volume = format_volume(record.volume.as_ref());
    if !volume.is_empty() {
        lines.push(format!("  Volume: {volume}"));
    }
    let cpc = format_cpc(record.cpc.as_ref());
    if !cpc.is_empty() {
        lines.push(format!("  CPC: {cpc}"));
    }
    if let Some(pd) = format_score(record.pd.as_ref()) {
        lines.push(format!("  PD: {pd}"));
    }
    if let Some(sd) = format_score(record.sd.as_ref()) {
        lines.push(format!("  SEO Difficulty: {sd}"));
    }
    let updated = humanize_timestamp_at(record.updated_at.as_ref(), now);
    if !updated.is_empty() {
        lines.push(format!("  Updated: {updated}"));
    }

    let mut out = lines.join("\n");
    out.push_str("\n\n");
    out
}

/// Writes the base keywords section followed by the ideas section.
pub fn write_report<W: Write>(
    out: &mut W,
    results: &ResultSet,
    now: DateTime<Utc>,
) -> io::Result<()> {
    writeln!(out, "\n===== YOUR KEYWORDS =====\n")?;
    if results.searched_keywords.is_empty() {
        writeln!(out, "(No base keyword found)\n")?;
    } else {
        for record in &results.searched_keywords {
            write!(out, "{}", render_entry(record, now))?;
        }
    }

    writeln!(out, "===== KEYWORD IDEAS =====\n")?;
    for record in &results.suggestions {
        write!(out, "{}", render_entry(record, now))?;
    }
    Ok(())
}

pub fn print_report(results: &ResultSet) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, results, Utc::now())?;
    out.flush()
}
