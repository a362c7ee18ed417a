use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use super::error::Result;
use super::format::{
    format_cpc, format_intent, format_score, format_volume, humanize_timestamp_at,
};
use crate::ubersuggest::{KeywordRecord, ResultSet};

pub const CSV_HEADER: [&str; 8] = [
    "origin",
    "keyword",
    "intent",
    "volume",
    "cpc_brl",
    "pd",
    "sd",
    "updated_human",
];

const BASE_TAG: &str = "base";
const IDEA_TAG: &str = "idea";

/// `"tenis de corrida"` -> `"keywords_tenis_de_corrida.csv"`.
pub fn csv_file_name(seed: &str) -> String {
    format!("keywords_{}.csv", seed.replace(' ', "_"))
}

fn csv_row(origin: &'static str, record: &KeywordRecord, now: DateTime<Utc>) -> [String; 8] {
    [
        origin.to_string(),
        record.keyword_text(),
        format_intent(record.search_intent.as_ref()),
        format_volume(record.volume.as_ref()),
        format_cpc(record.cpc.as_ref()),
        format_score(record.pd.as_ref()).unwrap_or_default(),
        format_score(record.sd.as_ref()).unwrap_or_default(),
        humanize_timestamp_at(record.updated_at.as_ref(), now),
    ]
}

/// Header, then base keywords, then ideas, both in API order.
pub fn write_csv<W: Write>(results: &ResultSet, writer: W, now: DateTime<Utc>) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;

    let tagged = results
        .searched_keywords
        .iter()
        .map(|r| (BASE_TAG, r))
        .chain(results.suggestions.iter().map(|r| (IDEA_TAG, r)));
    for (origin, record) in tagged {
        wtr.write_record(csv_row(origin, record, now))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes `keywords_<seed>.csv` into `dir`, replacing any previous export
/// for the same seed.
pub fn export_csv(results: &ResultSet, seed: &str, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(csv_file_name(seed));
    let file = File::create(&path)?;
    write_csv(results, file, Utc::now())?;
    tracing::info!(
        path = %path.display(),
        rows = results.searched_keywords.len() + results.suggestions.len(),
        "wrote CSV"
    );
    Ok(path)
}
