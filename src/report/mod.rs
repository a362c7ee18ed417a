pub mod console;
pub mod error;
pub mod export;
pub mod format;

pub use console::{print_report, render_entry, write_report};
pub use error::ExportError;
pub use export::{csv_file_name, export_csv, write_csv};
pub use format::{format_cpc, format_intent, format_score, format_volume, humanize_timestamp};
