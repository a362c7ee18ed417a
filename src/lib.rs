pub mod cli;
pub mod config;
pub mod report;
pub mod ubersuggest;

pub use config::{ConfigError, Credentials, QueryDefaults};
pub use report::ExportError;
pub use ubersuggest::{KeywordQuery, KeywordRecord, ResultSet, UbersuggestClient, UbersuggestError};
