pub mod client;
pub mod error;
pub mod types;

pub use client::{UbersuggestClient, parse_body};
pub use error::UbersuggestError;
pub use types::{KeywordQuery, KeywordRecord, MatchKeywordsRequest, ResultSet};
