use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_LANGUAGE: &str = "pt";
pub const DEFAULT_LOC_ID: &str = "2076";
pub const DEFAULT_LIMIT: u32 = 300;
pub const DEFAULT_SORT_BY: &str = "-searchVolume";

/// Parameters of one `match_keywords` lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordQuery {
    pub keyword: String,
    pub language: String,
    pub loc_id: String,
    pub limit: u32,
    pub sort_by: String,
}

impl KeywordQuery {
    pub fn new(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            loc_id: DEFAULT_LOC_ID.to_string(),
            limit: DEFAULT_LIMIT,
            sort_by: DEFAULT_SORT_BY.to_string(),
        }
    }

    #[must_use]
    pub fn language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }

    #[must_use]
    pub fn loc_id(mut self, loc_id: &str) -> Self {
        self.loc_id = loc_id.to_string();
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn sort_by(mut self, sort_by: &str) -> Self {
        self.sort_by = sort_by.to_string();
        self
    }
}

/// JSON body of `POST /api/match_keywords`.
#[derive(Debug, Serialize)]
pub struct MatchKeywordsRequest {
    pub keywords: Vec<String>,
    #[serde(rename = "locId")]
    pub loc_id: String,
    pub language: String,
    pub sortby: String,
    pub limit: u32,
    #[serde(rename = "previousKey")]
    pub previous_key: u32,
    pub filters: Map<String, Value>,
    pub domain: String,
}

impl From<&KeywordQuery> for MatchKeywordsRequest {
    fn from(query: &KeywordQuery) -> Self {
        Self {
            keywords: vec![query.keyword.clone()],
            loc_id: query.loc_id.clone(),
            language: query.language.clone(),
            sortby: query.sort_by.clone(),
            limit: query.limit,
            previous_key: 0,
            filters: Map::new(),
            domain: String::new(),
        }
    }
}

/// One keyword as returned by the API. Every field is kept as raw JSON
/// because the API does not guarantee presence or type of any of them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeywordRecord {
    #[serde(default)]
    pub keyword: Option<Value>,
    #[serde(default)]
    pub volume: Option<Value>,
    #[serde(default)]
    pub cpc: Option<Value>,
    #[serde(default)]
    pub pd: Option<Value>,
    #[serde(default)]
    pub sd: Option<Value>,
    #[serde(default, rename = "searchIntent")]
    pub search_intent: Option<Value>,
    #[serde(default)]
    pub updated_at: Option<Value>,
}

impl KeywordRecord {
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            tracing::warn!("skipping keyword entry that is not an object: {value}");
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }

    pub fn keyword_text(&self) -> String {
        match &self.keyword {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }
}

/// Base keywords echoed by the API plus the suggested ideas, in API order.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    pub searched_keywords: Vec<KeywordRecord>,
    pub suggestions: Vec<KeywordRecord>,
    error: Option<String>,
    raw: Option<String>,
}

impl ResultSet {
    /// Never fails: anything that does not look like the expected response
    /// ends up as empty collections.
    pub fn from_value(value: &Value) -> Self {
        let records = |key: &str| -> Vec<KeywordRecord> {
            value
                .get(key)
                .and_then(Value::as_array)
                .map(|items| items.iter().filter_map(KeywordRecord::from_value).collect())
                .unwrap_or_default()
        };

        Self {
            searched_keywords: records("searched_keywords"),
            suggestions: records("suggestions"),
            error: value.get("error").filter(|e| !e.is_null()).map(|e| match e {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            }),
            raw: value.get("raw").and_then(Value::as_str).map(str::to_string),
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.searched_keywords.is_empty() && self.suggestions.is_empty()
    }
}
