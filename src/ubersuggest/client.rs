use serde_json::{Value, json};

use super::error::{Result, UbersuggestError};
use super::types::{KeywordQuery, MatchKeywordsRequest, ResultSet};
use crate::config::Credentials;

pub const MATCH_KEYWORDS_URL: &str = "https://app.neilpatel.com/api/match_keywords";

const ORIGIN: &str = "https://app.neilpatel.com";
const REFERER: &str = "https://app.neilpatel.com/pt/ubersuggest/keyword_ideas/";
const ACCEPT: &str = "application/json, text/plain, */*";

const ERROR_BODY_LIMIT: usize = 200;

pub const PARSE_ERROR_MARKER: &str = "failed to parse JSON";

/// Decodes a response body, falling back to `{"error": ..., "raw": <body>}`
/// when it is not JSON.
pub fn parse_body(body: &str) -> Value {
    match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("response body is not valid JSON: {e}");
            json!({ "error": PARSE_ERROR_MARKER, "raw": body })
        }
    }
}

pub struct UbersuggestClient {
    http: reqwest::Client,
    credentials: Credentials,
    endpoint: String,
}

impl UbersuggestClient {
    /// Fails without touching the network when any credential is blank.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_endpoint(credentials, MATCH_KEYWORDS_URL)
    }

    /// Same as [`UbersuggestClient::new`] but posting to `endpoint`.
    pub fn with_endpoint(credentials: Credentials, endpoint: &str) -> Result<Self> {
        credentials.validate()?;
        let http = reqwest::Client::builder()
            .user_agent(credentials.user_agent.as_str())
            .build()?;
        Ok(Self {
            http,
            credentials,
            endpoint: endpoint.to_string(),
        })
    }

    /// The `match_keywords` POST with session headers and JSON body.
    pub fn request(&self, query: &KeywordQuery) -> reqwest::RequestBuilder {
        self.http
            .post(&self.endpoint)
            .bearer_auth(&self.credentials.auth_token)
            .header("User-Agent", &self.credentials.user_agent)
            .header("x-ubs-data", &self.credentials.ubs_data)
            .header("Cookie", &self.credentials.cookies)
            .header("Accept", ACCEPT)
            .header("Origin", ORIGIN)
            .header("Referer", REFERER)
            .json(&MatchKeywordsRequest::from(query))
    }

    /// One POST to `/api/match_keywords`. Returns the decoded body, or the
    /// parse fallback when the body is not JSON.
    pub async fn match_keywords(&self, query: &KeywordQuery) -> Result<Value> {
        tracing::debug!(
            keyword = %query.keyword,
            language = %query.language,
            loc_id = %query.loc_id,
            limit = query.limit,
            sort_by = %query.sort_by,
            "requesting keyword ideas"
        );

        let response = self.request(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UbersuggestError::ApiError {
                status: status.as_u16(),
                body: truncate_body(body),
            });
        }

        let text = response.text().await?;
        tracing::debug!(bytes = text.len(), "received response");
        Ok(parse_body(&text))
    }

    pub async fn fetch(&self, query: &KeywordQuery) -> Result<ResultSet> {
        let value = self.match_keywords(query).await?;
        Ok(ResultSet::from_value(&value))
    }
}

// Cloudflare challenge pages are long HTML documents
fn truncate_body(body: String) -> String {
    if body.chars().count() > ERROR_BODY_LIMIT {
        format!("{}...", body.chars().take(ERROR_BODY_LIMIT).collect::<String>())
    } else {
        body
    }
}
