use thiserror::Error;

use crate::ubersuggest::KeywordQuery;
use crate::ubersuggest::types::{
    DEFAULT_LANGUAGE, DEFAULT_LIMIT, DEFAULT_LOC_ID, DEFAULT_SORT_BY,
};

pub const AUTH_TOKEN_VAR: &str = "UBS_AUTH_TOKEN";
pub const UBS_DATA_VAR: &str = "UBS_X_UBS_DATA";
pub const COOKIES_VAR: &str = "UBS_COOKIES_HDR";
pub const USER_AGENT_VAR: &str = "UBS_USER_AGENT";

const LANGUAGE_VAR: &str = "UBS_LANGUAGE";
const LOC_ID_VAR: &str = "UBS_LOC_ID";
const LIMIT_VAR: &str = "UBS_LIMIT";
const SORT_BY_VAR: &str = "UBS_SORTBY";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} is not set (check your environment or .env file)")]
    MissingValue(&'static str),

    #[error("{name} has an invalid value: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Session values copied from a logged-in browser session.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub auth_token: String,
    pub ubs_data: String,
    pub cookies: String,
    pub user_agent: String,
}

impl Credentials {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads every value through `lookup`, trimming whitespace. Missing
    /// values become empty strings and are rejected by [`Credentials::validate`].
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .unwrap_or_default()
        };
        Self {
            auth_token: read(AUTH_TOKEN_VAR),
            ubs_data: read(UBS_DATA_VAR),
            cookies: read(COOKIES_VAR),
            user_agent: read(USER_AGENT_VAR),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let required = [
            (AUTH_TOKEN_VAR, &self.auth_token),
            (UBS_DATA_VAR, &self.ubs_data),
            (COOKIES_VAR, &self.cookies),
            (USER_AGENT_VAR, &self.user_agent),
        ];
        match required.into_iter().find(|(_, value)| value.trim().is_empty()) {
            Some((name, _)) => Err(ConfigError::MissingValue(name)),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDefaults {
    pub language: String,
    pub loc_id: String,
    pub limit: u32,
    pub sort_by: String,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            loc_id: DEFAULT_LOC_ID.to_string(),
            limit: DEFAULT_LIMIT,
            sort_by: DEFAULT_SORT_BY.to_string(),
        }
    }
}

impl QueryDefaults {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut defaults = Self::default();
        if let Some(language) = read(LANGUAGE_VAR) {
            defaults.language = language;
        }
        if let Some(loc_id) = read(LOC_ID_VAR) {
            defaults.loc_id = loc_id;
        }
        if let Some(raw) = read(LIMIT_VAR) {
            defaults.limit = raw
                .parse::<u32>()
                .ok()
                .filter(|limit| *limit > 0)
                .ok_or(ConfigError::InvalidValue {
                    name: LIMIT_VAR,
                    value: raw,
                })?;
        }
        if let Some(sort_by) = read(SORT_BY_VAR) {
            defaults.sort_by = sort_by;
        }
        Ok(defaults)
    }

    pub fn query(&self, keyword: &str) -> KeywordQuery {
        KeywordQuery::new(keyword)
            .language(&self.language)
            .loc_id(&self.loc_id)
            .limit(self.limit)
            .sort_by(&self.sort_by)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    fn full_session() -> Vec<(&'static str, &'static str)> {
        vec![
            (AUTH_TOKEN_VAR, "token"),
            (UBS_DATA_VAR, "data"),
            (COOKIES_VAR, "a=1; b=2"),
            (USER_AGENT_VAR, "Mozilla/5.0"),
        ]
    }

    #[test]
    fn test_credentials_trimmed_and_valid() {
        let mut pairs = full_session();
        pairs[0] = (AUTH_TOKEN_VAR, "  token\n");
        let creds = Credentials::from_lookup(lookup_from(&pairs));
        assert_eq!(creds.auth_token, "token");
        assert!(creds.validate().is_ok());
    }

    #[test]
    fn test_each_missing_credential_is_named() {
        for missing in [AUTH_TOKEN_VAR, UBS_DATA_VAR, COOKIES_VAR, USER_AGENT_VAR] {
            let pairs: Vec<_> = full_session()
                .into_iter()
                .filter(|(name, _)| *name != missing)
                .collect();
            let creds = Credentials::from_lookup(lookup_from(&pairs));
            match creds.validate() {
                Err(ConfigError::MissingValue(name)) => assert_eq!(name, missing),
                other => panic!("expected {missing} to be reported, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_blank_credential_counts_as_missing() {
        let mut pairs = full_session();
        pairs[2] = (COOKIES_VAR, "   ");
        let creds = Credentials::from_lookup(lookup_from(&pairs));
        let err = creds.validate().err();
        assert!(matches!(err, Some(ConfigError::MissingValue(COOKIES_VAR))));
        assert!(err.is_some_and(|e| e.to_string().contains(COOKIES_VAR)));
    }

    #[test]
    fn test_query_defaults() -> Result<()> {
        let defaults = QueryDefaults::from_lookup(lookup_from(&[]))?;
        assert_eq!(defaults, QueryDefaults::default());

        let defaults = QueryDefaults::from_lookup(lookup_from(&[
            (LANGUAGE_VAR, "en"),
            (LOC_ID_VAR, "2840"),
            (LIMIT_VAR, "50"),
            (SORT_BY_VAR, "-cpc"),
        ]))?;
        let query = defaults.query("running shoes");
        assert_eq!(query.keyword, "running shoes");
        assert_eq!(query.language, "en");
        assert_eq!(query.loc_id, "2840");
        assert_eq!(query.limit, 50);
        assert_eq!(query.sort_by, "-cpc");
        Ok(())
    }

    #[test]
    fn test_invalid_limit_rejected() {
        for bad in ["abc", "0", "-5"] {
            let result = QueryDefaults::from_lookup(lookup_from(&[(LIMIT_VAR, bad)]));
            assert!(
                matches!(result, Err(ConfigError::InvalidValue { name: LIMIT_VAR, .. })),
                "{bad} should be rejected"
            );
        }
    }
}
