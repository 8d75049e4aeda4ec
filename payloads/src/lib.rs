pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};
pub use responses::{Feedback, LoginRecord, NewsPost, NewsSummary};

use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

/// Identifier of a news post.
///
/// The API is free to use numeric or string ids; both deserialize into the
/// same opaque string, which is echoed back verbatim in URL paths.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct NewsId(#[serde(deserialize_with = "string_or_number")] pub String);

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct FeedbackId(
    #[serde(deserialize_with = "string_or_number")] pub String,
);

impl FromStr for NewsId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<&str> for NewsId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Integer(i64),
    Text(String),
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Integer(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn news_id_accepts_numbers_and_strings() {
        let numeric: NewsId = serde_json::from_str("42").unwrap();
        let text: NewsId = serde_json::from_str("\"abc-1\"").unwrap();
        assert_eq!(numeric, NewsId("42".into()));
        assert_eq!(text, NewsId("abc-1".into()));
    }

    #[test]
    fn news_id_serializes_as_string() {
        let id = NewsId("7".into());
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"7\"");
        assert_eq!(id.to_string(), "7");
    }

    #[test]
    fn news_id_parses_from_route_segment() {
        let id: NewsId = "123".parse().unwrap();
        assert_eq!(id, NewsId::from("123"));
    }
}
