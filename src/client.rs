//! HTTP client for the headless content store.

use url::Url;

use crate::content::{ProjectItem, ProjectList};

/// Fixed resource path for the portfolio collection. `populate=*` asks the
/// CMS to inline relation fields (the thumbnail) instead of returning stubs.
const PORTFOLIO_PATH: &str = "/api/Portfolios?populate=*";

/// The crate's single error taxonomy, raised by the content fetcher.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The content store answered with a non-success HTTP status.
    #[error("content store responded {code} {reason}")]
    Status { code: u16, reason: String },
    /// The request never completed (connect failure, timeout from the
    /// host network stack, TLS trouble).
    #[error("request to content store failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The body was not the expected `{ "data": [...] }` envelope. A shape
    /// mismatch on any single item fails the whole response; there is no
    /// per-item isolation.
    #[error("malformed content store response: {0}")]
    Decode(#[from] serde_json::Error),
    /// The configured base URL cannot address the portfolio collection.
    #[error("invalid content store URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}

/// Read-only client for the content store. One request per call, nothing
/// cached locally; any staleness window belongs to the hosting environment.
pub struct ContentClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl ContentClient {
    pub fn new(base_url: &Url) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder().user_agent("folio/0.1").build()?;
        let endpoint = base_url.join(PORTFOLIO_PATH)?;
        Ok(Self { http, endpoint })
    }

    /// Fetch the portfolio listing, preserving server-given order.
    ///
    /// Exactly one attempt is made; there is deliberately no retry or
    /// backoff here. The caller decides what a failed render looks like.
    pub async fn fetch_projects(&self) -> Result<Vec<ProjectItem>, FetchError> {
        tracing::debug!(endpoint = %self.endpoint, "fetching portfolio listing");
        let resp = self.http.get(self.endpoint.clone()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
            });
        }
        let body = resp.text().await?;
        parse_projects(&body)
    }
}

/// Parse the list envelope out of a response body. Split out of the client
/// so the wire shape is testable without a network.
pub fn parse_projects(body: &str) -> Result<Vec<ProjectItem>, FetchError> {
    let list: ProjectList = serde_json::from_str(body)?;
    Ok(list.data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_preserves_server_order() {
        let body = r#"{"data":[
            {"id":2,"attributes":{"title":"B","description":null,"thumbnail":null,
             "projectLink":"","tags":"","dateCompleted":null,
             "createdAt":"c","updatedAt":"u","publishedAt":"p"}},
            {"id":1,"attributes":{"title":"A","description":null,"thumbnail":null,
             "projectLink":"","tags":"","dateCompleted":null,
             "createdAt":"c","updatedAt":"u","publishedAt":"p"}}
        ],"meta":{}}"#;
        let items = parse_projects(body).unwrap();
        assert_eq!(items.iter().map(|i| i.id).collect::<Vec<_>>(), vec![2, 1]);
    }

    #[test]
    fn parse_empty_data_is_ok() {
        let items = parse_projects(r#"{"data":[],"meta":{}}"#).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn parse_rejects_missing_envelope() {
        let err = parse_projects(r#"[{"id":1}]"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn status_error_displays_code_and_reason() {
        let err = FetchError::Status {
            code: 500,
            reason: "Internal Server Error".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("Internal Server Error"));
    }
}
