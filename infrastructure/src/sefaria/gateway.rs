//! HTTP gateway to the Sefaria API
//!
//! Maps each [`LibraryRequest`] onto an upstream endpoint, and each
//! [`SearchQuery`] onto the search wrapper's request body. Responses are
//! parsed as JSON and returned untouched; shaping happens in the domain.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use sefaria_application::ports::library_gateway::{
    GatewayError, LibraryGateway, LibraryRequest, SearchQuery, VersionLanguage,
};
use serde_json::{Value, json};
use tracing::debug;

use crate::config::{ConfigError, FileConfig};

const SEARCH_ENDPOINT: [&str; 3] = ["api", "search-wrapper", "es8"];
/// Index field queried by full-text search
const SEARCH_FIELD: &str = "naive_lemmatizer";

/// [`LibraryGateway`] over HTTP with reqwest
#[derive(Debug, Clone)]
pub struct HttpLibraryGateway {
    client: Client,
    base_url: Url,
    slop: u32,
}

impl HttpLibraryGateway {
    /// Create a gateway with an existing client
    pub fn new(client: Client, base_url: &str, slop: u32) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ConfigError::Upstream(format!("invalid base_url '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::Upstream(format!(
                "base_url '{}' cannot hold a path",
                base_url
            )));
        }
        Ok(Self {
            client,
            base_url,
            slop,
        })
    }

    /// Build the client and gateway from `[upstream]` and `[search]`
    pub fn from_config(config: &FileConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.upstream.timeout_secs))
            .user_agent(config.upstream.user_agent.clone())
            .build()
            .map_err(|e| ConfigError::Upstream(format!("failed to build HTTP client: {}", e)))?;
        Self::new(client, &config.upstream.base_url, config.search.slop)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Result<Url, GatewayError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GatewayError::Unavailable(format!("unusable base URL '{}'", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Upstream URL for a read request
    pub fn request_url(&self, request: &LibraryRequest) -> Result<Url, GatewayError> {
        let url = match request {
            LibraryRequest::Text {
                reference,
                language,
            } => {
                let mut url = self.endpoint(["api", "v3", "texts", reference.as_str()])?;
                match language {
                    Some(VersionLanguage::Source) => {
                        url.query_pairs_mut().append_pair("version", "source");
                    }
                    Some(VersionLanguage::English) => {
                        url.query_pairs_mut().append_pair("version", "english");
                    }
                    Some(VersionLanguage::Both) => {
                        url.query_pairs_mut()
                            .append_pair("version", "english")
                            .append_pair("version", "source");
                    }
                    None => {}
                }
                url
            }
            LibraryRequest::EnglishVersions { reference } => {
                let mut url = self.endpoint(["api", "v3", "texts", reference.as_str()])?;
                url.query_pairs_mut().append_pair("version", "english|all");
                url
            }
            LibraryRequest::Calendars => self.endpoint(["api", "calendars"])?,
            LibraryRequest::Links {
                reference,
                with_text,
            } => {
                let mut url = self.endpoint(["api", "links", reference.as_str()])?;
                url.query_pairs_mut()
                    .append_pair("with_text", flag(*with_text));
                url
            }
            LibraryRequest::Name {
                name,
                limit,
                type_filter,
            } => {
                let mut url = self.endpoint(["api", "name", name.as_str()])?;
                if let Some(limit) = limit {
                    url.query_pairs_mut().append_pair("limit", &limit.to_string());
                }
                if let Some(type_filter) = type_filter {
                    url.query_pairs_mut().append_pair("type", type_filter);
                }
                url
            }
            LibraryRequest::Shape { name } => self.endpoint(["api", "shape", name.as_str()])?,
            LibraryRequest::Index { title } => {
                self.endpoint(["api", "v2", "raw", "index", title.as_str()])?
            }
            LibraryRequest::Topic {
                slug,
                with_links,
                with_refs,
            } => {
                let mut url = self.endpoint(["api", "v2", "topics", slug.as_str()])?;
                url.query_pairs_mut()
                    .append_pair("with_links", flag(*with_links))
                    .append_pair("with_refs", flag(*with_refs));
                url
            }
            LibraryRequest::Manuscripts { reference } => {
                self.endpoint(["api", "manuscripts", reference.as_str()])?
            }
            LibraryRequest::SearchPathFilter { book_name } => {
                self.endpoint(["api", "search-path-filter", book_name.as_str()])?
            }
        };
        Ok(url)
    }

    /// Request body for the search wrapper
    pub fn search_body(&self, query: &SearchQuery) -> Value {
        json!({
            "aggs": [],
            "field": SEARCH_FIELD,
            "filter_fields": vec![Value::Null; query.filters.len()],
            "filters": query.filters,
            "query": query.query,
            "size": query.size,
            "slop": self.slop,
            "sort_fields": ["pagesheetrank"],
            "sort_method": "score",
            "sort_reverse": false,
            "sort_score_missing": 0.04,
            "source_proj": true,
            "type": "text",
        })
    }

    async fn read_json(response: reqwest::Response) -> Result<Value, GatewayError> {
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Unavailable(format!("failed to read response body: {}", e)))?;
        serde_json::from_str(&body).map_err(|e| GatewayError::Malformed(e.to_string()))
    }
}

fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

fn send_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::Unavailable("request timed out".to_string())
    } else {
        GatewayError::Unavailable(format!("request failed: {}", err))
    }
}

/// Map a response status to a failure, if it is one
fn check_status(status: StatusCode, request: Option<&LibraryRequest>) -> Result<(), GatewayError> {
    if status.is_success() {
        return Ok(());
    }
    if status == StatusCode::NOT_FOUND {
        if let Some(LibraryRequest::SearchPathFilter { book_name }) = request {
            return Err(GatewayError::NotFound(format!(
                "No search path found for book '{}'",
                book_name
            )));
        }
    }
    Err(GatewayError::Unavailable(format!(
        "HTTP error: {} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    )))
}

#[async_trait]
impl LibraryGateway for HttpLibraryGateway {
    async fn fetch(&self, request: &LibraryRequest) -> Result<Value, GatewayError> {
        let url = self.request_url(request)?;
        debug!(kind = request.kind(), url = %url, "GET");

        let response = self.client.get(url).send().await.map_err(send_error)?;
        debug!(kind = request.kind(), status = %response.status(), "Upstream responded");
        check_status(response.status(), Some(request))?;

        Self::read_json(response).await
    }

    async fn search(&self, query: &SearchQuery) -> Result<Value, GatewayError> {
        let url = self.endpoint(SEARCH_ENDPOINT)?;
        debug!(
            query = %query.query,
            filters = query.filters.len(),
            size = query.size,
            "POST search"
        );

        let response = self
            .client
            .post(url)
            .json(&self.search_body(query))
            .send()
            .await
            .map_err(send_error)?;
        check_status(response.status(), None)?;

        Self::read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway() -> HttpLibraryGateway {
        HttpLibraryGateway::new(Client::new(), "https://www.sefaria.org", 10).unwrap()
    }

    fn url(request: LibraryRequest) -> String {
        gateway().request_url(&request).unwrap().to_string()
    }

    #[test]
    fn test_text_urls() {
        let text = |language| LibraryRequest::Text {
            reference: "Genesis 1:1".into(),
            language,
        };

        assert_eq!(
            url(text(None)),
            "https://www.sefaria.org/api/v3/texts/Genesis%201:1"
        );
        assert_eq!(
            url(text(Some(VersionLanguage::Source))),
            "https://www.sefaria.org/api/v3/texts/Genesis%201:1?version=source"
        );
        assert_eq!(
            url(text(Some(VersionLanguage::Both))),
            "https://www.sefaria.org/api/v3/texts/Genesis%201:1?version=english&version=source"
        );
    }

    #[test]
    fn test_english_versions_url() {
        let u = url(LibraryRequest::EnglishVersions {
            reference: "Berakhot 2a".into(),
        });
        assert_eq!(
            u,
            "https://www.sefaria.org/api/v3/texts/Berakhot%202a?version=english%7Call"
        );
    }

    #[test]
    fn test_reference_segment_is_encoded() {
        let u = gateway()
            .request_url(&LibraryRequest::Manuscripts {
                reference: "Job 1/2?".into(),
            })
            .unwrap();
        assert_eq!(u.path(), "/api/manuscripts/Job%201%2F2%3F");
        assert!(u.query().is_none());

        let hebrew = gateway()
            .request_url(&LibraryRequest::Shape {
                name: "בראשית".into(),
            })
            .unwrap();
        assert!(hebrew.path().starts_with("/api/shape/%D7%91"));
    }

    #[test]
    fn test_query_flags() {
        assert_eq!(
            url(LibraryRequest::Links {
                reference: "Exodus 3".into(),
                with_text: true
            }),
            "https://www.sefaria.org/api/links/Exodus%203?with_text=1"
        );
        assert_eq!(
            url(LibraryRequest::Topic {
                slug: "moses".into(),
                with_links: false,
                with_refs: true
            }),
            "https://www.sefaria.org/api/v2/topics/moses?with_links=0&with_refs=1"
        );
    }

    #[test]
    fn test_name_url_optional_params() {
        assert_eq!(
            url(LibraryRequest::Name {
                name: "Gen".into(),
                limit: None,
                type_filter: None
            }),
            "https://www.sefaria.org/api/name/Gen"
        );
        assert_eq!(
            url(LibraryRequest::Name {
                name: "Gen".into(),
                limit: Some(5),
                type_filter: Some("ref".into())
            }),
            "https://www.sefaria.org/api/name/Gen?limit=5&type=ref"
        );
    }

    #[test]
    fn test_fixed_endpoints() {
        assert_eq!(
            url(LibraryRequest::Calendars),
            "https://www.sefaria.org/api/calendars"
        );
        assert_eq!(
            url(LibraryRequest::Index {
                title: "Genesis".into()
            }),
            "https://www.sefaria.org/api/v2/raw/index/Genesis"
        );
        assert_eq!(
            url(LibraryRequest::SearchPathFilter {
                book_name: "Genesis".into()
            }),
            "https://www.sefaria.org/api/search-path-filter/Genesis"
        );
    }

    #[test]
    fn test_base_url_with_prefix() {
        let gateway = HttpLibraryGateway::new(Client::new(), "http://localhost:8000/mirror/", 10).unwrap();
        let u = gateway.request_url(&LibraryRequest::Calendars).unwrap();
        assert_eq!(u.as_str(), "http://localhost:8000/mirror/api/calendars");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(HttpLibraryGateway::new(Client::new(), "not a url", 10).is_err());
        assert!(HttpLibraryGateway::new(Client::new(), "mailto:someone@example.org", 10).is_err());
    }

    #[test]
    fn test_search_body() {
        let query = SearchQuery::new("אור", 5).with_filters(vec!["Tanakh".into(), "Talmud/Bavli".into()]);
        let body = gateway().search_body(&query);

        assert_eq!(
            body,
            json!({
                "aggs": [],
                "field": "naive_lemmatizer",
                "filter_fields": [null, null],
                "filters": ["Tanakh", "Talmud/Bavli"],
                "query": "אור",
                "size": 5,
                "slop": 10,
                "sort_fields": ["pagesheetrank"],
                "sort_method": "score",
                "sort_reverse": false,
                "sort_score_missing": 0.04,
                "source_proj": true,
                "type": "text",
            })
        );
    }

    #[test]
    fn test_search_body_without_filters() {
        let body = gateway().search_body(&SearchQuery::new("light", 10));
        assert_eq!(body["filters"], json!([]));
        assert_eq!(body["filter_fields"], json!([]));
    }

    #[test]
    fn test_check_status() {
        assert!(check_status(StatusCode::OK, None).is_ok());

        let err = check_status(StatusCode::SERVICE_UNAVAILABLE, None).unwrap_err();
        assert_eq!(
            err,
            GatewayError::Unavailable("HTTP error: 503 Service Unavailable".into())
        );

        let links = LibraryRequest::Links {
            reference: "x".into(),
            with_text: false,
        };
        assert!(matches!(
            check_status(StatusCode::NOT_FOUND, Some(&links)),
            Err(GatewayError::Unavailable(_))
        ));

        let path = LibraryRequest::SearchPathFilter {
            book_name: "Nothing".into(),
        };
        assert_eq!(
            check_status(StatusCode::NOT_FOUND, Some(&path)),
            Err(GatewayError::NotFound(
                "No search path found for book 'Nothing'".into()
            ))
        );
    }

    fn local_client() -> Client {
        Client::builder().no_proxy().build().unwrap()
    }

    /// Serve one canned HTTP response on a local port
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 8192];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            // Drain whatever the client still sends so close does not reset
            let _ = socket.shutdown().await;
            while let Ok(n) = socket.read(&mut buf).await {
                if n == 0 {
                    break;
                }
            }
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_fetch_parses_json() {
        let base = serve_once("200 OK", r#"{"calendar_items": []}"#).await;
        let gateway = HttpLibraryGateway::new(local_client(), &base, 10).unwrap();

        let payload = gateway.fetch(&LibraryRequest::Calendars).await.unwrap();
        assert_eq!(payload, json!({"calendar_items": []}));
    }

    #[tokio::test]
    async fn test_fetch_malformed_body() {
        let base = serve_once("200 OK", "<html>oops</html>").await;
        let gateway = HttpLibraryGateway::new(local_client(), &base, 10).unwrap();

        let err = gateway.fetch(&LibraryRequest::Calendars).await.unwrap_err();
        assert!(matches!(err, GatewayError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_search_server_error() {
        let base = serve_once("500 Internal Server Error", "{}").await;
        let gateway = HttpLibraryGateway::new(local_client(), &base, 10).unwrap();

        let err = gateway.search(&SearchQuery::new("light", 10)).await.unwrap_err();
        assert_eq!(
            err,
            GatewayError::Unavailable("HTTP error: 500 Internal Server Error".into())
        );
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let gateway = HttpLibraryGateway::new(local_client(), &format!("http://{}", addr), 10).unwrap();
        let err = gateway.fetch(&LibraryRequest::Calendars).await.unwrap_err();
        assert!(matches!(err, GatewayError::Unavailable(_)));
    }
}
