//! `reqwest`-backed joke source

use std::time::Duration;

use jokes_core::prelude::*;
use jokes_core::{Joke, JokePayload};
use url::Url;

use crate::source::{FetchError, FetchResult, JokeSource};

/// Fetches jokes with `GET <endpoint>`.
#[derive(Debug, Clone)]
pub struct HttpJokeSource {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpJokeSource {
    /// Build a source for `endpoint`.
    ///
    /// `timeout` of `None` means requests may hang indefinitely.
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("joke-dispenser/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::http_client(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl JokeSource for HttpJokeSource {
    async fn fetch_joke(&self) -> FetchResult {
        debug!("GET {}", self.endpoint);

        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(classify)?;
        decode_body(&body)
    }

    fn describe(&self) -> String {
        self.endpoint.to_string()
    }
}

/// Decode a 2xx response body into a joke
pub fn decode_body(body: &str) -> FetchResult {
    JokePayload::parse(body)
        .map(Joke::from)
        .map_err(|e| FetchError::decode(e.to_string()))
}

fn classify(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else if err.is_decode() {
        FetchError::decode(err.to_string())
    } else {
        FetchError::network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::StubServer;

    fn source_for(server: &StubServer) -> HttpJokeSource {
        HttpJokeSource::new(server.url(), None).unwrap()
    }

    #[test]
    fn test_decode_body_success() {
        let joke = decode_body(r#"{"joke":"Nacho cheese."}"#).unwrap();
        assert_eq!(joke.as_str(), "Nacho cheese.");
    }

    #[test]
    fn test_decode_body_missing_field() {
        let err = decode_body(r#"{"message":"ok"}"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn test_decode_body_not_json() {
        let err = decode_body("Service Unavailable").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let server = StubServer::json(200, r#"{"joke":"A carrot."}"#).await;
        let joke = source_for(&server).fetch_joke().await.unwrap();
        assert_eq!(joke, Joke::new("A carrot."));
        assert_eq!(server.request_count(), 1);
    }

    #[tokio::test]
    async fn test_fetch_accepts_any_2xx() {
        let server = StubServer::json(203, r#"{"joke":"Fsh."}"#).await;
        let joke = source_for(&server).fetch_joke().await.unwrap();
        assert_eq!(joke.as_str(), "Fsh.");
    }

    #[tokio::test]
    async fn test_fetch_server_error_status() {
        let server = StubServer::json(500, r#"{"error":"boom"}"#).await;
        let err = source_for(&server).fetch_joke().await.unwrap_err();
        assert_eq!(err, FetchError::Status(500));
    }

    #[tokio::test]
    async fn test_fetch_not_found_status() {
        let server = StubServer::json(404, "").await;
        let err = source_for(&server).fetch_joke().await.unwrap_err();
        assert_eq!(err, FetchError::Status(404));
    }

    #[tokio::test]
    async fn test_fetch_malformed_body() {
        let server = StubServer::json(200, "{\"joke\":").await;
        let err = source_for(&server).fetch_joke().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        let url = StubServer::unreachable_url().await;
        let source = HttpJokeSource::new(url, None).unwrap();
        let err = source.fetch_joke().await.unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }

    #[tokio::test]
    async fn test_fetch_times_out_when_configured() {
        let server = StubServer::json(200, r#"{"joke":"late"}"#)
            .await
            .with_delay(Duration::from_millis(500));
        let source = HttpJokeSource::new(server.url(), Some(Duration::from_millis(50))).unwrap();
        let err = source.fetch_joke().await.unwrap_err();
        assert_eq!(err, FetchError::Timeout);
    }

    #[test]
    fn test_describe_is_endpoint() {
        let url = Url::parse("http://localhost:4000/api/joke").unwrap();
        let source = HttpJokeSource::new(url, None).unwrap();
        assert_eq!(source.describe(), "http://localhost:4000/api/joke");
        assert_eq!(source.endpoint().port(), Some(4000));
    }
}
