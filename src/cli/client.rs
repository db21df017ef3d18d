use std::future::Future;
use std::time::Duration;

use reqwest::{StatusCode, Url};
use serde_json::{json, Value};

use crate::models::Person;

/// Pause between attempts of a retried request
pub const RETRY_DELAY: Duration = Duration::from_millis(150);

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{0}")]
    Conflict(String),
    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },
    #[error("Invalid API url: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Network failures and server-side errors are worth another attempt;
    /// client errors (4xx, including conflicts) are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::Transport(_) => true,
            ClientError::Status { status, .. } => *status >= 500,
            ClientError::Conflict(_) | ClientError::InvalidUrl(_) => false,
        }
    }
}

/// HTTP client for the people resource.
///
/// `list`, `create` and `update` are retried; `get` and `delete` are sent once.
#[derive(Debug, Clone)]
pub struct PeopleClient {
    http: reqwest::Client,
    base_url: Url,
    attempts: usize,
}

impl PeopleClient {
    pub fn new(base_url: &str, timeout: Duration, attempts: usize) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }

        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url,
            attempts: attempts.max(1),
        })
    }

    pub async fn list(&self) -> Result<Vec<Person>, ClientError> {
        self.with_retries(|| self.list_once()).await
    }

    pub async fn get(&self, dni: &str) -> Result<Person, ClientError> {
        let res = self.http.get(self.record_url(dni)?).send().await?;
        Self::parse(res, StatusCode::OK).await
    }

    pub async fn create(&self, person: &Person) -> Result<Person, ClientError> {
        self.with_retries(|| self.create_once(person)).await
    }

    pub async fn update(&self, dni: &str, name: &str, age: i32) -> Result<Person, ClientError> {
        let url = self.record_url(dni)?;
        let body = json!({ "name": name, "dni": dni, "age": age });
        self.with_retries(|| self.update_once(&url, &body)).await
    }

    pub async fn delete(&self, dni: &str) -> Result<(), ClientError> {
        let res = self.http.delete(self.record_url(dni)?).send().await?;
        let _: Value = Self::parse(res, StatusCode::OK).await?;
        Ok(())
    }

    async fn list_once(&self) -> Result<Vec<Person>, ClientError> {
        let res = self.http.get(self.base_url.clone()).send().await?;
        Self::parse(res, StatusCode::OK).await
    }

    async fn create_once(&self, person: &Person) -> Result<Person, ClientError> {
        let res = self.http.post(self.base_url.clone()).json(person).send().await?;
        Self::parse(res, StatusCode::CREATED).await
    }

    async fn update_once(&self, url: &Url, body: &Value) -> Result<Person, ClientError> {
        let res = self.http.put(url.clone()).json(body).send().await?;
        Self::parse(res, StatusCode::OK).await
    }

    /// `<base>/<dni>` with the dni percent-encoded as a single path segment
    fn record_url(&self, dni: &str) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(dni);
        Ok(url)
    }

    async fn with_retries<T, F, Fut>(&self, mut op: F) -> Result<T, ClientError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, ClientError>>,
    {
        let mut attempt = 1;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(e) if attempt >= self.attempts || !e.is_retryable() => return Err(e),
                Err(e) => {
                    tracing::debug!("attempt {} of {} failed: {}", attempt, self.attempts, e);
                    attempt += 1;
                    tokio::time::sleep(RETRY_DELAY).await;
                }
            }
        }
    }

    async fn parse<T: serde::de::DeserializeOwned>(
        res: reqwest::Response,
        expected: StatusCode,
    ) -> Result<T, ClientError> {
        let status = res.status();
        if status == expected {
            return Ok(res.json::<T>().await?);
        }

        let text = res.text().await.unwrap_or_default();
        let message = serde_json::from_str::<Value>(&text)
            .ok()
            .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
            .unwrap_or_else(|| {
                if text.is_empty() {
                    format!("{} {}", status.as_u16(), status.canonical_reason().unwrap_or(""))
                } else {
                    text
                }
            });

        if status == StatusCode::CONFLICT {
            Err(ClientError::Conflict(message))
        } else {
            Err(ClientError::Status {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> PeopleClient {
        PeopleClient::new(base, Duration::from_secs(1), 2).unwrap()
    }

    #[test]
    fn test_record_url_encodes_dni() {
        let c = client("http://localhost:8080/people");
        assert_eq!(
            c.record_url("12 3/4").unwrap().as_str(),
            "http://localhost:8080/people/12%203%2F4"
        );
    }

    #[test]
    fn test_record_url_with_trailing_slash_base() {
        let c = client("http://localhost:8080/people/");
        assert_eq!(c.record_url("123").unwrap().as_str(), "http://localhost:8080/people/123");
    }

    #[test]
    fn test_rejects_bad_urls() {
        let err = PeopleClient::new("not a url", Duration::from_secs(1), 1).unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));

        let err = PeopleClient::new("mailto:someone@example.com", Duration::from_secs(1), 1).unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_retry_policy() {
        assert!(!ClientError::Conflict("taken".into()).is_retryable());
        assert!(!ClientError::Status { status: 404, message: "x".into() }.is_retryable());
        assert!(ClientError::Status { status: 503, message: "x".into() }.is_retryable());
    }
}
