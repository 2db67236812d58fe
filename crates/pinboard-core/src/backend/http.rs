//! HTTP collaborator speaking the pin REST contract.
//!
//! Endpoints, all JSON under one base origin:
//! GET `/pins?url=..&emailId=..`, POST `/pin` (full record, upsert),
//! DELETE `/pin?id=..`, DELETE `/pin?url=..&emailId=..`.

use super::{BackendError, BackendResult, PinBackend};
use crate::pin::Pin;
use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// Hard ceiling on any single request. A collaborator that stops answering
/// fails the operation instead of leaving the loading flag stuck.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Successful fetch body. A missing or null `data` field means no pins.
#[derive(Debug, Deserialize)]
struct FetchEnvelope {
    #[serde(default)]
    data: Option<Vec<Pin>>,
}

/// Failure body. The server may attach a human-readable message.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    message: Option<String>,
}

/// Blocking REST client for the pin collaborator.
///
/// Runs on the pin store's worker thread; never call it from the UI thread.
pub struct HttpBackend {
    client: Client,
    base: Url,
}

impl HttpBackend {
    /// Build a client for the given base origin, e.g.
    /// `https://feedback.example.com`.
    pub fn new(base_url: &str) -> BackendResult<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| BackendError::Other(format!("invalid base URL: {e}")))?;
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| BackendError::Other(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, base })
    }

    fn endpoint(&self, segment: &str) -> Url {
        let mut url = self.base.clone();
        let path = format!("{}/{}", url.path().trim_end_matches('/'), segment);
        url.set_path(&path);
        url
    }

    fn pins_url(&self, page: &str, owner: &str) -> Url {
        let mut url = self.endpoint("pins");
        url.query_pairs_mut()
            .append_pair("url", page)
            .append_pair("emailId", owner);
        url
    }

    fn pin_url(&self) -> Url {
        self.endpoint("pin")
    }

    fn delete_one_url(&self, id: &str) -> Url {
        let mut url = self.endpoint("pin");
        url.query_pairs_mut().append_pair("id", id);
        url
    }

    fn delete_page_url(&self, page: &str, owner: &str) -> Url {
        let mut url = self.endpoint("pin");
        url.query_pairs_mut()
            .append_pair("url", page)
            .append_pair("emailId", owner);
        url
    }

    /// Map a non-success response to [`BackendError::Rejected`], keeping the
    /// server's message when the body carries one.
    fn reject(response: Response) -> BackendError {
        let status = response.status().as_u16();
        let message = response
            .json::<ErrorEnvelope>()
            .ok()
            .and_then(|envelope| envelope.message);
        BackendError::Rejected { status, message }
    }

    fn transport(error: reqwest::Error) -> BackendError {
        BackendError::Network(error.to_string())
    }
}

impl PinBackend for HttpBackend {
    fn fetch_pins(&self, page: &str, owner: &str) -> BackendResult<Vec<Pin>> {
        let response = self
            .client
            .get(self.pins_url(page, owner))
            .send()
            .map_err(Self::transport)?;

        if !response.status().is_success() {
            return Err(Self::reject(response));
        }

        let envelope: FetchEnvelope = response
            .json()
            .map_err(|e| BackendError::Other(format!("malformed fetch response: {e}")))?;
        Ok(envelope.data.unwrap_or_default())
    }

    fn save_pin(&self, pin: &Pin) -> BackendResult<()> {
        let response = self
            .client
            .post(self.pin_url())
            .json(pin)
            .send()
            .map_err(Self::transport)?;

        if !response.status().is_success() {
            return Err(Self::reject(response));
        }
        Ok(())
    }

    fn delete_pin(&self, id: &str) -> BackendResult<()> {
        let response = self
            .client
            .delete(self.delete_one_url(id))
            .send()
            .map_err(Self::transport)?;

        if !response.status().is_success() {
            return Err(Self::reject(response));
        }
        Ok(())
    }

    fn delete_pins_by_page(&self, page: &str, owner: &str) -> BackendResult<()> {
        let response = self
            .client
            .delete(self.delete_page_url(page, owner))
            .send()
            .map_err(Self::transport)?;

        if !response.status().is_success() {
            return Err(Self::reject(response));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend() -> HttpBackend {
        HttpBackend::new("https://feedback.example.test").unwrap()
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(HttpBackend::new("not a url").is_err());
    }

    #[test]
    fn test_fetch_url_encodes_query_params() {
        let url = backend().pins_url("https://host.test/page?tab=1", "user+tag@example.com");
        let rendered = url.as_str();
        assert!(rendered.starts_with("https://feedback.example.test/pins?"));
        assert!(rendered.contains("url=https%3A%2F%2Fhost.test%2Fpage%3Ftab%3D1"));
        assert!(rendered.contains("emailId=user%2Btag%40example.com"));
    }

    #[test]
    fn test_delete_one_url() {
        let url = backend().delete_one_url("pin 7");
        assert_eq!(
            url.as_str(),
            "https://feedback.example.test/pin?id=pin+7"
        );
    }

    #[test]
    fn test_delete_page_url_carries_both_params() {
        let url = backend().delete_page_url("demo://home", "a@x");
        let rendered = url.as_str();
        assert!(rendered.starts_with("https://feedback.example.test/pin?"));
        assert!(rendered.contains("url=demo%3A%2F%2Fhome"));
        assert!(rendered.contains("emailId=a%40x"));
    }

    #[test]
    fn test_base_url_with_trailing_slash() {
        let backend = HttpBackend::new("https://feedback.example.test/api/").unwrap();
        let url = backend.pins_url("p", "o");
        assert!(url.as_str().starts_with("https://feedback.example.test/api/pins?"));
    }

    #[test]
    fn test_missing_data_field_means_empty() {
        let envelope: FetchEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.data.unwrap_or_default().is_empty());

        let envelope: FetchEnvelope = serde_json::from_str(r#"{"data": null}"#).unwrap();
        assert!(envelope.data.unwrap_or_default().is_empty());
    }
}
