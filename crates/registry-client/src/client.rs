//! HTTP client for the producer registry.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::dto::{Acknowledgement, ApiErrorBody, Producer, ProducerPayload};

/// Largest page the service returns; [`RegistryClient::list_all`] requests
/// pages of this size.
pub const PAGE_SIZE: u32 = 100;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(3);

/// Errors raised while talking to the registry.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The service could not be reached.
    #[error("cannot connect to {base_url}")]
    Connection {
        /// Base URL the client was configured with.
        base_url: String,
    },
    /// The service rejected the request with a structured error.
    #[error("{detail} ({code}, HTTP {status})")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error code from the envelope.
        code: String,
        /// Message from the envelope.
        detail: String,
    },
    /// The service answered with a status and body the client does not understand.
    #[error("unexpected HTTP {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },
    /// Transport or decoding failure.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl ClientError {
    /// Returns the service error code when the failure came from an error envelope.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => Some(code),
            _ => None,
        }
    }
}

/// Thin typed wrapper over the registry's REST endpoints.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    client: Client,
    base_url: String,
}

impl RegistryClient {
    /// Creates a client for the service rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] when the underlying HTTP client cannot
    /// be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;
        let root = base_url.into().trim_end_matches('/').to_owned();
        Ok(Self {
            client,
            base_url: root,
        })
    }

    /// Base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches one page of producers.
    ///
    /// # Errors
    ///
    /// See [`ClientError`].
    pub async fn list(&self, skip: u64, limit: u32) -> Result<Vec<Producer>, ClientError> {
        debug!(skip, limit, "listing producers");
        let request = self
            .client
            .get(self.url("/producers"))
            .query(&[("skip", skip), ("limit", u64::from(limit))]);
        self.send(request).await
    }

    /// Fetches every producer by walking pages of [`PAGE_SIZE`].
    ///
    /// # Errors
    ///
    /// See [`ClientError`].
    pub async fn list_all(&self) -> Result<Vec<Producer>, ClientError> {
        let mut producers = Vec::new();
        let mut skip = 0_u64;
        loop {
            let page = self.list(skip, PAGE_SIZE).await?;
            let fetched = u64::try_from(page.len()).unwrap_or(u64::MAX);
            producers.extend(page);
            if fetched < u64::from(PAGE_SIZE) {
                return Ok(producers);
            }
            skip = skip.saturating_add(fetched);
        }
    }

    /// Fetches one producer.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with code `not_found` when the id is unknown.
    pub async fn get(&self, id: i64) -> Result<Producer, ClientError> {
        let request = self.client.get(self.url(&format!("/producers/{id}")));
        self.send(request).await
    }

    /// Creates a producer.
    ///
    /// # Errors
    ///
    /// See [`ClientError`].
    pub async fn create(&self, payload: &ProducerPayload) -> Result<Producer, ClientError> {
        debug!(document = %payload.document_number, "creating producer");
        let request = self.client.post(self.url("/producers")).json(payload);
        self.send(request).await
    }

    /// Replaces every field of a producer.
    ///
    /// # Errors
    ///
    /// See [`ClientError`].
    pub async fn update(&self, id: i64, payload: &ProducerPayload) -> Result<Producer, ClientError> {
        debug!(id, "updating producer");
        let request = self
            .client
            .put(self.url(&format!("/producers/{id}")))
            .json(payload);
        self.send(request).await
    }

    /// Deletes a producer and returns the service's acknowledgement.
    ///
    /// # Errors
    ///
    /// See [`ClientError`].
    pub async fn delete(&self, id: i64) -> Result<String, ClientError> {
        debug!(id, "deleting producer");
        let request = self.client.delete(self.url(&format!("/producers/{id}")));
        let ack: Acknowledgement = self.send(request).await?;
        Ok(ack.detail)
    }

    /// Asks the service to generate `qty` synthetic producers.
    ///
    /// # Errors
    ///
    /// See [`ClientError`].
    pub async fn generate_mock(&self, qty: u32) -> Result<String, ClientError> {
        debug!(qty, "requesting mock producers");
        let request = self
            .client
            .post(self.url("/producers/mock"))
            .query(&[("qty", qty)]);
        let ack: Acknowledgement = self.send(request).await?;
        Ok(ack.detail)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await.map_err(|err| {
            if err.is_connect() {
                ClientError::Connection {
                    base_url: self.base_url.clone(),
                }
            } else {
                ClientError::Http(err)
            }
        })?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let body = response.text().await?;
    Err(rejection(status, body))
}

fn rejection(status: StatusCode, body: String) -> ClientError {
    match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(envelope) => {
            debug!(status = status.as_u16(), code = %envelope.code, trace_id = ?envelope.trace_id, "request rejected");
            ClientError::Api {
                status: status.as_u16(),
                code: envelope.code,
                detail: envelope.detail,
            }
        }
        Err(_) => ClientError::UnexpectedStatus {
            status: status.as_u16(),
            body,
        },
    }
}
