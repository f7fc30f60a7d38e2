//! Reqwest-backed upstream employee service adapter.
//!
//! This adapter owns transport details only: URL construction, request
//! serialisation, timeout and HTTP error mapping, and JSON decoding into
//! domain records.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::dto::{CreateEmployeeDto, DeleteEmployeeDto, EmployeeDto, EnvelopeDto, into_records};
use crate::domain::ports::{EmployeeRecord, EmployeeUpstream, EmployeeUpstreamError, Envelope};
use crate::domain::{EmployeeId, NewEmployee};

/// Upstream adapter issuing one HTTP request per port call against a base URL.
pub struct EmployeeHttpUpstream {
    client: Client,
    base_url: Url,
}

impl EmployeeHttpUpstream {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    /// ```rust,ignore
    /// let upstream = EmployeeHttpUpstream::new(base_url, Duration::from_secs(10))?;
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    fn employee_url(&self, id: &EmployeeId) -> Result<Url, EmployeeUpstreamError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                EmployeeUpstreamError::unknown(format!(
                    "base url {} cannot carry path segments",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .push(&id.to_string());
        Ok(url)
    }

    async fn execute<T, B>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<EnvelopeDto<T>, EmployeeUpstreamError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized + Sync,
    {
        debug!(%method, %url, "calling upstream employee service");
        let mut request = self
            .client
            .request(method, url)
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await.map_err(map_transport_error)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, bytes.as_ref()));
        }
        decode_envelope(bytes.as_ref())
    }
}

#[async_trait]
impl EmployeeUpstream for EmployeeHttpUpstream {
    async fn list_employees(&self) -> Result<Envelope<Vec<EmployeeRecord>>, EmployeeUpstreamError> {
        let dto: EnvelopeDto<Vec<EmployeeDto>> = self
            .execute::<_, ()>(Method::GET, self.base_url.clone(), None)
            .await?;
        Ok(dto.into_envelope(into_records))
    }

    async fn fetch_employee(
        &self,
        id: &EmployeeId,
    ) -> Result<Envelope<EmployeeRecord>, EmployeeUpstreamError> {
        let url = self.employee_url(id)?;
        let dto: EnvelopeDto<EmployeeDto> = self.execute::<_, ()>(Method::GET, url, None).await?;
        Ok(dto.into_envelope(EmployeeRecord::from))
    }

    async fn create_employee(
        &self,
        employee: &NewEmployee,
    ) -> Result<Envelope<EmployeeRecord>, EmployeeUpstreamError> {
        let payload = CreateEmployeeDto::from(employee);
        let dto: EnvelopeDto<EmployeeDto> = self
            .execute(Method::POST, self.base_url.clone(), Some(&payload))
            .await?;
        Ok(dto.into_envelope(EmployeeRecord::from))
    }

    async fn delete_employee(&self, name: &str) -> Result<Envelope<bool>, EmployeeUpstreamError> {
        let payload = DeleteEmployeeDto { name };
        let dto: EnvelopeDto<bool> = self
            .execute(Method::DELETE, self.base_url.clone(), Some(&payload))
            .await?;
        Ok(dto.into_envelope(|deleted| deleted))
    }
}

fn decode_envelope<T>(body: &[u8]) -> Result<EnvelopeDto<T>, EmployeeUpstreamError>
where
    T: DeserializeOwned,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(EnvelopeDto {
            data: None,
            status: None,
        });
    }
    serde_json::from_slice(body).map_err(|error| {
        EmployeeUpstreamError::unknown(format!("invalid upstream JSON payload: {error}"))
    })
}

fn map_transport_error(error: reqwest::Error) -> EmployeeUpstreamError {
    if error.is_timeout() {
        EmployeeUpstreamError::unknown(format!("request timed out: {error}"))
    } else {
        EmployeeUpstreamError::unknown(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> EmployeeUpstreamError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => EmployeeUpstreamError::rate_limited(),
        StatusCode::NOT_FOUND => EmployeeUpstreamError::not_found(),
        _ => {
            let preview = body_preview(body);
            if preview.is_empty() {
                EmployeeUpstreamError::unknown(format!("status {}", status.as_u16()))
            } else {
                EmployeeUpstreamError::unknown(format!("status {}: {preview}", status.as_u16()))
            }
        }
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
