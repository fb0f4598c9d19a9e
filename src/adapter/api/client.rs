//! HTTP client for the CRM backend.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::types::{ComprehensiveSegmentationResponse, PreviewRequest, PreviewResponse};
use crate::config::ApiConfig;
use crate::domain::{
    Segment, SegmentDraft, SegmentEstimate, SegmentId, SegmentPatch, SegmentRule,
    SegmentationSnapshot,
};
use crate::error::{ApiError, Result};

/// Thin typed wrapper over the backend's REST endpoints.
pub struct CrmApiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl CrmApiClient {
    /// Build a client from the API configuration.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let mut request = self.client.request(method, url);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        request
    }

    fn check(response: Response, url: &str) -> Result<Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(ApiError::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            }
            .into())
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response, url: &str) -> Result<T> {
        response.json::<T>().await.map_err(|e| {
            ApiError::MalformedBody {
                url: url.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Fetch the aggregate distribution statistics.
    pub async fn comprehensive_segmentation(&self) -> Result<SegmentationSnapshot> {
        let url = self.endpoint("segmentation/comprehensive");
        debug!(url = %url, "fetching comprehensive segmentation");

        let response = Self::check(self.request(Method::GET, &url).send().await?, &url)?;
        let body: ComprehensiveSegmentationResponse = Self::decode(response, &url).await?;
        Ok(body.into())
    }

    /// List all segments.
    pub async fn list_segments(&self) -> Result<Vec<Segment>> {
        let url = self.endpoint("segments");
        debug!(url = %url, "listing segments");

        let response = Self::check(self.request(Method::GET, &url).send().await?, &url)?;
        Self::decode(response, &url).await
    }

    /// Get a single segment; `None` on 404.
    pub async fn get_segment(&self, id: &SegmentId) -> Result<Option<Segment>> {
        let url = self.endpoint(&format!("segments/{id}"));
        let response = self.request(Method::GET, &url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = Self::check(response, &url)?;
        Ok(Some(Self::decode(response, &url).await?))
    }

    /// Create a segment; the backend computes its size.
    pub async fn create_segment(&self, draft: &SegmentDraft) -> Result<Segment> {
        let url = self.endpoint("segments");
        debug!(url = %url, name = %draft.name, "creating segment");

        let response = Self::check(
            self.request(Method::POST, &url).json(draft).send().await?,
            &url,
        )?;
        Self::decode(response, &url).await
    }

    /// Update a segment; `None` on 404.
    pub async fn update_segment(
        &self,
        id: &SegmentId,
        patch: &SegmentPatch,
    ) -> Result<Option<Segment>> {
        let url = self.endpoint(&format!("segments/{id}"));
        let response = self.request(Method::PUT, &url).json(patch).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = Self::check(response, &url)?;
        Ok(Some(Self::decode(response, &url).await?))
    }

    /// Delete a segment; false on 404.
    pub async fn delete_segment(&self, id: &SegmentId) -> Result<bool> {
        let url = self.endpoint(&format!("segments/{id}"));
        let response = self.request(Method::DELETE, &url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        Self::check(response, &url)?;
        Ok(true)
    }

    /// Ask the backend for an authoritative audience size.
    pub async fn preview_segment(&self, rules: &[SegmentRule]) -> Result<SegmentEstimate> {
        let url = self.endpoint("preview-segment");
        let response = Self::check(
            self.request(Method::POST, &url)
                .json(&PreviewRequest { rules })
                .send()
                .await?,
            &url,
        )?;
        let body: PreviewResponse = Self::decode(response, &url).await?;
        Ok(body.into())
    }

    /// Probe backend reachability.
    pub async fn health(&self) -> Result<()> {
        let url = self.endpoint("health");
        Self::check(self.request(Method::GET, &url).send().await?, &url)?;
        Ok(())
    }
}
