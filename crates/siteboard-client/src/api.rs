//! Report API client.

use std::future::Future;

use reqwest::Client;
use serde::de::DeserializeOwned;
use siteboard_common::config::DashboardConfig;
use siteboard_common::error::{Result, SiteboardError};
use siteboard_common::types::{AttendanceEntry, DeliveryEntry, HazardEntry, LogKind, SiteSnapshot};

use crate::error::FetchError;

/// Anything that can produce a full site snapshot.
///
/// The poller is generic over this so it can be driven without a network.
pub trait SnapshotSource: Send + Sync + 'static {
    /// Fetches all three categories; fails as a whole if any one fails.
    fn fetch_snapshot(
        &self,
    ) -> impl Future<Output = std::result::Result<SiteSnapshot, FetchError>> + Send;
}

/// HTTP client bound to one configured base endpoint.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: DashboardConfig,
}

impl ApiClient {
    /// Builds a client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &DashboardConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| SiteboardError::config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            config: config.clone(),
        })
    }

    /// Fetches the entries of one category, in server order.
    ///
    /// # Errors
    ///
    /// Returns a classified [`FetchError`] on transport failure, non-2xx
    /// status, or an undecodable body.
    pub async fn fetch_kind<T: DeserializeOwned>(
        &self,
        kind: LogKind,
    ) -> std::result::Result<Vec<T>, FetchError> {
        let base = self.config.base_endpoint();
        let url = self.config.endpoint(kind).map_err(|e| FetchError::Other {
            message: e.to_string(),
        })?;
        let endpoint = url.to_string();
        tracing::debug!(endpoint = %endpoint, "requesting");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::from_transport(base, &endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { endpoint, status });
        }

        response.json::<Vec<T>>().await.map_err(|e| FetchError::Other {
            message: format!("invalid {kind} response from {endpoint}: {e}"),
        })
    }

    /// Fetches hazard reports, in server order.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::fetch_kind`].
    pub async fn fetch_hazards(&self) -> std::result::Result<Vec<HazardEntry>, FetchError> {
        self.fetch_kind(LogKind::Hazard).await
    }

    /// Fetches attendance actions, in server order.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::fetch_kind`].
    pub async fn fetch_attendance(
        &self,
    ) -> std::result::Result<Vec<AttendanceEntry>, FetchError> {
        self.fetch_kind(LogKind::Attendance).await
    }

    /// Fetches delivery confirmations, in server order.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::fetch_kind`].
    pub async fn fetch_deliveries(&self) -> std::result::Result<Vec<DeliveryEntry>, FetchError> {
        self.fetch_kind(LogKind::Delivery).await
    }
}

impl SnapshotSource for ApiClient {
    async fn fetch_snapshot(&self) -> std::result::Result<SiteSnapshot, FetchError> {
        let (hazards, attendance, deliveries) = tokio::try_join!(
            self.fetch_hazards(),
            self.fetch_attendance(),
            self.fetch_deliveries(),
        )?;
        Ok(SiteSnapshot::from_server_order(hazards, attendance, deliveries))
    }
}
