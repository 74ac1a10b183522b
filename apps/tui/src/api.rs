//! Read contract for a solar data backend.
//!
//! The dashboard only talks to [`SolarApi`]. [`StaticSolarApi`] answers from
//! the built-in catalog; a networked client can slot in behind the same trait.

use crate::catalog::{find_region, MONTHLY_DATA, REGIONS};
use crate::domain::{ComparisonData, MonthlyData, Region};
use crate::metrics::comparison_data;
use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "/api";

pub const REGIONS_ENDPOINT: &str = "/solar/regions";
pub const MONTHLY_ENDPOINT: &str = "/solar/monthly";
pub const COMPARISON_ENDPOINT: &str = "/solar/comparison";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub status: u16,
}

impl<T> ApiResponse<T> {
    pub const fn ok(data: T) -> Self {
        Self {
            data,
            message: None,
            status: 200,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },
    #[error("request failed ({status}): {message}")]
    Request { status: u16, message: String },
    #[error("network error occurred")]
    Network,
}

impl ApiError {
    pub const fn status(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Request { status, .. } => *status,
            Self::Network => 0,
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, ApiError>;

pub fn region_endpoint(id: &str) -> String {
    format!("{REGIONS_ENDPOINT}/{}", urlencoding::encode(id))
}

pub fn monthly_endpoint(region: Option<&str>) -> String {
    region.map_or_else(
        || MONTHLY_ENDPOINT.to_string(),
        |id| format!("{MONTHLY_ENDPOINT}?region={}", urlencoding::encode(id)),
    )
}

/// Joins an endpoint path onto a base URL without doubling the slash.
pub fn endpoint_url(base_url: &str, endpoint: &str) -> String {
    format!("{}{endpoint}", base_url.trim_end_matches('/'))
}

#[allow(async_fn_in_trait)]
pub trait SolarApi {
    async fn regions(&self) -> ApiResult<Vec<Region>>;

    async fn region(&self, id: &str) -> ApiResult<Region>;

    /// National monthly series, optionally scoped to one region.
    async fn monthly(&self, region: Option<&str>) -> ApiResult<Vec<MonthlyData>>;

    async fn comparison(&self) -> ApiResult<Vec<ComparisonData>>;
}

#[derive(Debug, Clone, Default)]
pub struct StaticSolarApi {
    base_url: String,
}

impl StaticSolarApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        if self.base_url.is_empty() {
            DEFAULT_BASE_URL
        } else {
            &self.base_url
        }
    }

    fn trace(&self, endpoint: &str) {
        tracing::debug!(url = %endpoint_url(self.base_url(), endpoint), "serving from built-in catalog");
    }
}

impl SolarApi for StaticSolarApi {
    async fn regions(&self) -> ApiResult<Vec<Region>> {
        self.trace(REGIONS_ENDPOINT);
        Ok(ApiResponse::ok(REGIONS.to_vec()))
    }

    async fn region(&self, id: &str) -> ApiResult<Region> {
        self.trace(&region_endpoint(id));
        find_region(id)
            .copied()
            .map(ApiResponse::ok)
            .ok_or_else(|| ApiError::NotFound {
                resource: "region",
                id: id.to_string(),
            })
    }

    async fn monthly(&self, region: Option<&str>) -> ApiResult<Vec<MonthlyData>> {
        self.trace(&monthly_endpoint(region));
        match region {
            Some(id) if find_region(id).is_none() => Err(ApiError::NotFound {
                resource: "region",
                id: id.to_string(),
            }),
            Some(_) => Ok(ApiResponse {
                data: MONTHLY_DATA.to_vec(),
                message: Some("regional series unavailable, national averages returned".to_string()),
                status: 200,
            }),
            None => Ok(ApiResponse::ok(MONTHLY_DATA.to_vec())),
        }
    }

    async fn comparison(&self) -> ApiResult<Vec<ComparisonData>> {
        self.trace(COMPARISON_ENDPOINT);
        Ok(ApiResponse::ok(comparison_data(&REGIONS)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_match_backend_routes() {
        assert_eq!(region_endpoint("brest"), "/solar/regions/brest");
        assert_eq!(monthly_endpoint(None), "/solar/monthly");
        assert_eq!(monthly_endpoint(Some("gomel")), "/solar/monthly?region=gomel");
        assert_eq!(
            monthly_endpoint(Some("a&b c")),
            "/solar/monthly?region=a%26b%20c"
        );
        assert_eq!(region_endpoint("x/y"), "/solar/regions/x%2Fy");
        assert_eq!(
            endpoint_url("https://example.org/api/", REGIONS_ENDPOINT),
            "https://example.org/api/solar/regions"
        );
        assert_eq!(endpoint_url("/api", COMPARISON_ENDPOINT), "/api/solar/comparison");
    }

    #[test]
    fn error_statuses() {
        let missing = ApiError::NotFound {
            resource: "region",
            id: "kyiv".to_string(),
        };
        assert_eq!(missing.status(), 404);
        assert_eq!(missing.to_string(), "region not found: kyiv");
        assert_eq!(ApiError::Network.status(), 0);
        let failed = ApiError::Request {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(failed.status(), 500);
    }

    #[tokio::test]
    async fn regions_come_from_catalog() -> Result<(), Box<dyn std::error::Error>> {
        let api = StaticSolarApi::default();
        let response = api.regions().await?;
        assert_eq!(response.status, 200);
        assert_eq!(response.data.len(), 6);
        assert_eq!(response.data[0].id, "minsk");
        assert_eq!(api.base_url(), DEFAULT_BASE_URL);
        Ok(())
    }

    #[tokio::test]
    async fn region_detail_and_missing_region() -> Result<(), Box<dyn std::error::Error>> {
        let api = StaticSolarApi::new("http://localhost:8000/api");
        let brest = api.region("brest").await?;
        assert!((brest.data.solar_radiation - 1120.0).abs() < f64::EPSILON);

        let err = api.region("atlantis").await.unwrap_err();
        assert_eq!(err.status(), 404);
        Ok(())
    }

    #[tokio::test]
    async fn monthly_filter_requires_known_region() -> Result<(), Box<dyn std::error::Error>> {
        let api = StaticSolarApi::default();

        let national = api.monthly(None).await?;
        assert_eq!(national.data.len(), 12);
        assert!(national.message.is_none());

        let scoped = api.monthly(Some("mogilev")).await?;
        assert_eq!(scoped.data, national.data);
        assert!(scoped.message.is_some());

        assert!(matches!(
            api.monthly(Some("nowhere")).await,
            Err(ApiError::NotFound { .. })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn comparison_rows_follow_catalog_order() -> Result<(), Box<dyn std::error::Error>> {
        let api = StaticSolarApi::default();
        let rows = api.comparison().await?.data;
        let ids: Vec<_> = rows.iter().map(|row| row.region_id.as_str()).collect();
        assert_eq!(ids, ["minsk", "brest", "gomel", "grodno", "vitebsk", "mogilev"]);
        Ok(())
    }
}
