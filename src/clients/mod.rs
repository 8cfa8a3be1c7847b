/// External API clients module
use crate::controller::LaunchSource;
use crate::domain::{LaunchRecord, LaunchStatus};
use crate::errors::{ApiError, ApiResult, FetchError};
use crate::utils::page_offset;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{error, warn};

/// HTTP client wrapper with common configuration
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("spacex-launches-service/1.0")
            .build()?;
        Ok(Self { client })
    }

    pub fn get_client(&self) -> &Client {
        &self.client
    }
}

/// Selection set shared by all three launch queries.
const LAUNCH_FIELDS: &str = "id details launch_success launch_date_utc launch_year upcoming \
     mission_name rocket { rocket_name } links { flickr_images wikipedia video_link reddit_media }";

/// Render the GraphQL document for one query kind. The offset variable is
/// declared only when it will actually be sent.
fn build_query(kind: LaunchStatus, with_offset: bool) -> String {
    let field = kind.query_field();
    if with_offset {
        format!(
            "query LaunchList($limit: Int, $offset: Int) {{ \
             {field}(limit: $limit, offset: $offset) {{ {LAUNCH_FIELDS} }} }}"
        )
    } else {
        format!("query LaunchList($limit: Int) {{ {field}(limit: $limit) {{ {LAUNCH_FIELDS} }} }}")
    }
}

fn build_variables(limit: u32, offset: Option<u64>) -> Value {
    match offset {
        Some(offset) => json!({ "limit": limit, "offset": offset }),
        None => json!({ "limit": limit }),
    }
}

/// Pull the launch array out of a GraphQL response envelope. A missing or
/// null data field means "no records", not an error.
fn extract_records(mut body: Value, field: &str) -> ApiResult<Vec<LaunchRecord>> {
    match body.get_mut("data").and_then(|data| data.get_mut(field)) {
        Some(records) if !records.is_null() => Ok(serde_json::from_value(records.take())?),
        _ => {
            warn!("upstream response is missing data.{field}, treating as empty");
            Ok(Vec::new())
        }
    }
}

/// Client for the upstream launch-data GraphQL API
pub struct GraphqlClient {
    http: HttpClient,
    endpoint: String,
    upcoming_supports_offset: bool,
}

impl GraphqlClient {
    pub fn new(endpoint: String, upcoming_supports_offset: bool) -> ApiResult<Self> {
        Ok(Self {
            http: HttpClient::new()?,
            endpoint,
            upcoming_supports_offset,
        })
    }

    fn offset_supported(&self, kind: LaunchStatus) -> bool {
        match kind {
            LaunchStatus::Upcoming => self.upcoming_supports_offset,
            LaunchStatus::All | LaunchStatus::Previous => true,
        }
    }

    /// Fetch one page of launches for the given query kind. The offset is
    /// dropped from the variables when the query shape does not take one.
    pub async fn fetch_page(
        &self,
        kind: LaunchStatus,
        limit: u32,
        offset: Option<u64>,
    ) -> ApiResult<Vec<LaunchRecord>> {
        let offset = offset.filter(|_| self.offset_supported(kind));
        let body = json!({
            "query": build_query(kind, offset.is_some()),
            "variables": build_variables(limit, offset),
        });

        let resp = self
            .http
            .get_client()
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("upstream request failed: {e}");
                e
            })?;

        let status = resp.status();
        if !status.is_success() {
            error!("upstream returned status {status}");
            return Err(ApiError::UpstreamStatus(status));
        }

        let payload: Value = resp.json().await.map_err(|e| {
            error!("upstream response body unreadable: {e}");
            e
        })?;
        extract_records(payload, kind.query_field())
    }
}

/// REST client for the proxy's launch endpoints
pub struct LaunchApiClient {
    http: HttpClient,
    base_url: String,
}

impl LaunchApiClient {
    pub fn new(base_url: String) -> Result<Self, FetchError> {
        Ok(Self {
            http: HttpClient::new()?,
            base_url,
        })
    }

    /// Fetch one page, translating the 1-based page number into an offset.
    pub async fn fetch_page(
        &self,
        status: LaunchStatus,
        page_size: u32,
        page: u32,
    ) -> Result<Vec<LaunchRecord>, FetchError> {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            status.route_path()
        );
        let resp = self
            .http
            .get_client()
            .get(&url)
            .query(&[
                ("limit", u64::from(page_size)),
                ("offset", page_offset(page, page_size)),
            ])
            .send()
            .await
            .map_err(|e| {
                error!("launch API request failed: {e}");
                FetchError::Transport(e)
            })?;

        let status_code = resp.status();
        if !status_code.is_success() {
            error!("launch API returned status {status_code}");
            return Err(FetchError::Status(status_code));
        }

        Ok(resp.json().await?)
    }
}

impl LaunchSource for LaunchApiClient {
    async fn fetch_page(
        &self,
        status: LaunchStatus,
        page_size: u32,
        page: u32,
    ) -> Result<Vec<LaunchRecord>, FetchError> {
        LaunchApiClient::fetch_page(self, status, page_size, page).await
    }
}
