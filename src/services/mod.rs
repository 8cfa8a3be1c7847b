/// Business logic services layer
use crate::clients::GraphqlClient;
use crate::domain::{LaunchRecord, LaunchStatus};
use crate::errors::ApiResult;

/// Launch listing service
pub struct LaunchService {
    client: GraphqlClient,
}

impl LaunchService {
    pub fn new(client: GraphqlClient) -> Self {
        Self { client }
    }

    /// List one page of launches of the given kind straight from upstream.
    pub async fn list(
        &self,
        kind: LaunchStatus,
        limit: u32,
        offset: Option<u64>,
    ) -> ApiResult<Vec<LaunchRecord>> {
        self.client.fetch_page(kind, limit, offset).await
    }
}
