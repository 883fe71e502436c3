use crate::domain::model::GraphQlRequest;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn bind_addr(&self) -> &str;
    fn search_endpoint(&self) -> &str;
    fn estimation_endpoint(&self) -> &str;
}

/// Sends one GraphQL request to an upstream endpoint.
///
/// Implementations return the decoded JSON body when the upstream answers
/// with status 200 and `RelayError::UpstreamStatus` for any other status.
#[async_trait]
pub trait GraphQlClient: Send + Sync {
    async fn execute(&self, endpoint: &str, request: &GraphQlRequest)
        -> Result<serde_json::Value>;
}
