use crate::core::graphql::{build_locality_search, build_price_estimation};
use crate::core::{ConfigProvider, EstimationRequest, GraphQlClient, SearchQuery};
use crate::utils::error::Result;
use std::sync::Arc;

/// Turns inbound requests into upstream GraphQL calls.
///
/// Holds no per-request state; one instance is shared by every handler.
pub struct Relay {
    client: Arc<dyn GraphQlClient>,
    search_endpoint: String,
    estimation_endpoint: String,
}

impl Relay {
    pub fn new(client: Arc<dyn GraphQlClient>, config: &impl ConfigProvider) -> Self {
        Self {
            client,
            search_endpoint: config.search_endpoint().to_string(),
            estimation_endpoint: config.estimation_endpoint().to_string(),
        }
    }

    pub async fn search_locality(&self, query: &SearchQuery) -> Result<serde_json::Value> {
        let payload = build_locality_search(query)?;
        tracing::debug!("Searching localities for '{}' in {}", query.name, query.city_name);
        self.client.execute(&self.search_endpoint, &payload).await
    }

    pub async fn estimate_property_value(
        &self,
        request: &EstimationRequest,
    ) -> Result<serde_json::Value> {
        let payload = build_price_estimation(request)?;
        tracing::debug!(
            "Estimating value for locality {} ({} bedrooms, size {})",
            request.features.locality.id,
            request.features.bedrooms,
            request.features.size
        );
        self.client.execute(&self.estimation_endpoint, &payload).await
    }
}
