use crate::domain::model::GraphQlRequest;
use crate::domain::ports::GraphQlClient;
use crate::utils::error::{RelayError, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};

/// `GraphQlClient` backed by a shared reqwest connection pool.
#[derive(Debug, Clone, Default)]
pub struct HttpGraphQlClient {
    client: Client,
}

impl HttpGraphQlClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl GraphQlClient for HttpGraphQlClient {
    async fn execute(
        &self,
        endpoint: &str,
        request: &GraphQlRequest,
    ) -> Result<serde_json::Value> {
        tracing::debug!("Posting GraphQL request to: {}", endpoint);
        let response = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Upstream response status: {}", status);

        if status == StatusCode::OK {
            let body: serde_json::Value = response.json().await?;
            Ok(body)
        } else {
            let body = response.text().await?;
            tracing::warn!("Upstream rejected request with {}: {}", status, body);
            Err(RelayError::UpstreamStatus {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::graphql::LOCALITY_SEARCH_QUERY;
    use httpmock::prelude::*;
    use serde_json::json;

    fn request() -> GraphQlRequest {
        GraphQlRequest {
            query: LOCALITY_SEARCH_QUERY,
            variables: json!({"variant": "localitySearch"}),
        }
    }

    #[tokio::test]
    async fn test_ok_response_body_is_returned_unchanged() {
        let server = MockServer::start_async().await;
        let upstream_body = json!({
            "data": {"chimeraTypeAhead": {"results": [], "defaultUrl": null, "isCrossCitySearch": false}}
        });

        let api_mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/gql")
                    .header("content-type", "application/json")
                    .json_body(json!({
                        "query": LOCALITY_SEARCH_QUERY,
                        "variables": {"variant": "localitySearch"}
                    }));
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(upstream_body.clone());
            })
            .await;

        let client = HttpGraphQlClient::new();
        let result = client
            .execute(&server.url("/api/gql"), &request())
            .await
            .unwrap();

        api_mock.assert_async().await;
        assert_eq!(result, upstream_body);
    }

    #[tokio::test]
    async fn test_ok_response_keeps_upstream_key_order() {
        let server = MockServer::start_async().await;
        let upstream_text = r#"{"data":{"results":[{"name":"Kora","id":"1","center":[77.6,12.9]}]},"extensions":{}}"#;

        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/gql");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .body(upstream_text);
            })
            .await;

        let client = HttpGraphQlClient::new();
        let result = client
            .execute(&server.url("/api/gql"), &request())
            .await
            .unwrap();

        assert_eq!(serde_json::to_string(&result).unwrap(), upstream_text);
    }

    #[tokio::test]
    async fn test_non_ok_status_carries_status_and_body() {
        let server = MockServer::start_async().await;

        let api_mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/gql");
                then.status(429).body("slow down");
            })
            .await;

        let client = HttpGraphQlClient::new();
        let result = client.execute(&server.url("/api/gql"), &request()).await;

        api_mock.assert_async().await;
        match result {
            Err(RelayError::UpstreamStatus { status, body }) => {
                assert_eq!(status, 429);
                assert_eq!(body, "slow down");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_other_success_codes_are_errors() {
        let server = MockServer::start_async().await;

        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/gql");
                then.status(204);
            })
            .await;

        let client = HttpGraphQlClient::new();
        let result = client.execute(&server.url("/api/gql"), &request()).await;

        assert!(matches!(
            result,
            Err(RelayError::UpstreamStatus { status: 204, .. })
        ));
    }

    #[tokio::test]
    async fn test_ok_with_invalid_json_is_api_error() {
        let server = MockServer::start_async().await;

        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/gql");
                then.status(200).body("<html>maintenance</html>");
            })
            .await;

        let client = HttpGraphQlClient::new();
        let result = client.execute(&server.url("/api/gql"), &request()).await;

        assert!(matches!(result, Err(RelayError::ApiError(_))));
    }

    #[tokio::test]
    async fn test_query_string_in_endpoint_is_preserved() {
        let server = MockServer::start_async().await;

        let api_mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/gql/cache-first")
                    .query_param("apiName", "TYPE_AHEAD_API")
                    .query_param("isBot", "false");
                then.status(200).json_body(json!({"data": {}}));
            })
            .await;

        let client = HttpGraphQlClient::new();
        client
            .execute(
                &server.url("/api/gql/cache-first?apiName=TYPE_AHEAD_API&isBot=false"),
                &request(),
            )
            .await
            .unwrap();

        api_mock.assert_async().await;
    }
}
