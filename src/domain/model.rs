use serde::{Deserialize, Serialize};

/// Body of `POST /search-locality`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    pub name: String,
    pub city_id: String,
    #[serde(rename = "cityId")]
    pub city_code: String,
    pub city_name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: String,
    pub city_id: String,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Locality {
    pub id: String,
    /// Passed through untouched, usually `[longitude, latitude]`.
    pub center: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Features {
    pub city: City,
    pub locality: Locality,
    pub property_type: i64,
    pub bedrooms: i64,
    pub size: i64,
    pub furnishing_type: String,
}

/// Body of `POST /estimate-property-value`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimationRequest {
    pub features: Features,
    pub product: String,
}

/// Envelope posted to the upstream GraphQL gateway.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphQlRequest {
    pub query: &'static str,
    pub variables: serde_json::Value,
}
