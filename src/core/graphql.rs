use crate::domain::model::{City, EstimationRequest, Features, GraphQlRequest, SearchQuery};
use crate::utils::error::Result;
use serde::Serialize;

pub const LOCALITY_SEARCH_QUERY: &str = r#"
  query($searchQuery: SearchQueryInput!, $variant: String, $pageType: String) {
    chimeraTypeAhead(
      searchQuery: $searchQuery
      variant: $variant
      pageType: $pageType
    ) {
      results {
        id
        name
        displayType
        type
        subType
        url
        localityName
        center
      }
      defaultUrl
      isCrossCitySearch
    }
  }
"#;

pub const PRICE_ESTIMATION_MUTATION: &str = r#"
  mutation($features: EstimationModelInputV2!, $product: String!) {
    estimatedValueV2(features: $features, product: $product) {
      success
      value
      message
      steps {
        value
        hide
        numValue
      }
      actualValue
      pricePosition
    }
  }
"#;

const SEARCH_SERVICE: &str = "buy";
const SEARCH_CATEGORY: &str = "residential";
const SEARCH_VARIANT: &str = "localitySearch";
const SEARCH_PAGE_TYPE: &str = "PROPERTY_VALUATION";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchVariables<'a> {
    search_query: SearchQueryInput<'a>,
    variant: &'static str,
    page_type: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchQueryInput<'a> {
    name: &'a str,
    service: &'static str,
    category: &'static str,
    city: City,
    exclude_entities: Vec<serde_json::Value>,
}

#[derive(Serialize)]
struct EstimationVariables<'a> {
    features: &'a Features,
    product: &'a str,
}

/// Maps a flat search query onto the `chimeraTypeAhead` request.
pub fn build_locality_search(query: &SearchQuery) -> Result<GraphQlRequest> {
    let variables = SearchVariables {
        search_query: SearchQueryInput {
            name: &query.name,
            service: SEARCH_SERVICE,
            category: SEARCH_CATEGORY,
            city: City {
                id: query.city_id.clone(),
                city_id: query.city_code.clone(),
                name: query.city_name.clone(),
                url: query.url.clone(),
            },
            exclude_entities: Vec::new(),
        },
        variant: SEARCH_VARIANT,
        page_type: SEARCH_PAGE_TYPE,
    };

    Ok(GraphQlRequest {
        query: LOCALITY_SEARCH_QUERY,
        variables: serde_json::to_value(variables)?,
    })
}

/// Maps a valuation request onto the `estimatedValueV2` mutation.
pub fn build_price_estimation(request: &EstimationRequest) -> Result<GraphQlRequest> {
    let variables = EstimationVariables {
        features: &request.features,
        product: &request.product,
    };

    Ok(GraphQlRequest {
        query: PRICE_ESTIMATION_MUTATION,
        variables: serde_json::to_value(variables)?,
    })
}
