pub mod graphql;
pub mod relay;

pub use crate::domain::model::{EstimationRequest, GraphQlRequest, SearchQuery};
pub use crate::domain::ports::{ConfigProvider, GraphQlClient};
pub use crate::utils::error::Result;
