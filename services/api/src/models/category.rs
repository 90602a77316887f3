//! Category models for the API service

use serde::{Deserialize, Serialize};

use super::present;

/// Category model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Minimal product listing embedded in a category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSummary {
    pub id: i64,
    pub name: String,
    pub price: String,
}

/// Response for a single category, including the products it owns
#[derive(Debug, Clone, Serialize)]
pub struct CategoryDetailResponse {
    #[serde(flatten)]
    pub category: Category,
    pub products: Vec<ProductSummary>,
}

/// Request for category creation
#[derive(Debug, Default, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Request for a partial category update
#[derive(Debug, Default, Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
}
