//! Product models for the API service

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{present, serialize_timestamp};

/// A product row joined with the name of its category
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Decimal with exactly two fractional digits, e.g. "12.50"
    pub price: String,
    pub stock: i64,
    pub category_id: i64,
    pub category_name: String,
    pub created_at: NaiveDateTime,
}

/// The fields written when inserting a product
#[derive(Debug, Clone)]
pub struct ProductFields {
    pub name: String,
    pub description: Option<String>,
    pub price: String,
    pub stock: i64,
    pub category_id: i64,
}

/// The columns a partial update writes; `None` leaves a column untouched
#[derive(Debug, Clone, Default)]
pub struct ProductChanges {
    pub name: Option<String>,
    /// `Some(None)` clears the description
    pub description: Option<Option<String>>,
    pub price: Option<String>,
    pub stock: Option<i64>,
    pub category_id: Option<i64>,
}

impl ProductChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.stock.is_none()
            && self.category_id.is_none()
    }
}

/// Category reference embedded in a product
#[derive(Debug, Clone, Serialize)]
pub struct CategoryRef {
    pub id: i64,
    pub name: String,
}

/// Response for product operations
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: String,
    pub stock: i64,
    pub category: CategoryRef,
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: NaiveDateTime,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
            category: CategoryRef {
                id: product.category_id,
                name: product.category_name,
            },
            created_at: product.created_at,
        }
    }
}

/// Request for product creation
///
/// Price and stock are kept as raw JSON so that both numbers and numeric
/// strings are accepted and a bad value can be reported as a validation
/// failure rather than a decoding failure.
#[derive(Debug, Default, Deserialize)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Value>,
    pub stock: Option<Value>,
    pub category_id: Option<i64>,
}

/// Request for a partial product update
///
/// `null` leaves a field untouched, except for `description` where an
/// explicit `null` clears the stored value.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    pub price: Option<Value>,
    pub stock: Option<Value>,
    pub category_id: Option<i64>,
}

/// Query parameters for product listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductQuery {
    /// Filter by category ID
    pub category: Option<String>,
}
