//! Wire models as seen by the client

use serde::{Deserialize, Serialize};

/// Response envelope shared by every endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub count: Option<usize>,
    pub message: Option<String>,
}

/// The `{id, name}` pair embedded in a product
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Decimal string with two fraction digits
    pub price: String,
    pub stock: i64,
    pub category: CategoryRef,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductSummary {
    pub id: i64,
    pub name: String,
    pub price: String,
}

/// A category together with its products
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryDetail {
    #[serde(flatten)]
    pub category: Category,
    pub products: Vec<ProductSummary>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: String,
}

/// Product form contents, sent as is on create
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: i64,
    pub category_id: Option<i64>,
}

impl From<&Product> for ProductInput {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: product.price.clone(),
            stock: product.stock,
            category_id: Some(product.category.id),
        }
    }
}

/// Partial product update; `None` fields are left out of the payload
///
/// `description: Some(None)` is sent as `null` and clears the description.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}

impl From<&ProductInput> for ProductChanges {
    fn from(input: &ProductInput) -> Self {
        Self {
            name: Some(input.name.clone()),
            description: Some(non_blank(&input.description)),
            price: Some(input.price.clone()),
            stock: Some(input.stock),
            category_id: input.category_id,
        }
    }
}

/// Category form contents
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryInput {
    pub name: String,
    pub description: String,
}

impl From<&Category> for CategoryInput {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
}

impl From<&CategoryInput> for CategoryChanges {
    fn from(input: &CategoryInput) -> Self {
        Self {
            name: Some(input.name.clone()),
            description: Some(non_blank(&input.description)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserInput {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

fn non_blank(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
