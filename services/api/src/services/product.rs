//! Business rules for products

use chrono::{SubsecRound, Utc};
use common::error::DatabaseError;
use tracing::info;

use crate::{
    error::{ApiError, ApiResult},
    models::{
        category::Category,
        product::{
            CreateProductRequest, Product, ProductChanges, ProductFields, ProductQuery,
            ProductResponse, UpdateProductRequest,
        },
    },
    repositories::{CategoryRepository, ProductRepository},
    validation::{optional_text, parse_price, parse_stock, require_text},
};

use super::CATEGORY_NOT_FOUND;

pub const PRODUCT_NOT_FOUND: &str = "Product not found";

/// Validation and persistence of products
#[derive(Clone)]
pub struct ProductService {
    products: ProductRepository,
    categories: CategoryRepository,
}

impl ProductService {
    pub fn new(products: ProductRepository, categories: CategoryRepository) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// List products, filtered by category when the query names one
    pub async fn list(&self, query: &ProductQuery) -> ApiResult<Vec<ProductResponse>> {
        let category_id = parse_category_filter(query.category.as_deref())?;
        let products = self.products.find_all(category_id).await?;

        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    pub async fn get(&self, id: i64) -> ApiResult<ProductResponse> {
        let product = self.find(id).await?;
        Ok(product.into())
    }

    /// Validate and persist a new product
    ///
    /// Checks run in a fixed order and the first failure is reported:
    /// required fields, category existence, price, stock.
    pub async fn create(&self, payload: CreateProductRequest) -> ApiResult<ProductResponse> {
        let name = require_text(payload.name.as_deref(), "name").map_err(ApiError::Validation)?;
        let price = payload
            .price
            .as_ref()
            .ok_or_else(|| ApiError::Validation("price is required".to_string()))?;
        let category_id = payload
            .category_id
            .ok_or_else(|| ApiError::Validation("category_id is required".to_string()))?;

        let category = self.resolve_category(category_id).await?;
        let price = parse_price(price).map_err(ApiError::Validation)?;
        let stock = match &payload.stock {
            Some(stock) => parse_stock(stock).map_err(ApiError::Validation)?,
            None => 0,
        };

        let fields = ProductFields {
            name: name.to_string(),
            description: optional_text(payload.description),
            price,
            stock,
            category_id: category.id,
        };

        info!("Creating product: {}", fields.name);
        let id = self
            .products
            .create(&fields, Utc::now().naive_utc().trunc_subsecs(0))
            .await
            .map_err(category_gone)?;

        self.reload(id).await
    }

    /// Apply a partial update
    ///
    /// Only the fields present in the payload are validated and written, so
    /// overlapping updates of different fields do not undo each other.
    pub async fn update(&self, id: i64, payload: UpdateProductRequest) -> ApiResult<ProductResponse> {
        self.find(id).await?;

        let mut changes = ProductChanges::default();
        if let Some(name) = payload.name.as_deref() {
            changes.name = Some(
                require_text(Some(name), "name")
                    .map_err(ApiError::Validation)?
                    .to_string(),
            );
        }
        if let Some(description) = payload.description {
            changes.description = Some(optional_text(description));
        }
        if let Some(price) = &payload.price {
            changes.price = Some(parse_price(price).map_err(ApiError::Validation)?);
        }
        if let Some(stock) = &payload.stock {
            changes.stock = Some(parse_stock(stock).map_err(ApiError::Validation)?);
        }
        if let Some(category_id) = payload.category_id {
            changes.category_id = Some(self.resolve_category(category_id).await?.id);
        }

        if !changes.is_empty() {
            info!("Updating product {}", id);
            let updated = self
                .products
                .update(id, &changes)
                .await
                .map_err(category_gone)?;
            if !updated {
                return Err(ApiError::NotFound(PRODUCT_NOT_FOUND.to_string()));
            }
        }

        self.get(id).await
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        info!("Deleting product {}", id);
        if self.products.delete(id).await? {
            Ok(())
        } else {
            Err(ApiError::NotFound(PRODUCT_NOT_FOUND.to_string()))
        }
    }

    async fn find(&self, id: i64) -> ApiResult<Product> {
        self.products
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(PRODUCT_NOT_FOUND.to_string()))
    }

    async fn reload(&self, id: i64) -> ApiResult<ProductResponse> {
        let product = self.products.find_by_id(id).await?.ok_or_else(|| {
            tracing::error!("Product {} vanished right after being written", id);
            ApiError::InternalServerError
        })?;

        Ok(product.into())
    }

    /// A category referenced from a product payload must exist, otherwise
    /// the payload is invalid.
    async fn resolve_category(&self, category_id: i64) -> ApiResult<Category> {
        self.categories
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| ApiError::Validation(CATEGORY_NOT_FOUND.to_string()))
    }
}

/// The category can be deleted between the existence check and the write.
fn category_gone(error: DatabaseError) -> ApiError {
    match error {
        DatabaseError::ForeignKeyViolation(_) => {
            ApiError::Validation(CATEGORY_NOT_FOUND.to_string())
        }
        error => error.into(),
    }
}

fn parse_category_filter(raw: Option<&str>) -> ApiResult<Option<i64>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ApiError::Validation("category must be an integer".to_string())),
    }
}
