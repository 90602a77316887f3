//! Business rules for categories

use common::error::DatabaseError;
use tracing::info;

use crate::{
    error::{ApiError, ApiResult},
    models::category::{
        Category, CategoryDetailResponse, CreateCategoryRequest, UpdateCategoryRequest,
    },
    repositories::{CategoryRepository, ProductRepository},
    validation::{optional_text, require_text},
};

use super::CATEGORY_NOT_FOUND;

pub const CATEGORY_HAS_PRODUCTS: &str =
    "This category still has products, delete them before deleting the category";

/// Validation and persistence of categories
#[derive(Clone)]
pub struct CategoryService {
    categories: CategoryRepository,
    products: ProductRepository,
}

impl CategoryService {
    pub fn new(categories: CategoryRepository, products: ProductRepository) -> Self {
        Self {
            categories,
            products,
        }
    }

    pub async fn list(&self) -> ApiResult<Vec<Category>> {
        Ok(self.categories.find_all().await?)
    }

    /// Get a category together with the products it owns
    pub async fn get(&self, id: i64) -> ApiResult<CategoryDetailResponse> {
        let category = self.find(id).await?;
        let products = self.products.find_by_category(id).await?;

        Ok(CategoryDetailResponse { category, products })
    }

    pub async fn create(&self, payload: CreateCategoryRequest) -> ApiResult<Category> {
        let name = require_text(payload.name.as_deref(), "name").map_err(ApiError::Validation)?;

        info!("Creating category: {}", name);
        let id = self
            .categories
            .create(name, optional_text(payload.description).as_deref())
            .await?;

        self.find(id).await
    }

    /// Apply a partial update
    pub async fn update(&self, id: i64, payload: UpdateCategoryRequest) -> ApiResult<Category> {
        let mut category = self.find(id).await?;

        if let Some(name) = payload.name.as_deref() {
            category.name = require_text(Some(name), "name")
                .map_err(ApiError::Validation)?
                .to_string();
        }
        if let Some(description) = payload.description {
            category.description = optional_text(description);
        }

        info!("Updating category {}", id);
        if !self.categories.update(&category).await? {
            return Err(ApiError::NotFound(CATEGORY_NOT_FOUND.to_string()));
        }

        Ok(category)
    }

    /// Delete a category that owns no products
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.find(id).await?;

        if self.products.count_by_category(id).await? > 0 {
            return Err(ApiError::Conflict(CATEGORY_HAS_PRODUCTS.to_string()));
        }

        info!("Deleting category {}", id);
        match self.categories.delete(id).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(ApiError::NotFound(CATEGORY_NOT_FOUND.to_string())),
            // A product was attached after the dependents check.
            Err(DatabaseError::ForeignKeyViolation(_)) => {
                Err(ApiError::Conflict(CATEGORY_HAS_PRODUCTS.to_string()))
            }
            Err(error) => Err(error.into()),
        }
    }

    async fn find(&self, id: i64) -> ApiResult<Category> {
        self.categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(CATEGORY_NOT_FOUND.to_string()))
    }
}
