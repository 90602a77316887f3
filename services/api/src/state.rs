//! Application state shared across handlers

use sqlx::SqlitePool;

use crate::{
    repositories::{CategoryRepository, ProductRepository, UserRepository},
    services::{CategoryService, ProductService, UserService},
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub product_service: ProductService,
    pub category_service: CategoryService,
    pub user_service: UserService,
}

impl AppState {
    /// Wire repositories and services on top of a connection pool
    pub fn new(pool: SqlitePool) -> Self {
        let product_repository = ProductRepository::new(pool.clone());
        let category_repository = CategoryRepository::new(pool.clone());
        let user_repository = UserRepository::new(pool.clone());

        Self {
            product_service: ProductService::new(
                product_repository.clone(),
                category_repository.clone(),
            ),
            category_service: CategoryService::new(category_repository, product_repository),
            user_service: UserService::new(user_repository),
            db_pool: pool,
        }
    }
}
