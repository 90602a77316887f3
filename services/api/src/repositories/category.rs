//! Category repository for database operations

use common::error::{DatabaseError, DatabaseResult};
use sqlx::{Row, SqlitePool};

use crate::models::category::Category;

/// Category repository for database operations
#[derive(Clone)]
pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    /// Create a new category repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get all categories
    pub async fn find_all(&self) -> DatabaseResult<Vec<Category>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, description
            FROM categories
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        let categories = rows
            .into_iter()
            .map(|row| Category {
                id: row.get("id"),
                name: row.get("name"),
                description: row.get("description"),
            })
            .collect();

        Ok(categories)
    }

    /// Find a category by ID
    pub async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<Category>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, description
            FROM categories
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(row.map(|row| Category {
            id: row.get("id"),
            name: row.get("name"),
            description: row.get("description"),
        }))
    }

    /// Insert a new category and return its ID
    pub async fn create(&self, name: &str, description: Option<&str>) -> DatabaseResult<i64> {
        let result = sqlx::query("INSERT INTO categories (name, description) VALUES (?, ?)")
            .bind(name)
            .bind(description)
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::from_query)?;

        Ok(result.last_insert_rowid())
    }

    /// Overwrite the name and description of a category
    pub async fn update(&self, category: &Category) -> DatabaseResult<bool> {
        let result = sqlx::query("UPDATE categories SET name = ?, description = ? WHERE id = ?")
            .bind(&category.name)
            .bind(&category.description)
            .bind(category.id)
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::from_query)?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a category by ID
    ///
    /// The schema restricts deleting a category that still owns products,
    /// callers should check for dependents first.
    pub async fn delete(&self, id: i64) -> DatabaseResult<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::from_query)?;

        Ok(result.rows_affected() > 0)
    }
}
