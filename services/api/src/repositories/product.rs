//! Product repository for database operations

use chrono::NaiveDateTime;
use common::error::{DatabaseError, DatabaseResult};
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool, sqlite::SqliteRow};

use crate::models::{
    category::ProductSummary,
    product::{Product, ProductChanges, ProductFields},
};

const SELECT_PRODUCT: &str = r#"
    SELECT p.id, p.name, p.description, p.price, p.stock, p.category_id,
           c.name AS category_name, p.created_at
    FROM products p
    JOIN categories c ON c.id = p.category_id
"#;

/// Product repository for database operations
#[derive(Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Create a new product repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get all products, optionally only those of one category
    pub async fn find_all(&self, category_id: Option<i64>) -> DatabaseResult<Vec<Product>> {
        let sql = match category_id {
            Some(_) => format!("{SELECT_PRODUCT} WHERE p.category_id = ? ORDER BY p.id"),
            None => format!("{SELECT_PRODUCT} ORDER BY p.id"),
        };

        let mut query = sqlx::query::<Sqlite>(&sql);
        if let Some(category_id) = category_id {
            query = query.bind(category_id);
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(DatabaseError::Query)?;

        rows.iter()
            .map(product_from_row)
            .collect::<Result<_, _>>()
            .map_err(DatabaseError::Query)
    }

    /// Find a product by ID
    pub async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<Product>> {
        let sql = format!("{SELECT_PRODUCT} WHERE p.id = ?");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(DatabaseError::Query)?;

        row.as_ref()
            .map(product_from_row)
            .transpose()
            .map_err(DatabaseError::Query)
    }

    /// List the products that belong to a category
    pub async fn find_by_category(&self, category_id: i64) -> DatabaseResult<Vec<ProductSummary>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, price
            FROM products
            WHERE category_id = ?
            ORDER BY id
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        rows.iter()
            .map(|row| {
                Ok(ProductSummary {
                    id: row.try_get("id")?,
                    name: row.try_get("name")?,
                    price: row.try_get("price")?,
                })
            })
            .collect::<Result<_, sqlx::Error>>()
            .map_err(DatabaseError::Query)
    }

    /// Count the products that belong to a category
    pub async fn count_by_category(&self, category_id: i64) -> DatabaseResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products WHERE category_id = ?")
            .bind(category_id)
            .fetch_one(&self.pool)
            .await
            .map_err(DatabaseError::Query)
    }

    /// Insert a new product and return its ID
    pub async fn create(
        &self,
        fields: &ProductFields,
        created_at: NaiveDateTime,
    ) -> DatabaseResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO products (name, description, price, stock, category_id, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(&fields.price)
        .bind(fields.stock)
        .bind(fields.category_id)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        Ok(result.last_insert_rowid())
    }

    /// Write the supplied columns of a product
    ///
    /// Returns false when no product has the given ID. `changes` must not be
    /// empty.
    pub async fn update(&self, id: i64, changes: &ProductChanges) -> DatabaseResult<bool> {
        let mut builder = QueryBuilder::<Sqlite>::new("UPDATE products SET ");
        let mut columns = builder.separated(", ");
        if let Some(name) = &changes.name {
            columns.push("name = ").push_bind_unseparated(name.clone());
        }
        if let Some(description) = &changes.description {
            columns
                .push("description = ")
                .push_bind_unseparated(description.clone());
        }
        if let Some(price) = &changes.price {
            columns.push("price = ").push_bind_unseparated(price.clone());
        }
        if let Some(stock) = changes.stock {
            columns.push("stock = ").push_bind_unseparated(stock);
        }
        if let Some(category_id) = changes.category_id {
            columns
                .push("category_id = ")
                .push_bind_unseparated(category_id);
        }
        builder.push(" WHERE id = ").push_bind(id);

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::from_query)?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a product by ID
    pub async fn delete(&self, id: i64) -> DatabaseResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::Query)?;

        Ok(result.rows_affected() > 0)
    }
}

fn product_from_row(row: &SqliteRow) -> Result<Product, sqlx::Error> {
    Ok(Product {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        price: row.try_get("price")?,
        stock: row.try_get("stock")?,
        category_id: row.try_get("category_id")?,
        category_name: row.try_get("category_name")?,
        created_at: row.try_get("created_at")?,
    })
}
