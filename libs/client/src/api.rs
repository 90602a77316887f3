//! HTTP client for the catalog API

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    config::ClientConfig,
    error::{ClientError, ClientResult},
    models::{
        Category, CategoryChanges, CategoryDetail, CategoryInput, Envelope, Product,
        ProductChanges, ProductInput, User, UserChanges, UserInput,
    },
};

/// One method per API endpoint, each returning the envelope's `data`
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("catalog-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn list_products(&self) -> ClientResult<Vec<Product>> {
        self.fetch(self.client.get(self.endpoint("/api/products")))
            .await
    }

    pub async fn list_products_by_category(&self, category_id: i64) -> ClientResult<Vec<Product>> {
        let request = self
            .client
            .get(self.endpoint("/api/products"))
            .query(&[("category", category_id)]);

        self.fetch(request).await
    }

    pub async fn get_product(&self, id: i64) -> ClientResult<Product> {
        self.fetch(self.client.get(self.endpoint(&format!("/api/products/{id}"))))
            .await
    }

    pub async fn create_product(&self, input: &ProductInput) -> ClientResult<Product> {
        let request = self.client.post(self.endpoint("/api/products")).json(input);

        self.fetch(request).await
    }

    pub async fn update_product(&self, id: i64, changes: &ProductChanges) -> ClientResult<Product> {
        let request = self
            .client
            .put(self.endpoint(&format!("/api/products/{id}")))
            .json(changes);

        self.fetch(request).await
    }

    pub async fn delete_product(&self, id: i64) -> ClientResult<()> {
        self.execute(self.client.delete(self.endpoint(&format!("/api/products/{id}"))))
            .await
    }

    pub async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        self.fetch(self.client.get(self.endpoint("/api/categories")))
            .await
    }

    pub async fn get_category(&self, id: i64) -> ClientResult<CategoryDetail> {
        self.fetch(self.client.get(self.endpoint(&format!("/api/categories/{id}"))))
            .await
    }

    pub async fn create_category(&self, input: &CategoryInput) -> ClientResult<Category> {
        let request = self
            .client
            .post(self.endpoint("/api/categories"))
            .json(input);

        self.fetch(request).await
    }

    pub async fn update_category(
        &self,
        id: i64,
        changes: &CategoryChanges,
    ) -> ClientResult<Category> {
        let request = self
            .client
            .put(self.endpoint(&format!("/api/categories/{id}")))
            .json(changes);

        self.fetch(request).await
    }

    pub async fn delete_category(&self, id: i64) -> ClientResult<()> {
        self.execute(self.client.delete(self.endpoint(&format!("/api/categories/{id}"))))
            .await
    }

    pub async fn list_users(&self) -> ClientResult<Vec<User>> {
        self.fetch(self.client.get(self.endpoint("/users"))).await
    }

    pub async fn get_user(&self, id: i64) -> ClientResult<User> {
        self.fetch(self.client.get(self.endpoint(&format!("/users/{id}"))))
            .await
    }

    pub async fn create_user(&self, input: &UserInput) -> ClientResult<User> {
        self.fetch(self.client.post(self.endpoint("/users")).json(input))
            .await
    }

    pub async fn update_user(&self, id: i64, changes: &UserChanges) -> ClientResult<User> {
        let request = self
            .client
            .put(self.endpoint(&format!("/users/{id}")))
            .json(changes);

        self.fetch(request).await
    }

    pub async fn delete_user(&self, id: i64) -> ClientResult<()> {
        self.execute(self.client.delete(self.endpoint(&format!("/users/{id}"))))
            .await
    }

    /// Send a request and return the `data` of its envelope
    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        self.send::<T>(request)
            .await?
            .data
            .ok_or(ClientError::MissingData)
    }

    /// Send a request whose envelope carries only a message
    async fn execute(&self, request: RequestBuilder) -> ClientResult<()> {
        self.send::<Value>(request).await.map(|_| ())
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<Envelope<T>> {
        let response = request.send().await?;
        let status = response.status();
        debug!("{} {}", status, response.url());

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<Envelope<Value>>(&body)
                .ok()
                .and_then(|envelope| envelope.message)
                .unwrap_or(body);
            warn!("Catalog API answered {}: {}", status, message);

            return Err(ClientError::Api { status, message });
        }

        Ok(response.json::<Envelope<T>>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let client = ApiClient::new(&ClientConfig::new("http://localhost:8000/")).unwrap();

        assert_eq!(
            client.endpoint("/api/products"),
            "http://localhost:8000/api/products"
        );
    }
}
