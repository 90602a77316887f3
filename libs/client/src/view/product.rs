//! Product list screen

use tracing::warn;

use crate::{
    api::ApiClient,
    models::{Category, Product, ProductChanges, ProductInput},
};

use super::{Flash, FormMode, FormState, LoadState};

pub const NAME_AND_CATEGORY_REQUIRED: &str = "Product name and category are required";
pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this product?";

pub struct ProductScreen {
    api: ApiClient,
    pub products: Vec<Product>,
    /// Choices for the category selector and filter
    pub categories: Vec<Category>,
    pub selected_category: Option<i64>,
    pub form: FormState,
    pub draft: ProductInput,
    pub load: LoadState,
    pub saving: bool,
    pub error: Option<String>,
    pub success: Flash,
}

impl ProductScreen {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            products: Vec::new(),
            categories: Vec::new(),
            selected_category: None,
            form: FormState::Closed,
            draft: ProductInput::default(),
            load: LoadState::Idle,
            saving: false,
            error: None,
            success: Flash::default(),
        }
    }

    pub async fn init(&mut self) {
        self.load_products().await;
        self.load_categories().await;
    }

    /// Reload the list, honouring the category filter
    pub async fn load_products(&mut self) {
        self.load = LoadState::Loading;
        self.error = None;

        let result = match self.selected_category {
            Some(category_id) => self.api.list_products_by_category(category_id).await,
            None => self.api.list_products().await,
        };

        match result {
            Ok(products) => {
                self.products = products;
                self.load = LoadState::Loaded;
            }
            Err(e) => {
                let message = format!("Failed to load products: {}", e.message());
                self.error = Some(message.clone());
                self.load = LoadState::LoadError(message);
            }
        }
    }

    /// Categories only feed the selectors, a failure leaves them as they were
    pub async fn load_categories(&mut self) {
        match self.api.list_categories().await {
            Ok(categories) => self.categories = categories,
            Err(e) => warn!("Failed to load categories: {}", e),
        }
    }

    pub async fn filter_by_category(&mut self, category_id: i64) {
        self.selected_category = Some(category_id);
        self.load_products().await;
    }

    pub async fn clear_filter(&mut self) {
        self.selected_category = None;
        self.load_products().await;
    }

    /// Open an empty form with the first category preselected
    pub fn open_create_form(&mut self) {
        self.form = FormState::Open(FormMode::Create);
        self.draft = ProductInput {
            price: "0".to_string(),
            category_id: self.categories.first().map(|category| category.id),
            ..Default::default()
        };
    }

    pub fn open_edit_form(&mut self, product: &Product) {
        self.form = FormState::Open(FormMode::Edit(product.id));
        self.draft = ProductInput::from(product);
    }

    pub fn close_form(&mut self) {
        self.form = FormState::Closed;
        self.draft = ProductInput::default();
    }

    /// Submit the form; returns whether the product was saved
    pub async fn save(&mut self) -> bool {
        let FormState::Open(mode) = self.form else {
            return false;
        };

        if self.draft.name.trim().is_empty() || self.draft.category_id.is_none() {
            self.error = Some(NAME_AND_CATEGORY_REQUIRED.to_string());
            return false;
        }

        self.saving = true;
        let result = match mode {
            FormMode::Create => self
                .api
                .create_product(&self.draft)
                .await
                .map(|_| "Product created")
                .map_err(|e| format!("Failed to create product: {}", e.message())),
            FormMode::Edit(id) => self
                .api
                .update_product(id, &ProductChanges::from(&self.draft))
                .await
                .map(|_| "Product updated")
                .map_err(|e| format!("Failed to update product: {}", e.message())),
        };
        self.saving = false;

        match result {
            Ok(message) => {
                self.success.show(message);
                self.close_form();
                self.load_products().await;
                true
            }
            Err(message) => {
                self.error = Some(message);
                false
            }
        }
    }

    /// Delete after `confirm` accepts the prompt; returns whether it was deleted
    pub async fn delete(&mut self, id: i64, confirm: impl FnOnce(&str) -> bool) -> bool {
        if !confirm(CONFIRM_DELETE) {
            return false;
        }

        match self.api.delete_product(id).await {
            Ok(()) => {
                self.success.show("Product deleted");
                self.load_products().await;
                true
            }
            Err(e) => {
                self.error = Some(format!("Failed to delete product: {}", e.message()));
                false
            }
        }
    }

    pub fn category_name(&self, category_id: i64) -> Option<&str> {
        self.categories
            .iter()
            .find(|category| category.id == category_id)
            .map(|category| category.name.as_str())
    }
}
