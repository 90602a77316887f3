//! Category list screen

use crate::{
    api::ApiClient,
    models::{Category, CategoryChanges, CategoryInput},
};

use super::{Flash, FormMode, FormState, LoadState};

pub const NAME_REQUIRED: &str = "Category name is required";
pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this category?";

pub struct CategoryScreen {
    api: ApiClient,
    pub categories: Vec<Category>,
    pub form: FormState,
    pub draft: CategoryInput,
    pub load: LoadState,
    pub saving: bool,
    pub error: Option<String>,
    pub success: Flash,
}

impl CategoryScreen {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            categories: Vec::new(),
            form: FormState::Closed,
            draft: CategoryInput::default(),
            load: LoadState::Idle,
            saving: false,
            error: None,
            success: Flash::default(),
        }
    }

    pub async fn load_categories(&mut self) {
        self.load = LoadState::Loading;

        match self.api.list_categories().await {
            Ok(categories) => {
                self.categories = categories;
                self.load = LoadState::Loaded;
            }
            Err(e) => {
                let message = format!("Failed to load categories: {}", e.message());
                self.error = Some(message.clone());
                self.load = LoadState::LoadError(message);
            }
        }
    }

    pub fn open_create_form(&mut self) {
        self.form = FormState::Open(FormMode::Create);
        self.draft = CategoryInput::default();
    }

    pub fn open_edit_form(&mut self, category: &Category) {
        self.form = FormState::Open(FormMode::Edit(category.id));
        self.draft = CategoryInput::from(category);
    }

    pub fn close_form(&mut self) {
        self.form = FormState::Closed;
        self.draft = CategoryInput::default();
    }

    /// Submit the form; returns whether the category was saved
    pub async fn save(&mut self) -> bool {
        let FormState::Open(mode) = self.form else {
            return false;
        };

        if self.draft.name.trim().is_empty() {
            self.error = Some(NAME_REQUIRED.to_string());
            return false;
        }

        self.saving = true;
        let result = match mode {
            FormMode::Create => self
                .api
                .create_category(&self.draft)
                .await
                .map(|_| "Category created")
                .map_err(|e| format!("Failed to create category: {}", e.message())),
            FormMode::Edit(id) => self
                .api
                .update_category(id, &CategoryChanges::from(&self.draft))
                .await
                .map(|_| "Category updated")
                .map_err(|e| format!("Failed to update category: {}", e.message())),
        };
        self.saving = false;

        match result {
            Ok(message) => {
                self.success.show(message);
                self.close_form();
                self.load_categories().await;
                true
            }
            Err(message) => {
                self.error = Some(message);
                false
            }
        }
    }

    /// Delete after `confirm` accepts the prompt; a category that still has
    /// products is refused by the server and its message lands in `error`
    pub async fn delete(&mut self, id: i64, confirm: impl FnOnce(&str) -> bool) -> bool {
        if !confirm(CONFIRM_DELETE) {
            return false;
        }

        match self.api.delete_category(id).await {
            Ok(()) => {
                self.success.show("Category deleted");
                self.load_categories().await;
                true
            }
            Err(e) => {
                self.error = Some(format!("Failed to delete category: {}", e.message()));
                false
            }
        }
    }
}
