//! Per-resource business rules used by the route handlers

pub mod category;
pub mod product;
pub mod user;

pub use category::CategoryService;
pub use product::ProductService;
pub use user::UserService;

pub const CATEGORY_NOT_FOUND: &str = "Category not found";
