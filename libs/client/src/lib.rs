//! Client for the catalog API
//!
//! [`ApiClient`] wraps every endpoint and unwraps the response envelope.
//! The [`view`] module holds the list/form state driving the product and
//! category screens.
//!
//! # Example
//!
//! ```rust,no_run
//! use client::{ApiClient, ClientConfig};
//!
//! async fn example_usage() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = ApiClient::new(&ClientConfig::from_env()?)?;
//!
//!     for product in api.list_products().await? {
//!         println!("{} ({}): {}", product.name, product.category.name, product.price);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod view;

pub use crate::config::ClientConfig;
pub use api::ApiClient;
pub use error::{ClientError, ClientResult};
