// catalog_seed/src/models/mod.rs

//! Request payloads sent to the catalog API.
//!
//! Responses are kept as `serde_json::Value`: the service's response shapes
//! are not trusted, and ids are pulled out with the `extract` helpers.

pub mod category;
pub mod product;
pub mod user;

pub use category::NewCategory;
pub use product::{NewProduct, ProductDraft};
pub use user::NewUser;
