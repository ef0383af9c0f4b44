// catalog_seed/src/api.rs

//! The catalog service as seen by the seeder.

use crate::config::SeedConfig;
use crate::error::SeedResult;
use crate::http::{ApiClient, CREATED_STATUSES};
use crate::models::{NewCategory, NewProduct, NewUser};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

/// Operations the seeding steps need from the catalog service.
///
/// Every method reports failure as `None`, `false` or an empty list; none of
/// them returns an error.
#[async_trait]
pub trait CatalogApi: Send + Sync {
  async fn list_users(&self) -> Vec<Value>;

  /// The created user as returned by the service.
  async fn create_user(&self, user: &NewUser) -> Option<Value>;

  async fn list_categories(&self) -> Vec<Value>;

  /// Whether the service accepted the category. The response body is not
  /// reliable (some services answer with a plain string), so ids must come
  /// from `list_categories`.
  async fn create_category(&self, category: &NewCategory) -> bool;

  /// The created product as returned by the service, if it parsed.
  async fn create_product(&self, product: &NewProduct) -> Option<Value>;

  async fn fetch_product(&self, id: i64) -> Option<Value>;
}

/// `CatalogApi` over the REST endpoints `/api/users`, `/api/categories` and
/// `/api/products`.
pub struct HttpCatalogApi {
  client: ApiClient,
  config: SeedConfig,
}

impl HttpCatalogApi {
  pub fn new(cfg: &SeedConfig) -> SeedResult<Self> {
    Ok(Self {
      client: ApiClient::new(cfg)?,
      config: cfg.clone(),
    })
  }
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
  async fn list_users(&self) -> Vec<Value> {
    self.client.get_list(&self.config.users_endpoint()).await
  }

  async fn create_user(&self, user: &NewUser) -> Option<Value> {
    self
      .client
      .post_json(&self.config.users_endpoint(), user, CREATED_STATUSES)
      .await
      .and_then(|reply| reply.body)
  }

  async fn list_categories(&self) -> Vec<Value> {
    self.client.get_list(&self.config.categories_endpoint()).await
  }

  async fn create_category(&self, category: &NewCategory) -> bool {
    match self
      .client
      .post_json(&self.config.categories_endpoint(), category, CREATED_STATUSES)
      .await
    {
      Some(reply) => {
        debug!(status = %reply.status, name = %category.name, "Category accepted.");
        true
      }
      None => false,
    }
  }

  async fn create_product(&self, product: &NewProduct) -> Option<Value> {
    self
      .client
      .post_json(&self.config.products_endpoint(), product, CREATED_STATUSES)
      .await
      .and_then(|reply| reply.body)
  }

  async fn fetch_product(&self, id: i64) -> Option<Value> {
    self.client.get_json(&self.config.product_endpoint(id)).await
  }
}
