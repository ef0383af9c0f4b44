// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper.

use async_trait::async_trait;
use catalog_seed::models::{NewCategory, NewProduct, NewUser};
use catalog_seed::{CatalogApi, ContextData, PipelineControl, SeedConfig, SeedError};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;
use tracing::Level;

// --- Pipeline test context ---
#[derive(Clone, Debug, Default)]
pub struct TestContext {
  pub counter: i32,
  pub message: String,
  pub steps_executed: Vec<String>,
  pub should_stop_at: Option<String>,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TestError {
  #[error("Seed framework error: {0}")]
  Seed(String),

  #[error("Test handler failed: {0}")]
  Handler(String),
}

impl From<SeedError> for TestError {
  fn from(se: SeedError) -> Self {
    TestError::Seed(format!("{:?}", se))
  }
}

pub fn create_simple_handler(
  step_name: &'static str,
  message_to_append: &'static str,
) -> catalog_seed::Handler<TestContext, TestError> {
  Box::new(move |ctx: ContextData<TestContext>| {
    Box::pin(async move {
      let mut guard = ctx.write();
      guard.counter += 1;
      guard.message.push_str(message_to_append);
      guard.steps_executed.push(step_name.to_string());
      if guard.should_stop_at.as_deref() == Some(step_name) {
        return Ok(PipelineControl::Stop);
      }
      Ok(PipelineControl::Continue)
    })
  })
}

pub fn create_failing_handler(
  step_name: &'static str,
  error_message: &'static str,
) -> catalog_seed::Handler<TestContext, TestError> {
  Box::new(move |ctx: ContextData<TestContext>| {
    Box::pin(async move {
      ctx.write().steps_executed.push(step_name.to_string());
      Err(TestError::Handler(error_message.to_string()))
    })
  })
}

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

/// Config for in-memory runs: no pauses, fixed RNG seed.
pub fn fast_config() -> SeedConfig {
  SeedConfig {
    base_url: "http://catalog.test".to_string(),
    retry_pause: Duration::ZERO,
    category_pause: Duration::ZERO,
    rng_seed: Some(42),
    ..SeedConfig::default()
  }
}

// --- In-memory catalog service ---

/// How the fake renders a product's categories.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryShape {
  #[default]
  IdList,
  Objects,
  Single,
}

#[derive(Clone, Debug, Default)]
pub struct FakeBehavior {
  pub shape: CategoryShape,
  /// Accepts products but stores no categories.
  pub ignore_category_ids: bool,
  /// Answers 400 to any product carrying `categoryIds`.
  pub reject_category_ids: bool,
  /// Stores only the first submitted category.
  pub keep_only_first_category: bool,
  /// Fails the first N attempts of every product except the probe (`#0`).
  pub flaky_attempts: usize,
  /// Rejects products once this many exist.
  pub product_cap: Option<usize>,
  /// Lists and creates users without an `id` field.
  pub users_without_ids: bool,
  pub reject_categories: bool,
  /// `fetch_product` always fails.
  pub fetch_fails: bool,
  /// Stored price is overwritten with this value.
  pub stored_price_override: Option<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StoredProduct {
  pub id: i64,
  pub name: String,
  pub price: f64,
  pub user_id: i64,
  pub category_ids: Vec<i64>,
}

#[derive(Default)]
struct FakeState {
  users: Vec<Value>,
  categories: Vec<Value>,
  products: BTreeMap<i64, StoredProduct>,
  next_id: i64,
  user_posts: usize,
  category_posts: usize,
  product_posts: usize,
  attempts_by_name: HashMap<String, usize>,
}

impl FakeState {
  fn next_id(&mut self) -> i64 {
    self.next_id += 1;
    self.next_id
  }
}

pub struct FakeCatalog {
  behavior: FakeBehavior,
  state: Mutex<FakeState>,
}

impl FakeCatalog {
  pub fn new(behavior: FakeBehavior) -> Self {
    Self {
      behavior,
      state: Mutex::new(FakeState::default()),
    }
  }

  pub fn empty() -> Self {
    Self::new(FakeBehavior::default())
  }

  /// Pre-populates users and categories as if created by an earlier run.
  pub fn with_existing(self, users: usize, categories: usize) -> Self {
    {
      let mut state = self.state.lock();
      for i in 0..users {
        let id = state.next_id();
        state.users.push(json!({"id": id, "name": format!("Existing {i}"), "email": format!("existing{i}@test.com")}));
      }
      for i in 0..categories {
        let id = state.next_id();
        state.categories.push(json!({"id": id, "name": format!("Existing category {i}"), "description": "existing"}));
      }
    }
    self
  }

  pub fn user_posts(&self) -> usize {
    self.state.lock().user_posts
  }

  pub fn category_posts(&self) -> usize {
    self.state.lock().category_posts
  }

  pub fn product_posts(&self) -> usize {
    self.state.lock().product_posts
  }

  pub fn user_ids(&self) -> Vec<i64> {
    self.state.lock().users.iter().filter_map(|u| u["id"].as_i64()).collect()
  }

  pub fn products(&self) -> Vec<StoredProduct> {
    self.state.lock().products.values().cloned().collect()
  }

  fn render(&self, product: &StoredProduct) -> Value {
    let mut body = json!({
      "id": product.id,
      "name": product.name,
      "price": product.price,
      "userId": product.user_id,
    });
    let categories = match self.behavior.shape {
      CategoryShape::IdList => ("categoryIds", json!(product.category_ids)),
      CategoryShape::Objects => (
        "categories",
        Value::Array(
          product
            .category_ids
            .iter()
            .map(|id| json!({"id": id, "name": format!("Category {id}")}))
            .collect(),
        ),
      ),
      CategoryShape::Single => ("categoryId", json!(product.category_ids.first())),
    };
    body[categories.0] = categories.1;
    body
  }
}

#[async_trait]
impl CatalogApi for FakeCatalog {
  async fn list_users(&self) -> Vec<Value> {
    self.state.lock().users.clone()
  }

  async fn create_user(&self, user: &NewUser) -> Option<Value> {
    let mut state = self.state.lock();
    state.user_posts += 1;
    if state.users.iter().any(|u| u["email"] == json!(user.email)) {
      return None;
    }
    let created = if self.behavior.users_without_ids {
      json!({"name": user.name, "email": user.email})
    } else {
      let id = state.next_id();
      json!({"id": id, "name": user.name, "email": user.email})
    };
    state.users.push(created.clone());
    Some(created)
  }

  async fn list_categories(&self) -> Vec<Value> {
    self.state.lock().categories.clone()
  }

  async fn create_category(&self, category: &NewCategory) -> bool {
    let mut state = self.state.lock();
    state.category_posts += 1;
    if self.behavior.reject_categories {
      return false;
    }
    let id = state.next_id();
    state
      .categories
      .push(json!({"id": id, "name": category.name, "description": category.description}));
    true
  }

  async fn create_product(&self, product: &NewProduct) -> Option<Value> {
    let stored = {
      let mut state = self.state.lock();
      state.product_posts += 1;

      if self.behavior.reject_category_ids && !product.category_ids.is_empty() {
        return None;
      }
      if self.behavior.flaky_attempts > 0 && !product.name.ends_with(" #0") {
        let attempts = state.attempts_by_name.entry(product.name.clone()).or_default();
        *attempts += 1;
        if *attempts <= self.behavior.flaky_attempts {
          return None;
        }
      }
      if let Some(cap) = self.behavior.product_cap {
        if state.products.len() >= cap {
          return None;
        }
      }

      let category_ids = if self.behavior.ignore_category_ids {
        Vec::new()
      } else if self.behavior.keep_only_first_category {
        product.category_ids.iter().take(1).copied().collect()
      } else {
        product.category_ids.clone()
      };
      let id = state.next_id();
      let stored = StoredProduct {
        id,
        name: product.name.clone(),
        price: self.behavior.stored_price_override.unwrap_or(product.price),
        user_id: product.user_id,
        category_ids,
      };
      state.products.insert(id, stored.clone());
      stored
    };
    Some(self.render(&stored))
  }

  async fn fetch_product(&self, id: i64) -> Option<Value> {
    if self.behavior.fetch_fails {
      return None;
    }
    let stored = self.state.lock().products.get(&id).cloned()?;
    Some(self.render(&stored))
  }
}
