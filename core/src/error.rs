// catalog_seed/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
  #[error("Step not found: {step_name}")]
  StepNotFound { step_name: String },

  #[error("Handler missing for non-optional step: {step_name}")]
  HandlerMissing { step_name: String },

  #[error("Not enough users with a valid id: found {found}, need at least {required}")]
  InsufficientUsers { found: usize, required: usize },

  #[error("Not enough categories with a valid id: found {found}, need at least {required}")]
  InsufficientCategories { found: usize, required: usize },

  #[error("The API does not accept 'categoryIds' when creating a product: {detail}")]
  ManyToManyUnsupported { detail: String },

  #[error("Product {product_id} was created but exposes {found} distinct categories (need {required})")]
  CategoriesNotPersisted {
    product_id: i64,
    found: usize,
    required: usize,
  },

  #[error("Only {created} of {target} products were created and verified ({failures} failures)")]
  TargetShortfall {
    created: usize,
    target: usize,
    failures: usize,
  },

  #[error("Invalid seeding configuration: {0}")]
  Config(String),

  #[error("Failed to build the HTTP client. Source: {0}")]
  Client(#[from] reqwest::Error),

  #[error("Error in a step handler. Source: {source}")]
  HandlerError {
    #[source]
    source: AnyhowError,
  },
}

impl SeedError {
  /// Operator-facing hint printed next to fatal errors.
  pub fn remediation(&self) -> Option<&'static str> {
    match self {
      SeedError::InsufficientUsers { .. } => {
        Some("Check that GET/POST /api/users return user objects carrying an integer 'id'.")
      }
      SeedError::InsufficientCategories { .. } => {
        Some("Check that GET /api/categories lists category objects carrying an integer 'id'.")
      }
      SeedError::ManyToManyUnsupported { .. } | SeedError::CategoriesNotPersisted { .. } => Some(
        "Implement many-to-many category assignment on product creation: POST /api/products { ..., \"categoryIds\": [1, 2] }",
      ),
      SeedError::TargetShortfall { .. } => {
        Some("Review the API logs for rejected products, or increase the category pool and check the products endpoint.")
      }
      _ => None,
    }
  }
}

impl From<AnyhowError> for SeedError {
  fn from(err: AnyhowError) -> Self {
    // Handlers that bubbled a SeedError through anyhow get it back unwrapped.
    match err.downcast::<SeedError>() {
      Ok(seed_err) => seed_err,
      Err(other) => SeedError::HandlerError { source: other },
    }
  }
}

pub type SeedResult<T, E = SeedError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn anyhow_round_trip_keeps_seed_error_variant() {
    let wrapped = anyhow::Error::new(SeedError::InsufficientUsers { found: 2, required: 5 });
    match SeedError::from(wrapped) {
      SeedError::InsufficientUsers { found, required } => assert_eq!((found, required), (2, 5)),
      other => panic!("expected InsufficientUsers, got {other:?}"),
    }
  }

  #[test]
  fn foreign_anyhow_errors_become_handler_errors() {
    let err = SeedError::from(anyhow::anyhow!("boom"));
    assert!(matches!(err, SeedError::HandlerError { .. }));
    assert!(err.remediation().is_none());
  }

  #[test]
  fn fatal_preconditions_carry_a_hint() {
    let err = SeedError::ManyToManyUnsupported {
      detail: "no id".to_string(),
    };
    assert!(err.remediation().unwrap().contains("categoryIds"));
  }
}
