// catalog_seeder/src/errors.rs

use catalog_seed::SeedError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Seeding Error: {source}")]
  Seed {
    #[from]
    source: SeedError,
  },

  #[error("Internal Error: {0}")]
  Internal(String),
}

impl AppError {
  /// Process exit status: 2 for configuration problems, 1 for anything else.
  pub fn exit_code(&self) -> u8 {
    match self {
      AppError::Config(_) | AppError::Seed {
        source: SeedError::Config(_),
      } => 2,
      AppError::Seed { .. } | AppError::Internal(_) => 1,
    }
  }

  pub fn remediation(&self) -> Option<&'static str> {
    match self {
      AppError::Seed { source } => source.remediation(),
      _ => None,
    }
  }
}

// Allow anyhow::Error at the top level; a wrapped SeedError keeps its variant.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    match err.downcast::<SeedError>() {
      Ok(source) => AppError::Seed { source },
      Err(other) => AppError::Internal(other.to_string()),
    }
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
