// catalog_seed/src/models/user.rs

use serde::Serialize;

pub const SEED_USER_PASSWORD: &str = "SeedPassword123";

/// Body of `POST /api/users`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewUser {
  pub name: String,
  pub email: String,
  pub password: String,
}

impl NewUser {
  /// Seed user number `idx`. The nanosecond stamp keeps emails unique across
  /// runs, since the service enforces email uniqueness.
  pub fn seeded(idx: usize, stamp_nanos: i64) -> Self {
    Self {
      name: format!("Seed User {idx}"),
      email: format!("seed.user.{idx}.{stamp_nanos}@test.com"),
      password: SEED_USER_PASSWORD.to_string(),
    }
  }
}
