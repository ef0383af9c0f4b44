// src/lib.rs

//! catalog_seed: fills a catalog REST API with verified synthetic data.
//!
//! A run is a pipeline of named steps over one shared `SeedRun` state:
//!  - `bootstrap_users`: make sure at least `min_users` users exist.
//!  - `bootstrap_categories`: top up the category pool, then re-list it for ids.
//!  - `probe_many_to_many`: create one product with two categories and check
//!    the service really stored both; abort otherwise.
//!  - `create_products`: create the rest of the target, each product retried
//!    and verified by reading it back.
//!  - `report_summary`: log the outcome and fail on a shortfall.
//!
//! The service is reached through the [`CatalogApi`] trait; [`HttpCatalogApi`]
//! is the reqwest implementation.

pub mod api;
pub mod bootstrap;
pub mod config;
pub mod core;
pub mod error;
pub mod extract;
pub mod generate;
pub mod http;
pub mod models;
pub mod pipeline;
pub mod probe;
pub mod products;
pub mod report;
pub mod seeding;

// --- Re-exports for the Public API ---

pub use crate::core::context::Handler;
pub use crate::core::context_data::ContextData;
pub use crate::core::control::{PipelineControl, PipelineResult};
pub use crate::core::step::StepDef;

pub use crate::pipeline::definition::Pipeline;

pub use crate::api::{CatalogApi, HttpCatalogApi};
pub use crate::config::SeedConfig;
pub use crate::error::{SeedError, SeedResult};
pub use crate::extract::extract_category_ids;
pub use crate::products::{AttemptOutcome, BulkTally, ProductOutcome, Violation};
pub use crate::report::SeedSummary;
pub use crate::seeding::{build_seed_pipeline, run_seed, SeedRun};
