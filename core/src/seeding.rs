// catalog_seed/src/seeding.rs

//! The seeding run as a pipeline:
//! `bootstrap_users -> bootstrap_categories -> probe_many_to_many ->
//! create_products -> report_summary`.

use crate::api::CatalogApi;
use crate::bootstrap::{bootstrap_categories, bootstrap_users};
use crate::config::SeedConfig;
use crate::core::{ContextData, PipelineControl};
use crate::error::{SeedError, SeedResult};
use crate::generate::seed_tag;
use crate::pipeline::Pipeline;
use crate::probe::probe_many_to_many;
use crate::products::{bulk_create, BulkTally};
use crate::report::SeedSummary;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use tracing::info;

pub const STEP_BOOTSTRAP_USERS: &str = "bootstrap_users";
pub const STEP_BOOTSTRAP_CATEGORIES: &str = "bootstrap_categories";
pub const STEP_PROBE: &str = "probe_many_to_many";
pub const STEP_CREATE_PRODUCTS: &str = "create_products";
pub const STEP_REPORT: &str = "report_summary";

/// State shared by the seeding steps.
pub struct SeedRun {
  pub config: Arc<SeedConfig>,
  pub api: Arc<dyn CatalogApi>,
  pub rng: StdRng,
  /// Run tag stamped into every product name.
  pub tag: String,
  pub user_ids: Vec<i64>,
  pub category_ids: Vec<i64>,
  pub probe_id: Option<i64>,
  pub tally: BulkTally,
  pub summary: Option<SeedSummary>,
}

impl SeedRun {
  pub fn new(config: Arc<SeedConfig>, api: Arc<dyn CatalogApi>) -> Self {
    let rng = match config.rng_seed {
      Some(seed) => StdRng::seed_from_u64(seed),
      None => StdRng::from_entropy(),
    };
    Self {
      config,
      api,
      rng,
      tag: seed_tag(),
      user_ids: Vec::new(),
      category_ids: Vec::new(),
      probe_id: None,
      tally: BulkTally::default(),
      summary: None,
    }
  }

  /// Child generator for one step, so the master RNG is never borrowed across
  /// an await.
  fn fork_rng(&mut self) -> StdRng {
    StdRng::seed_from_u64(self.rng.gen())
  }
}

/// Builds the five-step seeding pipeline.
pub fn build_seed_pipeline() -> Pipeline<SeedRun, SeedError> {
  let mut pipeline = Pipeline::<SeedRun, SeedError>::new(&[
    (STEP_BOOTSTRAP_USERS, false, None),
    (STEP_BOOTSTRAP_CATEGORIES, false, None),
    (STEP_PROBE, false, None),
    (
      STEP_CREATE_PRODUCTS,
      false,
      // The probe already is product #1.
      Some(Arc::new(|ctx: ContextData<SeedRun>| ctx.read().config.target_products <= 1)),
    ),
    (STEP_REPORT, false, None),
  ]);

  pipeline.before_root(STEP_BOOTSTRAP_USERS, |ctx: ContextData<SeedRun>| async move {
    {
      let run = ctx.read();
      info!(
        base_url = %run.config.base_url,
        tag = %run.tag,
        target = run.config.target_products,
        "Seeding catalog."
      );
    }
    Ok::<_, SeedError>(PipelineControl::Continue)
  });

  pipeline.on_root(STEP_BOOTSTRAP_USERS, |ctx: ContextData<SeedRun>| async move {
    let (api, cfg) = {
      let run = ctx.read();
      (run.api.clone(), run.config.clone())
    };
    let user_ids = bootstrap_users(api.as_ref(), &cfg).await?;
    ctx.write().user_ids = user_ids;
    Ok::<_, SeedError>(PipelineControl::Continue)
  });

  pipeline.on_root(STEP_BOOTSTRAP_CATEGORIES, |ctx: ContextData<SeedRun>| async move {
    let (api, cfg, mut rng) = {
      let mut run = ctx.write();
      (run.api.clone(), run.config.clone(), run.fork_rng())
    };
    let category_ids = bootstrap_categories(api.as_ref(), &cfg, &mut rng).await?;
    ctx.write().category_ids = category_ids;
    Ok::<_, SeedError>(PipelineControl::Continue)
  });

  pipeline.on_root(STEP_PROBE, |ctx: ContextData<SeedRun>| async move {
    let (api, cfg, mut rng, tag, user_ids, category_ids) = {
      let mut run = ctx.write();
      (
        run.api.clone(),
        run.config.clone(),
        run.fork_rng(),
        run.tag.clone(),
        run.user_ids.clone(),
        run.category_ids.clone(),
      )
    };
    let probe_id = probe_many_to_many(api.as_ref(), &cfg, &mut rng, &user_ids, &category_ids, &tag).await?;
    ctx.write().probe_id = Some(probe_id);
    Ok::<_, SeedError>(PipelineControl::Continue)
  });

  // The probe product counts as the first created product.
  pipeline.after_root(STEP_PROBE, |ctx: ContextData<SeedRun>| async move {
    let mut run = ctx.write();
    if let Some(probe_id) = run.probe_id {
      run.tally.created_ids.push(probe_id);
    }
    Ok::<_, SeedError>(PipelineControl::Continue)
  });

  pipeline.on_root(STEP_CREATE_PRODUCTS, |ctx: ContextData<SeedRun>| async move {
    let (api, cfg, mut rng, tag, user_ids, category_ids, tally) = {
      let mut run = ctx.write();
      (
        run.api.clone(),
        run.config.clone(),
        run.fork_rng(),
        run.tag.clone(),
        run.user_ids.clone(),
        run.category_ids.clone(),
        std::mem::take(&mut run.tally),
      )
    };
    let tally = bulk_create(api.as_ref(), &cfg, &mut rng, &tag, &user_ids, &category_ids, tally).await;
    ctx.write().tally = tally;
    Ok::<_, SeedError>(PipelineControl::Continue)
  });

  pipeline.on_root(STEP_REPORT, |ctx: ContextData<SeedRun>| async move {
    let created = ctx.map_read(|run| &run.tally.created_ids).len();
    let (summary, cfg) = {
      let run = ctx.read();
      let summary = SeedSummary {
        tag: run.tag.clone(),
        target: run.config.target_products,
        created,
        failures: run.tally.failures,
        users: run.user_ids.len(),
        categories: run.category_ids.len(),
      };
      (summary, run.config.clone())
    };
    summary.log(&cfg);
    let verdict = summary.ensure_target_met();
    ctx.write().summary = Some(summary);
    verdict?;
    Ok::<_, SeedError>(PipelineControl::Continue)
  });

  pipeline
}

/// Validates `config`, runs the seeding pipeline against `api` and returns
/// the summary of a run that met its target.
pub async fn run_seed(config: Arc<SeedConfig>, api: Arc<dyn CatalogApi>) -> SeedResult<SeedSummary> {
  config.validate()?;
  let ctx = ContextData::new(SeedRun::new(config, api));
  build_seed_pipeline().run(ctx.clone()).await?;

  let summary = ctx.write().summary.take();
  summary.ok_or_else(|| SeedError::HandlerError {
    source: anyhow::anyhow!("seeding pipeline ended before '{}' produced a summary", STEP_REPORT),
  })
}
