// tests/error_handling_tests.rs
mod common;
use catalog_seed::{ContextData, Pipeline, PipelineControl, PipelineResult, SeedError};
use common::*;
use serial_test::serial;

#[tokio::test]
#[serial]
async fn test_pipeline_with_seed_error_type() {
  setup_tracing();
  let mut pipeline = Pipeline::<TestContext, SeedError>::new(&[("task", false, None)]);

  pipeline.on_root("task", |ctx: ContextData<TestContext>| {
    Box::pin(async move {
      ctx.write().counter = 1;
      Ok::<PipelineControl, SeedError>(PipelineControl::Continue)
    })
  });

  let ctx = ContextData::new(TestContext::default());
  assert_eq!(pipeline.run(ctx.clone()).await.unwrap(), PipelineResult::Completed);
  assert_eq!(ctx.read().counter, 1);

  let mut failing_pipeline = Pipeline::<TestContext, SeedError>::new(&[("fail_task", false, None)]);
  failing_pipeline.on_root("fail_task", |_ctx| {
    Box::pin(async move { Err(SeedError::InsufficientCategories { found: 1, required: 2 }) })
  });
  match failing_pipeline.run(ContextData::new(TestContext::default())).await {
    Err(SeedError::InsufficientCategories { found, required }) => assert_eq!((found, required), (1, 2)),
    other => panic!("Expected InsufficientCategories, got {:?}", other),
  }
}

#[tokio::test]
#[serial]
async fn test_anyhow_handler_errors_convert_into_seed_error() {
  setup_tracing();
  let mut pipeline = Pipeline::<TestContext, SeedError>::new(&[("task", false, None)]);

  pipeline.on_root("task", |_ctx: ContextData<TestContext>| async move {
    Err::<PipelineControl, anyhow::Error>(anyhow::anyhow!("users endpoint returned garbage"))
  });

  match pipeline.run(ContextData::new(TestContext::default())).await {
    Err(SeedError::HandlerError { source }) => assert_eq!(source.to_string(), "users endpoint returned garbage"),
    other => panic!("Expected HandlerError, got {:?}", other),
  }
}

#[tokio::test]
#[serial]
async fn test_handler_missing_surfaces_as_seed_error() {
  setup_tracing();
  let pipeline = Pipeline::<TestContext, SeedError>::new(&[("missing", false, None)]);
  match pipeline.run(ContextData::new(TestContext::default())).await {
    Err(SeedError::HandlerMissing { step_name }) => assert_eq!(step_name, "missing"),
    other => panic!("Expected HandlerMissing, got {:?}", other),
  }
}

#[test]
fn test_config_errors_have_no_remediation_hint() {
  let err = SeedError::Config("bad".to_string());
  assert!(err.remediation().is_none());
  assert_eq!(err.to_string(), "Invalid seeding configuration: bad");
}
