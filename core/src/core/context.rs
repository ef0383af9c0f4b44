// catalog_seed/src/core/context.rs

//! The boxed handler type stored by a pipeline for each step phase.

use crate::core::context_data::ContextData;
use crate::core::control::PipelineControl;
use std::future::Future;
use std::pin::Pin;

/// A step handler: receives a clone of the shared `ContextData<TData>` and
/// resolves to a flow signal or the pipeline's error type.
///
/// Handlers must release their lock guards before awaiting; the seeding steps
/// copy ids and config out of the run state, do their HTTP work, then take a
/// fresh write guard to store results.
pub type Handler<TData, Err> = Box<
  dyn Fn(ContextData<TData>) -> Pin<Box<dyn Future<Output = Result<PipelineControl, Err>> + Send>>
    + Send
    + Sync,
>;
