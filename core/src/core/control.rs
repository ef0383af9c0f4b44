// catalog_seed/src/core/control.rs

//! Flow signals returned by step handlers and the outcome of a pipeline run.

/// Signal from a handler telling the pipeline whether to go on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineControl {
  /// Proceed with the remaining handlers and steps.
  Continue,
  /// Halt the run without an error. Later steps are not executed.
  Stop,
}

/// Outcome of a pipeline run that did not error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineResult {
  /// Every non-skipped step ran.
  Completed,
  /// A handler returned `PipelineControl::Stop`.
  Stopped,
}
