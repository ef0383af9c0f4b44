// catalog_seed/src/pipeline/mod.rs

//! A small ordered-step runner: named steps, each with `before`/`on`/`after`
//! handlers over a shared `ContextData<TData>`.

pub mod definition;
pub mod execution;
pub mod hooks;

pub use definition::Pipeline;
