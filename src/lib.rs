//! Grid-loop scaffold (workspace facade crate).
//!
//! This package exposes the public `gridloop::{core,engine,types}` API while
//! the implementation lives in dedicated crates under `crates/`.

pub use gridloop_core as core;
pub use gridloop_engine as engine;
pub use gridloop_types as types;
