//! Stack Tower (workspace facade crate).
//!
//! This package keeps a stable `stack_tower::{core,engine,store,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use stack_tower_core as core;
pub use stack_tower_engine as engine;
pub use stack_tower_store as store;
pub use stack_tower_types as types;
