//! tetrafall (workspace facade crate).
//!
//! Re-exports the workspace crates as `tetrafall::{core,input,term,types}`;
//! the implementation lives in dedicated crates under `crates/`.

pub use tetrafall_core as core;
pub use tetrafall_input as input;
pub use tetrafall_term as term;
pub use tetrafall_types as types;
