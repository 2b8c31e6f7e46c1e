//! blockfall (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` so the binary, the
//! integration tests and the benches can use one `blockfall::{..}` path.

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
