//! tty-tetris (workspace facade crate).
//!
//! Re-exports the workspace crates as `tty_tetris::{core, input, term, types}`
//! so the binary, the integration tests and the benches share one import path.

pub use tty_tetris_core as core;
pub use tty_tetris_input as input;
pub use tty_tetris_term as term;
pub use tty_tetris_types as types;
