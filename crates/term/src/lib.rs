//! Terminal rendering layer.
//!
//! Turns a core [`core::GameSnapshot`] into a framebuffer of characters and
//! flushes that framebuffer to the real terminal. Only the renderer touches
//! the terminal; everything else here is pure and unit-tested.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tty_tetris_core as core;
pub use tty_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Layout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
