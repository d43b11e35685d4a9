//! Deterministic Snake engine on a fixed 20×20 grid, plus the terminal
//! collaborators (input mapping, tick scheduling, rendering, high scores)
//! used by the `grid-snake` binary.

pub mod config;
pub mod direction;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod scheduler;
pub mod score;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
