#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod board;
mod common;
mod config;
mod coord;
#[cfg(feature = "std")]
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod player;
pub mod render;
mod ship;

pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::*;
#[cfg(feature = "std")]
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
#[cfg(feature = "std")]
pub use player::{CliPlayer, Player, RandomPlayer};
pub use render::{render, status_lines};
pub use ship::*;
