//! Input sources that feed shot tokens to the game loop.
//!
//! - [`CliPlayer`]: a human typing lines on any `BufRead` (stdin in the binary)
//! - [`RandomPlayer`]: a computer shooter that tries every cell once in random order

#![cfg(feature = "std")]

use std::string::String;

/// Line-based source of shot tokens such as `A3`.
pub trait Player {
    /// Next raw line of input, without the trailing newline.
    /// `Ok(None)` means the source is exhausted.
    fn next_input(&mut self) -> anyhow::Result<Option<String>>;

    /// Whether the loop should echo the input after the prompt, for sources
    /// that do not type into the terminal themselves.
    fn echo_input(&self) -> bool {
        false
    }
}

pub mod ai;
pub use ai::RandomPlayer;

pub mod cli;
pub use cli::CliPlayer;
