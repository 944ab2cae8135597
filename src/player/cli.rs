#![cfg(feature = "std")]

use std::io::BufRead;
use std::string::String;

use super::Player;

/// Human player reading one token per line.
pub struct CliPlayer<B> {
    input: B,
}

impl<B: BufRead> CliPlayer<B> {
    pub fn new(input: B) -> Self {
        Self { input }
    }
}

impl<B: BufRead> Player for CliPlayer<B> {
    fn next_input(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
