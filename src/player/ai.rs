#![cfg(feature = "std")]

use std::string::{String, ToString};
use std::vec::Vec;

use rand::seq::SliceRandom;
use rand::Rng;

use super::Player;
use crate::coord::Coord;

/// Computer shooter: fires at every cell exactly once, in a random order.
pub struct RandomPlayer {
    targets: Vec<Coord>,
}

impl RandomPlayer {
    pub fn new<R: Rng>(rng: &mut R, size: usize) -> Self {
        let mut targets: Vec<Coord> = (0..size)
            .flat_map(|r| (0..size).map(move |c| Coord::new(r, c)))
            .collect();
        targets.shuffle(rng);
        Self { targets }
    }

    /// Cells not fired at yet.
    pub fn remaining(&self) -> usize {
        self.targets.len()
    }
}

impl Player for RandomPlayer {
    fn next_input(&mut self) -> anyhow::Result<Option<String>> {
        Ok(self.targets.pop().map(|c| c.to_string()))
    }

    fn echo_input(&self) -> bool {
        true
    }
}
