//! Turn loop driving a single-player game from input to game over.

#![cfg(feature = "std")]

use std::io::Write;

use anyhow::{anyhow, bail};

use crate::{
    board::Board,
    common::{BoardError, GameStatus, ShotResult},
    coord::{self, Coord},
    player::Player,
    render,
};

const SEPARATOR: &str = "----------------------------";

pub const MSG_WELCOME: &str = "-----Welcome to Battleships-----";
pub const MSG_MISSED: &str = "You missed, no ship was shot";
pub const MSG_HIT: &str = "You hit! A ship was shot";
pub const MSG_SUNK: &str = "You hit! A ship was completely sunk!";
pub const MSG_WON: &str = "Congrats you won!";
pub const MSG_LOST: &str = "Sorry, you lost! You ran out of bullets, try again next time!";

/// Player-facing text for a shot outcome.
pub fn outcome_message(result: ShotResult) -> &'static str {
    match result {
        ShotResult::Missed => MSG_MISSED,
        ShotResult::Hit => MSG_HIT,
        ShotResult::HitAndSunk => MSG_SUNK,
    }
}

/// States of the turn loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a valid, not yet shot coordinate.
    AwaitingInput,
    /// Firing at the chosen coordinate.
    Resolving(Coord),
    /// Reporting the outcome and redrawing the board.
    Rendering(ShotResult),
    /// Deciding whether the game is over.
    CheckEnd,
    /// Game finished; no further transitions.
    Terminated(GameStatus),
}

/// Final tally of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize)]
pub struct GameSummary {
    pub outcome: GameStatus,
    pub shots_fired: usize,
    pub shots_remaining: usize,
    pub ships_sunk: usize,
    pub total_ships: usize,
}

/// Controller tying a [`Board`], an input [`Player`] and an output sink together.
pub struct GameLoop<P, W> {
    board: Board,
    player: P,
    out: W,
    reveal_ships: bool,
    phase: Phase,
    started: bool,
}

impl<P: Player, W: Write> GameLoop<P, W> {
    /// `reveal_ships` draws unshot ships (debug view); players normally see fog of war.
    ///
    /// The board must carry its whole fleet, otherwise the game could never be won.
    pub fn new(board: Board, player: P, out: W, reveal_ships: bool) -> Result<Self, BoardError> {
        if !board.is_ready() {
            return Err(BoardError::FleetIncomplete {
                placed: board.placements().len(),
                total: board.total_ships(),
            });
        }
        Ok(Self {
            board,
            player,
            out,
            reveal_ships,
            phase: Phase::AwaitingInput,
            started: false,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn into_parts(self) -> (Board, P, W) {
        (self.board, self.player, self.out)
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            outcome: self.board.status(),
            shots_fired: self.board.shots_fired(),
            shots_remaining: self.board.shots_remaining(),
            ships_sunk: self.board.ships_sunk(),
            total_ships: self.board.total_ships(),
        }
    }

    /// Print the welcome banner and the initial board. Runs once.
    pub fn start(&mut self) -> anyhow::Result<()> {
        if self.started {
            return Ok(());
        }
        self.started = true;
        log::info!(
            "game started: {} ships, {} bullets, {}x{} grid",
            self.board.total_ships(),
            self.board.shots_remaining(),
            self.board.size(),
            self.board.size()
        );
        writeln!(self.out, "{}", MSG_WELCOME)?;
        writeln!(
            self.out,
            "You have {} bullets to take down {} ships, may the battle begin!",
            self.board.config().num_shots,
            self.board.total_ships()
        )?;
        self.draw_board()
    }

    /// Advance the state machine by one transition and return the new phase.
    pub fn step(&mut self) -> anyhow::Result<Phase> {
        let phase = self.phase;
        self.phase = match phase {
            Phase::AwaitingInput => self.await_input()?,
            Phase::Resolving(target) => {
                let result = self
                    .board
                    .apply_shot(target.row, target.col)
                    .map_err(|e| anyhow!(e))?;
                Phase::Rendering(result)
            }
            Phase::Rendering(result) => {
                writeln!(self.out)?;
                writeln!(self.out, "{}", SEPARATOR)?;
                writeln!(self.out, "{}", outcome_message(result))?;
                self.draw_board()?;
                writeln!(self.out, "{}", SEPARATOR)?;
                writeln!(self.out)?;
                Phase::CheckEnd
            }
            Phase::CheckEnd => match self.board.status() {
                GameStatus::InProgress => Phase::AwaitingInput,
                status => {
                    let msg = if status == GameStatus::Won { MSG_WON } else { MSG_LOST };
                    writeln!(self.out, "{}", msg)?;
                    log::info!("game over: {:?} after {} shots", status, self.board.shots_fired());
                    Phase::Terminated(status)
                }
            },
            terminated @ Phase::Terminated(_) => terminated,
        };
        Ok(self.phase)
    }

    /// Play until the game ends.
    pub fn run(&mut self) -> anyhow::Result<GameSummary> {
        self.start()?;
        while !matches!(self.phase, Phase::Terminated(_)) {
            self.step()?;
        }
        self.out.flush()?;
        Ok(self.summary())
    }

    fn await_input(&mut self) -> anyhow::Result<Phase> {
        write!(self.out, "{}", coord::prompt(self.board.size()))?;
        self.out.flush()?;
        let Some(line) = self.player.next_input()? else {
            bail!("input closed before the game finished");
        };
        if self.player.echo_input() {
            writeln!(self.out, "{}", line)?;
        }
        let target = match coord::parse_coord(&line, self.board.size()) {
            Ok(target) => target,
            Err(e) => {
                writeln!(self.out, "{}", e)?;
                return Ok(Phase::AwaitingInput);
            }
        };
        match self.board.check_target(target.row, target.col) {
            Ok(()) => Ok(Phase::Resolving(target)),
            Err(e @ BoardError::AlreadyShot { .. }) => {
                writeln!(self.out, "{}", e)?;
                Ok(Phase::AwaitingInput)
            }
            Err(e) => Err(anyhow!(e)),
        }
    }

    fn draw_board(&mut self) -> anyhow::Result<()> {
        for line in render::render(self.board.grid(), self.reveal_ships) {
            writeln!(self.out, "{}", line)?;
        }
        for line in render::status_lines(&self.board) {
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }
}
