#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use salvo::{init_logging, Board, CliPlayer, GameConfig, GameLoop, RandomPlayer};

#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Hunt the hidden fleet from the keyboard.
    Play {
        #[command(flatten)]
        game: GameArgs,
        #[arg(long, help = "Show unshot ships on the board")]
        debug: bool,
    },
    /// Let the computer fire at random and report the result as JSON.
    Sim {
        #[command(flatten)]
        game: GameArgs,
        #[arg(long, help = "Only print the JSON summary")]
        quiet: bool,
    },
}

#[derive(Args, Clone, Debug)]
#[cfg(feature = "std")]
struct GameArgs {
    #[arg(long, default_value_t = salvo::GRID_SIZE, help = "Rows and columns of the grid (1-10)")]
    size: usize,
    #[arg(long, default_value_t = salvo::NUM_SHIPS)]
    ships: usize,
    #[arg(long, default_value_t = salvo::NUM_SHOTS, help = "Bullets available")]
    shots: usize,
    #[arg(long, default_value_t = salvo::MIN_SHIP_LEN)]
    min_len: usize,
    #[arg(long, default_value_t = salvo::MAX_SHIP_LEN)]
    max_len: usize,
    #[arg(long, default_value_t = salvo::MAX_PLACEMENT_ATTEMPTS, help = "Random placement attempts per ship")]
    max_attempts: usize,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
impl GameArgs {
    fn config(&self) -> GameConfig {
        GameConfig {
            grid_size: self.size,
            num_ships: self.ships,
            num_shots: self.shots,
            min_ship_len: self.min_len,
            max_ship_len: self.max_len,
            max_placement_attempts: self.max_attempts,
        }
    }

    fn rng(&self) -> SmallRng {
        match self.seed {
            Some(s) => SmallRng::seed_from_u64(s),
            None => {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            }
        }
    }

    /// Validated board with the whole fleet hidden on it.
    fn board(&self, rng: &mut SmallRng) -> anyhow::Result<Board> {
        let config = self.config();
        let mut board = Board::new(&config).map_err(|e| anyhow::anyhow!(e))?;
        board
            .auto_place_ships(rng, config.num_ships)
            .map_err(|e| anyhow::anyhow!(e))?;
        Ok(board)
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { game, debug } => {
            let mut rng = game.rng();
            let board = game.board(&mut rng)?;
            let stdin = std::io::stdin();
            let player = CliPlayer::new(stdin.lock());
            let mut game_loop = GameLoop::new(board, player, std::io::stdout(), debug)
                .map_err(|e| anyhow::anyhow!(e))?;
            game_loop.run()?;
        }
        Commands::Sim { game, quiet } => {
            if let Some(s) = game.seed {
                log::info!("using fixed seed {}", s);
            }
            let mut rng = game.rng();
            let board = game.board(&mut rng)?;
            let player = RandomPlayer::new(&mut rng, board.size());
            let summary = if quiet {
                GameLoop::new(board, player, std::io::sink(), false)
                    .map_err(|e| anyhow::anyhow!(e))?
                    .run()?
            } else {
                GameLoop::new(board, player, std::io::stdout(), false)
                    .map_err(|e| anyhow::anyhow!(e))?
                    .run()?
            };
            println!("{}", serde_json::to_string(&summary)?);
        }
    }
    Ok(())
}
