//! Command line front end for `wordsearch_solver`.
//!
//! - `wordsearch -l words.txt` - list all words on the default board
//! - `wordsearch -l words.txt -b "E E C A A L E P H N B O Q T T Y" find ace peal`
//! - `wordsearch -l words.txt -r 5 --seed 7 score leap lea`
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordsearch_solver::{Board, Config, Game, DEFAULT_MAX_BOARD_SIZE};

/// Find and score the words on a square board of letter tiles
#[derive(Parser)]
#[command(name = "wordsearch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Lexicon file with whitespace separated words
    #[arg(short, long)]
    lexicon: String,

    /// Board tiles in row-major order, separated by spaces
    #[arg(short, long, conflicts_with = "random")]
    board: Option<String>,

    /// Play on a random board with this many squares along a side
    #[arg(short, long)]
    random: Option<usize>,

    /// Seed for the random board
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Minimum word length
    #[arg(short, long)]
    min: Option<usize>,

    /// Largest accepted board size
    #[arg(long, default_value_t = DEFAULT_MAX_BOARD_SIZE)]
    max_board_size: usize,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List all words on the board with the total score
    Solve,
    /// Show the path of each word on the board
    Find { words: Vec<String> },
    /// Score the given words
    Score { words: Vec<String> },
    /// Print every word in the lexicon
    Dump,
}

fn board_tiles(cli: &Cli, max_board_size: usize) -> Result<Option<Vec<String>>> {
    if let Some(board) = &cli.board {
        let board: Board = board.parse().context("invalid --board")?;
        return Ok(Some(board.tiles().to_vec()));
    }
    if let Some(size) = cli.random {
        let mut rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let board = Board::random_with_max_size(size, max_board_size, &mut rng)
            .context("invalid --random")?;
        return Ok(Some(board.tiles().to_vec()));
    }
    Ok(None)
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::new().with_max_board_size(cli.max_board_size);
    if let Some(min) = cli.min {
        config = config.with_minimum_word_length(min);
    }
    let mut game = Game::new(config)?.with_lexicon_from_file(&cli.lexicon)?;
    if let Some(tiles) = board_tiles(&cli, cli.max_board_size)? {
        game.set_board(&tiles)?;
    }
    let min = game.config().minimum_word_length;
    println!("{}\n", game);

    match cli.command.unwrap_or(Command::Solve) {
        Command::Solve => {
            let words = game.all_scorable_words(min)?;
            for word in &words {
                println!("{}", word);
            }
            let score = game.score_for_words(&words, min)?;
            info!(count = words.len(), score, "board solved");
            println!("\n{} words, {} points", words.len(), score);
        }
        Command::Find { words } => {
            for word in &words {
                let path = game.is_on_board(word)?;
                if path.is_empty() {
                    println!("{}: not found", word);
                } else {
                    let coordinates: Vec<String> = path
                        .iter()
                        .map(|&p| {
                            let (row, col) = game.board().coordinates(p);
                            format!("({},{})", row, col)
                        })
                        .collect();
                    println!("{}: {}", word, coordinates.join(" "));
                }
            }
        }
        Command::Score { words } => {
            println!("{}", game.score_for_words(&words, min)?);
        }
        Command::Dump => {
            for word in game.lexicon()?.words() {
                println!("{}", word);
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli)
}
