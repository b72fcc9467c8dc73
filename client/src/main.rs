mod analyze;
mod config;
mod play;
mod render;
mod self_play;

use clap::{Parser, Subcommand};
use std::time::Duration;
use tictactoe_engine::config::Validate;
use tictactoe_engine::tictactoe::{Board, Difficulty, Mark};
use tictactoe_engine::{SessionRng, log, logger};

use config::{ClientConfig, get_config_manager};
use play::PlaySettings;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe against a computer opponent")]
struct Args {
    /// Config file path; defaults to a file next to the executable
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play interactively on the terminal
    Play {
        #[arg(long)]
        difficulty: Option<Difficulty>,
        #[arg(long)]
        mark: Option<Mark>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        delay_ms: Option<u64>,
    },
    /// Let two bots play each other from an empty board
    SelfPlay {
        #[arg(long = "x", default_value = "hard")]
        x_difficulty: Difficulty,
        #[arg(long = "o", default_value = "hard")]
        o_difficulty: Difficulty,
        #[arg(long, default_value_t = 10)]
        games: u32,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print winner, free cells and minimax scores for a board like "XX.OO...."
    Analyze {
        board: Board,
        /// Side to score; defaults to the side to move
        #[arg(long)]
        mark: Option<Mark>,
    },
}

fn session_rng(seed: Option<u64>) -> SessionRng {
    let rng = match seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed: {}", rng.seed());
    rng
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(args.config.as_deref());
    let config = config_manager.get_config().unwrap_or_else(|err| {
        log!("Failed to load config, using defaults: {}", err);
        ClientConfig::default()
    });

    match args.command {
        Command::Play {
            difficulty,
            mark,
            seed,
            delay_ms,
        } => {
            let updated = ClientConfig {
                difficulty: difficulty.unwrap_or(config.difficulty),
                player_mark: mark.unwrap_or(config.player_mark),
                bot_delay_ms: delay_ms.unwrap_or(config.bot_delay_ms),
                seed: config.seed,
            };
            updated.validate()?;

            if updated != config
                && let Err(err) = config_manager.set_config(&updated)
            {
                log!("Failed to save config: {}", err);
            }

            let settings = PlaySettings {
                difficulty: updated.difficulty,
                player_mark: updated.player_mark,
                bot_delay: Duration::from_millis(updated.bot_delay_ms),
            };
            let mut rng = session_rng(seed.or(updated.seed));
            log!(
                "Starting game: player {} vs {} bot",
                settings.player_mark,
                settings.difficulty
            );

            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            let stats = play::run(stdin.lock(), &mut stdout, &settings, &mut rng)?;
            log!("Session finished after {} games. {}", stats.total(), stats);
        }
        Command::SelfPlay {
            x_difficulty,
            o_difficulty,
            games,
            seed,
        } => {
            let mut rng = session_rng(seed.or(config.seed));
            let tally = self_play::run_self_play(x_difficulty, o_difficulty, games, &mut rng)?;
            log!(
                "Self-play {} (X) vs {} (O), {} games: {}",
                x_difficulty,
                o_difficulty,
                games,
                tally
            );
            println!("{}", tally);
        }
        Command::Analyze { board, mark } => {
            let analysis = analyze::analyze(&board, mark)?;
            analyze::write_report(&analysis, &mut std::io::stdout())?;
        }
    }

    Ok(())
}
