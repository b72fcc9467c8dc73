use std::io::{self, BufRead, Write};
use std::time::Duration;

use tictactoe_engine::{EngineError, log};
use tictactoe_engine::session_rng::MoveRandom;
use tictactoe_engine::tictactoe::{
    CELL_COUNT, Difficulty, GameOutcome, GameStats, Mark, TicTacToeGameState,
};

use crate::render::render_board;

const HELP: &str = "\
Commands:
  1-9                 place your mark (cells are numbered left to right, top to bottom)
  undo                take back your last move and the bot's reply
  peek                show where the bot would play now
  reset               start a new game
  difficulty <level>  switch to easy, medium or hard (restarts the game)
  stats               show wins, draws and losses
  help                show this list
  quit                leave";

pub struct PlaySettings {
    pub difficulty: Difficulty,
    pub player_mark: Mark,
    pub bot_delay: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlayerCommand {
    Cell(usize),
    Undo,
    Peek,
    Reset,
    Difficulty(Difficulty),
    Stats,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<PlayerCommand> {
    let mut words = line.split_whitespace();
    let command = match words.next()?.to_ascii_lowercase().as_str() {
        "undo" | "u" => PlayerCommand::Undo,
        "peek" | "p" => PlayerCommand::Peek,
        "reset" | "r" => PlayerCommand::Reset,
        "stats" | "s" => PlayerCommand::Stats,
        "help" | "h" | "?" => PlayerCommand::Help,
        "quit" | "q" | "exit" => PlayerCommand::Quit,
        "difficulty" | "d" => PlayerCommand::Difficulty(words.next()?.parse().ok()?),
        number => {
            let cell: usize = number.parse().ok()?;
            if !(1..=CELL_COUNT).contains(&cell) {
                return None;
            }
            PlayerCommand::Cell(cell - 1)
        }
    };
    if words.next().is_some() {
        return None;
    }
    Some(command)
}

fn outcome_message(outcome: GameOutcome) -> &'static str {
    match outcome {
        GameOutcome::Win => "You won!",
        GameOutcome::Loss => "The bot wins.",
        GameOutcome::Draw => "It's a draw.",
    }
}

/// Interactive game loop. Returns the tally once input ends or the player quits.
pub fn run<R, W, M>(
    input: R,
    output: &mut W,
    settings: &PlaySettings,
    rng: &mut M,
) -> io::Result<GameStats>
where
    R: BufRead,
    W: Write,
    M: MoveRandom + ?Sized,
{
    let mut state = TicTacToeGameState::new(settings.player_mark, settings.difficulty);
    let mut stats = GameStats::default();

    writeln!(
        output,
        "You play {} against the {} bot ({}). You move first. Type 'help' for commands.",
        state.player_mark(),
        state.difficulty(),
        state.bot_mark()
    )?;
    write!(output, "{}", render_board(state.board(), &[]))?;
    write!(output, "> ")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(output, "> ")?;
            output.flush()?;
            continue;
        }

        let Some(command) = parse_command(&line) else {
            writeln!(output, "Unknown command '{}'. Type 'help' for commands.", line.trim())?;
            write!(output, "> ")?;
            output.flush()?;
            continue;
        };

        match command {
            PlayerCommand::Quit => break,
            PlayerCommand::Help => writeln!(output, "{}", HELP)?,
            PlayerCommand::Stats => writeln!(output, "{}", stats)?,
            PlayerCommand::Reset => {
                state.reset();
                writeln!(output, "New game.")?;
                write!(output, "{}", render_board(state.board(), &[]))?;
            }
            PlayerCommand::Difficulty(difficulty) => {
                state.set_difficulty(difficulty);
                log!("Difficulty switched to {}", difficulty);
                writeln!(output, "Difficulty set to {}. New game.", difficulty)?;
                write!(output, "{}", render_board(state.board(), &[]))?;
            }
            PlayerCommand::Undo => match state.undo() {
                Ok(()) => {
                    writeln!(output, "Move taken back.")?;
                    write!(output, "{}", render_board(state.board(), &[]))?;
                }
                Err(err) => writeln!(output, "Cannot undo: {}", err)?,
            },
            PlayerCommand::Peek => match state.peek_bot_move(rng) {
                Ok(index) => {
                    writeln!(output, "The bot would play {}.", index + 1)?;
                    write!(output, "{}", render_board(state.board(), &[index]))?;
                }
                Err(err) => writeln!(output, "Nothing to show: {}", err)?,
            },
            PlayerCommand::Cell(index) => {
                if !state.is_player_turn() {
                    state.reset();
                    writeln!(output, "New game.")?;
                }
                play_round(&mut state, &mut stats, index, output, settings, rng)?;
            }
        }

        write!(output, "> ")?;
        output.flush()?;
    }

    Ok(stats)
}

fn play_round<W, M>(
    state: &mut TicTacToeGameState,
    stats: &mut GameStats,
    index: usize,
    output: &mut W,
    settings: &PlaySettings,
    rng: &mut M,
) -> io::Result<()>
where
    W: Write,
    M: MoveRandom + ?Sized,
{
    let status = match state.place_mark(index) {
        Ok(status) => status,
        Err(EngineError::CellOccupied { .. }) => {
            writeln!(output, "Cell {} is already taken.", index + 1)?;
            return Ok(());
        }
        Err(err) => {
            writeln!(output, "Invalid move: {}", err)?;
            return Ok(());
        }
    };

    if !status.is_over() {
        if !settings.bot_delay.is_zero() {
            std::thread::sleep(settings.bot_delay);
        }
        match state.play_bot_move(rng) {
            Ok(bot_index) => writeln!(output, "Bot plays {}.", bot_index + 1)?,
            Err(err) => writeln!(output, "Bot could not move: {}", err)?,
        }
    }

    let line = state.winning_line();
    let highlight: &[usize] = match &line {
        Some(line) => &line.cells,
        None => &[],
    };
    write!(output, "{}", render_board(state.board(), highlight))?;

    if let Some(outcome) = state.outcome() {
        stats.record(outcome);
        log!("Game over ({}): {:?} on {}", state.difficulty(), outcome, state.board());
        writeln!(output, "{} {}", outcome_message(outcome), stats)?;
        writeln!(output, "Type a cell number or 'reset' to play again.")?;
    }
    Ok(())
}
